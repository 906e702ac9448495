use engine::{Course, DishRecord, EngineError};
use serde::Serialize;

/// Outcome of one command, rendered as text or JSON.
#[derive(Debug, Serialize)]
pub(crate) struct Reply {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dishes: Option<Vec<DishRecord>>,
    #[serde(skip)]
    numbered: bool,
}

impl Reply {
    pub(crate) fn message(text: impl Into<String>) -> Self {
        Self {
            ok: true,
            message: Some(text.into()),
            dishes: None,
            numbered: false,
        }
    }

    pub(crate) fn failure(text: impl Into<String>) -> Self {
        Self {
            ok: false,
            ..Self::message(text)
        }
    }

    /// A titled list of dishes. `numbered` prefixes each line with its
    /// position, which only makes sense for the catalog order.
    pub(crate) fn dishes<'a>(
        title: impl Into<String>,
        dishes: impl IntoIterator<Item = &'a DishRecord>,
        numbered: bool,
    ) -> Self {
        Self {
            ok: true,
            message: Some(title.into()),
            dishes: Some(dishes.into_iter().cloned().collect()),
            numbered,
        }
    }

    pub(crate) fn render_text(&self) -> String {
        let mut out = String::new();
        if let Some(message) = &self.message {
            out.push_str(message);
            out.push('\n');
        }
        if let Some(dishes) = &self.dishes {
            if dishes.is_empty() {
                out.push_str("  (no dishes)\n");
            }
            for (index, dish) in dishes.iter().enumerate() {
                let bullet = if self.numbered {
                    format!("{index}.")
                } else {
                    "-".to_string()
                };
                out.push_str(&format!("  {bullet} {}\n", dish_line(dish)));
            }
        }
        out
    }
}

pub(crate) fn dish_line(dish: &DishRecord) -> String {
    format!(
        "{} [{}] {} : {}",
        dish.name(),
        dish.course(),
        dish.price(),
        dish.description()
    )
}

pub(crate) fn added(dish: &DishRecord) -> String {
    format!("{} has been added to the menu!", dish.name())
}

pub(crate) fn removed_by_name(name: &str, count: usize) -> Reply {
    match count {
        0 => Reply::failure(format!("No dish named {name} on the menu.")),
        1 => Reply::message(format!("{name} has been removed.")),
        n => Reply::message(format!("Removed {n} dishes named {name}.")),
    }
}

pub(crate) fn out_of_range(index: impl std::fmt::Display, len: usize) -> String {
    format!("There is no dish at position {index} (the menu has {len}).")
}

pub(crate) fn most_expensive(dish: Option<&DishRecord>) -> Reply {
    match dish {
        Some(dish) => Reply::message(format!(
            "Most expensive dish: {} ({})",
            dish.name(),
            dish.price()
        )),
        None => Reply::message("The menu is empty."),
    }
}

fn course_list() -> String {
    Course::ALL
        .iter()
        .map(|course| course.name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// User-facing text for an engine error.
pub(crate) fn engine_error(err: &EngineError) -> String {
    match err {
        EngineError::MissingField(field) => {
            format!("All fields are required (missing {field}).")
        }
        EngineError::InvalidCourse(_) => {
            format!("Course must be one of: {}.", course_list())
        }
        EngineError::InvalidPrice(reason) => {
            format!("Please enter a valid positive price ({reason}).")
        }
        EngineError::InvalidFilterCourse(_) => {
            format!("Course filter must be All or one of: {}.", course_list())
        }
        EngineError::IndexOutOfRange { index, len } => out_of_range(index, *len),
        EngineError::InvalidSortKey(_) => "Sort by name or price.".to_string(),
        EngineError::EmptyDraft => "Please add at least one item before saving.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use engine::{Field, NewDish};

    use super::*;

    fn soup() -> DishRecord {
        NewDish::new("Soup", "Hot", "Starter", "25").validate().unwrap()
    }

    #[test]
    fn numbered_list_shows_positions() {
        let dishes = [soup()];
        let text = Reply::dishes("Menu (1 dish)", &dishes, true).render_text();
        assert_eq!(text, "Menu (1 dish)\n  0. Soup [Starter] 25.00 : Hot\n");
    }

    #[test]
    fn unnumbered_list_uses_bullets() {
        let dishes = [soup(), soup()];
        let text = Reply::dishes("Sorted by name", &dishes, false).render_text();
        assert_eq!(
            text,
            "Sorted by name\n  - Soup [Starter] 25.00 : Hot\n  - Soup [Starter] 25.00 : Hot\n"
        );
    }

    #[test]
    fn empty_list_says_so() {
        let text = Reply::dishes("Filtered menu", std::iter::empty(), false).render_text();
        assert_eq!(text, "Filtered menu\n  (no dishes)\n");
    }

    #[test]
    fn json_reply_skips_missing_parts() {
        let json = serde_json::to_value(Reply::message("done")).unwrap();
        assert_eq!(json, serde_json::json!({ "ok": true, "message": "done" }));
    }

    #[test]
    fn removal_by_name_distinguishes_no_match() {
        let reply = removed_by_name("Pie", 0);
        assert!(!reply.ok);
        assert_eq!(reply.message.as_deref(), Some("No dish named Pie on the menu."));
        assert_eq!(
            removed_by_name("Soup", 2).message.as_deref(),
            Some("Removed 2 dishes named Soup.")
        );
    }

    #[test]
    fn engine_errors_have_messages() {
        assert_eq!(
            engine_error(&EngineError::MissingField(Field::Price)),
            "All fields are required (missing price)."
        );
        assert_eq!(
            engine_error(&EngineError::InvalidCourse("Snack".to_string())),
            "Course must be one of: Starter, Main, Dessert."
        );
        assert_eq!(
            engine_error(&EngineError::IndexOutOfRange { index: 3, len: 1 }),
            "There is no dish at position 3 (the menu has 1)."
        );
    }
}
