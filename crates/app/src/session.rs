//! Interactive menu session.
//!
//! A session owns one [`MenuCatalog`] for its whole lifetime plus, while the
//! user is managing the menu, a draft catalog that replaces it on `save`.
//! Commands are read one line at a time and every command produces exactly
//! one [`Reply`].

use std::io::{BufRead, Write};

use engine::{DishFilter, MenuCatalog, SortKey};

use crate::{
    commands::{Command, ParseError, USAGE, parse_command},
    config::AppConfig,
    error::Result,
    ui::{self, Reply},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub(crate) struct Session<R, W> {
    input: R,
    output: W,
    menu: MenuCatalog,
    draft: Option<MenuCatalog>,
    confirm_removals: bool,
    json: bool,
    prompt: String,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub(crate) fn new(input: R, output: W, config: &AppConfig) -> Self {
        Self {
            input,
            output,
            menu: MenuCatalog::new(),
            draft: None,
            confirm_removals: config.confirm_removals,
            json: config.json,
            prompt: config.prompt.clone(),
        }
    }

    pub(crate) fn menu(&self) -> &MenuCatalog {
        &self.menu
    }

    /// Reads commands until `quit` or end of input.
    pub(crate) fn run(&mut self) -> Result<()> {
        loop {
            self.write_prompt()?;
            let Some(line) = self.read_line()? else {
                break;
            };

            let command = match parse_command(&line) {
                Ok(command) => command,
                Err(ParseError::Empty) => continue,
                Err(err) => {
                    tracing::debug!("rejected input {line:?}: {err}");
                    self.emit(&Reply::failure(err.to_string()))?;
                    continue;
                }
            };

            let (reply, flow) = self.execute(command)?;
            self.emit(&reply)?;
            if flow == Flow::Quit {
                break;
            }
        }

        if self.draft.is_some() {
            tracing::warn!("session ended with an unsaved draft");
        }
        Ok(())
    }

    fn editing(&mut self) -> &mut MenuCatalog {
        self.draft.as_mut().unwrap_or(&mut self.menu)
    }

    fn viewing(&self) -> &MenuCatalog {
        self.draft.as_ref().unwrap_or(&self.menu)
    }

    fn execute(&mut self, command: Command) -> Result<(Reply, Flow)> {
        let reply = match command {
            Command::Add(candidate) => match self.editing().add(&candidate) {
                Ok(dish) => Reply::message(ui::added(&dish)),
                Err(err) => Reply::failure(ui::engine_error(&err)),
            },
            Command::Remove(name) => {
                let count = self.editing().remove_by_name(&name);
                ui::removed_by_name(&name, count)
            }
            Command::RemoveAt(index) => self.remove_at(index)?,
            Command::List => {
                let catalog = self.viewing();
                let title = if self.draft.is_some() {
                    format!("Draft ({} items)", catalog.count())
                } else {
                    format!("Menu ({} items)", catalog.count())
                };
                Reply::dishes(title, catalog, true)
            }
            Command::Filter { course, max_price } => {
                match DishFilter::parse(&course, &max_price) {
                    Ok(filter) => {
                        Reply::dishes("Filtered menu", self.viewing().filter(filter), false)
                    }
                    Err(err) => Reply::failure(ui::engine_error(&err)),
                }
            }
            Command::Sort(key) => match key.parse::<SortKey>() {
                Ok(key) => {
                    let title = match key {
                        SortKey::Name => "Sorted by name",
                        SortKey::Price => "Sorted by price",
                    };
                    Reply::dishes(title, self.viewing().sorted_view(key), false)
                }
                Err(err) => Reply::failure(ui::engine_error(&err)),
            },
            Command::Top => ui::most_expensive(self.viewing().most_expensive()),
            Command::Count => Reply::message(format!(
                "Total menu items: {}",
                self.viewing().count()
            )),
            Command::Manage => {
                if self.draft.is_some() {
                    Reply::failure("A draft is already open.")
                } else {
                    self.draft = Some(MenuCatalog::new());
                    Reply::message("Editing a new draft. Use save to apply it or discard to drop it.")
                }
            }
            Command::Save => match self.draft.take() {
                None => Reply::failure("No draft is open."),
                Some(draft) => match self.menu.commit_draft(draft.clone()) {
                    Ok(count) => {
                        tracing::info!(count, "draft saved");
                        Reply::message(format!("Menu saved with {count} items."))
                    }
                    Err(err) => {
                        self.draft = Some(draft);
                        Reply::failure(ui::engine_error(&err))
                    }
                },
            },
            Command::Discard => match self.draft.take() {
                None => Reply::failure("No draft is open."),
                Some(_) => Reply::message("Draft discarded."),
            },
            Command::Help => Reply::message(USAGE),
            Command::Quit => return Ok((Reply::message("Bye."), Flow::Quit)),
        };
        Ok((reply, Flow::Continue))
    }

    fn remove_at(&mut self, index: i64) -> Result<Reply> {
        let len = self.viewing().count();
        let Some(position) = usize::try_from(index).ok().filter(|&i| i < len) else {
            return Ok(Reply::failure(ui::out_of_range(index, len)));
        };

        if self.confirm_removals {
            let name = self
                .viewing()
                .get(position)
                .map(|dish| dish.name().to_string())
                .unwrap_or_default();
            if !self.confirm(&format!("Are you sure you want to remove {name}? [y/N] "))? {
                return Ok(Reply::message("Removal cancelled."));
            }
        }

        Ok(match self.editing().remove_at(position) {
            Ok(dish) => Reply::message(format!("{} has been removed.", dish.name())),
            Err(err) => Reply::failure(ui::engine_error(&err)),
        })
    }

    fn confirm(&mut self, question: &str) -> Result<bool> {
        if self.json {
            self.emit(&Reply::message(question.trim_end()))?;
        } else {
            write!(self.output, "{question}")?;
            self.output.flush()?;
        }
        let answer = self.read_line()?.unwrap_or_default();
        Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn write_prompt(&mut self) -> Result<()> {
        if self.json {
            return Ok(());
        }
        if self.draft.is_some() {
            write!(self.output, "[draft] ")?;
        }
        write!(self.output, "{}", self.prompt)?;
        self.output.flush()?;
        Ok(())
    }

    fn emit(&mut self, reply: &Reply) -> Result<()> {
        if self.json {
            serde_json::to_writer(&mut self.output, reply)?;
            writeln!(self.output)?;
        } else {
            write!(self.output, "{}", reply.render_text())?;
        }
        self.output.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn run(script: &str, config: AppConfig) -> (String, MenuCatalog) {
        let mut output = Vec::new();
        let mut session = Session::new(Cursor::new(script.to_string()), &mut output, &config);
        session.run().unwrap();
        let menu = session.menu().clone();
        drop(session);
        (String::from_utf8(output).unwrap(), menu)
    }

    fn quiet() -> AppConfig {
        AppConfig {
            prompt: String::new(),
            ..AppConfig::default()
        }
    }

    #[test]
    fn add_and_list() {
        let (out, menu) = run(
            "add Soup | Hot | Starter | 25\nadd Pie | Sweet | Dessert | 12.5\nlist\n",
            quiet(),
        );
        assert_eq!(menu.count(), 2);
        assert!(out.contains("Soup has been added to the menu!"));
        assert!(out.contains("Menu (2 items)"));
        assert!(out.contains("  0. Soup [Starter] 25.00 : Hot"));
        assert!(out.contains("  1. Pie [Dessert] 12.50 : Sweet"));
    }

    #[test]
    fn invalid_input_keeps_session_alive() {
        let (out, menu) = run(
            "add | x | Main | 10\nadd Chips | Salty | Snack | 3\nbogus\ncount\n",
            quiet(),
        );
        assert_eq!(menu.count(), 0);
        assert!(out.contains("All fields are required (missing name)."));
        assert!(out.contains("Course must be one of: Starter, Main, Dessert."));
        assert!(out.contains("unknown command \"bogus\""));
        assert!(out.contains("Total menu items: 0"));
    }

    #[test]
    fn remove_at_asks_for_confirmation() {
        let (out, menu) = run(
            "add Soup | Hot | Starter | 25\nremove-at 0\nn\nremove-at 0\ny\n",
            quiet(),
        );
        assert!(out.contains("Are you sure you want to remove Soup? [y/N] "));
        assert!(out.contains("Removal cancelled."));
        assert!(out.contains("Soup has been removed."));
        assert!(menu.is_empty());
    }

    #[test]
    fn remove_at_rejects_bad_positions_without_asking() {
        let (out, menu) = run(
            "add Soup | Hot | Starter | 25\nremove-at 1\nremove-at -1\n",
            quiet(),
        );
        assert_eq!(menu.count(), 1);
        assert!(out.contains("There is no dish at position 1 (the menu has 1)."));
        assert!(out.contains("There is no dish at position -1 (the menu has 1)."));
        assert!(!out.contains("Are you sure"));
    }

    #[test]
    fn remove_at_without_confirmation() {
        let config = AppConfig {
            confirm_removals: false,
            ..quiet()
        };
        let (_, menu) = run("add Soup | Hot | Starter | 25\nremove-at 0\n", config);
        assert!(menu.is_empty());
    }

    #[test]
    fn queries_use_views() {
        let (out, menu) = run(
            "add B | x | Main | 20\nadd A | y | Starter | 10\nadd C | z | Main | 20\n\
             sort price\nfilter Main 15\nfilter Snack\ntop\n",
            quiet(),
        );
        assert_eq!(
            menu.iter().map(|d| d.name()).collect::<Vec<_>>(),
            vec!["B", "A", "C"]
        );
        assert!(out.contains("Sorted by price\n  - A [Starter] 10.00 : y\n  - B [Main] 20.00 : x\n  - C [Main] 20.00 : z\n"));
        assert!(out.contains("Filtered menu\n  (no dishes)\n"));
        assert!(out.contains("Course filter must be All or one of"));
        assert!(out.contains("Most expensive dish: B (20.00)"));
    }

    #[test]
    fn draft_replaces_menu_on_save() {
        let (out, menu) = run(
            "add Soup | Hot | Starter | 25\nmanage\nsave\nadd Steak | Rare | Main | 30\n\
             list\nsave\nlist\n",
            quiet(),
        );
        assert!(out.contains("Please add at least one item before saving."));
        assert!(out.contains("Draft (1 items)"));
        assert!(out.contains("Menu saved with 1 items."));
        assert_eq!(
            menu.iter().map(|d| d.name()).collect::<Vec<_>>(),
            vec!["Steak"]
        );
    }

    #[test]
    fn discard_keeps_menu() {
        let (out, menu) = run(
            "add Soup | Hot | Starter | 25\nmanage\nadd Steak | Rare | Main | 30\ndiscard\nsave\n",
            quiet(),
        );
        assert!(out.contains("Draft discarded."));
        assert!(out.contains("No draft is open."));
        assert_eq!(menu.count(), 1);
    }

    #[test]
    fn quit_stops_reading() {
        let (out, menu) = run("quit\nadd Soup | Hot | Starter | 25\n", quiet());
        assert!(out.contains("Bye."));
        assert!(menu.is_empty());
    }

    #[test]
    fn json_mode_prints_one_document_per_reply() {
        let config = AppConfig {
            json: true,
            ..AppConfig::default()
        };
        let (out, _) = run("add Soup | Hot | Starter | 25\nfilter All\nremove Pie\n", config);
        let replies: Vec<serde_json::Value> = out
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(replies.len(), 3);
        assert_eq!(replies[0]["ok"], true);
        assert_eq!(replies[1]["dishes"][0]["price"], "25.00");
        assert_eq!(replies[1]["dishes"][0]["course"], "Starter");
        assert_eq!(replies[2]["ok"], false);
    }
}
