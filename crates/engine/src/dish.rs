//! Dish records and the raw candidate they are validated from.

use serde::Serialize;

use crate::{Course, EngineError, Price, ResultEngine, error::Field};

/// A dish stored in a [`MenuCatalog`](crate::MenuCatalog).
///
/// Records are only built by [`NewDish::validate`], so every record has a
/// non-empty name and description, a known course and a price above zero.
/// Fields are read-only; editing a dish means removing it and adding a new
/// one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DishRecord {
    name: String,
    description: String,
    course: Course,
    price: Price,
}

impl DishRecord {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub const fn course(&self) -> Course {
        self.course
    }

    #[must_use]
    pub const fn price(&self) -> Price {
        self.price
    }
}

/// Raw dish fields exactly as typed by the user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewDish {
    pub name: String,
    pub description: String,
    pub course: String,
    pub price: String,
}

impl NewDish {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        course: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            course: course.into(),
            price: price.into(),
        }
    }

    /// Checks the candidate and builds the record it describes.
    ///
    /// Missing fields are reported first (in name, description, course, price
    /// order), then the course, then the price.
    pub fn validate(&self) -> ResultEngine<DishRecord> {
        let name = required(&self.name, Field::Name)?;
        let description = required(&self.description, Field::Description)?;
        let course = required(&self.course, Field::Course)?;
        let price = required(&self.price, Field::Price)?;

        let course = Course::try_from(course)?;
        let price: Price = price.parse()?;
        if price.is_zero() {
            return Err(EngineError::InvalidPrice(format!(
                "\"{}\" must be greater than zero",
                self.price.trim()
            )));
        }

        Ok(DishRecord {
            name: name.to_string(),
            description: description.to_string(),
            course,
            price,
        })
    }
}

fn required(value: &str, field: Field) -> ResultEngine<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(EngineError::MissingField(field));
    }
    Ok(trimmed)
}
