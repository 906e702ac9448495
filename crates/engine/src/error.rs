//! The module contains the errors the engine can return.
//!
//! Every error is a recoverable validation failure caused by caller input:
//!
//! - [`MissingField`] a required text field of a [`NewDish`] is empty.
//! - [`InvalidCourse`] the course text is not one of the known courses.
//! - [`InvalidPrice`] the price text is not a positive number.
//! - [`InvalidFilterCourse`] a filter asked for an unknown course.
//! - [`IndexOutOfRange`] a positional removal pointed past the end.
//!
//!  [`MissingField`]: EngineError::MissingField
//!  [`InvalidCourse`]: EngineError::InvalidCourse
//!  [`InvalidPrice`]: EngineError::InvalidPrice
//!  [`InvalidFilterCourse`]: EngineError::InvalidFilterCourse
//!  [`IndexOutOfRange`]: EngineError::IndexOutOfRange
//!  [`NewDish`]: super::NewDish
use std::fmt;

use thiserror::Error;

/// Text fields a dish is created from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Description,
    Course,
    Price,
}

impl Field {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Description => "description",
            Field::Course => "course",
            Field::Price => "price",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Engine custom errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Missing field: {0}")]
    MissingField(Field),
    #[error("Invalid course: \"{0}\"")]
    InvalidCourse(String),
    #[error("Invalid price: {0}")]
    InvalidPrice(String),
    #[error("Invalid filter course: \"{0}\"")]
    InvalidFilterCourse(String),
    #[error("Index {index} out of range for {len} dishes")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("Invalid sort key: \"{0}\"")]
    InvalidSortKey(String),
    #[error("Draft is empty!")]
    EmptyDraft,
}
