//! In-memory restaurant menu.
//!
//! [`MenuCatalog`] owns the dishes of one session. Callers hand it raw text
//! ([`NewDish`], filter and sort selections) and get back typed records,
//! read-only views and [`EngineError`]s describing what was wrong with the
//! input.

pub use catalog::MenuCatalog;
pub use course::Course;
pub use dish::{DishRecord, NewDish};
pub use error::{EngineError, Field};
pub use price::Price;
pub use query::{CourseFilter, DishFilter, Filtered, SortKey};

mod catalog;
mod course;
mod dish;
mod error;
mod price;
mod query;

pub type ResultEngine<T> = Result<T, EngineError>;
