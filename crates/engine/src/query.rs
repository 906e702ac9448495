//! Read-only views over a catalog: filtering and sorting.
//!
//! Nothing here is cached. Each view is recomputed from the catalog it
//! borrows, so it always reflects the current content.

use std::{cmp::Ordering, slice, str::FromStr};

use crate::{Course, DishRecord, EngineError, Price, ResultEngine};

const ALL_COURSES: &str = "All";

/// Course part of a [`DishFilter`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CourseFilter {
    #[default]
    All,
    Only(Course),
}

impl CourseFilter {
    #[must_use]
    pub fn matches(self, course: Course) -> bool {
        match self {
            CourseFilter::All => true,
            CourseFilter::Only(wanted) => wanted == course,
        }
    }
}

impl FromStr for CourseFilter {
    type Err = EngineError;

    /// Accepts `All` or a canonical course name, compared exactly after
    /// ignoring surrounding whitespace. Empty input means `All`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed == ALL_COURSES {
            return Ok(CourseFilter::All);
        }
        Course::lookup(trimmed)
            .map(CourseFilter::Only)
            .ok_or_else(|| EngineError::InvalidFilterCourse(trimmed.to_string()))
    }
}

/// Predicate used by [`MenuCatalog::filter`](crate::MenuCatalog::filter).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DishFilter {
    pub course: CourseFilter,
    pub max_price: Option<Price>,
}

impl DishFilter {
    /// A filter that lets every dish through.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn course(mut self, course: Course) -> Self {
        self.course = CourseFilter::Only(course);
        self
    }

    #[must_use]
    pub fn max_price(mut self, max_price: Price) -> Self {
        self.max_price = Some(max_price);
        self
    }

    /// Builds a filter from the raw course and max-price text.
    ///
    /// Empty text leaves that part of the filter open.
    pub fn parse(course: &str, max_price: &str) -> ResultEngine<Self> {
        let course = course.parse()?;
        let max_price = match max_price.trim() {
            "" => None,
            text => Some(text.parse()?),
        };
        Ok(Self { course, max_price })
    }

    #[must_use]
    pub fn matches(&self, dish: &DishRecord) -> bool {
        self.course.matches(dish.course())
            && self.max_price.is_none_or(|max| dish.price() <= max)
    }
}

/// Lazy filtered view, yielded in catalog order.
///
/// The view can be restarted by cloning it before iterating.
#[derive(Clone, Debug)]
pub struct Filtered<'a> {
    dishes: slice::Iter<'a, DishRecord>,
    filter: DishFilter,
}

impl<'a> Filtered<'a> {
    pub(crate) fn new(dishes: &'a [DishRecord], filter: DishFilter) -> Self {
        Self {
            dishes: dishes.iter(),
            filter,
        }
    }
}

impl<'a> Iterator for Filtered<'a> {
    type Item = &'a DishRecord;

    fn next(&mut self) -> Option<Self::Item> {
        let filter = self.filter;
        self.dishes.find(|dish| filter.matches(dish))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.dishes.size_hint().1)
    }
}

/// Key for [`MenuCatalog::sorted_view`](crate::MenuCatalog::sorted_view).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Price,
}

impl SortKey {
    pub(crate) fn compare(self, left: &DishRecord, right: &DishRecord) -> Ordering {
        match self {
            SortKey::Name => left.name().cmp(right.name()),
            SortKey::Price => left.price().cmp(&right.price()),
        }
    }
}

impl FromStr for SortKey {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "name" => Ok(SortKey::Name),
            "price" => Ok(SortKey::Price),
            other => Err(EngineError::InvalidSortKey(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn course_filter_parsing() {
        assert_eq!("All".parse::<CourseFilter>(), Ok(CourseFilter::All));
        assert_eq!("".parse::<CourseFilter>(), Ok(CourseFilter::All));
        assert_eq!(
            "Main".parse::<CourseFilter>(),
            Ok(CourseFilter::Only(Course::Main))
        );
        assert_eq!(
            " Dessert ".parse::<CourseFilter>(),
            Ok(CourseFilter::Only(Course::Dessert))
        );
        assert_eq!(
            "all".parse::<CourseFilter>(),
            Err(EngineError::InvalidFilterCourse("all".to_string()))
        );
        assert_eq!(
            "Snack".parse::<CourseFilter>(),
            Err(EngineError::InvalidFilterCourse("Snack".to_string()))
        );
    }

    #[test]
    fn dish_filter_parse_handles_empty_max_price() {
        let filter = DishFilter::parse("Dessert", "  ").unwrap();
        assert_eq!(filter, DishFilter::new().course(Course::Dessert));

        let filter = DishFilter::parse("All", "9.5").unwrap();
        assert_eq!(filter, DishFilter::new().max_price(Price::from_cents(950)));
    }

    #[test]
    fn dish_filter_parse_rejects_bad_max_price() {
        assert!(matches!(
            DishFilter::parse("All", "cheap"),
            Err(EngineError::InvalidPrice(_))
        ));
        assert!(matches!(
            DishFilter::parse("All", "-1"),
            Err(EngineError::InvalidPrice(_))
        ));
    }

    #[test]
    fn sort_key_parsing() {
        assert_eq!("name".parse::<SortKey>(), Ok(SortKey::Name));
        assert_eq!("price".parse::<SortKey>(), Ok(SortKey::Price));
        assert_eq!(
            "Price".parse::<SortKey>(),
            Err(EngineError::InvalidSortKey("Price".to_string()))
        );
    }
}
