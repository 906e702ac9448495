use crate::{DishFilter, DishRecord, EngineError, Filtered, NewDish, ResultEngine, SortKey};

/// Ordered collection of the dishes on a menu.
///
/// Dishes keep their insertion order. Sorted and filtered views are computed
/// on demand and never reorder the catalog itself.
///
/// Every mutating operation is all-or-nothing: when it returns an error the
/// catalog is left exactly as it was.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MenuCatalog {
    dishes: Vec<DishRecord>,
}

impl MenuCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates `candidate` and appends the resulting dish.
    ///
    /// Returns a copy of the stored record.
    pub fn add(&mut self, candidate: &NewDish) -> ResultEngine<DishRecord> {
        let dish = candidate.validate()?;
        tracing::debug!(
            name = dish.name(),
            course = %dish.course(),
            price = %dish.price(),
            "dish added"
        );
        self.dishes.push(dish.clone());
        Ok(dish)
    }

    /// Removes every dish named exactly `name` and returns how many were
    /// removed. No match is not an error.
    pub fn remove_by_name(&mut self, name: &str) -> usize {
        let before = self.dishes.len();
        self.dishes.retain(|dish| dish.name() != name);
        let removed = before - self.dishes.len();
        tracing::debug!(name, removed, "dishes removed by name");
        removed
    }

    /// Removes and returns the dish at `index` (0-based).
    pub fn remove_at(&mut self, index: usize) -> ResultEngine<DishRecord> {
        let len = self.dishes.len();
        if index >= len {
            return Err(EngineError::IndexOutOfRange { index, len });
        }
        let dish = self.dishes.remove(index);
        tracing::debug!(index, name = dish.name(), "dish removed by index");
        Ok(dish)
    }

    /// Dishes matching `filter`, lazily and in catalog order.
    #[must_use]
    pub fn filter(&self, filter: DishFilter) -> Filtered<'_> {
        Filtered::new(&self.dishes, filter)
    }

    /// A copy of the catalog order sorted by `key`. Ties keep insertion order.
    #[must_use]
    pub fn sorted_view(&self, key: SortKey) -> Vec<&DishRecord> {
        let mut view: Vec<&DishRecord> = self.dishes.iter().collect();
        view.sort_by(|left, right| key.compare(left, right));
        view
    }

    /// The highest-priced dish; the earliest one wins a tie.
    #[must_use]
    pub fn most_expensive(&self) -> Option<&DishRecord> {
        self.dishes.iter().fold(None, |best, dish| match best {
            Some(current) if current.price() >= dish.price() => Some(current),
            _ => Some(dish),
        })
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.dishes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&DishRecord> {
        self.dishes.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DishRecord> {
        self.dishes.iter()
    }

    /// Replaces the content of the catalog with the dishes of `draft`.
    ///
    /// An empty draft is rejected so a menu is never wiped by mistake.
    /// Returns the new number of dishes.
    pub fn commit_draft(&mut self, draft: MenuCatalog) -> ResultEngine<usize> {
        if draft.is_empty() {
            return Err(EngineError::EmptyDraft);
        }
        self.dishes = draft.dishes;
        tracing::debug!(count = self.dishes.len(), "draft committed");
        Ok(self.dishes.len())
    }
}

impl<'a> IntoIterator for &'a MenuCatalog {
    type Item = &'a DishRecord;
    type IntoIter = std::slice::Iter<'a, DishRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.dishes.iter()
    }
}
