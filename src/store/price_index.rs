use std::ops::Range;

#[derive(Debug, Clone, PartialEq)]
struct Entry {
    price: f64,
    id: String,
}

/// Vegetable ids ordered by ascending price.
///
/// The index is a denormalized view over the store's vegetable map. Each
/// entry caches the price it was inserted with; the store reinserts an entry
/// whenever that price changes. Equal prices keep insertion order.
#[derive(Debug, Default, Clone)]
pub struct PriceIndex {
    entries: Vec<Entry>,
}

impl PriceIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Leftmost position whose price is not less than `price`.
    pub fn lower_bound(&self, price: f64) -> usize {
        self.entries.partition_point(|entry| entry.price < price)
    }

    /// Leftmost position whose price is greater than `price`.
    pub fn upper_bound(&self, price: f64) -> usize {
        self.entries.partition_point(|entry| entry.price <= price)
    }

    /// Places `id` after every entry with the same price, so ties come out in
    /// the order they were inserted.
    pub fn insert(&mut self, id: &str, price: f64) {
        let at = self.upper_bound(price);
        self.entries.insert(
            at,
            Entry {
                price,
                id: id.to_string(),
            },
        );
    }

    /// Removes the entry for `id`, returning whether one was present.
    pub fn remove(&mut self, id: &str) -> bool {
        match self.entries.iter().position(|entry| entry.id == id) {
            Some(at) => {
                self.entries.remove(at);
                true
            }
            None => false,
        }
    }

    pub fn first(&self) -> Option<&str> {
        self.entries.first().map(|entry| entry.id.as_str())
    }

    pub fn last(&self) -> Option<&str> {
        self.entries.last().map(|entry| entry.id.as_str())
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.id.as_str())
    }

    /// Positions of every entry priced within `min..=max`.
    pub fn range(&self, min: f64, max: f64) -> Range<usize> {
        let start = self.lower_bound(min);
        let end = self.upper_bound(max).max(start);
        start..end
    }

    pub fn ids_in(&self, range: Range<usize>) -> impl Iterator<Item = &str> {
        self.entries[range].iter().map(|entry| entry.id.as_str())
    }

    #[cfg(test)]
    pub(crate) fn prices(&self) -> Vec<f64> {
        self.entries.iter().map(|entry| entry.price).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index_of(items: &[(&str, f64)]) -> PriceIndex {
        let mut index = PriceIndex::new();
        for (id, price) in items {
            index.insert(id, *price);
        }
        index
    }

    #[test]
    fn keeps_entries_sorted_by_price() {
        let index = index_of(&[("a", 2.0), ("b", 1.0), ("c", 3.0), ("d", 0.5)]);
        assert_eq!(index.ids().collect::<Vec<_>>(), vec!["d", "b", "a", "c"]);
        assert_eq!(index.first(), Some("d"));
        assert_eq!(index.last(), Some("c"));
    }

    #[test]
    fn equal_prices_keep_insertion_order() {
        let index = index_of(&[("a", 5.0), ("b", 5.0), ("c", 5.0)]);
        assert_eq!(index.ids().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }

    #[test]
    fn bounds_bracket_equal_prices() {
        let index = index_of(&[("a", 1.0), ("b", 5.0), ("c", 5.0), ("d", 9.0)]);
        assert_eq!(index.lower_bound(5.0), 1);
        assert_eq!(index.upper_bound(5.0), 3);
        assert_eq!(index.lower_bound(0.0), 0);
        assert_eq!(index.upper_bound(100.0), 4);
    }

    #[test]
    fn range_selects_inclusive_price_window() {
        let index = index_of(&[("a", 1.0), ("b", 5.0), ("c", 5.0), ("d", 9.0)]);
        let found: Vec<_> = index.ids_in(index.range(2.0, 5.0)).collect();
        assert_eq!(found, vec!["b", "c"]);

        assert!(index.range(6.0, 2.0).is_empty());
    }

    #[test]
    fn remove_by_identity() {
        let mut index = index_of(&[("a", 5.0), ("b", 5.0), ("c", 5.0)]);
        assert!(index.remove("b"));
        assert!(!index.remove("b"));
        assert_eq!(index.ids().collect::<Vec<_>>(), vec!["a", "c"]);
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn empty_index_has_no_extremes() {
        let index = PriceIndex::new();
        assert!(index.is_empty());
        assert_eq!(index.first(), None);
        assert_eq!(index.last(), None);
    }
}
