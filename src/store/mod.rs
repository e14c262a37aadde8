//! The in-memory inventory and customer ledger.
//!
//! [`Store`] owns every [`Vegetable`] and [`Customer`] record together with a
//! [`PriceIndex`] over the vegetables. Every vegetable in the map has exactly
//! one index entry and vice versa; all mutators below preserve that.

use std::{cmp::Ordering, collections::BTreeMap, sync::Arc};

use chrono::Utc;
use serde::Serialize;
use tokio::sync::RwLock;
use utoipa::ToSchema;

use crate::models::{Customer, Order, OrderItems, Vegetable, vegetable::validate_price};

pub mod error;
pub mod price_index;

pub use error::{StoreError, StoreResult};
pub use price_index::PriceIndex;

/// The store as shared between request handlers. Reads take the read lock;
/// every mutation holds the write lock for its whole duration.
pub type SharedStore = Arc<RwLock<Store>>;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PurchaseReceipt {
    pub total: f64,
    pub order: Order,
}

#[derive(Debug, Default)]
pub struct Store {
    vegetables: BTreeMap<String, Vegetable>,
    customers: BTreeMap<String, Customer>,
    by_price: PriceIndex,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_shared(self) -> SharedStore {
        Arc::new(RwLock::new(self))
    }

    // --- vegetables ---

    /// Inserts `vegetable`, fully replacing any record with the same id.
    /// Returns the replaced record.
    pub fn add_vegetable(&mut self, vegetable: Vegetable) -> Option<Vegetable> {
        let replaced = self.vegetables.remove(vegetable.id());
        if replaced.is_some() {
            self.by_price.remove(vegetable.id());
        }
        self.by_price.insert(vegetable.id(), vegetable.price());
        self.vegetables.insert(vegetable.id().to_string(), vegetable);
        replaced
    }

    pub fn update_vegetable_price(&mut self, id: &str, price: f64) -> StoreResult<&Vegetable> {
        let vegetable = self
            .vegetables
            .get_mut(id)
            .ok_or_else(|| StoreError::vegetable_not_found(id))?;
        validate_price(price).map_err(StoreError::InvalidPayload)?;

        // Reinserting an unchanged price would move it ahead of its ties.
        if vegetable.price() != price {
            self.by_price.remove(id);
            vegetable.set_price(price);
            self.by_price.insert(id, price);
        }
        Ok(vegetable)
    }

    pub fn set_vegetable_amount(&mut self, id: &str, amount: u64) -> StoreResult<&Vegetable> {
        let vegetable = self
            .vegetables
            .get_mut(id)
            .ok_or_else(|| StoreError::vegetable_not_found(id))?;
        vegetable.set_amount(amount);
        Ok(vegetable)
    }

    pub fn remove_vegetable(&mut self, id: &str) -> StoreResult<Vegetable> {
        let removed = self
            .vegetables
            .remove(id)
            .ok_or_else(|| StoreError::vegetable_not_found(id))?;
        self.by_price.remove(id);
        Ok(removed)
    }

    pub fn vegetable(&self, id: &str) -> StoreResult<&Vegetable> {
        self.vegetables
            .get(id)
            .ok_or_else(|| StoreError::vegetable_not_found(id))
    }

    pub fn vegetables(&self) -> Vec<&Vegetable> {
        self.vegetables.values().collect()
    }

    pub fn vegetable_count(&self) -> usize {
        self.vegetables.len()
    }

    pub fn cheapest(&self) -> Option<&Vegetable> {
        self.by_price.first().and_then(|id| self.vegetables.get(id))
    }

    pub fn most_expensive(&self) -> Option<&Vegetable> {
        self.by_price.last().and_then(|id| self.vegetables.get(id))
    }

    /// Owned copy of every vegetable in ascending price order.
    pub fn sorted_snapshot(&self) -> Vec<Vegetable> {
        self.by_price
            .ids()
            .filter_map(|id| self.vegetables.get(id))
            .cloned()
            .collect()
    }

    /// Vegetables priced within `min..=max`, cheapest first.
    pub fn vegetables_in_price_range(&self, min: f64, max: f64) -> Vec<Vegetable> {
        self.by_price
            .ids_in(self.by_price.range(min, max))
            .filter_map(|id| self.vegetables.get(id))
            .cloned()
            .collect()
    }

    // --- customers ---

    pub fn add_customer(&mut self, customer: Customer) -> StoreResult<()> {
        if self.customers.contains_key(customer.id()) {
            return Err(StoreError::Conflict(format!("Customer {}", customer.id())));
        }
        self.customers.insert(customer.id().to_string(), customer);
        Ok(())
    }

    pub fn update_customer(
        &mut self,
        id: &str,
        name: Option<String>,
        phone: Option<String>,
    ) -> StoreResult<&Customer> {
        if name.as_ref().is_some_and(|n| n.trim().is_empty()) {
            return Err(StoreError::InvalidPayload("name must not be empty".into()));
        }
        let customer = self.customer_mut(id)?;
        if let Some(name) = name {
            customer.set_name(name);
        }
        if let Some(phone) = phone {
            customer.set_phone(phone);
        }
        Ok(customer)
    }

    pub fn customer(&self, id: &str) -> StoreResult<&Customer> {
        self.customers
            .get(id)
            .ok_or_else(|| StoreError::customer_not_found(id))
    }

    fn customer_mut(&mut self, id: &str) -> StoreResult<&mut Customer> {
        self.customers
            .get_mut(id)
            .ok_or_else(|| StoreError::customer_not_found(id))
    }

    pub fn customers(&self) -> Vec<&Customer> {
        self.customers.values().collect()
    }

    pub fn customer_count(&self) -> usize {
        self.customers.len()
    }

    pub fn customer_history(&self, id: &str) -> StoreResult<&[Order]> {
        Ok(self.customer(id)?.history())
    }

    pub fn set_cart(&mut self, customer_id: &str, items: &OrderItems) -> StoreResult<&Order> {
        let customer = self.customer_mut(customer_id)?;
        customer.start_new_order(items);
        Ok(customer.cart())
    }

    // --- purchasing ---

    /// Buys `items` for the customer. Every item is checked against current
    /// stock before anything is changed, so a failure leaves the store
    /// exactly as it was.
    pub fn purchase(
        &mut self,
        customer_id: &str,
        items: &OrderItems,
    ) -> StoreResult<PurchaseReceipt> {
        if !self.customers.contains_key(customer_id) {
            return Err(StoreError::customer_not_found(customer_id));
        }
        if items.is_empty() {
            return Err(StoreError::InvalidPayload("no items requested".into()));
        }

        for (id, &requested) in items {
            if requested == 0 {
                return Err(StoreError::InvalidPayload(format!(
                    "amount for {id} must be greater than 0"
                )));
            }
            let vegetable = self.vegetable(id)?;
            if vegetable.amount() < requested {
                return Err(StoreError::InsufficientStock {
                    name: vegetable.name().to_string(),
                    requested,
                    available: vegetable.amount(),
                });
            }
            if vegetable.sold().checked_add(requested).is_none() {
                return Err(StoreError::InvalidPayload(format!(
                    "sales counter for {id} would overflow"
                )));
            }
        }

        let mut order = Order::new();
        let mut total = 0.0;
        for (id, &amount) in items {
            let Some(vegetable) = self.vegetables.get_mut(id) else {
                continue;
            };
            vegetable.set_amount(vegetable.amount() - amount);
            vegetable.record_sale(amount);
            total += vegetable.price() * amount as f64;
            order.add_item(id, amount);
        }
        order.set_total(total);
        order.mark_placed(Utc::now());

        let customer = self.customer_mut(customer_id)?;
        customer.record_completed_order(order.clone());
        customer.add_spend(total);

        Ok(PurchaseReceipt { total, order })
    }

    /// Purchases the customer's cart and empties it on success.
    pub fn checkout_cart(&mut self, customer_id: &str) -> StoreResult<PurchaseReceipt> {
        let items = self.customer(customer_id)?.cart().items().clone();
        if items.is_empty() {
            return Err(StoreError::InvalidPayload("cart is empty".into()));
        }
        let receipt = self.purchase(customer_id, &items)?;
        self.customer_mut(customer_id)?.clear_cart();
        Ok(receipt)
    }

    // --- reports ---
    //
    // Map iteration is by id, and the sorts are stable, so ties come out in
    // ascending id order.

    pub fn top_customers_by_spend(&self, n: usize) -> Vec<&Customer> {
        let mut customers = self.customers();
        customers.sort_by(|a, b| b.money_spent().total_cmp(&a.money_spent()));
        customers.truncate(n);
        customers
    }

    pub fn most_popular_vegetables(&self, n: usize) -> Vec<&Vegetable> {
        self.ranked_vegetables(n, |a, b| b.sold().cmp(&a.sold()))
    }

    pub fn lowest_stock_vegetables(&self, n: usize) -> Vec<&Vegetable> {
        self.ranked_vegetables(n, |a, b| a.amount().cmp(&b.amount()))
    }

    fn ranked_vegetables<F>(&self, n: usize, compare: F) -> Vec<&Vegetable>
    where
        F: Fn(&Vegetable, &Vegetable) -> Ordering,
    {
        let mut vegetables = self.vegetables();
        vegetables.sort_by(|a, b| compare(a, b));
        vegetables.truncate(n);
        vegetables
    }

    #[cfg(test)]
    fn assert_index_consistent(&self) {
        assert_eq!(self.by_price.len(), self.vegetables.len());
        for id in self.by_price.ids() {
            assert!(self.vegetables.contains_key(id), "dangling index entry {id}");
        }
        for id in self.vegetables.keys() {
            assert_eq!(
                self.by_price.ids().filter(|other| *other == id.as_str()).count(),
                1,
                "{id} must be indexed exactly once"
            );
        }
        let cached = self.by_price.prices();
        let actual: Vec<f64> = self
            .by_price
            .ids()
            .filter_map(|id| self.vegetables.get(id))
            .map(Vegetable::price)
            .collect();
        assert_eq!(cached, actual);
        assert!(cached.windows(2).all(|w| w[0] <= w[1]), "index out of order");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn veg(id: &str, amount: u64, price: f64) -> Vegetable {
        Vegetable::new(id, id.to_uppercase(), amount, price).unwrap()
    }

    fn items(pairs: &[(&str, u64)]) -> OrderItems {
        pairs.iter().map(|(id, n)| (id.to_string(), *n)).collect()
    }

    fn store_with_customer() -> Store {
        let mut store = Store::new();
        store
            .add_customer(Customer::new("u1", "Ada", "555-0100").unwrap())
            .unwrap();
        store
    }

    fn sorted_ids(store: &Store) -> Vec<String> {
        store
            .sorted_snapshot()
            .iter()
            .map(|v| v.id().to_string())
            .collect()
    }

    #[test]
    fn index_stays_consistent_across_mutations() {
        let mut store = Store::new();
        store.add_vegetable(veg("a", 1, 4.0));
        store.add_vegetable(veg("b", 1, 2.0));
        store.add_vegetable(veg("c", 1, 8.0));
        store.assert_index_consistent();

        store.update_vegetable_price("a", 10.0).unwrap();
        store.assert_index_consistent();
        store.remove_vegetable("b").unwrap();
        store.assert_index_consistent();
        store.add_vegetable(veg("d", 1, 0.0));
        store.update_vegetable_price("c", 0.0).unwrap();
        store.assert_index_consistent();

        assert_eq!(sorted_ids(&store), vec!["d", "c", "a"]);
    }

    #[test]
    fn ties_keep_insertion_order() {
        let mut store = Store::new();
        for id in ["a", "b", "c"] {
            store.add_vegetable(veg(id, 1, 5.0));
        }
        assert_eq!(sorted_ids(&store), vec!["a", "b", "c"]);

        store.update_vegetable_price("b", 5.0).unwrap();
        assert_eq!(sorted_ids(&store), vec!["a", "b", "c"]);
    }

    #[test]
    fn re_adding_replaces_the_record() {
        let mut store = Store::new();
        store.add_vegetable(veg("a", 1, 1.0));
        store.add_vegetable(veg("b", 1, 2.0));
        let replaced = store.add_vegetable(Vegetable::new("a", "Artichoke", 7, 3.0).unwrap());

        assert_eq!(replaced.map(|v| v.price()), Some(1.0));
        assert_eq!(store.vegetable_count(), 2);
        let a = store.vegetable("a").unwrap();
        assert_eq!((a.name(), a.amount(), a.price()), ("Artichoke", 7, 3.0));
        assert_eq!(sorted_ids(&store), vec!["b", "a"]);
        store.assert_index_consistent();
    }

    #[test]
    fn price_update_rejects_unknown_and_invalid() {
        let mut store = Store::new();
        store.add_vegetable(veg("a", 1, 1.0));

        assert!(matches!(
            store.update_vegetable_price("zz", 1.0),
            Err(StoreError::NotFound(_))
        ));
        assert!(matches!(
            store.update_vegetable_price("zz", f64::NAN),
            Err(StoreError::NotFound(_))
        ));
        assert!(matches!(
            store.update_vegetable_price("a", f64::NAN),
            Err(StoreError::InvalidPayload(_))
        ));
        assert!(matches!(
            store.update_vegetable_price("a", -1.0),
            Err(StoreError::InvalidPayload(_))
        ));
        assert_eq!(store.vegetable("a").unwrap().price(), 1.0);
    }

    #[test]
    fn remove_unknown_is_not_found() {
        let mut store = Store::new();
        assert_eq!(
            store.remove_vegetable("ghost"),
            Err(StoreError::NotFound("Vegetable ghost".into()))
        );
    }

    #[test]
    fn extremes() {
        let mut store = Store::new();
        assert!(store.cheapest().is_none());
        assert!(store.most_expensive().is_none());

        store.add_vegetable(veg("a", 1, 2.0));
        store.add_vegetable(veg("b", 1, 1.0));
        store.add_vegetable(veg("c", 1, 3.0));
        assert_eq!(store.cheapest().map(Vegetable::id), Some("b"));
        assert_eq!(store.most_expensive().map(Vegetable::id), Some("c"));
    }

    #[test]
    fn snapshot_is_detached_from_store() {
        let mut store = Store::new();
        store.add_vegetable(veg("a", 1, 2.0));
        let mut snapshot = store.sorted_snapshot();
        snapshot[0].set_price(99.0);
        snapshot.clear();

        assert_eq!(store.vegetable("a").unwrap().price(), 2.0);
        assert_eq!(store.sorted_snapshot().len(), 1);
    }

    #[test]
    fn price_range_uses_inclusive_bounds() {
        let mut store = Store::new();
        store.add_vegetable(veg("a", 1, 1.0));
        store.add_vegetable(veg("b", 1, 2.0));
        store.add_vegetable(veg("c", 1, 3.0));
        let found: Vec<_> = store
            .vegetables_in_price_range(2.0, 3.0)
            .into_iter()
            .map(|v| v.id().to_string())
            .collect();
        assert_eq!(found, vec!["b", "c"]);
    }

    #[test]
    fn purchase_is_atomic_when_an_item_is_unknown() {
        let mut store = store_with_customer();
        store.add_vegetable(veg("carrot", 10, 1.0));

        let result = store.purchase("u1", &items(&[("carrot", 5), ("potato", 1)]));

        assert_eq!(result.unwrap_err(), StoreError::vegetable_not_found("potato"));
        assert_eq!(store.vegetable("carrot").unwrap().amount(), 10);
        assert_eq!(store.vegetable("carrot").unwrap().sold(), 0);
        assert!(store.customer_history("u1").unwrap().is_empty());
    }

    #[test]
    fn purchase_rejects_insufficient_stock() {
        let mut store = store_with_customer();
        store.add_vegetable(veg("carrot", 3, 1.0));

        let result = store.purchase("u1", &items(&[("carrot", 4)]));

        assert!(matches!(
            result,
            Err(StoreError::InsufficientStock {
                requested: 4,
                available: 3,
                ..
            })
        ));
        assert_eq!(store.vegetable("carrot").unwrap().amount(), 3);
        assert_eq!(store.customer("u1").unwrap().money_spent(), 0.0);
    }

    #[test]
    fn purchase_rejects_sales_counter_overflow() {
        let mut store = store_with_customer();
        store.add_vegetable(veg("bulk", u64::MAX, 0.0));
        store.purchase("u1", &items(&[("bulk", u64::MAX)])).unwrap();
        store.set_vegetable_amount("bulk", 1).unwrap();

        let result = store.purchase("u1", &items(&[("bulk", 1)]));

        assert!(matches!(result, Err(StoreError::InvalidPayload(_))));
        let bulk = store.vegetable("bulk").unwrap();
        assert_eq!(bulk.amount(), 1);
        assert_eq!(bulk.sold(), u64::MAX);
        assert_eq!(store.customer_history("u1").unwrap().len(), 1);
    }

    #[test]
    fn purchase_rejects_unknown_customer_and_bad_payloads() {
        let mut store = store_with_customer();
        store.add_vegetable(veg("carrot", 3, 1.0));

        assert!(matches!(
            store.purchase("nobody", &items(&[("carrot", 1)])),
            Err(StoreError::NotFound(_))
        ));
        assert!(matches!(
            store.purchase("u1", &OrderItems::new()),
            Err(StoreError::InvalidPayload(_))
        ));
        assert!(matches!(
            store.purchase("u1", &items(&[("carrot", 0)])),
            Err(StoreError::InvalidPayload(_))
        ));
    }

    #[test]
    fn purchase_updates_stock_sales_and_ledger() {
        let mut store = store_with_customer();
        store.add_vegetable(veg("carrot", 10, 1.5));
        store.add_vegetable(veg("leek", 4, 2.0));

        let receipt = store
            .purchase("u1", &items(&[("carrot", 4), ("leek", 1)]))
            .unwrap();

        assert_eq!(receipt.total, 8.0);
        assert_eq!(receipt.order.total(), Some(8.0));
        assert!(receipt.order.placed_at().is_some());
        let carrot = store.vegetable("carrot").unwrap();
        assert_eq!((carrot.amount(), carrot.sold()), (6, 4));
        let leek = store.vegetable("leek").unwrap();
        assert_eq!((leek.amount(), leek.sold()), (3, 1));
    }

    #[test]
    fn spend_matches_history_totals() {
        let mut store = store_with_customer();
        store.add_vegetable(veg("carrot", 100, 0.75));
        store.add_vegetable(veg("leek", 100, 2.25));

        let mut totals = 0.0;
        for n in 1..=5 {
            let receipt = store
                .purchase("u1", &items(&[("carrot", n), ("leek", 6 - n)]))
                .unwrap();
            totals += receipt.total;
        }

        let customer = store.customer("u1").unwrap();
        assert_eq!(customer.history().len(), 5);
        assert_eq!(customer.money_spent(), totals);
        let from_history: f64 = customer.history().iter().filter_map(Order::total).sum();
        assert_eq!(customer.money_spent(), from_history);
    }

    #[test]
    fn checkout_cart_purchases_and_clears_cart() {
        let mut store = store_with_customer();
        store.add_vegetable(veg("carrot", 10, 2.0));

        assert!(matches!(
            store.checkout_cart("u1"),
            Err(StoreError::InvalidPayload(_))
        ));

        store.set_cart("u1", &items(&[("carrot", 3)])).unwrap();
        let receipt = store.checkout_cart("u1").unwrap();

        assert_eq!(receipt.total, 6.0);
        let customer = store.customer("u1").unwrap();
        assert!(customer.cart().is_empty());
        assert_eq!(customer.history().len(), 1);
        assert_eq!(store.vegetable("carrot").unwrap().amount(), 7);
    }

    #[test]
    fn failed_checkout_keeps_cart() {
        let mut store = store_with_customer();
        store.add_vegetable(veg("carrot", 1, 2.0));
        store.set_cart("u1", &items(&[("carrot", 3)])).unwrap();

        assert!(store.checkout_cart("u1").is_err());
        assert_eq!(
            store.customer("u1").unwrap().cart().items().get("carrot"),
            Some(&3)
        );
    }

    #[test]
    fn duplicate_customer_is_a_conflict() {
        let mut store = store_with_customer();
        let again = Customer::new("u1", "Other", "1").unwrap();
        assert!(matches!(store.add_customer(again), Err(StoreError::Conflict(_))));
        assert_eq!(store.customer("u1").unwrap().name(), "Ada");
    }

    #[test]
    fn update_customer_changes_only_given_fields() {
        let mut store = store_with_customer();
        let updated = store
            .update_customer("u1", None, Some("555-0199".into()))
            .unwrap();
        assert_eq!(updated.name(), "Ada");
        assert_eq!(updated.phone(), "555-0199");
    }

    #[test]
    fn reports_rank_and_truncate() {
        let mut store = store_with_customer();
        store
            .add_customer(Customer::new("u2", "Bo", "2").unwrap())
            .unwrap();
        store
            .add_customer(Customer::new("u0", "Cy", "3").unwrap())
            .unwrap();
        store.add_vegetable(veg("x", 10, 1.0));
        store.add_vegetable(veg("y", 10, 1.0));
        store.add_vegetable(veg("z", 4, 1.0));

        store.purchase("u1", &items(&[("x", 5)])).unwrap();
        store.purchase("u2", &items(&[("y", 2)])).unwrap();

        let popular: Vec<_> = store
            .most_popular_vegetables(1)
            .into_iter()
            .map(Vegetable::id)
            .collect();
        assert_eq!(popular, vec!["x"]);

        let low: Vec<_> = store
            .lowest_stock_vegetables(2)
            .into_iter()
            .map(Vegetable::id)
            .collect();
        assert_eq!(low, vec!["z", "x"]);

        let top: Vec<_> = store
            .top_customers_by_spend(3)
            .into_iter()
            .map(Customer::id)
            .collect();
        assert_eq!(top, vec!["u1", "u2", "u0"]);
    }

    #[test]
    fn spend_ties_break_by_id() {
        let mut store = Store::new();
        for id in ["c", "a", "b"] {
            store.add_customer(Customer::new(id, id, "").unwrap()).unwrap();
        }
        let top: Vec<_> = store
            .top_customers_by_spend(10)
            .into_iter()
            .map(Customer::id)
            .collect();
        assert_eq!(top, vec!["a", "b", "c"]);
    }
}
