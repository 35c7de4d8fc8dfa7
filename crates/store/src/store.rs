//! The transactional coordinator over the ledger, the cart, and orders.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use common::{OrderId, ProductId};
use domain::{Cart, Category, Customer, Money, Order, OrderStatus, Product};

use crate::ledger::ProductLedger;
use crate::{Result, StoreError};

#[derive(Debug, Default)]
pub(crate) struct StoreState {
    pub(crate) ledger: ProductLedger,
    cart: Cart,
    orders: BTreeMap<OrderId, Order>,
    last_order_id: OrderId,
}

/// Shared storefront state.
///
/// Every operation runs to completion under one exclusive lock, so a
/// multi-step operation such as [`Store::place_order`] never interleaves
/// with another caller. Read accessors return owned snapshots.
#[derive(Debug, Default)]
pub struct Store {
    state: Mutex<StoreState>,
}

impl Store {
    /// Creates a store with an empty catalog and an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    // No operation leaves state half-written across a panic point, so a
    // poisoned lock still guards consistent data.
    pub(crate) fn lock(&self) -> MutexGuard<'_, StoreState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // -- Catalog --

    /// Inserts or replaces a product, returning the one it replaced.
    #[tracing::instrument(skip(self, product), fields(product_id = %product.id()))]
    pub fn add_product(&self, product: Product) -> Option<Product> {
        self.lock().ledger.insert(product)
    }

    #[tracing::instrument(skip(self))]
    pub fn get_product(&self, id: &ProductId) -> Result<Product> {
        self.lock().ledger.get(id).cloned()
    }

    pub fn list_products(&self) -> Vec<Product> {
        self.lock().ledger.list_all()
    }

    pub fn list_products_by_category(&self, category: Category) -> Vec<Product> {
        self.lock().ledger.list_by_category(category)
    }

    /// Returns `quantity` units of a product to stock.
    #[tracing::instrument(skip(self))]
    pub fn restock(&self, id: &ProductId, quantity: u32) -> Result<Product> {
        let mut state = self.lock();
        state.ledger.credit(id, quantity)?;
        tracing::info!(%id, quantity, "product restocked");
        state.ledger.get(id).cloned()
    }

    // -- Cart --

    /// Returns a snapshot of the cart.
    pub fn cart(&self) -> Cart {
        self.lock().cart.clone()
    }

    /// Adds a product to the cart, checking the live stock level.
    #[tracing::instrument(skip(self))]
    pub fn add_to_cart(&self, id: &ProductId, quantity: u32) -> Result<Cart> {
        let mut guard = self.lock();
        let state = &mut *guard;
        let product = state.ledger.get(id)?;
        state.cart.add_item(product, quantity)?;

        metrics::counter!("cart_items_added_total").increment(u64::from(quantity));
        tracing::debug!(%id, quantity, item_count = state.cart.item_count(), "added to cart");
        Ok(state.cart.clone())
    }

    #[tracing::instrument(skip(self))]
    pub fn remove_from_cart(&self, id: &ProductId) -> Result<Cart> {
        let mut state = self.lock();
        state.cart.remove_item(id)?;
        tracing::debug!(%id, "removed from cart");
        Ok(state.cart.clone())
    }

    #[tracing::instrument(skip(self))]
    pub fn clear_cart(&self) {
        self.lock().cart.clear();
    }

    #[tracing::instrument(skip(self))]
    pub fn set_discount(&self, discount: Money) -> Result<Cart> {
        let mut state = self.lock();
        state.cart.set_discount(discount)?;
        Ok(state.cart.clone())
    }

    // -- Orders --

    /// Turns the cart into an order.
    ///
    /// Stock for every line is checked before any is debited, so a failed
    /// placement leaves the ledger, the cart, and the order sequence as they
    /// were. On success the cart is cleared.
    #[tracing::instrument(skip(self, customer), fields(customer = %customer.email()))]
    pub fn place_order(&self, customer: Customer) -> Result<Order> {
        let result = self.lock().place_order(customer);

        match &result {
            Ok(order) => {
                metrics::counter!("orders_placed_total").increment(1);
                tracing::info!(order_id = %order.id(), total = %order.total(), "order placed");
            }
            Err(err) => {
                metrics::counter!("orders_rejected_total", "kind" => err.kind().as_str())
                    .increment(1);
            }
        }
        result
    }

    pub fn get_order(&self, id: OrderId) -> Result<Order> {
        self.lock()
            .orders
            .get(&id)
            .cloned()
            .ok_or(StoreError::OrderNotFound(id))
    }

    /// Returns every order, oldest first.
    pub fn list_orders(&self) -> Vec<Order> {
        self.lock().orders.values().cloned().collect()
    }

    /// Moves an order one step along its fulfilment chain.
    #[tracing::instrument(skip(self))]
    pub fn advance_order(&self, id: OrderId) -> Result<Order> {
        let mut state = self.lock();
        let order = state.order_mut(id)?;
        let status = order.advance()?;

        metrics::counter!("order_transitions_total", "action" => "advance").increment(1);
        tracing::info!(order_id = %id, %status, "order advanced");
        Ok(order.clone())
    }

    /// Cancels an order and returns its units to stock.
    #[tracing::instrument(skip(self))]
    pub fn cancel_order(&self, id: OrderId) -> Result<Order> {
        let mut guard = self.lock();
        let state = &mut *guard;
        let order = state
            .orders
            .get_mut(&id)
            .ok_or(StoreError::OrderNotFound(id))?;
        order.cancel()?;

        for line in order.lines() {
            if let Err(err) = state.ledger.credit(line.product_id(), line.quantity()) {
                tracing::warn!(
                    order_id = %id,
                    product_id = %line.product_id(),
                    error = %err,
                    "could not return cancelled units to stock"
                );
            }
        }

        metrics::counter!("order_transitions_total", "action" => "cancel").increment(1);
        tracing::info!(order_id = %id, status = %OrderStatus::Cancelled, "order cancelled");
        Ok(order.clone())
    }

    #[tracing::instrument(skip(self, notes))]
    pub fn set_order_notes(&self, id: OrderId, notes: impl Into<String>) -> Result<Order> {
        let mut state = self.lock();
        let order = state.order_mut(id)?;
        order.set_notes(notes);
        Ok(order.clone())
    }
}

impl StoreState {
    fn order_mut(&mut self, id: OrderId) -> Result<&mut Order> {
        self.orders
            .get_mut(&id)
            .ok_or(StoreError::OrderNotFound(id))
    }

    fn place_order(&mut self, customer: Customer) -> Result<Order> {
        if self.cart.is_empty() {
            return Err(StoreError::EmptyCart);
        }

        let order_id = self.last_order_id.next();
        let order = Order::create(order_id, customer, &self.cart)?;
        let units = self.ledger.debit_lines(order.lines())?;
        metrics::counter!("stock_units_debited_total").increment(units);

        self.last_order_id = order_id;
        self.orders.insert(order_id, order.clone());
        self.cart.clear();
        Ok(order)
    }
}
