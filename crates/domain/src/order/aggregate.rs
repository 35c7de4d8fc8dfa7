//! Order aggregate implementation.

use chrono::{DateTime, Utc};
use common::OrderId;
use serde::Serialize;

use super::{OrderError, OrderStatus};
use crate::{Cart, CartLine, Customer, Money};

/// A placed order.
///
/// Customer, lines, and total are frozen at creation. Only the status
/// (through [`Order::advance`] and [`Order::cancel`]) and the notes may
/// change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Order {
    id: OrderId,
    customer: Customer,
    #[serde(rename = "items")]
    lines: Vec<CartLine>,
    #[serde(rename = "total_cents")]
    total: Money,
    status: OrderStatus,
    notes: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

// Query methods
impl Order {
    pub fn id(&self) -> OrderId {
        self.id
    }

    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn total(&self) -> Money {
        self.total
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns the total quantity of all lines.
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(CartLine::quantity).sum()
    }

    pub fn is_cancellable(&self) -> bool {
        self.status.can_cancel()
    }

    pub fn is_pending(&self) -> bool {
        self.status == OrderStatus::Pending
    }

    /// One-line summary, e.g. `Order ORD-0001 | Ana | $249.95 | pending`.
    pub fn summary(&self) -> String {
        format!(
            "Order {} | {} | {} | {}",
            self.id,
            self.customer.name(),
            self.total,
            self.status
        )
    }
}

// Command methods
impl Order {
    /// Builds an order from the current cart contents.
    ///
    /// The cart's lines are copied and its total is frozen at this instant.
    /// Sequence 0 is reserved as the unset id and is rejected.
    pub fn create(id: OrderId, customer: Customer, cart: &Cart) -> Result<Self, OrderError> {
        if id.sequence() == 0 {
            return Err(OrderError::IdRequired);
        }
        customer.validate()?;
        if cart.is_empty() {
            return Err(OrderError::EmptyCart);
        }

        let now = Utc::now();
        Ok(Self {
            id,
            customer,
            lines: cart.lines().to_vec(),
            total: cart.total(),
            status: OrderStatus::Pending,
            notes: String::new(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Moves the order to the next status in the fulfilment chain.
    pub fn advance(&mut self) -> Result<OrderStatus, OrderError> {
        let next = self
            .status
            .next()
            .ok_or(OrderError::InvalidStateTransition {
                current_status: self.status,
                action: "advance",
            })?;
        self.status = next;
        self.touch();
        Ok(next)
    }

    /// Cancels the order if it has not shipped yet.
    pub fn cancel(&mut self) -> Result<(), OrderError> {
        if !self.status.can_cancel() {
            return Err(OrderError::InvalidStateTransition {
                current_status: self.status,
                action: "cancel",
            });
        }
        self.status = OrderStatus::Cancelled;
        self.touch();
        Ok(())
    }

    /// Replaces the delivery notes.
    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.notes = notes.into();
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
