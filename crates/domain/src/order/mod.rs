//! Order snapshot and related types.

mod aggregate;
mod state;

pub use aggregate::Order;
pub use state::OrderStatus;

use thiserror::Error;

use crate::CustomerError;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    /// Order ID is required.
    #[error("Order ID is required")]
    IdRequired,

    /// Customer details failed validation.
    #[error("Invalid customer: {0}")]
    InvalidCustomer(#[from] CustomerError),

    /// Orders cannot be built from an empty cart.
    #[error("Cannot create an order from an empty cart")]
    EmptyCart,

    /// Order is not in a state that allows the requested action.
    #[error("Invalid state transition: cannot {action} from {current_status} status")]
    InvalidStateTransition {
        current_status: OrderStatus,
        action: &'static str,
    },
}
