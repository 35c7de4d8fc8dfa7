//! Store error types.

use common::{OrderId, ProductId};
use domain::{CartError, CustomerError, DomainError, ErrorKind, OrderError, ProductError};
use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    #[error("Order not found: {0}")]
    OrderNotFound(OrderId),

    #[error("Cart is empty")]
    EmptyCart,

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl StoreError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            StoreError::ProductNotFound(_) | StoreError::OrderNotFound(_) => ErrorKind::NotFound,
            StoreError::EmptyCart => ErrorKind::EmptyCart,
            StoreError::Domain(err) => err.kind(),
        }
    }
}

macro_rules! from_domain {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for StoreError {
                fn from(err: $ty) -> Self {
                    StoreError::Domain(err.into())
                }
            }
        )*
    };
}

from_domain!(ProductError, CartError, CustomerError, OrderError);

/// Convenience type alias for store results.
pub type Result<T> = std::result::Result<T, StoreError>;
