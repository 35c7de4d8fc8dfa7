//! Domain error types.

use serde::Serialize;
use thiserror::Error;

use crate::{CartError, CustomerError, OrderError, ProductError};

/// Coarse classification of every failure the core can report.
///
/// The request layer maps these to transport statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Malformed or missing input.
    InvalidArgument,
    /// Unknown product, order, or cart line.
    NotFound,
    /// Requested quantity exceeds available stock.
    InsufficientStock,
    /// The operation requires a non-empty cart.
    EmptyCart,
    /// The order state machine does not allow the transition.
    InvalidTransition,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidArgument => "invalid_argument",
            ErrorKind::NotFound => "not_found",
            ErrorKind::InsufficientStock => "insufficient_stock",
            ErrorKind::EmptyCart => "empty_cart",
            ErrorKind::InvalidTransition => "invalid_transition",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Errors that can occur during domain operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Product error: {0}")]
    Product(#[from] ProductError),

    #[error("Cart error: {0}")]
    Cart(#[from] CartError),

    #[error("Customer error: {0}")]
    Customer(#[from] CustomerError),

    #[error("Order error: {0}")]
    Order(#[from] OrderError),
}

impl DomainError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::Product(err) => err.kind(),
            DomainError::Cart(err) => err.kind(),
            DomainError::Customer(_) => ErrorKind::InvalidArgument,
            DomainError::Order(err) => err.kind(),
        }
    }
}

impl ProductError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ProductError::InsufficientStock { .. } => ErrorKind::InsufficientStock,
            ProductError::IdRequired
            | ProductError::NameRequired
            | ProductError::InvalidPrice { .. }
            | ProductError::InvalidQuantity { .. }
            | ProductError::StockOverflow { .. }
            | ProductError::InvalidCategory(_) => ErrorKind::InvalidArgument,
        }
    }
}

impl CartError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CartError::InsufficientStock { .. } => ErrorKind::InsufficientStock,
            CartError::ItemNotFound { .. } => ErrorKind::NotFound,
            CartError::InvalidQuantity { .. }
            | CartError::NegativeDiscount { .. }
            | CartError::DiscountExceedsSubtotal { .. }
            | CartError::AmountOverflow { .. } => ErrorKind::InvalidArgument,
        }
    }
}

impl OrderError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            OrderError::EmptyCart => ErrorKind::EmptyCart,
            OrderError::InvalidStateTransition { .. } => ErrorKind::InvalidTransition,
            OrderError::IdRequired | OrderError::InvalidCustomer(_) => ErrorKind::InvalidArgument,
        }
    }
}
