//! Domain layer for the storefront order engine.
//!
//! This crate provides the core domain types:
//! - Product with validated setters and stock debit/credit
//! - Cart with price snapshots, discount, and computed totals
//! - Customer with validated contact details
//! - Order snapshot with its status state machine

pub mod cart;
pub mod category;
pub mod customer;
pub mod error;
pub mod order;
pub mod product;
pub mod value_objects;

pub use cart::{Cart, CartError, CartLine};
pub use category::Category;
pub use common::{OrderId, ProductId};
pub use customer::{Customer, CustomerError};
pub use error::{DomainError, ErrorKind};
pub use order::{Order, OrderError, OrderStatus};
pub use product::{Product, ProductError};
pub use value_objects::Money;
