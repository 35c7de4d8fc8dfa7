//! In-memory storefront state: the product ledger, the single active cart,
//! and placed orders, coordinated behind one exclusive lock.

pub mod error;
pub mod ledger;
pub mod seed;
pub mod store;

pub use error::{Result, StoreError};
pub use ledger::ProductLedger;
pub use seed::{seed_catalog, seed_ledger};
pub use store::Store;
