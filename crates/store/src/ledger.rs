//! Product ledger: the authoritative per-SKU price and stock record.

use std::collections::BTreeMap;

use common::ProductId;
use domain::{CartLine, Category, Money, Product, ProductError};

use crate::{Result, StoreError};

/// Products keyed by SKU.
///
/// Listing order is by product id.
#[derive(Debug, Clone, Default)]
pub struct ProductLedger {
    products: BTreeMap<ProductId, Product>,
}

impl ProductLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and registers a new product, returning a copy of it.
    #[allow(clippy::too_many_arguments)]
    pub fn create(
        &mut self,
        id: impl Into<ProductId>,
        name: impl Into<String>,
        description: impl Into<String>,
        price: Money,
        stock: u32,
        category: Category,
        image_url: impl Into<String>,
    ) -> Result<Product> {
        let product = Product::new(id, name, description, price, stock, category, image_url)?;
        self.insert(product.clone());
        Ok(product)
    }

    /// Inserts a product, returning the one it replaced.
    pub fn insert(&mut self, product: Product) -> Option<Product> {
        self.products.insert(product.id().clone(), product)
    }

    pub fn get(&self, id: &ProductId) -> Result<&Product> {
        self.products
            .get(id)
            .ok_or_else(|| StoreError::ProductNotFound(id.clone()))
    }

    fn get_mut(&mut self, id: &ProductId) -> Result<&mut Product> {
        self.products
            .get_mut(id)
            .ok_or_else(|| StoreError::ProductNotFound(id.clone()))
    }

    pub fn list_all(&self) -> Vec<Product> {
        self.products.values().cloned().collect()
    }

    pub fn list_by_category(&self, category: Category) -> Vec<Product> {
        self.products
            .values()
            .filter(|p| p.category() == category)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Returns true if the product exists and holds at least `quantity` units.
    pub fn is_available(&self, id: &ProductId, quantity: u32) -> bool {
        self.products
            .get(id)
            .is_some_and(|p| p.is_available(quantity))
    }

    pub fn debit(&mut self, id: &ProductId, quantity: u32) -> Result<()> {
        self.get_mut(id)?.debit(quantity)?;
        Ok(())
    }

    pub fn credit(&mut self, id: &ProductId, quantity: u32) -> Result<()> {
        self.get_mut(id)?.credit(quantity)?;
        Ok(())
    }

    /// Debits every line, or none of them.
    ///
    /// All lines are checked against current stock first; the ledger is
    /// only touched once every check has passed. Returns the number of
    /// units debited.
    pub fn debit_lines(&mut self, lines: &[CartLine]) -> Result<u64> {
        let mut wanted: BTreeMap<&ProductId, u32> = BTreeMap::new();
        for line in lines {
            let qty = wanted.entry(line.product_id()).or_default();
            *qty = qty.saturating_add(line.quantity());
        }

        for (&id, &quantity) in &wanted {
            let product = self.get(id)?;
            if quantity == 0 {
                return Err(ProductError::InvalidQuantity { quantity }.into());
            }
            if !product.is_available(quantity) {
                return Err(product.insufficient(quantity).into());
            }
        }

        let mut units = 0;
        for (id, quantity) in wanted {
            self.debit(id, quantity)?;
            units += u64::from(quantity);
        }
        Ok(units)
    }
}
