//! Catalog product and its stock rules.

use chrono::{DateTime, Utc};
use common::ProductId;
use serde::Serialize;
use thiserror::Error;

use crate::{Category, Money};

/// Errors raised while creating or mutating a product.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProductError {
    #[error("Product ID is required")]
    IdRequired,

    #[error("Product name is required")]
    NameRequired,

    #[error("Invalid price: {price} (must be greater than 0)")]
    InvalidPrice { price: Money },

    #[error("Invalid quantity: {quantity} (must be greater than 0)")]
    InvalidQuantity { quantity: u32 },

    #[error("Insufficient stock for {product_id}: requested {requested}, available {available}")]
    InsufficientStock {
        product_id: ProductId,
        requested: u32,
        available: u32,
    },

    #[error("Stock for {product_id} would overflow")]
    StockOverflow { product_id: ProductId },

    #[error("Invalid category: {0}")]
    InvalidCategory(String),
}

/// A lamp in the catalog.
///
/// Fields are private; every mutation goes through a validated setter or
/// through [`Product::debit`] / [`Product::credit`], so a product can never
/// hold an empty name, a non-positive price, or negative stock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    id: ProductId,
    name: String,
    description: String,
    #[serde(rename = "price_cents")]
    price: Money,
    stock: u32,
    category: Category,
    image_url: String,
    created_at: DateTime<Utc>,
}

impl Product {
    /// Creates a validated product.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        description: impl Into<String>,
        price: Money,
        stock: u32,
        category: Category,
        image_url: impl Into<String>,
    ) -> Result<Self, ProductError> {
        let id = id.into();
        if id.is_blank() {
            return Err(ProductError::IdRequired);
        }

        let name = name.into();
        if name.trim().is_empty() {
            return Err(ProductError::NameRequired);
        }

        if !price.is_positive() {
            return Err(ProductError::InvalidPrice { price });
        }

        Ok(Self {
            id,
            name,
            description: description.into(),
            price,
            stock,
            category,
            image_url: image_url.into(),
            created_at: Utc::now(),
        })
    }

    pub fn id(&self) -> &ProductId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn stock(&self) -> u32 {
        self.stock
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), ProductError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ProductError::NameRequired);
        }
        self.name = name;
        Ok(())
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn set_price(&mut self, price: Money) -> Result<(), ProductError> {
        if !price.is_positive() {
            return Err(ProductError::InvalidPrice { price });
        }
        self.price = price;
        Ok(())
    }

    pub fn set_category(&mut self, category: Category) {
        self.category = category;
    }

    pub fn set_image_url(&mut self, url: impl Into<String>) {
        self.image_url = url.into();
    }

    /// Returns true if at least one unit is in stock.
    pub fn is_in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Returns true if `quantity` units can be taken from stock.
    pub fn is_available(&self, quantity: u32) -> bool {
        self.stock >= quantity
    }

    /// Removes `quantity` units from stock.
    pub fn debit(&mut self, quantity: u32) -> Result<(), ProductError> {
        if quantity == 0 {
            return Err(ProductError::InvalidQuantity { quantity });
        }
        if !self.is_available(quantity) {
            return Err(self.insufficient(quantity));
        }
        self.stock -= quantity;
        Ok(())
    }

    /// Returns `quantity` units to stock (restock or customer return).
    pub fn credit(&mut self, quantity: u32) -> Result<(), ProductError> {
        if quantity == 0 {
            return Err(ProductError::InvalidQuantity { quantity });
        }
        self.stock = self
            .stock
            .checked_add(quantity)
            .ok_or_else(|| ProductError::StockOverflow {
                product_id: self.id.clone(),
            })?;
        Ok(())
    }

    /// Builds the error reported when `requested` units exceed stock.
    pub fn insufficient(&self, requested: u32) -> ProductError {
        ProductError::InsufficientStock {
            product_id: self.id.clone(),
            requested,
            available: self.stock,
        }
    }

    /// Returns the price formatted for display, e.g. `$49.99`.
    pub fn formatted_price(&self) -> String {
        self.price.to_string()
    }
}
