//! The shopping cart: the staging area an order is built from.

use common::ProductId;
use serde::Serialize;
use thiserror::Error;

use crate::{Money, Product};

/// Errors that can occur while mutating the cart.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    #[error("Invalid quantity: {quantity} (must be greater than 0)")]
    InvalidQuantity { quantity: u32 },

    #[error("Insufficient stock for {product_id}: requested {requested}, available {available}")]
    InsufficientStock {
        product_id: ProductId,
        requested: u32,
        available: u32,
    },

    #[error("Item not found in cart: {product_id}")]
    ItemNotFound { product_id: ProductId },

    #[error("Discount cannot be negative: {discount}")]
    NegativeDiscount { discount: Money },

    #[error("Discount {discount} exceeds cart subtotal {subtotal}")]
    DiscountExceedsSubtotal { discount: Money, subtotal: Money },

    #[error("Cart amount would overflow when adding {product_id}")]
    AmountOverflow { product_id: ProductId },
}

/// One product + quantity entry in the cart.
///
/// Name, price, and image are copied from the product when the line is
/// first added, so later catalog edits do not reprice an existing cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLine {
    product_id: ProductId,
    product_name: String,
    #[serde(rename = "price_cents")]
    price: Money,
    quantity: u32,
    image_url: String,
}

impl CartLine {
    fn snapshot(product: &Product, quantity: u32) -> Self {
        Self {
            product_id: product.id().clone(),
            product_name: product.name().to_string(),
            price: product.price(),
            quantity,
            image_url: product.image_url().to_string(),
        }
    }

    pub fn product_id(&self) -> &ProductId {
        &self.product_id
    }

    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    /// Returns `price * quantity` for this line.
    pub fn subtotal(&self) -> Money {
        self.price.multiply(self.quantity)
    }
}

/// The single active cart of the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
    discount: Money,
}

impl Cart {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn discount(&self) -> Money {
        self.discount
    }

    /// Returns the line for a product, if present.
    pub fn line(&self, product_id: &ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| &l.product_id == product_id)
    }

    /// Adds `quantity` units of `product`.
    ///
    /// When the product already has a line, the combined quantity is checked
    /// against current stock and written back to that line; the line keeps
    /// its original price snapshot.
    pub fn add_item(&mut self, product: &Product, quantity: u32) -> Result<(), CartError> {
        if quantity == 0 {
            return Err(CartError::InvalidQuantity { quantity });
        }

        let existing = self
            .lines
            .iter()
            .position(|l| &l.product_id == product.id());

        let requested = match existing {
            Some(idx) => self.lines[idx].quantity.saturating_add(quantity),
            None => quantity,
        };

        if !product.is_available(requested) {
            return Err(CartError::InsufficientStock {
                product_id: product.id().clone(),
                requested,
                available: product.stock(),
            });
        }

        let price = match existing {
            Some(idx) => self.lines[idx].price,
            None => product.price(),
        };
        if !self.fits(existing, price, requested) {
            return Err(CartError::AmountOverflow {
                product_id: product.id().clone(),
            });
        }

        match existing {
            Some(idx) => self.lines[idx].quantity = requested,
            None => self.lines.push(CartLine::snapshot(product, quantity)),
        }
        Ok(())
    }

    /// Whether the subtotal and unit count still fit once the line at
    /// `replacing` (or a new line) holds `quantity` units at `price`.
    fn fits(&self, replacing: Option<usize>, price: Money, quantity: u32) -> bool {
        let Some(line_total) = price.checked_multiply(quantity) else {
            return false;
        };
        self.lines
            .iter()
            .enumerate()
            .filter(|(idx, _)| Some(*idx) != replacing)
            .try_fold((line_total, quantity), |(sum, units), (_, line)| {
                let sum = sum.checked_add(line.price.checked_multiply(line.quantity)?)?;
                Some((sum, units.checked_add(line.quantity)?))
            })
            .is_some()
    }

    /// Removes the line for `product_id`.
    pub fn remove_item(&mut self, product_id: &ProductId) -> Result<(), CartError> {
        let idx = self
            .lines
            .iter()
            .position(|l| &l.product_id == product_id)
            .ok_or_else(|| CartError::ItemNotFound {
                product_id: product_id.clone(),
            })?;
        self.lines.remove(idx);
        Ok(())
    }

    /// Sets the discount; it must be non-negative and no larger than the subtotal.
    pub fn set_discount(&mut self, discount: Money) -> Result<(), CartError> {
        if discount.is_negative() {
            return Err(CartError::NegativeDiscount { discount });
        }
        let subtotal = self.subtotal();
        if discount > subtotal {
            return Err(CartError::DiscountExceedsSubtotal { discount, subtotal });
        }
        self.discount = discount;
        Ok(())
    }

    /// Sum of `price * quantity` over all lines.
    ///
    /// [`Cart::add_item`] refuses any line that would push this past `i64`.
    pub fn subtotal(&self) -> Money {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    /// Subtotal minus discount, never below zero.
    ///
    /// Removing lines after a discount was set can leave the discount above
    /// the subtotal, hence the clamp.
    pub fn total(&self) -> Money {
        (self.subtotal() - self.discount).floor_zero()
    }

    /// Total number of units across all lines.
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Empties the cart and resets the discount.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.discount = Money::zero();
    }
}
