//! Customer contact details captured at checkout.

use serde::Serialize;
use thiserror::Error;

/// Errors raised when customer details are missing or malformed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CustomerError {
    #[error("Customer name is required")]
    NameRequired,

    #[error("Customer email is required")]
    EmailRequired,

    #[error("Invalid email format: {0}")]
    InvalidEmail(String),

    #[error("Delivery address is required")]
    AddressRequired,

    #[error("City is required")]
    CityRequired,
}

/// Who an order is for.
///
/// All fields are trimmed on construction. Phone is optional; the rest are
/// required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Customer {
    name: String,
    email: String,
    phone: String,
    address: String,
    city: String,
}

impl Customer {
    pub fn new(
        name: &str,
        email: &str,
        phone: &str,
        address: &str,
        city: &str,
    ) -> Result<Self, CustomerError> {
        let customer = Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            phone: phone.trim().to_string(),
            address: address.trim().to_string(),
            city: city.trim().to_string(),
        };
        customer.validate()?;
        Ok(customer)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    /// Checks that every required field is present and the email looks like one.
    pub fn validate(&self) -> Result<(), CustomerError> {
        if self.name.is_empty() {
            return Err(CustomerError::NameRequired);
        }
        if self.email.is_empty() {
            return Err(CustomerError::EmailRequired);
        }
        if !self.email.contains('@') || !self.email.contains('.') {
            return Err(CustomerError::InvalidEmail(self.email.clone()));
        }
        if self.address.is_empty() {
            return Err(CustomerError::AddressRequired);
        }
        if self.city.is_empty() {
            return Err(CustomerError::CityRequired);
        }
        Ok(())
    }

    /// One-line summary, e.g. `Ana <ana@example.com> - Av. Amazonas 123, Quito`.
    pub fn full_info(&self) -> String {
        format!(
            "{} <{}> - {}, {}",
            self.name, self.email, self.address, self.city
        )
    }
}
