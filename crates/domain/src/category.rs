//! Product categories.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::product::ProductError;

/// The flower family a lamp belongs to.
///
/// Serialized with its catalog token (`rosa`, `girasol`, `loto`, `margarita`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Category {
    #[default]
    #[serde(rename = "rosa")]
    Rose,
    #[serde(rename = "girasol")]
    Sunflower,
    #[serde(rename = "loto")]
    Lotus,
    #[serde(rename = "margarita")]
    Daisy,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Rose,
        Category::Sunflower,
        Category::Lotus,
        Category::Daisy,
    ];

    /// Returns the catalog token for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Rose => "rosa",
            Category::Sunflower => "girasol",
            Category::Lotus => "loto",
            Category::Daisy => "margarita",
        }
    }

    /// Lenient parse used by request filters: unknown tokens fall back to `Rose`.
    pub fn from_query(token: &str) -> Self {
        token.parse().unwrap_or_default()
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = ProductError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ProductError::InvalidCategory(s.to_string()))
    }
}
