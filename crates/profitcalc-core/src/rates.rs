//! Reference commission rates by product category.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ProfitError;

/// Product categories with a published commission rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    Accessories,
    Electronics,
    Apparel,
    Home,
    Beauty,
    Baby,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 6] = [
        Category::Accessories,
        Category::Electronics,
        Category::Apparel,
        Category::Home,
        Category::Beauty,
        Category::Baby,
    ];

    /// Commission rate as a fraction.
    #[must_use]
    pub fn rate(self) -> f64 {
        match self {
            Self::Accessories => 0.17,
            Self::Electronics => 0.10,
            Self::Apparel => 0.165,
            Self::Home => 0.15,
            Self::Beauty => 0.14,
            Self::Baby => 0.13,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Accessories => "Accessories",
            Self::Electronics => "Electronics",
            Self::Apparel => "Apparel",
            Self::Home => "Home",
            Self::Beauty => "Beauty",
            Self::Baby => "Baby",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = ProfitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ProfitError::UnknownCategory(s.to_string()))
    }
}
