//! Price configuration.

use serde::Serialize;

use crate::error::{Error, Result};

/// Currency used when none is given.
pub const DEFAULT_CURRENCY: &str = "USD";

/// Price per distance unit used when none is given.
pub const DEFAULT_PRICE_PER_UNIT: f64 = 0.5;

/// Currency label and price charged per distance unit (kilometre).
///
/// # Examples
///
/// ```
/// use geo_route::models::PriceConfig;
///
/// let price = PriceConfig::new("COP", 2000.0).unwrap();
/// assert_eq!(price.cost(1.5), 3000.0);
///
/// let default = PriceConfig::default();
/// assert_eq!(default.currency(), "USD");
/// assert_eq!(default.price_per_unit(), 0.5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceConfig {
    currency: String,
    price_per_unit: f64,
}

impl Default for PriceConfig {
    fn default() -> Self {
        Self {
            currency: DEFAULT_CURRENCY.to_string(),
            price_per_unit: DEFAULT_PRICE_PER_UNIT,
        }
    }
}

impl PriceConfig {
    /// Creates a price configuration.
    ///
    /// Fails with [`Error::InvalidPrice`] if `price_per_unit` is negative or
    /// not finite.
    pub fn new(currency: impl Into<String>, price_per_unit: f64) -> Result<Self> {
        if !price_per_unit.is_finite() || price_per_unit < 0.0 {
            return Err(Error::InvalidPrice(price_per_unit));
        }
        Ok(Self {
            currency: currency.into(),
            price_per_unit,
        })
    }

    /// Free-form currency label.
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Price per distance unit.
    pub fn price_per_unit(&self) -> f64 {
        self.price_per_unit
    }

    /// Cost of travelling `distance` units.
    pub fn cost(&self, distance: f64) -> f64 {
        distance * self.price_per_unit
    }
}
