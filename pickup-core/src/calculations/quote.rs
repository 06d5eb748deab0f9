//! Quote summary calculation.
//!
//! A quote is a pure function of the item counts:
//!
//! | Figure            | Value                                   |
//! |-------------------|-----------------------------------------|
//! | Total items       | sum of all sizes in both categories     |
//! | Delivery fee      | total × delivery rate (10 per item)     |
//! | Recycling fee     | total × recycling rate (5 per item)     |
//! | Estimate distance | fixed "10 km" (no geocoding is done)    |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use pickup_core::calculations::QuoteCalculator;
//! use pickup_core::{BedSize, Category, RecycleItems};
//!
//! let mut items = RecycleItems::default();
//! items.set(Category::Mattress, BedSize::Queen, 2);
//! items.set(Category::Bases, BedSize::King, 1);
//!
//! let quote = QuoteCalculator::standard().calculate(&items);
//!
//! assert_eq!(quote.total_items, 3);
//! assert_eq!(quote.delivery_fee, dec!(30));
//! assert_eq!(quote.recycling_fee, dec!(15));
//! assert_eq!(quote.estimate_distance, "10 km");
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{QuoteSummary, RecycleItems};

/// Distance shown on every quote until real routing exists.
pub const PLACEHOLDER_DISTANCE: &str = "10 km";

/// Errors that can occur when building a calculator from custom rates.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuoteError {
    #[error("delivery fee per item must be non-negative, got {0}")]
    NegativeDeliveryRate(Decimal),

    #[error("recycling fee per item must be non-negative, got {0}")]
    NegativeRecyclingRate(Decimal),
}

/// Per-item rates applied to the total item count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRates {
    pub delivery_fee_per_item: Decimal,
    pub recycling_fee_per_item: Decimal,
    pub estimate_distance: String,
}

impl QuoteRates {
    /// The published rates: 10 delivery and 5 recycling per item.
    pub fn standard() -> Self {
        Self {
            delivery_fee_per_item: Decimal::TEN,
            recycling_fee_per_item: Decimal::new(5, 0),
            estimate_distance: PLACEHOLDER_DISTANCE.to_string(),
        }
    }
}

impl Default for QuoteRates {
    fn default() -> Self {
        Self::standard()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteCalculator {
    rates: QuoteRates,
}

impl QuoteCalculator {
    pub fn new(rates: QuoteRates) -> Result<Self, QuoteError> {
        if rates.delivery_fee_per_item.is_sign_negative() {
            return Err(QuoteError::NegativeDeliveryRate(
                rates.delivery_fee_per_item,
            ));
        }
        if rates.recycling_fee_per_item.is_sign_negative() {
            return Err(QuoteError::NegativeRecyclingRate(
                rates.recycling_fee_per_item,
            ));
        }
        Ok(Self { rates })
    }

    pub fn standard() -> Self {
        Self {
            rates: QuoteRates::standard(),
        }
    }

    pub fn rates(&self) -> &QuoteRates {
        &self.rates
    }

    pub fn calculate(
        &self,
        items: &RecycleItems,
    ) -> QuoteSummary {
        let total_items = items.total();
        let total = Decimal::from(total_items);

        QuoteSummary {
            total_items,
            delivery_fee: total * self.rates.delivery_fee_per_item,
            recycling_fee: total * self.rates.recycling_fee_per_item,
            estimate_distance: self.rates.estimate_distance.clone(),
        }
    }
}

impl Default for QuoteCalculator {
    fn default() -> Self {
        Self::standard()
    }
}
