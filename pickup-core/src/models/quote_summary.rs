use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Pricing and logistics figures shown under "Quote Summary".
///
/// Always derived from the item counts; see
/// [`QuoteCalculator`](crate::calculations::QuoteCalculator).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteSummary {
    pub total_items: u64,
    pub delivery_fee: Decimal,
    pub recycling_fee: Decimal,
    pub estimate_distance: String,
}

impl QuoteSummary {
    /// Label/value pairs in display order.
    pub fn lines(&self) -> [(&'static str, String); 4] {
        [
            ("Estimate Distance", self.estimate_distance.clone()),
            ("Total Items", self.total_items.to_string()),
            ("Delivery Fee", format!("${}", self.delivery_fee)),
            ("Recycling Fee", format!("${}", self.recycling_fee)),
        ]
    }
}

impl fmt::Display for QuoteSummary {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        for (label, value) in self.lines() {
            writeln!(f, "{label}: {value}")?;
        }
        Ok(())
    }
}
