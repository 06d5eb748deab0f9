use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::TimeSlot;

/// Where every pickup is delivered. Not editable by the customer.
pub const DROP_OFF_ADDRESS: &str = "123 Static Street, City";

const DATE_PROMPT: &str = "Select Pickup Date";

/// Pickup logistics entered on the booking screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickupInfo {
    pub address: String,
    /// `None` until the customer picks a date.
    pub date: Option<NaiveDate>,
    pub time: TimeSlot,
}

impl PickupInfo {
    pub fn drop_off_address(&self) -> &'static str {
        DROP_OFF_ADDRESS
    }

    /// Text for the date button: the chosen date as `Fri Oct 16 2026`, or a
    /// prompt while no date is set.
    pub fn date_label(&self) -> String {
        self.date
            .map(|date| date.format("%a %b %d %Y").to_string())
            .unwrap_or_else(|| DATE_PROMPT.to_string())
    }

    /// Date the picker opens on.
    pub fn picker_initial_date(
        &self,
        today: NaiveDate,
    ) -> NaiveDate {
        self.date.unwrap_or(today)
    }
}
