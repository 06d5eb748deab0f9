use serde::{Deserialize, Serialize};

use crate::models::{ContactInfo, PickupInfo, QuoteSummary, RecycleItems};

/// Everything a booking hand-off carries.
///
/// Built from the form when "Book & Continue" is pressed. There is no
/// receiving service yet, so the request is only logged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub contact: ContactInfo,
    pub pickup: PickupInfo,
    pub drop_off_address: String,
    pub items: RecycleItems,
    pub quote: QuoteSummary,
}
