mod bed_size;
mod booking_request;
mod category;
mod contact_info;
mod item_counts;
mod pickup_info;
mod quote_summary;
mod time_slot;

pub use bed_size::BedSize;
pub use booking_request::BookingRequest;
pub use category::Category;
pub use contact_info::ContactInfo;
pub use item_counts::{ItemCounts, RecycleItems};
pub use pickup_info::{DROP_OFF_ADDRESS, PickupInfo};
pub use quote_summary::QuoteSummary;
pub use time_slot::{ParseTimeSlotError, TimeSlot};
