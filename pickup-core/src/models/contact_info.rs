use serde::{Deserialize, Serialize};

/// Contact details as typed. Nothing here is validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub full_name: String,
    pub email: String,
    pub mobile: String,
}
