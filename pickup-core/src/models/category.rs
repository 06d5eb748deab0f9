use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Mattress,
    Bases,
}

impl Category {
    pub const COUNT: usize = 2;

    pub const ALL: [Category; Self::COUNT] = [Self::Mattress, Self::Bases];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mattress => "mattress",
            Self::Bases => "bases",
        }
    }

    /// Heading shown above the category's item grid.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Mattress => "Mattresses",
            Self::Bases => "Bases",
        }
    }
}
