use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BedSize {
    Single,
    SingleLong,
    Queen,
    KingSingle,
    Double,
    King,
}

impl BedSize {
    pub const COUNT: usize = 6;

    pub const ALL: [BedSize; Self::COUNT] = [
        Self::Single,
        Self::SingleLong,
        Self::Queen,
        Self::KingSingle,
        Self::Double,
        Self::King,
    ];

    /// Row layout of the item grid: three rows, two sizes per row.
    pub const GRID_ROWS: [(BedSize, BedSize); 3] = [
        (Self::Single, Self::KingSingle),
        (Self::SingleLong, Self::Double),
        (Self::Queen, Self::King),
    ];

    /// Position of this size in [`BedSize::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::SingleLong => "singleLong",
            Self::Queen => "queen",
            Self::KingSingle => "kingSingle",
            Self::Double => "double",
            Self::King => "king",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Single => "Single",
            Self::SingleLong => "Single Long",
            Self::Queen => "Queen",
            Self::KingSingle => "King Single",
            Self::Double => "Double",
            Self::King => "King",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|size| size.as_str() == s)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn index_matches_position_in_all() {
        for (position, size) in BedSize::ALL.iter().enumerate() {
            assert_eq!(size.index(), position);
        }
    }

    #[test]
    fn grid_rows_cover_every_size_once() {
        let mut seen: Vec<BedSize> = BedSize::GRID_ROWS
            .iter()
            .flat_map(|(left, right)| [*left, *right])
            .collect();
        seen.sort_by_key(|size| size.index());

        assert_eq!(seen, BedSize::ALL.to_vec());
    }

    #[test]
    fn parse_accepts_keys_and_rejects_labels() {
        assert_eq!(BedSize::parse("kingSingle"), Some(BedSize::KingSingle));
        assert_eq!(BedSize::parse("King Single"), None);
    }
}
