use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::calculations::common::parse_item_count;
use crate::models::{BedSize, Category};

/// Per-size item counts for one [`Category`].
///
/// Every size always has a count; a fresh value is all zeroes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemCounts {
    counts: [u32; BedSize::COUNT],
}

impl ItemCounts {
    pub fn get(&self, size: BedSize) -> u32 {
        self.counts[size.index()]
    }

    pub fn set(&mut self, size: BedSize, count: u32) {
        self.counts[size.index()] = count;
    }

    /// Sum of every size in this category.
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&count| u64::from(count)).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (BedSize, u32)> + '_ {
        BedSize::ALL.into_iter().map(|size| (size, self.get(size)))
    }
}

impl Index<BedSize> for ItemCounts {
    type Output = u32;

    fn index(&self, size: BedSize) -> &u32 {
        &self.counts[size.index()]
    }
}

/// Item counts for all categories, indexed by [`Category`] then [`BedSize`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecycleItems {
    categories: [ItemCounts; Category::COUNT],
}

impl RecycleItems {
    pub fn get(
        &self,
        category: Category,
        size: BedSize,
    ) -> u32 {
        self.categories[category.index()].get(size)
    }

    pub fn set(
        &mut self,
        category: Category,
        size: BedSize,
        count: u32,
    ) {
        self.categories[category.index()].set(size, count);
    }

    /// Returns a copy with the targeted cell replaced by the digits found in
    /// `raw_text`. All other cells are carried over unchanged.
    ///
    /// ```
    /// use pickup_core::{BedSize, Category, RecycleItems};
    ///
    /// let items = RecycleItems::default().update_item(Category::Mattress, BedSize::Single, "3abc");
    ///
    /// assert_eq!(items.get(Category::Mattress, BedSize::Single), 3);
    /// assert_eq!(items.get(Category::Bases, BedSize::Single), 0);
    /// ```
    #[must_use]
    pub fn update_item(
        &self,
        category: Category,
        size: BedSize,
        raw_text: &str,
    ) -> Self {
        let mut next = *self;
        next.set(category, size, parse_item_count(raw_text));
        next
    }

    /// Sum of every cell across both categories.
    pub fn total(&self) -> u64 {
        self.categories.iter().map(ItemCounts::total).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, &ItemCounts)> + '_ {
        Category::ALL
            .into_iter()
            .map(|category| (category, &self.categories[category.index()]))
    }
}

impl Index<Category> for RecycleItems {
    type Output = ItemCounts;

    fn index(&self, category: Category) -> &ItemCounts {
        &self.categories[category.index()]
    }
}
