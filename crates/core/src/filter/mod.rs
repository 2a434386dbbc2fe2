use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, MediaItem};

/// Category tab pre-selected when the page loads.
pub const DEFAULT_CATEGORY: &str = "brand-kits";

/// Single-active-category visibility filter over the catalog.
///
/// Exactly one category is active at a time; an item is visible iff its tag
/// matches the active one. There is no multi-select and no "all" sentinel
/// beyond the default tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryFilter {
    active: String,
}

impl Default for CategoryFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoryFilter {
    /// Creates a filter with [`DEFAULT_CATEGORY`] active.
    pub fn new() -> Self {
        Self::with_active(DEFAULT_CATEGORY)
    }

    pub fn with_active(category: impl Into<String>) -> Self {
        Self {
            active: category.into(),
        }
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    pub fn set_active(&mut self, category: impl Into<String>) {
        self.active = category.into();
    }

    /// Whether the item belongs to the active category. Exact match only.
    pub fn is_visible(&self, item: &MediaItem) -> bool {
        item.category == self.active
    }

    /// Currently visible items, in catalog order.
    pub fn visible_items<'a>(&self, catalog: &'a Catalog) -> Vec<&'a MediaItem> {
        catalog
            .items()
            .iter()
            .filter(|item| self.is_visible(item))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MediaKind;

    fn item(id: &str, category: &str) -> MediaItem {
        MediaItem::new(id, id, "", category, MediaKind::Image, "src")
    }

    #[test]
    fn defaults_to_brand_kits() {
        let filter = CategoryFilter::new();
        assert_eq!(filter.active(), "brand-kits");
    }

    #[test]
    fn matches_categories_exactly() {
        let filter = CategoryFilter::with_active("posters");
        assert!(filter.is_visible(&item("a", "posters")));
        assert!(!filter.is_visible(&item("b", "poster")));
        assert!(!filter.is_visible(&item("c", "Posters")));
    }

    #[test]
    fn visible_items_preserve_catalog_order() {
        let mut catalog = Catalog::new();
        catalog.push(item("a", "posters"));
        catalog.push(item("b", "brand-kits"));
        catalog.push(item("c", "posters"));

        let filter = CategoryFilter::with_active("posters");
        let visible = filter.visible_items(&catalog);
        let ids: Vec<&str> = visible.iter().map(|item| item.id.as_str()).collect();
        assert_eq!(ids, ["a", "c"]);
    }

    #[test]
    fn switching_category_changes_visibility() {
        let mut filter = CategoryFilter::new();
        let entry = item("a", "videos");
        assert!(!filter.is_visible(&entry));

        filter.set_active("videos");
        assert!(filter.is_visible(&entry));
    }
}
