use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{GalleryError, Result};

/// How a portfolio entry is rendered once its viewer opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MediaKind {
    Image,
    Pdf,
    Video,
}

/// A single entry of the portfolio catalog.
///
/// `source` is the path or URL the presenter ultimately renders: the image
/// src for [`MediaKind::Image`], the document path for [`MediaKind::Pdf`],
/// and the stream src for [`MediaKind::Video`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    pub category: String,
    pub kind: MediaKind,
    pub source: String,
}

impl MediaItem {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        subtitle: impl Into<String>,
        category: impl Into<String>,
        kind: MediaKind,
        source: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            subtitle: subtitle.into(),
            category: category.into(),
            kind,
            source: source.into(),
        }
    }
}

/// The fixed, ordered catalog of portfolio entries.
///
/// Order is significant: carousels navigate candidate lists in catalog
/// order, so the catalog plays the role the markup order plays on the
/// rendered page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    items: Vec<MediaItem>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: MediaItem) {
        self.items.push(item);
    }

    pub fn items(&self) -> &[MediaItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Looks up an entry by its id.
    pub fn item(&self, id: &str) -> Option<&MediaItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Decodes a catalog from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self> {
        let catalog: Self = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Reads and decodes a catalog file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Checks structural invariants: ids must be present and unique.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for item in &self.items {
            if item.id.is_empty() {
                return Err(GalleryError::InvalidCatalog(format!(
                    "entry `{}` has an empty id",
                    item.title
                )));
            }
            if !seen.insert(item.id.as_str()) {
                return Err(GalleryError::InvalidCatalog(format!(
                    "duplicate id `{}`",
                    item.id
                )));
            }
        }
        Ok(())
    }

    /// Built-in catalog mirroring the sections of the demo portfolio page.
    /// Used by the command line demo and by tests.
    pub fn sample() -> Self {
        let mut catalog = Self::new();
        catalog.push(MediaItem::new(
            "aurora-brand",
            "Aurora Coffee",
            "Brand Identity Kit",
            "brand-kits",
            MediaKind::Image,
            "images/aurora-brand.jpg",
        ));
        catalog.push(MediaItem::new(
            "tidal-brand",
            "Tidal Fitness",
            "Brand Identity Kit",
            "brand-kits",
            MediaKind::Image,
            "images/tidal-brand.jpg",
        ));
        catalog.push(MediaItem::new(
            "aurora-guide",
            "Aurora Style Guide",
            "Brand Guidelines",
            "brand-kits",
            MediaKind::Pdf,
            "pdfs/aurora-guide.pdf",
        ));
        catalog.push(MediaItem::new(
            "summit-poster",
            "Summit Festival",
            "Event Poster",
            "posters",
            MediaKind::Image,
            "images/summit-poster.jpg",
        ));
        catalog.push(MediaItem::new(
            "harbor-menu",
            "Harbor Bistro",
            "Menu Design",
            "posters",
            MediaKind::Pdf,
            "pdfs/harbor-menu.pdf",
        ));
        catalog.push(MediaItem::new(
            "launch-reel",
            "Product Launch",
            "Motion Reel",
            "videos",
            MediaKind::Video,
            "videos/launch-reel.mp4",
        ));
        catalog.push(MediaItem::new(
            "studio-tour",
            "Studio Tour",
            "Behind the Scenes",
            "videos",
            MediaKind::Video,
            "videos/studio-tour.mp4",
        ));
        catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_catalog_json() {
        let json = r#"{
            "items": [
                {
                    "id": "a",
                    "title": "A",
                    "subtitle": "First",
                    "category": "brand-kits",
                    "kind": "image",
                    "source": "images/a.jpg"
                }
            ]
        }"#;

        let catalog = Catalog::from_json(json).expect("catalog should decode");
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.item("a").unwrap().kind, MediaKind::Image);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let mut catalog = Catalog::new();
        catalog.push(MediaItem::new(
            "a",
            "A",
            "",
            "brand-kits",
            MediaKind::Image,
            "images/a.jpg",
        ));
        catalog.push(MediaItem::new(
            "a",
            "A again",
            "",
            "posters",
            MediaKind::Pdf,
            "pdfs/a.pdf",
        ));

        let err = catalog.validate().unwrap_err();
        assert!(format!("{err}").contains("duplicate id `a`"));
    }

    #[test]
    fn rejects_empty_ids() {
        let mut catalog = Catalog::new();
        catalog.push(MediaItem::new(
            "",
            "Nameless",
            "",
            "posters",
            MediaKind::Image,
            "images/x.jpg",
        ));

        assert!(catalog.validate().is_err());
    }

    #[test]
    fn sample_catalog_is_valid() {
        let catalog = Catalog::sample();
        assert!(catalog.validate().is_ok());
        assert!(!catalog.is_empty());
    }
}
