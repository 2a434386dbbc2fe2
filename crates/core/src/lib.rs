//! Core library for the Portfolio Gallery application.
//!
//! The crate models the interactive behavior of a single-page portfolio
//! site: a fixed media catalog filtered by category and browsed through
//! three modal viewers (image lightbox, PDF viewer, video modal) that share
//! one generic circular carousel. Each module owns a distinct concern
//! (catalog data, visibility filtering, navigation, input translation,
//! rendering seam) so the rendering host only has to wire events in and
//! paint frames out.

pub mod carousel;
pub mod catalog;
pub mod command;
pub mod error;
pub mod filter;
pub mod presenter;
pub mod viewer;

pub use carousel::{Carousel, CarouselState};
pub use catalog::{Catalog, MediaItem, MediaKind};
pub use command::{Key, NavCommand};
pub use error::{GalleryError, Result};
pub use filter::{CategoryFilter, DEFAULT_CATEGORY};
pub use presenter::{MediaFrame, Presenter, RecordingPresenter};
pub use viewer::{Gallery, Viewer, ViewerKind};
