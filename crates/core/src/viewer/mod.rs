//! The three viewer instances (lightbox, PDF viewer, video modal) and the
//! session object that wires them to the catalog, the category filter, and
//! keyboard input. Each viewer owns an independent carousel; only the
//! navigation algorithm is shared.

use crate::carousel::Carousel;
use crate::catalog::{Catalog, MediaItem, MediaKind};
use crate::command::{Key, NavCommand};
use crate::filter::CategoryFilter;
use crate::presenter::{MediaFrame, Presenter};

/// Which modal surface a viewer drives, and therefore which backing
/// collection it navigates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerKind {
    /// Images of the active category.
    Lightbox,
    /// PDFs of the active category.
    PdfViewer,
    /// Every video, independent of the category filter.
    VideoModal,
}

impl ViewerKind {
    /// The viewer a click on `item` routes to.
    pub fn for_item(item: &MediaItem) -> Self {
        match item.kind {
            MediaKind::Image => Self::Lightbox,
            MediaKind::Pdf => Self::PdfViewer,
            MediaKind::Video => Self::VideoModal,
        }
    }

    fn accepts(self, item: &MediaItem, filter: &CategoryFilter) -> bool {
        match self {
            Self::Lightbox => item.kind == MediaKind::Image && filter.is_visible(item),
            Self::PdfViewer => item.kind == MediaKind::Pdf && filter.is_visible(item),
            Self::VideoModal => item.kind == MediaKind::Video,
        }
    }

    /// Builds the candidate list for this viewer from current visibility
    /// state, in catalog order.
    pub fn candidates(self, catalog: &Catalog, filter: &CategoryFilter) -> Vec<MediaItem> {
        catalog
            .items()
            .iter()
            .filter(|item| self.accepts(item, filter))
            .cloned()
            .collect()
    }
}

/// One modal viewer instance: a carousel over this viewer's candidate list.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewer {
    kind: ViewerKind,
    carousel: Carousel<MediaItem>,
}

impl Viewer {
    pub fn new(kind: ViewerKind) -> Self {
        Self {
            kind,
            carousel: Carousel::new(),
        }
    }

    pub fn kind(&self) -> ViewerKind {
        self.kind
    }

    pub fn is_open(&self) -> bool {
        self.carousel.is_open()
    }

    pub fn current(&self) -> Option<&MediaItem> {
        self.carousel.current()
    }

    /// Opens at the clicked item and presents it.
    ///
    /// The candidate list is recomputed here, never cached between opens, so
    /// it always reflects the filter state at click time. If the clicked id
    /// is not in the freshly computed list (the filter changed between render
    /// and click, or the id is unknown) the open declines silently: no state
    /// change, no presenter call.
    pub fn open(
        &mut self,
        catalog: &Catalog,
        filter: &CategoryFilter,
        item_id: &str,
        presenter: &mut dyn Presenter,
    ) -> bool {
        let candidates = self.kind.candidates(catalog, filter);
        let start = candidates.iter().position(|item| item.id == item_id);
        if !self.carousel.open(candidates, start) {
            return false;
        }
        self.present(presenter);
        true
    }

    /// Applies a navigation command. All commands are no-ops while closed.
    pub fn handle(&mut self, command: NavCommand, presenter: &mut dyn Presenter) {
        if !self.carousel.is_open() {
            return;
        }
        match command {
            NavCommand::Next => {
                self.carousel.next();
                self.present(presenter);
            }
            NavCommand::Prev => {
                self.carousel.prev();
                self.present(presenter);
            }
            NavCommand::Close => {
                self.carousel.close();
                presenter.clear();
            }
        }
    }

    fn present(&self, presenter: &mut dyn Presenter) {
        if let Some(item) = self.carousel.current() {
            presenter.show(&MediaFrame::for_item(item));
        }
    }
}

/// Session façade over the catalog, the category filter, and the three
/// viewers. Item clicks route to the viewer matching the item's media kind;
/// key presses go to whichever viewer is currently open.
#[derive(Debug, Clone, PartialEq)]
pub struct Gallery {
    catalog: Catalog,
    filter: CategoryFilter,
    lightbox: Viewer,
    pdf_viewer: Viewer,
    video_modal: Viewer,
}

impl Gallery {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            filter: CategoryFilter::new(),
            lightbox: Viewer::new(ViewerKind::Lightbox),
            pdf_viewer: Viewer::new(ViewerKind::PdfViewer),
            video_modal: Viewer::new(ViewerKind::VideoModal),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn active_category(&self) -> &str {
        self.filter.active()
    }

    /// Selects a filter tab. Open viewers keep navigating their snapshot;
    /// candidate lists are only re-derived on the next open.
    pub fn select_category(&mut self, category: impl Into<String>) {
        self.filter.set_active(category);
    }

    /// Items visible in the portfolio grid under the active category.
    pub fn visible_items(&self) -> Vec<&MediaItem> {
        self.filter.visible_items(&self.catalog)
    }

    /// The kind of the currently open viewer, if any.
    pub fn open_viewer(&self) -> Option<ViewerKind> {
        self.viewers()
            .into_iter()
            .find(|viewer| viewer.is_open())
            .map(Viewer::kind)
    }

    /// The item the open viewer is positioned on, if any.
    pub fn current_item(&self) -> Option<&MediaItem> {
        self.viewers().into_iter().find_map(Viewer::current)
    }

    /// Handles a click on a catalog item: routes to the viewer for the
    /// item's media kind and opens it there. Returns whether a viewer
    /// actually opened.
    pub fn activate(&mut self, item_id: &str, presenter: &mut dyn Presenter) -> bool {
        let Some(kind) = self.catalog.item(item_id).map(ViewerKind::for_item) else {
            return false;
        };
        let Gallery {
            catalog,
            filter,
            lightbox,
            pdf_viewer,
            video_modal,
        } = self;
        let viewer = match kind {
            ViewerKind::Lightbox => lightbox,
            ViewerKind::PdfViewer => pdf_viewer,
            ViewerKind::VideoModal => video_modal,
        };
        viewer.open(catalog, filter, item_id, presenter)
    }

    /// Delivers a key press to the open viewer. Returns whether the key was
    /// consumed.
    pub fn handle_key(&mut self, key: Key, presenter: &mut dyn Presenter) -> bool {
        let Some(command) = NavCommand::for_key(key) else {
            return false;
        };
        self.dispatch(command, presenter)
    }

    /// Feeds a navigation command to the open viewer. Returns whether a
    /// viewer was open to receive it.
    pub fn dispatch(&mut self, command: NavCommand, presenter: &mut dyn Presenter) -> bool {
        let Some(viewer) = self.viewers_mut().into_iter().find(|v| v.is_open()) else {
            return false;
        };
        viewer.handle(command, presenter);
        true
    }

    fn viewers(&self) -> [&Viewer; 3] {
        [&self.lightbox, &self.pdf_viewer, &self.video_modal]
    }

    fn viewers_mut(&mut self) -> [&mut Viewer; 3] {
        [
            &mut self.lightbox,
            &mut self.pdf_viewer,
            &mut self.video_modal,
        ]
    }
}
