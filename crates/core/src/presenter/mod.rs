use serde::{Deserialize, Serialize};

use crate::catalog::{MediaItem, MediaKind};

/// Everything the rendering side needs to paint the current item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaFrame {
    pub kind: MediaKind,
    pub source: String,
    pub caption: String,
}

impl MediaFrame {
    /// Builds the frame for a catalog entry. Images and videos caption with
    /// `"title - subtitle"`; the PDF viewer header shows the bare title.
    pub fn for_item(item: &MediaItem) -> Self {
        let caption = match item.kind {
            MediaKind::Pdf => item.title.clone(),
            MediaKind::Image | MediaKind::Video => {
                format!("{} - {}", item.title, item.subtitle)
            }
        };
        Self {
            kind: item.kind,
            source: item.source.clone(),
            caption,
        }
    }
}

/// Rendering collaborator for a viewer instance.
///
/// Implementations paint frames onto whatever surface they own. The methods
/// are infallible by signature: rendering problems are the presenter's own
/// concern and never feed back into carousel state.
pub trait Presenter {
    /// Renders `frame` and marks the surface open.
    fn show(&mut self, frame: &MediaFrame);

    /// Marks the surface closed and drops whatever was on it.
    fn clear(&mut self);
}

/// Presenter that keeps every shown frame. Used by tests and the command
/// line demo.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingPresenter {
    frames: Vec<MediaFrame>,
    visible: bool,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> &[MediaFrame] {
        &self.frames
    }

    pub fn last_frame(&self) -> Option<&MediaFrame> {
        self.frames.last()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

impl Presenter for RecordingPresenter {
    fn show(&mut self, frame: &MediaFrame) {
        self.frames.push(frame.clone());
        self.visible = true;
    }

    fn clear(&mut self) {
        self.visible = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn images_caption_with_title_and_subtitle() {
        let item = MediaItem::new(
            "a",
            "Aurora Coffee",
            "Brand Identity Kit",
            "brand-kits",
            MediaKind::Image,
            "images/aurora.jpg",
        );
        let frame = MediaFrame::for_item(&item);
        assert_eq!(frame.caption, "Aurora Coffee - Brand Identity Kit");
        assert_eq!(frame.source, "images/aurora.jpg");
    }

    #[test]
    fn pdfs_caption_with_title_only() {
        let item = MediaItem::new(
            "g",
            "Aurora Style Guide",
            "Brand Guidelines",
            "brand-kits",
            MediaKind::Pdf,
            "pdfs/aurora.pdf",
        );
        let frame = MediaFrame::for_item(&item);
        assert_eq!(frame.caption, "Aurora Style Guide");
    }

    #[test]
    fn recording_presenter_tracks_visibility() {
        let item = MediaItem::new("v", "Reel", "Cut", "videos", MediaKind::Video, "v.mp4");
        let mut presenter = RecordingPresenter::new();
        assert!(!presenter.is_visible());

        presenter.show(&MediaFrame::for_item(&item));
        assert!(presenter.is_visible());
        assert_eq!(presenter.frames().len(), 1);

        presenter.clear();
        assert!(!presenter.is_visible());
        assert_eq!(presenter.frames().len(), 1);
    }
}
