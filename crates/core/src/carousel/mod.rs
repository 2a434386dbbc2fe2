//! Generic circular navigation shared by the lightbox, the PDF viewer, and
//! the video modal. The state machine is pure: transitions return new values
//! and rendering is delegated entirely to the presenter seam.

/// An open carousel positioned over a non-empty candidate list.
///
/// By construction `current < items.len()` and `items` is never empty: the
/// only way to obtain a state is [`CarouselState::open`], which refuses empty
/// lists and out-of-range starting positions. Navigation therefore never
/// needs a fallible path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselState<T> {
    items: Vec<T>,
    current: usize,
}

impl<T> CarouselState<T> {
    /// Opens over `items` at `start`. Returns `None` when the list is empty
    /// or `start` is out of range, which is how a stale lookup (the clicked
    /// item no longer in the candidate list) surfaces to callers.
    pub fn open(items: Vec<T>, start: usize) -> Option<Self> {
        if start >= items.len() {
            return None;
        }
        Some(Self {
            items,
            current: start,
        })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> &T {
        &self.items[self.current]
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Advances one position, wrapping past the end back to the start.
    #[must_use]
    pub fn next(mut self) -> Self {
        self.current = (self.current + 1) % self.items.len();
        self
    }

    /// Steps back one position, wrapping before the start to the end.
    #[must_use]
    pub fn prev(mut self) -> Self {
        self.current = (self.current + self.items.len() - 1) % self.items.len();
        self
    }
}

/// Open/closed lifecycle around [`CarouselState`].
///
/// A viewer owns one of these for the whole session; the inner state exists
/// only between a successful open and the matching close.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Carousel<T> {
    Closed,
    Open(CarouselState<T>),
}

impl<T> Default for Carousel<T> {
    fn default() -> Self {
        Self::Closed
    }
}

impl<T> Carousel<T> {
    pub fn new() -> Self {
        Self::Closed
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    /// Attempts to open over a freshly computed candidate list. `start` is
    /// the position lookup result for the clicked item; `None` (not found)
    /// and out-of-range positions decline silently, leaving any prior open
    /// state untouched.
    pub fn open(&mut self, items: Vec<T>, start: Option<usize>) -> bool {
        let Some(start) = start else {
            return false;
        };
        match CarouselState::open(items, start) {
            Some(state) => {
                *self = Self::Open(state);
                true
            }
            None => false,
        }
    }

    /// Steps forward. No-op while closed.
    pub fn next(&mut self) {
        if let Self::Open(state) = std::mem::replace(self, Self::Closed) {
            *self = Self::Open(state.next());
        }
    }

    /// Steps backward. No-op while closed.
    pub fn prev(&mut self) {
        if let Self::Open(state) = std::mem::replace(self, Self::Closed) {
            *self = Self::Open(state.prev());
        }
    }

    /// Discards the open state. Idempotent.
    pub fn close(&mut self) {
        *self = Self::Closed;
    }

    pub fn current(&self) -> Option<&T> {
        match self {
            Self::Open(state) => Some(state.current()),
            Self::Closed => None,
        }
    }

    pub fn state(&self) -> Option<&CarouselState<T>> {
        match self {
            Self::Open(state) => Some(state),
            Self::Closed => None,
        }
    }
}
