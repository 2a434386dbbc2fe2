/// Navigation command fed to whichever carousel is currently open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    Next,
    Prev,
    Close,
}

impl NavCommand {
    /// Translates a key press into a command, if the key is bound.
    pub fn for_key(key: Key) -> Option<Self> {
        match key {
            Key::Escape => Some(Self::Close),
            Key::ArrowLeft => Some(Self::Prev),
            Key::ArrowRight => Some(Self::Next),
            Key::Other => None,
        }
    }
}

/// The subset of keyboard input the viewers react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    ArrowLeft,
    ArrowRight,
    /// Any key without a binding.
    Other,
}

impl Key {
    /// Parses a `KeyboardEvent.key` style name.
    pub fn from_name(name: &str) -> Self {
        match name {
            "Escape" => Self::Escape,
            "ArrowLeft" => Self::ArrowLeft,
            "ArrowRight" => Self::ArrowRight,
            _ => Self::Other,
        }
    }
}
