use serde::{Deserialize, Serialize};

mod observer;
mod player;
mod tabs;

use crate::error::PlaybackError;
pub use observer::{intersection_ratio, Crossing, VisibilityObserver};
pub use player::{AutoplayPolicy, PlaybackState, TerminalPlayer};
pub use tabs::MediaTabs;

/// Static description of one showcase clip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaDescriptor {
    pub name: String,
    pub source: String,
    pub description: String,
}

/// A playable element driven by the tab controller.
pub trait MediaElement {
    fn play(&mut self) -> Result<(), PlaybackError>;

    fn pause(&mut self);

    fn is_playing(&self) -> bool;

    /// Advances playback by one frame, does nothing unless playing.
    fn tick(&mut self) {}
}
