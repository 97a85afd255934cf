use thiserror::Error;

/// Reasons a media player refuses to start.
///
/// A refused start is an expected condition of the autoplay policy, callers
/// log it and carry on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaybackError {
    #[error("autoplay is blocked for {source_path}")]
    AutoplayBlocked { source_path: String },
    #[error("autoplay requires {source_path} to be muted")]
    NotMuted { source_path: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    #[error("the project showcase needs at least one media entry")]
    EmptyShowcase,
    #[error("skill `{name}` has level {level}, expected 0 to 100")]
    InvalidSkillLevel { name: String, level: u8 },
}
