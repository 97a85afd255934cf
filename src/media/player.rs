use serde::{Deserialize, Serialize};

use super::{MediaDescriptor, MediaElement};
use crate::error::PlaybackError;

/// Frames in one loop of the terminal animation.
pub const LOOP_FRAMES: usize = 24;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AutoplayPolicy {
    Allow,
    #[default]
    RequireMuted,
    Block,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    #[default]
    Stopped,
    Playing {
        frame: usize,
    },
    Paused {
        frame: usize,
    },
}

impl PlaybackState {
    pub fn frame(&self) -> usize {
        match self {
            Self::Stopped => 0,
            Self::Playing { frame } | Self::Paused { frame } => *frame,
        }
    }
}

/// Looping, muted-by-default player that renders as a progress animation.
#[derive(Debug, Clone, PartialEq)]
pub struct TerminalPlayer {
    source: String,
    muted: bool,
    policy: AutoplayPolicy,
    state: PlaybackState,
}

impl TerminalPlayer {
    pub fn new(descriptor: &MediaDescriptor) -> Self {
        Self {
            source: descriptor.source.clone(),
            muted: true,
            policy: AutoplayPolicy::default(),
            state: PlaybackState::Stopped,
        }
    }

    pub fn muted(mut self, muted: bool) -> Self {
        self.muted = muted;
        self
    }

    pub fn policy(mut self, policy: AutoplayPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Loop progress between 0.0 and 1.0.
    pub fn progress(&self) -> f64 {
        self.state.frame() as f64 / LOOP_FRAMES as f64
    }
}

impl MediaElement for TerminalPlayer {
    fn play(&mut self) -> Result<(), PlaybackError> {
        match self.policy {
            AutoplayPolicy::Block => {
                return Err(PlaybackError::AutoplayBlocked {
                    source_path: self.source.clone(),
                })
            }
            AutoplayPolicy::RequireMuted if !self.muted => {
                return Err(PlaybackError::NotMuted {
                    source_path: self.source.clone(),
                })
            }
            _ => (),
        }
        self.state = PlaybackState::Playing {
            frame: self.state.frame(),
        };
        Ok(())
    }

    fn pause(&mut self) {
        if let PlaybackState::Playing { frame } = self.state {
            self.state = PlaybackState::Paused { frame };
        }
    }

    fn is_playing(&self) -> bool {
        matches!(self.state, PlaybackState::Playing { .. })
    }

    fn tick(&mut self) {
        if let PlaybackState::Playing { frame } = self.state {
            self.state = PlaybackState::Playing {
                frame: (frame + 1) % LOOP_FRAMES,
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor() -> MediaDescriptor {
        MediaDescriptor {
            name: "Gameplay".into(),
            source: "/videos/final_gameplay.mp4".into(),
            description: String::new(),
        }
    }

    #[test]
    fn muted_player_starts_under_default_policy() {
        let mut player = TerminalPlayer::new(&descriptor());
        assert!(player.play().is_ok());
        assert!(player.is_playing());
    }

    #[test]
    fn unmuted_player_is_rejected_under_default_policy() {
        let mut player = TerminalPlayer::new(&descriptor()).muted(false);
        assert_eq!(
            player.play(),
            Err(PlaybackError::NotMuted {
                source_path: "/videos/final_gameplay.mp4".into()
            })
        );
        assert_eq!(player.state(), PlaybackState::Stopped);
    }

    #[test]
    fn blocking_policy_rejects_even_muted_players() {
        let mut player = TerminalPlayer::new(&descriptor()).policy(AutoplayPolicy::Block);
        assert!(matches!(
            player.play(),
            Err(PlaybackError::AutoplayBlocked { .. })
        ));
        assert!(!player.is_playing());
    }

    #[test]
    fn pause_keeps_position_and_play_resumes_from_it() {
        let mut player = TerminalPlayer::new(&descriptor());
        player.play().unwrap();
        player.tick();
        player.tick();
        player.pause();
        assert_eq!(player.state(), PlaybackState::Paused { frame: 2 });
        player.tick();
        assert_eq!(player.state().frame(), 2);
        player.play().unwrap();
        assert_eq!(player.state(), PlaybackState::Playing { frame: 2 });
    }

    #[test]
    fn playback_loops() {
        let mut player = TerminalPlayer::new(&descriptor()).policy(AutoplayPolicy::Allow);
        player.play().unwrap();
        for _ in 0..LOOP_FRAMES {
            player.tick();
        }
        assert_eq!(player.state().frame(), 0);
        assert!(player.is_playing());
    }
}
