//! Asset manifest
//!
//! Every asset the game loads at startup, by key. A missing asset is a fatal
//! startup error; there are no fallbacks.

use std::fmt;

use serde::Serialize;

use crate::consts::ANIMATION_FRAME_RATE;
use crate::sim::{AnimationKey, OverlayStyle, Profile, Sound};

/// Asset categories, matching the engine's loaders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AssetKind {
    Audio,
    Image,
    SpriteSheet,
}

/// A single keyed asset
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssetEntry {
    pub kind: AssetKind,
    pub key: &'static str,
    pub path: &'static str,
}

/// Player sprite sheet layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SpriteSheet {
    pub key: &'static str,
    pub path: &'static str,
    pub frame_width: u32,
    pub frame_height: u32,
}

/// Named clip over sprite sheet frames
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnimationClip {
    pub key: AnimationKey,
    pub frames: &'static [u32],
    pub frame_rate: u32,
    pub looping: bool,
}

impl AnimationClip {
    pub fn new(key: AnimationKey) -> Self {
        let frames: &'static [u32] = match key {
            AnimationKey::WalkLeft => &[2, 1, 0],
            AnimationKey::WalkRight => &[6, 5, 4],
            AnimationKey::Idle => &[3],
        };
        Self {
            key,
            frames,
            frame_rate: ANIMATION_FRAME_RATE,
            looping: true,
        }
    }

    /// Sheet frame shown after `elapsed` seconds of playback
    pub fn frame_at(&self, elapsed: f32) -> u32 {
        let n = self.frames.len();
        let i = (elapsed.max(0.0) * self.frame_rate as f32) as usize;
        let i = if self.looping { i % n } else { i.min(n - 1) };
        self.frames[i]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetError {
    Missing { kind: AssetKind, key: &'static str },
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetError::Missing { kind, key } => write!(f, "missing {kind:?} asset '{key}'"),
        }
    }
}

impl std::error::Error for AssetError {}

/// Everything loaded during preload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssetManifest {
    pub entries: Vec<AssetEntry>,
    pub sprite_sheet: SpriteSheet,
    pub clips: Vec<AnimationClip>,
}

fn audio_path(sound: Sound) -> &'static str {
    match sound {
        Sound::Float => "assets/moving.wav",
        Sound::Theme => "assets/theme.wav",
        Sound::Death => "assets/dead.wav",
    }
}

impl AssetManifest {
    pub fn for_profile(profile: &Profile) -> Self {
        let mut entries: Vec<AssetEntry> = Sound::ALL
            .iter()
            .map(|&sound| AssetEntry {
                kind: AssetKind::Audio,
                key: sound.key(),
                path: audio_path(sound),
            })
            .collect();

        let mut images = vec![
            ("warp", "assets/warp.png"),
            ("platform-danger", "assets/platform-danger.png"),
        ];
        if profile.overlay_style == OverlayStyle::Image {
            images.push(("game-over", "assets/game-over.png"));
            images.push(("you-win", "assets/you-win.png"));
        }
        entries.extend(images.into_iter().map(|(key, path)| AssetEntry {
            kind: AssetKind::Image,
            key,
            path,
        }));

        Self {
            entries,
            sprite_sheet: SpriteSheet {
                key: "player",
                path: "assets/player-sprite.png",
                frame_width: profile.frame_width,
                frame_height: profile.frame_height,
            },
            clips: [AnimationKey::WalkLeft, AnimationKey::WalkRight, AnimationKey::Idle]
                .into_iter()
                .map(AnimationClip::new)
                .collect(),
        }
    }

    pub fn clip(&self, key: AnimationKey) -> Option<&AnimationClip> {
        self.clips.iter().find(|c| c.key == key)
    }

    /// Check every asset against the loader's view of what arrived
    pub fn verify(&self, is_loaded: impl Fn(AssetKind, &str) -> bool) -> Result<(), AssetError> {
        for entry in &self.entries {
            if !is_loaded(entry.kind, entry.key) {
                return Err(AssetError::Missing {
                    kind: entry.kind,
                    key: entry.key,
                });
            }
        }
        if !is_loaded(AssetKind::SpriteSheet, self.sprite_sheet.key) {
            return Err(AssetError::Missing {
                kind: AssetKind::SpriteSheet,
                key: self.sprite_sheet.key,
            });
        }
        Ok(())
    }
}
