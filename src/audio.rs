//! Audio playback through `<audio>` elements
//!
//! One element per sound key. Loops are flagged on the element; the death
//! sting rewinds on every play.

use web_sys::HtmlAudioElement;

use crate::assets::{AssetKind, AssetManifest};
use crate::settings::Settings;
use crate::sim::Sound;

/// Audio manager for the game
pub struct AudioManager {
    clips: Vec<(Sound, HtmlAudioElement)>,
    music_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl AudioManager {
    pub fn new(manifest: &AssetManifest, settings: &Settings) -> Self {
        let mut clips = Vec::new();
        for sound in Sound::ALL {
            let entry = manifest
                .entries
                .iter()
                .find(|e| e.kind == AssetKind::Audio && e.key == sound.key());
            let Some(entry) = entry else { continue };

            match HtmlAudioElement::new_with_src(entry.path) {
                Ok(el) => {
                    el.set_loop(sound.looping());
                    el.set_preload("auto");
                    clips.push((sound, el));
                }
                Err(e) => log::warn!("Failed to create audio element '{}': {:?}", entry.key, e),
            }
        }

        let mut audio = Self {
            clips,
            music_volume: settings.effective_music_volume(),
            sfx_volume: settings.effective_sfx_volume(),
            muted: false,
        };
        audio.apply_volumes();
        audio
    }

    /// Whether an element exists for the given key
    pub fn has(&self, key: &str) -> bool {
        self.clips.iter().any(|(s, _)| s.key() == key)
    }

    fn element(&self, sound: Sound) -> Option<&HtmlAudioElement> {
        self.clips.iter().find(|(s, _)| *s == sound).map(|(_, el)| el)
    }

    fn apply_volumes(&self) {
        for (sound, el) in &self.clips {
            let vol = if self.muted {
                0.0
            } else if *sound == Sound::Theme {
                self.music_volume
            } else {
                self.sfx_volume
            };
            el.set_volume(vol as f64);
        }
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
        self.apply_volumes();
    }

    pub fn play(&self, sound: Sound) {
        let Some(el) = self.element(sound) else { return };
        if !sound.looping() {
            el.set_current_time(0.0);
        }
        // Rejection before the first user gesture arrives on the promise;
        // `is_playing` reports whether it actually started
        if let Err(e) = el.play() {
            log::warn!("Playback of '{}' failed: {:?}", sound.key(), e);
        }
    }

    /// Element exists and is not paused
    pub fn is_playing(&self, sound: Sound) -> bool {
        self.element(sound).is_some_and(|el| !el.paused())
    }

    pub fn stop(&self, sound: Sound) {
        let Some(el) = self.element(sound) else { return };
        let _ = el.pause();
        el.set_current_time(0.0);
    }
}
