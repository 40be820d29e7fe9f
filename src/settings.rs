//! Game settings and preferences
//!
//! Persisted in LocalStorage on the web; read from an optional JSON file on
//! native. Missing fields take their defaults.

use serde::{Deserialize, Serialize};

use crate::sim::Profile;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Rules profile (restart trigger, overlay style, sprite cells)
    pub profile: Profile,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Theme loop volume (0.0 - 1.0)
    pub music_volume: f32,
    /// Float loop and death sting volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,
    /// Mute when window loses focus
    pub mute_on_blur: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            profile: Profile::default(),

            master_volume: 0.8,
            music_volume: 0.7,
            sfx_volume: 1.0,
            muted: false,
            mute_on_blur: true,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn effective_music_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            (self.master_volume * self.music_volume).clamp(0.0, 1.0)
        }
    }

    pub fn effective_sfx_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            (self.master_volume * self.sfx_volume).clamp(0.0, 1.0)
        }
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "warp_climb_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {e}"),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{OverlayStyle, RestartTrigger};

    #[test]
    fn test_json_round_trip() {
        let mut settings = Settings::default();
        settings.profile = Profile::hold_up_to_restart();
        settings.muted = true;

        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings =
            Settings::from_json(r#"{"profile": {"restartOn": "gameOverAndUpHeld"}, "extra": 1}"#)
                .unwrap();
        assert_eq!(settings.profile.restart_on, RestartTrigger::GameOverAndUpHeld);
        // Unset profile fields come from the default profile
        assert_eq!(settings.profile.overlay_style, OverlayStyle::Text);
        assert_eq!(settings.master_volume, 0.8);
    }

    #[test]
    fn test_bad_json_is_an_error() {
        assert!(Settings::from_json(r#"{"profile": {"restartOn": "never"}}"#).is_err());
    }

    #[test]
    fn test_effective_volumes() {
        let mut settings = Settings::default();
        assert!((settings.effective_music_volume() - 0.56).abs() < 1e-6);
        assert!((settings.effective_sfx_volume() - 0.8).abs() < 1e-6);
        settings.muted = true;
        assert_eq!(settings.effective_music_volume(), 0.0);
        assert_eq!(settings.effective_sfx_volume(), 0.0);
    }
}
