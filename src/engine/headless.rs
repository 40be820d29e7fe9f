//! Headless engine: arcade bodies plus a record of presentation state
//!
//! Used by the native binary and by tests. Nothing is drawn or heard; the
//! engine just remembers what it was asked to show and play.

use std::collections::BTreeSet;

use super::Engine;
use super::arcade::ArcadeWorld;
use crate::sim::{AnimationKey, Overlay, SessionEvent, SessionState, Sound};

#[derive(Debug, Clone, Default)]
pub struct HeadlessEngine {
    pub world: ArcadeWorld,
    /// Loops currently playing, by asset key
    pub playing: BTreeSet<&'static str>,
    /// Every play request in order, one-shots included
    pub plays: Vec<Sound>,
    pub animation: Option<AnimationKey>,
    pub score_text: String,
    pub overlay: Option<Overlay>,
    /// Sessions started, counting the first
    pub sessions: u32,
    /// Refuse to start loops, as a browser does before the first gesture
    pub autoplay_blocked: bool,
}

impl HeadlessEngine {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Engine for HeadlessEngine {
    fn play_sound(&mut self, sound: Sound) {
        log::debug!("play {}", sound.key());
        self.plays.push(sound);
        if sound.looping() && !self.autoplay_blocked {
            self.playing.insert(sound.key());
        }
    }

    fn stop_sound(&mut self, sound: Sound) {
        log::debug!("stop {}", sound.key());
        self.playing.remove(sound.key());
    }

    fn is_playing(&self, sound: Sound) -> bool {
        self.playing.contains(sound.key())
    }

    fn play_animation(&mut self, key: AnimationKey) {
        self.animation = Some(key);
    }

    fn set_score_text(&mut self, text: &str) {
        self.score_text.clear();
        self.score_text.push_str(text);
    }

    fn show_overlay(&mut self, overlay: &Overlay) {
        self.overlay = Some(overlay.clone());
    }

    fn pause_all(&mut self) {
        self.world.pause();
    }

    fn resume_all(&mut self) {
        self.world.resume();
    }

    fn reset(&mut self, state: &SessionState) {
        self.world.reset();
        self.overlay = None;
        self.animation = Some(state.player.animation);
        self.score_text = state.score_display.text.clone();
        self.sessions += 1;
    }

    fn step(&mut self, state: &mut SessionState, dt: f32) -> Vec<SessionEvent> {
        self.world.step(state, dt)
    }
}
