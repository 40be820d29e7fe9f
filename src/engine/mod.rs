//! Engine seam
//!
//! The rules layer never renders, mixes audio or integrates bodies. It queues
//! `GameEvent`s on the session; `dispatch` hands them to an `Engine`, and the
//! engine's `step` reports collisions back as `SessionEvent`s.

pub mod arcade;
pub mod headless;

pub use arcade::{Aabb, ArcadeWorld};
pub use headless::HeadlessEngine;

use crate::sim::{AnimationKey, GameEvent, Overlay, SessionEvent, SessionState, Sound};

/// Everything the rules layer consumes from a game engine
pub trait Engine {
    fn play_sound(&mut self, sound: Sound);
    fn stop_sound(&mut self, sound: Sound);
    /// Whether the sound is actually audible right now
    fn is_playing(&self, sound: Sound) -> bool;
    /// Start a looping clip on the player sprite
    fn play_animation(&mut self, key: AnimationKey);
    fn set_score_text(&mut self, text: &str);
    fn show_overlay(&mut self, overlay: &Overlay);
    /// Pause physics, animations and tweens
    fn pause_all(&mut self);
    fn resume_all(&mut self);
    /// Drop overlays and rebuild bodies for a fresh session
    fn reset(&mut self, state: &SessionState);
    /// Integrate bodies by `dt` seconds, writing positions and velocities
    /// back into `state`, and report collisions in registration order
    fn step(&mut self, state: &mut SessionState, dt: f32) -> Vec<SessionEvent>;
}

/// Refresh loop flags from real playback, so a rejected or interrupted loop
/// is requested again on the next tick
pub fn sync_playback<E: Engine + ?Sized>(engine: &E, state: &mut SessionState) {
    for sound in Sound::ALL.into_iter().filter(Sound::looping) {
        state.sounds.get_mut(sound).playing = engine.is_playing(sound);
    }
}

/// Drain the session's pending events into the engine
pub fn dispatch<E: Engine + ?Sized>(engine: &mut E, state: &mut SessionState) {
    for event in state.drain_events() {
        match event {
            GameEvent::PlaySound(sound) => engine.play_sound(sound),
            GameEvent::StopSound(sound) => engine.stop_sound(sound),
            GameEvent::PlayAnimation(key) => engine.play_animation(key),
            GameEvent::ScoreText(text) => engine.set_score_text(&text),
            GameEvent::ShowOverlay(overlay) => engine.show_overlay(&overlay),
            GameEvent::PauseAll => engine.pause_all(),
            GameEvent::ResumeAll => engine.resume_all(),
            GameEvent::SessionRestarted => engine.reset(state),
        }
    }
}
