//! Fixed timestep simulation tick
//!
//! Ordering within a tick: ambient theme, restart check, warp rotation,
//! motion rules, then input memory for next tick's edge detection.

use serde::{Deserialize, Serialize};

use super::rules::evaluate_motion;
use super::session::{Profile, SessionEvent, handle_event, restart_triggered};
use super::state::{SessionState, Sound};
use crate::consts::WARP_ROTATION_STEP;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    /// Left arrow held
    pub left: bool,
    /// Right arrow held
    pub right: bool,
    /// Up arrow held
    pub up: bool,
    /// Pointer released since last tick (one-shot)
    pub pointer_up: bool,
}

/// Advance the session by one fixed timestep
pub fn tick(state: &mut SessionState, input: &TickInput, profile: &Profile) {
    state.ensure_playing(Sound::Theme);

    if restart_triggered(state, input.up, input.pointer_up, profile) {
        handle_event(state, SessionEvent::RestartRequested, profile);
        return;
    }

    if !state.game_over() {
        state.time_ticks += 1;
        state.warp.rotation += WARP_ROTATION_STEP;
        evaluate_motion(state, input);
    }

    state.input.left = input.left;
    state.input.right = input.right;
    state.input.up = input.up;
}
