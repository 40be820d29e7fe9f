//! Motion rules: key state -> player velocity, physics flags, animation, audio
//!
//! Holding a direction floats the player diagonally upward with gravity off
//! and the body immovable. Releasing hands the player back to gravity.

use glam::Vec2;

use super::registry::score_text;
use super::state::{AnimationKey, GameEvent, SessionState, Sound};
use super::tick::TickInput;
use crate::consts::{PLAYER_FLOAT_SPEED, PLAYER_MOVE_SPEED};

/// Evaluate one tick of motion rules. No-op once the session has ended.
pub fn evaluate_motion(state: &mut SessionState, input: &TickInput) {
    if state.game_over() {
        return;
    }

    if input.left {
        let pressed = !state.input.left;
        drive(state, -1.0, AnimationKey::WalkLeft, pressed);
    } else if input.right {
        let pressed = !state.input.right;
        drive(state, 1.0, AnimationKey::WalkRight, pressed);
    } else {
        let player = &mut state.player;
        player.vel.x = 0.0;
        player.immovable = false;
        player.gravity_enabled = true;
        state.set_animation(AnimationKey::Idle);
        state.ensure_stopped(Sound::Float);
    }
}

/// Shared body of the left/right branches; `pressed` is the key's down-edge
fn drive(state: &mut SessionState, dir: f32, animation: AnimationKey, pressed: bool) {
    let player = &mut state.player;
    player.vel = Vec2::new(dir * PLAYER_MOVE_SPEED, -PLAYER_FLOAT_SPEED);
    player.immovable = true;
    player.gravity_enabled = false;

    state.set_animation(animation);
    state.ensure_playing(Sound::Float);

    if pressed {
        state.score += 1;
        log::debug!("Score {}", state.score);
    }

    // Redrawn every held tick, not just on the edge
    let text = score_text(state.score);
    state.score_display.text = text.clone();
    state.emit(GameEvent::ScoreText(text));
}
