//! Collision outcome handling
//!
//! Both outcomes are terminal: the session freezes until restart.

use super::session::{OverlayStyle, Profile, RestartTrigger};
use super::state::{GameEvent, Outcome, Overlay, SessionPhase, SessionState, Sound};
use crate::consts::OVERLAY_POS;

/// Overlay for an outcome under the given profile
pub fn overlay_for(outcome: Outcome, profile: &Profile) -> Overlay {
    match profile.overlay_style {
        OverlayStyle::Text => {
            let text = match (outcome, profile.restart_on) {
                (Outcome::Win, _) => "You escaped!\nwell done!",
                (Outcome::Lose, RestartTrigger::PointerUp) => "Game Over.\nClick to play again.",
                (Outcome::Lose, RestartTrigger::GameOverAndUpHeld) => {
                    "Game Over.\nPress up to play again."
                }
            };
            Overlay::Text {
                pos: OVERLAY_POS,
                text: text.to_string(),
            }
        }
        OverlayStyle::Image => Overlay::Image {
            pos: OVERLAY_POS,
            key: match outcome {
                Outcome::Win => "you-win",
                Outcome::Lose => "game-over",
            }
            .to_string(),
        },
    }
}

/// Player touched a danger platform
pub fn on_platform_collision(state: &mut SessionState, profile: &Profile) {
    if state.game_over() {
        return;
    }
    // One-shot sting, its handle never tracks playback
    state.emit(GameEvent::PlaySound(Sound::Death));
    end(state, Outcome::Lose, profile);
}

/// Player reached the warp goal. No sound on this path.
pub fn on_warp_collision(state: &mut SessionState, profile: &Profile) {
    if state.game_over() {
        return;
    }
    end(state, Outcome::Win, profile);
}

fn end(state: &mut SessionState, outcome: Outcome, profile: &Profile) {
    state.phase = SessionPhase::Ended(outcome);
    log::info!("Session ended: {:?} (score {})", outcome, state.score);

    state.emit(GameEvent::ShowOverlay(overlay_for(outcome, profile)));
    state.ensure_stopped(Sound::Float);
    state.emit(GameEvent::PauseAll);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loss_plays_death_and_pauses() {
        let profile = Profile::default();
        let mut state = SessionState::new();
        on_platform_collision(&mut state, &profile);

        let events = state.drain_events();
        assert_eq!(events[0], GameEvent::PlaySound(Sound::Death));
        assert!(matches!(events[1], GameEvent::ShowOverlay(Overlay::Text { .. })));
        assert_eq!(events.last(), Some(&GameEvent::PauseAll));
        assert!(!state.sounds.death.playing);
    }

    #[test]
    fn test_win_is_silent() {
        let profile = Profile::default();
        let mut state = SessionState::new();
        on_warp_collision(&mut state, &profile);

        let events = state.drain_events();
        assert!(!events.iter().any(|e| matches!(e, GameEvent::PlaySound(_))));
        assert!(events.contains(&GameEvent::PauseAll));
        assert_eq!(state.outcome(), Some(Outcome::Win));
    }

    #[test]
    fn test_outcome_stops_float_loop() {
        let profile = Profile::default();
        let mut state = SessionState::new();
        state.ensure_playing(Sound::Float);
        state.drain_events();

        on_warp_collision(&mut state, &profile);
        assert!(!state.sounds.float.playing);
        assert!(state.drain_events().contains(&GameEvent::StopSound(Sound::Float)));
    }

    #[test]
    fn test_reentry_ignored() {
        let profile = Profile::default();
        let mut state = SessionState::new();
        on_platform_collision(&mut state, &profile);
        state.drain_events();

        on_platform_collision(&mut state, &profile);
        on_warp_collision(&mut state, &profile);
        assert!(state.events.is_empty());
        assert_eq!(state.outcome(), Some(Outcome::Lose));
    }

    #[test]
    fn test_overlay_styles() {
        let hold = Profile::hold_up_to_restart();
        match overlay_for(Outcome::Lose, &hold) {
            Overlay::Image { key, .. } => assert_eq!(key, "game-over"),
            other => panic!("expected image overlay, got {other:?}"),
        }

        let click = Profile::click_to_restart();
        match overlay_for(Outcome::Win, &click) {
            Overlay::Text { text, .. } => assert!(text.starts_with("You escaped!")),
            other => panic!("expected text overlay, got {other:?}"),
        }
    }
}
