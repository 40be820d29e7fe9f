//! Session controller: phase transitions and restart policy
//!
//! Engine callbacks never touch state directly. They are turned into
//! `SessionEvent`s and fed through `handle_event`.

use serde::{Deserialize, Serialize};

use super::outcome::{on_platform_collision, on_warp_collision};
use super::state::{GameEvent, SessionState};

/// What restarts an ended session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RestartTrigger {
    /// Any pointer release while ended
    #[default]
    PointerUp,
    /// Ended and the up key held down
    GameOverAndUpHeld,
}

/// How win/lose overlays are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OverlayStyle {
    #[default]
    Text,
    Image,
}

/// Rules profile shared by both level variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Profile {
    pub restart_on: RestartTrigger,
    pub overlay_style: OverlayStyle,
    /// Player sprite sheet cell size (px)
    pub frame_width: u32,
    pub frame_height: u32,
}

impl Default for Profile {
    fn default() -> Self {
        Self::click_to_restart()
    }
}

impl Profile {
    /// Text overlays, click anywhere to play again
    pub fn click_to_restart() -> Self {
        Self {
            restart_on: RestartTrigger::PointerUp,
            overlay_style: OverlayStyle::Text,
            frame_width: 32,
            frame_height: 32,
        }
    }

    /// Image overlays, hold up to play again
    pub fn hold_up_to_restart() -> Self {
        Self {
            restart_on: RestartTrigger::GameOverAndUpHeld,
            overlay_style: OverlayStyle::Image,
            frame_width: 32,
            frame_height: 35,
        }
    }
}

/// Messages the controller consumes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// Player body hit a danger platform
    PlatformCollision,
    /// Player body reached the warp goal
    WarpCollision,
    /// Restart trigger fired
    RestartRequested,
}

/// Whether this tick's input fires the profile's restart trigger
pub fn restart_triggered(state: &SessionState, up: bool, pointer_up: bool, profile: &Profile) -> bool {
    if !state.game_over() {
        return false;
    }
    match profile.restart_on {
        RestartTrigger::PointerUp => pointer_up,
        RestartTrigger::GameOverAndUpHeld => up,
    }
}

/// Apply one controller event
pub fn handle_event(state: &mut SessionState, event: SessionEvent, profile: &Profile) {
    match event {
        SessionEvent::PlatformCollision => on_platform_collision(state, profile),
        SessionEvent::WarpCollision => on_warp_collision(state, profile),
        SessionEvent::RestartRequested => restart(state),
    }
}

/// Replace the session with a fresh one and resume paused subsystems.
///
/// Ignored while the session is still active. The theme loop keeps playing
/// across restarts, so its handle carries over.
pub fn restart(state: &mut SessionState) {
    if !state.game_over() {
        return;
    }

    log::info!(
        "Restarting session (last outcome {:?}, score {})",
        state.outcome(),
        state.score
    );

    let theme = state.sounds.theme;
    let mut pending = state.drain_events();

    *state = SessionState::new();
    state.sounds.theme = theme;

    pending.push(GameEvent::SessionRestarted);
    pending.push(GameEvent::ResumeAll);
    state.events = pending;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::layout::{Direction, PLATFORM_LAYOUT, phase_delay};
    use crate::sim::state::{Outcome, SessionPhase};

    #[test]
    fn test_platform_collision_loses() {
        let mut state = SessionState::new();
        handle_event(&mut state, SessionEvent::PlatformCollision, &Profile::default());
        assert_eq!(state.phase, SessionPhase::Ended(Outcome::Lose));
    }

    #[test]
    fn test_warp_collision_wins() {
        let mut state = SessionState::new();
        handle_event(&mut state, SessionEvent::WarpCollision, &Profile::default());
        assert_eq!(state.phase, SessionPhase::Ended(Outcome::Win));
    }

    #[test]
    fn test_first_outcome_sticks() {
        let profile = Profile::default();
        let mut state = SessionState::new();
        handle_event(&mut state, SessionEvent::PlatformCollision, &profile);
        handle_event(&mut state, SessionEvent::WarpCollision, &profile);
        assert_eq!(state.outcome(), Some(Outcome::Lose));

        let mut state = SessionState::new();
        handle_event(&mut state, SessionEvent::WarpCollision, &profile);
        handle_event(&mut state, SessionEvent::PlatformCollision, &profile);
        assert_eq!(state.outcome(), Some(Outcome::Win));
    }

    #[test]
    fn test_restart_ignored_while_active() {
        let mut state = SessionState::new();
        state.score = 4;
        handle_event(&mut state, SessionEvent::RestartRequested, &Profile::default());
        assert_eq!(state.score, 4);
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_restart_resets_session() {
        let profile = Profile::default();
        let mut state = SessionState::new();
        state.score = 7;
        state.warp.rotation = 3.0;
        state.time_ticks = 500;
        for p in &mut state.platforms {
            p.pos.x += 50.0;
        }
        handle_event(&mut state, SessionEvent::PlatformCollision, &profile);
        state.drain_events();

        handle_event(&mut state, SessionEvent::RestartRequested, &profile);
        assert_eq!(state.phase, SessionPhase::Active);
        assert_eq!(state.score, 0);
        assert_eq!(state.warp.rotation, 0.0);
        assert_eq!(state.time_ticks, 0);
        assert_eq!(state.platforms.len(), 12);
        assert_eq!(state.platforms[0].spec.delay_ms, 0);
        assert_eq!(state.platforms[4].spec.delay_ms, 500);

        // Platforms back at their origins, schedule rebuilt in reverse table order
        for (i, p) in state.platforms.iter().enumerate() {
            assert_eq!(p.pos, p.spec.origin());
            assert_eq!((p.spec.x, p.spec.y), PLATFORM_LAYOUT[11 - i]);
            assert_eq!(p.spec.delay_ms, phase_delay(i));
            let expected = if i % 2 == 0 { Direction::Right } else { Direction::Left };
            assert_eq!(p.spec.direction, expected);
        }
        assert_eq!(
            state.drain_events(),
            vec![GameEvent::SessionRestarted, GameEvent::ResumeAll]
        );
    }

    #[test]
    fn test_restart_trigger_policies() {
        let mut state = SessionState::new();
        let click = Profile::click_to_restart();
        let hold = Profile::hold_up_to_restart();

        // Nothing restarts an active session
        assert!(!restart_triggered(&state, true, true, &click));
        assert!(!restart_triggered(&state, true, true, &hold));

        handle_event(&mut state, SessionEvent::WarpCollision, &click);
        assert!(restart_triggered(&state, false, true, &click));
        assert!(!restart_triggered(&state, true, false, &click));
        assert!(restart_triggered(&state, true, false, &hold));
        assert!(!restart_triggered(&state, false, true, &hold));
    }

    #[test]
    fn test_profile_json_names() {
        let json = serde_json::to_string(&Profile::hold_up_to_restart()).unwrap();
        assert!(json.contains("\"restartOn\":\"gameOverAndUpHeld\""));
        assert!(json.contains("\"overlayStyle\":\"image\""));
    }
}
