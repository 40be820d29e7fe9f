//! Entity registry: builds every entity for a fresh session

use glam::Vec2;

use super::layout::generate_platforms;
use super::state::{
    AnimationKey, EntityId, InputMemory, Platform, Player, ScoreDisplay, SessionPhase,
    SessionState, SoundBank, WarpGoal,
};
use crate::consts::*;

/// Score overlay text for a given score
pub fn score_text(score: u32) -> String {
    format!("Score: {score}")
}

impl SessionState {
    /// Create a new session with every entity at its spawn point
    pub fn new() -> Self {
        let mut state = Self {
            player: Player {
                id: EntityId(0),
                pos: PLAYER_SPAWN,
                vel: Vec2::ZERO,
                bounce: PLAYER_BOUNCE,
                gravity_enabled: true,
                immovable: false,
                animation: AnimationKey::Idle,
            },
            platforms: Vec::new(),
            warp: WarpGoal {
                id: EntityId(0),
                pos: WARP_SPAWN,
                rotation: 0.0,
            },
            score_display: ScoreDisplay {
                id: EntityId(0),
                text: score_text(0),
            },
            sounds: SoundBank::default(),
            input: InputMemory::default(),
            phase: SessionPhase::Active,
            score: 0,
            time_ticks: 0,
            events: Vec::new(),
            next_id: 1,
        };

        // IDs follow creation order: goal, platforms, player, score text
        state.warp.id = state.next_entity_id();
        state.spawn_platforms();
        state.player.id = state.next_entity_id();
        state.score_display.id = state.next_entity_id();

        state
    }

    fn spawn_platforms(&mut self) {
        for spec in generate_platforms() {
            let id = self.next_entity_id();
            self.platforms.push(Platform {
                id,
                pos: spec.origin(),
                spec,
            });
        }
    }
}
