//! Fixed-timestep driver
//!
//! Owns the single `SessionState`, an engine and the rules profile. Each
//! substep runs: playback sync, rules tick, event dispatch, engine
//! integration, collision handling, dispatch again.

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};
use crate::engine::{Engine, dispatch, sync_playback};
use crate::sim::{Profile, SessionState, TickInput, handle_event, tick};

/// Game instance holding all state
pub struct Game<E: Engine> {
    pub state: SessionState,
    pub engine: E,
    pub profile: Profile,
    /// Input sampled for the next substep
    pub input: TickInput,
    accumulator: f32,
}

impl<E: Engine> Game<E> {
    pub fn new(mut engine: E, profile: Profile) -> Self {
        let state = SessionState::new();
        engine.reset(&state);
        log::info!(
            "Session started: {} platforms, restart on {:?}",
            state.platforms.len(),
            profile.restart_on
        );
        Self {
            state,
            engine,
            profile,
            input: TickInput::default(),
            accumulator: 0.0,
        }
    }

    /// Run one fixed substep with the current input
    pub fn step(&mut self) {
        let input = self.input;
        sync_playback(&self.engine, &mut self.state);
        tick(&mut self.state, &input, &self.profile);
        dispatch(&mut self.engine, &mut self.state);

        for event in self.engine.step(&mut self.state, SIM_DT) {
            handle_event(&mut self.state, event, &self.profile);
        }
        dispatch(&mut self.engine, &mut self.state);

        // Clear one-shot inputs after processing
        self.input.pointer_up = false;
    }

    /// Feed a frame delta (s) through the accumulator, returning substeps run
    pub fn update(&mut self, dt: f32) -> u32 {
        self.accumulator += dt.min(MAX_FRAME_DT);

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            self.step();
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
        substeps
    }
}
