//! Deterministic simulation module
//!
//! All gameplay rules live here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - No randomness
//! - State passed explicitly, never global
//! - No rendering, audio or platform dependencies

pub mod layout;
pub mod outcome;
pub mod registry;
pub mod rules;
pub mod session;
pub mod state;
pub mod tick;

pub use layout::{Direction, PLATFORM_LAYOUT, PlatformSpec, generate_platforms, phase_delay};
pub use outcome::overlay_for;
pub use registry::score_text;
pub use rules::evaluate_motion;
pub use session::{
    OverlayStyle, Profile, RestartTrigger, SessionEvent, handle_event, restart, restart_triggered,
};
pub use state::{
    AnimationKey, EntityId, GameEvent, InputMemory, Outcome, Overlay, Platform, Player,
    ScoreDisplay, SessionPhase, SessionState, Sound, SoundBank, SoundHandle, WarpGoal,
};
pub use tick::{TickInput, tick};
