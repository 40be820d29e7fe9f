//! Warp Climb - float between sliding danger platforms up to the warp
//!
//! Core modules:
//! - `sim`: Deterministic rules layer (session state, motion rules, outcomes)
//! - `engine`: Engine seam plus a headless arcade stand-in
//! - `game`: Fixed-timestep driver tying a session to an engine
//! - `assets`: Asset manifest and load verification
//! - `settings`: Rules profile and audio preferences
//! - `platform`: Browser front-end (wasm32 only)

pub mod assets;
pub mod engine;
pub mod game;
pub mod settings;
pub mod sim;

#[cfg(target_arch = "wasm32")]
pub mod audio;
#[cfg(target_arch = "wasm32")]
pub mod platform;

pub use game::Game;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Fixed simulation timestep (one tick per 60 Hz animation frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame delta fed to the accumulator (s)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Viewport
    pub const VIEWPORT_WIDTH: f32 = 390.0;
    pub const VIEWPORT_HEIGHT: f32 = 844.0;
    pub const BACKGROUND_COLOR: &str = "#292B2C";
    pub const PHYSICS_DEBUG: bool = false;

    /// World gravity (px/s², downward). The only gravity source.
    pub const GRAVITY: f32 = 100.0;

    /// Player
    pub const PLAYER_SPAWN: Vec2 = Vec2::new(185.0, 840.0);
    pub const PLAYER_SIZE: Vec2 = Vec2::new(32.0, 32.0);
    pub const PLAYER_BOUNCE: f32 = 0.1;
    /// Horizontal speed while a direction is held (px/s)
    pub const PLAYER_MOVE_SPEED: f32 = 100.0;
    /// Upward speed while a direction is held (px/s)
    pub const PLAYER_FLOAT_SPEED: f32 = 100.0;
    pub const ANIMATION_FRAME_RATE: u32 = 7;

    /// Warp goal
    pub const WARP_SPAWN: Vec2 = Vec2::new(175.0, 50.0);
    pub const WARP_SIZE: Vec2 = Vec2::new(48.0, 48.0);
    /// Rotation added each tick (radians)
    pub const WARP_ROTATION_STEP: f32 = 0.1;

    /// Danger platforms
    pub const PLATFORM_SIZE: Vec2 = Vec2::new(64.0, 16.0);
    /// Tween travel (px)
    pub const PLATFORM_TWEEN_DISTANCE: f32 = 200.0;
    /// One tween leg (ms)
    pub const PLATFORM_TWEEN_DURATION_MS: f32 = 1200.0;

    /// Top-left of the win/lose overlay
    pub const OVERLAY_POS: Vec2 = Vec2::new(80.0, 350.0);
}
