//! Session state and core simulation types
//!
//! One `SessionState` exists per play-through. It is owned by the caller and
//! passed explicitly to every rule function; restart replaces it wholesale.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::layout::PlatformSpec;

/// Opaque handle to an engine-owned body or display object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u32);

/// Named animation clips on the player sprite sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnimationKey {
    WalkLeft,
    WalkRight,
    Idle,
}

impl AnimationKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnimationKey::WalkLeft => "walk-left",
            AnimationKey::WalkRight => "walk-right",
            AnimationKey::Idle => "idle",
        }
    }
}

/// The three sounds registered per session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sound {
    /// Movement loop while a direction key is held
    Float,
    /// Ambient music loop
    Theme,
    /// One-shot sting on loss
    Death,
}

impl Sound {
    pub const ALL: [Sound; 3] = [Sound::Float, Sound::Theme, Sound::Death];

    /// Asset key the sound is loaded under
    pub fn key(&self) -> &'static str {
        match self {
            Sound::Float => "float",
            Sound::Theme => "theme",
            Sound::Death => "death",
        }
    }

    pub fn looping(&self) -> bool {
        !matches!(self, Sound::Death)
    }
}

/// Sound handle plus the playback state the rules branch on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoundHandle {
    pub sound: Sound,
    pub playing: bool,
}

impl SoundHandle {
    pub fn new(sound: Sound) -> Self {
        Self {
            sound,
            playing: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoundBank {
    pub float: SoundHandle,
    pub theme: SoundHandle,
    pub death: SoundHandle,
}

impl Default for SoundBank {
    fn default() -> Self {
        Self {
            float: SoundHandle::new(Sound::Float),
            theme: SoundHandle::new(Sound::Theme),
            death: SoundHandle::new(Sound::Death),
        }
    }
}

impl SoundBank {
    pub fn get_mut(&mut self, sound: Sound) -> &mut SoundHandle {
        match sound {
            Sound::Float => &mut self.float,
            Sound::Theme => &mut self.theme,
            Sound::Death => &mut self.death,
        }
    }
}

/// The player body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: EntityId,
    pub pos: Vec2,
    pub vel: Vec2,
    /// Restitution against world bounds
    pub bounce: f32,
    pub gravity_enabled: bool,
    /// Immovable bodies are not separated by colliders
    pub immovable: bool,
    pub animation: AnimationKey,
}

/// A danger platform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub id: EntityId,
    pub spec: PlatformSpec,
    /// Current position, written back by the engine as the tween advances
    pub pos: Vec2,
}

/// The rotating goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarpGoal {
    pub id: EntityId,
    pub pos: Vec2,
    /// Accumulated rotation (radians)
    pub rotation: f32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreDisplay {
    pub id: EntityId,
    pub text: String,
}

/// Key state from the previous tick, used for edge detection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputMemory {
    pub left: bool,
    pub right: bool,
    pub up: bool,
}

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Lose,
}

/// Current phase of the session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    #[default]
    Active,
    Ended(Outcome),
}

/// Win/lose overlay to present
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Overlay {
    Text { pos: Vec2, text: String },
    Image { pos: Vec2, key: String },
}

/// Side effects requested of the engine, drained once per dispatch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    PlaySound(Sound),
    StopSound(Sound),
    PlayAnimation(AnimationKey),
    ScoreText(String),
    ShowOverlay(Overlay),
    /// Pause physics, animations and tweens
    PauseAll,
    /// Resume physics, animations and tweens
    ResumeAll,
    /// Entities were rebuilt; engine bodies must be recreated
    SessionRestarted,
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionState {
    pub player: Player,
    /// Platforms in tween registration order
    pub platforms: Vec<Platform>,
    pub warp: WarpGoal,
    pub score_display: ScoreDisplay,
    pub sounds: SoundBank,
    pub input: InputMemory,
    pub phase: SessionPhase,
    pub score: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Pending engine side effects
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    /// Next entity ID
    pub(super) next_id: u32,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionState {
    pub fn game_over(&self) -> bool {
        self.phase != SessionPhase::Active
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            SessionPhase::Active => None,
            SessionPhase::Ended(outcome) => Some(outcome),
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> EntityId {
        let id = self.next_id;
        self.next_id += 1;
        EntityId(id)
    }

    pub fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all pending engine events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Start a sound unless it is already playing
    pub fn ensure_playing(&mut self, sound: Sound) {
        let handle = self.sounds.get_mut(sound);
        if !handle.playing {
            handle.playing = true;
            self.emit(GameEvent::PlaySound(sound));
        }
    }

    /// Stop a sound if it is playing
    pub fn ensure_stopped(&mut self, sound: Sound) {
        let handle = self.sounds.get_mut(sound);
        if handle.playing {
            handle.playing = false;
            self.emit(GameEvent::StopSound(sound));
        }
    }

    /// Switch the player animation, emitting only on change
    pub fn set_animation(&mut self, key: AnimationKey) {
        if self.player.animation != key {
            self.player.animation = key;
            self.emit(GameEvent::PlayAnimation(key));
        }
    }
}
