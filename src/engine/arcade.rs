//! Minimal arcade physics stand-in
//!
//! Axis-aligned boxes, world gravity, world-bounds bounce and the platform
//! tweens. Two immovable bodies never collide, so the player is only hit
//! while idle or falling.

use glam::Vec2;

use crate::consts::*;
use crate::sim::{Player, SessionEvent, SessionState};

/// Axis-aligned box given by center and half extents
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub center: Vec2,
    pub half: Vec2,
}

impl Aabb {
    pub fn new(center: Vec2, size: Vec2) -> Self {
        Self {
            center,
            half: size / 2.0,
        }
    }

    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        let d = (self.center - other.center).abs();
        let reach = self.half + other.half;
        d.x < reach.x && d.y < reach.y
    }
}

/// Body integration and overlap detection for one session
#[derive(Debug, Clone, Default)]
pub struct ArcadeWorld {
    paused: bool,
    /// Unpaused tween time since session start (ms)
    tween_elapsed_ms: f32,
}

impl ArcadeWorld {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Fresh session: tweens restart from zero
    pub fn reset(&mut self) {
        self.paused = false;
        self.tween_elapsed_ms = 0.0;
    }

    pub fn tween_elapsed_ms(&self) -> f32 {
        self.tween_elapsed_ms
    }

    /// Advance tweens and the player body, then collect collisions
    pub fn step(&mut self, state: &mut SessionState, dt: f32) -> Vec<SessionEvent> {
        if self.paused {
            return Vec::new();
        }

        self.tween_elapsed_ms += dt * 1000.0;
        for platform in &mut state.platforms {
            platform.pos = platform.spec.position_at(self.tween_elapsed_ms);
        }

        integrate_player(&mut state.player, dt);
        collisions(state)
    }
}

fn integrate_player(player: &mut Player, dt: f32) {
    if player.gravity_enabled {
        player.vel.y += GRAVITY * dt;
    }
    player.pos += player.vel * dt;

    // Collide with world bounds
    let half = PLAYER_SIZE / 2.0;
    let min = half;
    let max = Vec2::new(VIEWPORT_WIDTH, VIEWPORT_HEIGHT) - half;

    if player.pos.x < min.x || player.pos.x > max.x {
        player.pos.x = player.pos.x.clamp(min.x, max.x);
        player.vel.x = -player.vel.x * player.bounce;
    }
    if player.pos.y < min.y || player.pos.y > max.y {
        player.pos.y = player.pos.y.clamp(min.y, max.y);
        player.vel.y = -player.vel.y * player.bounce;
    }
}

/// Colliders in registration order: platforms, then the goal
fn collisions(state: &SessionState) -> Vec<SessionEvent> {
    let mut events = Vec::new();
    // Platforms and goal are immovable
    if state.player.immovable {
        return events;
    }

    let player = Aabb::new(state.player.pos, PLAYER_SIZE);
    if state
        .platforms
        .iter()
        .any(|p| player.intersects(&Aabb::new(p.pos, PLATFORM_SIZE)))
    {
        events.push(SessionEvent::PlatformCollision);
    }
    if player.intersects(&Aabb::new(state.warp.pos, WARP_SIZE)) {
        events.push(SessionEvent::WarpCollision);
    }
    events
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_intersects() {
        let a = Aabb::new(Vec2::ZERO, Vec2::new(10.0, 10.0));
        assert!(a.intersects(&Aabb::new(Vec2::new(9.0, 0.0), Vec2::new(10.0, 10.0))));
        assert!(!a.intersects(&Aabb::new(Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0))));
        assert!(!a.intersects(&Aabb::new(Vec2::new(0.0, 20.0), Vec2::new(10.0, 10.0))));
    }

    #[test]
    fn test_gravity_only_when_enabled() {
        let mut world = ArcadeWorld::new();
        let mut state = SessionState::new();
        state.player.pos = Vec2::new(30.0, 60.0);
        world.step(&mut state, SIM_DT);
        assert!(state.player.vel.y > 0.0);

        let mut state = SessionState::new();
        state.player.pos = Vec2::new(30.0, 60.0);
        state.player.gravity_enabled = false;
        world.step(&mut state, SIM_DT);
        assert_eq!(state.player.vel.y, 0.0);
    }

    #[test]
    fn test_floor_bounce() {
        let mut world = ArcadeWorld::new();
        let mut state = SessionState::new();
        state.player.vel.y = 100.0;
        world.step(&mut state, SIM_DT);

        let floor = VIEWPORT_HEIGHT - PLAYER_SIZE.y / 2.0;
        assert_eq!(state.player.pos.y, floor);
        assert!(state.player.vel.y < 0.0);
        assert!(state.player.vel.y.abs() < 100.0 * PLAYER_BOUNCE + 1.0);
    }

    #[test]
    fn test_platform_hit_reported() {
        let mut world = ArcadeWorld::new();
        let mut state = SessionState::new();
        state.player.pos = state.platforms[3].spec.origin();
        state.player.gravity_enabled = false;
        let events = world.step(&mut state, 0.0);
        assert_eq!(events, vec![SessionEvent::PlatformCollision]);
    }

    #[test]
    fn test_immovable_player_passes_through() {
        let mut world = ArcadeWorld::new();
        let mut state = SessionState::new();
        state.player.pos = state.platforms[3].spec.origin();
        state.player.gravity_enabled = false;
        state.player.immovable = true;
        assert!(world.step(&mut state, 0.0).is_empty());

        state.player.pos = WARP_SPAWN;
        assert!(world.step(&mut state, 0.0).is_empty());
    }

    #[test]
    fn test_warp_hit_reported() {
        let mut world = ArcadeWorld::new();
        let mut state = SessionState::new();
        state.player.pos = WARP_SPAWN;
        state.player.gravity_enabled = false;
        assert_eq!(world.step(&mut state, 0.0), vec![SessionEvent::WarpCollision]);
    }

    #[test]
    fn test_pause_freezes_tweens_and_bodies() {
        let mut world = ArcadeWorld::new();
        let mut state = SessionState::new();
        world.step(&mut state, 0.5);
        let elapsed = world.tween_elapsed_ms();
        let pos = state.player.pos;

        world.pause();
        assert!(world.step(&mut state, 0.5).is_empty());
        assert_eq!(world.tween_elapsed_ms(), elapsed);
        assert_eq!(state.player.pos, pos);

        world.reset();
        assert!(!world.is_paused());
        assert_eq!(world.tween_elapsed_ms(), 0.0);
    }

    #[test]
    fn test_platforms_follow_tween() {
        let mut world = ArcadeWorld::new();
        let mut state = SessionState::new();
        state.player.pos = Vec2::new(20.0, 20.0);
        state.player.gravity_enabled = false;
        world.step(&mut state, 1.2);

        // Slot 0 has no delay and pushes right: at the end of its first leg
        let p0 = &state.platforms[0];
        assert!((p0.pos.x - (p0.spec.x + PLATFORM_TWEEN_DISTANCE)).abs() < 0.01);
        assert_eq!(p0.pos.y, p0.spec.y);
    }
}
