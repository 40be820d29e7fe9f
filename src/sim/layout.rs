//! Platform layout table and oscillation schedule
//!
//! The level is fixed: twelve danger platforms at hardcoded spawn points, each
//! sliding back and forth horizontally on its own delayed schedule.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{PLATFORM_TWEEN_DISTANCE, PLATFORM_TWEEN_DURATION_MS};

/// Platform spawn coordinates, in spawn order
pub const PLATFORM_LAYOUT: [(f32, f32); 12] = [
    (80.0, 600.0),
    (177.0, 556.0),
    (255.0, 502.0),
    (90.0, 453.0),
    (172.0, 402.0),
    (268.0, 358.0),
    (120.0, 302.0),
    (100.0, 254.0),
    (172.0, 200.0),
    (290.0, 130.0),
    (169.0, 690.0),
    (219.0, 720.0),
];

/// Which way a platform travels on the first leg of its tween
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Even schedule slots push right, odd slots push left
    pub fn from_index(index: usize) -> Self {
        if index % 2 == 0 {
            Direction::Right
        } else {
            Direction::Left
        }
    }

    pub fn sign(self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }
}

/// Spawn point plus oscillation schedule for one platform
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlatformSpec {
    pub x: f32,
    pub y: f32,
    pub direction: Direction,
    /// Tween start delay (ms)
    pub delay_ms: u32,
}

/// Start delay for the platform in schedule slot `index`
pub fn phase_delay(index: usize) -> u32 {
    if index == 0 { 0 } else { 100 + index as u32 * 100 }
}

impl PlatformSpec {
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Horizontal tween offset after `elapsed_ms` of unpaused tween time.
    ///
    /// Linear yoyo with infinite repeat: 0 until the delay expires, then a
    /// triangle wave out to the full distance and back, one leg per
    /// `PLATFORM_TWEEN_DURATION_MS`.
    pub fn offset_at(&self, elapsed_ms: f32) -> f32 {
        let t = elapsed_ms - self.delay_ms as f32;
        if t <= 0.0 {
            return 0.0;
        }
        let leg = PLATFORM_TWEEN_DURATION_MS;
        let phase = t % (2.0 * leg);
        let progress = if phase <= leg {
            phase / leg
        } else {
            2.0 - phase / leg
        };
        self.direction.sign() * PLATFORM_TWEEN_DISTANCE * progress
    }

    /// Platform position after `elapsed_ms` of unpaused tween time
    pub fn position_at(&self, elapsed_ms: f32) -> Vec2 {
        self.origin() + Vec2::new(self.offset_at(elapsed_ms), 0.0)
    }
}

/// Build the platform specs in tween registration order.
///
/// Tweens are registered walking the layout table backwards, so the last
/// table entry takes schedule slot 0.
pub fn generate_platforms() -> Vec<PlatformSpec> {
    PLATFORM_LAYOUT
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &(x, y))| PlatformSpec {
            x,
            y,
            direction: Direction::from_index(i),
            delay_ms: phase_delay(i),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generates_full_table() {
        let specs = generate_platforms();
        assert_eq!(specs.len(), PLATFORM_LAYOUT.len());
        assert_eq!(specs.len(), 12);

        // Every table coordinate appears exactly once
        for &(x, y) in &PLATFORM_LAYOUT {
            let hits = specs.iter().filter(|s| s.x == x && s.y == y).count();
            assert_eq!(hits, 1, "({x}, {y}) should spawn once");
        }
    }

    #[test]
    fn test_schedule_runs_in_reverse_table_order() {
        let specs = generate_platforms();
        assert_eq!((specs[0].x, specs[0].y), (219.0, 720.0));
        assert_eq!((specs[11].x, specs[11].y), (80.0, 600.0));
    }

    #[test]
    fn test_delay_and_direction_schedule() {
        let specs = generate_platforms();
        assert_eq!(specs[0].delay_ms, 0);
        assert_eq!(specs[1].delay_ms, 200);
        assert_eq!(specs[5].delay_ms, 600);
        assert_eq!(specs[11].delay_ms, 1200);

        for (i, spec) in specs.iter().enumerate() {
            let expected = if i % 2 == 0 { Direction::Right } else { Direction::Left };
            assert_eq!(spec.direction, expected);
        }
    }

    #[test]
    fn test_offset_waits_for_delay() {
        let spec = generate_platforms()[3];
        assert_eq!(spec.delay_ms, 400);
        assert_eq!(spec.offset_at(0.0), 0.0);
        assert_eq!(spec.offset_at(400.0), 0.0);
        assert!(spec.offset_at(700.0) < 0.0);
    }

    #[test]
    fn test_offset_yoyo_shape() {
        let spec = generate_platforms()[0];
        assert!((spec.offset_at(600.0) - 100.0).abs() < 0.001);
        assert!((spec.offset_at(1200.0) - 200.0).abs() < 0.001);
        assert!((spec.offset_at(1800.0) - 100.0).abs() < 0.001);
        assert!(spec.offset_at(2400.0).abs() < 0.001);
        // Repeats forever
        assert!((spec.offset_at(2400.0 + 1200.0) - 200.0).abs() < 0.001);
    }
}
