//! Walkable surface: the floor minus wall footprints, used to pick waypoints.

use bevy::prelude::*;

use super::data::LevelDefinition;
use crate::enemies::brain::NavigationSurface;

/// How many walls a sample may be pushed out of before giving up.
const MAX_PUSHES: usize = 8;

/// Flat walkable area in XZ.
#[derive(Resource, Debug, Clone)]
pub struct WalkableSurface {
    bounds: Rect,
    blocked: Vec<Rect>,
    floor_y: f32,
}

/// Strict containment: the edges of a blocked area are walkable.
fn inside(rect: &Rect, point: Vec2) -> bool {
    point.x > rect.min.x && point.x < rect.max.x && point.y > rect.min.y && point.y < rect.max.y
}

impl WalkableSurface {
    pub fn new(bounds: Rect, blocked: Vec<Rect>, floor_y: f32) -> Self {
        Self {
            bounds,
            blocked,
            floor_y,
        }
    }

    /// Build from a level, keeping `clearance` away from walls and floor edges.
    pub fn from_level(level: &LevelDefinition, clearance: f32) -> Self {
        let floor = level.floor_rect();
        // Rect::inflate collapses to a point when shrunk too far; keep it inverted instead
        let bounds = Rect {
            min: floor.min + Vec2::splat(clearance),
            max: floor.max - Vec2::splat(clearance),
        };
        let blocked = level
            .walls
            .iter()
            .map(|wall| wall.footprint().inflate(clearance))
            .collect();
        Self::new(bounds, blocked, 0.0)
    }

    pub fn is_walkable(&self, point: Vec2) -> bool {
        self.bounds.contains(point) && !self.blocked.iter().any(|rect| inside(rect, point))
    }

    /// Closest walkable point to `point`, if any.
    pub fn nearest_walkable(&self, point: Vec2) -> Option<Vec2> {
        if self.bounds.min.x > self.bounds.max.x || self.bounds.min.y > self.bounds.max.y {
            return None;
        }

        let mut current = Vec2::new(
            point.x.max(self.bounds.min.x).min(self.bounds.max.x),
            point.y.max(self.bounds.min.y).min(self.bounds.max.y),
        );

        for _ in 0..MAX_PUSHES {
            let Some(rect) = self.blocked.iter().find(|rect| inside(rect, current)) else {
                return Some(current);
            };

            let exits = [
                Vec2::new(rect.min.x, current.y),
                Vec2::new(rect.max.x, current.y),
                Vec2::new(current.x, rect.min.y),
                Vec2::new(current.x, rect.max.y),
            ];
            current = exits
                .into_iter()
                .filter(|exit| self.bounds.contains(*exit))
                .min_by(|a, b| a.distance_squared(current).total_cmp(&b.distance_squared(current)))?;
        }

        self.is_walkable(current).then_some(current)
    }
}

impl NavigationSurface for WalkableSurface {
    fn sample_position(&self, near: Vec3, max_distance: f32) -> Option<Vec3> {
        let flat = near.xz();
        let found = self.nearest_walkable(flat)?;
        (found.distance(flat) <= max_distance).then(|| Vec3::new(found.x, self.floor_y, found.y))
    }
}
