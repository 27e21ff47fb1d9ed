//! Combat-related components.

use bevy::prelude::*;

/// Component for entities that can take damage.
#[derive(Component, Debug, Clone)]
pub struct Health {
    pub current: f32,
    pub maximum: f32,
}

impl Health {
    pub fn new(max: f32) -> Self {
        Self {
            current: max,
            maximum: max,
        }
    }

    /// Apply damage, returning the amount actually removed.
    pub fn take_damage(&mut self, amount: f32) -> f32 {
        let actual = amount.max(0.0).min(self.current);
        self.current -= actual;
        actual
    }

    pub fn is_dead(&self) -> bool {
        self.current <= 0.0
    }

    pub fn percentage(&self) -> f32 {
        if self.maximum <= 0.0 {
            return 0.0;
        }
        self.current / self.maximum
    }
}

/// Marker component for entities that have died (prevents multiple death events).
#[derive(Component)]
pub struct Dead;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn damage_is_clamped_to_remaining_health() {
        let mut health = Health::new(30.0);
        assert_eq!(health.take_damage(20.0), 20.0);
        assert_eq!(health.take_damage(20.0), 10.0);
        assert!(health.is_dead());
        assert_eq!(health.percentage(), 0.0);
    }

    #[test]
    fn negative_damage_does_not_heal() {
        let mut health = Health::new(50.0);
        assert_eq!(health.take_damage(-10.0), 0.0);
        assert_eq!(health.current, 50.0);
    }
}
