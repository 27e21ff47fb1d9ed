//! Navigation agent: walks a body toward a destination on the walkable surface.
//!
//! Paths are straight lines. Walls are handled by the Rapier character
//! controller sliding the body along them, and a stuck agent is rescued by the
//! brain's dwell timer picking a new waypoint.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use super::brain::NavigationAgent;
use crate::core::turn_toward;

/// How quickly agents turn toward their direction of travel.
const TURN_RATE: f32 = 6.0;

/// Navigation agent state for one body.
#[derive(Component, Debug, Clone)]
pub struct NavAgent {
    destination: Option<Vec3>,
    has_path: bool,
    path_pending: bool,
    speed: f32,
    stopping_distance: f32,
    remaining_distance: f32,
    velocity: Vec3,
}

impl Default for NavAgent {
    fn default() -> Self {
        Self {
            destination: None,
            has_path: false,
            path_pending: false,
            speed: 3.5,
            stopping_distance: 0.5,
            remaining_distance: 0.0,
            velocity: Vec3::ZERO,
        }
    }
}

impl NavAgent {
    /// Work out this frame's horizontal movement from `position`.
    ///
    /// Resolves a pending path, stops inside the stopping distance and never
    /// overshoots the destination.
    pub fn plan_step(&mut self, position: Vec3, dt: f32) -> Vec3 {
        if self.path_pending {
            self.path_pending = false;
            self.has_path = self.destination.is_some();
        }

        let Some(destination) = self.destination.filter(|_| self.has_path) else {
            self.velocity = Vec3::ZERO;
            self.remaining_distance = 0.0;
            return Vec3::ZERO;
        };

        let offset = Vec3::new(destination.x - position.x, 0.0, destination.z - position.z);
        let distance = offset.length();

        if distance <= self.stopping_distance {
            self.has_path = false;
            self.velocity = Vec3::ZERO;
            self.remaining_distance = distance;
            return Vec3::ZERO;
        }

        let travel = (self.speed * dt).min(distance);
        let step = offset / distance * travel;
        self.velocity = if dt > 0.0 { step / dt } else { Vec3::ZERO };
        self.remaining_distance = distance - travel;
        step
    }
}

impl NavigationAgent for NavAgent {
    fn set_destination(&mut self, destination: Vec3) {
        self.destination = Some(destination);
        self.path_pending = true;
    }

    fn destination(&self) -> Option<Vec3> {
        self.destination
    }

    fn set_speed(&mut self, speed: f32) {
        self.speed = speed.max(0.0);
    }

    fn speed(&self) -> f32 {
        self.speed
    }

    fn set_stopping_distance(&mut self, distance: f32) {
        self.stopping_distance = distance.max(0.0);
    }

    fn stopping_distance(&self) -> f32 {
        self.stopping_distance
    }

    fn path_pending(&self) -> bool {
        self.path_pending
    }

    fn has_path(&self) -> bool {
        self.has_path
    }

    fn remaining_distance(&self) -> f32 {
        self.remaining_distance
    }

    fn velocity(&self) -> Vec3 {
        self.velocity
    }
}

/// Move every agent along its path and face it toward its travel direction.
pub fn steer_nav_agents(
    time: Res<Time>,
    mut agents: Query<(&mut Transform, &mut NavAgent, Option<&mut KinematicCharacterController>)>,
) {
    let dt = time.delta_secs();

    for (mut transform, mut agent, controller) in agents.iter_mut() {
        let step = agent.plan_step(transform.translation, dt);
        if step == Vec3::ZERO {
            continue;
        }

        match controller {
            Some(mut controller) => controller.translation = Some(step),
            None => transform.translation += step,
        }
        turn_toward(&mut transform, step, TURN_RATE, dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn agent_heading_to(destination: Vec3) -> NavAgent {
        let mut agent = NavAgent::default();
        agent.set_speed(2.0);
        agent.set_stopping_distance(0.5);
        agent.set_destination(destination);
        agent
    }

    #[test]
    fn new_destination_is_pending_until_planned() {
        let mut agent = agent_heading_to(Vec3::new(10.0, 0.0, 0.0));
        assert!(agent.path_pending());
        assert!(!agent.is_idle());

        agent.plan_step(Vec3::ZERO, 0.1);
        assert!(!agent.path_pending());
        assert!(agent.has_path());
    }

    #[test]
    fn steps_at_speed_along_the_ground() {
        let mut agent = agent_heading_to(Vec3::new(10.0, 3.0, 0.0));
        let step = agent.plan_step(Vec3::ZERO, 0.5);

        assert!((step - Vec3::new(1.0, 0.0, 0.0)).length() < 1e-5);
        assert!((agent.velocity() - Vec3::new(2.0, 0.0, 0.0)).length() < 1e-5);
        assert!((agent.remaining_distance() - 9.0).abs() < 1e-5);
    }

    #[test]
    fn never_overshoots() {
        let mut agent = agent_heading_to(Vec3::new(1.0, 0.0, 0.0));
        let step = agent.plan_step(Vec3::ZERO, 10.0);
        assert!((step.x - 1.0).abs() < 1e-5);
    }

    #[test]
    fn arrival_makes_the_agent_idle() {
        let mut agent = agent_heading_to(Vec3::new(0.3, 0.0, 0.0));
        let step = agent.plan_step(Vec3::ZERO, 0.1);

        assert_eq!(step, Vec3::ZERO);
        assert!(!agent.has_path());
        assert!(agent.is_idle());
        assert_eq!(agent.destination(), Some(Vec3::new(0.3, 0.0, 0.0)));
    }

    #[test]
    fn no_destination_means_no_motion() {
        let mut agent = NavAgent::default();
        assert_eq!(agent.plan_step(Vec3::ONE, 0.1), Vec3::ZERO);
        assert!(agent.is_idle());
    }
}
