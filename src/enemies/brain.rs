//! Perception → patrol → chase → attack state machine for the mimic.
//!
//! The brain is engine-independent: everything it needs from the world comes
//! through [`NavigationAgent`], [`NavigationSurface`] and [`SightQuery`], and
//! everything it wants to happen is either a call on the agent or a field of
//! the returned [`TickReport`]. The Bevy systems in `ai.rs` adapt ECS data
//! and the Rapier context to these traits.

use std::f32::consts::TAU;

use bevy::prelude::*;
use rand::Rng;

use super::components::MimicStats;

/// Movement capability: something that walks toward a destination.
pub trait NavigationAgent {
    fn set_destination(&mut self, destination: Vec3);
    fn destination(&self) -> Option<Vec3>;
    fn set_speed(&mut self, speed: f32);
    fn speed(&self) -> f32;
    fn set_stopping_distance(&mut self, distance: f32);
    fn stopping_distance(&self) -> f32;
    /// A destination was set but no path has been produced for it yet.
    fn path_pending(&self) -> bool;
    fn has_path(&self) -> bool;
    fn remaining_distance(&self) -> f32;
    fn velocity(&self) -> Vec3;

    /// Arrived (or never started) and not moving.
    fn is_idle(&self) -> bool {
        !self.path_pending()
            && self.remaining_distance() <= self.stopping_distance()
            && (!self.has_path() || self.velocity().length_squared() == 0.0)
    }
}

/// Walkable-surface capability.
pub trait NavigationSurface {
    /// Nearest walkable point to `near`, if one lies within `max_distance`.
    fn sample_position(&self, near: Vec3, max_distance: f32) -> Option<Vec3>;
}

/// Physics capability for line-of-sight tests.
pub trait SightQuery {
    /// First solid entity on the segment `from → to`, trigger volumes ignored.
    fn linecast(&self, from: Vec3, to: Vec3) -> Option<Entity>;
}

/// The entity being hunted and where it stands this tick.
#[derive(Debug, Clone, Copy)]
pub struct TargetInfo {
    pub entity: Entity,
    pub position: Vec3,
}

/// Per-tick inputs gathered by the caller.
#[derive(Debug, Clone, Copy)]
pub struct TickContext {
    /// Seconds of game time since the previous tick
    pub dt: f32,
    /// Monotonic game time in seconds
    pub now: f32,
    pub position: Vec3,
    /// Unit facing direction of the body
    pub forward: Vec3,
    pub target: Option<TargetInfo>,
}

/// Observable behaviour mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BehaviorMode {
    Patrol,
    Chasing,
    /// Still chasing, target out of sight, inside the grace period
    LosingSight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackOutcome {
    Fired,
    OnCooldown,
}

impl AttackOutcome {
    /// Log line written for every attack attempt.
    pub fn message(self) -> &'static str {
        match self {
            AttackOutcome::Fired => "Attacking player now!",
            AttackOutcome::OnCooldown => "Attack on cooldown.",
        }
    }
}

/// Change to the attack effect's visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectToggle {
    Show,
    Hide,
}

/// What happened during one tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    /// Entered `Chasing` this tick
    pub spotted: bool,
    /// Gave up a chase this tick
    pub lost: bool,
    /// Set when the target was within attack range while chasing
    pub attack: Option<AttackOutcome>,
    /// New scout waypoint chosen while patrolling
    pub new_waypoint: Option<Vec3>,
    pub effect: Option<EffectToggle>,
}

/// Enemy controller state.
#[derive(Component, Debug, Clone)]
pub struct MimicBrain {
    pub stats: MimicStats,
    chasing: bool,
    player_spotted: bool,
    time_since_sighted: f32,
    time_since_waypoint_change: f32,
    scout_target: Option<Vec3>,
    last_known_target: Vec3,
    last_attack_at: Option<f32>,
    effect_remaining: Option<f32>,
}

impl MimicBrain {
    pub fn new(stats: MimicStats) -> Self {
        Self {
            stats,
            chasing: false,
            player_spotted: false,
            time_since_sighted: 0.0,
            time_since_waypoint_change: 0.0,
            scout_target: None,
            last_known_target: Vec3::ZERO,
            last_attack_at: None,
            effect_remaining: None,
        }
    }

    /// One-time setup when the controller comes alive.
    pub fn activate<A: NavigationAgent + ?Sized>(&mut self, agent: &mut A, position: Vec3) {
        agent.set_speed(self.stats.patrol_speed);
        agent.set_stopping_distance(self.stats.waypoint_tolerance);
        self.last_known_target = position;
    }

    pub fn is_chasing(&self) -> bool {
        self.chasing
    }

    /// Whether the target was visible on the last tick.
    pub fn player_spotted(&self) -> bool {
        self.player_spotted
    }

    pub fn mode(&self) -> BehaviorMode {
        match (self.chasing, self.player_spotted) {
            (false, _) => BehaviorMode::Patrol,
            (true, true) => BehaviorMode::Chasing,
            (true, false) => BehaviorMode::LosingSight,
        }
    }

    pub fn time_since_sighted(&self) -> f32 {
        self.time_since_sighted
    }

    pub fn scout_target(&self) -> Option<Vec3> {
        self.scout_target
    }

    pub fn last_known_target(&self) -> Vec3 {
        self.last_known_target
    }

    pub fn last_attack_at(&self) -> Option<f32> {
        self.last_attack_at
    }

    pub fn eye_position(&self, position: Vec3) -> Vec3 {
        position + self.stats.sight_offset
    }

    /// Colour the indicators should drift toward.
    pub fn target_color(&self) -> Color {
        if self.chasing {
            self.stats.chase_color
        } else {
            self.stats.patrol_color
        }
    }

    /// Distance, field-of-view and unobstructed-line test against the target.
    pub fn can_see<Q: SightQuery + ?Sized>(&self, ctx: &TickContext, sight: &Q) -> bool {
        let Some(target) = ctx.target else {
            return false;
        };

        let eye = self.eye_position(ctx.position);
        let to_target = target.position - eye;
        let distance = to_target.length();

        if distance >= self.stats.sight_range {
            return false;
        }
        if distance > f32::EPSILON {
            let angle = ctx.forward.angle_between(to_target).to_degrees();
            if !(angle < self.stats.field_of_view_deg / 2.0) {
                return false;
            }
        }

        match sight.linecast(eye, target.position) {
            None => true,
            Some(hit) => hit == target.entity,
        }
    }

    /// Advance the controller by one tick.
    pub fn tick<A, S, Q, R>(
        &mut self,
        ctx: &TickContext,
        agent: &mut A,
        surface: &S,
        sight: &Q,
        rng: &mut R,
    ) -> TickReport
    where
        A: NavigationAgent + ?Sized,
        S: NavigationSurface + ?Sized,
        Q: SightQuery + ?Sized,
        R: Rng,
    {
        let mut report = TickReport::default();

        self.time_since_waypoint_change += ctx.dt;
        report.effect = self.advance_effect(ctx.dt);

        match ctx.target {
            Some(target) => {
                let visible = self.can_see(ctx, sight);
                self.player_spotted = visible;

                if visible {
                    self.time_since_sighted = 0.0;
                    self.last_known_target = target.position;
                    if !self.chasing {
                        self.start_chase(agent);
                        report.spotted = true;
                    }
                } else if self.chasing {
                    self.time_since_sighted += ctx.dt;
                    if self.time_since_sighted > self.stats.lose_sight_delay {
                        self.give_up_chase(agent);
                        report.lost = true;
                    }
                }

                if self.chasing {
                    let destination = if visible {
                        target.position
                    } else {
                        self.last_known_target
                    };
                    agent.set_destination(destination);

                    if ctx.position.distance(target.position) <= self.stats.attack_range {
                        let outcome = self.try_attack(ctx.now);
                        if outcome == AttackOutcome::Fired {
                            report.effect = Some(EffectToggle::Show);
                        }
                        report.attack = Some(outcome);
                    }
                }
            }
            None => {
                self.player_spotted = false;
                if self.chasing {
                    self.give_up_chase(agent);
                    report.lost = true;
                }
            }
        }

        if !self.chasing {
            let idle = agent.is_idle();
            if idle || self.time_since_waypoint_change > self.stats.min_scout_time {
                if idle {
                    info!("Agent is stationary. Finding new location.");
                }
                let center = ctx.target.map_or(ctx.position, |target| target.position);
                report.new_waypoint = self.find_scout_location(center, agent, surface, rng);
            }
        }

        report
    }

    /// Fire an attack unless the cooldown since the last one is still running.
    pub fn try_attack(&mut self, now: f32) -> AttackOutcome {
        let ready = self
            .last_attack_at
            .map_or(true, |last| now - last >= self.stats.attack_cooldown);

        let outcome = if ready {
            self.last_attack_at = Some(now);
            self.effect_remaining = Some(self.stats.attack_effect_hold);
            AttackOutcome::Fired
        } else {
            AttackOutcome::OnCooldown
        };
        info!("{}", outcome.message());
        outcome
    }

    fn start_chase<A: NavigationAgent + ?Sized>(&mut self, agent: &mut A) {
        self.chasing = true;
        agent.set_speed(self.stats.chase_speed);
        info!("Mimic spotted its target, chasing");
    }

    fn give_up_chase<A: NavigationAgent + ?Sized>(&mut self, agent: &mut A) {
        self.time_since_sighted = 0.0;
        self.chasing = false;
        agent.set_speed(self.stats.patrol_speed);
        info!("Mimic lost sight of its target, back to patrol");
    }

    fn advance_effect(&mut self, dt: f32) -> Option<EffectToggle> {
        let remaining = self.effect_remaining.as_mut()?;
        *remaining -= dt;
        if *remaining <= 0.0 {
            self.effect_remaining = None;
            Some(EffectToggle::Hide)
        } else {
            None
        }
    }

    fn find_scout_location<A, S, R>(
        &mut self,
        center: Vec3,
        agent: &mut A,
        surface: &S,
        rng: &mut R,
    ) -> Option<Vec3>
    where
        A: NavigationAgent + ?Sized,
        S: NavigationSurface + ?Sized,
        R: Rng,
    {
        let radius = self.stats.patrol_radius;
        let candidate = center + random_in_disc(rng, radius);

        let Some(point) = surface.sample_position(candidate, radius) else {
            debug!("No walkable point near {:?}, keeping current waypoint", candidate);
            return None;
        };

        self.scout_target = Some(point);
        agent.set_destination(point);
        self.time_since_waypoint_change = 0.0;
        Some(point)
    }
}

/// Uniformly distributed point in a horizontal disc of `radius` around the origin.
pub fn random_in_disc<R: Rng>(rng: &mut R, radius: f32) -> Vec3 {
    let r = radius.max(0.0) * rng.gen::<f32>().sqrt();
    let theta = rng.gen_range(0.0..TAU);
    Vec3::new(r * theta.cos(), 0.0, r * theta.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[derive(Default)]
    struct MockAgent {
        destination: Option<Vec3>,
        speed: f32,
        stopping: f32,
        pending: bool,
        remaining: f32,
        velocity: Vec3,
    }

    impl NavigationAgent for MockAgent {
        fn set_destination(&mut self, destination: Vec3) {
            self.destination = Some(destination);
        }
        fn destination(&self) -> Option<Vec3> {
            self.destination
        }
        fn set_speed(&mut self, speed: f32) {
            self.speed = speed;
        }
        fn speed(&self) -> f32 {
            self.speed
        }
        fn set_stopping_distance(&mut self, distance: f32) {
            self.stopping = distance;
        }
        fn stopping_distance(&self) -> f32 {
            self.stopping
        }
        fn path_pending(&self) -> bool {
            self.pending
        }
        fn has_path(&self) -> bool {
            self.destination.is_some()
        }
        fn remaining_distance(&self) -> f32 {
            self.remaining
        }
        fn velocity(&self) -> Vec3 {
            self.velocity
        }
    }

    impl MockAgent {
        /// Walking somewhere far away.
        fn busy() -> Self {
            Self {
                remaining: 50.0,
                velocity: Vec3::X,
                ..default()
            }
        }
    }

    struct AcceptAll;

    impl NavigationSurface for AcceptAll {
        fn sample_position(&self, near: Vec3, _max_distance: f32) -> Option<Vec3> {
            Some(Vec3::new(near.x, 0.0, near.z))
        }
    }

    struct RejectAll;

    impl NavigationSurface for RejectAll {
        fn sample_position(&self, _near: Vec3, _max_distance: f32) -> Option<Vec3> {
            None
        }
    }

    /// Line-cast that always reports the given entity (or nothing).
    struct FixedSight(Option<Entity>);

    impl SightQuery for FixedSight {
        fn linecast(&self, _from: Vec3, _to: Vec3) -> Option<Entity> {
            self.0
        }
    }

    const CLEAR: FixedSight = FixedSight(None);

    fn player() -> Entity {
        Entity::from_raw(7)
    }

    fn stats() -> MimicStats {
        MimicStats {
            sight_range: 10.0,
            field_of_view_deg: 90.0,
            sight_offset: Vec3::ZERO,
            lose_sight_delay: 3.0,
            patrol_radius: 10.0,
            min_scout_time: 3.0,
            attack_range: 2.0,
            attack_cooldown: 5.0,
            ..default()
        }
    }

    /// Mimic at the origin facing -Z, target at `target` if any.
    fn ctx(dt: f32, now: f32, target: Option<Vec3>) -> TickContext {
        TickContext {
            dt,
            now,
            position: Vec3::ZERO,
            forward: Vec3::NEG_Z,
            target: target.map(|position| TargetInfo {
                entity: player(),
                position,
            }),
        }
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    fn active_brain(agent: &mut MockAgent) -> MimicBrain {
        let mut brain = MimicBrain::new(stats());
        brain.activate(agent, Vec3::ZERO);
        brain
    }

    #[test]
    fn activation_sets_patrol_speed_and_tolerance() {
        let mut agent = MockAgent::default();
        let brain = active_brain(&mut agent);
        assert_eq!(agent.speed, brain.stats.patrol_speed);
        assert_eq!(agent.stopping, brain.stats.waypoint_tolerance);
        assert_eq!(brain.mode(), BehaviorMode::Patrol);
    }

    #[test]
    fn sees_target_straight_ahead_within_range() {
        let brain = MimicBrain::new(stats());
        let ctx = ctx(0.1, 0.0, Some(Vec3::new(0.0, 0.0, -5.0)));
        assert!(brain.can_see(&ctx, &CLEAR));
    }

    #[test]
    fn cannot_see_beyond_sight_range() {
        let brain = MimicBrain::new(stats());
        assert!(!brain.can_see(&ctx(0.1, 0.0, Some(Vec3::new(0.0, 0.0, -10.0))), &CLEAR));
        assert!(!brain.can_see(&ctx(0.1, 0.0, Some(Vec3::new(0.0, 0.0, -25.0))), &CLEAR));
    }

    #[test]
    fn cannot_see_outside_half_field_of_view() {
        let brain = MimicBrain::new(stats());
        // 50 degrees off the facing direction with a 90 degree cone
        let angle = 50f32.to_radians();
        let target = Vec3::new(angle.sin(), 0.0, -angle.cos()) * 5.0;
        assert!(!brain.can_see(&ctx(0.1, 0.0, Some(target)), &CLEAR));

        // Directly behind
        assert!(!brain.can_see(&ctx(0.1, 0.0, Some(Vec3::new(0.0, 0.0, 5.0))), &CLEAR));
    }

    #[test]
    fn obstruction_blocks_sight_unless_it_is_the_target() {
        let brain = MimicBrain::new(stats());
        let ctx = ctx(0.1, 0.0, Some(Vec3::new(0.0, 0.0, -5.0)));

        let wall = FixedSight(Some(Entity::from_raw(99)));
        assert!(!brain.can_see(&ctx, &wall));

        let target_itself = FixedSight(Some(player()));
        assert!(brain.can_see(&ctx, &target_itself));
    }

    #[test]
    fn sight_offset_moves_the_eye() {
        let mut stats = stats();
        stats.sight_offset = Vec3::new(0.0, 0.0, -8.0);
        let brain = MimicBrain::new(stats);
        // 9 units from the body but 1 unit from the eye
        let ctx = ctx(0.1, 0.0, Some(Vec3::new(0.0, 0.0, -9.0)));
        assert!(brain.can_see(&ctx, &CLEAR));
    }

    #[test]
    fn spotting_starts_chase_within_one_tick() {
        let mut agent = MockAgent::busy();
        let mut brain = active_brain(&mut agent);
        let target = Vec3::new(0.0, 0.0, -5.0);

        let report = brain.tick(&ctx(0.1, 0.1, Some(target)), &mut agent, &AcceptAll, &CLEAR, &mut rng());

        assert!(report.spotted);
        assert!(brain.is_chasing());
        assert_eq!(brain.mode(), BehaviorMode::Chasing);
        assert_eq!(agent.speed, brain.stats.chase_speed);
        assert_eq!(agent.destination, Some(target));
    }

    #[test]
    fn chase_reverts_only_after_lose_sight_delay() {
        let mut agent = MockAgent::busy();
        let mut brain = active_brain(&mut agent);
        let mut rng = rng();

        brain.tick(&ctx(0.5, 0.5, Some(Vec3::new(0.0, 0.0, -5.0))), &mut agent, &AcceptAll, &CLEAR, &mut rng);
        assert!(brain.is_chasing());

        // Target slips out of range; 6 ticks of 0.5s is exactly the delay
        let far = Some(Vec3::new(0.0, 0.0, -30.0));
        for i in 0..6 {
            let report = brain.tick(&ctx(0.5, 1.0 + i as f32 * 0.5, far), &mut agent, &AcceptAll, &CLEAR, &mut rng);
            assert!(!report.lost, "gave up early on tick {i}");
            assert_eq!(brain.mode(), BehaviorMode::LosingSight);
            assert_eq!(agent.speed, brain.stats.chase_speed);
        }

        let report = brain.tick(&ctx(0.5, 4.5, far), &mut agent, &AcceptAll, &CLEAR, &mut rng);
        assert!(report.lost);
        assert!(!brain.is_chasing());
        assert_eq!(agent.speed, brain.stats.patrol_speed);
        assert_eq!(brain.time_since_sighted(), 0.0);
    }

    #[test]
    fn seeing_the_target_again_restarts_the_grace_period() {
        let mut agent = MockAgent::busy();
        let mut brain = active_brain(&mut agent);
        let mut rng = rng();
        let near = Some(Vec3::new(0.0, 0.0, -5.0));
        let far = Some(Vec3::new(0.0, 0.0, -30.0));

        brain.tick(&ctx(0.5, 0.0, near), &mut agent, &AcceptAll, &CLEAR, &mut rng);
        for _ in 0..5 {
            brain.tick(&ctx(0.5, 0.0, far), &mut agent, &AcceptAll, &CLEAR, &mut rng);
        }
        brain.tick(&ctx(0.5, 0.0, near), &mut agent, &AcceptAll, &CLEAR, &mut rng);
        assert_eq!(brain.time_since_sighted(), 0.0);
        for _ in 0..5 {
            brain.tick(&ctx(0.5, 0.0, far), &mut agent, &AcceptAll, &CLEAR, &mut rng);
        }
        assert!(brain.is_chasing());
    }

    #[test]
    fn grace_period_pursues_last_known_position() {
        let mut agent = MockAgent::busy();
        let mut brain = active_brain(&mut agent);
        let mut rng = rng();
        let seen_at = Vec3::new(1.0, 0.0, -6.0);

        brain.tick(&ctx(0.1, 0.0, Some(seen_at)), &mut agent, &AcceptAll, &CLEAR, &mut rng);
        brain.tick(&ctx(0.1, 0.1, Some(Vec3::new(0.0, 0.0, 20.0))), &mut agent, &AcceptAll, &CLEAR, &mut rng);

        assert_eq!(brain.last_known_target(), seen_at);
        assert_eq!(agent.destination, Some(seen_at));
    }

    #[test]
    fn losing_the_target_reference_ends_the_chase() {
        let mut agent = MockAgent::busy();
        let mut brain = active_brain(&mut agent);
        let mut rng = rng();

        brain.tick(&ctx(0.1, 0.0, Some(Vec3::new(0.0, 0.0, -5.0))), &mut agent, &AcceptAll, &CLEAR, &mut rng);
        let report = brain.tick(&ctx(0.1, 0.1, None), &mut agent, &AcceptAll, &CLEAR, &mut rng);

        assert!(report.lost);
        assert_eq!(brain.mode(), BehaviorMode::Patrol);
        assert_eq!(agent.speed, brain.stats.patrol_speed);
    }

    #[test]
    fn second_attack_inside_cooldown_is_rejected() {
        let mut brain = MimicBrain::new(stats());
        assert_eq!(brain.try_attack(10.0), AttackOutcome::Fired);
        assert_eq!(brain.try_attack(11.0), AttackOutcome::OnCooldown);
        assert_eq!(brain.last_attack_at(), Some(10.0));
        assert_eq!(brain.try_attack(15.0), AttackOutcome::Fired);
        assert_eq!(brain.last_attack_at(), Some(15.0));
    }

    #[test]
    fn every_attack_attempt_has_a_log_line() {
        let mut brain = MimicBrain::new(stats());
        let fired = brain.try_attack(0.0);
        let rejected = brain.try_attack(1.0);

        assert_eq!(fired.message(), "Attacking player now!");
        assert_eq!(rejected.message(), "Attack on cooldown.");
        // The rejected attempt leaves the cooldown and effect untouched
        assert_eq!(brain.last_attack_at(), Some(0.0));
    }

    #[test]
    fn attack_toggles_effect_once_and_hides_it_later() {
        let mut agent = MockAgent::busy();
        let mut brain = active_brain(&mut agent);
        let mut rng = rng();
        let close = Some(Vec3::new(0.0, 0.0, -1.0));

        let first = brain.tick(&ctx(0.1, 0.0, close), &mut agent, &AcceptAll, &CLEAR, &mut rng);
        assert_eq!(first.attack, Some(AttackOutcome::Fired));
        assert_eq!(first.effect, Some(EffectToggle::Show));

        let second = brain.tick(&ctx(0.2, 0.2, close), &mut agent, &AcceptAll, &CLEAR, &mut rng);
        assert_eq!(second.attack, Some(AttackOutcome::OnCooldown));
        assert_eq!(second.effect, None);

        let third = brain.tick(&ctx(0.8, 1.0, close), &mut agent, &AcceptAll, &CLEAR, &mut rng);
        assert_eq!(third.attack, Some(AttackOutcome::OnCooldown));
        assert_eq!(third.effect, Some(EffectToggle::Hide));
        assert_eq!(brain.last_attack_at(), Some(0.0));

        let fourth = brain.tick(&ctx(0.1, 1.1, close), &mut agent, &AcceptAll, &CLEAR, &mut rng);
        assert_eq!(fourth.effect, None);
    }

    #[test]
    fn no_attack_outside_attack_range() {
        let mut agent = MockAgent::busy();
        let mut brain = active_brain(&mut agent);
        let report = brain.tick(&ctx(0.1, 0.0, Some(Vec3::new(0.0, 0.0, -5.0))), &mut agent, &AcceptAll, &CLEAR, &mut rng());
        assert_eq!(report.attack, None);
        assert_eq!(brain.last_attack_at(), None);
    }

    #[test]
    fn idle_agent_gets_a_waypoint_near_the_target() {
        let mut agent = MockAgent::default();
        let mut brain = active_brain(&mut agent);
        let behind = Vec3::new(3.0, 0.0, 12.0);

        let report = brain.tick(&ctx(0.1, 0.0, Some(behind)), &mut agent, &AcceptAll, &CLEAR, &mut rng());

        let waypoint = report.new_waypoint.expect("idle agent should pick a waypoint");
        assert_eq!(agent.destination, Some(waypoint));
        assert_eq!(brain.scout_target(), Some(waypoint));
        let offset = Vec3::new(waypoint.x - behind.x, 0.0, waypoint.z - behind.z);
        assert!(offset.length() <= brain.stats.patrol_radius + 1e-4);
    }

    #[test]
    fn rejected_sample_keeps_previous_destination() {
        let mut agent = MockAgent::default();
        let mut brain = active_brain(&mut agent);
        let previous = Vec3::new(4.0, 0.0, 4.0);
        agent.destination = Some(previous);

        let report = brain.tick(&ctx(0.1, 0.0, Some(Vec3::new(0.0, 0.0, 12.0))), &mut agent, &RejectAll, &CLEAR, &mut rng());

        assert_eq!(report.new_waypoint, None);
        assert_eq!(agent.destination, Some(previous));
        assert_eq!(brain.scout_target(), None);
    }

    #[test]
    fn busy_agent_keeps_waypoint_until_dwell_time_runs_out() {
        let mut agent = MockAgent::busy();
        let mut brain = active_brain(&mut agent);
        let mut rng = rng();
        let behind = Some(Vec3::new(0.0, 0.0, 12.0));

        for _ in 0..6 {
            let report = brain.tick(&ctx(0.5, 0.0, behind), &mut agent, &AcceptAll, &CLEAR, &mut rng);
            assert_eq!(report.new_waypoint, None);
        }
        // 3.5s > min_scout_time
        let report = brain.tick(&ctx(0.5, 0.0, behind), &mut agent, &AcceptAll, &CLEAR, &mut rng);
        assert!(report.new_waypoint.is_some());
    }

    #[test]
    fn chasing_never_wanders() {
        let mut agent = MockAgent::default();
        let mut brain = active_brain(&mut agent);
        let mut rng = rng();
        let target = Some(Vec3::new(0.0, 0.0, -5.0));

        for i in 0..20 {
            let report = brain.tick(&ctx(0.5, i as f32 * 0.5, target), &mut agent, &AcceptAll, &CLEAR, &mut rng);
            assert_eq!(report.new_waypoint, None);
        }
        assert_eq!(agent.destination, target);
    }

    #[test]
    fn missing_target_still_wanders_around_self() {
        let mut agent = MockAgent::default();
        let mut brain = active_brain(&mut agent);

        let report = brain.tick(&ctx(0.1, 0.0, None), &mut agent, &AcceptAll, &CLEAR, &mut rng());

        let waypoint = report.new_waypoint.expect("should wander without a target");
        assert!(Vec3::new(waypoint.x, 0.0, waypoint.z).length() <= brain.stats.patrol_radius + 1e-4);
        assert!(!brain.player_spotted());
    }

    #[test]
    fn indicator_color_follows_chase_state() {
        let mut agent = MockAgent::busy();
        let mut brain = active_brain(&mut agent);
        assert_eq!(brain.target_color(), brain.stats.patrol_color);

        brain.tick(&ctx(0.1, 0.0, Some(Vec3::new(0.0, 0.0, -5.0))), &mut agent, &AcceptAll, &CLEAR, &mut rng());
        assert_eq!(brain.target_color(), brain.stats.chase_color);
    }

    #[test]
    fn random_points_stay_in_disc() {
        let mut rng = rng();
        for _ in 0..200 {
            let point = random_in_disc(&mut rng, 4.0);
            assert_eq!(point.y, 0.0);
            assert!(point.length() <= 4.0 + 1e-4);
        }
    }
}
