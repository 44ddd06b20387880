//! Agent structure and behavior.
//!
//! An agent is a single prey or predator. Each turn it may pick a new
//! destination from what it can see, step toward it, fight opposing agents
//! within reach, age, and possibly reproduce.

use crate::geometry::{wrap_offset, Vec2};
use crate::speed::lifecycle_factor;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// The two agent kinds. Fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kind {
    Prey,
    Predator,
}

impl Kind {
    pub const ALL: [Kind; 2] = [Kind::Predator, Kind::Prey];

    pub fn label(self) -> &'static str {
        match self {
            Kind::Prey => "prey",
            Kind::Predator => "predator",
        }
    }

    /// Whether agents of these kinds fight each other
    pub fn opposes(self, other: Kind) -> bool {
        self != other
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Heritable attributes handed to the agent constructor.
///
/// For seeded agents these come straight from configuration; for offspring
/// they are the parent's current values with `generation` already bumped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Traits {
    pub generation: u32,
    pub lifespan: f64,
    pub health: f64,
    pub vision: f64,
    pub peripheral: f64,
    pub speed: f64,
    pub damage: f64,
    pub separation_weight: f64,
    pub birth_rate: f64,
    pub mutation_rate: f64,
}

/// Steering rule applied between an agent and one visible neighbor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Steering {
    /// Predator moves toward prey
    Hunt,
    /// Prey drifts toward distant prey
    Flock,
    /// Prey moves away from predators
    Flee,
    /// Predator keeps clear of close predators
    Separate,
}

impl Steering {
    /// Rule table keyed by (own kind, neighbor kind)
    pub fn for_pair(own: Kind, other: Kind) -> Self {
        match (own, other) {
            (Kind::Predator, Kind::Prey) => Steering::Hunt,
            (Kind::Prey, Kind::Prey) => Steering::Flock,
            (Kind::Prey, Kind::Predator) => Steering::Flee,
            (Kind::Predator, Kind::Predator) => Steering::Separate,
        }
    }

    /// Displacement this rule contributes for `agent` looking at `neighbor`
    pub fn contribution(self, agent: &Agent, neighbor: &Agent) -> Vec2 {
        let bearing = agent.position.bearing_to(neighbor.position);
        let distance = agent.position.distance(neighbor.position);
        let spacing = agent.speed * agent.separation_weight;

        match self {
            Steering::Hunt => Vec2::from_angle(bearing) * agent.speed,
            Steering::Flock if distance > spacing => {
                Vec2::new(bearing.sin(), bearing.cos()) * agent.speed
            }
            Steering::Flee => Vec2::from_angle(bearing + PI) * agent.speed,
            Steering::Separate if distance < spacing => {
                Vec2::from_angle(bearing + PI) * agent.speed
            }
            Steering::Flock | Steering::Separate => Vec2::ZERO,
        }
    }
}

/// A simulated organism
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    // Identity
    pub kind: Kind,
    pub generation: u32,

    // Motion
    pub position: Vec2,
    pub destination: Vec2,
    pub heading: f64,

    // Mutated at creation
    pub vision: f64,
    pub peripheral: f64,
    pub speed: f64,
    pub damage: f64,

    // Inherited unchanged
    pub separation_weight: f64,
    pub birth_rate: f64,
    pub mutation_rate: f64,
    pub lifespan: f64,

    // Lifecycle
    pub age: f64,
    pub health: f64,
    pub energy: f64,
}

impl Agent {
    /// Create an agent, perturbing vision, peripheral, speed and damage by
    /// `uniform(-1, 1) * mutation_rate`.
    pub fn new<R: Rng + ?Sized>(
        kind: Kind,
        position: Vec2,
        destination: Vec2,
        traits: &Traits,
        rng: &mut R,
    ) -> Self {
        let mut mutate = |base: f64| base + uniform(rng, -1.0, 1.0) * traits.mutation_rate;

        let vision = mutate(traits.vision);
        let peripheral = mutate(traits.peripheral);
        let speed = mutate(traits.speed);
        let damage = mutate(traits.damage);

        // Prey have always started with energy equal to health, although only
        // predators gain or spend energy. Left as-is so results stay comparable
        // with earlier runs; predators start empty and must feed before breeding.
        let energy = match kind {
            Kind::Prey => traits.health,
            Kind::Predator => 0.0,
        };

        Self {
            kind,
            generation: traits.generation,
            position,
            destination,
            heading: position.bearing_to(destination),
            vision,
            peripheral,
            speed,
            damage,
            separation_weight: traits.separation_weight,
            birth_rate: traits.birth_rate,
            mutation_rate: traits.mutation_rate,
            lifespan: traits.lifespan,
            age: 0.0,
            health: traits.health,
            energy,
        }
    }

    /// Current attribute values, as recorded by statistics
    pub fn traits(&self) -> Traits {
        Traits {
            generation: self.generation,
            lifespan: self.lifespan,
            health: self.health,
            vision: self.vision,
            peripheral: self.peripheral,
            speed: self.speed,
            damage: self.damage,
            separation_weight: self.separation_weight,
            birth_rate: self.birth_rate,
            mutation_rate: self.mutation_rate,
        }
    }

    /// Attributes handed to offspring: current values, next generation
    pub fn offspring_traits(&self) -> Traits {
        Traits {
            generation: self.generation + 1,
            ..self.traits()
        }
    }

    /// Check if health or age has run out
    pub fn is_dead(&self) -> bool {
        self.health <= 0.0 || self.age > self.lifespan
    }

    /// Whether `other` lies inside the forward viewing cone and within `radius`
    pub fn can_see(&self, other: &Agent, radius: f64) -> bool {
        let bearing = self.position.bearing_to(other.position);
        let in_cone = self.heading - self.peripheral < bearing && bearing < self.heading + self.peripheral;
        in_cone && self.position.distance(other.position) < radius
    }

    /// All agents from `others` visible within `radius`. Callers pass the
    /// population without this agent.
    pub fn neighbors<'a, I>(&self, others: I, radius: f64) -> Vec<&'a Agent>
    where
        I: IntoIterator<Item = &'a Agent>,
    {
        others
            .into_iter()
            .filter(|other| !std::ptr::eq(*other, self) && self.can_see(other, radius))
            .collect()
    }

    /// Distance to the current destination is below `proximity`
    pub fn near_destination(&self, proximity: f64) -> bool {
        self.position.distance(self.destination) < proximity
    }

    /// Pick a new destination once the current one is within `proximity`.
    ///
    /// With nothing in view the agent wanders to a random point inside its
    /// cone; otherwise the summed steering contributions of every visible
    /// neighbor decide. Returns whether a new destination was set.
    pub fn sense_and_retarget<'a, I, R>(
        &mut self,
        others: I,
        fast_forward: u32,
        proximity: f64,
        rng: &mut R,
    ) -> bool
    where
        I: IntoIterator<Item = &'a Agent>,
        R: Rng + ?Sized,
    {
        if !self.near_destination(proximity) {
            return false;
        }

        let visible = self.neighbors(others, self.vision);
        let offset = if visible.is_empty() {
            self.wander(fast_forward, rng)
        } else {
            self.steer(&visible)
        };

        self.destination = self.position + offset;
        self.update_heading();
        true
    }

    /// Random offset along a heading drawn from the viewing cone
    fn wander<R: Rng + ?Sized>(&mut self, fast_forward: u32, rng: &mut R) -> Vec2 {
        self.heading = uniform(
            rng,
            self.heading - self.peripheral,
            self.heading + self.peripheral,
        );
        Vec2::from_angle(self.heading) * (self.vision * lifecycle_factor(fast_forward))
    }

    /// Vector sum of the steering rule for every visible neighbor
    pub fn steer(&self, visible: &[&Agent]) -> Vec2 {
        visible.iter().fold(Vec2::ZERO, |sum, neighbor| {
            sum + Steering::for_pair(self.kind, neighbor.kind).contribution(self, neighbor)
        })
    }

    fn update_heading(&mut self) {
        self.heading = self.position.bearing_to(self.destination);
    }

    /// Step `speed / time_scale` along the heading, wrapping around the plane edges
    pub fn advance(&mut self, world_size: f64, time_scale: f64) {
        self.position += Vec2::from_angle(self.heading) * (self.speed / time_scale);

        let shift = Vec2::new(
            wrap_offset(self.position.x, world_size),
            wrap_offset(self.position.y, world_size),
        );
        if shift != Vec2::ZERO {
            self.position += shift;
            self.destination += shift;
            self.update_heading();
        }
    }

    /// Damage every opposing agent within `radius` in any direction.
    ///
    /// Predators gain `damage * lifecycle_factor` energy per hit while their
    /// energy is below their health, never exceeding it. Returns the number of hits.
    pub fn engage<'a, I>(&mut self, others: I, radius: f64, fast_forward: u32) -> usize
    where
        I: IntoIterator<Item = &'a mut Agent>,
    {
        let gain = self.damage * lifecycle_factor(fast_forward);
        let mut hits = 0;

        for other in others {
            if !self.kind.opposes(other.kind) || self.position.distance(other.position) >= radius {
                continue;
            }
            other.health -= self.damage;
            hits += 1;

            if self.kind == Kind::Predator && self.energy < self.health {
                self.energy = (self.energy + gain).min(self.health);
            }
        }

        hits
    }

    /// Grow older; starving predators lose a little health. Returns true when dead.
    pub fn age_and_check_death<R: Rng + ?Sized>(&mut self, fast_forward: u32, rng: &mut R) -> bool {
        let factor = lifecycle_factor(fast_forward);
        self.age += 0.01 * factor;

        if self.kind == Kind::Predator && self.energy == 0.0 {
            self.health -= uniform(rng, 0.0, 0.1) * factor;
        }

        self.is_dead()
    }

    /// Roll for reproduction this turn.
    ///
    /// Predators need more than `damage * lifecycle_factor` energy and spend
    /// that much on success. Prey chances are divided by `prey_population / 100`;
    /// an empty prey count never reproduces.
    pub fn attempt_reproduction<R: Rng + ?Sized>(
        &mut self,
        fast_forward: u32,
        prey_population: usize,
        rng: &mut R,
    ) -> bool {
        let factor = lifecycle_factor(fast_forward);
        let chance = self.birth_rate * factor;

        match self.kind {
            Kind::Predator => {
                let cost = self.damage * factor;
                if rng.gen::<f64>() < chance && self.energy > cost {
                    self.energy -= cost;
                    true
                } else {
                    false
                }
            }
            Kind::Prey => {
                if prey_population == 0 {
                    log::debug!("Prey reproduction skipped: prey count is zero");
                    return false;
                }
                rng.gen::<f64>() < chance / (prey_population as f64 / 100.0)
            }
        }
    }

    /// Build a child near this agent heading for a random point on the plane
    pub fn spawn_offspring<R: Rng + ?Sized>(&self, spread: f64, world_size: f64, rng: &mut R) -> Agent {
        let position = self.position
            + Vec2::new(uniform(rng, -spread, spread), uniform(rng, -spread, spread));
        let destination = random_point(world_size, rng);
        Agent::new(self.kind, position, destination, &self.offspring_traits(), rng)
    }
}

/// Uniform sample between `low` and `high`; the bounds may come in either order
pub fn uniform<R: Rng + ?Sized>(rng: &mut R, low: f64, high: f64) -> f64 {
    low + (high - low) * rng.gen::<f64>()
}

/// Uniform random point on the plane `[-size/2, size/2]^2`
pub fn random_point<R: Rng + ?Sized>(size: f64, rng: &mut R) -> Vec2 {
    let half = size / 2.0;
    Vec2::new(uniform(rng, -half, half), uniform(rng, -half, half))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::KindConfig;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(7)
    }

    fn exact(config: KindConfig) -> Traits {
        Traits {
            mutation_rate: 0.0,
            ..config.base_traits()
        }
    }

    /// Agent facing +x from `position`
    fn agent_at(kind: Kind, x: f64, y: f64) -> Agent {
        let config = match kind {
            Kind::Prey => KindConfig::default_prey(),
            Kind::Predator => KindConfig::default_predator(),
        };
        let position = Vec2::new(x, y);
        Agent::new(kind, position, position + Vec2::new(100.0, 0.0), &exact(config), &mut rng())
    }

    #[test]
    fn test_mutation_within_rate() {
        let traits = KindConfig::default_predator().base_traits();
        let mut rng = rng();
        for _ in 0..100 {
            let agent = Agent::new(Kind::Predator, Vec2::ZERO, Vec2::new(1.0, 0.0), &traits, &mut rng);
            assert!((agent.vision - traits.vision).abs() <= traits.mutation_rate);
            assert!((agent.speed - traits.speed).abs() <= traits.mutation_rate);
            assert!((agent.damage - traits.damage).abs() <= traits.mutation_rate);
            assert!((agent.peripheral - traits.peripheral).abs() <= traits.mutation_rate);
            assert_eq!(agent.birth_rate, traits.birth_rate);
            assert_eq!(agent.separation_weight, traits.separation_weight);
            assert_eq!(agent.mutation_rate, traits.mutation_rate);
            assert_eq!(agent.lifespan, traits.lifespan);
        }
    }

    #[test]
    fn test_initial_energy() {
        let predator = agent_at(Kind::Predator, 0.0, 0.0);
        let prey = agent_at(Kind::Prey, 0.0, 0.0);
        assert_eq!(predator.energy, 0.0);
        assert_eq!(prey.energy, prey.health);
        assert_eq!(predator.age, 0.0);
        assert_eq!(predator.generation, 0);
    }

    #[test]
    fn test_heading_from_destination() {
        let agent = Agent::new(
            Kind::Prey,
            Vec2::ZERO,
            Vec2::new(0.0, 10.0),
            &exact(KindConfig::default_prey()),
            &mut rng(),
        );
        assert!((agent.heading - PI / 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_steering_table() {
        assert_eq!(Steering::for_pair(Kind::Predator, Kind::Prey), Steering::Hunt);
        assert_eq!(Steering::for_pair(Kind::Prey, Kind::Prey), Steering::Flock);
        assert_eq!(Steering::for_pair(Kind::Prey, Kind::Predator), Steering::Flee);
        assert_eq!(Steering::for_pair(Kind::Predator, Kind::Predator), Steering::Separate);
    }

    #[test]
    fn test_cone_query() {
        let viewer = agent_at(Kind::Predator, 0.0, 0.0);
        let ahead = agent_at(Kind::Prey, 10.0, 0.0);
        let behind = agent_at(Kind::Prey, -10.0, 0.0);
        let far = agent_at(Kind::Prey, 100.0, 0.0);

        let others = [ahead.clone(), behind, far];
        let seen = viewer.neighbors(&others, viewer.vision);
        assert_eq!(seen, vec![&ahead]);
    }

    #[test]
    fn test_query_skips_self() {
        let agents = [agent_at(Kind::Prey, 0.0, 0.0), agent_at(Kind::Prey, 5.0, 0.0)];
        let seen = agents[0].neighbors(&agents, 50.0);
        assert_eq!(seen.len(), 1);
        assert!(std::ptr::eq(seen[0], &agents[1]));
    }

    #[test]
    fn test_hunt_moves_toward_prey() {
        let mut hunter = agent_at(Kind::Predator, 0.0, 0.0);
        hunter.destination = hunter.position;
        let prey = agent_at(Kind::Prey, 10.0, 0.0);

        assert!(hunter.sense_and_retarget([&prey], 1, 10.0, &mut rng()));
        assert!((hunter.destination.x - hunter.speed).abs() < 1e-9);
        assert!(hunter.destination.y.abs() < 1e-9);
        assert!(hunter.heading.abs() < 1e-12);
    }

    #[test]
    fn test_flee_moves_away() {
        let mut prey = agent_at(Kind::Prey, 0.0, 0.0);
        let predator = agent_at(Kind::Predator, 5.0, 0.0);

        let offset = prey.steer(&[&predator]);
        assert!((offset.x + prey.speed).abs() < 1e-9);

        prey.destination = prey.position;
        prey.sense_and_retarget([&predator], 1, 10.0, &mut rng());
        assert!(prey.destination.x < 0.0);
    }

    #[test]
    fn test_flock_only_beyond_spacing() {
        let prey = agent_at(Kind::Prey, 0.0, 0.0);
        let spacing = prey.speed * prey.separation_weight;

        let close = agent_at(Kind::Prey, spacing / 2.0, 0.0);
        assert_eq!(prey.steer(&[&close]), Vec2::ZERO);

        let distant = agent_at(Kind::Prey, spacing * 1.5, 0.0);
        let offset = prey.steer(&[&distant]);
        // Bearing 0 gives (sin 0, cos 0) * speed
        assert!(offset.x.abs() < 1e-9);
        assert!((offset.y - prey.speed).abs() < 1e-9);
    }

    #[test]
    fn test_separate_only_within_spacing() {
        let predator = agent_at(Kind::Predator, 0.0, 0.0);
        let spacing = predator.speed * predator.separation_weight;

        let close = agent_at(Kind::Predator, spacing / 2.0, 0.0);
        let offset = predator.steer(&[&close]);
        assert!((offset.x + predator.speed).abs() < 1e-9);

        let distant = agent_at(Kind::Predator, spacing * 1.2, 0.0);
        assert_eq!(predator.steer(&[&distant]), Vec2::ZERO);
    }

    #[test]
    fn test_contributions_are_summed() {
        let predator = agent_at(Kind::Predator, 0.0, 0.0);
        let a = agent_at(Kind::Prey, 10.0, 0.0);
        let b = agent_at(Kind::Prey, 20.0, 0.0);
        let offset = predator.steer(&[&a, &b]);
        assert!((offset.x - 2.0 * predator.speed).abs() < 1e-9);
    }

    #[test]
    fn test_wander_stays_in_cone() {
        let mut rng = rng();
        for _ in 0..50 {
            let mut agent = agent_at(Kind::Prey, 0.0, 0.0);
            agent.destination = agent.position;
            agent.heading = 0.5;
            let before = agent.heading;

            assert!(agent.sense_and_retarget(std::iter::empty(), 1, 10.0, &mut rng));
            assert!(agent.heading >= before - agent.peripheral - 1e-12);
            assert!(agent.heading <= before + agent.peripheral + 1e-12);
            let travelled = agent.position.distance(agent.destination);
            assert!((travelled - agent.vision).abs() < 1e-9);
        }
    }

    #[test]
    fn test_wander_distance_scales_with_fast_forward() {
        let mut agent = agent_at(Kind::Prey, 0.0, 0.0);
        agent.destination = agent.position;
        agent.sense_and_retarget(std::iter::empty(), 10, 10.0, &mut rng());
        let travelled = agent.position.distance(agent.destination);
        assert!((travelled - 2.0 * agent.vision).abs() < 1e-9);
    }

    #[test]
    fn test_no_retarget_when_far_from_destination() {
        let mut agent = agent_at(Kind::Prey, 0.0, 0.0);
        let before = agent.destination;
        assert!(!agent.sense_and_retarget(std::iter::empty(), 1, 10.0, &mut rng()));
        assert_eq!(agent.destination, before);
    }

    #[test]
    fn test_advance_step() {
        let mut agent = agent_at(Kind::Predator, 0.0, 0.0);
        agent.advance(600.0, 4.0);
        assert!((agent.position.x - agent.speed / 4.0).abs() < 1e-9);
        assert!(agent.position.y.abs() < 1e-9);
    }

    #[test]
    fn test_advance_wraps() {
        let mut agent = agent_at(Kind::Predator, 299.0, 0.0);
        let offset = agent.destination - agent.position;
        agent.advance(600.0, 1.0);

        assert!(agent.position.x < 0.0);
        assert!((agent.position.x - (299.0 + agent.speed - 600.0)).abs() < 1e-9);
        // Destination moves with the agent so the heading is preserved
        assert!(((agent.destination - agent.position).x - (offset.x - agent.speed)).abs() < 1e-9);
        assert!(agent.heading.abs() < 1e-12);
    }

    #[test]
    fn test_engage_hits_opponents_only() {
        let mut predator = agent_at(Kind::Predator, 0.0, 0.0);
        let mut others = vec![
            agent_at(Kind::Prey, -2.0, 0.0),
            agent_at(Kind::Predator, 1.0, 0.0),
            agent_at(Kind::Prey, 50.0, 0.0),
        ];

        let hits = predator.engage(others.iter_mut(), 5.0, 1);

        assert_eq!(hits, 1);
        // Behind the predator but inside the omnidirectional radius
        assert_eq!(others[0].health, 1.0 - predator.damage);
        assert_eq!(others[1].health, 10.0);
        assert_eq!(others[2].health, 1.0);
        assert_eq!(predator.energy, predator.damage);
    }

    #[test]
    fn test_energy_capped_at_health() {
        let mut predator = agent_at(Kind::Predator, 0.0, 0.0);
        predator.damage = 4.0;
        predator.health = 6.0;
        let mut prey: Vec<Agent> = (0..3).map(|_| agent_at(Kind::Prey, 1.0, 1.0)).collect();

        predator.engage(prey.iter_mut(), 5.0, 1);
        assert_eq!(predator.energy, 6.0);
    }

    #[test]
    fn test_ageing_and_death() {
        let mut prey = agent_at(Kind::Prey, 0.0, 0.0);
        let mut rng = rng();
        assert!(!prey.age_and_check_death(1, &mut rng));
        assert!((prey.age - 0.01).abs() < 1e-12);

        prey.age = prey.lifespan;
        assert!(prey.age_and_check_death(1, &mut rng));

        let mut wounded = agent_at(Kind::Prey, 0.0, 0.0);
        wounded.health = 0.0;
        assert!(wounded.age_and_check_death(1, &mut rng));
    }

    #[test]
    fn test_death_implies_exhausted() {
        let mut rng = rng();
        for i in 0..200 {
            let mut agent = agent_at(Kind::Predator, 0.0, 0.0);
            agent.health = (i % 7) as f64 * 0.03;
            agent.age = agent.lifespan - (i % 3) as f64 * 0.005;
            if agent.age_and_check_death(1 + (i % 10) as u32, &mut rng) {
                assert!(agent.health <= 0.0 || agent.age > agent.lifespan);
            } else {
                assert!(agent.health > 0.0 && agent.age <= agent.lifespan);
            }
        }
    }

    #[test]
    fn test_starvation() {
        let mut predator = agent_at(Kind::Predator, 0.0, 0.0);
        let before = predator.health;
        predator.age_and_check_death(1, &mut rng());
        assert!(predator.health <= before);
        assert!(predator.health >= before - 0.1);

        let mut fed = agent_at(Kind::Predator, 0.0, 0.0);
        fed.energy = 1.0;
        fed.age_and_check_death(1, &mut rng());
        assert_eq!(fed.health, 10.0);

        let mut prey = agent_at(Kind::Prey, 0.0, 0.0);
        prey.energy = 0.0;
        prey.age_and_check_death(1, &mut rng());
        assert_eq!(prey.health, 1.0);
    }

    #[test]
    fn test_predator_reproduction_needs_energy() {
        let mut rng = rng();
        let mut predator = agent_at(Kind::Predator, 0.0, 0.0);
        predator.birth_rate = 1.0;

        predator.energy = predator.damage;
        assert!(!predator.attempt_reproduction(1, 10, &mut rng));

        predator.energy = 3.0;
        assert!(predator.attempt_reproduction(1, 10, &mut rng));
        assert!((predator.energy - (3.0 - predator.damage)).abs() < 1e-12);
    }

    #[test]
    fn test_prey_reproduction_density() {
        let mut rng = rng();
        let mut prey = agent_at(Kind::Prey, 0.0, 0.0);
        prey.birth_rate = 0.01;

        // 0.01 / (1 / 100) = 1.0, certain
        assert!(prey.attempt_reproduction(1, 1, &mut rng));
        assert!(!prey.attempt_reproduction(1, 0, &mut rng));

        prey.birth_rate = 0.0;
        assert!(!prey.attempt_reproduction(1, 1, &mut rng));
    }

    #[test]
    fn test_offspring() {
        let mut rng = rng();
        let mut parent = agent_at(Kind::Predator, 10.0, -20.0);
        parent.health = 7.5;
        parent.generation = 3;

        let child = parent.spawn_offspring(10.0, 600.0, &mut rng);
        assert_eq!(child.kind, Kind::Predator);
        assert_eq!(child.generation, 4);
        assert_eq!(child.health, 7.5);
        assert_eq!(child.age, 0.0);
        assert!((child.position.x - 10.0).abs() <= 10.0);
        assert!((child.position.y + 20.0).abs() <= 10.0);
        assert_eq!(child.vision, parent.vision);
    }
}
