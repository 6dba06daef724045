//! Learned edge preference weights over the fragment index space.

use crate::constants::{INITIAL_PHEROMONE, REINFORCEMENT_CONSTANT};

/// Mutable pheromone matrix driving the stochastic edge selection.
///
/// Initialised uniformly and mutated only by the colony controller between
/// iterations (elitist update: only the best-known route deposits). There
/// is no upper clamp, so entries on a route that stays best for very many
/// iterations grow without bound; at the iteration budgets this system is
/// run with, that growth stays harmless.
#[derive(Debug)]
pub struct PheromoneField {
    weights: Vec<f64>,
    size: usize,
    evaporation: f64,
}

impl PheromoneField {
    /// Creates a uniform field over `size` fragments.
    ///
    /// `evaporation` is the per-iteration decay fraction, already
    /// validated to lie in `[0, 1)`.
    #[must_use]
    pub fn new(size: usize, evaporation: f64) -> Self {
        Self {
            weights: vec![INITIAL_PHEROMONE; size * size],
            size,
            evaporation,
        }
    }

    /// Pheromone weight of the directed edge `from -> to`.
    #[must_use]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.weights[from * self.size + to]
    }

    /// One elitist update step: decay every entry, then deposit
    /// `REINFORCEMENT_CONSTANT / best_score` along each consecutive pair
    /// of the global best route.
    ///
    /// The controller never calls this with a perfect score (a score of 0
    /// stops the run before any update), so the deposit is always finite.
    pub fn evaporate_and_reinforce(&mut self, best_route: &[usize], best_score: usize) {
        debug_assert!(best_score > 0);
        let keep = 1.0 - self.evaporation;
        for weight in &mut self.weights {
            *weight *= keep;
        }
        let deposit = REINFORCEMENT_CONSTANT / best_score as f64;
        for pair in best_route.windows(2) {
            self.weights[pair[0] * self.size + pair[1]] += deposit;
        }
    }
}
