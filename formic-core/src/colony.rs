//! The colony controller: iteration loop, best-so-far tracking, and the
//! elitist pheromone update.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::ant::run_ant;
use crate::config::ColonyConfig;
use crate::graph::OverlapGraph;
use crate::instance::Instance;
use crate::pheromone::PheromoneField;
use crate::results::{ColonyResults, StopReason};
use crate::types::FormicError;

/// Best candidate seen across the whole run.
///
/// Replaced only on strict score improvement, so ties keep the
/// earlier-found candidate and the score is non-increasing over time.
#[derive(Debug)]
struct BestSoFar {
    route: Vec<usize>,
    sequence: String,
    score: usize,
}

impl BestSoFar {
    fn new() -> Self {
        Self {
            route: Vec::new(),
            sequence: String::new(),
            score: usize::MAX,
        }
    }
}

/// Ant colony search engine for one reconstruction problem.
///
/// Owns all mutable run state: the pheromone field, the random source, and
/// the best-so-far candidate. The overlap graph is built once in
/// [`Colony::new`] and only read afterwards.
///
/// # Examples
///
/// ```rust
/// use formic_core::{Colony, ColonyConfig, Instance, UsageLimit};
///
/// let original = "GTTGCAAATA";
/// let oligos = (0..=original.len() - 4)
///     .map(|i| (original[i..i + 4].to_string(), UsageLimit::Bounded(1)))
///     .collect();
/// let instance = Instance::new(original, oligos);
///
/// let config = ColonyConfig { seed: Some(42), quiet: true, ..Default::default() };
/// let mut colony = Colony::new(&instance, config)?;
/// let results = colony.run();
///
/// assert!(results.score <= original.len());
/// # Ok::<(), formic_core::FormicError>(())
/// ```
#[derive(Debug)]
pub struct Colony {
    config: ColonyConfig,
    graph: OverlapGraph,
    pheromone: PheromoneField,
    rng: ChaCha8Rng,
    original_sequence: String,
    best: BestSoFar,
}

impl Colony {
    /// Builds the search engine for an instance.
    ///
    /// Validates the configuration and the instance, builds the overlap
    /// graph and successor candidate lists, and initialises a uniform
    /// pheromone field.
    ///
    /// # Errors
    ///
    /// Returns [`FormicError::InvalidConfiguration`] for out-of-range run
    /// parameters and [`FormicError::InvalidInstance`] /
    /// [`FormicError::FragmentLengthMismatch`] for structurally defective
    /// spectra.
    pub fn new(instance: &Instance, config: ColonyConfig) -> Result<Self, FormicError> {
        config.validate()?;
        let graph = OverlapGraph::build(instance)?;
        let pheromone = PheromoneField::new(graph.fragment_count(), config.evaporation);
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Ok(Self {
            config,
            graph,
            pheromone,
            rng,
            original_sequence: instance.original_sequence.clone(),
            best: BestSoFar::new(),
        })
    }

    /// Runs the search to a terminal state and returns the best candidate.
    ///
    /// Each iteration spawns `ants_count` walks sequentially. Any walk
    /// that reconstructs the original exactly stops the run immediately;
    /// the pheromone update for that iteration is skipped. Otherwise the
    /// iteration ends with one elitist decay-and-reinforce step from the
    /// best-so-far route.
    pub fn run(&mut self) -> ColonyResults {
        for iteration in 0..self.config.iterations {
            if !self.config.quiet {
                eprintln!(
                    "Starting iteration {}/{}",
                    iteration + 1,
                    self.config.iterations
                );
            }

            let mut found_exact = false;
            for _ in 0..self.config.ants_count {
                let outcome = run_ant(
                    &self.graph,
                    &self.pheromone,
                    self.config.alpha,
                    self.config.beta,
                    &self.original_sequence,
                    &mut self.rng,
                );
                if outcome.score < self.best.score {
                    self.best.route = outcome.route;
                    self.best.sequence = outcome.sequence;
                    self.best.score = outcome.score;
                }
                if self.best.score == 0 {
                    found_exact = true;
                    break;
                }
            }

            if found_exact {
                if !self.config.quiet {
                    eprintln!("Perfect reconstruction found, stopping early");
                }
                return self.results(StopReason::PerfectMatch, iteration + 1);
            }

            // Best score is strictly positive here, so the deposit in the
            // update is finite.
            self.pheromone
                .evaporate_and_reinforce(&self.best.route, self.best.score);

            if !self.config.quiet {
                eprintln!("Best edit distance so far: {}", self.best.score);
            }
        }

        self.results(StopReason::IterationBudget, self.config.iterations)
    }

    fn results(&self, stop_reason: StopReason, iterations_run: usize) -> ColonyResults {
        ColonyResults {
            sequence: self.best.sequence.clone(),
            score: self.best.score,
            route: self
                .best
                .route
                .iter()
                .map(|&index| self.graph.fragment(index).to_string())
                .collect(),
            stop_reason,
            iterations_run,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::INITIAL_PHEROMONE;
    use crate::distance::edit_distance;
    use crate::instance::UsageLimit;

    /// Complete error-free spectrum of all fixed-length substrings with
    /// correct multiplicities.
    fn ideal_instance(original: &str, oligo_size: usize) -> Instance {
        let mut oligos: Vec<(String, UsageLimit)> = Vec::new();
        for i in 0..=original.len() - oligo_size {
            let window = &original[i..i + oligo_size];
            match oligos.iter_mut().find(|(oligo, _)| oligo == window) {
                Some((_, limit)) => *limit = limit.combine(UsageLimit::Bounded(1)),
                None => oligos.push((window.to_string(), UsageLimit::Bounded(1))),
            }
        }
        Instance::new(original, oligos)
    }

    fn quiet_config(seed: u64) -> ColonyConfig {
        ColonyConfig {
            seed: Some(seed),
            quiet: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_invalid_config_rejected_before_search() {
        let instance = ideal_instance("GTTGCAAATA", 4);
        let config = ColonyConfig {
            iterations: 0,
            ..quiet_config(1)
        };
        assert!(Colony::new(&instance, config).is_err());
    }

    #[test]
    fn test_invalid_instance_rejected_before_search() {
        let instance = Instance::new("ATGC", vec![]);
        assert!(Colony::new(&instance, quiet_config(1)).is_err());
    }

    #[test]
    fn test_reconstructs_error_free_spectrum() {
        let original = "GTTGCAAATA";
        let instance = ideal_instance(original, 4);
        let mut colony = Colony::new(&instance, quiet_config(7)).unwrap();
        let results = colony.run();
        assert_eq!(results.score, 0);
        assert_eq!(results.sequence, original);
        assert_eq!(results.stop_reason, StopReason::PerfectMatch);
        assert!(results.iterations_run <= 50);
    }

    #[test]
    fn test_result_score_matches_sequence() {
        let original = "GTTGCAAATATTCTTGTCGG";
        let instance = ideal_instance(original, 5);
        let mut colony = Colony::new(&instance, quiet_config(3)).unwrap();
        let results = colony.run();
        assert_eq!(results.score, edit_distance(original, &results.sequence));
        // The reported route assembles into the reported sequence.
        assert!(results.sequence.starts_with(&results.route[0]));
    }

    #[test]
    fn test_runs_are_deterministic_for_a_fixed_seed() {
        let instance = ideal_instance("GTTGCAAATATTCTTGTCGG", 4);
        let mut first = Colony::new(&instance, quiet_config(1234)).unwrap();
        let mut second = Colony::new(&instance, quiet_config(1234)).unwrap();
        let first_results = first.run();
        let second_results = second.run();
        assert_eq!(first_results.sequence, second_results.sequence);
        assert_eq!(first_results.score, second_results.score);
        assert_eq!(first_results.route, second_results.route);
        assert_eq!(first_results.iterations_run, second_results.iterations_run);
    }

    #[test]
    fn test_perfect_match_skips_pheromone_update() {
        // Two fragments with a single legal route that is exact: the first
        // iteration must stop the run before any update touches the field.
        let instance = Instance::new(
            "ATGCTC",
            vec![
                ("ATGC".to_string(), UsageLimit::Bounded(1)),
                ("GCTC".to_string(), UsageLimit::Bounded(1)),
            ],
        );
        let mut colony = Colony::new(&instance, quiet_config(5)).unwrap();
        let results = colony.run();
        assert_eq!(results.stop_reason, StopReason::PerfectMatch);
        assert_eq!(results.iterations_run, 1);
        for from in 0..colony.graph.fragment_count() {
            for to in 0..colony.graph.fragment_count() {
                assert_eq!(colony.pheromone.get(from, to), INITIAL_PHEROMONE);
            }
        }
    }

    #[test]
    fn test_best_score_never_worsens_across_runs_of_growing_budget() {
        let instance = ideal_instance("GTTGCAAATATTCTTGTCGG", 6);
        let mut previous_score = usize::MAX;
        for iterations in [1, 5, 20] {
            let config = ColonyConfig {
                iterations,
                ..quiet_config(11)
            };
            let mut colony = Colony::new(&instance, config).unwrap();
            let results = colony.run();
            // Same seed and a longer budget can only extend the same
            // trajectory, so the best score is non-increasing.
            assert!(results.score <= previous_score);
            previous_score = results.score;
        }
    }

    #[test]
    fn test_budget_exhaustion_reports_iteration_count() {
        // A spectrum missing interior fragments cannot reach the target,
        // so the run always spends its whole budget.
        let instance = Instance::new(
            "GTTGCAAATA",
            vec![
                ("GTTG".to_string(), UsageLimit::Bounded(1)),
                ("AATA".to_string(), UsageLimit::Bounded(1)),
            ],
        );
        let config = ColonyConfig {
            iterations: 3,
            ..quiet_config(2)
        };
        let mut colony = Colony::new(&instance, config).unwrap();
        let results = colony.run();
        assert_eq!(results.stop_reason, StopReason::IterationBudget);
        assert_eq!(results.iterations_run, 3);
        assert!(results.score > 0);
    }
}
