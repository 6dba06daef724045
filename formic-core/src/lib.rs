//! # Formic Core - Ant Colony DNA Reconstruction
//!
//! An ant colony optimization (ACO) engine that reconstructs an unknown
//! DNA sequence from a noisy multiset of overlapping fragments, as
//! produced by a sequencing-by-hybridization experiment.
//!
//! ## Overview
//!
//! The spectrum of observed oligonucleotides is turned into a directed
//! overlap graph; a population of ants then builds candidate sequences by
//! walking that graph, biased by a pheromone field that is reinforced from
//! the best solution found so far. Candidates are scored by edit distance
//! to the original sequence, which the search consults only for its length
//! and for scoring, never for guidance.
//!
//! ## Quick Start
//!
//! ```rust
//! use formic_core::{Colony, ColonyConfig, Instance, UsageLimit};
//!
//! // An error-free spectrum of all length-4 substrings.
//! let original = "GTTGCAAATA";
//! let oligos = (0..=original.len() - 4)
//!     .map(|i| (original[i..i + 4].to_string(), UsageLimit::Bounded(1)))
//!     .collect();
//! let instance = Instance::new(original, oligos);
//!
//! let config = ColonyConfig {
//!     seed: Some(42),
//!     quiet: true,
//!     ..Default::default()
//! };
//! let mut colony = Colony::new(&instance, config)?;
//! let results = colony.run();
//!
//! println!("reconstructed: {} (edit distance {})", results.sequence, results.score);
//! # Ok::<(), formic_core::FormicError>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`config`]: Run parameters and their validation
//! - [`instance`]: The parsed reconstruction problem
//! - [`distance`]: Overlap metric and Levenshtein scorer
//! - [`graph`]: Directed overlap graph and route assembly
//! - [`pheromone`]: Pheromone field and elitist update rule
//! - [`ant`]: One stochastic constructive walk
//! - [`colony`]: The iteration loop and best-solution tracking
//! - [`results`]: Run results and terminal states
//! - [`types`]: Error taxonomy
//!
//! ## Determinism
//!
//! The search is inherently stochastic, but the random source is an
//! explicit seeded generator: with [`ColonyConfig::seed`](config::ColonyConfig::seed)
//! fixed, two runs on the same instance produce identical trajectories.
//!
//! ## Error Handling
//!
//! Configuration and instance defects are fatal and surface as
//! [`FormicError`] before any search state is built. Empty candidate
//! sets, score ties, and partial routes are normal control flow and are
//! handled internally.

pub mod ant;
pub mod colony;
pub mod config;
pub mod constants;
pub mod distance;
pub mod graph;
pub mod instance;
pub mod pheromone;
pub mod results;
pub mod types;

pub use colony::Colony;
pub use config::ColonyConfig;
pub use instance::{Instance, UsageLimit};
pub use results::{ColonyResults, StopReason};
pub use types::FormicError;
