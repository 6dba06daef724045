/// Version string for Formic
pub const VERSION: &str = "0.1.0";

/// Initial value for every pheromone matrix entry
pub const INITIAL_PHEROMONE: f64 = 0.5;

/// Numerator of the elitist reinforcement deposit (`REINFORCEMENT_CONSTANT / best_score`)
pub const REINFORCEMENT_CONSTANT: f64 = 20.0;

/// Exclusive upper bound on the overlap shift of a successor candidate edge.
///
/// Edges with shift 0 carry no usable overlap and edges at or above this
/// bound overlap too weakly to be biologically plausible, so the successor
/// candidate lists keep only shifts in the open interval (0, 4).
pub const MAX_SUCCESSOR_SHIFT: usize = 4;
