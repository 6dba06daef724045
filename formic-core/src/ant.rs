//! One stochastic constructive walk over the overlap graph.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::distance::edit_distance;
use crate::graph::OverlapGraph;
use crate::pheromone::PheromoneField;

/// Result of one ant's walk, reported back to the colony controller.
///
/// The ant never mutates the pheromone field itself; reinforcement is the
/// controller's job.
#[derive(Debug, Clone)]
pub struct AntOutcome {
    /// Fragment indices in the order they were chosen.
    pub route: Vec<usize>,
    /// The assembled candidate sequence.
    pub sequence: String,
    /// Edit distance between the candidate and the original sequence.
    pub score: usize,
}

impl AntOutcome {
    /// Whether this candidate reconstructs the original exactly.
    #[must_use]
    pub const fn is_exact(&self) -> bool {
        self.score == 0
    }
}

/// Runs one constructive walk and scores the assembled candidate.
///
/// The walk starts at the fixed starting fragment (spectrum index 0),
/// then repeatedly samples the next fragment among the current one's
/// successor candidates, weighted by
/// `pheromone^alpha * (1 / shift)^beta`. Candidates that have exhausted
/// their usage budget or would push the assembled length past the target
/// are excluded; when no candidate remains the walk ends early with a
/// partial solution, which is normal and scored as-is.
pub fn run_ant(
    graph: &OverlapGraph,
    pheromone: &PheromoneField,
    alpha: f64,
    beta: f64,
    original_sequence: &str,
    rng: &mut ChaCha8Rng,
) -> AntOutcome {
    let count = graph.fragment_count();
    let mut usage = vec![0u32; count];
    let mut exhausted = vec![false; count];

    let start = graph.start_index();
    let mut route = vec![start];
    usage[start] += 1;
    // A fragment is exhausted exactly when its own counter reaches its own
    // budget, starting fragment included.
    if graph.limit(start).is_reached(usage[start]) {
        exhausted[start] = true;
    }

    let target = graph.target_length();
    let mut solution_size = graph.oligo_size();
    let mut current = start;

    while solution_size < target {
        let candidates: Vec<usize> = graph
            .successors(current)
            .iter()
            .copied()
            .filter(|&next| {
                !exhausted[next] && solution_size + graph.shift(current, next) <= target
            })
            .collect();
        if candidates.is_empty() {
            break;
        }

        let weights: Vec<f64> = candidates
            .iter()
            .map(|&next| {
                // Candidate shifts are in (0, MAX_SUCCESSOR_SHIFT) by
                // construction, so the inverse is well-defined.
                let shift = graph.shift(current, next) as f64;
                pheromone.get(current, next).powf(alpha) * shift.recip().powf(beta)
            })
            .collect();

        let next = candidates[weighted_pick(&weights, rng)];
        route.push(next);
        usage[next] += 1;
        if graph.limit(next).is_reached(usage[next]) {
            exhausted[next] = true;
        }
        solution_size += graph.shift(current, next);
        current = next;
    }

    let sequence = graph.assemble(&route);
    let score = edit_distance(original_sequence, &sequence);
    AntOutcome {
        route,
        sequence,
        score,
    }
}

/// Weighted random selection: rolls once in `[0, total)` and walks the
/// cumulative weights. Degenerate all-zero weights fall back to the first
/// candidate.
fn weighted_pick(weights: &[f64], rng: &mut ChaCha8Rng) -> usize {
    let total: f64 = weights.iter().sum();
    if total <= 0.0 {
        return 0;
    }
    let mut roll: f64 = rng.gen::<f64>() * total;
    for (index, &weight) in weights.iter().enumerate() {
        roll -= weight;
        if roll <= 0.0 {
            return index;
        }
    }
    weights.len() - 1
}
