//! Synthetic test instance generation.
//!
//! Synthesises a random DNA sequence, takes its ideal spectrum (every
//! fixed-length substring with its multiplicity), then corrupts it with
//! negative errors (removed fragments) and positive errors (spurious
//! fragments). Repeat counts above 2, which a hybridization chip cannot
//! resolve reliably, are recorded as unbounded; the starting fragment is
//! exempt and always emitted first with its true count.

use std::collections::HashMap;

use formic_core::{FormicError, Instance, UsageLimit};
use rand::seq::SliceRandom;
use rand::Rng;

const NUCLEOTIDES: [char; 4] = ['G', 'T', 'C', 'A'];

/// Largest repeat count written verbatim; higher counts become `inf`.
const MAX_RESOLVED_COUNT: u32 = 2;

#[derive(Debug, Clone)]
pub struct GeneratorParams {
    /// Length of the synthesised original sequence.
    pub dna_size: usize,
    /// Length of every spectrum fragment.
    pub oligo_size: usize,
    /// Percentage of the spectrum corrupted by each error kind.
    pub error_percent: u32,
}

pub fn generate_instance(
    params: &GeneratorParams,
    rng: &mut impl Rng,
) -> Result<Instance, FormicError> {
    if params.oligo_size == 0 || params.dna_size < params.oligo_size {
        return Err(FormicError::InvalidConfiguration(format!(
            "dna size {} cannot hold oligos of size {}",
            params.dna_size, params.oligo_size
        )));
    }

    let dna: String = (0..params.dna_size)
        .map(|_| NUCLEOTIDES[rng.gen_range(0..NUCLEOTIDES.len())])
        .collect();

    // Ideal spectrum in first-occurrence order.
    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, u32> = HashMap::new();
    let spectrum_size = params.dna_size - params.oligo_size + 1;
    for i in 0..spectrum_size {
        let window = dna[i..i + params.oligo_size].to_string();
        match counts.get_mut(&window) {
            Some(count) => *count += 1,
            None => {
                counts.insert(window.clone(), 1);
                order.push(window);
            }
        }
    }

    let num_errors = (spectrum_size * params.error_percent as usize).div_ceil(100);
    if num_errors >= order.len() {
        return Err(FormicError::InvalidConfiguration(format!(
            "error rate {}% would remove the entire spectrum ({} of {} unique oligos)",
            params.error_percent,
            num_errors,
            order.len()
        )));
    }

    // Negative errors: drop random fragments, never the starting one.
    for _ in 0..num_errors {
        let index = rng.gen_range(1..order.len());
        let removed = order.remove(index);
        counts.remove(&removed);
    }

    // Positive errors: insert random fragments absent from the spectrum.
    let oligo_space = 4u64.saturating_pow(params.oligo_size as u32);
    for _ in 0..num_errors {
        if counts.len() as u64 >= oligo_space {
            return Err(FormicError::InvalidConfiguration(
                "spectrum saturates the oligo space, cannot insert positive errors".to_string(),
            ));
        }
        let spurious = loop {
            let candidate: String = (0..params.oligo_size)
                .map(|_| NUCLEOTIDES[rng.gen_range(0..NUCLEOTIDES.len())])
                .collect();
            if !counts.contains_key(&candidate) {
                break candidate;
            }
        };
        counts.insert(spurious.clone(), 1);
        order.push(spurious);
    }

    // The starting fragment goes first with its true count; everything
    // else follows in random order with counts above the resolution
    // threshold recorded as unbounded.
    let first = order[0].clone();
    let mut rest: Vec<String> = order[1..].to_vec();
    rest.shuffle(rng);

    let mut oligos = Vec::with_capacity(order.len());
    oligos.push((first.clone(), UsageLimit::Bounded(counts[&first])));
    for oligo in rest {
        let count = counts[&oligo];
        let limit = if count > MAX_RESOLVED_COUNT {
            UsageLimit::Unbounded
        } else {
            UsageLimit::Bounded(count)
        };
        oligos.push((oligo, limit));
    }

    Ok(Instance::new(dna, oligos))
}
