//! Directed overlap graph over the fragment spectrum.
//!
//! Built once per run and read-only afterwards: every ant and every
//! iteration shares the same shift matrix and successor candidate lists.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::constants::MAX_SUCCESSOR_SHIFT;
use crate::distance::overlap_shift;
use crate::instance::{Instance, UsageLimit};
use crate::types::FormicError;

/// Precomputed overlap structure for one instance.
///
/// Each distinct fragment string gets a dense index `0..K`; duplicate
/// spectrum entries merge their usage budgets onto one index. The shift
/// matrix is directed (`shift(i, j)` is generally not `shift(j, i)`), and
/// the successor candidate lists keep, per fragment, only the edges whose
/// shift lies strictly between 0 and [`MAX_SUCCESSOR_SHIFT`]: close but
/// not identical overlaps, which bounds the branching factor of the
/// constructive walk.
#[derive(Debug)]
pub struct OverlapGraph {
    fragments: Vec<String>,
    limits: Vec<UsageLimit>,
    shifts: Vec<usize>,
    successors: Vec<Vec<usize>>,
    oligo_size: usize,
    target_length: usize,
}

impl OverlapGraph {
    /// Builds the graph from a spectrum instance.
    ///
    /// # Errors
    ///
    /// Returns the validation error of [`Instance::validate`] for
    /// structurally defective instances; no matrix is built in that case.
    pub fn build(instance: &Instance) -> Result<Self, FormicError> {
        instance.validate()?;

        let mut fragments: Vec<String> = Vec::new();
        let mut limits: Vec<UsageLimit> = Vec::new();
        let mut index_of: HashMap<&str, usize> = HashMap::new();
        for (oligo, limit) in &instance.oligos {
            match index_of.entry(oligo.as_str()) {
                Entry::Occupied(entry) => {
                    let index = *entry.get();
                    limits[index] = limits[index].combine(*limit);
                }
                Entry::Vacant(entry) => {
                    entry.insert(fragments.len());
                    fragments.push(oligo.clone());
                    limits.push(*limit);
                }
            }
        }

        let count = fragments.len();
        let mut shifts = vec![0usize; count * count];
        for i in 0..count {
            for j in 0..count {
                shifts[i * count + j] = overlap_shift(&fragments[i], &fragments[j])?;
            }
        }

        let successors = (0..count)
            .map(|i| {
                (0..count)
                    .filter(|&j| {
                        let shift = shifts[i * count + j];
                        shift > 0 && shift < MAX_SUCCESSOR_SHIFT
                    })
                    .collect()
            })
            .collect();

        Ok(Self {
            fragments,
            limits,
            shifts,
            successors,
            oligo_size: instance.oligo_size(),
            target_length: instance.original_sequence.len(),
        })
    }

    /// Number of distinct fragments (the index space of all matrices).
    #[must_use]
    pub fn fragment_count(&self) -> usize {
        self.fragments.len()
    }

    /// Fragment string at a dense index.
    #[must_use]
    pub fn fragment(&self, index: usize) -> &str {
        &self.fragments[index]
    }

    /// Usage budget of the fragment at `index`.
    #[must_use]
    pub fn limit(&self, index: usize) -> UsageLimit {
        self.limits[index]
    }

    /// Directed overlap shift for the edge `from -> to`.
    #[must_use]
    pub fn shift(&self, from: usize, to: usize) -> usize {
        self.shifts[from * self.fragments.len() + to]
    }

    /// Successor candidates of the fragment at `index`.
    #[must_use]
    pub fn successors(&self, index: usize) -> &[usize] {
        &self.successors[index]
    }

    /// Fragment length shared by the whole spectrum.
    #[must_use]
    pub fn oligo_size(&self) -> usize {
        self.oligo_size
    }

    /// Length of the sequence being reconstructed.
    #[must_use]
    pub fn target_length(&self) -> usize {
        self.target_length
    }

    /// Index of the walk's fixed starting fragment (the first spectrum entry).
    #[must_use]
    pub fn start_index(&self) -> usize {
        0
    }

    /// Assembles a route into a candidate sequence, collapsing overlaps.
    ///
    /// The first fragment is taken whole; each subsequent fragment
    /// contributes only the suffix past its overlap with the previous one.
    /// A zero shift carries no usable overlap, so the whole next fragment
    /// is appended. Candidate routes never contain zero-shift edges, and
    /// for them the assembled length equals `oligo_size` plus the sum of
    /// edge shifts.
    #[must_use]
    pub fn assemble(&self, route: &[usize]) -> String {
        let Some((&first, rest)) = route.split_first() else {
            return String::new();
        };
        let mut sequence = self.fragments[first].clone();
        let mut previous = first;
        for &next in rest {
            let shift = self.shift(previous, next);
            let fragment = &self.fragments[next];
            if shift == 0 {
                sequence.push_str(fragment);
            } else {
                sequence.push_str(&fragment[self.oligo_size - shift..]);
            }
            previous = next;
        }
        sequence
    }
}
