use std::fmt;

/// Why the colony stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// An ant assembled the original sequence exactly (edit distance 0).
    PerfectMatch,
    /// The iteration budget ran out without a perfect reconstruction.
    IterationBudget,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PerfectMatch => write!(f, "perfect match"),
            Self::IterationBudget => write!(f, "iteration budget exhausted"),
        }
    }
}

/// Result of one colony run.
///
/// Contains the best candidate found across all iterations together with
/// its score and the route that produced it.
///
/// # Examples
///
/// ```rust
/// use formic_core::{Colony, ColonyConfig, Instance, UsageLimit};
///
/// let original = "ATGCTC";
/// let oligos = vec![
///     ("ATGC".to_string(), UsageLimit::Bounded(1)),
///     ("GCTC".to_string(), UsageLimit::Bounded(1)),
/// ];
/// let config = ColonyConfig { seed: Some(1), quiet: true, ..Default::default() };
/// let mut colony = Colony::new(&Instance::new(original, oligos), config)?;
/// let results = colony.run();
///
/// println!("{} (distance {}, stopped by {})",
///          results.sequence, results.score, results.stop_reason);
/// # Ok::<(), formic_core::FormicError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ColonyResults {
    /// Best assembled candidate sequence found during the run.
    pub sequence: String,

    /// Edit distance of that candidate to the original sequence.
    ///
    /// 0 means a perfect reconstruction.
    pub score: usize,

    /// Fragments of the best route, in walk order.
    pub route: Vec<String>,

    /// Terminal state of the run.
    pub stop_reason: StopReason,

    /// Number of iterations actually executed.
    ///
    /// Equals the configured budget unless a perfect match stopped the
    /// run early.
    pub iterations_run: usize,
}
