use std::fmt;
use std::str::FromStr;

use crate::types::FormicError;

/// Maximum number of times a fragment may appear in one route.
///
/// Spectra derived from real hybridization chips cannot distinguish high
/// repeat counts reliably, so counts above a small threshold are recorded
/// as unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsageLimit {
    /// The fragment may be used at most this many times (always positive).
    Bounded(u32),
    /// No limit on fragment reuse.
    Unbounded,
}

impl UsageLimit {
    /// Whether a fragment that has been used `used` times has exhausted
    /// its budget.
    #[must_use]
    pub const fn is_reached(self, used: u32) -> bool {
        match self {
            Self::Bounded(max) => used >= max,
            Self::Unbounded => false,
        }
    }

    /// Merges the budgets of two spectrum entries for the same fragment
    /// string. Anything combined with an unbounded budget is unbounded.
    #[must_use]
    pub const fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Self::Bounded(a), Self::Bounded(b)) => Self::Bounded(a + b),
            _ => Self::Unbounded,
        }
    }
}

impl fmt::Display for UsageLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bounded(count) => write!(f, "{}", count),
            Self::Unbounded => write!(f, "inf"),
        }
    }
}

impl FromStr for UsageLimit {
    type Err = FormicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "inf" {
            return Ok(Self::Unbounded);
        }
        let count: u32 = s
            .parse()
            .map_err(|_| FormicError::ParseError(format!("invalid repeat count: {:?}", s)))?;
        if count == 0 {
            return Err(FormicError::ParseError(
                "repeat count must be positive".to_string(),
            ));
        }
        Ok(Self::Bounded(count))
    }
}

/// A parsed reconstruction problem.
///
/// Holds the original sequence and the observed fragment spectrum. The
/// original sequence is consulted by the search only for its length (the
/// reconstruction target) and for final edit-distance scoring; the
/// search never inspects its content.
#[derive(Debug, Clone)]
pub struct Instance {
    /// Ground-truth sequence, used for the length bound and for scoring.
    pub original_sequence: String,
    /// Observed spectrum: fragment strings with their repeat budgets,
    /// in spectrum order. The first entry is the known starting fragment.
    pub oligos: Vec<(String, UsageLimit)>,
}

impl Instance {
    pub fn new(original_sequence: impl Into<String>, oligos: Vec<(String, UsageLimit)>) -> Self {
        Self {
            original_sequence: original_sequence.into(),
            oligos,
        }
    }

    /// Length of one fragment. Only meaningful on a validated instance.
    #[must_use]
    pub fn oligo_size(&self) -> usize {
        self.oligos.first().map_or(0, |(oligo, _)| oligo.len())
    }

    /// Checks the structural preconditions of the search.
    ///
    /// The search assumes a length-homogeneous, non-empty spectrum whose
    /// fragments fit inside the reconstruction target, and fails fast here
    /// rather than building a degenerate overlap graph.
    ///
    /// # Errors
    ///
    /// Returns [`FormicError::InvalidInstance`] if the spectrum is empty,
    /// a fragment is empty, or the target sequence is shorter than one
    /// fragment; [`FormicError::FragmentLengthMismatch`] if fragment
    /// lengths differ.
    pub fn validate(&self) -> Result<(), FormicError> {
        let Some((first, _)) = self.oligos.first() else {
            return Err(FormicError::InvalidInstance(
                "spectrum contains no fragments".to_string(),
            ));
        };
        let oligo_size = first.len();
        if oligo_size == 0 {
            return Err(FormicError::InvalidInstance(
                "fragments must be non-empty".to_string(),
            ));
        }
        for (oligo, _) in &self.oligos {
            if oligo.len() != oligo_size {
                return Err(FormicError::FragmentLengthMismatch(oligo_size, oligo.len()));
            }
        }
        if self.original_sequence.len() < oligo_size {
            return Err(FormicError::InvalidInstance(format!(
                "target length {} is shorter than one fragment ({})",
                self.original_sequence.len(),
                oligo_size
            )));
        }
        Ok(())
    }
}
