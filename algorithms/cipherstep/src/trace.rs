//! Step Trace
//!
//! Ordered record of every intermediate value an engine computes. A trace is
//! built while an engine runs and handed back as a unit; callers only read it.

use core::fmt;

// =============================================================================
// STAGES
// =============================================================================

/// Pipeline stage a trace entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Stage {
    /// RSA modulus, totient and exponent selection.
    KeyGeneration,
    /// RSA per-character encryption.
    Encryption,
    /// RSA per-character decryption.
    Decryption,
    /// S-DES key schedule (P10, shifts, P8).
    SubkeyGeneration,
    /// S-DES initial permutation and split.
    InitialPermutation,
    /// S-DES Feistel round (1 or 2).
    Round(u8),
    /// S-DES inverse initial permutation.
    FinalPermutation,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::KeyGeneration => f.write_str("KEY GENERATION"),
            Self::Encryption => f.write_str("ENCRYPTION"),
            Self::Decryption => f.write_str("DECRYPTION"),
            Self::SubkeyGeneration => f.write_str("SUBKEY GENERATION"),
            Self::InitialPermutation => f.write_str("INITIAL PERMUTATION"),
            Self::Round(n) => write!(f, "ROUND {n}"),
            Self::FinalPermutation => f.write_str("FINAL PERMUTATION"),
        }
    }
}

// =============================================================================
// ENTRIES
// =============================================================================

/// A named value that took part in a step.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Operand {
    /// Symbol as written in the textbook (`n`, `phi`, `K1`, `EP`...).
    pub name: String,
    /// Rendered value.
    pub value: String,
}

/// One computation step.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TraceEntry {
    /// Stage the step belongs to.
    pub stage: Stage,
    /// Human-readable rendering, e.g. `n = p * q = 3 * 11 = 33`.
    pub description: String,
    /// Values involved, in the order they appear in the description.
    pub operands: Vec<Operand>,
}

impl TraceEntry {
    /// Attach an operand to this entry.
    pub(crate) fn operand(&mut self, name: &str, value: impl fmt::Display) -> &mut Self {
        self.operands.push(Operand {
            name: name.to_owned(),
            value: value.to_string(),
        });
        self
    }

    /// Look up an operand value by name.
    pub fn value_of(&self, name: &str) -> Option<&str> {
        self.operands
            .iter()
            .find(|op| op.name == name)
            .map(|op| op.value.as_str())
    }
}

// =============================================================================
// TRACE
// =============================================================================

/// Append-only sequence of [`TraceEntry`] values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Trace {
    entries: Vec<TraceEntry>,
}

impl Trace {
    pub(crate) const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Record a step and return it so operands can be chained on.
    pub(crate) fn push(&mut self, stage: Stage, description: impl Into<String>) -> &mut TraceEntry {
        self.entries.push(TraceEntry {
            stage,
            description: description.into(),
            operands: Vec::new(),
        });
        let last = self.entries.len() - 1;
        &mut self.entries[last]
    }

    /// Move every entry of `other` to the end of this trace.
    pub(crate) fn extend(&mut self, other: Self) {
        self.entries.extend(other.entries);
    }

    /// All entries in the order they were recorded.
    pub fn entries(&self) -> &[TraceEntry] {
        &self.entries
    }

    /// Iterate over the entries.
    pub fn iter(&self) -> core::slice::Iter<'_, TraceEntry> {
        self.entries.iter()
    }

    /// Number of recorded steps.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries belonging to one stage.
    pub fn stage(&self, stage: Stage) -> impl Iterator<Item = &TraceEntry> {
        self.entries.iter().filter(move |e| e.stage == stage)
    }

    /// Rendered descriptions without stage headers.
    pub fn lines(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.description.as_str()).collect()
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a TraceEntry;
    type IntoIter = core::slice::Iter<'a, TraceEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Plain-text rendering: a `=== STAGE ===` header whenever the stage changes,
/// then one line per step.
impl fmt::Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut current = None;
        for entry in &self.entries {
            if current != Some(entry.stage) {
                if current.is_some() {
                    writeln!(f)?;
                }
                writeln!(f, "=== {} ===", entry.stage)?;
                current = Some(entry.stage);
            }
            writeln!(f, "{}", entry.description)?;
        }
        Ok(())
    }
}
