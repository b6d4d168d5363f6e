use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Difficulty level of a term. Closed enumeration: an unknown value in the
/// catalog definition is a load-time failure, never a silent bucket miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// All levels in display order.
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }

    /// Strict parse of a request parameter; no fuzzy matching.
    pub fn parse(raw: &str) -> Option<Difficulty> {
        match raw {
            "beginner" => Some(Difficulty::Beginner),
            "intermediate" => Some(Difficulty::Intermediate),
            "advanced" => Some(Difficulty::Advanced),
            _ => None,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single glossary entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Term {
    /// Unique across the whole catalog (validated at load).
    pub id: String,

    /// Canonical English identifier of the concept.
    pub name: String,

    /// Japanese display label.
    pub localized_label: String,

    pub description: String,

    pub difficulty: Difficulty,

    /// Free-text labels used for search and relatedness. Duplicates collapse.
    pub tags: BTreeSet<String>,

    /// Source code sample; opaque to the engine.
    pub example: String,

    pub use_cases: Vec<String>,

    /// Hint list of names that may match other terms. Not a foreign key:
    /// entries are matched by substring against candidate names, and entries
    /// that match nothing are fine.
    pub related_term_names: Vec<String>,
}

/// A named, ordered grouping of terms. Insertion order is display order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub terms: Vec<Term>,
}
