//! Difficulty ladder
//!
//! CEFR proficiency bands used by hosts to pick a question pool. A directive
//! moves the learner one band at a time.

use serde::{Deserialize, Serialize};

use super::DifficultyDirective;

/// CEFR proficiency band
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum DifficultyLevel {
    #[default]
    A1,
    A2,
    B1,
    B2,
    C1,
    C2,
}

impl DifficultyLevel {
    const LADDER: [DifficultyLevel; 6] = [
        DifficultyLevel::A1,
        DifficultyLevel::A2,
        DifficultyLevel::B1,
        DifficultyLevel::B2,
        DifficultyLevel::C1,
        DifficultyLevel::C2,
    ];

    fn rank(self) -> usize {
        self as usize
    }

    /// Step one band in the directive's direction, saturating at A1 and C2
    pub fn apply(self, directive: DifficultyDirective) -> Self {
        let rank = self.rank();
        let next = match directive {
            DifficultyDirective::Decrease => rank.saturating_sub(1),
            DifficultyDirective::Maintain => rank,
            DifficultyDirective::Increase => (rank + 1).min(Self::LADDER.len() - 1),
        };
        Self::LADDER[next]
    }

    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            DifficultyLevel::A1 => "A1",
            DifficultyLevel::A2 => "A2",
            DifficultyLevel::B1 => "B1",
            DifficultyLevel::B2 => "B2",
            DifficultyLevel::C1 => "C1",
            DifficultyLevel::C2 => "C2",
        }
    }

    /// Parse from string name
    pub fn parse_name(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "A1" => Some(DifficultyLevel::A1),
            "A2" => Some(DifficultyLevel::A2),
            "B1" => Some(DifficultyLevel::B1),
            "B2" => Some(DifficultyLevel::B2),
            "C1" => Some(DifficultyLevel::C1),
            "C2" => Some(DifficultyLevel::C2),
            _ => None,
        }
    }
}

impl std::fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
