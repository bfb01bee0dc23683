use serde::{Deserialize, Serialize};

/// Default bonus per corroborating symptom beyond the first
pub const DEFAULT_CORROBORATION_BONUS: u8 = 5;

/// Default upper bound on an adjusted probability
pub const DEFAULT_PROBABILITY_CAP: u8 = 100;

/// Configurable knobs for probability adjustment
///
/// The defaults reproduce the calibration the consuming application was
/// observed with; alternate knowledge bases can tune them without touching
/// the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Added once per matched triggering symptom beyond the first
    pub corroboration_bonus: u8,

    /// Ceiling applied after the bonus
    pub probability_cap: u8,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            corroboration_bonus: DEFAULT_CORROBORATION_BONUS,
            probability_cap: DEFAULT_PROBABILITY_CAP,
        }
    }
}

/// Adjusted probability for a cause given how many of its triggering symptoms
/// are present.
///
/// More matching symptoms mean more confidence: the base probability gains
/// `bonus * (overlap - 1)`, capped. A cause whose trigger set is fully covered
/// by the input therefore ranks above one that is only partially covered.
/// `overlap` of zero means the cause is not implicated at all and yields the
/// plain base value; the engine never asks for it.
#[must_use]
pub fn adjusted_probability(base: u8, overlap: usize, config: &ScoringConfig) -> u8 {
    let corroborating = overlap.saturating_sub(1);
    // Bounded by catalog size, far below u32 range
    #[allow(clippy::cast_possible_truncation)]
    let bonus = u32::from(config.corroboration_bonus) * (corroborating as u32);
    let adjusted = u32::from(base) + bonus;
    let capped = adjusted.min(u32::from(config.probability_cap));
    // capped <= probability_cap <= u8::MAX
    #[allow(clippy::cast_possible_truncation)]
    {
        capped as u8
    }
}
