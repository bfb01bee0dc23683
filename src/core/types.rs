use serde::{Deserialize, Serialize};

/// Unique identifier for a symptom in the catalog.
///
/// Positive and stable across catalog revisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SymptomId(pub u32);

impl SymptomId {
    #[must_use]
    pub fn new(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for SymptomId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a cause in the catalog.
///
/// A stable slug (e.g. `low_octane_fuel`), never the display label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CauseId(pub String);

impl CauseId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }
}

impl std::fmt::Display for CauseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Coarse grouping for symptoms
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Engine,
    Transmission,
    Brakes,
    Electrical,
    Cooling,
    Suspension,
    Steering,
    Exhaust,
    Other(String),
}

impl Category {
    /// Synthesized problem label for a diagnosis dominated by this category
    #[must_use]
    pub fn problem_label(&self) -> String {
        format!("{self} problem")
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Engine => write!(f, "Engine"),
            Self::Transmission => write!(f, "Transmission"),
            Self::Brakes => write!(f, "Brakes"),
            Self::Electrical => write!(f, "Electrical"),
            Self::Cooling => write!(f, "Cooling system"),
            Self::Suspension => write!(f, "Suspension"),
            Self::Steering => write!(f, "Steering"),
            Self::Exhaust => write!(f, "Exhaust"),
            Self::Other(name) => write!(f, "{name}"),
        }
    }
}

/// Intrinsic severity of a reported symptom, independent of cause
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// Urgency of acting on a cause
///
/// Total order: `High > Medium > Low`. The maximum over all causes in a
/// diagnosis becomes the overall urgency of the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    Medium,
    High,
}

impl Urgency {
    /// Numeric rank used for tie-breaks when ranking causes
    #[must_use]
    pub fn rank(self) -> u8 {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
        }
    }
}

impl std::fmt::Display for Urgency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}
