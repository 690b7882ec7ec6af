use serde_json::Value;

use super::text_form::{parse_number, text_form};

/// Score used when the caller leaves intensity unset
pub const DEFAULT_INTENSITY: f64 = 5.0;

/// Upper bound (inclusive) of the low tier
const LOW_TIER_MAX: f64 = 3.0;
/// Upper bound (inclusive) of the moderate tier
const MODERATE_TIER_MAX: f64 = 7.0;

/// Intensity of the reported emotion
///
/// Nominally 1..=10 but never validated. Values that cannot be compared as
/// numbers are kept as `Unscorable` rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intensity {
    Score(f64),
    Unscorable,
}

impl Intensity {
    pub fn score(value: f64) -> Self {
        Intensity::Score(value)
    }

    /// Read the untyped `intensity` request field
    ///
    /// Unset values (absent, `null`, `false`, `0`, `""`) take the default and
    /// `true` scores 1. Numbers are scores as-is; strings, arrays and objects
    /// score by the number their text form spells, or are unscorable.
    pub fn from_value(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) | Some(Value::Bool(false)) => Self::default(),
            Some(Value::Bool(true)) => Intensity::Score(1.0),
            Some(Value::Number(n)) => match n.as_f64() {
                Some(v) if v == 0.0 => Self::default(),
                Some(v) => Intensity::Score(v),
                None => Intensity::Unscorable,
            },
            Some(Value::String(s)) if s.is_empty() => Self::default(),
            Some(other) => Self::parse_text(&text_form(other)),
        }
    }

    fn parse_text(text: &str) -> Self {
        parse_number(text)
            .map(Intensity::Score)
            .unwrap_or(Intensity::Unscorable)
    }

    /// Bucket the score
    ///
    /// Anything that fails both comparisons (unscorable, NaN) lands in `High`.
    pub fn tier(&self) -> IntensityTier {
        match *self {
            Intensity::Score(v) if v <= LOW_TIER_MAX => IntensityTier::Low,
            Intensity::Score(v) if v <= MODERATE_TIER_MAX => IntensityTier::Moderate,
            _ => IntensityTier::High,
        }
    }
}

impl Default for Intensity {
    fn default() -> Self {
        Intensity::Score(DEFAULT_INTENSITY)
    }
}

/// Intensity tier, selecting one of the three recommendations per category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntensityTier {
    Low,
    Moderate,
    High,
}

impl IntensityTier {
    pub fn all() -> &'static [IntensityTier] {
        &[IntensityTier::Low, IntensityTier::Moderate, IntensityTier::High]
    }

    /// Position in a category's recommendation list
    pub fn index(&self) -> usize {
        match self {
            IntensityTier::Low => 0,
            IntensityTier::Moderate => 1,
            IntensityTier::High => 2,
        }
    }
}
