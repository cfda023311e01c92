use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Errors for strict parsing of criteria keys
// ---------------------------------------------------------------------------

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("unknown race key: {0:?}")]
    UnknownRace(String),

    #[error("invalid height {0:?}, expected feet'inches\" such as 6'0\"")]
    InvalidHeight(String),
}

// ---------------------------------------------------------------------------
// Race – closed enumeration of race / ethnicity categories
// ---------------------------------------------------------------------------

/// Race / ethnicity category as used by the race table.
/// `Any` is the neutral "no filter" category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Race {
    #[default]
    Any,
    White,
    Black,
    Asian,
    Hispanic,
    Other,
}

impl Race {
    /// All categories in display order.
    pub const ALL: [Race; 6] = [
        Race::Any,
        Race::White,
        Race::Black,
        Race::Asian,
        Race::Hispanic,
        Race::Other,
    ];

    /// Table key, identical to the serialized form.
    pub fn key(self) -> &'static str {
        match self {
            Race::Any => "any",
            Race::White => "white",
            Race::Black => "black",
            Race::Asian => "asian",
            Race::Hispanic => "hispanic",
            Race::Other => "other",
        }
    }

    /// Human-readable label for pickers.
    pub fn label(self) -> &'static str {
        match self {
            Race::Any => "Any Race",
            Race::White => "White",
            Race::Black => "Black",
            Race::Asian => "Asian",
            Race::Hispanic => "Hispanic",
            Race::Other => "Other",
        }
    }

    /// Parse a key, treating anything unrecognised as [`Race::Any`]
    /// so that an unknown race never filters the population.
    pub fn parse_lenient(key: &str) -> Race {
        key.parse().unwrap_or_else(|err| {
            log::warn!("{err}; applying no race filter");
            Race::Any
        })
    }
}

impl FromStr for Race {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Race::ALL
            .into_iter()
            .find(|race| race.key() == key)
            .ok_or_else(|| ModelError::UnknownRace(s.to_string()))
    }
}

impl fmt::Display for Race {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

// ---------------------------------------------------------------------------
// Height – a stature threshold in whole inches
// ---------------------------------------------------------------------------

/// A height threshold, stored as total inches so ordering follows stature.
/// Displays and parses in the `6'0"` notation used by the height table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Height(u16);

impl Height {
    pub const fn new(feet: u16, inches: u16) -> Self {
        Height(feet * 12 + inches)
    }

    pub fn total_inches(self) -> u16 {
        self.0
    }

    pub fn feet(self) -> u16 {
        self.0 / 12
    }

    pub fn inches(self) -> u16 {
        self.0 % 12
    }
}

impl fmt::Display for Height {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}'{}\"", self.feet(), self.inches())
    }
}

impl FromStr for Height {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ModelError::InvalidHeight(s.to_string());
        let (feet, inches) = s.trim().split_once('\'').ok_or_else(invalid)?;
        let feet: u16 = feet.trim().parse().map_err(|_| invalid())?;
        let inches = inches.trim().trim_end_matches('"').trim();
        let inches: u16 = if inches.is_empty() {
            0
        } else {
            inches.parse().map_err(|_| invalid())?
        };
        if inches >= 12 {
            return Err(invalid());
        }
        feet.checked_mul(12)
            .and_then(|total| total.checked_add(inches))
            .map(Height)
            .ok_or_else(invalid)
    }
}

impl TryFrom<String> for Height {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Height> for String {
    fn from(height: Height) -> Self {
        height.to_string()
    }
}

// ---------------------------------------------------------------------------
// FilterSpec – the criteria for one evaluation
// ---------------------------------------------------------------------------

/// Criteria combined (by conjunction) into one estimate.
///
/// Ages are expected in `[18, 70]` with `min_age <= max_age`, but nothing
/// here enforces it: an inverted range simply matches nobody.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterSpec {
    pub min_age: u32,
    pub max_age: u32,
    /// Unknown keys deserialize as [`Race::Any`].
    #[serde(deserialize_with = "deserialize_race_lenient")]
    pub race: Race,
    /// `None` means no height requirement.
    pub min_height: Option<Height>,
    /// Minimum annual income in dollars; `0` means no requirement.
    pub min_income: u64,
    pub exclude_married: bool,
    pub exclude_obese: bool,
}

fn deserialize_race_lenient<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Race, D::Error> {
    let key = String::deserialize(deserializer)?;
    Ok(Race::parse_lenient(&key))
}

/// Youngest age covered by the age-indexed tables.
pub const MIN_AGE: u32 = 18;
/// Oldest age covered by the age-indexed tables.
pub const MAX_AGE: u32 = 70;

impl Default for FilterSpec {
    fn default() -> Self {
        Self {
            min_age: MIN_AGE,
            max_age: MAX_AGE,
            race: Race::Any,
            min_height: None,
            min_income: 0,
            exclude_married: false,
            exclude_obese: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Estimate – the engine's output
// ---------------------------------------------------------------------------

/// Per-dimension factors of one estimate. Optional factors are `None`
/// when the corresponding filter was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Factors {
    pub age: f64,
    pub race: f64,
    pub height: f64,
    pub income: f64,
    pub marital: Option<f64>,
    pub obesity: Option<f64>,
    pub employment: Option<f64>,
}

impl Factors {
    /// Product of all applied factors, in evaluation order.
    pub fn product(&self) -> f64 {
        [self.marital, self.obesity, self.employment]
            .into_iter()
            .flatten()
            .fold(self.age * self.race * self.height * self.income, |p, f| p * f)
    }

    /// `(label, value)` pairs of the applied factors, for display.
    pub fn applied(&self) -> Vec<(&'static str, f64)> {
        let mut out = vec![
            ("Age range", self.age),
            ("Race", self.race),
            ("Height", self.height),
            ("Income", self.income),
        ];
        if let Some(m) = self.marital {
            out.push(("Unmarried", m));
        }
        if let Some(o) = self.obesity {
            out.push(("Not obese", o));
        }
        if let Some(e) = self.employment {
            out.push(("Employed", e));
        }
        out
    }
}

/// Result of evaluating a [`FilterSpec`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Estimate {
    /// Fraction of the reference population matching every filter.
    pub probability: f64,
    /// `probability` scaled to the reference population, rounded.
    pub count: u64,
    pub factors: Factors,
}
