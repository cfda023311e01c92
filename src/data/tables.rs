use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::model::{Height, Race, MAX_AGE, MIN_AGE};

// ---------------------------------------------------------------------------
// Embedded reference data
// ---------------------------------------------------------------------------
//
// US Census Bureau (2024), CDC/NCHS and Bureau of Labor Statistics figures
// for the US male population aged 18+.

const TOTAL_MALE_POPULATION: u64 = 168_500_000;

/// Share of the population at each age.
const AGE_DISTRIBUTION: [(u32, f64); 53] = [
    (18, 0.0125), (19, 0.0125), (20, 0.0125), (21, 0.0125), (22, 0.0125),
    (23, 0.0125), (24, 0.0125), (25, 0.013), (26, 0.013), (27, 0.013),
    (28, 0.013), (29, 0.013), (30, 0.0135), (31, 0.0135), (32, 0.0135),
    (33, 0.0135), (34, 0.0135), (35, 0.014), (36, 0.014), (37, 0.014),
    (38, 0.014), (39, 0.014), (40, 0.0145), (41, 0.0145), (42, 0.0145),
    (43, 0.0145), (44, 0.0145), (45, 0.014), (46, 0.014), (47, 0.014),
    (48, 0.014), (49, 0.014), (50, 0.0135), (51, 0.0135), (52, 0.0135),
    (53, 0.0135), (54, 0.0135), (55, 0.013), (56, 0.013), (57, 0.013),
    (58, 0.013), (59, 0.013), (60, 0.0125), (61, 0.0125), (62, 0.0125),
    (63, 0.0125), (64, 0.0125), (65, 0.012), (66, 0.012), (67, 0.012),
    (68, 0.012), (69, 0.012), (70, 0.0115),
];

const RACE_DISTRIBUTION: [(Race, f64); 6] = [
    (Race::Any, 1.0),
    (Race::White, 0.594),
    (Race::Black, 0.134),
    (Race::Asian, 0.064),
    (Race::Hispanic, 0.193),
    (Race::Other, 0.015),
];

/// Share of men at or above each height (median 5'9").
const HEIGHT_DISTRIBUTION: [(Height, f64); 14] = [
    (Height::new(5, 0), 0.998),
    (Height::new(5, 2), 0.995),
    (Height::new(5, 4), 0.985),
    (Height::new(5, 6), 0.93),
    (Height::new(5, 8), 0.72),
    (Height::new(5, 9), 0.5),
    (Height::new(5, 10), 0.35),
    (Height::new(5, 11), 0.23),
    (Height::new(6, 0), 0.147),
    (Height::new(6, 1), 0.088),
    (Height::new(6, 2), 0.051),
    (Height::new(6, 3), 0.027),
    (Height::new(6, 4), 0.013),
    (Height::new(6, 5), 0.005),
];

/// Share of individual male earners at or above each annual income.
const INCOME_DISTRIBUTION: [(u64, f64); 18] = [
    (0, 1.0),
    (10_000, 0.88),
    (20_000, 0.79),
    (30_000, 0.69),
    (40_000, 0.59),
    (50_000, 0.49),
    (60_000, 0.41),
    (70_000, 0.34),
    (80_000, 0.28),
    (90_000, 0.23),
    (100_000, 0.19),
    (120_000, 0.13),
    (150_000, 0.085),
    (200_000, 0.045),
    (250_000, 0.025),
    (300_000, 0.015),
    (400_000, 0.008),
    (500_000, 0.004),
];

/// Share of men never married, by age.
const MARITAL_STATUS_BY_AGE: [(u32, f64); 53] = [
    (18, 0.995), (19, 0.99), (20, 0.98), (21, 0.97), (22, 0.95),
    (23, 0.93), (24, 0.9), (25, 0.87), (26, 0.83), (27, 0.79),
    (28, 0.74), (29, 0.69), (30, 0.64), (31, 0.59), (32, 0.54),
    (33, 0.49), (34, 0.45), (35, 0.41), (36, 0.38), (37, 0.35),
    (38, 0.33), (39, 0.31), (40, 0.3), (41, 0.29), (42, 0.28),
    (43, 0.28), (44, 0.28), (45, 0.28), (46, 0.29), (47, 0.29),
    (48, 0.3), (49, 0.3), (50, 0.31), (51, 0.31), (52, 0.32),
    (53, 0.32), (54, 0.33), (55, 0.33), (56, 0.34), (57, 0.34),
    (58, 0.35), (59, 0.35), (60, 0.36), (61, 0.37), (62, 0.38),
    (63, 0.39), (64, 0.4), (65, 0.41), (66, 0.42), (67, 0.43),
    (68, 0.44), (69, 0.45), (70, 0.46),
];

/// Share of men with BMI < 30.
const NON_OBESE_RATE: f64 = 0.57;

/// Employment-to-population ratio for men.
const EMPLOYMENT_RATE: f64 = 0.71;

// ---------------------------------------------------------------------------
// Validation errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, PartialEq)]
pub enum TableError {
    #[error("{table}[{key}] = {value} is not a probability in [0, 1]")]
    OutOfRange {
        table: &'static str,
        key: String,
        value: f64,
    },

    #[error("{table} has no entry for age {age}")]
    AgeGap { table: &'static str, age: u32 },

    #[error("{table} increases at {key}; cumulative tables must be non-increasing")]
    NotMonotonic { table: &'static str, key: String },

    #[error("total population must be positive")]
    EmptyPopulation,
}

// ---------------------------------------------------------------------------
// DistributionTables
// ---------------------------------------------------------------------------

/// All lookup distributions used by the estimate.
///
/// Built once (from the embedded data or a tables file) and only read
/// afterwards. Every accessor is total: keys missing from a table fall back
/// to a neutral value instead of failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionTables {
    pub total_population: u64,
    pub age: BTreeMap<u32, f64>,
    pub race: BTreeMap<Race, f64>,
    /// Cumulative: share at or above each height.
    pub height: BTreeMap<Height, f64>,
    /// Cumulative: share earning at or above each threshold.
    pub income: BTreeMap<u64, f64>,
    pub marital_unmarried: BTreeMap<u32, f64>,
    pub non_obese_rate: f64,
    pub employment_rate: f64,
}

impl Default for DistributionTables {
    fn default() -> Self {
        Self {
            total_population: TOTAL_MALE_POPULATION,
            age: AGE_DISTRIBUTION.into_iter().collect(),
            race: RACE_DISTRIBUTION.into_iter().collect(),
            height: HEIGHT_DISTRIBUTION.into_iter().collect(),
            income: INCOME_DISTRIBUTION.into_iter().collect(),
            marital_unmarried: MARITAL_STATUS_BY_AGE.into_iter().collect(),
            non_obese_rate: NON_OBESE_RATE,
            employment_rate: EMPLOYMENT_RATE,
        }
    }
}

impl DistributionTables {
    /// Probability mass at `age`; `0.0` outside the table.
    pub fn age_mass(&self, age: u32) -> f64 {
        self.age.get(&age).copied().unwrap_or(0.0)
    }

    /// Fraction of the population in `race`; `1.0` if the table lacks it.
    pub fn race_fraction(&self, race: &Race) -> f64 {
        self.race.get(race).copied().unwrap_or(1.0)
    }

    /// Share at or above `height`. `None` (no requirement) and heights
    /// missing from the table both yield `1.0`.
    pub fn height_cumulative(&self, height: Option<&Height>) -> f64 {
        height
            .and_then(|h| self.height.get(h))
            .copied()
            .unwrap_or(1.0)
    }

    /// Share earning at or above `threshold`, using the largest bracket
    /// not exceeding it. Below every bracket the answer is `1.0`; above the
    /// top bracket the top bracket's value is reused.
    pub fn income_cumulative(&self, threshold: u64) -> f64 {
        self.income
            .range(..=threshold)
            .next_back()
            .map(|(_, &p)| p)
            .unwrap_or(1.0)
    }

    /// Share never married at `age`, if the table covers it.
    pub fn marital_unmarried(&self, age: u32) -> Option<f64> {
        self.marital_unmarried.get(&age).copied()
    }

    pub fn non_obese_rate(&self) -> f64 {
        self.non_obese_rate
    }

    pub fn employment_rate(&self) -> f64 {
        self.employment_rate
    }

    pub fn total_population(&self) -> u64 {
        self.total_population
    }

    /// Check the structural invariants every table set must satisfy:
    /// probabilities in `[0, 1]`, full age coverage, non-increasing
    /// cumulative tables and a positive population.
    pub fn validate(&self) -> Result<(), TableError> {
        if self.total_population == 0 {
            return Err(TableError::EmptyPopulation);
        }

        check_probabilities("age", &self.age)?;
        check_probabilities("race", &self.race)?;
        check_probabilities("height", &self.height)?;
        check_probabilities("income", &self.income)?;
        check_probabilities("marital_unmarried", &self.marital_unmarried)?;
        check_probability("non_obese_rate", "-", self.non_obese_rate)?;
        check_probability("employment_rate", "-", self.employment_rate)?;

        check_age_coverage("age", &self.age)?;
        check_age_coverage("marital_unmarried", &self.marital_unmarried)?;

        check_non_increasing("height", &self.height)?;
        check_non_increasing("income", &self.income)?;

        Ok(())
    }
}

fn check_probability(table: &'static str, key: impl ToString, value: f64) -> Result<(), TableError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(TableError::OutOfRange {
            table,
            key: key.to_string(),
            value,
        })
    }
}

fn check_probabilities<K: ToString>(
    table: &'static str,
    map: &BTreeMap<K, f64>,
) -> Result<(), TableError> {
    map.iter()
        .try_for_each(|(key, &value)| check_probability(table, key.to_string(), value))
}

fn check_age_coverage(table: &'static str, map: &BTreeMap<u32, f64>) -> Result<(), TableError> {
    match (MIN_AGE..=MAX_AGE).find(|age| !map.contains_key(age)) {
        Some(age) => Err(TableError::AgeGap { table, age }),
        None => Ok(()),
    }
}

fn check_non_increasing<K: ToString>(
    table: &'static str,
    map: &BTreeMap<K, f64>,
) -> Result<(), TableError> {
    let values: Vec<(&K, f64)> = map.iter().map(|(k, &v)| (k, v)).collect();
    for pair in values.windows(2) {
        let (_, prev) = pair[0];
        let (key, next) = pair[1];
        if next > prev {
            return Err(TableError::NotMonotonic {
                table,
                key: key.to_string(),
            });
        }
    }
    Ok(())
}
