use super::model::{Estimate, Factors, FilterSpec};
use super::tables::DistributionTables;

/// Unmarried share assumed when no age in the range has marital data.
pub const FALLBACK_UNMARRIED_RATE: f64 = 0.30;

// ---------------------------------------------------------------------------
// Probability engine
// ---------------------------------------------------------------------------

/// Estimate the share of the population matching every filter in `spec`.
///
/// Each dimension contributes one factor and the factors are multiplied,
/// i.e. all dimensions are treated as statistically independent:
///
/// * age      – sum of the age mass over `min_age..=max_age`
/// * race     – fraction of the population in `spec.race`
/// * height   – cumulative share at or above `spec.min_height`
/// * income   – cumulative share at or above `spec.min_income` (floor lookup)
/// * marital  – mean unmarried share over the range, if `exclude_married`
/// * obesity  – non-obese rate, if `exclude_obese`
/// * employment – employment rate, whenever an income is required
///
/// Never fails. The product is not clamped.
pub fn estimate(tables: &DistributionTables, spec: &FilterSpec) -> Estimate {
    let factors = Factors {
        age: age_range_mass(tables, spec.min_age, spec.max_age),
        race: tables.race_fraction(&spec.race),
        height: tables.height_cumulative(spec.min_height.as_ref()),
        income: tables.income_cumulative(spec.min_income),
        marital: spec
            .exclude_married
            .then(|| average_unmarried(tables, spec.min_age, spec.max_age)),
        obesity: spec.exclude_obese.then(|| tables.non_obese_rate()),
        employment: (spec.min_income > 0).then(|| tables.employment_rate()),
    };

    let probability = factors.product();
    let count = estimated_count(tables, probability);

    log::trace!("estimate {spec:?} -> p={probability:.6} count={count} ({factors:?})");

    Estimate {
        probability,
        count,
        factors,
    }
}

/// `probability` scaled to the reference population and rounded.
pub fn estimated_count(tables: &DistributionTables, probability: f64) -> u64 {
    // max(0.0) only keeps the cast defined; probability itself is not clamped
    (tables.total_population() as f64 * probability).round().max(0.0) as u64
}

/// Sum of the age mass over the inclusive range; an inverted range is empty.
fn age_range_mass(tables: &DistributionTables, min_age: u32, max_age: u32) -> f64 {
    (min_age..=max_age).map(|age| tables.age_mass(age)).sum()
}

/// Mean unmarried share over the ages in range that have data.
fn average_unmarried(tables: &DistributionTables, min_age: u32, max_age: u32) -> f64 {
    let (total, n) = (min_age..=max_age)
        .filter_map(|age| tables.marital_unmarried(age))
        .fold((0.0, 0u32), |(sum, n), p| (sum + p, n + 1));

    if n > 0 {
        total / f64::from(n)
    } else {
        FALLBACK_UNMARRIED_RATE
    }
}
