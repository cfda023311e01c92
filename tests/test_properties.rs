//! Property-based tests for the probability engine.

use proptest::prelude::*;

use reality_check::data::estimate::estimate;
use reality_check::data::model::{FilterSpec, Height, Race, MAX_AGE, MIN_AGE};
use reality_check::data::tables::DistributionTables;

const EPS: f64 = 1e-12;

/// Strategy: a height requirement that is either absent or a table bracket.
fn height_strategy() -> impl Strategy<Value = Option<Height>> {
    let keys: Vec<Option<Height>> = std::iter::once(None)
        .chain(DistributionTables::default().height.into_keys().map(Some))
        .collect();
    prop::sample::select(keys)
}

/// Strategy: any filter spec within the supported domain.
fn spec_strategy() -> impl Strategy<Value = FilterSpec> {
    (
        MIN_AGE..=MAX_AGE,
        MIN_AGE..=MAX_AGE,
        prop::sample::select(Race::ALL.to_vec()),
        height_strategy(),
        0u64..=600_000,
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(
            |(min_age, max_age, race, min_height, min_income, exclude_married, exclude_obese)| {
                FilterSpec {
                    min_age,
                    max_age,
                    race,
                    min_height,
                    min_income,
                    exclude_married,
                    exclude_obese,
                }
            },
        )
}

fn p(spec: &FilterSpec) -> f64 {
    estimate(&DistributionTables::default(), spec).probability
}

proptest! {
    // 1. Probability is never negative and every factor is a probability
    #[test]
    fn probability_non_negative(spec in spec_strategy()) {
        let est = estimate(&DistributionTables::default(), &spec);
        prop_assert!(est.probability >= 0.0);
        for (label, f) in est.factors.applied() {
            prop_assert!((0.0..=1.0).contains(&f), "{label}={f}");
        }
    }

    // 2. count is the rounded scaled probability
    #[test]
    fn count_matches_probability(spec in spec_strategy()) {
        let tables = DistributionTables::default();
        let est = estimate(&tables, &spec);
        let expected = (tables.total_population() as f64 * est.probability).round() as u64;
        prop_assert_eq!(est.count, expected);
    }

    // 3. Estimation is deterministic
    #[test]
    fn estimate_deterministic(spec in spec_strategy()) {
        let tables = DistributionTables::default();
        prop_assert_eq!(estimate(&tables, &spec), estimate(&tables, &spec));
    }

    // 4. Narrowing the age range never increases the probability
    #[test]
    fn narrowing_age_is_monotone(spec in spec_strategy(), a in 0u32..=52, b in 0u32..=52) {
        let lo = spec.min_age.min(spec.max_age);
        let hi = spec.min_age.max(spec.max_age);
        let wide = FilterSpec { min_age: lo, max_age: hi, ..spec.clone() };
        let span = hi - lo;
        let lo2 = lo + a % (span + 1);
        let hi2 = lo2 + b % (hi - lo2 + 1);
        let narrow = FilterSpec { min_age: lo2, max_age: hi2, ..spec };
        prop_assert!(p(&narrow) <= p(&wide) + EPS, "{narrow:?} vs {wide:?}");
    }

    // 5. Raising the height requirement never increases the probability
    #[test]
    fn raising_height_is_monotone(spec in spec_strategy(), other in height_strategy()) {
        let (low, high) = if spec.min_height <= other {
            (spec.min_height, other)
        } else {
            (other, spec.min_height)
        };
        let a = FilterSpec { min_height: low, ..spec.clone() };
        let b = FilterSpec { min_height: high, ..spec };
        prop_assert!(p(&b) <= p(&a) + EPS);
    }

    // 6. Raising the income requirement never increases the probability
    #[test]
    fn raising_income_is_monotone(spec in spec_strategy(), extra in 0u64..=600_000) {
        let raised = FilterSpec { min_income: spec.min_income + extra, ..spec.clone() };
        prop_assert!(p(&raised) <= p(&spec) + EPS);
    }

    // 7. Turning on an exclusion never increases the probability
    #[test]
    fn exclusions_are_monotone(spec in spec_strategy()) {
        let off = FilterSpec { exclude_married: false, exclude_obese: false, ..spec.clone() };
        let married = FilterSpec { exclude_married: true, ..off.clone() };
        let obese = FilterSpec { exclude_obese: true, ..off.clone() };
        prop_assert!(p(&married) <= p(&off) + EPS);
        prop_assert!(p(&obese) <= p(&off) + EPS);
    }

    // 8. Picking a specific race never beats "any"
    #[test]
    fn specific_race_is_monotone(spec in spec_strategy()) {
        let any = FilterSpec { race: Race::Any, ..spec.clone() };
        prop_assert!(p(&spec) <= p(&any) + EPS);
    }

    // 9. A single-age range contributes exactly that age's mass
    #[test]
    fn single_age_factor_is_mass(age in MIN_AGE..=MAX_AGE) {
        let tables = DistributionTables::default();
        let spec = FilterSpec { min_age: age, max_age: age, ..FilterSpec::default() };
        prop_assert_eq!(estimate(&tables, &spec).factors.age, tables.age_mass(age));
    }

    // 10. Income floor lookup between adjacent brackets returns the lower one
    #[test]
    fn income_floor_between_brackets(idx in 0usize..17, frac in 0.0f64..1.0) {
        let tables = DistributionTables::default();
        let keys: Vec<(u64, f64)> = tables.income.iter().map(|(&k, &v)| (k, v)).collect();
        let (lo, p_lo) = keys[idx];
        let (hi, _) = keys[idx + 1];
        let t = lo + ((hi - lo - 1) as f64 * frac) as u64;
        prop_assert_eq!(tables.income_cumulative(t), p_lo);
    }
}
