//! End-to-end estimates for concrete criteria against the built-in tables.

use reality_check::data::estimate::{estimate, FALLBACK_UNMARRIED_RATE};
use reality_check::data::model::{FilterSpec, Height, Race};
use reality_check::data::tables::DistributionTables;
use reality_check::format::{format_count, format_percentage};
use reality_check::verdict::{matching_cells, Verdict};

fn age_sum(tables: &DistributionTables, lo: u32, hi: u32) -> f64 {
    (lo..=hi).map(|a| tables.age_mass(a)).sum()
}

fn assert_close(got: f64, want: f64) {
    assert!(
        (got - want).abs() <= 1e-12 * want.abs().max(1e-12),
        "got {got}, want {want}"
    );
}

#[test]
fn scenario_a_age_only() {
    let tables = DistributionTables::default();
    let spec = FilterSpec {
        min_age: 25,
        max_age: 35,
        race: Race::Any,
        min_height: None,
        min_income: 0,
        exclude_married: false,
        exclude_obese: false,
    };

    let est = estimate(&tables, &spec);
    let mass = age_sum(&tables, 25, 35);

    assert_eq!(est.factors.age, mass);
    assert_eq!(est.factors.race, 1.0);
    assert_eq!(est.factors.height, 1.0);
    assert_eq!(est.factors.income, 1.0);
    assert_eq!(est.probability, mass);
    assert_eq!(
        est.count,
        (tables.total_population() as f64 * mass).round() as u64
    );
    assert_close(est.probability, 0.1465);
}

#[test]
fn scenario_b_every_filter() {
    let tables = DistributionTables::default();
    let spec = FilterSpec {
        min_age: 25,
        max_age: 35,
        race: Race::White,
        min_height: Some(Height::new(6, 0)),
        min_income: 80_000,
        exclude_married: true,
        exclude_obese: true,
    };

    let est = estimate(&tables, &spec);
    let unmarried: f64 = (25..=35)
        .map(|a| tables.marital_unmarried(a).unwrap())
        .sum::<f64>()
        / 11.0;
    let expected = age_sum(&tables, 25, 35) * 0.594 * 0.147 * 0.28 * unmarried * 0.57 * 0.71;

    assert_close(est.factors.marital.unwrap(), unmarried);
    assert_eq!(est.factors.obesity, Some(0.57));
    assert_eq!(est.factors.employment, Some(0.71));
    assert_close(est.probability, expected);
    assert_eq!(
        est.count,
        (tables.total_population() as f64 * est.probability).round() as u64
    );
    assert_eq!(Verdict::from_probability(est.probability), Verdict::UltraSelective);
}

#[test]
fn income_between_brackets_uses_lower_bracket() {
    let tables = DistributionTables::default();
    assert_eq!(tables.income_cumulative(85_000), 0.28);

    let spec = FilterSpec {
        min_income: 85_000,
        ..FilterSpec::default()
    };
    assert_eq!(estimate(&tables, &spec).factors.income, 0.28);
}

#[test]
fn inverted_range_matches_nobody() {
    let tables = DistributionTables::default();
    let spec = FilterSpec {
        min_age: 40,
        max_age: 30,
        race: Race::Asian,
        exclude_married: true,
        ..FilterSpec::default()
    };
    let est = estimate(&tables, &spec);
    assert_eq!(est.probability, 0.0);
    assert_eq!(est.count, 0);
    assert_eq!(est.factors.marital, Some(FALLBACK_UNMARRIED_RATE));
}

#[test]
fn unknown_race_key_does_not_filter() {
    let tables = DistributionTables::default();
    let race = Race::parse_lenient("klingon");
    assert_eq!(tables.race_fraction(&race), 1.0);

    let with_unknown = FilterSpec {
        race,
        ..FilterSpec::default()
    };
    assert_eq!(
        estimate(&tables, &with_unknown).probability,
        estimate(&tables, &FilterSpec::default()).probability
    );
}

#[test]
fn unknown_height_does_not_filter() {
    let tables = DistributionTables::default();
    let spec = FilterSpec {
        min_height: Some(Height::new(7, 3)),
        ..FilterSpec::default()
    };
    assert_eq!(estimate(&tables, &spec).factors.height, 1.0);
}

#[test]
fn rendered_outputs_for_default_form() {
    let tables = DistributionTables::default();
    let spec = FilterSpec {
        min_age: 25,
        max_age: 35,
        ..FilterSpec::default()
    };
    let est = estimate(&tables, &spec);

    assert_eq!(format_percentage(est.probability), "14.65");
    assert_eq!(format_count(est.count), "24,685,250");
    assert_eq!(matching_cells(est.probability), 15);
    assert_eq!(Verdict::from_probability(est.probability), Verdict::Reasonable);
}
