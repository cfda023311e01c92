use reality_check::data::estimate::estimate;
use reality_check::data::model::{Estimate, FilterSpec, Height, Race, MAX_AGE, MIN_AGE};
use reality_check::data::tables::DistributionTables;

// ---------------------------------------------------------------------------
// Slider ladders
// ---------------------------------------------------------------------------

/// A selectable minimum-height step: label and table key (`None` = any).
pub struct HeightOption {
    pub label: &'static str,
    pub height: Option<Height>,
}

pub const HEIGHT_OPTIONS: [HeightOption; 11] = [
    HeightOption { label: "Any", height: None },
    HeightOption { label: "5'6\"", height: Some(Height::new(5, 6)) },
    HeightOption { label: "5'8\"", height: Some(Height::new(5, 8)) },
    HeightOption { label: "5'9\"", height: Some(Height::new(5, 9)) },
    HeightOption { label: "5'10\"", height: Some(Height::new(5, 10)) },
    HeightOption { label: "5'11\"", height: Some(Height::new(5, 11)) },
    HeightOption { label: "6'0\"", height: Some(Height::new(6, 0)) },
    HeightOption { label: "6'1\"", height: Some(Height::new(6, 1)) },
    HeightOption { label: "6'2\"", height: Some(Height::new(6, 2)) },
    HeightOption { label: "6'3\"", height: Some(Height::new(6, 3)) },
    HeightOption { label: "6'4\"", height: Some(Height::new(6, 4)) },
];

/// A selectable minimum-income step in dollars.
pub struct IncomeOption {
    pub label: &'static str,
    pub income: u64,
}

pub const INCOME_OPTIONS: [IncomeOption; 13] = [
    IncomeOption { label: "Any", income: 0 },
    IncomeOption { label: "$40k", income: 40_000 },
    IncomeOption { label: "$50k", income: 50_000 },
    IncomeOption { label: "$60k", income: 60_000 },
    IncomeOption { label: "$70k", income: 70_000 },
    IncomeOption { label: "$80k", income: 80_000 },
    IncomeOption { label: "$90k", income: 90_000 },
    IncomeOption { label: "$100k", income: 100_000 },
    IncomeOption { label: "$120k", income: 120_000 },
    IncomeOption { label: "$150k", income: 150_000 },
    IncomeOption { label: "$200k", income: 200_000 },
    IncomeOption { label: "$250k", income: 250_000 },
    IncomeOption { label: "$300k+", income: 300_000 },
];

const DEFAULT_HEIGHT_INDEX: usize = 6;
const DEFAULT_INCOME_INDEX: usize = 5;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Tables every estimate is computed against.
    pub tables: DistributionTables,

    /// Age bounds as edited in the form (clamped to the table domain).
    pub min_age: u32,
    pub max_age: u32,

    pub race: Race,

    /// Position on the [`HEIGHT_OPTIONS`] ladder.
    pub height_index: usize,

    /// Position on the [`INCOME_OPTIONS`] ladder.
    pub income_index: usize,

    pub exclude_married: bool,
    pub exclude_obese: bool,

    /// Result for `evaluated`.
    pub result: Estimate,

    /// Spec the current `result` was computed from.
    evaluated: FilterSpec,

    /// Set when `tables` is replaced so the next frame recomputes.
    tables_dirty: bool,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DistributionTables::default())
    }
}

impl AppState {
    /// Start with the default criteria, evaluated against `tables`.
    pub fn new(tables: DistributionTables) -> Self {
        let mut state = Self {
            result: estimate(&tables, &FilterSpec::default()),
            evaluated: FilterSpec::default(),
            tables,
            min_age: 25,
            max_age: 35,
            race: Race::Any,
            height_index: DEFAULT_HEIGHT_INDEX,
            income_index: DEFAULT_INCOME_INDEX,
            exclude_married: true,
            exclude_obese: true,
            tables_dirty: true,
            status_message: None,
        };
        state.recompute_if_changed();
        state
    }

    /// The criteria currently selected in the form.
    pub fn filter_spec(&self) -> FilterSpec {
        FilterSpec {
            min_age: self.min_age,
            max_age: self.max_age,
            race: self.race,
            min_height: HEIGHT_OPTIONS[self.height_index].height,
            min_income: INCOME_OPTIONS[self.income_index].income,
            exclude_married: self.exclude_married,
            exclude_obese: self.exclude_obese,
        }
    }

    /// Keep the form inside the supported domain. Inverted age ranges are
    /// left alone; they just produce an empty result.
    pub fn clamp_inputs(&mut self) {
        self.min_age = self.min_age.clamp(MIN_AGE, MAX_AGE);
        self.max_age = self.max_age.clamp(MIN_AGE, MAX_AGE);
        self.height_index = self.height_index.min(HEIGHT_OPTIONS.len() - 1);
        self.income_index = self.income_index.min(INCOME_OPTIONS.len() - 1);
    }

    /// Re-run the estimate if the criteria or tables changed since the last
    /// evaluation. Returns whether a new result was computed.
    pub fn recompute_if_changed(&mut self) -> bool {
        self.clamp_inputs();
        let spec = self.filter_spec();
        if !self.tables_dirty && spec == self.evaluated {
            return false;
        }
        self.result = estimate(&self.tables, &spec);
        self.evaluated = spec;
        self.tables_dirty = false;
        true
    }

    /// Swap in a new set of tables (already validated by the loader).
    pub fn set_tables(&mut self, tables: DistributionTables) {
        self.tables = tables;
        self.tables_dirty = true;
        self.status_message = None;
        self.recompute_if_changed();
    }

    /// Return to the built-in tables.
    pub fn restore_builtin_tables(&mut self) {
        log::info!("Restoring built-in distribution tables");
        self.set_tables(DistributionTables::default());
    }

    /// Return the form to its initial criteria.
    pub fn reset_criteria(&mut self) {
        let tables = std::mem::take(&mut self.tables);
        *self = Self::new(tables);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_criteria_match_ladder_defaults() {
        let state = AppState::default();
        let spec = state.filter_spec();
        assert_eq!(spec.min_height, Some(Height::new(6, 0)));
        assert_eq!(spec.min_income, 80_000);
        assert!(spec.exclude_married && spec.exclude_obese);
        assert_eq!(state.result, estimate(&state.tables, &spec));
    }

    #[test]
    fn ladders_start_with_no_filter() {
        assert_eq!(HEIGHT_OPTIONS[0].height, None);
        assert_eq!(INCOME_OPTIONS[0].income, 0);
        for opt in &HEIGHT_OPTIONS[1..] {
            let h = opt.height.unwrap();
            assert_eq!(h.to_string(), opt.label);
        }
    }

    #[test]
    fn recompute_only_on_change() {
        let mut state = AppState::default();
        assert!(!state.recompute_if_changed());
        state.race = Race::Asian;
        assert!(state.recompute_if_changed());
        assert!(!state.recompute_if_changed());
    }

    #[test]
    fn replacing_tables_recomputes() {
        let mut state = AppState::default();
        let before = state.result.probability;
        let mut tables = DistributionTables::default();
        tables.non_obese_rate = 0.5;
        state.set_tables(tables);
        assert!(state.result.probability < before);
    }

    #[test]
    fn ages_are_clamped_to_domain() {
        let mut state = AppState::default();
        state.min_age = 5;
        state.max_age = 99;
        state.recompute_if_changed();
        assert_eq!((state.min_age, state.max_age), (MIN_AGE, MAX_AGE));
    }

    #[test]
    fn reset_keeps_loaded_tables() {
        let mut state = AppState::default();
        let mut tables = DistributionTables::default();
        tables.employment_rate = 0.5;
        state.set_tables(tables.clone());
        state.race = Race::Black;
        state.reset_criteria();
        assert_eq!(state.race, Race::Any);
        assert_eq!(state.tables, tables);
    }
}
