use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use reality_check::data::model::{Race, MAX_AGE, MIN_AGE};

use crate::state::{AppState, HEIGHT_OPTIONS, INCOME_OPTIONS};

// ---------------------------------------------------------------------------
// Left side panel – criteria widgets
// ---------------------------------------------------------------------------

/// Render the criteria form.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Criteria");
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            age_inputs(ui, state);
            ui.separator();

            race_picker(ui, state);
            ui.separator();

            ui.strong("📏 Minimum Height");
            ui.label(RichText::new(HEIGHT_OPTIONS[state.height_index].label).size(18.0));
            ui.add(
                egui::Slider::new(&mut state.height_index, 0..=HEIGHT_OPTIONS.len() - 1)
                    .show_value(false),
            );
            ui.separator();

            ui.strong("💰 Minimum Annual Income");
            ui.label(RichText::new(INCOME_OPTIONS[state.income_index].label).size(18.0));
            ui.add(
                egui::Slider::new(&mut state.income_index, 0..=INCOME_OPTIONS.len() - 1)
                    .show_value(false),
            );
            ui.separator();

            ui.checkbox(&mut state.exclude_married, "💍 Exclude Married");
            ui.checkbox(&mut state.exclude_obese, "💪 Exclude Obese (BMI ≥ 30)");
        });

    // Recompute the estimate after any widget changes.
    state.recompute_if_changed();
}

fn age_inputs(ui: &mut Ui, state: &mut AppState) {
    ui.strong("🎂 Age Range");
    ui.horizontal(|ui: &mut Ui| {
        ui.label("Min");
        ui.add(egui::DragValue::new(&mut state.min_age).range(MIN_AGE..=MAX_AGE));
        ui.label("Max");
        ui.add(egui::DragValue::new(&mut state.max_age).range(MIN_AGE..=MAX_AGE));
    });
    ui.add(egui::Slider::new(&mut state.min_age, MIN_AGE..=MAX_AGE).text("min"));
    ui.add(egui::Slider::new(&mut state.max_age, MIN_AGE..=MAX_AGE).text("max"));

    if state.min_age > state.max_age {
        ui.label(RichText::new("Minimum age is above maximum age").color(Color32::YELLOW));
    }
}

fn race_picker(ui: &mut Ui, state: &mut AppState) {
    ui.strong("🌍 Race / Ethnicity");
    ui.horizontal_wrapped(|ui: &mut Ui| {
        for race in Race::ALL {
            let selected = state.race == race;
            let text = if selected {
                format!("✓ {}", race.label())
            } else {
                race.label().to_string()
            };
            if ui.selectable_label(selected, text).clicked() {
                state.race = race;
            }
        }
    });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Load tables…").clicked() {
                open_tables_dialog(state);
                ui.close_menu();
            }
            if ui.button("Restore built-in tables").clicked() {
                state.restore_builtin_tables();
                ui.close_menu();
            }
        });

        ui.separator();

        if ui.button("Reset criteria").clicked() {
            state.reset_criteria();
        }

        ui.separator();

        ui.label(
            RichText::new("Live Statistics • US Census Bureau & CDC Data 2024").weak(),
        );

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_tables_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Load distribution tables")
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        match reality_check::data::loader::load_tables(&path) {
            Ok(tables) => {
                log::info!(
                    "Loaded distribution tables from {} (population {})",
                    path.display(),
                    tables.total_population()
                );
                state.set_tables(tables);
            }
            Err(e) => {
                log::error!("Failed to load tables: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
