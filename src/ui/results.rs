use eframe::egui::{self, RichText, Sense, Ui, Vec2};

use reality_check::format::{format_compact, format_count, format_percentage};
use reality_check::verdict::{fill_fraction, matching_cells, Verdict, GRID_CELLS};

use crate::color::{factor_color, match_color, no_match_color, verdict_color};
use crate::state::AppState;

const GRID_COLUMNS: usize = 10;
const CELL_SIZE: f32 = 18.0;

// ---------------------------------------------------------------------------
// Results view (central panel)
// ---------------------------------------------------------------------------

/// Render the current estimate.
pub fn results_view(ui: &mut Ui, state: &AppState) {
    let result = &state.result;
    let probability = result.probability;

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.vertical_centered(|ui: &mut Ui| {
                ui.label(
                    RichText::new(format!("{}%", format_percentage(probability)))
                        .size(48.0)
                        .strong(),
                );
                ui.label("of men meet your criteria");
            });

            ui.add(
                egui::ProgressBar::new(fill_fraction(probability))
                    .fill(match_color())
                    .desired_width(ui.available_width()),
            );
            ui.add_space(12.0);

            ui.heading("Visual Representation");
            ui.label("Out of 100 men, here's how many match:");
            let matches = matching_cells(probability);
            match_grid(ui, matches);
            ui.label(format!("● Matches criteria ({matches} men)"));
            ui.label(format!("○ Doesn't match ({} men)", GRID_CELLS - matches));
            ui.add_space(12.0);

            ui.horizontal(|ui: &mut Ui| {
                detail_card(ui, "👥 Estimated Count", &format_count(result.count));
                detail_card(
                    ui,
                    "🇺🇸 Total US Males",
                    &format_compact(state.tables.total_population()),
                );
            });
            ui.add_space(12.0);

            factor_breakdown(ui, state);
            ui.add_space(12.0);

            verdict_banner(ui, Verdict::from_probability(probability));
            ui.add_space(12.0);

            ui.separator();
            ui.label(
                RichText::new(
                    "📊 Data Sources: US Census Bureau (2024) • CDC/NCHS • Bureau of Labor Statistics",
                )
                .small(),
            );
            ui.label(
                RichText::new(
                    "This calculator is for entertainment and educational purposes only. \
                     Statistical probabilities do not account for geography, compatibility, \
                     or personal factors.",
                )
                .small()
                .weak(),
            );
        });
}

/// 10×10 grid of cells, the first `matches` drawn as matches.
fn match_grid(ui: &mut Ui, matches: usize) {
    let rows = GRID_CELLS.div_ceil(GRID_COLUMNS);
    let size = Vec2::new(GRID_COLUMNS as f32, rows as f32) * CELL_SIZE;
    let (rect, _) = ui.allocate_exact_size(size, Sense::hover());
    let painter = ui.painter_at(rect);

    for i in 0..GRID_CELLS {
        let (row, col) = (i / GRID_COLUMNS, i % GRID_COLUMNS);
        let center = rect.min
            + Vec2::new(col as f32 + 0.5, row as f32 + 0.5) * CELL_SIZE;
        let color = if i < matches {
            match_color()
        } else {
            no_match_color()
        };
        painter.circle_filled(center, CELL_SIZE * 0.4, color);
    }
}

fn detail_card(ui: &mut Ui, label: &str, value: &str) {
    ui.group(|ui: &mut Ui| {
        ui.vertical(|ui: &mut Ui| {
            ui.label(RichText::new(label).weak());
            ui.label(RichText::new(value).size(22.0).strong());
        });
    });
}

/// Table of the factors that went into the product.
fn factor_breakdown(ui: &mut Ui, state: &AppState) {
    egui::CollapsingHeader::new(RichText::new("Breakdown").strong())
        .default_open(false)
        .show(ui, |ui: &mut Ui| {
            egui::Grid::new("factor_breakdown")
                .striped(true)
                .num_columns(2)
                .show(ui, |ui: &mut Ui| {
                    for (label, factor) in state.result.factors.applied() {
                        ui.label(label);
                        ui.label(
                            RichText::new(format!("{}%", format_percentage(factor)))
                                .color(factor_color(factor)),
                        );
                        ui.end_row();
                    }
                });
        });
}

fn verdict_banner(ui: &mut Ui, verdict: Verdict) {
    egui::Frame::default()
        .fill(verdict_color(verdict))
        .inner_margin(10.0)
        .show(ui, |ui: &mut Ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui: &mut Ui| {
                ui.label(RichText::new(verdict.emoji()).size(28.0));
                ui.vertical(|ui: &mut Ui| {
                    ui.label(RichText::new(verdict.title()).strong().size(18.0));
                    ui.label(verdict.message());
                });
            });
        });
}
