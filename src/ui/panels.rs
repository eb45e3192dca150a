use eframe::egui::{self, Color32, RichText, Slider, Ui};
use egui_extras::{Column, TableBuilder};

use crate::config::PAYLOAD_STEP_KG;
use crate::data::filter::{PayloadRange, site_options};
use crate::data::model::LaunchDataset;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – inputs
// ---------------------------------------------------------------------------

/// Render the site dropdown, payload range and site summary.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Launch site");
    ui.separator();

    let options = site_options(&state.dataset);
    let mut selected = state.site.clone();
    egui::ComboBox::from_id_salt("site_dropdown")
        .selected_text(selected.to_string())
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            for option in options {
                let label = option.to_string();
                ui.selectable_value(&mut selected, option, label);
            }
        });
    state.set_site(selected);

    ui.add_space(12.0);
    ui.heading("Payload range (Kg)");
    ui.separator();
    payload_sliders(ui, state);

    ui.add_space(12.0);
    site_summary(ui, &state.dataset);
}

/// Two coupled sliders acting as one range input. Dragging one handle past
/// the other pushes the other along.
fn payload_sliders(ui: &mut Ui, state: &mut AppState) {
    let bounds = state.dataset.bounds();
    let current = state.payload_range;
    let PayloadRange { mut lo, mut hi } = current;

    let lo_changed = ui
        .add(
            Slider::new(&mut lo, bounds.min..=bounds.max)
                .step_by(PAYLOAD_STEP_KG)
                .text("min"),
        )
        .changed();
    let hi_changed = ui
        .add(
            Slider::new(&mut hi, bounds.min..=bounds.max)
                .step_by(PAYLOAD_STEP_KG)
                .text("max"),
        )
        .changed();

    if lo_changed {
        state.set_payload_range(current.with_lo(lo));
    } else if hi_changed {
        state.set_payload_range(current.with_hi(hi));
    }

    if ui.small_button("Full range").clicked() {
        state.set_payload_range(PayloadRange::full(bounds));
    }
}

fn site_summary(ui: &mut Ui, dataset: &LaunchDataset) {
    egui::CollapsingHeader::new(RichText::new("Site summary").strong())
        .default_open(true)
        .show(ui, |ui: &mut Ui| {
            TableBuilder::new(ui)
                .striped(true)
                .column(Column::auto().at_least(100.0))
                .column(Column::auto())
                .column(Column::auto())
                .column(Column::remainder())
                .header(20.0, |mut header| {
                    for title in ["Site", "Launches", "Successes", "Rate"] {
                        header.col(|ui: &mut Ui| {
                            ui.strong(title);
                        });
                    }
                })
                .body(|mut body| {
                    for site in dataset.sites() {
                        body.row(18.0, |mut row| {
                            row.col(|ui: &mut Ui| {
                                ui.label(&site.name);
                            });
                            row.col(|ui: &mut Ui| {
                                ui.label(site.launches.to_string());
                            });
                            row.col(|ui: &mut Ui| {
                                ui.label(site.successes.to_string());
                            });
                            row.col(|ui: &mut Ui| {
                                ui.label(format!("{:.0}%", site.success_rate() * 100.0));
                            });
                        });
                    }
                });
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui.button("Export charts…").clicked() {
                export_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        let bounds = state.dataset.bounds();
        ui.label(format!(
            "{} launches, {} sites, payload {:.0}–{:.0} kg, {} in range",
            state.dataset.len(),
            state.dataset.sites().len(),
            bounds.min,
            bounds.max,
            state.scatter.points.len()
        ));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open launch records")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_file(&path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} launches from {} across sites {:?}",
                    dataset.len(),
                    path.display(),
                    dataset.site_names().collect::<Vec<_>>()
                );
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}

pub fn export_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Export charts")
        .add_filter("JSON", &["json"])
        .set_file_name("charts.json")
        .save_file();

    if let Some(path) = file {
        match crate::chart::export_file(&path, &state.pie, &state.scatter) {
            Ok(()) => {
                log::info!("Exported charts to {}", path.display());
                state.status_message = None;
            }
            Err(e) => {
                log::error!("Failed to export charts: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
