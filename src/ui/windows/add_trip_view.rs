//! Add-trip window: destination field, color swatch row, and Save.

use crate::model::palette::PaletteColor;
use crate::model::trips::{TripDraft, TripList};
use crate::ui::window::{AppState, AppWindow};
use eframe::egui::{self, Align2, Color32, Sense, Stroke, TextEdit, Vec2, vec2};

const SWATCH_SIZE: f32 = 40.0;
const SWATCH_STROKE: f32 = 3.0;

#[derive(Default)]
pub struct AddTripView {
    open: bool,
    draft: TripDraft,
}

impl AppWindow for AddTripView {
    fn name(&self) -> &str {
        "New Trip"
    }

    fn is_open(&self) -> bool {
        self.open
    }

    fn open(&mut self) {
        self.draft = TripDraft::default();
        self.open = true;
    }

    fn show(&mut self, ctx: &egui::Context, state: &mut AppState<'_>) {
        let mut save_clicked = false;
        egui::Window::new(self.name())
            .open(&mut self.open)
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
            .default_width(280.0)
            .show(ctx, |ui| {
                ui.add(
                    TextEdit::singleline(&mut self.draft.title)
                        .hint_text("Destination")
                        .desired_width(f32::INFINITY),
                );
                ui.add_space(12.0);

                ui.horizontal(|ui| {
                    for color in PaletteColor::ALL {
                        let selected = self.draft.color == color;
                        if swatch(ui, color, selected).clicked() {
                            self.draft.color = color;
                        }
                    }
                });
                ui.add_space(12.0);

                save_clicked = ui.button("Save").clicked();
            });

        if save_clicked {
            self.try_save(state.trips);
        }
    }
}

impl AddTripView {
    /// Handle Save: silently no-ops when the title is empty (the window stays
    /// open), otherwise prepends the new trip and closes the window.
    fn try_save(&mut self, trips: &mut TripList) {
        let Some(trip) = self.draft.commit() else {
            return;
        };
        log::info!("added trip \"{}\" ({})", trip.title, trip.color.label());
        trips.add(trip);
        self.open = false;
    }
}

/// A tappable color sample; the selected one carries a dark ring.
fn swatch(ui: &mut egui::Ui, color: PaletteColor, selected: bool) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(vec2(SWATCH_SIZE, SWATCH_SIZE), Sense::click());
    let radius = SWATCH_SIZE / 2.0;
    ui.painter().circle_filled(rect.center(), radius, color.color32());
    if selected {
        ui.painter().circle_stroke(
            rect.center(),
            radius,
            Stroke::new(SWATCH_STROKE, Color32::from_black_alpha(77)),
        );
    }
    response.on_hover_text(color.label())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_with_empty_title_is_a_no_op() {
        let mut view = AddTripView::default();
        view.open();

        let mut trips = TripList::seeded();
        view.try_save(&mut trips);

        assert_eq!(trips.len(), 3);
        assert!(view.is_open());
    }

    #[test]
    fn save_prepends_and_closes() {
        let mut view = AddTripView::default();
        view.open();
        view.draft.title = "Tokyo".into();
        view.draft.color = PaletteColor::LightBlue;

        let mut trips = TripList::seeded();
        view.try_save(&mut trips);

        assert_eq!(trips.len(), 4);
        let first = trips.iter().next().expect("non-empty list");
        assert_eq!(first.title, "Tokyo");
        assert_eq!(first.color, PaletteColor::LightBlue);
        assert!(!view.is_open());
    }

    #[test]
    fn reopening_resets_the_draft() {
        let mut view = AddTripView::default();
        view.open();
        view.draft.title = "Oslo".into();
        view.draft.color = PaletteColor::DuckBlue;

        view.open();
        assert_eq!(view.draft.title, "");
        assert_eq!(view.draft.color, PaletteColor::Turquoise);
    }
}
