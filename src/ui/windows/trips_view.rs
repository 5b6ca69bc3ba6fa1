//! Trips screen: the scrollable card list rendered inline in the central
//! panel.

use crate::model::trips::Trip;
use crate::ui::gradient;
use crate::ui::window::AppState;
use eframe::egui::{self, Align2, Color32, FontId, Sense, Shape, vec2};

const CARD_HEIGHT: f32 = 150.0;
const CARD_RADIUS: f32 = 20.0;
const CARD_SPACING: f32 = 16.0;
const CARD_MARGIN: f32 = 16.0;
const TITLE_PADDING: f32 = 16.0;

/// The scrollable list of trip cards. Stateless: scroll position lives in the
/// egui context and everything else comes in through [`AppState`].
#[derive(Default)]
pub struct TripsView;

impl TripsView {
    /// Render the card list into `ui` (called from the central panel, not a
    /// floating window).
    pub fn render_inline(&self, ui: &mut egui::Ui, state: &mut AppState<'_>) {
        if state.trips.is_empty() {
            ui.vertical_centered(|ui| {
                ui.add_space(48.0);
                ui.label("No trips yet. Tap + to add one.");
            });
            return;
        }

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.add_space(CARD_SPACING);
                for trip in state.trips.iter() {
                    draw_card(ui, trip);
                    ui.add_space(CARD_SPACING);
                }
            });
    }
}

/// One trip card: a rounded rectangle filled with a glossy gradient of the
/// trip color, title in white at the bottom-left.
fn draw_card(ui: &mut egui::Ui, trip: &Trip) {
    let (rect, _) =
        ui.allocate_exact_size(vec2(ui.available_width(), CARD_HEIGHT), Sense::hover());
    let rect = rect.shrink2(vec2(CARD_MARGIN, 0.0));

    let base = trip.color.color32();
    let painter = ui.painter();
    painter.add(Shape::mesh(gradient::rounded_rect(
        rect,
        CARD_RADIUS,
        base.gamma_multiply(0.95),
        base.gamma_multiply(0.70),
    )));
    painter.text(
        rect.left_bottom() + vec2(TITLE_PADDING, -TITLE_PADDING),
        Align2::LEFT_BOTTOM,
        &trip.title,
        FontId::proportional(26.0),
        Color32::WHITE,
    );
}
