//! Application orchestrator: owns the trip list and drives the window system.

use crate::model::palette::PaletteColor;
use crate::model::trips::TripList;
use crate::ui::gradient;
use crate::ui::window::{AppState, AppWindow};
use crate::ui::windows::{
    add_trip_view::AddTripView, profile_view::ProfileView, trips_view::TripsView,
};
use eframe::egui::{self, Align2, Color32, CornerRadius, Id, RichText, Shape, vec2};

/// The top-level application, implementing [`eframe::App`].
///
/// All domain state lives in the model structs; `App` only:
/// 1. Paints the background wash, the header, and the tab bar.
/// 2. Renders the trips screen inline in the central panel.
/// 3. Delegates the two modal windows to their [`AppWindow`] impls.
pub struct App {
    trips: TripList,
    trips_view: TripsView,
    add_trip: AddTripView,
    profile: ProfileView,
}

impl App {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let trips = TripList::seeded();
        log::debug!("seeded {} trips", trips.len());
        Self {
            trips,
            trips_view: TripsView::default(),
            add_trip: AddTripView::default(),
            profile: ProfileView::default(),
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ── 1. Tab bar ────────────────────────────────────────────────────────
        // The shell hosts a single tab, permanently selected.
        egui::TopBottomPanel::bottom("tab_bar").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                let _ = ui.selectable_label(true, "Trips");
            });
        });

        // ── 2. Trips screen ───────────────────────────────────────────────────
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                ui.painter().add(Shape::mesh(gradient::linear(
                    ui.max_rect(),
                    PaletteColor::Turquoise.color32(),
                    PaletteColor::DuckBlue.color32(),
                )));

                ui.add_space(12.0);
                ui.horizontal(|ui| {
                    ui.add_space(16.0);
                    ui.heading(RichText::new("Travel Diary").color(Color32::WHITE));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.add_space(16.0);
                        let profile = ui.button(
                            RichText::new("Profile").color(PaletteColor::Turquoise.color32()),
                        );
                        if profile.clicked() && !self.profile.is_open() {
                            self.profile.open();
                        }
                    });
                });
                ui.add_space(8.0);

                let mut state = AppState {
                    trips: &mut self.trips,
                };
                self.trips_view.render_inline(ui, &mut state);
            });

        // ── 3. Floating add button ────────────────────────────────────────────
        egui::Area::new(Id::new("add_trip_fab"))
            .anchor(Align2::RIGHT_BOTTOM, vec2(-24.0, -64.0))
            .show(ctx, |ui| {
                let fab = egui::Button::new(RichText::new("+").size(28.0).color(Color32::BLACK))
                    .fill(Color32::from_white_alpha(230))
                    .min_size(vec2(56.0, 56.0))
                    .corner_radius(CornerRadius::same(28));
                if ui.add(fab).clicked() && !self.add_trip.is_open() {
                    self.add_trip.open();
                }
            });

        // ── 4. Modal windows ──────────────────────────────────────────────────
        let mut state = AppState {
            trips: &mut self.trips,
        };
        for window in [
            &mut self.add_trip as &mut dyn AppWindow,
            &mut self.profile as &mut dyn AppWindow,
        ] {
            window.show(ctx, &mut state);
        }
    }
}
