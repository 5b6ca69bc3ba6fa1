//! The `AppWindow` trait and the shared `AppState` view passed to each window.

use crate::model::trips::TripList;
use eframe::egui;

/// Mutable view of app state shared with every window's `show` call.
pub struct AppState<'a> {
    pub trips: &'a mut TripList,
}

/// Trait implemented by every modal window.
///
/// Each window owns its own open/closed flag and its window-local state (the
/// trip draft, the profile session). A window is presented with `open`, which
/// rebuilds that local state from scratch, and closes itself either from its
/// own controls or from the title-bar close button.
pub trait AppWindow {
    /// Display name used as the egui window title.
    fn name(&self) -> &str;

    /// Whether this window is currently on screen.
    fn is_open(&self) -> bool;

    /// Present the window. Every presentation starts from fresh local state.
    fn open(&mut self);

    /// Draw the window contents. Called every frame by `App::update`.
    fn show(&mut self, ctx: &egui::Context, state: &mut AppState<'_>);
}
