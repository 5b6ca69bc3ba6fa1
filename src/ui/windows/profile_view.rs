//! Profile window: mock login form and the logged-in welcome view.

use crate::model::auth::AuthSession;
use crate::ui::window::{AppState, AppWindow};
use eframe::egui::{self, Align2, TextEdit, Vec2};

#[derive(Default)]
pub struct ProfileView {
    open: bool,
    session: AuthSession,
}

impl AppWindow for ProfileView {
    fn name(&self) -> &str {
        "Profile"
    }

    fn is_open(&self) -> bool {
        self.open
    }

    /// Present the window. The session is rebuilt from scratch, so the
    /// profile always comes up logged out.
    fn open(&mut self) {
        self.session = AuthSession::default();
        self.open = true;
    }

    fn show(&mut self, ctx: &egui::Context, _state: &mut AppState<'_>) {
        egui::Window::new(self.name())
            .open(&mut self.open)
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
            .default_width(300.0)
            .show(ctx, |ui| {
                if self.session.logged_in {
                    welcome_ui(ui, &mut self.session);
                } else {
                    login_form_ui(ui, &mut self.session);
                }
            });
    }
}

fn login_form_ui(ui: &mut egui::Ui, session: &mut AuthSession) {
    ui.vertical_centered(|ui| ui.heading("Create Account / Log In"));
    ui.add_space(8.0);

    ui.add(
        TextEdit::singleline(&mut session.username)
            .hint_text("Username")
            .desired_width(f32::INFINITY),
    );
    ui.add(
        TextEdit::singleline(&mut session.email)
            .hint_text("Email")
            .desired_width(f32::INFINITY),
    );
    ui.add(
        TextEdit::singleline(&mut session.password)
            .hint_text("Password")
            .password(true)
            .desired_width(f32::INFINITY),
    );
    ui.add_space(8.0);

    if ui.button("Continue").clicked() && session.log_in() {
        log::info!("logged in as {}", session.display_name());
    }
}

fn welcome_ui(ui: &mut egui::Ui, session: &mut AuthSession) {
    ui.vertical_centered(|ui| {
        ui.heading(format!("Welcome, {}!", session.display_name()));
        ui.add_space(8.0);
        if ui.button("Log Out").clicked() {
            session.log_out();
            log::info!("logged out");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reopening_resets_to_logged_out() {
        let mut view = ProfileView::default();
        view.open();
        view.session.email = "a@b.com".into();
        view.session.password = "x".into();
        assert!(view.session.log_in());

        view.open();
        assert!(view.is_open());
        assert!(!view.session.logged_in);
        assert_eq!(view.session, AuthSession::default());
    }
}
