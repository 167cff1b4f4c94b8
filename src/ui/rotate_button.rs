//! Camera rotation toggle button.

use rviv::{Event, SessionState};

/// Renders the rotation toggle; returns an event when clicked.
pub fn render(ui: &mut egui::Ui, state: &SessionState) -> Option<Event> {
    let response = ui
        .selectable_label(state.view.rotate_enabled(), "Spin 3D")
        .on_hover_text("Spin in 3D [p]");
    response.clicked().then_some(Event::ToggleRotate)
}
