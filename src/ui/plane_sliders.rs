//! Per-axis slicing plane controls.
//!
//! One row per axis: visibility toggle, scroll play/pause toggle, position
//! badge and position slider. Which controls are live depends on the view
//! mode (see [`rviv::domain::controls`]); suppressed controls keep their
//! layout slot but are hidden. Toggles go through the plane policy and emit
//! one wholesale planes-record event; slider moves emit axis-specific slice
//! events directly.

use rviv::domain::{controls, plane_policy};
use rviv::{Axis, Event, SessionState};

/// Renders all three plane rows, appending interaction events.
pub fn render(ui: &mut egui::Ui, state: &SessionState, events: &mut Vec<Event>) {
    if state.view.use_2d() {
        return;
    }
    let mode = state.view.view_mode();
    let use_2d = state.view.use_2d();

    for axis in Axis::ALL {
        let plane = state.planes.get(axis);
        ui.horizontal(|ui| {
            let visibility_live = controls::visibility_button_live(mode);
            let visibility_label = if plane.visible { "Hide" } else { "Show" };
            let visibility = ui
                .add_visible(
                    visibility_live,
                    egui::Button::selectable(plane.visible, visibility_label),
                )
                .on_hover_text(format!("{} Plane Visibility", axis.label()));
            if visibility.clicked() {
                events.push(Event::SlicingPlanesChanged(plane_policy::toggle_visibility(
                    &state.planes,
                    axis,
                )));
            }

            let scroll_live = controls::scroll_button_live(mode, axis);
            let scroll_label = if plane.scroll { "⏸" } else { "▶" };
            let scroll = ui
                .add_visible(
                    scroll_live,
                    egui::Button::selectable(plane.scroll, scroll_label),
                )
                .on_hover_text(format!("{} Plane Toggle Scroll", axis.label()));
            if scroll.clicked() {
                events.push(Event::SlicingPlanesChanged(plane_policy::toggle_scroll(
                    &state.planes,
                    axis,
                )));
            }

            ui.add_visible(
                scroll_live,
                egui::Label::new(
                    egui::RichText::new(format!(
                        "{}: {:.2}",
                        axis.label(),
                        plane.current_value
                    ))
                    .monospace(),
                ),
            );

            let slider_live = controls::slider_live(mode, use_2d, axis);
            let mut value = plane.current_value;
            let slider = ui.add_visible(
                slider_live,
                egui::Slider::new(&mut value, plane.min..=plane.max)
                    .step_by(plane.step)
                    .show_value(false),
            );
            if slider.changed() {
                events.push(Event::SliceChanged { axis, value });
            }
        });
    }
}
