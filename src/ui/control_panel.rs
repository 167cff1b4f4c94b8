//! Panel orchestration.
//!
//! Renders the toolbar, the collapsible left control drawer and the central
//! viewport placeholder, collecting interaction events from every section.

use crate::ui::{plane_sliders, rotate_button, transfer_function_panel};
use crate::ui::transfer_function_panel::EguiTransferFunctionWidget;
use rviv::{Axis, Event, MountRegistry, SessionState, ViewMode};

/// Renders all panels; returns the events to dispatch.
pub fn render(
    ctx: &egui::Context,
    state: &SessionState,
    mounts: &mut MountRegistry<egui::Rect>,
    widget: Option<&EguiTransferFunctionWidget>,
) -> Vec<Event> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let drawer = ui
                .selectable_label(!state.view.ui_collapsed(), "Controls")
                .on_hover_text("Toggle the control panel");
            if drawer.clicked() {
                events.push(Event::ToggleUiCollapsed);
            }

            if let Some(event) = rotate_button::render(ui, state) {
                events.push(event);
            }

            let current_mode = state.view.view_mode();
            let mut mode = current_mode;
            egui::ComboBox::from_id_salt("view_mode")
                .selected_text(mode.label())
                .show_ui(ui, |ui| {
                    for candidate in [
                        ViewMode::Volume,
                        ViewMode::Plane(Axis::X),
                        ViewMode::Plane(Axis::Y),
                        ViewMode::Plane(Axis::Z),
                    ] {
                        ui.selectable_value(&mut mode, candidate, candidate.label());
                    }
                });
            if mode != current_mode {
                events.push(Event::ViewModeChanged(mode));
            }
        });
    });

    if state.view.ui_collapsed() {
        // The drawer is closed: its mount target no longer exists.
        mounts.remove(transfer_function_panel::TRANSFER_FUNCTION_MOUNT);
    } else {
        egui::SidePanel::left("control_panel")
            .default_width(320.0)
            .resizable(true)
            .show(ctx, |ui| {
                ui.heading("Transfer Function");
                events.extend(transfer_function_panel::render(ui, state, mounts, widget));
                ui.separator();
                ui.heading("Slicing Planes");
                plane_sliders::render(ui, state, &mut events);
            });
    }

    egui::CentralPanel::default().show(ctx, |ui| {
        // The actual volume rendering viewport belongs to an external
        // renderer; this placeholder only reports the view configuration.
        ui.centered_and_justified(|ui| {
            let rotating = if state.view.rotate_enabled() { ", rotating" } else { "" };
            ui.label(format!("{} view{rotating}", state.view.view_mode().label()));
        });
    });

    events
}
