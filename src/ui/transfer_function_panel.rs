//! Transfer function section: component picker, color map picker, color
//! window controls, and the mount area for the transfer-function widget.
//!
//! The widget itself is an external collaborator reached only through the
//! [`TransferFunctionView`] trait; the reference implementation here paints
//! the histogram backdrop, color gradient and range markers with egui.

use rviv::presentation::lut_presets;
use rviv::{Event, Histogram, LookupTable, MountRegistry, SessionState, TransferFunctionView};
use std::sync::Arc;

/// Stable logical name of the widget's mount target.
pub const TRANSFER_FUNCTION_MOUNT: &str = "transfer-function";

/// Reference transfer-function widget painting into an egui region.
///
/// Holds the view the effect bridge last pushed; all setters are idempotent.
#[derive(Default)]
pub struct EguiTransferFunctionWidget {
    table: Option<LookupTable>,
    range: Option<[f64; 2]>,
    histogram: Option<Histogram>,
}

impl TransferFunctionView for EguiTransferFunctionWidget {
    fn set_color_transfer_function(&mut self, table: &LookupTable) {
        self.table = Some(table.clone());
    }

    fn set_range_zoom(&mut self, range: [f64; 2]) {
        self.range = Some(range);
    }

    fn set_histogram(&mut self, histogram: &Histogram) {
        self.histogram = Some(histogram.clone());
    }
}

impl EguiTransferFunctionWidget {
    /// Paints the widget into its mount rect.
    pub fn paint(&self, painter: &egui::Painter, rect: egui::Rect) {
        painter.rect_filled(rect, 2.0, egui::Color32::from_gray(28));

        let gradient_height = 14.0;
        let plot = egui::Rect::from_min_max(
            rect.min,
            egui::pos2(rect.max.x, rect.max.y - gradient_height),
        );

        if let Some(histogram) = &self.histogram {
            let max_count = histogram.max_count().max(1) as f32;
            let bins = histogram.counts().len();
            if bins > 0 {
                let bin_width = plot.width() / bins as f32;
                for (index, &count) in histogram.counts().iter().enumerate() {
                    let height = plot.height() * count as f32 / max_count;
                    let left = plot.min.x + index as f32 * bin_width;
                    let bar = egui::Rect::from_min_max(
                        egui::pos2(left, plot.max.y - height),
                        egui::pos2(left + bin_width, plot.max.y),
                    );
                    painter.rect_filled(
                        bar,
                        0.0,
                        egui::Color32::from_gray(90),
                    );
                }
            }
        }

        if let Some(table) = &self.table {
            let strip = egui::Rect::from_min_max(
                egui::pos2(rect.min.x, rect.max.y - gradient_height),
                rect.max,
            );
            let segments = 64;
            let segment_width = strip.width() / segments as f32;
            for index in 0..segments {
                let t = (index as f32 + 0.5) / segments as f32;
                let [r, g, b] = table.sample(t);
                let color = egui::Color32::from_rgb(
                    (r * 255.0) as u8,
                    (g * 255.0) as u8,
                    (b * 255.0) as u8,
                );
                let left = strip.min.x + index as f32 * segment_width;
                let segment = egui::Rect::from_min_max(
                    egui::pos2(left, strip.min.y),
                    egui::pos2(left + segment_width, strip.max.y),
                );
                painter.rect_filled(segment, 0.0, color);
            }
        }

        if let Some(range) = self.range {
            let stroke = egui::Stroke::new(1.5, egui::Color32::from_rgb(255, 200, 60));
            for bound in range {
                let x = plot.min.x + plot.width() * bound as f32;
                painter.line_segment(
                    [egui::pos2(x, plot.min.y), egui::pos2(x, plot.max.y)],
                    stroke,
                );
            }
        }
    }
}

/// Renders the transfer function section and registers the mount target.
pub fn render(
    ui: &mut egui::Ui,
    state: &SessionState,
    mounts: &mut MountRegistry<egui::Rect>,
    widget: Option<&EguiTransferFunctionWidget>,
) -> Vec<Event> {
    let mut events = Vec::new();

    let ids = state.images.component_ids();
    if !ids.is_empty() {
        let current = state.images.selected_component();
        let mut selected = current;
        egui::ComboBox::from_label("Component")
            .selected_text(
                selected.map_or_else(|| "None".to_string(), |id| format!("Component {id}")),
            )
            .show_ui(ui, |ui| {
                for id in &ids {
                    ui.selectable_value(&mut selected, Some(*id), format!("Component {id}"));
                }
            });
        if selected != current {
            if let Some(id) = selected {
                events.push(Event::SelectComponent(id));
            }
        }
    }

    if let Some(component) = state.images.selected_component() {
        let current_preset = state
            .images
            .lookup_table(component)
            .map(|table| table.preset_name().to_string());
        let mut chosen = current_preset.clone();
        egui::ComboBox::from_label("Color map")
            .selected_text(chosen.clone().unwrap_or_else(|| "None".to_string()))
            .show_ui(ui, |ui| {
                for name in lut_presets::preset_names() {
                    ui.selectable_value(&mut chosen, Some(name.to_string()), name);
                }
            });
        if chosen != current_preset {
            if let Some(name) = chosen {
                if let Some(table) = lut_presets::preset(&name) {
                    events.push(Event::LookupTableChanged {
                        component,
                        table: Arc::new(table),
                    });
                }
            }
        }

        if let Some(range) = state.images.color_range(component) {
            let bounds = state.images.color_range_bounds(component).unwrap_or(range);
            let speed = ((bounds[1] - bounds[0]) / 200.0).abs().max(0.001);
            let mut low = range[0];
            let mut high = range[1];
            ui.horizontal(|ui| {
                ui.label("Window");
                ui.add(egui::DragValue::new(&mut low).range(bounds[0]..=high).speed(speed));
                ui.add(egui::DragValue::new(&mut high).range(low..=bounds[1]).speed(speed));
            });
            if low != range[0] || high != range[1] {
                events.push(Event::ColorRangeChanged { component, range: [low, high] });
            }
        }
    }

    let desired = egui::vec2(ui.available_width(), 120.0);
    let (rect, _response) = ui.allocate_exact_size(desired, egui::Sense::hover());
    mounts.register(TRANSFER_FUNCTION_MOUNT, rect);

    match widget {
        Some(widget) => widget.paint(ui.painter(), rect),
        None => {
            painter_placeholder(ui.painter(), rect);
        }
    }

    events
}

fn painter_placeholder(painter: &egui::Painter, rect: egui::Rect) {
    painter.rect_filled(rect, 2.0, egui::Color32::from_gray(28));
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        "transfer function",
        egui::FontId::proportional(12.0),
        egui::Color32::from_gray(120),
    );
}
