//! Shared UI components.

use eframe::egui::{self, Color32, CornerRadius, Margin, Response, RichText, Sense, StrokeKind, Ui};

use crate::validation::FieldErrors;

/// Render a clickable dashboard card with dynamic size.
///
/// Returns the response which can be checked for `.clicked()`.
pub fn dashboard_card(ui: &mut Ui, title: &str, description: &str, icon: &str, size: egui::Vec2) -> Response {
    let (rect, response) = ui.allocate_exact_size(size, Sense::click());

    if ui.is_rect_visible(rect) {
        let visuals = ui.style().interact(&response);

        // Scale factor based on width (200 is the reference size)
        let scale = size.x / 200.0;

        ui.painter().rect_filled(rect, 8.0, visuals.bg_fill);
        ui.painter()
            .rect_stroke(rect, 8.0, visuals.bg_stroke, StrokeKind::Outside);

        let icon_pos = egui::pos2(rect.center().x, rect.top() + size.y * 0.23);
        ui.painter().text(
            icon_pos,
            egui::Align2::CENTER_CENTER,
            icon,
            egui::FontId::proportional(36.0 * scale),
            colors::PRIMARY,
        );

        let title_pos = egui::pos2(rect.center().x, rect.center().y + size.y * 0.07);
        ui.painter().text(
            title_pos,
            egui::Align2::CENTER_CENTER,
            title,
            egui::FontId::proportional(18.0 * scale),
            visuals.text_color(),
        );

        let desc_pos = egui::pos2(rect.center().x, rect.bottom() - size.y * 0.17);
        ui.painter().text(
            desc_pos,
            egui::Align2::CENTER_CENTER,
            description,
            egui::FontId::proportional(12.0 * scale),
            ui.visuals().weak_text_color(),
        );
    }

    response
}

/// Status indicator colors.
pub mod colors {
    use super::Color32;

    pub const PRIMARY: Color32 = Color32::from_rgb(16, 103, 168);
    pub const SUCCESS: Color32 = Color32::from_rgb(100, 200, 100);
    pub const ERROR: Color32 = Color32::from_rgb(255, 100, 100);
    pub const WARNING: Color32 = Color32::from_rgb(255, 200, 100);
    pub const NEUTRAL: Color32 = Color32::from_rgb(150, 150, 150);
}

/// Render a back button that returns true when clicked.
pub fn back_button(ui: &mut Ui) -> bool {
    ui.button(RichText::new("< Retour").size(14.0)).clicked()
}

/// Render a panel header with title and an optional subtitle.
pub fn panel_header(ui: &mut Ui, title: &str, subtitle: Option<&str>) {
    ui.heading(RichText::new(title).size(24.0));
    if let Some(subtitle) = subtitle {
        ui.label(RichText::new(subtitle).weak());
    }
    ui.add_space(10.0);
    ui.separator();
    ui.add_space(15.0);
}

/// Small icon-only button for table rows.
pub fn action_button(ui: &mut Ui, icon: &str, tooltip: &str) -> Response {
    ui.add(egui::Button::new(RichText::new(icon).size(16.0)).frame(false))
        .on_hover_text(tooltip)
}

/// Icon-only button for destructive row actions.
pub fn danger_action_button(ui: &mut Ui, icon: &str, tooltip: &str) -> Response {
    ui.add(egui::Button::new(RichText::new(icon).size(16.0).color(colors::ERROR)).frame(false))
        .on_hover_text(tooltip)
}

/// Filled button for the main action of a panel.
pub fn primary_button_with_icon(ui: &mut Ui, icon: &str, text: &str) -> Response {
    let label = if icon.is_empty() {
        text.to_string()
    } else {
        format!("{icon} {text}")
    };
    ui.add(
        egui::Button::new(RichText::new(label).color(Color32::WHITE))
            .fill(colors::PRIMARY)
            .corner_radius(CornerRadius::same(6))
            .min_size(egui::vec2(0.0, 28.0)),
    )
}

pub fn styled_button(ui: &mut Ui, text: &str) -> Response {
    ui.add(
        egui::Button::new(text)
            .corner_radius(CornerRadius::same(6))
            .min_size(egui::vec2(0.0, 28.0)),
    )
}

pub fn styled_button_with_icon(ui: &mut Ui, icon: &str, text: &str) -> Response {
    styled_button(ui, &format!("{icon} {text}"))
}

/// Render a stat card with title, value, and subtitle.
pub fn stat_card(ui: &mut Ui, title: &str, value: &str, subtitle: &str, accent: Color32) {
    egui::Frame::new()
        .fill(ui.style().visuals.extreme_bg_color)
        .inner_margin(Margin::same(15))
        .outer_margin(Margin::same(5))
        .corner_radius(CornerRadius::same(8))
        .show(ui, |ui| {
            ui.set_min_width(160.0);

            ui.vertical(|ui| {
                ui.label(RichText::new(title).small());
                ui.label(RichText::new(value).heading().strong().color(accent));
                ui.label(RichText::new(subtitle).small().weak());
            });
        });
}

/// Rounded panel section used for grouped content.
pub fn section<R>(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> R) -> R {
    egui::Frame::new()
        .fill(ui.style().visuals.extreme_bg_color)
        .inner_margin(Margin::same(15))
        .corner_radius(CornerRadius::same(8))
        .show(ui, add_contents)
        .inner
}

/// Colored pill with a short status text.
pub fn status_badge(ui: &mut Ui, text: &str, color: Color32) {
    egui::Frame::new()
        .fill(color.gamma_multiply(0.2))
        .inner_margin(Margin::symmetric(8, 2))
        .corner_radius(CornerRadius::same(10))
        .show(ui, |ui| {
            ui.label(RichText::new(text).small().color(color));
        });
}

/// Inline error under a form field, if any.
pub fn field_error(ui: &mut Ui, errors: &FieldErrors, field: &str) {
    if let Some(message) = errors.get(field) {
        ui.label(RichText::new(message).small().color(colors::ERROR));
    }
}

/// Label, single-line input and inline error stacked vertically.
///
/// Editing the input clears its error.
pub fn text_field(ui: &mut Ui, label: &str, value: &mut String, errors: &mut FieldErrors, field: &'static str) {
    ui.vertical(|ui| {
        ui.label(label);
        if ui
            .add(egui::TextEdit::singleline(value).desired_width(260.0))
            .changed()
        {
            errors.clear(field);
        }
        field_error(ui, errors, field);
    });
}

/// Previous / next page controls. Returns true when the page changed.
pub fn pagination(ui: &mut Ui, page: &mut usize, total_pages: usize) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        if ui.add_enabled(*page > 1, egui::Button::new("<")).clicked() {
            *page -= 1;
            changed = true;
        }
        ui.label(format!("Page {} / {}", page, total_pages));
        if ui.add_enabled(*page < total_pages, egui::Button::new(">")).clicked() {
            *page += 1;
            changed = true;
        }
    });
    changed
}
