//! Weekly timetable view.

use eframe::egui::{self, Color32, CornerRadius, Margin, RichText, ScrollArea, Ui};
use egui_phosphor::regular::{CARET_LEFT, CARET_RIGHT};

use super::app::App;
use super::components::{back_button, colors, panel_header, section, styled_button};
use crate::timetable::{
    CourseFilter, DAYS, SLOT_HOURS, ScheduleSlot, Timetable, day_label, format_short_date, shift_week, slot_label,
    week_dates, week_range_label,
};

const CELL_WIDTH: f32 = 130.0;
const CELL_HEIGHT: f32 = 44.0;

fn course_color(timetable: &Timetable, course_id: u32) -> Color32 {
    timetable
        .course(course_id)
        .map_or(colors::NEUTRAL, |c| Color32::from_rgb(c.color[0], c.color[1], c.color[2]))
}

fn filter_label(timetable: &Timetable, filter: CourseFilter) -> &str {
    match filter {
        CourseFilter::All => "Tous les cours",
        CourseFilter::Course(id) => timetable.course(id).map_or("Cours inconnu", |c| c.name.as_str()),
    }
}

/// Show the timetable panel.
///
/// Returns `true` if the back button was clicked.
pub fn show(app: &mut App, ui: &mut Ui) -> bool {
    let go_back = back_button(ui);

    panel_header(ui, "Emploi du temps", Some("Planning hebdomadaire des cours"));

    ui.horizontal(|ui| {
        if styled_button(ui, CARET_LEFT).on_hover_text("Semaine précédente").clicked() {
            app.timetable_week = shift_week(app.timetable_week, -1);
        }
        ui.label(RichText::new(week_range_label(app.timetable_week)).strong());
        if styled_button(ui, CARET_RIGHT).on_hover_text("Semaine suivante").clicked() {
            app.timetable_week = shift_week(app.timetable_week, 1);
        }
        if styled_button(ui, "Aujourd'hui").clicked() {
            app.timetable_week = app.today();
        }

        ui.add_space(30.0);

        ui.label("Cours:");
        let timetable = &app.timetable;
        egui::ComboBox::from_id_salt("timetable_filter")
            .width(200.0)
            .selected_text(filter_label(timetable, app.timetable_filter))
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut app.timetable_filter, CourseFilter::All, "Tous les cours");
                for course in &timetable.courses {
                    ui.selectable_value(
                        &mut app.timetable_filter,
                        CourseFilter::Course(course.id),
                        &course.name,
                    );
                }
            });
    });

    ui.add_space(10.0);

    // Legend
    ui.horizontal_wrapped(|ui| {
        for course in &app.timetable.courses {
            let color = course_color(&app.timetable, course.id);
            ui.label(RichText::new("■").color(color));
            ui.label(format!(
                "{} ({} séances)",
                course.name,
                app.timetable.sessions_per_week(course.id)
            ));
            ui.add_space(10.0);
        }
    });

    ui.add_space(10.0);

    let dates = week_dates(app.timetable_week);
    let today = app.today();

    ScrollArea::both().id_salt("timetable_scroll").show(ui, |ui| {
        section(ui, |ui| {
            egui::Grid::new("timetable_grid")
                .num_columns(DAYS.len() + 1)
                .spacing([4.0, 4.0])
                .min_col_width(CELL_WIDTH)
                .show(ui, |ui| {
                    ui.strong("Horaire");
                    for (day, date) in DAYS.iter().zip(dates) {
                        let header = RichText::new(format!("{}\n{}", day_label(*day), format_short_date(date))).strong();
                        ui.label(if date == today { header.color(colors::PRIMARY) } else { header });
                    }
                    ui.end_row();

                    for hour in SLOT_HOURS {
                        ui.label(RichText::new(slot_label(hour)).monospace());
                        for day in DAYS {
                            match app.timetable.visible_slot(day, hour, app.timetable_filter) {
                                Some(slot) => slot_cell(ui, &app.timetable, slot),
                                None => empty_cell(ui),
                            }
                        }
                        ui.end_row();
                    }
                });
        });
    });

    go_back
}

fn slot_cell(ui: &mut Ui, timetable: &Timetable, slot: &ScheduleSlot) {
    let color = course_color(timetable, slot.course_id);
    let name = timetable.course(slot.course_id).map_or("-", |c| c.name.as_str());

    egui::Frame::new()
        .fill(color.gamma_multiply(0.25))
        .stroke(egui::Stroke::new(1.0, color))
        .inner_margin(Margin::symmetric(6, 4))
        .corner_radius(CornerRadius::same(4))
        .show(ui, |ui| {
            ui.set_min_size(egui::vec2(CELL_WIDTH - 12.0, CELL_HEIGHT - 8.0));
            ui.vertical(|ui| {
                ui.label(RichText::new(name).small().strong().color(color));
                ui.label(RichText::new(&slot.teacher).small().weak());
            });
        })
        .response
        .on_hover_text(format!("{} - {}\n{}", name, slot.teacher, slot_label(slot.hour)));
}

fn empty_cell(ui: &mut Ui) {
    ui.allocate_exact_size(egui::vec2(CELL_WIDTH, CELL_HEIGHT), egui::Sense::hover());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn test_filter_label() {
        let timetable = fixtures::timetable();
        assert_eq!(filter_label(&timetable, CourseFilter::All), "Tous les cours");
        assert_eq!(filter_label(&timetable, CourseFilter::Course(2)), "Data Science");
        assert_eq!(filter_label(&timetable, CourseFilter::Course(99)), "Cours inconnu");
    }

    #[test]
    fn test_course_color_falls_back_to_neutral() {
        let timetable = fixtures::timetable();
        assert_eq!(course_color(&timetable, 1), Color32::from_rgb(59, 130, 246));
        assert_eq!(course_color(&timetable, 42), colors::NEUTRAL);
    }
}
