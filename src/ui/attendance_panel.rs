//! Attendance panel: daily marks, history and the "Nouvelle présence" dialog.

use chrono::Duration;
use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use egui_extras::DatePickerButton;
use egui_phosphor::regular::{CARET_LEFT, CARET_RIGHT, CHECK_SQUARE, FILE_XLS};

use super::app::App;
use super::components::{
    back_button, colors, panel_header, primary_button_with_icon, section, stat_card, status_badge, styled_button,
    styled_button_with_icon,
};
use crate::attendance::attendance_rate;
use crate::models::{AttendanceStatus, StudentAttendance};

fn status_color(status: AttendanceStatus) -> Color32 {
    match status {
        AttendanceStatus::Present => colors::SUCCESS,
        AttendanceStatus::Absent => colors::ERROR,
        AttendanceStatus::Late => colors::WARNING,
    }
}

/// Students matching the course filter and the search box.
fn visible_students<'a>(
    students: &'a [StudentAttendance],
    course: Option<&str>,
    search: &str,
) -> Vec<&'a StudentAttendance> {
    students
        .iter()
        .filter(|s| course.is_none_or(|c| s.course == c))
        .filter(|s| crate::db::matches_term(search, &[&s.name, &s.email]))
        .collect()
}

/// Show the attendance panel.
///
/// Returns `true` if the back button was clicked.
pub fn show(app: &mut App, ui: &mut Ui) -> bool {
    let go_back = back_button(ui);

    panel_header(ui, "Présence", Some("Suivi de l'assiduité des étudiants"));

    // Date and filters
    ui.horizontal(|ui| {
        if styled_button(ui, CARET_LEFT).on_hover_text("Jour précédent").clicked() {
            app.attendance_date -= Duration::days(1);
        }
        ui.add(DatePickerButton::new(&mut app.attendance_date).id_salt("attendance_date"));
        if styled_button(ui, CARET_RIGHT).on_hover_text("Jour suivant").clicked() {
            app.attendance_date += Duration::days(1);
        }
        ui.label(RichText::new(app.attendance_date.format("%A %d/%m/%Y").to_string()).weak());

        ui.add_space(20.0);

        ui.label("Cours:");
        let mut courses: Vec<&str> = app.student_attendance.iter().map(|s| s.course.as_str()).collect();
        courses.sort_unstable();
        courses.dedup();
        egui::ComboBox::from_id_salt("attendance_course")
            .width(200.0)
            .selected_text(app.attendance_course.as_deref().unwrap_or("Tous les cours"))
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut app.attendance_course, None, "Tous les cours");
                for course in courses {
                    ui.selectable_value(&mut app.attendance_course, Some(course.to_string()), course);
                }
            });

        ui.add_space(20.0);

        ui.label("Rechercher:");
        ui.add(
            egui::TextEdit::singleline(&mut app.attendance_search)
                .desired_width(180.0)
                .hint_text("Nom ou email..."),
        );
    });

    ui.add_space(10.0);

    ui.horizontal(|ui| {
        if primary_button_with_icon(ui, CHECK_SQUARE, "Nouvelle présence").clicked() {
            app.open_attendance_dialog();
        }
        ui.add_space(10.0);
        if styled_button_with_icon(ui, FILE_XLS, "Exporter vers Excel").clicked() {
            app.export_attendance();
        }
    });

    ui.add_space(15.0);

    ScrollArea::vertical().id_salt("attendance_scroll").show(ui, |ui| {
        show_day_summary(app, ui);
        ui.add_space(15.0);
        show_student_table(app, ui);
        ui.add_space(15.0);
        show_daily_history(app, ui);
    });

    if app.new_attendance.is_some() {
        show_new_attendance_dialog(app, ui.ctx());
    }

    go_back
}

fn show_day_summary(app: &App, ui: &mut Ui) {
    let counts = app.current_sheet().map(|s| s.counts()).unwrap_or_default();
    let total = counts.total() as u32;

    ui.horizontal_wrapped(|ui| {
        stat_card(
            ui,
            "Présents",
            &counts.present.to_string(),
            &format!("{}%", attendance_rate(counts.present as u32, total)),
            colors::SUCCESS,
        );
        stat_card(
            ui,
            "Absents",
            &counts.absent.to_string(),
            &format!("{}%", attendance_rate(counts.absent as u32, total)),
            colors::ERROR,
        );
        stat_card(
            ui,
            "En retard",
            &counts.late.to_string(),
            &format!("{}%", attendance_rate(counts.late as u32, total)),
            colors::WARNING,
        );
        stat_card(
            ui,
            "Marqués",
            &total.to_string(),
            if total == 0 { "Aucune présence ce jour" } else { "étudiants" },
            colors::PRIMARY,
        );
    });
}

fn show_student_table(app: &App, ui: &mut Ui) {
    let students = visible_students(
        &app.student_attendance,
        app.attendance_course.as_deref(),
        &app.attendance_search,
    );
    let sheet = app.current_sheet();

    section(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.label(RichText::new("Historique par étudiant").strong());
        ui.add_space(8.0);

        egui::Grid::new("attendance_students_grid")
            .num_columns(7)
            .striped(true)
            .min_col_width(50.0)
            .spacing([14.0, 6.0])
            .show(ui, |ui| {
                ui.strong("Étudiant");
                ui.strong("Cours");
                ui.strong("Présent");
                ui.strong("Absent");
                ui.strong("Retard");
                ui.strong("Taux");
                ui.strong("Ce jour");
                ui.end_row();

                for student in &students {
                    ui.vertical(|ui| {
                        ui.label(&student.name);
                        ui.label(RichText::new(&student.email).small().weak());
                    });
                    ui.label(&student.course);
                    ui.colored_label(colors::SUCCESS, student.present.to_string());
                    ui.colored_label(colors::ERROR, student.absent.to_string());
                    ui.colored_label(colors::WARNING, student.late.to_string());
                    ui.label(format!(
                        "{}%",
                        attendance_rate(student.present, student.total_sessions())
                    ));
                    match sheet.and_then(|s| s.status_of(student.student_id)) {
                        Some(status) => status_badge(ui, status.label(), status_color(status)),
                        None => {
                            ui.label(RichText::new("-").weak());
                        }
                    }
                    ui.end_row();
                }
            });

        if students.is_empty() {
            ui.label(RichText::new("Aucun étudiant trouvé").weak());
        }
    });
}

fn show_daily_history(app: &App, ui: &mut Ui) {
    section(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.label(RichText::new("Historique journalier").strong());
        ui.add_space(8.0);

        egui::Grid::new("attendance_daily_grid")
            .num_columns(5)
            .striped(true)
            .spacing([20.0, 6.0])
            .show(ui, |ui| {
                ui.strong("Date");
                ui.strong("Présents");
                ui.strong("Absents");
                ui.strong("Retards");
                ui.strong("Taux de présence");
                ui.end_row();

                for day in app.attendance_history.iter().rev() {
                    let total = day.present + day.absent + day.late;
                    let selected = day.date == app.attendance_date;
                    let date = RichText::new(day.date.format("%d/%m/%Y").to_string());
                    ui.label(if selected { date.strong().color(colors::PRIMARY) } else { date });
                    ui.label(day.present.to_string());
                    ui.label(day.absent.to_string());
                    ui.label(day.late.to_string());
                    ui.label(format!("{}%", attendance_rate(day.present, total)));
                    ui.end_row();
                }
            });
    });
}

fn show_new_attendance_dialog(app: &mut App, ctx: &egui::Context) {
    let mut submit = false;
    let mut cancel = false;

    let student_ids: Vec<u32> = visible_students(&app.student_attendance, app.attendance_course.as_deref(), "")
        .iter()
        .map(|s| s.student_id)
        .collect();

    egui::Window::new(format!("Nouvelle présence - {}", app.attendance_date.format("%d/%m/%Y")))
        .collapsible(false)
        .resizable(false)
        .default_width(520.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            let Some(sheet) = app.new_attendance.as_mut() else {
                return;
            };

            ui.horizontal(|ui| {
                if styled_button(ui, "Tout présent").clicked() {
                    sheet.mark_all(student_ids.iter().copied(), AttendanceStatus::Present);
                }
                if styled_button(ui, "Tout absent").clicked() {
                    sheet.mark_all(student_ids.iter().copied(), AttendanceStatus::Absent);
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("{} / {} marqués", sheet.marked_count(), student_ids.len()));
                });
            });

            ui.add_space(10.0);

            ScrollArea::vertical().id_salt("new_attendance_scroll").max_height(360.0).show(ui, |ui| {
                egui::Grid::new("new_attendance_grid")
                    .num_columns(2)
                    .striped(true)
                    .spacing([20.0, 6.0])
                    .show(ui, |ui| {
                        for student in app
                            .student_attendance
                            .iter()
                            .filter(|s| student_ids.contains(&s.student_id))
                        {
                            ui.label(&student.name);
                            ui.horizontal(|ui| {
                                let current = sheet.status_of(student.student_id);
                                for status in AttendanceStatus::ALL {
                                    let text = RichText::new(status.label());
                                    let text = if current == Some(status) {
                                        text.color(status_color(status)).strong()
                                    } else {
                                        text
                                    };
                                    if ui.selectable_label(current == Some(status), text).clicked() {
                                        sheet.mark(student.student_id, status);
                                    }
                                }
                            });
                            ui.end_row();
                        }
                    });
            });

            ui.add_space(15.0);
            ui.separator();
            ui.add_space(10.0);

            ui.horizontal(|ui| {
                if styled_button(ui, "Annuler").clicked() {
                    cancel = true;
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let enabled = sheet.marked_count() > 0;
                    if ui
                        .add_enabled(enabled, egui::Button::new("Enregistrer la présence"))
                        .clicked()
                    {
                        submit = true;
                    }
                });
            });
        });

    if cancel {
        app.new_attendance = None;
    } else if submit {
        app.submit_attendance();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn test_visible_students_filters() {
        let students = fixtures::student_attendance();
        assert_eq!(visible_students(&students, None, "").len(), students.len());

        let course = students[0].course.clone();
        let by_course = visible_students(&students, Some(&course), "");
        assert!(!by_course.is_empty());
        assert!(by_course.iter().all(|s| s.course == course));

        let name = students[0].name.to_uppercase();
        let by_name = visible_students(&students, None, &name);
        assert!(by_name.iter().any(|s| s.student_id == students[0].student_id));
    }
}
