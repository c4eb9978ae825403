//! Student list with search, pagination, detail view and edit dialog.

use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use egui_extras::DatePickerButton;
use egui_phosphor::regular::{EYE, FILE_XLS, PENCIL, TRASH, USER_PLUS};

use super::app::{App, DeleteTarget, PAGE_SIZE, Panel, StudentForm};
use super::components::{
    action_button, back_button, colors, danger_action_button, pagination, panel_header, primary_button_with_icon,
    section, status_badge, styled_button, styled_button_with_icon,
};
use crate::attendance::attendance_rate;
use crate::db;
use crate::models::StudentStatus;
use crate::models::student::grade_summary;

pub fn status_color(status: StudentStatus) -> Color32 {
    match status {
        StudentStatus::Active => colors::SUCCESS,
        StudentStatus::Graduated => colors::PRIMARY,
        StudentStatus::Inactive => colors::NEUTRAL,
    }
}

/// Show the students panel.
///
/// Returns `Some(panel)` if navigation is requested.
pub fn show(app: &mut App, ui: &mut Ui) -> Option<Panel> {
    let mut next = None;

    if back_button(ui) {
        next = Some(Panel::Dashboard);
    }

    panel_header(
        ui,
        "Étudiants",
        Some(&format!("{} étudiants inscrits", app.store.students.len())),
    );

    // Toolbar
    ui.horizontal(|ui| {
        if primary_button_with_icon(ui, USER_PLUS, "Ajouter un étudiant").clicked() {
            next = Some(Panel::AddStudent);
        }

        ui.add_space(10.0);

        if styled_button_with_icon(ui, FILE_XLS, "Exporter vers Excel").clicked() {
            app.export_students();
        }

        ui.add_space(20.0);

        ui.label("Rechercher:");
        if ui
            .add(
                egui::TextEdit::singleline(&mut app.student_search)
                    .desired_width(220.0)
                    .hint_text("Nom, email ou cours..."),
            )
            .changed()
        {
            app.student_page = 1;
        }
        if !app.student_search.is_empty() && styled_button(ui, "Effacer").clicked() {
            app.student_search.clear();
            app.student_page = 1;
        }
    });

    ui.add_space(15.0);

    show_table(app, ui);

    if app.selected_student.is_some() {
        show_detail_window(app, ui.ctx());
    }

    if app.student_form.is_open {
        show_form_dialog(app, ui.ctx());
    }

    next
}

fn show_table(app: &mut App, ui: &mut Ui) {
    let results = db::student::search(&app.store, &app.student_search);
    let page = db::paginate(&results, app.student_page, PAGE_SIZE);
    app.student_page = page.page;

    ui.label(format!(
        "{} résultat(s) sur {} étudiants",
        page.total_items,
        app.store.students.len()
    ));
    ui.add_space(10.0);

    ScrollArea::vertical()
        .id_salt("students_scroll")
        .max_height(ui.available_height() - 40.0)
        .show(ui, |ui| {
            egui::Grid::new("students_grid")
                .num_columns(6)
                .striped(true)
                .min_col_width(50.0)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.strong("");
                    ui.strong("Nom");
                    ui.strong("Email");
                    ui.strong("Cours");
                    ui.strong("Statut");
                    ui.strong("Actions");
                    ui.end_row();

                    for student in page.items {
                        ui.label(RichText::new(student.initials()).strong().color(colors::PRIMARY));
                        ui.label(&student.name);
                        ui.label(&student.email);
                        ui.label(&student.course);
                        status_badge(ui, student.status.label(), status_color(student.status));

                        ui.horizontal(|ui| {
                            if action_button(ui, EYE, "Voir").clicked() {
                                app.selected_student = Some(student.id);
                            }
                            ui.add_space(4.0);
                            if action_button(ui, PENCIL, "Modifier").clicked() {
                                app.student_form = StudentForm::edit(student);
                            }
                            ui.add_space(4.0);
                            if danger_action_button(ui, TRASH, "Supprimer").clicked() {
                                app.delete_target = Some(DeleteTarget::Student(student.id, student.name.clone()));
                                app.show_delete_confirm = true;
                            }
                        });
                        ui.end_row();
                    }
                });

            if page.items.is_empty() {
                ui.add_space(10.0);
                ui.label(RichText::new("Aucun étudiant trouvé").weak());
            }
        });

    ui.add_space(10.0);
    pagination(ui, &mut app.student_page, page.total_pages);
}

fn show_detail_window(app: &mut App, ctx: &egui::Context) {
    let Some(student) = app
        .selected_student
        .and_then(|id| db::student::get_by_id(&app.store, id))
    else {
        app.selected_student = None;
        return;
    };

    let mut open = true;
    let mut edit = false;

    egui::Window::new(format!("Étudiant: {}", student.name))
        .open(&mut open)
        .collapsible(false)
        .resizable(true)
        .default_width(560.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ScrollArea::vertical().id_salt("student_detail_scroll").max_height(520.0).show(ui, |ui| {
                section(ui, |ui| {
                    egui::Grid::new("student_detail_grid")
                        .num_columns(2)
                        .spacing([20.0, 6.0])
                        .show(ui, |ui| {
                            ui.label("Email:");
                            ui.label(&student.email);
                            ui.end_row();

                            ui.label("Cours:");
                            ui.label(&student.course);
                            ui.end_row();

                            ui.label("Statut:");
                            status_badge(ui, student.status.label(), status_color(student.status));
                            ui.end_row();

                            ui.label("Téléphone:");
                            ui.label(student.phone.as_deref().unwrap_or("-"));
                            ui.end_row();

                            ui.label("Adresse:");
                            ui.label(student.address.as_deref().unwrap_or("-"));
                            ui.end_row();

                            ui.label("Date de naissance:");
                            ui.label(
                                student
                                    .birth_date
                                    .map_or("-".to_string(), |d| d.format("%d/%m/%Y").to_string()),
                            );
                            ui.end_row();

                            ui.label("Inscription:");
                            ui.label(
                                student
                                    .enrollment_date
                                    .map_or("-".to_string(), |d| d.format("%d/%m/%Y").to_string()),
                            );
                            ui.end_row();

                            ui.label("Niveau:");
                            ui.label(student.grade.as_deref().unwrap_or("-"));
                            ui.end_row();
                        });
                });

                ui.add_space(10.0);
                ui.label(RichText::new("Notes").strong());
                let grades = &app.reference.student_grades;
                if let Some((average, best, worst)) = grade_summary(grades) {
                    ui.label(
                        RichText::new(format!(
                            "Moyenne {:.1} · Meilleure {} · Plus basse {}",
                            average, best, worst
                        ))
                        .weak(),
                    );
                }
                egui::Grid::new("student_grades_grid")
                    .num_columns(3)
                    .striped(true)
                    .spacing([20.0, 4.0])
                    .show(ui, |ui| {
                        ui.strong("Module");
                        ui.strong("Note");
                        ui.strong("Date");
                        ui.end_row();
                        for grade in grades {
                            ui.label(&grade.course);
                            ui.label(format!("{}/{}", grade.grade, grade.max_grade));
                            ui.label(grade.date.format("%d/%m/%Y").to_string());
                            ui.end_row();
                        }
                    });

                ui.add_space(10.0);
                ui.label(RichText::new("Présence mensuelle").strong());
                egui::Grid::new("student_monthly_grid")
                    .num_columns(5)
                    .striped(true)
                    .spacing([20.0, 4.0])
                    .show(ui, |ui| {
                        ui.strong("Mois");
                        ui.strong("Présent");
                        ui.strong("Absent");
                        ui.strong("Retard");
                        ui.strong("Taux");
                        ui.end_row();
                        for month in &app.reference.monthly_attendance {
                            let total = month.present + month.absent + month.late;
                            ui.label(&month.month);
                            ui.colored_label(colors::SUCCESS, month.present.to_string());
                            ui.colored_label(colors::ERROR, month.absent.to_string());
                            ui.colored_label(colors::WARNING, month.late.to_string());
                            ui.label(format!("{}%", attendance_rate(month.present, total)));
                            ui.end_row();
                        }
                    });
            });

            ui.add_space(10.0);
            if styled_button_with_icon(ui, PENCIL, "Modifier").clicked() {
                edit = true;
            }
        });

    if edit {
        app.student_form = StudentForm::edit(student);
        open = false;
    }
    if !open {
        app.selected_student = None;
    }
}

fn show_form_dialog(app: &mut App, ctx: &egui::Context) {
    let course_names = db::course::active_names(&app.store);
    let today = app.today();

    egui::Window::new("Modifier l'étudiant")
        .collapsible(false)
        .resizable(false)
        .default_width(450.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.add_space(10.0);

            egui::Grid::new("student_form_grid")
                .num_columns(2)
                .spacing([20.0, 10.0])
                .show(ui, |ui| {
                    let form = &mut app.student_form;

                    ui.label("Nom complet:");
                    ui.add(egui::TextEdit::singleline(&mut form.name).desired_width(250.0));
                    ui.end_row();

                    ui.label("Email:");
                    ui.add(egui::TextEdit::singleline(&mut form.email).desired_width(250.0));
                    ui.end_row();

                    ui.label("Cours:");
                    egui::ComboBox::from_id_salt("student_form_course")
                        .width(250.0)
                        .selected_text(form.course.as_str())
                        .show_ui(ui, |ui| {
                            for name in &course_names {
                                ui.selectable_value(&mut form.course, name.clone(), name);
                            }
                        });
                    ui.end_row();

                    ui.label("Téléphone:");
                    ui.add(
                        egui::TextEdit::singleline(&mut form.phone)
                            .desired_width(180.0)
                            .hint_text("+237 6XX XX XX XX"),
                    );
                    ui.end_row();

                    ui.label("Adresse:");
                    ui.add(egui::TextEdit::singleline(&mut form.address).desired_width(250.0));
                    ui.end_row();

                    ui.label("Date de naissance:");
                    ui.horizontal(|ui| {
                        let mut date = form.birth_date.unwrap_or(today);
                        if ui
                            .add(DatePickerButton::new(&mut date).id_salt("student_birth_date"))
                            .changed()
                        {
                            form.birth_date = Some(date);
                        }
                        if form.birth_date.is_some() && ui.small_button("Effacer").clicked() {
                            form.birth_date = None;
                        }
                    });
                    ui.end_row();

                    ui.label("Statut:");
                    ui.horizontal(|ui| {
                        for status in StudentStatus::ALL {
                            ui.selectable_value(&mut form.status, status, status.label());
                        }
                    });
                    ui.end_row();
                });

            ui.add_space(15.0);
            ui.separator();
            ui.add_space(10.0);

            ui.horizontal(|ui| {
                if styled_button(ui, "Annuler").clicked() {
                    app.student_form.reset();
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if primary_button_with_icon(ui, "", "Enregistrer").clicked() {
                        app.save_student();
                    }
                });
            });
        });
}
