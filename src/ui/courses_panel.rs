//! Course catalogue panel with CRUD and detail view.

use eframe::egui::{self, RichText, ScrollArea, Ui};
use egui_phosphor::regular::{EYE, FILE_XLS, PENCIL, PLUS, TRASH};

use super::app::{App, CourseForm, DeleteTarget, PAGE_SIZE};
use super::components::{
    action_button, back_button, colors, danger_action_button, pagination, panel_header, primary_button_with_icon,
    section, status_badge, styled_button, styled_button_with_icon,
};
use crate::db;
use crate::models::CourseStatus;
use crate::models::course::average_completion;
use crate::tuition::format_cfa;

/// Show the courses panel.
///
/// Returns `true` if the back button was clicked.
pub fn show(app: &mut App, ui: &mut Ui) -> bool {
    let go_back = back_button(ui);

    panel_header(ui, "Cours", Some("Catalogue des formations"));

    ui.horizontal(|ui| {
        if primary_button_with_icon(ui, PLUS, "Ajouter un cours").clicked() {
            app.course_form = CourseForm {
                is_open: true,
                ..Default::default()
            };
        }

        ui.add_space(10.0);

        if styled_button_with_icon(ui, FILE_XLS, "Exporter vers Excel").clicked() {
            app.export_courses();
        }

        ui.add_space(20.0);

        ui.label("Rechercher:");
        if ui
            .add(
                egui::TextEdit::singleline(&mut app.course_search)
                    .desired_width(200.0)
                    .hint_text("Nom ou code..."),
            )
            .changed()
        {
            app.course_page = 1;
        }
    });

    ui.add_space(15.0);

    show_table(app, ui);

    if app.selected_course.is_some() {
        show_detail_window(app, ui.ctx());
    }

    if app.course_form.is_open {
        show_form_dialog(app, ui.ctx());
    }

    go_back
}

fn show_table(app: &mut App, ui: &mut Ui) {
    let results = db::course::search(&app.store, &app.course_search);
    let page = db::paginate(&results, app.course_page, PAGE_SIZE);
    app.course_page = page.page;

    ui.label(format!("{} cours sur {}", page.total_items, app.store.courses.len()));
    ui.add_space(10.0);

    ScrollArea::vertical()
        .id_salt("courses_scroll")
        .max_height(ui.available_height() - 40.0)
        .show(ui, |ui| {
            egui::Grid::new("courses_grid")
                .num_columns(7)
                .striped(true)
                .min_col_width(50.0)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.strong("Code");
                    ui.strong("Nom");
                    ui.strong("Durée");
                    ui.strong("Étudiants");
                    ui.strong("Enseignant");
                    ui.strong("Statut");
                    ui.strong("Actions");
                    ui.end_row();

                    for course in page.items {
                        ui.label(RichText::new(&course.code).monospace());
                        ui.label(&course.name);
                        ui.label(course.duration_label());
                        ui.label(course.students.to_string());
                        ui.label(course.teacher.as_deref().unwrap_or("-"));
                        let color = match course.status {
                            CourseStatus::Active => colors::SUCCESS,
                            CourseStatus::Inactive => colors::NEUTRAL,
                        };
                        status_badge(ui, course.status.label(), color);

                        ui.horizontal(|ui| {
                            if action_button(ui, EYE, "Voir").clicked() {
                                app.selected_course = Some(course.id);
                            }
                            ui.add_space(4.0);
                            if action_button(ui, PENCIL, "Modifier").clicked() {
                                app.course_form = CourseForm::edit(course);
                            }
                            ui.add_space(4.0);
                            if danger_action_button(ui, TRASH, "Supprimer").clicked() {
                                app.delete_target = Some(DeleteTarget::Course(course.id, course.name.clone()));
                                app.show_delete_confirm = true;
                            }
                        });
                        ui.end_row();
                    }
                });

            if page.items.is_empty() {
                ui.add_space(10.0);
                ui.label(RichText::new("Aucun cours trouvé").weak());
            }
        });

    ui.add_space(10.0);
    pagination(ui, &mut app.course_page, page.total_pages);
}

fn show_detail_window(app: &mut App, ctx: &egui::Context) {
    let Some(course) = app
        .selected_course
        .and_then(|id| db::course::get_by_id(&app.store, id))
    else {
        app.selected_course = None;
        return;
    };

    let mut open = true;
    let progress = &app.reference.course_progress;

    egui::Window::new(format!("{} - {}", course.code, course.name))
        .open(&mut open)
        .collapsible(false)
        .default_width(520.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            if let Some(description) = &course.description {
                ui.label(description);
                ui.add_space(10.0);
            }

            section(ui, |ui| {
                egui::Grid::new("course_detail_grid")
                    .num_columns(2)
                    .spacing([20.0, 6.0])
                    .show(ui, |ui| {
                        ui.label("Durée:");
                        ui.label(course.duration_label());
                        ui.end_row();

                        ui.label("Étudiants:");
                        ui.label(course.students.to_string());
                        ui.end_row();

                        ui.label("Enseignant:");
                        ui.label(course.teacher.as_deref().unwrap_or("-"));
                        ui.end_row();

                        ui.label("Niveau:");
                        ui.label(course.level.as_deref().unwrap_or("-"));
                        ui.end_row();

                        ui.label("Prix:");
                        ui.label(course.price.map_or("-".to_string(), format_cfa));
                        ui.end_row();

                        ui.label("Modules:");
                        ui.label(course.modules.map_or("-".to_string(), |m| m.to_string()));
                        ui.end_row();

                        ui.label("Période:");
                        match (course.start_date, course.end_date) {
                            (Some(start), Some(end)) => {
                                ui.label(format!("{} - {}", start.format("%d/%m/%Y"), end.format("%d/%m/%Y")))
                            }
                            _ => ui.label("-"),
                        };
                        ui.end_row();
                    });
            });

            ui.add_space(10.0);
            ui.horizontal(|ui| {
                ui.label(RichText::new("Progression").strong());
                ui.label(RichText::new(format!("moyenne {:.0}%", average_completion(progress))).weak());
            });
            egui::Grid::new("course_progress_detail")
                .num_columns(3)
                .spacing([15.0, 6.0])
                .show(ui, |ui| {
                    for month in progress {
                        ui.label(&month.month);
                        ui.label(format!("{} étudiants", month.students));
                        ui.add(
                            egui::ProgressBar::new(month.completion as f32 / 100.0)
                                .desired_width(180.0)
                                .text(format!("{}%", month.completion)),
                        );
                        ui.end_row();
                    }
                });
        });

    if !open {
        app.selected_course = None;
    }
}

fn show_form_dialog(app: &mut App, ctx: &egui::Context) {
    let title = if app.course_form.is_editing {
        "Modifier le cours"
    } else {
        "Ajouter un cours"
    };
    let teacher_names: Vec<String> = app.store.teachers.iter().map(|t| t.name.clone()).collect();

    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .default_width(450.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.add_space(10.0);

            egui::Grid::new("course_form_grid")
                .num_columns(2)
                .spacing([20.0, 10.0])
                .show(ui, |ui| {
                    let form = &mut app.course_form;

                    ui.label("Nom:");
                    ui.add(egui::TextEdit::singleline(&mut form.name).desired_width(250.0));
                    ui.end_row();

                    ui.label("Code:");
                    ui.add(
                        egui::TextEdit::singleline(&mut form.code)
                            .desired_width(120.0)
                            .hint_text("WEB101"),
                    );
                    ui.end_row();

                    ui.label("Durée (semaines):");
                    ui.add(egui::TextEdit::singleline(&mut form.duration_input).desired_width(80.0));
                    ui.end_row();

                    ui.label("Enseignant:");
                    egui::ComboBox::from_id_salt("course_form_teacher")
                        .width(250.0)
                        .selected_text(if form.teacher.is_empty() { "Aucun" } else { form.teacher.as_str() })
                        .show_ui(ui, |ui| {
                            ui.selectable_value(&mut form.teacher, String::new(), "Aucun");
                            for name in &teacher_names {
                                ui.selectable_value(&mut form.teacher, name.clone(), name);
                            }
                        });
                    ui.end_row();

                    ui.label("Prix (CFA):");
                    ui.add(
                        egui::TextEdit::singleline(&mut form.price_input)
                            .desired_width(120.0)
                            .hint_text("Optionnel"),
                    );
                    ui.end_row();

                    ui.label("Description:");
                    ui.add(
                        egui::TextEdit::multiline(&mut form.description)
                            .desired_rows(3)
                            .desired_width(250.0),
                    );
                    ui.end_row();

                    if form.is_editing {
                        ui.label("Statut:");
                        ui.horizontal(|ui| {
                            for status in CourseStatus::ALL {
                                ui.selectable_value(&mut form.status, status, status.label());
                            }
                        });
                        ui.end_row();
                    }
                });

            ui.add_space(15.0);
            ui.separator();
            ui.add_space(10.0);

            ui.horizontal(|ui| {
                if styled_button(ui, "Annuler").clicked() {
                    app.course_form.reset();
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if primary_button_with_icon(ui, "", "Enregistrer").clicked() {
                        app.save_course();
                    }
                });
            });
        });
}
