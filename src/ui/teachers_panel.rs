//! Teacher management panel with CRUD, search and detail view.

use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use egui_extras::DatePickerButton;
use egui_phosphor::regular::{EYE, FILE_XLS, PENCIL, PLUS, STAR, TRASH};

use super::app::{App, DeleteTarget, PAGE_SIZE, TeacherForm};
use super::components::{
    action_button, back_button, colors, danger_action_button, pagination, panel_header, primary_button_with_icon,
    section, status_badge, styled_button, styled_button_with_icon,
};
use crate::db;
use crate::models::TeacherStatus;

fn status_color(status: TeacherStatus) -> Color32 {
    match status {
        TeacherStatus::Active => colors::SUCCESS,
        TeacherStatus::Inactive => colors::NEUTRAL,
    }
}

/// Show the teachers panel.
///
/// Returns `true` if the back button was clicked.
pub fn show(app: &mut App, ui: &mut Ui) -> bool {
    let go_back = back_button(ui);

    panel_header(ui, "Enseignants", Some("Gérez l'équipe pédagogique"));

    ui.horizontal(|ui| {
        if primary_button_with_icon(ui, PLUS, "Ajouter un enseignant").clicked() {
            app.teacher_form = TeacherForm {
                hire_date: Some(app.today()),
                is_open: true,
                ..Default::default()
            };
        }

        ui.add_space(10.0);

        if styled_button_with_icon(ui, FILE_XLS, "Exporter vers Excel").clicked() {
            app.export_teachers();
        }

        ui.add_space(20.0);

        ui.label("Rechercher:");
        if ui
            .add(
                egui::TextEdit::singleline(&mut app.teacher_search)
                    .desired_width(220.0)
                    .hint_text("Nom, email ou matière..."),
            )
            .changed()
        {
            app.teacher_page = 1;
        }
    });

    ui.add_space(15.0);

    show_table(app, ui);

    if app.selected_teacher.is_some() {
        show_detail_window(app, ui.ctx());
    }

    if app.teacher_form.is_open {
        show_form_dialog(app, ui.ctx());
    }

    go_back
}

fn show_table(app: &mut App, ui: &mut Ui) {
    let results = db::teacher::search(&app.store, &app.teacher_search);
    let page = db::paginate(&results, app.teacher_page, PAGE_SIZE);
    app.teacher_page = page.page;

    ui.label(format!(
        "{} enseignant(s) affiché(s) sur {}",
        page.total_items,
        app.store.teachers.len()
    ));
    ui.add_space(10.0);

    ScrollArea::vertical()
        .id_salt("teachers_scroll")
        .max_height(ui.available_height() - 40.0)
        .show(ui, |ui| {
            egui::Grid::new("teachers_grid")
                .num_columns(6)
                .striped(true)
                .min_col_width(60.0)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.strong("Nom");
                    ui.strong("Email");
                    ui.strong("Matière");
                    ui.strong("Téléphone");
                    ui.strong("Statut");
                    ui.strong("Actions");
                    ui.end_row();

                    for teacher in page.items {
                        ui.label(&teacher.name);
                        ui.label(&teacher.email);
                        ui.label(&teacher.subject);
                        ui.label(teacher.phone.as_deref().unwrap_or("-"));
                        status_badge(ui, teacher.status.label(), status_color(teacher.status));

                        ui.horizontal(|ui| {
                            if action_button(ui, EYE, "Voir").clicked() {
                                app.selected_teacher = Some(teacher.id);
                            }
                            ui.add_space(4.0);
                            if action_button(ui, PENCIL, "Modifier").clicked() {
                                app.teacher_form = TeacherForm::edit(teacher);
                            }
                            ui.add_space(4.0);
                            if danger_action_button(ui, TRASH, "Supprimer").clicked() {
                                app.delete_target = Some(DeleteTarget::Teacher(teacher.id, teacher.name.clone()));
                                app.show_delete_confirm = true;
                            }
                        });
                        ui.end_row();
                    }
                });

            if page.items.is_empty() {
                ui.add_space(10.0);
                ui.label(RichText::new("Aucun enseignant trouvé").weak());
            }
        });

    ui.add_space(10.0);
    pagination(ui, &mut app.teacher_page, page.total_pages);
}

fn show_detail_window(app: &mut App, ctx: &egui::Context) {
    let Some(teacher) = app
        .selected_teacher
        .and_then(|id| db::teacher::get_by_id(&app.store, id))
    else {
        app.selected_teacher = None;
        return;
    };

    let mut open = true;

    egui::Window::new(format!("Enseignant: {}", teacher.name))
        .open(&mut open)
        .collapsible(false)
        .default_width(520.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            section(ui, |ui| {
                egui::Grid::new("teacher_detail_grid")
                    .num_columns(2)
                    .spacing([20.0, 6.0])
                    .show(ui, |ui| {
                        ui.label("Email:");
                        ui.label(&teacher.email);
                        ui.end_row();

                        ui.label("Matière:");
                        ui.label(&teacher.subject);
                        ui.end_row();

                        ui.label("Statut:");
                        status_badge(ui, teacher.status.label(), status_color(teacher.status));
                        ui.end_row();

                        ui.label("Téléphone:");
                        ui.label(teacher.phone.as_deref().unwrap_or("-"));
                        ui.end_row();

                        ui.label("Adresse:");
                        ui.label(teacher.address.as_deref().unwrap_or("-"));
                        ui.end_row();

                        ui.label("Embauche:");
                        ui.label(
                            teacher
                                .hire_date
                                .map_or("-".to_string(), |d| d.format("%d/%m/%Y").to_string()),
                        );
                        ui.end_row();

                        ui.label("Formation:");
                        ui.label(teacher.education.as_deref().unwrap_or("-"));
                        ui.end_row();

                        ui.label("Expérience:");
                        ui.label(teacher.experience.as_deref().unwrap_or("-"));
                        ui.end_row();
                    });
            });

            ui.add_space(10.0);
            ui.label(RichText::new("Cours enseignés").strong());
            egui::Grid::new("teacher_courses_grid")
                .num_columns(3)
                .striped(true)
                .spacing([20.0, 4.0])
                .show(ui, |ui| {
                    for course in &app.reference.taught_courses {
                        ui.label(&course.name);
                        ui.label(format!("{} étudiants", course.students));
                        ui.label(RichText::new(&course.schedule).weak());
                        ui.end_row();
                    }
                });

            ui.add_space(10.0);
            ui.label(RichText::new("Évaluations").strong());
            egui::Grid::new("teacher_ratings_grid")
                .num_columns(3)
                .striped(true)
                .spacing([20.0, 4.0])
                .show(ui, |ui| {
                    for rating in &app.reference.teacher_ratings {
                        ui.label(&rating.month);
                        ui.label(RichText::new(format!("{} {:.1}", STAR, rating.rating)).color(colors::WARNING));
                        ui.label(RichText::new(format!("{} avis", rating.feedback)).weak());
                        ui.end_row();
                    }
                });
        });

    if !open {
        app.selected_teacher = None;
    }
}

fn show_form_dialog(app: &mut App, ctx: &egui::Context) {
    let title = if app.teacher_form.is_editing {
        "Modifier l'enseignant"
    } else {
        "Ajouter un enseignant"
    };
    let today = app.today();

    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .default_width(450.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.add_space(10.0);

            egui::Grid::new("teacher_form_grid")
                .num_columns(2)
                .spacing([20.0, 10.0])
                .show(ui, |ui| {
                    let form = &mut app.teacher_form;

                    ui.label("Nom complet:");
                    ui.add(egui::TextEdit::singleline(&mut form.name).desired_width(250.0));
                    ui.end_row();

                    ui.label("Email:");
                    ui.add(egui::TextEdit::singleline(&mut form.email).desired_width(250.0));
                    ui.end_row();

                    ui.label("Matière:");
                    ui.add(egui::TextEdit::singleline(&mut form.subject).desired_width(250.0));
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

                    ui.label("Formation:");
                    ui.add(
                        egui::TextEdit::singleline(&mut form.education)
                            .desired_width(250.0)
                            .hint_text("Diplôme le plus élevé"),
                    );
                    ui.end_row();

                    if !form.is_editing {
                        ui.label("Date d'embauche:");
                        let mut date = form.hire_date.unwrap_or(today);
                        if ui
                            .add(DatePickerButton::new(&mut date).id_salt("teacher_hire_date"))
                            .changed()
                        {
                            form.hire_date = Some(date);
                        }
                        ui.end_row();
                    }

                    if form.is_editing {
                        ui.label("Statut:");
                        ui.horizontal(|ui| {
                            for status in TeacherStatus::ALL {
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
                    app.teacher_form.reset();
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if primary_button_with_icon(ui, "", "Enregistrer").clicked() {
                        app.save_teacher();
                    }
                });
            });
        });
}
