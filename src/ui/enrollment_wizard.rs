//! Three-step enrollment wizard: identity, photo, fees.

use eframe::egui::{self, RichText, Ui};
use egui_extras::DatePickerButton;
use egui_phosphor::regular::{ARROW_LEFT, ARROW_RIGHT, CAMERA, CHECK, X};

use super::app::App;
use super::components::{
    back_button, colors, field_error, panel_header, primary_button_with_icon, section, styled_button,
    styled_button_with_icon, text_field,
};
use crate::enrollment::{DeskPayment, ENROLLMENT_COURSES, EnrollmentForm, EnrollmentStep, Gender};
use crate::export;
use crate::receipt::TuitionPlan;
use crate::tuition::format_cfa;

/// Show the enrollment wizard.
///
/// Returns `true` when the wizard is left without enrolling.
pub fn show(app: &mut App, ui: &mut Ui) -> bool {
    let mut leave = back_button(ui);

    panel_header(ui, "Nouvelle inscription", Some("Inscrire un étudiant en trois étapes"));

    show_steps(&mut app.enrollment, ui);
    ui.add_space(15.0);

    let today = app.today();
    egui::ScrollArea::vertical()
        .id_salt("enrollment_scroll")
        .max_height(ui.available_height() - 60.0)
        .show(ui, |ui| {
            section(ui, |ui| {
                ui.set_min_width(ui.available_width());
                match app.enrollment.step {
                    EnrollmentStep::Info => show_info_step(&mut app.enrollment, ui, today),
                    EnrollmentStep::Photo => show_photo_step(&mut app.enrollment, ui),
                    EnrollmentStep::Tuition => show_tuition_step(&mut app.enrollment, ui),
                }
            });
        });

    ui.add_space(15.0);

    let mut submit = false;
    ui.horizontal(|ui| {
        if styled_button_with_icon(ui, X, "Annuler").clicked() {
            leave = true;
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let form = &mut app.enrollment;
            if form.is_last_step() {
                if primary_button_with_icon(ui, CHECK, "Valider l'inscription").clicked() {
                    submit = true;
                }
            } else if primary_button_with_icon(ui, ARROW_RIGHT, "Suivant").clicked() {
                form.next();
            }

            if form.step != EnrollmentStep::Info && styled_button_with_icon(ui, ARROW_LEFT, "Précédent").clicked() {
                form.back();
            }
        });
    });

    if submit {
        app.enroll_student();
    }

    if leave {
        app.enrollment = EnrollmentForm::new(app.config.fees.clone());
    }
    leave
}

/// Step indicator. Completed steps can be revisited.
fn show_steps(form: &mut EnrollmentForm, ui: &mut Ui) {
    ui.horizontal(|ui| {
        for (i, step) in EnrollmentStep::ALL.into_iter().enumerate() {
            if i > 0 {
                ui.label(RichText::new("›").weak());
            }
            let text = format!("{}. {}", step.number(), step.label());
            let label = if step == form.step {
                RichText::new(text).strong().color(colors::PRIMARY)
            } else if step < form.step {
                RichText::new(text).color(colors::SUCCESS)
            } else {
                RichText::new(text).weak()
            };

            let clickable = step < form.step;
            let response = ui.add_enabled(clickable || step == form.step, egui::Button::new(label).frame(false));
            if clickable && response.clicked() {
                form.go_to(step);
            }
        }
    });
}

fn show_info_step(form: &mut EnrollmentForm, ui: &mut Ui, today: chrono::NaiveDate) {
    ui.label(RichText::new("Informations personnelles").strong());
    ui.add_space(10.0);

    ui.columns(2, |columns| {
        text_field(&mut columns[0], "Prénom", &mut form.first_name, &mut form.errors, "first_name");
        text_field(&mut columns[1], "Nom", &mut form.last_name, &mut form.errors, "last_name");
    });
    ui.add_space(8.0);

    ui.columns(2, |columns| {
        text_field(&mut columns[0], "Email", &mut form.email, &mut form.errors, "email");
        text_field(&mut columns[1], "Téléphone", &mut form.phone, &mut form.errors, "phone");
    });
    ui.add_space(8.0);

    ui.columns(2, |columns| {
        let ui = &mut columns[0];
        ui.label("Genre");
        ui.horizontal(|ui| {
            for gender in Gender::ALL {
                if ui
                    .selectable_value(&mut form.gender, Some(gender), gender.label())
                    .clicked()
                {
                    form.errors.clear("gender");
                }
            }
        });
        field_error(ui, &form.errors, "gender");

        let ui = &mut columns[1];
        ui.label("Date de naissance");
        let mut date = form.birth_date.unwrap_or(today);
        if ui
            .add(DatePickerButton::new(&mut date).id_salt("enrollment_birth_date"))
            .changed()
        {
            form.birth_date = Some(date);
            form.errors.clear("birth_date");
        }
        field_error(ui, &form.errors, "birth_date");
    });
    ui.add_space(8.0);

    ui.label("Cours");
    egui::ComboBox::from_id_salt("enrollment_course")
        .width(260.0)
        .selected_text(if form.course.is_empty() {
            "Sélectionner un cours"
        } else {
            form.course.as_str()
        })
        .show_ui(ui, |ui| {
            for course in ENROLLMENT_COURSES {
                if ui
                    .selectable_value(&mut form.course, course.to_string(), course)
                    .clicked()
                {
                    form.errors.clear("course");
                }
            }
        });
    field_error(ui, &form.errors, "course");
}

fn show_photo_step(form: &mut EnrollmentForm, ui: &mut Ui) {
    ui.label(RichText::new("Photo d'identité").strong());
    ui.add_space(10.0);

    ui.vertical_centered(|ui| {
        match &form.photo {
            Some(path) => {
                ui.add(
                    egui::Image::new(format!("file://{}", path.display()))
                        .max_size(egui::vec2(180.0, 180.0))
                        .corner_radius(8),
                );
                ui.label(RichText::new(path.display().to_string()).small().weak());
            }
            None => {
                ui.label(RichText::new(CAMERA).size(64.0).weak());
                ui.label(RichText::new("Aucune photo sélectionnée").weak());
            }
        }

        ui.add_space(10.0);
        ui.horizontal(|ui| {
            if styled_button_with_icon(ui, CAMERA, "Choisir une photo").clicked()
                && let Some(path) = export::show_photo_dialog()
            {
                form.photo = Some(path);
            }
            if form.photo.is_some() && styled_button(ui, "Retirer").clicked() {
                form.photo = None;
            }
        });
        ui.label(RichText::new("Optionnel. Formats PNG ou JPEG.").small().weak());
    });
}

fn show_tuition_step(form: &mut EnrollmentForm, ui: &mut Ui) {
    let fees = form.fees().clone();

    ui.label(RichText::new("Frais à régler").strong());
    ui.add_space(10.0);

    ui.checkbox(
        &mut form.registration_fees,
        format!("Frais d'inscription ({})", format_cfa(fees.registration)),
    );
    ui.checkbox(
        &mut form.tuition_fees,
        format!("Frais de scolarité ({})", format_cfa(fees.tuition)),
    );

    if form.tuition_fees {
        ui.indent("tuition_plan", |ui| {
            for plan in TuitionPlan::ALL {
                let amount = match plan {
                    TuitionPlan::Full => fees.tuition,
                    TuitionPlan::Installment => fees.installment,
                };
                ui.radio_value(
                    &mut form.tuition_plan,
                    plan,
                    format!("{} ({})", plan.label(), format_cfa(amount)),
                );
            }
        });
    }

    ui.add_space(10.0);
    ui.label("Mode de paiement");
    ui.horizontal(|ui| {
        for method in DeskPayment::ALL {
            ui.selectable_value(&mut form.payment_method, method, method.label());
        }
    });

    ui.add_space(15.0);
    ui.separator();
    ui.add_space(10.0);

    egui::Grid::new("enrollment_totals")
        .num_columns(2)
        .spacing([30.0, 6.0])
        .show(ui, |ui| {
            ui.label("Étudiant:");
            ui.label(form.full_name());
            ui.end_row();

            ui.label("Cours:");
            ui.label(&form.course);
            ui.end_row();

            if form.tuition_fees {
                ui.label("Scolarité:");
                ui.label(format_cfa(form.tuition_amount()));
                ui.end_row();
            }

            ui.label(RichText::new("Total à payer:").strong());
            ui.label(
                RichText::new(format_cfa(form.total_amount()))
                    .strong()
                    .size(18.0)
                    .color(colors::PRIMARY),
            );
            ui.end_row();
        });
}
