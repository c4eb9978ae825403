//! Login and sign-up pages.

use eframe::egui::{self, RichText, Ui};

use crate::registration::{ORGANIZATION_SIZES, RegisterForm, RegisterStep};
use crate::validation::password_strength_label;

use super::app::{App, Panel};
use super::components::{colors, field_error, primary_button_with_icon, section, text_field};

/// Show the page for `app.current_panel`. Returns a panel to switch to.
pub fn show(app: &mut App, ui: &mut Ui) -> Option<Panel> {
    let mut next = None;

    egui::ScrollArea::vertical().id_salt("auth_scroll").show(ui, |ui| {
        ui.vertical_centered(|ui| {
            ui.set_max_width(460.0);
            ui.add_space(30.0);
            next = match app.current_panel {
                Panel::Register => show_register(app, ui),
                _ => show_login(app, ui),
            };
        });
    });

    next
}

fn show_login(app: &mut App, ui: &mut Ui) -> Option<Panel> {
    let mut next = None;

    ui.heading(RichText::new("Connexion").size(26.0).strong());
    ui.label(RichText::new("Accédez à votre tableau de bord").weak());
    ui.add_space(20.0);

    section(ui, |ui| {
        ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
            let form = &mut app.login_form;
            text_field(ui, "Email", &mut form.email, &mut form.errors, "email");
            ui.add_space(8.0);

            ui.label("Mot de passe");
            ui.horizontal(|ui| {
                if ui
                    .add(
                        egui::TextEdit::singleline(&mut form.password)
                            .password(!form.show_password)
                            .desired_width(220.0),
                    )
                    .changed()
                {
                    form.errors.clear("password");
                }
                let icon = if form.show_password {
                    egui_phosphor::regular::EYE_SLASH
                } else {
                    egui_phosphor::regular::EYE
                };
                if ui.small_button(icon).clicked() {
                    form.show_password = !form.show_password;
                }
            });
            field_error(ui, &form.errors, "password");
            ui.add_space(8.0);

            ui.checkbox(&mut form.remember_me, "Se souvenir de moi");
            ui.add_space(12.0);

            if app.login_pending {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Connexion en cours...");
                });
            } else if primary_button_with_icon(ui, egui_phosphor::regular::SIGN_IN, "Se connecter").clicked() {
                app.start_login();
            }
        });
    });

    ui.add_space(15.0);
    ui.horizontal(|ui| {
        ui.label("Pas encore de compte ?");
        if ui.link("Créer un compte").clicked() {
            next = Some(Panel::Register);
        }
    });

    next
}

fn show_register(app: &mut App, ui: &mut Ui) -> Option<Panel> {
    let mut next = None;

    ui.heading(RichText::new("Créer un compte").size(26.0).strong());
    ui.add_space(10.0);

    // Step indicator
    ui.horizontal(|ui| {
        for step in RegisterStep::ALL {
            let color = if step <= app.register_form.step {
                colors::PRIMARY
            } else {
                colors::NEUTRAL
            };
            ui.label(RichText::new(step.title()).color(color).strong());
            if step != RegisterStep::Security {
                ui.label(RichText::new("›").color(colors::NEUTRAL));
            }
        }
    });
    ui.label(RichText::new(app.register_form.step.description()).weak());
    ui.add_space(15.0);

    section(ui, |ui| {
        ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
            register_step_fields(ui, &mut app.register_form);
        });
    });

    ui.add_space(15.0);
    ui.horizontal(|ui| {
        if app.register_form.step != RegisterStep::Organization && ui.button("< Retour").clicked() {
            app.register_form.back();
        }

        if app.register_pending {
            ui.spinner();
            ui.label("Création du compte...");
        } else if app.register_form.step == RegisterStep::Security {
            if primary_button_with_icon(ui, egui_phosphor::regular::USER_PLUS, "Créer mon compte").clicked() {
                app.start_register();
            }
        } else if primary_button_with_icon(ui, "", "Suivant >").clicked() {
            app.register_form.next();
        }
    });

    ui.add_space(15.0);
    ui.horizontal(|ui| {
        ui.label("Déjà inscrit ?");
        if ui.link("Se connecter").clicked() {
            next = Some(Panel::Login);
        }
    });

    next
}

/// Inputs of the current sign-up step.
pub fn register_step_fields(ui: &mut Ui, form: &mut RegisterForm) {
    match form.step {
        RegisterStep::Organization => {
            text_field(ui, "Nom de l'établissement *", &mut form.organization, &mut form.errors, "organization");
            ui.add_space(8.0);

            ui.label("Taille de l'établissement");
            let selected = ORGANIZATION_SIZES
                .iter()
                .find(|(value, _)| *value == form.size)
                .map_or("Sélectionnez", |(_, label)| *label);
            egui::ComboBox::from_id_salt("register_size")
                .selected_text(selected)
                .width(260.0)
                .show_ui(ui, |ui| {
                    for (value, label) in ORGANIZATION_SIZES {
                        ui.selectable_value(&mut form.size, value.to_string(), label);
                    }
                });
            ui.add_space(8.0);

            text_field(ui, "Site web", &mut form.website, &mut form.errors, "website");
        }
        RegisterStep::Account => {
            text_field(ui, "Nom complet *", &mut form.full_name, &mut form.errors, "full_name");
            ui.add_space(8.0);
            text_field(ui, "Email professionnel *", &mut form.email, &mut form.errors, "email");
            ui.add_space(8.0);
            text_field(ui, "Téléphone", &mut form.phone, &mut form.errors, "phone");
        }
        RegisterStep::Security => {
            ui.label("Mot de passe *");
            ui.horizontal(|ui| {
                if ui
                    .add(
                        egui::TextEdit::singleline(&mut form.password)
                            .password(!form.show_password)
                            .desired_width(220.0),
                    )
                    .changed()
                {
                    form.errors.clear("password");
                }
                if ui.small_button(egui_phosphor::regular::EYE).clicked() {
                    form.show_password = !form.show_password;
                }
            });
            field_error(ui, &form.errors, "password");

            if !form.password.is_empty() {
                let strength = form.password_strength();
                let color = match strength {
                    0..=1 => colors::ERROR,
                    2 => colors::WARNING,
                    _ => colors::SUCCESS,
                };
                ui.add(
                    egui::ProgressBar::new(f32::from(strength) / 4.0)
                        .desired_width(260.0)
                        .fill(color),
                );
                ui.label(RichText::new(password_strength_label(strength)).small().color(color));
            }
            ui.add_space(8.0);

            ui.label("Confirmer le mot de passe *");
            if ui
                .add(
                    egui::TextEdit::singleline(&mut form.confirm_password)
                        .password(!form.show_password)
                        .desired_width(260.0),
                )
                .changed()
            {
                form.errors.clear("confirm_password");
            }
            field_error(ui, &form.errors, "confirm_password");
            ui.add_space(8.0);

            if ui
                .checkbox(&mut form.agree_terms, "J'accepte les conditions d'utilisation")
                .changed()
            {
                form.errors.clear("agree_terms");
            }
            field_error(ui, &form.errors, "agree_terms");
        }
    }
}
