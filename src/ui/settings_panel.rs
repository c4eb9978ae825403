//! Settings panel: profile, preferences, school identity, fees and team.

use eframe::egui::{self, RichText, Ui};
use egui_phosphor::regular::{ENVELOPE_SIMPLE, FLOPPY_DISK, TRASH, USER_PLUS};

use super::app::{App, DeleteTarget, InviteForm, SettingsTab};
use super::components::{
    back_button, colors, danger_action_button, panel_header, primary_button_with_icon, section, status_badge,
    styled_button, styled_button_with_icon,
};
use crate::config::{AppConfig, StartView, Theme};
use crate::db;
use crate::models::StaffStatus;
use crate::models::staff::ROLES;
use crate::validation::{password_strength, password_strength_label};

const LANGUAGES: [&str; 2] = ["Français", "English"];
const THEMES: [Theme; 3] = [Theme::Light, Theme::Dark, Theme::System];

fn start_view_label(view: StartView) -> &'static str {
    match view {
        StartView::Site => "Site public",
        StartView::Admin => "Tableau de bord",
    }
}

/// Show the settings panel.
///
/// Returns `true` if the back button was clicked.
pub fn show(app: &mut App, ui: &mut Ui) -> bool {
    let go_back = back_button(ui);

    panel_header(ui, "Paramètres", Some("Profil, préférences et équipe"));

    ui.horizontal(|ui| {
        ui.selectable_value(&mut app.settings_tab, SettingsTab::General, "Général");
        ui.selectable_value(&mut app.settings_tab, SettingsTab::Team, "Équipe");
    });
    ui.add_space(10.0);

    egui::ScrollArea::vertical().id_salt("settings_scroll").show(ui, |ui| match app.settings_tab {
        SettingsTab::General => show_general(app, ui),
        SettingsTab::Team => show_team(app, ui),
    });

    if app.invite_form.is_open {
        show_invite_dialog(app, ui.ctx());
    }

    go_back
}

fn show_general(app: &mut App, ui: &mut Ui) {
    // Profile
    section(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.heading("Profil");
        ui.add_space(5.0);

        egui::Grid::new("profile_grid")
            .num_columns(2)
            .spacing([10.0, 8.0])
            .show(ui, |ui| {
                let profile = &mut app.profile;

                ui.label("Nom:");
                ui.text_edit_singleline(&mut profile.name);
                ui.end_row();

                ui.label("Email:");
                ui.text_edit_singleline(&mut profile.email);
                ui.end_row();

                ui.label("Téléphone:");
                ui.text_edit_singleline(&mut profile.phone);
                ui.end_row();

                ui.label("Poste:");
                ui.text_edit_singleline(&mut profile.position);
                ui.end_row();
            });
    });

    ui.add_space(15.0);

    // Preferences
    section(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.heading("Préférences");
        ui.add_space(5.0);

        egui::Grid::new("preferences_grid")
            .num_columns(2)
            .spacing([10.0, 8.0])
            .show(ui, |ui| {
                let prefs = &mut app.config.ui;
                let mut changed = false;

                ui.label("Langue:");
                egui::ComboBox::from_id_salt("settings_language")
                    .selected_text(prefs.language.as_str())
                    .show_ui(ui, |ui| {
                        for language in LANGUAGES {
                            changed |= ui
                                .selectable_value(&mut prefs.language, language.to_string(), language)
                                .changed();
                        }
                    });
                ui.end_row();

                ui.label("Apparence:");
                ui.horizontal(|ui| {
                    for theme in THEMES {
                        changed |= ui.selectable_value(&mut prefs.theme, theme, theme.label()).changed();
                    }
                });
                ui.end_row();

                ui.label("Ouverture:");
                ui.horizontal(|ui| {
                    for view in [StartView::Site, StartView::Admin] {
                        changed |= ui
                            .selectable_value(&mut prefs.start_view, view, start_view_label(view))
                            .changed();
                    }
                });
                ui.end_row();

                ui.label("Notifications:");
                ui.vertical(|ui| {
                    changed |= ui.checkbox(&mut prefs.notifications_email, "Par email").changed();
                    changed |= ui.checkbox(&mut prefs.notifications_push, "Notifications push").changed();
                    changed |= ui.checkbox(&mut prefs.course_reminders, "Rappels de cours").changed();
                });
                ui.end_row();

                if changed {
                    app.config_modified = true;
                }
            });
    });

    ui.add_space(15.0);

    // Security
    section(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.heading("Sécurité");
        ui.add_space(5.0);

        egui::Grid::new("security_grid")
            .num_columns(2)
            .spacing([10.0, 8.0])
            .show(ui, |ui| {
                let profile = &mut app.profile;

                ui.label("Mot de passe actuel:");
                ui.add(egui::TextEdit::singleline(&mut profile.current_password).password(true));
                ui.end_row();

                ui.label("Nouveau mot de passe:");
                ui.vertical(|ui| {
                    ui.add(egui::TextEdit::singleline(&mut profile.new_password).password(true));
                    if !profile.new_password.is_empty() {
                        let strength = password_strength(&profile.new_password);
                        ui.label(RichText::new(password_strength_label(strength)).small().weak());
                    }
                });
                ui.end_row();

                ui.label("Confirmation:");
                ui.add(egui::TextEdit::singleline(&mut profile.confirm_password).password(true));
                ui.end_row();
            });

        ui.add_space(5.0);
        if styled_button(ui, "Mettre à jour le mot de passe").clicked() {
            app.change_password();
        }
    });

    ui.add_space(15.0);

    // School identity and fees
    section(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.heading("Établissement");
        ui.add_space(5.0);

        egui::Grid::new("school_grid")
            .num_columns(2)
            .spacing([10.0, 8.0])
            .show(ui, |ui| {
                let school = &mut app.config.school;
                let mut changed = false;

                ui.label("Nom:");
                changed |= ui.text_edit_singleline(&mut school.name).changed();
                ui.end_row();

                ui.label("Slogan:");
                changed |= ui.text_edit_singleline(&mut school.tagline).changed();
                ui.end_row();

                ui.label("Contact:");
                changed |= ui.text_edit_singleline(&mut school.contact).changed();
                ui.end_row();

                ui.label("Adresse:");
                changed |= ui.text_edit_singleline(&mut school.address).changed();
                ui.end_row();

                ui.label("N° d'ouverture:");
                changed |= ui.text_edit_singleline(&mut school.opening_number).changed();
                ui.end_row();

                if changed {
                    app.config_modified = true;
                }
            });

        ui.add_space(10.0);
        ui.label(RichText::new("Frais (CFA)").strong());
        ui.add_space(5.0);

        egui::Grid::new("fees_grid")
            .num_columns(2)
            .spacing([10.0, 8.0])
            .show(ui, |ui| {
                let fees = &mut app.config.fees;
                let mut changed = false;

                ui.label("Inscription:");
                changed |= ui
                    .add(egui::DragValue::new(&mut fees.registration).speed(500.0).range(0..=10_000_000))
                    .changed();
                ui.end_row();

                ui.label("Scolarité:");
                changed |= ui
                    .add(egui::DragValue::new(&mut fees.tuition).speed(500.0).range(0..=10_000_000))
                    .changed();
                ui.end_row();

                ui.label("Tranche:");
                changed |= ui
                    .add(egui::DragValue::new(&mut fees.installment).speed(500.0).range(0..=10_000_000))
                    .changed();
                ui.end_row();

                if changed {
                    app.config_modified = true;
                }
            });
    });

    ui.add_space(20.0);

    ui.horizontal(|ui| {
        ui.add_enabled_ui(app.config_modified, |ui| {
            if primary_button_with_icon(ui, FLOPPY_DISK, "Enregistrer les paramètres").clicked() {
                app.save_config();
            }
        });

        if app.config_modified {
            ui.label(RichText::new("(modifications non enregistrées)").color(colors::WARNING).italics());
        }

        if styled_button(ui, "Réinitialiser").clicked() {
            // Keep the registered organisation, reset everything else
            let organization = app.config.organization.clone();
            app.config = AppConfig {
                organization,
                ..AppConfig::default()
            };
            app.config_modified = true;
        }
    });
}

fn show_team(app: &mut App, ui: &mut Ui) {
    ui.horizontal(|ui| {
        if primary_button_with_icon(ui, USER_PLUS, "Inviter un membre").clicked() {
            app.invite_form = InviteForm {
                is_open: true,
                ..Default::default()
            };
        }
    });

    ui.add_space(15.0);

    let mut role_change: Option<(u32, String)> = None;

    section(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.label(format!("{} membre(s)", db::staff::list_all(&app.store).len()));
        ui.add_space(8.0);

        egui::Grid::new("staff_grid")
            .num_columns(5)
            .striped(true)
            .spacing([16.0, 8.0])
            .show(ui, |ui| {
                ui.strong("Nom");
                ui.strong("Email");
                ui.strong("Rôle");
                ui.strong("Statut");
                ui.strong("");
                ui.end_row();

                for member in db::staff::list_all(&app.store) {
                    ui.label(&member.name);
                    ui.label(&member.email);

                    let mut role = member.role.clone();
                    egui::ComboBox::from_id_salt(("staff_role", member.id))
                        .width(150.0)
                        .selected_text(role.as_str())
                        .show_ui(ui, |ui| {
                            for option in ROLES {
                                ui.selectable_value(&mut role, option.to_string(), option);
                            }
                        });
                    if role != member.role {
                        role_change = Some((member.id, role));
                    }

                    let color = match member.status {
                        StaffStatus::Active => colors::SUCCESS,
                        StaffStatus::Pending => colors::WARNING,
                    };
                    status_badge(ui, member.status.label(), color);

                    if danger_action_button(ui, TRASH, "Retirer").clicked() {
                        app.delete_target = Some(DeleteTarget::StaffMember(member.id, member.name.clone()));
                        app.show_delete_confirm = true;
                    }
                    ui.end_row();
                }
            });
    });

    if let Some((id, role)) = role_change {
        app.set_staff_role(id, &role);
    }
}

fn show_invite_dialog(app: &mut App, ctx: &egui::Context) {
    let mut submit = false;

    egui::Window::new("Inviter un membre")
        .collapsible(false)
        .resizable(false)
        .default_width(400.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            let form = &mut app.invite_form;

            egui::Grid::new("invite_grid")
                .num_columns(2)
                .spacing([20.0, 10.0])
                .show(ui, |ui| {
                    ui.label("Nom:");
                    ui.add(egui::TextEdit::singleline(&mut form.name).desired_width(220.0));
                    ui.end_row();

                    ui.label("Email:");
                    ui.add(egui::TextEdit::singleline(&mut form.email).desired_width(220.0));
                    ui.end_row();

                    ui.label("Rôle:");
                    egui::ComboBox::from_id_salt("invite_role")
                        .width(220.0)
                        .selected_text(form.role.as_str())
                        .show_ui(ui, |ui| {
                            for option in ROLES {
                                ui.selectable_value(&mut form.role, option.to_string(), option);
                            }
                        });
                    ui.end_row();
                });

            ui.add_space(15.0);
            ui.separator();
            ui.add_space(10.0);

            ui.horizontal(|ui| {
                if styled_button(ui, "Annuler").clicked() {
                    *form = InviteForm::default();
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let ready = !form.name.trim().is_empty() && !form.email.trim().is_empty();
                    ui.add_enabled_ui(ready, |ui| {
                        if styled_button_with_icon(ui, ENVELOPE_SIMPLE, "Envoyer l'invitation").clicked() {
                            submit = true;
                        }
                    });
                });
            });
        });

    if submit {
        app.invite_staff();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_view_labels() {
        assert_eq!(start_view_label(StartView::Site), "Site public");
        assert_eq!(start_view_label(StartView::Admin), "Tableau de bord");
    }
}
