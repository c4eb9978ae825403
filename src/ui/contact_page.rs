//! Public contact form.

use eframe::egui::{self, RichText, Ui};

use crate::registration::{ContactState, ContactSubject};

use super::app::App;
use super::components::{colors, field_error, primary_button_with_icon, section, text_field};

pub fn show(app: &mut App, ui: &mut Ui) {
    egui::ScrollArea::vertical().id_salt("contact_scroll").show(ui, |ui| {
        ui.add_space(10.0);
        ui.heading(RichText::new("Contactez-nous").size(26.0).strong());
        ui.label(RichText::new("Une question, un projet ? Écrivez-nous, nous répondons sous 48 h.").weak());
        ui.add_space(15.0);

        ui.columns(2, |columns| {
            show_form(app, &mut columns[0]);
            show_details(&mut columns[1]);
        });
    });
}

fn show_form(app: &mut App, ui: &mut Ui) {
    section(ui, |ui| {
        let form = &mut app.contact_form;

        if form.state == ContactState::Sent {
            ui.colored_label(
                colors::SUCCESS,
                format!(
                    "{} Message envoyé ! Nous vous répondrons rapidement.",
                    egui_phosphor::regular::CHECK_CIRCLE
                ),
            );
            ui.add_space(10.0);
        }

        let editing = form.state == ContactState::Editing;
        ui.add_enabled_ui(editing, |ui| {
            text_field(ui, "Nom complet *", &mut form.name, &mut form.errors, "name");
            ui.add_space(6.0);
            text_field(ui, "Email *", &mut form.email, &mut form.errors, "email");
            ui.add_space(6.0);
            text_field(ui, "Téléphone", &mut form.phone, &mut form.errors, "phone");
            ui.add_space(6.0);

            ui.label("Objet *");
            let selected = form.subject.map_or("Sélectionnez un objet", |s| s.label());
            egui::ComboBox::from_id_salt("contact_subject")
                .selected_text(selected)
                .width(260.0)
                .show_ui(ui, |ui| {
                    for subject in ContactSubject::ALL {
                        if ui
                            .selectable_value(&mut form.subject, Some(subject), subject.label())
                            .clicked()
                        {
                            form.errors.clear("subject");
                        }
                    }
                });
            field_error(ui, &form.errors, "subject");
            ui.add_space(6.0);

            ui.label("Message *");
            if ui
                .add(
                    egui::TextEdit::multiline(&mut form.message)
                        .desired_rows(5)
                        .desired_width(f32::INFINITY),
                )
                .changed()
            {
                form.errors.clear("message");
            }
            field_error(ui, &form.errors, "message");
        });
        ui.add_space(10.0);

        let state = form.state;
        match state {
            ContactState::Sending => {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Envoi en cours...");
                });
            }
            ContactState::Editing => {
                if primary_button_with_icon(ui, egui_phosphor::regular::PAPER_PLANE_TILT, "Envoyer").clicked() {
                    app.send_contact();
                }
            }
            ContactState::Sent => {}
        }
    });
}

fn show_details(ui: &mut Ui) {
    section(ui, |ui| {
        ui.label(RichText::new("Nos coordonnées").strong().size(16.0));
        ui.add_space(8.0);
        ui.label(format!("{} dataspatialintelligence@gmail.com", egui_phosphor::regular::ENVELOPE));
        ui.label(format!(
            "{} +237 682 877 106 / +237 675 345 158 / +237 658 184 703",
            egui_phosphor::regular::PHONE
        ));
        ui.label(format!("{} Yaoundé, Damas, Cameroun", egui_phosphor::regular::MAP_PIN));
        ui.add_space(10.0);
        ui.label(RichText::new("Du lundi au vendredi, 8 h - 17 h").weak());
    });
}
