//! Receipt preview shown after an enrollment.

use eframe::egui::{self, RichText, Ui};
use egui_phosphor::regular::{FLOPPY_DISK, USER_PLUS};

use super::app::App;
use super::components::{colors, panel_header, primary_button_with_icon, section, styled_button_with_icon};
use crate::tuition::format_cfa;

/// Show the last issued receipt.
///
/// Returns `true` when the user leaves the receipt.
pub fn show(app: &mut App, ui: &mut Ui) -> bool {
    let mut leave = false;
    let mut save = false;
    let mut again = false;

    let Some(receipt) = &app.receipt else {
        ui.label(RichText::new("Aucun reçu à afficher").weak());
        return ui.button("< Retour").clicked();
    };
    let school = &app.config.school;

    panel_header(ui, "Reçu d'inscription", Some(&format!("N° {}", receipt.receipt_id)));

    egui::ScrollArea::vertical().id_salt("receipt_scroll").show(ui, |ui| {
        section(ui, |ui| {
            ui.set_min_width(ui.available_width());

            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(RichText::new(&school.name).size(22.0).strong().color(colors::PRIMARY));
                    ui.label(RichText::new(&school.tagline).weak());
                    ui.label(RichText::new(format!("Ouverture N° {}", school.opening_number)).small().weak());
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                    ui.vertical(|ui| {
                        ui.label(RichText::new("REÇU").size(20.0).strong());
                        ui.label(format!("N° {}", receipt.receipt_id));
                        ui.label(&receipt.date);
                    });
                });
            });

            ui.add_space(10.0);
            ui.separator();
            ui.add_space(10.0);

            ui.columns(2, |columns| {
                egui::Grid::new("receipt_student_grid")
                    .num_columns(2)
                    .spacing([20.0, 6.0])
                    .show(&mut columns[0], |ui| {
                        ui.label("Reçu de:");
                        ui.strong(receipt.display_name());
                        ui.end_row();

                        ui.label("Téléphone:");
                        ui.label(&receipt.phone);
                        ui.end_row();

                        ui.label("Email:");
                        ui.label(&receipt.email);
                        ui.end_row();

                        ui.label("Cours:");
                        ui.label(&receipt.course);
                        ui.end_row();

                        ui.label("Motif:");
                        ui.label(receipt.fee_label());
                        ui.end_row();
                    });

                egui::Grid::new("receipt_amounts_grid")
                    .num_columns(2)
                    .spacing([20.0, 6.0])
                    .show(&mut columns[1], |ui| {
                        ui.label("Avance:");
                        ui.label(format_cfa(receipt.total_amount));
                        ui.end_row();

                        ui.label("Reste:");
                        ui.colored_label(colors::WARNING, format_cfa(receipt.remaining_amount()));
                        ui.end_row();

                        ui.label("Mode de paiement:");
                        ui.label(receipt.payment_method.label());
                        ui.end_row();

                        ui.label(RichText::new("Total:").strong());
                        ui.label(RichText::new(format_cfa(receipt.total_amount)).strong().color(colors::PRIMARY));
                        ui.end_row();
                    });
            });

            ui.add_space(10.0);
            ui.label(RichText::new(format!("Arrêté la présente somme à {}", receipt.total_in_words())).italics());

            if let Some(photo) = &receipt.photo {
                ui.add_space(10.0);
                ui.add(
                    egui::Image::new(format!("file://{}", photo.display()))
                        .max_size(egui::vec2(120.0, 120.0))
                        .corner_radius(6),
                );
            }
        });

        ui.add_space(15.0);

        ui.horizontal(|ui| {
            if primary_button_with_icon(ui, FLOPPY_DISK, "Enregistrer le reçu").clicked() {
                save = true;
            }
            ui.add_space(10.0);
            if styled_button_with_icon(ui, USER_PLUS, "Nouvelle inscription").clicked() {
                again = true;
            }
            ui.add_space(10.0);
            if ui.button("Retour aux étudiants").clicked() {
                leave = true;
            }
        });
        ui.label(
            RichText::new("Le reçu est enregistré en HTML, prêt à imprimer au format paysage.")
                .small()
                .weak(),
        );
    });

    if save {
        app.save_receipt();
    }
    if again {
        app.current_panel = super::app::Panel::AddStudent;
    }
    leave
}
