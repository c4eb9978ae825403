//! Tuition panel: account balances, payments and payment history.

use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use egui_extras::DatePickerButton;
use egui_phosphor::regular::{CLOCK_COUNTER_CLOCKWISE, FILE_XLS, MONEY};

use super::app::{App, PAGE_SIZE};
use super::components::{
    action_button, back_button, colors, field_error, pagination, panel_header, primary_button_with_icon,
    stat_card, status_badge, styled_button, styled_button_with_icon,
};
use crate::db;
use crate::models::{PaymentMethod, PaymentStatus};
use crate::tuition::{PaymentForm, TuitionSummary, format_cfa};

pub fn status_color(status: PaymentStatus) -> Color32 {
    match status {
        PaymentStatus::Paid => colors::SUCCESS,
        PaymentStatus::Partial => colors::WARNING,
        PaymentStatus::Unpaid => colors::ERROR,
    }
}

/// Show the tuition panel.
///
/// Returns `true` if the back button was clicked.
pub fn show(app: &mut App, ui: &mut Ui) -> bool {
    let go_back = back_button(ui);

    panel_header(ui, "Scolarité", Some("Frais de scolarité et paiements"));

    let summary = TuitionSummary::from_accounts(db::tuition::list_accounts(&app.store));
    ui.horizontal_wrapped(|ui| {
        stat_card(
            ui,
            "Total encaissé",
            &format_cfa(summary.total_revenue),
            &format!("{:.1}% des frais", summary.collection_rate()),
            colors::SUCCESS,
        );
        stat_card(
            ui,
            "En attente",
            &format_cfa(summary.total_pending),
            &format!("{} comptes", summary.partial_count + summary.unpaid_count),
            colors::WARNING,
        );
        stat_card(
            ui,
            "Soldés",
            &summary.paid_count.to_string(),
            "étudiants à jour",
            colors::PRIMARY,
        );
        stat_card(
            ui,
            "Impayés",
            &summary.unpaid_count.to_string(),
            &format!("{} partiels", summary.partial_count),
            colors::ERROR,
        );
    });

    ui.add_space(15.0);

    ui.horizontal(|ui| {
        ui.label("Rechercher:");
        if ui
            .add(
                egui::TextEdit::singleline(&mut app.tuition_search)
                    .desired_width(220.0)
                    .hint_text("Nom, email ou cours..."),
            )
            .changed()
        {
            app.tuition_page = 1;
        }

        ui.add_space(20.0);

        ui.label("Statut:");
        let before = app.tuition_status;
        egui::ComboBox::from_id_salt("tuition_status")
            .selected_text(app.tuition_status.map_or("Tous", |s| s.label()))
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut app.tuition_status, None, "Tous");
                for status in PaymentStatus::ALL {
                    ui.selectable_value(&mut app.tuition_status, Some(status), status.label());
                }
            });
        if app.tuition_status != before {
            app.tuition_page = 1;
        }

        ui.add_space(20.0);

        if styled_button_with_icon(ui, FILE_XLS, "Exporter vers Excel").clicked() {
            app.export_tuition();
        }
    });

    ui.add_space(15.0);

    show_table(app, ui);

    if app.payment_form.is_open {
        show_payment_dialog(app, ui.ctx());
    }

    if app.history_student.is_some() {
        show_history_window(app, ui.ctx());
    }

    go_back
}

fn show_table(app: &mut App, ui: &mut Ui) {
    let results = db::tuition::search_accounts(&app.store, &app.tuition_search, app.tuition_status);
    let page = db::paginate(&results, app.tuition_page, PAGE_SIZE);
    app.tuition_page = page.page;
    let today = app.today();

    ui.label(format!("{} compte(s)", page.total_items));
    ui.add_space(10.0);

    ScrollArea::vertical()
        .id_salt("tuition_scroll")
        .max_height(ui.available_height() - 40.0)
        .show(ui, |ui| {
            egui::Grid::new("tuition_grid")
                .num_columns(7)
                .striped(true)
                .min_col_width(60.0)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.strong("Étudiant");
                    ui.strong("Cours");
                    ui.strong("Frais");
                    ui.strong("Payé");
                    ui.strong("Progression");
                    ui.strong("Statut");
                    ui.strong("Actions");
                    ui.end_row();

                    for account in page.items {
                        let status = account.status();
                        ui.vertical(|ui| {
                            ui.label(&account.name);
                            ui.label(RichText::new(&account.email).small().weak());
                        });
                        ui.label(&account.course);
                        ui.label(format_cfa(account.total_fees));
                        ui.label(format_cfa(account.paid));
                        ui.add(
                            egui::ProgressBar::new(account.progress())
                                .desired_width(120.0)
                                .fill(status_color(status))
                                .text(format!("{:.0}%", account.progress() * 100.0)),
                        );
                        status_badge(ui, status.label(), status_color(status));

                        ui.horizontal(|ui| {
                            if status != PaymentStatus::Paid
                                && primary_button_with_icon(ui, MONEY, "Paiement").clicked()
                            {
                                app.payment_form = PaymentForm::for_account(account, today);
                            }
                            ui.add_space(4.0);
                            if action_button(ui, CLOCK_COUNTER_CLOCKWISE, "Historique").clicked() {
                                app.history_student = Some(account.student_id);
                            }
                        });
                        ui.end_row();
                    }
                });

            if page.items.is_empty() {
                ui.add_space(10.0);
                ui.label(RichText::new("Aucun compte trouvé").weak());
            }
        });

    ui.add_space(10.0);
    pagination(ui, &mut app.tuition_page, page.total_pages);
}

fn show_payment_dialog(app: &mut App, ctx: &egui::Context) {
    let mut submit = false;

    egui::Window::new(format!("Paiement - {}", app.payment_form.student_name))
        .collapsible(false)
        .resizable(false)
        .default_width(420.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            let form = &mut app.payment_form;

            egui::Grid::new("payment_summary_grid")
                .num_columns(2)
                .spacing([20.0, 6.0])
                .show(ui, |ui| {
                    ui.label("Frais totaux:");
                    ui.label(format_cfa(form.total_fees));
                    ui.end_row();

                    ui.label("Déjà payé:");
                    ui.colored_label(colors::SUCCESS, format_cfa(form.paid));
                    ui.end_row();

                    ui.label("Reste à payer:");
                    ui.colored_label(colors::WARNING, format_cfa(form.remaining()));
                    ui.end_row();
                });

            ui.add_space(10.0);
            ui.separator();
            ui.add_space(10.0);

            ui.horizontal(|ui| {
                for preset in form.presets() {
                    let label = format!("{} ({})", preset.label, format_cfa(preset.amount));
                    if ui.selectable_label(form.amount == preset.amount, label).clicked() {
                        form.apply_preset(preset);
                    }
                }
            });

            ui.add_space(10.0);

            egui::Grid::new("payment_form_grid")
                .num_columns(2)
                .spacing([20.0, 10.0])
                .show(ui, |ui| {
                    ui.label("Montant (CFA):");
                    ui.vertical(|ui| {
                        if ui
                            .add(
                                egui::DragValue::new(&mut form.amount)
                                    .speed(500.0)
                                    .range(0..=form.total_fees),
                            )
                            .changed()
                        {
                            form.errors.clear("amount");
                        }
                        field_error(ui, &form.errors, "amount");
                    });
                    ui.end_row();

                    ui.label("Méthode:");
                    egui::ComboBox::from_id_salt("payment_method")
                        .width(200.0)
                        .selected_text(form.method.label())
                        .show_ui(ui, |ui| {
                            for method in PaymentMethod::ALL {
                                ui.selectable_value(&mut form.method, method, method.label());
                            }
                        });
                    ui.end_row();

                    ui.label("Date:");
                    ui.add(DatePickerButton::new(&mut form.date).id_salt("payment_date"));
                    ui.end_row();

                    ui.label("Notes:");
                    ui.add(
                        egui::TextEdit::multiline(&mut form.notes)
                            .desired_rows(2)
                            .desired_width(220.0)
                            .hint_text("Optionnel"),
                    );
                    ui.end_row();
                });

            ui.add_space(15.0);
            ui.separator();
            ui.add_space(10.0);

            ui.horizontal(|ui| {
                if styled_button(ui, "Annuler").clicked() {
                    form.reset();
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if primary_button_with_icon(ui, "", "Enregistrer le paiement").clicked() {
                        submit = true;
                    }
                });
            });
        });

    if submit {
        app.record_payment();
    }
}

fn show_history_window(app: &mut App, ctx: &egui::Context) {
    let Some(account) = app
        .history_student
        .and_then(|id| db::tuition::get_account(&app.store, id))
    else {
        app.history_student = None;
        return;
    };

    let payments = db::tuition::payments_for(&app.store, account.student_id);
    let mut open = true;

    egui::Window::new(format!("Historique - {}", account.name))
        .open(&mut open)
        .collapsible(false)
        .default_width(480.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!("Payé {} sur {}", format_cfa(account.paid), format_cfa(account.total_fees)));
                status_badge(ui, account.status().label(), status_color(account.status()));
            });
            ui.add_space(10.0);

            if payments.is_empty() {
                ui.label(RichText::new("Aucun paiement enregistré").weak());
                return;
            }

            ScrollArea::vertical().id_salt("payment_history_scroll").max_height(300.0).show(ui, |ui| {
                egui::Grid::new("payment_history_grid")
                    .num_columns(4)
                    .striped(true)
                    .spacing([20.0, 6.0])
                    .show(ui, |ui| {
                        ui.strong("Date");
                        ui.strong("Montant");
                        ui.strong("Méthode");
                        ui.strong("Notes");
                        ui.end_row();

                        for payment in &payments {
                            ui.label(payment.date.format("%d/%m/%Y").to_string());
                            ui.label(format_cfa(payment.amount));
                            ui.label(payment.method.label());
                            ui.label(RichText::new(&payment.notes).weak());
                            ui.end_row();
                        }
                    });
            });
        });

    if !open {
        app.history_student = None;
    }
}
