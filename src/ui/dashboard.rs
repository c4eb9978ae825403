//! Dashboard panel with stats, navigation cards, quick actions, and activity log.

use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use egui_phosphor::regular::{BOOKS, CHALKBOARD_TEACHER, STUDENT, WALLET};

use crate::models::course::average_completion;
use crate::models::{NotificationKind, Trend};
use crate::site::ticker_index;
use crate::tuition::{TuitionSummary, format_cfa};

use super::app::{App, LogLevel, Panel};
use super::components::{colors, dashboard_card, section, stat_card};

/// Show the dashboard panel.
///
/// Returns `Some(panel)` if navigation is requested.
pub fn show(app: &mut App, ui: &mut Ui) -> Option<Panel> {
    let mut next_panel = None;

    ScrollArea::vertical().id_salt("dashboard_scroll").show(ui, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(20.0);

            // Header
            ui.label(RichText::new(&app.config.school.name).size(32.0).strong());
            ui.add_space(5.0);
            ui.label(RichText::new(&app.config.school.tagline).size(14.0).weak());

            ui.add_space(20.0);

            show_ticker(app, ui);

            ui.add_space(20.0);

            // Stat cards row
            ui.horizontal_wrapped(|ui| {
                for stat in &app.reference.dashboard_stats {
                    let (arrow, accent) = match stat.trend {
                        Trend::Up => (egui_phosphor::regular::TREND_UP, colors::SUCCESS),
                        Trend::Down => (egui_phosphor::regular::TREND_DOWN, colors::ERROR),
                    };
                    stat_card(
                        ui,
                        &stat.label,
                        &stat.value,
                        &format!("{} {} ce mois", arrow, stat.change),
                        accent,
                    );
                }
            });

            ui.add_space(25.0);

            // Navigation cards row
            let available = ui.available_width();
            let num_cards = 4.0;
            let spacing = 30.0;
            let total_spacing = spacing * (num_cards - 1.0);
            let card_width = ((available - total_spacing) / num_cards).clamp(150.0, 250.0);
            let card_size = egui::vec2(card_width, card_width * 0.75);
            let total_width = card_width * num_cards + total_spacing;
            let start_offset = ((available - total_width) / 2.0).max(0.0);

            ui.horizontal(|ui| {
                ui.add_space(start_offset);

                let cards = [
                    ("Étudiants", "Dossiers et inscriptions", STUDENT, Panel::Students),
                    ("Enseignants", "Équipe pédagogique", CHALKBOARD_TEACHER, Panel::Teachers),
                    ("Cours", "Catalogue de formations", BOOKS, Panel::Courses),
                    ("Scolarité", "Frais et paiements", WALLET, Panel::Tuition),
                ];
                for (i, (title, description, icon, panel)) in cards.into_iter().enumerate() {
                    if i > 0 {
                        ui.add_space(spacing);
                    }
                    if dashboard_card(ui, title, description, icon, card_size).clicked() {
                        next_panel = Some(panel);
                    }
                }
            });

            ui.add_space(25.0);
        });

        // Two-column layout: Quick Actions + Progress | Recent Activity
        let column_width = (ui.available_width() - 40.0) / 2.0;

        ui.horizontal_top(|ui| {
            ui.add_space(10.0);

            ui.vertical(|ui| {
                ui.set_width(column_width);

                section(ui, |ui| {
                    ui.set_min_width(column_width - 30.0);
                    ui.label(RichText::new("Actions rapides").strong());
                    ui.add_space(10.0);

                    if ui.button(format!("{} Ajouter un étudiant", egui_phosphor::regular::USER_PLUS)).clicked() {
                        next_panel = Some(Panel::AddStudent);
                    }
                    ui.add_space(5.0);
                    if ui.button(format!("{} Nouvelle présence", egui_phosphor::regular::CHECK_SQUARE)).clicked() {
                        app.open_attendance_dialog();
                        next_panel = Some(Panel::Attendance);
                    }
                    ui.add_space(5.0);
                    if ui.button(format!("{} Exporter les étudiants", egui_phosphor::regular::FILE_XLS)).clicked() {
                        app.export_students();
                    }
                });

                ui.add_space(15.0);
                show_course_progress(app, ui, column_width);
            });

            ui.add_space(20.0);

            ui.vertical(|ui| {
                ui.set_width(column_width);
                show_tuition_overview(app, ui, column_width);
                ui.add_space(15.0);
                show_activity(app, ui, column_width);
            });
        });
    });

    next_panel
}

/// One notification at a time, rotating on a timer.
fn show_ticker(app: &App, ui: &mut Ui) {
    let notifications = &app.reference.notifications;
    let Some(current) = notifications.get(ticker_index(app.opened_at.elapsed(), notifications.len())) else {
        return;
    };

    let icon = match current.kind {
        NotificationKind::Student => egui_phosphor::regular::STUDENT,
        NotificationKind::Course => egui_phosphor::regular::BOOK_OPEN,
        NotificationKind::Teacher => egui_phosphor::regular::CHALKBOARD_TEACHER,
    };

    section(ui, |ui| {
        ui.horizontal(|ui| {
            ui.label(RichText::new(icon).size(20.0).color(colors::PRIMARY));
            ui.label(RichText::new(&current.title).strong());
            ui.label(&current.name);
            ui.label(RichText::new(&current.time).small().weak());
        });
    });
}

fn show_course_progress(app: &App, ui: &mut Ui, column_width: f32) {
    let progress = &app.reference.course_progress;

    section(ui, |ui| {
        ui.set_min_width(column_width - 30.0);
        ui.horizontal(|ui| {
            ui.label(RichText::new("Progression des cours").strong());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(RichText::new(format!("Moyenne {:.0}%", average_completion(progress))).weak());
            });
        });
        ui.add_space(10.0);

        egui::Grid::new("course_progress_grid")
            .num_columns(3)
            .spacing([15.0, 6.0])
            .show(ui, |ui| {
                for month in progress {
                    ui.label(&month.month);
                    ui.label(RichText::new(format!("{} étudiants", month.students)).small());
                    ui.add(
                        egui::ProgressBar::new(month.completion as f32 / 100.0)
                            .desired_width(160.0)
                            .text(format!("{}%", month.completion)),
                    );
                    ui.end_row();
                }
            });
    });
}

fn show_tuition_overview(app: &App, ui: &mut Ui, column_width: f32) {
    let summary = TuitionSummary::from_accounts(&app.store.accounts);

    section(ui, |ui| {
        ui.set_min_width(column_width - 30.0);
        ui.label(RichText::new("Scolarité").strong());
        ui.add_space(10.0);

        egui::Grid::new("tuition_overview_grid")
            .num_columns(2)
            .spacing([20.0, 6.0])
            .show(ui, |ui| {
                ui.label("Encaissé:");
                ui.colored_label(colors::SUCCESS, format_cfa(summary.total_revenue));
                ui.end_row();

                ui.label("En attente:");
                ui.colored_label(colors::WARNING, format_cfa(summary.total_pending));
                ui.end_row();

                ui.label("Taux de recouvrement:");
                ui.label(format!("{:.1}%", summary.collection_rate()));
                ui.end_row();
            });
    });
}

fn show_activity(app: &App, ui: &mut Ui, column_width: f32) {
    section(ui, |ui| {
        ui.set_min_width(column_width - 30.0);
        ui.label(RichText::new("Activité récente").strong());
        ui.add_space(10.0);

        ScrollArea::vertical()
            .id_salt("activity_scroll")
            .max_height(180.0)
            .show(ui, |ui| {
                if app.log_messages.is_empty() {
                    ui.label(RichText::new("Aucune activité récente").weak());
                } else {
                    for entry in app.log_messages.iter().rev().take(10) {
                        let color = match entry.level {
                            LogLevel::Info => Color32::GRAY,
                            LogLevel::Success => colors::SUCCESS,
                            LogLevel::Warning => colors::WARNING,
                            LogLevel::Error => colors::ERROR,
                        };

                        ui.horizontal(|ui| {
                            ui.label(
                                RichText::new(entry.timestamp.format("%H:%M:%S").to_string())
                                    .small()
                                    .color(Color32::DARK_GRAY),
                            );
                            ui.label(RichText::new(&entry.message).color(color));
                        });
                    }
                }
            });
    });
}
