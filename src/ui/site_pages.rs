//! Public marketing pages.

use eframe::egui::{self, RichText, Ui};

use crate::models::{ContractType, ExperienceLevel};
use crate::site::{self, CareerFilter, COUNTER_DURATION, HOME_STATS};

use super::app::{App, Panel};
use super::components::{colors, primary_button_with_icon, section, status_badge};

const COMPANY: &str = "Data Spatial Intelligence";

/// Show the marketing page for `app.current_panel`. Returns a panel to switch to.
pub fn show(app: &mut App, ui: &mut Ui) -> Option<Panel> {
    let mut next = None;

    egui::ScrollArea::vertical().id_salt("site_scroll").show(ui, |ui| {
        ui.add_space(10.0);
        next = match app.current_panel {
            Panel::About => {
                show_about(app, ui);
                None
            }
            Panel::Services => {
                show_services(app, ui);
                None
            }
            Panel::Careers => show_careers(app, ui),
            Panel::Pricing => show_pricing(app, ui),
            _ => show_home(app, ui),
        };
        ui.add_space(20.0);
        show_footer(ui);
    });

    next
}

fn hero(ui: &mut Ui, title: &str, subtitle: &str) {
    egui::Frame::new()
        .fill(colors::PRIMARY)
        .inner_margin(egui::Margin::same(30))
        .corner_radius(egui::CornerRadius::same(8))
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.label(RichText::new(title).size(34.0).strong().color(egui::Color32::WHITE));
            ui.add_space(8.0);
            ui.label(RichText::new(subtitle).size(16.0).color(egui::Color32::from_white_alpha(220)));
        });
    ui.add_space(20.0);
}

fn show_home(app: &mut App, ui: &mut Ui) -> Option<Panel> {
    let mut next = None;

    hero(
        ui,
        COMPANY,
        "Solutions innovantes en collecte, traitement, analyse et valorisation des données spatiales",
    );

    // Animated counters
    let elapsed = app.opened_at.elapsed();
    ui.columns(HOME_STATS.len(), |columns| {
        for (ui, stat) in columns.iter_mut().zip(HOME_STATS.iter()) {
            section(ui, |ui| {
                ui.vertical_centered(|ui| {
                    let value = site::counter_value(stat.target, elapsed, COUNTER_DURATION);
                    ui.label(
                        RichText::new(format!("{}{}", value, stat.suffix))
                            .size(30.0)
                            .strong()
                            .color(colors::PRIMARY),
                    );
                    ui.label(stat.label);
                });
            });
        }
    });

    ui.add_space(25.0);
    ui.heading("Nos services");
    ui.label(RichText::new("Des solutions complètes pour la gestion et valorisation des données spatiales").weak());
    ui.add_space(10.0);

    for service in app.reference.services.iter().take(3) {
        section(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.label(RichText::new(&service.title).strong().size(16.0));
            ui.label(&service.description);
        });
        ui.add_space(6.0);
    }
    if ui.link("Voir tous les services").clicked() {
        next = Some(Panel::Services);
    }

    ui.add_space(25.0);
    section(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.vertical_centered(|ui| {
            ui.heading("Prêt à démarrer ?");
            ui.label(format!(
                "Rejoignez nos clients satisfaits et découvrez comment {} peut améliorer vos processus de gestion des données",
                COMPANY
            ));
            ui.add_space(10.0);
            if primary_button_with_icon(ui, egui_phosphor::regular::ENVELOPE, "Nous contacter").clicked() {
                next = Some(Panel::Contact);
            }
        });
    });

    next
}

fn show_about(app: &App, ui: &mut Ui) {
    hero(ui, "À propos", "Qui sommes-nous ?");

    let blocks = [
        (
            "Objectif",
            "Nous fournissons des données fiables pour soutenir la planification, le suivi des projets et la prise de décision.",
        ),
        (
            "Notre Vision",
            "Devenir un acteur de référence en intelligence spatiale en Afrique Centrale, en promouvant des interventions responsables et à fort impact.",
        ),
        (
            "Notre Mission",
            "Fournir des solutions SIG et environnementales fiables, adaptées aux besoins locaux, pour renforcer la gouvernance et soutenir le développement durable.",
        ),
    ];

    ui.columns(blocks.len(), |columns| {
        for (ui, (title, text)) in columns.iter_mut().zip(blocks) {
            section(ui, |ui| {
                ui.label(RichText::new(title).strong().size(16.0).color(colors::PRIMARY));
                ui.add_space(4.0);
                ui.label(text);
            });
        }
    });

    ui.add_space(25.0);
    ui.heading("Notre équipe");
    ui.add_space(10.0);

    egui::Grid::new("team_grid")
        .num_columns(2)
        .spacing([15.0, 15.0])
        .show(ui, |ui| {
            for (i, member) in app.reference.team.iter().enumerate() {
                section(ui, |ui| {
                    ui.set_width(320.0);
                    ui.label(RichText::new(&member.name).strong().size(16.0));
                    ui.label(RichText::new(&member.role).color(colors::PRIMARY));
                    ui.add_space(4.0);
                    ui.label(RichText::new(&member.bio).small());
                    ui.horizontal(|ui| {
                        if let Some(email) = &member.email {
                            ui.label(RichText::new(format!("{} {}", egui_phosphor::regular::ENVELOPE, email)).small());
                        }
                        if let Some(linkedin) = &member.linkedin {
                            ui.hyperlink_to(egui_phosphor::regular::LINKEDIN_LOGO, linkedin);
                        }
                    });
                });
                if i % 2 == 1 {
                    ui.end_row();
                }
            }
        });
}

fn show_services(app: &mut App, ui: &mut Ui) {
    hero(ui, "Nos services", "Des solutions complètes pour vos données spatiales");

    let selected = app.selected_service;
    for service in &app.reference.services {
        let is_open = selected == Some(service.id);
        let response = section(ui, |ui| {
            ui.set_min_width(ui.available_width());
            let clicked = ui.horizontal(|ui| {
                ui.label(RichText::new(&service.title).strong().size(16.0));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let icon = if is_open {
                        egui_phosphor::regular::CARET_UP
                    } else {
                        egui_phosphor::regular::CARET_DOWN
                    };
                    ui.button(icon).clicked()
                })
                .inner
            })
            .inner;
            ui.label(&service.description);
            clicked
        });

        if is_open {
            ui.indent(("service_details", service.id), |ui| {
                for detail in &service.details {
                    ui.label(format!("• {}", detail));
                }
                if !service.case_studies.is_empty() {
                    ui.add_space(6.0);
                    ui.label(RichText::new("Études de cas").strong());
                    for case in &service.case_studies {
                        ui.label(RichText::new(format!("- {}", case)).italics());
                    }
                }
            });
        }

        if response {
            app.selected_service = if is_open { None } else { Some(service.id) };
        }
        ui.add_space(10.0);
    }
}

fn show_careers(app: &mut App, ui: &mut Ui) -> Option<Panel> {
    let mut next = None;

    hero(ui, "Carrières", "Rejoignez une équipe passionnée par la donnée");

    let departments = site::departments(&app.reference.job_offers);

    ui.horizontal(|ui| {
        ui.label("Filtrer:");
        egui::ComboBox::from_id_salt("career_filter")
            .selected_text(app.career_filter.label())
            .width(220.0)
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut app.career_filter, CareerFilter::All, CareerFilter::All.label());
                ui.separator();
                for department in &departments {
                    let filter = CareerFilter::Department(department.clone());
                    let label = filter.label();
                    ui.selectable_value(&mut app.career_filter, filter, label);
                }
                ui.separator();
                for contract in ContractType::ALL {
                    ui.selectable_value(&mut app.career_filter, CareerFilter::Contract(contract), contract.label());
                }
                ui.separator();
                for level in ExperienceLevel::ALL {
                    ui.selectable_value(&mut app.career_filter, CareerFilter::Experience(level), level.label());
                }
            });
    });
    ui.add_space(10.0);

    let jobs = site::filter_jobs(&app.reference.job_offers, &app.career_filter);
    ui.label(RichText::new(format!("{} offre(s)", jobs.len())).weak());
    ui.add_space(6.0);

    if jobs.is_empty() {
        ui.label("Aucune offre ne correspond à ce filtre.");
    }

    let mut toggled = None;
    for job in jobs {
        let expanded = app.expanded_job == Some(job.id);
        section(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(RichText::new(&job.title).strong().size(16.0));
                status_badge(ui, job.contract.label(), colors::PRIMARY);
                status_badge(ui, job.experience.label(), colors::NEUTRAL);
            });
            ui.label(
                RichText::new(format!(
                    "{} {}   {} {}   {} {}",
                    egui_phosphor::regular::BUILDINGS,
                    job.department,
                    egui_phosphor::regular::MAP_PIN,
                    job.location,
                    egui_phosphor::regular::MONEY,
                    job.salary
                ))
                .small(),
            );
            ui.label(&job.description);

            if expanded {
                ui.add_space(6.0);
                ui.label(RichText::new("Responsabilités").strong());
                for item in &job.responsibilities {
                    ui.label(format!("• {}", item));
                }
                ui.add_space(4.0);
                ui.label(RichText::new("Profil recherché").strong());
                for item in &job.requirements {
                    ui.label(format!("• {}", item));
                }
                ui.add_space(4.0);
                ui.label(
                    RichText::new(format!("Publiée le {} · Date limite {}", job.posted_date, job.deadline))
                        .small()
                        .weak(),
                );
            }

            ui.horizontal(|ui| {
                let text = if expanded { "Masquer les détails" } else { "Voir les détails" };
                if ui.button(text).clicked() {
                    toggled = Some(job.id);
                }
                if ui.button("Postuler").clicked() {
                    next = Some(Panel::Contact);
                }
            });
        });
        ui.add_space(8.0);
    }

    if let Some(id) = toggled {
        app.expanded_job = if app.expanded_job == Some(id) { None } else { Some(id) };
    }

    next
}

fn show_pricing(app: &App, ui: &mut Ui) -> Option<Panel> {
    let mut next = None;

    hero(ui, "Tarifs", "Des offres adaptées à chaque projet");

    let plans = &app.reference.pricing_plans;
    ui.columns(plans.len().max(1), |columns| {
        for (ui, plan) in columns.iter_mut().zip(plans.iter()) {
            section(ui, |ui| {
                ui.label(RichText::new(&plan.name).strong().size(18.0));
                ui.add_space(8.0);
                ui.label(RichText::new(&plan.description).size(22.0).strong().color(colors::PRIMARY));
                ui.add_space(8.0);
                for feature in &plan.features {
                    ui.label(format!("{} {}", egui_phosphor::regular::CHECK, feature));
                }
                ui.add_space(10.0);
                if primary_button_with_icon(ui, "", &plan.call_to_action).clicked() {
                    next = Some(Panel::Contact);
                }
            });
        }
    });

    next
}

fn show_footer(ui: &mut Ui) {
    ui.separator();
    ui.horizontal_wrapped(|ui| {
        ui.label(RichText::new(COMPANY).strong());
        ui.label(RichText::new("· dataspatialintelligence@gmail.com · Yaoundé, Damas, Cameroun").small().weak());
    });
}
