//! First-run sign-up wizard.
//!
//! Collects the organisation account, simulates the sign-up request and
//! writes the resulting configuration before closing.

use std::path::PathBuf;
use std::sync::mpsc;

use eframe::egui::{self, RichText};

use crate::config::AppConfig;
use crate::registration::{RegisterForm, RegisterPayload, RegisterStep, SUBMIT_DELAY, simulate_request};

use super::auth_pages::register_step_fields;
use super::components::colors;

/// Sign-up request state.
#[derive(Default, Clone)]
pub enum SubmitState {
    #[default]
    Idle,
    Sending,
    Failed(String),
}

/// Setup wizard state.
pub struct SetupWizard {
    /// Current step: welcome, the three sign-up steps, confirmation.
    pub current_step: usize,
    /// Sign-up form shared with the public register page.
    pub form: RegisterForm,
    /// Configuration being built.
    pub config: AppConfig,
    pub submit_state: SubmitState,
    /// Wizard completed flag.
    pub completed: bool,
}

impl Default for SetupWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl SetupWizard {
    pub fn new() -> Self {
        Self {
            current_step: 0,
            form: RegisterForm::default(),
            config: AppConfig::default(),
            submit_state: SubmitState::Idle,
            completed: false,
        }
    }

    /// Total number of steps.
    const TOTAL_STEPS: usize = 5;

    /// Sign-up step shown at the current position, if any.
    fn register_step(&self) -> Option<RegisterStep> {
        match self.current_step {
            1..=3 => RegisterStep::ALL.get(self.current_step - 1).copied(),
            _ => None,
        }
    }

    fn step_title(&self) -> &'static str {
        match self.register_step() {
            Some(step) => step.title(),
            None if self.current_step == 0 => "Bienvenue",
            None => "Confirmation",
        }
    }

    /// Validate the visible sign-up step and move forward.
    fn advance(&mut self) {
        if self.register_step().is_some() && !self.form.validate_step() {
            return;
        }
        self.current_step += 1;
        if let Some(step) = self.register_step() {
            self.form.step = step;
        }
    }

    fn go_back(&mut self) {
        self.current_step = self.current_step.saturating_sub(1);
        if let Some(step) = self.register_step() {
            self.form.back();
            self.form.step = step;
        }
    }

    /// Store the accepted sign-up in the configuration.
    fn apply(&mut self, payload: &RegisterPayload) {
        self.config.organization = payload.to_organization();
    }
}

/// Setup wizard application.
pub struct SetupApp {
    pub wizard: SetupWizard,
    pub initial_error: Option<String>,
    pub config_path: PathBuf,
    pub rt: tokio::runtime::Runtime,
    submit_rx: Option<mpsc::Receiver<Result<RegisterPayload, String>>>,
}

impl SetupApp {
    pub fn new(
        wizard: SetupWizard,
        initial_error: Option<String>,
        config_path: PathBuf,
        rt: tokio::runtime::Runtime,
    ) -> Self {
        Self {
            wizard,
            initial_error,
            config_path,
            rt,
            submit_rx: None,
        }
    }

    /// Send the sign-up asynchronously.
    fn start_submit(&mut self) {
        let Some(payload) = self.wizard.form.submit() else {
            // Jump to the step holding the first error
            if let Some(index) = RegisterStep::ALL.iter().position(|s| *s == self.wizard.form.step) {
                self.wizard.current_step = index + 1;
            }
            return;
        };

        let (tx, rx) = mpsc::channel();
        self.submit_rx = Some(rx);
        self.wizard.submit_state = SubmitState::Sending;

        self.rt.spawn(async move {
            let result = simulate_request("Register", &payload, SUBMIT_DELAY)
                .await
                .map(|()| payload)
                .map_err(|e| e.to_string());
            let _ = tx.send(result);
        });
    }

    /// Check for the async sign-up result.
    fn poll_submit_result(&mut self) {
        if let Some(rx) = &self.submit_rx
            && let Ok(result) = rx.try_recv()
        {
            match result {
                Ok(payload) => {
                    self.wizard.apply(&payload);
                    self.wizard.submit_state = SubmitState::Idle;
                    self.wizard.completed = true;
                }
                Err(e) => self.wizard.submit_state = SubmitState::Failed(e),
            }
            self.submit_rx = None;
        }
    }
}

impl eframe::App for SetupApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_submit_result();

        if matches!(self.wizard.submit_state, SubmitState::Sending) {
            ctx.request_repaint();
        }

        // Show initial error dialog
        if let Some(err) = self.initial_error.clone() {
            egui::Window::new("Erreur de configuration")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.colored_label(colors::ERROR, &err);
                    ui.add_space(10.0);
                    if ui.button("OK").clicked() {
                        self.initial_error = None;
                    }
                });
            return;
        }

        let mut submit = false;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(20.0);

                // Header
                ui.horizontal(|ui| {
                    ui.heading(RichText::new("MAAT School").size(24.0).strong().color(colors::PRIMARY));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(format!(
                            "Étape {} sur {}",
                            self.wizard.current_step + 1,
                            SetupWizard::TOTAL_STEPS
                        ));
                    });
                });

                ui.separator();
                ui.add_space(10.0);

                ui.heading(self.wizard.step_title());
                if let Some(step) = self.wizard.register_step() {
                    ui.label(RichText::new(step.description()).weak());
                }
                ui.add_space(20.0);

                match self.wizard.register_step() {
                    Some(_) => register_step_fields(ui, &mut self.wizard.form),
                    None if self.wizard.current_step == 0 => show_welcome_step(ui),
                    None => show_confirmation_step(ui, &self.wizard),
                }

                ui.add_space(30.0);
                ui.separator();

                let sending = matches!(self.wizard.submit_state, SubmitState::Sending);

                // Navigation buttons
                ui.horizontal(|ui| {
                    if self.wizard.current_step > 0
                        && ui.add_enabled(!sending, egui::Button::new("< Retour")).clicked()
                    {
                        self.wizard.go_back();
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if self.wizard.current_step < SetupWizard::TOTAL_STEPS - 1 {
                            let btn_text = if self.wizard.current_step == 0 {
                                "Commencer >"
                            } else {
                                "Suivant >"
                            };
                            if ui.button(btn_text).clicked() {
                                self.wizard.advance();
                            }
                        } else if sending {
                            ui.spinner();
                            ui.label("Création du compte...");
                        } else if ui.button("Créer le compte").clicked() {
                            submit = true;
                        }
                    });
                });

                if let SubmitState::Failed(ref e) = self.wizard.submit_state {
                    ui.add_space(10.0);
                    ui.colored_label(colors::ERROR, e);
                }
            });
        });

        if submit {
            self.start_submit();
        }

        // Handle completion
        if self.wizard.completed {
            match self.wizard.config.save(&self.config_path) {
                Ok(()) => {
                    tracing::info!("Config saved to {:?}, restart required", self.config_path);
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
                Err(e) => {
                    self.initial_error = Some(format!("Échec de l'enregistrement de la configuration: {}", e));
                    self.wizard.completed = false;
                }
            }
        }
    }
}

fn show_welcome_step(ui: &mut egui::Ui) {
    ui.label("Bienvenue sur MAAT School !");
    ui.add_space(10.0);
    ui.label("Cet assistant crée le compte de votre établissement.");
    ui.add_space(20.0);
    ui.label("Vous aurez besoin de :");
    ui.add_space(5.0);
    ui.label("  - le nom et la taille de votre établissement");
    ui.label("  - vos coordonnées de contact");
    ui.label("  - un mot de passe d'au moins 8 caractères");
}

fn show_confirmation_step(ui: &mut egui::Ui, wizard: &SetupWizard) {
    let form = &wizard.form;

    egui::Grid::new("confirm_grid")
        .num_columns(2)
        .spacing([20.0, 8.0])
        .show(ui, |ui| {
            ui.label("Établissement:");
            ui.label(&form.organization);
            ui.end_row();

            ui.label("Taille:");
            ui.label(if form.size.is_empty() { "-" } else { &form.size });
            ui.end_row();

            ui.label("Site web:");
            ui.label(if form.website.is_empty() { "-" } else { &form.website });
            ui.end_row();

            ui.label("Contact:");
            ui.label(&form.full_name);
            ui.end_row();

            ui.label("Email:");
            ui.label(&form.email);
            ui.end_row();
        });

    ui.add_space(20.0);
    ui.label("Cliquez sur 'Créer le compte' pour enregistrer la configuration.");
    ui.label(RichText::new("L'application devra être relancée ensuite.").weak());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wizard_steps_follow_register_steps() {
        let mut wizard = SetupWizard::new();
        assert_eq!(wizard.step_title(), "Bienvenue");
        assert_eq!(wizard.register_step(), None);

        wizard.advance();
        assert_eq!(wizard.register_step(), Some(RegisterStep::Organization));

        // Empty organisation keeps the wizard on the same step
        wizard.advance();
        assert_eq!(wizard.current_step, 1);
        assert!(wizard.form.errors.get("organization").is_some());

        wizard.form.organization = "Centre Maat".to_string();
        wizard.advance();
        assert_eq!(wizard.register_step(), Some(RegisterStep::Account));
        assert_eq!(wizard.form.step, RegisterStep::Account);

        wizard.go_back();
        assert_eq!(wizard.form.step, RegisterStep::Organization);
    }

    #[test]
    fn test_apply_sets_organization() {
        let mut wizard = SetupWizard::new();
        wizard.form = RegisterForm {
            organization: "Centre Maat".to_string(),
            full_name: "Jean Dupont".to_string(),
            email: "jean@maat.cm".to_string(),
            password: "motdepasse1".to_string(),
            confirm_password: "motdepasse1".to_string(),
            agree_terms: true,
            ..RegisterForm::default()
        };
        let payload = wizard.form.submit().unwrap();
        wizard.apply(&payload);

        assert_eq!(wizard.config.organization.name, "Centre Maat");
        assert_eq!(wizard.config.organization.contact_name, "Jean Dupont");
        assert!(wizard.config.validate().is_ok());
    }
}
