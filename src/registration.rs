//! Organisation sign-up wizard, login form and contact form.
//!
//! None of these reach a server: submitting waits [`SUBMIT_DELAY`] on the
//! runtime and logs the payload, with passwords redacted.

use std::time::Duration;

use serde::{Serialize, Serializer};

use crate::config::OrganizationConfig;
use crate::error::Result;
use crate::validation::{FieldErrors, is_valid_email, password_strength};

/// Latency of a simulated request.
pub const SUBMIT_DELAY: Duration = Duration::from_millis(1500);

/// How long the contact form shows its success banner before clearing.
pub const CONTACT_RESET_DELAY: Duration = Duration::from_secs(3);

pub const ORGANIZATION_SIZES: [(&str, &str); 4] = [
    ("1-10", "1-10 employés"),
    ("11-50", "11-50 employés"),
    ("51-200", "51-200 employés"),
    ("200+", "200+ employés"),
];

fn redact<S: Serializer>(_: &str, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str("********")
}

/// Wait like a network round trip, then log `payload` as JSON.
pub async fn simulate_request<T: Serialize>(action: &str, payload: &T, delay: Duration) -> Result<()> {
    let body = serde_json::to_string(payload)?;
    tokio::time::sleep(delay).await;
    tracing::info!("{}: {}", action, body);
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum RegisterStep {
    #[default]
    Organization,
    Account,
    Security,
}

impl RegisterStep {
    pub const ALL: [RegisterStep; 3] = [RegisterStep::Organization, RegisterStep::Account, RegisterStep::Security];

    pub fn title(&self) -> &'static str {
        match self {
            RegisterStep::Organization => "Organisation",
            RegisterStep::Account => "Compte",
            RegisterStep::Security => "Sécurité",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            RegisterStep::Organization => "Informations sur votre établissement",
            RegisterStep::Account => "Vos informations personnelles",
            RegisterStep::Security => "Sécurisez votre compte",
        }
    }
}

/// Sign-up wizard state.
#[derive(Debug, Clone, Default)]
pub struct RegisterForm {
    pub step: RegisterStep,
    pub organization: String,
    pub size: String,
    pub website: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
    pub agree_terms: bool,
    pub show_password: bool,
    pub errors: FieldErrors,
}

/// What the sign-up request would carry.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterPayload {
    pub organization: String,
    pub size: String,
    pub website: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    #[serde(serialize_with = "redact")]
    pub password: String,
    pub agree_terms: bool,
}

impl RegisterForm {
    /// Prefill from an existing organisation.
    pub fn from_organization(org: &OrganizationConfig) -> Self {
        Self {
            organization: org.name.clone(),
            size: org.size.clone(),
            website: org.website.clone(),
            full_name: org.contact_name.clone(),
            email: org.email.clone(),
            phone: org.phone.clone(),
            ..Self::default()
        }
    }

    /// Validate the fields of the current step.
    pub fn validate_step(&mut self) -> bool {
        self.errors = FieldErrors::new();
        match self.step {
            RegisterStep::Organization => {
                self.errors
                    .require("organization", &self.organization, "Le nom de l'établissement est requis");
            }
            RegisterStep::Account => {
                self.errors.require("full_name", &self.full_name, "Le nom complet est requis");
                if !self.errors.require("email", &self.email, "L'email est requis")
                    && !is_valid_email(self.email.trim())
                {
                    self.errors.insert("email", "Format d'email invalide");
                }
            }
            RegisterStep::Security => {
                if self.password.is_empty() {
                    self.errors.insert("password", "Le mot de passe est requis");
                } else if self.password.chars().count() < 8 {
                    self.errors
                        .insert("password", "Le mot de passe doit contenir au moins 8 caractères");
                }
                if self.confirm_password != self.password {
                    self.errors
                        .insert("confirm_password", "Les mots de passe ne correspondent pas");
                }
                if !self.agree_terms {
                    self.errors.insert("agree_terms", "Vous devez accepter les conditions");
                }
            }
        }
        self.errors.is_empty()
    }

    /// Advance when the current step validates. Returns false on the last step.
    pub fn next(&mut self) -> bool {
        if !self.validate_step() {
            return false;
        }
        match self.step {
            RegisterStep::Organization => self.step = RegisterStep::Account,
            RegisterStep::Account => self.step = RegisterStep::Security,
            RegisterStep::Security => return false,
        }
        true
    }

    pub fn back(&mut self) {
        self.errors = FieldErrors::new();
        self.step = match self.step {
            RegisterStep::Organization | RegisterStep::Account => RegisterStep::Organization,
            RegisterStep::Security => RegisterStep::Account,
        };
    }

    pub fn password_strength(&self) -> u8 {
        password_strength(&self.password)
    }

    /// Validate every step and build the payload. Stops on the first
    /// failing step and stays there.
    pub fn submit(&mut self) -> Option<RegisterPayload> {
        for step in RegisterStep::ALL {
            self.step = step;
            if !self.validate_step() {
                return None;
            }
        }

        Some(RegisterPayload {
            organization: self.organization.trim().to_string(),
            size: self.size.clone(),
            website: self.website.trim().to_string(),
            full_name: self.full_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            password: self.password.clone(),
            agree_terms: self.agree_terms,
        })
    }
}

impl RegisterPayload {
    pub fn to_organization(&self) -> OrganizationConfig {
        OrganizationConfig {
            name: self.organization.clone(),
            size: self.size.clone(),
            website: self.website.clone(),
            contact_name: self.full_name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
        }
    }
}

/// Login form state.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
    pub show_password: bool,
    pub errors: FieldErrors,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginPayload {
    pub email: String,
    #[serde(serialize_with = "redact")]
    pub password: String,
    pub remember_me: bool,
}

impl LoginForm {
    pub fn submit(&mut self) -> Option<LoginPayload> {
        self.errors = FieldErrors::new();
        if !self.errors.require("email", &self.email, "L'email est requis") && !is_valid_email(self.email.trim()) {
            self.errors.insert("email", "Format d'email invalide");
        }
        if self.password.is_empty() {
            self.errors.insert("password", "Le mot de passe est requis");
        }
        if !self.errors.is_empty() {
            return None;
        }

        Some(LoginPayload {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            remember_me: self.remember_me,
        })
    }

    /// Forget the password, keep the email when "remember me" is set.
    pub fn after_login(&mut self) {
        let email = if self.remember_me { std::mem::take(&mut self.email) } else { String::new() };
        *self = Self {
            email,
            remember_me: self.remember_me,
            ..Self::default()
        };
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContactSubject {
    QuoteRequest,
    InformationRequest,
    Collaboration,
    Other,
}

impl ContactSubject {
    pub const ALL: [ContactSubject; 4] = [
        ContactSubject::QuoteRequest,
        ContactSubject::InformationRequest,
        ContactSubject::Collaboration,
        ContactSubject::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ContactSubject::QuoteRequest => "Demande de devis",
            ContactSubject::InformationRequest => "Demande d'information",
            ContactSubject::Collaboration => "Proposition de collaboration",
            ContactSubject::Other => "Autre",
        }
    }
}

/// Where the contact form is in its send cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactState {
    #[default]
    Editing,
    Sending,
    Sent,
}

/// Public contact form.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: Option<ContactSubject>,
    pub message: String,
    pub state: ContactState,
    pub errors: FieldErrors,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: ContactSubject,
    pub message: String,
}

impl ContactForm {
    /// Validate and switch to sending.
    pub fn submit(&mut self) -> Option<ContactMessage> {
        self.errors = FieldErrors::new();
        self.errors.require("name", &self.name, "Le nom est requis");
        if !self.errors.require("email", &self.email, "L'email est requis") && !is_valid_email(self.email.trim()) {
            self.errors.insert("email", "Format d'email invalide");
        }
        if self.subject.is_none() {
            self.errors.insert("subject", "Sélectionnez un objet");
        }
        self.errors.require("message", &self.message, "Le message est requis");

        let subject = self.subject?;
        if !self.errors.is_empty() {
            return None;
        }

        self.state = ContactState::Sending;
        Some(ContactMessage {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            subject,
            message: self.message.trim().to_string(),
        })
    }

    pub fn mark_sent(&mut self) {
        self.state = ContactState::Sent;
    }

    /// Clear the form once the success banner has been shown.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_register() -> RegisterForm {
        RegisterForm {
            organization: "Centre de Formation Maat".to_string(),
            size: "11-50".to_string(),
            full_name: "Jean Dupont".to_string(),
            email: "jean@etablissement.com".to_string(),
            password: "Secret#2024".to_string(),
            confirm_password: "Secret#2024".to_string(),
            agree_terms: true,
            ..RegisterForm::default()
        }
    }

    #[test]
    fn test_register_steps_validate_before_advancing() {
        let mut form = RegisterForm::default();
        assert!(!form.next());
        assert_eq!(form.step, RegisterStep::Organization);
        assert!(form.errors.get("organization").is_some());

        form.organization = "Maat".to_string();
        assert!(form.next());
        form.email = "jean@".to_string();
        assert!(!form.next());
        assert_eq!(form.errors.get("email"), Some("Format d'email invalide"));
        assert_eq!(form.step, RegisterStep::Account);
    }

    #[test]
    fn test_register_security_rules() {
        let mut form = complete_register();
        form.step = RegisterStep::Security;
        form.confirm_password = "Secret#2025".to_string();
        form.agree_terms = false;
        assert!(!form.validate_step());
        assert!(form.errors.get("confirm_password").is_some());
        assert!(form.errors.get("agree_terms").is_some());
        assert_eq!(form.password_strength(), 4);
    }

    #[test]
    fn test_register_payload_redacts_password() {
        let mut form = complete_register();
        let payload = form.submit().unwrap();
        let json = serde_json::to_string(&payload).unwrap();

        assert!(json.contains("\"password\":\"********\""));
        assert!(!json.contains("Secret#2024"));
        assert_eq!(payload.to_organization().contact_name, "Jean Dupont");
        assert_eq!(form.step, RegisterStep::Security);
    }

    #[test]
    fn test_login_requires_fields() {
        let mut form = LoginForm::default();
        assert!(form.submit().is_none());
        assert_eq!(form.errors.len(), 2);

        form.email = "admin@maat.com".to_string();
        form.password = "x".to_string();
        form.remember_me = true;
        assert!(form.submit().is_some());

        form.after_login();
        assert_eq!(form.email, "admin@maat.com");
        assert!(form.password.is_empty());
    }

    #[test]
    fn test_contact_cycle() {
        let mut form = ContactForm {
            name: "Paul".to_string(),
            email: "paul@email.com".to_string(),
            message: "Bonjour".to_string(),
            ..ContactForm::default()
        };
        assert!(form.submit().is_none());
        assert_eq!(form.errors.get("subject"), Some("Sélectionnez un objet"));
        assert_eq!(form.state, ContactState::Editing);

        form.subject = Some(ContactSubject::Collaboration);
        let message = form.submit().unwrap();
        assert_eq!(form.state, ContactState::Sending);
        assert_eq!(serde_json::to_value(message.subject).unwrap(), "collaboration");

        form.mark_sent();
        form.reset();
        assert!(form.name.is_empty());
        assert_eq!(form.state, ContactState::Editing);
    }

    #[tokio::test]
    async fn test_simulated_request_waits() {
        let payload = complete_register().submit().unwrap();
        let started = std::time::Instant::now();
        simulate_request("Register", &payload, Duration::from_millis(20))
            .await
            .unwrap();
        assert!(started.elapsed() >= Duration::from_millis(20));
    }
}
