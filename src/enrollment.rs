//! Three-step "add student" wizard.

use std::path::PathBuf;

use chrono::{DateTime, Local, NaiveDate};

use crate::config::FeesConfig;
use crate::models::{CreateStudent, PaymentData, PaymentMethod};
use crate::receipt::{ReceiptData, TuitionPlan};
use crate::validation::{FieldErrors, is_valid_cameroon_phone, is_valid_email};

/// Courses offered on the enrollment form.
pub const ENROLLMENT_COURSES: [&str; 6] = [
    "Développement Web",
    "Data Science",
    "Design UI/UX",
    "Marketing Digital",
    "Machine Learning",
    "Cybersécurité",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum EnrollmentStep {
    #[default]
    Info,
    Photo,
    Tuition,
}

impl EnrollmentStep {
    pub const ALL: [EnrollmentStep; 3] = [EnrollmentStep::Info, EnrollmentStep::Photo, EnrollmentStep::Tuition];

    pub fn label(&self) -> &'static str {
        match self {
            EnrollmentStep::Info => "Infos",
            EnrollmentStep::Photo => "Photo",
            EnrollmentStep::Tuition => "Scolarité",
        }
    }

    pub fn number(&self) -> usize {
        *self as usize + 1
    }

    fn next(self) -> Option<Self> {
        match self {
            EnrollmentStep::Info => Some(EnrollmentStep::Photo),
            EnrollmentStep::Photo => Some(EnrollmentStep::Tuition),
            EnrollmentStep::Tuition => None,
        }
    }

    fn previous(self) -> Option<Self> {
        match self {
            EnrollmentStep::Info => None,
            EnrollmentStep::Photo => Some(EnrollmentStep::Info),
            EnrollmentStep::Tuition => Some(EnrollmentStep::Photo),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Masculin",
            Gender::Female => "Féminin",
            Gender::Other => "Autre",
        }
    }
}

/// Payment means accepted at the enrollment desk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeskPayment {
    #[default]
    Cash,
    MobileMoney,
}

impl DeskPayment {
    pub const ALL: [DeskPayment; 2] = [DeskPayment::Cash, DeskPayment::MobileMoney];

    pub fn label(&self) -> &'static str {
        match self {
            DeskPayment::Cash => "Espèces",
            DeskPayment::MobileMoney => "Mobile Money",
        }
    }
}

impl From<DeskPayment> for PaymentMethod {
    fn from(method: DeskPayment) -> Self {
        match method {
            DeskPayment::Cash => PaymentMethod::Cash,
            DeskPayment::MobileMoney => PaymentMethod::MobileMoney,
        }
    }
}

/// State of the enrollment wizard.
#[derive(Debug, Clone)]
pub struct EnrollmentForm {
    pub step: EnrollmentStep,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub gender: Option<Gender>,
    pub birth_date: Option<NaiveDate>,
    pub course: String,
    pub photo: Option<PathBuf>,
    pub registration_fees: bool,
    pub tuition_fees: bool,
    pub tuition_plan: TuitionPlan,
    pub payment_method: DeskPayment,
    pub errors: FieldErrors,
    fees: FeesConfig,
}

impl Default for EnrollmentForm {
    fn default() -> Self {
        Self::new(FeesConfig::default())
    }
}

impl EnrollmentForm {
    pub fn new(fees: FeesConfig) -> Self {
        Self {
            step: EnrollmentStep::Info,
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            gender: None,
            birth_date: None,
            course: String::new(),
            photo: None,
            registration_fees: true,
            tuition_fees: false,
            tuition_plan: TuitionPlan::Full,
            payment_method: DeskPayment::Cash,
            errors: FieldErrors::new(),
            fees,
        }
    }

    pub fn fees(&self) -> &FeesConfig {
        &self.fees
    }

    /// Check the identity step. Errors are kept on the form.
    pub fn validate_info(&mut self) -> bool {
        self.errors = FieldErrors::new();
        self.errors.require("first_name", &self.first_name, "Le prénom est requis");
        self.errors.require("last_name", &self.last_name, "Le nom est requis");

        if !self.errors.require("email", &self.email, "L'email est requis") && !is_valid_email(self.email.trim()) {
            self.errors.insert("email", "Format d'email invalide");
        }

        if !self.errors.require("phone", &self.phone, "Le téléphone est requis")
            && !is_valid_cameroon_phone(&self.phone)
        {
            self.errors
                .insert("phone", "Format: +237 6XX XX XX XX (10 chiffres après +237)");
        }

        if self.gender.is_none() {
            self.errors.insert("gender", "Le genre est requis");
        }
        if self.birth_date.is_none() {
            self.errors.insert("birth_date", "La date de naissance est requise");
        }
        self.errors.require("course", &self.course, "Le cours est requis");

        self.errors.is_empty()
    }

    /// Advance one step. Leaving the identity step requires it to validate.
    pub fn next(&mut self) -> bool {
        if self.step == EnrollmentStep::Info && !self.validate_info() {
            return false;
        }
        match self.step.next() {
            Some(step) => {
                self.step = step;
                true
            }
            None => false,
        }
    }

    pub fn back(&mut self) {
        if let Some(step) = self.step.previous() {
            self.step = step;
        }
    }

    /// Jump to an earlier step. Forward jumps are ignored.
    pub fn go_to(&mut self, step: EnrollmentStep) -> bool {
        if step < self.step {
            self.step = step;
            true
        } else {
            false
        }
    }

    pub fn is_last_step(&self) -> bool {
        self.step == EnrollmentStep::Tuition
    }

    pub fn tuition_amount(&self) -> i64 {
        match self.tuition_plan {
            TuitionPlan::Full => self.fees.tuition,
            TuitionPlan::Installment => self.fees.installment,
        }
    }

    /// Amount collected today.
    pub fn total_amount(&self) -> i64 {
        let registration = if self.registration_fees { self.fees.registration } else { 0 };
        let tuition = if self.tuition_fees { self.tuition_amount() } else { 0 };
        registration + tuition
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
    }

    /// Build the receipt for the enrollment made at `now`.
    ///
    /// Returns `None` and moves back to the first step when the identity
    /// fields no longer validate.
    pub fn submit(&mut self, now: DateTime<Local>) -> Option<ReceiptData> {
        if !self.validate_info() {
            self.step = EnrollmentStep::Info;
            return None;
        }

        Some(ReceiptData {
            receipt_id: receipt_id(now.timestamp_millis()),
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            course: self.course.clone(),
            registration_fees: self.registration_fees,
            tuition_fees: self.tuition_fees,
            tuition_plan: self.tuition_plan,
            payment_method: self.payment_method,
            total_amount: self.total_amount(),
            photo: self.photo.clone(),
            date: now.format("%d/%m/%Y").to_string(),
            fees: self.fees.clone(),
        })
    }

    /// The student record added to the roster on submit.
    pub fn to_create_student(&self) -> CreateStudent {
        CreateStudent {
            name: self.full_name(),
            email: self.email.trim().to_string(),
            course: self.course.clone(),
            phone: Some(self.phone.trim().to_string()),
            address: None,
            birth_date: self.birth_date,
        }
    }
}

impl ReceiptData {
    /// Fees owed over the whole enrollment.
    pub fn account_total(&self) -> i64 {
        self.fees.registration + self.fees.tuition
    }

    /// The payment entered in the ledger, if anything was paid.
    pub fn initial_payment(&self, date: NaiveDate) -> Option<PaymentData> {
        (self.total_amount > 0).then(|| PaymentData {
            amount: self.total_amount,
            method: self.payment_method.into(),
            date,
            notes: format!("Reçu {}", self.receipt_id),
        })
    }
}

/// `MS-` followed by the last six digits of a millisecond timestamp.
pub fn receipt_id(timestamp_millis: i64) -> String {
    format!("MS-{:06}", timestamp_millis.rem_euclid(1_000_000))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn filled() -> EnrollmentForm {
        let mut form = EnrollmentForm::default();
        form.first_name = "Awa".to_string();
        form.last_name = "Ngono".to_string();
        form.email = "awa@email.com".to_string();
        form.phone = "+237 677 00 00 00".to_string();
        form.gender = Some(Gender::Female);
        form.birth_date = NaiveDate::from_ymd_opt(2002, 4, 18);
        form.course = ENROLLMENT_COURSES[1].to_string();
        form
    }

    #[test]
    fn test_empty_info_reports_every_field() {
        let mut form = EnrollmentForm::default();
        assert!(!form.next());
        assert_eq!(form.step, EnrollmentStep::Info);
        assert_eq!(form.errors.len(), 7);
        assert_eq!(form.errors.get("first_name"), Some("Le prénom est requis"));
        assert_eq!(form.errors.get("course"), Some("Le cours est requis"));
    }

    #[test]
    fn test_format_errors() {
        let mut form = filled();
        form.email = "awa@email".to_string();
        form.phone = "+237 12345".to_string();
        assert!(!form.validate_info());
        assert_eq!(form.errors.get("email"), Some("Format d'email invalide"));
        assert_eq!(
            form.errors.get("phone"),
            Some("Format: +237 6XX XX XX XX (10 chiffres après +237)")
        );
    }

    #[test]
    fn test_navigation_only_jumps_back() {
        let mut form = filled();
        assert!(form.next());
        assert!(form.next());
        assert!(form.is_last_step());
        assert!(!form.next());

        assert!(!form.go_to(EnrollmentStep::Tuition));
        assert!(form.go_to(EnrollmentStep::Info));
        assert_eq!(form.step, EnrollmentStep::Info);
        assert!(!form.go_to(EnrollmentStep::Photo));
    }

    #[test]
    fn test_total_amount() {
        let mut form = filled();
        assert_eq!(form.total_amount(), 15_000);

        form.tuition_fees = true;
        assert_eq!(form.total_amount(), 80_000);

        form.tuition_plan = TuitionPlan::Installment;
        assert_eq!(form.total_amount(), 47_500);

        form.registration_fees = false;
        assert_eq!(form.total_amount(), 32_500);

        form.tuition_fees = false;
        assert_eq!(form.total_amount(), 0);
    }

    #[test]
    fn test_submit_builds_receipt() {
        let mut form = filled();
        form.tuition_fees = true;
        form.payment_method = DeskPayment::MobileMoney;
        let now = Local.with_ymd_and_hms(2024, 12, 9, 10, 30, 0).unwrap();

        let receipt = form.submit(now).unwrap();
        assert!(receipt.receipt_id.starts_with("MS-"));
        assert_eq!(receipt.receipt_id.len(), 9);
        assert_eq!(receipt.date, "09/12/2024");
        assert_eq!(receipt.total_amount, 80_000);
        assert_eq!(receipt.payment_method, DeskPayment::MobileMoney);

        let payment = receipt.initial_payment(now.date_naive()).unwrap();
        assert_eq!(payment.method, PaymentMethod::MobileMoney);
        assert_eq!(payment.notes, format!("Reçu {}", receipt.receipt_id));
        assert_eq!(receipt.account_total(), 80_000);

        let student = form.to_create_student();
        assert_eq!(student.name, "Awa Ngono");
        assert_eq!(student.course, "Data Science");
    }

    #[test]
    fn test_submit_rejects_invalid_info() {
        let mut form = filled();
        form.next();
        form.next();
        form.email.clear();
        let now = Local.with_ymd_and_hms(2024, 12, 9, 10, 30, 0).unwrap();
        assert!(form.submit(now).is_none());
        assert_eq!(form.step, EnrollmentStep::Info);
    }

    #[test]
    fn test_receipt_id_keeps_six_digits() {
        assert_eq!(receipt_id(1_733_740_200_123), "MS-200123");
        assert_eq!(receipt_id(1_700_000_000_042), "MS-000042");
    }
}
