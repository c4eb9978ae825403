//! Main application UI.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use chrono::{DateTime, Local, NaiveDate};
use eframe::egui::{self, Align, Layout, RichText};
use rust_xlsxwriter::XlsxError;
use serde::Serialize;
use tokio::sync::mpsc;

use crate::attendance::AttendanceSheet;
use crate::config::{AppConfig, StartView, Theme};
use crate::db::{self, Store};
use crate::enrollment::EnrollmentForm;
use crate::export;
use crate::fixtures;
use crate::models::attendance::MonthlyAttendance;
use crate::models::course::CourseProgress;
use crate::models::student::StudentGrade;
use crate::models::teacher::{TaughtCourse, TeacherRating};
use crate::models::{
    Course, CourseStatus, CreateCourse, CreateStaffMember, CreateTeacher, DailyAttendance, DashboardStat, JobOffer,
    Notification, PaymentStatus, PricingPlan, Service, Student, StudentAttendance, StudentStatus, Teacher,
    TeacherStatus, TeamMember, UpdateCourse, UpdateStudent, UpdateTeacher,
};
use crate::receipt::ReceiptData;
use crate::registration::{
    CONTACT_RESET_DELAY, ContactForm, LoginForm, RegisterForm, RegisterPayload, SUBMIT_DELAY, simulate_request,
};
use crate::site::CareerFilter;
use crate::timetable::{CourseFilter, Timetable};
use crate::tuition::PaymentForm;

use super::components::colors;
use super::{
    attendance_panel, auth_pages, contact_page, courses_panel, dashboard, enrollment_wizard, receipt_view,
    settings_panel, site_pages, students_panel, teachers_panel, timetable_panel, tuition_panel,
};

/// Rows per page in the admin lists.
pub const PAGE_SIZE: usize = 10;

/// Current panel being displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Panel {
    #[default]
    Home,
    About,
    Services,
    Careers,
    Pricing,
    Contact,
    Login,
    Register,
    Dashboard,
    Students,
    AddStudent,
    Receipt,
    Teachers,
    Courses,
    Attendance,
    Tuition,
    Timetable,
    Settings,
}

impl Panel {
    /// Pages of the public site navigation bar.
    pub const SITE: [Panel; 6] = [
        Panel::Home,
        Panel::About,
        Panel::Services,
        Panel::Careers,
        Panel::Pricing,
        Panel::Contact,
    ];

    /// Entries of the admin sidebar.
    pub const ADMIN: [Panel; 8] = [
        Panel::Dashboard,
        Panel::Students,
        Panel::Teachers,
        Panel::Courses,
        Panel::Attendance,
        Panel::Tuition,
        Panel::Timetable,
        Panel::Settings,
    ];

    /// Get the display name for the panel.
    pub fn name(&self) -> &'static str {
        match self {
            Panel::Home => "Accueil",
            Panel::About => "À propos",
            Panel::Services => "Services",
            Panel::Careers => "Carrières",
            Panel::Pricing => "Tarifs",
            Panel::Contact => "Contact",
            Panel::Login => "Connexion",
            Panel::Register => "Inscription",
            Panel::Dashboard => "Tableau de bord",
            Panel::Students => "Étudiants",
            Panel::AddStudent => "Ajouter un étudiant",
            Panel::Receipt => "Reçu",
            Panel::Teachers => "Enseignants",
            Panel::Courses => "Cours",
            Panel::Attendance => "Présence",
            Panel::Tuition => "Scolarité",
            Panel::Timetable => "Emplois du temps",
            Panel::Settings => "Paramètres",
        }
    }

    pub fn icon(&self) -> &'static str {
        use egui_phosphor::regular as icons;
        match self {
            Panel::Home => icons::HOUSE,
            Panel::About => icons::INFO,
            Panel::Services => icons::STACK,
            Panel::Careers => icons::BRIEFCASE,
            Panel::Pricing => icons::TAG,
            Panel::Contact => icons::ENVELOPE,
            Panel::Login => icons::SIGN_IN,
            Panel::Register => icons::USER_PLUS,
            Panel::Dashboard => icons::SQUARES_FOUR,
            Panel::Students | Panel::AddStudent => icons::STUDENT,
            Panel::Receipt => icons::RECEIPT,
            Panel::Teachers => icons::CHALKBOARD_TEACHER,
            Panel::Courses => icons::BOOKS,
            Panel::Attendance => icons::CHECK_SQUARE,
            Panel::Tuition => icons::WALLET,
            Panel::Timetable => icons::CALENDAR,
            Panel::Settings => icons::GEAR,
        }
    }

    /// Whether the panel belongs to the admin dashboard.
    pub fn is_admin(&self) -> bool {
        !matches!(
            self,
            Panel::Home
                | Panel::About
                | Panel::Services
                | Panel::Careers
                | Panel::Pricing
                | Panel::Contact
                | Panel::Login
                | Panel::Register
        )
    }
}

/// Messages from async tasks to UI.
pub enum UiMessage {
    LoginFinished(Result<(), String>),
    RegisterFinished(Result<RegisterPayload, String>),
    ContactSent(Result<(), String>),
    /// Clear the contact form if no message was sent since this reset was scheduled.
    ContactResetDue(u64),
}

/// Form state for editing a student.
#[derive(Default, Clone)]
pub struct StudentForm {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub course: String,
    pub phone: String,
    pub address: String,
    pub birth_date: Option<NaiveDate>,
    pub status: StudentStatus,
    pub is_open: bool,
}

impl StudentForm {
    /// Reset the form to default values.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Create a form pre-filled for editing an existing student.
    pub fn edit(student: &Student) -> Self {
        Self {
            id: student.id,
            name: student.name.clone(),
            email: student.email.clone(),
            course: student.course.clone(),
            phone: student.phone.clone().unwrap_or_default(),
            address: student.address.clone().unwrap_or_default(),
            birth_date: student.birth_date,
            status: student.status,
            is_open: true,
        }
    }
}

/// Form state for teacher CRUD.
#[derive(Default, Clone)]
pub struct TeacherForm {
    pub id: Option<u32>,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub phone: String,
    pub address: String,
    pub education: String,
    pub hire_date: Option<NaiveDate>,
    pub status: TeacherStatus,
    pub is_open: bool,
    pub is_editing: bool,
}

impl TeacherForm {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn edit(teacher: &Teacher) -> Self {
        Self {
            id: Some(teacher.id),
            name: teacher.name.clone(),
            email: teacher.email.clone(),
            subject: teacher.subject.clone(),
            phone: teacher.phone.clone().unwrap_or_default(),
            address: teacher.address.clone().unwrap_or_default(),
            education: teacher.education.clone().unwrap_or_default(),
            hire_date: teacher.hire_date,
            status: teacher.status,
            is_open: true,
            is_editing: true,
        }
    }
}

/// Form state for course CRUD.
#[derive(Default, Clone)]
pub struct CourseForm {
    pub id: Option<u32>,
    pub name: String,
    pub code: String,
    pub duration_input: String,
    pub description: String,
    pub teacher: String,
    pub price_input: String,
    pub status: CourseStatus,
    pub is_open: bool,
    pub is_editing: bool,
}

impl CourseForm {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn edit(course: &Course) -> Self {
        Self {
            id: Some(course.id),
            name: course.name.clone(),
            code: course.code.clone(),
            duration_input: course.duration_weeks.to_string(),
            description: course.description.clone().unwrap_or_default(),
            teacher: course.teacher.clone().unwrap_or_default(),
            price_input: course.price.map(|p| p.to_string()).unwrap_or_default(),
            status: course.status,
            is_open: true,
            is_editing: true,
        }
    }
}

/// Invitation of a dashboard user from the team tab.
#[derive(Clone)]
pub struct InviteForm {
    pub name: String,
    pub email: String,
    pub role: String,
    pub is_open: bool,
}

impl Default for InviteForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            role: "Utilisateur".to_string(),
            is_open: false,
        }
    }
}

/// Settings page tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SettingsTab {
    #[default]
    General,
    Team,
}

/// Profile section of the settings page. Kept in memory only.
#[derive(Clone)]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub position: String,
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl Default for ProfileForm {
    fn default() -> Self {
        Self {
            name: "Admin User".to_string(),
            email: "admin@maat.com".to_string(),
            phone: "+237 6 77 00 00 00".to_string(),
            position: "Administrateur".to_string(),
            current_password: String::new(),
            new_password: String::new(),
            confirm_password: String::new(),
        }
    }
}

impl ProfileForm {
    /// Check the password change fields.
    pub fn validate_password_change(&self) -> Result<(), &'static str> {
        if self.current_password.is_empty() {
            return Err("Le mot de passe actuel est requis");
        }
        if self.new_password.chars().count() < 8 {
            return Err("Le nouveau mot de passe doit contenir au moins 8 caractères");
        }
        if self.new_password == self.current_password {
            return Err("Le nouveau mot de passe doit être différent de l'actuel");
        }
        if self.new_password != self.confirm_password {
            return Err("Les mots de passe ne correspondent pas");
        }
        Ok(())
    }

    pub fn clear_passwords(&mut self) {
        self.current_password.clear();
        self.new_password.clear();
        self.confirm_password.clear();
    }
}

/// Read-only records shown by detail views and the public site.
pub struct ReferenceData {
    pub student_grades: Vec<StudentGrade>,
    pub monthly_attendance: Vec<MonthlyAttendance>,
    pub taught_courses: Vec<TaughtCourse>,
    pub teacher_ratings: Vec<TeacherRating>,
    pub course_progress: Vec<CourseProgress>,
    pub dashboard_stats: Vec<DashboardStat>,
    pub notifications: Vec<Notification>,
    pub services: Vec<Service>,
    pub job_offers: Vec<JobOffer>,
    pub team: Vec<TeamMember>,
    pub pricing_plans: Vec<PricingPlan>,
}

impl ReferenceData {
    fn load() -> Self {
        Self {
            student_grades: fixtures::student_grades(),
            monthly_attendance: fixtures::monthly_attendance(),
            taught_courses: fixtures::taught_courses(),
            teacher_ratings: fixtures::teacher_ratings(),
            course_progress: fixtures::course_progress(),
            dashboard_stats: fixtures::dashboard_stats(),
            notifications: fixtures::notifications(),
            services: fixtures::services(),
            job_offers: fixtures::job_offers(),
            team: fixtures::team_members(),
            pricing_plans: fixtures::pricing_plans(),
        }
    }
}

/// Log level for UI messages.
#[derive(Clone, Copy, Debug)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// Log entry for display in the UI.
#[derive(Clone)]
pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    pub message: String,
    pub level: LogLevel,
}

/// Target for delete confirmation dialog.
#[derive(Clone)]
pub enum DeleteTarget {
    Student(u32, String),
    Teacher(u32, String),
    Course(u32, String),
    StaffMember(u32, String),
}

/// Main application state.
pub struct App {
    pub rt: tokio::runtime::Runtime,

    // Message channel for async communication
    pub tx: mpsc::UnboundedSender<UiMessage>,
    pub rx: mpsc::UnboundedReceiver<UiMessage>,

    // Navigation
    pub current_panel: Panel,

    // Domain state
    pub store: Store,
    pub reference: ReferenceData,
    pub timetable: Timetable,

    // Students
    pub student_search: String,
    pub student_page: usize,
    pub student_form: StudentForm,
    pub selected_student: Option<u32>,
    pub enrollment: EnrollmentForm,
    pub receipt: Option<ReceiptData>,

    // Teachers
    pub teacher_search: String,
    pub teacher_page: usize,
    pub teacher_form: TeacherForm,
    pub selected_teacher: Option<u32>,

    // Courses
    pub course_search: String,
    pub course_page: usize,
    pub course_form: CourseForm,
    pub selected_course: Option<u32>,

    // Attendance
    pub attendance_date: NaiveDate,
    pub attendance_course: Option<String>,
    pub attendance_search: String,
    pub attendance_sheets: BTreeMap<NaiveDate, AttendanceSheet>,
    pub attendance_history: Vec<DailyAttendance>,
    pub student_attendance: Vec<StudentAttendance>,
    /// Sheet being filled in the "Nouvelle présence" dialog.
    pub new_attendance: Option<AttendanceSheet>,

    // Tuition
    pub tuition_search: String,
    pub tuition_status: Option<PaymentStatus>,
    pub tuition_page: usize,
    pub payment_form: PaymentForm,
    pub history_student: Option<u32>,

    // Timetable
    pub timetable_week: NaiveDate,
    pub timetable_filter: CourseFilter,

    // Settings
    pub settings_tab: SettingsTab,
    pub profile: ProfileForm,
    pub invite_form: InviteForm,

    // Public site
    pub opened_at: Instant,
    pub career_filter: CareerFilter,
    pub expanded_job: Option<u32>,
    pub selected_service: Option<u32>,
    pub login_form: LoginForm,
    pub login_pending: bool,
    pub register_form: RegisterForm,
    pub register_pending: bool,
    pub contact_form: ContactForm,
    /// Bumped on every contact send so older reset timers are ignored.
    contact_sends: u64,

    // Log messages
    pub log_messages: Vec<LogEntry>,

    // Configuration
    pub config: AppConfig,
    pub config_path: PathBuf,
    pub config_modified: bool,
    applied_theme: Option<Theme>,

    // Dialogs
    pub show_delete_confirm: bool,
    pub delete_target: Option<DeleteTarget>,
    pub error_message: Option<String>,
    pub success_message: Option<String>,
}

impl App {
    pub fn new(config: AppConfig, config_path: PathBuf, rt: tokio::runtime::Runtime) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let today = Local::now().date_naive();
        let attendance_date = fixtures::attendance_start_date();

        let current_panel = match config.ui.start_view {
            StartView::Site => Panel::Home,
            StartView::Admin => Panel::Dashboard,
        };

        let mut attendance_sheets = BTreeMap::new();
        attendance_sheets.insert(
            attendance_date,
            AttendanceSheet::with_marks(fixtures::initial_attendance_marks()),
        );

        let mut app = Self {
            rt,
            tx,
            rx,
            current_panel,
            store: Store::seeded(),
            reference: ReferenceData::load(),
            timetable: fixtures::timetable(),
            student_search: String::new(),
            student_page: 1,
            student_form: StudentForm::default(),
            selected_student: None,
            enrollment: EnrollmentForm::new(config.fees.clone()),
            receipt: None,
            teacher_search: String::new(),
            teacher_page: 1,
            teacher_form: TeacherForm::default(),
            selected_teacher: None,
            course_search: String::new(),
            course_page: 1,
            course_form: CourseForm::default(),
            selected_course: None,
            attendance_date,
            attendance_course: None,
            attendance_search: String::new(),
            attendance_sheets,
            attendance_history: fixtures::daily_attendance(),
            student_attendance: fixtures::student_attendance(),
            new_attendance: None,
            tuition_search: String::new(),
            tuition_status: None,
            tuition_page: 1,
            payment_form: PaymentForm::default(),
            history_student: None,
            timetable_week: today,
            timetable_filter: CourseFilter::All,
            settings_tab: SettingsTab::default(),
            profile: ProfileForm::default(),
            invite_form: InviteForm::default(),
            opened_at: Instant::now(),
            career_filter: CareerFilter::All,
            expanded_job: None,
            selected_service: None,
            login_form: LoginForm::default(),
            login_pending: false,
            register_form: RegisterForm::from_organization(&config.organization),
            register_pending: false,
            contact_form: ContactForm::default(),
            contact_sends: 0,
            log_messages: Vec::new(),
            config,
            config_path,
            config_modified: false,
            applied_theme: None,
            show_delete_confirm: false,
            delete_target: None,
            error_message: None,
            success_message: None,
        };

        app.log_info(format!(
            "Données chargées: {} étudiants, {} enseignants, {} cours",
            app.store.students.len(),
            app.store.teachers.len(),
            app.store.courses.len()
        ));

        app
    }

    /// Log a message to the UI log.
    pub fn log(&mut self, level: LogLevel, message: impl Into<String>) {
        self.log_messages.push(LogEntry {
            timestamp: Local::now(),
            message: message.into(),
            level,
        });

        // Keep only last 100 messages
        if self.log_messages.len() > 100 {
            self.log_messages.remove(0);
        }
    }

    pub fn log_info(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    pub fn log_success(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Success, message);
    }

    pub fn log_warning(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Warning, message);
    }

    pub fn log_error(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }

    /// Show an operation failure in the error dialog and the log.
    fn fail(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!("{}", message);
        self.error_message = Some(message.clone());
        self.log_error(message);
    }

    /// Show a completed operation in the success dialog and the log.
    fn succeed(&mut self, message: impl Into<String>) {
        let message = message.into();
        self.success_message = Some(message.clone());
        self.log_success(message);
    }

    pub fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }

    // Students

    /// Save the student edit form.
    pub fn save_student(&mut self) {
        let form = &self.student_form;
        let data = UpdateStudent {
            name: Some(form.name.clone()),
            email: Some(form.email.clone()),
            course: Some(form.course.clone()),
            status: Some(form.status),
            phone: Some(non_empty(&form.phone)),
            address: Some(non_empty(&form.address)),
            birth_date: Some(form.birth_date),
        };
        let id = form.id;

        if db::student::email_exists(&self.store, &form.email, Some(id)) {
            self.fail(format!("L'email {} est déjà utilisé", form.email.trim()));
            return;
        }

        match db::student::update(&mut self.store, id, data) {
            Ok(Some(student)) => {
                self.student_form.reset();
                self.succeed(format!("Étudiant '{}' mis à jour", student.name));
            }
            Ok(None) => self.fail("Étudiant introuvable"),
            Err(e) => self.fail(e.to_string()),
        }
    }

    /// Finish the enrollment wizard: add the student, open the tuition
    /// account, record what was paid and show the receipt.
    pub fn enroll_student(&mut self) {
        let now = Local::now();
        let Some(receipt) = self.enrollment.submit(now) else {
            self.log_warning("Inscription incomplète");
            return;
        };

        if db::student::email_exists(&self.store, &receipt.email, None) {
            self.fail(format!("L'email {} est déjà utilisé", receipt.email));
            return;
        }

        let student = match db::student::create(&mut self.store, self.enrollment.to_create_student()) {
            Ok(student) => student,
            Err(e) => {
                self.fail(e.to_string());
                return;
            }
        };

        if let Err(e) = db::tuition::open_account(&mut self.store, &student, receipt.account_total()) {
            db::student::delete(&mut self.store, student.id);
            self.fail(e.to_string());
            return;
        }
        if let Some(payment) = receipt.initial_payment(now.date_naive())
            && let Err(e) = self.store.record_payment(student.id, payment)
        {
            db::student::delete(&mut self.store, student.id);
            self.fail(e.to_string());
            return;
        }

        self.log_success(format!("Étudiant inscrit: {} (reçu {})", student.name, receipt.receipt_id));
        self.enrollment = EnrollmentForm::new(self.config.fees.clone());
        self.receipt = Some(receipt);
        self.current_panel = Panel::Receipt;
    }

    /// Write the current receipt to a file chosen by the user.
    pub fn save_receipt(&mut self) {
        let Some(receipt) = self.receipt.clone() else {
            return;
        };
        let Some(path) = export::show_receipt_save_dialog(&receipt.default_file_name()) else {
            return;
        };
        match receipt.save_html(&self.config.school, &path) {
            Ok(()) => self.succeed(format!("Reçu enregistré: {}", path.display())),
            Err(e) => self.fail(format!("Échec de l'enregistrement du reçu: {e}")),
        }
    }

    // Teachers

    pub fn save_teacher(&mut self) {
        let form = self.teacher_form.clone();
        let result = match form.id {
            Some(id) if form.is_editing => {
                let data = UpdateTeacher {
                    name: Some(form.name),
                    email: Some(form.email),
                    subject: Some(form.subject),
                    status: Some(form.status),
                    phone: Some(non_empty(&form.phone)),
                    address: Some(non_empty(&form.address)),
                    education: Some(non_empty(&form.education)),
                };
                match db::teacher::update(&mut self.store, id, data) {
                    Ok(Some(teacher)) => Ok(teacher),
                    Ok(None) => Err("Enseignant introuvable".to_string()),
                    Err(e) => Err(e.to_string()),
                }
            }
            _ => {
                let data = CreateTeacher {
                    name: form.name,
                    email: form.email,
                    subject: form.subject,
                    phone: non_empty(&form.phone),
                    address: non_empty(&form.address),
                    hire_date: form.hire_date,
                    birth_date: None,
                    education: non_empty(&form.education),
                };
                db::teacher::create(&mut self.store, data).map_err(|e| e.to_string())
            }
        };

        match result {
            Ok(teacher) => {
                self.teacher_form.reset();
                self.succeed(format!("Enseignant '{}' enregistré", teacher.name));
            }
            Err(e) => self.fail(e),
        }
    }

    // Courses

    pub fn save_course(&mut self) {
        let form = self.course_form.clone();

        let Ok(duration_weeks) = form.duration_input.trim().parse::<u32>() else {
            self.fail("La durée doit être un nombre de semaines");
            return;
        };
        let price = if form.price_input.trim().is_empty() {
            None
        } else {
            match form.price_input.trim().replace(' ', "").parse::<i64>() {
                Ok(price) if price >= 0 => Some(price),
                _ => {
                    self.fail("Prix invalide");
                    return;
                }
            }
        };

        let result = match form.id {
            Some(id) if form.is_editing => {
                let data = UpdateCourse {
                    name: Some(form.name),
                    code: Some(form.code),
                    duration_weeks: Some(duration_weeks),
                    status: Some(form.status),
                    description: Some(non_empty(&form.description)),
                    teacher: Some(non_empty(&form.teacher)),
                    price: Some(price),
                };
                match db::course::update(&mut self.store, id, data) {
                    Ok(Some(course)) => Ok(course),
                    Ok(None) => Err("Cours introuvable".to_string()),
                    Err(e) => Err(e.to_string()),
                }
            }
            _ => {
                let data = CreateCourse {
                    name: form.name,
                    code: form.code,
                    duration_weeks,
                    description: non_empty(&form.description),
                    teacher: non_empty(&form.teacher),
                    price,
                };
                db::course::create(&mut self.store, data).map_err(|e| e.to_string())
            }
        };

        match result {
            Ok(course) => {
                self.course_form.reset();
                self.succeed(format!("Cours '{}' enregistré", course.name));
            }
            Err(e) => self.fail(e),
        }
    }

    // Tuition

    /// Apply the payment form to its account.
    pub fn record_payment(&mut self) {
        let Some(data) = self.payment_form.submit() else {
            return;
        };
        let student_id = self.payment_form.student_id;
        let name = self.payment_form.student_name.clone();

        match self.store.record_payment(student_id, data) {
            Ok(payment) => {
                self.payment_form.reset();
                self.succeed(format!(
                    "Paiement de {} enregistré pour {}",
                    crate::tuition::format_cfa(payment.amount),
                    name
                ));
            }
            Err(e) => self.fail(e.to_string()),
        }
    }

    // Attendance

    pub fn open_attendance_dialog(&mut self) {
        self.new_attendance = Some(AttendanceSheet::new());
    }

    /// Store the marks of the dialog for the selected date.
    pub fn submit_attendance(&mut self) {
        let Some(sheet) = self.new_attendance.take() else {
            return;
        };
        if sheet.marked_count() == 0 {
            self.log_warning("Aucun étudiant marqué");
            return;
        }

        let records = sheet.records();
        match serde_json::to_string(&records) {
            Ok(json) => tracing::info!("Attendance submitted for {}: {}", self.attendance_date, json),
            Err(e) => tracing::warn!("Failed to serialize attendance: {}", e),
        }

        let counts = sheet.counts();
        let day = DailyAttendance {
            date: self.attendance_date,
            present: counts.present as u32,
            absent: counts.absent as u32,
            late: counts.late as u32,
        };
        match self.attendance_history.iter_mut().find(|d| d.date == day.date) {
            Some(existing) => *existing = day,
            None => {
                self.attendance_history.push(day);
                self.attendance_history.sort_by_key(|d| d.date);
            }
        }

        self.attendance_sheets.insert(self.attendance_date, sheet);
        self.succeed(format!(
            "Présence enregistrée pour le {} ({} étudiants)",
            self.attendance_date.format("%d/%m/%Y"),
            records.len()
        ));
    }

    /// Marks taken on the selected date.
    pub fn current_sheet(&self) -> Option<&AttendanceSheet> {
        self.attendance_sheets.get(&self.attendance_date)
    }

    // Settings

    pub fn invite_staff(&mut self) {
        let form = self.invite_form.clone();
        let data = CreateStaffMember {
            name: form.name,
            email: form.email,
            role: form.role,
        };
        match db::staff::create(&mut self.store, data) {
            Ok(member) => {
                self.invite_form = InviteForm::default();
                self.succeed(format!("Invitation envoyée à {}", member.email));
            }
            Err(e) => self.fail(e.to_string()),
        }
    }

    pub fn set_staff_role(&mut self, id: u32, role: &str) {
        match db::staff::set_role(&mut self.store, id, role) {
            Some(member) => self.log_info(format!("Rôle de {} changé en {}", member.name, member.role)),
            None => self.fail("Membre introuvable"),
        }
    }

    pub fn change_password(&mut self) {
        match self.profile.validate_password_change() {
            Ok(()) => {
                self.profile.clear_passwords();
                tracing::info!("Password changed for {}", self.profile.email);
                self.succeed("Mot de passe mis à jour");
            }
            Err(message) => self.fail(message),
        }
    }

    /// Save configuration to file.
    pub fn save_config(&mut self) {
        if let Err(e) = self.config.validate() {
            self.fail(e.to_string());
            return;
        }
        match self.config.save(&self.config_path) {
            Ok(()) => {
                self.config_modified = false;
                self.enrollment = EnrollmentForm::new(self.config.fees.clone());
                tracing::info!("Config saved to {:?}", self.config_path);
                self.succeed("Paramètres enregistrés");
            }
            Err(e) => self.fail(format!("Échec de l'enregistrement: {e}")),
        }
    }

    // Exports

    fn finish_export(&mut self, what: &str, path: &Path, result: Result<(), XlsxError>) {
        match result {
            Ok(()) => self.succeed(format!("Export {} terminé: {}", what, path.display())),
            Err(e) => self.fail(format!("Échec de l'export: {e}")),
        }
    }

    pub fn export_students(&mut self) {
        let Some(path) = export::show_save_dialog(&export::generate_export_filename("etudiants")) else {
            return;
        };
        let result = export::export_students_to_excel(db::student::list_all(&self.store), &path);
        self.finish_export("des étudiants", &path, result);
    }

    pub fn export_teachers(&mut self) {
        let Some(path) = export::show_save_dialog(&export::generate_export_filename("enseignants")) else {
            return;
        };
        let result = export::export_teachers_to_excel(db::teacher::list_all(&self.store), &path);
        self.finish_export("des enseignants", &path, result);
    }

    pub fn export_courses(&mut self) {
        let Some(path) = export::show_save_dialog(&export::generate_export_filename("cours")) else {
            return;
        };
        let result = export::export_courses_to_excel(db::course::list_all(&self.store), &path);
        self.finish_export("des cours", &path, result);
    }

    pub fn export_tuition(&mut self) {
        let Some(path) = export::show_save_dialog(&export::generate_export_filename("scolarite")) else {
            return;
        };
        let result = export::export_tuition_to_excel(&self.store.accounts, &self.store.payments, &path);
        self.finish_export("de la scolarité", &path, result);
    }

    pub fn export_attendance(&mut self) {
        let Some(path) = export::show_save_dialog(&export::generate_export_filename("presence")) else {
            return;
        };
        let empty = AttendanceSheet::new();
        let sheet = self.current_sheet().unwrap_or(&empty);
        let result = export::export_attendance_to_excel(&self.student_attendance, sheet, self.attendance_date, &path);
        self.finish_export("de la présence", &path, result);
    }

    // Simulated requests

    /// Run a simulated request on the runtime and report back through the channel.
    fn spawn_request<T, F>(&self, action: &'static str, payload: T, done: F)
    where
        T: Serialize + Send + Sync + 'static,
        F: FnOnce(T, Result<(), String>) -> UiMessage + Send + 'static,
    {
        let tx = self.tx.clone();
        self.rt.spawn(async move {
            let result = simulate_request(action, &payload, SUBMIT_DELAY)
                .await
                .map_err(|e| e.to_string());
            let _ = tx.send(done(payload, result));
        });
    }

    pub fn start_login(&mut self) {
        let Some(payload) = self.login_form.submit() else {
            return;
        };
        self.login_pending = true;
        self.log_info(format!("Connexion de {}...", payload.email));
        self.spawn_request("Login", payload, |_, result| UiMessage::LoginFinished(result));
    }

    pub fn start_register(&mut self) {
        let Some(payload) = self.register_form.submit() else {
            return;
        };
        self.register_pending = true;
        self.log_info(format!("Création du compte {}...", payload.organization));
        self.spawn_request("Register", payload, |payload, result| {
            UiMessage::RegisterFinished(result.map(|()| payload))
        });
    }

    pub fn send_contact(&mut self) {
        let Some(message) = self.contact_form.submit() else {
            return;
        };
        self.contact_sends += 1;
        self.spawn_request("Contact", message, |_, result| UiMessage::ContactSent(result));
    }

    fn schedule_contact_reset(&self) {
        let tx = self.tx.clone();
        let send = self.contact_sends;
        self.rt.spawn(async move {
            tokio::time::sleep(CONTACT_RESET_DELAY).await;
            let _ = tx.send(UiMessage::ContactResetDue(send));
        });
    }

    /// Whether a simulated request is in flight.
    pub fn is_busy(&self) -> bool {
        self.login_pending
            || self.register_pending
            || matches!(self.contact_form.state, crate::registration::ContactState::Sending)
    }

    /// Poll async operation results.
    fn poll_async_results(&mut self) {
        while let Ok(msg) = self.rx.try_recv() {
            match msg {
                UiMessage::LoginFinished(result) => {
                    self.login_pending = false;
                    match result {
                        Ok(()) => {
                            self.log_success(format!("Connecté: {}", self.login_form.email.trim()));
                            self.login_form.after_login();
                            self.current_panel = Panel::Dashboard;
                        }
                        Err(e) => self.fail(e),
                    }
                }
                UiMessage::RegisterFinished(result) => {
                    self.register_pending = false;
                    match result {
                        Ok(payload) => {
                            self.config.organization = payload.to_organization();
                            self.register_form = RegisterForm::default();
                            self.save_config();
                            self.login_form.email = payload.email;
                            self.current_panel = Panel::Login;
                        }
                        Err(e) => self.fail(e),
                    }
                }
                UiMessage::ContactSent(result) => match result {
                    Ok(()) => {
                        self.contact_form.mark_sent();
                        self.log_success("Message de contact envoyé");
                        self.schedule_contact_reset();
                    }
                    Err(e) => {
                        self.contact_form.state = crate::registration::ContactState::Editing;
                        self.fail(e);
                    }
                },
                UiMessage::ContactResetDue(send) => {
                    if send == self.contact_sends && self.contact_form.state == crate::registration::ContactState::Sent {
                        self.contact_form.reset();
                    }
                }
            }
        }
    }

    fn apply_theme(&mut self, ctx: &egui::Context) {
        if self.applied_theme == Some(self.config.ui.theme) {
            return;
        }
        ctx.set_theme(match self.config.ui.theme {
            Theme::Light => egui::ThemePreference::Light,
            Theme::Dark => egui::ThemePreference::Dark,
            Theme::System => egui::ThemePreference::System,
        });
        self.applied_theme = Some(self.config.ui.theme);
    }

    /// Render menu bar.
    fn show_menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.menu_button("Site", |ui| {
                    for panel in Panel::SITE.into_iter().chain([Panel::Login, Panel::Register]) {
                        if ui.button(format!("{} {}", panel.icon(), panel.name())).clicked() {
                            self.current_panel = panel;
                            ui.close();
                        }
                    }
                });
                ui.menu_button("Administration", |ui| {
                    for panel in Panel::ADMIN {
                        if ui.button(format!("{} {}", panel.icon(), panel.name())).clicked() {
                            self.current_panel = panel;
                            ui.close();
                        }
                    }
                });
                ui.menu_button("Exporter", |ui| {
                    if ui.button("Étudiants").clicked() {
                        self.export_students();
                        ui.close();
                    }
                    if ui.button("Enseignants").clicked() {
                        self.export_teachers();
                        ui.close();
                    }
                    if ui.button("Cours").clicked() {
                        self.export_courses();
                        ui.close();
                    }
                    if ui.button("Scolarité").clicked() {
                        self.export_tuition();
                        ui.close();
                    }
                    if ui.button("Présence").clicked() {
                        self.export_attendance();
                        ui.close();
                    }
                });
                ui.menu_button("Affichage", |ui| {
                    for theme in [Theme::Light, Theme::Dark, Theme::System] {
                        if ui
                            .selectable_label(self.config.ui.theme == theme, theme.label())
                            .clicked()
                        {
                            self.config.ui.theme = theme;
                            self.config_modified = true;
                            ui.close();
                        }
                    }
                });
            });
        });
    }

    /// Navigation bar of the public site.
    fn show_site_nav(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("site_nav").min_height(40.0).show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                ui.label(RichText::new("DASI").size(20.0).strong().color(colors::PRIMARY));
                ui.add_space(20.0);
                for panel in Panel::SITE {
                    if ui.selectable_label(self.current_panel == panel, panel.name()).clicked() {
                        self.current_panel = panel;
                    }
                }
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    if ui.button(Panel::Register.name()).clicked() {
                        self.current_panel = Panel::Register;
                    }
                    if ui.button(Panel::Login.name()).clicked() {
                        self.current_panel = Panel::Login;
                    }
                });
            });
        });
    }

    /// Sidebar of the admin dashboard.
    fn show_sidebar(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("admin_sidebar")
            .resizable(false)
            .exact_width(200.0)
            .show(ctx, |ui| {
                ui.add_space(15.0);
                ui.label(RichText::new(&self.config.school.name).size(18.0).strong().color(colors::PRIMARY));
                ui.label(RichText::new(&self.config.school.tagline).small().weak());
                ui.add_space(15.0);
                ui.separator();
                ui.add_space(10.0);

                for panel in Panel::ADMIN {
                    let selected = self.current_panel == panel
                        || (panel == Panel::Students && matches!(self.current_panel, Panel::AddStudent | Panel::Receipt));
                    let text = RichText::new(format!("{}  {}", panel.icon(), panel.name())).size(15.0);
                    if ui.selectable_label(selected, text).clicked() {
                        self.current_panel = panel;
                    }
                    ui.add_space(4.0);
                }

                ui.with_layout(Layout::bottom_up(Align::Min), |ui| {
                    ui.add_space(10.0);
                    if ui.button(format!("{} Voir le site", egui_phosphor::regular::GLOBE)).clicked() {
                        self.current_panel = Panel::Home;
                    }
                });
            });
    }

    /// Render status bar (display only, no interaction).
    fn show_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar")
            .min_height(28.0)
            .show(ctx, |ui| {
                ui.disable();
                ui.horizontal(|ui| {
                    ui.colored_label(
                        colors::NEUTRAL,
                        format!(
                            "{} étudiants · {} enseignants · {} cours",
                            self.store.students.len(),
                            self.store.teachers.len(),
                            self.store.courses.len()
                        ),
                    );

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        if self.config_modified {
                            ui.colored_label(colors::WARNING, "Paramètres non enregistrés");
                        }
                        if self.is_busy() {
                            ui.spinner();
                            ui.label("Envoi en cours...");
                        }
                    });
                });
            });
    }

    /// Render modal dialogs (error, success, delete confirmation).
    fn show_dialogs(&mut self, ctx: &egui::Context) {
        if let Some(ref error) = self.error_message.clone() {
            egui::Window::new("Erreur")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.colored_label(colors::ERROR, error);
                    ui.add_space(10.0);
                    if ui.button("OK").clicked() {
                        self.error_message = None;
                    }
                });
        }

        if let Some(ref msg) = self.success_message.clone() {
            egui::Window::new("Succès")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.colored_label(colors::SUCCESS, msg);
                    ui.add_space(10.0);
                    if ui.button("OK").clicked() {
                        self.success_message = None;
                    }
                });
        }

        if self.show_delete_confirm
            && let Some(ref target) = self.delete_target.clone()
        {
            let (title, message) = match target {
                DeleteTarget::Student(_, name) => ("Supprimer l'étudiant", format!("Supprimer l'étudiant '{}' ?", name)),
                DeleteTarget::Teacher(_, name) => {
                    ("Supprimer l'enseignant", format!("Supprimer l'enseignant '{}' ?", name))
                }
                DeleteTarget::Course(_, name) => ("Supprimer le cours", format!("Supprimer le cours '{}' ?", name)),
                DeleteTarget::StaffMember(_, name) => {
                    ("Retirer le membre", format!("Retirer '{}' de l'équipe ?", name))
                }
            };

            egui::Window::new(title)
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.label(message);
                    ui.add_space(10.0);
                    ui.horizontal(|ui| {
                        if ui.button("Annuler").clicked() {
                            self.show_delete_confirm = false;
                            self.delete_target = None;
                        }
                        if ui.button("Supprimer").clicked() {
                            self.confirm_delete();
                            self.show_delete_confirm = false;
                            self.delete_target = None;
                        }
                    });
                });
        }
    }

    /// Execute the confirmed delete operation.
    fn confirm_delete(&mut self) {
        let Some(target) = self.delete_target.take() else {
            return;
        };
        let (removed, name) = match target {
            DeleteTarget::Student(id, name) => {
                if self.selected_student == Some(id) {
                    self.selected_student = None;
                }
                (db::student::delete(&mut self.store, id), name)
            }
            DeleteTarget::Teacher(id, name) => {
                if self.selected_teacher == Some(id) {
                    self.selected_teacher = None;
                }
                (db::teacher::delete(&mut self.store, id), name)
            }
            DeleteTarget::Course(id, name) => {
                if self.selected_course == Some(id) {
                    self.selected_course = None;
                }
                (db::course::delete(&mut self.store, id), name)
            }
            DeleteTarget::StaffMember(id, name) => (db::staff::delete(&mut self.store, id), name),
        };

        if removed {
            self.log_success(format!("Supprimé: {}", name));
        } else {
            self.fail(format!("'{}' introuvable", name));
        }
    }
}

/// `None` for blank input, the trimmed text otherwise.
fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_async_results();
        self.apply_theme(ctx);

        // Request repaint during async operations and animations
        if self.is_busy() {
            ctx.request_repaint();
        } else if matches!(self.current_panel, Panel::Home | Panel::Dashboard) {
            ctx.request_repaint_after(Duration::from_millis(100));
        } else if self.contact_form.state == crate::registration::ContactState::Sent {
            ctx.request_repaint_after(Duration::from_millis(250));
        }

        self.show_menu_bar(ctx);

        if self.current_panel.is_admin() {
            self.show_sidebar(ctx);
        } else {
            self.show_site_nav(ctx);
        }

        self.show_status_bar(ctx);
        self.show_dialogs(ctx);

        egui::CentralPanel::default().show(ctx, |ui| match self.current_panel {
            Panel::Home | Panel::About | Panel::Services | Panel::Careers | Panel::Pricing => {
                if let Some(next) = site_pages::show(self, ui) {
                    self.current_panel = next;
                }
            }
            Panel::Contact => contact_page::show(self, ui),
            Panel::Login | Panel::Register => {
                if let Some(next) = auth_pages::show(self, ui) {
                    self.current_panel = next;
                }
            }
            Panel::Dashboard => {
                if let Some(next) = dashboard::show(self, ui) {
                    self.current_panel = next;
                }
            }
            Panel::Students => {
                if let Some(next) = students_panel::show(self, ui) {
                    self.current_panel = next;
                }
            }
            Panel::AddStudent => {
                if enrollment_wizard::show(self, ui) {
                    self.current_panel = Panel::Students;
                }
            }
            Panel::Receipt => {
                if receipt_view::show(self, ui) {
                    self.current_panel = Panel::Students;
                }
            }
            Panel::Teachers => {
                if teachers_panel::show(self, ui) {
                    self.current_panel = Panel::Dashboard;
                }
            }
            Panel::Courses => {
                if courses_panel::show(self, ui) {
                    self.current_panel = Panel::Dashboard;
                }
            }
            Panel::Attendance => {
                if attendance_panel::show(self, ui) {
                    self.current_panel = Panel::Dashboard;
                }
            }
            Panel::Tuition => {
                if tuition_panel::show(self, ui) {
                    self.current_panel = Panel::Dashboard;
                }
            }
            Panel::Timetable => {
                if timetable_panel::show(self, ui) {
                    self.current_panel = Panel::Dashboard;
                }
            }
            Panel::Settings => {
                if settings_panel::show(self, ui) {
                    self.current_panel = Panel::Dashboard;
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_groups() {
        assert!(Panel::SITE.iter().all(|p| !p.is_admin()));
        assert!(Panel::ADMIN.iter().all(|p| p.is_admin()));
        assert!(Panel::Receipt.is_admin());
        assert!(!Panel::Login.is_admin());
    }

    #[test]
    fn test_password_change_validation() {
        let mut profile = ProfileForm::default();
        assert!(profile.validate_password_change().is_err());

        profile.current_password = "ancien-secret".into();
        profile.new_password = "court".into();
        profile.confirm_password = "court".into();
        assert!(profile.validate_password_change().is_err());

        profile.new_password = "nouveau-secret".into();
        profile.confirm_password = "autre-secret".into();
        assert_eq!(
            profile.validate_password_change(),
            Err("Les mots de passe ne correspondent pas")
        );

        profile.confirm_password = "nouveau-secret".into();
        assert_eq!(profile.validate_password_change(), Ok(()));

        profile.clear_passwords();
        assert!(profile.new_password.is_empty());
    }

    fn test_app() -> (App, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let rt = tokio::runtime::Runtime::new().unwrap();
        let app = App::new(AppConfig::default(), dir.path().join("config.toml"), rt);
        (app, dir)
    }

    fn fill_enrollment(form: &mut EnrollmentForm) {
        form.first_name = "Awa".to_string();
        form.last_name = "Ngono".to_string();
        form.email = "awa@email.com".to_string();
        form.phone = "+237 677 00 00 00".to_string();
        form.gender = Some(crate::enrollment::Gender::Female);
        form.birth_date = NaiveDate::from_ymd_opt(2002, 4, 18);
        form.course = "Data Science".to_string();
    }

    #[test]
    fn test_enroll_student_opens_account_and_ledger() {
        let (mut app, _dir) = test_app();
        fill_enrollment(&mut app.enrollment);
        let fees = app.config.fees.clone();

        app.enroll_student();

        let student = db::student::search(&app.store, "awa@email.com")[0].clone();
        assert_eq!(student.name, "Awa Ngono");
        let account = db::tuition::get_account(&app.store, student.id).unwrap();
        assert_eq!(account.total_fees, fees.registration + fees.tuition);
        assert_eq!(account.paid, fees.registration);

        let payments = db::tuition::payments_for(&app.store, student.id);
        assert_eq!(payments.len(), 1);
        let receipt = app.receipt.as_ref().unwrap();
        assert_eq!(payments[0].notes, format!("Reçu {}", receipt.receipt_id));
        assert_eq!(app.current_panel, Panel::Receipt);
        assert!(app.error_message.is_none());
        assert!(app.enrollment.first_name.is_empty());
    }

    #[test]
    fn test_enroll_student_rolls_back_rejected_payment() {
        let (mut app, _dir) = test_app();
        app.current_panel = Panel::AddStudent;
        let students = app.store.students.len();
        // An installment above the tuition makes the desk payment exceed the account total.
        app.enrollment = EnrollmentForm::new(crate::config::FeesConfig {
            registration: 10_000,
            tuition: 50_000,
            installment: 60_000,
        });
        fill_enrollment(&mut app.enrollment);
        app.enrollment.tuition_fees = true;
        app.enrollment.tuition_plan = crate::receipt::TuitionPlan::Installment;

        app.enroll_student();

        assert!(app.error_message.is_some());
        assert_eq!(app.store.students.len(), students);
        assert!(db::student::search(&app.store, "awa@email.com").is_empty());
        assert!(app.receipt.is_none());
        assert_eq!(app.current_panel, Panel::AddStudent);
    }

    #[test]
    fn test_contact_request_round_trip() {
        let (mut app, _dir) = test_app();
        app.contact_form.name = "Paul".to_string();
        app.contact_form.email = "paul@email.com".to_string();
        app.contact_form.subject = Some(crate::registration::ContactSubject::Collaboration);
        app.contact_form.message = "Bonjour".to_string();

        app.send_contact();
        assert!(app.is_busy());

        app.rt.block_on(async { tokio::time::sleep(SUBMIT_DELAY + Duration::from_millis(500)).await });
        app.poll_async_results();

        assert!(!app.is_busy());
        assert_eq!(app.contact_form.state, crate::registration::ContactState::Sent);
    }

    #[test]
    fn test_stale_contact_reset_is_ignored() {
        let (mut app, _dir) = test_app();
        app.contact_sends = 2;
        app.contact_form.name = "Paul".to_string();
        app.contact_form.mark_sent();

        assert!(app.tx.send(UiMessage::ContactResetDue(1)).is_ok());
        app.poll_async_results();
        assert_eq!(app.contact_form.state, crate::registration::ContactState::Sent);
        assert_eq!(app.contact_form.name, "Paul");

        assert!(app.tx.send(UiMessage::ContactResetDue(2)).is_ok());
        app.poll_async_results();
        assert_eq!(app.contact_form.state, crate::registration::ContactState::Editing);
        assert!(app.contact_form.name.is_empty());
    }

    #[test]
    fn test_login_message_opens_dashboard() {
        let (mut app, _dir) = test_app();
        app.login_pending = true;
        assert!(app.tx.send(UiMessage::LoginFinished(Ok(()))).is_ok());
        app.poll_async_results();
        assert!(!app.login_pending);
        assert_eq!(app.current_panel, Panel::Dashboard);
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty("  "), None);
        assert_eq!(non_empty(" Douala "), Some("Douala".to_string()));
    }
}
