//! GUI panels and application state.

pub mod app;
pub mod attendance_panel;
pub mod auth_pages;
pub mod components;
pub mod contact_page;
pub mod courses_panel;
pub mod dashboard;
pub mod enrollment_wizard;
pub mod receipt_view;
pub mod settings_panel;
pub mod setup_wizard;
pub mod site_pages;
pub mod students_panel;
pub mod teachers_panel;
pub mod timetable_panel;
pub mod tuition_panel;

pub use app::App;
pub use setup_wizard::{SetupApp, SetupWizard};
