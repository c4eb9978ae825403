pub mod attendance;
pub mod config;
pub mod db;
pub mod enrollment;
pub mod error;
pub mod export;
pub mod fixtures;
pub mod models;
pub mod receipt;
pub mod registration;
pub mod site;
pub mod timetable;
pub mod tuition;
pub mod ui;
pub mod validation;
pub mod words;

pub use error::{AppError, Result};
