//! Teacher records and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Employment status of a teacher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeacherStatus {
    #[default]
    Active,
    Inactive,
}

impl TeacherStatus {
    pub const ALL: [TeacherStatus; 2] = [TeacherStatus::Active, TeacherStatus::Inactive];

    pub fn label(&self) -> &'static str {
        match self {
            TeacherStatus::Active => "Actif",
            TeacherStatus::Inactive => "Inactif",
        }
    }
}

/// A teacher as listed in the admin dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Teacher {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub status: TeacherStatus,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub hire_date: Option<NaiveDate>,
    pub birth_date: Option<NaiveDate>,
    pub education: Option<String>,
    pub experience: Option<String>,
}

/// A course taught by a teacher, shown on the teacher detail view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaughtCourse {
    pub name: String,
    pub students: u32,
    pub schedule: String,
}

/// Monthly evaluation of a teacher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeacherRating {
    pub month: String,
    pub rating: f32,
    pub feedback: u32,
}

/// DTO for creating a teacher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTeacher {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub hire_date: Option<NaiveDate>,
    pub birth_date: Option<NaiveDate>,
    pub education: Option<String>,
}

/// DTO for updating a teacher.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTeacher {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub status: Option<TeacherStatus>,
    pub phone: Option<Option<String>>,
    pub address: Option<Option<String>>,
    pub education: Option<Option<String>>,
}
