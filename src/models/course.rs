//! Course records and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Whether a course is currently offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseStatus {
    #[default]
    Active,
    Inactive,
}

impl CourseStatus {
    pub const ALL: [CourseStatus; 2] = [CourseStatus::Active, CourseStatus::Inactive];

    pub fn label(&self) -> &'static str {
        match self {
            CourseStatus::Active => "Actif",
            CourseStatus::Inactive => "Inactif",
        }
    }
}

/// A course in the catalogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: u32,
    pub name: String,
    pub code: String,
    pub duration_weeks: u32,
    /// Number of enrolled students.
    pub students: u32,
    pub status: CourseStatus,
    pub description: Option<String>,
    pub teacher: Option<String>,
    pub level: Option<String>,
    /// Price in francs CFA.
    pub price: Option<i64>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub modules: Option<u32>,
}

impl Course {
    pub fn duration_label(&self) -> String {
        format!("{} semaines", self.duration_weeks)
    }
}

/// Monthly enrolment and completion figures for a course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseProgress {
    pub month: String,
    pub students: u32,
    /// Completion rate in percent.
    pub completion: u32,
}

/// Average completion over a progress series.
pub fn average_completion(progress: &[CourseProgress]) -> f64 {
    if progress.is_empty() {
        return 0.0;
    }
    let sum: u32 = progress.iter().map(|p| p.completion).sum();
    f64::from(sum) / progress.len() as f64
}

/// DTO for creating a course.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCourse {
    pub name: String,
    pub code: String,
    pub duration_weeks: u32,
    pub description: Option<String>,
    pub teacher: Option<String>,
    pub price: Option<i64>,
}

/// DTO for updating a course.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateCourse {
    pub name: Option<String>,
    pub code: Option<String>,
    pub duration_weeks: Option<u32>,
    pub status: Option<CourseStatus>,
    pub description: Option<Option<String>>,
    pub teacher: Option<Option<String>>,
    pub price: Option<Option<i64>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_completion() {
        let progress = vec![
            CourseProgress { month: "Septembre".into(), students: 180, completion: 75 },
            CourseProgress { month: "Octobre".into(), students: 200, completion: 82 },
            CourseProgress { month: "Novembre".into(), students: 220, completion: 78 },
            CourseProgress { month: "Décembre".into(), students: 234, completion: 85 },
        ];
        assert!((average_completion(&progress) - 80.0).abs() < f64::EPSILON);
        assert_eq!(average_completion(&[]), 0.0);
    }
}
