//! Student records and DTOs for create and update operations.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Enrollment status of a student.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StudentStatus {
    #[default]
    Active,
    Graduated,
    Inactive,
}

impl StudentStatus {
    pub const ALL: [StudentStatus; 3] = [StudentStatus::Active, StudentStatus::Graduated, StudentStatus::Inactive];

    pub fn label(&self) -> &'static str {
        match self {
            StudentStatus::Active => "Actif",
            StudentStatus::Graduated => "Diplômé",
            StudentStatus::Inactive => "Inactif",
        }
    }
}

/// A student as listed in the admin dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub course: String,
    pub status: StudentStatus,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub enrollment_date: Option<NaiveDate>,
    /// Academic level, e.g. "Licence 2".
    pub grade: Option<String>,
}

impl Student {
    /// Initials used as an avatar placeholder.
    pub fn initials(&self) -> String {
        initials(&self.name)
    }
}

/// First letter of each word of a name.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// A graded assessment on the student detail view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentGrade {
    pub course: String,
    pub grade: u32,
    pub max_grade: u32,
    pub date: NaiveDate,
}

/// Average, best and worst grade of a series. `None` when empty.
pub fn grade_summary(grades: &[StudentGrade]) -> Option<(f64, u32, u32)> {
    let best = grades.iter().map(|g| g.grade).max()?;
    let worst = grades.iter().map(|g| g.grade).min()?;
    let sum: u32 = grades.iter().map(|g| g.grade).sum();
    Some((f64::from(sum) / grades.len() as f64, best, worst))
}

/// DTO for creating a student.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateStudent {
    pub name: String,
    pub email: String,
    pub course: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub birth_date: Option<NaiveDate>,
}

/// DTO for updating a student.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateStudent {
    pub name: Option<String>,
    pub email: Option<String>,
    pub course: Option<String>,
    pub status: Option<StudentStatus>,
    pub phone: Option<Option<String>>,
    pub address: Option<Option<String>>,
    pub birth_date: Option<Option<NaiveDate>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        assert_eq!(initials("Alice Johnson"), "AJ");
        assert_eq!(initials("  jean   paul mbah "), "JPM");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn test_grade_summary() {
        let date = NaiveDate::from_ymd_opt(2024, 10, 15).unwrap();
        let grades: Vec<StudentGrade> = [18, 16, 17, 15, 19, 14]
            .into_iter()
            .map(|grade| StudentGrade { course: "Module".into(), grade, max_grade: 20, date })
            .collect();

        let (average, best, worst) = grade_summary(&grades).unwrap();
        assert!((average - 16.5).abs() < 1e-9);
        assert_eq!(best, 19);
        assert_eq!(worst, 14);
        assert!(grade_summary(&[]).is_none());
    }
}
