//! Attendance statuses, records, and history rows.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Status of a student for one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    Present,
    Absent,
    Late,
}

impl AttendanceStatus {
    pub const ALL: [AttendanceStatus; 3] = [
        AttendanceStatus::Present,
        AttendanceStatus::Absent,
        AttendanceStatus::Late,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Présent",
            AttendanceStatus::Absent => "Absent",
            AttendanceStatus::Late => "En retard",
        }
    }
}

/// One submitted attendance mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub student_id: u32,
    pub status: AttendanceStatus,
}

/// Cumulative attendance of a student over the term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentAttendance {
    pub student_id: u32,
    pub name: String,
    pub email: String,
    pub course: String,
    pub present: u32,
    pub absent: u32,
    pub late: u32,
}

impl StudentAttendance {
    pub fn total_sessions(&self) -> u32 {
        self.present + self.absent + self.late
    }
}

/// Attendance totals for one school day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyAttendance {
    pub date: NaiveDate,
    pub present: u32,
    pub absent: u32,
    pub late: u32,
}

/// Monthly attendance of a single student, shown on the student view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyAttendance {
    pub month: String,
    pub present: u32,
    pub absent: u32,
    pub late: u32,
}
