//! Attendance sheet for one session and attendance rates.

use std::collections::BTreeMap;

use crate::models::{AttendanceRecord, AttendanceStatus};

/// Marks taken for one session, keyed by student id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttendanceSheet {
    marks: BTreeMap<u32, AttendanceStatus>,
}

/// Number of students per status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttendanceCounts {
    pub present: usize,
    pub absent: usize,
    pub late: usize,
}

impl AttendanceCounts {
    pub fn total(&self) -> usize {
        self.present + self.absent + self.late
    }
}

impl AttendanceSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sheet with the given marks already taken.
    pub fn with_marks(marks: impl IntoIterator<Item = (u32, AttendanceStatus)>) -> Self {
        Self {
            marks: marks.into_iter().collect(),
        }
    }

    /// Set the status of one student, replacing any previous mark.
    pub fn mark(&mut self, student_id: u32, status: AttendanceStatus) {
        self.marks.insert(student_id, status);
    }

    /// Give every listed student the same status. Marks of students not in
    /// `student_ids` are dropped.
    pub fn mark_all(&mut self, student_ids: impl IntoIterator<Item = u32>, status: AttendanceStatus) {
        self.marks = student_ids.into_iter().map(|id| (id, status)).collect();
    }

    pub fn status_of(&self, student_id: u32) -> Option<AttendanceStatus> {
        self.marks.get(&student_id).copied()
    }

    pub fn counts(&self) -> AttendanceCounts {
        self.marks.values().fold(AttendanceCounts::default(), |mut counts, status| {
            match status {
                AttendanceStatus::Present => counts.present += 1,
                AttendanceStatus::Absent => counts.absent += 1,
                AttendanceStatus::Late => counts.late += 1,
            }
            counts
        })
    }

    pub fn marked_count(&self) -> usize {
        self.marks.len()
    }

    /// Records sorted by student id.
    pub fn records(&self) -> Vec<AttendanceRecord> {
        self.marks
            .iter()
            .map(|(&student_id, &status)| AttendanceRecord { student_id, status })
            .collect()
    }

    pub fn clear(&mut self) {
        self.marks.clear();
    }
}

/// `count / total` as a percentage with one decimal, halves rounded up.
/// A zero total gives "0.0".
pub fn attendance_rate(count: u32, total: u32) -> String {
    if total == 0 {
        return "0.0".to_string();
    }
    let (count, total) = (u64::from(count), u64::from(total));
    let tenths = (count * 2000 + total) / (2 * total);
    format!("{}.{}", tenths / 10, tenths % 10)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn test_mark_and_counts() {
        let mut sheet = AttendanceSheet::with_marks(fixtures::initial_attendance_marks());
        assert_eq!(
            sheet.counts(),
            AttendanceCounts {
                present: 6,
                absent: 1,
                late: 1
            }
        );

        sheet.mark(1, AttendanceStatus::Absent);
        assert_eq!(sheet.status_of(1), Some(AttendanceStatus::Absent));
        assert_eq!(sheet.counts().absent, 2);
        assert_eq!(sheet.marked_count(), 8);
    }

    #[test]
    fn test_mark_all_replaces_sheet() {
        let mut sheet = AttendanceSheet::new();
        sheet.mark(42, AttendanceStatus::Late);
        sheet.mark_all([1, 2, 3], AttendanceStatus::Present);

        assert_eq!(sheet.marked_count(), 3);
        assert_eq!(sheet.status_of(42), None);
        assert_eq!(sheet.counts().present, 3);
    }

    #[test]
    fn test_records_sorted_by_id() {
        let mut sheet = AttendanceSheet::new();
        sheet.mark(7, AttendanceStatus::Late);
        sheet.mark(2, AttendanceStatus::Present);
        sheet.mark(5, AttendanceStatus::Absent);

        let ids: Vec<u32> = sheet.records().iter().map(|r| r.student_id).collect();
        assert_eq!(ids, vec![2, 5, 7]);
        assert_eq!(sheet.records()[0].status, AttendanceStatus::Present);
    }

    #[test]
    fn test_attendance_rate() {
        assert_eq!(attendance_rate(45, 50), "90.0");
        assert_eq!(attendance_rate(1, 3), "33.3");
        assert_eq!(attendance_rate(2, 3), "66.7");
        assert_eq!(attendance_rate(0, 0), "0.0");
        assert_eq!(attendance_rate(3, 3), "100.0");
    }

    #[test]
    fn test_attendance_rate_rounds_halves_up() {
        assert_eq!(attendance_rate(1, 16), "6.3");
        assert_eq!(attendance_rate(1, 80), "1.3");
        assert_eq!(attendance_rate(1, 8), "12.5");
    }
}
