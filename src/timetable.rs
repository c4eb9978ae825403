//! Weekly timetable: fixed hourly slots from Monday to Saturday.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Start hour of each one-hour slot, 08:00 through 17:00.
pub const SLOT_HOURS: [u32; 10] = [8, 9, 10, 11, 12, 13, 14, 15, 16, 17];

/// Teaching days.
pub const DAYS: [Weekday; 6] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

const MONTHS_SHORT: [&str; 12] = [
    "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.", "nov.", "déc.",
];

/// French name of a weekday.
pub fn day_label(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Lundi",
        Weekday::Tue => "Mardi",
        Weekday::Wed => "Mercredi",
        Weekday::Thu => "Jeudi",
        Weekday::Fri => "Vendredi",
        Weekday::Sat => "Samedi",
        Weekday::Sun => "Dimanche",
    }
}

/// Label of the slot starting at `hour`, e.g. "08:00 - 09:00".
pub fn slot_label(hour: u32) -> String {
    format!("{hour:02}:00 - {:02}:00", hour + 1)
}

/// Short French date, e.g. "9 déc.".
pub fn format_short_date(date: NaiveDate) -> String {
    format!("{} {}", date.day(), MONTHS_SHORT[date.month0() as usize])
}

/// Monday through Saturday of the week containing `date`.
///
/// A Sunday opens the week that follows it.
pub fn week_dates(date: NaiveDate) -> [NaiveDate; 6] {
    let monday = date - Duration::days(i64::from(date.weekday().num_days_from_sunday()) - 1);
    std::array::from_fn(|i| monday + Duration::days(i as i64))
}

/// Move `date` by whole weeks.
pub fn shift_week(date: NaiveDate, weeks: i64) -> NaiveDate {
    date + Duration::days(7 * weeks)
}

/// "9 déc. - 14 déc." for the week containing `date`.
pub fn week_range_label(date: NaiveDate) -> String {
    let dates = week_dates(date);
    format!("{} - {}", format_short_date(dates[0]), format_short_date(dates[5]))
}

/// A course shown on the timetable with its display colour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimetableCourse {
    pub id: u32,
    pub name: String,
    pub color: [u8; 3],
}

/// One occupied slot of the week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSlot {
    pub day: Weekday,
    pub hour: u32,
    pub course_id: u32,
    pub teacher: String,
}

/// Course filter of the timetable page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CourseFilter {
    #[default]
    All,
    Course(u32),
}

impl CourseFilter {
    pub fn matches(&self, course_id: u32) -> bool {
        match self {
            CourseFilter::All => true,
            CourseFilter::Course(id) => *id == course_id,
        }
    }
}

/// The recurring weekly schedule.
#[derive(Debug, Clone, Default)]
pub struct Timetable {
    pub courses: Vec<TimetableCourse>,
    pub slots: Vec<ScheduleSlot>,
}

impl Timetable {
    pub fn new(courses: Vec<TimetableCourse>, slots: Vec<ScheduleSlot>) -> Self {
        Self { courses, slots }
    }

    /// Slot scheduled on `day` at `hour`, if any.
    pub fn slot(&self, day: Weekday, hour: u32) -> Option<&ScheduleSlot> {
        self.slots.iter().find(|s| s.day == day && s.hour == hour)
    }

    /// Slot at `day`/`hour` when its course passes `filter`.
    pub fn visible_slot(&self, day: Weekday, hour: u32, filter: CourseFilter) -> Option<&ScheduleSlot> {
        self.slot(day, hour).filter(|s| filter.matches(s.course_id))
    }

    pub fn course(&self, id: u32) -> Option<&TimetableCourse> {
        self.courses.iter().find(|c| c.id == id)
    }

    /// Number of weekly sessions of a course.
    pub fn sessions_per_week(&self, course_id: u32) -> usize {
        self.slots.iter().filter(|s| s.course_id == course_id).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_week_dates_start_on_monday() {
        let dates = week_dates(date(2024, 12, 11));
        assert_eq!(dates[0], date(2024, 12, 9));
        assert_eq!(dates[5], date(2024, 12, 14));

        let dates = week_dates(date(2024, 12, 9));
        assert_eq!(dates[0], date(2024, 12, 9));

        // Sunday shows the coming week
        let dates = week_dates(date(2024, 12, 15));
        assert_eq!(dates[0], date(2024, 12, 16));
        assert_eq!(dates[5], date(2024, 12, 21));
    }

    #[test]
    fn test_shift_week() {
        assert_eq!(shift_week(date(2024, 12, 11), 1), date(2024, 12, 18));
        assert_eq!(shift_week(date(2024, 12, 11), -1), date(2024, 12, 4));
        assert_eq!(shift_week(date(2024, 12, 30), 1), date(2025, 1, 6));
    }

    #[test]
    fn test_labels() {
        assert_eq!(slot_label(8), "08:00 - 09:00");
        assert_eq!(slot_label(17), "17:00 - 18:00");
        assert_eq!(format_short_date(date(2024, 12, 9)), "9 déc.");
        assert_eq!(week_range_label(date(2024, 12, 11)), "9 déc. - 14 déc.");
        assert_eq!(day_label(Weekday::Sat), "Samedi");
    }

    #[test]
    fn test_slot_lookup_and_filter() {
        let timetable = fixtures::timetable();

        let slot = timetable.slot(Weekday::Mon, 8).unwrap();
        assert_eq!(slot.course_id, 1);
        assert_eq!(slot.teacher, "Jean Dupont");
        assert!(timetable.slot(Weekday::Mon, 9).is_none());
        assert!(timetable.slot(Weekday::Sat, 16).is_none());

        assert!(timetable.visible_slot(Weekday::Mon, 8, CourseFilter::Course(1)).is_some());
        assert!(timetable.visible_slot(Weekday::Mon, 8, CourseFilter::Course(2)).is_none());
        assert!(timetable.visible_slot(Weekday::Mon, 8, CourseFilter::All).is_some());

        assert_eq!(timetable.sessions_per_week(1), 4);
        assert_eq!(timetable.slots.len(), 17);
    }
}
