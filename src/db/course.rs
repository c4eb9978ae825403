//! Course repository.

use super::{Store, matches_term, next_id};
use crate::error::{AppError, Result};
use crate::models::{Course, CourseStatus, CreateCourse, UpdateCourse};

pub fn list_all(store: &Store) -> &[Course] {
    &store.courses
}

pub fn get_by_id(store: &Store, id: u32) -> Option<&Course> {
    store.courses.iter().find(|c| c.id == id)
}

/// Courses whose name or code contains `term`.
pub fn search<'a>(store: &'a Store, term: &str) -> Vec<&'a Course> {
    store
        .courses
        .iter()
        .filter(|c| matches_term(term, &[&c.name, &c.code]))
        .collect()
}

/// Names of active courses, for pickers.
pub fn active_names(store: &Store) -> Vec<String> {
    store
        .courses
        .iter()
        .filter(|c| c.status == CourseStatus::Active)
        .map(|c| c.name.clone())
        .collect()
}

fn check_fields(name: &str, code: &str, duration_weeks: u32) -> Result<()> {
    if name.trim().is_empty() {
        return Err(AppError::validation("Le nom du cours est requis"));
    }
    if code.trim().is_empty() {
        return Err(AppError::validation("Le code du cours est requis"));
    }
    if duration_weeks == 0 {
        return Err(AppError::validation("La durée doit être d'au moins une semaine"));
    }
    Ok(())
}

/// Check if a course code is already taken (for validation).
pub fn code_exists(store: &Store, code: &str, exclude_id: Option<u32>) -> bool {
    store
        .courses
        .iter()
        .any(|c| c.code.eq_ignore_ascii_case(code.trim()) && Some(c.id) != exclude_id)
}

pub fn create(store: &mut Store, data: CreateCourse) -> Result<Course> {
    check_fields(&data.name, &data.code, data.duration_weeks)?;
    if code_exists(store, &data.code, None) {
        return Err(AppError::validation(format!("Le code {} existe déjà", data.code.trim())));
    }

    let course = Course {
        id: next_id(&store.courses, |c| c.id),
        name: data.name.trim().to_string(),
        code: data.code.trim().to_uppercase(),
        duration_weeks: data.duration_weeks,
        students: 0,
        status: CourseStatus::Active,
        description: data.description,
        teacher: data.teacher,
        level: None,
        price: data.price,
        start_date: None,
        end_date: None,
        modules: None,
    };

    tracing::info!("Course created: {} ({})", course.code, course.id);
    store.courses.push(course.clone());
    Ok(course)
}

pub fn update(store: &mut Store, id: u32, data: UpdateCourse) -> Result<Option<Course>> {
    if let Some(code) = &data.code
        && code_exists(store, code, Some(id))
    {
        return Err(AppError::validation(format!("Le code {} existe déjà", code.trim())));
    }

    let Some(course) = store.courses.iter_mut().find(|c| c.id == id) else {
        return Ok(None);
    };

    check_fields(
        data.name.as_deref().unwrap_or(&course.name),
        data.code.as_deref().unwrap_or(&course.code),
        data.duration_weeks.unwrap_or(course.duration_weeks),
    )?;

    if let Some(name) = data.name {
        course.name = name.trim().to_string();
    }
    if let Some(code) = data.code {
        course.code = code.trim().to_uppercase();
    }
    if let Some(weeks) = data.duration_weeks {
        course.duration_weeks = weeks;
    }
    if let Some(status) = data.status {
        course.status = status;
    }
    if let Some(description) = data.description {
        course.description = description;
    }
    if let Some(teacher) = data.teacher {
        course.teacher = teacher;
    }
    if let Some(price) = data.price {
        course.price = price;
    }

    tracing::info!("Course updated: {} ({})", course.code, course.id);
    Ok(Some(course.clone()))
}

pub fn delete(store: &mut Store, id: u32) -> bool {
    let before = store.courses.len();
    store.courses.retain(|c| c.id != id);
    let removed = store.courses.len() < before;
    if removed {
        tracing::info!("Course deleted: {}", id);
    }
    removed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_course(code: &str) -> CreateCourse {
        CreateCourse {
            name: "Intelligence Artificielle".to_string(),
            code: code.to_string(),
            duration_weeks: 12,
            description: None,
            teacher: None,
            price: Some(120_000),
        }
    }

    #[test]
    fn test_search_by_name_or_code() {
        let store = Store::seeded();
        assert_eq!(search(&store, "ds201").len(), 1);
        assert_eq!(search(&store, "dev").len(), 2);
        assert_eq!(active_names(&store).len(), 6);
    }

    #[test]
    fn test_create_rejects_duplicate_code() {
        let mut store = Store::seeded();
        assert!(create(&mut store, new_course("dev101")).is_err());

        let course = create(&mut store, new_course("ia901")).unwrap();
        assert_eq!(course.code, "IA901");
        assert_eq!(course.id, 9);
        assert_eq!(course.students, 0);
    }

    #[test]
    fn test_update_keeps_own_code() {
        let mut store = Store::seeded();
        let data = UpdateCourse {
            code: Some("DEV101".to_string()),
            duration_weeks: Some(14),
            ..Default::default()
        };
        let course = update(&mut store, 1, data).unwrap().unwrap();
        assert_eq!(course.duration_label(), "14 semaines");

        let clash = UpdateCourse {
            code: Some("DS201".to_string()),
            ..Default::default()
        };
        assert!(update(&mut store, 1, clash).is_err());
        assert!(delete(&mut store, 1));
        assert!(get_by_id(&store, 1).is_none());
    }
}
