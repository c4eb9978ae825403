//! Teacher repository.

use super::{Store, matches_term, next_id};
use crate::error::{AppError, Result};
use crate::models::{CreateTeacher, Teacher, TeacherStatus, UpdateTeacher};
use crate::validation::is_valid_email;

pub fn list_all(store: &Store) -> &[Teacher] {
    &store.teachers
}

pub fn get_by_id(store: &Store, id: u32) -> Option<&Teacher> {
    store.teachers.iter().find(|t| t.id == id)
}

/// Teachers whose name, email or subject contains `term`.
pub fn search<'a>(store: &'a Store, term: &str) -> Vec<&'a Teacher> {
    store
        .teachers
        .iter()
        .filter(|t| matches_term(term, &[&t.name, &t.email, &t.subject]))
        .collect()
}

fn check_fields(name: &str, email: &str, subject: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(AppError::validation("Le nom est requis"));
    }
    if !is_valid_email(email.trim()) {
        return Err(AppError::validation("Format d'email invalide"));
    }
    if subject.trim().is_empty() {
        return Err(AppError::validation("La matière est requise"));
    }
    Ok(())
}

pub fn create(store: &mut Store, data: CreateTeacher) -> Result<Teacher> {
    check_fields(&data.name, &data.email, &data.subject)?;

    let teacher = Teacher {
        id: next_id(&store.teachers, |t| t.id),
        name: data.name.trim().to_string(),
        email: data.email.trim().to_string(),
        subject: data.subject.trim().to_string(),
        status: TeacherStatus::Active,
        phone: data.phone,
        address: data.address,
        hire_date: data.hire_date,
        birth_date: data.birth_date,
        education: data.education,
        experience: None,
    };

    tracing::info!("Teacher created: {} ({})", teacher.name, teacher.id);
    store.teachers.push(teacher.clone());
    Ok(teacher)
}

pub fn update(store: &mut Store, id: u32, data: UpdateTeacher) -> Result<Option<Teacher>> {
    let Some(teacher) = store.teachers.iter_mut().find(|t| t.id == id) else {
        return Ok(None);
    };

    check_fields(
        data.name.as_deref().unwrap_or(&teacher.name),
        data.email.as_deref().unwrap_or(&teacher.email),
        data.subject.as_deref().unwrap_or(&teacher.subject),
    )?;

    if let Some(name) = data.name {
        teacher.name = name.trim().to_string();
    }
    if let Some(email) = data.email {
        teacher.email = email.trim().to_string();
    }
    if let Some(subject) = data.subject {
        teacher.subject = subject.trim().to_string();
    }
    if let Some(status) = data.status {
        teacher.status = status;
    }
    if let Some(phone) = data.phone {
        teacher.phone = phone;
    }
    if let Some(address) = data.address {
        teacher.address = address;
    }
    if let Some(education) = data.education {
        teacher.education = education;
    }

    tracing::info!("Teacher updated: {} ({})", teacher.name, teacher.id);
    Ok(Some(teacher.clone()))
}

pub fn delete(store: &mut Store, id: u32) -> bool {
    let before = store.teachers.len();
    store.teachers.retain(|t| t.id != id);
    let removed = store.teachers.len() < before;
    if removed {
        tracing::info!("Teacher deleted: {}", id);
    }
    removed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_by_subject() {
        let store = Store::seeded();
        let found = search(&store, "physique");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Marie Martin");
        assert_eq!(search(&store, "@maat.com").len(), 8);
    }

    #[test]
    fn test_create_update_delete() {
        let mut store = Store::seeded();
        let teacher = create(
            &mut store,
            CreateTeacher {
                name: "Paul Biya".to_string(),
                email: "paul@maat.com".to_string(),
                subject: "Géographie".to_string(),
                phone: None,
                address: None,
                hire_date: None,
                birth_date: None,
                education: None,
            },
        )
        .unwrap();
        assert_eq!(teacher.id, 9);

        let updated = update(
            &mut store,
            teacher.id,
            UpdateTeacher {
                status: Some(TeacherStatus::Inactive),
                ..Default::default()
            },
        )
        .unwrap()
        .unwrap();
        assert_eq!(updated.status, TeacherStatus::Inactive);

        assert!(delete(&mut store, teacher.id));
        assert_eq!(list_all(&store).len(), 8);
    }

    #[test]
    fn test_update_rejects_blank_subject() {
        let mut store = Store::seeded();
        let data = UpdateTeacher {
            subject: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(update(&mut store, 1, data).is_err());
        assert_eq!(get_by_id(&store, 1).unwrap().subject, "Mathématiques");
    }
}
