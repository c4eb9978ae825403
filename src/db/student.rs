//! Student repository with CRUD operations.

use super::{Store, matches_term, next_id};
use crate::error::{AppError, Result};
use crate::models::{CreateStudent, Student, StudentStatus, UpdateStudent};
use crate::validation::is_valid_email;

/// List all students ordered by id.
pub fn list_all(store: &Store) -> &[Student] {
    &store.students
}

/// Get student by ID.
pub fn get_by_id(store: &Store, id: u32) -> Option<&Student> {
    store.students.iter().find(|s| s.id == id)
}

/// Students whose name, email or course contains `term`.
pub fn search<'a>(store: &'a Store, term: &str) -> Vec<&'a Student> {
    store
        .students
        .iter()
        .filter(|s| matches_term(term, &[&s.name, &s.email, &s.course]))
        .collect()
}

fn check_fields(name: &str, email: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(AppError::validation("Le nom est requis"));
    }
    if !is_valid_email(email.trim()) {
        return Err(AppError::validation("Format d'email invalide"));
    }
    Ok(())
}

/// Create a new student. New students start active.
pub fn create(store: &mut Store, data: CreateStudent) -> Result<Student> {
    check_fields(&data.name, &data.email)?;

    let student = Student {
        id: next_id(&store.students, |s| s.id),
        name: data.name.trim().to_string(),
        email: data.email.trim().to_string(),
        course: data.course,
        status: StudentStatus::Active,
        phone: data.phone,
        address: data.address,
        birth_date: data.birth_date,
        enrollment_date: Some(chrono::Local::now().date_naive()),
        grade: None,
    };

    tracing::info!("Student created: {} ({})", student.name, student.id);
    store.students.push(student.clone());
    Ok(student)
}

/// Update an existing student.
pub fn update(store: &mut Store, id: u32, data: UpdateStudent) -> Result<Option<Student>> {
    let Some(student) = store.students.iter_mut().find(|s| s.id == id) else {
        return Ok(None);
    };

    let name = data.name.as_deref().unwrap_or(&student.name);
    let email = data.email.as_deref().unwrap_or(&student.email);
    check_fields(name, email)?;

    if let Some(name) = data.name {
        student.name = name.trim().to_string();
    }
    if let Some(email) = data.email {
        student.email = email.trim().to_string();
    }
    if let Some(course) = data.course {
        student.course = course;
    }
    if let Some(status) = data.status {
        student.status = status;
    }
    if let Some(phone) = data.phone {
        student.phone = phone;
    }
    if let Some(address) = data.address {
        student.address = address;
    }
    if let Some(birth_date) = data.birth_date {
        student.birth_date = birth_date;
    }

    let student = student.clone();
    if let Some(account) = store.accounts.iter_mut().find(|a| a.student_id == id) {
        account.name.clone_from(&student.name);
        account.email.clone_from(&student.email);
        account.course.clone_from(&student.course);
    }

    tracing::info!("Student updated: {} ({})", student.name, student.id);
    Ok(Some(student))
}

/// Delete a student by ID, along with their tuition account and payments.
pub fn delete(store: &mut Store, id: u32) -> bool {
    let before = store.students.len();
    store.students.retain(|s| s.id != id);
    let removed = store.students.len() < before;

    if removed {
        store.accounts.retain(|a| a.student_id != id);
        store.payments.retain(|p| p.student_id != id);
        tracing::info!("Student deleted: {}", id);
    }
    removed
}

/// Check if an email is already used by another student.
pub fn email_exists(store: &Store, email: &str, exclude_id: Option<u32>) -> bool {
    store
        .students
        .iter()
        .any(|s| s.email.eq_ignore_ascii_case(email.trim()) && Some(s.id) != exclude_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_student(name: &str, email: &str) -> CreateStudent {
        CreateStudent {
            name: name.to_string(),
            email: email.to_string(),
            course: "Data Science".to_string(),
            phone: None,
            address: None,
            birth_date: None,
        }
    }

    #[test]
    fn test_search_by_name_email_course() {
        let store = Store::seeded();
        assert_eq!(search(&store, "alice").len(), 1);
        assert_eq!(search(&store, "BOB@EMAIL").len(), 1);
        assert_eq!(search(&store, "data science").len(), 3);
        assert_eq!(search(&store, "").len(), 12);
        assert!(search(&store, "zzz").is_empty());
    }

    #[test]
    fn test_create_allocates_next_id() {
        let mut store = Store::seeded();
        let student = create(&mut store, new_student(" Nadia Ekambi ", "nadia@email.com")).unwrap();

        assert_eq!(student.id, 13);
        assert_eq!(student.name, "Nadia Ekambi");
        assert_eq!(student.status, StudentStatus::Active);
        assert_eq!(list_all(&store).len(), 13);
    }

    #[test]
    fn test_create_rejects_invalid_fields() {
        let mut store = Store::seeded();
        assert!(matches!(
            create(&mut store, new_student("", "a@b.co")),
            Err(AppError::Validation(_))
        ));
        assert!(create(&mut store, new_student("Nadia", "a@b")).is_err());
        assert_eq!(list_all(&store).len(), 12);
    }

    #[test]
    fn test_update_and_clear_optional_field() {
        let mut store = Store::seeded();
        let data = UpdateStudent {
            status: Some(StudentStatus::Graduated),
            phone: Some(None),
            ..Default::default()
        };

        let updated = update(&mut store, 1, data).unwrap().unwrap();
        assert_eq!(updated.status, StudentStatus::Graduated);
        assert_eq!(updated.phone, None);
        assert_eq!(updated.name, "Alice Johnson");

        assert!(update(&mut store, 99, UpdateStudent::default()).unwrap().is_none());
    }

    #[test]
    fn test_delete_removes_account() {
        let mut store = Store::seeded();
        assert!(delete(&mut store, 2));
        assert!(get_by_id(&store, 2).is_none());
        assert!(store.accounts.iter().all(|a| a.student_id != 2));
        assert!(!delete(&mut store, 2));
    }

    #[test]
    fn test_update_renames_account() {
        let mut store = Store::seeded();
        let data = UpdateStudent {
            name: Some("Alicia Mbarga".to_string()),
            email: Some("alicia@email.com".to_string()),
            ..Default::default()
        };
        update(&mut store, 1, data).unwrap();

        let account = store.accounts.iter().find(|a| a.student_id == 1).unwrap();
        assert_eq!(account.name, "Alicia Mbarga");
        assert_eq!(account.email, "alicia@email.com");
        assert_eq!(crate::db::tuition::search_accounts(&store, "alicia", None).len(), 1);
    }

    #[test]
    fn test_recreated_id_starts_with_empty_history() {
        let mut store = Store::seeded();
        let student = create(&mut store, new_student("Nadia Ekambi", "nadia@email.com")).unwrap();
        crate::db::tuition::open_account(&mut store, &student, 150_000).unwrap();
        store
            .record_payment(
                student.id,
                crate::models::PaymentData {
                    amount: 15_000,
                    method: crate::models::PaymentMethod::Cash,
                    date: chrono::NaiveDate::from_ymd_opt(2024, 12, 1).unwrap(),
                    notes: "Reçu MS-1".to_string(),
                },
            )
            .unwrap();
        assert!(delete(&mut store, student.id));

        let again = create(&mut store, new_student("Paul Etoa", "paul@email.com")).unwrap();
        assert_eq!(again.id, student.id);
        assert!(crate::db::tuition::payments_for(&store, again.id).is_empty());
    }

    #[test]
    fn test_email_exists() {
        let store = Store::seeded();
        assert!(email_exists(&store, "ALICE@email.com", None));
        assert!(!email_exists(&store, "alice@email.com", Some(1)));
    }
}
