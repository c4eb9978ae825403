//! Dashboard user accounts (settings team tab).

use super::{Store, next_id};
use crate::error::{AppError, Result};
use crate::models::{CreateStaffMember, StaffMember, StaffStatus};
use crate::validation::is_valid_email;

pub fn list_all(store: &Store) -> &[StaffMember] {
    &store.staff
}

/// Invite a new member. Invitations start pending.
pub fn create(store: &mut Store, data: CreateStaffMember) -> Result<StaffMember> {
    if data.name.trim().is_empty() || data.email.trim().is_empty() {
        return Err(AppError::validation("Le nom et l'email sont requis"));
    }
    if !is_valid_email(data.email.trim()) {
        return Err(AppError::validation("Format d'email invalide"));
    }

    let member = StaffMember {
        id: next_id(&store.staff, |m| m.id),
        name: data.name.trim().to_string(),
        email: data.email.trim().to_string(),
        role: data.role,
        status: StaffStatus::Pending,
    };

    tracing::info!("Staff member invited: {} <{}> as {}", member.name, member.email, member.role);
    store.staff.push(member.clone());
    Ok(member)
}

/// Change the role of a member.
pub fn set_role(store: &mut Store, id: u32, role: &str) -> Option<StaffMember> {
    let member = store.staff.iter_mut().find(|m| m.id == id)?;
    member.role = role.to_string();
    tracing::info!("Staff member {} role set to {}", member.id, role);
    Some(member.clone())
}

pub fn delete(store: &mut Store, id: u32) -> bool {
    let before = store.staff.len();
    store.staff.retain(|m| m.id != id);
    store.staff.len() < before
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invite_starts_pending() {
        let mut store = Store::seeded();
        let member = create(
            &mut store,
            CreateStaffMember {
                name: "Aline Fotso".to_string(),
                email: "aline@maat.com".to_string(),
                role: "Secrétaire".to_string(),
            },
        )
        .unwrap();

        assert_eq!(member.id, 4);
        assert_eq!(member.status, StaffStatus::Pending);
        assert_eq!(list_all(&store).len(), 4);
    }

    #[test]
    fn test_invite_requires_name_and_email() {
        let mut store = Store::seeded();
        let missing_email = CreateStaffMember {
            name: "Aline".to_string(),
            email: " ".to_string(),
            role: "Utilisateur".to_string(),
        };
        assert!(create(&mut store, missing_email).is_err());
        assert_eq!(list_all(&store).len(), 3);
    }

    #[test]
    fn test_set_role_and_delete() {
        let mut store = Store::seeded();
        assert_eq!(set_role(&mut store, 3, "Administrateur").unwrap().role, "Administrateur");
        assert!(set_role(&mut store, 42, "Administrateur").is_none());
        assert!(delete(&mut store, 3));
        assert!(!delete(&mut store, 3));
    }
}
