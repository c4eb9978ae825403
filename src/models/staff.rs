//! Dashboard user accounts managed from the settings team tab.

use serde::{Deserialize, Serialize};

/// Roles that can be granted to a staff account.
pub const ROLES: [&str; 5] = ["Administrateur", "Enseignant", "Secrétaire", "Étudiant", "Utilisateur"];

/// Invitation state of a staff account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StaffStatus {
    Active,
    Pending,
}

impl StaffStatus {
    pub fn label(&self) -> &'static str {
        match self {
            StaffStatus::Active => "Actif",
            StaffStatus::Pending => "En attente",
        }
    }
}

/// A dashboard user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffMember {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: StaffStatus,
}

/// DTO for inviting a staff member.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateStaffMember {
    pub name: String,
    pub email: String,
    pub role: String,
}
