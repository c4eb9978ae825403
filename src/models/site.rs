//! Public site content: services, job offers, team, pricing.

use serde::{Deserialize, Serialize};

/// A service offered by the company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: u32,
    pub title: String,
    pub description: String,
    /// Icon key, mapped to a glyph by the UI.
    pub icon: String,
    pub details: Vec<String>,
    pub case_studies: Vec<String>,
}

/// Contract type of a job offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContractType {
    Cdi,
    Cdd,
    Stage,
    Alternance,
}

impl ContractType {
    pub const ALL: [ContractType; 4] = [ContractType::Cdi, ContractType::Cdd, ContractType::Stage, ContractType::Alternance];

    pub fn label(&self) -> &'static str {
        match self {
            ContractType::Cdi => "CDI",
            ContractType::Cdd => "CDD",
            ContractType::Stage => "Stage",
            ContractType::Alternance => "Alternance",
        }
    }
}

/// Experience level required by a job offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExperienceLevel {
    Debutant,
    Junior,
    Confirme,
    Senior,
}

impl ExperienceLevel {
    pub const ALL: [ExperienceLevel; 4] = [
        ExperienceLevel::Debutant,
        ExperienceLevel::Junior,
        ExperienceLevel::Confirme,
        ExperienceLevel::Senior,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ExperienceLevel::Debutant => "Débutant",
            ExperienceLevel::Junior => "Junior",
            ExperienceLevel::Confirme => "Confirmé",
            ExperienceLevel::Senior => "Senior",
        }
    }
}

/// An open position on the careers page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobOffer {
    pub id: u32,
    pub title: String,
    pub department: String,
    pub location: String,
    pub contract: ContractType,
    pub experience: ExperienceLevel,
    pub description: String,
    pub requirements: Vec<String>,
    pub responsibilities: Vec<String>,
    pub salary: String,
    /// Posting date as displayed, `dd/mm/yyyy`.
    pub posted_date: String,
    pub deadline: String,
}

/// A member of the company team on the about page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: u32,
    pub name: String,
    pub role: String,
    pub bio: String,
    pub linkedin: Option<String>,
    pub email: Option<String>,
}

/// A pricing tier. Prices are quoted on request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingPlan {
    pub name: String,
    pub description: String,
    pub features: Vec<String>,
    pub call_to_action: String,
}
