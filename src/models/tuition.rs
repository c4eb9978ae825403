//! Tuition accounts, payments, and payment form data.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How a payment was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    #[default]
    Cash,
    MobileMoney,
    BankTransfer,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] = [PaymentMethod::Cash, PaymentMethod::MobileMoney, PaymentMethod::BankTransfer];

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Espèces",
            PaymentMethod::MobileMoney => "Mobile Money",
            PaymentMethod::BankTransfer => "Virement bancaire",
        }
    }
}

/// Payment state of an account, derived from the amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Paid,
    Partial,
    Unpaid,
}

impl PaymentStatus {
    pub const ALL: [PaymentStatus; 3] = [PaymentStatus::Paid, PaymentStatus::Partial, PaymentStatus::Unpaid];

    pub fn label(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "Payé",
            PaymentStatus::Partial => "Partiel",
            PaymentStatus::Unpaid => "Impayé",
        }
    }
}

/// Tuition balance of one student.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentAccount {
    pub student_id: u32,
    pub name: String,
    pub email: String,
    pub course: String,
    pub total_fees: i64,
    pub paid: i64,
}

impl StudentAccount {
    /// Amount still due, never negative.
    pub fn remaining(&self) -> i64 {
        (self.total_fees - self.paid).max(0)
    }

    pub fn status(&self) -> PaymentStatus {
        if self.paid >= self.total_fees {
            PaymentStatus::Paid
        } else if self.paid > 0 {
            PaymentStatus::Partial
        } else {
            PaymentStatus::Unpaid
        }
    }

    /// Share of the fees already paid, in `0.0..=1.0`.
    pub fn progress(&self) -> f32 {
        if self.total_fees <= 0 {
            return 1.0;
        }
        (self.paid as f32 / self.total_fees as f32).clamp(0.0, 1.0)
    }
}

/// A payment in the ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: u32,
    pub student_id: u32,
    pub amount: i64,
    pub date: NaiveDate,
    pub method: PaymentMethod,
    pub notes: String,
}

/// Data captured by the payment form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentData {
    pub amount: i64,
    pub method: PaymentMethod,
    pub date: NaiveDate,
    pub notes: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(total_fees: i64, paid: i64) -> StudentAccount {
        StudentAccount {
            student_id: 1,
            name: "Alice Johnson".into(),
            email: "alice@email.com".into(),
            course: "Développement Web".into(),
            total_fees,
            paid,
        }
    }

    #[test]
    fn test_status_is_derived_from_amounts() {
        assert_eq!(account(80_000, 80_000).status(), PaymentStatus::Paid);
        assert_eq!(account(100_000, 50_000).status(), PaymentStatus::Partial);
        assert_eq!(account(75_000, 0).status(), PaymentStatus::Unpaid);
    }

    #[test]
    fn test_remaining_never_negative() {
        assert_eq!(account(80_000, 65_000).remaining(), 15_000);
        assert_eq!(account(80_000, 90_000).remaining(), 0);
        assert_eq!(account(80_000, 20_000).progress(), 0.25);
    }
}
