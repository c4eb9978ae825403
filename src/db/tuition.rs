//! Tuition accounts and the payment ledger.

use serde::Serialize;

use super::{Store, matches_term, next_id};
use crate::error::{AppError, Result};
use crate::models::{Payment, PaymentData, PaymentStatus, Student, StudentAccount};

pub fn list_accounts(store: &Store) -> &[StudentAccount] {
    &store.accounts
}

pub fn get_account(store: &Store, student_id: u32) -> Option<&StudentAccount> {
    store.accounts.iter().find(|a| a.student_id == student_id)
}

/// Accounts whose student name, email or course contains `term`,
/// optionally restricted to one payment status.
pub fn search_accounts<'a>(store: &'a Store, term: &str, status: Option<PaymentStatus>) -> Vec<&'a StudentAccount> {
    store
        .accounts
        .iter()
        .filter(|a| matches_term(term, &[&a.name, &a.email, &a.course]))
        .filter(|a| status.is_none_or(|s| a.status() == s))
        .collect()
}

/// Payments of one student, most recent first.
pub fn payments_for(store: &Store, student_id: u32) -> Vec<&Payment> {
    let mut payments: Vec<&Payment> = store.payments.iter().filter(|p| p.student_id == student_id).collect();
    payments.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
    payments
}

/// Open a tuition account for a newly enrolled student.
pub fn open_account(store: &mut Store, student: &Student, total_fees: i64) -> Result<StudentAccount> {
    if get_account(store, student.id).is_some() {
        return Err(AppError::validation(format!("Le compte de {} existe déjà", student.name)));
    }
    let account = StudentAccount {
        student_id: student.id,
        name: student.name.clone(),
        email: student.email.clone(),
        course: student.course.clone(),
        total_fees,
        paid: 0,
    };
    tracing::info!("Tuition account opened: {} ({} FCFA)", account.name, total_fees);
    store.accounts.push(account.clone());
    Ok(account)
}

#[derive(Serialize)]
struct PaymentLog<'a> {
    student_id: u32,
    student: &'a str,
    #[serde(flatten)]
    data: &'a PaymentData,
    remaining_after: i64,
}

impl Store {
    /// Apply a payment to a student's account and append it to the ledger.
    ///
    /// The amount must be positive and no greater than what is still due,
    /// so `paid` never exceeds `total_fees`.
    pub fn record_payment(&mut self, student_id: u32, data: PaymentData) -> Result<Payment> {
        let id = next_id(&self.payments, |p| p.id);
        let account = self
            .accounts
            .iter_mut()
            .find(|a| a.student_id == student_id)
            .ok_or_else(|| AppError::not_found(format!("Aucun compte pour l'étudiant {student_id}")))?;

        if data.amount <= 0 {
            return Err(AppError::payment("Le montant doit être supérieur à 0"));
        }
        let remaining = account.remaining();
        if data.amount > remaining {
            return Err(AppError::payment(format!(
                "Le montant dépasse le reste à payer ({remaining} FCFA)"
            )));
        }

        let log = serde_json::to_string(&PaymentLog {
            student_id,
            student: &account.name,
            data: &data,
            remaining_after: remaining - data.amount,
        })?;
        account.paid += data.amount;
        tracing::info!("Payment recorded: {}", log);

        let payment = Payment {
            id,
            student_id,
            amount: data.amount,
            date: data.date,
            method: data.method,
            notes: data.notes,
        };
        self.payments.push(payment.clone());
        Ok(payment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PaymentMethod;
    use chrono::NaiveDate;

    fn payment(amount: i64) -> PaymentData {
        PaymentData {
            amount,
            method: PaymentMethod::MobileMoney,
            date: NaiveDate::from_ymd_opt(2024, 12, 1).unwrap(),
            notes: "Deuxième tranche".to_string(),
        }
    }

    #[test]
    fn test_record_payment_updates_account_and_ledger() {
        let mut store = Store::seeded();
        let recorded = store.record_payment(2, payment(30_000)).unwrap();

        assert_eq!(recorded.id, 5);
        assert_eq!(get_account(&store, 2).unwrap().paid, 80_000);
        assert_eq!(payments_for(&store, 2).len(), 3);
        assert_eq!(payments_for(&store, 2)[0].amount, 30_000);
    }

    #[test]
    fn test_full_payment_marks_paid() {
        let mut store = Store::seeded();
        store.record_payment(3, payment(75_000)).unwrap();
        assert_eq!(get_account(&store, 3).unwrap().status(), PaymentStatus::Paid);
    }

    #[test]
    fn test_rejects_zero_and_overpayment() {
        let mut store = Store::seeded();
        assert!(matches!(store.record_payment(2, payment(0)), Err(AppError::Payment(_))));
        assert!(matches!(store.record_payment(2, payment(50_001)), Err(AppError::Payment(_))));
        assert!(matches!(store.record_payment(5, payment(1)), Err(AppError::Payment(_))));
        assert!(matches!(store.record_payment(99, payment(1)), Err(AppError::NotFound(_))));
        assert_eq!(get_account(&store, 2).unwrap().paid, 50_000);
        assert_eq!(store.payments.len(), 4);
    }

    #[test]
    fn test_open_account_then_pay() {
        let mut store = Store::seeded();
        let student = store.students[0].clone();
        assert!(open_account(&mut store, &student, 80_000).is_err());

        store.accounts.retain(|a| a.student_id != student.id);
        let account = open_account(&mut store, &student, 80_000).unwrap();
        assert_eq!(account.status(), PaymentStatus::Unpaid);

        store.record_payment(student.id, payment(15_000)).unwrap();
        assert_eq!(get_account(&store, student.id).unwrap().remaining(), 65_000);
    }

    #[test]
    fn test_search_accounts_with_status() {
        let store = Store::seeded();
        assert_eq!(search_accounts(&store, "", None).len(), 8);
        assert_eq!(search_accounts(&store, "", Some(PaymentStatus::Unpaid)).len(), 2);
        assert_eq!(search_accounts(&store, "design", None).len(), 2);
        assert_eq!(search_accounts(&store, "design", Some(PaymentStatus::Paid)).len(), 1);
    }
}
