//! Tuition figures: quick payment amounts, ledger statistics, payment form.

use chrono::NaiveDate;

use crate::models::{PaymentData, PaymentMethod, PaymentStatus, StudentAccount};
use crate::validation::FieldErrors;

/// A quick-fill amount offered by the payment form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaymentPreset {
    pub label: &'static str,
    pub amount: i64,
}

/// Full, half and quarter of what remains due. Halves round up.
pub fn payment_presets(total_fees: i64, paid: i64) -> [PaymentPreset; 3] {
    let remaining = (total_fees - paid).max(0);
    [
        PaymentPreset {
            label: "Complet",
            amount: remaining,
        },
        PaymentPreset {
            label: "50%",
            amount: (remaining + 1) / 2,
        },
        PaymentPreset {
            label: "25%",
            amount: (remaining + 2) / 4,
        },
    ]
}

/// Group digits by thousands with a space: `65000` -> `"65 000"`.
pub fn format_amount(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }
    if amount < 0 {
        grouped.insert(0, '-');
    }
    grouped
}

/// Amount followed by the currency, e.g. `"65 000 CFA"`.
pub fn format_cfa(amount: i64) -> String {
    format!("{} CFA", format_amount(amount))
}

/// Headline figures of the tuition page.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TuitionSummary {
    /// Sum of all amounts paid.
    pub total_revenue: i64,
    /// Sum still due over accounts that are not fully paid.
    pub total_pending: i64,
    pub total_fees: i64,
    pub paid_count: usize,
    pub partial_count: usize,
    pub unpaid_count: usize,
}

impl TuitionSummary {
    pub fn from_accounts(accounts: &[StudentAccount]) -> Self {
        accounts.iter().fold(Self::default(), |mut summary, account| {
            summary.total_revenue += account.paid;
            summary.total_fees += account.total_fees;
            match account.status() {
                PaymentStatus::Paid => summary.paid_count += 1,
                PaymentStatus::Partial => {
                    summary.partial_count += 1;
                    summary.total_pending += account.remaining();
                }
                PaymentStatus::Unpaid => {
                    summary.unpaid_count += 1;
                    summary.total_pending += account.remaining();
                }
            }
            summary
        })
    }

    /// Collected share of all fees, in percent.
    pub fn collection_rate(&self) -> f64 {
        if self.total_fees <= 0 {
            return 0.0;
        }
        self.total_revenue as f64 * 100.0 / self.total_fees as f64
    }
}

/// State of the payment dialog for one account.
#[derive(Debug, Clone, Default)]
pub struct PaymentForm {
    pub is_open: bool,
    pub student_id: u32,
    pub student_name: String,
    pub total_fees: i64,
    pub paid: i64,
    pub amount: i64,
    pub method: PaymentMethod,
    pub date: NaiveDate,
    pub notes: String,
    pub errors: FieldErrors,
}

impl PaymentForm {
    /// Open the form pre-filled with the full remaining amount.
    pub fn for_account(account: &StudentAccount, today: NaiveDate) -> Self {
        Self {
            is_open: true,
            student_id: account.student_id,
            student_name: account.name.clone(),
            total_fees: account.total_fees,
            paid: account.paid,
            amount: account.remaining(),
            method: PaymentMethod::Cash,
            date: today,
            notes: String::new(),
            errors: FieldErrors::new(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn remaining(&self) -> i64 {
        (self.total_fees - self.paid).max(0)
    }

    pub fn presets(&self) -> [PaymentPreset; 3] {
        payment_presets(self.total_fees, self.paid)
    }

    pub fn apply_preset(&mut self, preset: PaymentPreset) {
        self.amount = preset.amount;
        self.errors.clear("amount");
    }

    /// Validate and build the payment. Errors are kept on the form.
    pub fn submit(&mut self) -> Option<PaymentData> {
        self.errors = FieldErrors::new();
        if self.amount <= 0 {
            self.errors.insert("amount", "Le montant doit être supérieur à 0");
        } else if self.amount > self.remaining() {
            self.errors.insert(
                "amount",
                format!("Le montant ne peut pas dépasser {}", format_cfa(self.remaining())),
            );
        }

        if !self.errors.is_empty() {
            return None;
        }

        Some(PaymentData {
            amount: self.amount,
            method: self.method,
            date: self.date,
            notes: self.notes.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    fn amounts(presets: [PaymentPreset; 3]) -> [i64; 3] {
        presets.map(|p| p.amount)
    }

    #[test]
    fn test_presets_for_unpaid_account() {
        assert_eq!(amounts(payment_presets(65_000, 0)), [65_000, 32_500, 16_250]);
    }

    #[test]
    fn test_presets_round_halves_up() {
        assert_eq!(amounts(payment_presets(3, 0)), [3, 2, 1]);
        assert_eq!(amounts(payment_presets(100_000, 99_998)), [2, 1, 1]);
        assert_eq!(amounts(payment_presets(100_000, 99_999)), [1, 1, 0]);
        assert_eq!(amounts(payment_presets(80_000, 80_000)), [0, 0, 0]);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0), "0");
        assert_eq!(format_amount(999), "999");
        assert_eq!(format_amount(65_000), "65 000");
        assert_eq!(format_amount(1_234_567), "1 234 567");
        assert_eq!(format_amount(-15_000), "-15 000");
        assert_eq!(format_cfa(32_500), "32 500 CFA");
    }

    #[test]
    fn test_summary_from_fixture_accounts() {
        let summary = TuitionSummary::from_accounts(&fixtures::student_accounts());

        assert_eq!(summary.total_revenue, 360_000);
        assert_eq!(summary.total_fees, 640_000);
        // 15 000 + 50 000 + 75 000 + 75 000 + 65 000
        assert_eq!(summary.total_pending, 280_000);
        assert_eq!(summary.paid_count, 3);
        assert_eq!(summary.partial_count, 3);
        assert_eq!(summary.unpaid_count, 2);
        assert!((summary.collection_rate() - 56.25).abs() < 1e-9);
    }

    #[test]
    fn test_summary_empty() {
        let summary = TuitionSummary::from_accounts(&[]);
        assert_eq!(summary.total_revenue, 0);
        assert_eq!(summary.collection_rate(), 0.0);
    }

    #[test]
    fn test_form_prefills_remaining_and_validates() {
        let accounts = fixtures::student_accounts();
        let today = NaiveDate::from_ymd_opt(2024, 12, 14).unwrap();
        let mut form = PaymentForm::for_account(&accounts[1], today);

        assert!(form.is_open);
        assert_eq!(form.amount, 50_000);
        assert_eq!(form.date, today);

        form.amount = 60_000;
        assert!(form.submit().is_none());
        assert!(form.errors.get("amount").is_some());

        form.amount = 0;
        assert!(form.submit().is_none());

        let half = form.presets()[1];
        form.apply_preset(half);
        form.notes = "  Tranche 2 ".to_string();
        let data = form.submit().unwrap();
        assert_eq!(data.amount, 25_000);
        assert_eq!(data.notes, "Tranche 2");
        assert!(form.errors.is_empty());
    }
}
