//! Enrollment receipts and their printable HTML rendering.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::{FeesConfig, SchoolConfig};
use crate::enrollment::DeskPayment;
use crate::error::Result;
use crate::tuition::format_cfa;
use crate::words::number_to_french_words;

/// How the tuition is settled at enrollment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TuitionPlan {
    #[default]
    Full,
    Installment,
}

impl TuitionPlan {
    pub const ALL: [TuitionPlan; 2] = [TuitionPlan::Full, TuitionPlan::Installment];

    pub fn label(&self) -> &'static str {
        match self {
            TuitionPlan::Full => "Paiement complet",
            TuitionPlan::Installment => "Paiement en tranches",
        }
    }
}

/// Everything printed on an enrollment receipt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceiptData {
    pub receipt_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub course: String,
    pub registration_fees: bool,
    pub tuition_fees: bool,
    pub tuition_plan: TuitionPlan,
    pub payment_method: DeskPayment,
    pub total_amount: i64,
    pub photo: Option<PathBuf>,
    /// `dd/mm/yyyy`
    pub date: String,
    /// Fee schedule in force when the receipt was issued.
    pub fees: FeesConfig,
}

impl ReceiptData {
    /// Name as printed: last name first.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.last_name, self.first_name)
    }

    /// Tuition still owed after this payment.
    pub fn remaining_amount(&self) -> i64 {
        match (self.tuition_fees, self.tuition_plan) {
            (true, TuitionPlan::Full) => 0,
            (true, TuitionPlan::Installment) => self.fees.installment,
            (false, _) => self.fees.tuition,
        }
    }

    /// What was paid for.
    pub fn fee_label(&self) -> String {
        match (self.registration_fees, self.tuition_fees) {
            (true, true) => "Frais d'inscription + Frais de scolarité".to_string(),
            (true, false) => "Frais d'inscription".to_string(),
            (false, true) => "Frais de scolarité".to_string(),
            (false, false) => "Aucun paiement".to_string(),
        }
    }

    /// Total spelled out for the "arrêté la présente somme" line.
    pub fn total_in_words(&self) -> String {
        let amount = u64::try_from(self.total_amount).unwrap_or(0);
        format!("{} francs CFA", number_to_french_words(amount))
    }

    /// Self-contained, landscape, print-ready HTML page.
    pub fn render_html(&self, school: &SchoolConfig) -> String {
        let mut html = String::with_capacity(4096);
        let name = escape(&self.display_name());
        let school_name = escape(&school.name);

        html.push_str("<!DOCTYPE html>\n<html lang=\"fr\">\n<head>\n<meta charset=\"utf-8\">\n");
        let _ = writeln!(html, "<title>Reçu {}</title>", escape(&self.receipt_id));
        html.push_str(STYLE);
        html.push_str("</head>\n<body>\n<div class=\"receipt\">\n");

        let _ = writeln!(
            html,
            "<header><div class=\"logo\">{}</div><div class=\"school\"><h1>{}</h1><p>{}</p>\
             <p class=\"small\">Ouverture N° {}</p></div><div class=\"title\"><h2>Reçu</h2><p>N° {}</p></div></header>",
            escape(&school.name.chars().next().map(String::from).unwrap_or_default()),
            school_name,
            escape(&school.tagline),
            escape(&school.opening_number),
            escape(&self.receipt_id),
        );

        html.push_str("<main>\n<section class=\"student\">\n");
        for (label, value) in [
            ("Reçu de", name.clone()),
            ("Téléphone", escape(&self.phone)),
            ("Email", escape(&self.email)),
            ("Cours", escape(&self.course)),
            ("Motif", escape(&self.fee_label())),
        ] {
            let _ = writeln!(html, "<p class=\"label\">{label}</p><p class=\"value\">{value}</p>");
        }
        let _ = writeln!(
            html,
            "<p class=\"label\">Arrêté la présente somme à</p><p class=\"words\">{}</p>",
            escape(&self.total_in_words())
        );
        html.push_str("</section>\n<section class=\"amounts\">\n");
        for (label, value) in [
            ("Avance", format_cfa(self.total_amount)),
            ("Reste", format_cfa(self.remaining_amount())),
            ("Mode de paiement", self.payment_method.label().to_string()),
            ("Total", format_cfa(self.total_amount)),
            ("Date", self.date.clone()),
        ] {
            let _ = writeln!(html, "<div class=\"row\"><span>{label}</span><strong>{}</strong></div>", escape(&value));
        }
        html.push_str("</section>\n</main>\n");

        let _ = writeln!(
            html,
            "<footer><div class=\"sign\"><p>Signature de l'étudiant</p><p class=\"line\">{name}</p></div>\
             <div class=\"sign\"><p>Signature de l'administration</p><p class=\"line\">{school_name}</p></div></footer>"
        );
        let _ = writeln!(
            html,
            "<p class=\"bottom\">{school_name} - {} - {} | Ce reçu est une preuve de paiement</p>",
            escape(&school.contact),
            escape(&school.address),
        );
        html.push_str("</div>\n</body>\n</html>\n");
        html
    }

    /// Write the rendered receipt to `path`.
    pub fn save_html(&self, school: &SchoolConfig, path: &Path) -> Result<()> {
        std::fs::write(path, self.render_html(school))?;
        tracing::info!("Receipt {} saved to {:?}", self.receipt_id, path);
        Ok(())
    }

    pub fn default_file_name(&self) -> String {
        format!("recu_{}.html", self.receipt_id)
    }
}

const STYLE: &str = r#"<style>
@page { size: landscape; margin: 0.5cm; }
body { font-family: "Segoe UI", Arial, sans-serif; color: #1f2937; margin: 0; }
.receipt { border: 2px solid #1e3a8a; padding: 24px; max-width: 1000px; margin: 16px auto; }
header { display: flex; justify-content: space-between; align-items: center; border-bottom: 2px solid #1e3a8a; padding-bottom: 12px; }
.logo { width: 64px; height: 64px; border-radius: 50%; background: #1e3a8a; color: #fff; font-size: 32px; font-weight: bold; display: flex; align-items: center; justify-content: center; }
.school { text-align: center; } .school h1 { margin: 0; color: #1e3a8a; letter-spacing: 2px; }
.title { text-align: right; } .title h2 { margin: 0; text-transform: uppercase; }
.small { font-size: 12px; color: #6b7280; }
main { display: flex; gap: 32px; margin-top: 16px; }
.student { flex: 3; } .amounts { flex: 2; background: #f3f4f6; padding: 12px; border-radius: 8px; }
.label { font-size: 12px; color: #6b7280; margin: 8px 0 0; } .value { margin: 0; font-weight: 600; }
.words { margin: 0; font-style: italic; font-weight: 600; }
.row { display: flex; justify-content: space-between; padding: 6px 0; border-bottom: 1px dashed #d1d5db; }
footer { display: flex; justify-content: space-between; margin-top: 32px; }
.sign { width: 40%; text-align: center; } .line { border-top: 1px solid #1f2937; padding-top: 4px; margin-top: 40px; }
.bottom { text-align: center; font-size: 11px; color: #6b7280; margin-top: 16px; }
</style>
"#;

/// Minimal HTML text escaping.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn receipt() -> ReceiptData {
        ReceiptData {
            receipt_id: "MS-200123".to_string(),
            first_name: "Awa".to_string(),
            last_name: "Ngono".to_string(),
            email: "awa@email.com".to_string(),
            phone: "+237677000000".to_string(),
            course: "Data Science".to_string(),
            registration_fees: true,
            tuition_fees: true,
            tuition_plan: TuitionPlan::Installment,
            payment_method: DeskPayment::Cash,
            total_amount: 47_500,
            photo: None,
            date: "09/12/2024".to_string(),
            fees: FeesConfig::default(),
        }
    }

    #[test]
    fn test_remaining_amount() {
        let mut data = receipt();
        assert_eq!(data.remaining_amount(), 32_500);

        data.tuition_plan = TuitionPlan::Full;
        assert_eq!(data.remaining_amount(), 0);

        data.tuition_fees = false;
        assert_eq!(data.remaining_amount(), 65_000);
    }

    #[test]
    fn test_fee_label() {
        let mut data = receipt();
        assert_eq!(data.fee_label(), "Frais d'inscription + Frais de scolarité");
        data.registration_fees = false;
        assert_eq!(data.fee_label(), "Frais de scolarité");
        data.tuition_fees = false;
        assert_eq!(data.fee_label(), "Aucun paiement");
    }

    #[test]
    fn test_total_in_words() {
        assert_eq!(receipt().total_in_words(), "quarante-sept mille cinq cents francs CFA");
    }

    #[test]
    fn test_render_html_contents() {
        let mut data = receipt();
        data.last_name = "N'go <b>".to_string();
        let html = data.render_html(&SchoolConfig::default());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("size: landscape"));
        assert!(html.contains("MAAT SCHOOL"));
        assert!(html.contains("N° MS-200123"));
        assert!(html.contains("47 500 CFA"));
        assert!(html.contains("32 500 CFA"));
        assert!(html.contains("quarante-sept mille cinq cents francs CFA"));
        assert!(html.contains("N&#39;go &lt;b&gt; Awa"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn test_save_html() {
        let dir = tempfile::tempdir().unwrap();
        let data = receipt();
        let path = dir.path().join(data.default_file_name());
        data.save_html(&SchoolConfig::default(), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("Signature de l'administration"));
    }
}
