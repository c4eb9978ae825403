//! Excel exports and save dialogs.

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use rust_xlsxwriter::{Color, Format, FormatBorder, Workbook, Worksheet, XlsxError};

use crate::attendance::AttendanceSheet;
use crate::models::{Course, Payment, Student, StudentAccount, StudentAttendance, Teacher};

fn header_format() -> Format {
    Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0x4472C4))
        .set_font_color(Color::White)
        .set_border(FormatBorder::Thin)
}

fn amount_format() -> Format {
    Format::new().set_num_format("#,##0")
}

/// Write the header row, then freeze it and add an autofilter over `rows` data rows.
fn finish_sheet(worksheet: &mut Worksheet, headers: &[&str], rows: usize) -> Result<(), XlsxError> {
    let header_format = header_format();
    for (col, header) in headers.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }

    if rows > 0 {
        worksheet.autofilter(0, 0, rows as u32, (headers.len() - 1) as u16)?;
    }

    // Freeze top row
    worksheet.set_freeze_panes(1, 0)?;
    Ok(())
}

fn date_cell(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%d/%m/%Y").to_string()).unwrap_or_default()
}

/// Export the student roster.
pub fn export_students_to_excel(students: &[Student], path: &Path) -> Result<(), XlsxError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Étudiants")?;

    worksheet.set_column_width(0, 6)?; // ID
    worksheet.set_column_width(1, 28)?; // Nom
    worksheet.set_column_width(2, 30)?; // Email
    worksheet.set_column_width(3, 24)?; // Cours
    worksheet.set_column_width(4, 16)?; // Téléphone
    worksheet.set_column_width(5, 14)?; // Inscription
    worksheet.set_column_width(6, 10)?; // Statut

    for (idx, student) in students.iter().enumerate() {
        let row = (idx + 1) as u32;
        worksheet.write_number(row, 0, student.id)?;
        worksheet.write_string(row, 1, &student.name)?;
        worksheet.write_string(row, 2, &student.email)?;
        worksheet.write_string(row, 3, &student.course)?;
        worksheet.write_string(row, 4, student.phone.as_deref().unwrap_or(""))?;
        worksheet.write_string(row, 5, date_cell(student.enrollment_date))?;
        worksheet.write_string(row, 6, student.status.label())?;
    }

    finish_sheet(
        worksheet,
        &["ID", "Nom", "Email", "Cours", "Téléphone", "Inscription", "Statut"],
        students.len(),
    )?;

    workbook.save(path)?;
    Ok(())
}

/// Export the teaching staff.
pub fn export_teachers_to_excel(teachers: &[Teacher], path: &Path) -> Result<(), XlsxError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Enseignants")?;

    worksheet.set_column_width(0, 6)?; // ID
    worksheet.set_column_width(1, 28)?; // Nom
    worksheet.set_column_width(2, 30)?; // Email
    worksheet.set_column_width(3, 24)?; // Matière
    worksheet.set_column_width(4, 16)?; // Téléphone
    worksheet.set_column_width(5, 14)?; // Embauche
    worksheet.set_column_width(6, 10)?; // Statut

    for (idx, teacher) in teachers.iter().enumerate() {
        let row = (idx + 1) as u32;
        worksheet.write_number(row, 0, teacher.id)?;
        worksheet.write_string(row, 1, &teacher.name)?;
        worksheet.write_string(row, 2, &teacher.email)?;
        worksheet.write_string(row, 3, &teacher.subject)?;
        worksheet.write_string(row, 4, teacher.phone.as_deref().unwrap_or(""))?;
        worksheet.write_string(row, 5, date_cell(teacher.hire_date))?;
        worksheet.write_string(row, 6, teacher.status.label())?;
    }

    finish_sheet(
        worksheet,
        &["ID", "Nom", "Email", "Matière", "Téléphone", "Embauche", "Statut"],
        teachers.len(),
    )?;

    workbook.save(path)?;
    Ok(())
}

/// Export the course catalogue.
pub fn export_courses_to_excel(courses: &[Course], path: &Path) -> Result<(), XlsxError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Cours")?;

    let amount = amount_format();

    worksheet.set_column_width(0, 10)?; // Code
    worksheet.set_column_width(1, 28)?; // Nom
    worksheet.set_column_width(2, 10)?; // Semaines
    worksheet.set_column_width(3, 10)?; // Étudiants
    worksheet.set_column_width(4, 24)?; // Enseignant
    worksheet.set_column_width(5, 12)?; // Prix
    worksheet.set_column_width(6, 10)?; // Statut

    for (idx, course) in courses.iter().enumerate() {
        let row = (idx + 1) as u32;
        worksheet.write_string(row, 0, &course.code)?;
        worksheet.write_string(row, 1, &course.name)?;
        worksheet.write_number(row, 2, course.duration_weeks)?;
        worksheet.write_number(row, 3, course.students)?;
        worksheet.write_string(row, 4, course.teacher.as_deref().unwrap_or(""))?;
        match course.price {
            Some(price) => worksheet.write_number_with_format(row, 5, price as f64, &amount)?,
            None => worksheet.write_string(row, 5, "")?,
        };
        worksheet.write_string(row, 6, course.status.label())?;
    }

    finish_sheet(
        worksheet,
        &["Code", "Nom", "Semaines", "Étudiants", "Enseignant", "Prix (FCFA)", "Statut"],
        courses.len(),
    )?;

    workbook.save(path)?;
    Ok(())
}

/// Export tuition balances and the payment ledger, one worksheet each.
pub fn export_tuition_to_excel(
    accounts: &[StudentAccount],
    payments: &[Payment],
    path: &Path,
) -> Result<(), XlsxError> {
    let mut workbook = Workbook::new();
    let amount = amount_format();

    let balances = workbook.add_worksheet();
    balances.set_name("Scolarité")?;

    balances.set_column_width(0, 28)?; // Étudiant
    balances.set_column_width(1, 30)?; // Email
    balances.set_column_width(2, 24)?; // Cours
    balances.set_column_width(3, 12)?; // Total
    balances.set_column_width(4, 12)?; // Payé
    balances.set_column_width(5, 12)?; // Reste
    balances.set_column_width(6, 10)?; // Statut

    for (idx, account) in accounts.iter().enumerate() {
        let row = (idx + 1) as u32;
        balances.write_string(row, 0, &account.name)?;
        balances.write_string(row, 1, &account.email)?;
        balances.write_string(row, 2, &account.course)?;
        balances.write_number_with_format(row, 3, account.total_fees as f64, &amount)?;
        balances.write_number_with_format(row, 4, account.paid as f64, &amount)?;
        balances.write_number_with_format(row, 5, account.remaining() as f64, &amount)?;
        balances.write_string(row, 6, account.status().label())?;
    }

    finish_sheet(
        balances,
        &["Étudiant", "Email", "Cours", "Total", "Payé", "Reste", "Statut"],
        accounts.len(),
    )?;

    let ledger = workbook.add_worksheet();
    ledger.set_name("Paiements")?;

    ledger.set_column_width(0, 6)?; // N°
    ledger.set_column_width(1, 12)?; // Date
    ledger.set_column_width(2, 28)?; // Étudiant
    ledger.set_column_width(3, 12)?; // Montant
    ledger.set_column_width(4, 18)?; // Mode
    ledger.set_column_width(5, 30)?; // Notes

    for (idx, payment) in payments.iter().enumerate() {
        let row = (idx + 1) as u32;
        let student = accounts
            .iter()
            .find(|a| a.student_id == payment.student_id)
            .map(|a| a.name.as_str())
            .unwrap_or("");

        ledger.write_number(row, 0, payment.id)?;
        ledger.write_string(row, 1, date_cell(Some(payment.date)))?;
        ledger.write_string(row, 2, student)?;
        ledger.write_number_with_format(row, 3, payment.amount as f64, &amount)?;
        ledger.write_string(row, 4, payment.method.label())?;
        ledger.write_string(row, 5, &payment.notes)?;
    }

    finish_sheet(
        ledger,
        &["N°", "Date", "Étudiant", "Montant", "Mode", "Notes"],
        payments.len(),
    )?;

    workbook.save(path)?;
    Ok(())
}

/// Export the marks of one session next to each student's history.
pub fn export_attendance_to_excel(
    students: &[StudentAttendance],
    sheet: &AttendanceSheet,
    date: NaiveDate,
    path: &Path,
) -> Result<(), XlsxError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Présence")?;

    worksheet.set_column_width(0, 28)?; // Étudiant
    worksheet.set_column_width(1, 24)?; // Cours
    worksheet.set_column_width(2, 12)?; // Date
    worksheet.set_column_width(3, 12)?; // Statut
    worksheet.set_column_width(4, 10)?; // Présences
    worksheet.set_column_width(5, 10)?; // Absences
    worksheet.set_column_width(6, 10)?; // Retards

    let day = date.format("%d/%m/%Y").to_string();
    for (idx, student) in students.iter().enumerate() {
        let row = (idx + 1) as u32;
        let status = sheet
            .status_of(student.student_id)
            .map(|s| s.label())
            .unwrap_or("Non marqué");

        worksheet.write_string(row, 0, &student.name)?;
        worksheet.write_string(row, 1, &student.course)?;
        worksheet.write_string(row, 2, &day)?;
        worksheet.write_string(row, 3, status)?;
        worksheet.write_number(row, 4, student.present)?;
        worksheet.write_number(row, 5, student.absent)?;
        worksheet.write_number(row, 6, student.late)?;
    }

    finish_sheet(
        worksheet,
        &["Étudiant", "Cours", "Date", "Statut", "Présences", "Absences", "Retards"],
        students.len(),
    )?;

    workbook.save(path)?;
    Ok(())
}

/// Open save file dialog and return selected path.
pub fn show_save_dialog(default_name: &str) -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_file_name(default_name)
        .add_filter("Fichiers Excel", &["xlsx"])
        .save_file()
}

/// Save dialog for printable receipts.
pub fn show_receipt_save_dialog(default_name: &str) -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_file_name(default_name)
        .add_filter("Page HTML", &["html"])
        .save_file()
}

/// Open dialog for a student photo.
pub fn show_photo_dialog() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .add_filter("Images", &["png", "jpg", "jpeg"])
        .pick_file()
}

/// Generate default filename for export.
pub fn generate_export_filename(prefix: &str) -> String {
    let now = Local::now();
    format!("{prefix}_{ts}.xlsx", ts = now.format("%Y%m%d_%H%M%S"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::models::AttendanceStatus;

    fn assert_written(path: &Path) {
        let meta = std::fs::metadata(path).unwrap();
        assert!(meta.len() > 0);
        // xlsx files are zip archives
        let bytes = std::fs::read(path).unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn test_export_rosters() {
        let dir = tempfile::tempdir().unwrap();

        let students = dir.path().join("students.xlsx");
        export_students_to_excel(&fixtures::students(), &students).unwrap();
        assert_written(&students);

        let teachers = dir.path().join("teachers.xlsx");
        export_teachers_to_excel(&fixtures::teachers(), &teachers).unwrap();
        assert_written(&teachers);

        let courses = dir.path().join("courses.xlsx");
        export_courses_to_excel(&fixtures::courses(), &courses).unwrap();
        assert_written(&courses);
    }

    #[test]
    fn test_export_tuition_and_attendance() {
        let dir = tempfile::tempdir().unwrap();

        let tuition = dir.path().join("tuition.xlsx");
        export_tuition_to_excel(&fixtures::student_accounts(), &fixtures::payments(), &tuition).unwrap();
        assert_written(&tuition);

        let mut sheet = AttendanceSheet::new();
        sheet.mark(1, AttendanceStatus::Late);
        let attendance = dir.path().join("attendance.xlsx");
        export_attendance_to_excel(
            &fixtures::student_attendance(),
            &sheet,
            fixtures::attendance_start_date(),
            &attendance,
        )
        .unwrap();
        assert_written(&attendance);
    }

    #[test]
    fn test_export_empty_lists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.xlsx");
        export_students_to_excel(&[], &path).unwrap();
        assert_written(&path);
    }

    #[test]
    fn test_generate_export_filename() {
        let name = generate_export_filename("etudiants");
        assert!(name.starts_with("etudiants_"));
        assert!(name.ends_with(".xlsx"));
        // prefix + '_' + YYYYmmdd_HHMMSS + ".xlsx"
        assert_eq!(name.len(), "etudiants_".len() + 15 + 5);
    }
}
