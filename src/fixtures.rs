//! Hardcoded records that seed the in-memory store and the public site.

use chrono::{NaiveDate, Weekday};

use crate::models::attendance::MonthlyAttendance;
use crate::models::course::CourseProgress;
use crate::models::student::StudentGrade;
use crate::models::teacher::{TaughtCourse, TeacherRating};
use crate::models::{
    AttendanceStatus, ContractType, Course, CourseStatus, DailyAttendance, DashboardStat, ExperienceLevel, JobOffer,
    Notification, NotificationKind, Payment, PaymentMethod, PricingPlan, Service, StaffMember, StaffStatus, Student,
    StudentAccount, StudentAttendance, StudentStatus, Teacher, TeacherStatus, TeamMember, Trend,
};
use crate::timetable::{ScheduleSlot, Timetable, TimetableCourse};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

const STUDENT_COURSES: [&str; 4] = ["Développement Web", "Data Science", "Design UI/UX", "Marketing Digital"];

pub fn students() -> Vec<Student> {
    let rows: [(&str, &str, StudentStatus); 12] = [
        ("Alice Johnson", "alice@email.com", StudentStatus::Active),
        ("Bob Smith", "bob@email.com", StudentStatus::Active),
        ("Carol White", "carol@email.com", StudentStatus::Graduated),
        ("David Brown", "david@email.com", StudentStatus::Inactive),
        ("Emma Wilson", "emma@email.com", StudentStatus::Active),
        ("Frank Miller", "frank@email.com", StudentStatus::Active),
        ("Grace Lee", "grace@email.com", StudentStatus::Active),
        ("Henry Taylor", "henry@email.com", StudentStatus::Graduated),
        ("Isabel Garcia", "isabel@email.com", StudentStatus::Active),
        ("Jack Chen", "jack@email.com", StudentStatus::Inactive),
        ("Karen Martinez", "karen@email.com", StudentStatus::Active),
        ("Leo Kim", "leo@email.com", StudentStatus::Active),
    ];

    let mut students: Vec<Student> = rows
        .iter()
        .enumerate()
        .map(|(i, (name, email, status))| Student {
            id: i as u32 + 1,
            name: name.to_string(),
            email: email.to_string(),
            course: STUDENT_COURSES[i % STUDENT_COURSES.len()].to_string(),
            status: *status,
            phone: None,
            address: None,
            birth_date: None,
            enrollment_date: None,
            grade: None,
        })
        .collect();

    if let Some(alice) = students.first_mut() {
        alice.phone = Some("+33 6 12 34 56 78".to_string());
        alice.address = Some("123 Rue de Paris, 75001 Paris".to_string());
        alice.enrollment_date = Some(date(2024, 9, 15));
        alice.birth_date = Some(date(2000, 5, 20));
        alice.grade = Some("Licence 2".to_string());
    }

    students
}

pub fn student_grades() -> Vec<StudentGrade> {
    [
        ("HTML & CSS", 18, date(2024, 10, 15)),
        ("JavaScript", 16, date(2024, 11, 1)),
        ("React Basics", 17, date(2024, 11, 20)),
        ("Node.js", 15, date(2024, 12, 10)),
        ("TypeScript", 19, date(2025, 1, 15)),
        ("Database", 14, date(2025, 2, 1)),
    ]
    .into_iter()
    .map(|(course, grade, date)| StudentGrade {
        course: course.to_string(),
        grade,
        max_grade: 20,
        date,
    })
    .collect()
}

pub fn monthly_attendance() -> Vec<MonthlyAttendance> {
    [
        ("Septembre", 20, 2, 1),
        ("Octobre", 22, 0, 0),
        ("Novembre", 18, 3, 2),
        ("Décembre", 15, 1, 0),
    ]
    .into_iter()
    .map(|(month, present, absent, late)| MonthlyAttendance {
        month: month.to_string(),
        present,
        absent,
        late,
    })
    .collect()
}

pub fn teachers() -> Vec<Teacher> {
    // Former staff are kept as inactive
    let rows: [(&str, &str, &str, TeacherStatus); 8] = [
        ("Jean Dupont", "jean@maat.com", "Mathématiques", TeacherStatus::Active),
        ("Marie Martin", "marie@maat.com", "Physique", TeacherStatus::Active),
        ("Pierre Bernard", "pierre@maat.com", "Informatique", TeacherStatus::Active),
        ("Sophie Petit", "sophie@maat.com", "Français", TeacherStatus::Inactive),
        ("Lucas Robert", "lucas@maat.com", "Anglais", TeacherStatus::Active),
        ("Emma Moreau", "emma@maat.com", "Histoire", TeacherStatus::Active),
        ("Thomas Laurent", "thomas@maat.com", "Chimie", TeacherStatus::Active),
        ("Julie Simon", "julie@maat.com", "Biologie", TeacherStatus::Inactive),
    ];

    let mut teachers: Vec<Teacher> = rows
        .iter()
        .enumerate()
        .map(|(i, (name, email, subject, status))| Teacher {
            id: i as u32 + 1,
            name: name.to_string(),
            email: email.to_string(),
            subject: subject.to_string(),
            status: *status,
            phone: None,
            address: None,
            hire_date: None,
            birth_date: None,
            education: None,
            experience: None,
        })
        .collect();

    if let Some(jean) = teachers.first_mut() {
        jean.phone = Some("+33 6 12 34 56 78".to_string());
        jean.address = Some("123 Rue de Paris, 75001 Paris".to_string());
        jean.hire_date = Some(date(2020, 9, 1));
        jean.birth_date = Some(date(1975, 3, 15));
        jean.education = Some("Doctorat en Mathématiques".to_string());
        jean.experience = Some("15 ans".to_string());
    }
    if let Some(marie) = teachers.get_mut(1) {
        marie.phone = Some("+33 6 23 45 67 89".to_string());
    }

    teachers
}

pub fn taught_courses() -> Vec<TaughtCourse> {
    [
        ("Algèbre Linéaire", 25, "Lun 9h-11h"),
        ("Analyse Mathématique", 30, "Mar 14h-16h"),
        ("Statistiques", 22, "Jeu 10h-12h"),
    ]
    .into_iter()
    .map(|(name, students, schedule)| TaughtCourse {
        name: name.to_string(),
        students,
        schedule: schedule.to_string(),
    })
    .collect()
}

pub fn teacher_ratings() -> Vec<TeacherRating> {
    [("Septembre", 4.5, 12), ("Octobre", 4.7, 15), ("Novembre", 4.3, 10), ("Décembre", 4.8, 18)]
        .into_iter()
        .map(|(month, rating, feedback)| TeacherRating {
            month: month.to_string(),
            rating,
            feedback,
        })
        .collect()
}

pub fn courses() -> Vec<Course> {
    let rows: [(&str, &str, u32, u32, CourseStatus); 8] = [
        ("Développement Web", "DEV101", 12, 234, CourseStatus::Active),
        ("Data Science", "DS201", 16, 189, CourseStatus::Active),
        ("Design UI/UX", "UX301", 8, 156, CourseStatus::Active),
        ("Marketing Digital", "MK401", 10, 123, CourseStatus::Active),
        ("Machine Learning", "ML501", 20, 98, CourseStatus::Inactive),
        ("Cybersécurité", "CS601", 14, 67, CourseStatus::Active),
        ("Cloud Computing", "CC701", 10, 45, CourseStatus::Active),
        ("DevOps", "DO801", 12, 34, CourseStatus::Inactive),
    ];

    let mut courses: Vec<Course> = rows
        .iter()
        .enumerate()
        .map(|(i, (name, code, weeks, students, status))| Course {
            id: i as u32 + 1,
            name: name.to_string(),
            code: code.to_string(),
            duration_weeks: *weeks,
            students: *students,
            status: *status,
            description: None,
            teacher: None,
            level: None,
            price: None,
            start_date: None,
            end_date: None,
            modules: None,
        })
        .collect();

    if let Some(web) = courses.first_mut() {
        web.description = Some(
            "Apprenez à créer des sites web modernes et des applications web responsives avec HTML, CSS, \
             JavaScript et les frameworks populaires."
                .to_string(),
        );
        web.teacher = Some("Jean Dupont".to_string());
        web.level = Some("Débutant".to_string());
        web.price = Some(150_000);
        web.start_date = Some(date(2024, 9, 1));
        web.end_date = Some(date(2024, 11, 30));
        web.modules = Some(8);
    }

    courses
}

pub fn course_progress() -> Vec<CourseProgress> {
    [("Septembre", 180, 75), ("Octobre", 200, 82), ("Novembre", 220, 78), ("Décembre", 234, 85)]
        .into_iter()
        .map(|(month, students, completion)| CourseProgress {
            month: month.to_string(),
            students,
            completion,
        })
        .collect()
}

/// Tuition accounts of the first eight students.
pub fn student_accounts() -> Vec<StudentAccount> {
    let fees: [(i64, i64); 8] = [
        (80_000, 65_000),
        (100_000, 50_000),
        (75_000, 0),
        (65_000, 65_000),
        (80_000, 80_000),
        (100_000, 25_000),
        (75_000, 75_000),
        (65_000, 0),
    ];

    students()
        .into_iter()
        .zip(fees)
        .map(|(student, (total_fees, paid))| StudentAccount {
            student_id: student.id,
            name: student.name,
            email: student.email,
            course: student.course,
            total_fees,
            paid,
        })
        .collect()
}

pub fn payments() -> Vec<Payment> {
    [
        (1, 65_000, date(2024, 9, 15), PaymentMethod::Cash),
        (2, 25_000, date(2024, 9, 20), PaymentMethod::MobileMoney),
        (2, 25_000, date(2024, 10, 15), PaymentMethod::MobileMoney),
        (4, 65_000, date(2024, 9, 10), PaymentMethod::BankTransfer),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (student_id, amount, date, method))| Payment {
        id: i as u32 + 1,
        student_id,
        amount,
        date,
        method,
        notes: String::new(),
    })
    .collect()
}

/// Term attendance totals of the first eight students.
pub fn student_attendance() -> Vec<StudentAttendance> {
    let totals: [(u32, u32, u32); 8] = [
        (45, 3, 2),
        (42, 5, 1),
        (48, 1, 0),
        (40, 6, 3),
        (47, 2, 1),
        (44, 4, 2),
        (46, 2, 0),
        (43, 5, 2),
    ];

    students()
        .into_iter()
        .zip(totals)
        .map(|(student, (present, absent, late))| StudentAttendance {
            student_id: student.id,
            name: student.name,
            email: student.email,
            course: student.course,
            present,
            absent,
            late,
        })
        .collect()
}

pub fn daily_attendance() -> Vec<DailyAttendance> {
    [(9, 42, 6, 2), (10, 45, 3, 1), (11, 44, 4, 2), (12, 46, 2, 1), (13, 43, 5, 3), (14, 38, 8, 4)]
        .into_iter()
        .map(|(day, present, absent, late)| DailyAttendance {
            date: date(2024, 12, day),
            present,
            absent,
            late,
        })
        .collect()
}

/// Date the attendance page opens on.
pub fn attendance_start_date() -> NaiveDate {
    date(2024, 12, 14)
}

/// Marks already taken on the opening date.
pub fn initial_attendance_marks() -> Vec<(u32, AttendanceStatus)> {
    (1..=8)
        .map(|id| {
            let status = match id {
                4 => AttendanceStatus::Late,
                6 => AttendanceStatus::Absent,
                _ => AttendanceStatus::Present,
            };
            (id, status)
        })
        .collect()
}

pub fn staff_members() -> Vec<StaffMember> {
    vec![
        StaffMember {
            id: 1,
            name: "Admin User".to_string(),
            email: "admin@maat.com".to_string(),
            role: "Administrateur".to_string(),
            status: StaffStatus::Active,
        },
        StaffMember {
            id: 2,
            name: "Jean Dupont".to_string(),
            email: "jean.dupont@maat.com".to_string(),
            role: "Enseignant".to_string(),
            status: StaffStatus::Active,
        },
        StaffMember {
            id: 3,
            name: "Marie Martin".to_string(),
            email: "marie.martin@maat.com".to_string(),
            role: "Secrétaire".to_string(),
            status: StaffStatus::Pending,
        },
    ]
}

pub fn timetable() -> Timetable {
    let courses = [
        (1, "Développement Web", [59, 130, 246]),
        (2, "Data Science", [34, 197, 94]),
        (3, "Design UI/UX", [168, 85, 247]),
        (4, "Marketing Digital", [249, 115, 22]),
        (5, "Machine Learning", [239, 68, 68]),
    ]
    .into_iter()
    .map(|(id, name, color)| TimetableCourse {
        id,
        name: name.to_string(),
        color,
    })
    .collect();

    let slots = [
        (Weekday::Mon, 8, 1, "Jean Dupont"),
        (Weekday::Mon, 10, 3, "Sophie Petit"),
        (Weekday::Mon, 14, 2, "Marie Martin"),
        (Weekday::Tue, 9, 4, "Lucas Robert"),
        (Weekday::Tue, 11, 1, "Jean Dupont"),
        (Weekday::Tue, 15, 5, "Thomas Laurent"),
        (Weekday::Wed, 8, 2, "Marie Martin"),
        (Weekday::Wed, 10, 1, "Jean Dupont"),
        (Weekday::Wed, 14, 3, "Sophie Petit"),
        (Weekday::Thu, 9, 5, "Thomas Laurent"),
        (Weekday::Thu, 11, 4, "Lucas Robert"),
        (Weekday::Thu, 16, 2, "Marie Martin"),
        (Weekday::Fri, 8, 3, "Sophie Petit"),
        (Weekday::Fri, 10, 1, "Jean Dupont"),
        (Weekday::Fri, 14, 4, "Lucas Robert"),
        (Weekday::Sat, 9, 2, "Marie Martin"),
        (Weekday::Sat, 11, 5, "Thomas Laurent"),
    ]
    .into_iter()
    .map(|(day, hour, course_id, teacher)| ScheduleSlot {
        day,
        hour,
        course_id,
        teacher: teacher.to_string(),
    })
    .collect();

    Timetable::new(courses, slots)
}

pub fn dashboard_stats() -> Vec<DashboardStat> {
    [
        ("Total Étudiants", "1,234", "+12%", Trend::Up),
        ("Enseignants", "56", "+3%", Trend::Up),
        ("Cours Actifs", "89", "-2%", Trend::Down),
        ("Taux de Réussite", "94%", "+5%", Trend::Up),
    ]
    .into_iter()
    .map(|(label, value, change, trend)| DashboardStat {
        label: label.to_string(),
        value: value.to_string(),
        change: change.to_string(),
        trend,
    })
    .collect()
}

pub fn notifications() -> Vec<Notification> {
    [
        (NotificationKind::Student, "Nouvel étudiant inscrit", "Alice Johnson", "il y a 5 min"),
        (NotificationKind::Course, "Nouveau cours ajouté", "Machine Learning Avancé", "il y a 15 min"),
        (NotificationKind::Student, "Paiement reçu", "Bob Smith", "il y a 30 min"),
        (NotificationKind::Teacher, "Nouvel enseignant", "Marie Dupont", "il y a 1 heure"),
        (NotificationKind::Course, "Cours complété", "Design UI/UX", "il y a 2 heures"),
    ]
    .into_iter()
    .map(|(kind, title, name, time)| Notification {
        kind,
        title: title.to_string(),
        name: name.to_string(),
        time: time.to_string(),
    })
    .collect()
}

pub fn services() -> Vec<Service> {
    vec![
        Service {
            id: 1,
            title: "Collecte, traitement, analyse et valorisation des données".to_string(),
            description: "Solutions complètes pour la collecte, le traitement, l'analyse et la valorisation des données"
                .to_string(),
            icon: "database".to_string(),
            details: strings(&[
                "Collecte de données spatiales de haute qualité",
                "Traitement et nettoyage des données",
                "Analyse approfondie et interprétation",
                "Valorisation des données pour la prise de décision",
            ]),
            case_studies: strings(&[
                "Étude de l'occupation du sol pour un parc national",
                "Analyse de la qualité de l'eau dans un bassin versant",
            ]),
        },
        Service {
            id: 2,
            title: "Formations, Ateliers & Séminaires".to_string(),
            description: "Formations et ateliers pour maîtriser les outils et techniques de data spatial".to_string(),
            icon: "graduation-cap".to_string(),
            details: strings(&[
                "Formations sur les systèmes d'information géographique",
                "Ateliers pratiques sur l'analyse de données",
                "Séminaires sur les nouvelles technologies",
                "Formation continue et coaching",
            ]),
            case_studies: strings(&[
                "Formation GIS pour les agents de l'environnement",
                "Atelier sur l'utilisation des données satellitaires",
            ]),
        },
        Service {
            id: 3,
            title: "Conseil, audit & Suivi-Evaluation".to_string(),
            description: "Conseil technique et audit pour optimiser vos processus de gestion des données".to_string(),
            icon: "chart-area".to_string(),
            details: strings(&[
                "Conseil technique et stratégique",
                "Audit de vos systèmes d'information",
                "Suivi-évaluation des projets",
                "Optimisation des processus de collecte",
            ]),
            case_studies: strings(&[
                "Audit d'un système d'information géographique",
                "Suivi-évaluation d'un projet de développement rural",
            ]),
        },
        Service {
            id: 4,
            title: "Appui aux initiatives agro-commerciales".to_string(),
            description: "Solutions adaptées aux besoins des initiatives agro-commerciales".to_string(),
            icon: "cogs".to_string(),
            details: strings(&[
                "Analyse de la viabilité des exploitations agricoles",
                "Cartographie des zones de culture",
                "Optimisation des chaînes d'approvisionnement",
                "Suivi de la production et des rendements",
            ]),
            case_studies: strings(&[
                "Appui à un projet de développement agricole",
                "Analyse de la chaîne d'approvisionnement de produits agricoles",
            ]),
        },
        Service {
            id: 5,
            title: "Certification selon les normes en vigueur".to_string(),
            description: "Certification de vos données et processus selon les normes internationales".to_string(),
            icon: "graduation-cap".to_string(),
            details: strings(&[
                "Certification ISO pour les systèmes de gestion",
                "Validation des données selon les standards",
                "Conformité aux réglementations en vigueur",
                "Amélioration continue des processus",
            ]),
            case_studies: strings(&[
                "Certification ISO pour un système de gestion de données",
                "Validation des données pour un projet international",
            ]),
        },
    ]
}

pub fn job_offers() -> Vec<JobOffer> {
    vec![
        JobOffer {
            id: 1,
            title: "Ingénieur Géomaticien".to_string(),
            department: "R&D".to_string(),
            location: "Yaoundé, Caméroun".to_string(),
            contract: ContractType::Cdi,
            experience: ExperienceLevel::Confirme,
            description: "Recherche d'un ingénieur géomaticien expérimenté pour rejoindre notre équipe de recherche \
                          et développement."
                .to_string(),
            requirements: strings(&[
                "Master ou PhD en géomatique ou discipline related",
                "3+ ans d'expérience en analyse de données spatiales",
                "Maîtrise des outils SIG (ArcGIS, QGIS)",
                "Connaissances en programmation (Python, R)",
                "Anglais professionnel",
            ]),
            responsibilities: strings(&[
                "Collecte et analyse de données spatiales",
                "Développement de modèles et algorithmes",
                "Collaboration avec les équipes de développement",
                "Rédaction de rapports et publications",
                "Gestion de projets clients",
            ]),
            salary: "400,000 - 600,000 FCFA / mois".to_string(),
            posted_date: "15/02/2026".to_string(),
            deadline: "15/03/2026".to_string(),
        },
        JobOffer {
            id: 2,
            title: "Développeur Full Stack".to_string(),
            department: "Développement".to_string(),
            location: "Yaoundé, Caméroun".to_string(),
            contract: ContractType::Cdi,
            experience: ExperienceLevel::Junior,
            description: "Recherche d'un développeur full stack pour participer au développement de nos solutions \
                          web et mobiles."
                .to_string(),
            requirements: strings(&[
                "BAC+4 en informatique ou équivalent",
                "2+ ans d'expérience en développement web",
                "Maîtrise de React.js et Node.js",
                "Connaissances en bases de données (PostgreSQL, MongoDB)",
                "Anglais professionnel",
            ]),
            responsibilities: strings(&[
                "Développement d'interfaces utilisateur",
                "Backend development et API REST",
                "Tests et optimisation des performances",
                "Maintenabilité des applications",
                "Collaboration avec les équipes de design",
            ]),
            salary: "300,000 - 450,000 FCFA / mois".to_string(),
            posted_date: "10/02/2026".to_string(),
            deadline: "10/03/2026".to_string(),
        },
        JobOffer {
            id: 3,
            title: "Stage - Data Analyst".to_string(),
            department: "Analyse".to_string(),
            location: "Yaoundé, Caméroun".to_string(),
            contract: ContractType::Stage,
            experience: ExperienceLevel::Debutant,
            description: "Stage de 6 mois pour un étudiant en data science ou analyse de données.".to_string(),
            requirements: strings(&[
                "Étudiant en Master 1 ou 2 en data science",
                "Connaissances des outils d'analyse (Python, R)",
                "Bases de l'analyse spatiale",
                "Anglais professionnel",
            ]),
            responsibilities: strings(&[
                "Collecte et nettoyage de données",
                "Analyse descriptive et spatiales",
                "Visualisation de données",
                "Support aux équipes de projet",
                "Rédaction de rapports",
            ]),
            salary: "40,000 - 60,000 FCFA / mois".to_string(),
            posted_date: "05/02/2026".to_string(),
            deadline: "05/03/2026".to_string(),
        },
    ]
}

pub fn team_members() -> Vec<TeamMember> {
    [
        (
            "Dr. Jean Paul Mbah",
            "Directeur Général",
            "Ingénieur géomaticien avec plus de 10 ans d'expérience dans l'analyse de données spatiales et le \
             développement de solutions innovantes.",
            "jean.paul@dasi.com",
        ),
        (
            "Marie Nguema",
            "Cheffe de Projet",
            "Expertise dans la gestion de projets complexes de collecte et d'analyse de données géospatiales.",
            "marie.nguema@dasi.com",
        ),
        (
            "Patrick Tchouafé",
            "Ingénieur Data Scientist",
            "Spécialisé dans l'analyse de données complexes et la modélisation spatiale.",
            "patrick.tchouafe@dasi.com",
        ),
        (
            "Sophie Mboma",
            "Développeuse Full Stack",
            "Développeuse web et mobile spécialisée dans les applications de gestion des données spatiales.",
            "sophie.mboma@dasi.com",
        ),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (name, role, bio, email))| TeamMember {
        id: i as u32 + 1,
        name: name.to_string(),
        role: role.to_string(),
        bio: bio.to_string(),
        linkedin: Some("https://linkedin.com".to_string()),
        email: Some(email.to_string()),
    })
    .collect()
}

pub fn pricing_plans() -> Vec<PricingPlan> {
    vec![
        PricingPlan {
            name: "Consultation initiale".to_string(),
            description: "Gratuit".to_string(),
            features: strings(&["Analyse de vos besoins", "Discussion des objectifs", "Estimation du projet"]),
            call_to_action: "Demander une consultation".to_string(),
        },
        PricingPlan {
            name: "Solutions personnalisées".to_string(),
            description: "Sur mesure".to_string(),
            features: strings(&["Solution tailor-made", "Support dédié", "Maintenance incluse"]),
            call_to_action: "Discuter de votre projet".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PaymentStatus;

    #[test]
    fn test_fixture_sizes() {
        assert_eq!(students().len(), 12);
        assert_eq!(teachers().len(), 8);
        assert_eq!(courses().len(), 8);
        assert_eq!(student_accounts().len(), 8);
        assert_eq!(services().len(), 5);
        assert_eq!(job_offers().len(), 3);
        assert_eq!(team_members().len(), 4);
        assert_eq!(pricing_plans().len(), 2);
        assert_eq!(notifications().len(), 5);
    }

    #[test]
    fn test_student_courses_cycle() {
        let students = students();
        assert_eq!(students[0].course, "Développement Web");
        assert_eq!(students[4].course, "Développement Web");
        assert_eq!(students[11].course, "Marketing Digital");
        assert_eq!(students[2].status, StudentStatus::Graduated);
        assert_eq!(students[9].status, StudentStatus::Inactive);
    }

    #[test]
    fn test_account_statuses_follow_amounts() {
        let statuses: Vec<_> = student_accounts().iter().map(|a| a.status()).collect();
        assert_eq!(statuses[0], PaymentStatus::Partial);
        assert_eq!(statuses[2], PaymentStatus::Unpaid);
        assert_eq!(statuses[4], PaymentStatus::Paid);
    }

    #[test]
    fn test_initial_marks() {
        let marks = initial_attendance_marks();
        assert_eq!(marks.len(), 8);
        assert!(marks.contains(&(4, AttendanceStatus::Late)));
        assert!(marks.contains(&(6, AttendanceStatus::Absent)));
    }
}
