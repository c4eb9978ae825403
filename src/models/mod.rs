//! Data models for the school dashboard and the public site.

pub mod attendance;
pub mod course;
pub mod dashboard;
pub mod site;
pub mod staff;
pub mod student;
pub mod teacher;
pub mod tuition;

pub use attendance::{AttendanceRecord, AttendanceStatus, DailyAttendance, StudentAttendance};
pub use course::{Course, CourseStatus, CreateCourse, UpdateCourse};
pub use dashboard::{DashboardStat, Notification, NotificationKind, Trend};
pub use site::{ContractType, ExperienceLevel, JobOffer, PricingPlan, Service, TeamMember};
pub use staff::{CreateStaffMember, StaffMember, StaffStatus};
pub use student::{CreateStudent, Student, StudentStatus, UpdateStudent};
pub use teacher::{CreateTeacher, Teacher, TeacherStatus, UpdateTeacher};
pub use tuition::{Payment, PaymentData, PaymentMethod, PaymentStatus, StudentAccount};
