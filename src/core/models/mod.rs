//! Data models for `cgpa-tracker`

pub mod course;
pub mod semester;
pub mod student;

pub use course::{CourseRecord, CourseType, CreditValue};
pub use semester::SemesterResult;
pub use student::StudentRecord;
