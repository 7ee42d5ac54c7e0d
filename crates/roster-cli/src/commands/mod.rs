pub mod add_course;
pub mod add_mark;
pub mod add_student;
pub mod exit;
pub mod sample_data;
pub mod show_marks;
