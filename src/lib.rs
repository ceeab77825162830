pub mod layout;
pub mod render;
pub mod report;
pub mod subjects;
