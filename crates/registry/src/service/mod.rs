pub mod attendance;
pub mod batches;
pub mod courses;
pub mod reports;
pub mod trainees;
pub mod trainers;
