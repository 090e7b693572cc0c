pub mod attendance;
pub mod batch;
pub mod course;
pub mod reports;
pub mod session;
pub mod trainee;
pub mod trainer;
