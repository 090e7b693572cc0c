use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TrainerOccupancy {
    pub trainer_name: String,
    pub available_days: u32,
    pub occupied_days: u32,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct BatchEnrollment {
    pub batch_name: String,
    pub enrolled_count: u32,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AttendanceTrend {
    pub session: String,
    pub attendance_rate: u32,
}

impl AttendanceTrend {
    pub fn new(session: impl Into<String>, attendance_rate: u32) -> AttendanceTrend {
        AttendanceTrend {
            session: session.into(),
            attendance_rate,
        }
    }
}
