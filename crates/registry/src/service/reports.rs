use eyre::Result;
use model::batch::Batch;
use model::reports::{AttendanceTrend, BatchEnrollment, TrainerOccupancy};
use model::session::Session;
use model::trainer::Trainer;
use mongodb::bson::oid::ObjectId;
use std::sync::Arc;
use storage::batch::BatchStore;
use storage::trainer::TrainerStore;

// Day counts are fixed placeholders until real scheduling data exists.
const AVAILABLE_DAYS: u32 = 20;
const OCCUPIED_DAYS_ASSIGNED: u32 = 15;

#[derive(Clone)]
pub struct Reports {
    trainers: Arc<TrainerStore>,
    batches: Arc<BatchStore>,
}

impl Reports {
    pub(crate) fn new(trainers: Arc<TrainerStore>, batches: Arc<BatchStore>) -> Self {
        Reports { trainers, batches }
    }

    pub async fn trainer_occupancy(&self, session: &mut Session) -> Result<Vec<TrainerOccupancy>> {
        let trainers = self.trainers.get_all(session).await?;
        Ok(trainers.iter().map(occupancy_row).collect())
    }

    pub async fn batch_enrollments(&self, session: &mut Session) -> Result<Vec<BatchEnrollment>> {
        let batches = self.batches.get_all(session).await?;
        Ok(batches.iter().map(enrollment_row).collect())
    }

    pub fn attendance_trends(&self) -> Vec<AttendanceTrend> {
        vec![
            AttendanceTrend::new("Session 1", 92),
            AttendanceTrend::new("Session 2", 88),
            AttendanceTrend::new("Session 3", 85),
            AttendanceTrend::new("Session 4", 90),
            AttendanceTrend::new("Session 5", 87),
        ]
    }

    pub fn attendance_trends_for(&self, _batch_id: ObjectId) -> Vec<AttendanceTrend> {
        vec![
            AttendanceTrend::new("Session 1", 95),
            AttendanceTrend::new("Session 2", 90),
            AttendanceTrend::new("Session 3", 88),
        ]
    }
}

fn occupancy_row(trainer: &Trainer) -> TrainerOccupancy {
    TrainerOccupancy {
        trainer_name: trainer.name.clone(),
        available_days: AVAILABLE_DAYS,
        occupied_days: if trainer.assigned {
            OCCUPIED_DAYS_ASSIGNED
        } else {
            0
        },
    }
}

fn enrollment_row(batch: &Batch) -> BatchEnrollment {
    BatchEnrollment {
        batch_name: format!("{} - {}", batch.course_name, batch.location),
        enrolled_count: batch.enrolled_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_occupancy_tracks_assignment() {
        let mut trainer = Trainer::new(
            "Asha".to_string(),
            "Pune".to_string(),
            None,
            "10:00-12:00".to_string(),
        );
        let row = occupancy_row(&trainer);
        assert_eq!(row.available_days, 20);
        assert_eq!(row.occupied_days, 0);

        trainer.assign_to(ObjectId::new());
        let row = occupancy_row(&trainer);
        assert_eq!(row.occupied_days, 15);
    }

    #[test]
    fn test_enrollment_row_label() {
        let mut batch = Batch::new(
            "Java Basics".to_string(),
            "Pune".to_string(),
            None,
            None,
            None,
        );
        batch.enrolled_count = 7;
        let row = enrollment_row(&batch);
        assert_eq!(row.batch_name, "Java Basics - Pune");
        assert_eq!(row.enrolled_count, 7);
    }
}
