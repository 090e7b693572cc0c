use log::warn;
use model::attendance::Attendance;
use model::session::Session;
use std::{ops::Deref, sync::Arc};
use storage::attendance::AttendanceStore;
use storage::batch::BatchStore;
use storage::trainee::TraineeStore;
use thiserror::Error;
use tx_macro::tx;

#[derive(Clone)]
pub struct AttendanceLog {
    store: Arc<AttendanceStore>,
    trainees: Arc<TraineeStore>,
    batches: Arc<BatchStore>,
}

impl AttendanceLog {
    pub(crate) fn new(
        store: Arc<AttendanceStore>,
        trainees: Arc<TraineeStore>,
        batches: Arc<BatchStore>,
    ) -> Self {
        AttendanceLog {
            store,
            trainees,
            batches,
        }
    }

    /// Marks attendance. Both references are required up front; references
    /// that fail to resolve leave the corresponding name blank and the row is
    /// still written. An entry arriving with an existing id overwrites that
    /// row, which is how updates re-run the mark logic.
    #[tx]
    pub async fn mark(
        &self,
        session: &mut Session,
        entry: Attendance,
    ) -> Result<Attendance, MarkAttendanceError> {
        validate(&entry)?;
        let mut entry = entry;

        if let Some(trainee_id) = entry.trainee_id {
            match self.trainees.get(session, trainee_id).await? {
                Some(trainee) => entry.apply_trainee(&trainee),
                None => warn!("Marking attendance for unknown trainee {}", trainee_id),
            }
        }
        if let Some(batch_id) = entry.batch_id {
            match self.batches.get(session, batch_id).await? {
                Some(batch) => entry.apply_batch(&batch),
                None => warn!("Marking attendance for unknown batch {}", batch_id),
            }
        }

        self.store.upsert(session, &entry).await?;
        Ok(entry)
    }
}

fn validate(entry: &Attendance) -> Result<(), MarkAttendanceError> {
    if entry.trainee_id.is_none() {
        return Err(MarkAttendanceError::MissingTrainee);
    }
    if entry.batch_id.is_none() {
        return Err(MarkAttendanceError::MissingBatch);
    }
    Ok(())
}

impl Deref for AttendanceLog {
    type Target = AttendanceStore;

    fn deref(&self) -> &Self::Target {
        &self.store
    }
}

#[derive(Debug, Error)]
pub enum MarkAttendanceError {
    #[error("Trainee id is required")]
    MissingTrainee,
    #[error("Batch id is required")]
    MissingBatch,
    #[error("Common error:{0}")]
    Common(#[from] eyre::Error),
}

impl From<mongodb::error::Error> for MarkAttendanceError {
    fn from(e: mongodb::error::Error) -> Self {
        MarkAttendanceError::Common(e.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use model::attendance::AttendanceStatus;
    use mongodb::bson::oid::ObjectId;

    fn entry(trainee: Option<ObjectId>, batch: Option<ObjectId>) -> Attendance {
        Attendance::new(
            trainee,
            batch,
            NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
            AttendanceStatus::Present,
        )
    }

    #[test]
    fn test_missing_trainee_rejected() {
        let err = validate(&entry(None, Some(ObjectId::new()))).unwrap_err();
        assert!(matches!(err, MarkAttendanceError::MissingTrainee));
    }

    #[test]
    fn test_missing_batch_rejected() {
        let err = validate(&entry(Some(ObjectId::new()), None)).unwrap_err();
        assert!(matches!(err, MarkAttendanceError::MissingBatch));
    }

    #[test]
    fn test_both_refs_pass_validation() {
        assert!(validate(&entry(Some(ObjectId::new()), Some(ObjectId::new()))).is_ok());
    }
}
