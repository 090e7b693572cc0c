use eyre::Result;
use log::warn;
use model::batch::Batch;
use model::session::Session;
use model::trainee::Trainee;
use mongodb::bson::oid::ObjectId;
use std::{ops::Deref, sync::Arc};
use storage::batch::BatchStore;
use storage::trainee::TraineeStore;
use storage::trainer::TrainerStore;
use tx_macro::tx;

#[derive(Clone)]
pub struct Batches {
    store: Arc<BatchStore>,
    trainers: Arc<TrainerStore>,
    trainees: Arc<TraineeStore>,
}

impl Batches {
    pub(crate) fn new(
        store: Arc<BatchStore>,
        trainers: Arc<TrainerStore>,
        trainees: Arc<TraineeStore>,
    ) -> Self {
        Batches {
            store,
            trainers,
            trainees,
        }
    }

    /// Creating a batch with a trainer reference copies the trainer's name
    /// onto the batch and marks the trainer assigned to it. The batch id is
    /// allocated at construction, so the trainer's back-reference is written
    /// with the real id before the batch row exists.
    #[tx]
    pub async fn create(&self, session: &mut Session, batch: Batch) -> Result<Batch> {
        let mut batch = batch;
        if let Some(trainer_id) = batch.trainer_id {
            if let Some(trainer) = self.trainers.get(session, trainer_id).await? {
                batch.set_trainer(&trainer);
                self.trainers
                    .set_assignment(session, trainer.id, batch.id)
                    .await?;
            } else {
                warn!("Creating batch with unknown trainer {}", trainer_id);
            }
        }
        self.store.insert(session, &batch).await?;
        Ok(batch)
    }

    /// Update refreshes the denormalized trainer name only. A trainer the
    /// batch used to reference keeps its assigned flag; only delete performs
    /// cleanup.
    #[tx]
    pub async fn update(&self, session: &mut Session, batch: Batch) -> Result<Batch> {
        let mut batch = batch;
        if let Some(trainer_id) = batch.trainer_id {
            if let Some(trainer) = self.trainers.get(session, trainer_id).await? {
                batch.trainer_name = Some(trainer.name.clone());
            } else {
                warn!("Updating batch with unknown trainer {}", trainer_id);
            }
        }
        batch.version += 1;
        self.store.update(session, &batch).await?;
        Ok(batch)
    }

    /// Deleting a batch un-assigns its trainer in the same transaction.
    /// Trainees and attendance rows keep their stale copies of the batch
    /// name; those are display fields, not references to repair.
    #[tx]
    pub async fn delete(&self, session: &mut Session, id: ObjectId) -> Result<()> {
        if let Some(batch) = self.store.get(session, id).await? {
            if let Some(trainer_id) = batch.trainer_id {
                self.trainers.clear_assignment(session, trainer_id).await?;
            }
        }
        self.store.delete(session, id).await?;
        Ok(())
    }

    pub async fn trainees_of(
        &self,
        session: &mut Session,
        batch_id: ObjectId,
    ) -> Result<Vec<Trainee>> {
        self.trainees.find_by_batch(session, batch_id).await
    }
}

impl Deref for Batches {
    type Target = BatchStore;

    fn deref(&self) -> &Self::Target {
        &self.store
    }
}
