use eyre::Result;
use log::warn;
use model::session::Session;
use model::trainee::Trainee;
use std::{ops::Deref, sync::Arc};
use storage::batch::BatchStore;
use storage::trainee::TraineeStore;
use tx_macro::tx;

#[derive(Clone)]
pub struct Trainees {
    store: Arc<TraineeStore>,
    batches: Arc<BatchStore>,
}

impl Trainees {
    pub(crate) fn new(store: Arc<TraineeStore>, batches: Arc<BatchStore>) -> Self {
        Trainees { store, batches }
    }

    /// Enroll is the only path that bumps the batch's enrolled count. A batch
    /// id that resolves to nothing is not an error: the trainee is saved with
    /// its denormalized fields unset.
    #[tx]
    pub async fn enroll(&self, session: &mut Session, trainee: Trainee) -> Result<Trainee> {
        let mut trainee = trainee;
        if let Some(batch_id) = trainee.batch_id {
            if let Some(batch) = self.batches.get(session, batch_id).await? {
                trainee.apply_batch(&batch);
                self.batches.inc_enrolled(session, batch.id).await?;
            } else {
                warn!("Enrolling trainee into unknown batch {}", batch_id);
            }
        }
        self.store.insert(session, &trainee).await?;
        Ok(trainee)
    }

    /// Same denormalization as enroll, but the enrolled count is left alone,
    /// so repeated updates never double-count. Moving a trainee between
    /// batches does not touch either batch's count.
    #[tx]
    pub async fn update(&self, session: &mut Session, trainee: Trainee) -> Result<Trainee> {
        let mut trainee = trainee;
        if let Some(batch_id) = trainee.batch_id {
            if let Some(batch) = self.batches.get(session, batch_id).await? {
                trainee.apply_batch(&batch);
            } else {
                warn!("Updating trainee with unknown batch {}", batch_id);
            }
        }
        trainee.version += 1;
        self.store.update(session, &trainee).await?;
        Ok(trainee)
    }
}

impl Deref for Trainees {
    type Target = TraineeStore;

    fn deref(&self) -> &Self::Target {
        &self.store
    }
}
