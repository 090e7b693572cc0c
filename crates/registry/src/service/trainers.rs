use eyre::Result;
use model::session::Session;
use model::trainer::Trainer;
use mongodb::bson::oid::ObjectId;
use std::{ops::Deref, sync::Arc};
use storage::batch::BatchStore;
use storage::trainer::TrainerStore;
use tx_macro::tx;

#[derive(Clone)]
pub struct Trainers {
    store: Arc<TrainerStore>,
    batches: Arc<BatchStore>,
}

impl Trainers {
    pub(crate) fn new(store: Arc<TrainerStore>, batches: Arc<BatchStore>) -> Self {
        Trainers { store, batches }
    }

    /// Plain upsert. No cross-entity effects: the assignment flag is only
    /// flipped by the batch paths.
    pub async fn add_availability(
        &self,
        session: &mut Session,
        trainer: Trainer,
    ) -> Result<Trainer> {
        self.store.upsert(session, &trainer).await?;
        Ok(trainer)
    }

    pub async fn update(&self, session: &mut Session, mut trainer: Trainer) -> Result<Trainer> {
        trainer.version += 1;
        self.store.update(session, &trainer).await?;
        Ok(trainer)
    }

    /// Deleting a trainer clears the reference and denormalized name from
    /// any batch still pointing at it.
    #[tx]
    pub async fn delete(&self, session: &mut Session, id: ObjectId) -> Result<()> {
        self.batches.clear_trainer(session, id).await?;
        self.store.delete(session, id).await?;
        Ok(())
    }
}

impl Deref for Trainers {
    type Target = TrainerStore;

    fn deref(&self) -> &Self::Target {
        &self.store
    }
}
