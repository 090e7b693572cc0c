use bson::to_document;
use eyre::{Error, Result};
use futures_util::stream::TryStreamExt as _;
use log::info;
use model::batch::Batch;
use model::session::Session;
use mongodb::options::UpdateOptions;
use mongodb::{
    bson::{doc, oid::ObjectId},
    Collection, Database, IndexModel,
};

const COLLECTION: &str = "batches";

#[derive(Clone)]
pub struct BatchStore {
    pub(crate) batches: Collection<Batch>,
}

impl BatchStore {
    pub(crate) async fn new(db: &Database) -> Result<Self> {
        let batches = db.collection(COLLECTION);
        batches
            .create_index(IndexModel::builder().keys(doc! { "location": 1 }).build())
            .await?;
        batches
            .create_index(IndexModel::builder().keys(doc! { "trainer_id": 1 }).build())
            .await?;
        Ok(BatchStore { batches })
    }

    pub async fn get(&self, session: &mut Session, id: ObjectId) -> Result<Option<Batch>> {
        Ok(self
            .batches
            .find_one(doc! { "_id": id })
            .session(&mut *session)
            .await?)
    }

    pub async fn get_all(&self, session: &mut Session) -> Result<Vec<Batch>> {
        let mut cursor = self.batches.find(doc! {}).session(&mut *session).await?;
        Ok(cursor.stream(&mut *session).try_collect().await?)
    }

    pub async fn find_by_location(
        &self,
        session: &mut Session,
        location: &str,
    ) -> Result<Vec<Batch>> {
        let mut cursor = self
            .batches
            .find(doc! { "location": location })
            .session(&mut *session)
            .await?;
        Ok(cursor.stream(&mut *session).try_collect().await?)
    }

    pub async fn find_by_trainer(
        &self,
        session: &mut Session,
        trainer_id: ObjectId,
    ) -> Result<Vec<Batch>> {
        let mut cursor = self
            .batches
            .find(doc! { "trainer_id": trainer_id })
            .session(&mut *session)
            .await?;
        Ok(cursor.stream(&mut *session).try_collect().await?)
    }

    pub async fn insert(&self, session: &mut Session, batch: &Batch) -> Result<()> {
        info!("Inserting batch: {:?}", batch);
        let result = self
            .batches
            .update_one(
                doc! { "_id": batch.id },
                doc! { "$setOnInsert": to_document(batch)? },
            )
            .session(&mut *session)
            .with_options(UpdateOptions::builder().upsert(true).build())
            .await?;
        if result.upserted_id.is_none() {
            return Err(Error::msg("Batch already exists"));
        }
        Ok(())
    }

    pub async fn update(&self, session: &mut Session, batch: &Batch) -> Result<()> {
        info!("Updating batch: {:?}", batch);
        let result = self
            .batches
            .replace_one(doc! { "_id": batch.id }, batch)
            .session(&mut *session)
            .await?;
        if result.matched_count == 0 {
            return Err(Error::msg("Batch not found"));
        }
        Ok(())
    }

    /// Atomic counter bump. The enrolled count only ever grows; there is no
    /// withdrawal operation to decrement it.
    pub async fn inc_enrolled(&self, session: &mut Session, id: ObjectId) -> Result<()> {
        let result = self
            .batches
            .update_one(
                doc! { "_id": id },
                doc! { "$inc": { "enrolled_count": 1, "version": 1 } },
            )
            .session(&mut *session)
            .await?;
        if result.matched_count == 0 {
            return Err(Error::msg("Batch not found"));
        }
        Ok(())
    }

    /// Drops the trainer reference and its denormalized name from every batch
    /// pointing at the trainer.
    pub async fn clear_trainer(&self, session: &mut Session, trainer_id: ObjectId) -> Result<()> {
        self.batches
            .update_many(
                doc! { "trainer_id": trainer_id },
                doc! { "$set": { "trainer_id": null, "trainer_name": null }, "$inc": { "version": 1 } },
            )
            .session(&mut *session)
            .await?;
        Ok(())
    }

    pub async fn delete(&self, session: &mut Session, id: ObjectId) -> Result<()> {
        info!("Deleting batch: {}", id);
        self.batches
            .delete_one(doc! { "_id": id })
            .session(&mut *session)
            .await?;
        Ok(())
    }
}
