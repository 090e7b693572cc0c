use eyre::{Error, Result};
use futures_util::stream::TryStreamExt as _;
use log::info;
use model::session::Session;
use model::trainer::Trainer;
use mongodb::options::ReplaceOptions;
use mongodb::{
    bson::{doc, oid::ObjectId},
    Collection, Database, IndexModel,
};

const COLLECTION: &str = "trainers";

#[derive(Clone)]
pub struct TrainerStore {
    pub(crate) trainers: Collection<Trainer>,
}

impl TrainerStore {
    pub(crate) async fn new(db: &Database) -> Result<Self> {
        let trainers = db.collection(COLLECTION);
        trainers
            .create_index(IndexModel::builder().keys(doc! { "location": 1 }).build())
            .await?;
        trainers
            .create_index(IndexModel::builder().keys(doc! { "assigned": 1 }).build())
            .await?;
        Ok(TrainerStore { trainers })
    }

    pub async fn get(&self, session: &mut Session, id: ObjectId) -> Result<Option<Trainer>> {
        Ok(self
            .trainers
            .find_one(doc! { "_id": id })
            .session(&mut *session)
            .await?)
    }

    pub async fn get_all(&self, session: &mut Session) -> Result<Vec<Trainer>> {
        let mut cursor = self.trainers.find(doc! {}).session(&mut *session).await?;
        Ok(cursor.stream(&mut *session).try_collect().await?)
    }

    pub async fn find_available(&self, session: &mut Session) -> Result<Vec<Trainer>> {
        let mut cursor = self
            .trainers
            .find(doc! { "assigned": false })
            .session(&mut *session)
            .await?;
        Ok(cursor.stream(&mut *session).try_collect().await?)
    }

    pub async fn find_by_location(
        &self,
        session: &mut Session,
        location: &str,
    ) -> Result<Vec<Trainer>> {
        let mut cursor = self
            .trainers
            .find(doc! { "location": location })
            .session(&mut *session)
            .await?;
        Ok(cursor.stream(&mut *session).try_collect().await?)
    }

    /// Insert-or-replace by id. Availability rows come in with a fresh id on
    /// first save and keep it on later saves.
    pub async fn upsert(&self, session: &mut Session, trainer: &Trainer) -> Result<()> {
        info!("Upserting trainer: {:?}", trainer);
        self.trainers
            .replace_one(doc! { "_id": trainer.id }, trainer)
            .session(&mut *session)
            .with_options(ReplaceOptions::builder().upsert(true).build())
            .await?;
        Ok(())
    }

    pub async fn update(&self, session: &mut Session, trainer: &Trainer) -> Result<()> {
        info!("Updating trainer: {:?}", trainer);
        let result = self
            .trainers
            .replace_one(doc! { "_id": trainer.id }, trainer)
            .session(&mut *session)
            .await?;
        if result.matched_count == 0 {
            return Err(Error::msg("Trainer not found"));
        }
        Ok(())
    }

    pub async fn set_assignment(
        &self,
        session: &mut Session,
        id: ObjectId,
        batch_id: ObjectId,
    ) -> Result<()> {
        info!("Assigning trainer {} to batch {}", id, batch_id);
        let result = self
            .trainers
            .update_one(
                doc! { "_id": id },
                doc! { "$set": { "assigned": true, "batch_id": batch_id }, "$inc": { "version": 1 } },
            )
            .session(&mut *session)
            .await?;
        if result.matched_count == 0 {
            return Err(Error::msg("Trainer not found"));
        }
        Ok(())
    }

    pub async fn clear_assignment(&self, session: &mut Session, id: ObjectId) -> Result<()> {
        info!("Unassigning trainer {}", id);
        let result = self
            .trainers
            .update_one(
                doc! { "_id": id },
                doc! { "$set": { "assigned": false, "batch_id": null }, "$inc": { "version": 1 } },
            )
            .session(&mut *session)
            .await?;
        if result.matched_count == 0 {
            return Err(Error::msg("Trainer not found"));
        }
        Ok(())
    }

    pub async fn delete(&self, session: &mut Session, id: ObjectId) -> Result<()> {
        info!("Deleting trainer: {}", id);
        self.trainers
            .delete_one(doc! { "_id": id })
            .session(&mut *session)
            .await?;
        Ok(())
    }
}
