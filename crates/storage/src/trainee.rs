use bson::to_document;
use eyre::{Error, Result};
use futures_util::stream::TryStreamExt as _;
use log::info;
use model::session::Session;
use model::trainee::Trainee;
use mongodb::options::UpdateOptions;
use mongodb::{
    bson::{doc, oid::ObjectId},
    Collection, Database, IndexModel,
};

const COLLECTION: &str = "trainees";

#[derive(Clone)]
pub struct TraineeStore {
    pub(crate) trainees: Collection<Trainee>,
}

impl TraineeStore {
    pub(crate) async fn new(db: &Database) -> Result<Self> {
        let trainees = db.collection(COLLECTION);
        trainees
            .create_index(IndexModel::builder().keys(doc! { "batch_id": 1 }).build())
            .await?;
        Ok(TraineeStore { trainees })
    }

    pub async fn get(&self, session: &mut Session, id: ObjectId) -> Result<Option<Trainee>> {
        Ok(self
            .trainees
            .find_one(doc! { "_id": id })
            .session(&mut *session)
            .await?)
    }

    pub async fn get_all(&self, session: &mut Session) -> Result<Vec<Trainee>> {
        let mut cursor = self.trainees.find(doc! {}).session(&mut *session).await?;
        Ok(cursor.stream(&mut *session).try_collect().await?)
    }

    pub async fn find_by_batch(
        &self,
        session: &mut Session,
        batch_id: ObjectId,
    ) -> Result<Vec<Trainee>> {
        let mut cursor = self
            .trainees
            .find(doc! { "batch_id": batch_id })
            .session(&mut *session)
            .await?;
        Ok(cursor.stream(&mut *session).try_collect().await?)
    }

    pub async fn insert(&self, session: &mut Session, trainee: &Trainee) -> Result<()> {
        info!("Inserting trainee: {:?}", trainee);
        let result = self
            .trainees
            .update_one(
                doc! { "_id": trainee.id },
                doc! { "$setOnInsert": to_document(trainee)? },
            )
            .session(&mut *session)
            .with_options(UpdateOptions::builder().upsert(true).build())
            .await?;
        if result.upserted_id.is_none() {
            return Err(Error::msg("Trainee already exists"));
        }
        Ok(())
    }

    pub async fn update(&self, session: &mut Session, trainee: &Trainee) -> Result<()> {
        info!("Updating trainee: {:?}", trainee);
        let result = self
            .trainees
            .replace_one(doc! { "_id": trainee.id }, trainee)
            .session(&mut *session)
            .await?;
        if result.matched_count == 0 {
            return Err(Error::msg("Trainee not found"));
        }
        Ok(())
    }

    pub async fn delete(&self, session: &mut Session, id: ObjectId) -> Result<()> {
        info!("Deleting trainee: {}", id);
        self.trainees
            .delete_one(doc! { "_id": id })
            .session(&mut *session)
            .await?;
        Ok(())
    }
}
