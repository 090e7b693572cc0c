use chrono::NaiveDate;
use eyre::Result;
use futures_util::stream::TryStreamExt as _;
use log::info;
use model::attendance::Attendance;
use model::session::Session;
use mongodb::options::ReplaceOptions;
use mongodb::{
    bson::{doc, oid::ObjectId},
    Collection, Database, IndexModel,
};

const COLLECTION: &str = "attendance";

#[derive(Clone)]
pub struct AttendanceStore {
    pub(crate) attendance: Collection<Attendance>,
}

impl AttendanceStore {
    pub(crate) async fn new(db: &Database) -> Result<Self> {
        let attendance = db.collection(COLLECTION);
        attendance
            .create_index(IndexModel::builder().keys(doc! { "trainee_id": 1 }).build())
            .await?;
        attendance
            .create_index(IndexModel::builder().keys(doc! { "batch_id": 1 }).build())
            .await?;
        attendance
            .create_index(IndexModel::builder().keys(doc! { "date": 1 }).build())
            .await?;
        Ok(AttendanceStore { attendance })
    }

    pub async fn get(&self, session: &mut Session, id: ObjectId) -> Result<Option<Attendance>> {
        Ok(self
            .attendance
            .find_one(doc! { "_id": id })
            .session(&mut *session)
            .await?)
    }

    pub async fn get_all(&self, session: &mut Session) -> Result<Vec<Attendance>> {
        let mut cursor = self.attendance.find(doc! {}).session(&mut *session).await?;
        Ok(cursor.stream(&mut *session).try_collect().await?)
    }

    pub async fn find_by_trainee(
        &self,
        session: &mut Session,
        trainee_id: ObjectId,
    ) -> Result<Vec<Attendance>> {
        let mut cursor = self
            .attendance
            .find(doc! { "trainee_id": trainee_id })
            .session(&mut *session)
            .await?;
        Ok(cursor.stream(&mut *session).try_collect().await?)
    }

    pub async fn find_by_batch(
        &self,
        session: &mut Session,
        batch_id: ObjectId,
    ) -> Result<Vec<Attendance>> {
        let mut cursor = self
            .attendance
            .find(doc! { "batch_id": batch_id })
            .session(&mut *session)
            .await?;
        Ok(cursor.stream(&mut *session).try_collect().await?)
    }

    /// Exact-date equality. Dates are stored as ISO strings, so the filter
    /// compares the same rendering.
    pub async fn find_by_date(
        &self,
        session: &mut Session,
        date: NaiveDate,
    ) -> Result<Vec<Attendance>> {
        let mut cursor = self
            .attendance
            .find(doc! { "date": date.to_string() })
            .session(&mut *session)
            .await?;
        Ok(cursor.stream(&mut *session).try_collect().await?)
    }

    /// Insert-or-overwrite by id: marking with a supplied id replaces the
    /// existing row, which is how updates re-run the mark logic.
    pub async fn upsert(&self, session: &mut Session, entry: &Attendance) -> Result<()> {
        info!("Saving attendance: {:?}", entry);
        self.attendance
            .replace_one(doc! { "_id": entry.id }, entry)
            .session(&mut *session)
            .with_options(ReplaceOptions::builder().upsert(true).build())
            .await?;
        Ok(())
    }

    pub async fn delete(&self, session: &mut Session, id: ObjectId) -> Result<()> {
        info!("Deleting attendance: {}", id);
        self.attendance
            .delete_one(doc! { "_id": id })
            .session(&mut *session)
            .await?;
        Ok(())
    }
}
