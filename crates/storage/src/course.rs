use bson::to_document;
use eyre::{Error, Result};
use futures_util::stream::TryStreamExt as _;
use log::info;
use model::course::Course;
use model::session::Session;
use mongodb::options::{IndexOptions, UpdateOptions};
use mongodb::{
    bson::{doc, oid::ObjectId},
    Collection, Database, IndexModel,
};

const COLLECTION: &str = "courses";

#[derive(Clone)]
pub struct CourseStore {
    pub(crate) courses: Collection<Course>,
}

impl CourseStore {
    pub(crate) async fn new(db: &Database) -> Result<Self> {
        let courses = db.collection(COLLECTION);
        courses
            .create_index(
                IndexModel::builder()
                    .keys(doc! { "course_name": 1 })
                    .options(IndexOptions::builder().unique(true).build())
                    .build(),
            )
            .await?;
        Ok(CourseStore { courses })
    }

    pub async fn get(&self, session: &mut Session, id: ObjectId) -> Result<Option<Course>> {
        Ok(self
            .courses
            .find_one(doc! { "_id": id })
            .session(&mut *session)
            .await?)
    }

    pub async fn get_by_name(&self, session: &mut Session, name: &str) -> Result<Option<Course>> {
        Ok(self
            .courses
            .find_one(doc! { "course_name": name })
            .session(&mut *session)
            .await?)
    }

    pub async fn get_all(&self, session: &mut Session) -> Result<Vec<Course>> {
        let mut cursor = self.courses.find(doc! {}).session(&mut *session).await?;
        Ok(cursor.stream(&mut *session).try_collect().await?)
    }

    pub async fn find_by_category(
        &self,
        session: &mut Session,
        category: &str,
    ) -> Result<Vec<Course>> {
        let mut cursor = self
            .courses
            .find(doc! { "category": category })
            .session(&mut *session)
            .await?;
        Ok(cursor.stream(&mut *session).try_collect().await?)
    }

    /// Keyed on the unique course name so a concurrent duplicate create
    /// resolves to exactly one row.
    pub async fn insert(&self, session: &mut Session, course: &Course) -> Result<()> {
        info!("Inserting course: {:?}", course);
        let result = self
            .courses
            .update_one(
                doc! { "course_name": course.course_name.clone() },
                doc! { "$setOnInsert": to_document(course)? },
            )
            .session(&mut *session)
            .with_options(UpdateOptions::builder().upsert(true).build())
            .await?;
        if result.upserted_id.is_none() {
            return Err(Error::msg("Course already exists"));
        }
        Ok(())
    }

    pub async fn update(&self, session: &mut Session, course: &Course) -> Result<()> {
        info!("Updating course: {:?}", course);
        let result = self
            .courses
            .replace_one(doc! { "_id": course.id }, course)
            .session(&mut *session)
            .await?;
        if result.matched_count == 0 {
            return Err(Error::msg("Course not found"));
        }
        Ok(())
    }

    pub async fn delete(&self, session: &mut Session, id: ObjectId) -> Result<()> {
        info!("Deleting course: {}", id);
        self.courses
            .delete_one(doc! { "_id": id })
            .session(&mut *session)
            .await?;
        Ok(())
    }
}
