use eyre::{bail, Result};
use model::course::Course;
use model::session::Session;
use std::{ops::Deref, sync::Arc};
use storage::course::CourseStore;
use tx_macro::tx;

#[derive(Clone)]
pub struct Courses {
    store: Arc<CourseStore>,
}

impl Courses {
    pub(crate) fn new(store: Arc<CourseStore>) -> Self {
        Courses { store }
    }

    #[tx]
    pub async fn create(&self, session: &mut Session, course: Course) -> Result<Course> {
        if course.course_name.trim().is_empty() {
            bail!("Course name is required");
        }
        let existing = self.get_by_name(session, &course.course_name).await?;
        if existing.is_some() {
            bail!("Course with this name already exists");
        }
        self.store.insert(session, &course).await?;
        Ok(course)
    }

    pub async fn update(&self, session: &mut Session, mut course: Course) -> Result<Course> {
        course.version += 1;
        self.store.update(session, &course).await?;
        Ok(course)
    }
}

impl Deref for Courses {
    type Target = CourseStore;

    fn deref(&self) -> &Self::Target {
        &self.store
    }
}
