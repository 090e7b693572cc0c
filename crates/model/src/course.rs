use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Courses are a standalone catalog. Batches carry a course name as free
/// text and are not linked to this collection.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Course {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub course_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub duration_weeks: Option<u32>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub version: u64,
}

impl Course {
    pub fn new(
        course_name: String,
        description: Option<String>,
        duration_weeks: Option<u32>,
        category: Option<String>,
    ) -> Course {
        Course {
            id: ObjectId::new(),
            course_name,
            description,
            duration_weeks,
            category,
            version: 0,
        }
    }
}
