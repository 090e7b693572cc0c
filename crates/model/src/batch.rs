use chrono::NaiveDate;
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::trainer::Trainer;

pub const DEFAULT_CAPACITY: u32 = 30;
pub const DEFAULT_STATUS: &str = "Active";

/// A scheduled offering of a course at a location.
///
/// `trainer_name` is a copy of the trainer's name taken when the batch was
/// last saved. It is not kept in sync with later trainer renames.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Batch {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub course_name: String,
    pub location: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub trainer_id: Option<ObjectId>,
    #[serde(default)]
    pub trainer_name: Option<String>,
    pub max_capacity: u32,
    #[serde(default)]
    pub enrolled_count: u32,
    pub status: String,
    #[serde(default)]
    pub version: u64,
}

impl Batch {
    pub fn new(
        course_name: String,
        location: String,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
        trainer_id: Option<ObjectId>,
    ) -> Batch {
        Batch {
            id: ObjectId::new(),
            course_name,
            location,
            start_date,
            end_date,
            trainer_id,
            trainer_name: None,
            max_capacity: DEFAULT_CAPACITY,
            enrolled_count: 0,
            status: DEFAULT_STATUS.to_string(),
            version: 0,
        }
    }

    pub fn set_trainer(&mut self, trainer: &Trainer) {
        self.trainer_id = Some(trainer.id);
        self.trainer_name = Some(trainer.name.clone());
    }

    pub fn clear_trainer(&mut self) {
        self.trainer_id = None;
        self.trainer_name = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let batch = Batch::new(
            "Java Basics".to_string(),
            "Pune".to_string(),
            None,
            None,
            None,
        );
        assert_eq!(batch.max_capacity, 30);
        assert_eq!(batch.enrolled_count, 0);
        assert_eq!(batch.status, "Active");
        assert!(batch.trainer_name.is_none());
    }

    #[test]
    fn test_set_trainer_copies_name() {
        let trainer = Trainer::new(
            "Asha".to_string(),
            "Pune".to_string(),
            None,
            "10:00-12:00".to_string(),
        );
        let mut batch = Batch::new(
            "Java Basics".to_string(),
            "Pune".to_string(),
            None,
            None,
            Some(trainer.id),
        );
        batch.set_trainer(&trainer);
        assert_eq!(batch.trainer_id, Some(trainer.id));
        assert_eq!(batch.trainer_name.as_deref(), Some("Asha"));
    }
}
