use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::batch::Batch;

/// `batch_name` and `location` mirror the referenced batch as of the last
/// save. They are plain copies, not foreign keys: renaming the batch later
/// does not touch trainees already enrolled in it.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Trainee {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    pub batch_id: Option<ObjectId>,
    #[serde(default)]
    pub batch_name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub version: u64,
}

impl Trainee {
    pub fn new(
        name: String,
        email: Option<String>,
        phone: Option<String>,
        batch_id: Option<ObjectId>,
    ) -> Trainee {
        Trainee {
            id: ObjectId::new(),
            name,
            email,
            phone,
            batch_id,
            batch_name: None,
            location: None,
            version: 0,
        }
    }

    /// Copies the batch's display fields onto the trainee. The batch stores
    /// its course name, which is what trainees show as their batch name.
    pub fn apply_batch(&mut self, batch: &Batch) {
        self.batch_name = Some(batch.course_name.clone());
        self.location = Some(batch.location.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_batch_copies_display_fields() {
        let batch = Batch::new(
            "Java Basics".to_string(),
            "Pune".to_string(),
            None,
            None,
            None,
        );
        let mut trainee = Trainee::new("Ravi".to_string(), None, None, Some(batch.id));
        trainee.apply_batch(&batch);
        assert_eq!(trainee.batch_name.as_deref(), Some("Java Basics"));
        assert_eq!(trainee.location.as_deref(), Some("Pune"));
    }

    #[test]
    fn test_new_leaves_denormalized_fields_unset() {
        let trainee = Trainee::new("Ravi".to_string(), None, None, None);
        assert!(trainee.batch_name.is_none());
        assert!(trainee.location.is_none());
    }
}
