use chrono::NaiveDate;
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// `assigned` is flipped by the batch-creation path. A trainer updated by
/// hand can carry `assigned == true` without a `batch_id`; only the batch
/// paths keep the two in step.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Trainer {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub location: String,
    pub available_date: Option<NaiveDate>,
    pub time_slot: String,
    #[serde(default)]
    pub assigned: bool,
    pub batch_id: Option<ObjectId>,
    #[serde(default)]
    pub version: u64,
}

impl Trainer {
    pub fn new(
        name: String,
        location: String,
        available_date: Option<NaiveDate>,
        time_slot: String,
    ) -> Trainer {
        Trainer {
            id: ObjectId::new(),
            name,
            location,
            available_date,
            time_slot,
            assigned: false,
            batch_id: None,
            version: 0,
        }
    }

    pub fn assign_to(&mut self, batch_id: ObjectId) {
        self.assigned = true;
        self.batch_id = Some(batch_id);
    }

    pub fn unassign(&mut self) {
        self.assigned = false;
        self.batch_id = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assignment_round() {
        let mut trainer = Trainer::new(
            "Asha".to_string(),
            "Pune".to_string(),
            None,
            "10:00-12:00".to_string(),
        );
        assert!(!trainer.assigned);

        let batch_id = ObjectId::new();
        trainer.assign_to(batch_id);
        assert!(trainer.assigned);
        assert_eq!(trainer.batch_id, Some(batch_id));

        trainer.unassign();
        assert!(!trainer.assigned);
        assert!(trainer.batch_id.is_none());
    }
}
