use chrono::NaiveDate;
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::{batch::Batch, trainee::Trainee};

/// One attendance row per mark. Nothing prevents several rows for the same
/// trainee, batch and date.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Attendance {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub trainee_id: Option<ObjectId>,
    #[serde(default)]
    pub trainee_name: Option<String>,
    pub batch_id: Option<ObjectId>,
    #[serde(default)]
    pub batch_name: Option<String>,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    #[serde(default)]
    pub version: u64,
}

impl Attendance {
    pub fn new(
        trainee_id: Option<ObjectId>,
        batch_id: Option<ObjectId>,
        date: NaiveDate,
        status: AttendanceStatus,
    ) -> Attendance {
        Attendance {
            id: ObjectId::new(),
            trainee_id,
            trainee_name: None,
            batch_id,
            batch_name: None,
            date,
            status,
            version: 0,
        }
    }

    pub fn apply_trainee(&mut self, trainee: &Trainee) {
        self.trainee_name = Some(trainee.name.clone());
    }

    pub fn apply_batch(&mut self, batch: &Batch) {
        self.batch_name = Some(batch.course_name.clone());
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum AttendanceStatus {
    Present,
    Absent,
    Late,
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{oid::ObjectId, to_document};

    #[test]
    fn test_status_wire_spelling() {
        assert_eq!(
            serde_json::to_string(&AttendanceStatus::Present).unwrap(),
            "\"PRESENT\""
        );
        assert_eq!(
            serde_json::from_str::<AttendanceStatus>("\"LATE\"").unwrap(),
            AttendanceStatus::Late
        );
        assert!(serde_json::from_str::<AttendanceStatus>("\"late\"").is_err());
    }

    #[test]
    fn test_apply_copies_names() {
        let batch = Batch::new(
            "SQL Fundamentals".to_string(),
            "Mumbai".to_string(),
            None,
            None,
            None,
        );
        let trainee = Trainee::new("Ravi".to_string(), None, None, Some(batch.id));
        let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        let mut entry = Attendance::new(
            Some(trainee.id),
            Some(batch.id),
            date,
            AttendanceStatus::Present,
        );

        entry.apply_trainee(&trainee);
        entry.apply_batch(&batch);
        assert_eq!(entry.trainee_name.as_deref(), Some("Ravi"));
        assert_eq!(entry.batch_name.as_deref(), Some("SQL Fundamentals"));
    }

    // The by-date query filters on the ISO rendering of the date, so the
    // stored form must stay a plain string in that same rendering.
    #[test]
    fn test_date_stored_as_iso_string() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        let entry = Attendance::new(
            Some(ObjectId::new()),
            Some(ObjectId::new()),
            date,
            AttendanceStatus::Absent,
        );
        let doc = to_document(&entry).unwrap();
        assert_eq!(doc.get_str("date").unwrap(), date.to_string());
        assert_eq!(doc.get_str("date").unwrap(), "2025-03-14");
    }
}
