use std::sync::Arc;

use service::attendance::AttendanceLog;
use service::batches::Batches;
use service::courses::Courses;
use service::reports::Reports;
use service::trainees::Trainees;
use service::trainers::Trainers;
use storage::session::Db;
use storage::Storage;

pub mod service;

/// Entity managers over the shared store. Each manager owns one collection
/// and reads its siblings' stores only to denormalize display fields at
/// write time.
#[derive(Clone)]
pub struct Registry {
    pub db: Db,
    pub trainees: Trainees,
    pub trainers: Trainers,
    pub batches: Batches,
    pub courses: Courses,
    pub attendance: AttendanceLog,
    pub reports: Reports,
}

impl Registry {
    pub fn new(storage: Storage) -> Self {
        let trainee_store = Arc::new(storage.trainees);
        let trainer_store = Arc::new(storage.trainers);
        let batch_store = Arc::new(storage.batches);
        let course_store = Arc::new(storage.courses);
        let attendance_store = Arc::new(storage.attendance);

        let trainees = Trainees::new(trainee_store.clone(), batch_store.clone());
        let trainers = Trainers::new(trainer_store.clone(), batch_store.clone());
        let batches = Batches::new(
            batch_store.clone(),
            trainer_store.clone(),
            trainee_store.clone(),
        );
        let courses = Courses::new(course_store);
        let attendance = AttendanceLog::new(attendance_store, trainee_store, batch_store.clone());
        let reports = Reports::new(trainer_store, batch_store);

        Registry {
            db: storage.db,
            trainees,
            trainers,
            batches,
            courses,
            attendance,
            reports,
        }
    }
}
