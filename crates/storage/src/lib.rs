pub mod attendance;
pub mod batch;
pub mod course;
pub mod session;
pub mod trainee;
pub mod trainer;

use attendance::AttendanceStore;
use batch::BatchStore;
use course::CourseStore;
use eyre::Result;
use session::Db;
use trainee::TraineeStore;
use trainer::TrainerStore;

const DB_NAME: &str = "training_registry_db";

#[derive(Clone)]
pub struct Storage {
    pub db: Db,
    pub trainees: TraineeStore,
    pub trainers: TrainerStore,
    pub batches: BatchStore,
    pub courses: CourseStore,
    pub attendance: AttendanceStore,
}

impl Storage {
    pub async fn new(uri: &str) -> Result<Self> {
        let db = Db::new(uri, DB_NAME).await?;
        let trainees = TraineeStore::new(&db).await?;
        let trainers = TrainerStore::new(&db).await?;
        let batches = BatchStore::new(&db).await?;
        let courses = CourseStore::new(&db).await?;
        let attendance = AttendanceStore::new(&db).await?;

        Ok(Storage {
            db,
            trainees,
            trainers,
            batches,
            courses,
            attendance,
        })
    }
}
