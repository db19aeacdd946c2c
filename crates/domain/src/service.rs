use chrono::Weekday;
use log::{debug, error};

use crate::{
    CreateError, DeleteError, NewWorkoutRecord, ReadError, SyncError, TrainingTarget,
    TrainingTargetRepository, TrainingTargetService, UpdateError, ValidationError, WeeklyMinutes,
    WorkoutRecord, WorkoutRecordID, WorkoutRepository, WorkoutService,
};

pub struct Service<R> {
    repository: R,
    week_start: Weekday,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self::with_week_start(repository, Weekday::Sun)
    }

    pub fn with_week_start(repository: R, week_start: Weekday) -> Self {
        Self {
            repository,
            week_start,
        }
    }
}

macro_rules! log_on_error {
    ($func: expr, $action: literal, $entity: literal) => {{
        let result = $func.await;
        if let Err(ref err) = result {
            error!("failed to {} {}: {err}", $action, $entity);
        }
        result
    }};
}

impl<R: WorkoutRepository> WorkoutService for Service<R> {
    fn week_start(&self) -> Weekday {
        self.week_start
    }

    async fn sync_workout_records(&self) -> Result<Vec<WorkoutRecord>, SyncError> {
        log_on_error!(
            self.repository.sync_workout_records(),
            "sync",
            "workout records"
        )
    }

    async fn get_workout_records(&self) -> Result<Vec<WorkoutRecord>, ReadError> {
        log_on_error!(
            self.repository.read_workout_records(),
            "get",
            "workout records"
        )
    }

    async fn create_workout_record(
        &self,
        workout_record: NewWorkoutRecord,
    ) -> Result<WorkoutRecord, CreateError> {
        log_on_error!(
            self.repository.create_workout_record(workout_record),
            "create",
            "workout record"
        )
    }

    async fn delete_workout_record(&self, id: WorkoutRecordID) -> Result<bool, DeleteError> {
        let result = log_on_error!(
            self.repository.delete_workout_record(id),
            "delete",
            "workout record"
        );
        if let Ok(false) = result {
            debug!("workout record {id} not found");
        }
        result
    }
}

impl<R: TrainingTargetRepository> TrainingTargetService for Service<R> {
    async fn get_training_target(&self) -> Result<TrainingTarget, ReadError> {
        log_on_error!(
            self.repository.read_training_target(),
            "get",
            "training target"
        )
    }

    async fn update_training_target(
        &self,
        weekly_minutes: i64,
    ) -> Result<TrainingTarget, UpdateError> {
        let weekly_minutes = match WeeklyMinutes::new(weekly_minutes) {
            Ok(weekly_minutes) => weekly_minutes,
            Err(err) => {
                debug!("rejected training target {weekly_minutes}: {err}");
                return Err(ValidationError::Other(err.into()).into());
            }
        };
        log_on_error!(
            self.repository
                .replace_training_target(TrainingTarget { weekly_minutes }),
            "update",
            "training target"
        )
    }
}
