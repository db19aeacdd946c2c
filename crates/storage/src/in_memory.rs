//! In-memory storage
//!
//! Simulates the backend of the training pages. All handles cloned from one [`InMemory`]
//! share the same state, which lives as long as the last handle.

use std::{cell::RefCell, collections::VecDeque, rc::Rc, sync::Mutex, time::Duration};

use log::debug;
use stride_app::{Settings, log as app_log};
use stride_domain as domain;

struct SampleWorkoutRecord {
    id: u32,
    workout_type: &'static str,
    type_name: &'static str,
    content: &'static str,
    duration: &'static str,
    created_at: &'static str,
}

const SAMPLE_WORKOUT_RECORDS: [SampleWorkoutRecord; 3] = [
    SampleWorkoutRecord {
        id: 1,
        workout_type: "cardio",
        type_name: "Cardio",
        content: "Jogging",
        duration: "30",
        created_at: "2025-05-15 15:30:00",
    },
    SampleWorkoutRecord {
        id: 2,
        workout_type: "strength",
        type_name: "Strength",
        content: "Dumbbell bench press",
        duration: "45",
        created_at: "2025-05-14 10:20:00",
    },
    SampleWorkoutRecord {
        id: 3,
        workout_type: "stretch",
        type_name: "Stretch",
        content: "Yoga",
        duration: "20",
        created_at: "2025-05-13 18:45:00",
    },
];

fn sample_workout_records() -> Result<Vec<domain::WorkoutRecord>, Box<dyn std::error::Error>> {
    SAMPLE_WORKOUT_RECORDS
        .iter()
        .map(|sample| {
            Ok(domain::WorkoutRecord {
                id: sample.id.into(),
                workout_type: domain::WorkoutType::from(sample.workout_type),
                type_name: sample.type_name.to_string(),
                content: sample.content.to_string(),
                duration: domain::Minutes::try_from(sample.duration)?,
                created_at: domain::parse_date(sample.created_at)?,
            })
        })
        .collect()
}

#[derive(Default)]
struct State {
    workout_records: VecDeque<domain::WorkoutRecord>,
    training_target: domain::TrainingTarget,
    last_id: u32,
}

#[derive(Clone)]
pub struct InMemory {
    state: Rc<RefCell<State>>,
    target_fetch_delay: Duration,
}

impl InMemory {
    #[must_use]
    pub fn new() -> Self {
        Self::with_settings(&Settings::default())
    }

    #[must_use]
    pub fn with_settings(settings: &Settings) -> Self {
        Self {
            state: Rc::new(RefCell::new(State::default())),
            target_fetch_delay: settings.target_fetch_delay(),
        }
    }
}

impl Default for InMemory {
    fn default() -> Self {
        Self::new()
    }
}

/// Domain service over a fresh [`InMemory`] store, with the week start and fetch delay taken
/// from `settings`.
#[must_use]
pub fn training_store(settings: &Settings) -> domain::Service<InMemory> {
    domain::Service::with_week_start(InMemory::with_settings(settings), settings.week_start)
}

impl domain::WorkoutRepository for InMemory {
    async fn sync_workout_records(&self) -> Result<Vec<domain::WorkoutRecord>, domain::SyncError> {
        let workout_records = sample_workout_records()?;
        let mut state = self.state.borrow_mut();
        let highest_id = workout_records.iter().map(|r| *r.id).max().unwrap_or(0);
        state.last_id = state.last_id.max(highest_id);
        state.workout_records = workout_records.iter().cloned().collect();
        debug!("loaded {} workout records", workout_records.len());
        Ok(workout_records)
    }

    async fn read_workout_records(&self) -> Result<Vec<domain::WorkoutRecord>, domain::ReadError> {
        Ok(self.state.borrow().workout_records.iter().cloned().collect())
    }

    async fn create_workout_record(
        &self,
        workout_record: domain::NewWorkoutRecord,
    ) -> Result<domain::WorkoutRecord, domain::CreateError> {
        let mut state = self.state.borrow_mut();
        let Some(id) = state.last_id.checked_add(1) else {
            return Err(domain::StorageError::Other("no workout record id left".into()).into());
        };
        let workout_record =
            domain::WorkoutRecord::new(id.into(), workout_record, domain::current_time());
        state.last_id = id;
        state.workout_records.push_front(workout_record.clone());
        debug!("created workout record {id}");
        Ok(workout_record)
    }

    async fn delete_workout_record(
        &self,
        id: domain::WorkoutRecordID,
    ) -> Result<bool, domain::DeleteError> {
        let mut state = self.state.borrow_mut();
        match state.workout_records.iter().position(|r| r.id == id) {
            Some(index) => {
                state.workout_records.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

impl domain::TrainingTargetRepository for InMemory {
    async fn read_training_target(&self) -> Result<domain::TrainingTarget, domain::ReadError> {
        tokio::time::sleep(self.target_fetch_delay).await;
        Ok(self.state.borrow().training_target)
    }

    async fn replace_training_target(
        &self,
        training_target: domain::TrainingTarget,
    ) -> Result<domain::TrainingTarget, domain::UpdateError> {
        self.state.borrow_mut().training_target = training_target;
        debug!(
            "replaced training target with {} weekly minutes",
            training_target.weekly_minutes
        );
        Ok(training_target)
    }
}

/// Settings kept as JSON, the way they would be put into a key-value store.
#[derive(Default)]
pub struct UI {
    settings: RefCell<Option<String>>,
}

impl stride_app::SettingsRepository for UI {
    async fn read_settings(&self) -> Result<Settings, String> {
        match *self.settings.borrow() {
            Some(ref json) => serde_json::from_str(json).map_err(|err| err.to_string()),
            None => Ok(Settings::default()),
        }
    }

    async fn write_settings(&self, settings: Settings) -> Result<(), String> {
        let json = serde_json::to_string(&settings).map_err(|err| err.to_string())?;
        *self.settings.borrow_mut() = Some(json);
        Ok(())
    }
}

#[derive(Default)]
pub struct Log {
    entries: Mutex<VecDeque<app_log::Entry>>,
}

impl app_log::Repository for Log {
    fn read_entries(&self) -> Result<VecDeque<app_log::Entry>, app_log::Error> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .map_err(|err| app_log::Error::Unknown(err.to_string()))
    }

    fn write_entry(&self, entry: app_log::Entry) -> Result<(), app_log::Error> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|err| app_log::Error::Unknown(err.to_string()))?;
        entries.push_front(entry);
        entries.truncate(app_log::MAX_ENTRIES);
        Ok(())
    }
}
