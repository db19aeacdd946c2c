use std::{iter::Sum, ops::Add};

use chrono::{NaiveDateTime, Weekday};
use derive_more::{Deref, Display, Into};
use strum::{AsRefStr, EnumIter};

use crate::{CreateError, DeleteError, ReadError, SyncError, ValidationError};

#[allow(async_fn_in_trait)]
pub trait WorkoutService {
    async fn sync_workout_records(&self) -> Result<Vec<WorkoutRecord>, SyncError>;
    async fn get_workout_records(&self) -> Result<Vec<WorkoutRecord>, ReadError>;
    async fn create_workout_record(
        &self,
        workout_record: NewWorkoutRecord,
    ) -> Result<WorkoutRecord, CreateError>;
    async fn delete_workout_record(&self, id: WorkoutRecordID) -> Result<bool, DeleteError>;

    /// First day of the week used by [`WorkoutService::get_weekly_minutes_completed`].
    fn week_start(&self) -> Weekday {
        Weekday::Sun
    }

    async fn get_weekly_minutes_completed(&self, now: NaiveDateTime) -> Result<Minutes, ReadError> {
        let workout_records = self.get_workout_records().await?;
        Ok(crate::weekly_minutes_completed(
            &workout_records,
            now,
            self.week_start(),
        ))
    }

    fn validate_workout_duration(&self, duration: &str) -> Result<Minutes, ValidationError> {
        Minutes::try_from(duration).map_err(|err| ValidationError::Other(err.into()))
    }

    fn validate_workout_content(&self, content: &str) -> Result<String, ValidationError> {
        let trimmed_content = content.trim();

        if trimmed_content.is_empty() {
            return Err(ValidationError::Other(ContentError::Empty.into()));
        }

        Ok(trimmed_content.to_string())
    }
}

#[allow(async_fn_in_trait)]
pub trait WorkoutRepository {
    async fn sync_workout_records(&self) -> Result<Vec<WorkoutRecord>, SyncError>;
    async fn read_workout_records(&self) -> Result<Vec<WorkoutRecord>, ReadError>;
    async fn create_workout_record(
        &self,
        workout_record: NewWorkoutRecord,
    ) -> Result<WorkoutRecord, CreateError>;
    async fn delete_workout_record(&self, id: WorkoutRecordID) -> Result<bool, DeleteError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutRecord {
    pub id: WorkoutRecordID,
    pub workout_type: WorkoutType,
    pub type_name: String,
    pub content: String,
    pub duration: Minutes,
    pub created_at: NaiveDateTime,
}

impl WorkoutRecord {
    #[must_use]
    pub fn new(id: WorkoutRecordID, record: NewWorkoutRecord, created_at: NaiveDateTime) -> Self {
        Self {
            id,
            workout_type: record.workout_type,
            type_name: record.type_name,
            content: record.content,
            duration: record.duration,
            created_at,
        }
    }

    #[must_use]
    pub fn icon(&self) -> &'static str {
        self.workout_type.icon()
    }
}

/// A workout record as entered by the user, before an id and a creation time are assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWorkoutRecord {
    pub workout_type: WorkoutType,
    pub type_name: String,
    pub content: String,
    pub duration: Minutes,
}

#[derive(Deref, Debug, Default, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WorkoutRecordID(u32);

impl From<u32> for WorkoutRecordID {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumIter, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum WorkoutType {
    Cardio,
    Strength,
    Stretch,
    Other,
}

impl WorkoutType {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            WorkoutType::Cardio => "Cardio",
            WorkoutType::Strength => "Strength",
            WorkoutType::Stretch => "Stretch",
            WorkoutType::Other => "Other",
        }
    }

    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            WorkoutType::Cardio => "/static/icons/training/cardio.svg",
            WorkoutType::Strength => "/static/icons/training/strength.svg",
            WorkoutType::Stretch => "/static/icons/training/stretch.svg",
            WorkoutType::Other => "/static/icons/training/other.svg",
        }
    }
}

/// Unknown codes fall back to [`WorkoutType::Other`].
impl From<&str> for WorkoutType {
    fn from(value: &str) -> Self {
        match value {
            "cardio" => WorkoutType::Cardio,
            "strength" => WorkoutType::Strength,
            "stretch" => WorkoutType::Stretch,
            _ => WorkoutType::Other,
        }
    }
}

#[must_use]
pub fn workout_type_icon(code: &str) -> &'static str {
    WorkoutType::from(code).icon()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkoutTypeOption {
    pub value: WorkoutType,
    pub label: &'static str,
}

pub const WORKOUT_TYPES: [WorkoutTypeOption; 4] = [
    WorkoutTypeOption {
        value: WorkoutType::Cardio,
        label: WorkoutType::Cardio.label(),
    },
    WorkoutTypeOption {
        value: WorkoutType::Strength,
        label: WorkoutType::Strength.label(),
    },
    WorkoutTypeOption {
        value: WorkoutType::Stretch,
        label: WorkoutType::Stretch.label(),
    },
    WorkoutTypeOption {
        value: WorkoutType::Other,
        label: WorkoutType::Other.label(),
    },
];

#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct Minutes(u32);

impl Minutes {
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }
}

impl TryFrom<&str> for Minutes {
    type Error = MinutesError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().parse::<u32>() {
            Ok(parsed_value) => Ok(Minutes(parsed_value)),
            Err(_) => Err(MinutesError::ParseError),
        }
    }
}

impl Add for Minutes {
    type Output = Minutes;

    fn add(self, rhs: Self) -> Self::Output {
        Minutes(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Minutes {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Minutes::default(), Add::add)
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum MinutesError {
    #[error("Duration must be a whole number of minutes")]
    ParseError,
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ContentError {
    #[error("Content must not be empty")]
    Empty,
}
