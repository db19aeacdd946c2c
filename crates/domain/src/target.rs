use derive_more::{Display, Into};

use crate::{Minutes, ReadError, UpdateError, ValidationError};

#[allow(async_fn_in_trait)]
pub trait TrainingTargetService {
    async fn get_training_target(&self) -> Result<TrainingTarget, ReadError>;
    async fn update_training_target(
        &self,
        weekly_minutes: i64,
    ) -> Result<TrainingTarget, UpdateError>;

    fn validate_weekly_minutes(
        &self,
        weekly_minutes: &str,
    ) -> Result<WeeklyMinutes, ValidationError> {
        WeeklyMinutes::try_from(weekly_minutes).map_err(|err| ValidationError::Other(err.into()))
    }
}

#[allow(async_fn_in_trait)]
pub trait TrainingTargetRepository {
    async fn read_training_target(&self) -> Result<TrainingTarget, ReadError>;
    async fn replace_training_target(
        &self,
        training_target: TrainingTarget,
    ) -> Result<TrainingTarget, UpdateError>;
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TrainingTarget {
    pub weekly_minutes: WeeklyMinutes,
}

impl TrainingTarget {
    /// Share of the weekly goal reached by `completed`; exceeds 1.0 once the goal is passed.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self, completed: Minutes) -> f32 {
        u32::from(completed) as f32 / u32::from(self.weekly_minutes) as f32
    }
}

#[derive(Debug, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct WeeklyMinutes(u32);

impl WeeklyMinutes {
    pub fn new(value: i64) -> Result<Self, WeeklyMinutesError> {
        if value <= 0 {
            return Err(WeeklyMinutesError::NotPositive);
        }

        match u32::try_from(value) {
            Ok(value) => Ok(Self(value)),
            Err(_) => Err(WeeklyMinutesError::OutOfRange),
        }
    }
}

impl Default for WeeklyMinutes {
    fn default() -> Self {
        Self(120)
    }
}

impl TryFrom<&str> for WeeklyMinutes {
    type Error = WeeklyMinutesError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().parse::<i64>() {
            Ok(parsed_value) => WeeklyMinutes::new(parsed_value),
            Err(_) => Err(WeeklyMinutesError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum WeeklyMinutesError {
    #[error("Training target must be a positive number")]
    NotPositive,
    #[error("Training target is too large")]
    OutOfRange,
    #[error("Training target must be an integer")]
    ParseError,
}
