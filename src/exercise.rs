//! Exercise rights and the stopping-time schedules they induce.
//!
//! An [`Exercise`] is the calendar-free source of both fields the exchange
//! copies into an arguments payload: the [`ExerciseType`] tag and the plain
//! stopping-time sequence. Constructors apply no sign checks on times;
//! a negative maturity surfaces through arguments validation instead.

use crate::core::{ExerciseType, ValidationError};

/// Exercise rights plus the stopping times they induce, in year fractions.
#[derive(Debug, Clone, PartialEq)]
pub struct Exercise {
    exercise_type: ExerciseType,
    stopping_times: Vec<f64>,
}

impl Exercise {
    /// European exercise at `expiry`.
    pub fn european(expiry: f64) -> Self {
        Self {
            exercise_type: ExerciseType::European,
            stopping_times: vec![expiry],
        }
    }

    /// American exercise at any time up to `expiry`.
    ///
    /// The schedule carries the earliest and latest exercise times.
    pub fn american(expiry: f64) -> Self {
        Self {
            exercise_type: ExerciseType::American,
            stopping_times: vec![0.0, expiry],
        }
    }

    /// Bermudan exercise at the given times.
    ///
    /// # Errors
    /// Fails when `times` is empty or not strictly increasing.
    pub fn bermudan(times: Vec<f64>) -> Result<Self, ValidationError> {
        if times.is_empty() {
            return Err(ValidationError::new("empty stopping-time schedule"));
        }
        if times.windows(2).any(|pair| pair[1] <= pair[0]) {
            return Err(ValidationError::new(
                "stopping times not strictly increasing",
            ));
        }
        Ok(Self {
            exercise_type: ExerciseType::Bermudan,
            stopping_times: times,
        })
    }

    /// Exercise rights tag.
    #[inline]
    pub fn exercise_type(&self) -> ExerciseType {
        self.exercise_type
    }

    /// Stopping times in ascending order.
    #[inline]
    pub fn stopping_times(&self) -> &[f64] {
        &self.stopping_times
    }

    /// The final stopping time, i.e. the contract maturity.
    #[inline]
    pub fn last_time(&self) -> f64 {
        // constructors guarantee a non-empty schedule
        self.stopping_times[self.stopping_times.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn european_carries_single_stopping_time() {
        let exercise = Exercise::european(1.5);
        assert_eq!(exercise.exercise_type(), ExerciseType::European);
        assert_eq!(exercise.stopping_times(), &[1.5]);
        assert_eq!(exercise.last_time(), 1.5);
    }

    #[test]
    fn american_carries_earliest_and_latest() {
        let exercise = Exercise::american(2.0);
        assert_eq!(exercise.exercise_type(), ExerciseType::American);
        assert_eq!(exercise.stopping_times(), &[0.0, 2.0]);
        assert_eq!(exercise.last_time(), 2.0);
    }

    #[test]
    fn bermudan_requires_strictly_increasing_times() {
        let exercise = Exercise::bermudan(vec![0.25, 0.5, 1.0]).unwrap();
        assert_eq!(exercise.exercise_type(), ExerciseType::Bermudan);
        assert_eq!(exercise.last_time(), 1.0);

        let empty = Exercise::bermudan(vec![]).unwrap_err();
        assert_eq!(empty.message(), "empty stopping-time schedule");

        let unsorted = Exercise::bermudan(vec![1.0, 0.5]).unwrap_err();
        assert_eq!(unsorted.message(), "stopping times not strictly increasing");

        let duplicate = Exercise::bermudan(vec![0.5, 0.5]).unwrap_err();
        assert_eq!(duplicate.message(), "stopping times not strictly increasing");
    }

    #[test]
    fn constructors_accept_negative_times() {
        // sign policing belongs to arguments validation, not the schedule
        assert_eq!(Exercise::european(-0.25).last_time(), -0.25);
    }
}
