//! Time axis of a coverage.
//!
//! Resolves a requested time, given either as a time step index or as an
//! instant, to the index of a stored time step.

use chrono::{DateTime, Duration, Utc};

use crate::error::{HaloclineError, Result};

/// A requested time: a raw time step index or a calendar instant
///
/// Indices are given as `usize`, e.g. `0usize` or `TimeSelector::Index(0)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeSelector {
    Index(usize),
    Instant(DateTime<Utc>),
}

impl From<usize> for TimeSelector {
    fn from(index: usize) -> Self {
        TimeSelector::Index(index)
    }
}

impl From<DateTime<Utc>> for TimeSelector {
    fn from(instant: DateTime<Utc>) -> Self {
        TimeSelector::Instant(instant)
    }
}

/// Ordered time steps of a coverage
#[derive(Debug, Clone)]
pub struct TimeAxis {
    times: Vec<DateTime<Utc>>,
    tolerance: Duration,
}

impl TimeAxis {
    /// Create an axis that only accepts exact instants
    pub fn new(times: Vec<DateTime<Utc>>) -> Self {
        Self {
            times,
            tolerance: Duration::zero(),
        }
    }

    /// Accept instants up to `tolerance` away from a stored time step
    pub fn with_tolerance(mut self, tolerance: Duration) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    pub fn times(&self) -> &[DateTime<Utc>] {
        &self.times
    }

    /// Resolve a time selector to a time step index
    pub fn find_time_index(&self, time: TimeSelector) -> Result<usize> {
        if self.times.is_empty() {
            return Err(HaloclineError::TimeLookup {
                message: "Time axis is empty".to_string(),
            });
        }

        match time {
            TimeSelector::Index(index) if index < self.times.len() => Ok(index),
            TimeSelector::Index(index) => Err(HaloclineError::TimeLookup {
                message: format!(
                    "Time index {} is outside the axis (0 to {})",
                    index,
                    self.times.len() - 1
                ),
            }),
            TimeSelector::Instant(instant) => self.find_instant(instant),
        }
    }

    fn find_instant(&self, instant: DateTime<Utc>) -> Result<usize> {
        // Find the index of the closest time step
        let mut closest: Option<(usize, Duration)> = None;

        for (i, &time) in self.times.iter().enumerate() {
            let diff = (time - instant).abs();
            match closest {
                Some((_, min_diff)) if diff >= min_diff => {}
                _ => closest = Some((i, diff)),
            }
        }

        let (closest_idx, min_diff) = closest.unwrap_or((0, Duration::zero()));
        if min_diff > self.tolerance {
            return Err(HaloclineError::TimeLookup {
                message: format!(
                    "No time step within {}s of {} (closest is {})",
                    self.tolerance.num_seconds(),
                    instant.to_rfc3339(),
                    self.times[closest_idx].to_rfc3339()
                ),
            });
        }

        Ok(closest_idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn hourly_axis() -> TimeAxis {
        let start = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        TimeAxis::new((0..4).map(|h| start + Duration::hours(h)).collect())
    }

    #[test]
    fn test_index_passthrough() {
        let axis = hourly_axis();
        assert_eq!(axis.find_time_index(TimeSelector::Index(3)).unwrap(), 3);
        let err = axis.find_time_index(4usize.into()).unwrap_err();
        assert!(err.is_lookup_error());
    }

    #[test]
    fn test_exact_instant() {
        let axis = hourly_axis();
        let instant = Utc.with_ymd_and_hms(2024, 3, 1, 2, 0, 0).unwrap();
        assert_eq!(axis.find_time_index(instant.into()).unwrap(), 2);

        let off_grid = Utc.with_ymd_and_hms(2024, 3, 1, 2, 10, 0).unwrap();
        assert!(axis.find_time_index(off_grid.into()).is_err());
    }

    #[test]
    fn test_instant_within_tolerance() {
        let axis = hourly_axis().with_tolerance(Duration::minutes(30));

        let instant = Utc.with_ymd_and_hms(2024, 3, 1, 2, 10, 0).unwrap();
        assert_eq!(axis.find_time_index(instant.into()).unwrap(), 2);

        // equidistant: first time step wins
        let halfway = Utc.with_ymd_and_hms(2024, 3, 1, 1, 30, 0).unwrap();
        assert_eq!(axis.find_time_index(halfway.into()).unwrap(), 1);

        let late = Utc.with_ymd_and_hms(2024, 3, 1, 4, 0, 0).unwrap();
        assert!(axis.find_time_index(late.into()).is_err());
    }

    #[test]
    fn test_empty_axis() {
        let axis = TimeAxis::new(Vec::new());
        assert!(axis.is_empty());
        assert!(axis.find_time_index(TimeSelector::Index(0)).unwrap_err().is_lookup_error());
    }
}
