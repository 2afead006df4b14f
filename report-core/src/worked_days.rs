//! Per-day worked/not-worked state for one open report.

use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum WorkedDayError {
    /// `index` is 0-based; the message names the 1-based day.
    #[error("day {} is outside a month of {len} days", .index.wrapping_add(1))]
    OutOfBounds { index: usize, len: usize },
}

/// One boolean per day of the report month; index 0 is day 1.
///
/// The only mutations are [`resize`](Self::resize) and
/// [`toggle`](Self::toggle).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkedDaySet {
    days: Vec<bool>,
}

impl WorkedDaySet {
    /// A set of `len` unworked days.
    pub fn with_len(len: usize) -> Self {
        Self {
            days: vec![false; len],
        }
    }

    /// Matches the set to a new month length.
    ///
    /// When the length changes every entry is reset to `false`; worked days
    /// are not carried over between months of different lengths. Resizing to
    /// the current length keeps the existing state.
    ///
    /// # Example
    ///
    /// ```
    /// use report_core::WorkedDaySet;
    ///
    /// let mut set = WorkedDaySet::with_len(31);
    /// set.toggle(0).unwrap();
    ///
    /// set.resize(31);
    /// assert!(set.get(0));
    ///
    /// set.resize(28);
    /// assert_eq!(set.len(), 28);
    /// assert!(!set.get(0));
    /// ```
    pub fn resize(
        &mut self,
        new_len: usize,
    ) {
        if self.days.len() == new_len {
            return;
        }
        debug!(
            old_len = self.days.len(),
            new_len, "month length changed; resetting worked days"
        );
        self.days = vec![false; new_len];
    }

    /// Flips the worked flag at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`WorkedDayError::OutOfBounds`] and leaves the set unchanged
    /// if `index` is past the end of the month.
    pub fn toggle(
        &mut self,
        index: usize,
    ) -> Result<(), WorkedDayError> {
        let len = self.days.len();
        match self.days.get_mut(index) {
            Some(worked) => {
                *worked = !*worked;
                Ok(())
            }
            None => {
                warn!(index, len, "ignoring toggle outside the current month");
                Err(WorkedDayError::OutOfBounds { index, len })
            }
        }
    }

    /// Worked flag at `index`; indices past the end read as not worked.
    pub fn get(
        &self,
        index: usize,
    ) -> bool {
        self.days.get(index).copied().unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.days.iter().copied()
    }

    /// Number of days flagged as worked.
    pub fn worked_count(&self) -> usize {
        self.days.iter().filter(|worked| **worked).count()
    }
}
