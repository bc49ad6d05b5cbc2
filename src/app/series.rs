//! The sliding window of throughput samples shown on the chart.

use std::collections::{vec_deque, VecDeque};

use crate::{collection::Sample, constants::SERIES_CAPACITY};

/// A fixed-capacity ring buffer of [`Sample`]s, oldest first.
///
/// Pushing into a full series evicts the oldest sample, so the length never
/// exceeds the capacity and the backing storage never grows.
#[derive(Clone, Debug)]
pub struct ThroughputSeries {
    samples: VecDeque<Sample>,
    capacity: usize,
}

impl Default for ThroughputSeries {
    fn default() -> Self {
        Self::with_capacity(SERIES_CAPACITY)
    }
}

impl ThroughputSeries {
    /// Creates an empty series holding at most `capacity` samples. A capacity of
    /// zero is bumped up to one.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);

        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends a sample, evicting the oldest one if the series is full.
    pub fn push(&mut self, sample: Sample) {
        debug_assert!(
            self.latest()
                .map_or(true, |latest| latest.elapsed_secs < sample.elapsed_secs),
            "samples must be pushed in time order"
        );

        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(sample);
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn oldest(&self) -> Option<&Sample> {
        self.samples.front()
    }

    pub fn latest(&self) -> Option<&Sample> {
        self.samples.back()
    }

    pub fn iter(&self) -> vec_deque::Iter<'_, Sample> {
        self.samples.iter()
    }

    /// The elapsed times of every sample, oldest first.
    pub fn x_values(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.elapsed_secs).collect()
    }

    /// The throughput of every sample, oldest first.
    pub fn y_values(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.bytes_per_sec).collect()
    }

    /// `(x, y)` pairs in the form charts want them.
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.samples
            .iter()
            .map(|s| (s.elapsed_secs, s.bytes_per_sec))
            .collect()
    }
}
