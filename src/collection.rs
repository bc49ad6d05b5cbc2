//! Throughput sampling.
//!
//! A [`Sampler`] turns consecutive readings of a cumulative counter into
//! [`Sample`]s, each holding the time since sampling started and the
//! throughput over the last tick.

pub mod error;
pub mod network;

use std::time::{Duration, Instant};

use self::{
    error::{CollectionError, CollectionResult},
    network::CounterSource,
};

/// A single throughput data point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    /// Seconds since the [`Sampler`] was seeded.
    pub elapsed_secs: f64,

    /// Bytes sent per second over the last tick. This may be negative if the
    /// counter was reset.
    pub bytes_per_sec: f64,
}

/// Derives throughput samples from a [`CounterSource`].
///
/// The rate is always normalised to bytes per second using the nominal tick
/// interval, not the measured time between reads.
pub struct Sampler<S: CounterSource> {
    source: S,
    interval: Duration,
    start: Instant,
    prev_bytes_sent: u64,
}

impl<S: CounterSource> Sampler<S> {
    /// Creates a new [`Sampler`], seeding it with an initial counter read.
    /// The seed is never emitted as a sample.
    pub fn new(mut source: S, interval: Duration) -> CollectionResult<Self> {
        if interval.is_zero() {
            return Err(CollectionError::from_str(
                "the sampling interval must be greater than zero",
            ));
        }

        let prev_bytes_sent = source.bytes_sent()?;
        let start = Instant::now();

        Ok(Self {
            source,
            interval,
            start,
            prev_bytes_sent,
        })
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn start(&self) -> Instant {
        self.start
    }

    /// Reads the counter and returns the throughput since the last read.
    pub fn sample(&mut self) -> CollectionResult<Sample> {
        self.sample_at(Instant::now())
    }

    /// Same as [`Sampler::sample`], but with the current time given by the caller.
    pub fn sample_at(&mut self, now: Instant) -> CollectionResult<Sample> {
        let curr_bytes_sent = self.source.bytes_sent()?;

        // Resets show up as negative deltas and are passed along unchanged.
        let delta = i128::from(curr_bytes_sent) - i128::from(self.prev_bytes_sent);
        let bytes_per_sec = delta as f64 / self.interval.as_secs_f64();
        self.prev_bytes_sent = curr_bytes_sent;

        Ok(Sample {
            elapsed_secs: now.saturating_duration_since(self.start).as_secs_f64(),
            bytes_per_sec,
        })
    }
}


#[cfg(test)]
mod test {
    use std::time::Duration;

    use super::{test_utils::ScriptedCounter, *};

    fn rates(counter: &[u64], interval: Duration) -> Vec<f64> {
        let mut sampler = Sampler::new(ScriptedCounter::new(counter), interval).unwrap();
        let start = sampler.start();

        (1..counter.len() as u32)
            .map(|tick| {
                sampler
                    .sample_at(start + interval * tick)
                    .unwrap()
                    .bytes_per_sec
            })
            .collect()
    }

    #[test]
    fn seed_is_not_emitted() {
        assert_eq!(
            rates(&[1000, 1500, 1500, 3000], Duration::from_secs(1)),
            vec![500.0, 0.0, 1500.0]
        );
    }

    #[test]
    fn rates_are_per_second() {
        assert_eq!(
            rates(&[0, 100, 300], Duration::from_millis(200)),
            vec![500.0, 1000.0]
        );
    }

    #[test]
    fn counter_reset_passes_through_negative_rate() {
        assert_eq!(
            rates(&[1000, 5000, 100, 200], Duration::from_secs(1)),
            vec![4000.0, -4900.0, 100.0]
        );
    }

    #[test]
    fn elapsed_time_is_monotonic_across_resets() {
        let interval = Duration::from_secs(1);
        let mut sampler = Sampler::new(
            ScriptedCounter::new(&[u64::MAX, 0, 10, 5, u64::MAX]),
            interval,
        )
        .unwrap();
        let start = sampler.start();

        let elapsed = (1..5)
            .map(|tick| sampler.sample_at(start + interval * tick).unwrap().elapsed_secs)
            .collect::<Vec<_>>();

        assert_eq!(elapsed, vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn zero_interval_is_rejected() {
        assert!(Sampler::new(ScriptedCounter::new(&[0]), Duration::ZERO).is_err());
    }

    #[test]
    fn seed_failure_is_reported() {
        assert!(Sampler::new(ScriptedCounter::new(&[]), Duration::from_secs(1)).is_err());
    }

    #[test]
    fn read_failure_is_reported() {
        let mut sampler =
            Sampler::new(ScriptedCounter::new(&[10]), Duration::from_secs(1)).unwrap();

        match sampler.sample() {
            Err(CollectionError::General(err)) => {
                assert!(err.to_string().contains("ran out"));
            }
            other => panic!("expected a collection error, got {other:?}"),
        }
    }
}
