//! Random and time-based field synthesis.
//!
//! Every generator receives a [`Synth`] that bundles the clock reading for
//! the current request with a random source. Nothing here is cryptographic;
//! values are uniform over `[0, bound)` and regenerated on every call.

use chrono::{DateTime, Duration, Local, SecondsFormat, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Clock reading plus random source for one request.
pub struct Synth<R = StdRng> {
    rng: R,
    now: DateTime<Utc>,
}

impl Synth<StdRng> {
    /// Entropy-seeded source pinned to the current instant.
    pub fn live() -> Self {
        Self::new(StdRng::from_entropy(), Utc::now())
    }
}

impl<R: Rng> Synth<R> {
    pub fn new(rng: R, now: DateTime<Utc>) -> Self {
        Self { rng, now }
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }

    /// Current instant as an ISO-8601 string with millisecond precision and `Z`.
    pub fn timestamp(&self) -> String {
        iso_millis(self.now)
    }

    /// ISO timestamp `hours` before now.
    pub fn hours_ago(&self, hours: i64) -> String {
        iso_millis(self.now - Duration::hours(hours))
    }

    /// Current UTC wall time labelled with the Moscow offset, as fiscal drives print it.
    pub fn fiscal_timestamp(&self) -> String {
        let stamp = self.timestamp();
        match stamp.strip_suffix('Z') {
            Some(base) => format!("{base}+03:00"),
            None => stamp,
        }
    }

    /// Human-readable local date and time for printed slips.
    pub fn slip_datetime(&self) -> String {
        self.now
            .with_timezone(&Local)
            .format("%d.%m.%Y, %H:%M:%S")
            .to_string()
    }

    pub fn epoch_millis(&self) -> i64 {
        self.now.timestamp_millis()
    }

    /// Uniform integer in `[0, bound)`.
    pub fn below(&mut self, bound: u64) -> u64 {
        self.rng.gen_range(0..bound)
    }

    /// Monetary value with two decimals: a random count of kopecks below
    /// `kopecks_bound`, divided by 100.
    pub fn money(&mut self, kopecks_bound: u64) -> f64 {
        self.below(kopecks_bound) as f64 / 100.0
    }

    /// Random integer in `[0, bound)` rendered as a decimal string.
    pub fn digits(&mut self, bound: u64) -> String {
        self.below(bound).to_string()
    }
}

pub(crate) fn iso_millis(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
pub(crate) fn seeded(seed: u64) -> Synth<StdRng> {
    use chrono::TimeZone;

    let now = Utc
        .with_ymd_and_hms(2024, 3, 15, 9, 30, 0)
        .single()
        .expect("valid fixed instant");
    Synth::new(StdRng::seed_from_u64(seed), now)
}
