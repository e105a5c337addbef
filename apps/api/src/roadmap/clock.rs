#![allow(dead_code)]

use chrono::NaiveDate;

/// Wall-clock seam for placement-date computation. Injected so roadmap
/// generation stays deterministic under test.
///
/// Carried in `AppState` as `Arc<dyn Clock>`.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Production clock reading system time (UTC).
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Utc::now().date_naive()
    }
}

/// Fixed clock for deterministic tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
