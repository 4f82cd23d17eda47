use chrono::{DateTime, Utc};

/// Time source abstraction so cache freshness is testable.
///
/// Production code uses [`SystemClock`]; tests inject a clock they can
/// hold constant or advance past the TTL.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// The real wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
