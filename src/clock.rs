use chrono::{DateTime, Local};

/// Source of "now" for stamping new activities.
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Always returns the same instant. For tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    at: DateTime<Local>,
}

impl FixedClock {
    pub fn new(at: DateTime<Local>) -> Self {
        Self { at }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.at
    }
}

const ID_SPACE: i64 = 10_000_000_000;

/// Last ten digits of the millisecond timestamp, bumped past any id for which
/// `taken` returns true.
pub fn timestamp_id(at: &DateTime<Local>, taken: impl Fn(&str) -> bool) -> String {
    let mut n = at.timestamp_millis().rem_euclid(ID_SPACE);
    loop {
        let id = format!("{:010}", n);
        if !taken(&id) {
            return id;
        }
        n = (n + 1) % ID_SPACE;
    }
}
