// Wall-clock implementation of the Clock seam
use crate::application::clock::Clock;
use chrono::{DateTime, Local};

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}
