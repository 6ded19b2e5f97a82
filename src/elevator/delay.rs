use std::thread;
use std::time::Duration;

/// Pause taken by the car after every floor it steps past. Pacing only, the
/// schedule never depends on it.
pub trait StepDelay: Send {
    fn pause(&mut self);
}

/// Blocks the calling thread for a fixed duration per floor.
pub struct ThreadSleepDelay(pub Duration);

impl StepDelay for ThreadSleepDelay {
    fn pause(&mut self) {
        thread::sleep(self.0);
    }
}

pub struct NoDelay;

impl StepDelay for NoDelay {
    fn pause(&mut self) {}
}

/// Picks the delay for a configured duration; a zero duration never sleeps.
pub fn step_delay_for(duration: Duration) -> Box<dyn StepDelay> {
    if duration.is_zero() {
        Box::new(NoDelay)
    } else {
        Box::new(ThreadSleepDelay(duration))
    }
}
