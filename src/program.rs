use std::time::Duration;

use crate::page::Page;

/// A page component that is driven by a fixed interval.
pub trait Program {
    fn ticker_duration(&self) -> Duration;

    /// Runs once when the page is loaded, before the first interval elapsed.
    fn start(&mut self, page: &mut dyn Page) -> Result<(), crate::error::Error>;

    fn tick(&mut self, page: &mut dyn Page) -> Result<(), crate::error::Error>;
}

/// The first tick fires one full period after creation, `start` covers the initial render.
pub fn ticker(program: &impl Program) -> tokio::time::Interval {
    let period = program.ticker_duration();
    let mut interval = tokio::time::interval_at(tokio::time::Instant::now() + period, period);
    interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
    interval
}
