use std::time::Duration;

use time::Month;
use time::OffsetDateTime;
use time::Weekday;

use crate::konst::MONTH_NAMES;
use crate::konst::WEEKDAY_NAMES;
use crate::page::Page;

/// Wall clock fields of one instant in the approximated zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockReading {
    pub year: i32,
    pub month: Month,
    pub day: u8,
    pub weekday: Weekday,
    pub hour: u8,
    pub minute: u8,
}

impl ClockReading {
    pub fn at(instant: OffsetDateTime) -> Result<Self, crate::pacific::LocalTimeError> {
        let local = crate::pacific::to_local(instant)?;

        Ok(Self {
            year: local.year(),
            month: local.month(),
            day: local.day(),
            weekday: local.weekday(),
            hour: local.hour(),
            minute: local.minute(),
        })
    }

    pub fn date_text(&self) -> String {
        let month = MONTH_NAMES[usize::from(u8::from(self.month)) - 1];
        let weekday = WEEKDAY_NAMES[usize::from(self.weekday.number_days_from_sunday())];
        format!("{month} {day}, {year} - {weekday}", day = self.day, year = self.year)
    }

    pub fn greeting_text(&self) -> String {
        format!("{}!", greeting(self.hour))
    }

    pub fn time_text(&self) -> String {
        format_time(self.hour, self.minute)
    }
}

pub fn greeting(hour: u8) -> &'static str {
    match hour {
        5..=11 => "GOOD MORNING",
        12..=16 => "GOOD AFTERNOON",
        _ => "GOOD EVENING",
    }
}

pub fn format_time(hour: u8, minute: u8) -> String {
    let meridiem = if hour >= 12 { "PM" } else { "AM" };
    let hour12 = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{hour12}:{minute:02} {meridiem}")
}

/// Renders date, greeting and time, every tick reads the current instant anew.
pub struct ClockUpdater {
    tick: Duration,
}

impl ClockUpdater {
    pub fn new(tick: Duration) -> Self {
        Self { tick }
    }

    pub fn render_at(
        &self,
        page: &mut dyn Page,
        instant: OffsetDateTime,
    ) -> Result<(), crate::error::Error> {
        let reading = ClockReading::at(instant).map_err(crate::error::Error::ClockReading)?;
        tracing::trace!(?reading, "Rendering clock");

        page.set_date_text(&reading.date_text());
        page.set_greeting_text(&reading.greeting_text());
        page.set_time_text(&reading.time_text());
        Ok(())
    }
}

impl crate::program::Program for ClockUpdater {
    fn ticker_duration(&self) -> Duration {
        self.tick
    }

    fn start(&mut self, page: &mut dyn Page) -> Result<(), crate::error::Error> {
        self.render_at(page, OffsetDateTime::now_utc())
    }

    fn tick(&mut self, page: &mut dyn Page) -> Result<(), crate::error::Error> {
        self.render_at(page, OffsetDateTime::now_utc())
    }
}
