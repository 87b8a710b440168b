use std::time::Duration;

use crate::page::Page;

/// Moves the active marker through a fixed set of slides.
///
/// The number of slides is fixed at construction. With zero slides every operation is a
/// no-op and no marker is ever set.
pub struct Slideshow {
    interval: Duration,
    len: usize,
    index: usize,
}

impl Slideshow {
    pub fn new(interval: Duration, len: usize) -> Self {
        Self {
            interval,
            len,
            index: 0,
        }
    }

    pub fn active_index(&self) -> Option<usize> {
        (self.len > 0).then_some(self.index)
    }

    pub fn advance(&mut self, page: &mut dyn Page) {
        if self.len == 0 {
            return;
        }

        page.set_slide_active(self.index, false);
        self.index = (self.index + 1) % self.len;
        page.set_slide_active(self.index, true);
        tracing::debug!(index = self.index, len = self.len, "Advanced slideshow");
    }
}

impl crate::program::Program for Slideshow {
    fn ticker_duration(&self) -> Duration {
        self.interval
    }

    fn start(&mut self, page: &mut dyn Page) -> Result<(), crate::error::Error> {
        if let Some(index) = self.active_index() {
            page.set_slide_active(index, true);
        } else {
            tracing::info!("No slides configured, slideshow stays idle");
        }
        Ok(())
    }

    fn tick(&mut self, page: &mut dyn Page) -> Result<(), crate::error::Error> {
        self.advance(page);
        Ok(())
    }
}
