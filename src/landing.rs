use std::future::Future;
use std::pin::Pin;

use tokio_util::sync::CancellationToken;

use crate::clock::ClockUpdater;
use crate::config::Config;
use crate::event::Event;
use crate::page::Page;
use crate::program::Program;
use crate::slideshow::Slideshow;
use crate::subscribe::FormState;
use crate::subscribe::HttpSubscriptionClient;
use crate::subscribe::SubmitError;
use crate::subscribe::SubscriptionForm;

type PendingRequest = Pin<Box<dyn Future<Output = Result<(), SubmitError>>>>;

/// All components attached to one loaded page.
pub struct Landing<P: Page> {
    page: P,
    clock: ClockUpdater,
    slideshow: Slideshow,
    form: SubscriptionForm,
    client: HttpSubscriptionClient,
    preview: Option<url::Url>,
}

impl<P: Page> Landing<P> {
    pub fn new(config: &Config, page: P) -> Result<Self, crate::error::Error> {
        let client =
            HttpSubscriptionClient::new(&config.subscribe).map_err(crate::error::Error::HttpClient)?;

        Ok(Self {
            page,
            clock: ClockUpdater::new(config.clock.tick),
            slideshow: Slideshow::new(config.slideshow.interval, config.slideshow.slides.len()),
            form: SubscriptionForm::new(),
            client,
            preview: config.preview.as_ref().map(|preview| preview.url.clone()),
        })
    }

    #[cfg(test)]
    pub fn page(&self) -> &P {
        &self.page
    }

    /// Drives the page until `cancellation_token` fires.
    ///
    /// Both tickers, page events and a pending subscription request interleave on the
    /// current task. Closing the event channel only stops event handling.
    pub async fn run(
        &mut self,
        mut events: tokio::sync::mpsc::Receiver<Event>,
        cancellation_token: CancellationToken,
    ) -> Result<(), crate::error::Error> {
        self.clock.start(&mut self.page)?;
        self.slideshow.start(&mut self.page)?;

        let mut clock_ticker = crate::program::ticker(&self.clock);
        let mut slideshow_ticker = crate::program::ticker(&self.slideshow);
        let mut pending: Option<PendingRequest> = None;
        let mut events_open = true;

        loop {
            tokio::select! {
                _ = clock_ticker.tick() => {
                    self.clock.tick(&mut self.page)?;
                }

                _ = slideshow_ticker.tick() => {
                    self.slideshow.tick(&mut self.page)?;
                }

                outcome = settle(&mut pending), if pending.is_some() => {
                    pending = None;
                    self.form.finish(&mut self.page, &outcome);
                }

                event = events.recv(), if events_open => {
                    match event {
                        Some(event) => self.handle_event(event, &mut pending, &cancellation_token),
                        None => {
                            tracing::debug!("Event channel closed");
                            events_open = false;
                        }
                    }
                }

                () = cancellation_token.cancelled() => {
                    if self.form.state() == FormState::Submitting {
                        tracing::info!("Shutting down with a subscription request in flight");
                    }
                    break;
                }
            }
        }

        Ok(())
    }

    fn handle_event(
        &mut self,
        event: Event,
        pending: &mut Option<PendingRequest>,
        cancellation_token: &CancellationToken,
    ) {
        match event {
            Event::Submit { email } => match self.form.submit(&mut self.page, &email) {
                Ok(Some(attempt)) => {
                    let client = self.client.clone();
                    let cancellation_token = cancellation_token.child_token();
                    *pending = Some(Box::pin(async move {
                        client.subscribe(&attempt, &cancellation_token).await
                    }));
                }
                Ok(None) => {}
                Err(error) => tracing::info!(%error, "Submission not sent"),
            },

            Event::Preview => match &self.preview {
                Some(url) => self.page.open_in_new_context(url),
                None => tracing::warn!("No preview page configured"),
            },
        }
    }
}

async fn settle(pending: &mut Option<PendingRequest>) -> Result<(), SubmitError> {
    match pending {
        Some(request) => request.await,
        None => std::future::pending().await,
    }
}
