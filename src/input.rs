use std::io::BufRead;

/// Reads page events line by line and forwards them to the page loop.
///
/// Blocking, meant for a dedicated thread. Returns once the input is exhausted or the page
/// loop went away.
pub fn forward<R>(
    reader: R,
    event_sender: tokio::sync::mpsc::Sender<crate::event::Event>,
) -> Result<(), crate::error::Error>
where
    R: BufRead,
{
    for line in reader.lines() {
        let line = line.map_err(crate::error::Error::ReadingInput)?;

        let event = match crate::event::Event::parse_line(&line) {
            Ok(event) => {
                tracing::debug!(?event, "Parsed page event");
                event
            }
            Err(error) => {
                tracing::warn!(?error, ?line, "Failed to parse page event, ignoring");
                continue;
            }
        };

        if let Err(event) = event_sender.blocking_send(event) {
            tracing::info!(?event, "Page loop closed, shutting down input processing");
            return Ok(());
        }
    }

    tracing::info!("Input closed, no more page events");
    Ok(())
}

/// Spawns [`forward`] for stdin on its own thread.
///
/// A plain thread instead of a runtime task: a pending stdin read cannot be cancelled and
/// must not hold up runtime shutdown.
pub fn spawn_stdin(
    event_sender: tokio::sync::mpsc::Sender<crate::event::Event>,
) -> std::thread::JoinHandle<()> {
    std::thread::spawn(move || {
        if let Err(error) = forward(std::io::stdin().lock(), event_sender) {
            tracing::error!(?error, "Reading page events failed");
        }
    })
}
