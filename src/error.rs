#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Setting up error reporting failed")]
    InstallingColorEyre(#[source] color_eyre::Report),

    #[error("Setting up logging failed")]
    SetupLogging(#[source] tracing::subscriber::SetGlobalDefaultError),

    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    #[error("Error computing local clock reading")]
    ClockReading(#[source] crate::pacific::LocalTimeError),

    #[error("Failed to build HTTP client")]
    HttpClient(#[source] reqwest::Error),

    #[error("Failed to read page events")]
    ReadingInput(#[source] std::io::Error),

    #[error("Subscription failed")]
    Subscribe(#[from] crate::subscribe::SubmitError),
}
