use tokio_util::sync::CancellationToken;

mod cli;
mod clock;
mod config;
mod error;
mod event;
mod input;
mod konst;
mod landing;
mod logging;
mod pacific;
mod page;
mod program;
mod slideshow;
mod subscribe;

#[tokio::main(flavor = "current_thread")]
async fn main() -> color_eyre::eyre::Result<()> {
    setup_panic();
    color_eyre::install().map_err(crate::error::Error::InstallingColorEyre)?;
    let cli = <crate::cli::Cli as clap::Parser>::parse();
    crate::logging::setup(cli.verbosity)?;
    let cfg = crate::config::Config::load(&cli.config).await?;

    match cli.command {
        cli::Command::Run => {
            run(cfg).await?;
        }
        cli::Command::VerifyConfig => {
            tracing::info!("Configuration verified");
        }
        cli::Command::Now => {
            now()?;
        }
        cli::Command::Subscribe { email } => {
            subscribe(cfg, &email).await?;
        }
    }

    Ok(())
}

fn setup_panic() {
    human_panic::setup_panic!(human_panic::Metadata::new(
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    )
    .authors(env!("CARGO_PKG_AUTHORS")));
}

fn cancel_on_ctrl_c(cancellation_token: CancellationToken) {
    tokio::task::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                tracing::info!("Ctrl-C received, shutting down");
                cancellation_token.cancel();
            }
            Err(error) => tracing::error!(?error, "Failed to listen for Ctrl-C"),
        }
    });
}

async fn run(config: crate::config::Config) -> Result<(), crate::error::Error> {
    let page = crate::page::TerminalPage::new(std::io::stdout(), config.slideshow.slides.clone());
    let mut landing = crate::landing::Landing::new(&config, page)?;

    let (event_sender, event_receiver) = tokio::sync::mpsc::channel::<event::Event>(16);
    let cancellation_token = CancellationToken::new();
    cancel_on_ctrl_c(cancellation_token.clone());
    crate::input::spawn_stdin(event_sender);

    tracing::info!(
        slides = config.slideshow.slides.len(),
        endpoint = %config.subscribe.endpoint,
        "Page loaded"
    );
    landing.run(event_receiver, cancellation_token).await
}

fn now() -> Result<(), crate::error::Error> {
    let reading = crate::clock::ClockReading::at(time::OffsetDateTime::now_utc())
        .map_err(crate::error::Error::ClockReading)?;

    println!("{}", reading.date_text());
    println!("{}", reading.greeting_text());
    println!("{}", reading.time_text());
    Ok(())
}

async fn subscribe(config: crate::config::Config, email: &str) -> Result<(), crate::error::Error> {
    let client = crate::subscribe::HttpSubscriptionClient::new(&config.subscribe)
        .map_err(crate::error::Error::HttpClient)?;
    let mut page = crate::page::TerminalPage::new(std::io::stdout(), Vec::new());
    let mut form = crate::subscribe::SubscriptionForm::new();

    let cancellation_token = CancellationToken::new();
    cancel_on_ctrl_c(cancellation_token.clone());

    form.handle_submit(&mut page, &client, email, &cancellation_token)
        .await?;
    Ok(())
}
