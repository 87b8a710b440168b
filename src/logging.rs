use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::Layer;

/// Logs go to stderr, stdout belongs to the page.
///
/// `RUST_LOG` directives apply unless `-v`/`-q` were passed explicitly.
pub fn setup<Level>(
    verbosity: clap_verbosity_flag::Verbosity<Level>,
) -> Result<(), crate::error::Error>
where
    Level: clap_verbosity_flag::LogLevel,
{
    let default_directive = tracing_subscriber::filter::Directive::from(verbosity.tracing_level_filter());
    let mut env_filter = tracing_subscriber::EnvFilter::builder()
        .with_default_directive(default_directive.clone())
        .from_env_lossy();

    if verbosity.is_present() {
        env_filter = env_filter.add_directive(default_directive);
    }

    let subscriber = tracing_subscriber::registry::Registry::default().with(
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_filter(env_filter),
    );

    tracing::subscriber::set_global_default(subscriber).map_err(crate::error::Error::SetupLogging)
}
