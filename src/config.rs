use std::time::Duration;

#[derive(Debug, serde::Deserialize)]
pub struct Config {
    #[serde(default)]
    pub clock: ClockConfig,

    #[serde(default)]
    pub slideshow: SlideshowConfig,

    pub subscribe: SubscribeConfig,

    pub preview: Option<PreviewConfig>,
}

#[derive(Debug, serde::Deserialize)]
pub struct ClockConfig {
    #[serde(with = "humantime_serde", default = "default_clock_tick")]
    pub tick: Duration,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            tick: default_clock_tick(),
        }
    }
}

fn default_clock_tick() -> Duration {
    Duration::from_secs(1)
}

#[derive(Debug, serde::Deserialize)]
pub struct SlideshowConfig {
    #[serde(with = "humantime_serde", default = "default_slideshow_interval")]
    pub interval: Duration,

    /// Image references in display order.
    #[serde(default)]
    pub slides: Vec<String>,
}

impl Default for SlideshowConfig {
    fn default() -> Self {
        Self {
            interval: default_slideshow_interval(),
            slides: Vec::new(),
        }
    }
}

fn default_slideshow_interval() -> Duration {
    Duration::from_secs(2)
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct SubscribeConfig {
    pub endpoint: url::Url,

    #[serde(default)]
    pub mode: SubmitMode,

    #[serde(with = "humantime_serde", default = "default_subscribe_timeout")]
    pub timeout: Duration,
}

fn default_subscribe_timeout() -> Duration {
    Duration::from_secs(10)
}

/// How `email` and `send_first_issue` travel to the endpoint.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmitMode {
    /// `POST` with a JSON body.
    #[default]
    Json,

    /// `GET` with URL-encoded query parameters.
    Query,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct PreviewConfig {
    pub url: url::Url,
}

impl Config {
    pub async fn load(path: &camino::Utf8Path) -> Result<Self, ConfigError> {
        let config_str =
            tokio::fs::read_to_string(path)
                .await
                .map_err(|source| ConfigError::ReadingFile {
                    path: path.to_path_buf(),
                    source,
                })?;

        Self::parse(&config_str)
    }

    pub fn parse(config_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(config_str).map_err(ConfigError::ParsingConfig)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (field, duration) in [
            ("clock.tick", self.clock.tick),
            ("slideshow.interval", self.slideshow.interval),
            ("subscribe.timeout", self.subscribe.timeout),
        ] {
            if duration.is_zero() {
                return Err(ConfigError::ZeroDuration { field });
            }
        }

        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read configuration file from path '{}'", .path)]
    ReadingFile {
        path: camino::Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    ParsingConfig(#[from] toml::de::Error),

    #[error("'{}' must be longer than zero", .field)]
    ZeroDuration { field: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_config() {
        let s = include_str!("../config.example.toml");
        let config = Config::parse(s).unwrap();

        assert_eq!(config.clock.tick, Duration::from_secs(1));
        assert_eq!(config.slideshow.interval, Duration::from_secs(2));
        assert_eq!(config.slideshow.slides.len(), 3);
        assert_eq!(config.subscribe.mode, SubmitMode::Json);
        assert_eq!(config.subscribe.timeout, Duration::from_secs(10));
        assert!(config.preview.is_some());
    }

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = Config::parse(
            r#"
            [subscribe]
            endpoint = "https://news.example.com/subscribe"
            mode = "query"
            "#,
        )
        .unwrap();

        assert_eq!(config.clock.tick, Duration::from_secs(1));
        assert_eq!(config.slideshow.interval, Duration::from_secs(2));
        assert!(config.slideshow.slides.is_empty());
        assert_eq!(config.subscribe.mode, SubmitMode::Query);
        assert!(config.preview.is_none());
    }

    #[test]
    fn test_zero_interval_is_rejected() {
        let error = Config::parse(
            r#"
            [slideshow]
            interval = "0s"

            [subscribe]
            endpoint = "https://news.example.com/subscribe"
            "#,
        )
        .unwrap_err();

        insta::assert_snapshot!(error, @"'slideshow.interval' must be longer than zero");
    }

    #[test]
    fn test_missing_endpoint_is_rejected() {
        let error = Config::parse("[subscribe]\nmode = \"json\"\n").unwrap_err();
        assert!(matches!(error, ConfigError::ParsingConfig(_)));
    }
}
