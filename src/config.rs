use std::str::FromStr;
use std::time::Duration;

use crate::error::ConfigError;
use crate::view::SortOption;

pub const DEFAULT_IMAGE: &str = "https://placehold.co/600x400";

/// Runtime settings for a catalog session.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogConfig {
    /// Quiet period before a search keystroke reaches the view.
    pub debounce: Duration,
    /// Simulated latency of the initial catalog fetch.
    pub load_delay: Duration,
    /// Capacity of the service request channel.
    pub channel_buffer: usize,
    pub default_image: String,
    pub default_sort: SortOption,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(500),
            load_delay: Duration::from_millis(1000),
            channel_buffer: 32,
            default_image: DEFAULT_IMAGE.to_string(),
            default_sort: SortOption::PriceAsc,
        }
    }
}

impl CatalogConfig {
    /// Defaults overridden by `CATALOG_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env) but reading from an arbitrary source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(ms) = parse::<u64>(&lookup, "CATALOG_DEBOUNCE_MS")? {
            config.debounce = Duration::from_millis(ms);
        }
        if let Some(ms) = parse::<u64>(&lookup, "CATALOG_LOAD_DELAY_MS")? {
            config.load_delay = Duration::from_millis(ms);
        }
        if let Some(buffer) = parse::<usize>(&lookup, "CATALOG_CHANNEL_BUFFER")? {
            if buffer == 0 {
                return Err(ConfigError::InvalidValue {
                    key: "CATALOG_CHANNEL_BUFFER",
                    value: buffer.to_string(),
                });
            }
            config.channel_buffer = buffer;
        }
        if let Some(image) = lookup("CATALOG_DEFAULT_IMAGE") {
            config.default_image = image;
        }
        if let Some(sort) = parse::<SortOption>(&lookup, "CATALOG_DEFAULT_SORT")? {
            config.default_sort = sort;
        }

        Ok(config)
    }
}

fn parse<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<T>, ConfigError> {
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { key, value: raw }),
    }
}
