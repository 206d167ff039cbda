//! Handler wiring
//!
//! Builds the adapters from configuration and hands them to the
//! application's `WeatherHandler`.

use std::sync::Arc;

use application::WeatherHandler;
use application::error::ApplicationError;
use application::ports::{ProfileStorePort, SpeechOutputPort};
use tracing::info;

use crate::adapters::{GeocodingAdapter, WeatherAdapter};
use crate::config::{AppConfig, ProfileConfig};
use crate::persistence::TomlProfileStore;

/// Open the configured profile file
pub async fn open_profile_store(
    config: &ProfileConfig,
) -> Result<Arc<TomlProfileStore>, ApplicationError> {
    let store = TomlProfileStore::open(&config.path).await?;
    Ok(Arc::new(store))
}

/// Build a handler speaking through `speech` and caching in `profile`
pub fn build_weather_handler(
    config: &AppConfig,
    profile: Arc<dyn ProfileStorePort>,
    speech: Arc<dyn SpeechOutputPort>,
) -> Result<WeatherHandler, ApplicationError> {
    let user_agent = config.plugin.user_agent.as_str();

    let weather = WeatherAdapter::with_config(config.weather.to_client_config(user_agent))?;
    let geocoder = GeocodingAdapter::with_config(&config.geocoding.to_client_config(user_agent))?;

    info!(
        locale = %config.plugin.locale,
        weather_url = %config.weather.base_url,
        geocoding_url = %config.geocoding.base_url,
        "Weather handler ready"
    );

    Ok(WeatherHandler::new(
        config.plugin.locale,
        Arc::new(geocoder),
        Arc::new(weather),
        profile,
        speech,
    ))
}

#[cfg(test)]
mod tests {
    use domain::Locale;

    use super::*;
    use crate::adapters::RecordingSpeechAdapter;
    use crate::persistence::InMemoryProfileStore;

    #[test]
    fn builds_handler_for_configured_locale() {
        let mut config = AppConfig::default();
        config.plugin.locale = Locale::FrFr;

        let handler = build_weather_handler(
            &config,
            Arc::new(InMemoryProfileStore::new()),
            Arc::new(RecordingSpeechAdapter::new()),
        )
        .unwrap();

        assert_eq!(handler.locale(), Locale::FrFr);
    }

    #[tokio::test]
    async fn opens_profile_at_configured_path() {
        let dir = tempfile::tempdir().unwrap();
        let config = ProfileConfig {
            path: dir.path().join("profile.toml"),
        };
        let store = open_profile_store(&config).await.unwrap();
        assert_eq!(store.path(), config.path.as_path());
    }
}
