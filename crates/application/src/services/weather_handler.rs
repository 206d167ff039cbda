//! Weather intent handler
//!
//! Entry point the host calls with a matched `NWSWeatherIntent`: reads the
//! configured address, resolves its grid cell, fetches the forecast and
//! speaks the selected lines.

use std::{fmt, sync::Arc};

use chrono::{Local, NaiveDate};
use domain::{Intent, Locale, ProfilePath};
use serde_json::Value;
use tracing::{debug, info, instrument};

use super::{LocationResolver, format_forecast, select_lines};
use crate::{
    error::ApplicationError,
    messages::Messages,
    ports::{GeocodingPort, ProfileStorePort, SpeechOutputPort, WeatherPort},
};

/// Handles `NWSWeatherIntent` for one locale
pub struct WeatherHandler {
    locale: Locale,
    resolver: LocationResolver,
    weather: Arc<dyn WeatherPort>,
    profile: Arc<dyn ProfileStorePort>,
    speech: Arc<dyn SpeechOutputPort>,
}

impl fmt::Debug for WeatherHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherHandler")
            .field("locale", &self.locale)
            .finish_non_exhaustive()
    }
}

impl WeatherHandler {
    pub fn new(
        locale: Locale,
        geocoder: Arc<dyn GeocodingPort>,
        weather: Arc<dyn WeatherPort>,
        profile: Arc<dyn ProfileStorePort>,
        speech: Arc<dyn SpeechOutputPort>,
    ) -> Self {
        Self {
            locale,
            resolver: LocationResolver::new(geocoder, Arc::clone(&weather), Arc::clone(&profile)),
            weather,
            profile,
            speech,
        }
    }

    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    #[must_use]
    pub const fn messages(&self) -> &'static Messages {
        Messages::for_locale(self.locale)
    }

    /// Answer an intent using the local calendar date
    pub async fn handle(&self, intent: &Intent) -> Result<(), ApplicationError> {
        self.handle_on(intent, Local::now().date_naive()).await
    }

    /// Answer an intent as if today were `today`
    #[instrument(skip(self, intent), fields(locale = %self.locale, input = %intent.input))]
    pub async fn handle_on(&self, intent: &Intent, today: NaiveDate) -> Result<(), ApplicationError> {
        let messages = self.messages();

        let Some(address) = self.configured_address().await? else {
            info!("No address configured");
            return self.speech.say(messages.no_location).await;
        };

        let grid = self.resolver.resolve(&address).await?;
        let periods = self.weather.get_forecast(&grid).await?;
        debug!(%grid, periods = periods.len(), "Forecast fetched");

        let forecast = format_forecast(&periods, messages);
        if forecast.is_empty() {
            self.speech.say(messages.unavailable).await?;
        }

        for line in select_lines(&forecast, today, &intent.input, messages) {
            self.speech.say(&line).await?;
        }
        Ok(())
    }

    /// The configured address, `None` when unset or blank
    async fn configured_address(&self) -> Result<Option<String>, ApplicationError> {
        let path = ProfilePath::address();
        match self.profile.get(&path).await? {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(address)) if address.trim().is_empty() => Ok(None),
            Some(Value::String(address)) => Ok(Some(address)),
            Some(other) => Err(ApplicationError::corrupt_profile(
                &path,
                format!("expected an address string, found {other}"),
            )),
        }
    }
}
