//! Domain entities - Forecast data and recognized utterances

mod forecast;
mod intent;

pub use forecast::{ForecastByDate, ForecastPeriod, date_key};
pub use intent::Intent;
