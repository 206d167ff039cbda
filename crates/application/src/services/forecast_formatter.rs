//! Forecast formatter
//!
//! Turns forecast periods into spoken sentences grouped by calendar date.

use domain::{ForecastByDate, ForecastPeriod};

use crate::messages::Messages;

/// Group periods by the date of their start time
///
/// Each period becomes "<name> the forecast is calling for <detailed
/// forecast>" in the catalog's language. Within a date the API order is kept.
#[must_use]
pub fn format_forecast(periods: &[ForecastPeriod], messages: &Messages) -> ForecastByDate {
    ForecastByDate::group(periods, |period| {
        messages.period_sentence(&period.name, &period.detailed_forecast)
    })
}
