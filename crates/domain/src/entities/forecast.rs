//! Forecast periods and their per-date grouping

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Length of the `YYYY-MM-DD` prefix of an ISO 8601 timestamp
const DATE_KEY_LEN: usize = 10;

/// Format a calendar date the way forecast start times begin (`YYYY-MM-DD`)
#[must_use]
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// One named forecast segment, e.g. "Tonight" or "Monday Night"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastPeriod {
    /// ISO 8601 start time, e.g. `2026-10-17T18:00:00-05:00`
    pub start_time: String,
    /// Period name as issued by the forecast office
    pub name: String,
    /// Full text forecast for the period
    pub detailed_forecast: String,
}

impl ForecastPeriod {
    pub fn new(
        start_time: impl Into<String>,
        name: impl Into<String>,
        detailed_forecast: impl Into<String>,
    ) -> Self {
        Self {
            start_time: start_time.into(),
            name: name.into(),
            detailed_forecast: detailed_forecast.into(),
        }
    }

    /// Calendar date portion of the start time
    ///
    /// Start times shorter than ten characters are used whole.
    #[must_use]
    pub fn date_key(&self) -> &str {
        self.start_time
            .get(..DATE_KEY_LEN)
            .unwrap_or(&self.start_time)
    }
}

/// Spoken sentences grouped by calendar date
///
/// Dates iterate in ascending order; sentences within a date keep the order
/// in which they were pushed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ForecastByDate {
    days: BTreeMap<String, Vec<String>>,
}

impl ForecastByDate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Group periods by the date of their start time, rendering each with `sentence`
    pub fn group<F>(periods: &[ForecastPeriod], mut sentence: F) -> Self
    where
        F: FnMut(&ForecastPeriod) -> String,
    {
        let mut grouped = Self::new();
        for period in periods {
            grouped.push(period.date_key(), sentence(period));
        }
        grouped
    }

    /// Append a sentence to a date's list
    pub fn push(&mut self, date: impl Into<String>, sentence: impl Into<String>) {
        self.days
            .entry(date.into())
            .or_default()
            .push(sentence.into());
    }

    /// Sentences for one date, if the forecast covers it
    #[must_use]
    pub fn get(&self, date: &str) -> Option<&[String]> {
        self.days.get(date).map(Vec::as_slice)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Number of distinct dates
    #[must_use]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Dates in ascending order
    pub fn dates(&self) -> impl Iterator<Item = &str> {
        self.days.keys().map(String::as_str)
    }

    /// `(date, sentences)` pairs in ascending date order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.days
            .iter()
            .map(|(date, sentences)| (date.as_str(), sentences.as_slice()))
    }
}
