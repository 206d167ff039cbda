//! Response selector
//!
//! Chooses which of the grouped forecast sentences answer the request.

use chrono::NaiveDate;
use domain::{ForecastByDate, date_key};

use crate::messages::Messages;

/// Lines to speak for a request
///
/// The first rule that applies wins:
///
/// 1. the text mentions "today": today's sentences, if the forecast has them
/// 2. the text mentions "tomorrow": tomorrow's sentences, if present
/// 3. otherwise every date's sentences in ascending date order
///
/// When none of that produced a line, the fallback remark is the only line.
#[must_use]
pub fn select_lines(
    forecast: &ForecastByDate,
    today: NaiveDate,
    text: &str,
    messages: &Messages,
) -> Vec<String> {
    let text = text.replace('\u{2019}', "'").to_lowercase();

    let mut lines = Vec::new();
    if text.contains(messages.today) {
        if let Some(sentences) = forecast.get(&date_key(today)) {
            lines.extend_from_slice(sentences);
        }
    } else if text.contains(messages.tomorrow) {
        let sentences = today
            .succ_opt()
            .and_then(|tomorrow| forecast.get(&date_key(tomorrow)));
        if let Some(sentences) = sentences {
            lines.extend_from_slice(sentences);
        }
    } else {
        for (_, sentences) in forecast.iter() {
            lines.extend_from_slice(sentences);
        }
    }

    if lines.is_empty() {
        lines.push(messages.fallback.to_string());
    }
    lines
}
