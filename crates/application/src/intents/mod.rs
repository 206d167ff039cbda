//! Intent registration
//!
//! The plugin owns one intent, `NWSWeatherIntent`, with a keyword table and
//! a template list per locale. [`KeywordMatcher`] matches typed text against
//! them for hosts that do not bring their own matcher.

mod matcher;
mod tables;

use domain::Locale;
use serde::Serialize;

pub use matcher::KeywordMatcher;
pub use tables::{WEATHER_INTENT, WEATHER_INTENT_NAME};

/// Keywords recognized for one template slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordSlot {
    /// Slot name as referenced by templates, e.g. `DayKeyword`
    pub name: &'static str,
    /// Upper-case keyword phrases
    pub keywords: Vec<&'static str>,
}

/// Keyword table and templates for one locale
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleIntent {
    pub locale: Locale,
    pub keywords: Vec<KeywordSlot>,
    /// Templates with `{SlotName}` placeholders
    pub templates: Vec<&'static str>,
}

impl LocaleIntent {
    /// Keywords for a slot, `None` when the locale declares no such slot
    #[must_use]
    pub fn keywords_for(&self, slot: &str) -> Option<&[&'static str]> {
        self.keywords
            .iter()
            .find(|candidate| candidate.name == slot)
            .map(|candidate| candidate.keywords.as_slice())
    }
}

/// An intent with its per-locale tables
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntentDefinition {
    pub name: &'static str,
    pub locales: Vec<LocaleIntent>,
}

impl IntentDefinition {
    /// Tables for a locale
    #[must_use]
    pub fn locale(&self, locale: Locale) -> Option<&LocaleIntent> {
        self.locales.iter().find(|entry| entry.locale == locale)
    }
}

/// Slot names referenced by a template, in order of appearance
#[must_use]
pub fn template_slots(template: &str) -> Vec<&str> {
    let mut slots = Vec::new();
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            break;
        };
        slots.push(&after[..close]);
        rest = &after[close + 1..];
    }
    slots
}

/// Literal words of a template with its placeholders removed
#[must_use]
pub fn template_literals(template: &str) -> Vec<&str> {
    template
        .split_whitespace()
        .filter(|word| !(word.starts_with('{') && word.ends_with('}')))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_slots_in_order() {
        assert_eq!(
            template_slots("WHAT IS THE {ForecastKeyword} FOR {LocationKeyword} ON {DayKeyword}"),
            ["ForecastKeyword", "LocationKeyword", "DayKeyword"]
        );
        assert!(template_slots("NO SLOTS HERE").is_empty());
    }

    #[test]
    fn unterminated_placeholder_is_ignored() {
        assert_eq!(template_slots("{DayKeyword} {Broken"), ["DayKeyword"]);
    }

    #[test]
    fn template_literals_skip_placeholders() {
        assert_eq!(
            template_literals("WILL IT {WeatherTypeFutureKeyword} THIS {TimeKeyword}"),
            ["WILL", "IT", "THIS"]
        );
    }

    #[test]
    fn keywords_for_missing_slot() {
        let french = WEATHER_INTENT.locale(Locale::FrFr).unwrap();
        assert!(french.keywords_for("WeatherTypeFutureKeyword").is_none());
        assert_eq!(
            french
                .keywords_for("WeatherTypeTomorrowFutureKeyword")
                .map(<[_]>::is_empty),
            Some(true)
        );
    }
}
