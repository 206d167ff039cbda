//! Keyword and template tables for `NWSWeatherIntent`

use std::sync::LazyLock;

use domain::Locale;

use super::{IntentDefinition, KeywordSlot, LocaleIntent};

/// Name the host registers the handler under
pub const WEATHER_INTENT_NAME: &str = "NWSWeatherIntent";

const WEEKDAYS_EN: [&str; 7] = [
    "SUNDAY",
    "MONDAY",
    "TUESDAY",
    "WEDNESDAY",
    "THURSDAY",
    "FRIDAY",
    "SATURDAY",
];

const WEEKDAYS_FR: [&str; 7] = [
    "DIMANCHE", "LUNDI", "MARDI", "MERCREDI", "JEUDI", "VENDREDI", "SAMEDI",
];

const LOCATIONS: [&str; 3] = ["SEATTLE", "SAN FRANCISCO", "TOKYO"];

fn slot(name: &'static str, keywords: impl IntoIterator<Item = &'static str>) -> KeywordSlot {
    KeywordSlot {
        name,
        keywords: keywords.into_iter().collect(),
    }
}

fn english() -> LocaleIntent {
    LocaleIntent {
        locale: Locale::EnUs,
        keywords: vec![
            slot(
                "ForecastKeyword",
                ["WEATHER", "FORECAST", "WEATHER REPORT", "WEATHER FORECAST"],
            ),
            slot(
                "WeatherTypePresentKeyword",
                ["SNOWING", "RAINING", "WINDY", "SLEETING", "SUNNY"],
            ),
            slot(
                "WeatherTypeFutureKeyword",
                ["SNOW", "RAIN", "BE WINDY", "SLEET", "BE SUNNY"],
            ),
            slot("LocationKeyword", LOCATIONS),
            slot("TimeKeyword", ["MORNING", "AFTERNOON", "EVENING", "NIGHT"]),
            slot(
                "DayKeyword",
                ["TODAY", "TOMORROW"].into_iter().chain(WEEKDAYS_EN),
            ),
        ],
        templates: vec![
            "WHAT IS THE {ForecastKeyword} IN {LocationKeyword}",
            "WHAT IS THE {ForecastKeyword} FOR {DayKeyword}",
            "WHAT IS THE {ForecastKeyword} FOR {LocationKeyword}",
            "WHAT IS THE {ForecastKeyword} FOR {LocationKeyword} ON {DayKeyword}",
            "WHAT IS THE {ForecastKeyword} FOR {LocationKeyword} ON {DayKeyword} {TimeKeyword}",
            "IS IT {WeatherTypePresentKeyword} IN {LocationKeyword}",
            "WILL IT {WeatherTypeFutureKeyword} THIS {TimeKeyword}",
            "WILL IT {WeatherTypeFutureKeyword} {DayKeyword}",
            "WILL IT {WeatherTypeFutureKeyword} {DayKeyword} {TimeKeyword}",
            "WHEN WILL IT {WeatherTypeFutureKeyword}",
            "WHEN WILL IT {WeatherTypeFutureKeyword} IN {LocationKeyword}",
        ],
    }
}

// Some templates reference slots without a keyword list; they never match.
fn french() -> LocaleIntent {
    LocaleIntent {
        locale: Locale::FrFr,
        keywords: vec![
            slot(
                "WeatherTypePresentKeyword",
                ["IL NEIGE", "IL PLUIE", "IL VENT"],
            ),
            slot(
                "WeatherTypeTodayFutureKeyword",
                [
                    "SERA-T-IL NEIGE",
                    "PLEUVRA-T-IL",
                    "DU VENT",
                    "SERA-CE VENTEUX",
                    "SERA-T-IL DU VENT",
                    "SERA-T-IL ENSOLEILLÉ",
                ],
            ),
            slot("WeatherTypeTomorrowFutureKeyword", Vec::new()),
            slot("LocationKeyword", LOCATIONS),
            slot("TimeKeyword", ["MATIN", "MIDI", "SOIR"]),
            slot(
                "DayKeyword",
                ["AUJOURD'HUI", "DEMAIN"].into_iter().chain(WEEKDAYS_FR),
            ),
        ],
        templates: vec![
            "QUELLE EST LA MÉTÉO À {LocationKeyword}",
            "QUELLES SONT LES PRÉVISIONS POUR {DayKeyword}",
            "QUELLES SONT LES PRÉVISIONS POUR {LocationKeyword}",
            "QUELLES SONT LES PRÉVISIONS POUR {LocationKeyword} {DayKeyword}",
            "QUELLES SONT LES PRÉVISIONS POUR {LocationKeyword} LE {DayKeyword} {TimeKeyword}",
            "{WeatherTypePresentKeyword} À {LocationKeyword}",
            "{WeatherTypeFutureKeyword} CET {TodayTimeKeyword}",
            "{WeatherTypeFutureKeyword} {DayKeyword}",
            "{WeatherTypeFutureKeyword} {DayKeyword} {TimeKeyword}",
            "{WeatherTypeFutureKeyword}",
            "{WeatherTypeFutureKeyword} À {LocationKeyword}",
        ],
    }
}

/// `NWSWeatherIntent` for every supported locale, built on first use
pub static WEATHER_INTENT: LazyLock<IntentDefinition> = LazyLock::new(|| IntentDefinition {
    name: WEATHER_INTENT_NAME,
    locales: vec![english(), french()],
});
