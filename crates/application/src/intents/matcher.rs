//! Keyword intent matcher
//!
//! Finds every keyword of the active locale that appears in the input as a
//! whole-word phrase, then checks the templates against the filled slots.

use domain::{Intent, Locale};
use tracing::{debug, instrument};

use super::{LocaleIntent, WEATHER_INTENT, template_literals, template_slots};
use crate::error::ApplicationError;

/// Matches typed or transcribed text against one locale's tables
#[derive(Debug, Clone, Copy)]
pub struct KeywordMatcher {
    intent_name: &'static str,
    tables: &'static LocaleIntent,
}

impl KeywordMatcher {
    /// Matcher for `NWSWeatherIntent` in a locale
    pub fn new(locale: Locale) -> Result<Self, ApplicationError> {
        let tables = WEATHER_INTENT.locale(locale).ok_or_else(|| {
            ApplicationError::Configuration(format!("no intent tables for {locale}"))
        })?;
        Ok(Self {
            intent_name: WEATHER_INTENT.name,
            tables,
        })
    }

    #[must_use]
    pub fn locale(&self) -> Locale {
        self.tables.locale
    }

    /// Match an utterance, `None` when it is not about the weather
    #[instrument(skip(self), fields(locale = %self.tables.locale))]
    pub fn match_input(&self, input: &str) -> Option<Intent> {
        let words = tokenize(input);
        if words.is_empty() {
            return None;
        }

        let mut intent = Intent::new(self.intent_name, input);
        for slot in &self.tables.keywords {
            for keyword in &slot.keywords {
                if contains_phrase(&words, &tokenize(keyword)) {
                    intent = intent.with_match(slot.name, *keyword);
                }
            }
        }

        let template = self.best_template(&words, &intent);
        let triggered = self.tables.keywords.iter().any(|slot| {
            is_trigger_slot(slot.name) && !intent.matches_for(slot.name).is_empty()
        });

        debug!(?template, triggered, slots = intent.matches.len(), "Keyword match");

        (template.is_some() || triggered).then_some(intent)
    }

    /// Highest-scoring template whose literal words are present and whose
    /// slots are all filled
    fn best_template(&self, words: &[String], intent: &Intent) -> Option<&'static str> {
        self.tables
            .templates
            .iter()
            .filter_map(|template| {
                let slots = template_slots(template);
                let literals = template_literals(template);
                let complete = slots
                    .iter()
                    .all(|slot| !intent.matches_for(slot).is_empty())
                    && literals
                        .iter()
                        .all(|literal| contains_phrase(words, &tokenize(literal)));
                complete.then_some((slots.len() + literals.len(), *template))
            })
            .max_by_key(|(score, _)| *score)
            .map(|(_, template)| template)
    }
}

/// Slots whose keywords alone mark an utterance as a weather question
fn is_trigger_slot(name: &str) -> bool {
    name.starts_with("Forecast") || name.starts_with("WeatherType")
}

/// Upper-case words; punctuation other than apostrophes and hyphens separates words
fn tokenize(text: &str) -> Vec<String> {
    text.replace('\u{2019}', "'")
        .to_uppercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '\'' || c == '-' {
                c
            } else {
                ' '
            }
        })
        .collect::<String>()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

fn contains_phrase(words: &[String], phrase: &[String]) -> bool {
    !phrase.is_empty() && words.windows(phrase.len()).any(|window| window == phrase)
}
