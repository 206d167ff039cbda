//! Locale value object

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;

/// Locales the plugin ships keyword tables and messages for
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub enum Locale {
    /// American English
    #[default]
    EnUs,
    /// French (France)
    FrFr,
}

impl Locale {
    /// All supported locales, in registration order
    pub const ALL: [Self; 2] = [Self::EnUs, Self::FrFr];

    /// BCP 47 style tag (e.g. "en-US")
    #[must_use]
    pub const fn as_tag(&self) -> &'static str {
        match self {
            Self::EnUs => "en-US",
            Self::FrFr => "fr-FR",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

impl FromStr for Locale {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().replace('_', "-").to_lowercase().as_str() {
            "en-us" | "en" => Ok(Self::EnUs),
            "fr-fr" | "fr" => Ok(Self::FrFr),
            _ => Err(DomainError::UnsupportedLocale(s.to_string())),
        }
    }
}

impl TryFrom<String> for Locale {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.as_tag().to_string()
    }
}
