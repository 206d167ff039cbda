//! Localized message catalog
//!
//! Every sentence the plugin speaks, plus the words the response selector
//! looks for, exists once per supported locale.

use domain::Locale;

/// Phrases for one locale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Messages {
    /// Word that selects today's forecast (lowercase)
    pub today: &'static str,
    /// Word that selects tomorrow's forecast (lowercase)
    pub tomorrow: &'static str,
    /// Text between a period name and its detailed forecast
    pub forecast_joiner: &'static str,
    /// Spoken when the forecast has no periods
    pub unavailable: &'static str,
    /// Spoken when nothing else was said
    pub fallback: &'static str,
    /// Spoken when no address is configured
    pub no_location: &'static str,
    /// Title of the address setting
    pub address_title: &'static str,
    /// Description of the address setting
    pub address_description: &'static str,
}

const EN_US: Messages = Messages {
    today: "today",
    tomorrow: "tomorrow",
    forecast_joiner: " the forecast is calling for ",
    unavailable: "Sorry, forecast information is not currently available",
    fallback: "I don't know. Why don't you look out the window?",
    no_location: "I have no location on record. Please set your city and state.",
    address_title: "Please enter your city and state",
    address_description: "Please enter your city and state, which will be used to provide weather information",
};

const FR_FR: Messages = Messages {
    today: "aujourd'hui",
    tomorrow: "demain",
    forecast_joiner: " les prévisions annoncent ",
    unavailable: "Désolé, les prévisions météo ne sont pas disponibles pour le moment",
    fallback: "Je ne sais pas. Pourquoi ne pas regarder par la fenêtre ?",
    no_location: "Je n'ai aucun lieu enregistré. Veuillez indiquer votre ville et votre région.",
    address_title: "Veuillez saisir votre ville et votre région",
    address_description: "Veuillez saisir votre ville et votre région, qui serviront à fournir les informations météo",
};

impl Messages {
    /// Catalog for a locale
    #[must_use]
    pub const fn for_locale(locale: Locale) -> &'static Self {
        match locale {
            Locale::EnUs => &EN_US,
            Locale::FrFr => &FR_FR,
        }
    }

    /// "<period name> the forecast is calling for <detailed forecast>"
    #[must_use]
    pub fn period_sentence(&self, name: &str, detailed_forecast: &str) -> String {
        format!("{name}{}{detailed_forecast}", self.forecast_joiner)
    }
}
