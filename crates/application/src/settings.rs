//! Settings descriptor
//!
//! Lists the profile fields the host should ask the user for.

use domain::{Locale, ProfilePath};
use serde::Serialize;

use crate::messages::Messages;

/// One user-editable profile field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettingField {
    pub path: ProfilePath,
    pub title: &'static str,
    pub description: &'static str,
}

/// Settings in display order: just the home address
#[must_use]
pub fn settings(locale: Locale) -> Vec<SettingField> {
    let messages = Messages::for_locale(locale);
    vec![SettingField {
        path: ProfilePath::address(),
        title: messages.address_title,
        description: messages.address_description,
    }]
}
