//! Built-in English language strings.

use crate::host::Localizer;

/// Default string component for the filter's strings.
pub const COMPONENT: &str = "filter_activitycompletionimage";

/// Looks up a built-in English string.
pub fn en(key: &str) -> Option<&'static str> {
    match key {
        "pluginname" => Some("Activity completion image"),
        "filtername" => Some("Activity completion image"),
        "incomplete" => Some("Incomplete"),
        "unavailable" => Some("Unavailable"),
        "completed" => Some("Completed"),
        _ => None,
    }
}

/// Marker the platform renders for a string it cannot find.
pub fn missing(key: &str) -> String {
    format!("[[{key}]]")
}

/// Localizer backed only by the built-in English strings.
///
/// The component is ignored; every key resolves against the same table.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishStrings;

impl Localizer for EnglishStrings {
    fn localize(&self, key: &str, _component: &str) -> String {
        en(key).map(str::to_string).unwrap_or_else(|| missing(key))
    }
}
