//! System locale detection

use tracing::debug;
use umweltzone_domain::Locale;

/// Environment variables consulted for the locale, in priority order.
const LOCALE_VARIABLES: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

/// Detect the active locale from the process environment.
///
/// Takes the first of `LC_ALL`, `LC_MESSAGES`, `LANG` that is set and
/// parses as a locale (`C` and `POSIX` do not). Falls back to `en_US`.
pub fn detect_locale() -> Locale {
    detect_locale_with(|name| std::env::var(name).ok())
}

pub(crate) fn detect_locale_with(lookup: impl Fn(&str) -> Option<String>) -> Locale {
    for name in LOCALE_VARIABLES {
        let Some(value) = lookup(name).filter(|v| !v.is_empty()) else {
            continue;
        };
        match value.parse::<Locale>() {
            Ok(locale) => {
                debug!("Using locale {} from {}", locale, name);
                return locale;
            }
            Err(_) => debug!("Ignoring {}={:?}", name, value),
        }
    }
    Locale::default()
}
