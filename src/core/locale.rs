use std::env;

use chrono::Locale;

use crate::types::errors::LocaleError;

// POSIX precedence: the first non-empty variable wins
const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_TIME", "LANG"];

/// Resolves a locale name like `"en_US"`, `"de-DE"` or `"fr_FR.UTF-8@euro"`.
pub(crate) fn resolve(name: &str) -> Result<Locale, LocaleError> {
    // drop codeset and modifier: language[_territory][.codeset][@modifier]
    let base: &str = name
        .split(['.', '@'])
        .next()
        .unwrap_or_default()
        .trim();

    if base == "C" || base == "POSIX" {
        return Ok(Locale::POSIX);
    }

    let normalized: String = base.replace('-', "_");
    Locale::try_from(normalized.as_str()).map_err(|_| LocaleError::Unknown {
        name: name.to_string(),
    })
}

/// Reads the process locale, falling back to POSIX.
pub(crate) fn from_env() -> Locale {
    from_vars(|key| env::var(key).ok())
}

pub(crate) fn from_vars<F>(lookup: F) -> Locale
where
    F: Fn(&str) -> Option<String>,
{
    let Some((key, value)) = LOCALE_VARS
        .iter()
        .find_map(|key| lookup(key).filter(|v| !v.is_empty()).map(|v| (*key, v)))
    else {
        log::trace!("no locale configured, using POSIX");
        return Locale::POSIX;
    };

    match resolve(&value) {
        Ok(locale) => {
            log::trace!("resolved locale {locale:?} from {key}");
            locale
        }
        Err(err) => {
            log::warn!("{err} (from {key}), using POSIX");
            Locale::POSIX
        }
    }
}
