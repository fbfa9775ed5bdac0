//! Number formatting conventions of a locale.
//!
//! Only the two symbols the formatters need are modelled: the decimal
//! separator and the digit-grouping separator.

/// Decimal and grouping symbols for one locale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Locale {
    pub decimal_separator: char,
    /// `None` disables thousands grouping
    pub grouping_separator: Option<char>,
}

impl Locale {
    pub const EN_US: Locale = Locale::new('.', Some(','));
    pub const EN_GB: Locale = Locale::new('.', Some(','));
    pub const NL_BE: Locale = Locale::new(',', Some('.'));
    pub const NL_NL: Locale = Locale::new(',', Some('.'));
    pub const DE_DE: Locale = Locale::new(',', Some('.'));
    /// French groups with a no-break space
    pub const FR_FR: Locale = Locale::new(',', Some('\u{a0}'));

    pub const fn new(decimal_separator: char, grouping_separator: Option<char>) -> Self {
        Locale {
            decimal_separator,
            grouping_separator,
        }
    }

    /// Look up a locale by POSIX (`nl_BE.UTF-8`, `de_DE@euro`) or BCP-47
    /// (`nl-BE`) tag.
    ///
    /// Unknown regions fall back to the language's usual convention; unknown
    /// languages return `None`. `C` and `POSIX` map to [`Locale::EN_US`].
    pub fn from_tag(tag: &str) -> Option<Locale> {
        // strip codeset and modifier
        let tag = tag.split(['.', '@']).next().unwrap_or_default();
        let mut parts = tag.split(['_', '-']);
        let language = parts.next().unwrap_or_default().to_ascii_lowercase();
        let region = parts.next().map(|r| r.to_ascii_uppercase());

        let locale = match (language.as_str(), region.as_deref()) {
            ("c" | "posix", None) => Locale::EN_US,
            ("en", Some("GB")) => Locale::EN_GB,
            ("en", _) => Locale::EN_US,
            ("nl", Some("BE")) => Locale::NL_BE,
            ("nl", _) => Locale::NL_NL,
            ("fr", Some("BE")) => Locale::NL_BE,
            ("fr", _) => Locale::FR_FR,
            ("de", _) => Locale::DE_DE,
            _ => return None,
        };
        Some(locale)
    }

    /// The ambient locale of the process, resolved from `LC_ALL`, then
    /// `LC_NUMERIC`, then `LANG`. Falls back to [`Locale::EN_US`].
    pub fn from_env() -> Locale {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same resolution as [`from_env`](Self::from_env) over any variable
    /// source. Empty variables are skipped, as POSIX requires.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Locale {
        ["LC_ALL", "LC_NUMERIC", "LANG"]
            .into_iter()
            .filter_map(|name| lookup(name).filter(|v| !v.is_empty()))
            .next()
            .and_then(|tag| Locale::from_tag(&tag))
            .unwrap_or_default()
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::EN_US
    }
}
