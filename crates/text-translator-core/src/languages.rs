//! Static table of languages supported by the translation provider.
//!
//! The table mirrors the provider's own language list and is treated as
//! read-only, process-wide data. Codes are ISO 639-1-like (with regional
//! variants such as `zh-cn`); display names use the provider's lowercase
//! spelling. Entries are sorted by code so membership checks can binary
//! search.

use serde_json::{Map, Value};

/// Display name returned for codes absent from the table.
pub const UNKNOWN_LANGUAGE: &str = "Unknown";

/// Language code -> display name, sorted by code.
pub static LANGUAGES: &[(&str, &str)] = &[
    ("af", "afrikaans"),
    ("am", "amharic"),
    ("ar", "arabic"),
    ("az", "azerbaijani"),
    ("be", "belarusian"),
    ("bg", "bulgarian"),
    ("bn", "bengali"),
    ("bs", "bosnian"),
    ("ca", "catalan"),
    ("ceb", "cebuano"),
    ("co", "corsican"),
    ("cs", "czech"),
    ("cy", "welsh"),
    ("da", "danish"),
    ("de", "german"),
    ("el", "greek"),
    ("en", "english"),
    ("eo", "esperanto"),
    ("es", "spanish"),
    ("et", "estonian"),
    ("eu", "basque"),
    ("fa", "persian"),
    ("fi", "finnish"),
    ("fr", "french"),
    ("fy", "frisian"),
    ("ga", "irish"),
    ("gd", "scots gaelic"),
    ("gl", "galician"),
    ("gu", "gujarati"),
    ("ha", "hausa"),
    ("haw", "hawaiian"),
    ("he", "hebrew"),
    ("hi", "hindi"),
    ("hmn", "hmong"),
    ("hr", "croatian"),
    ("ht", "haitian creole"),
    ("hu", "hungarian"),
    ("hy", "armenian"),
    ("id", "indonesian"),
    ("ig", "igbo"),
    ("is", "icelandic"),
    ("it", "italian"),
    ("iw", "hebrew"),
    ("ja", "japanese"),
    ("jw", "javanese"),
    ("ka", "georgian"),
    ("kk", "kazakh"),
    ("km", "khmer"),
    ("kn", "kannada"),
    ("ko", "korean"),
    ("ku", "kurdish (kurmanji)"),
    ("ky", "kyrgyz"),
    ("la", "latin"),
    ("lb", "luxembourgish"),
    ("lo", "lao"),
    ("lt", "lithuanian"),
    ("lv", "latvian"),
    ("mg", "malagasy"),
    ("mi", "maori"),
    ("mk", "macedonian"),
    ("ml", "malayalam"),
    ("mn", "mongolian"),
    ("mr", "marathi"),
    ("ms", "malay"),
    ("mt", "maltese"),
    ("my", "myanmar (burmese)"),
    ("ne", "nepali"),
    ("nl", "dutch"),
    ("no", "norwegian"),
    ("ny", "chichewa"),
    ("or", "odia"),
    ("pa", "punjabi"),
    ("pl", "polish"),
    ("ps", "pashto"),
    ("pt", "portuguese"),
    ("ro", "romanian"),
    ("ru", "russian"),
    ("sd", "sindhi"),
    ("si", "sinhala"),
    ("sk", "slovak"),
    ("sl", "slovenian"),
    ("sm", "samoan"),
    ("sn", "shona"),
    ("so", "somali"),
    ("sq", "albanian"),
    ("sr", "serbian"),
    ("st", "sesotho"),
    ("su", "sundanese"),
    ("sv", "swedish"),
    ("sw", "swahili"),
    ("ta", "tamil"),
    ("te", "telugu"),
    ("tg", "tajik"),
    ("th", "thai"),
    ("tl", "filipino"),
    ("tr", "turkish"),
    ("ug", "uyghur"),
    ("uk", "ukrainian"),
    ("ur", "urdu"),
    ("uz", "uzbek"),
    ("vi", "vietnamese"),
    ("xh", "xhosa"),
    ("yi", "yiddish"),
    ("yo", "yoruba"),
    ("zh-cn", "chinese (simplified)"),
    ("zh-tw", "chinese (traditional)"),
    ("zu", "zulu"),
];

/// Exact, case-sensitive lookup of a language code.
pub fn language_name(code: &str) -> Option<&'static str> {
    LANGUAGES
        .binary_search_by_key(&code, |&(c, _)| c)
        .ok()
        .map(|i| LANGUAGES[i].1)
}

/// Display name for a code, defaulting to [`UNKNOWN_LANGUAGE`] when the
/// code is not in the table.
pub fn display_name(code: &str) -> &'static str {
    language_name(code).unwrap_or(UNKNOWN_LANGUAGE)
}

/// Whether a code is a valid translation target.
pub fn is_supported(code: &str) -> bool {
    language_name(code).is_some()
}

/// The full table as a JSON object, in table order.
pub fn language_map() -> Map<String, Value> {
    LANGUAGES
        .iter()
        .map(|&(code, name)| (code.to_string(), Value::String(name.to_string())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_sorted_by_code() {
        for pair in LANGUAGES.windows(2) {
            assert!(
                pair[0].0 < pair[1].0,
                "table out of order at {:?}",
                pair[1].0
            );
        }
    }

    #[test]
    fn test_language_name_lookup() {
        assert_eq!(language_name("en"), Some("english"));
        assert_eq!(language_name("zh-cn"), Some("chinese (simplified)"));
        assert_eq!(language_name("zu"), Some("zulu"));
        assert_eq!(language_name("xx"), None);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(language_name("EN"), None);
        assert!(!is_supported("Fr"));
    }

    #[test]
    fn test_display_name_defaults_to_unknown() {
        assert_eq!(display_name("fr"), "french");
        assert_eq!(display_name("xx"), UNKNOWN_LANGUAGE);
        assert_eq!(display_name(""), UNKNOWN_LANGUAGE);
    }

    #[test]
    fn test_language_map_matches_table() {
        let map = language_map();
        assert_eq!(map.len(), LANGUAGES.len());
        assert_eq!(map["en"], "english");
        assert_eq!(map["iw"], "hebrew");
    }
}
