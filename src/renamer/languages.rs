// Subtitle language detection from filename tokens

use std::collections::HashMap;
use std::ops::Range;
use std::sync::LazyLock;

use super::iso639::LANGUAGES;

/// Native and ASCII-folded names missing from the ISO tables, keyed by code
const EXTRA_NAMES: &[(&str, &[&str])] = &[
    ("bg", &["balgarski"]),
    ("ca", &["catala"]),
    ("cs", &["cesky", "cestina"]),
    ("da", &["dansk"]),
    ("de", &["deutsch"]),
    ("el", &["greek", "ellinika"]),
    ("es", &["espanol", "castellano"]),
    ("et", &["eesti"]),
    ("fa", &["farsi"]),
    ("fi", &["suomi"]),
    ("fr", &["francais"]),
    ("hr", &["hrvatski"]),
    ("hu", &["magyar"]),
    ("is", &["islenska"]),
    ("it", &["italiano"]),
    ("lt", &["lietuviu"]),
    ("lv", &["latviesu"]),
    ("nl", &["nederlands", "flemish"]),
    ("no", &["norsk"]),
    ("pl", &["polski"]),
    ("pt", &["portugues"]),
    ("ro", &["romana"]),
    ("ru", &["russkij"]),
    ("sk", &["slovencina"]),
    ("sl", &["slovenscina"]),
    ("sr", &["srpski"]),
    ("sv", &["svenska"]),
    ("tr", &["turkce"]),
];

/// Longest language name in tokens ("Scottish Gaelic" is two)
const MAX_SPAN: usize = 4;

/// Lowercased alias -> language code. Codes are inserted before names so a
/// code never loses to a name of another language.
static ALIASES: LazyLock<HashMap<String, &'static str>> = LazyLock::new(|| {
    let mut aliases = HashMap::new();
    for language in LANGUAGES {
        if let Some(alpha2) = language.alpha2 {
            aliases.entry(alpha2.to_string()).or_insert(language.code());
        }
    }
    for language in LANGUAGES {
        aliases
            .entry(language.alpha3.to_string())
            .or_insert(language.code());
        if let Some(bibliographic) = language.bibliographic {
            aliases
                .entry(bibliographic.to_string())
                .or_insert(language.code());
        }
    }
    for language in LANGUAGES {
        for name in language.names {
            aliases.entry(name.to_lowercase()).or_insert(language.code());
        }
    }
    for (code, names) in EXTRA_NAMES {
        for name in *names {
            aliases.entry(name.to_string()).or_insert(*code);
        }
    }
    aliases
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageMatch {
    /// Language as written, tokens joined with '.'
    pub text: String,
    /// ISO 639-1 code, or ISO 639-2/T for languages without one
    pub iso_code: &'static str,
    /// Matched tokens
    pub span: Range<usize>,
}

fn lookup(alias: &str) -> Option<&'static str> {
    ALIASES.get(&alias.to_lowercase()).copied()
}

/// "pt-BR", "zh-Hant", "en-US": a language code with a region or script
fn lookup_tagged(token: &str) -> Option<&'static str> {
    let (language, subtag) = token.split_once('-')?;
    let subtag_ok = matches!(subtag.len(), 2..=4) && subtag.chars().all(|c| c.is_ascii_alphanumeric());
    if !subtag_ok || !matches!(language.len(), 2 | 3) {
        return None;
    }
    lookup(language)
}

/// Find the first language among `tokens`, preferring the longest run of
/// tokens at each position.
pub fn find(tokens: &[&str]) -> Option<LanguageMatch> {
    for start in 0..tokens.len() {
        let longest = MAX_SPAN.min(tokens.len() - start);
        for len in (1..=longest).rev() {
            let span = start..start + len;
            let words = &tokens[span.clone()];
            let iso_code = match words {
                [single] => lookup(single).or_else(|| lookup_tagged(single)),
                _ => lookup(&words.join(" ")),
            };
            if let Some(iso_code) = iso_code {
                return Some(LanguageMatch {
                    text: words.join("."),
                    iso_code,
                    span,
                });
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(tokens: &[&str]) -> Option<&'static str> {
        find(tokens).map(|m| m.iso_code)
    }

    #[test]
    fn test_codes_and_names() {
        assert_eq!(code(&["en"]), Some("en"));
        assert_eq!(code(&["German"]), Some("de"));
        assert_eq!(code(&["ger"]), Some("de"));
        assert_eq!(code(&["deu"]), Some("de"));
        assert_eq!(code(&["Deutsch"]), Some("de"));
        assert_eq!(code(&["Malay"]), Some("ms"));
        assert_eq!(code(&["may"]), Some("ms"));
        // No ISO 639-1 code
        assert_eq!(code(&["Hawaiian"]), Some("haw"));
    }

    #[test]
    fn test_first_language_wins_and_position_is_kept() {
        let m = find(&["sdh", "fre"]).unwrap();
        assert_eq!(m.iso_code, "fr");
        assert_eq!(m.text, "fre");
        assert_eq!(m.span, 1..2);

        // "hi" (hearing impaired) after a real language stays a plain token
        let m = find(&["eng", "hi"]).unwrap();
        assert_eq!(m.iso_code, "en");
        assert_eq!(m.span, 0..1);
    }

    #[test]
    fn test_region_and_script_tags() {
        let m = find(&["pt-BR"]).unwrap();
        assert_eq!(m.iso_code, "pt");
        assert_eq!(m.text, "pt-BR");
        assert_eq!(code(&["zh-Hant"]), Some("zh"));
        assert_eq!(code(&["xx-YY"]), None);
    }

    #[test]
    fn test_multi_word_names() {
        let m = find(&["Scottish", "Gaelic", "sdh"]).unwrap();
        assert_eq!(m.iso_code, "gd");
        assert_eq!(m.text, "Scottish.Gaelic");
        assert_eq!(m.span, 0..2);
    }

    #[test]
    fn test_no_language() {
        assert!(find(&[]).is_none());
        assert!(find(&["sdh", "2"]).is_none());
        assert!(find(&["moviegerman"]).is_none());
    }

    #[test]
    fn test_table_has_every_iso_639_1_language() {
        let with_alpha2 = LANGUAGES.iter().filter(|l| l.alpha2.is_some()).count();
        assert!(with_alpha2 >= 180);
        for language in LANGUAGES {
            assert_eq!(lookup(language.alpha3), Some(language.code()));
        }
    }
}
