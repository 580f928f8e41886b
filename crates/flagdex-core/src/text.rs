// crates/flagdex-core/src/text.rs

/// Convert a string into a folded key suitable for matching.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Åland` -> `Aland`)
/// 2\) Normalize to lowercase
///
/// The implementation uses the `deunicode` crate to perform a best-effort
/// transliteration from Unicode to ASCII, so "Côte d'Ivoire" can be found
/// by typing `cote`.
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Derive the effective query from raw user input: trim, then fold.
///
/// An empty result means "match everything".
pub fn normalize_query(raw: &str) -> String {
    fold_key(raw.trim())
}

/// Split a folded name into word tokens.
///
/// Tokens are separated by runs of whitespace and the punctuation that
/// appears inside country names: comma, period, apostrophe, hyphen and
/// parentheses. Empty tokens are dropped, so consecutive separators
/// ("Guinea-Bissau", "Korea (Republic of)") behave as one.
pub fn tokens(s: &str) -> impl Iterator<Item = &str> {
    s.split(|c: char| c.is_whitespace() || matches!(c, ',' | '.' | '\'' | '-' | '(' | ')'))
        .filter(|t| !t.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_key_lowercases_and_strips_accents() {
        assert_eq!(fold_key("CANADA"), "canada");
        assert_eq!(fold_key("Åland Islands"), "aland islands");
        assert_eq!(fold_key("Côte d'Ivoire"), "cote d'ivoire");
    }

    #[test]
    fn normalize_query_trims() {
        assert_eq!(normalize_query("  InDia  "), "india");
        assert_eq!(normalize_query("   "), "");
    }

    #[test]
    fn tokens_split_on_name_punctuation() {
        let toks: Vec<_> = tokens("independent state of samoa").collect();
        assert_eq!(toks, vec!["independent", "state", "of", "samoa"]);

        let toks: Vec<_> = tokens("guinea-bissau").collect();
        assert_eq!(toks, vec!["guinea", "bissau"]);

        let toks: Vec<_> = tokens("korea (republic of)").collect();
        assert_eq!(toks, vec!["korea", "republic", "of"]);

        let toks: Vec<_> = tokens("cote d'ivoire").collect();
        assert_eq!(toks, vec!["cote", "d", "ivoire"]);
    }

    #[test]
    fn tokens_drop_empties() {
        assert_eq!(tokens("").count(), 0);
        assert_eq!(tokens(" - ").count(), 0);
    }
}
