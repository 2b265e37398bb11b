/// Language every fallback chain ends with
pub const DEFAULT_LANGUAGE: &str = "en";

/// Normalize locale identifiers to a canonical-ish form for lookup.
///
/// - Trims whitespace.
/// - Converts `_` to `-` (Android often reports `en_US`).
/// - Lowercases the language subtag (`EN_GB` -> `en-GB`).
pub fn normalize_locale(s: &str) -> String {
    let replaced = s.trim().replace('_', "-");
    match replaced.split_once('-') {
        Some((lang, rest)) => format!("{}-{}", lang.to_ascii_lowercase(), rest),
        None => replaced.to_ascii_lowercase(),
    }
}

/// Create a fallback chain for label lookup.
///
/// Example:
/// - `pt-BR` -> `["pt-BR", "pt", "en"]`
/// - `en-US` -> `["en-US", "en"]`
/// - `` -> `["en"]`
pub fn locale_fallback_chain(locale: &str) -> Vec<String> {
    let l = normalize_locale(locale);
    let mut chain = Vec::new();

    if !l.is_empty() {
        chain.push(l.clone());
        if let Some(lang) = l.split('-').next() {
            if !lang.is_empty() {
                chain.push(lang.to_string());
            }
        }
    }

    chain.push(DEFAULT_LANGUAGE.to_string());

    // Dedup, preserve order.
    let mut out: Vec<String> = Vec::with_capacity(chain.len());
    for x in chain {
        if !out.contains(&x) {
            out.push(x);
        }
    }
    out
}
