/// Cleans a raw lyrical themes string into the canonical comma-joined form:
/// tokens split on commas, trimmed, lowercased, empties dropped.
///
/// Returns None when nothing usable remains; such bands carry no lyrical
/// profile and are excluded from candidacy.
pub fn clean_theme_text(raw: &str) -> Option<String> {
    let tokens: Vec<String> = raw
        .split(',')
        .map(|token| token.trim().to_lowercase())
        .filter(|token| !token.is_empty())
        .collect();

    if tokens.is_empty() {
        None
    } else {
        Some(tokens.join(", "))
    }
}
