/// Standardizes a raw country string for lookup against the coordinates
/// table: trimmed, lowercased, and mapped through the aliases the source
/// data is known to use. Unknown names pass through unchanged; resolution
/// failures are handled downstream as a missing-geo signal, never an error.
pub fn standardize_country_name(raw: &str) -> String {
    let normalized = raw.trim().to_lowercase();

    match normalized.as_str() {
        "usa" | "united states of america" => "united states".to_string(),
        "uk" | "great britain" => "united kingdom".to_string(),
        "korea, south" | "republic of korea" => "south korea".to_string(),
        "russian federation" => "russia".to_string(),
        "czechia" => "czech republic".to_string(),
        "holland" => "netherlands".to_string(),
        _ => normalized,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_lowercases() {
        assert_eq!(standardize_country_name("  Norway "), "norway");
    }

    #[test]
    fn maps_known_aliases() {
        assert_eq!(standardize_country_name("USA"), "united states");
        assert_eq!(standardize_country_name("Great Britain"), "united kingdom");
        assert_eq!(standardize_country_name("Czechia"), "czech republic");
    }

    #[test]
    fn passes_unknown_names_through() {
        assert_eq!(standardize_country_name("Atlantis"), "atlantis");
    }
}
