/// Canonical form of a text key used for matching: trimmed, lowercased.
/// Idempotent. Never applied to fields kept for display.
pub fn norm_key(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Normalized (track_name, artist_name) pair, the semantic identity of a track.
pub fn norm_pair(track_name: &str, artist_name: &str) -> (String, String) {
    (norm_key(track_name), norm_key(artist_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_lowercases() {
        assert_eq!(norm_key("  Good 4 U "), "good 4 u");
        assert_eq!(norm_key("MONTERO\t"), "montero");
    }

    #[test]
    fn idempotent() {
        for raw in ["  Good 4 U ", "Kiss Me More", "deja vu", ""] {
            let once = norm_key(raw);
            assert_eq!(norm_key(&once), once);
        }
    }

    #[test]
    fn pair_normalizes_both_fields() {
        assert_eq!(
            norm_pair(" Good 4 U", "Olivia Rodrigo "),
            ("good 4 u".to_string(), "olivia rodrigo".to_string())
        );
    }
}
