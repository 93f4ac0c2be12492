const SESSION_PREFIX: &str = "session-";

/// Returns `session-` followed by 16 random bytes as lowercase hex.
///
/// The runtime rejects session ids shorter than 33 characters; this always
/// yields 40.
pub fn generate_session_id() -> String {
    format!("{}{}", SESSION_PREFIX, hex::encode(rand::random::<[u8; 16]>()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn test_session_id_format() {
        let id = generate_session_id();
        assert_eq!(id.len(), 40);

        let suffix = id.strip_prefix("session-").unwrap();
        assert_eq!(suffix.len(), 32);
        assert!(
            suffix
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
        );
    }

    #[test]
    fn test_session_ids_are_unique() {
        let ids: HashSet<String> = (0..1000).map(|_| generate_session_id()).collect();
        assert_eq!(ids.len(), 1000);
    }
}
