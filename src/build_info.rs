//! Commit hash and build date, generated by `build.rs`.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_commit_is_short_hash_or_unknown() {
        assert!(BUILD_COMMIT == "unknown" || BUILD_COMMIT.len() == 7);
    }

    #[test]
    fn test_build_date_is_iso_day() {
        // build.rs replaces a malformed BUILD_DATE with today's date
        assert_eq!(BUILD_DATE.len(), 10);
        assert_eq!(BUILD_DATE.as_bytes()[4], b'-');
        assert_eq!(BUILD_DATE.as_bytes()[7], b'-');
        assert!(BUILD_DATE[..4].bytes().all(|b| b.is_ascii_digit()));
    }
}
