//! Connection-string parser.

use std::sync::LazyLock;

use regex_lite::Regex;
use tracing::debug;

use crate::properties::ConnectionProperties;
use crate::rules::RULES;

/// The connect-timeout value stored back into the connection string. The
/// live connection uses this short timeout; the user-requested value rides
/// separately into the backup command timeout.
pub const LIVE_CONNECT_TIMEOUT_SECS: u32 = 5;

static CONNECT_TIMEOUT_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)connect timeout=\d{1,3}").unwrap());

/// Parse a raw connection string into [`ConnectionProperties`].
///
/// Malformed input never fails this stage: blank input returns an all-empty
/// record, unknown keys and broken segments are skipped, and duplicate keys
/// keep the first value seen. The worst case is a record that later fails
/// validation.
pub fn parse(raw: &str) -> ConnectionProperties {
    let mut props = ConnectionProperties::new();
    if raw.trim().is_empty() {
        return props;
    }

    for segment in raw.split(';') {
        let segment = segment.trim();
        if segment.is_empty() {
            continue;
        }
        for rule in RULES {
            if rule.matches(segment) {
                rule.apply(&mut props, segment);
            }
        }
    }

    props.connection_string = raw.to_string();
    if !props.connect_timeout.trim().is_empty() {
        props.connection_string = rewrite_connect_timeout(&props.connection_string);
    }

    debug!(
        server = %props.server,
        database = %props.database_name,
        "parsed connection string"
    );
    props
}

/// Rewrite the `Connect Timeout=<1-3 digits>` token to the fixed
/// live-connection value. Only the `Connect Timeout` spelling is rewritten;
/// the `Connection Timeout` alias is extracted but left in place.
fn rewrite_connect_timeout(connection_string: &str) -> String {
    CONNECT_TIMEOUT_TOKEN
        .replace_all(
            connection_string,
            format!("Connect Timeout={LIVE_CONNECT_TIMEOUT_SECS}"),
        )
        .into_owned()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_well_formed_string() {
        let props = parse("server=S;database=D;User Id=U;Password=P;Connect Timeout=77;");
        assert_eq!(props.server, "S");
        assert_eq!(props.database_name, "D");
        assert_eq!(props.user_id, "U");
        assert_eq!(props.password, "P");
        assert_eq!(props.connect_timeout, "77");
        assert_eq!(
            props.connection_string,
            "server=S;database=D;User Id=U;Password=P;Connect Timeout=5;"
        );
    }

    #[test]
    fn test_empty_input_yields_empty_record() {
        assert_eq!(parse(""), ConnectionProperties::new());
        assert_eq!(parse("   \t "), ConnectionProperties::new());
    }

    #[test]
    fn test_first_match_wins_across_aliases() {
        let props = parse("server=A;data source=B;");
        assert_eq!(props.server, "A");
    }

    #[test]
    fn test_duplicate_key_keeps_first_value() {
        let props = parse("database=one;database=two");
        assert_eq!(props.database_name, "one");
    }

    #[test]
    fn test_casing_is_ignored() {
        let props = parse("SERVER=(localDb);DATABASE=PoohBear;User Id=sa;Password=password;");
        assert_eq!(props.server, "(localDb)");
        assert_eq!(props.database_name, "PoohBear");
    }

    #[test]
    fn test_timeout_rewrite_requires_extracted_timeout() {
        // No timeout extracted: stored string is untouched.
        let props = parse("server=S;database=D;");
        assert_eq!(props.connection_string, "server=S;database=D;");
    }

    #[test]
    fn test_timeout_rewrite_is_case_insensitive() {
        let props = parse("server=S;connect timeout=120;");
        assert_eq!(props.connect_timeout, "120");
        assert_eq!(props.connection_string, "server=S;Connect Timeout=5;");
    }

    #[test]
    fn test_connection_timeout_alias_is_not_rewritten() {
        let props = parse("server=S;Connection Timeout=30;");
        assert_eq!(props.connect_timeout, "30");
        assert_eq!(props.connection_string, "server=S;Connection Timeout=30;");
    }

    #[test]
    fn test_malformed_segments_are_skipped() {
        let props = parse(";;server=S;;garbage;database");
        assert_eq!(props.server, "S");
        assert_eq!(props.database_name, "");
    }

    #[test]
    fn test_parse_is_idempotent() {
        let raw = "server=S;database=D;User Id=U;Password=P;Connect Timeout=30;";
        assert_eq!(parse(raw), parse(raw));
    }
}
