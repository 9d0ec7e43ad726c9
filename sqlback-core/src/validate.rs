//! Connection-property validation.

use crate::properties::ConnectionProperties;
use crate::result::OperationResult;

/// Accepted values for the integrated-security field.
const SECURITY_VALUES: &[&str] = &["true", "false", "sspi"];

/// Validate parsed connection properties.
///
/// Every rule is evaluated; failures aggregate into the result's message
/// list rather than stopping at the first problem.
pub fn validate(props: &ConnectionProperties) -> OperationResult {
    let mut result = OperationResult::new();

    if props.server.trim().is_empty() {
        result.fail("Server was not supplied in the connection string.");
    }

    if props.database_name.trim().is_empty() {
        result.fail("Database name was not supplied in the connection string.");
    }

    match props.connect_timeout.trim().parse::<i64>() {
        Ok(secs) if secs >= 0 => {}
        _ => result.fail("Connect Timeout must be an integer value of zero or greater."),
    }

    let security = props.integrated_security.trim();
    if security.is_empty() {
        if props.user_id.trim().is_empty() || props.password.trim().is_empty() {
            result.fail(
                "User Id and Password are required when Integrated Security is not supplied.",
            );
        }
    } else if !SECURITY_VALUES
        .iter()
        .any(|v| security.eq_ignore_ascii_case(v))
    {
        result.fail("Integrated Security must be one of 'true', 'false' or 'sspi'.");
    }

    result
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::parser::parse;

    fn valid_props() -> ConnectionProperties {
        parse("server=S;database=D;User Id=U;Password=P;Connect Timeout=30;")
    }

    #[test]
    fn test_well_formed_properties_pass() {
        let result = validate(&valid_props());
        assert!(result.success);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn test_missing_server_fails() {
        let mut props = valid_props();
        props.server.clear();
        let result = validate(&props);
        assert!(!result.success);
        assert_eq!(
            result.messages,
            vec!["Server was not supplied in the connection string."]
        );
    }

    #[test]
    fn test_missing_database_fails() {
        let mut props = valid_props();
        props.database_name.clear();
        assert!(!validate(&props).success);
    }

    #[test]
    fn test_negative_timeout_fails() {
        let mut props = valid_props();
        props.connect_timeout = "-1".to_string();
        assert!(!validate(&props).success);
    }

    #[test]
    fn test_zero_timeout_is_valid() {
        let mut props = valid_props();
        props.connect_timeout = "0".to_string();
        assert!(validate(&props).success);
    }

    #[test]
    fn test_non_numeric_timeout_fails() {
        let mut props = valid_props();
        props.connect_timeout = "soon".to_string();
        assert!(!validate(&props).success);
    }

    #[test]
    fn test_unknown_security_value_fails() {
        let mut props = valid_props();
        props.integrated_security = "maybe".to_string();
        let result = validate(&props);
        assert!(!result.success);
        assert_eq!(
            result.messages,
            vec!["Integrated Security must be one of 'true', 'false' or 'sspi'."]
        );
    }

    #[test]
    fn test_sspi_without_credentials_is_valid() {
        let props = parse("server=S;database=D;Integrated Security=SSPI;Connect Timeout=30;");
        assert!(validate(&props).success);
    }

    #[test]
    fn test_blank_security_without_credentials_fails() {
        let props = parse("server=S;database=D;Connect Timeout=30;");
        let result = validate(&props);
        assert!(!result.success);
        assert_eq!(
            result.messages,
            vec!["User Id and Password are required when Integrated Security is not supplied."]
        );
    }

    #[test]
    fn test_failures_aggregate_in_rule_order() {
        let result = validate(&ConnectionProperties::new());
        assert!(!result.success);
        assert_eq!(result.messages.len(), 4);
        assert!(result.messages[0].contains("Server"));
        assert!(result.messages[1].contains("Database"));
        assert!(result.messages[2].contains("Connect Timeout"));
        assert!(result.messages[3].contains("User Id and Password"));
    }
}
