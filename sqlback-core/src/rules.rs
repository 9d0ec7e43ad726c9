//! Field-extraction rules for connection-string segments.
//!
//! Each rule pairs a set of key aliases with the properties field the
//! matched value is written into. The whole table is applied to every
//! segment in a fixed order; the first rule to populate a field wins and
//! later matches for the same field are ignored.

use crate::properties::ConnectionProperties;

/// A single extraction rule: key aliases plus the target field.
pub struct FieldRule {
    aliases: &'static [&'static str],
    field: fn(&mut ConnectionProperties) -> &mut String,
}

/// The fixed, ordered rule table. Aliases are lowercase; matching is
/// case-insensitive on the segment side.
pub const RULES: &[FieldRule] = &[
    FieldRule {
        aliases: &["server", "data source", "address", "addr", "network address"],
        field: |p| &mut p.server,
    },
    FieldRule {
        aliases: &["database", "initial catalog"],
        field: |p| &mut p.database_name,
    },
    FieldRule {
        aliases: &["integrated security", "trusted_connection"],
        field: |p| &mut p.integrated_security,
    },
    FieldRule {
        aliases: &["password", "pwd"],
        field: |p| &mut p.password,
    },
    FieldRule {
        aliases: &["user id"],
        field: |p| &mut p.user_id,
    },
    FieldRule {
        aliases: &["connect timeout", "connection timeout"],
        field: |p| &mut p.connect_timeout,
    },
    FieldRule {
        aliases: &["application name"],
        field: |p| &mut p.application_name,
    },
];

impl FieldRule {
    /// Case-insensitive substring test: does this segment carry one of the
    /// rule's key aliases?
    pub fn matches(&self, segment: &str) -> bool {
        let lower = segment.to_ascii_lowercase();
        self.aliases.iter().any(|alias| lower.contains(alias))
    }

    /// Extract the value after the first `=` following the matched alias
    /// and assign it, but only when the target field is still empty.
    ///
    /// A segment without `=` after the alias, or with nothing after it,
    /// resolves to an empty value. Rules never fail.
    pub fn apply(&self, props: &mut ConnectionProperties, segment: &str) {
        let slot = (self.field)(props);
        if !slot.is_empty() {
            return;
        }

        // ASCII lowering keeps byte offsets stable between the lowered
        // copy used for matching and the original segment.
        let lower = segment.to_ascii_lowercase();
        let Some(key_end) = self
            .aliases
            .iter()
            .find_map(|alias| lower.find(alias).map(|at| at + alias.len()))
        else {
            return;
        };

        let value = match segment[key_end..].find('=') {
            Some(eq) => segment[key_end + eq + 1..].trim(),
            None => "",
        };

        *slot = value.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply_all(segment: &str) -> ConnectionProperties {
        let mut props = ConnectionProperties::new();
        for rule in RULES {
            if rule.matches(segment) {
                rule.apply(&mut props, segment);
            }
        }
        props
    }

    #[test]
    fn test_server_aliases() {
        for segment in [
            "server=box1",
            "Data Source=box1",
            "ADDRESS=box1",
            "addr=box1",
            "Network Address=box1",
        ] {
            assert_eq!(apply_all(segment).server, "box1", "segment: {segment}");
        }
    }

    #[test]
    fn test_database_aliases() {
        assert_eq!(apply_all("database=Northwind").database_name, "Northwind");
        assert_eq!(
            apply_all("Initial Catalog=Northwind").database_name,
            "Northwind"
        );
    }

    #[test]
    fn test_security_user_and_password_aliases() {
        assert_eq!(apply_all("Integrated Security=SSPI").integrated_security, "SSPI");
        assert_eq!(apply_all("Trusted_Connection=true").integrated_security, "true");
        assert_eq!(apply_all("User Id=sa").user_id, "sa");
        assert_eq!(apply_all("pwd=hunter2").password, "hunter2");
        assert_eq!(apply_all("Password=hunter2").password, "hunter2");
    }

    #[test]
    fn test_timeout_and_application_aliases() {
        assert_eq!(apply_all("Connect Timeout=30").connect_timeout, "30");
        assert_eq!(apply_all("Connection Timeout=45").connect_timeout, "45");
        assert_eq!(apply_all("Application Name=nightly").application_name, "nightly");
    }

    #[test]
    fn test_missing_equals_yields_empty_value() {
        let props = apply_all("server");
        assert_eq!(props.server, "");
    }

    #[test]
    fn test_empty_value_yields_empty_string() {
        let props = apply_all("server=");
        assert_eq!(props.server, "");
    }

    #[test]
    fn test_first_assignment_sticks() {
        let mut props = ConnectionProperties::new();
        let rule = &RULES[0];
        rule.apply(&mut props, "server=first");
        rule.apply(&mut props, "data source=second");
        assert_eq!(props.server, "first");
    }

    #[test]
    fn test_value_is_trimmed() {
        assert_eq!(apply_all("server = box1 ").server, "box1");
    }
}
