use std::fmt;

use serde::{Deserialize, Serialize};

/// Container level a bulk grant applies at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GrantScope {
    Database,
    Schema,
}

impl GrantScope {
    pub const fn keyword(self) -> &'static str {
        match self {
            GrantScope::Database => "DATABASE",
            GrantScope::Schema => "SCHEMA",
        }
    }
}

impl fmt::Display for GrantScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Container a grant targets, with its display name and quoted identifier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct GrantTarget {
    pub(crate) name: String,
    pub(crate) qualified_name: String,
    pub(crate) scope: GrantScope,
}

impl GrantTarget {
    /// An empty `schema` targets the database itself.
    pub(crate) fn resolve(database: &str, schema: &str) -> Self {
        if schema.is_empty() {
            return Self::database(database);
        }
        GrantTarget {
            name: schema.to_owned(),
            qualified_name: format!("{}.{}", quote(database), quote(schema)),
            scope: GrantScope::Schema,
        }
    }
    pub(crate) fn database(database: &str) -> Self {
        GrantTarget {
            name: database.to_owned(),
            qualified_name: quote(database),
            scope: GrantScope::Database,
        }
    }
}

/// Wraps an identifier segment in double quotes. Embedded quotes are not escaped.
pub(crate) fn quote(segment: &str) -> String {
    format!("\"{segment}\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_schema_resolves_to_database() {
        let target = GrantTarget::resolve("test_db", "");
        assert_eq!(target.name, "test_db");
        assert_eq!(target.qualified_name, r#""test_db""#);
        assert_eq!(target.scope, GrantScope::Database);
    }

    #[test]
    fn schema_is_qualified_by_database() {
        let target = GrantTarget::resolve("test_db", "PUBLIC");
        assert_eq!(target.name, "PUBLIC");
        assert_eq!(target.qualified_name, r#""test_db"."PUBLIC""#);
        assert_eq!(target.scope, GrantScope::Schema);
    }

    #[test]
    fn scope_keyword() {
        assert_eq!(GrantScope::Database.to_string(), "DATABASE");
        assert_eq!(GrantScope::Schema.to_string(), "SCHEMA");
    }
}
