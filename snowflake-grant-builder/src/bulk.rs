use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    GrantBuilder, GrantExecutable, ObjectType,
    scope::{GrantScope, GrantTarget},
};

/// Which objects of a type a bulk grant covers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GrantSet {
    /// Every object of the type that exists when the statement runs.
    All,
    /// Objects of the type created afterwards.
    #[default]
    Future,
}

impl GrantSet {
    pub const fn keyword(self) -> &'static str {
        match self {
            GrantSet::All => "ALL",
            GrantSet::Future => "FUTURE",
        }
    }
}

impl fmt::Display for GrantSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Builds statements granting a privilege on all (or all future) objects
/// of one [ObjectType] inside a database or schema.
///
/// Example:
/// - `BulkGrantBuilder::all(ObjectType::Table, "DB", "PUBLIC").role("ANALYST").grant("SELECT", false)`
///
/// yields `GRANT SELECT ON ALL TABLES IN SCHEMA "DB"."PUBLIC" TO ROLE "ANALYST"`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BulkGrantBuilder {
    target: GrantTarget,
    object_type: ObjectType,
    grant_set: GrantSet,
}

impl BulkGrantBuilder {
    /// An empty `schema` scopes the grant to the whole database.
    /// [ObjectType::Schema] grants are always database scoped and ignore `schema`.
    pub fn new(grant_set: GrantSet, object_type: ObjectType, database: &str, schema: &str) -> Self {
        let target = match object_type {
            ObjectType::Schema => GrantTarget::database(database),
            _ => GrantTarget::resolve(database, schema),
        };
        tracing::trace!(
            %grant_set,
            %object_type,
            scope = %target.scope,
            qualified_name = %target.qualified_name,
            "new bulk grant builder"
        );
        BulkGrantBuilder {
            target,
            object_type,
            grant_set,
        }
    }
    pub fn all(object_type: ObjectType, database: &str, schema: &str) -> Self {
        Self::new(GrantSet::All, object_type, database, schema)
    }
    pub fn future(object_type: ObjectType, database: &str, schema: &str) -> Self {
        Self::new(GrantSet::Future, object_type, database, schema)
    }
    pub fn qualified_name(&self) -> &str {
        &self.target.qualified_name
    }
    pub fn scope(&self) -> GrantScope {
        self.target.scope
    }
    pub fn object_type(&self) -> ObjectType {
        self.object_type
    }
    pub fn grant_set(&self) -> GrantSet {
        self.grant_set
    }
}

/// Grants on all schemas in `database`.
pub fn all_schema_grant(database: &str) -> BulkGrantBuilder {
    BulkGrantBuilder::all(ObjectType::Schema, database, "")
}

/// Grants on future schemas in `database`.
pub fn future_schema_grant(database: &str) -> BulkGrantBuilder {
    BulkGrantBuilder::future(ObjectType::Schema, database, "")
}

impl GrantBuilder for BulkGrantBuilder {
    type Executable = BulkGrantExecutable;

    fn name(&self) -> &str {
        &self.target.name
    }
    fn grant_type(&self) -> &str {
        self.object_type.singular()
    }
    fn role(&self, name: &str) -> BulkGrantExecutable {
        BulkGrantExecutable {
            grantee_name: name.to_owned(),
            grant_name: self.target.qualified_name.clone(),
            object_type: self.object_type,
            scope: self.target.scope,
            grant_set: self.grant_set,
        }
    }
    /// Bulk grants cannot target shares.
    fn share(&self, _name: &str) -> Option<BulkGrantExecutable> {
        None
    }
    fn show(&self) -> String {
        show_statement(self.target.scope, &self.target.qualified_name)
    }
}

/// A [BulkGrantBuilder] bound to a grantee role.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BulkGrantExecutable {
    grantee_name: String,
    grant_name: String,
    object_type: ObjectType,
    scope: GrantScope,
    grant_set: GrantSet,
}

impl BulkGrantExecutable {
    pub fn grantee_name(&self) -> &str {
        &self.grantee_name
    }
    fn on_clause(&self) -> String {
        format!(
            "ON {} {} IN {} {}",
            self.grant_set,
            self.object_type.plural(),
            self.scope,
            self.grant_name
        )
    }
}

impl GrantExecutable for BulkGrantExecutable {
    fn grant(&self, privilege: &str, with_grant_option: bool) -> String {
        let mut statement = format!(
            r#"GRANT {privilege} {} TO ROLE "{}""#,
            self.on_clause(),
            self.grantee_name
        );
        if with_grant_option {
            statement.push_str(" WITH GRANT OPTION");
        }
        tracing::debug!(%statement, "grant");
        statement
    }
    fn revoke(&self, privilege: &str) -> Vec<String> {
        let statement = format!(
            r#"REVOKE {privilege} {} FROM ROLE "{}""#,
            self.on_clause(),
            self.grantee_name
        );
        tracing::debug!(%statement, "revoke");
        vec![statement]
    }
    fn show(&self) -> String {
        show_statement(self.scope, &self.grant_name)
    }
}

fn show_statement(scope: GrantScope, qualified_name: &str) -> String {
    format!("SHOW FUTURE GRANTS IN {scope} {qualified_name}")
}
