use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use snowflake_grant_builder::{
    BulkGrantBuilder, GrantBuilder, GrantExecutable, GrantSet, ObjectType,
};

/// One bulk grant resource: a privilege on every (or every future) object
/// of a type in a database or schema, granted to a list of roles.
///
/// Loaded from JSON, ex.
/// ```json
/// { "database_name": "DB", "schema_name": "PUBLIC", "on": "TABLE",
///   "privilege": "SELECT", "roles": ["ANALYST"] }
/// ```
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct BulkGrantResource {
    pub database_name: String,
    /// Empty for a database wide grant.
    #[serde(default)]
    pub schema_name: String,
    pub on: ObjectType,
    #[serde(default = "default_privilege")]
    pub privilege: String,
    pub roles: Vec<String>,
    #[serde(default)]
    pub with_grant_option: bool,
    #[serde(default)]
    pub grant_set: GrantSet,
}

fn default_privilege() -> String {
    "USAGE".into()
}

/// Error loading a [BulkGrantResource]
#[derive(thiserror::Error, Debug)]
pub enum ResourceError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("database_name must not be empty")]
    MissingDatabase,
    #[error("privilege must not be empty")]
    MissingPrivilege,
    #[error("at least one role is required")]
    NoRoles,
    #[error("role at index {index} is empty")]
    EmptyRoleName { index: usize },
    #[error("schema grants are database wide, got schema_name `{schema}`")]
    SchemaOnSchemaGrant { schema: String },
}

impl BulkGrantResource {
    pub fn from_json(json: &str) -> Result<Self, ResourceError> {
        let resource: BulkGrantResource = serde_json::from_str(json)?;
        resource.validate()?;
        tracing::debug!(id = %resource.id(), "loaded bulk grant resource");
        Ok(resource)
    }
    pub fn validate(&self) -> Result<(), ResourceError> {
        if self.database_name.is_empty() {
            return Err(ResourceError::MissingDatabase);
        }
        if self.privilege.trim().is_empty() {
            return Err(ResourceError::MissingPrivilege);
        }
        if self.roles.is_empty() {
            return Err(ResourceError::NoRoles);
        }
        if let Some(index) = self.roles.iter().position(|role| role.is_empty()) {
            return Err(ResourceError::EmptyRoleName { index });
        }
        if self.on == ObjectType::Schema && !self.schema_name.is_empty() {
            return Err(ResourceError::SchemaOnSchemaGrant {
                schema: self.schema_name.clone(),
            });
        }
        Ok(())
    }
    pub fn builder(&self) -> BulkGrantBuilder {
        BulkGrantBuilder::new(
            self.grant_set,
            self.on,
            &self.database_name,
            &self.schema_name,
        )
    }
    /// `database|schema|privilege|type|with_grant_option|set`
    pub fn id(&self) -> String {
        format!(
            "{}|{}|{}|{}|{}|{}",
            self.database_name,
            self.schema_name,
            self.privilege,
            self.on,
            self.with_grant_option,
            self.grant_set
        )
    }
    /// One `GRANT` per role.
    pub fn create_statements(&self) -> Vec<String> {
        let builder = self.builder();
        self.unique_roles()
            .map(|role| {
                builder
                    .role(role)
                    .grant(&self.privilege, self.with_grant_option)
            })
            .collect()
    }
    pub fn delete_statements(&self) -> Vec<String> {
        let builder = self.builder();
        self.unique_roles()
            .flat_map(|role| builder.role(role).revoke(&self.privilege))
            .collect()
    }
    pub fn read_statement(&self) -> String {
        self.builder().show()
    }
    /// Roles in the given order, first occurrence wins.
    fn unique_roles(&self) -> impl Iterator<Item = &str> {
        let mut seen = HashSet::with_capacity(self.roles.len());
        self.roles
            .iter()
            .map(String::as_str)
            .filter(move |role| seen.insert(*role))
    }
}
