pub use bulk::{BulkGrantBuilder, BulkGrantExecutable, GrantSet, all_schema_grant, future_schema_grant};
pub use object_type::{ObjectType, ParseObjectTypeError};
pub use scope::GrantScope;

pub mod bulk;
pub mod object_type;
mod scope;

/// Describes the object a family of grants is made on,
/// and binds it to a grantee.
pub trait GrantBuilder {
    type Executable: GrantExecutable;

    /// Name of the object the grant is on, unqualified.
    fn name(&self) -> &str;
    /// SQL keyword of the granted object type, ex. `MATERIALIZED VIEW`.
    fn grant_type(&self) -> &str;
    fn role(&self, name: &str) -> Self::Executable;
    /// `None` when this family of grants cannot be made to a share.
    fn share(&self, name: &str) -> Option<Self::Executable>;
    fn show(&self) -> String;
}

/// Produces the statements for one grant relationship.
/// The privilege is supplied per call.
pub trait GrantExecutable {
    fn grant(&self, privilege: &str, with_grant_option: bool) -> String;
    /// Some grants need more than one statement to be fully revoked.
    fn revoke(&self, privilege: &str) -> Vec<String>;
    fn show(&self) -> String;
}
