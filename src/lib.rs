pub use snowflake_grant_builder::*;

pub mod batch;
pub mod resource;

pub use batch::{MultiStatementRequest, StatementBatch};
pub use resource::{BulkGrantResource, ResourceError};
