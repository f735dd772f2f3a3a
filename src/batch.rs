use std::num::NonZeroUsize;

use serde::Serialize;

/// Collects statements into a single request for the
/// [multiple statements API](https://docs.snowflake.com/en/developer-guide/sql-api/submitting-multiple-statements).
#[derive(Debug, Default, Clone)]
pub struct StatementBatch {
    statements: Vec<String>,
    additional_statements_count: usize,
}

impl StatementBatch {
    pub fn new() -> Self {
        Self::default()
    }
    /// Add a **single** SQL statement, terminated with a semicolon (;) if it is not already.
    /// Use [add_multiple_sql](Self::add_multiple_sql) to add multiple SQL statement at once.
    pub fn add_sql(&mut self, sql: impl Into<String>) {
        self.statements.push(terminate(sql.into()));
    }
    /// Add **multiple** SQL statements, and you must specify how many there are in `count`.
    ///
    /// Each SQL statement **must** end with a semicolon (;)
    pub fn add_multiple_sql(&mut self, count: NonZeroUsize, sql: impl Into<String>) {
        self.additional_statements_count += count.get() - 1;
        self.statements.push(terminate(sql.into()));
    }
    /// Number of statements the batch holds.
    pub fn len(&self) -> usize {
        self.statements.len() + self.additional_statements_count
    }
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
    /// `None` if no statement was added.
    pub fn finish(self) -> Option<MultiStatementRequest> {
        let statement_count = NonZeroUsize::new(self.len())?;
        let statement = self.statements.join(" ");
        tracing::debug!(%statement_count, "finished statement batch");
        Some(MultiStatementRequest {
            statement,
            timeout: None,
            database: None,
            warehouse: None,
            role: None,
            parameters: Parameters { statement_count },
        })
    }
}

impl<S: Into<String>> Extend<S> for StatementBatch {
    fn extend<T: IntoIterator<Item = S>>(&mut self, iter: T) {
        for sql in iter {
            self.add_sql(sql);
        }
    }
}

fn terminate(mut sql: String) -> String {
    sql.truncate(sql.trim_end().len());
    if !sql.ends_with(';') {
        sql.push(';');
    }
    sql
}

/// Body of a multiple statements request.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct MultiStatementRequest {
    statement: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    timeout: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    database: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    warehouse: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parameters: Parameters,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
struct Parameters {
    #[serde(rename = "MULTI_STATEMENT_COUNT")]
    statement_count: NonZeroUsize,
}

impl MultiStatementRequest {
    /// All the SQL statements concatenated into a single,
    /// which is what the Snowflake API expects.
    pub fn statement(&self) -> &str {
        &self.statement
    }
    pub fn statement_count(&self) -> NonZeroUsize {
        self.parameters.statement_count
    }
    pub fn with_timeout(mut self, timeout: u32) -> Self {
        self.timeout = Some(timeout);
        self
    }
    pub fn with_database<D: ToString>(mut self, database: D) -> Self {
        self.database = Some(database.to_string());
        self
    }
    pub fn with_warehouse<W: ToString>(mut self, warehouse: W) -> Self {
        self.warehouse = Some(warehouse.to_string());
        self
    }
    pub fn with_role<R: ToString>(mut self, role: R) -> Self {
        self.role = Some(role.to_string());
        self
    }
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
