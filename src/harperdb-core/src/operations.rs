use serde::{Deserialize, Serialize};
use std::fmt;

/// Operation discriminator sent in the `operation` field of every request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    CreateSchema,
    DropSchema,
    CreateTable,
    DropTable,
    CreateAttribute,
    DropAttribute,
    Insert,
    Update,
    Upsert,
    Delete,
    SearchByHash,
    SearchByValue,
    SearchByConditions,
}

impl Operation {
    pub const ALL: [Operation; 13] = [
        Operation::CreateSchema,
        Operation::DropSchema,
        Operation::CreateTable,
        Operation::DropTable,
        Operation::CreateAttribute,
        Operation::DropAttribute,
        Operation::Insert,
        Operation::Update,
        Operation::Upsert,
        Operation::Delete,
        Operation::SearchByHash,
        Operation::SearchByValue,
        Operation::SearchByConditions,
    ];

    /// Wire name of the operation
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::CreateSchema => "create_schema",
            Operation::DropSchema => "drop_schema",
            Operation::CreateTable => "create_table",
            Operation::DropTable => "drop_table",
            Operation::CreateAttribute => "create_attribute",
            Operation::DropAttribute => "drop_attribute",
            Operation::Insert => "insert",
            Operation::Update => "update",
            Operation::Upsert => "upsert",
            Operation::Delete => "delete",
            Operation::SearchByHash => "search_by_hash",
            Operation::SearchByValue => "search_by_value",
            Operation::SearchByConditions => "search_by_conditions",
        }
    }

    /// Response field listing the hashes a record mutation touched.
    ///
    /// `None` for schema, table, attribute and search operations.
    pub fn hashes_field(&self) -> Option<&'static str> {
        match self {
            Operation::Insert => Some("inserted_hashes"),
            Operation::Update => Some("update_hashes"),
            Operation::Upsert => Some("upserted_hashes"),
            Operation::Delete => Some("deleted_hashes"),
            Operation::CreateSchema
            | Operation::DropSchema
            | Operation::CreateTable
            | Operation::DropTable
            | Operation::CreateAttribute
            | Operation::DropAttribute
            | Operation::SearchByHash
            | Operation::SearchByValue
            | Operation::SearchByConditions => None,
        }
    }

    pub fn is_search(&self) -> bool {
        matches!(
            self,
            Operation::SearchByHash | Operation::SearchByValue | Operation::SearchByConditions
        )
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
