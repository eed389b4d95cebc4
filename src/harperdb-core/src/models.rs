use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::fmt;

/// Parameters to create a table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTableParams {
    /// Schema the table lives in
    pub schema: String,
    /// Name of the table to create
    pub table: String,
    /// Primary key attribute of the table
    pub hash_attribute: String,
}

impl CreateTableParams {
    pub fn new(
        schema: impl Into<String>,
        table: impl Into<String>,
        hash_attribute: impl Into<String>,
    ) -> Self {
        Self {
            schema: schema.into(),
            table: table.into(),
            hash_attribute: hash_attribute.into(),
        }
    }
}

/// Schema and table addressed by a drop-table call or a record mutation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableParams {
    pub schema: String,
    pub table: String,
}

impl TableParams {
    pub fn new(schema: impl Into<String>, table: impl Into<String>) -> Self {
        Self {
            schema: schema.into(),
            table: table.into(),
        }
    }
}

/// Parameters to create or drop an attribute.
///
/// These are sent exactly as serialized; field names are already in wire form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeParams {
    pub schema: String,
    pub table: String,
    pub attribute: String,
}

impl AttributeParams {
    pub fn new(
        schema: impl Into<String>,
        table: impl Into<String>,
        attribute: impl Into<String>,
    ) -> Self {
        Self {
            schema: schema.into(),
            table: table.into(),
            attribute: attribute.into(),
        }
    }
}

/// Parameters shared by every search operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    pub schema: String,
    pub table: String,
    /// Attributes to return; all attributes (`*`) when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub get_attributes: Option<Vec<String>>,
}

impl SearchParams {
    pub fn new(schema: impl Into<String>, table: impl Into<String>) -> Self {
        Self {
            schema: schema.into(),
            table: table.into(),
            get_attributes: None,
        }
    }

    pub fn with_attributes<I, S>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.get_attributes = Some(attributes.into_iter().map(Into::into).collect());
        self
    }
}

/// How the conditions of a condition search are combined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    And,
    Or,
}

/// Parameters for a condition search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchByConditionParams {
    #[serde(flatten)]
    pub search: SearchParams,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator: Option<Operator>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
}

impl SearchByConditionParams {
    pub fn new(schema: impl Into<String>, table: impl Into<String>) -> Self {
        Self {
            search: SearchParams::new(schema, table),
            operator: None,
            offset: None,
            limit: None,
        }
    }

    pub fn operator(mut self, operator: Operator) -> Self {
        self.operator = Some(operator);
        self
    }

    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_attributes<I, S>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.search = self.search.with_attributes(attributes);
        self
    }
}

impl From<SearchParams> for SearchByConditionParams {
    fn from(search: SearchParams) -> Self {
        Self {
            search,
            operator: None,
            offset: None,
            limit: None,
        }
    }
}

/// Comparison performed by a search condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchType {
    Equals,
    Contains,
    StartsWith,
    EndsWith,
    GreaterThan,
    GreaterThanEqual,
    LessThan,
    LessThanEqual,
    /// `search_value` must be a `[min, max]` pair
    Between,
}

/// A single filter of a condition search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchCondition {
    pub search_attribute: String,
    pub search_type: SearchType,
    pub search_value: Value,
}

impl SearchCondition {
    pub fn new(
        search_attribute: impl Into<String>,
        search_type: SearchType,
        search_value: impl Into<Value>,
    ) -> Self {
        Self {
            search_attribute: search_attribute.into(),
            search_type,
            search_value: search_value.into(),
        }
    }

    /// `between` condition with an inclusive `[min, max]` range
    pub fn between(
        search_attribute: impl Into<String>,
        min: impl Into<Value>,
        max: impl Into<Value>,
    ) -> Self {
        Self::new(
            search_attribute,
            SearchType::Between,
            Value::Array(vec![min.into(), max.into()]),
        )
    }
}

/// Value of a table's hash attribute for one record
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HashValue {
    Number(Number),
    String(String),
}

macro_rules! hash_value_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for HashValue {
                fn from(value: $t) -> Self {
                    HashValue::Number(Number::from(value))
                }
            }
        )*
    };
}

hash_value_from_int!(i32, i64, u32, u64, usize);

impl From<&str> for HashValue {
    fn from(value: &str) -> Self {
        HashValue::String(value.to_string())
    }
}

impl From<String> for HashValue {
    fn from(value: String) -> Self {
        HashValue::String(value)
    }
}

impl From<HashValue> for Value {
    fn from(value: HashValue) -> Self {
        match value {
            HashValue::Number(n) => Value::Number(n),
            HashValue::String(s) => Value::String(s),
        }
    }
}

impl fmt::Display for HashValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HashValue::Number(n) => write!(f, "{}", n),
            HashValue::String(s) => f.write_str(s),
        }
    }
}
