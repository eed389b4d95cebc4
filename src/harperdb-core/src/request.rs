use crate::operations::Operation;
use crate::utils::to_snake_case_keys;
use serde::Serialize;
use serde_json::{Map, Value};

#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error("parameters must serialize to a JSON object, got {0}")]
    NotAnObject(&'static str),

    #[error("failed to serialize parameters: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// JSON body of a single operation, built fresh for every call
#[derive(Debug, Clone, PartialEq)]
pub struct OperationRequest {
    operation: Operation,
    fields: Map<String, Value>,
}

impl OperationRequest {
    pub fn new(operation: Operation) -> Self {
        Self {
            operation,
            fields: Map::new(),
        }
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// Merge a parameter set after converting its keys to snake_case
    pub fn with_params<P: Serialize + ?Sized>(mut self, params: &P) -> Result<Self, RequestError> {
        self.fields.extend(to_normalized_map(params)?);
        Ok(self)
    }

    /// Merge a parameter set with its keys left as serialized
    pub fn with_verbatim_params<P: Serialize + ?Sized>(
        mut self,
        params: &P,
    ) -> Result<Self, RequestError> {
        self.fields.extend(to_map(params)?);
        Ok(self)
    }

    pub fn field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn into_body(self) -> Value {
        let mut body = self.fields;
        body.insert(
            "operation".to_string(),
            Value::String(self.operation.as_str().to_string()),
        );
        Value::Object(body)
    }
}

/// Serialize `value` into a JSON object
pub fn to_map<P: Serialize + ?Sized>(value: &P) -> Result<Map<String, Value>, RequestError> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        other => Err(RequestError::NotAnObject(kind_of(&other))),
    }
}

/// Serialize `value` into a JSON object with snake_case top-level keys
pub fn to_normalized_map<P: Serialize + ?Sized>(
    value: &P,
) -> Result<Map<String, Value>, RequestError> {
    to_map(value).map(to_snake_case_keys)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
