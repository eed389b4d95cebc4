use crate::Result;
use harperdb_core::response::parse_body;
use harperdb_core::request::to_normalized_map;
use harperdb_core::utils::strip_unset;
use harperdb_core::{
    AttributeParams, ClientConfig, CreateTableParams, Credentials, HashValue, MutationResult,
    Operation, OperationRequest, SearchByConditionParams, SearchCondition, SearchParams,
    SearchResult, StatusResult, TableParams,
};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client as HttpClient;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;

/// HarperDB operations API client
#[derive(Clone)]
pub struct Client {
    url: String,
    credentials: Credentials,
    client: HttpClient,
}

impl Client {
    /// Create a client for the endpoint in `config`.
    ///
    /// Fails without touching the network when the config carries neither a
    /// token nor a complete username/password pair.
    pub fn new(config: ClientConfig) -> Result<Self> {
        Self::with_http_client(config, HttpClient::new())
    }

    /// Create a client that sends requests through a preconfigured `reqwest` client
    pub fn with_http_client(config: ClientConfig, client: HttpClient) -> Result<Self> {
        let credentials = config.validate()?;
        Ok(Self {
            url: config.url,
            credentials,
            client,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// The auth options in use: `url` plus either `username`/`password` or `token`
    pub fn auth(&self) -> Map<String, Value> {
        let (username, password, token) = match &self.credentials {
            Credentials::Basic { username, password } => {
                (Some(username.clone()), Some(password.clone()), None)
            }
            Credentials::Token(token) => (None, None, Some(token.clone())),
        };

        strip_unset([
            ("url", Some(Value::String(self.url.clone()))),
            ("username", username.map(Value::String)),
            ("password", password.map(Value::String)),
            ("token", token.map(Value::String)),
        ])
    }

    /// Basic auth token: the configured token, or base64 of `username:password`
    pub fn generated_token(&self) -> String {
        self.credentials.token()
    }

    fn headers(&self) -> Result<HeaderMap> {
        let mut authorization = HeaderValue::from_str(&format!("Basic {}", self.generated_token()))?;
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, authorization);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(headers)
    }

    async fn post(&self, request: OperationRequest) -> Result<(u16, Value)> {
        let operation = request.operation();
        let body = request.into_body();

        tracing::debug!(%operation, url = %self.url, "sending operation");

        let response = self
            .client
            .post(&self.url)
            .headers(self.headers()?)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let bytes = response.bytes().await?;

        if status.is_success() {
            tracing::debug!(%operation, status = status.as_u16(), "operation completed");
        } else {
            tracing::warn!(%operation, status = status.as_u16(), "operation returned error status");
        }

        Ok((status.as_u16(), parse_body(&bytes)))
    }

    async fn status_operation(&self, request: OperationRequest) -> Result<StatusResult> {
        let (status, body) = self.post(request).await?;
        Ok(StatusResult::from_response(status, &body))
    }

    async fn mutation(&self, request: OperationRequest) -> Result<MutationResult> {
        let operation = request.operation();
        let (status, body) = self.post(request).await?;
        Ok(MutationResult::from_response(operation, status, &body))
    }

    async fn search(&self, request: OperationRequest) -> Result<SearchResult> {
        let (status, body) = self.post(request).await?;
        Ok(SearchResult::from_response(status, body))
    }

    // ========================================================================
    // Schemas
    // ========================================================================

    /// Create a new schema
    pub async fn create_schema(&self, schema: impl Into<String>) -> Result<StatusResult> {
        let request =
            OperationRequest::new(Operation::CreateSchema).field("schema", Value::String(schema.into()));
        self.status_operation(request).await
    }

    /// Drop a schema and every table in it
    pub async fn drop_schema(&self, schema: impl Into<String>) -> Result<StatusResult> {
        let request =
            OperationRequest::new(Operation::DropSchema).field("schema", Value::String(schema.into()));
        self.status_operation(request).await
    }

    // ========================================================================
    // Tables
    // ========================================================================

    /// Create a new table
    pub async fn create_table(&self, params: &CreateTableParams) -> Result<StatusResult> {
        let request = OperationRequest::new(Operation::CreateTable).with_params(params)?;
        self.status_operation(request).await
    }

    /// Drop a table and all of its records
    pub async fn drop_table(&self, params: &TableParams) -> Result<StatusResult> {
        let request = OperationRequest::new(Operation::DropTable).with_params(params)?;
        self.status_operation(request).await
    }

    // ========================================================================
    // Attributes
    // ========================================================================

    /// Create a new attribute.
    ///
    /// HarperDB also creates attributes automatically on insert and update.
    pub async fn create_attribute(&self, params: &AttributeParams) -> Result<StatusResult> {
        let request =
            OperationRequest::new(Operation::CreateAttribute).with_verbatim_params(params)?;
        self.status_operation(request).await
    }

    /// Drop an attribute, deleting its values from every record of the table
    pub async fn drop_attribute(&self, params: &AttributeParams) -> Result<StatusResult> {
        let request =
            OperationRequest::new(Operation::DropAttribute).with_verbatim_params(params)?;
        self.status_operation(request).await
    }

    // ========================================================================
    // Records
    // ========================================================================

    fn records_request<R: Serialize>(
        operation: Operation,
        records: &[R],
        params: &TableParams,
    ) -> Result<OperationRequest> {
        let records = records
            .iter()
            .map(serde_json::to_value)
            .collect::<serde_json::Result<Vec<Value>>>()?;

        Ok(OperationRequest::new(operation)
            .with_verbatim_params(params)?
            .field("records", records))
    }

    /// Insert one record. The record must carry the table's hash attribute.
    pub async fn insert<R: Serialize>(
        &self,
        record: &R,
        params: &TableParams,
    ) -> Result<MutationResult> {
        self.insert_many(std::slice::from_ref(record), params).await
    }

    /// Insert one or more records
    pub async fn insert_many<R: Serialize>(
        &self,
        records: &[R],
        params: &TableParams,
    ) -> Result<MutationResult> {
        let request = Self::records_request(Operation::Insert, records, params)?;
        self.mutation(request).await
    }

    /// Update one record, matched by its hash attribute
    pub async fn update_one<R: Serialize>(
        &self,
        record: &R,
        params: &TableParams,
    ) -> Result<MutationResult> {
        self.update_many(std::slice::from_ref(record), params).await
    }

    /// Update one or more records, matched by their hash attributes
    pub async fn update_many<R: Serialize>(
        &self,
        records: &[R],
        params: &TableParams,
    ) -> Result<MutationResult> {
        let request = Self::records_request(Operation::Update, records, params)?;
        self.mutation(request).await
    }

    /// Insert or update one record by its hash attribute
    pub async fn upsert_one<R: Serialize>(
        &self,
        record: &R,
        params: &TableParams,
    ) -> Result<MutationResult> {
        self.upsert_many(std::slice::from_ref(record), params).await
    }

    /// Insert or update one or more records by their hash attributes
    pub async fn upsert_many<R: Serialize>(
        &self,
        records: &[R],
        params: &TableParams,
    ) -> Result<MutationResult> {
        let request = Self::records_request(Operation::Upsert, records, params)?;
        self.mutation(request).await
    }

    /// Delete the record with the given hash value
    pub async fn delete_one(
        &self,
        hash_value: impl Into<HashValue>,
        params: &TableParams,
    ) -> Result<MutationResult> {
        self.delete_many([hash_value], params).await
    }

    /// Delete every record whose hash value is listed
    pub async fn delete_many<H: Into<HashValue>>(
        &self,
        hash_values: impl IntoIterator<Item = H>,
        params: &TableParams,
    ) -> Result<MutationResult> {
        let request = OperationRequest::new(Operation::Delete)
            .with_verbatim_params(params)?
            .field("hash_values", hash_value_list(hash_values));
        self.mutation(request).await
    }

    // ========================================================================
    // Search
    // ========================================================================

    fn search_request<P: Serialize>(operation: Operation, params: &P) -> Result<OperationRequest> {
        Ok(OperationRequest::new(operation)
            .field("get_attributes", vec![Value::from("*")])
            .with_params(params)?)
    }

    /// Fetch the records with the given hash values
    pub async fn search_by_hash<H: Into<HashValue>>(
        &self,
        hash_values: impl IntoIterator<Item = H>,
        params: &SearchParams,
    ) -> Result<SearchResult> {
        let request = Self::search_request(Operation::SearchByHash, params)?
            .field("hash_values", hash_value_list(hash_values));
        self.search(request).await
    }

    /// Fetch the records whose `search_attribute` matches `search_value`.
    ///
    /// Wildcards (`*`) are allowed in the value.
    pub async fn search_by_value(
        &self,
        search_attribute: impl Into<String>,
        search_value: impl Into<Value>,
        params: &SearchParams,
    ) -> Result<SearchResult> {
        let request = Self::search_request(Operation::SearchByValue, params)?
            .field("search_attribute", Value::String(search_attribute.into()))
            .field("search_value", search_value);
        self.search(request).await
    }

    /// Fetch the records matching `conditions`
    pub async fn search_by_conditions(
        &self,
        conditions: &[SearchCondition],
        params: &SearchByConditionParams,
    ) -> Result<SearchResult> {
        let conditions = conditions
            .iter()
            .map(|condition| to_normalized_map(condition).map(Value::Object))
            .collect::<std::result::Result<Vec<Value>, _>>()?;

        let request = Self::search_request(Operation::SearchByConditions, params)?
            .field("conditions", conditions);
        self.search(request).await
    }
}

fn hash_value_list<H: Into<HashValue>>(hash_values: impl IntoIterator<Item = H>) -> Value {
    Value::Array(
        hash_values
            .into_iter()
            .map(|hash| {
                let hash: HashValue = hash.into();
                Value::from(hash)
            })
            .collect(),
    )
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("url", &self.url)
            .field("credentials", &self.credentials)
            .finish_non_exhaustive()
    }
}
