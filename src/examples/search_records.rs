//! Search Example
//!
//! Shows the three search operations against an existing `dev.dog` table.
//!
//! Run with: cargo run --example search_records

use harperdb_rs::{
    Client, ClientConfig, Operator, SearchByConditionParams, SearchCondition, SearchParams,
    SearchType,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Dog {
    id: u32,
    name: String,
    #[serde(default)]
    age: Option<u32>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let db = Client::new(ClientConfig::from_env()?)?;

    // By hash, all attributes
    let result = db
        .search_by_hash([1, 2], &SearchParams::new("dev", "dog"))
        .await?;
    println!("🔍 search_by_hash ({}):", result.status);
    for dog in result.records_as::<Dog>()? {
        println!("   {} {} {:?}", dog.id, dog.name, dog.age);
    }

    // By value, only a few attributes
    let params = SearchParams::new("dev", "dog").with_attributes(["id", "name"]);
    let result = db.search_by_value("name", "K*", &params).await?;
    println!("🔍 search_by_value ({}): {} records", result.status, result.records.len());

    // By conditions
    let conditions = [
        SearchCondition::new("breed", SearchType::Equals, "Akita"),
        SearchCondition::between("age", 1, 10),
    ];
    let params = SearchByConditionParams::new("dev", "dog")
        .operator(Operator::And)
        .limit(20);
    let result = db.search_by_conditions(&conditions, &params).await?;
    match result.error {
        Some(error) => println!("❌ search_by_conditions failed ({}): {}", result.status, error),
        None => println!("🔍 search_by_conditions: {} records", result.records.len()),
    }

    Ok(())
}
