//! Basic Client Example
//!
//! Creates a schema and a table, writes a few records and cleans up again.
//! Connection settings come from `harperdb.json` when present, otherwise from
//! the `HARPERDB_*` environment variables.
//!
//! Run with: cargo run --example basic_usage

use harperdb_rs::{Client, ClientConfig, CreateTableParams, TableParams};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Serialize)]
struct Dog {
    id: u32,
    name: String,
    breed: String,
    age: u32,
}

fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("harperdb_rs=debug,harperdb_core=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let config = ClientConfig::load("harperdb.json").or_else(|_| {
        tracing::warn!("Failed to load harperdb.json, reading HARPERDB_* variables");
        ClientConfig::from_env()
    })?;

    let db = Client::new(config)?;
    println!("Connected to {}\n", db.url());

    let schema = "dev";
    let table = TableParams::new(schema, "dog");

    let result = db.create_schema(schema).await?;
    println!("📁 create_schema: {} {:?} {:?}", result.status, result.message, result.error);

    let result = db
        .create_table(&CreateTableParams::new(schema, "dog", "id"))
        .await?;
    println!("📋 create_table: {} {:?} {:?}", result.status, result.message, result.error);

    let dogs = vec![
        Dog { id: 1, name: "Penny".into(), breed: "Mutt".into(), age: 5 },
        Dog { id: 2, name: "Kato".into(), breed: "Akita".into(), age: 4 },
    ];
    let result = db.insert_many(&dogs, &table).await?;
    println!("📝 insert_many: {:?} (inserted {:?})", result.message, result.hashes);

    let older = Dog { id: 2, name: "Kato".into(), breed: "Akita".into(), age: 5 };
    let result = db.upsert_one(&older, &table).await?;
    println!("🔁 upsert_one: {:?}", result.message);

    let result = db.delete_one(1, &table).await?;
    println!("🗑️  delete_one: {:?} (skipped {:?})", result.message, result.skipped_hashes);

    let result = db.drop_schema(schema).await?;
    println!("🧹 drop_schema: {} {:?}", result.status, result.message);

    Ok(())
}
