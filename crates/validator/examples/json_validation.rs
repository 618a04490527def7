//! Decoding JSON and validating the whole tree in one call.
//!
//! Run: `cargo run -p vouch-validator --example json_validation`

use serde::Deserialize;
use vouch_validator::prelude::*;
use vouch_validator::json;

#[derive(Debug, Deserialize, Reflect)]
struct Endpoint {
    host: required::NonEmptyPrintable<String>,
    port: optional::Positive<u16>,
}

#[derive(Debug, Deserialize, Reflect)]
#[vouch(validate)]
struct Config {
    name: required::Alphanumeric<String>,
    primary: Endpoint,
    #[serde(default)]
    replicas: Vec<Endpoint>,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), ValidationError> {
        let primary = self.primary.host.get();
        if self.replicas.iter().any(|replica| replica.host.get() == primary) {
            return Err(ValidationError::new("replica", "a replica repeats the primary host"));
        }
        Ok(())
    }
}

fn main() {
    let documents = [
        r#"{"name": "main", "primary": {"host": "db1", "port": 5432}}"#,
        r#"{"name": "main", "primary": {"host": "db1"}, "replicas": [{"host": ""}]}"#,
        r#"{"name": "main", "primary": {"host": "db1"}, "replicas": [{"host": "db1"}]}"#,
        r#"{"name": "main!", "primary": {"host": "db1"}}"#,
        r#"{"name": "main", "primary": {"host": "db1", "port": "x"}}"#,
    ];

    for document in documents {
        match json::from_str::<Config>(document) {
            Ok(config) => println!(
                "ok: {} -> {}:{}",
                config.name.get(),
                config.primary.host.get(),
                config.primary.port.get().copied().unwrap_or(5432)
            ),
            Err(e) => println!("rejected: {e}"),
        }
    }
}
