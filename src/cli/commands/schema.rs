//! JSON Schema output for the data model.

use crate::error::Result;
use crate::model::{Comment, Issue};
use schemars::schema_for;
use serde_json::{Value, json};
use tracing::info;

fn schemas() -> Result<Value> {
    Ok(json!({
        "Issue": serde_json::to_value(schema_for!(Issue))?,
        "Comment": serde_json::to_value(schema_for!(Comment))?,
    }))
}

/// Execute the schema command. Output is always JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn execute() -> Result<()> {
    info!("Printing data model schemas");
    println!("{}", serde_json::to_string_pretty(&schemas()?)?);
    Ok(())
}
