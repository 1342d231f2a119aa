//! Serialize the schema registry (types + desk structure) to JSON on
//! stdout for the external editorial tool.

use serde_json::json;

fn main() -> anyhow::Result<()> {
    let export = json!({
        "types": studio::registry(),
        "structure": studio::structure(),
    });
    println!("{}", serde_json::to_string_pretty(&export)?);
    Ok(())
}
