//! Writes JSON Schemas for the public pricing types.
//!
//! ```text
//! cargo run --features cli --bin export_schemas -- --out-dir schemas
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use flight_pricing::domain::value_objects::{
    PriceBreakdown, PricingInputs, PricingResult, SweepSeries,
};
use schemars::schema::RootSchema;
use schemars::schema_for;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(about = "Export JSON Schemas for flight pricing types")]
struct Args {
    /// Directory the schema files are written to.
    #[arg(long, default_value = "schemas")]
    out_dir: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating {}", args.out_dir.display()))?;

    let schemas: [(&str, RootSchema); 4] = [
        ("pricing_inputs", schema_for!(PricingInputs)),
        ("pricing_result", schema_for!(PricingResult)),
        ("price_breakdown", schema_for!(PriceBreakdown)),
        ("sweep_series", schema_for!(SweepSeries)),
    ];

    for (name, schema) in &schemas {
        let path = args.out_dir.join(format!("{name}.schema.json"));
        let json = serde_json::to_string_pretty(schema)
            .with_context(|| format!("serializing {name} schema"))?;
        fs::write(&path, json).with_context(|| format!("writing {}", path.display()))?;
        println!("{}", path.display());
    }

    Ok(())
}
