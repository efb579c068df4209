use anyhow::{Context, Result};
use clap::Args;

#[derive(Args, Debug)]
pub struct SchemaCommand {}

impl SchemaCommand {
    pub fn execute(&self) -> Result<()> {
        let schema = pkgsmith_manifest::manifest_schema();
        let json = serde_json::to_string_pretty(&schema).context("Failed to render schema")?;
        println!("{}", json);
        Ok(())
    }
}
