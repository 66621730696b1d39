use std::{
    fs,
    io::{self, Write},
    path::Path,
};

use anyhow::{Context, Result};

use super::super::args::ExtractCommand;
use super::{CommandResult, CommandSummary, ExtractSummary};
use crate::core::{Catalog, ExtractContext};

/// Output path that sends the catalog to stdout.
pub const STDOUT_OUTPUT: &str = "-";

pub fn extract(cmd: ExtractCommand) -> Result<CommandResult> {
    let ctx = ExtractContext::new(&cmd.args.common)?;
    let result = ctx.extract();

    write_catalog(&result.catalog, &ctx.config.output)?;

    Ok(CommandResult {
        summary: CommandSummary::Extract(ExtractSummary {
            entry_count: result.catalog.len(),
            output: ctx.config.output.clone(),
        }),
        diagnostics: result.diagnostics,
        parse_failures: result.parse_failures,
        source_files_checked: result.files_checked,
    })
}

/// Serialize the catalog as pretty-printed JSON.
pub fn catalog_json(catalog: &Catalog) -> Result<String> {
    let mut json = serde_json::to_string_pretty(catalog).context("Failed to serialize catalog")?;
    json.push('\n');
    Ok(json)
}

/// Write the catalog to `output`, creating parent directories as needed.
pub fn write_catalog(catalog: &Catalog, output: &str) -> Result<()> {
    let json = catalog_json(catalog)?;

    if output == STDOUT_OUTPUT {
        io::stdout()
            .lock()
            .write_all(json.as_bytes())
            .context("Failed to write catalog to stdout")?;
        return Ok(());
    }

    let path = Path::new(output);
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {:?}", parent))?;
    }
    fs::write(path, json).with_context(|| format!("Failed to write catalog: {:?}", path))
}
