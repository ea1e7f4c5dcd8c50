use super::{json_pretty, EXIT_MANIFEST_ERROR, EXIT_SUCCESS};
use console::style;
use pakket_manifest::{parse_manifest_file, validate_manifest, ValidationIssue};
use std::path::Path;

pub fn run(path: &Path, strict: bool, json: bool) -> Result<u8, String> {
    let manifest = parse_manifest_file(path).map_err(|e| e.to_string())?;
    let result = validate_manifest(&manifest, strict);

    if json {
        println!("{}", json_pretty(&result)?);
        return Ok(if result.valid {
            EXIT_SUCCESS
        } else {
            EXIT_MANIFEST_ERROR
        });
    }

    for error in &result.errors {
        println!("{} {}", style("✗").red(), describe(error));
    }
    for warning in &result.warnings {
        println!("{} {}", style("!").yellow(), describe(warning));
    }

    if result.valid {
        println!("{} {} is valid", style("✓").green(), path.display());
        Ok(EXIT_SUCCESS)
    } else {
        Err(format!(
            "invalid manifest: {} error(s) in {}",
            result.errors.len(),
            path.display()
        ))
    }
}

fn describe(issue: &ValidationIssue) -> String {
    format!("{}: {}", issue.field, issue.message)
}
