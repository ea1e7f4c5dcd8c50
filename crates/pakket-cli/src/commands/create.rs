use super::{json_pretty, write_atomic, EXIT_SUCCESS};
use console::style;
use dialoguer::{Input, Select};
use pakket_manifest::{
    create_manifest_string, list_presets, validate_name, validate_version, CreateOptions,
    ModuleType,
};
use std::io::{stderr, stdin, IsTerminal};
use std::path::Path;

/// Raw flag values as parsed by clap; conversion to [`CreateOptions`]
/// happens here so flag errors surface as command errors.
#[derive(Debug, Default)]
pub struct CreateArgs {
    pub name: Option<String>,
    pub version: Option<String>,
    pub description: Option<String>,
    pub author: Option<String>,
    pub license: Option<String>,
    pub preset: Option<String>,
    pub module_type: Option<String>,
    pub private: bool,
}

impl CreateArgs {
    fn into_options(self) -> Result<CreateOptions, String> {
        let module_type: Option<ModuleType> = match self.module_type.as_deref() {
            Some(raw) => Some(raw.parse()?),
            None => None,
        };
        Ok(CreateOptions {
            name: self.name,
            version: self.version,
            description: self.description,
            author: self.author,
            license: self.license,
            module_type,
            private: self.private.then_some(true),
            preset: self.preset,
        })
    }
}

pub fn run(path: &Path, args: CreateArgs, force: bool, json: bool) -> Result<u8, String> {
    if path.exists() && !force {
        // an existing target is a warning, never a failure
        eprintln!(
            "{}",
            style(format!(
                "warning: {} already exists, nothing written (pass --force to overwrite)",
                path.display()
            ))
            .yellow()
        );
        if json {
            let payload = serde_json::json!({
                "status": "skipped",
                "path": path,
            });
            println!("{}", json_pretty(&payload)?);
        }
        return Ok(EXIT_SUCCESS);
    }

    let mut options = args.into_options()?;

    let is_tty = stdin().is_terminal() && stderr().is_terminal();
    if is_tty {
        fill_missing_interactively(&mut options)?;
    }
    if options.name.is_none() {
        options.name = Some("my-package".to_owned());
    }

    tracing::debug!(path = %path.display(), "creating manifest");
    let text = create_manifest_string(&options, 2);
    write_atomic(path, &text)?;

    if json {
        let payload = serde_json::json!({
            "status": "written",
            "path": path,
            "name": options.name,
            "preset": options.preset.as_deref().unwrap_or("basic"),
        });
        println!("{}", json_pretty(&payload)?);
    } else {
        println!("created {}", path.display());
    }
    Ok(EXIT_SUCCESS)
}

fn fill_missing_interactively(options: &mut CreateOptions) -> Result<(), String> {
    if options.name.is_none() {
        let name: String = Input::new()
            .with_prompt("package name")
            .default("my-package".to_owned())
            .validate_with(|input: &String| -> Result<(), String> {
                if validate_name(input).is_empty() {
                    Ok(())
                } else {
                    Err("invalid package name (lowercase, optional @scope/, no leading . or _)"
                        .to_owned())
                }
            })
            .interact_text()
            .map_err(|e| format!("prompt failed: {e}"))?;
        options.name = Some(name);
    }

    if options.version.is_none() {
        let version: String = Input::new()
            .with_prompt("version")
            .default("0.1.0".to_owned())
            .validate_with(|input: &String| -> Result<(), String> {
                if validate_version(input).is_empty() {
                    Ok(())
                } else {
                    Err("invalid version (expected x.y.z)".to_owned())
                }
            })
            .interact_text()
            .map_err(|e| format!("prompt failed: {e}"))?;
        options.version = Some(version);
    }

    if options.description.is_none() {
        let description: String = Input::new()
            .with_prompt("description")
            .allow_empty(true)
            .interact_text()
            .map_err(|e| format!("prompt failed: {e}"))?;
        options.description = Some(description);
    }

    if options.preset.is_none() {
        let presets = list_presets();
        let names: Vec<&str> = presets.iter().map(|p| p.name).collect();
        let idx = Select::new()
            .with_prompt("preset")
            .items(&names)
            .default(0)
            .interact()
            .map_err(|e| format!("prompt failed: {e}"))?;
        options.preset = Some(names[idx].to_owned());
    }

    Ok(())
}
