mod commands;

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use commands::{EXIT_FAILURE, EXIT_MANIFEST_ERROR};
use pakket_manifest::ReleaseKind;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(
    name = "pakket",
    version,
    about = "Create, validate, sort and format package manifests"
)]
struct Cli {
    /// Output results as structured JSON.
    #[arg(long, default_value_t = false, global = true)]
    json: bool,

    /// Enable verbose (debug) logging output.
    #[arg(short, long, default_value_t = false, global = true)]
    verbose: bool,

    /// Enable trace-level logging (more detailed than --verbose).
    #[arg(long, default_value_t = false, global = true)]
    trace: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Create a manifest from a preset.
    Create {
        /// Target manifest file.
        #[arg(default_value = "package.json")]
        path: PathBuf,
        /// Package name; prompted for interactively when omitted on a TTY.
        #[arg(long)]
        name: Option<String>,
        /// Package version.
        #[arg(long)]
        version: Option<String>,
        /// Package description.
        #[arg(long)]
        description: Option<String>,
        /// Author field.
        #[arg(long)]
        author: Option<String>,
        /// License identifier.
        #[arg(long)]
        license: Option<String>,
        /// Preset template (basic, library, cli, typescript, monorepo).
        #[arg(long)]
        preset: Option<String>,
        /// Module system for the "type" field (module or commonjs).
        #[arg(long)]
        module_type: Option<String>,
        /// Mark the package private.
        #[arg(long, default_value_t = false)]
        private: bool,
        /// Overwrite an existing manifest.
        #[arg(long, default_value_t = false)]
        force: bool,
    },
    /// Canonically sort and rewrite an existing manifest.
    Format {
        /// Manifest file to format.
        #[arg(default_value = "package.json")]
        path: PathBuf,
        /// Indentation width in spaces.
        #[arg(long, default_value_t = 2)]
        indent: usize,
        /// Also alphabetize script keys.
        #[arg(long, default_value_t = false)]
        sort_scripts: bool,
        /// Keep dependency keys in their current order.
        #[arg(long, default_value_t = false)]
        no_sort_dependencies: bool,
    },
    /// Check a manifest against the required-field and grammar rules.
    Validate {
        /// Manifest file to validate.
        #[arg(default_value = "package.json")]
        path: PathBuf,
        /// Also report stylistic warnings.
        #[arg(long, default_value_t = false)]
        strict: bool,
    },
    /// Increment the manifest version and rewrite the file.
    Bump {
        /// Which component to bump: major, minor, or patch.
        level: String,
        /// Manifest file to rewrite.
        #[arg(default_value = "package.json")]
        path: PathBuf,
    },
    /// List the built-in presets.
    Presets,
    /// Generate shell completions for bash, zsh, fish, elvish, or powershell.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
    /// Generate man pages in the specified directory.
    ManPages {
        /// Output directory for man pages.
        #[arg(default_value = "man")]
        dir: PathBuf,
    },
}

fn main() -> ExitCode {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let msg = info.to_string();
        if msg.contains("Broken pipe")
            || msg.contains("broken pipe")
            || msg.contains("os error 32")
            || msg.contains("failed printing to stdout")
        {
            std::process::exit(0);
        }
        default_hook(info);
    }));

    let cli = Cli::parse();

    let default_level = if cli.trace {
        "trace"
    } else if cli.verbose {
        "debug"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("PAKKET_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_target(false)
        .without_time()
        .init();

    let json_output = cli.json;

    let result = match cli.command {
        Commands::Create {
            path,
            name,
            version,
            description,
            author,
            license,
            preset,
            module_type,
            private,
            force,
        } => commands::create::run(
            &path,
            commands::create::CreateArgs {
                name,
                version,
                description,
                author,
                license,
                preset,
                module_type,
                private,
            },
            force,
            json_output,
        ),
        Commands::Format {
            path,
            indent,
            sort_scripts,
            no_sort_dependencies,
        } => commands::format::run(
            &path,
            indent,
            sort_scripts,
            !no_sort_dependencies,
            json_output,
        ),
        Commands::Validate { path, strict } => commands::validate::run(&path, strict, json_output),
        Commands::Bump { level, path } => level
            .parse::<ReleaseKind>()
            .and_then(|kind| commands::bump::run(&path, kind, json_output)),
        Commands::Presets => commands::presets::run(json_output),
        Commands::Completions { shell } => commands::completions::run::<Cli>(shell),
        Commands::ManPages { dir } => commands::man_pages::run::<Cli>(&dir),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(msg) => {
            eprintln!("error: {msg}");
            let code = if msg.starts_with("failed to parse manifest")
                || msg.starts_with("failed to read manifest")
                || msg.starts_with("invalid manifest")
            {
                EXIT_MANIFEST_ERROR
            } else {
                EXIT_FAILURE
            };
            ExitCode::from(code)
        }
    }
}
