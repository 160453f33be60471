//! Argument parsing and the convert command

use anyhow::{bail, Context, Result};
use clap::Parser;
use cte::constants::DEFAULT_MAX_DEPTH;
use cte::{convert_str, ConvertOptions, Converted, Format};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{debug, warn};

/// Convert YAML/TOML/JSON configuration files to environment variables
#[derive(Parser, Debug, Clone)]
#[command(name = "cte")]
#[command(version)]
#[command(about = "Config to ENV converter - convert YAML/TOML/JSON configs to environment variables", long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output file path (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Configuration format: yaml, toml, json (defaults to the file extension)
    #[arg(short, long)]
    pub format: Option<Format>,

    /// Prefix prepended to every variable name
    #[arg(short, long, default_value = "", env = "CTE_PREFIX")]
    pub prefix: String,

    /// Separator placed between nested key segments
    #[arg(short = 's', long, default_value = "_")]
    pub separator: String,

    /// Keep the original letter case of keys
    #[arg(long)]
    pub no_uppercase: bool,

    /// Sort variables by name instead of document order
    #[arg(long)]
    pub sort: bool,

    /// Maximum nesting depth accepted
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,

    /// Fail when two keys normalize to the same variable name
    #[arg(long)]
    pub strict: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn options(&self) -> ConvertOptions {
        ConvertOptions::default()
            .with_prefix(self.prefix.clone())
            .with_separator(self.separator.clone())
            .with_uppercase(!self.no_uppercase)
            .with_sort_keys(self.sort)
            .with_max_depth(self.max_depth)
    }

    /// Explicit format, or the one implied by the input file extension
    pub fn resolve_format(&self) -> Result<Format> {
        match self.format {
            Some(format) => Ok(format),
            None => Format::from_path(&self.input).context("Use --format to set it explicitly"),
        }
    }
}

/// Read and convert the input file, reporting collisions as warnings
pub fn render(args: &Args) -> Result<Converted> {
    let content = fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read file: {}", args.input.display()))?;

    let format = args.resolve_format()?;
    debug!(input = %args.input.display(), %format, "Converting configuration");

    let converted = convert_str(&content, format, Some(args.options()))
        .with_context(|| format!("Failed to convert {}", args.input.display()))?;

    for collision in &converted.collisions {
        warn!("{}", collision);
    }
    if args.strict && converted.has_collisions() {
        bail!(
            "{} key collision(s) in {}",
            converted.collisions.len(),
            args.input.display()
        );
    }

    Ok(converted)
}

/// Convert and write the result to the output file or stdout
pub fn run(args: &Args) -> Result<()> {
    let converted = render(args)?;

    match &args.output {
        Some(path) => {
            fs::write(path, &converted.output)
                .with_context(|| format!("Failed to write to file: {}", path.display()))?;
            eprintln!("Successfully written to: {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(converted.output.as_bytes())
                .context("Failed to write to stdout")?;
            stdout.flush().context("Failed to write to stdout")?;
        }
    }

    Ok(())
}
