use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::json;
use swatch_engine::{BaseColorList, Palette, decode, variants_of};
use swatch_util::{OutputFormat, SwatchConfig};
use tracing::debug;

/// Derive a color palette from a few base colors.
#[derive(Parser, Debug)]
#[command(name = "swatch", version, about)]
struct Cli {
    /// Path to a JSON config file (defaults to $SWATCH_CONFIG_PATH or the user config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a palette: base colors followed by their lighter, darker and complementary variants
    Generate {
        /// Base colors as #RRGGBB, at most 5 (quote them in the shell)
        colors: Vec<String>,

        /// Output format
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Include the kind and base color index of every entry
        #[arg(long)]
        detailed: bool,
    },
    /// Show the RGB channels and the three variants of a single color
    Inspect {
        /// Color as #RRGGBB
        color: String,

        /// Output format
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = SwatchConfig::load(cli.config.as_deref()).context("failed to load config")?;

    let output = match cli.command {
        Command::Generate {
            colors,
            format,
            detailed,
        } => {
            let base = resolve_base_colors(colors, &config)?;
            debug!(colors = ?base.colors(), "generating palette");
            let palette = base.generate().context("failed to generate palette")?;
            render_palette(&palette, resolve_format(format, &config), detailed)?
        }
        Command::Inspect { color, format } => render_inspect(&color, resolve_format(format, &config))?,
    };

    println!("{}", output);
    Ok(())
}

fn init_tracing() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Command-line colors win, then configured colors, then the built-in default.
fn resolve_base_colors(colors: Vec<String>, config: &SwatchConfig) -> Result<BaseColorList> {
    if !colors.is_empty() {
        return BaseColorList::from_colors(colors).context("invalid base colors");
    }
    match config.base_colors() {
        Some(configured) => BaseColorList::from_colors(configured.iter().cloned()).context("invalid base colors in config"),
        None => Ok(BaseColorList::new()),
    }
}

/// `--format` wins, then the configured format, then text.
fn resolve_format(cli: Option<OutputFormat>, config: &SwatchConfig) -> OutputFormat {
    cli.or(config.format).unwrap_or_default()
}

fn render_palette(palette: &Palette, format: OutputFormat, detailed: bool) -> Result<String> {
    let rendered = match (format, detailed) {
        (OutputFormat::Text, false) => palette.colors().join("\n"),
        (OutputFormat::Text, true) => palette
            .iter()
            .map(|entry| format!("{}\t{}\t{}", entry.color, entry.kind, entry.source))
            .collect::<Vec<_>>()
            .join("\n"),
        (OutputFormat::Json, false) => serde_json::to_string_pretty(&palette.colors())?,
        (OutputFormat::Json, true) => serde_json::to_string_pretty(palette)?,
    };
    Ok(rendered)
}

fn render_inspect(color: &str, format: OutputFormat) -> Result<String> {
    let rgb = decode(color).context("failed to inspect color")?;
    let derived = variants_of(rgb);
    let rendered = match format {
        OutputFormat::Text => {
            let mut lines = vec![format!("{}\t{}", color, rgb)];
            lines.extend(derived.iter().map(|(kind, value)| format!("{}\t{}", value, kind)));
            lines.join("\n")
        }
        OutputFormat::Json => {
            let variants: Vec<_> = derived
                .iter()
                .map(|(kind, value)| json!({ "kind": kind, "color": value }))
                .collect();
            serde_json::to_string_pretty(&json!({
                "color": color,
                "rgb": rgb,
                "variants": variants,
            }))?
        }
    };
    Ok(rendered)
}
