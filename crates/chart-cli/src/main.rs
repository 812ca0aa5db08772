// File: crates/chart-cli/src/main.rs
// Summary: `chart-tool` entry point: argument parsing, tracing setup, dispatch.

use std::path::PathBuf;

use anyhow::Result;
use chart_cli::{
    call_json, csv_json, read_source, render_to_file, resolve_options, resource_json, tools_json, ChartKind,
};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "chart-tool", version, about = "Chart tools: sanitize arguments, build payloads, render charts")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the tool descriptors.
    Tools,
    /// Call a tool and print its response.
    Call {
        /// Tool name, e.g. draw-line-chart.
        tool: String,
        /// JSON arguments file, or `-` for stdin. Defaults to `{}`.
        #[arg(long)]
        args: Option<String>,
    },
    /// Render a payload or tool result to SVG/PNG.
    Render {
        /// Payload file, or `-` for stdin.
        input: String,
        #[arg(long)]
        out: PathBuf,
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        y_min: String,
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        y_max: String,
        #[arg(long)]
        width: Option<u32>,
        #[arg(long)]
        height: Option<u32>,
        /// TOML render configuration.
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Build tool arguments from a CSV file and print the tool response.
    Csv {
        file: PathBuf,
        #[arg(long, value_enum, default_value_t = ChartKind::Bar)]
        kind: ChartKind,
        #[arg(long)]
        title: Option<String>,
    },
    /// Print the UI resource contents.
    Resource {
        #[arg(long)]
        asset: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    debug!(?cli.command, "CLI arguments parsed");

    match cli.command {
        Command::Tools => println!("{}", tools_json()?),
        Command::Call { tool, args } => {
            let text = match args.as_deref() {
                Some(source) => read_source(source)?,
                None => String::new(),
            };
            println!("{}", call_json(&tool, &text)?);
        }
        Command::Render { input, out, y_min, y_max, width, height, config } => {
            let options = resolve_options(config.as_deref(), width, height)?;
            let text = read_source(&input)?;
            let frame = render_to_file(&text, &out, options, &y_min, &y_max)?;
            println!("{}", frame.status);
            println!("{}", frame.meta);
            println!("Wrote {}", out.display());
        }
        Command::Csv { file, kind, title } => println!("{}", csv_json(&file, kind, title.as_deref())?),
        Command::Resource { asset } => println!("{}", resource_json(asset.as_deref())?),
    }
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();
}
