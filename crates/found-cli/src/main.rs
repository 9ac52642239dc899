mod commands;
mod settings;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use commands::ViewOptions;
use found_core::Point;
use found_graph::{RenderOutcome, Size};
use settings::Settings;
use std::path::PathBuf;

/// Inspect and render note graphs
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a settings file (defaults to the user config directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the minimap of a graph document to a PNG image
    Render {
        /// Graph document (JSON)
        document: PathBuf,

        /// Output image path
        #[arg(short, long, default_value = "minimap.png")]
        output: PathBuf,

        #[command(flatten)]
        view: ViewArgs,
    },
    /// Print the bounding box of the laid-out nodes as JSON
    Bounds {
        /// Graph document (JSON)
        document: PathBuf,
    },
    /// Resolve a click on the minimap to a graph point and new pan
    Locate {
        /// Graph document (JSON)
        document: PathBuf,

        /// Minimap pixel x
        #[arg(long, allow_negative_numbers = true)]
        x: f64,

        /// Minimap pixel y
        #[arg(long, allow_negative_numbers = true)]
        y: f64,

        #[command(flatten)]
        view: ViewArgs,
    },
    /// Add a captured text snippet as a new note
    Capture {
        /// Graph document (JSON); created if missing
        document: PathBuf,

        /// Captured text
        #[arg(short, long)]
        text: String,

        /// Page the text was captured from
        #[arg(short, long)]
        url: Option<String>,
    },
}

#[derive(Args, Debug, Clone, Copy)]
struct ViewArgs {
    /// Main view pan, x
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pan_x: f64,

    /// Main view pan, y
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pan_y: f64,

    /// Main view zoom
    #[arg(long, default_value_t = 1.0)]
    zoom: f64,

    /// Main view width in pixels
    #[arg(long, requires = "view_height")]
    view_width: Option<f64>,

    /// Main view height in pixels
    #[arg(long, requires = "view_width")]
    view_height: Option<f64>,
}

impl From<ViewArgs> for ViewOptions {
    fn from(args: ViewArgs) -> Self {
        let view_size = match (args.view_width, args.view_height) {
            (Some(width), Some(height)) => Some(Size::new(width, height)),
            _ => None,
        };
        Self {
            pan: Point::new(args.pan_x, args.pan_y),
            zoom: args.zoom,
            view_size,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref());

    match cli.command {
        Command::Render {
            document,
            output,
            view,
        } => {
            let outcome = commands::render(&document, &output, &view.into(), &settings)?;
            match outcome {
                RenderOutcome::Drawn(stats) => println!(
                    "Wrote {:?}: {} nodes, {} edges",
                    output, stats.nodes_drawn, stats.edges_drawn
                ),
                RenderOutcome::Skipped(reason) => {
                    println!("Wrote blank minimap {:?} ({:?})", output, reason)
                }
            }
        }
        Command::Bounds { document } => match commands::bounds(&document)? {
            Some(bounds) => println!("{}", serde_json::to_string_pretty(&bounds)?),
            None => println!("null"),
        },
        Command::Locate {
            document,
            x,
            y,
            view,
        } => match commands::locate(&document, Point::new(x, y), &view.into(), &settings)? {
            Some(report) => println!("{}", serde_json::to_string_pretty(&report)?),
            None => println!("null"),
        },
        Command::Capture {
            document,
            text,
            url,
        } => {
            let node = commands::capture(&document, &text, url.as_deref())?;
            println!("Captured {} ({})", node.id, node.label);
        }
    }

    Ok(())
}
