//! hello-ui - mount the component tree in a headless host and drive it.
//!
//! Usage:
//!   hello-ui dump                    # Print the mounted tree
//!   hello-ui hover --times 3         # Hover the button, then print the tree
//!   hello-ui type "Test input"       # Type into the input, then print the tree

use clap::{Parser, Subcommand};
use hello_ui::app::{self, BUTTON_LABEL, INPUT_PLACEHOLDER};
use hello_ui::config::HostConfig;
use hello_ui::dump::{format_frame_tree, frame_tree_json};
use hello_ui::UiHost;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hello-ui")]
#[command(about = "Headless host for the hello-ui component tree")]
struct Cli {
    /// Config file (defaults to the user data directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print the tree as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Mount the app and print the tree
    Dump,

    /// Hover the tooltip button, then print the tree
    Hover {
        /// Number of pointer-enter events to send
        #[arg(short, long, default_value_t = 1)]
        times: u32,
    },

    /// Type into the text input, then print the tree
    Type {
        /// Text to type, one keystroke per character
        text: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => HostConfig::load_from(path),
        None => HostConfig::load(),
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut host = UiHost::new();
    let root = host.mount(app::app());

    match cli.command {
        Commands::Dump => {}
        Commands::Hover { times } => {
            let button = host.get_by_text(BUTTON_LABEL)?;
            for _ in 0..times {
                host.hover(button)?;
            }
        }
        Commands::Type { text } => {
            let input = host.get_by_placeholder_text(INPUT_PLACEHOLDER)?;
            host.type_text(input, &text)?;
        }
    }

    if cli.json || config.json_output {
        println!("{}", frame_tree_json(host.widgets(), root)?);
    } else {
        print!("{}", format_frame_tree(host.widgets(), root));
    }
    Ok(())
}
