use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};

use chatfmt::Config;

/// Looked up in the working directory when `--config` is not given
const DEFAULT_CONFIG_FILE: &str = "chatfmt.toml";

#[derive(Parser)]
#[command(name = "chatfmt", version)]
#[command(about = "Render, strip and preview WhatsApp-formatted messages")]
struct Cli {
    /// Config file (defaults to ./chatfmt.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a message
    Render {
        /// Input file, or `-` for stdin
        input: Option<PathBuf>,

        #[arg(short, long, value_enum, default_value_t = Format::Html)]
        format: Format,
    },

    /// Print a message with all formatting removed
    Strip {
        /// Input file, or `-` for stdin
        input: Option<PathBuf>,
    },

    /// Print a single-line preview of a message
    Preview {
        /// Input file, or `-` for stdin
        input: Option<PathBuf>,

        /// Override the configured preview length
        #[arg(short, long)]
        max_chars: Option<usize>,
    },

    /// Format a phone number for display
    Phone {
        number: String,

        /// Print only the digits
        #[arg(long)]
        digits: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Html,
    Json,
    Tree,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => match Config::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error reading config {}: {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => Config::load(Path::new(DEFAULT_CONFIG_FILE)),
    };

    let output = match cli.command {
        Command::Render { input, format } => {
            let text = read_input(input.as_deref());
            match format {
                Format::Html => chatfmt::to_html_with_config(&text, &config),
                Format::Json => {
                    let blocks = chatfmt::parse_with_config(&text, &config);
                    match serde_json::to_string_pretty(&blocks) {
                        Ok(json) => json,
                        Err(e) => {
                            eprintln!("Error serializing blocks: {}", e);
                            std::process::exit(1);
                        }
                    }
                }
                Format::Tree => format!("{:#?}", chatfmt::parse_with_config(&text, &config)),
            }
        }
        Command::Strip { input } => {
            let text = read_input(input.as_deref());
            chatfmt::strip_with_config(&text, &config)
        }
        Command::Preview { input, max_chars } => {
            let text = read_input(input.as_deref());
            if let Some(max_chars) = max_chars {
                config.preview.max_chars = max_chars;
            }
            chatfmt::preview_with_config(&text, &config)
        }
        Command::Phone { number, digits } => {
            if digits {
                chatfmt::phone_digits(&number)
            } else {
                chatfmt::format_brazilian_phone(&number)
            }
        }
    };

    println!("{}", output);
}

/// Read the message from a file, or from stdin for `-` or no path.
/// Exits on failure.
fn read_input(path: Option<&Path>) -> String {
    let result = match path {
        Some(path) if path != Path::new("-") => fs::read_to_string(path),
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf).map(|_| buf)
        }
    };

    match result {
        // Drop the newline that terminates the file, not the message
        Ok(mut text) => {
            if text.ends_with('\n') {
                text.pop();
                if text.ends_with('\r') {
                    text.pop();
                }
            }
            text
        }
        Err(e) => {
            let source = path.map_or("stdin".into(), |p| p.display().to_string());
            eprintln!("Error reading {}: {}", source, e);
            std::process::exit(1);
        }
    }
}
