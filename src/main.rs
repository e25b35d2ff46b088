use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::Parser;
use mdhtml::{Config, MdError};

#[derive(Parser)]
#[command(name = "mdhtml")]
#[command(about = "Convert Markdown to HTML")]
struct Cli {
    /// Input Markdown file (reads stdin when omitted)
    input: Option<PathBuf>,

    /// Output HTML file (writes stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// TOML config file
    #[arg(short, long, default_value = "mdhtml.toml")]
    config: PathBuf,

    /// More log output; repeat for trace level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), MdError> {
    let config = Config::load_or_default(&cli.config)?;

    // Read input file
    let markdown = match &cli.input {
        Some(path) => fs::read_to_string(path).map_err(|source| MdError::Io {
            path: path.clone(),
            source,
        })?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(|source| MdError::Io {
                    path: PathBuf::from("<stdin>"),
                    source,
                })?;
            buf
        }
    };

    let html = mdhtml::markdown_to_html_with_config(&markdown, &config)?;

    match &cli.output {
        Some(path) => {
            fs::write(path, html).map_err(|source| MdError::Io {
                path: path.clone(),
                source,
            })?;
            log::info!("Created {}", path.display());
        }
        None => println!("{html}"),
    }

    Ok(())
}
