//! Poetry Camera CLI - Turn a photo into a poem
//!
//! Uploads an image to the Poetry Camera API and prints the poem with its
//! pen name split out.

mod api;
mod config;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::io::Read;
use std::path::PathBuf;
use std::{fs, io};

use api::PoetryClient;
use config::Config;
use poetcam::{split, CreativeParameters, ParsedPoem};

#[derive(Parser)]
#[command(name = "poetcam")]
#[command(about = "Poetry Camera CLI - turn a photo into a poem", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a poem about an image
    Write {
        /// Image file (jpg, jpeg, png, gif)
        image: PathBuf,
        /// Theme to weave into the poem
        #[arg(short, long)]
        keyword: Option<String>,
        /// Poet whose style to imitate
        #[arg(short, long)]
        style: Option<String>,
        /// Desired length, e.g. "10-16 lines" or "8-12"
        #[arg(short, long)]
        length: Option<String>,
        /// Extra free-text instructions
        #[arg(short, long)]
        instructions: Option<String>,
        /// Print the server's text as-is, without splitting the pen name
        #[arg(long)]
        raw: bool,
    },

    /// Split a poem's trailing pen-name line (reads stdin without a file)
    Split {
        /// File with poem text
        file: Option<PathBuf>,
    },

    /// Check the server is reachable
    Health,

    /// Set the server URL
    Server {
        /// Base URL, e.g. https://poetcam.shuttle.app
        url: String,
    },

    /// Set default style and length (empty string clears)
    Defaults {
        #[arg(short, long)]
        style: Option<String>,
        #[arg(short, long)]
        length: Option<String>,
    },

    /// Show current configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Write { image, keyword, style, length, instructions, raw } => {
            cmd_write(image, keyword, style, length, instructions, raw).await
        }
        Commands::Split { file } => cmd_split(file),
        Commands::Health => cmd_health().await,
        Commands::Server { url } => cmd_server(url),
        Commands::Defaults { style, length } => cmd_defaults(style, length),
        Commands::Config => cmd_config(),
    }
}

// ============================================
// Command Implementations
// ============================================

async fn cmd_write(
    image: PathBuf,
    keyword: Option<String>,
    style: Option<String>,
    length: Option<String>,
    instructions: Option<String>,
    raw: bool,
) -> Result<()> {
    let config = Config::load()?;
    let client = PoetryClient::new(&config.base_url);

    let data = fs::read(&image)
        .with_context(|| format!("Failed to read image: {}", image.display()))?;
    let file_name = image
        .file_name()
        .and_then(|n| n.to_str())
        .context("Image path has no file name")?
        .to_string();

    let params = CreativeParameters {
        keyword,
        poet_style: flag_or_default(style, &config.defaults.poet_style),
        length_constraint: flag_or_default(length, &config.defaults.poem_length),
        instructions,
    };

    eprintln!("{}", format!("Writing a poem about {}...", file_name).dimmed());

    let text = client.generate_poem(data, &file_name, &params).await?;

    if raw {
        println!("{}", text);
    } else {
        print_poem(&split(&text));
    }

    Ok(())
}

fn cmd_split(file: Option<PathBuf>) -> Result<()> {
    let text = match file {
        Some(path) => fs::read_to_string(&path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };

    print_poem(&split(&text));
    Ok(())
}

async fn cmd_health() -> Result<()> {
    let config = Config::load()?;
    let client = PoetryClient::new(&config.base_url);

    print!("Checking {}... ", config.base_url);
    match client.health().await {
        Ok(true) => println!("{}", "OK".green()),
        Ok(false) => println!("{}", "Unhealthy".yellow()),
        Err(e) => {
            println!("{}", "Failed".red());
            return Err(e).context("Could not reach Poetry Camera API");
        }
    }

    Ok(())
}

fn cmd_server(url: String) -> Result<()> {
    let mut config = Config::load()?;
    config.set_base_url(&url);
    config.save()?;

    println!("{} Server set to {}", "✓".green(), config.base_url.cyan());
    Ok(())
}

fn cmd_defaults(style: Option<String>, length: Option<String>) -> Result<()> {
    let mut config = Config::load()?;
    config.set_defaults(style, length);
    config.save()?;

    println!(
        "{} Defaults saved (style: {}, length: {})",
        "✓".green(),
        config.defaults.poet_style.as_deref().unwrap_or("-").cyan(),
        config.defaults.poem_length.as_deref().unwrap_or(poetcam::DEFAULT_LENGTH).cyan()
    );
    Ok(())
}

fn cmd_config() -> Result<()> {
    let config = Config::load()?;

    println!("{}", "Configuration:".bold());
    println!("  Path: {:?}", Config::config_path()?);
    println!("  Server: {}", config.base_url);
    println!(
        "  Default Style: {}",
        config.defaults.poet_style.as_deref().unwrap_or("None").cyan()
    );
    println!(
        "  Default Length: {}",
        config.defaults.poem_length.as_deref().unwrap_or(poetcam::DEFAULT_LENGTH).cyan()
    );

    Ok(())
}

/// A blank flag counts as not given, so the saved default still applies
fn flag_or_default(flag: Option<String>, default: &Option<String>) -> Option<String> {
    flag.filter(|value| !value.trim().is_empty())
        .or_else(|| default.clone())
}

fn print_poem(poem: &ParsedPoem) {
    println!("{}", poem.body);
    println!();
    println!("  {}", format!("— {}", poem.author).italic().cyan());
}
