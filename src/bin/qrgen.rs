//! Command-line QR renderer.
//!
//! Renders the same PNGs as `GET /api/qr` straight to disk, without a
//! running server.
//!
//! # Usage
//!
//! ```bash
//! # Render a code (prompts for the value when omitted)
//! cargo run --bin qrgen -- render example.com --size 512 --output example.png
//!
//! # Custom colors and error correction level
//! cargo run --bin qrgen -- render "hello" --fg "#1e3a8a" --bg "#fef3c7" --level q
//!
//! # Show what would be encoded
//! cargo run --bin qrgen -- normalize example.com
//! ```
//!
//! # Environment Variables
//!
//! Size limits and layout are read from the same `QR_*` variables as the
//! server (see the `config` module).

use qr_badge::application::services::RenderService;
use qr_badge::config::Config;
use qr_badge::domain::entities::{ErrorCorrectionLevel, HexColor, RenderRequest};
use qr_badge::infrastructure::qr::QrcodeEncoder;
use qr_badge::utils::url_normalizer::normalize_input;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use std::path::PathBuf;
use std::sync::Arc;

/// CLI tool for rendering QR codes with the logo badge.
#[derive(Parser)]
#[command(name = "qrgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a QR code to a PNG file
    Render {
        /// Text or URL to encode (prompted when omitted)
        value: Option<String>,

        /// Canvas side in pixels, clamped to the configured limits
        #[arg(short, long)]
        size: Option<u32>,

        /// Module color
        #[arg(long, default_value = "#000000")]
        fg: HexColor,

        /// Background color
        #[arg(long, default_value = "#ffffff")]
        bg: HexColor,

        /// Error correction level: L, M, Q or H
        #[arg(short, long, default_value = "H")]
        level: ErrorCorrectionLevel,

        /// Output file
        #[arg(short, long, default_value = "qr-code.png")]
        output: PathBuf,

        /// Overwrite an existing file without asking
        #[arg(short, long)]
        force: bool,
    },

    /// Print the text that would be encoded for VALUE
    Normalize {
        value: String,
    },
}

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            value,
            size,
            fg,
            bg,
            level,
            output,
            force,
        } => render(value, size, fg, bg, level, output, force),
        Commands::Normalize { value } => {
            println!("{}", normalize_input(&value));
            Ok(())
        }
    }
}

/// Renders one code and writes it to `output`.
///
/// # Flow
///
/// 1. Prompt for the value (or use provided)
/// 2. Confirm before overwriting (unless `--force`)
/// 3. Render with the configured layout
/// 4. Write the PNG and report its dimensions
fn render(
    value: Option<String>,
    size: Option<u32>,
    fg: HexColor,
    bg: HexColor,
    level: ErrorCorrectionLevel,
    output: PathBuf,
    force: bool,
) -> Result<()> {
    let config = Config::from_env()?;
    config.validate()?;

    println!("{}", "QR Code Render".bright_blue().bold());
    println!();

    let value = match value {
        Some(v) => v,
        None => Input::new()
            .with_prompt("Value to encode")
            .with_initial_text("https://")
            .interact_text()?,
    };

    if output.exists() && !force {
        let confirmed = Confirm::new()
            .with_prompt(format!("{} exists. Overwrite?", output.display()))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    let service = RenderService::new(Arc::new(QrcodeEncoder::new()), config.layout);
    let request = RenderRequest::new(value, size, &config.size_limits)
        .with_colors(fg, bg)
        .with_level(level);

    let png = service
        .render_png(&request)
        .context("Failed to render")?;

    std::fs::write(&output, &png)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!("  Encoded: {}", normalize_input(&request.text).cyan());
    println!(
        "  Size:    {}",
        format!("{0}x{0}", request.size).bright_white()
    );
    println!("  Level:   {}", request.level.to_string().bright_white());
    println!();
    println!(
        "{} {}",
        "Saved".green().bold(),
        output.display().to_string().bright_yellow()
    );

    Ok(())
}
