use clap::{Parser, Subcommand};
use quote_image::color::Color;
use quote_image::compose::{self, MAX_FLAIRS};
use quote_image::config::{self, QuoteConfig};
use quote_image::imaging::{FlairLibrary, FontRenderer};
use quote_image::output;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{BufRead, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "quote-image")]
#[command(about = "Render a quote onto a decorated 640x640 PNG")]
#[command(long_about = "\
Render a quote onto a decorated 640x640 PNG

The quote is word-wrapped at 20 characters and centered. Up to four
decorative overlay images (\"flairs\") are picked at random from the flair
directory and stacked behind the text, each possibly tinted.

Settings are read from config.toml (see 'quote-image gen-config');
command-line flags override them.")]
#[command(version)]
struct Cli {
    /// Config file
    #[arg(long, default_value = "config.toml", global = true)]
    config: PathBuf,

    /// Log render details to stderr
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a quote image and save it as PNG
    Render(RenderArgs),
    /// Print a stock config.toml with all options documented
    GenConfig,
}

#[derive(clap::Args)]
struct RenderArgs {
    /// The quote to put on the image (prompted for if omitted)
    #[arg(long, short)]
    quote: Option<String>,

    /// Where to save the PNG [default: ~/Pictures/quote.png]
    #[arg(long, short)]
    path: Option<PathBuf>,

    /// Draw a shadow behind the text
    #[arg(long)]
    shadow: bool,

    /// Number of flairs to overlay
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=MAX_FLAIRS as i64))]
    flairs: Option<u8>,

    /// Text color as hex, e.g. FF5F00 (random palette color if unset)
    #[arg(long)]
    text_color: Option<Color>,

    /// Shadow color as hex
    #[arg(long)]
    shadow_color: Option<Color>,

    /// Background color as hex
    #[arg(long)]
    background_color: Option<Color>,

    /// Tint every flair with this hex color
    #[arg(long)]
    flair_tint: Option<Color>,

    /// Seed for flair and color choices, for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Directory of flair images
    #[arg(long)]
    flair_dir: Option<PathBuf>,

    /// Font file for the quote
    #[arg(long)]
    font: Option<PathBuf>,

    /// Font size in pixels
    #[arg(long)]
    font_size: Option<f32>,
}

impl RenderArgs {
    /// Layer the flags that were given over the loaded config.
    fn apply(&self, config: &mut QuoteConfig) {
        if self.shadow {
            config.render.shadow = true;
        }
        if let Some(n) = self.flairs {
            config.render.flairs = n as usize;
        }
        if let Some(c) = self.text_color {
            config.render.text_color = Some(c);
        }
        if let Some(c) = self.shadow_color {
            config.render.shadow_color = c;
        }
        if let Some(c) = self.background_color {
            config.render.background_color = c;
        }
        if let Some(c) = self.flair_tint {
            config.render.flair_tint = Some(c);
        }
        if let Some(dir) = &self.flair_dir {
            config.assets.flair_dir = dir.clone();
        }
        if let Some(font) = &self.font {
            config.assets.font = font.clone();
        }
        if let Some(size) = self.font_size {
            config.assets.font_size = size;
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Render(args) => {
            let mut config = config::load_config(&cli.config)?;
            args.apply(&mut config);
            config.validate()?;

            let quote = match given_quote(args.quote) {
                Some(q) => q,
                None => prompt_quote()?,
            };
            let path = args.path.unwrap_or_else(compose::default_output_path);

            let font = FontRenderer::open(&config.assets.font, config.assets.font_size)?;
            let flairs = FlairLibrary::new(&config.assets.flair_dir);
            let mut rng = match args.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };

            let render = compose::compose_to_file(
                &font,
                &flairs,
                &quote,
                &config.render_options(),
                &mut rng,
                &path,
            )?;
            output::print_render_output(&render, &path);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Install the stderr log subscriber: warnings by default, debug with `--verbose`.
fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

/// The `--quote` value, unless it is missing or empty.
fn given_quote(arg: Option<String>) -> Option<String> {
    arg.filter(|q| !q.is_empty())
}

/// Ask for a quote on stdin.
fn prompt_quote() -> std::io::Result<String> {
    print!("Please enter a quote: ");
    std::io::stdout().flush()?;
    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
