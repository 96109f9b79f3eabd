mod app;
mod color;
mod config;
mod history;
mod input;
mod palette;
mod tui;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use color::{Color, brightness, parse_color_id};
use palette::{CURATED_PALETTES, ExportFormat, GeneratorMode, Palette, ShadeScale};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::Path;

#[derive(Debug, Parser)]
#[command(name = "swatch", version, about = "Color palette generator and shade scale inspector")]
struct Cli {
    /// Override config file path.
    #[arg(long)]
    config: Option<std::path::PathBuf>,

    /// Seed the random source for reproducible palettes.
    #[arg(long)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the interactive TUI (default).
    Tui {
        /// Generator for new palettes (default from config).
        #[arg(long, value_enum)]
        mode: Option<GeneratorMode>,
    },
    /// Print one palette to stdout (headless).
    Palette {
        /// Generator to use (default from config).
        #[arg(long, value_enum)]
        mode: Option<GeneratorMode>,
        /// Number of colors in random mode.
        #[arg(long)]
        count: Option<usize>,
        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
    /// Print the 50-950 shade scale of a color (headless).
    Shades {
        /// 3 or 6 hex digits, leading `#` optional.
        color: String,
        #[arg(long, value_enum, default_value_t = ShadesFormat::Table)]
        format: ShadesFormat,
        /// Token name used in exports (default from config).
        #[arg(long)]
        name: Option<String>,
    },
    /// Show every notation of one color (headless).
    Inspect {
        /// 3 or 6 hex digits, leading `#` optional.
        color: String,
    },
    /// List the curated palettes.
    Curated,
}

impl Command {
    /// The TUI draws on the alternate screen, so its logs go to a file.
    fn logs_to_file(&self) -> bool {
        matches!(self, Command::Tui { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ShadesFormat {
    Table,
    Css,
    Tailwind,
    Json,
    Scss,
}

impl ShadesFormat {
    fn export(self) -> Option<ExportFormat> {
        match self {
            ShadesFormat::Table => None,
            ShadesFormat::Css => Some(ExportFormat::Css),
            ShadesFormat::Tailwind => Some(ExportFormat::Tailwind),
            ShadesFormat::Json => Some(ExportFormat::Json),
            ShadesFormat::Scss => Some(ExportFormat::Scss),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = config::load(cli.config.as_deref()).context("load config")?;
    let command = cli.command.unwrap_or(Command::Tui { mode: None });

    let log_file = if command.logs_to_file() {
        Some(config::default_log_path().context("default log path")?)
    } else {
        None
    };
    init_tracing(cfg.log.max_level(), log_file.as_deref())?;

    let cfg_path = match cli.config.clone() {
        Some(p) => p,
        None => config::default_config_path().context("default config path")?,
    };
    let mut rng = make_rng(cli.seed.or(cfg.generator.seed));

    match command {
        Command::Tui { mode } => {
            let mode = mode.unwrap_or(cfg.generator.mode);
            let mut terminal = tui::TerminalGuard::enter().context("init terminal")?;
            let mut app = app::App::new(cfg, cfg_path, mode, rng);
            app.run(terminal.terminal_mut()).await?;
        }
        Command::Palette { mode, count, json } => {
            let mode = mode.unwrap_or(cfg.generator.mode);
            let count = count.unwrap_or(cfg.generator.count);
            let palette = mode.generate(&mut rng, count);
            if json {
                println!("{}", serde_json::to_string_pretty(&palette)?);
            } else {
                print_palette(&palette);
            }
        }
        Command::Shades { color, format, name } => {
            let base = parse_color_id(&color)?;
            let scale = palette::shade_scale(base);
            match format.export() {
                Some(export) => {
                    let token = name.unwrap_or(cfg.export.token);
                    println!("{}", palette::export::render(&scale, export, &token)?);
                }
                None => print_shades(&scale),
            }
        }
        Command::Inspect { color } => {
            let color = parse_color_id(&color)?;
            print_inspect(color);
        }
        Command::Curated => {
            for (i, p) in CURATED_PALETTES.iter().enumerate() {
                let hex: Vec<String> = p.iter().map(Color::to_hex).collect();
                println!("{:02}. {}", i + 1, hex.join("  "));
            }
        }
    }

    Ok(())
}

fn init_tracing(level: tracing::Level, log_file: Option<&Path>) -> anyhow::Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .with_max_level(level);

    match log_file {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create dir {}", parent.display()))?;
            }
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("open log {}", path.display()))?;
            builder
                .with_ansi(false)
                .with_writer(std::sync::Mutex::new(file))
                .init();
        }
        None => builder.with_writer(std::io::stderr).init(),
    }
    Ok(())
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => {
            tracing::debug!(seed, "using seeded random source");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    }
}

fn tone(color: Color) -> &'static str {
    if color.is_light() { "light" } else { "dark" }
}

fn print_palette(palette: &Palette) {
    println!("# {}", palette.origin.label());
    for (i, c) in palette.colors.iter().enumerate() {
        println!(
            "{:02}. {}  {:<20} {:<20} {}",
            i + 1,
            c,
            c.rgb_string(),
            c.to_hsl().to_string(),
            tone(*c)
        );
    }
}

fn print_shades(scale: &ShadeScale) {
    for s in scale.iter() {
        println!(
            "{:>4}  {}  {:<20} {}",
            s.level,
            s.color,
            s.color.rgb_string(),
            if s.is_dark { "dark" } else { "light" }
        );
    }
}

fn print_inspect(color: Color) {
    println!("HEX   {color}");
    println!("RGB   {}", color.rgb_string());
    println!("HSL   {}", color.to_hsl());
    println!("CMYK  {}", color.to_cmyk());
    println!("LUM   {:.1}%", color.luminance() * 100.0);
    println!("TONE  {} ({:.0})", tone(color), brightness(color));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(args: &[&str]) -> Command {
        Cli::parse_from(args).command.unwrap_or(Command::Tui { mode: None })
    }

    #[test]
    fn test_only_tui_logs_to_file() {
        assert!(command(&["swatch"]).logs_to_file());
        assert!(command(&["swatch", "tui", "--mode", "random"]).logs_to_file());
        assert!(!command(&["swatch", "inspect", "abc"]).logs_to_file());
        assert!(!command(&["swatch", "palette", "--json"]).logs_to_file());
        assert!(!command(&["swatch", "shades", "fff", "--format", "css"]).logs_to_file());
    }

    #[test]
    fn test_tui_mode_override_parses() {
        let Command::Tui { mode } = command(&["swatch", "tui", "--mode", "curated"]) else {
            panic!("expected tui command");
        };
        assert_eq!(mode, Some(GeneratorMode::Curated));
    }
}
