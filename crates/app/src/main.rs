use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, LogicalSize, WindowBuilder};
use folio_core::SiteConfig;
use log::info;
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDamping { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDamping { raw } => write!(f, "invalid --damping value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    config: SiteConfig,
}

impl UiApp for DesktopApp {
    fn config(&self) -> SiteConfig {
        self.config.clone()
    }
}

#[derive(Debug, Default)]
struct Args {
    config_path: Option<PathBuf>,
    title: Option<String>,
    damping: Option<f64>,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--config <file.json>] [--title <text>] [--damping <secs>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --title Portfolio");
    eprintln!("  --damping 0.1");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  FOLIO_CONFIG, FOLIO_TITLE, FOLIO_DAMPING, RUST_LOG");
}

fn parse_damping(raw: String) -> Result<f64, ArgsError> {
    raw.trim()
        .parse()
        .map_err(|_| ArgsError::InvalidDamping { raw })
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut parsed = Self {
            config_path: std::env::var_os("FOLIO_CONFIG").map(PathBuf::from),
            title: std::env::var("FOLIO_TITLE").ok(),
            damping: std::env::var("FOLIO_DAMPING")
                .ok()
                .map(parse_damping)
                .transpose()?,
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => {
                    parsed.config_path = Some(PathBuf::from(require_value(args, "--config")?));
                }
                "--title" => {
                    parsed.title = Some(require_value(args, "--title")?);
                }
                "--damping" => {
                    let value = require_value(args, "--damping")?;
                    parsed.damping = Some(parse_damping(value)?);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(parsed)
    }
}

/// File first, then flag/env overrides, then one validation pass over the result.
fn load_config(args: &Args) -> Result<SiteConfig, Box<dyn std::error::Error>> {
    let mut config = match &args.config_path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)?;
            SiteConfig::from_json(&raw).map_err(folio_core::Error::from)?
        }
        None => SiteConfig::default(),
    };

    if let Some(title) = &args.title {
        config.title.clone_from(title);
    }
    if let Some(damping) = args.damping {
        config.damping = damping;
    }

    let config = config.validate().map_err(folio_core::Error::from)?;
    Ok(config)
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let args = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let config = load_config(&args)?;
    info!(
        "launching \"{}\" (damping {}s, wheel step {}px)",
        config.title, config.damping, config.wheel_step_px
    );

    let title = config.title.clone();
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { config });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(title)
            .with_inner_size(LogicalSize::new(1280.0, 800.0))
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
