// What you SEE:
// • A window full of small amber dots on black.
// • Move the mouse: dots near the cursor brighten, strongest right under it.
// • Resize the window: the grid re-centers itself. ESC quits.
// • With --snapshot, no window opens; one frame is written to a PNG instead.

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use clap::Parser;
use tracing::{info, warn};

use dot_grid::desktop::DesktopHost;
use dot_grid::types::Point;
use dot_grid::{snapshot, AppConfig, DotGrid, Error, Surface};

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(name = "dot-grid")]
#[command(version, about = "Ambient dot grid that glows around the pointer", long_about = None)]
struct Args {
    /// Configuration file path (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Window width, physical pixels
    #[arg(long)]
    width: Option<usize>,

    /// Window height, physical pixels
    #[arg(long)]
    height: Option<usize>,

    /// Device pixel density
    #[arg(long)]
    density: Option<f32>,

    /// Proximity radius, CSS pixels
    #[arg(long)]
    proximity: Option<f32>,

    /// Render one frame to this PNG instead of opening a window
    #[arg(long)]
    snapshot: Option<PathBuf>,

    /// Pointer position for --snapshot, CSS pixels ("X,Y")
    #[arg(long)]
    pointer: Option<String>,

    /// Verbose logging (can be specified multiple times)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(format!("dot_grid={level},warn")));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn parse_pointer(raw: &str) -> Result<Point, Error> {
    let bad = || Error::PointerArg(raw.to_string());
    let (x, y) = raw.split_once(',').ok_or_else(bad)?;
    let x = x.trim().parse::<f32>().map_err(|_| bad())?;
    let y = y.trim().parse::<f32>().map_err(|_| bad())?;
    Ok(Point::new(x, y))
}

fn load_config(args: &Args) -> AppConfig {
    let mut config = match &args.config {
        Some(path) => AppConfig::load(path).unwrap_or_else(|e| {
            warn!("Failed to load config: {}, using defaults", e);
            AppConfig::default()
        }),
        None => AppConfig::default(),
    };

    // CLI overrides file
    if let Some(w) = args.width {
        config.window.width = w;
    }
    if let Some(h) = args.height {
        config.window.height = h;
    }
    if let Some(d) = args.density {
        config.window.device_pixel_ratio = d;
    }
    if let Some(p) = args.proximity {
        config.dots.proximity = p;
    }
    config
}

fn main() -> Result<(), Error> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = load_config(&args);
    tracing::debug!(?config, "configuration");

    /* --- Snapshot mode ---
       Visual: nothing on screen; a PNG of one frame lands on disk. */
    if let Some(path) = &args.snapshot {
        let pointer = args.pointer.as_deref().map(parse_pointer).transpose()?;
        let (width, height) = config.window.css_size();
        let dpr = config.window.effective_device_pixel_ratio();
        return snapshot::render_png(&config.dots, width, height, dpr, pointer, path);
    }

    /* --- Window + engine setup ---
       Visual: window opens, dots appear on the first refresh. */
    let host = Rc::new(DesktopHost::new(&config.window)?);
    let surface = Rc::new(RefCell::new(Surface::new()));
    let engine = DotGrid::mount(Rc::clone(&host), &surface, config.dots.clone());

    /* ------------------------------ Main loop ------------------------------ */
    let result = host.run(&surface);

    engine.stop();
    info!("window closed");
    result
}
