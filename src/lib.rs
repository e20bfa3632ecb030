// Dot grid: a decorative lattice of dots that recolor as the pointer approaches.
//
// Layout, pointer tracking and per-frame painting are host-agnostic; a
// minifb window host and a headless host are included.

pub mod color;
pub mod config;
pub mod desktop;
pub mod draw;
pub mod engine;
pub mod error;
pub mod grid;
pub mod headless;
pub mod host;
pub mod pointer;
pub mod render;
pub mod snapshot;
pub mod surface;
pub mod types;

pub use config::{AppConfig, DotConfig, WindowConfig};
pub use engine::DotGrid;
pub use error::Error;
pub use headless::HeadlessHost;
pub use host::{Host, HostEvent};
pub use surface::Surface;
