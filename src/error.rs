// Errors for the outer surfaces (window, config, snapshot export).
// The dot engine itself never fails; every variant states *where* things went wrong.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Window init error: {0}")]
    WindowInit(String), // Creating the window failed

    #[error("Window update error: {0}")]
    WindowUpdate(String), // Updating the window buffer failed

    #[error("Config read error ({path}): {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Snapshot export error: {0}")]
    Snapshot(#[from] image::ImageError),

    #[error("Invalid pointer position {0:?}: expected X,Y")]
    PointerArg(String),
}
