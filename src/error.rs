//! Error type for tapcalc.
//!
//! The calculator engine itself never fails; invalid arithmetic shows up as
//! the error display state. These errors come from the collaborators around
//! it: key classification, configuration and the clipboard.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("unknown key '{0}'")]
    UnknownKey(String),

    #[error("alias '{alias}' points to unknown key '{target}'")]
    InvalidAlias { alias: String, target: String },

    #[error("invalid config file {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),
}
