//! Plot error type shared by plotting backends and the batch exporter.

use std::path::PathBuf;
use thiserror::Error;

/// Plot/export error type.
///
/// Export failures are per-target and recoverable: the caller decides
/// whether to continue with the remaining outputs.
#[derive(Error, Debug)]
pub enum PlotError {
    /// The output target could not be opened.
    #[error("Unable to create plot file {path}: {source}")]
    OpenTarget {
        /// The path that could not be opened.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// An I/O fault occurred while an export was in progress.
    #[error("I/O fault during plot of {path}: {source}")]
    WriteFault {
        /// The path being written when the fault occurred.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Plot operations were issued against a plotter with no open target.
    #[error("Plotter has no open target")]
    NotOpen,
}
