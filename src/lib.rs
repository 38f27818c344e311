//! Embed a web UI asset in a host program as a compressed C++ header.
//!
//! This crate is the library core of the `webui-embed` tool. It turns a
//! single static HTML document into a generated header containing a
//! gzip-compressed byte array, so the host program can serve the UI
//! without any filesystem access at run time.
//!
//! ## How It Works
//!
//! The whole tool is one linear pipeline, run once per invocation:
//!
//! 1.  **Read:** The source asset is read as opaque bytes.
//! 2.  **Compress:** The bytes are gzip-encoded at the maximum level, with
//!     the container's MTIME field zeroed so the output is reproducible.
//! 3.  **Render:** The compressed payload is formatted as a C++
//!     `unsigned char` array initializer, 16 hex literals per row, wrapped
//!     in an include guard and a namespace, with a `sizeof`-derived size
//!     constant.
//! 4.  **Write:** The header text is written to a uniquely-named temp file
//!     next to the destination and atomically renamed into place, so
//!     concurrent readers never observe a torn artifact.
//!
//! Re-running with unchanged input produces a byte-identical header, which
//! keeps build-system caching stable.
//!
//! ## Usage
//!
//! ```no_run
//! use webui_embed::Config;
//!
//! let summary = Config::new()
//!     .source("src/webui/index.html")
//!     .dest("src/webui/webui_html.h")
//!     .run()
//!     .expect("failed to generate header");
//! println!("{summary}");
//! ```

use std::{io, path::PathBuf};

mod encoder;

pub use encoder::{Config, Summary};

/// A specialized `Result` type for the encoding pipeline.
pub type Result<T> = std::result::Result<T, Error>;

/// An error that can occur while generating the embedded header.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The source asset does not exist or could not be opened for reading.
    /// No destination mutation has happened when this is returned.
    #[error("{} not found", .0.display())]
    SourceNotFound(PathBuf),
    /// A write-side I/O failure. Terminal for the invocation; not retried.
    #[error("I/O error")]
    Io(#[from] io::Error),
    /// The atomic rename of the temp file onto the destination failed.
    #[error("could not replace the generated header")]
    Persist(#[from] tempfile::PersistError),
}
