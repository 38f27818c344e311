//! The asset encoder: read, compress, render, atomically write.
use std::{
    env, fmt, fs,
    io::Write,
    path::{Path, PathBuf},
};

use flate2::{Compression, GzBuilder};
use tempfile::NamedTempFile;

use crate::{Error, Result};

//
// ==================== PUBLIC BUILDER API ====================
//

/// A builder for configuring a single header-generation run.
///
/// Both paths are optional; when omitted they resolve to the conventional
/// web UI locations relative to the tool's own install directory.
///
/// # Example
/// ```no_run
/// webui_embed::Config::new()
///     .source("index.html")
///     .run()
///     .expect("failed to generate header");
/// ```
#[derive(Debug, Default)]
pub struct Config {
    source: Option<PathBuf>,
    dest: Option<PathBuf>,
}

impl Config {
    /// Creates a configuration with default source and destination paths.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source asset path.
    #[must_use]
    pub fn source(mut self, path: impl AsRef<Path>) -> Self {
        self.source = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the destination path for the generated header.
    #[must_use]
    pub fn dest(mut self, path: impl AsRef<Path>) -> Self {
        self.dest = Some(path.as_ref().to_path_buf());
        self
    }

    /// Runs the full pipeline: read, compress, render, write.
    ///
    /// The whole asset and its compressed form are held in memory at once.
    /// That is intentional: the embedded asset is a single small HTML
    /// document, and this tool must not be pointed at arbitrarily large
    /// inputs.
    ///
    /// The destination is only touched after the source has been read and
    /// compressed successfully, and the final write is a temp-file write
    /// followed by an atomic rename. A failed run leaves any pre-existing
    /// header exactly as it was.
    ///
    /// # Errors
    /// Returns [`Error::SourceNotFound`] if the source cannot be read, or
    /// an I/O error if writing the header fails.
    pub fn run(self) -> Result<Summary> {
        let source = self.source.unwrap_or_else(default_source_path);
        let dest = self.dest.unwrap_or_else(default_dest_path);

        let raw = fs::read(&source).map_err(|_| Error::SourceNotFound(source))?;
        let compressed = compress(&raw)?;

        let header = render_header(&compressed);
        write_atomic(&dest, &header)?;

        Ok(Summary {
            raw_len: raw.len(),
            compressed_len: compressed.len(),
        })
    }
}

/// Size statistics for a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Byte length of the source asset.
    pub raw_len: usize,
    /// Byte length of the gzip payload embedded in the header.
    pub compressed_len: usize,
}

impl Summary {
    /// Percentage size reduction, `0.0` for an empty source.
    #[must_use]
    pub fn reduction_pct(&self) -> f64 {
        if self.raw_len == 0 {
            0.0
        } else {
            (1.0 - self.compressed_len as f64 / self.raw_len as f64) * 100.0
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Web UI: {} -> {} bytes ({:.1}% compression)",
            self.raw_len,
            self.compressed_len,
            self.reduction_pct()
        )
    }
}

//
// ==================== PIPELINE INTERNALS ====================
//

/// Fixed identifiers for the generated header. Never derived from file
/// content, so repeated runs always produce the same guard and names.
const GUARD: &str = "WEBUI_HTML_H";
const NAMESPACE: &str = "webui";
const ARRAY_NAME: &str = "kWebUiHtml";
const SIZE_NAME: &str = "kWebUiHtmlSize";

const BYTES_PER_ROW: usize = 16;
const ROW_INDENT: &str = "    ";

/// Conventional asset location relative to the installed tool, mirroring a
/// `scripts/` directory sitting next to `src/`.
fn default_webui_dir() -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("..")
        .join("src")
        .join("webui")
}

fn default_source_path() -> PathBuf {
    default_webui_dir().join("index.html")
}

fn default_dest_path() -> PathBuf {
    default_webui_dir().join("webui_html.h")
}

/// Gzip at the maximum level, with the container MTIME pinned to zero so
/// identical input always yields identical output bytes.
fn compress(raw: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = GzBuilder::new().mtime(0).write(Vec::new(), Compression::best());
    encoder.write_all(raw)?;
    Ok(encoder.finish()?)
}

/// Renders the payload as rows of `0xNN` literals, 16 per row, forming a
/// valid C++ array initializer body.
fn render_rows(payload: &[u8]) -> String {
    payload
        .chunks(BYTES_PER_ROW)
        .map(|row| {
            let literals: Vec<String> = row.iter().map(|b| format!("0x{b:02x}")).collect();
            format!("{ROW_INDENT}{}", literals.join(", "))
        })
        .collect::<Vec<_>>()
        .join(",\n")
}

/// Assembles the full header text: include guard, namespace, the byte
/// array, and a `sizeof`-derived size constant.
fn render_header(payload: &[u8]) -> String {
    let rows = render_rows(payload);
    format!(
        "#ifndef {GUARD}\n\
         #define {GUARD}\n\
         \n\
         #include <cstddef>\n\
         \n\
         namespace {NAMESPACE} {{\n\
         \n\
         static const unsigned char {ARRAY_NAME}[] = {{\n\
         {rows}\n\
         }};\n\
         \n\
         static const size_t {SIZE_NAME} = sizeof({ARRAY_NAME});\n\
         \n\
         }} // namespace {NAMESPACE}\n\
         \n\
         #endif // {GUARD}\n"
    )
}

/// Writes `contents` to a uniquely-named temp file in the destination's
/// directory, then atomically renames it onto the destination. Readers of
/// the destination never observe a partial write.
fn write_atomic(dest: &Path, contents: &str) -> Result<()> {
    let dir = match dest.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(contents.as_bytes())?;
    tmp.persist(dest)?;
    Ok(())
}
