//! Plain-text set sources
//!
//! One element per line. Lines starting with `#` and lines that are empty
//! once trailing blanks are removed are skipped; a trailing `\r` is dropped.
//! An element that itself starts with `#` is written as `\#...`; the leading
//! backslash is removed.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::cell::{CharCell, CharSet};
use crate::compare;
use crate::config::Config;
use crate::error::Result;

/// Collect the elements listed in a text source, in file order
pub fn read_items<R: BufRead>(reader: R) -> Result<Vec<Vec<u8>>> {
    let mut items = Vec::new();
    for line in reader.split(b'\n') {
        let mut line = line?;
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        if line.first() == Some(&b'#') || compare::trim_blanks(&line).is_empty() {
            continue;
        }
        if line.starts_with(b"\\#") {
            line.remove(0);
        }
        items.push(line);
    }
    Ok(items)
}

/// Load a text source and validate it into a set
///
/// `stride` falls back to `config.default_stride`.
pub fn load_text(path: &Path, stride: Option<usize>, config: &Config) -> Result<CharSet> {
    let items = read_items(BufReader::new(File::open(path)?))?;
    let stride = stride.unwrap_or(config.default_stride);
    let set = CharSet::new(CharCell::from_items(stride, &items)?);

    tracing::debug!(
        path = %path.display(),
        lines = items.len(),
        card = set.card(),
        stride,
        "loaded text set"
    );
    Ok(set)
}
