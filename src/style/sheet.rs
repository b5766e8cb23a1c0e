/*!
 * The style-sheet resource.
 *
 * A sheet is a small UTF-8 text file of `key: value` pairs overriding parts
 * of a [`Style`]. It is looked up once at initialization, either from an
 * explicit path or from a search-path list, and a missing sheet is a hard
 * error at that point rather than at first plot.
 *
 * ```text
 * # figure colors
 * background: offwhite
 * foreground: #202020
 *
 * palette: okabe-ito
 * line_width: 2
 * ```
 */
use std::path::{Path, PathBuf};
use std::{env, fmt, fs, io};

use log::{debug, warn};

use crate::color::ColorU8;
use crate::style::{Colormap, Palette, Style, theme};

/// The well-known sheet file name searched in the sheet path
pub const FILE_NAME: &str = "hep.style";

/// The environment variable naming the sheet search path.
/// It holds a list of directories delimited like the platform's `PATH`
/// (colon on Unix, semicolon on Windows).
pub const SEARCH_PATH_VAR: &str = "HEPSTYLE_PATH";

/// Errors that can occur while locating, reading or applying a style sheet
#[derive(Debug)]
pub enum Error {
    /// No sheet file was found in the search path
    NotFound {
        /// Every path that was tried, in search order
        tried: Vec<PathBuf>,
    },
    /// The sheet file could not be read
    Io {
        /// Path of the file
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },
    /// A line is not a `key: value` pair
    Syntax {
        /// 1-based line number
        line: usize,
    },
    /// A known key has a value that does not parse
    InvalidValue {
        /// The sheet key
        key: String,
        /// The offending value
        value: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NotFound { tried } => {
                write!(f, "cannot locate style sheet \"{FILE_NAME}\"; tried:")?;
                for path in tried {
                    write!(f, " {}", path.display())?;
                }
                Ok(())
            }
            Error::Io { path, source } => {
                write!(f, "cannot read style sheet {}: {source}", path.display())
            }
            Error::Syntax { line } => write!(f, "malformed sheet entry at line {line}"),
            Error::InvalidValue { key, value } => {
                write!(f, "invalid sheet value for \"{key}\": \"{value}\"")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// A parsed style sheet
#[derive(Debug, Clone, Default)]
pub struct Sheet {
    entries: Vec<(String, String)>,
}

impl Sheet {
    /// Parse sheet text.
    /// Blank lines and full-line `#` comments are skipped. There are no
    /// inline comments, so hex color values keep their `#`. Every other
    /// line must be a `key: value` pair. Duplicate keys are allowed, the
    /// last one wins.
    pub fn parse(text: &str) -> Result<Sheet, Error> {
        let mut entries = Vec::new();
        for (idx, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (key, value) = line.split_once(':').ok_or(Error::Syntax { line: idx + 1 })?;
            let (key, value) = (key.trim(), value.trim());
            if key.is_empty() || value.is_empty() {
                return Err(Error::Syntax { line: idx + 1 });
            }
            entries.push((key.to_string(), value.to_string()));
        }
        Ok(Sheet { entries })
    }

    /// Read and parse a sheet file
    pub fn load(path: &Path) -> Result<Sheet, Error> {
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Sheet::parse(&text)
    }

    /// Locate the sheet file from the [`SEARCH_PATH_VAR`] directories,
    /// then the current directory.
    pub fn find() -> Result<PathBuf, Error> {
        let mut dirs: Vec<PathBuf> = match env::var_os(SEARCH_PATH_VAR) {
            Some(paths) => env::split_paths(&paths).collect(),
            None => Vec::new(),
        };
        dirs.push(PathBuf::from("."));
        Sheet::find_in(dirs)
    }

    /// Locate the sheet file in the given directories, in order
    pub fn find_in<I>(dirs: I) -> Result<PathBuf, Error>
    where
        I: IntoIterator<Item = PathBuf>,
    {
        let mut tried = Vec::new();
        for dir in dirs {
            let candidate = dir.join(FILE_NAME);
            if candidate.is_file() {
                debug!("style sheet found at {}", candidate.display());
                return Ok(candidate);
            }
            tried.push(candidate);
        }
        Err(Error::NotFound { tried })
    }

    /// Get the value for a key, if present. The last entry wins.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// The raw entries, in file order
    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    /// Apply the sheet entries onto a style.
    /// Unknown keys are logged and skipped, so a sheet written for a newer
    /// version still applies. A known key with a bad value is an error.
    pub fn apply(&self, style: &mut Style) -> Result<(), Error> {
        for (key, value) in &self.entries {
            if let Ok(col) = key.parse::<theme::Col>() {
                let color = parse_value::<ColorU8>(key, value)?;
                style.theme = style.theme.with_col(col, color);
                continue;
            }
            match key.as_str() {
                "palette" => style.palette = parse_value(key, value)?,
                "colormap" => style.colormap = parse_value(key, value)?,
                "font_family" => style.font_family = value.clone(),
                "line_width" => style.line_width = parse_size(key, value)?,
                "title_size" => style.title_size = parse_size(key, value)?,
                "axis_title_size" => style.axis_title_size = parse_size(key, value)?,
                "tick_label_size" => style.tick_label_size = parse_size(key, value)?,
                "watermark_size" => style.watermark_size = parse_size(key, value)?,
                "center_axis_titles" => {
                    style.center_axis_titles = parse_value(key, value)?;
                }
                _ => warn!("ignoring unknown sheet key \"{key}\""),
            }
        }
        Ok(())
    }
}

fn parse_value<T>(key: &str, value: &str) -> Result<T, Error>
where
    T: std::str::FromStr,
{
    value.parse().map_err(|_| Error::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    })
}

fn parse_size(key: &str, value: &str) -> Result<f32, Error> {
    let size: f32 = parse_value(key, value)?;
    if !size.is_finite() || size <= 0.0 {
        return Err(Error::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        });
    }
    Ok(size)
}
