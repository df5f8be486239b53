//! Interactive acquisition of the destination root.

use std::fmt;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::MAIN_SEPARATOR;

use anyhow::{Context, Result, bail};
use camino::{Utf8Path, Utf8PathBuf};

const PATH_PROMPT: &str =
    "Enter the folder path where you want to create the Roblox directory structure: ";
const CONFIRM_PROMPT: &str = "Is this correct? (y/n): ";

/// Why a candidate path was refused. Always recoverable: the user is asked again.
#[derive(Debug)]
pub enum Rejection {
    Empty,
    NoHome { raw: String },
    NotADirectory { path: Utf8PathBuf },
    Inaccessible { path: Utf8PathBuf, source: io::Error },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::Empty => write!(f, "Please enter a valid folder path."),
            Rejection::NoHome { raw } => write!(
                f,
                "Error with path '{}': home directory could not be determined",
                raw
            ),
            Rejection::NotADirectory { path } => {
                write!(f, "Error: '{}' exists but is not a directory.", path)
            }
            Rejection::Inaccessible { path, source } => {
                write!(f, "Error with path '{}': {}", path, source)
            }
        }
    }
}

/// The current user's home directory, when it is known and valid UTF-8.
pub fn home_dir() -> Option<Utf8PathBuf> {
    dirs::home_dir().and_then(|path| Utf8PathBuf::from_path_buf(path).ok())
}

/// Keep asking until the user confirms a path that can hold the tree.
pub fn acquire_root<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    home: Option<&Utf8Path>,
) -> Result<Utf8PathBuf> {
    loop {
        let raw = prompt(input, out, PATH_PROMPT)?;
        let candidate = match resolve(raw.trim(), home) {
            Ok(path) => path,
            Err(rejection) => {
                tracing::debug!(input = raw.trim(), reason = %rejection, "path rejected");
                writeln!(out, "{}", rejection)?;
                continue;
            }
        };

        writeln!(out, "\nYou entered: {}", candidate)?;
        let answer = prompt(input, out, CONFIRM_PROMPT)?;
        if is_affirmative(&answer) {
            return Ok(candidate);
        }
        writeln!(out, "Let's try again.\n")?;
    }
}

/// Turn trimmed user input into a validated candidate root.
pub fn resolve(raw: &str, home: Option<&Utf8Path>) -> Result<Utf8PathBuf, Rejection> {
    if raw.is_empty() {
        return Err(Rejection::Empty);
    }
    let path = expand_home(raw, home)?;
    check_candidate(&path)?;
    Ok(path)
}

/// Expand a leading `~` to `home`. `~user` forms are not expanded.
pub fn expand_home(raw: &str, home: Option<&Utf8Path>) -> Result<Utf8PathBuf, Rejection> {
    let Some(rest) = raw.strip_prefix('~') else {
        return Ok(Utf8PathBuf::from(raw));
    };
    if !rest.is_empty() && !rest.starts_with(['/', MAIN_SEPARATOR]) {
        return Ok(Utf8PathBuf::from(raw));
    }

    let home = home.ok_or_else(|| Rejection::NoHome {
        raw: raw.to_owned(),
    })?;
    let rest = rest.trim_start_matches(['/', MAIN_SEPARATOR]);
    if rest.is_empty() {
        Ok(home.to_owned())
    } else {
        Ok(home.join(rest))
    }
}

/// Absent paths and existing directories are acceptable; anything else is not.
pub fn check_candidate(path: &Utf8Path) -> Result<(), Rejection> {
    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(Rejection::NotADirectory {
            path: path.to_owned(),
        }),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(source) => Err(Rejection::Inaccessible {
            path: path.to_owned(),
            source,
        }),
    }
}

fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> Result<String> {
    write!(out, "{}", label)?;
    out.flush()
        .with_context(|| format!("writing prompt `{label}`"))?;
    let mut buf = String::new();
    let read = input
        .read_line(&mut buf)
        .with_context(|| format!("reading input for `{label}`"))?;
    if read == 0 {
        bail!("standard input closed before a path was confirmed");
    }
    Ok(buf.trim_end_matches(['\n', '\r']).to_owned())
}
