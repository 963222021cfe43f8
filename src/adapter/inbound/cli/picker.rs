//! Path picker: browse the file system to choose an install directory or
//! an interpreter.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::adapter::inbound::cli::output;
use crate::adapter::inbound::cli::prompt::Prompter;
use crate::domain::field::PathKind;
use crate::domain::PathField;
use crate::error::Result;

const USE_THIS: &str = "[use this directory]";
const PARENT: &str = "..";
const CANCEL: &str = "[cancel]";

/// One browsable entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
}

/// Entries of `dir` worth offering for `kind`: sub-directories always,
/// files only when picking an interpreter. Directories come first.
pub fn entries(dir: &Path, kind: PathKind) -> Result<Vec<Entry>> {
    let mut dirs = Vec::new();
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().into_owned();
        if path.is_dir() {
            dirs.push(Entry {
                name,
                path,
                is_dir: true,
            });
        } else if kind == PathKind::Interpreter {
            files.push(Entry {
                name,
                path,
                is_dir: false,
            });
        }
    }
    dirs.sort_by(|a, b| a.name.cmp(&b.name));
    files.sort_by(|a, b| a.name.cmp(&b.name));
    dirs.extend(files);
    Ok(dirs)
}

/// Where browsing starts: the current value when it exists, its parent
/// for a file, otherwise `fallback`.
#[must_use]
pub fn start_dir(current: &str, fallback: &Path) -> PathBuf {
    let current = Path::new(current.trim());
    if current.as_os_str().is_empty() {
        return fallback.to_path_buf();
    }
    if current.is_dir() {
        return current.to_path_buf();
    }
    current
        .parent()
        .filter(|parent| parent.is_dir())
        .map_or_else(|| fallback.to_path_buf(), Path::to_path_buf)
}

/// What a menu line stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    UseThis,
    Parent,
    Entry(usize),
    Cancel,
}

fn menu(field: PathField, listing: &[Entry]) -> (Vec<String>, Vec<Choice>) {
    let mut items = Vec::with_capacity(listing.len() + 3);
    let mut choices = Vec::with_capacity(listing.len() + 3);
    if field.is_directory() {
        items.push(USE_THIS.to_string());
        choices.push(Choice::UseThis);
    }
    items.push(PARENT.to_string());
    choices.push(Choice::Parent);
    for (idx, entry) in listing.iter().enumerate() {
        if entry.is_dir {
            items.push(format!("{}/", entry.name));
        } else {
            items.push(entry.name.clone());
        }
        choices.push(Choice::Entry(idx));
    }
    items.push(CANCEL.to_string());
    choices.push(Choice::Cancel);
    (items, choices)
}

/// Browse until the user picks a path or cancels.
///
/// A directory that cannot be listed is reported and browsing returns to
/// the directory it was entered from. When the starting directory itself
/// cannot be listed the picker gives up with `None`.
pub fn pick(
    prompter: &dyn Prompter,
    field: PathField,
    current: &str,
    fallback: &Path,
) -> Result<Option<PathBuf>> {
    let mut dir = start_dir(current, fallback);
    let mut previous: Option<PathBuf> = None;
    loop {
        let listing = match entries(&dir, field.kind()) {
            Ok(listing) => listing,
            Err(e) => {
                warn!(dir = %dir.display(), error = %e, "Cannot list directory");
                output::error(&format!("Cannot open {}: {e}", dir.display()));
                match previous.take() {
                    Some(back) => {
                        dir = back;
                        continue;
                    }
                    None => return Ok(None),
                }
            }
        };
        let (items, choices) = menu(field, &listing);

        let prompt = format!("{} ({})", field.caption(), dir.display());
        let choice = prompter.select(&prompt, &items, 0)?;
        match choices.get(choice).copied().unwrap_or(Choice::Cancel) {
            Choice::UseThis => return Ok(Some(dir)),
            Choice::Cancel => return Ok(None),
            Choice::Parent => {
                if let Some(parent) = dir.parent().map(Path::to_path_buf) {
                    previous = Some(std::mem::replace(&mut dir, parent));
                }
            }
            Choice::Entry(idx) => {
                let entry = &listing[idx];
                if !entry.is_dir {
                    return Ok(Some(entry.path.clone()));
                }
                previous = Some(std::mem::replace(&mut dir, entry.path.clone()));
            }
        }
    }
}
