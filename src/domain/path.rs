//! Path predicates and traversal normalization for the path fields.

use std::path::{Component, Path, PathBuf};

use super::engine::Engine;
use super::field::{PathField, PathKind};
use super::readiness::FieldStatus;

/// File name prefix every accepted interpreter binary carries.
pub const INTERPRETER_PREFIX: &str = "python";

/// True when the value contains a `..` segment.
#[must_use]
pub fn has_parent_traversal(raw: &str) -> bool {
    Path::new(raw)
        .components()
        .any(|component| matches!(component, Component::ParentDir))
}

/// Rewrite a value with `..` segments into an absolute, lexically
/// normalized path. Relative values are resolved against `base`.
///
/// Returns `None` when the value has no traversal segment and must be kept
/// as typed.
#[must_use]
pub fn normalize_traversal(raw: &str, base: &Path) -> Option<String> {
    if !has_parent_traversal(raw) {
        return None;
    }
    let path = Path::new(raw);
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    };

    let mut normalized = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => normalized.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                // Popping past the root is a no-op, as for `abspath`.
                normalized.pop();
                if normalized.as_os_str().is_empty() {
                    normalized.push(Component::RootDir.as_os_str());
                }
            }
            Component::Normal(part) => normalized.push(part),
        }
    }
    Some(normalized.to_string_lossy().into_owned())
}

/// True when `raw` names an install directory holding the engine's entry point.
#[must_use]
pub fn has_entry_point(engine: Engine, raw: &str) -> bool {
    !raw.is_empty() && engine.entry_point_path(Path::new(raw)).exists()
}

/// True when `raw` is an existing regular file.
#[must_use]
pub fn is_regular_file(raw: &str) -> bool {
    !raw.is_empty() && Path::new(raw).is_file()
}

/// True when the file name of `raw` looks like a Python interpreter.
#[must_use]
pub fn has_interpreter_name(raw: &str) -> bool {
    Path::new(raw)
        .file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with(INTERPRETER_PREFIX))
}

/// Form glyph for a path field, derived from its value alone.
#[must_use]
pub fn field_status(field: PathField, raw: &str) -> FieldStatus {
    let ok = match field.kind() {
        PathKind::Directory => has_entry_point(field.engine(), raw),
        PathKind::Interpreter => is_regular_file(raw) && has_interpreter_name(raw),
    };
    FieldStatus::from_ok(ok)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn traversal_detection_uses_segments() {
        assert!(has_parent_traversal("../pb"));
        assert!(has_parent_traversal("/opt/x/../pb"));
        assert!(!has_parent_traversal("/opt/pb..7"));
        assert!(!has_parent_traversal(""));
    }

    #[test]
    fn normalizes_relative_against_base() {
        let base = Path::new("/home/trader/pbgui");
        assert_eq!(
            normalize_traversal("../passivbot", base).as_deref(),
            Some("/home/trader/passivbot")
        );
        assert_eq!(
            normalize_traversal("./a/../../b/./c", base).as_deref(),
            Some("/home/trader/b/c")
        );
    }

    #[test]
    fn normalizes_absolute_and_clamps_at_root() {
        let base = Path::new("/ignored");
        assert_eq!(
            normalize_traversal("/opt/pb7/../pb6", base).as_deref(),
            Some("/opt/pb6")
        );
        assert_eq!(normalize_traversal("/../../x", base).as_deref(), Some("/x"));
    }

    #[test]
    fn untouched_without_traversal() {
        assert_eq!(normalize_traversal("relative/path", Path::new("/b")), None);
    }

    #[test]
    fn interpreter_name_requires_python_prefix() {
        assert!(has_interpreter_name("/venv/bin/python3.12"));
        assert!(has_interpreter_name("python"));
        assert!(!has_interpreter_name("/venv/bin/pip"));
        assert!(!has_interpreter_name(""));
    }

    #[test]
    fn field_status_checks_entry_point_and_interpreter() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("pb7/src")).unwrap();
        fs::write(root.join("pb7/src/passivbot.py"), "").unwrap();
        fs::create_dir_all(root.join("venv/bin")).unwrap();
        fs::write(root.join("venv/bin/python3"), "").unwrap();

        let pb7 = root.join("pb7");
        let python = root.join("venv/bin/python3");
        assert_eq!(
            field_status(PathField::Pb7Dir, pb7.to_str().unwrap()),
            FieldStatus::Ok
        );
        // V6 expects the entry point at the top level.
        assert_eq!(
            field_status(PathField::PbDir, pb7.to_str().unwrap()),
            FieldStatus::Fail
        );
        assert_eq!(
            field_status(PathField::PbVenv, python.to_str().unwrap()),
            FieldStatus::Ok
        );
        assert_eq!(
            field_status(PathField::PbVenv, root.join("venv/bin").to_str().unwrap()),
            FieldStatus::Fail
        );
        assert_eq!(field_status(PathField::Pb7Venv, ""), FieldStatus::Fail);
    }
}
