use crate::error::ContentError;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

/// Errors meaning "nothing is stored at this path": absent, a file used as a
/// directory, or a name the filesystem cannot hold.
pub(crate) const fn is_missing(kind: ErrorKind) -> bool {
    matches!(
        kind,
        ErrorKind::NotFound
            | ErrorKind::NotADirectory
            | ErrorKind::IsADirectory
            | ErrorKind::InvalidFilename
    )
}

/// Checks that `segment` is usable as exactly one path component under the root.
///
/// Route parameters end up here after percent-decoding, so `..%2F..` arrives as `../..`.
pub(crate) fn validate_segment(segment: &str) -> Result<&str, ContentError> {
    let reason = if segment.is_empty() {
        Some("Segment cannot be empty")
    } else if segment == "." || segment == ".." {
        Some("Relative segments are not allowed")
    } else if segment.contains(['/', '\\', '\0']) {
        Some("Segment must not contain separators or NUL")
    } else if segment.starts_with('.') {
        Some("Hidden entries are not served")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(ContentError::PathTraversalAttempt {
            message: segment.to_owned().into(),
            context: Some(reason.into()),
        }),
        None => Ok(segment),
    }
}

/// Collapses `.` and `..` lexically; `..` may not climb above the root.
fn normalize_relative(path: &Path) -> Result<PathBuf, ContentError> {
    let mut out = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {},
            Component::Normal(seg) => out.push(seg),
            Component::ParentDir => {
                if !out.pop() {
                    return Err(ContentError::PathTraversalAttempt {
                        message: path.display().to_string().into(),
                        context: Some("Path attempted to escape content root via '..'".into()),
                    });
                }
            },
            Component::RootDir | Component::Prefix(_) => {
                return Err(ContentError::PathTraversalAttempt {
                    message: path.display().to_string().into(),
                    context: Some("Absolute paths are not allowed".into()),
                });
            },
        }
    }

    Ok(out)
}

/// Joins `path` onto the canonical `root` and proves the result stays inside it.
///
/// Existing targets are canonicalized so symlinks pointing outside the root are refused.
/// Missing targets are checked through their closest existing ancestor.
pub(crate) fn resolve_path(root: &Path, path: impl AsRef<Path>) -> Result<PathBuf, ContentError> {
    let relative = normalize_relative(path.as_ref())?;
    let joined = root.join(relative);

    match joined.canonicalize() {
        Ok(canonical) if canonical.starts_with(root) => Ok(canonical),
        Ok(canonical) => Err(ContentError::PathTraversalAttempt {
            message: canonical.display().to_string().into(),
            context: Some("Resolved outside the content root".into()),
        }),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            check_ancestors(root, &joined)?;
            Ok(joined)
        },
        Err(e) if is_missing(e.kind()) => Err(ContentError::DocumentNotFound {
            message: joined.display().to_string().into(),
            context: Some(e.to_string().into()),
        }),
        Err(e) => Err(ContentError::Io {
            source: e,
            context: Some(format!("Failed to resolve {}", joined.display()).into()),
        }),
    }
}

fn check_ancestors(root: &Path, joined: &Path) -> Result<(), ContentError> {
    let mut current = joined.parent();

    while let Some(dir) = current {
        if dir == root {
            return Ok(());
        }
        if dir.exists() {
            return match dir.canonicalize() {
                Ok(canonical) if canonical.starts_with(root) => Ok(()),
                Ok(canonical) => Err(ContentError::PathTraversalAttempt {
                    message: canonical.display().to_string().into(),
                    context: Some("Parent directory is a symlink outside the content root".into()),
                }),
                Err(e) => Err(ContentError::Io {
                    source: e,
                    context: Some("Failed to verify parent directory".into()),
                }),
            };
        }
        current = dir.parent();
    }

    Err(ContentError::PathTraversalAttempt {
        message: joined.display().to_string().into(),
        context: Some("No ancestor inside the content root".into()),
    })
}
