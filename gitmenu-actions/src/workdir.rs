use gitmenu_types::Context;
use std::path::{Path, PathBuf};

/// Derives the execution directory for git commands from the selection.
///
/// A directory selection is its own working directory; for a file the final
/// path component is dropped. A file path with an empty parent (a bare name)
/// falls back to the current directory, and a root path stays as-is.
pub fn wd_from_path(path: &Path, is_dir: bool) -> PathBuf {
    if is_dir {
        return path.to_path_buf();
    }
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        Some(_) => PathBuf::from("."),
        None => path.to_path_buf(),
    }
}

/// Working directory for the given selection context.
pub fn wd_from_context(ctx: &Context) -> PathBuf {
    wd_from_path(&ctx.path, ctx.is_dir)
}

/// The selection's file name relative to its working directory. Empty for a
/// directory selection, so callers can pass it straight to commands that
/// treat an empty pathspec as "the whole tree".
pub fn relative_name(ctx: &Context) -> String {
    if ctx.is_dir {
        return String::new();
    }
    let wd = wd_from_context(ctx);
    ctx.path
        .strip_prefix(&wd)
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_default()
}
