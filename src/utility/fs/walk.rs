// classgit: encrypted course sync over Git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::error::{FsError, Result};
use bon::Builder;
use flume::unbounded;
use ignore::{WalkBuilder, WalkState};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{trace, warn};

/// Which entries a walk reports.
#[derive(Debug, Clone, Builder)]
pub struct WalkOptions {
    /// Report dotfiles and descend into dot-directories.
    #[builder(setters(name = with_include_hidden), default = false)]
    include_hidden: bool,
    /// Honour `.gitignore`, `.ignore` and global excludes.
    #[builder(setters(name = with_respect_gitignore), default = true)]
    respect_gitignore: bool,
    /// Directory names never descended into.
    #[builder(setters(name = with_skip_dirs), default)]
    skip_dirs: Vec<String>,
    /// Report what symlinks point at instead of skipping them.
    #[builder(setters(name = with_follow_links), default = false)]
    follow_links: bool,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl WalkOptions {
    #[must_use]
    pub const fn include_hidden(&self) -> bool {
        self.include_hidden
    }

    #[must_use]
    pub const fn respect_gitignore(&self) -> bool {
        self.respect_gitignore
    }

    #[must_use]
    pub fn skip_dirs(&self) -> &[String] {
        &self.skip_dirs
    }

    #[must_use]
    pub const fn follow_links(&self) -> bool {
        self.follow_links
    }

    /// Every file a student put in a tree, dotfiles included.
    ///
    /// Ignore files are not consulted, `.git` directories are skipped and
    /// symlinks are followed, so a linked course file counts as a file.
    #[must_use]
    pub fn for_sync() -> Self {
        Self::builder()
            .with_include_hidden(true)
            .with_respect_gitignore(false)
            .with_skip_dirs(vec![".git".to_string()])
            .with_follow_links(true)
            .build()
    }
}

/// Files found by [`parallel_walk`], in no particular order.
#[derive(Debug, Default)]
pub struct WalkResult {
    files: Vec<PathBuf>,
    unreadable: usize,
}

impl WalkResult {
    #[must_use]
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Entries skipped because they could not be read.
    #[must_use]
    pub const fn unreadable(&self) -> usize {
        self.unreadable
    }
}

fn build_walker(root: &Path, options: &WalkOptions) -> WalkBuilder {
    let mut builder = WalkBuilder::new(root);
    let ignore_files = options.respect_gitignore();
    builder
        .hidden(!options.include_hidden())
        .follow_links(options.follow_links())
        .git_ignore(ignore_files)
        .git_global(ignore_files)
        .git_exclude(ignore_files)
        .ignore(ignore_files)
        .parents(ignore_files);

    if !options.skip_dirs().is_empty() {
        let skip_dirs: Arc<[String]> = options.skip_dirs().into();
        builder.filter_entry(move |entry| {
            let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
            !(is_dir
                && entry
                    .file_name()
                    .to_str()
                    .is_some_and(|name| skip_dirs.iter().any(|skip| skip == name)))
        });
    }

    builder
}

/// Walk `root` on all cores and return every regular file.
///
/// Unreadable entries are logged and counted, not fatal.
///
/// # Errors
///
/// Returns `FsError::NotFound` if `root` does not exist.
///
/// # Example
/// ```no_run
/// use classgit::utility::fs::walk::{parallel_walk, WalkOptions};
///
/// let result = parallel_walk("/home/me/ClassGit/courses", &WalkOptions::for_sync())?;
/// println!("{} course files", result.files().len());
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn parallel_walk<P: AsRef<Path>>(root: P, options: &WalkOptions) -> Result<WalkResult> {
    let root = root.as_ref();
    if !root.exists() {
        return Err(FsError::NotFound(root.display().to_string()).into());
    }

    // Drained only after the walk finishes, so it must not block senders.
    let (tx, rx) = unbounded::<PathBuf>();
    let unreadable = Arc::new(AtomicUsize::new(0));

    build_walker(root, options).build_parallel().run(|| {
        let tx = tx.clone();
        let unreadable = Arc::clone(&unreadable);
        Box::new(move |entry| {
            match entry {
                Ok(entry) if entry.file_type().is_some_and(|ft| ft.is_file()) => {
                    let _ = tx.send(entry.into_path());
                }
                Ok(_) => {}
                Err(e) => {
                    warn!(error = %e, "skipping unreadable entry");
                    unreadable.fetch_add(1, Ordering::Relaxed);
                }
            }
            WalkState::Continue
        })
    });
    drop(tx);

    Ok(WalkResult {
        files: rx.iter().collect(),
        unreadable: unreadable.load(Ordering::Relaxed),
    })
}

/// Collects regular files under `root` as sorted paths relative to `root`.
///
/// A file is dropped when its relative path matches any glob in `exclude`.
/// A missing `root` yields an empty list.
///
/// # Errors
///
/// Returns an error if an exclude pattern is not a valid glob, or
/// `FsError::Unreadable` if any entry under `root` could not be read (a
/// dangling symlink, a directory without permission). A partial listing is
/// never returned.
///
/// # Example
/// ```no_run
/// use classgit::utility::fs::walk::{collect_relative_files, WalkOptions};
///
/// let files = collect_relative_files(
///     "/home/me/ClassGit/courses",
///     &WalkOptions::for_sync(),
///     &["**/.DS_Store".to_string()],
/// )?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn collect_relative_files<P: AsRef<Path>>(
    root: P,
    options: &WalkOptions,
    exclude: &[String],
) -> Result<Vec<PathBuf>> {
    use wax::{Glob, Program};

    let root = root.as_ref();
    if !root.is_dir() {
        return Ok(Vec::new());
    }

    let globs = exclude
        .iter()
        .map(|pattern| {
            Glob::new(pattern)
                .map_err(|e| anyhow::anyhow!("invalid glob pattern '{pattern}': {e}"))
        })
        .collect::<Result<Vec<_>>>()?;

    let walked = parallel_walk(root, options)?;
    if walked.unreadable() > 0 {
        return Err(FsError::Unreadable {
            path: root.display().to_string(),
            count: walked.unreadable(),
        }
        .into());
    }

    let mut files: Vec<PathBuf> = walked
        .files()
        .iter()
        .filter_map(|path| path.strip_prefix(root).ok())
        .filter(|rel| {
            let excluded = globs.iter().any(|glob| glob.is_match(*rel));
            if excluded {
                trace!(path = %rel.display(), "excluded");
            }
            !excluded
        })
        .map(Path::to_path_buf)
        .collect();

    files.sort();
    Ok(files)
}
