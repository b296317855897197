// classgit: encrypted course sync over Git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Filesystem utilities with parallel traversal and async copy.
//!
//! ```text
//! walk:  parallel_walk()           ignore::WalkParallel (multi-core)
//!        collect_relative_files()  sorted, wax exclude globs
//!        WalkOptions               hidden, gitignore, skip_dirs
//! copy:  copy_file_async()         tokio::fs copy, parents created
//!        move_file_async()         rename with copy fallback
//!        prune_empty_dirs_async()  tidy up after deletions
//! ```

pub mod copy;
pub mod walk;

#[cfg(test)]
mod tests;
