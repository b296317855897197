// classgit: encrypted course sync over Git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Utility modules.
//!
//! ```text
//! fs
//!   walk:  parallel_walk(), collect_relative_files(), WalkOptions
//!   copy:  copy_file_async(), move_file_async(), prune_empty_dirs_async()
//! ```

pub mod fs;
