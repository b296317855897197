// classgit: encrypted course sync over Git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Path mapping between `courses/` and the encrypted mirror.
//!
//! ```text
//! courses/math/hw1.pdf  <-->  encrypted/math/hw1.pdf.age
//! ```

use crate::age::AGE_EXTENSION;
use std::path::{Path, PathBuf};

/// Mirror path of a plaintext file: the same relative path plus `.age`.
///
/// A plaintext that already ends in `.age` gains a second extension, so
/// the mapping stays reversible.
#[must_use]
pub fn artifact_path(plaintext: &Path) -> PathBuf {
    let mut name = plaintext.as_os_str().to_owned();
    name.push(".");
    name.push(AGE_EXTENSION);
    PathBuf::from(name)
}

/// Plaintext path of a mirror artifact, or `None` for anything that is not
/// an artifact.
#[must_use]
pub fn plaintext_path(artifact: &Path) -> Option<PathBuf> {
    if !is_artifact(artifact) {
        return None;
    }
    let stem = artifact.file_stem()?;
    Some(artifact.with_file_name(stem))
}

/// Whether `path` names an encrypted artifact (`<name>.age`, non-empty name).
#[must_use]
pub fn is_artifact(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == AGE_EXTENSION)
        && path.file_stem().is_some_and(|stem| !stem.is_empty())
}
