// classgit: encrypted course sync over Git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! File encryption through the `age` command-line tools.
//!
//! ```text
//! Recipient   validated "age1..." public key
//! AgeTool
//!   .generate_identity()   age-keygen -o <key>
//!   .recipient_of()        age-keygen -y <key>
//!   .encrypt_file()        age -r <recipient> -o <out> <in>
//!   .decrypt_file()        age -d -i <key> -o <out> <in>
//! ```

pub mod recipient;
pub mod tool;


pub use recipient::Recipient;
pub use tool::AgeTool;

/// Extension appended to every encrypted artifact.
pub const AGE_EXTENSION: &str = "age";
