// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Locally minted identifiers.
//!
//! Todo and operation IDs are random v4 UUIDs, so clients that are offline at
//! the same time never collide and creation never waits on a server.

use uuid::{Uuid, Variant, Version};

/// Generates a new random v4 UUID in hyphenated lowercase form.
pub fn generate_uuid() -> String {
    Uuid::new_v4().hyphenated().to_string()
}

/// Returns true if `s` is a hyphenated RFC 4122 version-4 UUID.
pub fn is_v4_uuid(s: &str) -> bool {
    if s.len() != 36 {
        return false;
    }
    match Uuid::parse_str(s) {
        Ok(uuid) => uuid.get_version() == Some(Version::Random) && uuid.get_variant() == Variant::RFC4122,
        Err(_) => false,
    }
}

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
