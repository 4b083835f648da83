//! Per-launch title identity

use crate::classify::{classify, TitleType};
use crate::platform::Platform;

/// Characters stripped from display names before they reach the service.
const ILLEGAL_CHARS: &str = "\\/:?\"<>|@=;`_^][";

/// Identity of the running title, computed once at application start and
/// immutable for the lifetime of that launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleInfo {
    /// Raw 64-bit title id reported by the host.
    pub id: u64,
    /// Class bucket from the high bits of the id.
    pub title_type: TitleType,
    /// Platform the title runs on.
    pub platform: Platform,
    /// Sanitized display name; may be empty if metadata was unavailable.
    pub name: String,
    /// Title version from the host metadata store.
    pub version: u32,
}

impl TitleInfo {
    /// Build the identity for a launch from host-reported data.
    pub fn new(id: u64, raw_name: &str, version: u32) -> Self {
        Self {
            id,
            title_type: TitleType::from_id(id),
            platform: classify(id),
            name: sanitize_title_name(raw_name),
            version,
        }
    }

    /// Display name with a platform-specific fallback for missing metadata.
    pub fn display_name(&self) -> String {
        if self.name.is_empty() {
            format!("Unknown {} Title", self.platform)
        } else {
            self.name.clone()
        }
    }
}

/// Sanitize a raw title name from the host metadata store.
///
/// Characters outside the basic printable range and characters from the
/// illegal set become spaces, runs of spaces collapse to one, and a name
/// reduced to whitespace becomes empty.
pub fn sanitize_title_name(raw: &str) -> String {
    let mapped: String = raw
        .chars()
        .map(|c| {
            if !('0'..='z').contains(&c) || ILLEGAL_CHARS.contains(c) {
                ' '
            } else {
                c
            }
        })
        .collect();

    let mut out = String::with_capacity(mapped.len());
    let mut last_space = false;
    for c in mapped.chars() {
        if c == ' ' {
            if !last_space {
                out.push(c);
            }
            last_space = true;
        } else {
            out.push(c);
            last_space = false;
        }
    }

    if out.trim().is_empty() {
        String::new()
    } else {
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_passthrough() {
        assert_eq!(sanitize_title_name("Super Mario 64"), "Super Mario 64");
    }

    #[test]
    fn test_sanitize_illegal_chars() {
        assert_eq!(sanitize_title_name("Mario/Luigi: Duo"), "Mario Luigi Duo");
        assert_eq!(sanitize_title_name("[Demo] Game_Name"), " Demo Game Name");
    }

    #[test]
    fn test_sanitize_collapses_spaces() {
        assert_eq!(sanitize_title_name("A   B"), "A B");
    }

    #[test]
    fn test_sanitize_whitespace_only() {
        assert_eq!(sanitize_title_name("///"), "");
        assert_eq!(sanitize_title_name(""), "");
    }

    #[test]
    fn test_display_name_fallback() {
        let info = TitleInfo::new(0x0005_0000_1019_9500, "", 16);
        assert_eq!(info.platform, Platform::N64);
        assert_eq!(info.display_name(), "Unknown N64 Title");

        let info = TitleInfo::new(0x0005_0000_1019_9500, "Star Road", 16);
        assert_eq!(info.display_name(), "Star Road");
    }
}
