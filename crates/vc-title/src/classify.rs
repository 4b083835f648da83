//! Title id classification
//!
//! CafeOS title ids are 64-bit: the high 32 bits select the title class
//! (game, demo, system software) and the low 32 bits identify the title
//! itself. Virtual Console releases share the game class with native
//! software, so emulated platforms are recognized from a table of known
//! title ids; a game-class id not in the table is native software.

use crate::platform::Platform;

/// Class bucket from the high 32 bits of a title id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleType {
    /// Disc or eShop game
    Game,
    /// Demo or downloadable trailer
    Demo,
    /// System application, applet or system data
    System,
    /// Anything else
    Unknown,
}

impl TitleType {
    /// Bucket a raw title id.
    pub fn from_id(title_id: u64) -> Self {
        match (title_id >> 32) as u32 {
            0x0005_0000 => Self::Game,
            0x0005_0002 => Self::Demo,
            0x0005_0010 | 0x0005_001B | 0x0005_0030 => Self::System,
            _ => Self::Unknown,
        }
    }
}

/// Known Virtual Console title ids (low 32 bits), verified by hand.
/// A game-class id missing here is treated as native Wii U software; the
/// session engine rejects titles its service does not know.
const VC_TITLES: &[(u32, Platform)] = &[
    // Nintendo 64
    (0x1019_9400, Platform::N64),
    (0x1019_9500, Platform::N64),
    (0x101A_4D00, Platform::N64),
    (0x101A_BC00, Platform::N64),
    (0x101C_8C00, Platform::N64),
    // Nintendo DS
    (0x101A_2F00, Platform::Nds),
    (0x101B_8800, Platform::Nds),
    (0x101C_3300, Platform::Nds),
    (0x101D_5400, Platform::Nds),
    // NES / Famicom
    (0x1010_EB00, Platform::Nes),
    (0x1011_2D00, Platform::Nes),
    (0x1014_C200, Platform::Nes),
    // SNES / Super Famicom
    (0x1011_2C00, Platform::Snes),
    (0x1012_D300, Platform::Snes),
    (0x1016_1A00, Platform::Snes),
    // Game Boy Advance
    (0x1015_C800, Platform::Gba),
    (0x1017_9B00, Platform::Gba),
    // Wii
    (0x101E_5300, Platform::Wii),
    // TurboGrafx-16 / PC Engine
    (0x101F_1100, Platform::Tg16),
    // MSX
    (0x101F_8A00, Platform::Msx),
];

/// Classify a title id into its platform category.
///
/// Pure, total and deterministic; unknown identifiers map to
/// [`Platform::Unknown`]. Absence of a match is a valid terminal result,
/// not an error.
pub fn classify(title_id: u64) -> Platform {
    match TitleType::from_id(title_id) {
        TitleType::Game => {
            let low = title_id as u32;
            VC_TITLES
                .iter()
                .find(|(id, _)| *id == low)
                .map(|(_, platform)| *platform)
                .unwrap_or(Platform::WiiU)
        }
        TitleType::Demo => Platform::Demo,
        TitleType::System => Platform::System,
        TitleType::Unknown => Platform::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_deterministic() {
        for &(low, _) in VC_TITLES {
            let id = 0x0005_0000_0000_0000 | low as u64;
            assert_eq!(classify(id), classify(id));
        }
    }

    #[test]
    fn test_classify_vc_titles() {
        assert_eq!(classify(0x0005_0000_1019_9500), Platform::N64);
        assert_eq!(classify(0x0005_0000_101B_8800), Platform::Nds);
        assert_eq!(classify(0x0005_0000_1011_2D00), Platform::Nes);
    }

    #[test]
    fn test_classify_native_fallback() {
        // A game-class id not in the VC table is native software.
        assert_eq!(classify(0x0005_0000_1010_EC00), Platform::WiiU);
    }

    #[test]
    fn test_classify_buckets() {
        assert_eq!(classify(0x0005_0002_1010_EB00), Platform::Demo);
        assert_eq!(classify(0x0005_0010_1000_4000), Platform::System);
        assert_eq!(classify(0x0005_001B_1005_9000), Platform::System);
        assert_eq!(classify(0x0005_0030_1001_2000), Platform::System);
    }

    #[test]
    fn test_classify_total() {
        assert_eq!(classify(0), Platform::Unknown);
        assert_eq!(classify(u64::MAX), Platform::Unknown);
        assert_eq!(classify(0x0007_0002_0000_0000), Platform::Unknown);
    }

    #[test]
    fn test_title_type_masking() {
        assert_eq!(TitleType::from_id(0x0005_0000_101C_9300), TitleType::Game);
        assert_eq!(TitleType::from_id(0x0005_0002_101C_9300), TitleType::Demo);
        assert_eq!(TitleType::from_id(0xDEAD_BEEF_0000_0000), TitleType::Unknown);
    }
}
