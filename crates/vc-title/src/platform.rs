//! Platform categories for running titles

use vc_core::ByteOrder;

/// Platform a title runs on, derived once per launch from its title id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Platform {
    #[default]
    Unknown,

    /// Native Wii U disc or digital download software
    WiiU,

    /// Virtual Console: Nintendo Entertainment System, Famicom
    Nes,

    /// Virtual Console: Super Nintendo Entertainment System, Super Famicom
    Snes,

    /// Virtual Console: Nintendo 64
    N64,

    /// Virtual Console: Wii
    Wii,

    /// Virtual Console: Game Boy Advance
    Gba,

    /// Virtual Console: Nintendo DS
    Nds,

    /// Virtual Console: TurboGrafx-16, PC Engine
    Tg16,

    /// Virtual Console: MSX
    Msx,

    /// System applications and applets. The client should not run here.
    System,

    /// Demos and downloadable trailers
    Demo,
}

impl Platform {
    /// Whether this platform is an emulated legacy core rather than native
    /// host software.
    pub fn is_emulated(self) -> bool {
        matches!(
            self,
            Self::Nes
                | Self::Snes
                | Self::N64
                | Self::Wii
                | Self::Gba
                | Self::Nds
                | Self::Tg16
                | Self::Msx
        )
    }

    /// Whether the polling task supports this platform.
    pub fn supports_polling(self) -> bool {
        matches!(self, Self::WiiU | Self::N64 | Self::Nds)
    }

    /// Native byte order of the platform's guest memory.
    pub fn byte_order(self) -> ByteOrder {
        match self {
            Self::WiiU | Self::Snes | Self::N64 | Self::Wii => ByteOrder::Big,
            Self::Nes | Self::Gba | Self::Nds | Self::Tg16 | Self::Msx => ByteOrder::Little,
            Self::Unknown | Self::System | Self::Demo => ByteOrder::HOST,
        }
    }

    /// Library name reported to the session engine.
    pub fn library_name(self) -> &'static str {
        if self.is_emulated() {
            "Wii U Virtual Console"
        } else {
            "Wii U"
        }
    }

    /// Strings the emulator core prints when its shell menu opens and
    /// closes. Platforms without markers are never paused by log activity.
    pub fn shell_menu_markers(self) -> Option<(&'static str, &'static str)> {
        match self {
            Self::N64 => Some(("trlEmuShellMenuOpen", "trlEmuShellMenuClose")),
            Self::Nes => Some(("change 3 <--- 2", "change 2 <--- 3")),
            _ => None,
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Unknown => "Unknown",
            Self::WiiU => "Wii U",
            Self::Nes => "NES",
            Self::Snes => "SNES",
            Self::N64 => "N64",
            Self::Wii => "Wii",
            Self::Gba => "GBA",
            Self::Nds => "NDS",
            Self::Tg16 => "TurboGrafx-16",
            Self::Msx => "MSX",
            Self::System => "System",
            Self::Demo => "Demo",
        };
        write!(f, "{}", name)
    }
}
