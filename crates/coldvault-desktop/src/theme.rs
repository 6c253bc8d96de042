//! Theme configuration for the desktop app

use std::sync::OnceLock;

pub use coldvault_core::models::ThemeMode;
use coldvault_core::DotColor;

/// Cached system dark mode preference (detected once at startup)
static SYSTEM_DARK_MODE: OnceLock<bool> = OnceLock::new();

/// Resolved theme (light or dark)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolvedTheme {
    #[default]
    Light,
    Dark,
}

impl ResolvedTheme {
    #[must_use]
    pub const fn attr(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Resolve theme mode to actual light/dark theme
#[must_use]
pub fn resolve_theme(mode: ThemeMode) -> ResolvedTheme {
    match mode {
        ThemeMode::Light => ResolvedTheme::Light,
        ThemeMode::Dark => ResolvedTheme::Dark,
        ThemeMode::System => {
            if is_system_dark_mode() {
                ResolvedTheme::Dark
            } else {
                ResolvedTheme::Light
            }
        }
    }
}

/// Detect system dark mode preference (cached after first call)
#[must_use]
pub fn is_system_dark_mode() -> bool {
    *SYSTEM_DARK_MODE.get_or_init(detect_system_dark_mode)
}

#[cfg(target_os = "windows")]
fn detect_system_dark_mode() -> bool {
    use std::process::Command;
    // AppsUseLightTheme: 0 = dark mode, 1 = light mode
    let output = Command::new("reg")
        .args([
            "query",
            r"HKCU\SOFTWARE\Microsoft\Windows\CurrentVersion\Themes\Personalize",
            "/v",
            "AppsUseLightTheme",
        ])
        .output();

    match output {
        Ok(output) => String::from_utf8_lossy(&output.stdout).contains("0x0"),
        Err(e) => {
            tracing::warn!("Failed to detect system theme: {}. Defaulting to light mode.", e);
            false
        }
    }
}

#[cfg(target_os = "macos")]
fn detect_system_dark_mode() -> bool {
    use std::process::Command;
    let output = Command::new("defaults")
        .args(["read", "-g", "AppleInterfaceStyle"])
        .output();

    match output {
        Ok(output) => String::from_utf8_lossy(&output.stdout)
            .trim()
            .eq_ignore_ascii_case("dark"),
        Err(e) => {
            tracing::warn!("Failed to detect system theme: {}. Defaulting to light mode.", e);
            false
        }
    }
}

#[cfg(target_os = "linux")]
fn detect_system_dark_mode() -> bool {
    std::env::var("GTK_THEME").is_ok_and(|theme| theme.to_lowercase().contains("dark"))
}

#[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
fn detect_system_dark_mode() -> bool {
    tracing::debug!("Unsupported platform for system theme detection, defaulting to light mode");
    false
}

/// Named colors and sizes for the application
#[derive(Debug, Clone, Copy)]
pub struct ColorPalette {
    pub cream: &'static str,
    pub white: &'static str,
    pub black: &'static str,
    pub dark: &'static str,
    pub night: &'static str,
    pub grey: &'static str,
    pub warm_grey: &'static str,
    pub mouse: &'static str,
    pub light_fog: &'static str,
    pub wallet: &'static str,
    pub dodger_blue: &'static str,
    pub grenade: &'static str,
    pub green: &'static str,
    pub top_bar_height: u32,
}

/// Light theme colors
pub const LIGHT_PALETTE: ColorPalette = ColorPalette {
    cream: "#f9f9f9",
    white: "#ffffff",
    black: "#000000",
    dark: "#1d2028",
    night: "#142533",
    grey: "#a8a8a8",
    warm_grey: "#999999",
    mouse: "#e2e2e2",
    light_fog: "#eeeeee",
    wallet: "#6490f1",
    dodger_blue: "#6490f1",
    grenade: "#ea2e49",
    green: "#66be54",
    top_bar_height: 58,
};

/// Dark theme colors
pub const DARK_PALETTE: ColorPalette = ColorPalette {
    cream: "#1c1e22",
    white: "#24272e",
    black: "#000000",
    dark: "#e8eaed",
    night: "#dfe6ee",
    grey: "#8a8f98",
    warm_grey: "#9aa0a6",
    mouse: "#3c4043",
    light_fog: "#30343b",
    wallet: "#7ea3f5",
    dodger_blue: "#7ea3f5",
    grenade: "#f0566c",
    green: "#7fcf6e",
    top_bar_height: 58,
};

impl ResolvedTheme {
    /// Get the color palette for this theme
    #[must_use]
    pub const fn palette(self) -> &'static ColorPalette {
        match self {
            Self::Light => &LIGHT_PALETTE,
            Self::Dark => &DARK_PALETTE,
        }
    }
}

impl ColorPalette {
    /// Look up a named color; anything else is returned as a CSS literal.
    #[must_use]
    pub fn resolve<'a>(&self, name: &'a str) -> &'a str {
        match name {
            "cream" => self.cream,
            "white" => self.white,
            "black" => self.black,
            "dark" => self.dark,
            "night" => self.night,
            "grey" => self.grey,
            "warmGrey" | "warm_grey" => self.warm_grey,
            "mouse" => self.mouse,
            "lightFog" | "light_fog" => self.light_fog,
            "wallet" => self.wallet,
            "dodgerBlue" | "dodger_blue" => self.dodger_blue,
            "grenade" => self.grenade,
            "green" => self.green,
            other => other,
        }
    }

    #[must_use]
    pub const fn dot(&self, color: DotColor) -> &'static str {
        match color {
            DotColor::Blue => self.dodger_blue,
            DotColor::Red => self.grenade,
            DotColor::Green => self.green,
        }
    }
}
