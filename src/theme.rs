//! Theme Model
//!
//! A two-state light/dark theme with one color palette per state. The mode
//! flips when the OS reports a system theme change; there is no debounce and
//! no transition animation. Only the presentation layer reads the palette.

/// An 8-bit sRGB color with alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Converts to linear-space RGBA floats for the renderer.
    ///
    /// The surface format is sRGB, so values written by the shader are
    /// re-encoded on output; converting here reproduces the exact 8-bit
    /// palette values on screen.
    #[must_use]
    pub fn to_linear(self) -> [f32; 4] {
        fn channel(v: u8) -> f32 {
            let c = f32::from(v) / 255.0;
            if c <= 0.04045 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        [
            channel(self.r),
            channel(self.g),
            channel(self.b),
            f32::from(self.a) / 255.0,
        ]
    }
}

/// The colors of one theme state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Shows through the 1-px gaps between background, title bar and client.
    pub border: Color,
    /// Client area fill.
    pub background: Color,
    /// Title bar fill.
    pub title_bar: Color,
}

/// Theme state machine: light or dark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl From<winit::window::Theme> for ThemeMode {
    fn from(theme: winit::window::Theme) -> Self {
        match theme {
            winit::window::Theme::Light => Self::Light,
            winit::window::Theme::Dark => Self::Dark,
        }
    }
}

/// The light and dark palettes plus the active mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub light: Palette,
    pub dark: Palette,
    mode: ThemeMode,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            light: Palette {
                border: Color::rgb(200, 200, 200),
                background: Color::rgb(227, 227, 227),
                title_bar: Color::rgb(255, 255, 255),
            },
            dark: Palette {
                border: Color::rgb(55, 55, 55),
                background: Color::rgb(27, 27, 27),
                title_bar: Color::rgb(0, 0, 0),
            },
            mode: ThemeMode::Light,
        }
    }
}

impl Theme {
    /// The palette for the active mode.
    #[must_use]
    pub fn active(&self) -> &Palette {
        match self.mode {
            ThemeMode::Light => &self.light,
            ThemeMode::Dark => &self.dark,
        }
    }

    #[must_use]
    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Switches the active mode. Returns `true` if the mode changed, so the
    /// caller knows whether to mark the frame dirty.
    pub fn set_mode(&mut self, mode: ThemeMode) -> bool {
        let changed = self.mode != mode;
        self.mode = mode;
        changed
    }
}
