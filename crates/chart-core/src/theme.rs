// File: crates/chart-core/src/theme.rs
// Summary: Light/Dark theming for chart colors, series palette and color parsing.

/// Series colors handed out by index when a series carries none.
pub const DEFAULT_PALETTE: [&str; 5] = ["#f06449", "#0b7a75", "#3d5a80", "#f4b942", "#6d597a"];

#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: String,
    pub axis_line: String,
    pub tick_label: String,
    pub title: String,
    pub font_family: String,
    pub font_size: f64,
    pub palette: Vec<String>,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: "#ffffff".into(),
            axis_line: "#101820".into(),
            tick_label: "#5a6772".into(),
            title: "#101820".into(),
            font_family: "Space Grotesk, sans-serif".into(),
            font_size: 12.0,
            palette: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: "#121214".into(),
            axis_line: "#b4b4be".into(),
            tick_label: "#969aa0".into(),
            title: "#ebebf5".into(),
            font_family: "Space Grotesk, sans-serif".into(),
            font_size: 12.0,
            palette: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
        }
    }

    /// Resolve a series color: its own color verbatim, else `palette[index % len]`.
    pub fn series_color(&self, own: Option<&str>, index: usize) -> String {
        if let Some(c) = own {
            return c.to_string();
        }
        if self.palette.is_empty() {
            return self.axis_line.clone();
        }
        self.palette[index % self.palette.len()].clone()
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}

/// RGBA color with 8-bit channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Parse `#rgb`, `#rrggbb` or `#rrggbbaa`. Other CSS forms return `None`.
pub fn parse_hex_color(text: &str) -> Option<Rgba> {
    let hex = text.trim().strip_prefix('#')?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let byte = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        3 => {
            let nib = |i: usize| byte(&hex[i..i + 1]).map(|v| v * 17);
            Some(Rgba { r: nib(0)?, g: nib(1)?, b: nib(2)?, a: 255 })
        }
        6 => Some(Rgba { r: byte(&hex[0..2])?, g: byte(&hex[2..4])?, b: byte(&hex[4..6])?, a: 255 }),
        8 => Some(Rgba {
            r: byte(&hex[0..2])?,
            g: byte(&hex[2..4])?,
            b: byte(&hex[4..6])?,
            a: byte(&hex[6..8])?,
        }),
        _ => None,
    }
}
