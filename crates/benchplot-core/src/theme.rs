// File: crates/benchplot-core/src/theme.rs
// Summary: Dark/Light palettes and font families used by every chart.

use crate::primitive::Color;

#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    /// Base colour for gridlines and axis lines; charts pick the alpha.
    pub grid: Color,
    pub tick_label: Color,
    pub value_label: Color,
    pub point_label: Color,
    pub legend_label: Color,
    pub panel_title: Color,
    /// Accent for the highlighted (own-method) entry.
    pub highlight: Color,
    pub highlight_light: Color,
    /// First metric series (detection, bar fills, scatter points).
    pub primary: Color,
    pub primary_light: Color,
    pub primary_value_strong: Color,
    pub point_outline: Color,
    /// Second metric series (localization, comparison-table points).
    pub secondary: Color,
    pub secondary_light: Color,
    pub secondary_label: Color,
    pub secondary_value: Color,
    pub secondary_value_strong: Color,
    /// Throughput bars of non-highlighted records.
    pub tertiary: Color,
    pub body_font: &'static str,
    pub display_font: &'static str,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::hex(0x041118),
            grid: Color::rgb(161, 194, 212),
            tick_label: Color::hex(0xa8c0ce),
            value_label: Color::hex(0xd5eff8),
            point_label: Color::hex(0xcde8f4),
            legend_label: Color::hex(0xcfe8f3),
            panel_title: Color::hex(0xdff3fb),
            highlight: Color::hex(0x00d2a6),
            highlight_light: Color::hex(0x7ef3d6),
            primary: Color::hex(0x63d6ff),
            primary_light: Color::rgb(214, 246, 255),
            primary_value_strong: Color::hex(0xd8f6ff),
            point_outline: Color::rgb(223, 245, 255),
            secondary: Color::hex(0xff9b54),
            secondary_light: Color::rgb(255, 223, 196),
            secondary_label: Color::hex(0xffd7b8),
            secondary_value: Color::hex(0xffe1ca),
            secondary_value_strong: Color::hex(0xffe9d3),
            tertiary: Color::rgb(139, 230, 221),
            body_font: "Sora, sans-serif",
            display_font: "Space Grotesk, sans-serif",
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::hex(0xfafafc),
            grid: Color::rgb(70, 90, 105),
            tick_label: Color::hex(0x4a5d6a),
            value_label: Color::hex(0x1d3340),
            point_label: Color::hex(0x24404f),
            legend_label: Color::hex(0x24404f),
            panel_title: Color::hex(0x0f222d),
            highlight: Color::hex(0x009b7a),
            highlight_light: Color::hex(0x007a60),
            primary: Color::hex(0x2a8fc0),
            primary_light: Color::rgb(20, 90, 130),
            primary_value_strong: Color::hex(0x0d4a6b),
            point_outline: Color::rgb(30, 60, 80),
            secondary: Color::hex(0xe0772e),
            secondary_light: Color::rgb(150, 70, 20),
            secondary_label: Color::hex(0xa0521c),
            secondary_value: Color::hex(0x8a4a1e),
            secondary_value_strong: Color::hex(0x6b3510),
            tertiary: Color::rgb(60, 170, 160),
            body_font: "Sora, sans-serif",
            display_font: "Space Grotesk, sans-serif",
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::dark() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light()]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::dark()
}
