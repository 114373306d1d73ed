use gpui::*;

fn hex(value: u32) -> Hsla {
    rgb(value).into()
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChartTheme {
    pub background: Hsla,
    pub grid_line: Hsla,
    pub marker_fill: Hsla,
    /// Used when a series color cannot be parsed.
    pub default_series: Hsla,
    pub tooltip_background: Hsla,
    pub tooltip_date_text: Hsla,
    pub tooltip_value_text: Hsla,
    pub tooltip_label_text: Hsla,
    pub placeholder_background: Hsla,
    pub placeholder_text: Hsla,
    pub panel_background: Hsla,
    pub panel_border: Hsla,
    pub title_text: Hsla,
    pub muted_text: Hsla,
    pub accent: Hsla,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            background: gpui::transparent_black(),
            grid_line: hex(0xe2e8f0),
            marker_fill: gpui::white(),
            default_series: hex(0x6366f1),
            tooltip_background: hex(0x1e293b).opacity(0.95),
            tooltip_date_text: hex(0xcbd5e1),
            tooltip_value_text: gpui::white(),
            tooltip_label_text: hex(0x94a3b8),
            placeholder_background: hex(0xf9fafb),
            placeholder_text: hex(0x9ca3af),
            panel_background: hex(0xf8fafc),
            panel_border: hex(0xf1f5f9),
            title_text: hex(0x1e293b),
            muted_text: hex(0x94a3b8),
            accent: hex(0x4f46e5),
        }
    }
}
