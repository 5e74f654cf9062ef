use colored::Color;
use once_cell::sync::Lazy;

/// Colours for the roles that show up when printing a graph, plus the
/// status colours used by the output manager and the help screen.
pub struct GraphPalette {
    pub post_id: Color,
    pub author: Color,
    /// Likers and followers
    pub fan: Color,
    pub flagged: Color,
    pub heading: Color,
    pub section: Color,
    pub command: Color,
    pub env_key: Color,
    pub muted: Color,
    pub ok: Color,
    pub failed: Color,
    pub caution: Color,
    pub note: Color,
}

impl Default for GraphPalette {
    fn default() -> Self {
        Self {
            post_id: Color::BrightBlack,
            author: Color::BrightBlue,
            fan: Color::Magenta,
            flagged: Color::Red,
            heading: Color::Cyan,
            section: Color::BrightBlue,
            command: Color::Magenta,
            env_key: Color::BrightCyan,
            muted: Color::BrightBlack,
            ok: Color::Green,
            failed: Color::Red,
            caution: Color::Yellow,
            note: Color::Blue,
        }
    }
}

pub static PALETTE: Lazy<GraphPalette> = Lazy::new(GraphPalette::default);

/// Glyphs prefixed to messages and table cells
pub struct GraphIcons {
    pub ok: &'static str,
    pub failed: &'static str,
    pub caution: &'static str,
    pub note: &'static str,
    /// Follow edge, also used for example commands and verbose lines
    pub follows: &'static str,
    pub flagged: &'static str,
    pub like: &'static str,
}

pub const ICONS: GraphIcons = GraphIcons {
    ok: "✓",
    failed: "✗",
    caution: "⚠",
    note: "ℹ",
    follows: "→",
    flagged: "⚑",
    like: "♥",
};
