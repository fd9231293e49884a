//! Progress badge - renders an experience/level pair.

use certprep_core::ProgressState;
use serde::Serialize;

use crate::format::NumberLocale;

/// Renders `(xp, level)` pairs into [`BadgeView`]s.
///
/// Rendering is a pure function of the inputs and the locale chosen at
/// construction. The badge does not derive level from experience and does
/// not check that the two agree; callers must pass `level >= 1`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProgressBadge {
    locale: NumberLocale,
}

impl ProgressBadge {
    /// Create a badge renderer for a locale.
    pub fn new(locale: NumberLocale) -> Self {
        Self { locale }
    }

    /// Locale used for the experience figure.
    pub fn locale(&self) -> NumberLocale {
        self.locale
    }

    /// Render experience and level.
    pub fn render(&self, xp: u64, level: u32) -> BadgeView {
        BadgeView {
            level,
            glyph: level.to_string(),
            level_label: format!("Level {level}"),
            xp_text: format!("{} XP", self.locale.group(xp)),
        }
    }

    /// Render a [`ProgressState`].
    pub fn render_state(&self, state: ProgressState) -> BadgeView {
        self.render(state.xp, state.level)
    }
}

/// Rendered badge.
///
/// The glyph and the label are both built from the same `level` value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgeView {
    /// Level the view was rendered for
    pub level: u32,

    /// Compact badge content, e.g. `"7"`
    pub glyph: String,

    /// Labelled level line, e.g. `"Level 7"`
    pub level_label: String,

    /// Grouped experience figure, e.g. `"1,234,500 XP"`
    pub xp_text: String,
}

impl BadgeView {
    /// HTML fragment for embedding in a page.
    pub fn to_html(&self) -> String {
        format!(
            concat!(
                r#"<div class="progress-badge" aria-label="{label}, {xp}">"#,
                r#"<span class="progress-badge__glyph">{glyph}</span>"#,
                r#"<span class="progress-badge__level">{label}</span>"#,
                r#"<span class="progress-badge__xp">{xp}</span>"#,
                "</div>"
            ),
            glyph = escape_html(&self.glyph),
            label = escape_html(&self.level_label),
            xp = escape_html(&self.xp_text),
        )
    }
}

impl std::fmt::Display for BadgeView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let glyph = format!("({})", self.glyph);
        writeln!(f, "{glyph} {}", self.level_label)?;
        write!(f, "{:width$} {}", "", self.xp_text, width = glyph.chars().count())
    }
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
