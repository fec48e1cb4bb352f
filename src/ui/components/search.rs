//! Search bar and suggestion renderers.

use crate::ui::helpers::{display_width, pad_right};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Renders the search input as a three-line box.
///
/// # Layout
///
/// ```text
/// ┌──────────────────────────────┐
/// │ 🔍 원신 코스튬                │
/// └──────────────────────────────┘
/// ```
pub fn render_search_bar(out: &mut String, search: &SearchBarInfo, theme: &Theme, cols: usize) {
    let border_color = Theme::fg(&theme.colors.accent);
    let inner = cols.saturating_sub(2);

    out.push_str(&border_color);
    out.push('┌');
    out.push_str(&"─".repeat(inner));
    out.push('┐');
    out.push_str(Theme::reset());
    out.push('\n');

    let content = format!(" 🔍 {}", search.query);
    out.push_str(&border_color);
    out.push('│');
    out.push_str(Theme::reset());
    out.push_str(&Theme::fg(&theme.colors.text_normal));
    out.push_str(&pad_right(&content, inner));
    out.push_str(Theme::reset());
    out.push_str(&border_color);
    out.push('│');
    out.push_str(Theme::reset());
    out.push('\n');

    out.push_str(&border_color);
    out.push('└');
    out.push_str(&"─".repeat(inner));
    out.push('┘');
    out.push_str(Theme::reset());
    out.push('\n');
}

/// Renders suggested search terms as chips on one line.
pub fn render_suggestions(out: &mut String, terms: &[String], theme: &Theme, cols: usize) {
    if terms.is_empty() {
        return;
    }

    let label = " 추천 검색어  ";
    let mut width = display_width(label);

    out.push_str(&Theme::fg(&theme.colors.text_dim));
    out.push_str(label);
    out.push_str(Theme::reset());

    for term in terms {
        let chip = format!(" #{term} ");
        let chip_width = display_width(&chip) + 1;
        if width + chip_width > cols {
            break;
        }
        width += chip_width;
        out.push_str(&Theme::fg(&theme.colors.chip_fg));
        out.push_str(&Theme::bg(&theme.colors.chip_bg));
        out.push_str(&chip);
        out.push_str(Theme::reset());
        out.push(' ');
    }
    out.push('\n');
}
