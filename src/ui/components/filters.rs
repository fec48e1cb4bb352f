//! Filter bar renderer: category tabs, anime cards and active chips.

use crate::ui::helpers::display_width;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FilterBar;

/// Renders the filter bar.
///
/// Items that would overflow `cols` wrap onto the next line.
///
/// # Layout
///
/// ```text
///  [전체 15]  코스튬 5  위그 3  악세서리 3  신발/부츠 2  피규어 2
///  작품  ✓원신 3  블루 아카이브 2  하츠네 미쿠 1 ...
///  적용됨  × 원신   clear: 전체 해제
/// ```
pub fn render_filter_bar(out: &mut String, filters: &FilterBar, theme: &Theme, cols: usize) {
    let tabs = filters.tabs.iter().map(|tab| {
        let text = if tab.active {
            format!("[{} {}]", tab.label, tab.count)
        } else {
            format!("{} {}", tab.label, tab.count)
        };
        (text, tab.active)
    });
    render_wrapped(out, " ", tabs, theme, cols);

    let anime = filters.anime.iter().map(|anime| {
        let mark = if anime.selected { "✓" } else { "" };
        (format!("{mark}{} {}", anime.label, anime.count), anime.selected)
    });
    render_wrapped(out, " 작품 ", anime, theme, cols);

    if filters.chips.is_empty() {
        return;
    }

    out.push_str(&Theme::fg(&theme.colors.text_dim));
    out.push_str(" 적용됨 ");
    out.push_str(Theme::reset());
    for chip in &filters.chips {
        out.push(' ');
        out.push_str(&Theme::fg(&theme.colors.chip_fg));
        out.push_str(&Theme::bg(&theme.colors.chip_bg));
        out.push_str(&format!(" × {chip} "));
        out.push_str(Theme::reset());
    }
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    out.push_str("   clear: 전체 해제");
    out.push_str(Theme::reset());
    out.push('\n');
}

fn render_wrapped<I>(out: &mut String, label: &str, items: I, theme: &Theme, cols: usize)
where
    I: Iterator<Item = (String, bool)>,
{
    let indent = display_width(label);
    let mut width = indent;

    out.push_str(&Theme::fg(&theme.colors.text_dim));
    out.push_str(label);
    out.push_str(Theme::reset());

    for (text, active) in items {
        let item_width = display_width(&text) + 2;
        if width + item_width > cols && width > indent {
            out.push('\n');
            out.push_str(&" ".repeat(indent));
            width = indent;
        }
        width += item_width;

        if active {
            out.push_str(Theme::bold());
            out.push_str(&Theme::fg(&theme.colors.accent));
        } else {
            out.push_str(&Theme::fg(&theme.colors.text_normal));
        }
        out.push_str(&text);
        out.push_str(Theme::reset());
        out.push_str("  ");
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::viewmodel::{AnimeInfo, TabInfo};

    fn bar(chips: Vec<String>) -> FilterBar {
        FilterBar {
            tabs: vec![
                TabInfo {
                    id: "all".into(),
                    label: "전체".into(),
                    count: 15,
                    active: true,
                },
                TabInfo {
                    id: "wig".into(),
                    label: "위그".into(),
                    count: 3,
                    active: false,
                },
            ],
            anime: vec![AnimeInfo {
                id: "genshin".into(),
                label: "원신".into(),
                count: 3,
                selected: !chips.is_empty(),
            }],
            chips,
        }
    }

    #[test]
    fn active_tab_is_bracketed() {
        let mut out = String::new();
        render_filter_bar(&mut out, &bar(Vec::new()), &Theme::default(), 80);
        assert!(out.contains("[전체 15]"));
        assert!(out.contains("위그 3"));
        assert!(!out.contains("적용됨"));
    }

    #[test]
    fn chips_line_appears_with_selection() {
        let mut out = String::new();
        render_filter_bar(&mut out, &bar(vec!["원신".into()]), &Theme::default(), 80);
        assert!(out.contains("✓원신 3"));
        assert!(out.contains("× 원신"));
    }

    #[test]
    fn narrow_width_wraps() {
        let mut out = String::new();
        render_filter_bar(&mut out, &bar(Vec::new()), &Theme::default(), 12);
        assert!(out.matches('\n').count() >= 3);
    }
}
