//! Shared rendering utilities.
//!
//! Price formatting, terminal column arithmetic for mixed Hangul/ASCII text
//! and search match highlighting. Everything writes into a `String` buffer;
//! nothing here prints.

use crate::ui::theme::Theme;

/// Formats a whole-won amount with thousands separators and the `원` suffix.
///
/// # Example
///
/// ```
/// use hellowshop::ui::helpers::format_price;
///
/// assert_eq!(format_price(159_000), "159,000원");
/// assert_eq!(format_price(0), "0원");
/// ```
#[must_use]
pub fn format_price(amount: u64) -> String {
    format!("{}원", format_number(amount))
}

/// Formats an integer with `,` every three digits.
#[must_use]
pub fn format_number(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Terminal columns taken by `ch`. Hangul, CJK, fullwidth forms and emoji
/// take two.
#[must_use]
pub const fn char_width(ch: char) -> usize {
    match ch as u32 {
        0x1100..=0x115F
        | 0x2E80..=0x303E
        | 0x3041..=0x33FF
        | 0x3400..=0x4DBF
        | 0x4E00..=0x9FFF
        | 0xA960..=0xA97F
        | 0xAC00..=0xD7A3
        | 0xF900..=0xFAFF
        | 0xFE30..=0xFE4F
        | 0xFF00..=0xFF60
        | 0xFFE0..=0xFFE6
        | 0x1F300..=0x1FAFF => 2,
        _ => 1,
    }
}

/// Terminal columns taken by `text`.
#[must_use]
pub fn display_width(text: &str) -> usize {
    text.chars().map(char_width).sum()
}

/// Cuts `text` to at most `max` columns, ending in `...` when shortened.
#[must_use]
pub fn truncate_to_width(text: &str, max: usize) -> String {
    if display_width(text) <= max {
        return text.to_string();
    }

    let budget = max.saturating_sub(3);
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = char_width(ch);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push_str("...");
    out
}

/// Pads `text` with spaces to `width` columns.
#[must_use]
pub fn pad_right(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(display_width(text));
    format!("{text}{}", " ".repeat(pad))
}

/// Centers `text` in `width` columns, left padding taking the odd column.
#[must_use]
pub fn center(text: &str, width: usize) -> String {
    let len = display_width(text);
    let total = width.saturating_sub(len);
    let left = total - total / 2;
    format!("{}{text}{}", " ".repeat(left), " ".repeat(total / 2))
}

/// Clips byte `ranges` to the first `limit` bytes, dropping ranges that
/// start past it.
///
/// `limit` must be a char boundary of the text the ranges were computed on,
/// e.g. the kept prefix of a name shortened by [`truncate_to_width`].
#[must_use]
pub fn clip_ranges(ranges: &[(usize, usize)], limit: usize) -> Vec<(usize, usize)> {
    ranges
        .iter()
        .filter(|&&(start, _)| start < limit)
        .map(|&(start, end)| (start, end.min(limit)))
        .collect()
}

/// Appends `text` with the byte `ranges` drawn in the match highlight colors.
///
/// Ranges must be sorted, non-overlapping and on char boundaries, as
/// produced by [`match_ranges`](crate::engine::filter::match_ranges).
/// `restore` is re-emitted after each highlight to continue the surrounding
/// style.
pub fn push_highlighted(out: &mut String, text: &str, ranges: &[(usize, usize)], theme: &Theme, restore: &str) {
    let mut pos = 0;
    for &(start, end) in ranges {
        let (Some(before), Some(matched)) = (text.get(pos..start), text.get(start..end)) else {
            break;
        };
        out.push_str(before);
        out.push_str(&Theme::fg(&theme.colors.match_highlight_fg));
        out.push_str(&Theme::bg(&theme.colors.match_highlight_bg));
        out.push_str(matched);
        out.push_str(Theme::reset());
        out.push_str(restore);
        pos = end;
    }
    out.push_str(text.get(pos..).unwrap_or_default());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clip_ranges_cuts_at_limit() {
        let ranges = [(0, 3), (5, 12), (14, 20)];
        assert_eq!(clip_ranges(&ranges, 8), vec![(0, 3), (5, 8)]);
        assert_eq!(clip_ranges(&ranges, 30), ranges.to_vec());
        assert!(clip_ranges(&ranges, 0).is_empty());
    }

    #[test]
    fn thousands_separators() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1_000), "1,000");
        assert_eq!(format_number(78_400), "78,400");
        assert_eq!(format_number(1_234_567), "1,234,567");
    }

    #[test]
    fn hangul_is_double_width() {
        assert_eq!(display_width("위그"), 4);
        assert_eq!(display_width("wig 위그"), 8);
        assert_eq!(pad_right("위그", 6), "위그  ");
    }

    #[test]
    fn truncation_respects_columns() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("원신 라이덴 쇼군", 10), "원신 라...");
        assert!(display_width(&truncate_to_width("원신 라이덴 쇼군", 10)) <= 10);
    }

    #[test]
    fn highlight_keeps_text() {
        let theme = Theme::default();
        let mut out = String::new();
        push_highlighted(&mut out, "원신 라이덴", &[(7, 16)], &theme, "");
        assert!(out.starts_with("원신 "));
        assert!(out.contains("라이덴"));
        assert!(out.ends_with(Theme::reset()));
    }
}
