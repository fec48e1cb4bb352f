//! Product list renderer.
//!
//! Products are drawn one per line with fixed columns so prices line up:
//!
//! ```text
//!   #1  BEST NEW  원신 라이덴 쇼군 코스튬       코스튬      -20%  127,200원  159,000원
//! ```
//!
//! The name column takes whatever width is left after the fixed columns and
//! carries search match highlighting.

use crate::ui::helpers::{self, display_width, pad_right, truncate_to_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ProductCard;

const ID_WIDTH: usize = 5;
const BADGE_WIDTH: usize = 10;
const CATEGORY_WIDTH: usize = 12;
const PRICE_WIDTH: usize = 30;
const MIN_NAME_WIDTH: usize = 16;

/// Renders a bold section title followed by a rule.
pub fn render_section_title(out: &mut String, title: &str, theme: &Theme, cols: usize) {
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.accent));
    out.push(' ');
    out.push_str(title);
    out.push_str(Theme::reset());
    out.push('\n');

    out.push_str(&Theme::fg(&theme.colors.border));
    out.push_str(&"─".repeat(cols));
    out.push_str(Theme::reset());
    out.push('\n');
}

/// Renders every card in `products`, one per line.
pub fn render_product_rows(out: &mut String, products: &[ProductCard], theme: &Theme, cols: usize) {
    let name_width = cols
        .saturating_sub(ID_WIDTH + BADGE_WIDTH + CATEGORY_WIDTH + PRICE_WIDTH)
        .max(MIN_NAME_WIDTH);

    for card in products {
        render_product_row(out, card, theme, name_width);
    }
}

fn render_product_row(out: &mut String, card: &ProductCard, theme: &Theme, name_width: usize) {
    let normal = Theme::fg(&theme.colors.text_normal);

    out.push_str(&Theme::fg(&theme.colors.text_dim));
    out.push_str(&pad_right(&format!("  #{}", card.id), ID_WIDTH));
    out.push_str(Theme::reset());

    render_badges(out, card, theme);

    let name = truncate_to_width(&card.name, name_width.saturating_sub(1));
    // Shortened names keep a prefix of the original followed by "...".
    let kept = if name.len() == card.name.len() {
        name.len()
    } else {
        name.len().saturating_sub(3)
    };
    let ranges = helpers::clip_ranges(&card.highlight_ranges, kept);
    out.push_str(&normal);
    helpers::push_highlighted(out, &name, &ranges, theme, &normal);
    out.push_str(&" ".repeat(name_width.saturating_sub(display_width(&name))));
    out.push_str(Theme::reset());

    out.push_str(&Theme::fg(&theme.colors.text_dim));
    out.push_str(&pad_right(
        &truncate_to_width(&card.category, CATEGORY_WIDTH - 1),
        CATEGORY_WIDTH,
    ));
    out.push_str(Theme::reset());

    render_price(out, card, theme);
    out.push('\n');
}

fn render_badges(out: &mut String, card: &ProductCard, theme: &Theme) {
    let mut width = 0;
    if card.is_best {
        out.push_str(Theme::bold());
        out.push_str(&Theme::fg(&theme.colors.badge_best_fg));
        out.push_str("BEST ");
        out.push_str(Theme::reset());
        width += 5;
    }
    if card.is_new {
        out.push_str(Theme::bold());
        out.push_str(&Theme::fg(&theme.colors.badge_new_fg));
        out.push_str("NEW ");
        out.push_str(Theme::reset());
        width += 4;
    }
    out.push_str(&" ".repeat(BADGE_WIDTH.saturating_sub(width)));
}

/// Effective price, plus discount rate and struck-through original when on
/// sale.
pub fn render_price(out: &mut String, card: &ProductCard, theme: &Theme) {
    if card.original_price.is_some() {
        out.push_str(Theme::bold());
        out.push_str(&Theme::fg(&theme.colors.sale_fg));
        out.push_str(&format!("-{}% ", card.discount_percent));
        out.push_str(Theme::reset());
    }

    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.price_fg));
    out.push_str(&card.price);
    out.push_str(Theme::reset());

    if let Some(original) = &card.original_price {
        out.push(' ');
        out.push_str(Theme::strike());
        out.push_str(&Theme::fg(&theme.colors.text_dim));
        out.push_str(original);
        out.push_str(Theme::reset());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(original_price: Option<&str>) -> ProductCard {
        ProductCard {
            id: "1".into(),
            name: "원신 라이덴 쇼군 코스튬".into(),
            category: "코스튬".into(),
            price: "127,200원".into(),
            original_price: original_price.map(String::from),
            discount_percent: if original_price.is_some() { 20 } else { 0 },
            is_new: true,
            is_best: true,
            highlight_ranges: vec![(0, 6)],
        }
    }

    #[test]
    fn sale_row_shows_discount_and_original() {
        let mut out = String::new();
        render_product_rows(&mut out, &[card(Some("159,000원"))], &Theme::default(), 100);
        assert!(out.contains("-20%"));
        assert!(out.contains("127,200원"));
        assert!(out.contains("159,000원"));
        assert!(out.contains("BEST"));
        assert!(out.contains("NEW"));
        assert_eq!(out.matches('\n').count(), 1);
    }

    #[test]
    fn regular_row_has_single_price() {
        let mut out = String::new();
        render_product_rows(&mut out, &[card(None)], &Theme::default(), 100);
        assert!(!out.contains('%'));
        assert_eq!(out.matches('원').count(), 2);
    }

    #[test]
    fn highlight_is_clipped_to_truncated_name() {
        let theme = Theme::default();
        let mut long = card(None);
        // "라이덴 쇼군" runs past the cut after "원신 라이덴 ".
        long.highlight_ranges = vec![(7, 23)];

        let mut out = String::new();
        render_product_rows(&mut out, &[long], &theme, 40);

        let highlighted = format!(
            "{}{}라이덴 {}",
            Theme::fg(&theme.colors.match_highlight_fg),
            Theme::bg(&theme.colors.match_highlight_bg),
            Theme::reset()
        );
        assert!(out.contains(&highlighted), "{out:?}");
        let tail = format!("{}{}...", Theme::reset(), Theme::fg(&theme.colors.text_normal));
        assert!(out.contains(&tail), "{out:?}");
    }
}
