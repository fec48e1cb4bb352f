//! Product detail renderer.

use super::table::{render_price, render_product_rows, render_section_title};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DetailView;

/// Renders one product: name, badges, price block, tags, the quantity
/// stepper with its line total, then related products.
pub fn render_detail(out: &mut String, detail: &DetailView, theme: &Theme, cols: usize) {
    let product = &detail.product;

    out.push('\n');
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    out.push_str(&format!(" {}", product.category));
    out.push_str(Theme::reset());
    if product.is_best {
        out.push_str(&Theme::fg(&theme.colors.badge_best_fg));
        out.push_str("  BEST");
        out.push_str(Theme::reset());
    }
    if product.is_new {
        out.push_str(&Theme::fg(&theme.colors.badge_new_fg));
        out.push_str("  NEW");
        out.push_str(Theme::reset());
    }
    out.push('\n');

    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.text_normal));
    out.push_str(&format!(" {}", product.name));
    out.push_str(Theme::reset());
    out.push('\n');

    out.push(' ');
    render_price(out, product, theme);
    out.push_str("\n\n");

    if !detail.tags.is_empty() {
        out.push(' ');
        for tag in &detail.tags {
            out.push_str(&Theme::fg(&theme.colors.chip_fg));
            out.push_str(&Theme::bg(&theme.colors.chip_bg));
            out.push_str(&format!(" #{tag} "));
            out.push_str(Theme::reset());
            out.push(' ');
        }
        out.push('\n');
    }

    out.push_str(&Theme::fg(&theme.colors.text_normal));
    out.push_str(&format!(" 수량  [-] {} [+]", detail.quantity));
    out.push_str(Theme::reset());
    out.push_str("    ");
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.price_fg));
    out.push_str(&format!("총 {}", detail.line_total));
    out.push_str(Theme::reset());
    out.push_str("\n\n");

    if !detail.related.is_empty() {
        render_section_title(out, "관련 상품", theme, cols);
        render_product_rows(out, &detail.related, theme, cols);
    }
}
