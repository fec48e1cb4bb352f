//! Cart page renderer.

use super::empty::render_empty_state;
use crate::ui::helpers::{display_width, pad_right, truncate_to_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::CartView;

const QTY_WIDTH: usize = 8;
const AMOUNT_WIDTH: usize = 14;

/// Renders the cart lines and the order summary.
///
/// # Layout
///
/// ```text
///   #13  해군 넥타이 세트                x2    9,000원     18,000원
/// ─────────────────────────────────────────────────────────────────
///                                    상품 금액            18,000원
///                                    배송비                3,000원
///                                    결제 금액            21,000원
///                         32,000원 추가 주문 시 무료배송
/// ```
pub fn render_cart(out: &mut String, cart: &CartView, theme: &Theme, cols: usize) {
    if let Some(empty) = &cart.empty_state {
        render_empty_state(out, empty, theme, cols);
        return;
    }

    let name_width = cols.saturating_sub(7 + QTY_WIDTH + 2 * AMOUNT_WIDTH).max(12);

    for line in &cart.lines {
        out.push_str(&Theme::fg(&theme.colors.text_dim));
        out.push_str(&pad_right(&format!("  #{}", line.id), 7));
        out.push_str(Theme::reset());

        out.push_str(&Theme::fg(&theme.colors.text_normal));
        out.push_str(&pad_right(
            &truncate_to_width(&line.name, name_width.saturating_sub(1)),
            name_width,
        ));
        out.push_str(&pad_right(&format!("x{}", line.quantity), QTY_WIDTH));
        out.push_str(&pad_left(&line.unit_price, AMOUNT_WIDTH));
        out.push_str(Theme::reset());

        out.push_str(Theme::bold());
        out.push_str(&Theme::fg(&theme.colors.price_fg));
        out.push_str(&pad_left(&line.line_total, AMOUNT_WIDTH));
        out.push_str(Theme::reset());
        out.push('\n');
    }

    out.push_str(&Theme::fg(&theme.colors.border));
    out.push_str(&"─".repeat(cols));
    out.push_str(Theme::reset());
    out.push('\n');

    render_summary_line(out, "상품 금액", &cart.subtotal, &theme.colors.text_normal, cols);
    if let Some(discount) = &cart.discount {
        render_summary_line(out, "할인 금액", discount, &theme.colors.sale_fg, cols);
    }
    render_summary_line(out, "배송비", &cart.shipping, &theme.colors.text_normal, cols);
    out.push_str(Theme::bold());
    render_summary_line(out, "결제 금액", &cart.total, &theme.colors.price_fg, cols);

    if let Some(hint) = &cart.free_shipping_hint {
        out.push_str(&Theme::fg(&theme.colors.accent_alt));
        out.push_str(&pad_left(hint, cols.saturating_sub(2)));
        out.push_str(Theme::reset());
        out.push('\n');
    }
}

fn render_summary_line(out: &mut String, label: &str, amount: &str, color: &str, cols: usize) {
    let label_col = cols.saturating_sub(2 * AMOUNT_WIDTH);
    out.push_str(&Theme::fg(color));
    out.push_str(&" ".repeat(label_col));
    out.push_str(&pad_right(label, AMOUNT_WIDTH));
    out.push_str(&pad_left(amount, AMOUNT_WIDTH));
    out.push_str(Theme::reset());
    out.push('\n');
}

fn pad_left(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(display_width(text));
    format!("{}{text}", " ".repeat(pad))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::viewmodel::{CartLineInfo, EmptyState};

    fn view() -> CartView {
        CartView {
            lines: vec![CartLineInfo {
                id: "13".into(),
                name: "해군 넥타이 세트".into(),
                quantity: 2,
                unit_price: "9,000원".into(),
                line_total: "18,000원".into(),
            }],
            subtotal: "18,000원".into(),
            discount: None,
            shipping: "3,000원".into(),
            total: "21,000원".into(),
            free_shipping_hint: Some("32,000원 추가 주문 시 무료배송".into()),
            empty_state: None,
        }
    }

    #[test]
    fn summary_lists_totals() {
        let mut out = String::new();
        render_cart(&mut out, &view(), &Theme::default(), 80);
        assert!(out.contains("x2"));
        assert!(out.contains("결제 금액"));
        assert!(out.contains("21,000원"));
        assert!(out.contains("무료배송"));
        assert!(!out.contains("할인 금액"));
    }

    #[test]
    fn empty_cart_shows_message_only() {
        let mut cart = view();
        cart.lines.clear();
        cart.empty_state = Some(EmptyState {
            message: "장바구니가 비어있습니다".into(),
            subtitle: String::new(),
        });
        let mut out = String::new();
        render_cart(&mut out, &cart, &Theme::default(), 80);
        assert!(out.contains("장바구니가 비어있습니다"));
        assert!(!out.contains("결제 금액"));
    }
}
