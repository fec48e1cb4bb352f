//! Header component renderer.

use crate::ui::helpers::{display_width, pad_right};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the top bar: shop title on the left, cart badge on the right,
/// then the current location on its own dimmed line.
///
/// # Layout
///
/// ```text
///  HELLOW SHOP                                    🛒 3
///  /products?category=wig
/// ```
pub fn render_header(out: &mut String, header: &HeaderInfo, theme: &Theme, cols: usize) {
    let badge = format!("🛒 {} ", header.cart_count);
    let title = format!(" {}", header.title);
    let gap = cols.saturating_sub(display_width(&title) + display_width(&badge));

    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        out.push_str(&Theme::bg(bg));
    }
    out.push_str(&title);
    out.push_str(&" ".repeat(gap));
    out.push_str(&badge);
    out.push_str(Theme::reset());
    out.push('\n');

    out.push_str(&Theme::fg(&theme.colors.text_dim));
    out.push_str(&pad_right(&format!(" {}", header.location), cols));
    out.push_str(Theme::reset());
    out.push('\n');
}
