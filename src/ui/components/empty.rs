//! Empty state component renderer.
//!
//! Shown instead of a list when there is nothing to display: no matching
//! products, an empty search, an empty cart or an unknown product.

use crate::ui::helpers::center;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders a centered two-line message with a blank line above and below.
///
/// # Layout
///
/// ```text
///
///              해당 조건의 상품이 없습니다
///                 clear: 필터 초기화
///
/// ```
pub fn render_empty_state(out: &mut String, empty: &EmptyState, theme: &Theme, cols: usize) {
    out.push('\n');

    out.push_str(&Theme::fg(&theme.colors.empty_state_fg));
    out.push_str(Theme::bold());
    out.push_str(&center(&empty.message, cols));
    out.push_str(Theme::reset());
    out.push('\n');

    out.push_str(Theme::dim());
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    out.push_str(&center(&empty.subtitle, cols));
    out.push_str(Theme::reset());
    out.push('\n');

    out.push('\n');
}
