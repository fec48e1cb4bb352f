//! Hero banner renderer.

use crate::ui::helpers::center;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::BannerInfo;

/// Renders the current banner with position dots underneath.
///
/// # Layout
///
/// ```text
///
///              2024 겨울 신상 코스튬
///        인기 애니메이션 캐릭터 코스튬 최대 30% 할인
///                  [ 지금 쇼핑하기 ]
///                      ● ○ ○
///
/// ```
pub fn render_banner(out: &mut String, banner: &BannerInfo, theme: &Theme, cols: usize) {
    out.push('\n');

    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.accent));
    out.push_str(&center(&banner.title, cols));
    out.push_str(Theme::reset());
    out.push('\n');

    out.push_str(&Theme::fg(&theme.colors.text_normal));
    out.push_str(&center(&banner.subtitle, cols));
    out.push_str(Theme::reset());
    out.push('\n');

    out.push_str(&Theme::fg(&theme.colors.accent_alt));
    out.push_str(&center(&format!("[ {} ]", banner.cta), cols));
    out.push_str(Theme::reset());
    out.push('\n');

    let dots = (0..banner.total)
        .map(|i| if i == banner.position { "●" } else { "○" })
        .collect::<Vec<_>>()
        .join(" ");
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    out.push_str(&center(&dots, cols));
    out.push_str(Theme::reset());
    out.push('\n');

    out.push('\n');
}
