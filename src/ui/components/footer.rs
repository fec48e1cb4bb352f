//! Footer component renderer.

use crate::ui::helpers::{center, truncate_to_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the command hints centered and dimmed, truncated to `cols` so
/// narrow terminals do not wrap.
pub fn render_footer(out: &mut String, footer: &FooterInfo, theme: &Theme, cols: usize) {
    let help_text = truncate_to_width(&footer.keybindings, cols);

    out.push_str(&Theme::fg(&theme.colors.text_dim));
    out.push_str(&center(&help_text, cols));
    out.push_str(Theme::reset());
    out.push('\n');
}
