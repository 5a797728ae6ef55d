// SPDX-License-Identifier: MPL-2.0
//! Window icon, rasterized at runtime from the embedded brand SVG.

use iced::window::{icon, Icon};
use resvg::usvg;

/// Edge length of the rasterized icon, in pixels.
pub const ICON_SIZE: u32 = 128;

const SVG_SOURCE: &str = include_str!("../assets/branding/teamdeck.svg");

/// Returns the window icon, or `None` (with a warning) if the SVG cannot be rendered.
pub fn load_window_icon() -> Option<Icon> {
    let Some(rgba) = render_rgba(ICON_SIZE) else {
        tracing::warn!("failed to render window icon");
        return None;
    };
    icon::from_rgba(rgba, ICON_SIZE, ICON_SIZE).ok()
}

/// Rasterizes the brand SVG into a square RGBA buffer of `size` pixels.
fn render_rgba(size: u32) -> Option<Vec<u8>> {
    let tree = usvg::Tree::from_data(SVG_SOURCE.as_bytes(), &usvg::Options::default()).ok()?;

    #[allow(clippy::cast_precision_loss)]
    let target = size as f32;
    let original = tree.size();
    let transform = tiny_skia::Transform::from_scale(
        target / original.width(),
        target / original.height(),
    );

    let mut pixmap = tiny_skia::Pixmap::new(size, size)?;
    resvg::render(&tree, transform, &mut pixmap.as_mut());
    Some(pixmap.take())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_square_rgba_buffer() {
        let rgba = render_rgba(32).expect("embedded svg renders");
        assert_eq!(rgba.len(), 32 * 32 * 4);
        assert!(rgba.iter().any(|&byte| byte != 0));
    }

    #[test]
    fn window_icon_loads() {
        assert!(load_window_icon().is_some());
    }
}
