use raylib::prelude::*;
use crate::cloud::{CloudSize, Viewport};
use crate::constants::*;

/// Scale a texture to fit inside `bounds` keeping its aspect ratio, centered.
pub fn contain(tex_width: f32, tex_height: f32, bounds: Rectangle) -> Rectangle {
    if tex_width <= 0.0 || tex_height <= 0.0 {
        return Rectangle::new(bounds.x, bounds.y, 0.0, 0.0);
    }

    let scale = (bounds.width / tex_width).min(bounds.height / tex_height);
    let width = tex_width * scale;
    let height = tex_height * scale;

    Rectangle::new(
        bounds.x + (bounds.width - width) * 0.5,
        bounds.y + (bounds.height - height) * 0.5,
        width,
        height,
    )
}

/// Convert a cloud's bottom/left offsets into a top-left screen rectangle.
pub fn cloud_rect(viewport: Viewport, size: CloudSize, vertical: f32, horizontal: f32) -> Rectangle {
    Rectangle::new(
        horizontal,
        viewport.height - vertical - size.height,
        size.width,
        size.height,
    )
}

/// The parachute hangs at the bottom of a column spanning the top 60% of the
/// screen and swings around that column's center.
pub fn parachute_pivot(viewport: Viewport) -> Vector2 {
    Vector2::new(viewport.width * 0.5, viewport.height * PARACHUTE_BOTTOM * 0.5)
}

/// Unrotated parachute box.
pub fn parachute_rect(viewport: Viewport) -> Rectangle {
    Rectangle::new(
        (viewport.width - PARACHUTE_SIZE) * 0.5,
        viewport.height * PARACHUTE_BOTTOM - PARACHUTE_SIZE,
        PARACHUTE_SIZE,
        PARACHUTE_SIZE,
    )
}
