use crate::utils::error::Result;
use image::{ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;

pub const PLACEHOLDER_BLUE: Rgba<u8> = Rgba([0x42, 0x85, 0xf4, 255]);
pub const PLACEHOLDER_WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Draws a stand-in icon: a blue square with a white open-book glyph.
pub fn draw_placeholder(size: u32) -> RgbaImage {
    let page_start = size / 4;
    let page_end = size - size / 4;
    let spine_width = (size / 16).max(1);
    let spine_start = size / 2 - spine_width / 2;
    let spine_end = spine_start + spine_width;

    RgbaImage::from_fn(size, size, |x, y| {
        let on_pages = (page_start..page_end).contains(&x) && (page_start..page_end).contains(&y);
        let on_spine = (spine_start..spine_end).contains(&x);

        if on_pages && !on_spine {
            PLACEHOLDER_WHITE
        } else {
            PLACEHOLDER_BLUE
        }
    })
}

pub fn placeholder_png(size: u32) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    draw_placeholder(size).write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)?;
    Ok(buffer)
}
