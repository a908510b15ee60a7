use crate::domain::model::ResizeFilter;
use crate::utils::error::Result;
use image::ImageFormat;
use std::io::Cursor;
use std::path::Path;

/// Decodes `source`, force-fits it to a `size`×`size` square and returns the PNG bytes.
///
/// Aspect ratio is not preserved. The decoded image lives only for the duration of
/// this call, so nothing is held open between sizes.
pub fn resize_to_png(source: &Path, size: u32, filter: ResizeFilter) -> Result<Vec<u8>> {
    let img = image::open(source)?;
    tracing::debug!(
        "Decoded {} ({}x{}), resizing to {}x{} with {}",
        source.display(),
        img.width(),
        img.height(),
        size,
        size,
        filter
    );

    let resized = img.resize_exact(size, size, filter.filter_type());

    let mut buffer = Vec::new();
    resized.write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)?;
    Ok(buffer)
}
