//! Logo standardization: decode, fit inside the inner box, pad onto a
//! transparent square canvas, encode as PNG.

use std::io::Cursor;

use image::codecs::png::PngEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, ImageBuffer, Rgba};

use crate::types::{LogoError, LogoResult};

/// SVG sources carry no pixel density; renderers assume 72 DPI.
const SVG_BASE_DPI: f32 = 72.0;

/// Geometry and rendering options for [`standardize`].
#[derive(Debug, Clone, Copy)]
pub struct StandardizeOptions {
    /// Edge length of the output canvas, in pixels.
    pub target_size: u32,
    /// Fraction of the canvas reserved as border around the inner box.
    pub padding_percent: u32,
    /// Oversampling density for vector sources, in DPI.
    pub vector_density: f32,
}

impl Default for StandardizeOptions {
    fn default() -> Self {
        Self {
            target_size: 512,
            padding_percent: 18,
            vector_density: 600.0,
        }
    }
}

impl StandardizeOptions {
    /// Largest square an image may occupy after resizing.
    pub fn inner_size(&self) -> u32 {
        let inner = self.target_size as f64 * (1.0 - self.padding_percent as f64 / 100.0);
        inner.round() as u32
    }
}

/// Turn arbitrary logo bytes into a `target_size` × `target_size` RGBA PNG:
/// the decoded image is scaled to fit entirely inside the inner box without
/// upscaling or cropping, then composited centered on a fully transparent
/// canvas.
pub fn standardize(input: &[u8], opts: &StandardizeOptions) -> LogoResult<Vec<u8>> {
    let img = decode(input, opts)?;

    let inner = opts.inner_size();
    let (width, height) = img.dimensions();

    // Fit inside the inner box; sources already within it pass through.
    let resized = if width > inner || height > inner {
        img.resize(inner, inner, FilterType::Lanczos3)
    } else {
        img
    };

    let target = opts.target_size;
    let (w, h) = resized.dimensions();
    let left = (target - w) / 2;
    let top = (target - h) / 2;

    let mut canvas: ImageBuffer<Rgba<u8>, Vec<u8>> = ImageBuffer::new(target, target);
    image::imageops::overlay(&mut canvas, &resized.to_rgba8(), left as i64, top as i64);

    let mut buf = Vec::new();
    let encoder = PngEncoder::new(Cursor::new(&mut buf));
    canvas
        .write_with_encoder(encoder)
        .map_err(|e| LogoError::Encode(e.to_string()))?;
    Ok(buf)
}

fn decode(input: &[u8], opts: &StandardizeOptions) -> LogoResult<DynamicImage> {
    if looks_like_svg(input) {
        return render_svg(input, opts.vector_density);
    }
    image::load_from_memory(input).map_err(|e| LogoError::Decode(e.to_string()))
}

/// Cheap content sniff: SVG sources are XML text with an `<svg` root element.
fn looks_like_svg(input: &[u8]) -> bool {
    let head = &input[..input.len().min(1024)];
    match std::str::from_utf8(head) {
        Ok(text) => text.contains("<svg"),
        Err(_) => false,
    }
}

/// Rasterize an SVG at `density` DPI so downscaling into the inner box keeps
/// edges sharp.
fn render_svg(data: &[u8], density: f32) -> LogoResult<DynamicImage> {
    use usvg::{fontdb, TreeParsing, TreePostProc};

    let opt = usvg::Options::default();
    let mut tree = usvg::Tree::from_data(data, &opt)
        .map_err(|e| LogoError::Decode(format!("invalid svg: {e}")))?;

    // resvg cannot render text nodes as is; convert them to paths first.
    let mut fontdb = fontdb::Database::new();
    fontdb.load_system_fonts();
    tree.postprocess(
        usvg::PostProcessingSteps {
            convert_text_into_paths: true,
        },
        &fontdb,
    );

    let scale = density / SVG_BASE_DPI;
    let width = (tree.size.width() * scale).round().max(1.0) as u32;
    let height = (tree.size.height() * scale).round().max(1.0) as u32;

    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| LogoError::Decode(format!("svg raster too large: {width}x{height}")))?;
    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );

    let png = pixmap
        .encode_png()
        .map_err(|e| LogoError::Decode(format!("svg raster encode: {e}")))?;
    image::load_from_memory(&png).map_err(|e| LogoError::Decode(e.to_string()))
}
