//! Icons and the bitmaps rendered from them.
//!
//! An [`Icon`] is a size-independent source, either vector data or a raster image.
//! Requesting a [`Bitmap`] at a given [`Size`] rasterizes or rescales it.

use std::{borrow::Cow, fmt, path::Path, sync::Arc};

use image::{imageops::FilterType, ImageFormat, RgbaImage};
use resvg::{tiny_skia, usvg};

/// A requested or produced pixel size.
///
/// Dimensions are signed so that invalid requests coming from the view layer can be
/// represented and rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub const fn square(side: i32) -> Self {
        Self::new(side, side)
    }

    /// Both dimensions are strictly positive.
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Bytes of an RGBA8 buffer of this size, `None` for invalid sizes or on overflow.
    pub fn rgba_bytes(&self) -> Option<u64> {
        if !self.is_valid() {
            return None;
        }
        (self.width as u64)
            .checked_mul(self.height as u64)?
            .checked_mul(4)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("invalid size {0}")]
    InvalidSize(Size),
    #[error("failed to parse svg: {0}")]
    Svg(#[from] usvg::Error),
    #[error("failed to allocate a {0} pixmap")]
    Allocation(Size),
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Largest pixel buffer an icon may be rendered into.
pub const MAX_BITMAP_BYTES: u64 = 256 * 1024 * 1024;

/// A rendered icon, RGBA8 with straight alpha.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap(RgbaImage);

impl Bitmap {
    pub fn width(&self) -> u32 {
        self.0.width()
    }

    pub fn height(&self) -> u32 {
        self.0.height()
    }

    pub fn size(&self) -> Size {
        Size::new(self.0.width() as i32, self.0.height() as i32)
    }

    pub fn as_image(&self) -> &RgbaImage {
        &self.0
    }

    pub fn into_image(self) -> RgbaImage {
        self.0
    }

    /// Every pixel is fully transparent.
    pub fn is_blank(&self) -> bool {
        self.0.pixels().all(|p| p[3] == 0)
    }

    pub fn handle(&self) -> iced::widget::image::Handle {
        iced::widget::image::Handle::from_rgba(self.width(), self.height(), self.0.to_vec())
    }

    pub fn window_icon(&self) -> Result<iced::window::Icon, iced::window::icon::Error> {
        Ok(iced::window::icon::from_rgba(
            self.0.to_vec(),
            self.width(),
            self.height(),
        )?)
    }

    pub fn save_png(&self, path: &Path) -> Result<(), RenderError> {
        self.0.save_with_format(path, ImageFormat::Png)?;
        Ok(())
    }
}

impl From<RgbaImage> for Bitmap {
    fn from(image: RgbaImage) -> Self {
        Self(image)
    }
}

/// A size-independent image source.
#[derive(Debug, Clone)]
pub enum Icon {
    Svg(Cow<'static, [u8]>),
    Raster(Arc<RgbaImage>),
}

impl Icon {
    pub fn from_svg(data: &'static [u8]) -> Self {
        Self::Svg(Cow::Borrowed(data))
    }

    pub fn from_rgba(image: RgbaImage) -> Self {
        Self::Raster(Arc::new(image))
    }

    /// Render the icon filling exactly `size`.
    pub fn pixmap(&self, size: Size) -> Result<Bitmap, RenderError> {
        if !size.is_valid() {
            return Err(RenderError::InvalidSize(size));
        }
        if !size
            .rgba_bytes()
            .is_some_and(|bytes| bytes <= MAX_BITMAP_BYTES)
        {
            return Err(RenderError::Allocation(size));
        }
        let (width, height) = (size.width as u32, size.height as u32);
        match self {
            Self::Svg(data) => rasterize_svg(data, width, height),
            Self::Raster(raster) => {
                let source: &RgbaImage = raster;
                if source.dimensions() == (width, height) {
                    Ok(Bitmap(source.clone()))
                } else {
                    Ok(Bitmap(image::imageops::resize(
                        source,
                        width,
                        height,
                        FilterType::Triangle,
                    )))
                }
            }
        }
    }
}

fn rasterize_svg(data: &[u8], width: u32, height: u32) -> Result<Bitmap, RenderError> {
    let size = Size::new(width as i32, height as i32);
    let tree = usvg::Tree::from_data(data, &usvg::Options::default())?;

    let source = tree.size();
    let transform = tiny_skia::Transform::from_scale(
        width as f32 / source.width(),
        height as f32 / source.height(),
    );

    let mut pixmap = tiny_skia::Pixmap::new(width, height).ok_or(RenderError::Allocation(size))?;
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    // tiny-skia works with premultiplied alpha.
    let mut rgba = Vec::with_capacity(pixmap.data().len());
    for pixel in pixmap.pixels() {
        let c = pixel.demultiply();
        rgba.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }

    RgbaImage::from_raw(width, height, rgba)
        .map(Bitmap)
        .ok_or(RenderError::Allocation(size))
}
