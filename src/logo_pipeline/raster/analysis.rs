//! Pure alpha-channel analysis over RGBA buffers.
//!
//! Everything here treats a pixel as "content" iff its alpha channel is
//! non-zero. None of these functions mutate the image or touch I/O.

use image::RgbaImage;

/// Bounding box of all content pixels. `right` and `bottom` are exclusive,
/// so `right - left` is the box width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlphaBounds {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl AlphaBounds {
    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }
}

/// Counts of fully-transparent rows and columns at the image edges,
/// as reported by the `check_logo` binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlphaMargins {
    pub top_empty: u32,
    pub bottom_empty: u32,
    pub left_empty: u32,
}

fn row_has_content(image: &RgbaImage, y: u32) -> bool {
    (0..image.width()).any(|x| image.get_pixel(x, y)[3] > 0)
}

fn column_has_content(image: &RgbaImage, x: u32) -> bool {
    (0..image.height()).any(|y| image.get_pixel(x, y)[3] > 0)
}

/// Bounding box of all pixels with alpha > 0, or `None` for a fully
/// transparent image.
pub fn alpha_bbox(image: &RgbaImage) -> Option<AlphaBounds> {
    let mut bounds: Option<AlphaBounds> = None;

    for (x, y, pixel) in image.enumerate_pixels() {
        if pixel[3] == 0 {
            continue;
        }
        bounds = Some(match bounds {
            None => AlphaBounds {
                left: x,
                top: y,
                right: x + 1,
                bottom: y + 1,
            },
            Some(b) => AlphaBounds {
                left: b.left.min(x),
                top: b.top.min(y),
                right: b.right.max(x + 1),
                bottom: b.bottom.max(y + 1),
            },
        });
    }

    bounds
}

/// Per-row content flags: `true` for every row containing at least one
/// pixel with alpha > 0.
pub fn horizontal_projection(image: &RgbaImage) -> Vec<bool> {
    (0..image.height())
        .map(|y| row_has_content(image, y))
        .collect()
}

/// Counts consecutive empty rows from the top and bottom and empty columns
/// from the left. Each scan stops at the first row or column with content;
/// on a fully transparent image every count equals the full extent.
pub fn alpha_margins(image: &RgbaImage) -> AlphaMargins {
    let width = image.width();
    let height = image.height();

    let mut top_empty = 0;
    for y in 0..height {
        if row_has_content(image, y) {
            break;
        }
        top_empty += 1;
    }

    let mut bottom_empty = 0;
    for y in (0..height).rev() {
        if row_has_content(image, y) {
            break;
        }
        bottom_empty += 1;
    }

    let mut left_empty = 0;
    for x in 0..width {
        if column_has_content(image, x) {
            break;
        }
        left_empty += 1;
    }

    AlphaMargins {
        top_empty,
        bottom_empty,
        left_empty,
    }
}
