//! Window helpers and probe overlay shared by the viewer binaries.

use std::io::Write;
use std::iter::zip;
use std::time::Instant;

use show_image::error::{CreateWindowError, SetImageError};
use show_image::{create_window, ImageInfo, ImageView, WindowOptions, WindowProxy};

use crate::device::Resolution;

/// Pixel formats the viewers display.
pub enum Format {
    Mono,
    Bgr,
    Bgra,
}

/// Creates a window of the given size.
pub fn window(name: &str, size: &Resolution) -> Result<WindowProxy, CreateWindowError> {
    create_window(
        name,
        WindowOptions {
            size: Some(size.to_array()),
            ..Default::default()
        },
    )
}

/// Shows `data` in `window`.
pub fn update(
    window: &WindowProxy,
    resolution: &Resolution,
    data: &[u8],
    format: Format,
) -> Result<(), SetImageError> {
    let (w, h) = resolution.to_tuple();
    let info = match format {
        Format::Mono => ImageInfo::mono8(w, h),
        Format::Bgr => ImageInfo::bgr8(w, h),
        Format::Bgra => ImageInfo::bgra8(w, h),
    };
    let image = ImageView::new(info, data);
    window.set_image("image", image)
}

/// Expands a grayscale image into BGRA so markers can be drawn in color.
pub fn mono_to_bgra(mono: &[u8], out: &mut [u8]) {
    for (oi, mi) in zip(out.chunks_exact_mut(4), mono) {
        oi[0] = *mi;
        oi[1] = *mi;
        oi[2] = *mi;
        oi[3] = 255;
    }
}

/// Draws a circle outline of `radius` around `center` into the pixel buffer.
/// `color` holds one pixel in the buffer's own layout; its length is the
/// bytes per pixel. Parts of the circle outside the image are clipped.
pub fn draw_circle(
    image: &mut [u8],
    resolution: &Resolution,
    center: (i64, i64),
    radius: i64,
    color: &[u8],
) {
    let bpp = color.len();
    let (w, h) = resolution.to_tuple();
    let mut put = |x: i64, y: i64| {
        if x < 0 || y < 0 || x >= w as i64 || y >= h as i64 {
            return;
        }
        let i = (y as usize * w as usize + x as usize) * bpp;
        image[i..i + bpp].copy_from_slice(color);
    };

    // midpoint circle, one point per octant
    let (cx, cy) = center;
    let mut x = radius;
    let mut y = 0i64;
    let mut err = 1 - radius;
    while x >= y {
        put(cx + x, cy + y);
        put(cx + y, cy + x);
        put(cx - y, cy + x);
        put(cx - x, cy + y);
        put(cx - x, cy - y);
        put(cx - y, cy - x);
        put(cx + y, cy - x);
        put(cx + x, cy - y);
        y += 1;
        if err < 0 {
            err += 2 * y + 1;
        } else {
            x -= 1;
            err += 2 * (y - x) + 1;
        }
    }
}

/// A counter to be used in the main loop to get fps and frame count info.
/// The status line is printed every `info_interval`th tick.
pub struct Counter {
    count: u64,
    now: Instant,
    info_interval: u64,
}
impl Counter {
    pub fn new(info_interval: u64) -> Self {
        Self {
            count: 0,
            now: Instant::now(),
            info_interval,
        }
    }

    pub fn tick(&mut self) {
        self.count += 1;
        if self.count % self.info_interval == 0 {
            let elapsed = self.now.elapsed().as_secs_f64();
            self.now = Instant::now();
            print!(
                "  fps: {:.1}  frame: {}\r",
                self.info_interval as f64 / elapsed,
                self.count
            );
            std::io::stdout().flush().unwrap();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mono_expands_to_bgra() {
        let mono = [0u8, 128, 255];
        let mut out = [0u8; 12];
        mono_to_bgra(&mono, &mut out);
        assert_eq!(out, [0, 0, 0, 255, 128, 128, 128, 255, 255, 255, 255, 255]);
    }

    #[test]
    fn circle_stays_inside_the_image() {
        let res = Resolution::new(8, 8);
        let mut image = vec![0u8; 64];
        // center outside, most of the circle clipped
        draw_circle(&mut image, &res, (-2, -2), 3, &[255]);
        // nothing panicked and at least one visible pixel was set
        assert!(image.iter().any(|p| *p == 255));
    }

    #[test]
    fn circle_marks_the_radius() {
        let res = Resolution::new(9, 9);
        let mut image = vec![0u8; 81];
        draw_circle(&mut image, &res, (4, 4), 3, &[7]);
        // cardinal points of the outline
        assert_eq!(image[4 * 9 + 7], 7);
        assert_eq!(image[4 * 9 + 1], 7);
        assert_eq!(image[7 * 9 + 4], 7);
        assert_eq!(image[1 * 9 + 4], 7);
        // center stays untouched
        assert_eq!(image[4 * 9 + 4], 0);
    }
}
