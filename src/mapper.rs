//! Composing images across the two camera spaces from mapped point arrays.
//!
//! The device computes where each pixel of one camera lands in the other
//! camera's image (`DepthCamera::map_depth_to_color` and
//! `map_color_to_depth`). The routines here turn those point arrays into
//! display images and point probes.

use std::iter::zip;

use crate::device::Resolution;
use crate::frame::{normalize_sample, ColorFrame};

/// Position of a pixel projected into the other camera's image plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpacePoint {
    pub x: f32,
    pub y: f32,
}

impl SpacePoint {
    /// Marker for pixels the device cannot map (no depth reading, or outside
    /// the other sensor's field of view).
    pub const INVALID: SpacePoint = SpacePoint {
        x: f32::NEG_INFINITY,
        y: f32::NEG_INFINITY,
    };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn is_valid(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Rounds to the nearest pixel, or `None` when invalid or outside
    /// `resolution`.
    pub fn to_pixel(&self, resolution: &Resolution) -> Option<(u32, u32)> {
        if !self.is_valid() {
            return None;
        }
        let x = (self.x + 0.5).floor() as i64;
        let y = (self.y + 0.5).floor() as i64;
        let (w, h) = resolution.to_tuple();
        if x < 0 || x >= w as i64 || y < 0 || y >= h as i64 {
            return None;
        }
        Some((x as u32, y as u32))
    }
}

/// Gathers color pixels into the depth grid. `points` holds, for every depth
/// pixel, its position in the color image (see
/// `DepthCamera::map_depth_to_color`). `out` is a BGRA image with the depth
/// frame's dimensions; depth pixels without a valid mapping stay black.
pub fn color_into_depth_frame(points: &[SpacePoint], color: &ColorFrame, out: &mut [u8]) {
    let bpp = color.bytes_per_pixel as usize;
    // not every output pixel gets hit
    out.fill(0);
    for (i, point) in points.iter().enumerate() {
        let Some((cx, cy)) = point.to_pixel(&color.resolution) else {
            continue;
        };
        let src = (cy * color.resolution.width() + cx) as usize * bpp;
        let dst = i * bpp;
        out[dst..dst + bpp].copy_from_slice(&color.data[src..src + bpp]);
    }
}

/// Scatters normalized depth into the color grid. `points` holds, for every
/// depth pixel, its position in the color image; `out` is a grayscale image
/// with the color frame's dimensions. Color pixels no depth sample lands on
/// stay black, out-of-bounds projections are skipped.
pub fn depth_into_color_frame(
    points: &[SpacePoint],
    depth: &[u16],
    min_mm: u16,
    max_mm: u16,
    color_resolution: &Resolution,
    out: &mut [u8],
) {
    out.fill(0);
    for (point, d) in zip(points, depth) {
        let Some((cx, cy)) = point.to_pixel(color_resolution) else {
            continue;
        };
        out[(cy * color_resolution.width() + cx) as usize] = normalize_sample(*d, min_mm, max_mm);
    }
}

/// Looks up where the color pixel `(x, y)` samples the depth image. `points`
/// holds one entry per color pixel (see `DepthCamera::map_color_to_depth`).
/// Returns `None` when the pixel is outside the color frame, unmappable, or
/// projects outside the depth frame.
pub fn probe_color_to_depth(
    points: &[SpacePoint],
    x: u32,
    y: u32,
    color_resolution: &Resolution,
    depth_resolution: &Resolution,
) -> Option<(u32, u32)> {
    let (w, h) = color_resolution.to_tuple();
    if x >= w || y >= h {
        return None;
    }
    points
        .get((y * w + x) as usize)?
        .to_pixel(depth_resolution)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::Resolution;

    #[test]
    fn invalid_point_is_rejected() {
        let res = Resolution::new(10, 10);
        assert!(!SpacePoint::INVALID.is_valid());
        assert_eq!(SpacePoint::INVALID.to_pixel(&res), None);
        assert_eq!(SpacePoint::new(f32::NAN, 1.0).to_pixel(&res), None);
    }

    #[test]
    fn to_pixel_rounds_to_nearest() {
        let res = Resolution::new(10, 10);
        assert_eq!(SpacePoint::new(1.4, 2.6).to_pixel(&res), Some((1, 3)));
        assert_eq!(SpacePoint::new(1.5, 2.5).to_pixel(&res), Some((2, 3)));
        // rounding can push a coordinate past the last pixel
        assert_eq!(SpacePoint::new(9.4, 0.0).to_pixel(&res), Some((9, 0)));
        assert_eq!(SpacePoint::new(9.6, 0.0).to_pixel(&res), None);
        assert_eq!(SpacePoint::new(-0.4, 0.0).to_pixel(&res), Some((0, 0)));
        assert_eq!(SpacePoint::new(-0.6, 0.0).to_pixel(&res), None);
    }

    #[test]
    fn gather_color_into_depth_grid() {
        // 2x1 color frame: pixel 0 red, pixel 1 green (BGRA)
        let mut color = ColorFrame::new(Resolution::new(2, 1), 4);
        color.data.copy_from_slice(&[
            0, 0, 255, 255, // red
            0, 255, 0, 255, // green
        ]);

        // 2x1 depth grid: first depth pixel sees color pixel 1, second is unmappable
        let points = [SpacePoint::new(1.0, 0.0), SpacePoint::INVALID];
        let mut out = vec![0xaa; 8];
        color_into_depth_frame(&points, &color, &mut out);

        assert_eq!(&out[0..4], &[0, 255, 0, 255]);
        // unmappable pixel was cleared, not left at its previous value
        assert_eq!(&out[4..8], &[0, 0, 0, 0]);
    }

    #[test]
    fn scatter_depth_into_color_grid() {
        let color_res = Resolution::new(4, 1);
        let depth = [600u16, 3000, 1800];
        let points = [
            SpacePoint::new(0.0, 0.0),
            SpacePoint::new(2.0, 0.0),
            SpacePoint::INVALID,
        ];
        let mut out = vec![0xaa; 4];
        depth_into_color_frame(&points, &depth, 600, 3000, &color_res, &mut out);
        assert_eq!(out, [0, 0, 255, 0]);
    }

    #[test]
    fn scatter_skips_out_of_bounds_projections() {
        let color_res = Resolution::new(2, 2);
        let depth = [1000u16, 1000];
        let points = [SpacePoint::new(5.0, 0.0), SpacePoint::new(0.0, -3.0)];
        let mut out = vec![0u8; 4];
        depth_into_color_frame(&points, &depth, 600, 3000, &color_res, &mut out);
        assert_eq!(out, [0, 0, 0, 0]);
    }

    #[test]
    fn probe_maps_a_color_pixel() {
        let color_res = Resolution::new(2, 2);
        let depth_res = Resolution::new(8, 8);
        let points = [
            SpacePoint::new(0.2, 0.2),
            SpacePoint::INVALID,
            SpacePoint::new(7.6, 0.0),
            SpacePoint::new(3.0, 3.0),
        ];
        assert_eq!(
            probe_color_to_depth(&points, 0, 0, &color_res, &depth_res),
            Some((0, 0))
        );
        assert_eq!(
            probe_color_to_depth(&points, 1, 0, &color_res, &depth_res),
            None
        );
        // projects outside the depth frame after rounding
        assert_eq!(
            probe_color_to_depth(&points, 0, 1, &color_res, &depth_res),
            None
        );
        assert_eq!(
            probe_color_to_depth(&points, 1, 1, &color_res, &depth_res),
            Some((3, 3))
        );
        // click outside the color frame
        assert_eq!(
            probe_color_to_depth(&points, 2, 0, &color_res, &depth_res),
            None
        );
    }
}
