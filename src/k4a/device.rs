//! Opening the physical device and reading its streams.

use std::ffi::CStr;
use std::iter::zip;

use k4a_sys as sys;
use sys::k4a_result_t_K4A_RESULT_SUCCEEDED as OK;

use crate::device::{DepthCamera, Resolution, SensorInfo};
use crate::error::{Error, Result};
use crate::frame::{depth_from_le_bytes, FrameReady, FrameSet};
use crate::mapper::SpacePoint;

use super::depth_mode_range;

const DEPTH_MODE: sys::k4a_depth_mode_t = sys::k4a_depth_mode_t_K4A_DEPTH_MODE_NFOV_UNBINNED;
const COLOR_RESOLUTION: sys::k4a_color_resolution_t =
    sys::k4a_color_resolution_t_K4A_COLOR_RESOLUTION_720P;

/// The main interface to the camera.
pub struct K4aCamera {
    handle: sys::k4a_device_t,
    calibration: sys::k4a_calibration_t,
    info: SensorInfo,
}

fn check(call: &'static str, status: sys::k4a_result_t) -> Result<()> {
    if status == OK {
        Ok(())
    } else {
        Err(Error::Sdk {
            call,
            status: status as i32,
        })
    }
}

impl K4aCamera {
    /// Opens the default device and starts the color and depth streams
    /// (BGRA32 720p color, NFOV unbinned depth, 30 fps).
    pub fn open_default() -> Result<Self> {
        unsafe {
            if sys::k4a_device_get_installed_count() == 0 {
                return Err(Error::NoDevice);
            }

            let mut handle: sys::k4a_device_t = std::ptr::null_mut();
            check(
                "k4a_device_open",
                sys::k4a_device_open(sys::K4A_DEVICE_DEFAULT, &mut handle),
            )?;

            let config = sys::k4a_device_configuration_t {
                color_format: sys::k4a_image_format_t_K4A_IMAGE_FORMAT_COLOR_BGRA32,
                color_resolution: COLOR_RESOLUTION,
                depth_mode: DEPTH_MODE,
                camera_fps: sys::k4a_fps_t_K4A_FRAMES_PER_SECOND_30,
                ..Default::default()
            };
            if let Err(err) = check(
                "k4a_device_start_cameras",
                sys::k4a_device_start_cameras(handle, &config),
            ) {
                sys::k4a_device_close(handle);
                return Err(err);
            }

            let mut calibration = sys::k4a_calibration_t::default();
            if let Err(err) = check(
                "k4a_device_get_calibration",
                sys::k4a_device_get_calibration(handle, DEPTH_MODE, COLOR_RESOLUTION, &mut calibration),
            ) {
                sys::k4a_device_stop_cameras(handle);
                sys::k4a_device_close(handle);
                return Err(err);
            }

            let (min_depth_mm, max_depth_mm) = depth_mode_range(DEPTH_MODE);
            let info = SensorInfo {
                color: Resolution::new(
                    calibration.color_camera_calibration.resolution_width as u32,
                    calibration.color_camera_calibration.resolution_height as u32,
                ),
                // BGRA32
                color_bytes_per_pixel: 4,
                depth: Resolution::new(
                    calibration.depth_camera_calibration.resolution_width as u32,
                    calibration.depth_camera_calibration.resolution_height as u32,
                ),
                min_depth_mm,
                max_depth_mm,
                serial: serial_number(handle),
            };
            tracing::info!(
                serial = %info.serial,
                "device opened, color {}x{}, depth {}x{}, range {} mm to {} mm",
                info.color.width(),
                info.color.height(),
                info.depth.width(),
                info.depth.height(),
                info.min_depth_mm,
                info.max_depth_mm,
            );

            Ok(Self {
                handle,
                calibration,
                info,
            })
        }
    }

    fn check_map_buffers(&self, depth_len: usize, out_len: usize, expected_out: usize) -> Result<()> {
        let expected_depth = self.info.depth.to_pixel_count();
        if depth_len != expected_depth {
            return Err(Error::BufferSize {
                expected: expected_depth,
                actual: depth_len,
            });
        }
        if out_len != expected_out {
            return Err(Error::BufferSize {
                expected: expected_out,
                actual: out_len,
            });
        }
        Ok(())
    }
}

impl DepthCamera for K4aCamera {
    fn info(&self) -> &SensorInfo {
        &self.info
    }

    fn acquire_latest(&mut self, frames: &mut FrameSet) -> Result<FrameReady> {
        frames.color.check_len()?;
        frames.depth.check_len()?;

        unsafe {
            let mut capture: sys::k4a_capture_t = std::ptr::null_mut();
            match sys::k4a_device_get_capture(self.handle, &mut capture, 0) {
                s if s == sys::k4a_wait_result_t_K4A_WAIT_RESULT_SUCCEEDED => {}
                s if s == sys::k4a_wait_result_t_K4A_WAIT_RESULT_TIMEOUT => {
                    return Ok(FrameReady::none());
                }
                _ => return Err(Error::Disconnected),
            }

            let mut ready = FrameReady::none();

            // either image can be missing from a capture while the streams
            // are still starting up
            let color_image = sys::k4a_capture_get_color_image(capture);
            if !color_image.is_null() {
                let copied = copy_color_rows(
                    color_image,
                    frames.color.resolution,
                    frames.color.bytes_per_pixel as usize,
                    &mut frames.color.data,
                );
                sys::k4a_image_release(color_image);
                if let Err(err) = copied {
                    sys::k4a_capture_release(capture);
                    return Err(err);
                }
                ready.color = true;
            }

            let depth_image = sys::k4a_capture_get_depth_image(capture);
            if !depth_image.is_null() {
                let copied =
                    copy_depth_rows(depth_image, frames.depth.resolution, &mut frames.depth.data);
                sys::k4a_image_release(depth_image);
                if let Err(err) = copied {
                    sys::k4a_capture_release(capture);
                    return Err(err);
                }
                ready.depth = true;
            }

            sys::k4a_capture_release(capture);
            Ok(ready)
        }
    }

    fn map_depth_to_color(&self, depth: &[u16], out: &mut [SpacePoint]) -> Result<()> {
        self.check_map_buffers(depth.len(), out.len(), self.info.depth.to_pixel_count())?;

        let (w, _) = self.info.depth.to_tuple();
        for (i, (oi, di)) in zip(out.iter_mut(), depth).enumerate() {
            if *di == 0 {
                *oi = SpacePoint::INVALID;
                continue;
            }
            let source = sys::k4a_float2_t {
                xy: sys::_xy {
                    x: (i as u32 % w) as f32,
                    y: (i as u32 / w) as f32,
                },
            };
            let mut target = sys::k4a_float2_t::default();
            let mut valid = 0;
            let status = unsafe {
                sys::k4a_calibration_2d_to_2d(
                    &self.calibration,
                    &source,
                    *di as f32,
                    sys::k4a_calibration_type_t_K4A_CALIBRATION_TYPE_DEPTH,
                    sys::k4a_calibration_type_t_K4A_CALIBRATION_TYPE_COLOR,
                    &mut target,
                    &mut valid,
                )
            };
            check("k4a_calibration_2d_to_2d", status)?;
            *oi = if valid == 1 {
                unsafe { SpacePoint::new(target.xy.x, target.xy.y) }
            } else {
                SpacePoint::INVALID
            };
        }
        Ok(())
    }

    fn map_color_to_depth(&self, depth: &[u16], out: &mut [SpacePoint]) -> Result<()> {
        self.check_map_buffers(depth.len(), out.len(), self.info.color.to_pixel_count())?;

        unsafe {
            let (dw, dh) = self.info.depth.to_tuple();
            let mut depth_image: sys::k4a_image_t = std::ptr::null_mut();
            // the SDK only reads from the buffer
            check(
                "k4a_image_create_from_buffer",
                sys::k4a_image_create_from_buffer(
                    sys::k4a_image_format_t_K4A_IMAGE_FORMAT_DEPTH16,
                    dw as i32,
                    dh as i32,
                    (dw * 2) as i32,
                    depth.as_ptr() as *mut u8,
                    depth.len() * 2,
                    None,
                    std::ptr::null_mut(),
                    &mut depth_image,
                ),
            )?;

            let (cw, _) = self.info.color.to_tuple();
            for (i, oi) in out.iter_mut().enumerate() {
                let source = sys::k4a_float2_t {
                    xy: sys::_xy {
                        x: (i as u32 % cw) as f32,
                        y: (i as u32 / cw) as f32,
                    },
                };
                let mut target = sys::k4a_float2_t::default();
                let mut valid = 0;
                let status = sys::k4a_calibration_color_2d_to_depth_2d(
                    &self.calibration,
                    &source,
                    depth_image,
                    &mut target,
                    &mut valid,
                );
                if let Err(err) = check("k4a_calibration_color_2d_to_depth_2d", status) {
                    sys::k4a_image_release(depth_image);
                    return Err(err);
                }
                *oi = if valid == 1 {
                    SpacePoint::new(target.xy.x, target.xy.y)
                } else {
                    SpacePoint::INVALID
                };
            }

            sys::k4a_image_release(depth_image);
        }
        Ok(())
    }

    fn shut_down(&mut self) {
        if self.handle.is_null() {
            return;
        }
        unsafe {
            sys::k4a_device_stop_cameras(self.handle);
            sys::k4a_device_close(self.handle);
        }
        self.handle = std::ptr::null_mut();
    }
}

impl Drop for K4aCamera {
    fn drop(&mut self) {
        self.shut_down();
    }
}

fn serial_number(handle: sys::k4a_device_t) -> String {
    unsafe {
        let mut size = 0usize;
        sys::k4a_device_get_serialnum(handle, std::ptr::null_mut(), &mut size);

        let mut buffer = vec![0u8; size.max(1)];
        let status = sys::k4a_device_get_serialnum(handle, buffer.as_mut_ptr().cast(), &mut size);
        if status != sys::k4a_buffer_result_t_K4A_BUFFER_RESULT_SUCCEEDED {
            return "unknown".to_string();
        }
        CStr::from_bytes_until_nul(&buffer)
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|_| "unknown".to_string())
    }
}

/// Copies the SDK color image into `out`, honoring the row stride.
unsafe fn copy_color_rows(
    image: sys::k4a_image_t,
    resolution: Resolution,
    bytes_per_pixel: usize,
    out: &mut [u8],
) -> Result<()> {
    let (w, h) = resolution.to_tuple();
    unsafe {
        if sys::k4a_image_get_width_pixels(image) as u32 != w
            || sys::k4a_image_get_height_pixels(image) as u32 != h
        {
            return Err(Error::BufferSize {
                expected: out.len(),
                actual: sys::k4a_image_get_size(image),
            });
        }
        let stride = sys::k4a_image_get_stride_bytes(image) as usize;
        let buffer = std::slice::from_raw_parts(
            sys::k4a_image_get_buffer(image),
            sys::k4a_image_get_size(image),
        );

        let width_bytes = w as usize * bytes_per_pixel;
        for (row_out, row_in) in zip(out.chunks_exact_mut(width_bytes), buffer.chunks_exact(stride))
        {
            row_out.copy_from_slice(&row_in[..width_bytes]);
        }
    }
    Ok(())
}

/// Copies the SDK depth image into `out`. The sensor delivers rows of
/// little-endian u16 samples.
unsafe fn copy_depth_rows(
    image: sys::k4a_image_t,
    resolution: Resolution,
    out: &mut [u16],
) -> Result<()> {
    let (w, h) = resolution.to_tuple();
    unsafe {
        if sys::k4a_image_get_width_pixels(image) as u32 != w
            || sys::k4a_image_get_height_pixels(image) as u32 != h
        {
            return Err(Error::BufferSize {
                expected: out.len(),
                actual: sys::k4a_image_get_size(image) / 2,
            });
        }
        let stride = sys::k4a_image_get_stride_bytes(image) as usize;
        let buffer = std::slice::from_raw_parts(
            sys::k4a_image_get_buffer(image),
            sys::k4a_image_get_size(image),
        );

        let width_bytes = w as usize * 2;
        for (row_out, row_in) in zip(out.chunks_exact_mut(w as usize), buffer.chunks_exact(stride)) {
            depth_from_le_bytes(&row_in[..width_bytes], row_out);
        }
    }
    Ok(())
}
