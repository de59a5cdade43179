//! Color and depth viewer with mouse-driven point probing.
//!
//! Left-clicking the color window maps the clicked pixel into the depth
//! camera's space and marks it with a circle on the depth view.

use std::time::Duration;

use k4a_rust::config::ViewerConfig;
use k4a_rust::device::open_camera;
use k4a_rust::frame::{normalize_depth, FrameSet};
use k4a_rust::mapper::{probe_color_to_depth, SpacePoint};
use k4a_rust::viewer::{self, Counter, Format};
use show_image::event::{MouseButton, VirtualKeyCode, WindowEvent};
use tracing_subscriber::EnvFilter;

/// BGRA marker color for the probed pixel.
const MARKER: [u8; 4] = [0, 0, 255, 255];
const MARKER_RADIUS: i64 = 5;

#[show_image::main]
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ViewerConfig::load("viewer.toml")?;
    let mut camera = open_camera(&config)?;
    let info = camera.info().clone();
    tracing::info!(
        "color {}x{}, depth {}x{}",
        info.color.width(),
        info.color.height(),
        info.depth.width(),
        info.depth.height()
    );

    let mut frames = FrameSet::for_camera(&info);
    let mut mono = vec![0u8; info.depth.to_pixel_count()];
    let mut depth_bgra = vec![0u8; info.depth.to_pixel_count() * 4];
    let mut points = vec![SpacePoint::INVALID; info.color.to_pixel_count()];

    let color_window = viewer::window("color", &info.color.scaled(config.window_scale))?;
    let depth_window = viewer::window("depth", &info.depth.scaled(config.window_scale))?;
    let color_events = color_window.event_channel()?;
    let depth_events = depth_window.event_channel()?;
    let mut counter = Counter::new(30);

    // the color pixel currently being probed, while the left button is held
    let mut probe: Option<(u32, u32)> = None;
    let mut held = false;

    loop {
        match camera.acquire_latest(&mut frames) {
            Ok(ready) => {
                if ready.color {
                    viewer::update(&color_window, &info.color, &frames.color.data, Format::Bgra)?;
                }
                if ready.depth {
                    normalize_depth(
                        &frames.depth.data,
                        config.min_depth_mm,
                        config.max_depth_mm,
                        &mut mono,
                    );
                    viewer::mono_to_bgra(&mono, &mut depth_bgra);

                    if let Some((px, py)) = probe {
                        match camera.map_color_to_depth(&frames.depth.data, &mut points) {
                            Ok(()) => {
                                if let Some((dx, dy)) = probe_color_to_depth(
                                    &points,
                                    px,
                                    py,
                                    &info.color,
                                    &info.depth,
                                ) {
                                    viewer::draw_circle(
                                        &mut depth_bgra,
                                        &info.depth,
                                        (dx as i64, dy as i64),
                                        MARKER_RADIUS,
                                        &MARKER,
                                    );
                                }
                            }
                            Err(err) => tracing::warn!("mapping failed: {err}"),
                        }
                    }

                    viewer::update(&depth_window, &info.depth, &depth_bgra, Format::Bgra)?;
                    counter.tick();
                }
            }
            Err(err) => tracing::warn!("acquire failed: {err}"),
        }

        while let Ok(event) = color_events.try_recv() {
            if should_quit(&event) {
                camera.shut_down();
                return Ok(());
            }
            // probing follows the cursor in the (scaled) color window while
            // the left button is held
            match &event {
                WindowEvent::MouseButton(event) if event.button == MouseButton::Left => {
                    held = event.state.is_pressed();
                    probe = if held {
                        to_color_pixel(
                            event.position.x,
                            event.position.y,
                            config.window_scale,
                            &info,
                        )
                    } else {
                        None
                    };
                }
                WindowEvent::MouseMove(event) if held => {
                    probe = to_color_pixel(
                        event.position.x,
                        event.position.y,
                        config.window_scale,
                        &info,
                    );
                }
                _ => {}
            }
        }
        while let Ok(event) = depth_events.try_recv() {
            if should_quit(&event) {
                camera.shut_down();
                return Ok(());
            }
        }
        std::thread::sleep(Duration::from_millis(config.poll_wait_ms));
    }
}

/// Converts a window position into a color image pixel, undoing the window
/// scale. `None` when outside the image.
fn to_color_pixel(
    x: f32,
    y: f32,
    window_scale: f32,
    info: &k4a_rust::device::SensorInfo,
) -> Option<(u32, u32)> {
    let x = (x / window_scale).round() as i64;
    let y = (y / window_scale).round() as i64;
    if x < 0 || y < 0 || x >= info.color.width() as i64 || y >= info.color.height() as i64 {
        return None;
    }
    Some((x as u32, y as u32))
}

fn should_quit(event: &WindowEvent) -> bool {
    match event {
        WindowEvent::CloseRequested(_) => true,
        WindowEvent::KeyboardInput(event) => {
            event.input.state.is_pressed()
                && matches!(
                    event.input.key_code,
                    Some(VirtualKeyCode::Escape) | Some(VirtualKeyCode::Q)
                )
        }
        _ => false,
    }
}
