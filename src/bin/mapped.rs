//! Cross-registered viewer: color gathered into the depth grid and depth
//! scattered into the color grid.

use std::time::Duration;

use k4a_rust::config::ViewerConfig;
use k4a_rust::device::open_camera;
use k4a_rust::frame::FrameSet;
use k4a_rust::mapper::{color_into_depth_frame, depth_into_color_frame, SpacePoint};
use k4a_rust::viewer::{self, Counter, Format};
use show_image::event::{VirtualKeyCode, WindowEvent};
use tracing_subscriber::EnvFilter;

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

    let mut frames = FrameSet::for_camera(&info);
    let mut points = vec![SpacePoint::INVALID; info.depth.to_pixel_count()];
    let mut color_in_depth = vec![0u8; info.depth.to_pixel_count() * 4];
    let mut depth_in_color = vec![0u8; info.color.to_pixel_count()];

    let gather_window =
        viewer::window("color in depth space", &info.depth.scaled(config.window_scale))?;
    let scatter_window =
        viewer::window("depth in color space", &info.color.scaled(config.window_scale))?;
    let gather_events = gather_window.event_channel()?;
    let scatter_events = scatter_window.event_channel()?;
    let mut counter = Counter::new(30);

    loop {
        match camera.acquire_latest(&mut frames) {
            Ok(ready) if ready.depth => {
                match camera.map_depth_to_color(&frames.depth.data, &mut points) {
                    Ok(()) => {
                        color_into_depth_frame(&points, &frames.color, &mut color_in_depth);
                        depth_into_color_frame(
                            &points,
                            &frames.depth.data,
                            config.min_depth_mm,
                            config.max_depth_mm,
                            &info.color,
                            &mut depth_in_color,
                        );
                        viewer::update(&gather_window, &info.depth, &color_in_depth, Format::Bgra)?;
                        viewer::update(&scatter_window, &info.color, &depth_in_color, Format::Mono)?;
                        counter.tick();
                    }
                    Err(err) => tracing::warn!("mapping failed: {err}"),
                }
            }
            // no new frame yet
            Ok(_) => {}
            Err(err) => tracing::warn!("acquire failed: {err}"),
        }

        while let Ok(event) = gather_events.try_recv() {
            if should_quit(&event) {
                camera.shut_down();
                return Ok(());
            }
        }
        while let Ok(event) = scatter_events.try_recv() {
            if should_quit(&event) {
                camera.shut_down();
                return Ok(());
            }
        }
        std::thread::sleep(Duration::from_millis(config.poll_wait_ms));
    }
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
