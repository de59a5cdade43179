//! Color stream viewer.

use std::time::Duration;

use k4a_rust::config::ViewerConfig;
use k4a_rust::device::open_camera;
use k4a_rust::frame::FrameSet;
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
    tracing::info!(
        "color stream {}x{}, {} bytes per pixel",
        info.color.width(),
        info.color.height(),
        info.color_bytes_per_pixel
    );

    let mut frames = FrameSet::for_camera(&info);
    let window = viewer::window("color", &info.color.scaled(config.window_scale))?;
    let events = window.event_channel()?;
    let mut counter = Counter::new(30);

    loop {
        match camera.acquire_latest(&mut frames) {
            Ok(ready) if ready.color => {
                viewer::update(&window, &info.color, &frames.color.data, Format::Bgra)?;
                counter.tick();
            }
            // no new frame yet
            Ok(_) => {}
            Err(err) => tracing::warn!("acquire failed: {err}"),
        }

        while let Ok(event) = events.try_recv() {
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
