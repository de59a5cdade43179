//! End-to-end run of the viewer pipeline against the synthetic camera:
//! acquire, normalize, remap between camera spaces, probe a pixel.

use k4a_rust::config::{Backend, ViewerConfig};
use k4a_rust::device::open_camera;
use k4a_rust::frame::{normalize_depth, FrameSet};
use k4a_rust::mapper::{
    color_into_depth_frame, depth_into_color_frame, probe_color_to_depth, SpacePoint,
};

fn sim_config() -> ViewerConfig {
    ViewerConfig {
        backend: Backend::Sim,
        ..ViewerConfig::default()
    }
}

#[test]
fn acquire_normalize_remap_probe() {
    let mut camera = open_camera(&sim_config()).unwrap();
    let info = camera.info().clone();

    let mut frames = FrameSet::for_camera(&info);
    let ready = camera.acquire_latest(&mut frames).unwrap();
    assert!(ready.color && ready.depth);

    // normalize for display
    let mut mono = vec![0u8; info.depth.to_pixel_count()];
    normalize_depth(&frames.depth.data, 600, 3000, &mut mono);
    assert_eq!(mono.len(), info.depth.to_pixel_count());

    // depth pixels project into the color grid
    let mut d2c = vec![SpacePoint::INVALID; info.depth.to_pixel_count()];
    camera.map_depth_to_color(&frames.depth.data, &mut d2c).unwrap();
    let valid = d2c.iter().filter(|p| p.is_valid()).count();
    assert!(valid > info.depth.to_pixel_count() / 2);

    // both composite images can be built from the same point array
    let mut color_in_depth = vec![0u8; info.depth.to_pixel_count() * 4];
    color_into_depth_frame(&d2c, &frames.color, &mut color_in_depth);
    assert!(color_in_depth.chunks_exact(4).any(|px| px[3] == 255));

    let mut depth_in_color = vec![0u8; info.color.to_pixel_count()];
    depth_into_color_frame(
        &d2c,
        &frames.depth.data,
        600,
        3000,
        &info.color,
        &mut depth_in_color,
    );
    assert!(depth_in_color.iter().any(|p| *p > 0));

    // probing a color pixel that has depth coverage yields a depth pixel
    let mut c2d = vec![SpacePoint::INVALID; info.color.to_pixel_count()];
    camera.map_color_to_depth(&frames.depth.data, &mut c2d).unwrap();
    let (cx, cy) = (100, 100);
    let hit = probe_color_to_depth(&c2d, cx, cy, &info.color, &info.depth);
    let (dx, dy) = hit.expect("probed pixel should map into the depth frame");
    assert!(dx < info.depth.width() && dy < info.depth.height());

    camera.shut_down();
    assert!(camera.acquire_latest(&mut frames).is_err());
}

#[test]
fn mismatched_point_buffer_is_rejected() {
    let mut camera = open_camera(&sim_config()).unwrap();
    let info = camera.info().clone();
    let mut frames = FrameSet::for_camera(&info);
    camera.acquire_latest(&mut frames).unwrap();

    let mut too_small = vec![SpacePoint::INVALID; 16];
    assert!(camera
        .map_depth_to_color(&frames.depth.data, &mut too_small)
        .is_err());
    assert!(camera
        .map_color_to_depth(&frames.depth.data, &mut too_small)
        .is_err());
}
