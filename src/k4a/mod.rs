//! The hardware backend over the Azure Kinect Sensor SDK. See the
//! [SDK documentation](https://learn.microsoft.com/azure/kinect-dk/) for the
//! underlying C API.

pub mod device;

use k4a_sys as sys;

/// Operating range of each depth mode in mm, as documented for the hardware.
pub fn depth_mode_range(mode: sys::k4a_depth_mode_t) -> (u16, u16) {
    match mode {
        sys::k4a_depth_mode_t_K4A_DEPTH_MODE_NFOV_2X2BINNED => (500, 5460),
        sys::k4a_depth_mode_t_K4A_DEPTH_MODE_NFOV_UNBINNED => (500, 3860),
        sys::k4a_depth_mode_t_K4A_DEPTH_MODE_WFOV_2X2BINNED => (250, 2880),
        sys::k4a_depth_mode_t_K4A_DEPTH_MODE_WFOV_UNBINNED => (250, 2210),
        _ => (0, 0),
    }
}
