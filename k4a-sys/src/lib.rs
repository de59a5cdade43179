/*!
# k4a-sys

Generates and uses Azure Kinect Sensor SDK (`libk4a`) C library bindings as a Rust crate. This crate is used as a base layer in `k4a-rust`.
*/

#![allow(non_upper_case_globals)]
#![allow(non_camel_case_types)]
#![allow(non_snake_case)]

include!("../bindings/k4a.rs");
