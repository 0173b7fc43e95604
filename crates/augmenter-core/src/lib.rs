pub mod augment;
pub mod config;
pub mod consts;
pub mod dataset;
pub mod error;
pub mod io;
pub mod raster;
pub mod transform;
