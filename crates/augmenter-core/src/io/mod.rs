pub mod image_io;

pub use image_io::{decode, encode, load_image, save_image, DecodeFailure};
