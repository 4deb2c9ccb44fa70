// Tue Jan 13 2026 - Alex

pub mod buffer;
pub mod error;
pub mod image;
pub mod mmap;
pub mod relative;

pub use buffer::ImageBuffer;
pub use error::MemoryError;
pub use image::{ImageFormat, ImageInfo, ImageSection};
pub use mmap::MappedImage;
pub use relative::{read_displacement, resolve_displacement};
