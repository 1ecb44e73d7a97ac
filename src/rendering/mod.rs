pub mod decode;
pub mod png_codec;

pub use decode::{decode, load, save};
pub use png_codec::{encode, optimize, OutputFormat};
