pub mod decoder;
pub mod reader;

pub use decoder::{DecodeError, Decoder, Record, Rfc5424Decoder};
pub use reader::{DelimReader, LineReader};
