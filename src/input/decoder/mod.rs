mod decoder;
mod registry;
mod rfc5424;

pub use decoder::{DecodeError, Decoder, Record};
pub use registry::{decoder, resolve, supported};
pub use rfc5424::Rfc5424Decoder;
