pub mod encoder;
pub mod writer;

pub use encoder::{Encoder, JsonEncoder};
pub use writer::{LineWriter, Writer};
