use crate::error::Result;
use crate::input::decoder::Record;

pub trait Encoder {
    fn encode(&self, record: &Record) -> Result<Vec<u8>>;
}

/// One compact JSON object per record, keys in `Record` field order.
pub struct JsonEncoder {}

impl JsonEncoder {
    pub fn new() -> Self {
        Self {}
    }
}

impl Encoder for JsonEncoder {
    fn encode(&self, record: &Record) -> Result<Vec<u8>> {
        serde_json::to_vec(record).map_err(|e| ("couldn't encode record as JSON", e).into())
    }
}
