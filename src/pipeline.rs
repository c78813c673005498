use crate::error::Result;
use crate::input::decoder::Decoder;
use crate::input::reader::LineReader;
use crate::output::encoder::Encoder;
use crate::output::writer::Writer;

// (Reader -> Decoder) -> (Encoder -> Writer)
//       producer             consumer
//
// Reader  == stdin [, line separator]  ->  lines (terminator-free bytes)
// Decoder == line                      ->  Record | decode failure
// Encoder == Record                    ->  bytes
// Writer  == bytes                     ->  stdout
//
// A decode failure drops the line and moves on; reader and writer failures
// abort the run. Skip-or-quarantine policy for bad lines belongs here, not
// in the decoder.
pub struct Pipeline {
    reader: Box<dyn LineReader>,
    decoder: Box<dyn Decoder>,
    encoder: Box<dyn Encoder>,
    writer: Box<dyn Writer>,
    verbose: bool,
    line_no: usize,
}

impl Pipeline {
    pub fn new(
        reader: Box<dyn LineReader>,
        decoder: Box<dyn Decoder>,
        encoder: Box<dyn Encoder>,
        writer: Box<dyn Writer>,
        verbose: bool,
    ) -> Self {
        Self {
            reader,
            decoder,
            encoder,
            writer,
            verbose,
            line_no: 0,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        loop {
            let mut buf = Vec::new();
            match self.reader.read(&mut buf) {
                Ok(0) => return Ok(()), // EOF
                Ok(_) => (),
                Err(e) => return Err(("reader failed", e).into()),
            };

            self.line_no += 1;

            let record = match self.decoder.decode(&buf) {
                Ok(record) => record,
                Err(err) => {
                    if self.verbose {
                        eprintln!(
                            "line {} dropped: {}\n{}",
                            self.line_no,
                            err,
                            String::from_utf8_lossy(&buf),
                        );
                    }
                    continue;
                }
            };

            let out = self.encoder.encode(&record)?;
            self.writer
                .write(&out)
                .map_err(|e| ("writer failed", e))?;
        }
    }
}
