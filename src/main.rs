use std::io::{self, BufReader};

use structopt::StructOpt;

use lrec::cliopt::CliOpt;
use lrec::input::{decoder, reader::DelimReader};
use lrec::output::{encoder::JsonEncoder, writer::LineWriter};
use lrec::pipeline::Pipeline;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let opt = CliOpt::from_args();

    let mut pipeline = Pipeline::new(
        Box::new(DelimReader::new(BufReader::new(io::stdin()))),
        decoder::decoder(&opt.format)?,
        Box::new(JsonEncoder::new()),
        Box::new(LineWriter::new(io::stdout())),
        opt.verbose,
    );

    pipeline.run()?;

    Ok(())
}
