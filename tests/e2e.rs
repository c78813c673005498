use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::Path;
use std::rc::Rc;

use structopt::StructOpt;

use lrec::cliopt::CliOpt;
use lrec::input::{decoder, reader::DelimReader};
use lrec::output::{encoder::JsonEncoder, writer::Writer};
use lrec::pipeline::Pipeline;

#[test]
fn e2e() -> Result<(), Box<dyn std::error::Error>> {
    let root_test_dir = Path::new(file!()).parent().unwrap().join("scenarios");

    for test_dir in fs::read_dir(&root_test_dir)? {
        let test_dir = test_dir?.path();

        if let Ok(filter) = std::env::var("E2E_CASE") {
            if !test_dir.as_os_str().to_string_lossy().ends_with(&filter) {
                continue;
            }
        }

        let cli_args: Vec<String> =
            serde_json::from_str(&fs::read_to_string(test_dir.join("args.json"))?)?;

        let actual_output = decode(
            Box::new(io::BufReader::new(fs::File::open(test_dir.join("input"))?)),
            &cli_args,
        )?;

        let expected_output = fs::read(test_dir.join("output"))?;

        assert_eq!(
            expected_output,
            actual_output,
            "\nUnexpected pipeline output in '{}'.\nExpected:\n{}\nActual:\n{}",
            test_dir.display(),
            String::from_utf8_lossy(&expected_output),
            String::from_utf8_lossy(&actual_output),
        );
    }

    Ok(())
}

fn decode(
    input: Box<dyn io::BufRead>,
    cli_args: &[String],
) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    let opt = CliOpt::from_iter(cli_args);

    struct TestWriter(Rc<RefCell<Vec<u8>>>);

    impl Writer for TestWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<()> {
            let mut out = self.0.borrow_mut();
            out.extend_from_slice(buf);
            out.push(b'\n');
            Ok(())
        }
    }

    let captured = Rc::new(RefCell::new(Vec::new()));

    let mut pipeline = Pipeline::new(
        Box::new(DelimReader::new(input)),
        decoder::decoder(&opt.format)?,
        Box::new(JsonEncoder::new()),
        Box::new(TestWriter(Rc::clone(&captured))),
        opt.verbose,
    );

    pipeline.run()?;

    let output = captured.borrow().clone();
    Ok(output)
}
