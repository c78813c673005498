use std::io::{self, BufRead};

pub trait LineReader {
    /// Reads the next line into `buf`. Returns the number of bytes consumed
    /// from the underlying stream; `Ok(0)` means EOF.
    fn read(&mut self, buf: &mut Vec<u8>) -> io::Result<usize>;
}

pub struct DelimReader<R> {
    inner: R,
    delim: u8,
}

impl<R: BufRead> DelimReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            delim: b'\n',
        }
    }

    pub fn with_delimiter(inner: R, delim: u8) -> Self {
        Self { inner, delim }
    }
}

impl<R: BufRead> LineReader for DelimReader<R> {
    fn read(&mut self, buf: &mut Vec<u8>) -> io::Result<usize> {
        let n = self.inner.read_until(self.delim, buf)?;
        // Decoders expect terminator-free lines.
        if buf.last() == Some(&self.delim) {
            buf.pop();
        }
        Ok(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::BufReader;

    fn read_all(reader: &mut dyn LineReader) -> Vec<Vec<u8>> {
        let mut lines = vec![];
        loop {
            let mut buf = Vec::new();
            match reader.read(&mut buf) {
                Ok(0) => return lines,
                Ok(_) => lines.push(buf),
                Err(e) => panic!("read failed: {}", e),
            }
        }
    }

    #[test]
    fn test_strips_trailing_delimiter() {
        let mut reader = DelimReader::new(BufReader::new("one\ntwo\n".as_bytes()));
        assert_eq!(vec![b"one".to_vec(), b"two".to_vec()], read_all(&mut reader));
    }

    #[test]
    fn test_last_line_without_delimiter() {
        let mut reader = DelimReader::new(BufReader::new("one\ntwo".as_bytes()));
        assert_eq!(vec![b"one".to_vec(), b"two".to_vec()], read_all(&mut reader));
    }

    #[test]
    fn test_custom_delimiter() {
        let mut reader = DelimReader::with_delimiter(BufReader::new("a\0b".as_bytes()), 0);
        assert_eq!(vec![b"a".to_vec(), b"b".to_vec()], read_all(&mut reader));
    }

    #[test]
    fn test_empty_line_is_not_eof() {
        let mut reader = DelimReader::new(BufReader::new("\nx\n".as_bytes()));
        assert_eq!(vec![b"".to_vec(), b"x".to_vec()], read_all(&mut reader));
    }
}
