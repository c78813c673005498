use nom::{
    bytes::complete::take_while1,
    character::complete::{char, digit1},
    sequence::{delimited, preceded},
    IResult,
};

use super::decoder::{DecodeError, Decoder, Record};
use crate::error::Result;

/// Decoder for the RFC 5424-like structured line grammar:
///
///   <PRIORITY>VERSION TIMESTAMP HOST APP PID MSGID MESSAGE
///
/// Field separators are single ASCII spaces; MESSAGE is the raw remainder of
/// the line. The decoder holds no state, so one instance can serve any
/// number of lines (and callers) concurrently.
pub struct Rfc5424Decoder {}

impl Rfc5424Decoder {
    pub fn new() -> Self {
        Self {}
    }
}

impl Decoder for Rfc5424Decoder {
    fn decode(&self, buf: &[u8]) -> Result<Record> {
        Ok(scan(buf)?)
    }
}

fn priority(input: &[u8]) -> IResult<&[u8], &[u8]> {
    // <1*DIGIT>
    delimited(char('<'), digit1, char('>'))(input)
}

fn version(input: &[u8]) -> IResult<&[u8], &[u8]> {
    // 1*DIGIT, immediately after the closing '>'
    digit1(input)
}

fn token(input: &[u8]) -> IResult<&[u8], &[u8]> {
    // exactly one space, then a maximal run of non-space bytes
    preceded(char(' '), take_while1(|b: u8| b != b' '))(input)
}

fn int<T: std::str::FromStr>(digits: &[u8]) -> Option<T> {
    std::str::from_utf8(digits).ok()?.parse().ok()
}

fn text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

fn pid_value(token: &[u8]) -> std::result::Result<u16, DecodeError> {
    // The nil token stands for "no pid" and maps to 0.
    if token == b"-" {
        return Ok(0);
    }
    if !token.iter().all(u8::is_ascii_digit) {
        return Err(DecodeError::InvalidPid);
    }
    int(token).ok_or(DecodeError::InvalidPid)
}

/// Scans one terminator-free line into a `Record`, or rejects it with the
/// first grammar violation encountered. Pure: no state survives the call.
pub(super) fn scan(line: &[u8]) -> std::result::Result<Record, DecodeError> {
    let (rest, digits) = priority(line).map_err(|_| DecodeError::HeaderMalformed)?;
    let priority = int::<u32>(digits).ok_or(DecodeError::HeaderMalformed)?;

    // Any whitespace between '>' and the version digit is a hard failure.
    let (rest, digits) = version(rest).map_err(|_| DecodeError::VersionMissing)?;
    let version = int::<u32>(digits).ok_or(DecodeError::VersionMissing)?;

    let (rest, timestamp) = token(rest).map_err(|_| DecodeError::FieldMissing)?;
    let (rest, host) = token(rest).map_err(|_| DecodeError::FieldMissing)?;
    let (rest, app) = token(rest).map_err(|_| DecodeError::FieldMissing)?;
    let (rest, pid_token) = token(rest).map_err(|_| DecodeError::FieldMissing)?;
    let (rest, message_id) = token(rest).map_err(|_| DecodeError::FieldMissing)?;

    // The remainder after one more space is the message, taken verbatim.
    // A line that stops at message_id has no message and is incomplete.
    let message = match rest.split_first() {
        Some((b' ', tail)) if !tail.is_empty() => tail,
        _ => return Err(DecodeError::FieldMissing),
    };

    let pid = pid_value(pid_token)?;

    Ok(Record {
        priority,
        version,
        timestamp: text(timestamp),
        host: text(host),
        app: text(app),
        pid,
        message_id: text(message_id),
        message: text(message),
    })
}
