use std::collections::HashMap;

use lazy_static::lazy_static;

use super::decoder::Decoder;
use super::rfc5424::Rfc5424Decoder;
use crate::error::Result;

/// The static (alias, canonical) table. The canonical name is the grammar
/// actually implemented; aliases are alternate spellings accepted from the
/// command line. Order is the table's declaration order and is stable.
static FORMATS: &[(&str, &str)] = &[("syslog", "rfc5424")];

lazy_static! {
    static ref LOOKUP: HashMap<&'static str, &'static str> = {
        let mut lookup = HashMap::new();
        for (alias, canonical) in FORMATS {
            lookup.insert(*alias, *canonical);
            // Canonical names resolve to themselves.
            lookup.insert(*canonical, *canonical);
        }
        lookup
    };
}

pub fn supported() -> &'static [(&'static str, &'static str)] {
    FORMATS
}

/// Maps a requested format name to its canonical name. Case-sensitive.
pub fn resolve(name: &str) -> Result<&'static str> {
    LOOKUP
        .get(name)
        .copied()
        .ok_or_else(|| format!("unknown format \"{}\"", name).into())
}

/// Constructs the decoder for a requested format name. This is the only
/// failure point tied to the format name; decode failures are per-line.
pub fn decoder(name: &str) -> Result<Box<dyn Decoder>> {
    match resolve(name)? {
        "rfc5424" => Ok(Box::new(Rfc5424Decoder::new())),
        canonical => unreachable!("no decoder registered for {}", canonical),
    }
}
