use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use log::debug;

use crate::constants::MEMORY_SIZE;
use crate::error::LoadError;

/// The largest image that fits in memory
pub const MAX_PROGRAM_LEN: usize = MEMORY_SIZE;

/// # Program images
/// A program image is text with one byte per line written in base 2, e.g. `10000010`.
///
/// - Anything after the first `#` on a line is a comment
/// - Whitespace around the literal is ignored
/// - Lines that aren't a base-2 integer once the comment is removed are skipped
/// - Literals wider than 8 bits keep only their low byte
///
/// Bytes are returned in file order; they belong at consecutive addresses from 0.
pub fn parse_program(reader: &mut dyn BufRead) -> Result<Vec<u8>, LoadError> {
    let mut program = Vec::new();
    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        match parse_line(&line) {
            Some(byte) => program.push(byte),
            None => debug!("skipping line {}: {:?}", number + 1, line),
        }
    }
    if program.len() > MAX_PROGRAM_LEN {
        return Err(LoadError::ProgramTooLarge(program.len()));
    }
    Ok(program)
}

/// Reads and parses the program image at `path`
pub fn load_file(path: &Path) -> Result<Vec<u8>, LoadError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound(path.to_path_buf()),
        _ => LoadError::Io(e),
    })?;
    parse_program(&mut BufReader::new(file))
}

fn parse_line(line: &str) -> Option<u8> {
    let code = line.split('#').next().unwrap_or("").trim();
    u32::from_str_radix(code, 2).ok().map(|value| value as u8)
}
