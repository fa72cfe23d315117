use std::io::{self, BufRead, Write};

/// Print `label` and read one line from `input`, without the newline.
/// Returns `None` at end of input.
pub fn ask<R: BufRead>(input: &mut R, label: &str) -> io::Result<Option<String>> {
    print!("{}", label);
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}
