use std::io::{self, Write};

/// Write a single NDJSON line.
pub fn write_line(out: &mut impl Write, line: &str) -> io::Result<()> {
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    out.flush()
}

/// Serialize a JSON value and write it to stdout.
pub fn emit(event: serde_json::Value) -> io::Result<()> {
    let line = serde_json::to_string(&event).unwrap_or_else(|_| "{}".to_string());
    write_line(&mut io::stdout().lock(), &line)
}
