use std::{
    fs::File,
    io::{self, BufWriter, Read as _, Write},
    path::Path,
};

use anyhow::Context;

/// Writes `value` as pretty JSON to `path`, or to stdout when the path is `-`.
pub fn save_json<T>(value: &T, path: &Path) -> anyhow::Result<()>
where
    T: serde::Serialize,
{
    if path.as_os_str() == "-" {
        return write_json(&mut io::stdout().lock(), value, "stdout");
    }
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    write_json(
        &mut BufWriter::new(file),
        value,
        &path.display().to_string(),
    )
}

fn write_json<W, T>(writer: &mut W, value: &T, target: &str) -> anyhow::Result<()>
where
    W: Write,
    T: serde::Serialize,
{
    serde_json::to_writer_pretty(&mut *writer, value)
        .with_context(|| format!("Failed to write JSON to {target}"))?;
    writeln!(writer).with_context(|| format!("Failed to write newline to {target}"))?;
    writer
        .flush()
        .with_context(|| format!("Failed to flush output to {target}"))?;
    Ok(())
}

/// Reads all of stdin into a string.
pub fn read_stdin() -> anyhow::Result<String> {
    let mut text = String::new();
    io::stdin()
        .lock()
        .read_to_string(&mut text)
        .context("Failed to read board from stdin")?;
    Ok(text)
}
