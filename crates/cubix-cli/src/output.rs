//! Output formatting utilities.

use std::io::Write;

use cubix_math::scan::RootSet;

/// Formats the three root slots with two decimals, space-separated.
pub fn format_roots(roots: &RootSet) -> String {
    let [r1, r2, r3] = roots.padded();
    format!("{:.2} {:.2} {:.2}", r1, r2, r3)
}

/// Writes the formatted roots without a trailing newline.
pub fn write_roots<W: Write>(mut writer: W, roots: &RootSet) -> std::io::Result<()> {
    writer.write_all(format_roots(roots).as_bytes())?;
    writer.flush()
}

/// Prints the formatted roots to stdout.
pub fn print_roots(roots: &RootSet) -> std::io::Result<()> {
    write_roots(std::io::stdout().lock(), roots)
}
