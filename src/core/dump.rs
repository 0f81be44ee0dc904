//! Hex dump rendering

use std::fmt::Write;

/// Bytes per dump row.
pub const BYTES_PER_ROW: usize = 16;

/// Append a dump of `bytes` to `out`:
///
/// ```text
/// DUMP [0x7ffd5c3a1b20(17)]:
/// 00 01 02 03 04 05 06 07 08 09 0a 0b 0c 0d 0e 0f
/// 10
/// ```
///
/// Every row, the last one included, ends with a newline.
pub fn render(bytes: &[u8], out: &mut String) {
    let _ = writeln!(out, "DUMP [{:p}({})]:", bytes.as_ptr(), bytes.len());
    for row in bytes.chunks(BYTES_PER_ROW) {
        for (i, byte) in row.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            let _ = write!(out, "{:02x}", byte);
        }
        out.push('\n');
    }
}
