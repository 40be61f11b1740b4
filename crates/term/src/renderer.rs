//! TerminalRenderer: encodes simulator screens and flushes them to a writer.
//!
//! The `encode_*_into` functions build crossterm command sequences into a byte
//! buffer without touching the terminal; [`TerminalRenderer`] composes them into
//! whole screens and writes each screen with a single `write_all`.

use std::io::Write;

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Print, ResetColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::core::{Earthquake, Grid};
use crate::palette::{tier_color, ALERT, WARNING};
use crate::types::StressTier;

const MAP_RULE: &str = "------------------------";
const BANNER_RULE: &str =
    "----------------------------------------------------------------------------------";

/// Clear the whole screen and home the cursor.
pub fn encode_clear_into(out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;
    Ok(())
}

/// Program title.
pub fn encode_title_into(out: &mut Vec<u8>) -> Result<()> {
    out.queue(Print("                ********************\n"))?;
    out.queue(Print("                EARTHQUAKE SIMULATOR\n"))?;
    out.queue(Print("                ********************\n\n"))?;
    Ok(())
}

fn encode_header_into(out: &mut Vec<u8>, title: &str) -> Result<()> {
    writeln!(out, "{MAP_RULE}")?;
    writeln!(out, " {title}")?;
    writeln!(out, "{MAP_RULE}")?;
    Ok(())
}

/// Fault map: `1` in the alert color for fault cells, `0` otherwise.
pub fn encode_fault_map_into(grid: &Grid, out: &mut Vec<u8>) -> Result<()> {
    encode_header_into(out, "Printing the Fault Map")?;

    for row in grid.fault_rows() {
        for &is_fault in row {
            if is_fault {
                out.queue(SetForegroundColor(ALERT))?;
                out.queue(Print("1 "))?;
                out.queue(ResetColor)?;
            } else {
                out.queue(Print("0 "))?;
            }
        }
        out.queue(Print("\n"))?;
    }
    Ok(())
}

/// Stress map: each value right-justified to width 3, colored by tier.
pub fn encode_stress_map_into(grid: &Grid, out: &mut Vec<u8>) -> Result<()> {
    encode_header_into(out, "Printing the Surface")?;

    for row in grid.stress_rows() {
        for &stress in row {
            out.queue(SetForegroundColor(tier_color(StressTier::classify(stress))))?;
            write!(out, "{stress:>3}")?;
            out.queue(ResetColor)?;
            out.queue(Print(" "))?;
        }
        out.queue(Print("\n"))?;
    }
    Ok(())
}

/// Step counter line.
pub fn encode_step_into(step: u32, out: &mut Vec<u8>) -> Result<()> {
    writeln!(out, "Simulation step: {step}\n")?;
    Ok(())
}

/// Peak stress against the threshold.
pub fn encode_status_into(peak: u32, threshold: u32, out: &mut Vec<u8>) -> Result<()> {
    out.queue(Print("\nPeak stress: "))?;
    out.queue(SetForegroundColor(tier_color(StressTier::classify(peak))))?;
    write!(out, "{peak}")?;
    out.queue(ResetColor)?;
    writeln!(out, " / {threshold}")?;
    Ok(())
}

/// Earthquake banner followed by the epicentre list.
pub fn encode_earthquake_into(quake: &Earthquake, out: &mut Vec<u8>) -> Result<()> {
    for line in [
        BANNER_RULE,
        "                                EARTHQUAKE!! ",
        BANNER_RULE,
    ] {
        out.queue(Print("\n"))?;
        out.queue(SetForegroundColor(ALERT))?;
        out.queue(Print(line))?;
        out.queue(ResetColor)?;
        out.queue(Print("\n"))?;
    }

    write!(out, "\nRuptured at step {} (peak stress {}) at", quake.step, quake.peak)?;
    for (x, y) in &quake.epicentres {
        write!(out, " ({x},{y})")?;
    }
    out.queue(Print("\n"))?;
    Ok(())
}

/// A one-line notice in the warning color.
pub fn encode_notice_into(message: &str, out: &mut Vec<u8>) -> Result<()> {
    out.queue(SetForegroundColor(WARNING))?;
    out.queue(Print(message))?;
    out.queue(ResetColor)?;
    out.queue(Print("\n"))?;
    Ok(())
}

/// Screen-level renderer over any writer.
pub struct TerminalRenderer {
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    /// Title banner (no clear; printed once before the first menu).
    pub fn title(&mut self, out: &mut impl Write) -> Result<()> {
        self.buf.clear();
        encode_title_into(&mut self.buf)?;
        self.flush_buf(out)
    }

    /// Cleared screen showing the fault map.
    pub fn fault_screen(&mut self, out: &mut impl Write, grid: &Grid) -> Result<()> {
        self.buf.clear();
        encode_clear_into(&mut self.buf)?;
        encode_fault_map_into(grid, &mut self.buf)?;
        self.flush_buf(out)
    }

    /// Cleared screen for one simulation tick.
    pub fn stress_frame(
        &mut self,
        out: &mut impl Write,
        step: u32,
        grid: &Grid,
        peak: u32,
        threshold: u32,
    ) -> Result<()> {
        self.buf.clear();
        encode_clear_into(&mut self.buf)?;
        encode_step_into(step, &mut self.buf)?;
        encode_stress_map_into(grid, &mut self.buf)?;
        encode_status_into(peak, threshold, &mut self.buf)?;
        self.flush_buf(out)
    }

    /// Earthquake banner, appended below the last frame.
    pub fn earthquake(&mut self, out: &mut impl Write, quake: &Earthquake) -> Result<()> {
        self.buf.clear();
        encode_earthquake_into(quake, &mut self.buf)?;
        self.flush_buf(out)
    }

    pub fn notice(&mut self, out: &mut impl Write, message: &str) -> Result<()> {
        self.buf.clear();
        encode_notice_into(message, &mut self.buf)?;
        self.flush_buf(out)
    }

    fn flush_buf(&mut self, out: &mut impl Write) -> Result<()> {
        out.write_all(&self.buf)?;
        out.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command_bytes(f: impl FnOnce(&mut Vec<u8>) -> std::io::Result<()>) -> Vec<u8> {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        out
    }

    fn contains(haystack: &[u8], needle: &[u8]) -> bool {
        haystack.windows(needle.len()).any(|w| w == needle)
    }

    #[test]
    fn clear_emits_clear_and_home() {
        let mut out = Vec::new();
        encode_clear_into(&mut out).unwrap();

        let clear = command_bytes(|o| {
            o.queue(terminal::Clear(terminal::ClearType::All)).map(|_| ())
        });
        let home = command_bytes(|o| o.queue(cursor::MoveTo(0, 0)).map(|_| ()));
        assert!(out.starts_with(&clear));
        assert!(out.ends_with(&home));
    }

    #[test]
    fn empty_fault_map_has_no_alert_color() {
        let grid = Grid::new();
        let mut out = Vec::new();
        encode_fault_map_into(&grid, &mut out).unwrap();

        let red = command_bytes(|o| o.queue(SetForegroundColor(ALERT)).map(|_| ()));
        assert!(!contains(&out, &red));
    }

    #[test]
    fn fault_cell_is_wrapped_in_alert_color() {
        let mut grid = Grid::new();
        grid.mark_fault(0, 0);
        let mut out = Vec::new();
        encode_fault_map_into(&grid, &mut out).unwrap();

        let mut expected = Vec::new();
        expected.queue(SetForegroundColor(ALERT)).unwrap();
        expected.queue(Print("1 ")).unwrap();
        expected.queue(ResetColor).unwrap();
        assert!(contains(&out, &expected));
    }
}
