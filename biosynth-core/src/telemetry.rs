//! Telemetry line formatting
//!
//! Normalized sensor values go out as one CSV line per sample for
//! external plotting: board id as an integer, then heart, SCR, and
//! respiration as fixed two-decimal floats.

use core::fmt::Write;

use heapless::String;

use crate::traits::SensorFrame;

/// Worst case: "255,xx.xx,xx.xx,xx.xx\n" plus slack for out-of-range
/// floats.
pub const MAX_LINE_LEN: usize = 48;

/// Format one telemetry line: `"<board_id>,<heart>,<scr>,<resp>\n"`.
pub fn format_line(board_id: u8, frame: &SensorFrame) -> String<MAX_LINE_LEN> {
    let mut line = String::new();
    let _ = write!(
        line,
        "{},{:.2},{:.2},{:.2}\n",
        board_id, frame.heart_norm, frame.scr, frame.resp_norm
    );
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_format() {
        let frame = SensorFrame {
            heart_norm: 0.5,
            scr: 0.25,
            resp_norm: 0.75,
            ..Default::default()
        };

        let line = format_line(3, &frame);
        assert_eq!(line.as_str(), "3,0.50,0.25,0.75\n");
    }

    #[test]
    fn test_two_decimal_rounding() {
        let frame = SensorFrame {
            heart_norm: 0.987_6,
            scr: 0.0,
            resp_norm: 1.0,
            ..Default::default()
        };

        let line = format_line(0, &frame);
        assert_eq!(line.as_str(), "0,0.99,0.00,1.00\n");
    }
}
