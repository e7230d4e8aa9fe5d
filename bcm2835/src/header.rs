//! GPIO line numbers by position on the 40-pin P1 header.
//!
//! Positions 1 to 26 match the 26-pin header of the revision 2 boards.
//! Positions that carry power or ground have no constant here, and
//! [gpio()] returns [None] for them.

pub const GPIO_P1_03: u8 = 2;
pub const GPIO_P1_05: u8 = 3;
pub const GPIO_P1_07: u8 = 4;
pub const GPIO_P1_08: u8 = 14;
pub const GPIO_P1_10: u8 = 15;
pub const GPIO_P1_11: u8 = 17;
pub const GPIO_P1_12: u8 = 18;
pub const GPIO_P1_13: u8 = 27;
pub const GPIO_P1_15: u8 = 22;
pub const GPIO_P1_16: u8 = 23;
pub const GPIO_P1_18: u8 = 24;
pub const GPIO_P1_19: u8 = 10;
pub const GPIO_P1_21: u8 = 9;
pub const GPIO_P1_22: u8 = 25;
pub const GPIO_P1_23: u8 = 11;
pub const GPIO_P1_24: u8 = 8;
pub const GPIO_P1_26: u8 = 7;

// ID EEPROM, reserved for HAT detection
pub const GPIO_P1_27: u8 = 0;
pub const GPIO_P1_28: u8 = 1;

pub const GPIO_P1_29: u8 = 5;
pub const GPIO_P1_31: u8 = 6;
pub const GPIO_P1_32: u8 = 12;
pub const GPIO_P1_33: u8 = 13;
pub const GPIO_P1_35: u8 = 19;
pub const GPIO_P1_36: u8 = 16;
pub const GPIO_P1_37: u8 = 26;
pub const GPIO_P1_38: u8 = 20;
pub const GPIO_P1_40: u8 = 21;

/// Number of positions on the header.
pub const POSITIONS: u8 = 40;

/// The GPIO line at header `position`, counting from 1.
///
/// Returns [None] for power and ground positions, and for anything
/// past the end of the header.
#[inline(always)]
pub const fn gpio(position: u8) -> Option<u8> {
    Some(match position {
        3 => GPIO_P1_03,
        5 => GPIO_P1_05,
        7 => GPIO_P1_07,
        8 => GPIO_P1_08,
        10 => GPIO_P1_10,
        11 => GPIO_P1_11,
        12 => GPIO_P1_12,
        13 => GPIO_P1_13,
        15 => GPIO_P1_15,
        16 => GPIO_P1_16,
        18 => GPIO_P1_18,
        19 => GPIO_P1_19,
        21 => GPIO_P1_21,
        22 => GPIO_P1_22,
        23 => GPIO_P1_23,
        24 => GPIO_P1_24,
        26 => GPIO_P1_26,
        27 => GPIO_P1_27,
        28 => GPIO_P1_28,
        29 => GPIO_P1_29,
        31 => GPIO_P1_31,
        32 => GPIO_P1_32,
        33 => GPIO_P1_33,
        35 => GPIO_P1_35,
        36 => GPIO_P1_36,
        37 => GPIO_P1_37,
        38 => GPIO_P1_38,
        40 => GPIO_P1_40,
        _ => return None,
    })
}

#[cfg(test)]
mod test {
    use super::*;

    use crate::map;

    #[test]
    fn power_and_ground_have_no_line() {
        for position in [0, 1, 2, 4, 6, 9, 14, 17, 20, 25, 30, 34, 39, 41] {
            assert_eq!(gpio(position), None, "position {}", position);
        }
    }

    #[test]
    fn every_line_is_used_once() {
        let mut seen = [false; map::PIN_COUNT];
        let mut count = 0;
        for position in 1..=POSITIONS {
            if let Some(line) = gpio(position) {
                assert!(line <= map::MAX_PIN);
                assert!(!seen[line as usize], "line {} repeated", line);
                seen[line as usize] = true;
                count += 1;
            }
        }
        // 28 signal positions, covering lines 0 to 27
        assert_eq!(count, 28);
        assert!(seen[..28].iter().all(|&s| s));
    }

    #[test]
    fn known_positions() {
        assert_eq!(gpio(22), Some(25));
        assert_eq!(gpio(15), Some(22));
        assert_eq!(GPIO_P1_12, 18);
    }
}
