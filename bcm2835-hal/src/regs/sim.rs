use crate::pac::{map, Group, Pull};

use super::{check_offset, Registers};

/// A single register write, as recorded by [Simulated].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WriteRecord {
    /// Byte offset of the register written.
    pub offset: usize,
    /// The value written.
    pub value: u32,
}

/// A software model of the GPIO block, for running without hardware.
///
/// Models the parts of the hardware the register operations rely on:
///  * writing a 1 to a set or clear bit changes the matching level bit,
///    and both registers read back as 0,
///  * the level registers ignore writes,
///  * a rising bit in a pull clock register latches the current GPPUD
///    code into that pin's pull state.
///
/// Every write is recorded, in order.
#[derive(Debug)]
pub struct Simulated {
    state: spin::Mutex<SimState>,
}

#[derive(Debug)]
struct SimState {
    words: [u32; map::BLOCK_SIZE / map::WORD],
    pulls: [Pull; map::PIN_COUNT],
    writes: Vec<WriteRecord>,
}

impl Default for Simulated {
    fn default() -> Self {
        Self::new()
    }
}

impl Simulated {
    /// A block with every register zero and every pull off.
    pub fn new() -> Self {
        Self {
            state: spin::Mutex::new(SimState {
                words: [0; map::BLOCK_SIZE / map::WORD],
                pulls: [Pull::Off; map::PIN_COUNT],
                writes: Vec::new(),
            }),
        }
    }

    /// Drive the level of `pin` from outside, as an external circuit
    /// would on an input.
    pub fn drive(&self, pin: u8, high: bool) {
        let loc = Group::Level.locate(pin);
        let mut state = self.state.lock();
        let word = &mut state.words[check_offset(loc.offset())];
        if high {
            *word |= loc.bit();
        } else {
            *word &= !loc.bit();
        }
    }

    /// The pull state latched into `pin`.
    pub fn pull(&self, pin: u8) -> Pull {
        self.state.lock().pulls[pin as usize]
    }

    /// Every write so far, oldest first.
    pub fn writes(&self) -> Vec<WriteRecord> {
        self.state.lock().writes.clone()
    }

    /// Forget recorded writes. Register contents are kept.
    pub fn clear_writes(&self) {
        self.state.lock().writes.clear();
    }

    /// Raw contents of a register, bypassing the read-side model.
    pub fn peek(&self, offset: usize) -> u32 {
        self.state.lock().words[check_offset(offset)]
    }
}

impl Registers for Simulated {
    fn read(&self, offset: usize) -> u32 {
        let index = check_offset(offset);
        if map::SET_BANKS.contains(&offset) || map::CLR_BANKS.contains(&offset) {
            // write-only
            return 0;
        }
        self.state.lock().words[index]
    }

    fn write(&self, offset: usize, value: u32) {
        let index = check_offset(offset);
        let mut state = self.state.lock();
        state.writes.push(WriteRecord { offset, value });

        if let Some(bank) = map::SET_BANKS.iter().position(|&o| o == offset) {
            state.words[map::LEV_BANKS[bank] / map::WORD] |= value;
        } else if let Some(bank) = map::CLR_BANKS.iter().position(|&o| o == offset) {
            state.words[map::LEV_BANKS[bank] / map::WORD] &= !value;
        } else if map::LEV_BANKS.contains(&offset) {
            // read only
        } else if let Some(bank) = map::PUDCLK_BANKS.iter().position(|&o| o == offset) {
            let rising = value & !state.words[index];
            let code = state.words[map::GPPUD / map::WORD] & map::GPPUD_MASK;
            // the reserved code 0b11 leaves the pin alone
            if let Some(pull) = Pull::from_bits(code) {
                for bit in 0..32 {
                    let pin = bank * 32 + bit;
                    if rising & (1 << bit) != 0 && pin < map::PIN_COUNT {
                        state.pulls[pin] = pull;
                    }
                }
            }
            state.words[index] = value;
        } else {
            state.words[index] = value;
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn set_and_clear_drive_level() {
        let sim = Simulated::new();
        sim.write(map::GPSET1, 1 << 3);
        assert_eq!(sim.read(map::GPLEV1), 1 << 3);
        assert_eq!(sim.read(map::GPSET1), 0);
        sim.write(map::GPCLR1, 1 << 3);
        assert_eq!(sim.read(map::GPLEV1), 0);
    }

    #[test]
    fn level_ignores_writes() {
        let sim = Simulated::new();
        sim.drive(4, true);
        sim.write(map::GPLEV0, 0);
        assert_eq!(sim.read(map::GPLEV0), 1 << 4);
        assert_eq!(sim.writes().len(), 1);
    }

    #[test]
    fn clock_latches_only_on_rising_bits() {
        let sim = Simulated::new();
        sim.write(map::GPPUD, Pull::Up.bits());
        sim.write(map::GPPUDCLK1, 1 << 2);
        assert_eq!(sim.pull(34), Pull::Up);

        // held high, changing the code does nothing until it rises again
        sim.write(map::GPPUD, Pull::Down.bits());
        sim.write(map::GPPUDCLK1, 1 << 2);
        assert_eq!(sim.pull(34), Pull::Up);

        sim.write(map::GPPUDCLK1, 0);
        sim.write(map::GPPUDCLK1, 1 << 2);
        assert_eq!(sim.pull(34), Pull::Down);
        assert_eq!(sim.pull(2), Pull::Off);
    }
}
