//! Word access to the GPIO register block.
//!
//! Everything above this module talks to the hardware through
//! [Registers], a bounds-checked accessor addressed by byte offset from
//! the start of the GPIO block. The real implementation is [Window], a
//! mapping of physical memory. [Simulated] stands in for the hardware
//! in tests.

use crate::pac::map;

mod window;
pub use window::*;

mod sim;
pub use sim::*;

/// Read and write 32-bit register words by byte offset.
///
/// Offsets must be word aligned and inside the GPIO block
/// ([map::BLOCK_SIZE]). Implementations panic otherwise, see
/// [check_offset].
pub trait Registers {
    /// Read the register word at `offset`.
    fn read(&self, offset: usize) -> u32;

    /// Write `value` to the register word at `offset`.
    fn write(&self, offset: usize, value: u32);

    /// Read, modify, and write back the register word at `offset`.
    ///
    /// This is not atomic. Two writers modifying the same word at the
    /// same time can lose an update.
    #[inline(always)]
    fn modify(&self, offset: usize, f: impl FnOnce(u32) -> u32) {
        let value = self.read(offset);
        self.write(offset, f(value));
    }
}

impl<R> Registers for &R
where
    R: Registers,
{
    #[inline(always)]
    fn read(&self, offset: usize) -> u32 {
        (**self).read(offset)
    }

    #[inline(always)]
    fn write(&self, offset: usize, value: u32) {
        (**self).write(offset, value)
    }
}

/// Panic unless `offset` names a whole register word inside the GPIO
/// block. Returns the word index.
#[inline(always)]
pub fn check_offset(offset: usize) -> usize {
    assert!(
        offset % map::WORD == 0 && offset + map::WORD <= map::BLOCK_SIZE,
        "GPIO register offset {:#x} outside block",
        offset
    );
    offset / map::WORD
}

#[cfg(test)]
pub(crate) mod test {
    use super::*;

    /// A scratch file the size of the GPIO block, standing in for
    /// `/dev/gpiomem`.
    pub(crate) fn scratch_block(name: &str) -> std::fs::File {
        let path = std::env::temp_dir().join(format!(
            "bcm2835-hal-{}-{}",
            name,
            std::process::id()
        ));
        let file = std::fs::File::options()
            .read(true)
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)
            .unwrap();
        file.set_len(map::BLOCK_SIZE as u64).unwrap();
        std::fs::remove_file(&path).unwrap();
        file
    }

    #[test]
    fn check_offset_accepts_registers() {
        assert_eq!(check_offset(map::GPFSEL0), 0);
        assert_eq!(check_offset(map::GPPUDCLK1), map::GPPUDCLK1 / 4);
        assert_eq!(check_offset(map::BLOCK_SIZE - 4), 1023);
    }

    #[test]
    #[should_panic]
    fn check_offset_rejects_misaligned() {
        check_offset(map::GPSET0 + 1);
    }

    #[test]
    #[should_panic]
    fn check_offset_rejects_past_end() {
        check_offset(map::BLOCK_SIZE);
    }
}
