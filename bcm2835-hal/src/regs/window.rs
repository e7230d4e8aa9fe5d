use std::os::fd::{AsRawFd, BorrowedFd};
use std::ptr::NonNull;

use crate::config::Config;
use crate::error::MapError;
use crate::pac::map;

use super::{check_offset, Registers};

/// The GPIO register block, mapped into this process.
///
/// Created from a descriptor for `/dev/mem` or `/dev/gpiomem`. All
/// accesses are volatile and bounds-checked against the block size.
#[derive(Debug)]
pub struct Window {
    base: NonNull<u32>,
    offset: usize,
}

// safety: the mapping is plain memory shared with the hardware, valid
// until drop, and every access is a single volatile word read or write
unsafe impl Send for Window {}
unsafe impl Sync for Window {}

impl Window {
    /// Map the GPIO block found at `config`'s offset in `fd`.
    ///
    /// There is no fallback if this fails. Without the mapping there is
    /// no direct register access at all.
    pub fn map(fd: BorrowedFd<'_>, config: &Config) -> Result<Self, MapError> {
        let offset = config.get_offset();
        let file_offset = libc::off_t::try_from(offset).map_err(|_| {
            MapError::new(
                offset,
                std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    "offset does not fit in off_t",
                ),
            )
        })?;

        // safety: we ask for a fresh mapping at an address of the
        // kernel's choosing, so no existing memory is affected
        let ptr = unsafe {
            libc::mmap(
                core::ptr::null_mut(),
                map::BLOCK_SIZE,
                libc::PROT_READ | libc::PROT_WRITE,
                libc::MAP_SHARED,
                fd.as_raw_fd(),
                file_offset,
            )
        };

        if ptr == libc::MAP_FAILED {
            let err = std::io::Error::last_os_error();
            #[cfg(feature = "defmt")]
            defmt::error!("failed to map GPIO block at {=usize:#x}", offset);
            return Err(MapError::new(offset, err));
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("mapped GPIO block at {=usize:#x}", offset);

        // mmap never returns null on success
        let base = NonNull::new(ptr.cast::<u32>())
            .ok_or_else(|| MapError::new(offset, std::io::ErrorKind::Other.into()))?;
        Ok(Self { base, offset })
    }

    /// Offset in the mapped file where the block starts.
    #[inline(always)]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Base address of the mapping in this process.
    #[inline(always)]
    pub fn as_ptr(&self) -> *const u32 {
        self.base.as_ptr()
    }

    #[inline(always)]
    fn word(&self, offset: usize) -> *mut u32 {
        let index = check_offset(offset);
        // safety: check_offset keeps index inside the mapped block
        unsafe { self.base.as_ptr().add(index) }
    }
}

impl Registers for Window {
    #[inline(always)]
    fn read(&self, offset: usize) -> u32 {
        // safety: word() is in bounds and aligned
        unsafe { self.word(offset).read_volatile() }
    }

    #[inline(always)]
    fn write(&self, offset: usize, value: u32) {
        // safety: word() is in bounds and aligned
        unsafe { self.word(offset).write_volatile(value) }
    }
}

impl Drop for Window {
    fn drop(&mut self) {
        // safety: base came from mmap with this length, and we are the
        // only owner
        unsafe {
            libc::munmap(self.base.as_ptr().cast(), map::BLOCK_SIZE);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use std::io::{Read, Seek, SeekFrom};
    use std::os::fd::AsFd;

    use crate::regs::test::scratch_block;

    #[test]
    fn writes_reach_the_file() {
        let mut file = scratch_block("window-write");
        let window = Window::map(file.as_fd(), &Config::gpiomem()).unwrap();

        window.write(map::GPFSEL2, 0x1234_5678);
        assert_eq!(window.read(map::GPFSEL2), 0x1234_5678);
        drop(window);

        let mut word = [0u8; 4];
        file.seek(SeekFrom::Start(map::GPFSEL2 as u64)).unwrap();
        file.read_exact(&mut word).unwrap();
        assert_eq!(u32::from_ne_bytes(word), 0x1234_5678);
    }

    #[test]
    fn modify_keeps_other_bits() {
        let file = scratch_block("window-modify");
        let window = Window::map(file.as_fd(), &Config::gpiomem()).unwrap();

        window.write(map::GPPUD, 0xf0);
        window.modify(map::GPPUD, |w| w | 0b01);
        assert_eq!(window.read(map::GPPUD), 0xf1);
    }

    #[test]
    fn unaligned_offset_fails() {
        let file = scratch_block("window-unaligned");
        let err = Window::map(file.as_fd(), &Config::gpiomem().offset(3)).unwrap_err();
        assert_eq!(err.offset(), 3);
    }

    #[test]
    #[should_panic]
    fn out_of_block_panics() {
        let file = scratch_block("window-oob");
        let window = Window::map(file.as_fd(), &Config::gpiomem()).unwrap();
        window.read(map::BLOCK_SIZE);
    }
}
