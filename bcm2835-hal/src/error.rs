/// The GPIO block could not be mapped into this process.
///
/// Usually this means the process lacks permission to open or map the
/// memory device. There is no way to continue with direct register
/// access after this.
#[derive(Debug)]
// no defmt, io::Error has no Format
pub struct MapError {
    offset: usize,
    error: std::io::Error,
}

impl MapError {
    pub(crate) fn new(offset: usize, error: std::io::Error) -> Self {
        Self { offset, error }
    }

    /// The offset that failed to map.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The underlying OS error.
    pub fn io_error(&self) -> &std::io::Error {
        &self.error
    }
}

impl core::fmt::Display for MapError {
    #[allow(clippy::missing_inline_in_public_items)]
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "unable to map GPIO block at {:#x}: {}",
            self.offset, self.error
        )
    }
}

impl std::error::Error for MapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

/// An error opening a pin with direct register access.
#[derive(Debug)]
pub enum OpenError<E> {
    /// Mapping the GPIO block failed.
    Map(MapError),
    /// The underlying pin could not be opened.
    Pin(E),
}

impl<E> core::fmt::Display for OpenError<E>
where
    E: core::fmt::Debug,
{
    #[allow(clippy::missing_inline_in_public_items)]
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            Self::Map(e) => write!(f, "{}", e),
            Self::Pin(e) => write!(f, "pin error: {:?}", e),
        }
    }
}

impl<E> std::error::Error for OpenError<E>
where
    E: core::fmt::Debug,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Map(e) => Some(e),
            Self::Pin(_) => None,
        }
    }
}

impl<E> From<MapError> for OpenError<E> {
    fn from(other: MapError) -> Self {
        Self::Map(other)
    }
}
