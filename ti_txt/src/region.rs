use std::fmt;

/// Lowest address of the programmable flash space.
pub const FLASH_BASE_ADDRESS: u32 = 0x08_0000;

/// Inclusive address range covered by one record's payload.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct AddressRange {
    pub start: u32,
    pub end: u32,
}

impl AddressRange {
    pub fn new(start: u32, end: u32) -> Self {
        assert!(start <= end, "address range must not end before it starts");
        AddressRange { start, end }
    }

    pub fn size_bytes(&self) -> u64 {
        u64::from(self.end) - u64::from(self.start) + 1
    }

    pub fn contains_addr(&self, addr: u32) -> bool {
        addr >= self.start && addr <= self.end
    }
}

impl fmt::Display for AddressRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:06X} - 0x{:06X}", self.start, self.end)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MemoryRegion {
    Flash,
    NonFlash,
}

impl MemoryRegion {
    /// Classifies an image by its lowest address.
    pub fn classify(min_addr: u32) -> Self {
        if min_addr >= FLASH_BASE_ADDRESS {
            MemoryRegion::Flash
        } else {
            MemoryRegion::NonFlash
        }
    }

    pub fn is_flash(self) -> bool {
        self == MemoryRegion::Flash
    }
}

impl fmt::Display for MemoryRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use MemoryRegion::*;
        match self {
            Flash => write!(f, "flash"),
            NonFlash => write!(f, "non-flash"),
        }
    }
}
