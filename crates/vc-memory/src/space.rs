//! Bounded, checked views over host memory
//!
//! The client never does raw pointer arithmetic over the host address
//! space. Everything goes through [`AddressSpace`], whose reads are
//! bounds-checked and fail soft; an address outside the view is a `None`,
//! not a fault.

/// A byte-addressable view of host memory.
///
/// Word reads decode in host order (the CafeOS host is big-endian), which
/// matches how the emulator cores lay their signatures out in memory.
pub trait AddressSpace: Send + Sync {
    /// Read a host-order u32 at `addr`, or `None` if any byte is outside
    /// the view.
    fn read_u32(&self, addr: u64) -> Option<u32>;

    /// Fill `buf` from `addr`. Returns false (leaving `buf` unspecified)
    /// if the range is not fully inside the view.
    fn read_bytes(&self, addr: u64, buf: &mut [u8]) -> bool;
}

/// An [`AddressSpace`] backed by an owned byte buffer mapped at a fixed
/// base address. Used by the simulator harness and by tests; a real host
/// binding implements the trait over its own mapping.
pub struct SliceSpace {
    base: u64,
    bytes: Vec<u8>,
}

impl SliceSpace {
    pub fn new(base: u64, bytes: Vec<u8>) -> Self {
        Self { base, bytes }
    }

    /// A zero-filled view of `len` bytes at `base`.
    pub fn zeroed(base: u64, len: usize) -> Self {
        Self::new(base, vec![0; len])
    }

    pub fn base(&self) -> u64 {
        self.base
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    fn offset(&self, addr: u64, len: usize) -> Option<usize> {
        let start = addr.checked_sub(self.base)? as usize;
        let end = start.checked_add(len)?;
        if end <= self.bytes.len() {
            Some(start)
        } else {
            None
        }
    }

    /// Write a host-order u32 into the view. Panics if out of range; the
    /// simulator seeds views it sized itself.
    pub fn put_u32(&mut self, addr: u64, value: u32) {
        let off = self
            .offset(addr, 4)
            .expect("put_u32 outside simulated view");
        self.bytes[off..off + 4].copy_from_slice(&value.to_be_bytes());
    }

    /// Copy raw bytes into the view. Panics if out of range.
    pub fn put_bytes(&mut self, addr: u64, data: &[u8]) {
        let off = self
            .offset(addr, data.len())
            .expect("put_bytes outside simulated view");
        self.bytes[off..off + data.len()].copy_from_slice(data);
    }
}

impl AddressSpace for SliceSpace {
    fn read_u32(&self, addr: u64) -> Option<u32> {
        let off = self.offset(addr, 4)?;
        let raw: [u8; 4] = self.bytes[off..off + 4].try_into().ok()?;
        Some(u32::from_be_bytes(raw))
    }

    fn read_bytes(&self, addr: u64, buf: &mut [u8]) -> bool {
        match self.offset(addr, buf.len()) {
            Some(off) => {
                buf.copy_from_slice(&self.bytes[off..off + buf.len()]);
                true
            }
            None => false,
        }
    }
}
