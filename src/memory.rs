//! # Memory Bus Abstraction
//!
//! This module provides the `MemoryBus` trait that decouples the CPU from
//! specific memory implementations. This enables flexible memory
//! configurations including:
//!
//! - Flat 64K-word RAM (FlatMemory implementation provided)
//! - Memory-mapped video/character/background regions
//! - Debugging wrappers with write logging
//!
//! ## Design Principles
//!
//! The MemoryBus trait follows DCPU-16 behavior:
//! - No bus errors - reads/writes always succeed
//! - The address space is a ring: a `u16` address can never be out of range
//! - Unwritten cells read as 0x0000
//! - Simple signatures so a host can wrap one bus in another

/// Memory bus trait for CPU to read/write 16-bit words.
///
/// Implementations of this trait provide the memory backend for the CPU.
/// The CPU accesses all memory (program words, data, stack) through this
/// abstraction.
///
/// # Design
///
/// - `read(&self)`: Immutable reference allows shared reads
/// - `write(&mut self)`: Mutable reference makes side effects explicit
/// - No error types: the DCPU-16 has no bus fault mechanism; every `u16`
///   address is valid by construction
///
/// # Examples
///
/// ```
/// use dcpu16::{MemoryBus, FlatMemory};
///
/// let mut mem = FlatMemory::new();
///
/// // Write a word
/// mem.write(0x1234, 0xBEEF);
///
/// // Read it back
/// assert_eq!(mem.read(0x1234), 0xBEEF);
/// ```
///
/// ## Observing Writes from Outside the Core
///
/// The core has no knowledge of which addresses are "special" (video RAM,
/// keyboard ring buffers, and so on). A presentation layer observes them by
/// wrapping a bus in another bus; the CPU only ever sees the `MemoryBus`
/// contract:
///
/// ```
/// use dcpu16::{MemoryBus, FlatMemory};
///
/// struct VramWatcher {
///     inner: FlatMemory,
///     vram_writes: Vec<(u16, u16)>,
/// }
///
/// impl MemoryBus for VramWatcher {
///     fn read(&self, addr: u16) -> u16 {
///         self.inner.read(addr)
///     }
///
///     fn write(&mut self, addr: u16, value: u16) {
///         if (0x8000..0x8180).contains(&addr) {
///             self.vram_writes.push((addr, value));
///         }
///         self.inner.write(addr, value);
///     }
/// }
/// ```
pub trait MemoryBus {
    /// Reads a word from the specified 16-bit address.
    ///
    /// This method must never panic. Cells that have never been written
    /// should read as 0x0000 (matching a freshly powered DCPU-16).
    ///
    /// # Arguments
    ///
    /// * `addr` - 16-bit word address (0x0000-0xFFFF)
    ///
    /// # Returns
    ///
    /// The word value at the specified address
    fn read(&self, addr: u16) -> u16;

    /// Writes a word to the specified 16-bit address.
    ///
    /// This method must never panic. Decorating implementations may observe
    /// or transform the write, but must keep the inward-facing contract
    /// identical so the CPU never depends on the decoration.
    ///
    /// # Arguments
    ///
    /// * `addr` - 16-bit word address (0x0000-0xFFFF)
    /// * `value` - Word value to write
    fn write(&mut self, addr: u16, value: u16);
}

/// Simple 64K-word flat memory implementation.
///
/// This is a straightforward memory implementation where all 65536 addresses
/// (0x0000-0xFFFF) are mapped to a single contiguous RAM array of words.
///
/// Useful for:
/// - Testing and development
/// - Hosts that handle memory-mapped regions by wrapping this in a
///   decorating `MemoryBus`
///
/// # Memory Layout
///
/// All addresses (0x0000-0xFFFF) are writable RAM initialized to 0x0000.
///
/// # Examples
///
/// ```
/// use dcpu16::{Cpu, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
///
/// // Load a word of program at address 0 (where PC starts)
/// memory.write(0x0000, 0x7C01);
///
/// let cpu = Cpu::new(memory);
/// assert_eq!(cpu.pc(), 0x0000);
/// ```
pub struct FlatMemory {
    /// 64K-word contiguous memory array
    data: Box<[u16; 65536]>,
}

impl FlatMemory {
    /// Creates a new FlatMemory instance with all words initialized to zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use dcpu16::{FlatMemory, MemoryBus};
    ///
    /// let mem = FlatMemory::new();
    /// // All memory initially zero
    /// assert_eq!(mem.read(0x0000), 0x0000);
    /// assert_eq!(mem.read(0xFFFF), 0x0000);
    /// ```
    pub fn new() -> Self {
        Self {
            data: Box::new([0; 65536]),
        }
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for FlatMemory {
    fn read(&self, addr: u16) -> u16 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u16) {
        self.data[addr as usize] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_memory_read_write() {
        let mut mem = FlatMemory::new();

        // Initially all zeros
        assert_eq!(mem.read(0x0000), 0x0000);
        assert_eq!(mem.read(0xFFFF), 0x0000);

        // Write and read back
        mem.write(0x1234, 0xBEEF);
        assert_eq!(mem.read(0x1234), 0xBEEF);

        // Verify other addresses unchanged
        assert_eq!(mem.read(0x1233), 0x0000);
        assert_eq!(mem.read(0x1235), 0x0000);
    }

    #[test]
    fn test_flat_memory_full_range() {
        let mut mem = FlatMemory::new();

        // Test boundary addresses
        mem.write(0x0000, 0x0001);
        mem.write(0x7FFF, 0x7FFF);
        mem.write(0x8000, 0x8000);
        mem.write(0xFFFF, 0xFFFF);

        assert_eq!(mem.read(0x0000), 0x0001);
        assert_eq!(mem.read(0x7FFF), 0x7FFF);
        assert_eq!(mem.read(0x8000), 0x8000);
        assert_eq!(mem.read(0xFFFF), 0xFFFF);
    }
}
