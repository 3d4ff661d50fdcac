use crate::config::{ByteOrder, MachineConfig};
use crate::errors::AddressError;

/// Flat, byte-addressable memory covering `[base, base + size)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Memory {
    base: u32,
    bytes: Vec<u8>,
    order: ByteOrder,
}

impl Memory {
    pub fn new(base: u32, size: usize, order: ByteOrder) -> Self {
        Self {
            base,
            bytes: vec![0; size],
            order,
        }
    }

    pub fn from_config(config: &MachineConfig) -> Self {
        Self::new(config.memory_base, config.memory_size, config.byte_order)
    }

    pub fn base(&self) -> u32 {
        self.base
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    /// Offset of the word at `address`, after alignment and bounds checks.
    fn word_offset(&self, address: u32) -> Result<usize, AddressError> {
        if address % 4 != 0 {
            return Err(AddressError::Misaligned(address));
        }
        let off = address
            .checked_sub(self.base)
            .ok_or(AddressError::OutOfRange(address))? as usize;
        match off.checked_add(4) {
            Some(end) if end <= self.bytes.len() => Ok(off),
            _ => Err(AddressError::OutOfRange(address)),
        }
    }

    pub fn word(&self, address: u32) -> Result<i32, AddressError> {
        let off = self.word_offset(address)?;
        let mut raw = [0u8; 4];
        raw.copy_from_slice(&self.bytes[off..off + 4]);
        Ok(match self.order {
            ByteOrder::Little => i32::from_le_bytes(raw),
            ByteOrder::Big => i32::from_be_bytes(raw),
        })
    }

    pub fn set_word(&mut self, address: u32, value: i32) -> Result<(), AddressError> {
        let off = self.word_offset(address)?;
        let raw = match self.order {
            ByteOrder::Little => value.to_le_bytes(),
            ByteOrder::Big => value.to_be_bytes(),
        };
        self.bytes[off..off + 4].copy_from_slice(&raw);
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn byte(&self, address: u32) -> Result<u8, AddressError> {
        address
            .checked_sub(self.base)
            .and_then(|off| self.bytes.get(off as usize).copied())
            .ok_or(AddressError::OutOfRange(address))
    }

    pub fn clear(&mut self) {
        self.bytes.fill(0);
    }
}
