use crate::config::MachineConfig;
use crate::errors::AddressError;
use crate::memory::Memory;
use crate::registers::RegisterFile;

/// Architectural state of one simulated machine: the register file and memory.
///
/// Every instruction receives the machine by `&mut`, so one instruction owns the
/// whole state for the duration of its execution.
#[derive(Debug, Clone)]
pub struct Machine {
    pub registers: RegisterFile,
    pub memory: Memory,
}

impl Default for Machine {
    fn default() -> Self {
        Self::new(MachineConfig::default())
    }
}

impl Machine {
    pub fn new(config: MachineConfig) -> Self {
        Machine {
            registers: RegisterFile::new(config.zero_register),
            memory: Memory::from_config(&config),
        }
    }

    /// Clears registers and memory, as done before loading a program.
    pub fn reset(&mut self) {
        self.registers.reset();
        self.memory.clear();
    }

    /// Stores `words` contiguously starting at `base`.
    pub fn load_words(&mut self, base: u32, words: &[i32]) -> Result<(), AddressError> {
        let mut addr = base;
        for &w in words {
            self.memory.set_word(addr, w)?;
            addr = addr.wrapping_add(4);
        }
        log::debug!("loaded {} words at 0x{base:08x}", words.len());
        Ok(())
    }
}
