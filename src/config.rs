/// Base address of the data segment in the host simulator's memory map.
pub const DEFAULT_MEMORY_BASE: u32 = 0x1001_0000;
pub const DEFAULT_MEMORY_SIZE: usize = 4096;

/// What happens to writes targeting register 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZeroRegister {
    /// Register 0 always reads as zero; writes are discarded.
    #[default]
    Hardwired,
    /// Register 0 behaves like every other register.
    Writable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ByteOrder {
    #[default]
    Little,
    Big,
}

/// Shape of a simulated machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MachineConfig {
    pub zero_register: ZeroRegister,
    pub memory_base: u32,
    pub memory_size: usize,
    pub byte_order: ByteOrder,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            zero_register: ZeroRegister::default(),
            memory_base: DEFAULT_MEMORY_BASE,
            memory_size: DEFAULT_MEMORY_SIZE,
            byte_order: ByteOrder::default(),
        }
    }
}

impl MachineConfig {
    pub fn with_zero_register(mut self, policy: ZeroRegister) -> Self {
        self.zero_register = policy;
        self
    }

    pub fn with_memory(mut self, base: u32, size: usize) -> Self {
        self.memory_base = base;
        self.memory_size = size;
        self
    }

    pub fn with_byte_order(mut self, order: ByteOrder) -> Self {
        self.byte_order = order;
        self
    }
}
