use thiserror::Error;

/// A register index outside the register file.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("invalid register index {0}")]
pub struct RegisterError(pub i32);

/// A checked memory access that could not be performed.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressError {
    /// Word access on an address that is not a multiple of 4.
    #[error("address 0x{0:08x} is not word aligned")]
    Misaligned(u32),

    /// Word access that falls (partly) outside the configured memory extent.
    #[error("address 0x{0:08x} is out of range")]
    OutOfRange(u32),
}

/// Malformed instruction template.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    #[error("template has {0} significant characters, expected 32")]
    Length(usize),

    #[error("unexpected character {0:?} in template")]
    Character(char),

    #[error("field {0:?} is not contiguous")]
    SplitField(char),
}

/// Errors raised while building the instruction catalog.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Two descriptors can match the same concrete instruction word.
    #[error("encoding of {mnemonic} collides with {existing}")]
    DuplicateEncoding {
        mnemonic: &'static str,
        existing: &'static str,
    },

    /// The template does not have one field per operand.
    #[error("{mnemonic} template has {fields} operand fields, expected {arity}")]
    FieldCount {
        mnemonic: &'static str,
        fields: usize,
        arity: usize,
    },

    #[error("bad template for {mnemonic}: {source}")]
    Template {
        mnemonic: &'static str,
        #[source]
        source: TemplateError,
    },
}

/// Errors raised while packing operands into an instruction word.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    #[error("{mnemonic} takes {expected} operands, got {got}")]
    Arity {
        mnemonic: &'static str,
        expected: usize,
        got: usize,
    },
}

/// Failure of a single instruction. No state is mutated when one is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExecError {
    #[error("{mnemonic}: {source}")]
    Register {
        mnemonic: &'static str,
        #[source]
        source: RegisterError,
    },

    /// Memory access failure, with the operands of the failing statement.
    #[error("{mnemonic} {operands:?}: {source}")]
    Address {
        mnemonic: &'static str,
        operands: Vec<i32>,
        #[source]
        source: AddressError,
    },

    #[error("{mnemonic} takes {expected} operands, got {got}")]
    Arity {
        mnemonic: &'static str,
        expected: usize,
        got: usize,
    },
}

impl ExecError {
    /// Mnemonic of the instruction that failed.
    pub fn mnemonic(&self) -> &'static str {
        match self {
            ExecError::Register { mnemonic, .. }
            | ExecError::Address { mnemonic, .. }
            | ExecError::Arity { mnemonic, .. } => mnemonic,
        }
    }
}
