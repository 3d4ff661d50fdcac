//! Execution core for the Rust Assembly instruction set: a register file and
//! checked memory, a catalog of fixed-width instruction templates, and an
//! executor that runs decoded instructions against that state.

pub mod arch;
pub mod catalog;
pub mod config;
pub mod encoder;
pub mod errors;
pub mod exec;
pub mod instruction;
pub mod memory;
pub mod registers;
pub mod template;

pub use arch::Machine;
pub use catalog::{Catalog, InstructionDescriptor};
pub use config::MachineConfig;
pub use errors::{AddressError, CatalogError, ExecError, RegisterError};
pub use exec::{execute, run_program, Statement};
pub use instruction::{Flow, Format, InstructionKind};
