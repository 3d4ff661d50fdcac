// rustasm/exec/mod.rs
use crate::arch::Machine;
use crate::catalog::InstructionDescriptor;
use crate::errors::{AddressError, ExecError, RegisterError};
use crate::instruction::{Flow, InstructionKind};


/// Widens the low 16 bits of `v` to 32 bits, replicating bit 15.
#[inline]
pub fn sext16(v: i32) -> i32 {
    v as u16 as i16 as i32
}

/// Primality of `n` read as a signed value. Nothing at or below 1 is prime.
pub fn is_prime(n: i32) -> bool {
    if n <= 1 {
        return false;
    }
    if n == 2 || n == 3 {
        return true;
    }
    if n & 1 == 0 {
        return false;
    }
    (3..=n.isqrt()).step_by(2).all(|i| n % i != 0)
}

/// State access for one executing instruction, tagging failures with its mnemonic.
struct Exec<'a> {
    mnemonic: &'static str,
    operands: &'a [i32],
    m: &'a mut Machine,
}

impl Exec<'_> {
    fn reg_err(&self, source: RegisterError) -> ExecError {
        ExecError::Register { mnemonic: self.mnemonic, source }
    }

    fn mem_err(&self, source: AddressError) -> ExecError {
        ExecError::Address {
            mnemonic: self.mnemonic,
            operands: self.operands.to_vec(),
            source,
        }
    }

    #[inline]
    fn read(&self, reg: i32) -> Result<i32, ExecError> {
        self.m.registers.value(reg).map_err(|e| self.reg_err(e))
    }

    #[inline]
    fn write(&mut self, reg: i32, value: i32) -> Result<(), ExecError> {
        self.m
            .registers
            .update_register(reg, value)
            .map_err(|e| self.reg_err(e))
    }

    /// `reg[base] + sext16(offset)`, wrapping.
    fn address(&self, base: i32, offset: i32) -> Result<u32, ExecError> {
        Ok(self.read(base)?.wrapping_add(sext16(offset)) as u32)
    }

    fn load(&self, address: u32) -> Result<i32, ExecError> {
        self.m.memory.word(address).map_err(|e| self.mem_err(e))
    }

    fn store(&mut self, address: u32, value: i32) -> Result<(), ExecError> {
        self.m
            .memory
            .set_word(address, value)
            .map_err(|e| self.mem_err(e))
    }
}

/// Runs one instruction against `m`.
///
/// `operands` are the decoded operands in the order the descriptor's kind
/// expects (see [`InstructionKind`]). Every read, including the load of
/// LD/LOADED, happens before the single write, so a failing instruction
/// leaves the machine untouched.
pub fn execute(
    desc: &InstructionDescriptor,
    operands: &[i32],
    m: &mut Machine,
) -> Result<Flow, ExecError> {
    let expected = desc.kind.arity();
    if operands.len() != expected {
        return Err(ExecError::Arity {
            mnemonic: desc.mnemonic,
            expected,
            got: operands.len(),
        });
    }
    log::trace!("{} {:?}", desc.mnemonic, operands);

    let op = operands;
    let mut x = Exec { mnemonic: desc.mnemonic, operands, m };

    use InstructionKind::*;
    match desc.kind {
        // R
        Add => { let v = x.read(op[1])?.wrapping_add(x.read(op[2])?); x.write(op[0], v)?; }
        Sub => { let v = x.read(op[1])?.wrapping_sub(x.read(op[2])?); x.write(op[0], v)?; }
        And => { let v = x.read(op[1])? & x.read(op[2])?; x.write(op[0], v)?; }
        Or  => { let v = x.read(op[1])? | x.read(op[2])?; x.write(op[0], v)?; }
        Xor => { let v = x.read(op[1])? ^ x.read(op[2])?; x.write(op[0], v)?; }
        Tripled => { let v = x.read(op[1])?.wrapping_mul(3); x.write(op[0], v)?; }
        Deep    => { let v = x.read(op[1])?.reverse_bits(); x.write(op[0], v)?; }
        Prim    => { let v = is_prime(x.read(op[1])?) as i32; x.write(op[0], v)?; }

        // I
        Addi => {
            let v = x.read(op[1])?.wrapping_add(sext16(op[2]));
            x.write(op[0], v)?;
        }
        Grub => x.write(op[0], op[1] & 0xFF)?,
        Ld => {
            let a = x.address(op[1], op[2])?;
            let w = x.load(a)?;
            x.write(op[0], w)?;
        }
        Loaded => {
            let a = x.address(op[1], op[2])?;
            let w = (x.load(a)? as u32 | 0x8000_0000) as i32;
            x.write(op[0], w)?;
        }
        St => {
            let v = x.read(op[0])?;
            let a = x.address(op[1], op[2])?;
            x.store(a, v)?;
        }

        // branch
        Beq => {
            if x.read(op[0])? == x.read(op[1])? {
                log::debug!("BEQ taken, target {}", op[2]);
                return Ok(Flow::Branch(op[2]));
            }
        }
    }
    Ok(Flow::Next)
}

/// One decoded instruction of a straight-line program.
#[derive(Debug, Clone)]
pub struct Statement<'c> {
    pub desc: &'c InstructionDescriptor,
    pub operands: Vec<i32>,
}

impl<'c> Statement<'c> {
    pub fn new(desc: &'c InstructionDescriptor, operands: &[i32]) -> Self {
        Self { desc, operands: operands.to_vec() }
    }
}

/// Executes `program` from its first statement until it falls off either end
/// or `max_steps` instructions have run. A branch target is a statement count
/// relative to the statement after the branch. Returns the number of steps.
pub fn run_program(
    program: &[Statement<'_>],
    m: &mut Machine,
    max_steps: usize,
) -> Result<usize, ExecError> {
    let mut pc = 0usize;
    let mut steps = 0;
    while steps < max_steps {
        let Some(st) = program.get(pc) else { break };
        let next = pc as i64 + 1;
        let target = match execute(st.desc, &st.operands, m)? {
            Flow::Next => next,
            Flow::Branch(off) => next + off as i64,
        };
        steps += 1;
        match usize::try_from(target) {
            Ok(t) => pc = t,
            Err(_) => break,
        }
    }
    Ok(steps)
}
