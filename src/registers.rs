use crate::config::ZeroRegister;
use crate::errors::RegisterError;

pub const REGISTER_COUNT: usize = 32;

/// The 32 general purpose registers, each a two's-complement `i32`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterFile {
    x: [i32; REGISTER_COUNT],
    zero: ZeroRegister,
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new(ZeroRegister::default())
    }
}

impl RegisterFile {
    pub fn new(zero: ZeroRegister) -> Self {
        Self { x: [0; REGISTER_COUNT], zero }
    }

    #[inline]
    fn slot(reg: i32) -> Result<usize, RegisterError> {
        usize::try_from(reg)
            .ok()
            .filter(|&i| i < REGISTER_COUNT)
            .ok_or(RegisterError(reg))
    }

    pub fn value(&self, reg: i32) -> Result<i32, RegisterError> {
        Ok(self.x[Self::slot(reg)?])
    }

    pub fn update_register(&mut self, reg: i32, value: i32) -> Result<(), RegisterError> {
        let i = Self::slot(reg)?;
        if i == 0 && self.zero == ZeroRegister::Hardwired {
            if value != 0 {
                log::warn!("discarding write of {value} to hardwired register 0");
            }
            return Ok(());
        }
        self.x[i] = value;
        Ok(())
    }

    pub fn reset(&mut self) {
        self.x = [0; REGISTER_COUNT];
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_index_is_rejected() {
        let mut regs = RegisterFile::default();
        assert_eq!(regs.value(32), Err(RegisterError(32)));
        assert_eq!(regs.value(-1), Err(RegisterError(-1)));
        assert_eq!(regs.update_register(40, 1), Err(RegisterError(40)));
    }

    #[test]
    fn hardwired_zero_ignores_writes() {
        let mut regs = RegisterFile::default();
        regs.update_register(0, 99).unwrap();
        assert_eq!(regs.value(0).unwrap(), 0);
    }

    #[test]
    fn writable_zero_keeps_value() {
        let mut regs = RegisterFile::new(ZeroRegister::Writable);
        regs.update_register(0, 99).unwrap();
        assert_eq!(regs.value(0).unwrap(), 99);
    }

    #[test]
    fn reset_clears_everything() {
        let mut regs = RegisterFile::default();
        regs.update_register(31, -5).unwrap();
        regs.reset();
        assert!(regs.as_slice().iter().all(|&v| v == 0));
    }
}
