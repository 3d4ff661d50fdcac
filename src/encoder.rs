// rustasm/encoder.rs
use crate::catalog::InstructionDescriptor;
use crate::errors::EncodeError;

/// Packs `operands` into `desc`'s template. Operand `i` goes into the field
/// lettered `f`, `s`, `t` for `i` = 0, 1, 2 and is truncated to the field width.
pub fn encode(desc: &InstructionDescriptor, operands: &[i32]) -> Result<u32, EncodeError> {
    let expected = desc.kind.arity();
    if operands.len() != expected {
        return Err(EncodeError::Arity {
            mnemonic: desc.mnemonic,
            expected,
            got: operands.len(),
        });
    }
    let mut word = desc.template.value;
    for (slot, &op) in operands.iter().enumerate() {
        if let Some(field) = desc.template.field(slot) {
            word |= field.pack(op);
        }
    }
    Ok(word)
}
