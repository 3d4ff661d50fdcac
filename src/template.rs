//! Fixed-width instruction templates such as `000000 sssss ttttt fffff 00000 000001`.
//!
//! `0`/`1` are literal bits. `f`, `s` and `t` mark the fields that carry the
//! first, second and third decoded operand. Whitespace is ignored.

use crate::errors::TemplateError;

/// Operand letters, indexed by operand position.
pub const OPERAND_LETTERS: [char; 3] = ['f', 's', 't'];

/// A contiguous operand field inside a 32-bit word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub lo: u8,
    pub width: u8,
}

impl Field {
    #[inline]
    pub fn mask(self) -> u32 {
        if self.width >= 32 { u32::MAX } else { (1u32 << self.width) - 1 }
    }

    /// Places `operand` in the field, keeping only its low `width` bits.
    #[inline]
    pub fn pack(self, operand: i32) -> u32 {
        ((operand as u32) & self.mask()) << self.lo
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    /// Bits fixed by the template.
    pub mask: u32,
    /// Values of the fixed bits.
    pub value: u32,
    fields: [Option<Field>; 3],
}

impl Template {
    pub fn parse(text: &str) -> Result<Self, TemplateError> {
        let bits: Vec<char> = text.chars().filter(|c| !c.is_whitespace()).collect();
        if bits.len() != 32 {
            return Err(TemplateError::Length(bits.len()));
        }

        let mut mask = 0u32;
        let mut value = 0u32;
        // (highest bit, lowest bit, count) per letter
        let mut spans: [Option<(u8, u8, u8)>; 3] = [None; 3];

        for (i, &c) in bits.iter().enumerate() {
            let bit = 31 - i as u8;
            match c {
                '0' => mask |= 1 << bit,
                '1' => {
                    mask |= 1 << bit;
                    value |= 1 << bit;
                }
                _ => {
                    let slot = OPERAND_LETTERS
                        .iter()
                        .position(|&l| l == c)
                        .ok_or(TemplateError::Character(c))?;
                    spans[slot] = Some(match spans[slot] {
                        None => (bit, bit, 1),
                        Some((hi, _, n)) => (hi, bit, n + 1),
                    });
                }
            }
        }

        let mut fields = [None; 3];
        for (slot, span) in spans.iter().enumerate() {
            if let Some((hi, lo, n)) = *span {
                if hi - lo + 1 != n {
                    return Err(TemplateError::SplitField(OPERAND_LETTERS[slot]));
                }
                fields[slot] = Some(Field { lo, width: n });
            }
        }

        Ok(Template { mask, value, fields })
    }

    /// Field carrying operand `slot` (0 = `f`, 1 = `s`, 2 = `t`).
    pub fn field(&self, slot: usize) -> Option<Field> {
        self.fields.get(slot).copied().flatten()
    }

    pub fn field_count(&self) -> usize {
        self.fields.iter().flatten().count()
    }

    #[inline]
    pub fn matches(&self, word: u32) -> bool {
        word & self.mask == self.value
    }

    /// True when some word would match both templates, i.e. the literal bits
    /// agree on every position both of them fix.
    pub fn overlaps(&self, other: &Template) -> bool {
        (self.value ^ other.value) & self.mask & other.mask == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_r_format() {
        let t = Template::parse("000000 sssss ttttt fffff 00000 000001").unwrap();
        assert_eq!(t.mask, 0xFC00_07FF);
        assert_eq!(t.value, 0x0000_0001);
        assert_eq!(t.field(0), Some(Field { lo: 11, width: 5 }));
        assert_eq!(t.field(1), Some(Field { lo: 21, width: 5 }));
        assert_eq!(t.field(2), Some(Field { lo: 16, width: 5 }));
    }

    #[test]
    fn parses_i_format_immediate() {
        let t = Template::parse("000001 sssss fffff tttttttttttttttt").unwrap();
        assert_eq!(t.mask, 0xFC00_0000);
        assert_eq!(t.value, 0x0400_0000);
        assert_eq!(t.field(2), Some(Field { lo: 0, width: 16 }));
        assert_eq!(t.field_count(), 3);
    }

    #[test]
    fn rejects_malformed_templates() {
        assert_eq!(Template::parse("0101"), Err(TemplateError::Length(4)));
        assert_eq!(
            Template::parse("000000 sssss ttttt fffff 00000 00000x"),
            Err(TemplateError::Character('x'))
        );
        assert_eq!(
            Template::parse("000000 sssss ttttt fffff 00000 0000ss"),
            Err(TemplateError::SplitField('s'))
        );
    }

    #[test]
    fn overlap_needs_agreement_on_shared_fixed_bits() {
        let add = Template::parse("000000 sssss ttttt fffff 00000 000001").unwrap();
        let sub = Template::parse("000000 sssss ttttt fffff 00000 000010").unwrap();
        let wide = Template::parse("000000 ssssssssssssssssssssssssss").unwrap();
        assert!(!add.overlaps(&sub));
        assert!(add.overlaps(&wide));
        assert!(wide.overlaps(&sub));
    }

    #[test]
    fn pack_truncates_to_width() {
        let f = Field { lo: 16, width: 5 };
        assert_eq!(f.pack(0x3F), 0x1F << 16);
        assert_eq!(f.pack(-1), 0x1F << 16);
    }
}
