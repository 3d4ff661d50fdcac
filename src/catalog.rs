//! The instruction catalog: descriptors binding a mnemonic, a template and the
//! [`InstructionKind`] the executor dispatches on.

use crate::errors::CatalogError;
use crate::instruction::{Format, InstructionKind};
use crate::template::Template;

/// Static description of one instruction. Immutable once registered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstructionDescriptor {
    pub kind: InstructionKind,
    pub mnemonic: &'static str,
    /// Example line, e.g. `ADD $t0,$t1,$t2`.
    pub usage: &'static str,
    pub description: &'static str,
    pub format: Format,
    /// Template text exactly as given, spaces included.
    pub encoding: &'static str,
    pub template: Template,
}

impl InstructionDescriptor {
    pub fn new(
        kind: InstructionKind,
        mnemonic: &'static str,
        usage: &'static str,
        description: &'static str,
        format: Format,
        encoding: &'static str,
    ) -> Result<Self, CatalogError> {
        let template = Template::parse(encoding)
            .map_err(|source| CatalogError::Template { mnemonic, source })?;
        if template.field_count() != kind.arity() {
            return Err(CatalogError::FieldCount {
                mnemonic,
                fields: template.field_count(),
                arity: kind.arity(),
            });
        }
        Ok(Self {
            kind,
            mnemonic,
            usage,
            description,
            format,
            encoding,
            template,
        })
    }
}

type Row = (
    InstructionKind,
    &'static str,
    &'static str,
    &'static str,
    Format,
    &'static str,
);

#[rustfmt::skip]
const RUST_ASSEMBLY: [Row; 14] = {
    use Format::*;
    use InstructionKind::*;
    [
        (Add, "ADD", "ADD $t0,$t1,$t2", "Add: rd = rs + rt.", R,
            "000000 sssss ttttt fffff 00000 000001"),
        (Sub, "SUB", "SUB $t0,$t1,$t2", "Subtract: rd = rs - rt.", R,
            "000000 sssss ttttt fffff 00000 000010"),
        (And, "AND", "AND $t0,$t1,$t2", "Bitwise AND: rd = rs & rt.", R,
            "000000 sssss ttttt fffff 00000 000011"),
        (Or, "OR", "OR $t0,$t1,$t2", "Bitwise OR: rd = rs | rt.", R,
            "000000 sssss ttttt fffff 00000 000100"),
        (Xor, "XOR", "XOR $t0,$t1,$t2", "Bitwise XOR: rd = rs ^ rt.", R,
            "000000 sssss ttttt fffff 00000 000101"),
        (Addi, "ADDI", "ADDI $t0,$t1,100", "Add immediate: rt = rs + imm (sign-extended).", I,
            "000001 sssss fffff tttttttttttttttt"),
        (Ld, "LD", "LD $t0,100($t1)", "Load word: rt = MEM[rs + offset].", I,
            "000010 sssss fffff tttttttttttttttt"),
        (St, "ST", "ST $t0,100($t1)", "Store word: MEM[rs + offset] = rt.", I,
            "000011 sssss fffff tttttttttttttttt"),
        (Beq, "BEQ", "BEQ $t0,$t1,100", "Branch if equal: if (rs == rt) branch to label/offset.", IBranch,
            "000100 sssss ttttt ffffffffffffffff"),
        (Grub, "GRUB", "GRUB $t0,100", "GRUB: load the low 8 bits of the immediate into rt.", I,
            "010000 fffff 00000 ssssssssssssssss"),
        (Tripled, "TRIPLED", "TRIPLED $t0,$t1", "TRIPLED: rd = 3 * rs.", R,
            "000000 sssss 00000 fffff 00000 100000"),
        (Loaded, "LOADED", "LOADED $t0,100($t1)", "LOADED: rt = MEM[rs + offset] with MSB set (0x80000000).", I,
            "010001 sssss fffff tttttttttttttttt"),
        (Deep, "DEEP", "DEEP $t0,$t1", "DEEP: bit-reverse rs into rd.", R,
            "000000 sssss 00000 fffff 00000 100001"),
        (Prim, "PRIM", "PRIM $t0,$t1", "PRIM: rd = 1 if rs is prime, else 0.", R,
            "000000 sssss 00000 fffff 00000 100010"),
    ]
};

/// An ordered set of instruction descriptors with pairwise distinct encodings.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub name: &'static str,
    pub description: &'static str,
    instructions: Vec<InstructionDescriptor>,
}

impl Catalog {
    pub fn new(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            description,
            instructions: Vec::new(),
        }
    }

    /// A catalog holding the full Rust Assembly instruction set.
    pub fn rust_assembly() -> Result<Self, CatalogError> {
        let mut catalog = Catalog::new(
            "Rust Assembly",
            "Rust (the game) flavored instructions on top of MIPS-like semantics.",
        );
        catalog.populate()?;
        Ok(catalog)
    }

    /// Registers every Rust Assembly instruction. Meant to run once per catalog.
    pub fn populate(&mut self) -> Result<(), CatalogError> {
        for (kind, mnemonic, usage, description, format, encoding) in RUST_ASSEMBLY {
            self.register(InstructionDescriptor::new(
                kind,
                mnemonic,
                usage,
                description,
                format,
                encoding,
            )?)?;
        }
        log::debug!("{}: {} instructions registered", self.name, self.instructions.len());
        Ok(())
    }

    pub fn register(&mut self, descriptor: InstructionDescriptor) -> Result<(), CatalogError> {
        if let Some(existing) = self
            .instructions
            .iter()
            .find(|d| d.template.overlaps(&descriptor.template))
        {
            return Err(CatalogError::DuplicateEncoding {
                mnemonic: descriptor.mnemonic,
                existing: existing.mnemonic,
            });
        }
        self.instructions.push(descriptor);
        Ok(())
    }

    /// Descriptor whose template matches `word`, if any.
    pub fn lookup(&self, word: u32) -> Option<&InstructionDescriptor> {
        self.instructions.iter().find(|d| d.template.matches(word))
    }

    /// Descriptor by mnemonic, ignoring case.
    pub fn get(&self, mnemonic: &str) -> Option<&InstructionDescriptor> {
        self.instructions
            .iter()
            .find(|d| d.mnemonic.eq_ignore_ascii_case(mnemonic))
    }

    pub fn iter(&self) -> impl Iterator<Item = &InstructionDescriptor> {
        self.instructions.iter()
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rust_assembly_has_fourteen_distinct_instructions() {
        let cat = Catalog::rust_assembly().unwrap();
        assert_eq!(cat.len(), 14);
        let all: Vec<_> = cat.iter().collect();
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert!(!a.template.overlaps(&b.template), "{} vs {}", a.mnemonic, b.mnemonic);
            }
        }
    }

    #[test]
    fn duplicate_encoding_is_rejected() {
        let mut cat = Catalog::rust_assembly().unwrap();
        let clash = InstructionDescriptor::new(
            InstructionKind::Add,
            "ADD2",
            "ADD2 $t0,$t1,$t2",
            "same bits as ADD",
            Format::R,
            "000000 tttttsssss fffff 00000 000001",
        )
        .unwrap();
        assert_eq!(
            cat.register(clash),
            Err(CatalogError::DuplicateEncoding { mnemonic: "ADD2", existing: "ADD" })
        );
        assert_eq!(cat.len(), 14);
    }

    #[test]
    fn populating_twice_collides() {
        let mut cat = Catalog::rust_assembly().unwrap();
        assert!(matches!(
            cat.populate(),
            Err(CatalogError::DuplicateEncoding { mnemonic: "ADD", existing: "ADD" })
        ));
    }

    #[test]
    fn template_arity_must_match_kind() {
        let err = InstructionDescriptor::new(
            InstructionKind::Deep,
            "DEEP",
            "DEEP $t0,$t1,$t2",
            "",
            Format::R,
            "000000 sssss ttttt fffff 00000 100001",
        )
        .unwrap_err();
        assert_eq!(err, CatalogError::FieldCount { mnemonic: "DEEP", fields: 3, arity: 2 });
    }

    #[test]
    fn lookup_finds_matching_descriptor() {
        let cat = Catalog::rust_assembly().unwrap();
        // PRIM $3, $4
        let word = (4 << 21) | (3 << 11) | 0b100010;
        assert_eq!(cat.lookup(word).map(|d| d.mnemonic), Some("PRIM"));
        // GRUB $2, 0x1FF
        let word = (0b010000 << 26) | (2 << 21) | 0x1FF;
        assert_eq!(cat.lookup(word).map(|d| d.mnemonic), Some("GRUB"));
        // opcode 111111 is unused
        assert!(cat.lookup(0xFC00_0000).is_none());
        assert_eq!(cat.get("beq").map(|d| d.format), Some(Format::IBranch));
    }
}
