use rustasm::encoder::encode;
use rustasm::{Catalog, ExecError, Flow, Machine, execute};

#[test]
fn add_tripled_deep_chain() {
    let cat = Catalog::rust_assembly().unwrap();
    let mut m = Machine::default();
    m.registers.update_register(1, 10).unwrap();
    m.registers.update_register(2, 3).unwrap();

    execute(cat.get("ADD").unwrap(), &[3, 1, 2], &mut m).unwrap();
    assert_eq!(m.registers.value(3).unwrap(), 13);

    execute(cat.get("TRIPLED").unwrap(), &[4, 3], &mut m).unwrap();
    assert_eq!(m.registers.value(4).unwrap(), 39);

    execute(cat.get("DEEP").unwrap(), &[5, 4], &mut m).unwrap();
    assert_eq!(m.registers.value(5).unwrap(), 39i32.reverse_bits());
    assert_eq!(m.registers.value(5).unwrap() as u32, 0xE400_0000);
}

/// A host decoder finds the descriptor for a raw word, then executes it.
#[test]
fn lookup_then_execute() {
    let cat = Catalog::rust_assembly().unwrap();
    let mut m = Machine::default();
    let base = m.memory.base();
    m.load_words(base, &[0x1234, 0x0BAD]).unwrap();
    m.registers.update_register(9, base as i32).unwrap();

    let word = encode(cat.get("LOADED").unwrap(), &[8, 9, 4]).unwrap();
    let desc = cat.lookup(word).unwrap();
    assert_eq!(desc.mnemonic, "LOADED");
    assert_eq!(execute(desc, &[8, 9, 4], &mut m), Ok(Flow::Next));
    assert_eq!(m.registers.value(8).unwrap() as u32, 0x8000_0BAD);

    let err = execute(desc, &[8, 9, 1], &mut m).unwrap_err();
    assert!(matches!(err, ExecError::Address { mnemonic: "LOADED", .. }));
    assert_eq!(err.to_string(), format!("LOADED [8, 9, 1]: address 0x{:08x} is not word aligned", base + 1));
}
