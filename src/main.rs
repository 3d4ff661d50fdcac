use rustasm::encoder::encode;
use rustasm::{Catalog, Machine, Statement, run_program};

fn main() {
    env_logger::init();

    let catalog = Catalog::rust_assembly().expect("instruction set encodings collide");
    println!("{}: {}", catalog.name, catalog.description);
    for d in catalog.iter() {
        println!("  {:<8} {:<38} {}", d.mnemonic, d.encoding, d.description);
    }

    let op = |m: &str| catalog.get(m).expect("mnemonic is registered");
    let program = [
        Statement::new(op("GRUB"), &[1, 10]),
        Statement::new(op("GRUB"), &[2, 3]),
        Statement::new(op("ADD"), &[3, 1, 2]),
        Statement::new(op("TRIPLED"), &[4, 3]),
        Statement::new(op("DEEP"), &[5, 4]),
        Statement::new(op("PRIM"), &[6, 3]),
    ];

    let mut m = Machine::default();
    let steps = match run_program(&program, &mut m, 1000) {
        Ok(n) => n,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    println!("{steps} instructions executed");
    for st in &program {
        let word = encode(st.desc, &st.operands).unwrap_or_default();
        println!("  0x{word:08x}  {} {:?}", st.desc.mnemonic, st.operands);
    }
    for (r, &v) in m.registers.as_slice().iter().enumerate().filter(|(_, v)| **v != 0) {
        println!("  ${r:<2} = {v} (0x{:08x})", v as u32);
    }
}
