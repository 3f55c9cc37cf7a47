use crate::mach::{packed, Cell, Config, Opcode, Runtime};


fn runtime() -> Runtime {
    Runtime::new(Config::default().with_memory_size(2048).with_tib(1025)).unwrap()
}

/// Pack up to four opcodes, padding with `Nop`.
fn bundle(ops: &[Opcode]) -> Cell {
    let mut four = [Opcode::Nop; 4];
    four[..ops.len()].copy_from_slice(ops);
    packed::pack(four)
}

fn load(runtime: &mut Runtime, at: Cell, cells: &[Cell]) {
    for (i, cell) in cells.iter().enumerate() {
        runtime.memory_mut().set(at + i as Cell, *cell).unwrap();
    }
}
