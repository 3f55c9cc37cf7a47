#![allow(dead_code)]
use nga::mach::{packed, Cell, Config, Opcode, Runtime};
use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

pub const MEMORY: usize = 4096;

pub fn runtime() -> Runtime {
    Runtime::new(Config::default().with_memory_size(MEMORY).with_image_prefix(2000)).unwrap()
}

/// Pack up to four opcodes, padding with `Nop`.
pub fn bundle(ops: &[Opcode]) -> Cell {
    let mut four = [Opcode::Nop; 4];
    four[..ops.len()].copy_from_slice(ops);
    packed::pack(four)
}

pub fn load(runtime: &mut Runtime, at: Cell, cells: &[Cell]) {
    for (i, cell) in cells.iter().enumerate() {
        runtime.memory_mut().set(at + i as Cell, *cell).unwrap();
    }
}

/// Append a header at `at` and make it the dictionary head.
pub fn define(runtime: &mut Runtime, at: Cell, name: &str, xt: Cell) {
    let memory = runtime.memory_mut();
    let head = memory.get(2).unwrap();
    memory.set(at, head).unwrap();
    memory.set(at + 1, xt).unwrap();
    memory.set(at + 2, 0).unwrap();
    memory.inject(name, at + 3).unwrap();
    memory.set(2, at).unwrap();
}

/// Run `ops` on the data stack `stack` and return what is left.
pub fn apply(stack: &[Cell], ops: &[Opcode]) -> Vec<Cell> {
    let mut r = runtime();
    for val in stack {
        r.data_mut().push(*val).unwrap();
    }
    for op in ops {
        r.step(*op).unwrap();
    }
    r.data().as_slice().to_vec()
}

/// Output sink that can be read back after the runtime writes to it.
#[derive(Clone, Default)]
pub struct Capture(Rc<RefCell<Vec<u8>>>);

impl Capture {
    pub fn install(runtime: &mut Runtime) -> Capture {
        let capture = Capture::default();
        runtime.set_output(Box::new(capture.clone()));
        capture
    }
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).to_string()
    }
}

impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }
    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
