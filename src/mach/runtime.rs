use super::{packed, Address, Cell, Config, Dictionary, Memory, Opcode, Operation, Stack};
use crate::error;
use crate::lang::Error;
use std::io::Write;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

type Result<T> = std::result::Result<T, Error>;

/// Word the image's compiler jumps to when it cannot resolve input.
pub const NOT_FOUND: &str = "err:notfound";
/// Word that processes one word of input left at the TIB.
pub const INTERPRET: &str = "interpret";

const HEAP: Cell = 3;
const VERSION: Cell = 4;

/// ## Virtual machine
///
/// One instance owns its memory and both stacks; nothing is shared
/// between instances. `execute` runs until the top-level word returns
/// or the instruction pointer leaves memory.

pub struct Runtime {
    config: Config,
    memory: Memory,
    data: Stack,
    address: Stack,
    ip: Cell,
    notfound: Option<Cell>,
    injected: String,
    interrupted: Arc<AtomicBool>,
    output: Box<dyn Write>,
}

impl Default for Runtime {
    fn default() -> Self {
        Runtime::build(Config::default())
    }
}

impl Runtime {
    pub fn new(config: Config) -> Result<Runtime> {
        config.validate()?;
        Ok(Runtime::build(config))
    }

    fn build(config: Config) -> Runtime {
        Runtime {
            memory: Memory::new(config.memory_size),
            data: Stack::new("DATA", config.data_depth),
            address: Stack::new("ADDRESS", config.address_depth),
            config,
            ip: 0,
            notfound: None,
            injected: String::new(),
            interrupted: Arc::new(AtomicBool::new(false)),
            output: Box::new(std::io::stdout()),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
    pub fn memory(&self) -> &Memory {
        &self.memory
    }
    pub fn memory_mut(&mut self) -> &mut Memory {
        &mut self.memory
    }
    pub fn data(&self) -> &Stack {
        &self.data
    }
    pub fn data_mut(&mut self) -> &mut Stack {
        &mut self.data
    }
    pub fn address(&self) -> &Stack {
        &self.address
    }
    pub fn ip(&self) -> Cell {
        self.ip
    }
    pub fn set_output(&mut self, output: Box<dyn Write>) {
        self.output = output;
    }

    /// Setting the flag stops `execute` before its next fetch, as if
    /// `halt` had run.
    pub fn interrupt_handle(&self) -> Arc<AtomicBool> {
        self.interrupted.clone()
    }
    pub fn interrupt(&self) {
        self.interrupted.store(true, Ordering::SeqCst);
    }

    fn limit(&self) -> Cell {
        self.memory.len() as Cell
    }

    // *** Image

    pub fn load_image<P: AsRef<Path>>(&mut self, path: P) -> Result<Address> {
        self.memory.load_image(path)
    }
    pub fn save_image<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.memory.save_image(path, self.config.image_prefix)
    }
    /// A usable image never has a zero in its first cell.
    pub fn check_image(&self) -> Result<()> {
        match self.memory.get(0)? {
            0 => Err(error!(ImageNotFound)),
            _ => Ok(()),
        }
    }
    pub fn version(&self) -> Result<Cell> {
        self.memory.get(VERSION)
    }
    pub fn heap(&self) -> Result<Cell> {
        self.memory.get(HEAP)
    }

    // *** Strings and names

    pub fn inject(&mut self, s: &str, addr: Cell) -> Result<()> {
        self.memory.inject(s, addr)?;
        self.injected = s.to_string();
        Ok(())
    }
    pub fn extract(&self, addr: Cell) -> Result<String> {
        self.memory.extract(addr)
    }
    pub fn dictionary(&self) -> Dictionary<'_> {
        Dictionary::new(&self.memory)
    }
    pub fn lookup(&self, name: &str) -> Result<Cell> {
        self.dictionary().lookup(name)
    }

    /// Hand one word of input to the image's `interpret`.
    pub fn evaluate(&mut self, word: &str) -> Result<()> {
        if word.is_empty() {
            return Ok(());
        }
        let interpret = match self.dictionary().xt_for(INTERPRET)? {
            Some(xt) => xt,
            None => return Err(error!(UndefinedWord; INTERPRET)),
        };
        let tib = self.config.tib as Cell;
        self.inject(word, tib)?;
        self.data.push(tib)?;
        self.execute(interpret)
    }

    // *** Execution

    pub fn execute(&mut self, entry: Cell) -> Result<()> {
        // An image without a usable dictionary simply has no handler.
        self.notfound = self.dictionary().xt_for(NOT_FOUND).unwrap_or(None);
        self.address.clear();
        self.address.push(0)?;
        self.ip = entry;
        let result = self.run();
        self.address.clear();
        result.map_err(|error| error.at_ip(self.ip))
    }

    fn run(&mut self) -> Result<()> {
        let limit = self.limit();
        while self.ip < limit {
            if self.interrupted.swap(false, Ordering::SeqCst) {
                break;
            }
            if Some(self.ip) == self.notfound {
                writeln!(self.output, "{} ?", self.injected)?;
            }
            let cell = self.memory.get(self.ip)?;
            self.process(cell)?;
            if self.address.is_empty() {
                break;
            }
            self.ip = self.ip.saturating_add(1);
        }
        self.ip = limit;
        Ok(())
    }

    fn process(&mut self, cell: Cell) -> Result<()> {
        match packed::decode(cell) {
            Some(ops) => {
                for op in ops.iter() {
                    self.step(*op)?;
                }
                Ok(())
            }
            None => match Opcode::from_cell(cell) {
                Some(op) => self.step(op),
                None => self.step(Opcode::Halt),
            },
        }
    }

    /// Execute a single opcode at the current instruction pointer.
    pub fn step(&mut self, op: Opcode) -> Result<()> {
        use Opcode::*;
        match op {
            Nop => {}
            Lit => {
                self.ip = self.ip.wrapping_add(1);
                let val = self.memory.get(self.ip)?;
                self.data.push(val)?;
            }
            Dup => {
                let val = self.data.top()?;
                self.data.push(val)?;
            }
            Drop => self.data.drop()?,
            Swap => self.data.swap()?,
            Push => {
                let val = self.data.pop()?;
                self.address.push(val)?;
            }
            Pop => {
                let val = self.address.pop()?;
                self.data.push(val)?;
            }
            Jump => {
                self.ip = self.data.pop()?.wrapping_sub(1);
            }
            Call => {
                let dest = self.data.pop()?;
                self.address.push(self.ip)?;
                self.ip = dest.wrapping_sub(1);
            }
            CCall => {
                let dest = self.data.pop()?;
                let flag = self.data.pop()?;
                if flag != 0 {
                    self.address.push(self.ip)?;
                    self.ip = dest.wrapping_sub(1);
                }
            }
            Return => {
                self.ip = self.address.pop()?;
            }
            Eq => self.binary(Operation::equal)?,
            NotEq => self.binary(Operation::not_equal)?,
            Lt => self.binary(Operation::less)?,
            Gt => self.binary(Operation::greater)?,
            Fetch => {
                let val = match self.data.pop()? {
                    -1 => self.data.depth() as Cell,
                    -2 => self.address.depth() as Cell,
                    -3 => self.limit(),
                    -4 => Cell::min_value(),
                    -5 => Cell::max_value(),
                    addr => self.memory.get(addr)?,
                };
                self.data.push(val)?;
            }
            Store => {
                let (val, addr) = self.data.pop_2()?;
                self.memory.set(addr, val)?;
            }
            Add => self.binary(Operation::sum)?,
            Sub => self.binary(Operation::subtract)?,
            Mul => self.binary(Operation::multiply)?,
            DivMod => {
                let (lhs, rhs) = self.data.pop_2()?;
                let (rem, quot) = Operation::divide(lhs, rhs)?;
                self.data.push(rem)?;
                self.data.push(quot)?;
            }
            And => self.binary(|lhs, rhs| lhs & rhs)?,
            Or => self.binary(|lhs, rhs| lhs | rhs)?,
            Xor => self.binary(|lhs, rhs| lhs ^ rhs)?,
            Shift => self.binary(Operation::shift)?,
            ZeroReturn => {
                if self.data.top()? == 0 {
                    self.data.drop()?;
                    self.ip = self.address.pop()?;
                }
            }
            Halt => self.ip = self.limit(),
            IoEnumerate => self.data.push(1)?,
            IoQuery => {
                self.data.drop()?;
                self.data.push(0)?;
                self.data.push(0)?;
            }
            IoInteract => {
                self.data.drop()?;
                let ch = self.data.pop()?;
                self.output.write_all(&[ch as u8])?;
                self.output.flush()?;
            }
        }
        Ok(())
    }

    fn binary<F: Fn(Cell, Cell) -> Cell>(&mut self, f: F) -> Result<()> {
        let (lhs, rhs) = self.data.pop_2()?;
        self.data.push(f(lhs, rhs))
    }
}
