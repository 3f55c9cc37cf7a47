use super::{Address, Cell, Memory};
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// Cell holding the most recently defined entry.
pub const HEAD: Cell = 2;

const LINK: Cell = 0;
const XT: Cell = 1;
const CLASS: Cell = 2;
const NAME: Cell = 3;

/// ## One dictionary header as stored in memory
///
/// `[link, xt, class, name...0]`

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub address: Cell,
    pub link: Cell,
    pub xt: Cell,
    pub class: Cell,
    pub name: String,
}

impl Entry {
    fn read(memory: &Memory, address: Cell) -> Result<Entry> {
        Ok(Entry {
            address,
            link: memory.get(address.wrapping_add(LINK))?,
            xt: memory.get(address.wrapping_add(XT))?,
            class: memory.get(address.wrapping_add(CLASS))?,
            name: memory.extract(address.wrapping_add(NAME))?,
        })
    }
}

/// ## Read-only view of the linked list of headers
///
/// The machine never writes the dictionary; the compiler inside the
/// image does. Walking starts at `memory[2]` and follows links, so
/// newer definitions shadow older ones. Name lookup stops at the entry
/// whose link is zero without matching it; `entries()` still yields it.

pub struct Dictionary<'a> {
    memory: &'a Memory,
}

impl<'a> Dictionary<'a> {
    pub fn new(memory: &'a Memory) -> Dictionary<'a> {
        Dictionary { memory }
    }

    pub fn head(&self) -> Result<Cell> {
        self.memory.get(HEAD)
    }

    pub fn entries(&self) -> Entries<'a> {
        Entries {
            memory: self.memory,
            next: self.head(),
            steps: 0,
        }
    }

    /// Address of the newest entry named `name`, or 0.
    pub fn lookup(&self, name: &str) -> Result<Cell> {
        Ok(self.find(name)?.map_or(0, |entry| entry.address))
    }

    pub fn find(&self, name: &str) -> Result<Option<Entry>> {
        for entry in self.entries() {
            let entry = entry?;
            if entry.link == 0 {
                break;
            }
            if entry.name == name {
                return Ok(Some(entry));
            }
        }
        Ok(None)
    }

    pub fn xt_for(&self, name: &str) -> Result<Option<Cell>> {
        Ok(self.find(name)?.map(|entry| entry.xt))
    }

    pub fn class_for(&self, name: &str) -> Result<Option<Cell>> {
        Ok(self.find(name)?.map(|entry| entry.class))
    }
}

pub struct Entries<'a> {
    memory: &'a Memory,
    next: Result<Cell>,
    steps: Address,
}

impl<'a> Iterator for Entries<'a> {
    type Item = Result<Entry>;

    fn next(&mut self) -> Option<Self::Item> {
        let address = match std::mem::replace(&mut self.next, Ok(0)) {
            Ok(0) => return None,
            Ok(address) => address,
            Err(error) => return Some(Err(error)),
        };
        self.steps += 1;
        if self.steps > self.memory.len() {
            return Some(Err(error!(CorruptDictionary; "LINK CYCLE")));
        }
        let entry = Entry::read(self.memory, address);
        if let Ok(entry) = &entry {
            self.next = Ok(entry.link);
        }
        Some(entry)
    }
}
