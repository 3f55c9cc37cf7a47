//! Image Store: memory as raw native-order cells, no header.

use super::{Address, Cell, Memory};
use crate::error;
use crate::lang::Error;
use std::fs::File;
use std::io::{BufWriter, ErrorKind, Read, Write};
use std::path::Path;

type Result<T> = std::result::Result<T, Error>;

const CELL_BYTES: usize = std::mem::size_of::<Cell>();

impl Memory {
    /// Fill memory from the start with the cells in `path`. Returns the
    /// number of cells read. A missing file reads zero cells; trailing
    /// bytes short of a whole cell are ignored.
    pub fn load_image<P: AsRef<Path>>(&mut self, path: P) -> Result<Address> {
        let mut file = match File::open(path) {
            Ok(file) => file,
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(0),
            Err(error) => return Err(error.into()),
        };
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)?;
        let count = bytes.len() / CELL_BYTES;
        if count > self.len() {
            return Err(error!(ImageTooLarge; &format!("{} CELLS", count)));
        }
        let cells = self.as_mut_slice();
        for (cell, chunk) in cells.iter_mut().zip(bytes.chunks_exact(CELL_BYTES)) {
            let mut raw = [0u8; CELL_BYTES];
            raw.copy_from_slice(chunk);
            *cell = Cell::from_ne_bytes(raw);
        }
        Ok(count)
    }

    /// Overwrite `path` with the first `prefix` cells of memory.
    pub fn save_image<P: AsRef<Path>>(&self, path: P, prefix: Address) -> Result<()> {
        let count = prefix.min(self.len());
        let mut writer = BufWriter::new(File::create(path)?);
        for cell in &self.as_slice()[..count] {
            writer.write_all(&cell.to_ne_bytes())?;
        }
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let mut m = Memory::new(4);
        assert_eq!(m.load_image(dir.path().join("ngaImage")).unwrap(), 0);
        assert_eq!(m.as_slice(), &[0, 0, 0, 0]);
    }

    #[test]
    fn test_prefix_and_partial_cell() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ngaImage");
        let mut m = Memory::new(8);
        for a in 0..8 {
            m.set(a, a * 11 - 40).unwrap();
        }
        m.save_image(&path, 5).unwrap();
        assert_eq!(std::fs::metadata(&path).unwrap().len(), 20);

        let mut bytes = std::fs::read(&path).unwrap();
        bytes.push(0xFF);
        std::fs::write(&path, &bytes).unwrap();
        let mut n = Memory::new(8);
        assert_eq!(n.load_image(&path).unwrap(), 5);
        assert_eq!(&n.as_slice()[..5], &m.as_slice()[..5]);
        assert_eq!(&n.as_slice()[5..], &[0, 0, 0]);
    }

    #[test]
    fn test_too_large() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ngaImage");
        Memory::new(8).save_image(&path, 8).unwrap();
        let err = Memory::new(4).load_image(&path).unwrap_err();
        assert_eq!(err.code(), ErrorCode::ImageTooLarge);
    }
}
