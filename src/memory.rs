use crate::constants::MEMORY_SIZE;
use crate::error::LoadError;

/// # Memory
/// 256 bytes of RAM shared by the program image and the stack.
///
/// Addresses are `u8`, so every address names a real cell and no access can fall outside the
/// array.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Memory {
    cells: [u8; MEMORY_SIZE],
}

impl Memory {
    pub fn new() -> Self {
        Memory {
            cells: [0; MEMORY_SIZE],
        }
    }

    pub fn read(&self, address: u8) -> u8 {
        self.cells[address as usize]
    }

    pub fn write(&mut self, address: u8, value: u8) {
        self.cells[address as usize] = value;
    }

    /// Copies `image` into memory starting at address 0
    pub fn load(&mut self, image: &[u8]) -> Result<(), LoadError> {
        if image.len() > MEMORY_SIZE {
            return Err(LoadError::ProgramTooLarge(image.len()));
        }
        self.cells[..image.len()].copy_from_slice(image);
        Ok(())
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.cells
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}
