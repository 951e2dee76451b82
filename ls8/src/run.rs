use std::path::PathBuf;

use log::error;

use ls8emu::{load_file, Cpu, CpuError, LoadError};

pub fn run(program: PathBuf) {
    let mut cpu = Cpu::new();

    // Load program
    let image = match load_file(&program) {
        Ok(image) => image,
        Err(LoadError::NotFound(path)) => {
            println!("File not found ...");
            error!("no program at {}", path.display());
            return;
        }
        Err(e) => {
            error!("unable to load {}: {}", program.display(), e);
            return;
        }
    };
    if let Err(e) = cpu.load_bytes(&image) {
        error!("unable to load {}: {}", program.display(), e);
        return;
    }

    match cpu.run() {
        Ok(_) => {}
        Err(e @ CpuError::InvalidInstruction { .. }) => {
            println!("Error: not a valid instruction");
            error!("{}", e);
        }
        Err(e) => error!("execution stopped: {}", e),
    }
}
