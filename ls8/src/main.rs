use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;
use simple_logger::SimpleLogger;

mod run;

#[derive(Parser, Debug)]
#[command(name = "ls8")]
#[command(about = "Runs an LS-8 program image", long_about = None)]
struct Args {
    /// Path to a program image of base-2 byte literals, one per line
    program: PathBuf,
}

fn main() {
    if let Err(e) = SimpleLogger::new().with_level(LevelFilter::Warn).init() {
        eprintln!("unable to initialize logging: {}", e);
    }
    let args = Args::parse();
    run::run(args.program);
}
