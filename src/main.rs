use env_logger::Env;
use mips_interpreter::config::Config;
use mips_interpreter::{Processor, Program};
use std::error::Error;
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::PathBuf;
use structopt::StructOpt;

#[macro_use]
extern crate log;

#[derive(StructOpt)]
struct CliArgs {
    /// Log each instruction as it executes
    #[structopt(long)]
    trace: bool,

    #[structopt(parse(from_os_str))]
    file_path: PathBuf,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();
    let args = CliArgs::from_args();

    info!("Loading program in memory...");
    let file = File::open(&args.file_path)?;
    let program = Program::parse(BufReader::new(file))?;

    let mut processor = Processor::new(Config { trace: args.trace });
    processor.load_program(program);
    processor.run();
    info!("Program finished");

    println!("-----------------------------------");
    println!("-----------REGISTERS---------------");
    println!("-----------------------------------");
    print!("{}", processor.registers());

    Ok(())
}
