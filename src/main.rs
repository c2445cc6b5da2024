use ls8::computer::{memory::MEMORY_SIZE, Computer};
use ls8::loader;

use std::io;
use std::path::PathBuf;

use clap::Parser;
use eyre::{Result, WrapErr};

#[derive(Parser, Debug)]
#[command(name = "ls8", about = "Run an LS-8 program image")]
struct Args {
    /// Program image: one binary byte per line, `#` comments allowed.
    program: PathBuf,

    /// Print a TRACE line before every cycle.
    #[arg(long)]
    trace: bool,

    /// Number of memory cells.
    #[arg(long, default_value_t = MEMORY_SIZE, value_parser = parse_memory_size)]
    memory_size: usize,
}

fn parse_memory_size(value: &str) -> Result<usize, String> {
    let size = value.parse::<usize>().map_err(|e| e.to_string())?;
    if size < MEMORY_SIZE {
        return Err(format!("must be at least {MEMORY_SIZE}"));
    }
    Ok(size)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.trace { "ls8=trace" } else { "ls8=warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();

    let machine_code = loader::load_file(&args.program)?;

    let mut computer = Computer::with_memory_size(args.memory_size)?;
    computer
        .load_program(&machine_code)
        .wrap_err_with(|| format!("loading {}", args.program.display()))?;

    let stdout = io::stdout();
    computer
        .run(&mut stdout.lock())
        .wrap_err_with(|| format!("running {}", args.program.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_size_below_minimum_is_rejected() {
        assert!(parse_memory_size("255").is_err());
        assert!(parse_memory_size("abc").is_err());
        assert_eq!(parse_memory_size("256"), Ok(256));
        assert_eq!(parse_memory_size("4096"), Ok(4096));
    }

    #[test]
    fn memory_size_defaults_to_minimum() {
        let args = Args::try_parse_from(["ls8", "p.ls8"]).unwrap();
        assert_eq!(args.memory_size, MEMORY_SIZE);
        assert!(!args.trace);
    }

    #[test]
    fn small_memory_size_flag_fails_to_parse() {
        assert!(Args::try_parse_from(["ls8", "p.ls8", "--memory-size", "100"]).is_err());
        let args = Args::try_parse_from(["ls8", "p.ls8", "--memory-size", "512", "--trace"]).unwrap();
        assert_eq!(args.memory_size, 512);
        assert!(args.trace);
    }
}
