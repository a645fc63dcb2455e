use crate::error::Error;
use crate::vm::VM;
use std::env;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

/// Exit status for every failure: bad invocation, unreadable file, runtime error.
pub const EXIT_FAILURE: i32 = 1;

/// Initialize logging on stderr.
///
/// Use the `RUST_LOG` environment variable to override the default `warn`
/// filter, e.g. `RUST_LOG=monty=debug` traces every dispatched instruction.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

pub fn run_main() -> Result<(), i32> {
    let args: Vec<String> = env::args().skip(1).collect();
    run_main_with_args(&args)
}

pub fn run_main_with_args(args: &[String]) -> Result<(), i32> {
    handle_args(args)
}

pub fn handle_args(args: &[String]) -> Result<(), i32> {
    match args {
        [path] => run_file(path),
        _ => {
            eprintln!("USAGE: monty file");
            Err(EXIT_FAILURE)
        }
    }
}

pub fn run_file(path: &str) -> Result<(), i32> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(source) => {
            let error = Error::OpenFile {
                path: path.to_string(),
                source,
            };
            debug!(?error, "cannot open script");
            eprintln!("{}", error);
            return Err(EXIT_FAILURE);
        }
    };

    let stdout = io::stdout();
    let stderr = io::stderr();
    run_source_with_io(BufReader::new(file), &mut stdout.lock(), &mut stderr.lock())
}

/// Run a script read from `reader`, writing program output to `out` and the
/// diagnostic for a failed run to `err`.
///
/// The stack is released whether the run succeeds or not, and `out` is
/// flushed before any diagnostic is written.
pub fn run_source_with_io<R, W, E>(reader: R, out: &mut W, err: &mut E) -> Result<(), i32>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut vm = VM::new();
    let result = vm.interpret(reader, out);
    vm.release_stack();
    let flushed = out.flush().map_err(Error::from);

    match result.and(flushed) {
        Ok(()) => Ok(()),
        Err(error) => {
            let _ = writeln!(err, "{}", error);
            let _ = err.flush();
            Err(EXIT_FAILURE)
        }
    }
}
