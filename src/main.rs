use anyhow::{Context, Result};
use argh::FromArgs;
use std::fs::File;
use std::io::{self, BufReader, IsTerminal, Write};
use std::path::PathBuf;
use toy_robot::{EditorSource, Interpreter, LineSource, ReaderSource, logging, parse_stream};

#[derive(FromArgs)]
/// Simulate toy robots on a 5x5 table. Commands are read one per line
/// until end of input, then run in order.
struct Args {
    #[argh(positional)]
    /// file to read commands from; standard input when omitted.
    input: Option<PathBuf>,
}

fn main() {
    logging::init();
    if let Err(err) = run(argh::from_env()) {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let mut source = open_source(args.input)?;
    let instructions = parse_stream(source.as_mut())?;
    drop(source);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    Interpreter::default().execute(&instructions, &mut out)?;
    out.flush().context("failed to flush reports")?;
    Ok(())
}

fn open_source(input: Option<PathBuf>) -> Result<Box<dyn LineSource>> {
    match input {
        Some(path) => {
            let file = File::open(&path)
                .with_context(|| format!("failed to open {} for reading", path.display()))?;
            Ok(Box::new(ReaderSource::new(BufReader::new(file))))
        }
        None if io::stdin().is_terminal() => {
            eprintln!("Press CTRL+D to exit input and run");
            let editor = EditorSource::new("").context("failed to start line editor")?;
            Ok(Box::new(editor))
        }
        None => Ok(Box::new(ReaderSource::new(io::stdin().lock()))),
    }
}
