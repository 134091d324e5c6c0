use compiler::compile;
use compiler::diag::Diagnostic;
use std::io::{self, Read};
use std::{env, fs, process};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

const DEFAULT_SRC: &str = "test.src";

fn main() {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(io::stderr)
    .init();

  let args: Vec<String> = env::args().skip(1).collect();
  if args.len() > 1 {
    eprintln!("Usage: compiler [PATH | -]");
    process::exit(1);
  }
  let path = args.first().map_or(DEFAULT_SRC, String::as_str);

  let src = match read_source(path) {
    Ok(src) => src,
    Err(err) => {
      error!(path, "failed to read source");
      eprintln!("error: could not read `{path}`: {err}");
      process::exit(1);
    }
  };
  debug!(path, bytes = src.len(), "read source");

  match compile(&src) {
    Ok(js) => println!("{js}"),
    Err(err) => {
      eprint!("{}", Diagnostic::new(&err, &src).render(&src));
      process::exit(1);
    }
  }
}

fn read_source(path: &str) -> io::Result<String> {
  if path == "-" {
    let mut src = String::new();
    io::stdin().read_to_string(&mut src)?;
    Ok(src)
  } else {
    fs::read_to_string(path)
  }
}
