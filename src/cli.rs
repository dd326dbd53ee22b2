//! Command-line surface (C10): `run`/`check` subcommands plus the bare
//! `hebi [FILE]` default — same `InputArgs`/`PathOrStdin` shape as the
//! lineage's own CLI crate, trimmed of its `disassemble` subcommand (no
//! bytecode here) and its `dump` flag (no VM state to dump).

use std::borrow::Cow;
use std::io::Read;
use std::path::PathBuf;

use anyhow::Context as _;
use clap::builder::{PathBufValueParser, TypedValueParser};
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[clap(name = "hebi", version)]
pub struct App {
  #[clap(subcommand)]
  command: Option<Command>,

  #[clap(flatten)]
  input: InputArgs,
}

#[derive(Clone, Debug, Subcommand)]
pub enum Command {
  /// Execute a source file [default]
  Run(InputArgs),
  /// Parse a source file without evaluating it
  Check(InputArgs),
  /// Start an interactive REPL
  Repl,
}

#[derive(Clone, Debug, Args)]
pub struct InputArgs {
  /// Path to the source file to read, or `-` for stdin.
  #[arg(
    value_name = "FILE",
    value_parser = PathBufValueParser::new().map(PathOrStdin::new),
    default_value = "-",
    hide_default_value = true
  )]
  file: PathOrStdin,
}

impl InputArgs {
  pub fn source(&self) -> anyhow::Result<String> {
    self.file.read()
  }

  pub fn name(&self) -> Cow<'static, str> {
    match &self.file {
      PathOrStdin::Path(p) => p.display().to_string().into(),
      PathOrStdin::NonTtyStdin => "script".into(),
    }
  }

  /// True when no file was named and stdin is an interactive terminal —
  /// the case SPEC_FULL.md §4.10 says should start a REPL rather than
  /// fail trying to read a script from the keyboard.
  fn is_unspecified_tty(&self) -> bool {
    matches!(self.file, PathOrStdin::NonTtyStdin) && atty::is(atty::Stream::Stdin)
  }
}

#[derive(Clone, Debug)]
enum PathOrStdin {
  Path(PathBuf),
  NonTtyStdin,
}

impl PathOrStdin {
  fn new(maybe_path: PathBuf) -> Self {
    if maybe_path.as_os_str() == "-" {
      Self::NonTtyStdin
    } else {
      Self::Path(maybe_path)
    }
  }

  fn read(&self) -> anyhow::Result<String> {
    Ok(match self {
      PathOrStdin::Path(p) => std::fs::read_to_string(p)
        .with_context(|| format!("failed to read file at {}", p.display()))?,
      PathOrStdin::NonTtyStdin => {
        if atty::isnt(atty::Stream::Stdin) {
          let mut buf = String::new();
          std::io::stdin()
            .read_to_string(&mut buf)
            .with_context(|| "failed to read from stdin")?;
          buf
        } else {
          anyhow::bail!("an input file is required")
        }
      }
    })
  }
}

pub fn main() -> anyhow::Result<()> {
  let app = App::parse();
  let command = app.command.unwrap_or_else(|| {
    if app.input.is_unspecified_tty() {
      Command::Repl
    } else {
      Command::Run(app.input)
    }
  });

  match command {
    Command::Run(input) => handle_run(input),
    Command::Check(input) => handle_check(input),
    Command::Repl => crate::repl::run(),
  }
}

fn handle_run(input: InputArgs) -> anyhow::Result<()> {
  let source = input.source()?;
  let mut stdout = std::io::stdout();
  if let Err(e) = crate::run_source(&source, &mut stdout) {
    report(&source, &e);
    anyhow::bail!("failed to run {}", input.name());
  }
  Ok(())
}

fn handle_check(input: InputArgs) -> anyhow::Result<()> {
  let source = input.source()?;
  if let Err(e) = crate::check_source(&source) {
    report(&source, &e);
    anyhow::bail!("failed to check {}", input.name());
  }
  Ok(())
}

fn report(source: &str, e: &crate::Error) {
  let use_color = supports_color::on(supports_color::Stream::Stderr)
    .map(|c| c.has_basic)
    .unwrap_or(false);
  eprintln!("{}", e.report(source, use_color));
}
