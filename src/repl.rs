//! Interactive REPL (C10), grounded on
//! `examples/jprochazk-hebi/examples/cli/repl.rs`: `rustyline`-based line
//! editor with multi-line continuation detection (a trailing `:` or an
//! indented continuation line means the statement isn't finished yet) before
//! handing the accumulated buffer to the parser/evaluator.

use rustyline::error::ReadlineError;
use rustyline::Editor;

use crate::Error;

enum ParseResult {
  Incomplete,
  Complete,
}

struct Repl {
  editor: Editor<()>,
  closure: indexmap::IndexMap<String, crate::value::Holder>,
}

impl Repl {
  fn new() -> rustyline::Result<Self> {
    Ok(Self { editor: Editor::new()?, closure: indexmap::IndexMap::new() })
  }

  /// Reads lines into `buffer` until it forms a complete statement/block.
  fn read_multi_line_input(&mut self, buffer: &mut String) -> Result<(), ReadlineError> {
    let mut prev_line = String::new();
    loop {
      if !buffer.is_empty() {
        buffer.push('\n');
      }
      let indent: String = prev_line.chars().take_while(|c| c.is_ascii_whitespace()).collect();
      let line = self.editor.readline_with_initial("> ", (&indent, ""))?;
      prev_line.clear();
      prev_line.push_str(&line);
      self.editor.add_history_entry(&line);
      buffer.push_str(&line);

      match validate(buffer) {
        ParseResult::Incomplete => continue,
        ParseResult::Complete => break Ok(()),
      }
    }
  }
}

/// Decides whether `input` is a complete program or needs another line:
/// an unfinished block (a header ending in `:`, or a line more indented
/// than the start of the buffer) can't be parsed yet, so don't even try.
fn validate(input: &str) -> ParseResult {
  fn is_empty(line: &str) -> bool {
    line.trim().is_empty()
  }

  fn is_indented(line: &str) -> bool {
    line.starts_with(|c: char| c.is_ascii_whitespace())
  }

  fn begins_block(line: &str) -> bool {
    line.trim_end().ends_with(':')
  }

  let is_multi_line = input.contains('\n');
  if is_multi_line {
    let last_line = input.split('\n').last().unwrap_or("");
    if !is_empty(last_line) && (is_indented(last_line) || begins_block(last_line)) {
      return ParseResult::Incomplete;
    }
  } else if begins_block(input) {
    return ParseResult::Incomplete;
  }

  ParseResult::Complete
}

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn run() -> anyhow::Result<()> {
  let mut repl = Repl::new()?;
  let mut buffer = String::new();
  let mut stdout = std::io::stdout();

  println!("hebi {VERSION}");
  println!("Press CTRL-D to exit");

  loop {
    buffer.clear();

    match repl.read_multi_line_input(&mut buffer) {
      Ok(()) => {}
      Err(ReadlineError::Eof) | Err(ReadlineError::Interrupted) => return Ok(()),
      Err(ReadlineError::WindowResize) => continue,
      Err(e) => return Err(e.into()),
    }

    if let Err(e) = eval_line(&buffer, &mut repl.closure, &mut stdout) {
      println!("{}", e.report(&buffer, false));
    }
  }
}

fn eval_line(
  src: &str,
  closure: &mut indexmap::IndexMap<String, crate::value::Holder>,
  out: &mut dyn std::io::Write,
) -> Result<(), Error> {
  let program = crate::parser::parse(src)?;
  let mut ctx = crate::eval::Context::new(out);
  crate::eval::exec_program(&program, closure, &mut ctx)
}
