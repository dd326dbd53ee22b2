//! Thin binary entry point: all argument parsing and subcommand dispatch
//! lives in `hebi::cli`.

fn main() -> anyhow::Result<()> {
  hebi::cli::main()
}
