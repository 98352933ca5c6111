use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::{BufWriter, Write};

mod ast;
mod render;
mod session;
mod shell;

use crate::session::run_service::HttpRunService;
use crate::shell::Shell;
use crate::shell::editor::BufferEditor;

/// Terminal client for the LizaLang playground service.
#[derive(Parser)]
#[command(name = "liza-playground", version)]
struct Args {
    /// LizaLang source file to run; starts the interactive shell when omitted
    file: Option<String>,

    /// Base URL of the interpreter service
    #[arg(long, default_value = "http://localhost:8000")]
    service_url: String,

    /// Print only the program output, without the syntax tree
    #[arg(long)]
    no_tree: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let service = HttpRunService::new(&args.service_url);
    let mut shell = Shell::new(service, !args.no_tree);
    let mut out = BufWriter::new(std::io::stdout());

    match &args.file {
        Some(file) => {
            let code = fs::read_to_string(file)
                .with_context(|| format!("failed to read source file '{file}'"))?;
            shell.run_once(&BufferEditor::new(code), &mut out)?;
        }
        None => shell.run_interactive(&mut out)?,
    }

    out.flush()?;
    Ok(())
}
