pub mod display;
pub mod editor;
#[cfg(test)]
mod tests;

use std::io::Write;

use anyhow::Result;
use yansi::Paint;

use crate::render::render_program;
use crate::session::run_service::RunService;
use crate::session::{Session, SessionState};
use editor::{Editor, LineEditor};

/// Wires the editor, the session, and the rendered tree/output together.
pub struct Shell<S: RunService> {
    session: Session,
    service: S,
    show_tree: bool,
}

impl<S: RunService> Shell<S> {
    pub fn new(service: S, show_tree: bool) -> Self {
        Self {
            session: Session::new(),
            service,
            show_tree,
        }
    }

    /// Submit the editor's current text, wait for the service, and present
    /// whichever state the session settles in.
    pub fn run_once(&mut self, editor: &dyn Editor, out: &mut dyn Write) -> Result<()> {
        let request = self.session.submit(editor.current_text());
        let outcome = self.service.run(&request.code);
        self.session.on_response(request.id, outcome);
        self.present(out)
    }

    fn present(&self, out: &mut dyn Write) -> Result<()> {
        match self.session.state() {
            SessionState::Idle | SessionState::Running => Ok(()),

            SessionState::Succeeded(result) => {
                if self.show_tree && !result.ast.is_empty() {
                    writeln!(out, "{}", "Syntax tree".bold())?;
                    for node in render_program(&result.ast) {
                        display::write_tree(out, &node)?;
                    }
                    writeln!(out)?;
                }

                writeln!(out, "{}", "Output".bold())?;
                write!(out, "{}", result.output)?;
                if !result.output.ends_with('\n') {
                    writeln!(out)?;
                }
                Ok(())
            }

            SessionState::Failed(reason) => {
                writeln!(out, "{} {reason}", "error:".red().bold())?;
                Ok(())
            }
        }
    }

    pub fn run_interactive(&mut self, out: &mut dyn Write) -> Result<()> {
        let mut editor = LineEditor::new()?;
        writeln!(
            out,
            "LizaLang playground — :run to execute, :clear to reset, :quit to leave"
        )?;
        out.flush()?;

        loop {
            let prompt = if editor.is_empty() { "liza> " } else { "  ... " };
            let Some(line) = editor.read_line(prompt)? else {
                break;
            };

            match line.trim() {
                ":quit" | ":q" => break,
                ":clear" => LineEditor::clear(&mut editor),
                ":show" => writeln!(out, "{}", editor.current_text())?,
                ":run" => self.run_once(&editor, out)?,
                _ => editor.push(line),
            }
            out.flush()?;
        }

        Ok(())
    }
}
