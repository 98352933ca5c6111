use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

/// The shell never inspects the editor beyond this: hand over whatever
/// the user is currently editing.
pub trait Editor {
    fn current_text(&self) -> String;
}

/// Fixed text; backs file mode and tests.
pub struct BufferEditor {
    text: String,
}

impl BufferEditor {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl Editor for BufferEditor {
    fn current_text(&self) -> String {
        self.text.clone()
    }
}

/// Line-accumulating editor over rustyline: lines pile up into a buffer
/// until the shell asks for the whole thing.
pub struct LineEditor {
    readline: DefaultEditor,
    buffer: Vec<String>,
}

impl LineEditor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            readline: DefaultEditor::new()?,
            buffer: Vec::new(),
        })
    }

    /// `None` on Ctrl-C / Ctrl-D.
    pub fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        match self.readline.readline(prompt) {
            Ok(line) => {
                self.readline.add_history_entry(&line)?;
                Ok(Some(line))
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
            Err(error) => Err(error.into()),
        }
    }

    pub fn push(&mut self, line: String) {
        self.buffer.push(line);
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

impl Editor for LineEditor {
    fn current_text(&self) -> String {
        self.buffer.join("\n")
    }
}
