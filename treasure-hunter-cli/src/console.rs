use colored::Colorize;
use std::fmt::Display;
use std::io::{self, BufRead, Write};
use treasure_hunter_game::{Message, Tone};

/// Render a message, colouring each segment by its tone.
pub fn paint(message: &Message, color: bool) -> String {
    if !color {
        return message.to_string();
    }
    message
        .segments()
        .iter()
        .map(|segment| {
            let text = segment.text.as_str();
            match segment.tone {
                Tone::Plain => text.normal().to_string(),
                Tone::Gold | Tone::Sand => text.yellow().to_string(),
                Tone::Danger => text.red().to_string(),
                Tone::Snow => text.white().to_string(),
                Tone::Water => text.blue().to_string(),
                Tone::Foliage => text.green().to_string(),
            }
        })
        .collect()
}

/// Line-oriented terminal wrapper over any reader/writer pair.
pub struct Console<R, W> {
    input: R,
    output: W,
    color: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub const fn new(input: R, output: W, color: bool) -> Self {
        Self {
            input,
            output,
            color,
        }
    }

    pub fn say(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    pub fn show(&mut self, message: &Message) -> io::Result<()> {
        if message.is_empty() {
            return Ok(());
        }
        let painted = paint(message, self.color);
        writeln!(self.output, "{painted}")
    }

    pub fn heading(&mut self, text: &str) -> io::Result<()> {
        if self.color {
            writeln!(self.output, "{}", text.bright_white().bold())
        } else {
            writeln!(self.output, "{text}")
        }
    }

    /// Prompt and read one trimmed line; `None` at end of input.
    pub fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn plain_paint_drops_tones() {
        let msg = Message::plain("You dug up ").with("3 gold!", Tone::Gold);
        assert_eq!(paint(&msg, false), "You dug up 3 gold!");
    }

    #[test]
    fn colored_paint_keeps_text() {
        let msg = Message::plain("You dug up ").with("3 gold!", Tone::Gold);
        assert!(paint(&msg, true).contains("3 gold!"));
    }

    #[test]
    fn ask_trims_and_detects_end_of_input() {
        let mut console = Console::new(Cursor::new("  b \n"), Vec::new(), false);
        assert_eq!(console.ask("> ").unwrap().as_deref(), Some("b"));
        assert_eq!(console.ask("> ").unwrap(), None);
        let out = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(out, "> > ");
    }
}
