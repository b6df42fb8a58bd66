//! Console front end
//!
//! Line-oriented input from any reader, colored output through crossterm.

use crate::data::Room;
use crate::game::{Command, CommandSource, Ending, SessionEvent};
use crossterm::style::{Color, Stylize};
use std::io::{self, BufRead, Write};

/// Color scheme for the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub fg: Color,
    pub accent: Color,
    pub alert: Color,
    pub success: Color,
    pub warning: Color,
    pub header: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            fg: Color::White,
            accent: Color::Cyan,
            alert: Color::Red,
            success: Color::Green,
            warning: Color::Yellow,
            header: Color::Magenta,
        }
    }
}

/// ASCII art banner
pub const LOGO: &str = r#"
╔══════════════════════════════════════════════╗
║        DETECTIVE QUEST                       ║
║        O Misterio da Mansao                  ║
╚══════════════════════════════════════════════╝
"#;

pub const WELCOME: &str = "Bem-vindo, Detetive. Voce esta no Hall de Entrada.";

pub const PROMPT: &str = "Acoes - (e) Esquerda, (d) Direita, (s) Sair/Finalizar: ";

pub const FAREWELL: &str = "--- Fim da Investigacao ---";

/// Reads one key per line
///
/// Leading whitespace and blank lines are skipped; whatever follows the key
/// on its line is discarded.
#[derive(Debug)]
pub struct KeyReader<R> {
    reader: R,
    line: String,
}

impl<R: BufRead> KeyReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
        }
    }

    /// Next key, or `None` at end of input or on a read error
    pub fn read_key(&mut self) -> Option<char> {
        loop {
            self.line.clear();
            match self.reader.read_line(&mut self.line) {
                Ok(0) => return None,
                Ok(_) => {
                    if let Some(key) = self.line.chars().find(|c| !c.is_whitespace()) {
                        return Some(key);
                    }
                }
                Err(err) => {
                    tracing::warn!(error = %err, "could not read input");
                    return None;
                }
            }
        }
    }
}

/// A terminal player: prompts on `out`, reads keys from `input`
pub struct Console<R, W> {
    input: KeyReader<R>,
    out: W,
    theme: Theme,
    color: bool,
    quiet: bool,
    error: Option<io::Error>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self {
            input: KeyReader::new(input),
            out,
            theme: Theme::default(),
            color: false,
            quiet: false,
            error: None,
        }
    }

    pub fn color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Skip the banner and prompts, keep the story
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            text.with(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn paint_bold(&self, text: &str, color: Color) -> String {
        if self.color {
            text.with(color).bold().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn banner(&mut self) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let logo = self.paint(LOGO, self.theme.header);
        writeln!(self.out, "{}", logo)?;
        writeln!(self.out, "{}", WELCOME)
    }

    /// Print the final report lines, headers highlighted
    pub fn report(&mut self, lines: &[String]) -> io::Result<()> {
        let farewell = self.paint_bold(FAREWELL, self.theme.header);
        writeln!(self.out)?;
        writeln!(self.out, "{}", farewell)?;
        for line in lines {
            let styled = if line.starts_with("---") {
                self.paint_bold(line, self.theme.accent)
            } else if line.starts_with("Suspeito:") {
                self.paint(line, self.theme.warning)
            } else if line.starts_with("SUSPEITO MAIS PROVAVEL") {
                self.paint_bold(line, self.theme.alert)
            } else {
                self.paint(line, self.theme.fg)
            };
            writeln!(self.out, "{}", styled)?;
        }
        self.out.flush()
    }

    /// First write failure seen while playing, if any
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn prompt(&mut self, room: &Room) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let name = self.paint_bold(&room.name, self.theme.accent);
        writeln!(self.out)?;
        writeln!(self.out, "Voce esta em: {}", name)?;
        write!(self.out, "{}", PROMPT)?;
        self.out.flush()
    }

    fn describe(&mut self, event: &SessionEvent) -> io::Result<()> {
        match event {
            SessionEvent::Entered { .. } => Ok(()),
            SessionEvent::ClueFound { clue, .. } => {
                let header = self.paint_bold("--- PISTA ENCONTRADA ---", self.theme.success);
                writeln!(self.out)?;
                writeln!(self.out, "{}", header)?;
                writeln!(self.out, "Pista: {}", clue)
            }
            SessionEvent::NoRoom { .. } => {
                let warning = self.paint(
                    "Nao ha saida nessa direcao. Tente outra acao.",
                    self.theme.warning,
                );
                writeln!(self.out, "{}", warning)
            }
            SessionEvent::Ended(Ending::InvalidInput(key)) => {
                let warning = self.paint(
                    &format!("Acao desconhecida '{}'. Encerrando a investigacao...", key),
                    self.theme.alert,
                );
                writeln!(self.out, "{}", warning)
            }
            SessionEvent::Ended(_) => writeln!(self.out, "Saindo da sala..."),
        }
    }
}

impl<R: BufRead, W: Write> CommandSource for Console<R, W> {
    fn next_command(&mut self, room: &Room) -> Option<Command> {
        if self.error.is_some() {
            return None;
        }
        if let Err(err) = self.prompt(room) {
            self.error = Some(err);
            return None;
        }
        self.input.read_key().map(Command::from_key)
    }

    fn observe(&mut self, event: &SessionEvent) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = self.describe(event) {
            self.error = Some(err);
        }
    }
}
