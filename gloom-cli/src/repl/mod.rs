pub mod history;

use gloom_eval::Config;
use gloom_import::FileLoader;
use gloom_repl::Repl;
use std::{
    io::{self, BufRead, Stdout, Write},
    path::PathBuf,
};
use termion::{
    cursor::DetectCursorPos,
    event::{Event, Key},
    input::TermRead,
    raw::{IntoRawMode, RawTerminal},
};

use crate::version::VERSION;

use self::history::History;

const GLOOM_BANNER: &str = r#"       _
  __ _| | ___   ___  _ __ ___
 / _` | |/ _ \ / _ \| '_ ` _ \
| (_| | | (_) | (_) | | | | | |
 \__, |_|\___/ \___/|_| |_| |_|
 |___/"#;

struct InputState {
    terminal_size: (u16, u16),
    cursor_row: u16,
    buffer_index: usize,
    buffer: String,
}

impl InputState {
    fn new(cursor_current_row: u16) -> io::Result<Self> {
        let terminal_size = termion::terminal_size()?;
        Ok(InputState {
            terminal_size,
            cursor_row: cursor_current_row,
            buffer_index: 0,
            buffer: String::new(),
        })
    }

    fn set(&mut self, value: &str) {
        self.buffer_index = value.len();
        self.buffer.clear();
        self.buffer.push_str(value);
    }

    fn reset(&mut self) {
        self.buffer_index = 0;
        self.buffer.clear();
    }

    fn left(&mut self, stdout: &mut dyn Write, count: u16) -> io::Result<()> {
        if count > 0 && self.buffer_index >= count as usize {
            write!(stdout, "{}", termion::cursor::Left(count))?;
            stdout.flush()?;
            self.buffer_index -= count as usize;
        }
        Ok(())
    }

    fn right(&mut self, stdout: &mut dyn Write, count: u16) -> io::Result<()> {
        if count > 0 && self.buffer_index + count as usize <= self.buffer.len() {
            write!(stdout, "{}", termion::cursor::Right(count))?;
            stdout.flush()?;
            self.buffer_index += count as usize;
        }
        Ok(())
    }

    // Only ASCII reaches the buffer, so byte and column indices agree.
    fn insert(&mut self, c: char) {
        if c.is_ascii() && !c.is_ascii_control() {
            self.buffer.insert(self.buffer_index, c);
            self.buffer_index += 1;
        }
    }

    fn delete(&mut self) {
        if self.buffer_index < self.buffer.len() {
            self.buffer.remove(self.buffer_index);
        }
    }

    fn backspace(&mut self, stdout: &mut dyn Write) -> io::Result<()> {
        if self.buffer_index >= 1 {
            self.buffer.remove(self.buffer_index - 1);
            self.left(stdout, 1)
        } else {
            Ok(())
        }
    }

    fn newline(&mut self, stdout: &mut dyn Write) -> io::Result<()> {
        let at_bottom_row = self.cursor_row == self.terminal_size.1;
        writeln!(stdout)?;
        if !at_bottom_row {
            self.cursor_row += 1;
        }
        write!(stdout, "{}", termion::cursor::Goto(1, self.cursor_row))?;
        stdout.flush()
    }

    fn draw(&self, stdout: &mut dyn Write, prompt: &str) -> io::Result<()> {
        write!(
            stdout,
            "{}{}{}{}{}",
            termion::cursor::Goto(1, self.cursor_row),
            termion::clear::AfterCursor,
            prompt,
            self.buffer,
            termion::cursor::Goto(
                prompt.len() as u16 + self.buffer_index as u16 + 1,
                self.cursor_row
            )
        )?;
        stdout.flush()
    }
}

/*
In raw mode a '\n' doesn't return the cursor to the first column, and the
input row has to follow the output down the screen.

`Newliner`'s write instance calls `InputState::newline` for each '\n' written.
*/
struct Newliner<'a> {
    input_state: &'a mut InputState,
    stdout: &'a mut RawTerminal<Stdout>,
}

impl<'a> Write for Newliner<'a> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut lines = buf.split(|b| *b == b'\n');
        let mut bytes_written = 0;
        if let Some(line) = lines.next() {
            bytes_written += self.stdout.write(line)?;
        }
        lines.try_for_each(|line| {
            self.input_state.newline(self.stdout)?;
            bytes_written += 1;
            bytes_written += self.stdout.write(line)?;
            Ok::<(), io::Error>(())
        })?;
        Ok(bytes_written)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.stdout.flush()
    }
}

/// Evaluates one line and writes its outcome, without a trailing newline.
/// Returns whether the session should end.
pub fn respond(repl: &mut Repl, line: &str, stdout: &mut dyn Write) -> io::Result<bool> {
    match repl.eval_show(line) {
        Ok(output) => {
            write!(stdout, "{}", output.stack)?;
            Ok(output.exit)
        }
        Err(err) => {
            write!(stdout, "error: {}", err)?;
            Ok(false)
        }
    }
}

/// Reads lines until end of input or until a line asks to exit.
pub fn run_lines(repl: &mut Repl, input: &mut dyn BufRead, stdout: &mut dyn Write) -> io::Result<()> {
    for line in input.lines() {
        let exit = respond(repl, &line?, stdout)?;
        writeln!(stdout)?;
        if exit {
            break;
        }
    }
    stdout.flush()
}

pub fn run(search_paths: Vec<PathBuf>, max_depth: usize) -> io::Result<()> {
    let context = gloom_builtins::builtins();
    let loader = FileLoader::new(search_paths);
    let mut repl = Repl::new(&context, &loader, Config { max_depth });

    let stdin = io::stdin();
    if !termion::is_tty(&stdin) {
        return run_lines(&mut repl, &mut stdin.lock(), &mut io::stdout());
    }

    let prompt = "> ";
    let mut stdout = io::stdout();
    let mut history = History::new(100);

    writeln!(
        stdout,
        "{} {}\n\nType exit<ENTER> to quit.\n",
        GLOOM_BANNER, VERSION
    )?;

    let mut stdout = stdout.into_raw_mode()?;
    let (_, cursor_current_row) = stdout.cursor_pos()?;
    let mut input_state = InputState::new(cursor_current_row)?;

    input_state.draw(&mut stdout, prompt)?;

    for event in stdin.events() {
        if let Event::Key(key) = event? {
            match key {
                Key::Backspace => {
                    input_state.backspace(&mut stdout)?;
                }
                Key::Delete => {
                    input_state.delete();
                }
                Key::Left => {
                    input_state.left(&mut stdout, 1)?;
                }
                Key::Right => {
                    input_state.right(&mut stdout, 1)?;
                }
                Key::Up => {
                    if let Some(line) = history.older() {
                        input_state.set(line);
                    }
                }
                Key::Down => match history.newer() {
                    Some(line) => input_state.set(line),
                    None => input_state.reset(),
                },
                Key::Ctrl('c') => input_state.reset(),
                Key::Ctrl('d') if input_state.buffer.is_empty() => {
                    input_state.newline(&mut stdout)?;
                    break;
                }
                Key::Char('\n') => {
                    history.push(&input_state.buffer);
                    input_state.newline(&mut stdout)?;

                    let line = input_state.buffer.clone();
                    let exit = respond(
                        &mut repl,
                        &line,
                        &mut Newliner {
                            input_state: &mut input_state,
                            stdout: &mut stdout,
                        },
                    )?;

                    input_state.newline(&mut stdout)?;
                    input_state.reset();
                    if exit {
                        break;
                    }
                }
                Key::Char(c) => {
                    input_state.insert(c);
                }
                _ => {}
            }
        }

        input_state.draw(&mut stdout, prompt)?;
    }

    Ok(())
}
