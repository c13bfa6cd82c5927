extern crate ansi_term;
extern crate linefeed;
use crate::lang::Error;
use crate::mach::{Host, Runtime};
use ansi_term::Style;
use linefeed::complete::{PathCompleter, Suffix};
use linefeed::{Completer, Completion, Interface, Prompter, ReadResult, Terminal};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::process::Command;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

const BANNER: &str = "CBSH - Commodore BASIC Shell, version 1.0\n \n";

pub fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
    let result = match std::env::args().nth(1) {
        Some(filename) => run_script(&filename),
        None => main_loop(),
    };
    if let Err(error) = result {
        eprintln!("{}", error);
        std::process::exit(1);
    }
}

fn run_script(filename: &str) -> io::Result<()> {
    let file = File::open(filename)
        .map_err(|e| io::Error::new(e.kind(), format!("{}: {}", filename, e)))?;
    let mut runtime = Runtime::new(Console::new(false));
    for (index, line) in BufReader::new(file).lines().enumerate() {
        let line = line?;
        if index == 0 && line.starts_with("#!") {
            continue;
        }
        runtime.enter(&line);
    }
    tracing::debug!(file = filename, lines = runtime.listing().len(), "script loaded");
    runtime.run(None);
    Ok(())
}

fn main_loop() -> io::Result<()> {
    let mut runtime = Runtime::new(Console::new(true));
    let command = Interface::new("cbsh")?;
    command.set_prompt("> ")?;
    runtime.host_mut().print(BANNER);
    runtime.host_mut().print("READY.\n");
    loop {
        command.set_completer(Arc::new(LineCompleter::new(&runtime)));
        let string = match command.read_line()? {
            ReadResult::Input(string) => string,
            ReadResult::Signal(_) | ReadResult::Eof => break,
        };
        runtime.enter(&string);
        if !string.trim().is_empty() {
            command.add_history_unique(string);
        }
    }
    Ok(())
}

/// Standard streams and the operating system.
struct Console {
    styled: bool,
}

impl Console {
    fn new(styled: bool) -> Console {
        Console { styled }
    }
}

impl Host for Console {
    fn print(&mut self, s: &str) {
        let mut stdout = io::stdout();
        if let Err(error) = stdout.write_all(s.as_bytes()).and_then(|_| stdout.flush()) {
            tracing::warn!(%error, "stdout write failed");
        }
    }

    fn read_line(&mut self) -> Option<String> {
        let mut s = String::new();
        match io::stdin().lock().read_line(&mut s) {
            Ok(0) => None,
            Ok(_) => Some(s.trim_end_matches(&['\r', '\n'][..]).to_string()),
            Err(error) => {
                tracing::warn!(%error, "stdin read failed");
                None
            }
        }
    }

    fn report(&mut self, error: &Error) {
        let text = format!("?{}", error);
        if self.styled {
            self.print(&format!("{}\n", Style::new().bold().paint(text)));
        } else {
            self.print(&format!("{}\n", text));
        }
    }

    fn spawn(&mut self, argv: &[String]) -> io::Result<()> {
        let argv: Vec<String> = argv.iter().map(|arg| expand_home(arg)).collect();
        let (program, args) = match argv.split_first() {
            Some(split) => split,
            None => return Err(io::Error::new(io::ErrorKind::InvalidInput, "empty command")),
        };
        let status = Command::new(program).args(args).status()?;
        tracing::debug!(%program, %status, "command finished");
        Ok(())
    }

    fn list_dir(&mut self) -> io::Result<Vec<String>> {
        let mut names = vec![];
        for entry in std::fs::read_dir(".")? {
            names.push(entry?.file_name().to_string_lossy().into_owned());
        }
        names.sort();
        Ok(names)
    }
}

fn expand_home(arg: &str) -> String {
    let home = match std::env::var("HOME") {
        Ok(home) => home,
        Err(_) => return arg.to_string(),
    };
    if arg == "~" {
        home
    } else if let Some(rest) = arg.strip_prefix("~/") {
        format!("{}/{}", home, rest)
    } else {
        arg.to_string()
    }
}

/// A bare line number completes to that stored line; anything else
/// completes file names.
struct LineCompleter {
    lines: BTreeMap<u16, String>,
}

impl LineCompleter {
    fn new<H: Host>(runtime: &Runtime<H>) -> LineCompleter {
        let lines = runtime
            .listing()
            .lines()
            .filter_map(|line| line.number().map(|number| (number, line.to_string())))
            .collect();
        LineCompleter { lines }
    }
}

impl<Term: Terminal> Completer<Term> for LineCompleter {
    fn complete(
        &self,
        word: &str,
        prompter: &Prompter<Term>,
        start: usize,
        end: usize,
    ) -> Option<Vec<Completion>> {
        if let Ok(number) = prompter.buffer().trim().parse::<u16>() {
            if let Some(s) = self.lines.get(&number) {
                let mut completion = Completion::simple(s.clone());
                completion.suffix = Suffix::None;
                return Some(vec![completion]);
            }
        }
        PathCompleter.complete(word, prompter, start, end)
    }
}
