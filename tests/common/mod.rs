#![allow(dead_code)]

use cbsh::mach::{Host, Runtime};
use std::collections::VecDeque;
use std::io;

pub type Basic = Runtime<Capture>;

/// Host with scripted input and captured output.
#[derive(Default)]
pub struct Capture {
    pub output: String,
    pub input: VecDeque<String>,
    pub spawned: Vec<Vec<String>>,
    pub entries: Vec<String>,
}

impl Host for Capture {
    fn print(&mut self, s: &str) {
        self.output.push_str(s);
    }

    fn read_line(&mut self) -> Option<String> {
        self.input.pop_front()
    }

    fn spawn(&mut self, argv: &[String]) -> io::Result<()> {
        if argv[0] == "missing" {
            return Err(io::Error::new(io::ErrorKind::NotFound, "not found"));
        }
        self.spawned.push(argv.to_vec());
        Ok(())
    }

    fn list_dir(&mut self) -> io::Result<Vec<String>> {
        Ok(self.entries.clone())
    }
}

/// Output produced since the last call.
pub fn exec(runtime: &mut Basic) -> String {
    std::mem::take(&mut runtime.host_mut().output)
}

pub fn input(runtime: &mut Basic, line: &str) {
    runtime.host_mut().input.push_back(line.to_string());
}

pub fn program(runtime: &mut Basic, lines: &[&str]) {
    for line in lines {
        runtime.enter(line);
    }
}
