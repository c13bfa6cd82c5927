use crate::lang::Error;
use std::io;

/// ## Outside world
///
/// Everything the runtime reads from or writes to goes through a host,
/// so a program can run without a terminal or an operating system.

pub trait Host {
    /// Sink for all program output.
    fn print(&mut self, s: &str);

    /// One line for INPUT without its terminator. `None` at end of input.
    fn read_line(&mut self) -> Option<String>;

    fn report(&mut self, error: &Error) {
        self.print(&format!("?{}\n", error));
    }

    /// Run an external command. `argv[0]` is the program.
    fn spawn(&mut self, _argv: &[String]) -> io::Result<()> {
        Err(unsupported("spawn"))
    }

    /// Names of the entries in the current directory.
    fn list_dir(&mut self) -> io::Result<Vec<String>> {
        Err(unsupported("list_dir"))
    }
}

fn unsupported(what: &str) -> io::Error {
    io::Error::new(
        io::ErrorKind::Other,
        format!("{} is not supported by this host", what),
    )
}
