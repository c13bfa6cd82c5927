use super::control::Flow;
use super::{Address, Config, Cursor, Data, Host, Listing, LoopFrame, Settings, Stack, Val, Var};
use crate::error;
use crate::lang::token::{Ident, Token, Word};
use crate::lang::{Error, ErrorCode, Line, MAX_LINE_NUMBER};
use std::rc::Rc;

/// ## Interpreter context
///
/// A program, its variables and its control state. Nothing is shared
/// between runtimes; each host gets its own.

pub struct Runtime<H: Host> {
    pub(super) host: H,
    pub(super) config: Config,
    pub(super) settings: Settings,
    pub(super) listing: Listing,
    pub(super) var: Var,
    pub(super) data: Data,
    pub(super) data_dirty: bool,
    pub(super) gosub: Stack<Address>,
    pub(super) loops: Vec<LoopFrame>,
    pub(super) cursor: Cursor,
    pub(super) running: bool,
    pub(super) flow: Flow,
}

impl<H: Host + Default> Default for Runtime<H> {
    fn default() -> Self {
        Runtime::new(H::default())
    }
}

impl<H: Host> Runtime<H> {
    pub fn new(host: H) -> Runtime<H> {
        Runtime::with_config(host, Config::default())
    }

    pub fn with_config(host: H, config: Config) -> Runtime<H> {
        Runtime {
            host,
            listing: Listing::new(config.max_lines),
            data: Data::new(config.max_data_values),
            gosub: Stack::new("GOSUB STACK OVERFLOW", config.max_gosub_depth),
            config,
            settings: Settings::default(),
            var: Var::new(),
            data_dirty: false,
            loops: vec![],
            cursor: Cursor::default(),
            running: false,
            flow: Flow::Next,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn listing(&self) -> &Listing {
        &self.listing
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Current value of a variable without creating it.
    pub fn variable(&self, name: &str) -> Option<Val> {
        self.var.get(&Ident::new(name)).cloned()
    }

    /// Tokenize one line of text then store it or execute it.
    /// Lexical errors are reported but the line is still used.
    pub fn enter(&mut self, s: &str) {
        let line = Line::new(s);
        for error in line.errors() {
            self.report(error.clone().in_line_number(line.number()));
        }
        if line.is_direct() {
            self.load_immediate(line);
        } else {
            self.load_line(line);
        }
    }

    /// Insert or replace a numbered line.
    pub fn load_line(&mut self, line: Line) {
        if line.is_direct() {
            return self.load_immediate(line);
        }
        if let Err(error) = self.listing.insert(line) {
            return self.report(error);
        }
        self.data_dirty = true;
        // Stored positions shift on insert.
        self.gosub.clear();
        self.loops.clear();
    }

    /// Execute the statements of a line once, without storing it.
    pub fn load_immediate(&mut self, line: Line) {
        if !line.is_direct() {
            return self.load_line(line);
        }
        self.flow = Flow::Next;
        self.dispatch_clause(line.tokens(), 0);
        self.flow = Flow::Next;
    }

    /// Start the program from its first line or from line `start`.
    pub fn run(&mut self, start: Option<u16>) {
        match self.start_address(start) {
            Ok(address) => {
                self.prepare();
                self.execute(address);
            }
            Err(error) => self.report(error),
        }
    }

    /// Print the stored lines numbered `start` through `end`.
    pub fn list(&mut self, start: u16, end: Option<u16>) {
        let end = end.unwrap_or(MAX_LINE_NUMBER);
        let lines: Vec<String> = self
            .listing
            .range(start..=end)
            .map(|line| format!("{}\n", line))
            .collect();
        for line in lines {
            self.host.print(&line);
        }
    }

    /// Forget the program and all of its state.
    pub fn reset(&mut self) {
        self.listing.clear();
        self.var.clear();
        self.data.clear();
        self.data_dirty = false;
        self.gosub.clear();
        self.loops.clear();
        self.cursor = Cursor::default();
    }

    pub(super) fn start_address(&self, start: Option<u16>) -> Result<Address, Error> {
        match start {
            None => Ok(Address::default()),
            Some(number) => self
                .listing
                .position(number)
                .map(Address::start_of)
                .ok_or_else(|| error!(UndefinedLine)),
        }
    }

    pub(super) fn prepare(&mut self) {
        self.var.clear();
        self.gosub.clear();
        self.loops.clear();
        self.ensure_data();
        self.data.restore();
    }

    /// The run loop. Ends on END or when execution moves past the last line.
    pub(super) fn execute(&mut self, start: Address) {
        self.cursor = Cursor::start(start);
        self.running = true;
        tracing::info!(position = start.line, lines = self.listing.len(), "run started");
        loop {
            self.cursor.current = self.cursor.next;
            let line = match self.listing.get(self.cursor.current.line) {
                Some(line) => Rc::clone(line),
                None => break,
            };
            self.cursor.next = following(self.cursor.current, &line);
            self.flow = Flow::Next;
            if let Some(statement) = line.statement(self.cursor.current.statement) {
                tracing::trace!(
                    line = ?line.number(),
                    statement = self.cursor.current.statement,
                    "dispatch"
                );
                self.dispatch(statement, 0);
            }
            if self.flow == Flow::End {
                break;
            }
        }
        tracing::info!(line = ?self.current_line_number(), "run stopped");
        self.running = false;
        self.flow = Flow::Next;
        self.cursor = Cursor::default();
    }

    /// Rebuild the DATA pool if the program changed since the last scan.
    pub(super) fn ensure_data(&mut self) {
        if !self.data_dirty {
            return;
        }
        self.data_dirty = false;
        self.data.clear();
        let mut errors = vec![];
        'lines: for line in self.listing.lines() {
            for statement in line.statements() {
                if let [Token::Word(Word::Data), values @ ..] = statement {
                    if let Err(error) = self.data.scan(values) {
                        let full = error.code() == ErrorCode::OutOfMemory as u16;
                        errors.push(error.in_line_number(line.number()));
                        if full {
                            break 'lines;
                        }
                        continue 'lines;
                    }
                }
            }
        }
        tracing::debug!(values = self.data.len(), "data scanned");
        for error in errors {
            self.report(error);
        }
    }

    pub(super) fn jump_to(&mut self, address: Address) {
        self.cursor.next = address;
        self.flow = Flow::Jump;
    }

    pub(super) fn report(&mut self, error: Error) {
        let error = if error.is_direct() && self.running {
            error.in_line_number(self.current_line_number())
        } else {
            error
        };
        tracing::debug!(%error, "error reported");
        self.host.report(&error);
    }

    fn current_line_number(&self) -> Option<u16> {
        self.listing
            .get(self.cursor.current.line)
            .and_then(|line| line.number())
    }
}

/// The statement after `address`, rolling over to the next stored line.
fn following(address: Address, line: &Line) -> Address {
    if address.statement + 1 < line.statement_count() {
        Address::new(address.line, address.statement + 1)
    } else {
        Address::start_of(address.line + 1)
    }
}
