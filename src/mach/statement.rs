use super::control::Flow;
use super::expression::{self, operand, string_value};
use super::{format_number, Address, Host, LoopFrame, Operation, Runtime, Val};
use crate::error;
use crate::lang::token::{Ident, Literal, Operator, Token, Word};
use crate::lang::{split_statements, Error};
use std::io;

type Result<T> = std::result::Result<T, Error>;

/// ## Statement dispatcher
///
/// Each statement returns its own error; the dispatcher reports it and
/// execution carries on with the following statement.

impl<H: Host> Runtime<H> {
    /// Run colon-separated statements until one changes the flow.
    pub(super) fn dispatch_clause(&mut self, tokens: &[Token], depth: usize) {
        for range in split_statements(tokens) {
            self.dispatch(&tokens[range], depth);
            if self.flow != Flow::Next {
                break;
            }
        }
    }

    pub(super) fn dispatch(&mut self, tokens: &[Token], depth: usize) {
        if let Err(error) = self.statement(tokens, depth) {
            self.report(error);
        }
    }

    fn statement(&mut self, tokens: &[Token], depth: usize) -> Result<()> {
        match tokens.first() {
            None => Ok(()),
            Some(Token::Word(word)) => self.word(*word, &tokens[1..], depth),
            Some(Token::Ident(_)) => self.r#let(tokens),
            Some(Token::Literal(Literal::Number(_))) => {
                Err(error!(SyntaxError; "UNEXPECTED NUMBER"))
            }
            Some(token) => Err(error!(UnimplementedCommand; &token.to_string())),
        }
    }

    fn word(&mut self, word: Word, args: &[Token], depth: usize) -> Result<()> {
        match word {
            Word::Data | Word::Rem => Ok(()),
            Word::Dir => self.r#dir(args),
            Word::End => self.r#end(args),
            Word::For => self.r#for(args),
            Word::Gosub => self.r#gosub(args),
            Word::Goto => self.r#goto(args),
            Word::If => self.r#if(args, depth),
            Word::Input => self.r#input(args),
            Word::Let => self.r#let(args),
            Word::List => self.list_statement(args),
            Word::Load => self.r#load(args),
            Word::New => self.new_statement(args),
            Word::Next => self.r#next(args),
            Word::Print => self.r#print(args),
            Word::Read => self.r#read(args),
            Word::Restore => self.r#restore(args),
            Word::Return => self.r#return(args),
            Word::Run => self.run_statement(args),
            Word::Set => self.r#set(args),
            Word::Add | Word::Div | Word::Sub => self.r#calculate(word, args),
            Word::Floor => self.r#floor(args),
            Word::Abs
            | Word::Clear
            | Word::Int
            | Word::Rnd
            | Word::Sin
            | Word::Sqr
            | Word::Step
            | Word::Stop
            | Word::Tab
            | Word::Then
            | Word::To
            | Word::Usr => Err(error!(UnimplementedCommand; &word.to_string())),
        }
    }

    fn r#calculate(&mut self, word: Word, args: &[Token]) -> Result<()> {
        let (lhs, rhs) = match self.operands(args)?.as_slice() {
            [lhs, rhs] => (*lhs, *rhs),
            _ => return Err(error!(SyntaxError; &format!("{} NEEDS TWO NUMBERS", word))),
        };
        let result = match word {
            Word::Add => Operation::sum(lhs, rhs)?,
            Word::Sub => Operation::subtract(lhs, rhs)?,
            _ => Operation::divide(lhs, rhs)?,
        };
        self.host.print(&format!("Result: {:.2}\n", result));
        Ok(())
    }

    fn r#dir(&mut self, args: &[Token]) -> Result<()> {
        no_arguments(args)?;
        let names = self.host.list_dir().map_err(|e| io_error(e, "."))?;
        for name in names {
            self.host.print(&format!("{}\n", name));
        }
        Ok(())
    }

    fn r#end(&mut self, args: &[Token]) -> Result<()> {
        no_arguments(args)?;
        self.flow = Flow::End;
        Ok(())
    }

    fn r#floor(&mut self, args: &[Token]) -> Result<()> {
        let value = match self.operands(args)?.as_slice() {
            [value] => Operation::floor(*value)?,
            _ => return Err(error!(SyntaxError; "FLOOR NEEDS ONE NUMBER")),
        };
        self.host.print(&format!("Result: {:.0}\n", value));
        Ok(())
    }

    fn r#for(&mut self, args: &[Token]) -> Result<()> {
        self.require_running()?;
        let ident = match args {
            [Token::Ident(ident), Token::Operator(Operator::Equal), ..] => ident,
            _ => return Err(error!(SyntaxError; "INVALID FOR")),
        };
        if ident.is_string() {
            return Err(error!(TypeMismatch; &format!("{} IS NOT NUMERIC", ident)));
        }
        let bounds = &args[2..];
        let to = bounds
            .iter()
            .position(|t| t.is_word(Word::To))
            .ok_or_else(|| error!(SyntaxError; "MISSING TO"))?;
        let (end, step) = match bounds.iter().position(|t| t.is_word(Word::Step)) {
            Some(step) if step > to => (&bounds[to + 1..step], Some(&bounds[step + 1..])),
            Some(_) => return Err(error!(SyntaxError; "STEP BEFORE TO")),
            None => (&bounds[to + 1..], None),
        };
        let start = operand(&bounds[..to], &mut self.var)?;
        let end = operand(end, &mut self.var)?;
        let step = match step {
            Some(step) => operand(step, &mut self.var)?,
            None => 1.0,
        };
        self.var.store(ident, Val::Number(start))?;
        if self.find_next(ident).is_none() {
            return Err(error!(ForWithoutNext));
        }
        if let Some(index) = self.loops.iter().position(|f| f.var.matches(ident)) {
            self.loops.truncate(index);
        }
        self.loops.push(LoopFrame {
            var: ident.clone(),
            end,
            step,
            body: self.cursor.next,
        });
        Ok(())
    }

    /// The NEXT paired with a FOR at the cursor, counting nested loops.
    fn find_next(&self, ident: &Ident) -> Option<Address> {
        let mut depth = 0;
        for (address, tokens) in self.listing.statements_after(self.cursor.current) {
            match tokens {
                [Token::Word(Word::For), ..] => depth += 1,
                [Token::Word(Word::Next)] => {
                    if depth == 0 {
                        return Some(address);
                    }
                    depth -= 1;
                }
                [Token::Word(Word::Next), Token::Ident(name), ..] => {
                    if name.matches(ident) {
                        return Some(address);
                    }
                    if depth > 0 {
                        depth -= 1;
                    }
                }
                _ => {}
            }
        }
        None
    }

    fn r#gosub(&mut self, args: &[Token]) -> Result<()> {
        self.require_running()?;
        let address = self.target(args)?;
        self.gosub.push(self.cursor.next)?;
        self.jump_to(address);
        Ok(())
    }

    fn r#goto(&mut self, args: &[Token]) -> Result<()> {
        let address = self.target(args)?;
        if self.running {
            self.jump_to(address);
        } else {
            self.ensure_data();
            self.execute(address);
            self.flow = Flow::End;
        }
        Ok(())
    }

    fn r#if(&mut self, args: &[Token], depth: usize) -> Result<()> {
        let then = args
            .iter()
            .position(|t| t.is_word(Word::Then))
            .ok_or_else(|| error!(SyntaxError; "MISSING THEN"))?;
        if depth >= self.config.max_then_depth {
            return Err(error!(OutOfMemory; "IF NESTED TOO DEEPLY"));
        }
        if self.evaluate(&args[..then]) != 0.0 {
            self.dispatch_clause(&args[then + 1..], depth + 1);
        }
        Ok(())
    }

    fn r#input(&mut self, args: &[Token]) -> Result<()> {
        let (prompt, ident) = match args {
            [Token::Literal(Literal::String(prompt)), Token::Semicolon, Token::Ident(ident)]
            | [Token::Literal(Literal::String(prompt)), Token::Comma, Token::Ident(ident)]
            | [Token::Literal(Literal::String(prompt)), Token::Ident(ident)] => {
                (prompt.as_str(), ident)
            }
            [Token::Ident(ident)] => ("? ", ident),
            _ => return Err(error!(SyntaxError; "INVALID INPUT")),
        };
        self.host.print(prompt);
        let text = self.host.read_line().ok_or_else(|| error!(InputPastEnd))?;
        if ident.is_string() {
            return self.var.store(ident, Val::String(text));
        }
        let text = text.trim_start();
        if text.is_empty() {
            return self.var.store(ident, Val::Number(0.0));
        }
        match text.parse::<f64>() {
            Ok(value) => self.var.store(ident, Val::Number(value)),
            Err(_) => {
                self.var.store(ident, Val::Number(0.0))?;
                Err(error!(TypeMismatch; "INVALID NUMBER INPUT"))
            }
        }
    }

    fn r#let(&mut self, args: &[Token]) -> Result<()> {
        let equal = args
            .iter()
            .position(|t| t.is_operator(Operator::Equal))
            .ok_or_else(|| error!(SyntaxError; "MISSING ="))?;
        let ident = match &args[..equal] {
            [Token::Ident(ident)] => ident,
            _ => return Err(error!(SyntaxError; "INVALID VARIABLE")),
        };
        let value = if ident.is_string() {
            Val::String(string_value(&args[equal + 1..], &mut self.var)?)
        } else {
            Val::Number(self.evaluate(&args[equal + 1..]))
        };
        self.var.store(ident, value)
    }

    fn list_statement(&mut self, args: &[Token]) -> Result<()> {
        let (start, end) = match args {
            [] => (0, None),
            [line] => {
                let line = line.line_number()?;
                (line, Some(line))
            }
            [start, dash] if is_range_dash(dash) => (start.line_number()?, None),
            [dash, end] if is_range_dash(dash) => (0, Some(end.line_number()?)),
            [start, dash, end] if is_range_dash(dash) => {
                (start.line_number()?, Some(end.line_number()?))
            }
            _ => return Err(error!(SyntaxError; "INVALID LIST RANGE")),
        };
        self.list(start, end);
        Ok(())
    }

    fn r#load(&mut self, args: &[Token]) -> Result<()> {
        let mut argv: Vec<String> = vec![];
        for (index, token) in args.iter().enumerate() {
            match token {
                Token::Literal(Literal::String(s)) => {
                    argv.extend(s.split_whitespace().map(String::from))
                }
                _ if index == 0 => break,
                _ => {}
            }
        }
        if argv.is_empty() {
            return Err(error!(SyntaxError; "LOAD NEEDS A QUOTED COMMAND"));
        }
        tracing::debug!(?argv, "spawn");
        self.host.spawn(&argv).map_err(|e| io_error(e, &argv[0]))
    }

    fn new_statement(&mut self, args: &[Token]) -> Result<()> {
        no_arguments(args)?;
        self.reset();
        if self.running {
            self.flow = Flow::End;
        }
        Ok(())
    }

    fn r#next(&mut self, args: &[Token]) -> Result<()> {
        self.require_running()?;
        let index = match args {
            [] => self.loops.len().checked_sub(1),
            [Token::Ident(ident)] => self.loops.iter().rposition(|f| f.var.matches(ident)),
            _ => return Err(error!(SyntaxError; "INVALID NEXT")),
        }
        .ok_or_else(|| error!(NextWithoutFor))?;
        self.loops.truncate(index + 1);
        let frame = self.loops[index].clone();
        let value = self.var.fetch_number(&frame.var)? + frame.step;
        self.var.store(&frame.var, Val::Number(value))?;
        if frame.is_finished(value) {
            self.loops.pop();
        } else {
            self.jump_to(frame.body);
        }
        Ok(())
    }

    fn r#print(&mut self, args: &[Token]) -> Result<()> {
        let (escapes, args) = match args {
            [Token::Operator(Operator::Minus), Token::Ident(flag), rest @ ..]
                if flag.name().eq_ignore_ascii_case("e") =>
            {
                (true, rest)
            }
            _ => (false, args),
        };
        let mut s = String::new();
        let mut index = 0;
        while index < args.len() {
            match &args[index] {
                Token::Literal(Literal::String(text)) if escapes => s.push_str(&unescape(text)),
                Token::Literal(Literal::String(text)) => s.push_str(text),
                Token::Literal(Literal::Number(n)) => s.push_str(&format_number(number(n)?)),
                Token::Ident(ident) => s.push_str(&self.var.fetch(ident).to_string()),
                Token::Comma => s.push('\t'),
                Token::Semicolon => {}
                Token::Word(Word::Tab) => {
                    if let Some(Token::Literal(Literal::Number(n))) = args.get(index + 1) {
                        s.push_str(&" ".repeat(tab_width(n)?));
                        index += 1;
                    }
                }
                _ => s.push(' '),
            }
            index += 1;
        }
        if args.last() != Some(&Token::Semicolon) {
            s.push('\n');
        }
        self.host.print(&s);
        Ok(())
    }

    fn r#read(&mut self, args: &[Token]) -> Result<()> {
        self.ensure_data();
        for token in args {
            let ident = match token {
                Token::Comma => continue,
                Token::Ident(ident) => ident,
                _ => return Err(error!(SyntaxError; "INVALID READ")),
            };
            if ident.is_string() {
                return Err(error!(TypeMismatch; "STRING DATA NOT SUPPORTED"));
            }
            self.var.fetch(ident);
            let value = self.data.read().ok_or_else(|| error!(OutOfData))?;
            self.var.store(ident, Val::Number(value))?;
        }
        Ok(())
    }

    fn r#restore(&mut self, args: &[Token]) -> Result<()> {
        no_arguments(args)?;
        self.data.restore();
        Ok(())
    }

    fn r#return(&mut self, args: &[Token]) -> Result<()> {
        self.require_running()?;
        no_arguments(args)?;
        let address = self.gosub.pop().ok_or_else(|| error!(ReturnWithoutGosub))?;
        self.jump_to(address);
        Ok(())
    }

    fn run_statement(&mut self, args: &[Token]) -> Result<()> {
        let start = match args {
            [] => None,
            [line] => Some(line.line_number()?),
            _ => return Err(error!(SyntaxError; "INVALID RUN")),
        };
        if self.running {
            let address = self.start_address(start)?;
            self.prepare();
            self.jump_to(address);
        } else {
            self.run(start);
            self.flow = Flow::End;
        }
        Ok(())
    }

    fn r#set(&mut self, args: &[Token]) -> Result<()> {
        match args {
            [Token::Ident(name), Token::Operator(Operator::Equal), Token::Ident(value)] => {
                let confirmation = self.settings.set(name.name(), value.name())?;
                self.host.print(&format!("{}\n", confirmation));
                Ok(())
            }
            _ => Err(error!(IllegalFunctionCall; "INVALID SET")),
        }
    }

    /// Numeric evaluation never fails a statement. Errors are reported
    /// and the value is zero.
    fn evaluate(&mut self, tokens: &[Token]) -> f64 {
        match expression::evaluate(tokens, &mut self.var) {
            Ok(value) => value,
            Err(error) => {
                self.report(error);
                0.0
            }
        }
    }

    /// Signed operands separated by optional commas.
    fn operands(&mut self, args: &[Token]) -> Result<Vec<f64>> {
        let mut values = vec![];
        let mut index = 0;
        while index < args.len() {
            let width = match &args[index] {
                Token::Comma => {
                    index += 1;
                    continue;
                }
                Token::Operator(Operator::Minus) => 2,
                _ => 1,
            };
            let end = args.len().min(index + width);
            values.push(operand(&args[index..end], &mut self.var)?);
            index = end;
        }
        Ok(values)
    }

    fn target(&self, args: &[Token]) -> Result<Address> {
        let line = match args {
            [line] => line.line_number()?,
            _ => return Err(error!(SyntaxError; "MISSING LINE NUMBER")),
        };
        self.listing
            .position(line)
            .map(Address::start_of)
            .ok_or_else(|| error!(UndefinedLine))
    }

    fn require_running(&self) -> Result<()> {
        if self.running {
            Ok(())
        } else {
            Err(error!(IllegalDirect))
        }
    }
}

fn no_arguments(args: &[Token]) -> Result<()> {
    match args.first() {
        None => Ok(()),
        Some(token) => Err(error!(SyntaxError; &format!("UNEXPECTED {}", token))),
    }
}

fn is_range_dash(token: &Token) -> bool {
    matches!(token, Token::Operator(Operator::Minus) | Token::Comma)
}

fn number(s: &str) -> Result<f64> {
    s.parse::<f64>()
        .map_err(|_| error!(SyntaxError; "INVALID NUMBER"))
}

/// Widest `TAB` accepted by PRINT.
const MAX_TAB: usize = 255;

fn tab_width(s: &str) -> Result<usize> {
    let width = number(s)?;
    if width > MAX_TAB as f64 {
        return Err(error!(IllegalFunctionCall; "TAB TOO LARGE"));
    }
    Ok(width as usize)
}

fn io_error(error: io::Error, name: &str) -> Error {
    match error.kind() {
        io::ErrorKind::NotFound => error!(FileNotFound; name),
        _ => error!(InternalError; &error.to_string().to_uppercase()),
    }
}

/// Backslash escapes understood by `PRINT -e`.
fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('\\') => out.push('\\'),
            Some('r') => out.push('\r'),
            Some('b') => out.push('\u{8}'),
            Some('f') => out.push('\u{c}'),
            Some('v') => out.push('\u{b}'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unescape() {
        assert_eq!(unescape(r"a\tb\n"), "a\tb\n");
        assert_eq!(unescape(r"\\"), "\\");
        assert_eq!(unescape(r"\q"), "\\q");
        assert_eq!(unescape(r"end\"), "end\\");
    }

    #[test]
    fn test_tab_width() {
        assert_eq!(tab_width("3"), Ok(3));
        assert_eq!(tab_width("255"), Ok(255));
        assert!(tab_width("256").is_err());
        assert!(tab_width("99999999999999999999").is_err());
    }
}
