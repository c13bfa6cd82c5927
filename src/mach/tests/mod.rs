use crate::mach::{Config, Host, Runtime, Val};
use std::collections::VecDeque;

mod data_test;
mod for_test;

#[derive(Default)]
struct Capture {
    output: String,
    input: VecDeque<String>,
}

impl Host for Capture {
    fn print(&mut self, s: &str) {
        self.output.push_str(s);
    }

    fn read_line(&mut self) -> Option<String> {
        self.input.pop_front()
    }
}

fn runtime() -> Runtime<Capture> {
    Runtime::default()
}

fn runtime_with(config: Config) -> Runtime<Capture> {
    Runtime::with_config(Capture::default(), config)
}

fn enter_all(runtime: &mut Runtime<Capture>, lines: &[&str]) {
    for line in lines {
        runtime.enter(line);
    }
}

fn exec(runtime: &mut Runtime<Capture>) -> String {
    std::mem::take(&mut runtime.host_mut().output)
}

fn number(runtime: &Runtime<Capture>, name: &str) -> Option<f64> {
    match runtime.variable(name) {
        Some(Val::Number(n)) => Some(n),
        _ => None,
    }
}
