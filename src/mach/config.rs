use crate::error;
use crate::lang::Error;

/// ## Capacity limits
///
/// Only limits with a reported "too many" condition live here.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    pub max_lines: usize,
    pub max_gosub_depth: usize,
    pub max_data_values: usize,
    pub max_then_depth: usize,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            max_lines: 1000,
            max_gosub_depth: 100,
            max_data_values: 1000,
            max_then_depth: 16,
        }
    }
}

/// Named flags changed with `SET`.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Settings {
    pub emu_amiga_m68k: bool,
}

impl Settings {
    pub fn set(&mut self, name: &str, value: &str) -> Result<String, Error> {
        if !name.eq_ignore_ascii_case("emu_amiga_m68k") {
            return Err(error!(IllegalFunctionCall; &format!("UNKNOWN SETTING {}", name)));
        }
        self.emu_amiga_m68k = match value.to_ascii_uppercase().as_str() {
            "TRUE" => true,
            "FALSE" => false,
            _ => {
                return Err(error!(IllegalFunctionCall; &format!(
                    "INVALID VALUE FOR emu_amiga_m68k {}",
                    value
                )))
            }
        };
        Ok(format!(
            "emu_amiga_m68k set to {}",
            if self.emu_amiga_m68k { "TRUE" } else { "FALSE" }
        ))
    }
}
