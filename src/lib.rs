mod opts;
mod parse;

pub use opts::{Handler, Opt, OptionList};
pub use parse::{parse_options, OptionError};
