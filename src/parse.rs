use crate::opts::OptionList;

/// Represents errors that can occur while scanning the argument list
#[derive(Debug, thiserror::Error)]
pub enum OptionError {
    #[error("invalid option '-{}'", printable(*.0))]
    InvalidOption(char),
}

/// Renders a flag character for error messages, hex-escaping anything
/// outside printable ASCII
fn printable(name: char) -> String {
    if name == ' ' || name.is_ascii_graphic() {
        name.to_string()
    } else {
        format!("\\x{:02x}", name as u32)
    }
}

/// Scans `args` for `-x` style flags and dispatches each one to its handler
///
/// Scanning ends at the first argument without a `-` prefix, or right after
/// a handler returns `false`. Only the character following the dash names
/// the flag; anything after it is ignored.
///
/// # Arguments
/// * `args` - The argument list, typically everything after the program name
/// * `opts` - The registered options; sorted here if not already
///
/// # Returns
/// * `Result<&[&str], OptionError>` - The unconsumed tail of `args`, or an
///   error naming the first unregistered flag
pub fn parse_options<'s>(
    args: &'s [&'s str],
    opts: &mut OptionList,
) -> Result<&'s [&'s str], OptionError> {
    opts.sort();

    let mut rest = args;
    while let Some((arg, tail)) = rest.split_first() {
        if !arg.starts_with('-') {
            break;
        }
        // A bare "-" scans as the NUL flag
        let name = arg.chars().nth(1).unwrap_or('\0');
        let opt = opts
            .find_mut(name)
            .ok_or(OptionError::InvalidOption(name))?;
        let keep_going = opt.on_option();
        rest = tail;
        if !keep_going {
            break;
        }
    }

    Ok(rest)
}
