use colored::{Color, Colorize as _};
use std::{
    fmt::Display,
    io::{self, BufRead, Write},
};

/// Reads one trimmed line, treating a closed input stream as an error so
/// callers never spin on an empty response.
pub fn minimal(
    input: &mut impl BufRead,
    output: &mut impl Write,
    msg: impl Display,
) -> io::Result<String> {
    let mut response = String::new();
    write!(output, "{}: ", msg)?;
    output.flush()?;
    if input.read_line(&mut response)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input closed before a choice was made",
        ));
    }
    Ok(response.trim().to_owned())
}

pub fn default(
    input: &mut impl BufRead,
    output: &mut impl Write,
    msg: impl Display,
    default: Option<&str>,
    default_color: Option<Color>,
) -> io::Result<String> {
    let response = if let Some(default) = default {
        let msg = if let Some(default_color) = default_color {
            format!("{} ({})", msg, default.color(default_color).bold())
        } else {
            format!("{} ({})", msg, default)
        };
        minimal(input, output, msg)
    } else {
        minimal(input, output, msg)
    }?;
    match default {
        Some(default) if response.is_empty() => Ok(default.to_owned()),
        _ => Ok(response),
    }
}

pub fn list_display_only(
    output: &mut impl Write,
    choices: impl Iterator<Item = impl Display>,
    choice_count: usize,
) -> io::Result<()> {
    if choice_count > 0 {
        for (index, choice) in choices.enumerate() {
            writeln!(output, "  [{}] {}", index.to_string().green(), choice)?;
        }
    } else {
        writeln!(output, "  -- none --")?;
    }
    Ok(())
}

pub fn list(
    input: &mut impl BufRead,
    output: &mut impl Write,
    header: impl Display,
    choices: impl ExactSizeIterator<Item = impl Display>,
    noun: impl Display,
    msg: impl Display,
) -> io::Result<usize> {
    writeln!(output, "{}:", header)?;
    let choice_count = choices.len();
    list_display_only(output, choices, choice_count)?;
    writeln!(output, "  Enter an {} for a {} above.", "index".green(), noun)?;
    loop {
        let response = default(
            input,
            output,
            &msg,
            if choice_count == 1 { Some("0") } else { None },
            Some(Color::Green),
        )?;
        if response.is_empty() {
            writeln!(output, "Not to be pushy, but you need to pick a {}.", noun)?;
        } else if let Ok(index) = response.parse::<usize>() {
            if index < choice_count {
                return Ok(index);
            }
            writeln!(output, "There's no {} with an index that high.", noun)?;
        } else {
            writeln!(output, "Hey, that wasn't a number! You're silly.")?;
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rstest::rstest;

    fn pick(responses: &str, choices: &[&str]) -> (io::Result<usize>, String) {
        let mut input = io::Cursor::new(responses.as_bytes().to_vec());
        let mut output = Vec::new();
        let result = list(
            &mut input,
            &mut output,
            "Available simulators",
            choices.iter(),
            "device",
            "Device",
        );
        (result, String::from_utf8_lossy(&output).into_owned())
    }

    #[rstest(responses, index,
        case("1\n", 1),
        case("  0  \n", 0),
        case("9\n2\n", 2),
        case("nope\n\n1\n", 1)
    )]
    fn test_list_returns_first_valid_index(responses: &str, index: usize) {
        let (result, _) = pick(responses, &["iPhone 14", "iPhone SE", "iPad Air"]);
        assert_eq!(result.unwrap(), index);
    }

    #[test]
    fn test_list_single_choice_defaults_to_zero() {
        let (result, _) = pick("\n", &["iPhone 14"]);
        assert_eq!(result.unwrap(), 0);
    }

    #[test]
    fn test_list_complains_about_bad_input() {
        let (_, output) = pick("7\nabc\n\n0\n", &["iPhone 14", "iPhone SE"]);
        assert!(output.contains("There's no device with an index that high."));
        assert!(output.contains("Hey, that wasn't a number!"));
        assert!(output.contains("you need to pick a device"));
    }

    #[test]
    fn test_list_fails_when_input_closes() {
        let (result, _) = pick("", &["iPhone 14", "iPhone SE"]);
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_list_display_only_empty() {
        let mut output = Vec::new();
        list_display_only(&mut output, std::iter::empty::<&str>(), 0).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "  -- none --\n");
    }
}
