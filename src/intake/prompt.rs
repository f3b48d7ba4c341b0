use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};

/// Print `message` and read one trimmed line from `input`.
///
/// End of input is an error so a piped wizard can't spin forever.
pub fn read_answer<R: BufRead>(input: &mut R, message: &str) -> Result<String> {
    print!("{}", message);
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("Failed to read answer from stdin")?;
    if read == 0 {
        anyhow::bail!("Input ended before the questionnaire was finished");
    }
    Ok(line.trim().to_string())
}

/// Ask a question, returning `default` when the answer is blank
pub fn prompt_with_default<R: BufRead>(input: &mut R, message: &str, default: &str) -> Result<String> {
    let answer = read_answer(input, &format!("{} [{}]: ", message, default))?;
    if answer.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(answer)
    }
}

/// Ask for a dollar amount. Accepts "250000", "$250,000", "250k" or "1.2m".
/// Re-asks until the answer parses.
pub fn prompt_amount<R: BufRead>(input: &mut R, message: &str, default: f64) -> Result<f64> {
    loop {
        let answer = prompt_with_default(input, message, &format!("{}", default))?;
        match parse_amount(&answer) {
            Some(value) => return Ok(value),
            None => println!("  Enter an amount like 250000, $250,000 or 250k."),
        }
    }
}

/// Ask for a whole number in `min..=max`
pub fn prompt_in_range<R: BufRead>(
    input: &mut R,
    message: &str,
    min: u8,
    max: u8,
    default: u8,
) -> Result<u8> {
    loop {
        let answer = prompt_with_default(input, &format!("{} ({}-{})", message, min, max), &default.to_string())?;
        match answer.parse::<u8>() {
            Ok(value) if (min..=max).contains(&value) => return Ok(value),
            _ => println!("  Enter a number from {} to {}.", min, max),
        }
    }
}

/// Offer a numbered list of choices and return the picked value
pub fn prompt_choice<'a, R: BufRead>(
    input: &mut R,
    message: &str,
    choices: &[(&'a str, &'a str)],
) -> Result<&'a str> {
    println!("{}", message);
    for (i, (_, label)) in choices.iter().enumerate() {
        println!("  {}. {}", i + 1, label);
    }
    loop {
        let answer = read_answer(input, "> ")?;
        if let Ok(n) = answer.parse::<usize>() {
            if (1..=choices.len()).contains(&n) {
                return Ok(choices[n - 1].0);
            }
        }
        if let Some((value, _)) = choices
            .iter()
            .find(|(value, label)| value.eq_ignore_ascii_case(&answer) || label.eq_ignore_ascii_case(&answer))
        {
            return Ok(*value);
        }
        println!("  Pick a number from 1 to {}.", choices.len());
    }
}

/// Yes/no question on stdin
pub fn prompt_yes_no(message: &str, default_yes: bool) -> Result<bool> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    ask_yes_no(&mut input, message, default_yes)
}

pub fn ask_yes_no<R: BufRead>(input: &mut R, message: &str, default_yes: bool) -> Result<bool> {
    let hint = if default_yes { "Y/n" } else { "y/N" };
    loop {
        let answer = read_answer(input, &format!("{} [{}] ", message, hint))?;
        match answer.to_lowercase().as_str() {
            "" => return Ok(default_yes),
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => println!("  Please answer y or n."),
        }
    }
}

/// Parse a loosely formatted dollar amount
pub fn parse_amount(s: &str) -> Option<f64> {
    let cleaned: String = s
        .trim()
        .chars()
        .filter(|c| *c != '$' && *c != ',' && *c != '_')
        .collect::<String>()
        .to_lowercase();
    let (number, scale) = if let Some(n) = cleaned.strip_suffix('k') {
        (n, 1_000.0)
    } else if let Some(n) = cleaned.strip_suffix('m') {
        (n, 1_000_000.0)
    } else {
        (cleaned.as_str(), 1.0)
    };
    let value = number.trim().parse::<f64>().ok()? * scale;
    if value.is_finite() {
        Some(value)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("250000"), Some(250_000.0));
        assert_eq!(parse_amount("$250,000"), Some(250_000.0));
        assert_eq!(parse_amount("250k"), Some(250_000.0));
        assert_eq!(parse_amount("1.5M"), Some(1_500_000.0));
        assert_eq!(parse_amount("-50k"), Some(-50_000.0));
        assert_eq!(parse_amount("lots"), None);
        assert_eq!(parse_amount(""), None);
    }

    #[test]
    fn test_prompt_with_default_blank() {
        let mut input = Cursor::new("\n");
        assert_eq!(prompt_with_default(&mut input, "Name", "Acme").unwrap(), "Acme");
    }

    #[test]
    fn test_prompt_amount_retries() {
        let mut input = Cursor::new("lots\n300k\n");
        assert_eq!(prompt_amount(&mut input, "Price", 0.0).unwrap(), 300_000.0);
    }

    #[test]
    fn test_prompt_in_range_rejects_out_of_range() {
        let mut input = Cursor::new("9\n2\n");
        assert_eq!(prompt_in_range(&mut input, "Involvement", 1, 5, 3).unwrap(), 2);
    }

    #[test]
    fn test_prompt_choice_by_number_and_name() {
        let choices = [("full-time", "Full-time"), ("part-time", "Part-time")];
        let mut input = Cursor::new("2\n");
        assert_eq!(prompt_choice(&mut input, "Time?", &choices).unwrap(), "part-time");

        let mut input = Cursor::new("nope\nfull-time\n");
        assert_eq!(prompt_choice(&mut input, "Time?", &choices).unwrap(), "full-time");
    }

    #[test]
    fn test_ask_yes_no() {
        assert!(ask_yes_no(&mut Cursor::new("\n"), "Ok?", true).unwrap());
        assert!(!ask_yes_no(&mut Cursor::new("N\n"), "Ok?", true).unwrap());
        assert!(ask_yes_no(&mut Cursor::new("maybe\nyes\n"), "Ok?", false).unwrap());
    }

    #[test]
    fn test_end_of_input_is_error() {
        assert!(read_answer(&mut Cursor::new(""), "Name: ").is_err());
    }
}
