//! Interactive input collection
//!
//! Prompts for the search keyword and the minimum rating. The functions
//! are generic over the reader and writer so tests can drive the prompt
//! loop with in-memory buffers.

use crate::error::{Error, Result};
use std::io::{BufRead, Write};

/// Lowest accepted minimum rating
pub const MIN_RATING: f64 = 0.0;

/// Highest accepted minimum rating
pub const MAX_RATING: f64 = 5.0;

const KEYWORD_PROMPT: &str = "Where do you want to go? (cafe, restaurant, ...): ";
const RATING_PROMPT: &str = "What is the minimum rating?: ";
const RATING_REPROMPT: &str = "What is the minimum rating? (enter a number between 0 and 5): ";

/// What the user asked for, captured once and immutable afterwards
#[derive(Debug, Clone, PartialEq)]
pub struct SearchCriteria {
    pub keyword: String,
    pub min_rating: f64,
}

/// Check a rating against the accepted range
pub fn rating_in_range(rating: f64) -> bool {
    (MIN_RATING..=MAX_RATING).contains(&rating)
}

/// Collect the search criteria, prompting only for missing values
///
/// Values already supplied (e.g. from CLI flags) skip their prompt.
pub fn read_criteria<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    keyword: Option<String>,
    min_rating: Option<f64>,
) -> Result<SearchCriteria> {
    let keyword = match keyword {
        Some(keyword) => keyword,
        None => read_keyword(input, output)?,
    };
    let min_rating = match min_rating {
        Some(rating) => rating,
        None => read_min_rating(input, output)?,
    };
    Ok(SearchCriteria {
        keyword,
        min_rating,
    })
}

/// Read the search keyword
///
/// Accepted as-is apart from the line ending; an empty keyword is
/// permitted and simply matches broadly downstream.
pub fn read_keyword<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<String> {
    write!(output, "{}", KEYWORD_PROMPT)?;
    output.flush()?;
    require_line(input)
}

/// Read the minimum rating, re-prompting until a value in range arrives
///
/// Out-of-range and unparsable lines both re-prompt; the loop only ends
/// on a valid value or end of input. Surrounding whitespace is ignored
/// when parsing.
pub fn read_min_rating<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<f64> {
    write!(output, "{}", RATING_PROMPT)?;
    output.flush()?;
    loop {
        let line = require_line(input)?;
        if let Ok(rating) = line.trim().parse::<f64>() {
            if rating_in_range(rating) {
                return Ok(rating);
            }
        }
        write!(output, "{}", RATING_REPROMPT)?;
        output.flush()?;
    }
}

/// Read one line with the trailing line ending removed
///
/// End of input is an error rather than a silent empty read, so a closed
/// stdin cannot spin the prompt loop forever.
fn require_line<R: BufRead>(input: &mut R) -> Result<String> {
    let mut line = String::new();
    let bytes_read = input.read_line(&mut line)?;
    if bytes_read == 0 {
        return Err(Error::Parse("Unexpected end of input".to_string()));
    }
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_rating(input: &str) -> (Result<f64>, String) {
        let mut reader = Cursor::new(input.as_bytes().to_vec());
        let mut output = Vec::new();
        let result = read_min_rating(&mut reader, &mut output);
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_keyword_kept_as_entered() {
        let mut reader = Cursor::new(b"cafe\n".to_vec());
        let mut output = Vec::new();

        let keyword = read_keyword(&mut reader, &mut output).unwrap();
        assert_eq!(keyword, "cafe");
        assert!(String::from_utf8(output).unwrap().contains("Where do you want to go?"));
    }

    #[test]
    fn test_keyword_keeps_inner_and_surrounding_spaces() {
        // No validation and no normalization beyond the line ending
        let mut reader = Cursor::new(b" corner cafe \n".to_vec());
        let mut output = Vec::new();

        let keyword = read_keyword(&mut reader, &mut output).unwrap();
        assert_eq!(keyword, " corner cafe ");
    }

    #[test]
    fn test_keyword_strips_crlf_line_ending() {
        let mut reader = Cursor::new(b"ramen\r\n".to_vec());
        let mut output = Vec::new();

        let keyword = read_keyword(&mut reader, &mut output).unwrap();
        assert_eq!(keyword, "ramen");
    }

    #[test]
    fn test_empty_keyword_is_permitted() {
        let mut reader = Cursor::new(b"\n".to_vec());
        let mut output = Vec::new();

        let keyword = read_keyword(&mut reader, &mut output).unwrap();
        assert_eq!(keyword, "");
    }

    #[test]
    fn test_first_valid_rating_is_returned_exactly() {
        let (result, output) = run_rating("4.5\n");
        assert_eq!(result.unwrap(), 4.5);
        assert!(!output.contains("enter a number between 0 and 5"));
    }

    #[test]
    fn test_out_of_range_ratings_reprompt() {
        let (result, output) = run_rating("7\n-1\n4.5\n");
        assert_eq!(result.unwrap(), 4.5);
        assert_eq!(output.matches(RATING_REPROMPT).count(), 2);
    }

    #[test]
    fn test_unparsable_rating_reprompts() {
        let (result, output) = run_rating("four\n3.5\n");
        assert_eq!(result.unwrap(), 3.5);
        assert_eq!(output.matches(RATING_REPROMPT).count(), 1);
    }

    #[test]
    fn test_boundary_ratings_accepted() {
        assert_eq!(run_rating("0\n").0.unwrap(), 0.0);
        assert_eq!(run_rating("5\n").0.unwrap(), 5.0);
        assert_eq!(run_rating("5.0\n").0.unwrap(), 5.0);
    }

    #[test]
    fn test_rating_ignores_surrounding_whitespace() {
        let (result, output) = run_rating("  4.5  \n");
        assert_eq!(result.unwrap(), 4.5);
        assert!(!output.contains("enter a number between 0 and 5"));
    }

    #[test]
    fn test_just_above_range_rejected() {
        let (result, output) = run_rating("5.1\n5\n");
        assert_eq!(result.unwrap(), 5.0);
        assert_eq!(output.matches(RATING_REPROMPT).count(), 1);
    }

    #[test]
    fn test_repeated_invalid_input_never_ends_the_loop() {
        let mut input = String::new();
        for _ in 0..50 {
            input.push_str("9.9\n");
        }
        input.push_str("2.5\n");

        let (result, output) = run_rating(&input);
        assert_eq!(result.unwrap(), 2.5);
        assert_eq!(output.matches(RATING_REPROMPT).count(), 50);
    }

    #[test]
    fn test_end_of_input_is_an_error_not_a_hang() {
        let (result, _) = run_rating("");
        assert!(matches!(result, Err(Error::Parse(_))));

        // Same if the input runs dry mid-loop
        let (result, _) = run_rating("42\n");
        assert!(matches!(result, Err(Error::Parse(_))));
    }

    #[test]
    fn test_read_criteria_prompts_for_missing_values_only() {
        // Both supplied: input is never touched
        let mut reader = Cursor::new(Vec::new());
        let mut output = Vec::new();
        let criteria =
            read_criteria(&mut reader, &mut output, Some("cafe".to_string()), Some(4.0)).unwrap();
        assert_eq!(criteria.keyword, "cafe");
        assert_eq!(criteria.min_rating, 4.0);
        assert!(output.is_empty());

        // Keyword supplied: only the rating prompt fires
        let mut reader = Cursor::new(b"3.5\n".to_vec());
        let mut output = Vec::new();
        let criteria =
            read_criteria(&mut reader, &mut output, Some("ramen".to_string()), None).unwrap();
        assert_eq!(criteria.keyword, "ramen");
        assert_eq!(criteria.min_rating, 3.5);
        let printed = String::from_utf8(output).unwrap();
        assert!(!printed.contains(KEYWORD_PROMPT));
        assert!(printed.contains(RATING_PROMPT));
    }

    #[test]
    fn test_read_criteria_fully_interactive() {
        let mut reader = Cursor::new(b"sushi\n6\n4.2\n".to_vec());
        let mut output = Vec::new();

        let criteria = read_criteria(&mut reader, &mut output, None, None).unwrap();
        assert_eq!(criteria.keyword, "sushi");
        assert_eq!(criteria.min_rating, 4.2);

        let printed = String::from_utf8(output).unwrap();
        assert!(printed.contains(KEYWORD_PROMPT));
        assert!(printed.contains(RATING_REPROMPT));
    }
}
