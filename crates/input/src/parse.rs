//! Parsing of console lines into numbers, coordinate pairs and menu choices.
//!
//! Parsers return `None` on anything malformed; the prompter turns that into a
//! re-prompt instead of an error.

use crate::types::{MenuChoice, COORD_LIMIT};

/// Parse one integer coordinate, accepting surrounding whitespace.
///
/// Values beyond `±COORD_LIMIT` are rejected.
pub fn parse_int(line: &str) -> Option<i32> {
    let value: i32 = line.trim().parse().ok()?;
    if value.unsigned_abs() > COORD_LIMIT as u32 {
        return None;
    }
    Some(value)
}

/// Parse an `x,y` pair; a comma, whitespace, or both may separate the values.
pub fn parse_pair(line: &str) -> Option<(i32, i32)> {
    let mut parts = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty());

    let x = parse_int(parts.next()?)?;
    let y = parse_int(parts.next()?)?;
    if parts.next().is_some() {
        return None;
    }
    Some((x, y))
}

/// Parse a menu line.
///
/// - `None`: not a number at all
/// - `Some(None)`: a number that is not on the menu
/// - `Some(Some(choice))`: a menu entry
pub fn parse_menu_choice(line: &str) -> Option<Option<MenuChoice>> {
    let code: i32 = line.trim().parse().ok()?;
    Some(MenuChoice::from_code(code))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_int() {
        assert_eq!(parse_int("5"), Some(5));
        assert_eq!(parse_int("  -3 \n"), Some(-3));
        assert_eq!(parse_int(""), None);
        assert_eq!(parse_int("five"), None);
        assert_eq!(parse_int("5.0"), None);
    }

    #[test]
    fn test_parse_int_rejects_huge_values() {
        assert_eq!(parse_int(&COORD_LIMIT.to_string()), Some(COORD_LIMIT));
        assert_eq!(parse_int(&(-COORD_LIMIT).to_string()), Some(-COORD_LIMIT));
        assert_eq!(parse_int(&(COORD_LIMIT + 1).to_string()), None);
        assert_eq!(parse_int("99999999999"), None);
    }

    #[test]
    fn test_parse_pair_separators() {
        assert_eq!(parse_pair("3,4"), Some((3, 4)));
        assert_eq!(parse_pair("3, 4"), Some((3, 4)));
        assert_eq!(parse_pair("3 4"), Some((3, 4)));
        assert_eq!(parse_pair(" -1 ,\t25 \n"), Some((-1, 25)));
    }

    #[test]
    fn test_parse_pair_malformed() {
        assert_eq!(parse_pair("3"), None);
        assert_eq!(parse_pair("3,"), None);
        assert_eq!(parse_pair("3,4,5"), None);
        assert_eq!(parse_pair("x,y"), None);
        assert_eq!(parse_pair(""), None);
    }

    #[test]
    fn test_parse_menu_choice() {
        assert_eq!(parse_menu_choice("1"), Some(Some(MenuChoice::VerticalLine)));
        assert_eq!(parse_menu_choice("4"), Some(Some(MenuChoice::PointToPoint)));
        assert_eq!(parse_menu_choice(" -1 "), Some(Some(MenuChoice::BeginSimulation)));
        assert_eq!(parse_menu_choice("9"), Some(None));
        assert_eq!(parse_menu_choice("0"), Some(None));
        assert_eq!(parse_menu_choice("circle"), None);
    }
}
