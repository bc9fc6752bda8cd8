// the collection of utility functions mainly for bracket parsing and proceeding

/// position of the first occurrence of a char at bracket depth zero
pub fn find_char_position_outside_brackets(s: &str, c: char) -> Option<usize> {
    let mut depth: i32 = 0;
    for (i, ch) in s.chars().enumerate() {
        match ch {
            '(' => depth += 1,
            ')' => depth -= 1,
            _ if ch == c && depth == 0 => return Some(i),
            _ => {}
        }
    }
    None
}

/// position and identity of the LAST operator from the given set found at
/// bracket depth zero; splitting at the rightmost occurrence keeps
/// left-associative chains like `a - b - c` parsed as `(a - b) - c`
pub fn find_rightmost_operator_outside_brackets(
    input: &str,
    operators: &[char],
) -> Option<(usize, char)> {
    let mut depth: i32 = 0;
    let mut last: Option<(usize, char)> = None;
    for (i, c) in input.chars().enumerate() {
        match c {
            '(' => depth += 1,
            ')' => depth -= 1,
            _ if depth == 0 && operators.contains(&c) => last = Some((i, c)),
            _ => {}
        }
    }
    last
}

/// finds the closing bracket paired with the opening bracket at `bracket_start`
pub fn find_pair_to_this_bracket(input: &str, bracket_start: usize) -> Option<usize> {
    let mut stack = 0;
    for (i, c) in input.chars().enumerate().skip(bracket_start) {
        if c == '(' {
            stack += 1;
        } else if c == ')' {
            stack -= 1;
            if stack == 0 {
                return Some(i);
            }
        }
    }
    None
}

/// the whole string is one bracketed group, e.g. "(x + y)" but not "(a)+(b)"
pub fn is_fully_bracketed(input: &str) -> bool {
    input.starts_with('(')
        && input.ends_with(')')
        && find_pair_to_this_bracket(input, 0) == Some(input.len() - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_char_position_outside_brackets() {
        assert_eq!(find_char_position_outside_brackets("a*(b*c)", '*'), Some(1));
        assert_eq!(find_char_position_outside_brackets("(b*c)", '*'), None);
    }

    #[test]
    fn test_rightmost_operator() {
        assert_eq!(
            find_rightmost_operator_outside_brackets("a-b+c", &['+', '-']),
            Some((3, '+'))
        );
        assert_eq!(
            find_rightmost_operator_outside_brackets("(a-b)", &['+', '-']),
            None
        );
    }

    #[test]
    fn test_find_pair_to_this_bracket() {
        assert_eq!(find_pair_to_this_bracket("(a*(b))", 0), Some(6));
        assert_eq!(find_pair_to_this_bracket("(a", 0), None);
    }

    #[test]
    fn test_is_fully_bracketed() {
        assert!(is_fully_bracketed("(x + y)"));
        assert!(!is_fully_bracketed("(a)+(b)"));
        assert!(!is_fully_bracketed("sin(x)"));
    }
}
