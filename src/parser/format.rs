//! Line-level format of the input file

use regex::Regex;
use std::sync::LazyLock;

/// Field keys, in the order the lines must appear.
pub const FIELD_KEYS: [&str; 6] = [
    "type",
    "states",
    "alphabet",
    "initial",
    "accepting",
    "transitions",
];

const TRANSITION: &str = r"[a-zA-Z0-9_]+(?:>[a-zA-Z0-9_]+){2}";

static FIELD_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"type=\[(?:non-)?deterministic\]".to_string(),
        r"states=\[[a-zA-Z0-9]+(?:,[a-zA-Z0-9]+)*\]".to_string(),
        r"alphabet=\[[a-zA-Z0-9_]+(?:,[a-zA-Z0-9_]+)*\]".to_string(),
        r"initial=\[[^,+]*\]".to_string(),
        r"accepting=\[(?:[a-zA-Z0-9]+(?:,[a-zA-Z0-9]+)*)?\]".to_string(),
        format!(r"transitions=\[{TRANSITION}(?:,{TRANSITION})*\]"),
    ]
    .iter()
    .map(|p| Regex::new(&format!("^(?:{p})$")).expect("field patterns are valid"))
    .collect()
});

/// Whether line `position` (0-based) has the shape its field requires.
pub fn line_matches(position: usize, line: &str) -> bool {
    FIELD_PATTERNS
        .get(position)
        .is_some_and(|pattern| pattern.is_match(line))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_line() {
        assert!(line_matches(0, "type=[deterministic]"));
        assert!(line_matches(0, "type=[non-deterministic]"));
        assert!(!line_matches(0, "type=[nfa]"));
        assert!(!line_matches(0, "type=[deterministic] "));
    }

    #[test]
    fn test_list_lines() {
        assert!(line_matches(1, "states=[q0,q1,q2]"));
        assert!(!line_matches(1, "states=[]"));
        assert!(!line_matches(1, "states=[q_0]"));
        assert!(line_matches(2, "alphabet=[a_1,b]"));
        assert!(!line_matches(2, "alphabet=[a,,b]"));
        assert!(line_matches(4, "accepting=[]"));
        assert!(line_matches(4, "accepting=[q1,q2]"));
    }

    #[test]
    fn test_initial_line() {
        assert!(line_matches(3, "initial=[q0]"));
        assert!(line_matches(3, "initial=[]"));
        assert!(!line_matches(3, "initial=[q0,q1]"));
    }

    #[test]
    fn test_transitions_line() {
        assert!(line_matches(5, "transitions=[q0>a>q1,q1>b_2>q0]"));
        assert!(!line_matches(5, "transitions=[]"));
        assert!(!line_matches(5, "transitions=[q0>a]"));
        assert!(!line_matches(5, "transitions=[q0>a>q1>q2]"));
    }

    #[test]
    fn test_out_of_range_position() {
        assert!(!line_matches(6, "type=[deterministic]"));
    }
}
