//! Bounded language comparison between an automaton and an expression

use super::{Expr, expr::NodeSet};
use crate::config::MAX_VERIFY_WORDS;
use crate::fsa::Automaton;
use crate::{Result, ensure};
use serde::Serialize;

/// Outcome of comparing both languages on every word up to a length bound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verification {
    pub max_length: usize,
    pub words_checked: usize,
    pub words_accepted: usize,

    /// First word (shortest, then in alphabet order) on which the two disagree
    pub counterexample: Option<Counterexample>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Counterexample {
    pub word: Vec<String>,
    pub accepted_by_automaton: bool,
}

impl Verification {
    pub fn is_equivalent(&self) -> bool {
        self.counterexample.is_none()
    }
}

/// Number of words of length `<= max_length` over `symbols` symbols, if it fits.
fn word_count(symbols: usize, max_length: usize) -> Option<usize> {
    (0..=max_length).try_fold(0usize, |total, length| {
        let length = u32::try_from(length).ok()?;
        total.checked_add(symbols.checked_pow(length)?)
    })
}

/// Check `expression` against `automaton` on all words of length `<= max_length`.
///
/// Fails without enumerating when there are more than [`MAX_VERIFY_WORDS`] words.
pub fn verify(automaton: &Automaton, expression: &str, max_length: usize) -> Result<Verification> {
    let alphabet = automaton.alphabet();
    let words = word_count(alphabet.len(), max_length);
    ensure!(
        words.is_some_and(|words| words <= MAX_VERIFY_WORDS),
        "{} symbols up to length {} exceed the limit of {} words",
        alphabet.len(),
        max_length,
        MAX_VERIFY_WORDS
    );

    let matcher = Expr::parse(expression)?.matcher();

    let mut report = Verification {
        max_length,
        words_checked: 0,
        words_accepted: 0,
        counterexample: None,
    };

    // breadth-first over words so that the first mismatch is a shortest one
    let mut level: Vec<(Vec<String>, NodeSet)> = vec![(Vec::new(), matcher.start_set())];
    for length in 0..=max_length {
        for (word, nodes) in &level {
            let by_automaton = automaton.accepts(word.as_slice());
            let by_expression = matcher.is_accepting(nodes);
            report.words_checked += 1;
            if by_automaton {
                report.words_accepted += 1;
            }
            if by_automaton != by_expression {
                tracing::debug!("Languages differ on {:?}", word);
                report.counterexample = Some(Counterexample {
                    word: word.clone(),
                    accepted_by_automaton: by_automaton,
                });
                return Ok(report);
            }
        }

        if length == max_length {
            break;
        }

        let mut next_level = Vec::with_capacity(level.len() * alphabet.len());
        for (word, nodes) in &level {
            for symbol in alphabet {
                let mut next = word.clone();
                next.push(symbol.clone());
                next_level.push((next, matcher.step(nodes, symbol)));
            }
        }
        level = next_level;
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fsa::validate;
    use crate::kleene::to_regex;
    use crate::parser::parse_input;

    const EVEN_ONES: &str = "type=[deterministic]\nstates=[even,odd]\nalphabet=[0,1]\ninitial=[even]\naccepting=[even]\ntransitions=[even>0>even,even>1>odd,odd>0>odd,odd>1>even]";

    #[test]
    fn test_synthesized_expression_is_equivalent() {
        let fsa = validate(parse_input(EVEN_ONES).unwrap()).unwrap();
        let report = verify(&fsa, &to_regex(&fsa), 4).unwrap();
        assert!(report.is_equivalent());
        assert_eq!(report.words_checked, 1 + 2 + 4 + 8 + 16);
        // words with an even number of 1s: half of every non-empty length, plus the empty word
        assert_eq!(report.words_accepted, 1 + 1 + 2 + 4 + 8);
    }

    #[test]
    fn test_reports_shortest_counterexample() {
        let fsa = validate(parse_input(EVEN_ONES).unwrap()).unwrap();
        let report = verify(&fsa, "(0)*", 3).unwrap();
        assert!(!report.is_equivalent());
        assert_eq!(
            report.counterexample,
            Some(Counterexample {
                word: vec!["1".to_string(), "1".to_string()],
                accepted_by_automaton: true,
            })
        );
    }

    #[test]
    fn test_word_count() {
        assert_eq!(word_count(2, 4), Some(31));
        assert_eq!(word_count(1, 10), Some(11));
        assert_eq!(word_count(0, 3), Some(1));
        assert_eq!(word_count(usize::MAX, 2), None);
    }

    #[test]
    fn test_rejects_too_many_words() {
        let symbols: Vec<String> = (0..16).map(|i| format!("s{}", i)).collect();
        let loops: Vec<String> = symbols.iter().map(|s| format!("q>{}>q", s)).collect();
        let input = format!(
            "type=[deterministic]\nstates=[q]\nalphabet=[{}]\ninitial=[q]\naccepting=[q]\ntransitions=[{}]",
            symbols.join(","),
            loops.join(",")
        );
        let fsa = validate(parse_input(&input).unwrap()).unwrap();

        let err = verify(&fsa, &to_regex(&fsa), 10).unwrap_err();
        assert!(err.to_string().contains("exceed the limit of"));

        // 1 + 16 + 256 + 4096 words stay within the limit
        assert!(verify(&fsa, &to_regex(&fsa), 3).unwrap().is_equivalent());
    }

    #[test]
    fn test_rejects_unreadable_expression() {
        let fsa = validate(parse_input(EVEN_ONES).unwrap()).unwrap();
        assert!(verify(&fsa, "(0", 2).is_err());
    }
}
