//! Output formatting module
//!
//! Renders the pipeline outcome in the requested format.

use crate::Result;
use crate::error::FsaError;
use crate::fsa::{Automaton, TransitionGraph};
use crate::kleene::Verification;
use serde_json::json;
use std::io::Write;

/// Outcome of the convert pipeline
pub type Outcome = std::result::Result<(Automaton, String), FsaError>;

/// The bare result line
pub fn output_text(w: &mut impl Write, outcome: &Outcome) -> Result<()> {
    match outcome {
        Ok((_, regex)) => writeln!(w, "{}", regex)?,
        Err(err) => writeln!(w, "{}", err)?,
    }
    Ok(())
}

/// JSON document with the result and graph statistics
pub fn output_json(w: &mut impl Write, outcome: &Outcome) -> Result<()> {
    let document = match outcome {
        Ok((automaton, regex)) => {
            let graph = TransitionGraph::build(automaton.transitions());
            json!({
                "ok": true,
                "type": automaton.kind(),
                "regex": regex,
                "stats": graph.stats(automaton.states()),
            })
        }
        Err(err) => json!({
            "ok": false,
            "code": err.code(),
            "error": err.to_string(),
        }),
    };

    serde_json::to_writer_pretty(&mut *w, &document)?;
    writeln!(w)?;
    Ok(())
}

/// Graphviz rendering of the transition graph, or the error line
pub fn output_dot(w: &mut impl Write, outcome: &Outcome) -> Result<()> {
    match outcome {
        Ok((automaton, _)) => {
            let graph = TransitionGraph::build(automaton.transitions());
            write!(w, "{}", graph.to_dot(automaton.initial(), automaton.accepting()))?;
        }
        Err(err) => writeln!(w, "{}", err)?,
    }
    Ok(())
}

/// Human-readable verification summary
pub fn output_verification(w: &mut impl Write, report: &Verification) -> Result<()> {
    writeln!(
        w,
        "Checked {} words up to length {} ({} accepted)",
        report.words_checked, report.max_length, report.words_accepted
    )?;

    match &report.counterexample {
        None => writeln!(w, "Languages agree")?,
        Some(cx) => {
            let word = if cx.word.is_empty() {
                "eps".to_string()
            } else {
                cx.word.join(" ")
            };
            let (yes, no) = if cx.accepted_by_automaton {
                ("automaton", "expression")
            } else {
                ("expression", "automaton")
            };
            writeln!(w, "Languages differ on '{}': accepted by the {} but not the {}", word, yes, no)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fsa::validate;
    use crate::kleene::{to_regex, verify};
    use crate::parser::parse_input;

    const INPUT: &str = "type=[deterministic]\nstates=[a,b,idle]\nalphabet=[x]\ninitial=[a]\naccepting=[b]\ntransitions=[a>x>b]";

    fn outcome(input: &str) -> Outcome {
        let automaton = validate(parse_input(input)?)?;
        let regex = to_regex(&automaton);
        Ok((automaton, regex))
    }

    fn render(f: impl Fn(&mut Vec<u8>) -> Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_output_text() {
        let ok = outcome(INPUT);
        let text = render(|w| output_text(w, &ok));
        assert_eq!(text.lines().count(), 1);
        assert!(text.starts_with("(("));

        let err = outcome(&INPUT.replace("accepting=[b]", "accepting=[]"));
        assert_eq!(render(|w| output_text(w, &err)), "E3: Set of accepting states is empty\n");
    }

    #[test]
    fn test_output_json() {
        let text = render(|w| output_json(w, &outcome(INPUT)));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["ok"], true);
        assert_eq!(value["type"], "deterministic");
        assert_eq!(value["stats"]["vertices"], 2);
        assert_eq!(value["stats"]["states_without_vertex"][0], "idle");

        let text = render(|w| output_json(w, &Err(FsaError::Disjoint)));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["ok"], false);
        assert_eq!(value["code"], "E6");
    }

    #[test]
    fn test_output_dot() {
        let text = render(|w| output_dot(w, &outcome(INPUT)));
        assert!(text.contains("\"a\" -> \"b\" [label=\"x\"]"));
    }

    #[test]
    fn test_output_verification() {
        let automaton = validate(parse_input(INPUT).unwrap()).unwrap();
        let report = verify(&automaton, "(x)*", 2).unwrap();
        let text = render(|w| output_verification(w, &report));
        assert!(text.contains("Languages differ on 'eps'"));
        assert!(text.contains("accepted by the expression but not the automaton"));
    }
}
