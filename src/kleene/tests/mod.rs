
use super::*;
use crate::fsa::validate;
use crate::parser::parse_input;

fn regex_for(input: &str) -> String {
    to_regex(&validate(parse_input(input).unwrap()).unwrap())
}

#[test]
fn test_single_state_loop() {
    let regex = regex_for(
        "type=[deterministic]\nstates=[a]\nalphabet=[x]\ninitial=[a]\naccepting=[a]\ntransitions=[a>x>a]",
    );
    assert_eq!(regex, "((x|eps)(x|eps)*(x|eps)|(x|eps))");

    let matcher = Expr::parse(&regex).unwrap().matcher();
    assert!(matcher.is_match::<&str>(&[]));
    assert!(matcher.is_match(&["x", "x", "x"]));
    assert!(!matcher.is_match(&["y"]));
}

#[test]
fn test_accepting_states_are_sorted() {
    let input = "type=[deterministic]\nstates=[s,r,q]\nalphabet=[a,b]\ninitial=[s]\naccepting=[r,q]\ntransitions=[s>a>r,s>b>q]";
    let table = KleeneTable::build(&validate(parse_input(input).unwrap()).unwrap());

    // q (index 2) sorts before r (index 1)
    let expected = format!(
        "({})|({})",
        table.paths(0, 2).unwrap(),
        table.paths(0, 1).unwrap()
    );
    assert_eq!(regex_for(input), expected);
}

#[test]
fn test_initial_state_need_not_come_first() {
    let regex = regex_for(
        "type=[deterministic]\nstates=[end,start]\nalphabet=[go]\ninitial=[start]\naccepting=[end]\ntransitions=[start>go>end]",
    );
    let matcher = Expr::parse(&regex).unwrap().matcher();
    assert!(matcher.is_match(&["go"]));
    assert!(!matcher.is_match::<&str>(&[]));
    assert!(!matcher.is_match(&["go", "go"]));
}

#[test]
fn test_parallel_transitions_are_kept() {
    let regex = regex_for(
        "type=[non-deterministic]\nstates=[a,b]\nalphabet=[x,y]\ninitial=[a]\naccepting=[b]\ntransitions=[a>x>b,a>y>b]",
    );
    assert!(regex.contains("(x|y)"));

    let matcher = Expr::parse(&regex).unwrap().matcher();
    assert!(matcher.is_match(&["x"]));
    assert!(matcher.is_match(&["y"]));
    assert!(!matcher.is_match(&["x", "y"]));
}
