//! Reader and matcher for the output dialect
//!
//! Expressions are read back into an [`Expr`] tree and compiled into a
//! Thompson automaton. Words are sequences of symbols rather than strings,
//! since symbols may be longer than one character.

use super::{EMPTY_LANGUAGE, EPSILON};
use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// `{}`
    Empty,
    /// `eps`
    Epsilon,
    Symbol(String),
    Concat(Vec<Expr>),
    Union(Vec<Expr>),
    Star(Box<Expr>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Open,
    Close,
    Pipe,
    Star,
    EmptySet,
    Ident(String),
}

fn tokenize(input: &str) -> Result<Vec<(usize, Token)>> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some((offset, c)) = chars.next() {
        let token = match c {
            '(' => Token::Open,
            ')' => Token::Close,
            '|' => Token::Pipe,
            '*' => Token::Star,
            '{' => match chars.next() {
                Some((_, '}')) => Token::EmptySet,
                _ => return Err(Error::expression(offset, "expected '}' after '{'")),
            },
            c if c.is_ascii_alphanumeric() || c == '_' => {
                let mut ident = c.to_string();
                while let Some(&(_, next)) = chars.peek() {
                    if !(next.is_ascii_alphanumeric() || next == '_') {
                        break;
                    }
                    ident.push(next);
                    chars.next();
                }
                Token::Ident(ident)
            }
            other => {
                return Err(Error::expression(
                    offset,
                    format!("unexpected character '{}'", other),
                ));
            }
        };
        tokens.push((offset, token));
    }

    Ok(tokens)
}

struct Parser {
    tokens: Vec<(usize, Token)>,
    pos: usize,
    end: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos).map(|(_, t)| t)
    }

    fn offset(&self) -> usize {
        self.tokens
            .get(self.pos)
            .map(|&(offset, _)| offset)
            .unwrap_or(self.end)
    }

    fn bump(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).map(|(_, t)| t.clone());
        self.pos += 1;
        token
    }

    fn union(&mut self) -> Result<Expr> {
        let mut branches = vec![self.concat()?];
        while self.peek() == Some(&Token::Pipe) {
            self.bump();
            branches.push(self.concat()?);
        }
        Ok(if branches.len() == 1 {
            branches.remove(0)
        } else {
            Expr::Union(branches)
        })
    }

    fn concat(&mut self) -> Result<Expr> {
        let mut items = Vec::new();
        while matches!(
            self.peek(),
            Some(Token::Open | Token::Ident(_) | Token::EmptySet)
        ) {
            items.push(self.postfix()?);
        }
        match items.len() {
            0 => Err(Error::expression(self.offset(), "expected an expression")),
            1 => Ok(items.remove(0)),
            _ => Ok(Expr::Concat(items)),
        }
    }

    fn postfix(&mut self) -> Result<Expr> {
        let mut expr = self.atom()?;
        while self.peek() == Some(&Token::Star) {
            self.bump();
            expr = Expr::Star(Box::new(expr));
        }
        Ok(expr)
    }

    fn atom(&mut self) -> Result<Expr> {
        let offset = self.offset();
        match self.bump() {
            Some(Token::Open) => {
                let inner = self.union()?;
                match self.bump() {
                    Some(Token::Close) => Ok(inner),
                    _ => Err(Error::expression(offset, "unbalanced parenthesis")),
                }
            }
            Some(Token::EmptySet) => Ok(Expr::Empty),
            Some(Token::Ident(name)) if name == EPSILON => Ok(Expr::Epsilon),
            Some(Token::Ident(name)) => Ok(Expr::Symbol(name)),
            _ => Err(Error::expression(offset, "expected an expression")),
        }
    }
}

impl Expr {
    /// Read an expression written in the output dialect.
    ///
    /// The identifier `eps` always denotes the empty word.
    pub fn parse(input: &str) -> Result<Self> {
        let mut parser = Parser {
            tokens: tokenize(input)?,
            pos: 0,
            end: input.len(),
        };
        let expr = parser.union()?;
        if parser.pos < parser.tokens.len() {
            return Err(Error::expression(parser.offset(), "unexpected ')'"));
        }
        Ok(expr)
    }

    /// Compile into a matcher.
    pub fn matcher(&self) -> Matcher {
        let mut matcher = Matcher {
            nodes: Vec::new(),
            start: 0,
            accept: 0,
        };
        let (start, accept) = matcher.compile(self);
        matcher.start = start;
        matcher.accept = accept;
        matcher
    }
}

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Empty => f.write_str(EMPTY_LANGUAGE),
            Expr::Epsilon => f.write_str(EPSILON),
            Expr::Symbol(s) => f.write_str(s),
            Expr::Concat(items) => items.iter().try_for_each(|e| write!(f, "({})", e)),
            Expr::Union(branches) => {
                for (i, branch) in branches.iter().enumerate() {
                    if i > 0 {
                        f.write_str("|")?;
                    }
                    write!(f, "({})", branch)?;
                }
                Ok(())
            }
            Expr::Star(inner) => write!(f, "({})*", inner),
        }
    }
}

#[derive(Debug, Clone, Default)]
struct Node {
    epsilon: Vec<usize>,
    symbol: Option<(String, usize)>,
}

/// A set of matcher nodes, sorted and free of duplicates.
pub type NodeSet = Vec<usize>;

/// Thompson automaton for an [`Expr`].
#[derive(Debug, Clone)]
pub struct Matcher {
    nodes: Vec<Node>,
    start: usize,
    accept: usize,
}

impl Matcher {
    fn add_node(&mut self) -> usize {
        self.nodes.push(Node::default());
        self.nodes.len() - 1
    }

    fn link(&mut self, from: usize, to: usize) {
        self.nodes[from].epsilon.push(to);
    }

    /// Returns the `(entry, exit)` nodes of the fragment for `expr`.
    fn compile(&mut self, expr: &Expr) -> (usize, usize) {
        match expr {
            Expr::Empty => (self.add_node(), self.add_node()),
            Expr::Epsilon => {
                let (entry, exit) = (self.add_node(), self.add_node());
                self.link(entry, exit);
                (entry, exit)
            }
            Expr::Symbol(symbol) => {
                let (entry, exit) = (self.add_node(), self.add_node());
                self.nodes[entry].symbol = Some((symbol.clone(), exit));
                (entry, exit)
            }
            Expr::Concat(items) => {
                let entry = self.add_node();
                let mut last = entry;
                for item in items {
                    let (item_entry, item_exit) = self.compile(item);
                    self.link(last, item_entry);
                    last = item_exit;
                }
                (entry, last)
            }
            Expr::Union(branches) => {
                let (entry, exit) = (self.add_node(), self.add_node());
                for branch in branches {
                    let (branch_entry, branch_exit) = self.compile(branch);
                    self.link(entry, branch_entry);
                    self.link(branch_exit, exit);
                }
                (entry, exit)
            }
            Expr::Star(inner) => {
                let (entry, exit) = (self.add_node(), self.add_node());
                let (inner_entry, inner_exit) = self.compile(inner);
                self.link(entry, inner_entry);
                self.link(entry, exit);
                self.link(inner_exit, inner_entry);
                self.link(inner_exit, exit);
                (entry, exit)
            }
        }
    }

    fn closure(&self, seeds: impl IntoIterator<Item = usize>) -> NodeSet {
        let mut seen = vec![false; self.nodes.len()];
        let mut stack: Vec<usize> = seeds.into_iter().collect();
        let mut set = Vec::new();

        while let Some(node) = stack.pop() {
            if std::mem::replace(&mut seen[node], true) {
                continue;
            }
            set.push(node);
            stack.extend(self.nodes[node].epsilon.iter().copied());
        }

        set.sort_unstable();
        set
    }

    /// Nodes active before any symbol is read.
    pub fn start_set(&self) -> NodeSet {
        self.closure([self.start])
    }

    /// Nodes active after reading `symbol` from `current`.
    pub fn step(&self, current: &[usize], symbol: &str) -> NodeSet {
        self.closure(current.iter().filter_map(|&node| {
            self.nodes[node]
                .symbol
                .as_ref()
                .filter(|(s, _)| s == symbol)
                .map(|&(_, target)| target)
        }))
    }

    pub fn is_accepting(&self, current: &[usize]) -> bool {
        current.binary_search(&self.accept).is_ok()
    }

    /// Whether the expression matches the whole word.
    pub fn is_match<S: AsRef<str>>(&self, word: &[S]) -> bool {
        let mut current = self.start_set();
        for symbol in word {
            if current.is_empty() {
                return false;
            }
            current = self.step(&current, symbol.as_ref());
        }
        self.is_accepting(&current)
    }
}
