use crate::runtime::{ScriptError, Value};

/// One parsed command of a list script.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Replace the array; `Some(n)` requests an initial capacity.
    New(Option<i64>),
    Add(Value),
    Insert(i64, Value),
    Get(i64),
    Remove(i64),
    /// `None` is the `null` literal.
    RemoveValue(Option<Value>),
    Clear,
    Size,
    Capacity,
    Print,
    Sort,
}

/// A command together with the 1-based line it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub line: usize,
    pub command: Command,
}

peg::parser!(pub grammar parser() for str {
    use super::Command;
    use crate::runtime::Value;

    pub rule line() -> Option<Command>
        = _ c:command()? _ comment()? { c }

    rule command() -> Command
        = "new" __ n:integer() { Command::New(Some(n)) }
        / "new" { Command::New(None) }
        / "add" __ v:value() { Command::Add(v) }
        / "insert" __ i:integer() __ v:value() { Command::Insert(i, v) }
        / "get" __ i:integer() { Command::Get(i) }
        / "remove_value" __ "null" { Command::RemoveValue(None) }
        / "remove_value" __ v:value() { Command::RemoveValue(Some(v)) }
        / "remove" __ i:integer() { Command::Remove(i) }
        / "clear" { Command::Clear }
        / "size" { Command::Size }
        / "capacity" { Command::Capacity }
        / "print" { Command::Print }
        / "sort" { Command::Sort }

    pub rule value() -> Value
        = f:float() { Value::Float(f) }
        / i:integer() { Value::Int(i) }
        / s:string() { Value::Text(s) }
        / "@" n:identifier() { Value::Record(n) }

    rule float() -> f64
        = n:$("-"? ['0'..='9']+ "." ['0'..='9']+) {? n.parse().or(Err("float")) }

    rule integer() -> i64
        = n:$("-"? ['0'..='9']+) {? n.parse().or(Err("64-bit integer")) }

    rule string() -> String
        = "\"" s:string_char()* "\"" { s.into_iter().collect() }

    rule string_char() -> char
        = "\\\"" { '"' }
        / "\\\\" { '\\' }
        / "\\n" { '\n' }
        / "\\t" { '\t' }
        / c:[^ '"' | '\\'] { c }

    rule identifier() -> String
        = quiet!{
            n:$(['a'..='z' | 'A'..='Z' | '_']['a'..='z' | 'A'..='Z' | '0'..='9' | '_']*)
            { n.to_owned() }
        }
        / expected!("identifier")

    rule comment() = "#" [_]*

    rule _() = quiet!{[' ' | '\t']*}
    rule __() = quiet!{[' ' | '\t']+}
});

/// Parses a whole script, skipping blank and comment lines.
///
/// Stops at the first malformed line; nothing is returned for a script that
/// does not parse completely.
pub fn parse_script(source: &str) -> Result<Vec<Statement>, ScriptError> {
    let mut statements = Vec::new();

    for (i, text) in source.lines().enumerate() {
        let line = i + 1;
        match parser::line(text) {
            Ok(Some(command)) => statements.push(Statement { line, command }),
            Ok(None) => {}
            Err(e) => {
                return Err(ScriptError::Parse {
                    line,
                    message: e.to_string(),
                });
            }
        }
    }

    Ok(statements)
}
