use crate::Value;
use smallvec::{SmallVec, smallvec};
use std::fmt;

enum Piece<'a> {
    Value(&'a Value),
    Text(&'static str),
}

impl Value {
    /// `5`, `true`, `null`, `(pair 1 (pair 2 null))`, `function`
    ///
    /// Nested pairs are walked with an explicit stack, so a list of any length can be rendered.
    pub fn serialize(&self) -> String {
        let mut result = String::new();
        let mut stack: SmallVec<[Piece; 8]> = smallvec![Piece::Value(self)];

        while let Some(piece) = stack.pop() {
            match piece {
                Piece::Text(s) => {
                    result.push_str(s);
                },
                Piece::Value(Value::Number(n)) => {
                    result.push_str(&n.to_string());
                },
                Piece::Value(Value::Boolean(b)) => {
                    result.push_str(if *b { "true" } else { "false" });
                },
                Piece::Value(Value::Null(_)) => {
                    result.push_str("null");
                },
                Piece::Value(Value::Pair(first, second)) => {
                    // reversed
                    stack.push(Piece::Text(")"));
                    stack.push(Piece::Value(second.as_ref()));
                    stack.push(Piece::Text(" "));
                    stack.push(Piece::Value(first.as_ref()));
                    stack.push(Piece::Text("(pair "));
                },
                Piece::Value(Value::Function(_)) => {
                    result.push_str("function");
                },
            }
        }

        result
    }
}

impl fmt::Display for Value {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(fmt, "{}", self.serialize())
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(fmt, "Value({})", self.serialize())
    }
}
