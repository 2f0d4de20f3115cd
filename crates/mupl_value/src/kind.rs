use mupl_error::RenderError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Number,
    Boolean,
    Null,
    Pair,
    Function,
}

impl RenderError for ValueKind {
    fn render_error(&self) -> String {
        match self {
            ValueKind::Number => "a number",
            ValueKind::Boolean => "a boolean",
            ValueKind::Null => "null",
            ValueKind::Pair => "a pair",
            ValueKind::Function => "a function",
        }.to_string()
    }
}

/// Operations of the value contract that only some kinds support.
/// `serialize` and `is_null` never fail, so they're not here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    GetNumber,
    GetBoolean,
    GetFirst,
    GetSecond,
    Call,
}

impl Operation {
    pub fn supported_by(&self) -> ValueKind {
        match self {
            Operation::GetNumber => ValueKind::Number,
            Operation::GetBoolean => ValueKind::Boolean,
            Operation::GetFirst
            | Operation::GetSecond => ValueKind::Pair,
            Operation::Call => ValueKind::Function,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Operation::GetNumber => "get_number",
            Operation::GetBoolean => "get_boolean",
            Operation::GetFirst => "get_first",
            Operation::GetSecond => "get_second",
            Operation::Call => "call",
        }
    }
}

// `cannot {operation} {kind}`
impl RenderError for Operation {
    fn render_error(&self) -> String {
        match self {
            Operation::GetNumber => "get the numeric value of",
            Operation::GetBoolean => "get the boolean value of",
            Operation::GetFirst => "get the first member of",
            Operation::GetSecond => "get the second member of",
            Operation::Call => "call",
        }.to_string()
    }
}
