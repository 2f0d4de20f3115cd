use crate::{Operation, ValueKind};
use mupl_error::{
    ErrorContext,
    ExtraErrInfo,
    MuplError,
    MuplErrorKind,
    RenderError,
    RenderOption,
};
use std::fmt;

pub struct ValueError {
    kind: ValueErrorKind,
    extra: ExtraErrInfo,
}

impl ValueError {
    pub fn type_mismatch(operation: Operation, actual: ValueKind) -> Self {
        let context = match operation {
            Operation::Call => ErrorContext::CallingFunction,
            _ => ErrorContext::AccessingValue,
        };

        ValueError {
            kind: ValueErrorKind::TypeMismatch { operation, actual },
            extra: ExtraErrInfo::at_context(context),
        }
    }

    pub fn unbound_function() -> Self {
        ValueError {
            kind: ValueErrorKind::UnboundFunction,
            extra: ExtraErrInfo::at_context(ErrorContext::CallingFunction),
        }
    }

    pub fn already_rebound() -> Self {
        ValueError {
            kind: ValueErrorKind::AlreadyRebound,
            extra: ExtraErrInfo::at_context(ErrorContext::RebindingFunction),
        }
    }

    pub fn rebind_during_call(calls_in_flight: usize) -> Self {
        ValueError {
            kind: ValueErrorKind::RebindDuringCall { calls_in_flight },
            extra: ExtraErrInfo::at_context(ErrorContext::RebindingFunction),
        }
    }

    /// Failures of the evaluator's own transformations travel through `call` with this.
    pub fn raised(msg: String) -> Self {
        ValueError {
            kind: ValueErrorKind::Raised(msg),
            extra: ExtraErrInfo::none(),
        }
    }

    pub fn kind(&self) -> &ValueErrorKind {
        &self.kind
    }

    pub fn is_type_mismatch(&self) -> bool {
        matches!(&self.kind, ValueErrorKind::TypeMismatch { .. })
    }
}

impl MuplError<ValueErrorKind> for ValueError {
    fn get_mut_error_info(&mut self) -> &mut ExtraErrInfo {
        &mut self.extra
    }

    fn get_error_info(&self) -> &ExtraErrInfo {
        &self.extra
    }

    fn error_kind(&self) -> &ValueErrorKind {
        &self.kind
    }

    fn index(&self) -> u32 {
        1
    }
}

impl fmt::Display for ValueError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(fmt, "{}", self.kind.msg())
    }
}

impl fmt::Debug for ValueError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(fmt, "{}", self.render_error(&RenderOption::plain()))
    }
}

impl std::error::Error for ValueError {}

#[derive(Clone, Debug, PartialEq)]
pub enum ValueErrorKind {
    TypeMismatch {
        operation: Operation,
        actual: ValueKind,
    },
    UnboundFunction,
    AlreadyRebound,
    RebindDuringCall {
        calls_in_flight: usize,
    },
    Raised(String),
}

impl MuplErrorKind for ValueErrorKind {
    fn msg(&self) -> String {
        match self {
            ValueErrorKind::TypeMismatch { operation, actual } => format!(
                "cannot {} {}",
                operation.render_error(),
                actual.render_error(),
            ),
            ValueErrorKind::UnboundFunction => String::from("function called before its body was bound"),
            ValueErrorKind::AlreadyRebound => String::from("function body is already rebound"),
            ValueErrorKind::RebindDuringCall { calls_in_flight } => format!(
                "cannot rebind a function while {calls_in_flight} call{} to it {} in progress",
                if *calls_in_flight < 2 { "" } else { "s" },
                if *calls_in_flight < 2 { "is" } else { "are" },
            ),
            ValueErrorKind::Raised(msg) => msg.to_string(),
        }
    }

    fn help(&self) -> String {
        match self {
            ValueErrorKind::TypeMismatch { operation, .. } => format!(
                "`{}` only works on {}.",
                operation.name(),
                operation.supported_by().render_error(),
            ),
            ValueErrorKind::AlreadyRebound => String::from("A function can be rebound at most once."),
            ValueErrorKind::UnboundFunction
            | ValueErrorKind::RebindDuringCall { .. }
            | ValueErrorKind::Raised(_) => String::new(),
        }
    }

    fn index(&self) -> u32 {
        match self {
            ValueErrorKind::TypeMismatch { .. } => 0,
            ValueErrorKind::UnboundFunction => 1,
            ValueErrorKind::AlreadyRebound => 2,
            ValueErrorKind::RebindDuringCall { .. } => 3,
            ValueErrorKind::Raised(_) => 4,
        }
    }
}
