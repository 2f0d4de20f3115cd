use crate::ErrorContext;
use std::fmt;

/// All the error messages use this function to print objects
pub trait RenderError {
    fn render_error(&self) -> String;
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        let s = match self {
            ErrorContext::Unknown => "",
            ErrorContext::AccessingValue => "accessing a value",
            ErrorContext::CallingFunction => "calling a function",
            ErrorContext::RebindingFunction => "rebinding a function",
            ErrorContext::BuildingList => "walking a list",
            ErrorContext::EvaluatingPrelude => "evaluating a prelude function",
        };

        write!(fmt, "{s}")
    }
}

impl RenderError for ErrorContext {
    fn render_error(&self) -> String {
        self.to_string()
    }
}
