use mupl_error::{
    ErrorContext,
    ExtraErrInfo,
    MuplError,
    MuplErrorKind,
    RenderOption,
    concat_commas,
};
use std::fmt;

pub struct PreludeError {
    kind: PreludeErrorKind,
    extra: ExtraErrInfo,
}

impl PreludeError {
    pub fn unknown_name(name: &str, mut available: Vec<String>) -> Self {
        available.sort();

        PreludeError {
            kind: PreludeErrorKind::UnknownName { name: name.to_string(), available },
            extra: ExtraErrInfo::at_context(ErrorContext::EvaluatingPrelude),
        }
    }

    pub fn kind(&self) -> &PreludeErrorKind {
        &self.kind
    }
}

impl MuplError<PreludeErrorKind> for PreludeError {
    fn get_mut_error_info(&mut self) -> &mut ExtraErrInfo {
        &mut self.extra
    }

    fn get_error_info(&self) -> &ExtraErrInfo {
        &self.extra
    }

    fn error_kind(&self) -> &PreludeErrorKind {
        &self.kind
    }

    fn index(&self) -> u32 {
        2
    }
}

impl fmt::Display for PreludeError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(fmt, "{}", self.kind.msg())
    }
}

impl fmt::Debug for PreludeError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(fmt, "{}", self.render_error(&RenderOption::plain()))
    }
}

impl std::error::Error for PreludeError {}

#[derive(Clone, Debug, PartialEq)]
pub enum PreludeErrorKind {
    UnknownName {
        name: String,

        // sorted
        available: Vec<String>,
    },
}

impl MuplErrorKind for PreludeErrorKind {
    fn msg(&self) -> String {
        match self {
            PreludeErrorKind::UnknownName { name, .. } => format!("no prelude named `{name}`"),
        }
    }

    fn help(&self) -> String {
        match self {
            PreludeErrorKind::UnknownName { available, .. } => format!(
                "Available preludes are {}.",
                concat_commas(available, "and", "`", "`"),
            ),
        }
    }

    fn index(&self) -> u32 {
        match self {
            PreludeErrorKind::UnknownName { .. } => 0,
        }
    }
}
