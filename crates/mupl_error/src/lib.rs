#![deny(unused_imports)]

use colored::Colorize;

mod ctxt;
mod extra_info;
mod fmt;
mod option;

#[cfg(test)]
mod tests;

pub use ctxt::ErrorContext;
pub use extra_info::ExtraErrInfo;
pub use fmt::RenderError;
pub use option::RenderOption;

pub trait MuplError<K: MuplErrorKind> {
    fn get_mut_error_info(&mut self) -> &mut ExtraErrInfo;

    fn get_error_info(&self) -> &ExtraErrInfo;

    fn error_kind(&self) -> &K;

    /// Errors from different crates have different indices.
    /// For example, value errors and prelude errors have different ones.
    fn index(&self) -> u32;

    fn set_error_context(&mut self, context: ErrorContext) -> &mut Self {
        self.get_mut_error_info().set_error_context(context);

        self
    }

    // sets the error context when,
    // 1. it's not set previously
    // 2. the given context is not none
    fn try_set_err_context(&mut self, context: Option<ErrorContext>) -> &mut Self {
        let info = self.get_mut_error_info();

        if info.context == ErrorContext::Unknown {
            if let Some(err_ctx) = context {
                info.context = err_ctx;
            }
        }

        self
    }

    fn set_message(&mut self, message: String) -> &mut Self {
        self.get_mut_error_info().set_message(message);

        self
    }

    /// `E0101`, `E0203`, ...
    fn error_code(&self) -> String {
        format!("E{:04}", self.index() * 100 + self.error_kind().index())
    }

    fn render_error(&self, option: &RenderOption) -> String {
        let title = if option.show_title {
            format!(
                "{}\n",
                render_error_title(
                    self.get_error_info().context.render_error(),
                    option.colored,
                ),
            )
        } else {
            String::new()
        };

        let kind = self.error_kind();
        let msg = format!("{}: {}", self.error_code(), kind.msg());
        let help = match kind.help() {
            s if s.is_empty() => String::new(),
            s => format!("\nHelp: {s}"),
        };
        let extra_msg = match &self.get_error_info().msg {
            s if s.is_empty() => String::new(),
            s => format!("\nNote: {s}"),
        };

        format!("{title}{msg}{help}{extra_msg}")
    }
}

pub trait MuplErrorKind {
    // main explanation of this error
    // no capital letters, no dot
    fn msg(&self) -> String;

    // extra sentences that explain the error
    // if the help msg is empty, it's ignored
    fn help(&self) -> String;

    /// identifier of this errkind
    fn index(&self) -> u32;
}

pub fn concat_commas(list: &[String], term: &str, prefix: &str, suffix: &str) -> String {
    match list.len() {
        0 => String::new(),
        1 => format!("{prefix}{}{suffix}", list[0]),
        2 => format!("{prefix}{}{suffix} {term} {prefix}{}{suffix}", list[0], list[1]),
        _ => format!("{prefix}{}{suffix}, {}", list[0], concat_commas(&list[1..], term, prefix, suffix)),
    }
}

pub(crate) fn render_error_title(context: String, colored: bool) -> String {
    let context = if context.is_empty() {
        String::new()
    } else {
        format!(" while {context}")
    };
    let title = format!("[Error{context}]");

    if colored {
        title.red().to_string()
    }

    else {
        title
    }
}
