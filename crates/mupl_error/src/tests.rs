use crate::{
    ErrorContext,
    ExtraErrInfo,
    MuplError,
    MuplErrorKind,
    RenderOption,
    concat_commas,
};

struct DummyError {
    kind: DummyErrorKind,
    extra: ExtraErrInfo,
}

enum DummyErrorKind {
    Plain,
    WithHelp,
}

impl MuplError<DummyErrorKind> for DummyError {
    fn get_mut_error_info(&mut self) -> &mut ExtraErrInfo {
        &mut self.extra
    }

    fn get_error_info(&self) -> &ExtraErrInfo {
        &self.extra
    }

    fn error_kind(&self) -> &DummyErrorKind {
        &self.kind
    }

    fn index(&self) -> u32 {
        7
    }
}

impl MuplErrorKind for DummyErrorKind {
    fn msg(&self) -> String {
        String::from("something went wrong")
    }

    fn help(&self) -> String {
        match self {
            DummyErrorKind::Plain => String::new(),
            DummyErrorKind::WithHelp => String::from("Try something else."),
        }
    }

    fn index(&self) -> u32 {
        match self {
            DummyErrorKind::Plain => 0,
            DummyErrorKind::WithHelp => 1,
        }
    }
}

#[test]
fn render_plain() {
    let e = DummyError {
        kind: DummyErrorKind::Plain,
        extra: ExtraErrInfo::at_context(ErrorContext::CallingFunction),
    };

    assert_eq!(
        e.render_error(&RenderOption::plain()),
        "[Error while calling a function]\nE0700: something went wrong",
    );
}

#[test]
fn render_help_and_note() {
    let mut e = DummyError {
        kind: DummyErrorKind::WithHelp,
        extra: ExtraErrInfo::none(),
    };
    e.set_message(String::from("from a test"));

    assert_eq!(
        e.render_error(&RenderOption { colored: false, show_title: false }),
        "E0701: something went wrong\nHelp: Try something else.\nNote: from a test",
    );
    assert_eq!(
        e.render_error(&RenderOption::plain()),
        "[Error]\nE0701: something went wrong\nHelp: Try something else.\nNote: from a test",
    );
}

#[test]
fn err_context_is_set_once() {
    let mut e = DummyError {
        kind: DummyErrorKind::Plain,
        extra: ExtraErrInfo::none(),
    };

    e.try_set_err_context(None);
    assert_eq!(e.get_error_info().context(), ErrorContext::Unknown);

    e.try_set_err_context(Some(ErrorContext::BuildingList));
    e.try_set_err_context(Some(ErrorContext::AccessingValue));
    assert_eq!(e.get_error_info().context(), ErrorContext::BuildingList);

    e.set_error_context(ErrorContext::AccessingValue);
    assert_eq!(e.get_error_info().context(), ErrorContext::AccessingValue);
}

#[test]
fn commas() {
    let words = ["a", "b", "c"].iter().map(|s| s.to_string()).collect::<Vec<_>>();

    assert_eq!(concat_commas(&words[..1], "or", "`", "`"), "`a`");
    assert_eq!(concat_commas(&words[..2], "or", "`", "`"), "`a` or `b`");
    assert_eq!(concat_commas(&words, "and", "", ""), "a, b and c");
}
