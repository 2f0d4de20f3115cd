/// How `MuplError::render_error` draws an error.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderOption {
    pub colored: bool,

    // `[Error while calling a function]`
    pub show_title: bool,
}

impl RenderOption {
    /// For logs and tests: no ansi escape codes.
    pub fn plain() -> Self {
        RenderOption {
            colored: false,
            ..RenderOption::default()
        }
    }
}

impl Default for RenderOption {
    fn default() -> Self {
        RenderOption {
            colored: true,
            show_title: true,
        }
    }
}
