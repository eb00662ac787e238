use indicatif::ProgressStyle;

const ONLY_MESSAGE_TEMPLATE: &str = "{spinner} {wide_msg}";
const PAGES_TEMPLATE: &str = "{spinner} {msg:30} {wide_bar:} {pos:>5}/{len}";

pub struct ProgressStyleTemplate;

impl ProgressStyleTemplate {
    pub fn only_message() -> ProgressStyle {
        ProgressStyle::with_template(ONLY_MESSAGE_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    /// Bar for paginated listings whose total is announced up front.
    pub fn pages_bar() -> ProgressStyle {
        ProgressStyle::with_template(PAGES_TEMPLATE)
            .map(|style| style.progress_chars("#>-"))
            .unwrap_or_else(|_| ProgressStyle::default_bar())
    }
}
