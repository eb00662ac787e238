use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::time::Duration;

const TICK: Duration = Duration::from_millis(100);

pub trait MultiProgressNew {
    fn add_with_style(&self, pb: ProgressBar, style: ProgressStyle) -> ProgressBar;

    /// A ticking spinner that starts with `message`.
    fn add_spinner(&self, message: impl Into<String>) -> ProgressBar;
}

impl MultiProgressNew for MultiProgress {
    fn add_with_style(&self, pb: ProgressBar, style: ProgressStyle) -> ProgressBar {
        let pb = self.add(pb);
        pb.set_style(style);
        pb.enable_steady_tick(TICK);
        pb
    }

    fn add_spinner(&self, message: impl Into<String>) -> ProgressBar {
        let pb = self.add_with_style(
            ProgressBar::new_spinner(),
            crate::utils::ProgressStyleTemplate::only_message(),
        );
        pb.set_message(message.into());
        pb
    }
}
