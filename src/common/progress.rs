use indicatif::{ProgressBar, ProgressStyle};

pub fn make_progress(show: bool, total: u64, msg: &str) -> Option<ProgressBar> {
    if !show {
        return None;
    }
    let pb = ProgressBar::new(total);
    if let Ok(style) = ProgressStyle::default_bar().template("{spinner:.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}") {
        pb.set_style(style.progress_chars("━━░"));
    }
    pb.set_message(msg.to_string());
    Some(pb)
}

pub fn finish(pb: Option<ProgressBar>) {
    if let Some(pb) = pb {
        pb.finish_and_clear();
    }
}
