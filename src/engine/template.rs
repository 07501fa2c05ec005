//! Progress templates handed to the engine.
//!
//! The download template starts with `[download]` so progress lines go
//! through the regular tag styling; the rest is colored inline.

/// Reset graphics mode.
const RESET: &str = "\x1b[0m";

fn paint(code: &str, text: &str, colors: bool) -> String {
    if colors {
        format!("\x1b[{}m{}{}", code, text, RESET)
    } else {
        text.to_string()
    }
}

/// Template for download progress lines.
pub fn download_template(colors: bool) -> String {
    let finished_speed = paint("32", "FINISHED", colors);
    let finished_eta = paint("33", "[FINISHED]", colors);

    [
        "[download] %(progress._percent_str)s".to_string(),
        format!(
            "{}/{}",
            paint("35", "%(progress.downloaded_bytes)#.2DB", colors),
            paint("35", "%(progress._total_bytes_str)s", colors)
        ),
        format!("%(progress._speed_str|{})s", finished_speed),
        format!("{} %(progress._eta_str|{})s", paint("33", "ETA", colors), finished_eta),
    ]
    .join(" • ")
}

/// Template for the terminal title while downloading.
pub const DOWNLOAD_TITLE_TEMPLATE: &str = "%(info.id)s-%(progress.eta)s";

/// Engine arguments installing both templates.
pub fn progress_template_args(colors: bool) -> Vec<String> {
    vec![
        "--progress-template".to_string(),
        format!("download:{}", download_template(colors)),
        "--progress-template".to_string(),
        format!("download-title:{}", DOWNLOAD_TITLE_TEMPLATE),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{classify, Classification};

    #[test]
    fn test_plain_template() {
        assert_eq!(
            download_template(false),
            "[download] %(progress._percent_str)s • \
             %(progress.downloaded_bytes)#.2DB/%(progress._total_bytes_str)s • \
             %(progress._speed_str|FINISHED)s • \
             ETA %(progress._eta_str|[FINISHED])s"
        );
    }

    #[test]
    fn test_colored_template_keeps_download_tag() {
        let template = download_template(true);
        assert!(template.contains("\x1b[35m%(progress.downloaded_bytes)#.2DB\x1b[0m"));
        assert!(matches!(
            classify(&template),
            Classification::Bracketed { tag: "download", .. }
        ));
    }

    #[test]
    fn test_args() {
        let args = progress_template_args(false);
        assert_eq!(args.len(), 4);
        assert!(args[1].starts_with("download:[download] "));
        assert_eq!(args[3], "download-title:%(info.id)s-%(progress.eta)s");
    }
}
