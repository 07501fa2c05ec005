//! Console output utilities.

use console::{style, StyledObject};

/// Print a warning message.
pub fn print_warning(message: &str) {
    eprintln!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Usage examples: a label and the commands it refers to.
const EXAMPLES: &[(&str, &[&str])] = &[
    ("List all formats", &["yt -F https://www.youtube.com/watch?v=FQUrmnwCuqs"]),
    (
        "Download subtitles",
        &["yt --sub-lang en --write-sub https://www.youtube.com/watch?v=FQUrmnwCuqs"],
    ),
    (
        "Desc, metadata, etc",
        &["--write-description --write-info-json --write-annotations --write-sub --write-thumbnail"],
    ),
    (
        "Download audio only",
        &["yt -x --audio-format mp3 https://www.youtube.com/watch?v=FQUrmnwCuqs"],
    ),
    (
        "Custom filename output",
        &["yt -o \"Output Filename\" https://www.youtube.com/watch?v=FQUrmnwCuqs"],
    ),
    ("Download multiple videos", &["yt <url1> <url2>", "yt -a urls.txt"]),
    (
        "Download in certain quality",
        &["yt -f best https://www.youtube.com/watch?v=FQUrmnwCuqs"],
    ),
];

/// Format selectors and what they pick.
const QUALITIES: &[(&str, &str)] = &[
    ("best", "Select the best quality format of the given file with video and audio."),
    ("worst", "Select the worst quality format (both video and audio)."),
    (
        "bestvideo",
        "Select the best quality video-only format (e.g. DASH video). Please note that it may not be available.",
    ),
    ("worstvideo", "Select the worst quality video-only format. May not be available."),
    ("bestaudio", "Select the best quality audio only-format. May not be available."),
    ("worstaudio", "Select the worst quality audio only-format. May not be available."),
];

fn code(command: &str) -> StyledObject<&str> {
    style(command).color256(237).on_color256(252)
}

/// Render the examples screen.
pub fn examples_text() -> String {
    let mut out = String::new();

    for (label, commands) in EXAMPLES {
        let commands: Vec<String> = commands.iter().map(|c| code(c).to_string()).collect();
        out.push_str(&format!("{}: {}\n", label, commands.join(" or ")));
    }

    out.push_str("Available qualities:\n");
    for (name, description) in QUALITIES {
        out.push_str(&format!("    * {} - {}\n", name, description));
    }

    out
}

/// Print the examples screen.
pub fn print_examples() {
    print!("{}", examples_text());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_examples_text() {
        let text = console::strip_ansi_codes(&examples_text()).into_owned();
        assert!(text.starts_with("List all formats: yt -F "));
        assert!(text.contains("Download multiple videos: yt <url1> <url2> or yt -a urls.txt\n"));
        assert!(text.contains("    * bestaudio - "));
        assert_eq!(text.lines().count(), EXAMPLES.len() + 1 + QUALITIES.len());
    }
}
