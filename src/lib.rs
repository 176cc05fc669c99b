pub mod config;
pub mod output;
pub mod prompts;
pub mod summarize;
pub mod youtube;

/// A single timed caption fragment
#[derive(Debug, Clone)]
pub struct Segment {
    pub text: String,
    pub start: f64,
    pub duration: f64,
}

/// Join caption fragments into a single transcript string, space-separated,
/// in original time order.
pub fn transcript_text(segments: &[Segment]) -> String {
    segments.iter().map(|s| s.text.as_str()).collect::<Vec<_>>().join(" ")
}

/// Extract the 11-character video ID from a YouTube URL.
///
/// Matches either a `v=` query parameter or a path segment followed by at
/// least 11 ID characters, capturing exactly the first 11. Returns `None`
/// when no match is found.
pub fn extract_video_id(url: &str) -> Option<String> {
    let re = regex::Regex::new(r"(?:v=|/)([0-9A-Za-z_-]{11})").unwrap();
    re.captures(url.trim()).map(|caps| caps[1].to_string())
}
