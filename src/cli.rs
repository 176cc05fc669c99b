use clap::Parser;

#[derive(Parser)]
#[command(name = "ytsum", about = "Interactive YouTube transcript summarizer", version)]
pub struct Cli {
    /// YouTube video URL (prompted for interactively if omitted)
    pub url: Option<String>,

    /// Generative model for summarization
    #[arg(long)]
    pub model: Option<String>,

    /// Show fetch metadata
    #[arg(short, long)]
    pub verbose: bool,
}
