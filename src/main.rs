use std::io::{self, Write as _};
use std::path::PathBuf;

use clap::Parser;
use eyre::{Result, bail};
use log::{debug, info, warn};

mod cli;

use cli::Cli;
use ytsum::config::{Config, config_path};
use ytsum::prompts::{self, PromptTemplate, TemplateBody};
use ytsum::summarize::{self, GeminiClient, TextGenerator};
use ytsum::youtube::{InnerTube, fetch_transcript};
use ytsum::{extract_video_id, output};

fn setup_logging() -> Result<()> {
    let log_dir = log_dir();
    std::fs::create_dir_all(&log_dir)?;
    let log_file = log_dir.join("ytsum.log");

    let target = Box::new(std::fs::OpenOptions::new().create(true).append(true).open(&log_file)?);

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized: {}", log_file.display());
    Ok(())
}

fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ytsum")
        .join("logs")
}

fn prompt_line(message: &str) -> Result<String> {
    print!("{message}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn prompt_custom_template() -> Result<String> {
    println!("\nEnter your custom prompt (use {{text}} where you want the transcript inserted):");
    println!("Example: 'Summarize this video about {{text}} in simple terms for beginners'");
    prompt_line("Custom prompt: ")
}

fn rule() -> String {
    "=".repeat(60)
}

/// One template-choice-through-display round: resolve the prompt body
/// (soliciting it interactively for the custom template), dispatch to the
/// generator, clean and print the result. Generation failure is printed and
/// yields `None`; it is never retried.
async fn run_round(
    generator: &dyn TextGenerator,
    transcript: &str,
    template: &PromptTemplate,
) -> Result<Option<String>> {
    let prompt = match template.body {
        TemplateBody::Literal(body) => summarize::render_prompt(body, transcript),
        TemplateBody::Custom => {
            let custom = prompt_custom_template()?;
            summarize::render_prompt(&custom, transcript)
        }
    };

    println!("\nGenerating {}...", template.name);

    match generator.generate(&prompt).await {
        Ok(raw) => {
            let formatted = output::clean(Some(&raw));
            println!("\n{}", rule());
            println!("{}", template.name.to_uppercase());
            println!("{}", rule());
            println!("{formatted}");
            println!("{}", rule());
            Ok(Some(formatted))
        }
        Err(e) => {
            warn!("summary generation failed: {e}");
            println!("❌ Failed to generate summary");
            Ok(None)
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_logging()?;

    let cli = Cli::parse();

    // Load config file (non-fatal if missing/invalid)
    let config = Config::load().unwrap_or_default();

    if cli.verbose {
        let config_path = config_path();
        if config_path.exists() {
            eprintln!("Config: {}", config_path.display());
        }
    }

    // Missing credential is the one precondition that terminates with a
    // non-zero exit, before any interactive flow begins
    let api_key = std::env::var("GEMINI_API_KEY")
        .ok()
        .filter(|key| !key.is_empty())
        .or_else(|| config.api_key.clone());
    let Some(api_key) = api_key else {
        bail!(
            "GEMINI_API_KEY environment variable not set (or add api_key to {})",
            config_path().display()
        );
    };

    let model = cli
        .model
        .or(config.default_model)
        .unwrap_or_else(|| summarize::DEFAULT_MODEL.to_string());
    debug!("Using model {model}");

    println!("YouTube Video Transcript Summarizer");
    println!("{}", "=".repeat(50));

    let url = match cli.url {
        Some(url) => url,
        None => prompt_line("Enter the YouTube URL: ")?,
    };

    let Some(video_id) = extract_video_id(&url) else {
        println!("❌ Invalid YouTube URL format");
        println!("Expected formats:");
        println!("- https://www.youtube.com/watch?v=VIDEO_ID");
        println!("- https://youtu.be/VIDEO_ID");
        return Ok(());
    };
    println!("✅ Video ID extracted: {video_id}");

    let client = reqwest::Client::new();
    let source = InnerTube::new(client.clone());

    let Some(transcript) = fetch_transcript(&source, &video_id).await else {
        println!("❌ Could not retrieve transcript for this video");
        return Ok(());
    };
    println!("✅ Transcript retrieved successfully");
    println!("Transcript length: {} characters", transcript.len());

    let generator = GeminiClient::new(client, api_key, model);

    println!("{}", prompts::menu());
    let choice = prompt_line("\nSelect summary type (1-8): ")?;
    let Some(template) = prompts::find(&choice) else {
        println!("❌ Invalid choice. Please select 1-8.");
        return Ok(());
    };

    let summary = run_round(&generator, &transcript, template).await?;

    if let Some(ref summary) = summary {
        let save_choice = prompt_line("\nSave summary to file? (y/n): ")?;
        if save_choice.eq_ignore_ascii_case("y") {
            match output::save_summary(summary, &video_id, template.name) {
                Ok(filename) => println!("✅ Summary saved to: {filename}"),
                Err(e) => println!("❌ Error saving file: {e}"),
            }
        }

        let another = prompt_line("\nGenerate another type of summary? (y/n): ")?;
        if another.eq_ignore_ascii_case("y") {
            println!("{}", prompts::menu());
            let second_choice = prompt_line("Select another summary type (1-8): ")?;
            // A repeated or invalid second choice is silently skipped, and
            // the second summary is never offered a save step
            if second_choice != choice {
                if let Some(second) = prompts::find(&second_choice) {
                    run_round(&generator, &transcript, second).await?;
                }
            }
        }
    }

    println!("\nThank you for using ytsum!");
    Ok(())
}
