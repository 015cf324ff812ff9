use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use text_source::YouTubeClient;

use brief_ai::{
    huggingface::{HuggingFaceClient, ModelIds},
    models::{inference_client, InferenceConfig},
    tracing::init_tracing_subscriber,
    Briefing, BriefingProcessorBuilder, ContentReference, Document,
};

#[derive(Parser)]
#[command(
    name = "brief-ai",
    about = "Summarize a YouTube video or a PDF document and detect its tone"
)]
struct Cli {
    /// Hugging Face API token
    #[arg(long, env = "HF_API_TOKEN", hide_env_values = true)]
    hf_token: Option<String>,

    /// Base URL of the inference backend
    #[arg(long, env = "HF_INFERENCE_URL", default_value = HuggingFaceClient::BASE_URL)]
    inference_url: String,

    /// Abstractive summarization model
    #[arg(long, env = "SUMMARIZER_MODEL", default_value = HuggingFaceClient::SUMMARIZER_MODEL)]
    summarizer_model: String,

    /// Sentiment classification model
    #[arg(long, env = "SENTIMENT_MODEL", default_value = HuggingFaceClient::SENTIMENT_MODEL)]
    sentiment_model: String,

    /// Punctuation restoration model
    #[arg(long, env = "PUNCTUATION_MODEL", default_value = HuggingFaceClient::PUNCTUATION_MODEL)]
    punctuation_model: String,

    /// Base URL used to reach YouTube
    #[arg(long, env = "YOUTUBE_BASE_URL", default_value = YouTubeClient::BASE_URL)]
    youtube_url: String,

    /// Print the processed source text below the summary
    #[arg(long, global = true)]
    show_source: bool,

    /// Print the whole briefing as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Summarize the transcript of a YouTube video
    Video {
        /// Link in the `watch?v=` or `youtu.be/` form
        url: String,
    },
    /// Summarize the text of a PDF document
    Pdf { path: PathBuf },
}

async fn load_reference(command: Command) -> anyhow::Result<ContentReference> {
    match command {
        Command::Video { url } => Ok(ContentReference::Video(url)),
        Command::Pdf { path } => {
            let bytes = tokio::fs::read(&path)
                .await
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            Ok(ContentReference::Document(Document::new(name, bytes)))
        }
    }
}

fn render(briefing: &Briefing, show_source: bool) -> String {
    let mut out = String::new();

    out.push_str("Executive Summary\n-----------------\n");
    out.push_str(&briefing.summary);
    out.push_str("\n\n");

    match &briefing.sentiment {
        Some(sentiment) => {
            out.push_str(&format!("Detected Tone:    {}\n", sentiment.label));
            out.push_str(&format!(
                "Confidence Score: {:.1}%\n",
                sentiment.score * 100.0
            ));
        }
        None => out.push_str("Detected Tone:    unavailable\n"),
    }

    for notice in &briefing.notices {
        out.push_str(&format!("! {notice}\n"));
    }

    if show_source {
        out.push_str("\nSource Text\n-----------\n");
        out.push_str(&briefing.source_text);
        out.push('\n');
    }

    out
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let _guard = sentry::init((
        std::env::var("SENTRY_DSN").unwrap_or_default(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    ));

    let cli = Cli::parse();
    init_tracing_subscriber()?;

    let config = InferenceConfig {
        base_url: cli.inference_url,
        api_token: cli.hf_token,
        models: ModelIds {
            summarizer: cli.summarizer_model,
            sentiment: cli.sentiment_model,
            punctuation: cli.punctuation_model,
        },
    };
    let client = inference_client(&config);

    let processor = BriefingProcessorBuilder::new()
        .transcript_source(YouTubeClient::new().with_base_url(cli.youtube_url))
        .punctuator(client)
        .summarizer(client)
        .classifier(client)
        .build();

    let reference = load_reference(cli.command).await?;
    let briefing = processor
        .run(&reference, |progress| {
            eprintln!("Processing segment {}/{}", progress.current, progress.total)
        })
        .await?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&briefing)?);
    } else {
        print!("{}", render(&briefing, cli.show_source));
    }

    Ok(())
}
