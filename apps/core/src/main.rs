// PromptForge CLI entry point

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{error, info};

use promptforge::config::AppConfig;
use promptforge::image_query::{plan_image_search, ImageStyle};
use promptforge::models::GenerationRequest;
use promptforge::synthesis::{CodeLanguage, WritingStyle};
use promptforge::{generate_code, render, telemetry, TextGenerator};

#[derive(Parser)]
#[command(author, version, about = "Template-based text and code generation with image search planning", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a formatted text block from a prompt
    Text {
        /// Description of the text to generate
        prompt: String,

        /// Writing style (creative, professional, casual, academic)
        #[arg(short, long)]
        style: Option<WritingStyle>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Generate starter code from a prompt
    Code {
        /// Description of the program to generate
        prompt: String,

        /// Target language (javascript, python, html, java)
        #[arg(short, long, default_value_t = CodeLanguage::JavaScript)]
        language: CodeLanguage,

        /// Print the code with its identifiers and file name as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the image search queries planned for a prompt
    ImageQuery {
        /// Description of the wanted image
        prompt: String,

        /// Image style (realistic, artistic, cartoon, abstract)
        #[arg(short, long, default_value_t = ImageStyle::Realistic)]
        style: ImageStyle,

        /// Print the plan as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
enum OutputFormat {
    Text,
    Html,
    Json,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load().context("Failed to load configuration")?;
    telemetry::init("promptforge", config.log_format)?;

    match cli.command {
        Commands::Text {
            prompt,
            style,
            format,
        } => {
            let style = style.unwrap_or(config.default_style);
            info!("Command received: text({}, {})", style, prompt);

            let generator = TextGenerator::new(&config);
            let request = GenerationRequest::new(prompt, style);
            let result = generator.generate(&request).await.inspect_err(|e| {
                error!("Text generation failed: {}", e);
            })?;

            match format {
                OutputFormat::Text => println!("{}", render::to_plain(&result.text)),
                OutputFormat::Html => println!("{}", render::to_html(&result.text)),
                OutputFormat::Json => println!("{}", render::to_json(&result)?),
            }
        }
        Commands::Code {
            prompt,
            language,
            json,
        } => {
            info!("Command received: code({}, {})", language, prompt);
            let generated = generate_code(&prompt, language);

            if json {
                println!("{}", render::to_json(&generated)?);
            } else {
                print!("{}", generated.code);
            }
        }
        Commands::ImageQuery {
            prompt,
            style,
            json,
        } => {
            info!("Command received: image-query({}, {})", style, prompt);
            let plan = plan_image_search(&prompt, style);

            if json {
                println!("{}", render::to_json(&plan)?);
            } else {
                for query in plan.queries.iter().chain(plan.fallback_queries.iter()) {
                    println!("{}", query);
                }
            }
        }
    }

    Ok(())
}
