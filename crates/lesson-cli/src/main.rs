use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use lesson_config::Config;
use lesson_engine::{
    API_KEY_ENV, ApiKey, ClipboardSink, CommandGenerator, ContentService, CopyAction,
    GeneratedContent, GenerationOptions, GenerationRequest, LessonView, Lexicon,
    clipboard::{FileSink, WriterSink},
    parse_content,
};
use std::{
    io::{self, Read, Write},
    path::{Path, PathBuf},
    process,
};

mod render;

#[derive(Parser)]
#[command(name = "lesson", version, about = "Render and generate structured lesson text")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render lesson text with styling and code highlighting
    Render {
        /// Lesson text file (reads stdin when omitted)
        file: Option<PathBuf>,
    },
    /// Print the parsed blocks as JSON
    Blocks {
        /// Lesson text file (reads stdin when omitted)
        file: Option<PathBuf>,
    },
    /// Generate a lesson for a topic, falling back to a built-in lesson
    Generate {
        #[arg(long)]
        topic: String,
        #[arg(long)]
        course: String,
        /// Print the raw lesson text instead of rendering it
        #[arg(long)]
        raw: bool,
        /// Config file to use instead of the default location
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Copy the raw text of a code block
    Copy {
        /// Lesson text file (reads stdin when omitted)
        file: Option<PathBuf>,
        /// 1-based index of the code block
        #[arg(long, default_value_t = 1)]
        block: usize,
        /// Write to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli.command).await {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

async fn run(command: Command) -> Result<()> {
    match command {
        Command::Render { file } => {
            let raw = read_input(file.as_deref())?;
            let view = LessonView::from_raw(&raw, Lexicon::javascript());
            render::render_lesson(&mut io::stdout().lock(), &view)?;
        }
        Command::Blocks { file } => {
            let raw = read_input(file.as_deref())?;
            let parsed = parse_content(&raw);
            let json = serde_json::to_string_pretty(&parsed.blocks)?;
            writeln!(io::stdout(), "{json}")?;
        }
        Command::Generate {
            topic,
            course,
            raw,
            config,
        } => {
            let content = generate(&topic, &course, config.as_deref()).await?;
            if let GeneratedContent::Fallback { reason, .. } = &content {
                eprintln!("Note: showing the built-in lesson ({reason})");
            }
            let text = content.into_text();
            if raw {
                writeln!(io::stdout(), "{text}")?;
            } else {
                let view = LessonView::from_raw(&text, Lexicon::javascript());
                render::render_lesson(&mut io::stdout().lock(), &view)?;
            }
        }
        Command::Copy {
            file,
            block,
            output,
        } => {
            let raw = read_input(file.as_deref())?;
            let parsed = parse_content(&raw);
            let count = parsed.code_blocks().count();
            let Some(code) = block
                .checked_sub(1)
                .and_then(|i| parsed.code_blocks().nth(i))
            else {
                bail!("code block {block} not found (lesson has {count} code blocks)");
            };

            let confirmed = match output {
                Some(path) => copy_with(FileSink::new(path), &code.text).await,
                None => copy_with(WriterSink::new(io::stdout()), &code.text).await,
            };
            if !confirmed {
                bail!("copy failed");
            }
            eprintln!("Copied!");
        }
    }
    Ok(())
}

async fn copy_with<S: ClipboardSink>(sink: S, code: &str) -> bool {
    let action = CopyAction::new(sink);
    action.copy(code).await;
    action.is_confirmed()
}

async fn generate(topic: &str, course: &str, config_path: Option<&Path>) -> Result<GeneratedContent> {
    let config = match config_path {
        Some(path) => Config::load_from_path(path)?
            .with_context(|| format!("config file not found: {}", path.display()))?,
        None => Config::load()?.unwrap_or_default(),
    };
    let generation = config.generation;

    let credential = generation.resolve_api_key(API_KEY_ENV)?.and_then(ApiKey::new);
    let generator = CommandGenerator::from_argv(&generation.command);
    if let Some(generator) = &generator {
        log::info!("Using generator command {}", generator.program());
    }
    let options = GenerationOptions {
        model: generation.model,
        temperature: generation.temperature,
        max_tokens: generation.max_tokens,
    };

    let request = GenerationRequest::new(topic, course)?;
    let service = ContentService::new(generator, credential, options);
    log::info!("Requesting lesson with model {}", service.options().model);
    Ok(service.generate(&request).await)
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut raw = String::new();
            io::stdin()
                .read_to_string(&mut raw)
                .context("failed to read stdin")?;
            Ok(raw)
        }
    }
}
