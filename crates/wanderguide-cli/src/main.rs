// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use anyhow::Result;
use chrono::Local;
use clap::{ArgAction, Parser, Subcommand};
use owo_colors::OwoColorize;
use rand::rngs::StdRng;
use rand::SeedableRng;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::io::Write;
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};
use wanderguide_core::markup::{self, Span};
use wanderguide_core::{
    respond, AssistantConfig, DialogueController, DialogueError, Message, Role, Sampler,
    TravelContext, QUICK_SUGGESTIONS,
};
use wanderguide_nlu::IntentClassifier;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to assistant.json (defaults to the user config dir)
    #[arg(short, long, env = "WANDERGUIDE_CONFIG")]
    config: Option<PathBuf>,

    /// Seed the random source for reproducible replies
    #[arg(long)]
    seed: Option<u64>,

    /// Reply immediately instead of simulating typing
    #[arg(long)]
    no_delay: bool,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive conversation (default). `/clear` resets, `/quit` exits
    Chat,
    /// Answer a single message and print the updated route
    Ask {
        text: String,
        #[arg(long)]
        from: Option<String>,
        #[arg(long)]
        to: Option<String>,
    },
    /// Show which rule handles a message and the resulting intent
    Classify {
        text: String,
        #[arg(long)]
        from: Option<String>,
        #[arg(long)]
        to: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => AssistantConfig::load(path)?,
        None => AssistantConfig::load_or_default(),
    }
    .with_seed(cli.seed);
    if cli.no_delay {
        config = config.without_delay();
    }
    log::debug!(
        "[Config] typing delay {:?} ms, seed {:?}",
        config.typing_delay(),
        config.rng_seed
    );

    match cli.command.unwrap_or(Commands::Chat) {
        Commands::Chat => chat(&config).await?,
        Commands::Ask { text, from, to } => {
            let context = TravelContext::new(from, to);
            let rng = match config.rng_seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let mut sampler = Sampler::new(rng);
            let reply = respond(&text, &context, &mut sampler, Local::now().time());
            print_text(&reply.text);
            if let Some(route) = reply.context.indicator() {
                println!();
                println!("{} {}", "📍".green(), route.green());
            }
        }
        Commands::Classify { text, from, to } => {
            let context = TravelContext::new(from, to);
            let (intent, rule) = IntentClassifier::classify_with_rule(&text, &context);
            println!("Rule: {}", rule.bold());
            println!("{}", serde_json::to_string_pretty(&intent)?);
        }
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    if let Err(e) = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("Logger already initialised: {}", e);
    }
}

async fn chat(config: &AssistantConfig) -> Result<()> {
    let bot = DialogueController::new(config);
    for message in bot.messages().await {
        print_message(&message);
    }
    print_suggestions();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print_prompt(&bot.context().await)?;
        let Some(line) = lines.next_line().await? else {
            break;
        };

        match line.trim() {
            "/quit" | "/exit" => break,
            "/clear" => {
                bot.clear().await;
                for message in bot.messages().await {
                    print_message(&message);
                }
                print_suggestions();
                continue;
            }
            _ => {}
        }

        match bot.submit(&line).await {
            Ok(pending) => {
                println!("{}", "WanderGuide is typing…".dimmed());
                if let Some(message) = pending.wait().await {
                    print_message(&message);
                }
            }
            Err(e @ DialogueError::EmptyInput) => eprintln!("{}", e.dimmed()),
            Err(e @ DialogueError::Busy) => eprintln!("{}", e.yellow()),
        }
    }
    Ok(())
}

fn print_prompt(context: &TravelContext) -> Result<()> {
    if let Some(route) = context.indicator() {
        print!("{} ", format!("[{}]", route).green());
    }
    print!("{} ", ">".bold());
    std::io::stdout().flush()?;
    Ok(())
}

fn print_suggestions() {
    println!("{}", "Try:".dimmed());
    for suggestion in QUICK_SUGGESTIONS {
        println!("  {} {}", "›".cyan(), suggestion);
    }
    println!();
}

fn print_message(message: &Message) {
    let who = match message.role {
        Role::Bot => "WanderGuide".green().bold().to_string(),
        Role::User => "You".cyan().bold().to_string(),
    };
    println!("{} {}", who, message.time_label().dimmed());
    print_text(&message.text);
    println!();
}

fn print_text(text: &str) {
    for line in markup::parse(text) {
        let rendered: String = line
            .iter()
            .map(|span| match span {
                Span::Plain(s) => s.to_string(),
                Span::Bold(s) => s.bold().to_string(),
            })
            .collect();
        println!("{}", rendered);
    }
}
