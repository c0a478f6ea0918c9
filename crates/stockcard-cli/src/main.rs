//! Command-line interface for stockcard
//!
//! ```bash
//! export STOCKCARD_STOCK_API_URL="http://localhost:8080/api/stock"
//! stockcard stock
//! stockcard image a red panda in the snow
//! stockcard --presenter discord stock   # needs DISCORD_WEBHOOK_URL
//! stockcard                             # interactive mode
//! ```

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use stockcard_bot::{BotConfig, ConsolePresenter, DiscordWebhookPresenter, Reply, StockBot};
use stockcard_core::{Presenter, RefreshState};
use tracing::{Instrument, info, info_span};

#[derive(Parser, Debug)]
#[command(name = "stockcard")]
#[command(about = "Shop stock and image cards for chat bots", long_about = None)]
struct Args {
    /// Where cards are shown
    #[arg(short, long, value_enum, default_value = "console")]
    presenter: PresenterKind,

    /// Discord webhook URL (overrides DISCORD_WEBHOOK_URL)
    #[arg(long)]
    webhook: Option<String>,

    #[command(subcommand)]
    command: Option<Cmd>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PresenterKind {
    /// Print cards to stdout
    Console,
    /// Post cards through a Discord webhook
    Discord,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Cmd {
    /// Show the current shop stock
    Stock,
    /// Generate an image from a prompt
    Image {
        /// Prompt words, joined with spaces
        #[arg(required = true, num_args = 1..)]
        prompt: Vec<String>,
    },
    /// Read slash commands from stdin (default)
    Repl,
}

fn build_presenter(
    kind: PresenterKind,
    webhook: Option<&str>,
    config: &BotConfig,
) -> anyhow::Result<Box<dyn Presenter>> {
    match kind {
        PresenterKind::Console => Ok(Box::new(ConsolePresenter::stdout())),
        PresenterKind::Discord => {
            let url = webhook
                .or(config.discord_webhook_url.as_deref())
                .context("Discord presenter needs --webhook or DISCORD_WEBHOOK_URL")?;
            Ok(Box::new(DiscordWebhookPresenter::new(
                url,
                config.request_timeout,
            )?))
        }
    }
}

fn exit_code(state: RefreshState) -> ExitCode {
    match state {
        RefreshState::Succeeded => ExitCode::SUCCESS,
        RefreshState::Loading | RefreshState::Failed => ExitCode::FAILURE,
    }
}

async fn run_repl(bot: &StockBot) -> anyhow::Result<()> {
    println!("stockcard - type /help for commands, /exit to quit\n");

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!(">>> ");
        stdout.flush()?;

        let mut input = String::new();
        match stdin.lock().read_line(&mut input) {
            Ok(0) => {
                println!();
                break;
            }
            Ok(_) => {}
            Err(e) => {
                eprintln!("Error reading input: {e}");
                continue;
            }
        }

        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        match bot.handle(input).await {
            Ok(Reply::Refreshed(_)) => {}
            Ok(Reply::Help(text)) => println!("{text}"),
            Ok(Reply::Exit) => break,
            Err(e) => eprintln!("Error: {e}\n"),
        }
    }

    Ok(())
}

async fn run(args: Args) -> anyhow::Result<ExitCode> {
    let config = BotConfig::from_env().context("invalid stockcard configuration")?;
    let presenter = build_presenter(args.presenter, args.webhook.as_deref(), &config)?;
    let bot = StockBot::new(config, presenter)?;

    info!(presenter = ?args.presenter, "Starting stockcard");

    match args.command.unwrap_or(Cmd::Repl) {
        Cmd::Stock => Ok(exit_code(bot.stock().await?)),
        Cmd::Image { prompt } => Ok(exit_code(bot.image(&prompt.join(" ")).await?)),
        Cmd::Repl => {
            run_repl(&bot).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let app = stockcard_utils::Config::from_env();
    stockcard_utils::init_tracing_with(&app);

    let args = Args::parse();
    let span = info_span!("app", name = %app.app_name, environment = %app.environment);

    run(args).instrument(span).await
}
