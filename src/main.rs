use anyhow::Result;
use clap::Parser;
use elementary_data::{BoundaryMode, InitialState, RuleCode};
use elementary_lib::app::{App, OutputFormat, ShutdownManager};
use elementary_lib::model::config::AppConfig;
use elementary_tui::Tui;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Where to show the automaton
    #[arg(short, long, value_enum, default_value = "tui")]
    mode: Mode,

    /// Custom config file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Wolfram code (0-255)
    #[arg(short, long)]
    rule: Option<RuleCode>,

    /// Number of cells in the row (at least 3)
    #[arg(short, long)]
    size: Option<usize>,

    /// Edge handling: cyclic, fixed or periodic
    #[arg(short, long)]
    boundary: Option<BoundaryMode>,

    /// First generation: random, single or empty
    #[arg(short, long)]
    initial: Option<InitialState>,

    /// Seed for the random initial state
    #[arg(long)]
    seed: Option<u64>,

    /// Generations to show (0 = until stopped)
    #[arg(short, long)]
    generations: Option<u64>,

    /// Delay between generations in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Headless output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Print the rule table before the first generation (headless)
    #[arg(long)]
    show_rule: bool,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    Tui,
    Headless,
}

impl Args {
    fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(rule) = self.rule {
            config.automaton.rule = rule;
        }
        if let Some(size) = self.size {
            config.automaton.size = size;
        }
        if let Some(boundary) = self.boundary {
            config.automaton.boundary = boundary;
        }
        if let Some(initial) = self.initial {
            config.seed.initial = initial;
        }
        if let Some(seed) = self.seed {
            config.seed.seed = seed;
        }
        if let Some(generations) = self.generations {
            config.display.generations = generations;
        }
        if let Some(delay_ms) = self.delay_ms {
            config.display.delay_ms = delay_ms;
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    elementary_core::init_logging(match args.mode {
        Mode::Headless => "info",
        Mode::Tui => "warn",
    });

    let mut config = AppConfig::load(&args.config)?;
    args.apply_overrides(&mut config);
    let mut app = App::new(config)?;

    let shutdown = ShutdownManager::new();
    shutdown.listen_for_ctrl_c();

    match args.mode {
        Mode::Headless => {
            let mut stdout = std::io::stdout();
            app.run_headless(&mut stdout, args.format, args.show_rule, &shutdown)
                .await?;
        }
        Mode::Tui => {
            let mut tui = Tui::new()?;
            tui.init()?;

            let res = app.run(&mut tui, &shutdown).await;

            tui.exit()?;

            if let Err(e) = res {
                eprintln!("Application error: {e:#}");
            } else if args.show_rule {
                print!("{}", app.automaton.rule_table());
            }
        }
    }

    Ok(())
}
