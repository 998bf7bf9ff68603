// Fri Oct 16 2026 - Alex

use super::args::Args;
use crate::engine::{CheckMode, RunContext, Runner};
use crate::report::Report;
use crate::ui::display::DisplayRenderer;
use colored::Colorize;

pub struct CommandHandler {
    renderer: DisplayRenderer,
}

impl CommandHandler {
    pub fn new() -> Self {
        Self {
            renderer: DisplayRenderer::new(),
        }
    }

    pub fn with_renderer(renderer: DisplayRenderer) -> Self {
        Self { renderer }
    }

    /// Runs the selected check and prints its report; the report decides the exit code.
    pub fn execute(&self, args: Args) -> anyhow::Result<Report> {
        self.setup_logging(&args)?;

        if args.no_color {
            colored::control::set_override(false);
        }

        let config = args.build_config()?;
        let mode = args.command.mode();

        if !args.quiet && !args.json {
            println!("Scanning {} under: {}", Self::subject(mode), config.src_root.display());
        }

        let runner = Runner::new(RunContext::new(config)?)?;
        let report = runner.run(mode)?;

        if args.json {
            println!("{}", report.to_json());
        } else {
            print!("{}", self.renderer.render(&report));
        }

        Ok(report)
    }

    fn subject(mode: CheckMode) -> &'static str {
        match mode {
            CheckMode::Module => "module pairs",
            CheckMode::Guard => "headers",
            CheckMode::All => "sources",
        }
    }

    fn setup_logging(&self, args: &Args) -> anyhow::Result<()> {
        let level = match args.log_level.to_lowercase().as_str() {
            "trace" => log::LevelFilter::Trace,
            "debug" => log::LevelFilter::Debug,
            "info" => log::LevelFilter::Info,
            "warn" => log::LevelFilter::Warn,
            "error" => log::LevelFilter::Error,
            "off" => log::LevelFilter::Off,
            other => return Err(anyhow::anyhow!("unknown log level: {}", other)),
        };

        env_logger::Builder::new()
            .filter_level(level)
            .format_timestamp(None)
            .try_init()?;

        Ok(())
    }

    /// Prints a fatal error the way every other message is printed.
    pub fn report_error(&self, error: &anyhow::Error) {
        eprintln!("{} {:#}", "[!]".red(), error);
    }
}

impl Default for CommandHandler {
    fn default() -> Self {
        Self::new()
    }
}
