//! Command-line surface: argument parsing, logging setup, and the two run
//! modes (interactive editor and one-shot evaluation).

use crate::app::App;
use crate::config::{Config, SuggestConfig};
use crate::error::AppError;
use crate::formula::{can_append, classify, evaluate, format_result, FormulaStore, TokenKind};
use crate::suggest::filter::find_by_name_ignore_case;
use crate::suggest::{
    FixtureSource, HttpSource, QueryCache, Suggestion, SuggestionService, SuggestionSource,
};
use crate::ui::TuiManager;
use clap::{Parser, Subcommand};
use std::fs::File;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Instant;
use tracing::{info, Level};

#[derive(Parser, Debug)]
#[command(name = "tagformula", version, about = "Compose and evaluate tag formulas")]
pub struct Cli {
    /// TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Suggestion endpoint (overrides the config file)
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Read suggestions from a JSON file instead of the endpoint
    #[arg(long, global = true)]
    pub suggestions: Option<PathBuf>,

    /// Write debug logs to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Interactive formula editor (default)
    Edit,
    /// Evaluate tokens given as arguments, e.g. `eval -- rent - 150`
    Eval {
        #[arg(required = true, allow_hyphen_values = true, allow_negative_numbers = true)]
        tokens: Vec<String>,
    },
}

impl Cli {
    /// Config file (or defaults) with command-line overrides applied.
    pub fn resolve_config(&self) -> Result<Config, AppError> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };
        if let Some(endpoint) = &self.endpoint {
            config.suggest.endpoint = endpoint.clone();
        }
        if let Some(fixture) = &self.suggestions {
            config.suggest.fixture = Some(fixture.clone());
        }
        Ok(config)
    }
}

/// Logs go to `log_file` when given. The editor owns the terminal, so
/// without a file it logs nothing; `eval` falls back to warnings on stderr.
pub fn init_logging(log_file: Option<&PathBuf>, interactive: bool) -> Result<(), AppError> {
    match log_file {
        Some(path) => {
            let file = File::create(path)?;
            tracing_subscriber::fmt()
                .with_max_level(Level::DEBUG)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None if !interactive => {
            tracing_subscriber::fmt()
                .with_max_level(Level::WARN)
                .with_writer(std::io::stderr)
                .init();
        }
        None => {}
    }
    Ok(())
}

pub fn build_source(config: &SuggestConfig) -> Result<Arc<dyn SuggestionSource>, AppError> {
    match &config.fixture {
        Some(path) => {
            info!(path = %path.display(), "using suggestion fixture");
            Ok(Arc::new(FixtureSource::from_file(path)?))
        }
        None => {
            info!(endpoint = %config.endpoint, "using suggestion endpoint");
            Ok(Arc::new(HttpSource::new(
                config.endpoint.clone(),
                config.query_param.clone(),
                config.request_timeout(),
            )?))
        }
    }
}

fn build_cache(config: &SuggestConfig) -> QueryCache {
    QueryCache::new(config.full_list_ttl(), config.query_ttl())
}

/// Builds a formula from one token per argument, resolving tag names
/// against `catalog`. Unlike the editor, which drops an out-of-sequence
/// commit silently, this reports it.
pub fn build_formula(tokens: &[String], catalog: &[Suggestion]) -> Result<FormulaStore, AppError> {
    let mut store = FormulaStore::new();
    for (position, raw) in tokens.iter().enumerate() {
        let text = raw.trim();
        if text.is_empty() {
            return Err(AppError::EmptyToken(position));
        }

        let kind = classify(text);
        if !can_append(kind, store.last()) {
            return Err(AppError::Rejected {
                position,
                text: text.to_string(),
                kind,
            });
        }

        let suggestion = match kind {
            TokenKind::Tag => find_by_name_ignore_case(catalog, text).cloned(),
            _ => None,
        };
        store.add_tag(text, kind, suggestion);
    }
    Ok(store)
}

pub fn run_eval(config: &Config, tokens: &[String]) -> Result<String, AppError> {
    let source = build_source(&config.suggest)?;
    let mut service = SuggestionService::inline(source, build_cache(&config.suggest));

    let now = Instant::now();
    service.request("", now);
    service.poll(now);
    let catalog = service.last_known("").unwrap_or(&[]);

    let store = build_formula(tokens, catalog)?;
    Ok(format_result(evaluate(store.formula())))
}

pub fn run_editor(config: &Config) -> Result<(), AppError> {
    let source = build_source(&config.suggest)?;
    let service = SuggestionService::spawn(source, build_cache(&config.suggest))?;
    let mut app = App::new(service, config.editor.clone());

    let mut tui = TuiManager::new(config.editor.max_visible_suggestions)?;
    tui.run_event_loop(&mut app)?;
    Ok(())
}

pub fn run(cli: Cli) -> Result<(), AppError> {
    let config = cli.resolve_config()?;
    let command = cli.command.clone().unwrap_or(Command::Edit);
    init_logging(cli.log_file.as_ref(), command == Command::Edit)?;

    match command {
        Command::Edit => run_editor(&config),
        Command::Eval { tokens } => {
            let result = run_eval(&config, &tokens)?;
            println!("{}", result);
            Ok(())
        }
    }
}
