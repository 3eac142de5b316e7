//! Context setup and per-command handlers.
//!
//! - `run()`: parses arguments, sets up logging and dispatches (called by `main.rs`)
//! - `init_context()`: resolves the data directory and builds the `CardApi`
//! - `handle_*()`: call the API and hand the `CmdResult` to `print`

use super::print::{print_card, print_config, print_messages, print_records};
use super::setup::{Cli, Commands, FormArgs};
use clap::Parser;
use colored::Colorize;
use directories::ProjectDirs;
use idcard::api::CardApi;
use idcard::commands::config::ConfigAction;
use idcard::config::{CardConfig, ConfigKey, Defaults};
use idcard::error::{CardError, Result};
use idcard::form::FormMode;
use idcard::image::{ImageSlot, SourceImage};
use idcard::store::fs::FileSlot;
use std::path::PathBuf;

/// Overrides the per-user data directory.
pub const HOME_ENV: &str = "IDCARD_HOME";

struct AppContext {
    api: CardApi<FileSlot>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::List) | None => handle_list(&mut ctx),
        Some(Commands::Form(args)) => handle_form(&mut ctx, args),
        Some(Commands::Card { ec_no, json }) => handle_card(&mut ctx, &ec_no, json),
        Some(Commands::Init) => handle_init(&mut ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "idcard", "idcard")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| CardError::Api("Could not determine a data directory".to_string()))
}

fn init_context() -> Result<AppContext> {
    let dir = data_dir()?;
    log::debug!("Using data directory {}", dir.display());

    let config = CardConfig::load(&dir)?;
    let defaults = Defaults::from_config(&config, &dir);
    let api = CardApi::new(FileSlot::new(dir.clone()), &config, defaults, dir);

    Ok(AppContext { api })
}

fn handle_list(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.list();
    print_records(&result.listed_records);
    print_messages(&result.messages);
    Ok(())
}

fn handle_form(ctx: &mut AppContext, args: FormArgs) -> Result<()> {
    let mut form = ctx.api.open_form(args.index.as_deref());
    let mode = form.mode();

    if let (Some(index), FormMode::Create) = (&args.index, mode) {
        println!(
            "{}",
            format!("No employee at index {}; adding a new one.", index.trim()).dimmed()
        );
    }
    println!("{} [{}]", mode.title().bold(), mode.action_label().dimmed());

    args.apply(form.fields_mut());

    let images = [
        (ImageSlot::Photo, &args.photo),
        (ImageSlot::LogoLeft, &args.logo_left),
        (ImageSlot::LogoRight, &args.logo_right),
    ];
    for (slot, path) in images {
        if let Some(path) = path {
            let source = SourceImage::from_path(path)?;
            let result = ctx.api.load_image(&mut form, slot, source)?;
            print_messages(&result.messages);
        }
    }

    let result = ctx.api.submit_form(form);
    print_messages(&result.messages);
    if result.has_errors() {
        return Err(CardError::Store("Employee was not saved".to_string()));
    }
    print_records(&result.listed_records);
    Ok(())
}

fn handle_card(ctx: &mut AppContext, ec_no: &str, json: bool) -> Result<()> {
    let result = ctx.api.card(ec_no);
    let Some(model) = &result.card else {
        print_messages(&result.messages);
        return Ok(());
    };

    if json {
        println!("{}", serde_json::to_string_pretty(model)?);
    } else {
        print_card(model);
        print_messages(&result.messages);
    }
    Ok(())
}

fn handle_init(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.init();
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), value) => {
            let key = ConfigKey::parse(&k)
                .ok_or_else(|| CardError::Api(format!("Unknown config key: {}", k)))?;
            match value {
                None => ConfigAction::ShowKey(key),
                Some(v) => ConfigAction::Set(key, v),
            }
        }
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            print_config(config);
        }
    }
    print_messages(&result.messages);
    Ok(())
}
