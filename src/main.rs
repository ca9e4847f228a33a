//! Qcadoo View - Command Line Host
//!
//! `qcd-view page <descriptor.json>` builds a page, runs its scripts and
//! prints the aggregated value together with the requests the page made.
//! `qcd-view reset <username>` runs the password reset flow.

use std::path::PathBuf;
use std::rc::Rc;

use anyhow::{Context, bail};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use qcd_view::app::{MainController, Page, PageController, TracingActionEvaluator};
use qcd_view::components::{ComponentRegistry, PageConstructor};
use qcd_view::connection::{ViewConfig, load_view_config};
use qcd_view::eventing::ControllerEvent;
use qcd_view::features::password_reset::{PasswordResetController, ResetOutcome};
use qcd_view::helpers::get_or_create_data_dir;
use qcd_view::services::{HttpPasswordResetTransport, HttpScriptLoader, StaticScriptLoader, block_on};

const USAGE: &str = "usage: qcd-view [--config <path>] (page <descriptor.json> | reset <username>)";

enum Command {
    Page(PathBuf),
    Reset(String),
}

fn parse_args() -> anyhow::Result<(Option<PathBuf>, Command)> {
    let mut config = None;
    let mut positional = Vec::new();

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--config" {
            let path = args.next().context("--config requires a path")?;
            config = Some(PathBuf::from(path));
        } else {
            positional.push(arg);
        }
    }

    let command = match positional.as_slice() {
        [command, file] if command == "page" => Command::Page(PathBuf::from(file)),
        [command, username] if command == "reset" => Command::Reset(username.clone()),
        _ => bail!(USAGE),
    };

    Ok((config, command))
}

/// Console output plus a daily log file in the data directory
fn init_tracing() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());
    let console = fmt::layer().with_writer(std::io::stderr);

    match get_or_create_data_dir() {
        Ok(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "qcd-view.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::registry()
                .with(filter)
                .with(console)
                .with(fmt::layer().with_ansi(false).with_writer(writer))
                .init();
            Some(guard)
        }
        Err(err) => {
            tracing_subscriber::registry().with(filter).with(console).init();
            tracing::warn!(error = %err, "File logging disabled");
            None
        }
    }
}

fn run_page(config: &ViewConfig, descriptor: PathBuf) -> anyhow::Result<()> {
    let json = std::fs::read_to_string(&descriptor)
        .with_context(|| format!("Failed to read {}", descriptor.display()))?;

    let (controller, events) = match config.base_url {
        Some(_) => PageController::new(TracingActionEvaluator, HttpScriptLoader::new(config)?),
        None => PageController::new(TracingActionEvaluator, StaticScriptLoader::new()),
    };
    let controller: Rc<dyn MainController> = Rc::new(controller);
    let constructor = PageConstructor::new(Rc::new(ComponentRegistry::with_builtins()), controller);

    let mut page = Page::from_json(constructor, &json)?;
    page.initialize()?;
    block_on(page.perform_scripts())?;

    println!("{}", serde_json::to_string_pretty(&page.value())?);
    for event in events.try_iter() {
        match event {
            ControllerEvent::OpenModal(request) => println!(
                "open modal {} ({}x{}) for {}",
                config.resolve(&request.url)?,
                request.dimensions.width,
                request.dimensions.height,
                request.path
            ),
            ControllerEvent::GoToPage { url } => println!("go to {}", config.resolve(&url)?),
        }
    }

    Ok(())
}

fn run_reset(config: &ViewConfig, username: String) -> anyhow::Result<()> {
    let transport = HttpPasswordResetTransport::new(config)?;
    let mut controller = PasswordResetController::new(transport, config.password_reset.clone());
    controller.set_username(username);

    match block_on(controller.submit()) {
        ResetOutcome::Redirect(url) => println!("redirect to {}", config.resolve(&url)?),
        ResetOutcome::Stay => {
            let form = controller.form();
            if form.username_invalid {
                println!("username must not be blank");
            }
            if let Some(message) = &form.message {
                println!("{}: {}", message.header, message.content);
            }
        }
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let _guard = init_tracing();

    let (config_path, command) = parse_args()?;
    let config = load_view_config(config_path.as_deref()).context("Failed to load view config")?;

    tracing::info!("Starting qcd-view...");

    match command {
        Command::Page(descriptor) => run_page(&config, descriptor),
        Command::Reset(username) => run_reset(&config, username),
    }
}
