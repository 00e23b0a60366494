use todosync::app::{App, AppMessage};
use todosync::cli::{parse_args, run_cli_command, CliCommand};
use todosync::server::start_server;
use todosync::startup::config::parse_addr;
use todosync::startup::{
    build_app, init_file_logging, init_stderr_logging, AppConfig, ServeConfig,
};
use todosync::store::TodoStore;
use todosync::terminal::{setup_panic_hook, TerminalManager};
use todosync::ui;

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::Terminal;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Redraw at least this often even without input.
const TICK: Duration = Duration::from_millis(250);

fn main() -> Result<()> {
    let command = parse_args(std::env::args());
    if let Some(result) = run_cli_command(&command) {
        return result;
    }

    color_eyre::install()?;
    let runtime = tokio::runtime::Runtime::new()?;

    match command {
        CliCommand::Serve { addr } => runtime.block_on(run_server(addr)),
        _ => run_client(&runtime),
    }
}

async fn run_server(addr_override: Option<String>) -> Result<()> {
    init_stderr_logging();

    let mut config = ServeConfig::from_env()?;
    if let Some(raw) = addr_override {
        config = config.with_addr(parse_addr("--addr", &raw)?);
    }

    let store = Arc::new(TodoStore::new());
    let (handle, addr) = start_server(config.addr, store).await?;
    println!("todosync backend listening on http://{}", addr);

    tokio::select! {
        _ = handle => {}
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("shutting down");
        }
    }
    Ok(())
}

fn run_client(runtime: &tokio::runtime::Runtime) -> Result<()> {
    // Configuration, logging and assets are settled before the terminal
    // is touched, so startup errors print normally
    let config = AppConfig::from_env()?;
    init_file_logging(&config.log_path)?;
    let mut app = build_app(&config)?;

    setup_panic_hook();
    let mut manager = TerminalManager::new()?;

    let result = runtime.block_on(async {
        app.start_sync();
        run_app(manager.terminal(), &mut app).await
    });

    manager.restore()?;
    drop(app);
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, &mut *app))?;
            app.needs_redraw = false;
        }

        if app.should_quit {
            break;
        }

        tokio::select! {
            _ = tokio::time::sleep(TICK) => {}

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key);
                    }
                    Some(Ok(Event::Mouse(mouse))) => app.handle_mouse(mouse),
                    Some(Ok(Event::Paste(text))) => app.handle_paste(&text),
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::error!(error = %e, "terminal event error");
                        break;
                    }
                    None => break,
                }
            }

            Some(msg) = async {
                match message_rx.as_mut() {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                app.handle_message(msg);
            }
        }
    }

    app.message_rx = message_rx;
    Ok(())
}
