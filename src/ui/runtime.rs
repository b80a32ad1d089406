use crate::config::Config;
use crate::fetch::ReqwestClient;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::panel::{build_panels, RedrawHook};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::ui::worker::FetchWorker;
use std::io;
use std::sync::Arc;
use std::time::Duration;

/// Run the interactive UI until the user quits.
pub fn run(config: &Config, seed: Option<u64>) -> io::Result<()> {
    let tick_rate = Duration::from_millis(100);
    let events = EventHandler::new(tick_rate);

    let client = ReqwestClient::from_defaults(&config.defaults).map_err(io::Error::other)?;
    let redraw_tx = events.sender();
    let redraw: RedrawHook = Arc::new(move || {
        let _ = redraw_tx.send(AppEvent::FetchUpdated);
    });
    let panels = build_panels(config, Arc::new(client), seed, Some(redraw));

    let mut worker = FetchWorker::spawn()?;
    let mut app = App::new(panels);
    if let Some(sender) = worker.sender() {
        app.attach_commands(sender);
    }

    let (mut terminal, guard) = setup_terminal()?;
    app.mount();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize) | Ok(AppEvent::FetchUpdated) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    app.detach_commands();
    worker.shutdown();
    drop(guard);
    Ok(())
}
