//! Run the git dashboard against a sample repository snapshot.

use std::{
    fs::File,
    io::{self, Write},
    panic,
    path::PathBuf,
    sync::Mutex,
    time::{Duration, Instant},
};

use anyhow::Result;
use clap::Parser;
use color_backtrace::{BacktracePrinter, default_output_stream};
use crossterm::{
    cursor as ccursor,
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    terminal,
};
use gitlive_examples::dashboard::{Snapshot, build_view};
use gitlive_layout::{
    Layout, Result as LayoutResult,
    backend::crossterm::TermPaint,
    geom::{Expanse, Rect},
    testing::Canvas,
};
use scopeguard::guard;

/// CLI flags for the dashboard example.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Redraw interval in milliseconds.
    #[clap(short, long, default_value_t = 200)]
    interval: u64,

    /// Write trace logs to this file.
    #[clap(short, long)]
    log: Option<PathBuf>,

    /// Draw a single frame to stdout and exit.
    #[clap(long)]
    once: bool,
}

/// Print one frame as plain text.
fn draw_once(snap: &Snapshot) -> Result<()> {
    let (w, h) = terminal::size().unwrap_or((80, 24));
    let mut layout = Layout::new();
    build_view(&mut layout, snap, h.into())?;
    // The in-memory canvas comes from the `testing` feature, enabled for
    // examples through dev-dependencies.
    let mut canvas = Canvas::new(w.into(), h.into());
    let rect = canvas.rect();
    layout.draw(&mut canvas, rect)?;

    let mut out = io::stdout().lock();
    for line in canvas.lines() {
        writeln!(out, "{}", line.trim_end())?;
    }
    Ok(())
}

/// True for the keys that end the session.
fn is_quit(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Redraw until the user quits.
fn run(term: &mut TermPaint<io::Stderr>, mut snap: Snapshot, interval: Duration) -> Result<()> {
    let mut layout = Layout::new();
    let mut last = Instant::now();
    loop {
        let size = term.size();
        build_view(&mut layout, &snap, size.h)?;
        term.clear()?;
        layout.draw(term, Rect::new(0, 0, size.w, size.h))?;
        term.flush()?;

        if event::poll(interval)? {
            match event::read()? {
                Event::Key(k) if is_quit(&k) => return Ok(()),
                Event::Resize(w, h) => {
                    tracing::debug!(w, h, "resize");
                    term.resize(Expanse::new(w.into(), h.into()));
                }
                _ => {}
            }
        }
        let now = Instant::now();
        snap.advance(now - last);
        last = now;
    }
}

/// Run the dashboard example.
fn main() -> Result<()> {
    let args = Args::parse();
    if let Some(path) = &args.log {
        let file = File::create(path)?;
        tracing_subscriber::fmt()
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .init();
    }

    let snap = Snapshot::sample();
    if args.once {
        return draw_once(&snap);
    }

    let mut term = TermPaint::stderr()?;
    term.enter()?;

    let previous = panic::take_hook();
    panic::set_hook(Box::new(|pi| {
        let mut stderr = io::stderr();
        #[allow(unused_must_use)]
        {
            crossterm::execute!(stderr, terminal::LeaveAlternateScreen, ccursor::Show);
            terminal::disable_raw_mode();
            BacktracePrinter::new().print_panic_info(pi, &mut default_output_stream());
        }
    }));
    let _hook = guard(previous, |hook| {
        panic::set_hook(hook);
    });

    let ret = run(&mut term, snap, Duration::from_millis(args.interval));
    let restored = term.leave();
    finish(ret, restored)
}

/// Combine the run result with the terminal restore result. A run error wins;
/// a restore failure on top of it is logged.
fn finish(ret: Result<()>, restored: LayoutResult<()>) -> Result<()> {
    match (ret, restored) {
        (Err(e), Err(re)) => {
            tracing::error!("terminal restore failed: {re}");
            Err(e)
        }
        (ret, restored) => ret.and(restored.map_err(Into::into)),
    }
}
