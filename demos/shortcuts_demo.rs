//! Shortcuts demo: Drive an in-memory slide from the keyboard.
//!
//! Press a bound chord (Ctrl+Alt+Q lists them) and watch the notifications.
//! Esc or Ctrl+C quits. Set `RUST_LOG=debug` for engine logging, and pass a
//! JSON config path as the first argument to override defaults.

use deckhand::{Config, Engine, MemoryHost, Rect, ShapeKind, SlideHost};

fn main() -> deckhand::Result<()> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    let mut host = MemoryHost::new();
    host.insert_text(ShapeKind::TextBox, Rect::new(60.0, 80.0, 200.0, 40.0), "Quarterly results");
    host.insert(ShapeKind::Rectangle, Rect::new(130.0, 200.0, 90.0, 60.0));
    host.insert(ShapeKind::Rectangle, Rect::new(300.0, 215.0, 120.0, 60.0));
    host.insert(ShapeKind::Ellipse, Rect::new(470.0, 190.0, 60.0, 60.0));
    host.select_all();

    println!("Deckhand Shortcuts Demo");
    println!("=======================");
    println!("{} shapes selected. Ctrl+Alt+Q lists shortcuts, Esc quits.", host.len());
    println!();

    let mut engine = Engine::new(host, config)?;
    let input = engine.attach_terminal()?;

    // Raw mode: lines need an explicit carriage return.
    engine.run(&input, |notification| {
        for line in notification.to_string().lines() {
            print!("{line}\r\n");
        }
    });

    print!("\r\nFinal frames:\r\n");
    for shape in engine.host().shapes()? {
        print!("  {:?} {:?} {:?}\r\n", shape.id, shape.kind, shape.frame);
    }
    Ok(())
}
