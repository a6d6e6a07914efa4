//! webtabs: console demo of the tab widget, closed-tab history, session
//! persistence and mouse gestures, driven by the headless engine view.
//!
//! Set `RUST_LOG=webtabs=debug` to see the component logs.

use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

use webtabs::app::App;
use webtabs::engine::BrowserView;
use webtabs::managers::closed_tabs_manager::ClosedTabsManagerTrait;
use webtabs::managers::session_manager::SessionManagerTrait;
use webtabs::types::gesture::{MouseButton, PointerEvent};
use webtabs::types::session::SessionKind;
use webtabs::types::tab::OpenPolicy;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    println!();
    println!("webtabs v{} demo", env!("CARGO_PKG_VERSION"));
    println!();

    let scratch = std::env::temp_dir().join(format!("webtabs-demo-{}", std::process::id()));
    let config = scratch.join("settings.json");
    let profile = scratch.join("profile");

    demo_tabs(config.clone(), profile.clone())?;
    demo_restore(config, profile)?;

    let _ = std::fs::remove_dir_all(&scratch);
    println!();
    println!("done");
    Ok(())
}

fn section(name: &str) {
    println!("--------------------------------------------------------------");
    println!("  {}", name);
    println!("--------------------------------------------------------------");
}

fn print_tabs(app: &App) {
    for summary in app.tab_widget.tab_list() {
        println!(
            "  {} [{}] {}{}",
            if summary.active { "*" } else { " " },
            summary.index,
            if summary.pinned { "(pinned) " } else { "" },
            summary.title
        );
    }
}

fn demo_tabs(config: PathBuf, profile: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    section("Tab widget");
    let mut app: App = App::new(Some(config), Some(profile))?;
    app.startup();

    let tabs = &mut app.tab_widget;
    tabs.load_in_tab(0, "https://www.rust-lang.org")?;
    tabs.open("https://docs.rs", OpenPolicy::selected());
    tabs.open("https://crates.io", OpenPolicy::background());
    tabs.open("https://github.com", OpenPolicy::background().at_end());
    tabs.pin(0)?;
    print_tabs(&app);

    section("Close and restore");
    let tabs = &mut app.tab_widget;
    tabs.close(2)?;
    tabs.close(1)?;
    println!("  closed tabs remembered: {}", tabs.closed_tabs().len());
    let restored = tabs.restore_last_closed()?;
    println!("  restored into position {}", restored);
    print_tabs(&app);

    section("Mouse gestures");
    let target = app.tab_widget.count() - 1;
    app.tab_widget.load_in_tab(target, "https://github.com/explore")?;
    app.mouse_press(target, PointerEvent::new(200, 200, MouseButton::Middle));
    for x in (120..200).rev().step_by(10) {
        app.mouse_move(PointerEvent::new(x, 202, MouseButton::Middle));
    }
    let handled = app.mouse_release(PointerEvent::new(100, 203, MouseButton::Middle))?;
    let url = app
        .tab_widget
        .tab(target)
        .map(|t| t.view.url().to_string())
        .unwrap_or_default();
    println!("  left gesture handled: {}, tab now at {}", handled, url);

    app.shutdown()?;
    println!(
        "  session saved: pinned={} full={}",
        app.session_manager.has_session(SessionKind::Pinned),
        app.session_manager.has_session(SessionKind::Full)
    );
    for event in app.drain_events().iter().rev().take(3) {
        println!("  last event: {:?}", event);
    }
    Ok(())
}

fn demo_restore(config: PathBuf, profile: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    section("Restore from profile");
    let mut app: App = App::new(Some(config), Some(profile))?;
    app.startup();
    print_tabs(&app);
    Ok(())
}
