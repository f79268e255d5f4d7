// Integration tests for the console event loop

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{backend::TestBackend, layout::Rect, Terminal};
use termpanes::config::{Config, Variant};
use termpanes::layout::{Dimensions, INPUT_PANE, LIST_PANE, OUTPUT_PANE};
use termpanes::ui::{App, ScriptedEvents};

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn ctrl(c: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
}

fn typed(text: &str) -> Vec<Event> {
    text.chars().map(|c| key(KeyCode::Char(c))).collect()
}

fn app(variant: Variant, width: u16, height: u16) -> App {
    let console = Config::default()
        .console(variant)
        .expect("default config is valid");
    App::new(console, Dimensions::new(width, height)).expect("app creation failed")
}

/// Rendered screen as one string per row
fn screen(terminal: &Terminal<TestBackend>) -> Vec<String> {
    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect())
        .collect()
}

#[test]
fn test_list_populated_before_any_event() {
    for variant in [Variant::Grid, Variant::Fixed] {
        let app = app(variant, 80, 24);
        let list = app.state.pane(LIST_PANE).expect("list pane exists");
        assert_eq!(
            list.lines(),
            ["Line 1", "Line 2", "Line 3", "Line 4", "Line 5"]
        );
        assert_eq!(app.state.focus(), Some(INPUT_PANE));
    }
}

#[test]
fn test_typing_and_enter_commits_to_output() {
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    let mut app = app(Variant::Fixed, 80, 24);

    let mut script = typed("hello");
    script.push(key(KeyCode::Enter));
    script.extend(typed("wrld"));
    script.push(key(KeyCode::Backspace));
    script.push(key(KeyCode::Backspace));
    script.extend(typed("rld"));
    script.push(key(KeyCode::Enter));
    let mut events = ScriptedEvents::new(script);

    app.run(&mut terminal, &mut events).unwrap();

    assert_eq!(app.state.pane(OUTPUT_PANE).unwrap().lines(), ["hello", "wrrld"]);
    let input = app.state.pane(INPUT_PANE).unwrap();
    assert!(input.lines().is_empty());
    assert_eq!(input.cursor(), (0, 0));
    assert!(!app.should_quit);

    let rows = screen(&terminal);
    assert!(rows[1].contains("Line 1"));
    assert!(rows[1].contains("hello"));
    assert!(rows[2].contains("wrrld"));
}

#[test]
fn test_pasted_lines_are_committed_verbatim() {
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    let mut app = app(Variant::Grid, 80, 24);
    let mut events = ScriptedEvents::new([
        Event::Paste("first\nsecond\n".to_string()),
        key(KeyCode::Enter),
    ]);

    app.run(&mut terminal, &mut events).unwrap();

    assert_eq!(
        app.state.pane(OUTPUT_PANE).unwrap().lines(),
        ["first", "second"]
    );
}

#[test]
fn test_quit_stops_loop_before_remaining_events() {
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    let mut app = app(Variant::Fixed, 80, 24);
    app.state.set_focus(LIST_PANE).unwrap();

    let mut script = vec![ctrl('c')];
    script.extend(typed("ignored"));
    let mut events = ScriptedEvents::new(script);

    app.run(&mut terminal, &mut events).unwrap();

    assert!(app.should_quit);
    assert_eq!(events.remaining(), 7);
}

#[test]
fn test_key_release_is_ignored() {
    let mut app = app(Variant::Fixed, 80, 24);
    let mut release = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
    release.kind = KeyEventKind::Release;

    app.handle_event(Event::Key(release));

    assert!(app.state.pane(INPUT_PANE).unwrap().lines().is_empty());
}

#[test]
fn test_typing_into_read_only_pane_does_nothing() {
    let mut app = app(Variant::Fixed, 80, 24);
    app.state.set_focus(OUTPUT_PANE).unwrap();

    for event in typed("abc") {
        app.handle_event(event);
    }
    app.handle_event(key(KeyCode::Enter));

    assert!(app.state.pane(OUTPUT_PANE).unwrap().lines().is_empty());
    assert!(app.state.pane(INPUT_PANE).unwrap().lines().is_empty());
}

#[test]
fn test_resize_round_trip_restores_layout() {
    for variant in [Variant::Grid, Variant::Fixed] {
        let mut app = app(variant, 80, 24);
        let before: Vec<Rect> = app.state.panes().iter().map(|p| p.rect()).collect();

        app.handle_event(Event::Resize(120, 40));
        let grown: Vec<Rect> = app.state.panes().iter().map(|p| p.rect()).collect();
        app.handle_event(Event::Resize(80, 24));
        let after: Vec<Rect> = app.state.panes().iter().map(|p| p.rect()).collect();

        assert_ne!(before, grown);
        assert_eq!(before, after);
    }
}

#[test]
fn test_grid_variant_splits_three_nine() {
    let app = app(Variant::Grid, 120, 40);
    let rect = |name: &str| app.state.pane(name).unwrap().rect();

    assert_eq!(rect(LIST_PANE), Rect::new(0, 0, 30, 40));
    assert_eq!(rect(OUTPUT_PANE), Rect::new(30, 0, 90, 37));
    assert_eq!(rect(INPUT_PANE), Rect::new(30, 37, 90, 3));
}

#[test]
fn test_too_small_terminal_shows_notice_and_recovers() {
    let mut terminal = Terminal::new(TestBackend::new(15, 4)).unwrap();
    let mut app = app(Variant::Fixed, 15, 4);
    assert!(app.state.layout_error().is_some());

    app.run(&mut terminal, &mut ScriptedEvents::default()).unwrap();
    let rows = screen(&terminal).join("\n");
    assert!(rows.contains("Terminal"));
    assert!(!rows.contains("Line 1"));

    terminal.backend_mut().resize(80, 24);
    app.run(&mut terminal, &mut ScriptedEvents::default()).unwrap();
    assert!(app.state.layout_error().is_none());
    assert!(screen(&terminal).join("\n").contains("Line 1"));
}

#[test]
fn test_commit_to_missing_pane_is_dropped() {
    let config = Config::from_toml(
        r#"
        [[bindings]]
        scope = "input"
        key = "ctrl+s"
        action = "commit_input"
        source = "input"
        target = "archive"
        "#,
    )
    .unwrap();
    let console = config.console(Variant::Fixed).unwrap();
    let mut app = App::new(console, Dimensions::new(80, 24)).unwrap();

    for event in typed("draft") {
        app.handle_event(event);
    }
    app.handle_event(ctrl('s'));

    assert!(!app.should_quit);
    assert_eq!(app.state.pane(INPUT_PANE).unwrap().lines(), ["draft"]);
    assert!(app.state.pane(OUTPUT_PANE).unwrap().lines().is_empty());
}
