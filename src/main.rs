//! routescope - terminal explorer and tester for WordPress-style REST APIs
//!
//! Architecture:
//! - UI Layer (Ratatui) - synchronous terminal rendering
//! - App Layer - central state machine processing events
//! - Network Layer (Tokio) - async HTTP execution and remote catalog loading

use std::io;
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{prelude::*, widgets::*};
use serde_json::Value;
use tokio::sync::mpsc;

use routescope::app::AppActor;
use routescope::catalog::RouteEntry;
use routescope::constants::{APP_NAME, APP_VERSION, LOG_FILE_NAME};
use routescope::messages::render::NotificationKind;
use routescope::messages::ui_events::{key_to_ui_event, AppTab, InputMode, Panel};
use routescope::messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};
use routescope::network::NetworkActor;
use routescope::storage::{data_dir, FileStore, SharedStore};
use routescope::ui::{
    border_style, centered_rect, highlight_json, method_badges, method_color, render_tabs, status_color,
    Palette,
};

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

const USAGE: &str = "Usage: routescope [FILE | URL | --demo]

  FILE     load an API description from a JSON file
  URL      fetch the API description of a live site (/wp-json is appended)
  --demo   start with the built-in demo API";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let source = std::env::args().nth(1);
    match source.as_deref() {
        Some("-h") | Some("--help") => {
            println!("{}", USAGE);
            return Ok(());
        }
        Some("-V") | Some("--version") => {
            println!("{} {}", APP_NAME, APP_VERSION);
            return Ok(());
        }
        _ => {}
    }

    // Initialize logging to a file in the data directory
    let dir = data_dir();
    std::fs::create_dir_all(&dir)?;
    let file_appender = tracing_appender::rolling::never(&dir, LOG_FILE_NAME);
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();
    tracing::info!(version = APP_VERSION, data_dir = %dir.display(), "Starting");

    let store: SharedStore = Arc::new(FileStore::new(&dir));

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _terminal_guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create channels
    let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
    let (net_cmd_tx, net_cmd_rx) = mpsc::unbounded_channel::<NetworkCommand>();
    let (net_resp_tx, net_resp_rx) = mpsc::unbounded_channel::<NetworkResponse>();
    let (render_tx, mut render_rx) = mpsc::unbounded_channel::<RenderState>();

    // Spawn network actor
    let network_actor = NetworkActor::new(net_resp_tx);
    tokio::spawn(network_actor.run(net_cmd_rx));

    // Spawn app actor
    let app_actor = AppActor::new(store, net_cmd_tx, render_tx);
    tokio::spawn(app_actor.run(ui_rx, net_resp_rx));

    // Preload from the command line
    if let Some(source) = source {
        let _ = ui_tx.send(UiEvent::LoadFrom(source));
    }

    // Run UI loop (synchronous with async polling)
    run_ui_loop(&mut terminal, ui_tx, &mut render_rx).await?;

    tracing::info!("Shutting down");
    Ok(())
}

/// Run the synchronous UI rendering loop
async fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: &mut mpsc::UnboundedReceiver<RenderState>,
) -> anyhow::Result<()> {
    let mut current_state = RenderState::default();

    loop {
        // Draw with current state
        terminal.draw(|f| draw_ui(f, &current_state))?;

        // Poll for events with timeout
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if let Some(event) = key_to_ui_event(
                    key,
                    current_state.active_tab,
                    current_state.active_panel,
                    current_state.input_mode,
                    current_state.show_help,
                    current_state.show_load_input,
                ) {
                    let quit = matches!(event, UiEvent::Quit);
                    let _ = ui_tx.send(event);
                    if quit {
                        break;
                    }
                }
            }
        }

        // Check for state updates (non-blocking)
        while let Ok(state) = render_rx.try_recv() {
            current_state = state;
        }
    }

    Ok(())
}

// ============================================================================
// UI Drawing Functions
// ============================================================================

fn draw_ui(f: &mut Frame, state: &RenderState) {
    let palette = Palette::for_theme(state.theme);
    let area = f.area();

    // Main layout with tab bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Tab bar
            Constraint::Length(1), // API summary
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    draw_tab_bar(f, state, &palette, main_chunks[0]);
    draw_summary_line(f, state, &palette, main_chunks[1]);

    match state.active_tab {
        AppTab::Routes => draw_routes_tab(f, state, &palette, main_chunks[2]),
        AppTab::Tester => draw_tester_tab(f, state, &palette, main_chunks[2]),
        AppTab::History => draw_history_tab(f, state, &palette, main_chunks[2]),
        AppTab::Favorites => draw_favorites_tab(f, state, &palette, main_chunks[2]),
        AppTab::Docs => draw_docs_tab(f, state, &palette, main_chunks[2]),
        AppTab::Settings => draw_settings_tab(f, state, &palette, main_chunks[2]),
    }

    draw_status_bar(f, state, &palette, main_chunks[3]);

    // Popups
    if state.show_help {
        draw_help_popup(f, &palette, area);
    }

    if state.show_load_input {
        draw_load_input_popup(f, state, &palette, area);
    }
}

fn draw_tab_bar(f: &mut Frame, state: &RenderState, palette: &Palette, area: Rect) {
    let titles = AppTab::ALL
        .iter()
        .enumerate()
        .map(|(i, tab)| match tab {
            AppTab::History if !state.history.is_empty() => {
                format!(" {}:{} ({}) ", i + 1, tab.title(), state.history.len())
            }
            AppTab::Favorites if state.favorite_count > 0 => {
                format!(" {}:{} ({}) ", i + 1, tab.title(), state.favorite_count)
            }
            _ => format!(" {}:{} ", i + 1, tab.title()),
        })
        .collect();

    f.render_widget(render_tabs(titles, state.active_tab.index(), palette), area);
}

fn draw_summary_line(f: &mut Frame, state: &RenderState, palette: &Palette, area: Rect) {
    let muted = Style::default().fg(palette.muted);

    let line = match &state.summary {
        Some(summary) => {
            let mut spans = vec![
                Span::styled(format!(" {} ", state.api_name), Style::default().fg(palette.accent).bold()),
                Span::styled(
                    format!(
                        "| {} routes | {} namespaces | {} auth | {} |",
                        summary.route_count, summary.namespace_count, summary.auth_method_count, summary.timezone
                    ),
                    muted,
                ),
            ];
            for (method, count) in &summary.method_counts {
                spans.push(Span::styled(format!(" {}", method), Style::default().fg(method_color(method))));
                spans.push(Span::styled(format!(":{}", count), muted));
            }
            if state.loading_catalog {
                spans.push(Span::styled(" [loading...]", Style::default().fg(palette.focus)));
            }
            Line::from(spans)
        }
        None if state.loading_catalog => Line::from(Span::styled(" Loading API description...", muted)),
        None => Line::from(Span::styled(format!(" {} {}", APP_NAME, APP_VERSION), muted)),
    };

    f.render_widget(Paragraph::new(line), area);
}

// ---------------------------------------------------------------------------
// Routes
// ---------------------------------------------------------------------------

fn draw_routes_tab(f: &mut Frame, state: &RenderState, palette: &Palette, area: Rect) {
    if !state.catalog_loaded {
        let text = vec![
            Line::from(""),
            Line::from(Span::styled(" No API loaded.", Style::default().fg(palette.text).bold())),
            Line::from(""),
            Line::from(" o  load from a site URL or a JSON file"),
            Line::from(" D  load the demo API"),
            Line::from(" ?  show all shortcuts"),
        ];
        let welcome = Paragraph::new(text).block(Block::default().borders(Borders::ALL).title(" Routes "));
        f.render_widget(welcome, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    draw_filter_bar(f, state, palette, chunks[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[1]);

    draw_route_list(f, state, palette, columns[0]);
    draw_route_detail(f, state, palette, columns[1]);
}

fn draw_filter_bar(f: &mut Frame, state: &RenderState, palette: &Palette, area: Rect) {
    let editing = state.input_mode == InputMode::Editing;
    let search = if state.search.is_empty() && !editing {
        Span::styled("press / to search", Style::default().fg(palette.muted))
    } else {
        Span::raw(state.search.clone())
    };

    let line = Line::from(vec![
        Span::raw(" "),
        search,
        Span::styled("   method: ", Style::default().fg(palette.muted)),
        Span::styled(
            state.method_filter.clone(),
            Style::default().fg(method_color(&state.method_filter)).bold(),
        ),
        Span::styled("  namespace: ", Style::default().fg(palette.muted)),
        Span::styled(state.namespace_filter.clone(), Style::default().fg(palette.accent)),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(editing, editing, palette))
        .title(" Filter (/ search, m method, n namespace) ");
    f.render_widget(Paragraph::new(line).block(block), area);

    if editing {
        let max_x = area.x + area.width.saturating_sub(2);
        let cursor_x = (area.x + state.cursor_position as u16 + 2).min(max_x);
        f.set_cursor_position(Position::new(cursor_x, area.y + 1));
    }
}

fn draw_route_list(f: &mut Frame, state: &RenderState, palette: &Palette, area: Rect) {
    let items: Vec<ListItem> = state
        .routes
        .iter()
        .map(|row| {
            let star = if row.favorite { "* " } else { "  " };
            let mut spans = vec![Span::styled(star, Style::default().fg(palette.focus))];
            spans.push(Span::raw(row.path.clone()));
            ListItem::new(Line::from(spans))
        })
        .collect();

    let title = format!(" Routes ({}) ", state.routes.len());
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(palette.accent)).title(title))
        .highlight_style(Style::default().fg(palette.focus).bold())
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    if !state.routes.is_empty() {
        list_state.select(Some(state.selected_route));
    }
    f.render_stateful_widget(list, area, &mut list_state);

    if state.routes.is_empty() {
        let inner = area.inner(Margin { horizontal: 2, vertical: 1 });
        f.render_widget(
            Paragraph::new("No routes match the current filters.").style(Style::default().fg(palette.muted)),
            inner,
        );
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn route_detail_lines(route: &RouteEntry, favorite: bool, palette: &Palette) -> Vec<Line<'static>> {
    let label = Style::default().fg(palette.muted);
    let mut lines = vec![
        Line::from(Span::styled(route.display_path(), Style::default().fg(palette.accent).bold())),
        Line::from(vec![Span::styled("Pattern:   ", label), Span::raw(route.path.clone())]),
        Line::from(vec![
            Span::styled("Namespace: ", label),
            Span::raw(route.namespace.clone().unwrap_or_else(|| String::from("N/A"))),
        ]),
    ];

    let mut methods = vec![Span::styled("Methods:   ", label)];
    methods.extend(method_badges(&route.methods));
    lines.push(Line::from(methods));

    let params = route.path_params();
    if !params.is_empty() {
        lines.push(Line::from(vec![Span::styled("Path params: ", label), Span::raw(params.join(", "))]));
    }
    if favorite {
        lines.push(Line::from(Span::styled("* favorite", Style::default().fg(palette.focus))));
    }

    for endpoint in &route.endpoints {
        lines.push(Line::from(""));
        let mut header = vec![Span::styled("Endpoint ", label)];
        header.extend(method_badges(&endpoint.methods));
        lines.push(Line::from(header));

        if endpoint.args.is_empty() {
            lines.push(Line::from(Span::styled("  no parameters", label)));
            continue;
        }

        for (name, arg) in &endpoint.args {
            let mut spans = vec![Span::styled(format!("  {}", name), Style::default().fg(palette.key).bold())];
            if let Some(param_type) = &arg.param_type {
                spans.push(Span::styled(format!(" <{}>", param_type), Style::default().fg(palette.string)));
            }
            if arg.required {
                spans.push(Span::styled(" required", Style::default().fg(Color::Red)));
            }
            lines.push(Line::from(spans));

            if let Some(description) = &arg.description {
                lines.push(Line::from(Span::raw(format!("      {}", description))));
            }
            if let Some(default) = &arg.default {
                lines.push(Line::from(vec![
                    Span::styled("      default: ", label),
                    Span::raw(value_text(default)),
                ]));
            }
            if let Some(values) = &arg.allowed_values {
                let values: Vec<String> = values.iter().map(value_text).collect();
                lines.push(Line::from(vec![
                    Span::styled("      one of: ", label),
                    Span::raw(values.join(", ")),
                ]));
            }
        }
    }

    lines
}

fn draw_route_detail(f: &mut Frame, state: &RenderState, palette: &Palette, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Details (Enter open in tester, f favorite) ");

    let lines = match &state.route_detail {
        Some(route) => route_detail_lines(route, state.detail_favorite, palette),
        None => vec![Line::from(Span::styled("Select a route", Style::default().fg(palette.muted)))],
    };

    let detail = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    f.render_widget(detail, area);
}

// ---------------------------------------------------------------------------
// Tester
// ---------------------------------------------------------------------------

fn draw_tester_tab(f: &mut Frame, state: &RenderState, palette: &Palette, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Method + URL
            Constraint::Length(5), // Headers
            Constraint::Length(7), // Body
            Constraint::Min(5),    // Response
        ])
        .split(area);

    draw_url_bar(f, state, palette, chunks[0]);
    draw_text_panel(f, state, palette, chunks[1], Panel::Headers);
    draw_text_panel(f, state, palette, chunks[2], Panel::Body);
    draw_response(f, state, palette, chunks[3]);
}

fn draw_url_bar(f: &mut Frame, state: &RenderState, palette: &Palette, area: Rect) {
    let is_focused = state.active_panel == Panel::Url;
    let editing = is_focused && state.input_mode == InputMode::Editing;
    let method = state.request.method.as_str();
    let loading = if state.is_loading { " [...]" } else { "" };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(is_focused, editing, palette))
        .title(format!(" {}{} ", method, loading))
        .title_style(Style::default().fg(method_color(method)).bold());

    let content = if state.request.url.is_empty() && !editing {
        Span::styled("https://example.com/wp-json/wp/v2/posts", Style::default().fg(palette.muted))
    } else {
        Span::raw(state.request.url.clone())
    };
    f.render_widget(Paragraph::new(Line::from(content)).block(block), area);

    if editing {
        let max_x = area.x + area.width.saturating_sub(2);
        let cursor_x = (area.x + state.cursor_position as u16 + 1).min(max_x);
        f.set_cursor_position(Position::new(cursor_x, area.y + 1));
    }
}

fn draw_text_panel(f: &mut Frame, state: &RenderState, palette: &Palette, area: Rect, panel: Panel) {
    let is_focused = state.active_panel == panel;
    let editing = is_focused && state.input_mode == InputMode::Editing;

    let (title, content) = match panel {
        Panel::Headers => (" Headers (JSON object) ", state.request.headers.as_str()),
        _ if state.request.method.has_body() => (" Body (JSON) ", state.request.body.as_str()),
        _ => (" Body (ignored for this method) ", state.request.body.as_str()),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(is_focused, editing, palette))
        .title(title);

    let paragraph = Paragraph::new(content).block(block).wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);

    if editing {
        // Cursor on the last line, offset within it
        let before = &content[..state.cursor_position.min(content.len())];
        let row = before.matches('\n').count() as u16;
        let col = before.rsplit('\n').next().map(|l| l.chars().count()).unwrap_or(0) as u16;
        let max_x = area.x + area.width.saturating_sub(2);
        let max_y = area.y + area.height.saturating_sub(2);
        f.set_cursor_position(Position::new(
            (area.x + col + 1).min(max_x),
            (area.y + row + 1).min(max_y),
        ));
    }
}

fn draw_response(f: &mut Frame, state: &RenderState, palette: &Palette, area: Rect) {
    let is_focused = state.active_panel == Panel::Response;

    let status_text = match state.response.status {
        Some(code) => Span::styled(
            format!(" {} {} ", code, state.response.status_text),
            Style::default().fg(status_color(code)).bold(),
        ),
        None if state.response.is_error => Span::styled(" Error ", Style::default().fg(Color::Red).bold()),
        None => Span::raw(" Response "),
    };

    let time_text = if state.response.time_ms > 0 {
        format!(" {}ms ", state.response.time_ms)
    } else {
        String::new()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(is_focused, false, palette))
        .title(status_text)
        .title_bottom(Line::from(time_text).right_aligned());

    let lines = highlight_json(&state.response.body, palette, state.settings.show_line_numbers);
    let response = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((state.response_scroll, 0));
    f.render_widget(response, area);
}

// ---------------------------------------------------------------------------
// History, favorites, docs, settings
// ---------------------------------------------------------------------------

fn draw_history_tab(f: &mut Frame, state: &RenderState, palette: &Palette, area: Rect) {
    let items: Vec<ListItem> = state
        .history
        .iter()
        .map(|record| {
            let status = match record.status {
                Some(code) => Span::styled(format!("{:>4}", code), Style::default().fg(status_color(code))),
                None => Span::styled(" ERR", Style::default().fg(Color::Red)),
            };
            let when = record.timestamp.with_timezone(&chrono::Local).format("%Y-%m-%d %H:%M:%S");
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:7}", record.method), Style::default().fg(method_color(&record.method)).bold()),
                status,
                Span::styled(format!(" {:>6}ms ", record.duration), Style::default().fg(palette.muted)),
                Span::raw(record.endpoint.clone()),
                Span::styled(format!("  {}", when), Style::default().fg(palette.muted)),
            ]))
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" History ({}) - Enter replay, d delete, C clear ", state.history.len()));

    if items.is_empty() {
        let empty = Paragraph::new("No requests yet. Send one from the Tester tab.")
            .style(Style::default().fg(palette.muted))
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().fg(palette.focus).bold())
        .highlight_symbol("> ");
    let mut list_state = ListState::default().with_selected(Some(state.selected_history));
    f.render_stateful_widget(list, area, &mut list_state);
}

fn draw_favorites_tab(f: &mut Frame, state: &RenderState, palette: &Palette, area: Rect) {
    let resolved = state.favorites.iter().filter(|row| !row.stale).count();
    let block = Block::default().borders(Borders::ALL).title(format!(
        " Favorites ({}/{}) - Enter open, d remove, C clear ",
        resolved, state.favorite_count
    ));

    if state.favorites.is_empty() {
        let empty = Paragraph::new("No favorites yet. Press f on a route to add one.")
            .style(Style::default().fg(palette.muted))
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = state
        .favorites
        .iter()
        .map(|row| {
            if row.stale {
                let text = format!("{}  (not in loaded API)", row.path);
                return ListItem::new(Line::from(Span::styled(text, Style::default().fg(palette.muted))));
            }
            let mut spans = vec![Span::raw(format!("{}  ", row.path))];
            spans.extend(method_badges(&row.methods));
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().fg(palette.focus).bold())
        .highlight_symbol("> ");
    let mut list_state = ListState::default().with_selected(Some(state.selected_favorite));
    f.render_stateful_widget(list, area, &mut list_state);
}

fn draw_docs_tab(f: &mut Frame, state: &RenderState, palette: &Palette, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Documentation - J json, V csv, M markdown, P postman ");

    if !state.catalog_loaded {
        let empty = Paragraph::new("Load an API to generate documentation.")
            .style(Style::default().fg(palette.muted))
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let lines: Vec<Line> = state
        .docs
        .lines()
        .map(|line| {
            if let Some(heading) = line.strip_prefix('#') {
                Line::from(Span::styled(format!("#{}", heading), Style::default().fg(palette.accent).bold()))
            } else {
                Line::from(line.to_string())
            }
        })
        .collect();

    let docs = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((state.docs_scroll, 0));
    f.render_widget(docs, area);
}

fn draw_settings_tab(f: &mut Frame, state: &RenderState, palette: &Palette, area: Rect) {
    let check = |on: bool| if on { "[x]" } else { "[ ]" };
    let settings = &state.settings;
    let rows = [
        format!("{} Auto-format JSON responses", check(settings.auto_format_json)),
        format!("{} Save request history", check(settings.save_history)),
        format!("{} Show line numbers", check(settings.show_line_numbers)),
        format!("    Request timeout: {}s  (+/-)", settings.request_timeout),
        format!("    Theme: {}", state.theme.as_str()),
    ];

    let items: Vec<ListItem> = rows.into_iter().map(ListItem::new).collect();
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" Settings - Enter toggle "))
        .highlight_style(Style::default().fg(palette.focus).bold())
        .highlight_symbol("> ");
    let mut list_state = ListState::default().with_selected(Some(state.selected_setting));
    f.render_stateful_widget(list, area, &mut list_state);
}

// ---------------------------------------------------------------------------
// Status bar and popups
// ---------------------------------------------------------------------------

fn draw_status_bar(f: &mut Frame, state: &RenderState, palette: &Palette, area: Rect) {
    let bar = if let Some(notification) = &state.notification {
        let color = match notification.kind {
            NotificationKind::Info => palette.accent,
            NotificationKind::Success => Color::Green,
            NotificationKind::Error => Color::Red,
        };
        Paragraph::new(format!(" {} ", notification.message)).style(Style::default().fg(color))
    } else {
        let hint = if state.is_loading {
            " Sending... Ctrl+X cancel "
        } else if state.input_mode == InputMode::Editing {
            " Esc stop editing | arrows move cursor "
        } else {
            match state.active_tab {
                AppTab::Routes => " / search | m method | n namespace | f favorite | Enter tester | o load | ? help | q quit ",
                AppTab::Tester => " Tab panel | e edit | m method | s send | c cURL | x clear | ? help ",
                _ => " 1-6 tabs | o load | T theme | ? help | q quit ",
            }
        };
        Paragraph::new(hint).style(Style::default().fg(palette.muted))
    };
    f.render_widget(bar, area);
}

fn draw_help_popup(f: &mut Frame, palette: &Palette, area: Rect) {
    let popup_area = centered_rect(60, 80, area);

    let help_text = r#"
 ROUTESCOPE - Keyboard Shortcuts

 GENERAL
   1-6                Switch tab
   o                  Load API (URL, file path or "demo")
   T                  Toggle light/dark theme
   ?                  Toggle this help
   q / Ctrl+C         Quit

 ROUTES
   / (Esc to finish)  Search routes
   m / n              Cycle method / namespace filter
   j k / arrows       Move selection
   f                  Toggle favorite
   Enter              Open in tester
   D                  Load demo API

 TESTER
   Tab / Shift+Tab    Switch panels
   e / Enter          Edit URL, headers or body
   m                  Cycle HTTP method
   s                  Send request
   Ctrl+X             Cancel request
   c                  Show as cURL

 HISTORY / FAVORITES
   Enter              Load into tester
   d / C              Delete selected / clear all

 DOCS
   J V M P            Export JSON, CSV, Markdown, Postman

 Press any key to close...
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(palette.popup_bg));

    let help = Paragraph::new(help_text).block(block).wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

fn draw_load_input_popup(f: &mut Frame, state: &RenderState, palette: &Palette, area: Rect) {
    let popup_area = centered_rect(60, 20, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.focus))
        .title(" Load API (Enter to load, Esc to cancel) ")
        .style(Style::default().bg(palette.popup_bg));

    let content = if state.load_input.is_empty() {
        Text::styled(
            "Site URL, path to a JSON file, or \"demo\"\n\nExample: https://example.com",
            Style::default().fg(palette.muted),
        )
    } else {
        Text::raw(state.load_input.clone())
    };

    let input = Paragraph::new(content).block(block).wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(input, popup_area);
}
