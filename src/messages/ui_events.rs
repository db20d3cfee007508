//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::export::ExportFormat;

/// Application tabs
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum AppTab {
    #[default]
    Routes,
    Tester,
    History,
    Favorites,
    Docs,
    Settings,
}

impl AppTab {
    pub const ALL: [AppTab; 6] = [
        AppTab::Routes,
        AppTab::Tester,
        AppTab::History,
        AppTab::Favorites,
        AppTab::Docs,
        AppTab::Settings,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            AppTab::Routes => "Routes",
            AppTab::Tester => "Tester",
            AppTab::History => "History",
            AppTab::Favorites => "Favorites",
            AppTab::Docs => "Docs",
            AppTab::Settings => "Settings",
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|t| t == self).unwrap_or(0)
    }

    fn from_digit(c: char) -> Option<AppTab> {
        let n = c.to_digit(10)? as usize;
        n.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }
}

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    SwitchTab(AppTab),

    // Input editing
    StartEditing,
    StopEditing,
    CharInput(char),
    Backspace,
    CursorLeft,
    CursorRight,

    // List navigation, meaning depends on the active tab
    SelectPrev,
    SelectNext,
    Activate,
    DeleteSelected,
    ClearAll,

    // Routes
    StartSearch,
    CycleMethodFilter,
    CycleNamespaceFilter,
    ToggleFavorite,

    // Tester
    NextPanel,
    PrevPanel,
    CycleMethod,
    SendRequest,
    CancelRequest,
    ShowCurl,
    ClearRequest,

    // Settings
    IncreaseTimeout,
    DecreaseTimeout,

    // Catalog loading and export
    OpenLoadInput,
    LoadInputChar(char),
    LoadInputBackspace,
    SubmitLoad,
    CancelLoadInput,
    /// Load from a file path, a site URL or `demo`
    LoadFrom(String),
    Export(ExportFormat),

    // Popups and appearance
    ToggleTheme,
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Focused tester panel
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Panel {
    #[default]
    Url,
    Headers,
    Body,
    Response,
}

impl Panel {
    pub fn next(&self) -> Panel {
        match self {
            Panel::Url => Panel::Headers,
            Panel::Headers => Panel::Body,
            Panel::Body => Panel::Response,
            Panel::Response => Panel::Url,
        }
    }

    pub fn prev(&self) -> Panel {
        match self {
            Panel::Url => Panel::Response,
            Panel::Headers => Panel::Url,
            Panel::Body => Panel::Headers,
            Panel::Response => Panel::Body,
        }
    }
}

/// Input mode
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

/// Convert a key event to a UiEvent based on current UI context
pub fn key_to_ui_event(
    key: KeyEvent,
    active_tab: AppTab,
    active_panel: Panel,
    input_mode: InputMode,
    show_help: bool,
    show_load_input: bool,
) -> Option<UiEvent> {
    use crossterm::event::KeyEventKind;

    if key.kind != KeyEventKind::Press {
        return None;
    }

    // Global Ctrl shortcuts
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('x') => return Some(UiEvent::CancelRequest),
            KeyCode::Char('c') => return Some(UiEvent::Quit),
            _ => {}
        }
    }

    if show_help {
        return Some(UiEvent::CloseHelp);
    }

    if show_load_input {
        return match key.code {
            KeyCode::Esc => Some(UiEvent::CancelLoadInput),
            KeyCode::Enter => Some(UiEvent::SubmitLoad),
            KeyCode::Backspace => Some(UiEvent::LoadInputBackspace),
            KeyCode::Char(c) => Some(UiEvent::LoadInputChar(c)),
            _ => None,
        };
    }

    if input_mode == InputMode::Editing {
        return match key.code {
            KeyCode::Esc => Some(UiEvent::StopEditing),
            KeyCode::Left => Some(UiEvent::CursorLeft),
            KeyCode::Right => Some(UiEvent::CursorRight),
            KeyCode::Backspace => Some(UiEvent::Backspace),
            KeyCode::Char(c) => Some(UiEvent::CharInput(c)),
            KeyCode::Enter if active_tab == AppTab::Tester && active_panel == Panel::Url => {
                Some(UiEvent::SendRequest)
            }
            KeyCode::Enter => Some(UiEvent::StopEditing),
            _ => None,
        };
    }

    // Keys shared by every tab
    match key.code {
        KeyCode::Char('q') => return Some(UiEvent::Quit),
        KeyCode::Char('?') => return Some(UiEvent::ToggleHelp),
        KeyCode::Char('o') => return Some(UiEvent::OpenLoadInput),
        KeyCode::Char('T') => return Some(UiEvent::ToggleTheme),
        KeyCode::Char(c) if c.is_ascii_digit() => return AppTab::from_digit(c).map(UiEvent::SwitchTab),
        KeyCode::Up | KeyCode::Char('k') => return Some(UiEvent::SelectPrev),
        KeyCode::Down | KeyCode::Char('j') => return Some(UiEvent::SelectNext),
        _ => {}
    }

    match active_tab {
        AppTab::Routes => match key.code {
            KeyCode::Char('/') => Some(UiEvent::StartSearch),
            KeyCode::Char('m') => Some(UiEvent::CycleMethodFilter),
            KeyCode::Char('n') => Some(UiEvent::CycleNamespaceFilter),
            KeyCode::Char('f') => Some(UiEvent::ToggleFavorite),
            KeyCode::Char('D') => Some(UiEvent::LoadFrom("demo".to_string())),
            KeyCode::Enter => Some(UiEvent::Activate),
            _ => None,
        },
        AppTab::Tester => match key.code {
            KeyCode::Tab => Some(UiEvent::NextPanel),
            KeyCode::BackTab => Some(UiEvent::PrevPanel),
            KeyCode::Char('e') | KeyCode::Enter if active_panel != Panel::Response => {
                Some(UiEvent::StartEditing)
            }
            KeyCode::Char('m') => Some(UiEvent::CycleMethod),
            KeyCode::Char('s') => Some(UiEvent::SendRequest),
            KeyCode::Char('c') => Some(UiEvent::ShowCurl),
            KeyCode::Char('x') => Some(UiEvent::ClearRequest),
            _ => None,
        },
        AppTab::History | AppTab::Favorites => match key.code {
            KeyCode::Enter => Some(UiEvent::Activate),
            KeyCode::Char('d') => Some(UiEvent::DeleteSelected),
            KeyCode::Char('C') => Some(UiEvent::ClearAll),
            _ => None,
        },
        AppTab::Docs => match key.code {
            KeyCode::Char('J') => Some(UiEvent::Export(ExportFormat::Json)),
            KeyCode::Char('V') => Some(UiEvent::Export(ExportFormat::Csv)),
            KeyCode::Char('M') => Some(UiEvent::Export(ExportFormat::Markdown)),
            KeyCode::Char('P') => Some(UiEvent::Export(ExportFormat::Postman)),
            _ => None,
        },
        AppTab::Settings => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => Some(UiEvent::Activate),
            KeyCode::Char('+') | KeyCode::Right => Some(UiEvent::IncreaseTimeout),
            KeyCode::Char('-') | KeyCode::Left => Some(UiEvent::DecreaseTimeout),
            _ => None,
        },
    }
}
