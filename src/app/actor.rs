//! App actor - message loop processing UI events and network responses

use tokio::sync::mpsc;

use crate::app::state::AppState;
use crate::messages::ui_events::{InputMode, UiEvent};
use crate::messages::{NetworkCommand, NetworkResponse, RenderState};
use crate::storage::SharedStore;

/// App actor that processes UI events and network responses.
///
/// It is the only writer of the explorer context; events are handled one at
/// a time in arrival order.
pub struct AppActor {
    state: AppState,
    network_tx: mpsc::UnboundedSender<NetworkCommand>,
    render_tx: mpsc::UnboundedSender<RenderState>,
}

impl AppActor {
    pub fn new(
        store: SharedStore,
        network_tx: mpsc::UnboundedSender<NetworkCommand>,
        render_tx: mpsc::UnboundedSender<RenderState>,
    ) -> Self {
        AppActor {
            state: AppState::new(store),
            network_tx,
            render_tx,
        }
    }

    /// Run the actor message loop
    pub async fn run(
        mut self,
        mut ui_rx: mpsc::UnboundedReceiver<UiEvent>,
        mut net_rx: mpsc::UnboundedReceiver<NetworkResponse>,
    ) {
        // Send initial render state
        let _ = self.render_tx.send(self.state.to_render_state());

        loop {
            tokio::select! {
                Some(event) = ui_rx.recv() => {
                    if self.handle_ui_event(event) {
                        // Quit signal received
                        let _ = self.network_tx.send(NetworkCommand::Shutdown);
                        break;
                    }
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                Some(response) = net_rx.recv() => {
                    self.state.handle_response(response);
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                else => break,
            }
        }
    }

    fn send(&self, cmd: Option<NetworkCommand>) {
        if let Some(cmd) = cmd {
            let _ = self.network_tx.send(cmd);
        }
    }

    /// Handle a UI event, returns true if quit was requested
    fn handle_ui_event(&mut self, event: UiEvent) -> bool {
        match event {
            // Tab switching
            UiEvent::SwitchTab(tab) => self.state.switch_tab(tab),

            // Input editing
            UiEvent::StartEditing => self.state.start_editing(),
            UiEvent::StopEditing => self.state.stop_editing(),
            UiEvent::CharInput(c) => self.state.enter_char(c),
            UiEvent::Backspace => self.state.delete_char(),
            UiEvent::CursorLeft => self.state.move_cursor_left(),
            UiEvent::CursorRight => self.state.move_cursor_right(),

            // Lists
            UiEvent::SelectPrev => self.state.select_prev(),
            UiEvent::SelectNext => self.state.select_next(),
            UiEvent::Activate => self.state.activate(),
            UiEvent::DeleteSelected => self.state.delete_selected(),
            UiEvent::ClearAll => self.state.clear_all(),

            // Routes
            UiEvent::StartSearch => self.state.start_search(),
            UiEvent::CycleMethodFilter => self.state.cycle_method_filter(),
            UiEvent::CycleNamespaceFilter => self.state.cycle_namespace_filter(),
            UiEvent::ToggleFavorite => self.state.toggle_favorite(),

            // Tester
            UiEvent::NextPanel => self.state.next_panel(),
            UiEvent::PrevPanel => self.state.prev_panel(),
            UiEvent::CycleMethod => self.state.cycle_method(),
            UiEvent::SendRequest => {
                if self.state.input_mode == InputMode::Editing {
                    self.state.stop_editing();
                }
                let cmd = self.state.send_request();
                self.send(cmd);
            }
            UiEvent::CancelRequest => {
                let cmd = self.state.cancel_request();
                self.send(cmd);
            }
            UiEvent::ShowCurl => self.state.show_curl(),
            UiEvent::ClearRequest => self.state.clear_request(),

            // Settings
            UiEvent::IncreaseTimeout => self.state.adjust_timeout(1),
            UiEvent::DecreaseTimeout => self.state.adjust_timeout(-1),

            // Catalog loading and export
            UiEvent::OpenLoadInput => self.state.open_load_input(),
            UiEvent::LoadInputChar(c) => self.state.load_input_char(c),
            UiEvent::LoadInputBackspace => self.state.load_input_backspace(),
            UiEvent::CancelLoadInput => self.state.cancel_load_input(),
            UiEvent::SubmitLoad => {
                let cmd = self.state.submit_load();
                self.send(cmd);
            }
            UiEvent::LoadFrom(input) => {
                let cmd = self.state.load_from(&input);
                self.send(cmd);
            }
            UiEvent::Export(format) => self.state.export(format),

            // Popups and appearance
            UiEvent::ToggleTheme => self.state.toggle_theme(),
            UiEvent::ToggleHelp => self.state.toggle_help(),
            UiEvent::CloseHelp => self.state.close_help(),

            // System
            UiEvent::Quit => return true,
        }

        false
    }
}
