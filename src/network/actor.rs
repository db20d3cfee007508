//! Network actor - runs tester requests and remote ingestion in the Tokio runtime

use std::collections::HashMap;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinSet;

use crate::catalog::fetch_catalog;
use crate::messages::{NetworkCommand, NetworkResponse};
use crate::network::client::{create_client, execute_with_cancel};

/// Network actor that processes tester and ingestion commands.
///
/// Every command runs in its own task, so concurrent requests complete in
/// whatever order the network decides.
pub struct NetworkActor {
    client: reqwest::Client,
    response_tx: mpsc::UnboundedSender<NetworkResponse>,
    active_requests: JoinSet<u64>,
    cancel_handles: HashMap<u64, oneshot::Sender<()>>,
}

impl NetworkActor {
    pub fn new(response_tx: mpsc::UnboundedSender<NetworkResponse>) -> Self {
        Self::with_client(create_client(), response_tx)
    }

    pub fn with_client(client: reqwest::Client, response_tx: mpsc::UnboundedSender<NetworkResponse>) -> Self {
        NetworkActor {
            client,
            response_tx,
            active_requests: JoinSet::new(),
            cancel_handles: HashMap::new(),
        }
    }

    /// Run the network actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>) {
        loop {
            tokio::select! {
                biased;

                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(NetworkCommand::ExecuteRequest { id, request, timeout_secs }) => {
                            let (cancel_tx, cancel_rx) = oneshot::channel();
                            self.cancel_handles.insert(id, cancel_tx);

                            let response_tx = self.response_tx.clone();
                            let client = self.client.clone();

                            self.active_requests.spawn(async move {
                                tracing::info!(id, url = %request.url, method = %request.method, "Executing request");
                                let result = execute_with_cancel(
                                    &client,
                                    &request.method,
                                    &request.url,
                                    &request.headers,
                                    &request.body,
                                    timeout_secs,
                                    Some(cancel_rx),
                                ).await;
                                match &result {
                                    Ok(resp) => tracing::info!(id, status = resp.status, duration_ms = resp.duration_ms, "Request completed"),
                                    Err(e) => tracing::warn!(id, error = %e, "Request failed"),
                                }
                                let _ = response_tx.send(NetworkResponse::RequestFinished {
                                    id,
                                    method: request.method.to_string(),
                                    url: request.url.trim().to_string(),
                                    result,
                                });
                                id
                            });
                        }

                        Some(NetworkCommand::CancelRequest(id)) => {
                            if let Some(cancel_tx) = self.cancel_handles.remove(&id) {
                                tracing::info!(id, "Cancelling request");
                                let _ = cancel_tx.send(());
                            }
                        }

                        Some(NetworkCommand::LoadCatalog { id, url }) => {
                            let response_tx = self.response_tx.clone();
                            let client = self.client.clone();

                            self.active_requests.spawn(async move {
                                let response = match fetch_catalog(&client, &url).await {
                                    Ok(catalog) => NetworkResponse::CatalogLoaded { id, catalog: Box::new(catalog) },
                                    Err(e) => {
                                        tracing::warn!(id, url = %url, error = %e, "Remote ingestion failed");
                                        NetworkResponse::CatalogFailed { id, message: e.to_string() }
                                    }
                                };
                                let _ = response_tx.send(response);
                                id
                            });
                        }

                        Some(NetworkCommand::Shutdown) => {
                            for (_, cancel_tx) in self.cancel_handles.drain() {
                                let _ = cancel_tx.send(());
                            }
                            break;
                        }

                        None => break,
                    }
                }

                Some(finished) = self.active_requests.join_next() => {
                    if let Ok(id) = finished {
                        self.cancel_handles.remove(&id);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{HttpMethod, TestRequest};
    use crate::network::RequestError;
    use crate::test_support::{client, serve_silent};

    #[tokio::test]
    async fn test_cancel_command_aborts_pending_request() {
        let addr = serve_silent().await;
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let (resp_tx, mut resp_rx) = mpsc::unbounded_channel();
        tokio::spawn(NetworkActor::with_client(client(), resp_tx).run(cmd_rx));

        let request = TestRequest {
            method: HttpMethod::GET,
            url: format!("http://{}/slow", addr),
            ..Default::default()
        };
        cmd_tx.send(NetworkCommand::ExecuteRequest { id: 1, request, timeout_secs: 30 }).unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(100)).await;
        cmd_tx.send(NetworkCommand::CancelRequest(1)).unwrap();

        match resp_rx.recv().await.unwrap() {
            NetworkResponse::RequestFinished { id, method, result, .. } => {
                assert_eq!(id, 1);
                assert_eq!(method, "GET");
                assert!(matches!(result, Err(RequestError::Cancelled { .. })));
            }
            other => panic!("unexpected response {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_invalid_input_reported_without_network() {
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let (resp_tx, mut resp_rx) = mpsc::unbounded_channel();
        tokio::spawn(NetworkActor::with_client(client(), resp_tx).run(cmd_rx));

        cmd_tx
            .send(NetworkCommand::ExecuteRequest { id: 9, request: TestRequest::default(), timeout_secs: 1 })
            .unwrap();
        let response = resp_rx.recv().await.unwrap();
        assert_eq!(response.id(), 9);
        assert!(matches!(
            response,
            NetworkResponse::RequestFinished { result: Err(RequestError::Input(_)), .. }
        ));
    }
}
