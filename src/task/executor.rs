use crate::core::search::SearchClient;
use crate::task::execution::{FetchCompletion, FetchRequest, execute_fetch};
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::time::Duration;

/// Runs searches on worker threads; results are drained by the event loop.
pub struct FetchExecutor {
    spawner: FetchSpawner,
    completion_rx: Receiver<FetchCompletion>,
}

/// Cloneable handle that starts searches for a `FetchExecutor`.
#[derive(Clone)]
pub struct FetchSpawner {
    client: SearchClient,
    completion_tx: Sender<FetchCompletion>,
}

impl FetchExecutor {
    pub fn new(client: SearchClient) -> Self {
        let (completion_tx, completion_rx) = mpsc::channel::<FetchCompletion>();
        Self {
            spawner: FetchSpawner {
                client,
                completion_tx,
            },
            completion_rx,
        }
    }

    pub fn spawner(&self) -> FetchSpawner {
        self.spawner.clone()
    }

    pub fn drain_ready(&self) -> Vec<FetchCompletion> {
        let mut out = Vec::<FetchCompletion>::new();
        loop {
            match self.completion_rx.try_recv() {
                Ok(completion) => out.push(completion),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        out
    }

    pub fn wait_next(&self, timeout: Duration) -> Option<FetchCompletion> {
        self.completion_rx.recv_timeout(timeout).ok()
    }
}

impl FetchSpawner {
    pub fn spawn(&self, request: FetchRequest) {
        let client = self.client.clone();
        let completion_tx = self.completion_tx.clone();
        std::thread::spawn(move || {
            let completion = execute_fetch(&client, request);
            let _ = completion_tx.send(completion);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::FetchExecutor;
    use crate::core::search::{SearchClient, Transport};
    use crate::error::SearchError;
    use crate::task::execution::FetchRequest;
    use std::sync::Arc;
    use std::time::Duration;

    struct EchoTransport;

    impl Transport for EchoTransport {
        fn get(&self, url: &str) -> Result<String, SearchError> {
            let name = url.rsplit('=').next().unwrap_or_default();
            Ok(format!(r#"[{{"name":"{name}"}}]"#))
        }
    }

    #[test]
    fn completion_carries_request_tag() {
        let executor = FetchExecutor::new(SearchClient::new("http://h", Arc::new(EchoTransport)));
        executor.spawner().spawn(FetchRequest::new("Bran", 7));

        let completion = executor
            .wait_next(Duration::from_secs(5))
            .expect("completion");
        assert_eq!(completion.generation, 7);
        assert_eq!(completion.query, "Bran");
        assert_eq!(completion.candidates, Some(vec!["Bran".to_string()]));
        assert!(executor.drain_ready().is_empty());
    }
}
