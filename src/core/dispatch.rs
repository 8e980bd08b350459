use crate::domain::model::Operation;
use crate::domain::ports::VotingClient;
use crate::utils::error::{BridgeError, Result};
use std::sync::Arc;
use std::time::Instant;
use tokio::task::JoinHandle;

pub struct Dispatcher<C: VotingClient> {
    client: Arc<C>,
}

impl<C: VotingClient> Dispatcher<C> {
    pub fn new(client: C) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub async fn run(&self, operation: Operation) -> Result<()> {
        dispatch(self.client.as_ref(), operation).await
    }
}

impl<C: VotingClient + 'static> Dispatcher<C> {
    /// Runs every operation at once. All tasks start before any is awaited, so
    /// their requests and display writes interleave freely; the returned
    /// vector holds one entry per operation, in the order given.
    pub async fn run_all(&self, operations: &[Operation]) -> Vec<(Operation, Result<()>)> {
        let tasks: Vec<(Operation, JoinHandle<Result<()>>)> = operations
            .iter()
            .map(|&operation| {
                let client = Arc::clone(&self.client);
                let task = tokio::spawn(async move { dispatch(client.as_ref(), operation).await });
                (operation, task)
            })
            .collect();

        let mut results = Vec::with_capacity(tasks.len());
        for (operation, task) in tasks {
            let outcome = match task.await {
                Ok(outcome) => outcome,
                Err(e) => {
                    tracing::error!("❌ {}: submission task did not finish: {}", operation, e);
                    Err(BridgeError::ProcessingError {
                        message: format!("{} task did not finish: {}", operation, e),
                    })
                }
            };
            results.push((operation, outcome));
        }
        results
    }

    /// 單一操作直接執行；多個操作同時送出，回報第一個錯誤
    pub async fn submit(&self, operations: &[Operation]) -> Result<()> {
        if let [operation] = operations {
            return self.run(*operation).await;
        }

        self.run_all(operations)
            .await
            .into_iter()
            .try_for_each(|(_, outcome)| outcome)
    }
}

async fn dispatch<C: VotingClient + ?Sized>(client: &C, operation: Operation) -> Result<()> {
    let started = Instant::now();
    tracing::info!("🚀 {}: submitting", operation);

    let outcome = match operation {
        Operation::AddUser => client.add_user().await,
        Operation::AddBallot => client.add_ballot().await,
        Operation::CastVote => client.cast_vote().await,
        Operation::CalculateResults => client.calculate_results().await,
    };

    match &outcome {
        Ok(()) => tracing::info!("✅ {}: done in {:?}", operation, started.elapsed()),
        Err(e) => tracing::error!("❌ {}: failed after {:?}: {}", operation, started.elapsed(), e),
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingClient {
        calls: Mutex<Vec<Operation>>,
    }

    impl RecordingClient {
        fn record(&self, operation: Operation) {
            self.calls
                .lock()
                .unwrap_or_else(|e| e.into_inner())
                .push(operation);
        }

        fn calls(&self) -> Vec<Operation> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait::async_trait]
    impl VotingClient for RecordingClient {
        async fn add_user(&self) -> Result<()> {
            self.record(Operation::AddUser);
            Ok(())
        }

        async fn add_ballot(&self) -> Result<()> {
            self.record(Operation::AddBallot);
            Ok(())
        }

        async fn cast_vote(&self) -> Result<()> {
            self.record(Operation::CastVote);
            Err(BridgeError::ProcessingError {
                message: "rejected".to_string(),
            })
        }

        async fn calculate_results(&self) -> Result<()> {
            self.record(Operation::CalculateResults);
            Ok(())
        }
    }

    #[test]
    fn test_run_calls_matching_handler() {
        let dispatcher = Dispatcher::new(RecordingClient::default());

        tokio_test::block_on(dispatcher.run(Operation::AddBallot)).unwrap();
        let err = tokio_test::block_on(dispatcher.run(Operation::CastVote)).unwrap_err();

        assert!(matches!(err, BridgeError::ProcessingError { .. }));
        assert_eq!(
            dispatcher.client().calls(),
            vec![Operation::AddBallot, Operation::CastVote]
        );
    }

    #[tokio::test]
    async fn test_run_all_keeps_invocations_independent() {
        let dispatcher = Dispatcher::new(RecordingClient::default());

        let results = dispatcher.run_all(&Operation::ALL).await;

        assert_eq!(results.len(), 4);
        for (operation, outcome) in &results {
            assert_eq!(outcome.is_ok(), *operation != Operation::CastVote);
        }

        let calls = dispatcher.client().calls();
        assert_eq!(calls.len(), 4);
        for operation in Operation::ALL {
            assert!(calls.contains(&operation));
        }
    }

    /// add_ballot 在任務中 panic，其餘操作正常
    struct PanickingClient;

    #[async_trait::async_trait]
    impl VotingClient for PanickingClient {
        async fn add_user(&self) -> Result<()> {
            Ok(())
        }

        async fn add_ballot(&self) -> Result<()> {
            panic!("display stream closed");
        }

        async fn cast_vote(&self) -> Result<()> {
            Ok(())
        }

        async fn calculate_results(&self) -> Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_run_all_reports_panicked_task() {
        let dispatcher = Dispatcher::new(PanickingClient);

        let results = dispatcher.run_all(&Operation::ALL).await;

        assert_eq!(results.len(), 4);
        let operations: Vec<Operation> = results.iter().map(|(op, _)| *op).collect();
        assert_eq!(operations, Operation::ALL.to_vec());
        for (operation, outcome) in &results {
            if *operation == Operation::AddBallot {
                assert!(matches!(outcome, Err(BridgeError::ProcessingError { .. })));
            } else {
                assert!(outcome.is_ok());
            }
        }
    }

    #[tokio::test]
    async fn test_submit_fails_when_a_task_panics() {
        let dispatcher = Dispatcher::new(PanickingClient);

        let err = dispatcher
            .submit(&[Operation::AddUser, Operation::AddBallot])
            .await
            .unwrap_err();

        assert!(matches!(err, BridgeError::ProcessingError { .. }));
        assert_eq!(err.exit_code(), 2);
        assert!(dispatcher.submit(&[Operation::AddUser, Operation::CastVote]).await.is_ok());
    }

    #[tokio::test]
    async fn test_submit_single_operation_returns_its_error() {
        let dispatcher = Dispatcher::new(RecordingClient::default());

        assert!(dispatcher.submit(&[Operation::AddUser]).await.is_ok());
        assert!(dispatcher.submit(&[Operation::CastVote]).await.is_err());
        assert_eq!(
            dispatcher.client().calls(),
            vec![Operation::AddUser, Operation::CastVote]
        );
    }
}
