use taskboard_domain::Board;
use taskboard_persistence::BoardGateway;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Writes queued board snapshots through the gateway, one at a time, in order.
///
/// Runs until every sender is dropped (see
/// [`crate::TaskBoardStore::close_save_channel`]), then drains what is left
/// and exits.
pub struct SaveWorker {
    gateway: BoardGateway,
    rx: mpsc::UnboundedReceiver<Vec<Board>>,
}

impl SaveWorker {
    pub(crate) fn new(gateway: BoardGateway, rx: mpsc::UnboundedReceiver<Vec<Board>>) -> Self {
        Self { gateway, rx }
    }

    pub async fn run(mut self) {
        let mut saved = 0usize;
        while let Some(boards) = self.rx.recv().await {
            self.gateway.save(&boards).await;
            saved += 1;
        }
        tracing::debug!("Save channel closed after {} snapshots", saved);
    }

    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(self.run())
    }
}
