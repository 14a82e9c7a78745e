//! Draw runtime integration.
//!
//! Bridges the sync terminal loop with the async sequence controller.

use std::io;

use tokio::runtime::{Builder, Runtime};
use tokio::sync::mpsc::{self, error::TrySendError};

use crate::controller::SequenceController;
use crate::core::{AudioBackend, EffectEmitter, Presenter, Selector};
use crate::types::DrawAction;

/// Pending actions buffered for the controller.
///
/// Anything beyond this while a sequence runs would be rejected anyway.
pub const INBOX_CAPACITY: usize = 16;

/// Running controller instance.
pub struct DrawRuntime {
    _rt: Runtime,
    action_tx: mpsc::Sender<DrawAction>,
}

impl DrawRuntime {
    /// Spawn `controller` on a dedicated single-worker runtime.
    pub fn start<P, E, B, S>(controller: SequenceController<P, E, B, S>) -> io::Result<Self>
    where
        P: Presenter + Send + 'static,
        E: EffectEmitter + Send + 'static,
        B: AudioBackend + Send + 'static,
        S: Selector + Send + 'static,
    {
        let rt = Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("lucky-draw-sequencer")
            .enable_time()
            .build()?;

        let (action_tx, action_rx) = mpsc::channel::<DrawAction>(INBOX_CAPACITY);
        rt.spawn(async move {
            let controller = controller.run(action_rx).await;
            log::info!("sequencer stopped after {} draws", controller.draws());
        });

        Ok(Self {
            _rt: rt,
            action_tx,
        })
    }

    /// Forward an action. Returns false if it was dropped.
    pub fn send(&self, action: DrawAction) -> bool {
        match self.action_tx.try_send(action) {
            Ok(()) => true,
            Err(TrySendError::Full(action)) => {
                log::debug!("inbox full, dropping {action:?}");
                false
            }
            Err(TrySendError::Closed(_)) => false,
        }
    }
}
