//! Command orchestration helpers from UI actions to backend command queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;

pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    status: &mut String,
) {
    let cmd_name = cmd.name();

    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            status.clear();
            tracing::debug!(command = cmd_name, "queued ui->backend command");
        }
        Err(TrySendError::Full(_)) => {
            *status = "Still waiting on the game server; please retry".to_string();
        }
        Err(TrySendError::Disconnected(_)) => {
            *status = "Backend worker stopped; restart the client".to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::bounded;
    use shared::domain::Column;

    #[test]
    fn queued_command_clears_status() {
        let (tx, rx) = bounded(1);
        let mut status = "old".to_string();

        dispatch_backend_command(&tx, BackendCommand::PlayColumn { column: Column(2) }, &mut status);

        assert!(status.is_empty());
        assert!(matches!(
            rx.try_recv(),
            Ok(BackendCommand::PlayColumn { column: Column(2) })
        ));
    }

    #[test]
    fn full_or_closed_queue_reports_status() {
        let (tx, rx) = bounded(1);
        let mut status = String::new();
        dispatch_backend_command(&tx, BackendCommand::PlayColumn { column: Column(1) }, &mut status);
        dispatch_backend_command(&tx, BackendCommand::PlayColumn { column: Column(2) }, &mut status);
        assert!(status.contains("retry"));

        drop(rx);
        dispatch_backend_command(&tx, BackendCommand::PlayColumn { column: Column(3) }, &mut status);
        assert!(status.contains("stopped"));
    }
}
