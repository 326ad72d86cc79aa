use shared::error::CommonError;
use tokio_graceful_shutdown::{SubsystemBuilder, SubsystemHandle};
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::service::MonitorService;

/// Mount the release monitor on a graceful-shutdown subsystem tree.
///
/// The round's cancellation scope is wired to the shutdown request, so
/// pending semaphore waits and in-flight app checks unwind promptly instead
/// of being dropped mid-flight.
pub fn start_release_monitor_subsystem(subsys: &SubsystemHandle, service: MonitorService) {
    subsys.start(SubsystemBuilder::new(
        "release-monitor",
        move |subsys: SubsystemHandle| async move {
            let cancel = CancellationToken::new();
            let mut monitor = tokio::spawn({
                let cancel = cancel.clone();
                async move { service.run(cancel).await }
            });

            tokio::select! {
                _ = subsys.on_shutdown_requested() => {
                    info!("system shutdown requested");
                    cancel.cancel();
                    let _ = (&mut monitor).await;
                }
                _ = &mut monitor => {
                    info!("release monitor stopped");
                    subsys.request_shutdown();
                }
            }
            Ok::<(), CommonError>(())
        },
    ));
}
