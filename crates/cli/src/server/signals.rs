use tracing::error;

/// Any termination signal ends the process at once with status 1; in-flight
/// requests are not drained.
#[cfg(unix)]
pub fn install_signal_handlers() -> anyhow::Result<()> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigterm = signal(SignalKind::terminate())?;
    let mut sigint = signal(SignalKind::interrupt())?;

    tokio::spawn(async move {
        let name = tokio::select! {
            _ = sigterm.recv() => "SIGTERM",
            _ = sigint.recv() => "SIGINT",
        };
        error!(signal = name, "fatal: signal received");
        std::process::exit(1);
    });

    Ok(())
}

#[cfg(not(unix))]
pub fn install_signal_handlers() -> anyhow::Result<()> {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            error!(signal = "ctrl-c", "fatal: signal received");
            std::process::exit(1);
        }
    });

    Ok(())
}
