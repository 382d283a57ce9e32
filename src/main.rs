use clap::Parser;
use reach_subset::SubsetProcessor;
use reach_subset::cli::{Args, setup_logging};
use reach_subset::error::SubsetError;
use std::process;
use tokio_util::sync::CancellationToken;

fn main() {
    let args = Args::parse();

    if let Err(error) = setup_logging(&args) {
        exit_with_error(error);
    }

    // Cancelled on CTRL+C; stages already running still finish their writes
    let cancellation_token = CancellationToken::new();

    let processor = match SubsetProcessor::new(
        args.subset.clone(),
        args.datadir.clone(),
        args.outdir.clone(),
    ) {
        Ok(processor) => processor
            .with_config(args.to_config())
            .with_cancellation(cancellation_token.clone()),
        Err(error) => exit_with_error(error),
    };

    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(async {
        let shutdown_token = cancellation_token.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                eprintln!("\nReceived CTRL+C, finishing the current stage...");
                shutdown_token.cancel();
            }
        });

        processor.process().await
    });

    match result {
        Ok(_stats) => process::exit(0),
        Err(error) => exit_with_error(error),
    }
}

/// Print the error with its source chain and exit non-zero
fn exit_with_error(error: SubsetError) -> ! {
    eprintln!("Error: {:#}", anyhow::Error::from(error));
    process::exit(1);
}
