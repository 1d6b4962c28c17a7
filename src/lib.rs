//! raw_fetch library: concurrent raw-socket page fetching
//!
//! This library fetches the content of a list of web pages over raw TCP
//! sockets. It issues a minimal HTTP/1.1 request per URL and reassembles
//! each response incrementally from whatever chunk sizes the network
//! delivers, using the `Content-Length` header as the sole completion
//! signal. It is deliberately not an HTTP client: TLS, chunked encoding,
//! redirects, connection reuse, and retries are all out of scope.
//!
//! # Example
//!
//! ```no_run
//! use raw_fetch::{run_crawl, Config};
//! use std::path::PathBuf;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     file: PathBuf::from("urls.txt"),
//!     max_concurrency: 10,
//!     ..Default::default()
//! };
//!
//! let report = run_crawl(config).await?;
//! println!(
//!     "Fetched {} URLs: {} succeeded, {} failed",
//!     report.total, report.successful, report.failed
//! );
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or call library functions from within an async context.

#![warn(missing_docs)]

mod app;
pub mod config;
mod dns;
mod error_handling;
mod fetch;
mod http;
pub mod initialization;
mod models;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{categorize_fetch_error, ErrorType, FetchError};
pub use http::{AssemblerState, ResponseAssembler};
pub use models::{FetchResult, FetchTarget};
pub use run::{run_crawl, CrawlReport};

// Internal run module (contains the crawl orchestration logic)
mod run {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::{Duration, Instant};

    use anyhow::{Context, Result};
    use futures::stream::FuturesUnordered;
    use futures::StreamExt;
    use log::{info, warn};
    use tokio::io::{AsyncBufReadExt, BufReader};
    use tokio_util::sync::CancellationToken;

    use crate::app::{
        log_progress, print_error_statistics, shutdown_gracefully, validate_and_normalize_url,
    };
    use crate::config::{Config, LOGGING_INTERVAL, TCP_CONNECT_TIMEOUT_SECS};
    use crate::error_handling::{update_error_stats, FetchError, ProcessingStats};
    use crate::fetch::{run_session, FetchContext};
    use crate::initialization::{init_resolver, init_semaphore};
    use crate::models::{FetchResult, FetchTarget};

    /// Results of one crawl run.
    ///
    /// `results` carries one entry per accepted input URL, indexed by input
    /// order, on both the success and failure paths.
    #[derive(Debug)]
    pub struct CrawlReport {
        /// Per-URL outcomes, in input order.
        pub results: Vec<FetchResult>,
        /// Number of URLs attempted.
        pub total: usize,
        /// Number of URLs fetched to completion.
        pub successful: usize,
        /// Number of URLs that failed.
        pub failed: usize,
        /// Elapsed wall-clock time in seconds.
        pub elapsed_seconds: f64,
    }

    /// Runs a crawl with the provided configuration.
    ///
    /// This is the main entry point for the library. It reads URLs from the
    /// input file, fetches them concurrently (one tokio task per URL, gated
    /// by a semaphore, each under its own deadline), and returns one
    /// [`FetchResult`] per URL in input order. A failure in one session
    /// never cancels or affects any other session.
    ///
    /// # Errors
    ///
    /// Returns an error only for setup failures (input file unreadable,
    /// resolver initialization). Per-URL failures are reported inside the
    /// returned [`CrawlReport`], never as an `Err`.
    pub async fn run_crawl(config: Config) -> Result<CrawlReport> {
        let targets = read_targets(&config).await?;
        info!("Accepted {} URLs to fetch", targets.len());

        let resolver = init_resolver().context("Failed to initialize DNS resolver")?;
        let semaphore = init_semaphore(config.max_concurrency);
        let error_stats = Arc::new(ProcessingStats::new());
        let ctx = Arc::new(FetchContext::new(
            resolver,
            Arc::clone(&error_stats),
            Duration::from_secs(TCP_CONNECT_TIMEOUT_SECS),
            Duration::from_secs(config.timeout_seconds),
        ));

        let start_time = Instant::now();
        let completed_urls = Arc::new(AtomicUsize::new(0));
        let failed_urls = Arc::new(AtomicUsize::new(0));
        let total_urls = Arc::new(AtomicUsize::new(targets.len()));

        let cancel = CancellationToken::new();
        let cancel_logging = cancel.child_token();
        let completed_for_logging = Arc::clone(&completed_urls);
        let failed_for_logging = Arc::clone(&failed_urls);
        let total_for_logging = Arc::clone(&total_urls);
        let logging_task = Some(tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(LOGGING_INTERVAL));
            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        log_progress(
                            start_time,
                            &completed_for_logging,
                            &failed_for_logging,
                            &total_for_logging,
                        );
                    }
                    _ = cancel_logging.cancelled() => break,
                }
            }
        }));

        let urls_by_sequence: Vec<String> =
            targets.iter().map(|target| target.url.to_string()).collect();
        let mut slots: Vec<Option<FetchResult>> = targets.iter().map(|_| None).collect();

        let mut tasks = FuturesUnordered::new();
        for target in targets {
            let permit = match Arc::clone(&semaphore).acquire_owned().await {
                Ok(permit) => permit,
                Err(_) => {
                    warn!("Semaphore closed, skipping URL: {}", target.url);
                    continue;
                }
            };

            let ctx = Arc::clone(&ctx);
            let completed = Arc::clone(&completed_urls);
            let failed = Arc::clone(&failed_urls);
            let sequence_id = target.sequence_id;
            let handle = tokio::spawn(async move {
                let _permit = permit;
                let result = run_session(&target, &ctx).await;
                if result.success {
                    completed.fetch_add(1, Ordering::SeqCst);
                } else {
                    failed.fetch_add(1, Ordering::SeqCst);
                }
                result
            });
            tasks.push(async move { (sequence_id, handle.await) });
        }

        while let Some((sequence_id, task_result)) = tasks.next().await {
            match task_result {
                Ok(result) => {
                    let idx = result.sequence_id;
                    slots[idx] = Some(result);
                }
                Err(join_error) => {
                    failed_urls.fetch_add(1, Ordering::SeqCst);
                    warn!("Fetch task for URL #{sequence_id} panicked: {join_error:?}");
                }
            }
        }

        // A slot left empty (panicked or never-spawned task) still gets a
        // result so the report carries one entry per accepted URL.
        let results: Vec<FetchResult> = slots
            .into_iter()
            .enumerate()
            .map(|(sequence_id, slot)| {
                slot.unwrap_or_else(|| {
                    let error =
                        FetchError::Task("fetch task did not produce a result".to_string());
                    update_error_stats(&error_stats, &error);
                    FetchResult {
                        sequence_id,
                        url: urls_by_sequence[sequence_id].clone(),
                        success: false,
                        body: None,
                        error: Some(error),
                    }
                })
            })
            .collect();

        shutdown_gracefully(cancel, logging_task).await;
        log_progress(start_time, &completed_urls, &failed_urls, &total_urls);
        print_error_statistics(&error_stats);

        let successful = results.iter().filter(|result| result.success).count();
        let failed = results.len() - successful;
        let elapsed_seconds = start_time.elapsed().as_secs_f64();

        Ok(CrawlReport {
            total: results.len(),
            successful,
            failed,
            elapsed_seconds,
            results,
        })
    }

    /// Reads, validates, and numbers the input URLs.
    ///
    /// Blank lines and `#` comments are skipped; invalid lines are skipped
    /// with a warning. Sequence ids number the accepted targets in input
    /// order.
    async fn read_targets(config: &Config) -> Result<Vec<FetchTarget>> {
        let lines = if config.file.as_os_str() == "-" {
            info!("Reading URLs from stdin");
            read_lines(BufReader::new(tokio::io::stdin())).await?
        } else {
            let file = tokio::fs::File::open(&config.file)
                .await
                .context("Failed to open input file")?;
            read_lines(BufReader::new(file)).await?
        };

        let mut targets = Vec::new();
        for line in lines {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let Some(url) = validate_and_normalize_url(trimmed) else {
                continue;
            };
            targets.push(FetchTarget {
                url,
                sequence_id: targets.len(),
            });
        }
        Ok(targets)
    }

    async fn read_lines<R>(reader: BufReader<R>) -> Result<Vec<String>>
    where
        R: tokio::io::AsyncRead + Unpin,
    {
        let mut lines = reader.lines();
        let mut collected = Vec::new();
        while let Some(line) = lines
            .next_line()
            .await
            .context("Failed to read line from input")?
        {
            collected.push(line);
        }
        Ok(collected)
    }
}
