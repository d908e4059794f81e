//! Benchmark driver: write and read each format through the store.

use crate::config::BenchConfig;
use crate::error::{BenchError, Result};
use crate::report::Reporter;
use crate::timer::measure_async;
use cachebench_codec::{all_codecs, codec_for};
use cachebench_core::{Codec, CodecName, RecordSet, generate, recommend_codec};
use cachebench_store::{KeyValueStore, StoreClient};
use std::io::Write;
use std::time::Duration;

/// Formats whose descriptors are run through the codec selector, in order.
pub const SELECTOR_FORMATS: [CodecName; 2] = [CodecName::Json, CodecName::Proto];

/// Timings and payload size for one format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatResult {
    /// Format measured.
    pub codec: CodecName,
    /// Encoded payload size in bytes.
    pub payload_bytes: usize,
    /// Encode plus store write.
    pub write: Duration,
    /// Store read plus decode.
    pub read: Duration,
}

/// Results of a full run, in execution order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BenchSummary {
    /// One entry per format.
    pub results: Vec<FormatResult>,
}

impl BenchSummary {
    /// Returns the result for `codec`, if it ran.
    #[must_use]
    pub fn get(&self, codec: CodecName) -> Option<&FormatResult> {
        self.results.iter().find(|r| r.codec == codec)
    }

    /// Sum of all write and read durations.
    #[must_use]
    pub fn total(&self) -> Duration {
        self.results.iter().map(|r| r.write + r.read).sum()
    }
}

/// Store, report sink and settings shared across one run.
#[derive(Debug)]
pub struct BenchContext<S, W> {
    config: BenchConfig,
    store: S,
    reporter: Reporter<W>,
}

impl<S: KeyValueStore, W: Write> BenchContext<S, W> {
    /// Creates a context.
    #[must_use]
    pub fn new(config: BenchConfig, store: S, reporter: Reporter<W>) -> Self {
        Self {
            config,
            store,
            reporter,
        }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// Returns the store.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Consumes the context and returns the store and reporter.
    pub fn into_parts(self) -> (S, Reporter<W>) {
        (self.store, self.reporter)
    }

    /// Writes and reads one format, reporting both timings.
    ///
    /// # Arguments
    /// * `codec` - Format under test; its cache key names the store entry
    ///
    /// # Returns
    /// The measurements and the generated record set.
    ///
    /// # Errors
    /// Returns the first store, codec or report failure. A decoded set that
    /// differs from the written one is `RoundTripMismatch` when verification
    /// is enabled.
    pub async fn bench_codec(&mut self, codec: &dyn Codec) -> Result<(FormatResult, RecordSet)> {
        let name = codec.name();
        let key = name.cache_key();
        let ttl = self.config.ttl;
        let records = generate(self.config.record_count)?;
        let store = &mut self.store;

        let write_label = format!("{name} write");
        let (written, write) = measure_async(&write_label, async {
            let payload = codec.encode(&records)?;
            store.set(key, &payload, ttl).await?;
            Ok::<usize, BenchError>(payload.len())
        })
        .await;
        let payload_bytes = written?;
        self.reporter.timing(&write_label, write)?;

        let read_label = format!("{name} read");
        let (decoded, read) = measure_async(&read_label, async {
            let payload = store.get(key).await?;
            Ok::<RecordSet, BenchError>(codec.decode(&payload)?)
        })
        .await;
        let decoded = decoded?;
        self.reporter.timing(&read_label, read)?;
        self.reporter.blank()?;

        tracing::info!(
            "{}: {} records, {} payload bytes under {}",
            name,
            decoded.len(),
            payload_bytes,
            key
        );

        if self.config.verify_round_trip && decoded != records {
            return Err(BenchError::RoundTripMismatch {
                codec: name,
                written: records.len(),
                read: decoded.len(),
            });
        }

        let result = FormatResult {
            codec: name,
            payload_bytes,
            write,
            read,
        };
        Ok((result, records))
    }
}

/// Runs every format in order, then the codec selector.
///
/// Output is one write line, one read line and a blank line per format,
/// followed by one recommendation line per selector format. The value on a
/// recommendation line is the record set generated for that format.
///
/// # Errors
/// The first failure aborts the run.
pub async fn run_benchmarks<S, W>(ctx: &mut BenchContext<S, W>) -> Result<BenchSummary>
where
    S: KeyValueStore,
    W: Write,
{
    let mut summary = BenchSummary::default();
    let mut selector_inputs = Vec::with_capacity(SELECTOR_FORMATS.len());

    for codec in all_codecs() {
        let (result, records) = ctx.bench_codec(codec).await?;
        if SELECTOR_FORMATS.contains(&result.codec) {
            selector_inputs.push((result.codec, records));
        }
        summary.results.push(result);
    }

    for (name, records) in &selector_inputs {
        let recommended = recommend_codec(&codec_for(*name).descriptor());
        tracing::debug!("{} records recommend {}", name, recommended);
        ctx.reporter.recommendation(recommended, records)?;
    }

    tracing::info!("benchmark finished in {:?}", summary.total());
    Ok(summary)
}

/// Connects to the configured store and checks it answers.
///
/// # Arguments
/// * `config` - Benchmark settings; only the store section is used
///
/// # Errors
/// Returns the connection or PING failure.
pub async fn connect(config: &BenchConfig) -> Result<StoreClient> {
    let mut client = StoreClient::connect(config.store.clone()).await?;
    client.ping().await?;
    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cachebench_codec::JsonCodec;
    use cachebench_store::MemoryStore;

    fn context(count: usize) -> BenchContext<MemoryStore, Vec<u8>> {
        let config = BenchConfig::builder().record_count(count).build().unwrap();
        BenchContext::new(config, MemoryStore::new(), Reporter::new(Vec::new()))
    }

    #[tokio::test]
    async fn test_bench_codec_stores_payload() {
        let mut ctx = context(5);
        let (result, records) = ctx.bench_codec(&JsonCodec).await.unwrap();

        assert_eq!(result.codec, CodecName::Json);
        assert_eq!(records.len(), 5);
        assert!(result.payload_bytes > 0);

        let stored = ctx.store_mut().get("json-cache-key").await.unwrap();
        assert_eq!(stored.len(), result.payload_bytes);
    }

    #[tokio::test]
    async fn test_bench_codec_report_lines() {
        let mut ctx = context(3);
        ctx.bench_codec(&JsonCodec).await.unwrap();

        let (_, reporter) = ctx.into_parts();
        let text = String::from_utf8(reporter.into_inner()).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Json write = "));
        assert!(lines[1].starts_with("Json read = "));
        assert!(lines[2].is_empty());
    }

    #[tokio::test]
    async fn test_run_benchmarks_summary() {
        let mut ctx = context(10);
        let summary = run_benchmarks(&mut ctx).await.unwrap();

        let order: Vec<CodecName> = summary.results.iter().map(|r| r.codec).collect();
        assert_eq!(order, CodecName::ALL);
        assert!(summary.get(CodecName::Xml).is_some());
        assert_eq!(ctx.store_mut().len(), 4);
    }

    #[test]
    fn test_summary_total() {
        let summary = BenchSummary {
            results: vec![
                FormatResult {
                    codec: CodecName::Binary,
                    payload_bytes: 1,
                    write: Duration::from_millis(2),
                    read: Duration::from_millis(3),
                },
                FormatResult {
                    codec: CodecName::Json,
                    payload_bytes: 1,
                    write: Duration::from_millis(5),
                    read: Duration::from_millis(7),
                },
            ],
        };
        assert_eq!(summary.total(), Duration::from_millis(17));
        assert!(summary.get(CodecName::Proto).is_none());
    }
}
