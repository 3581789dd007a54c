//! `sine-gen`: writes a raw, headerless sine signal to a file or stdout.
//!
//! ```text
//! sine-gen --frequency 1000 --duration 0.5 --format pcm32 --output tone.raw
//! sine-gen --config tone.json > tone.raw
//! ```

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use sine_samples::audio_math::duration_from_secs;
use sine_samples::{SampleFormat, SignalConfig, SineWave};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

const LOG_LEVEL: &str = "info";

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Frequency in Hz
    #[arg(short, long, default_value_t = 440.0)]
    frequency: f64,

    /// Duration in seconds
    #[arg(short, long, default_value_t = 1.0)]
    duration: f64,

    /// Peak amplitude
    #[arg(short, long, default_value_t = 1.0)]
    amplitude: f64,

    /// Sampling rate in Hz
    #[arg(short, long, default_value_t = 44_100.0)]
    sampling_rate: f64,

    /// Output sample format (pcm16, pcm32, float64)
    #[arg(long, default_value = "pcm16")]
    format: SampleFormat,

    /// Output path, `-` for stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// JSON file holding a full signal config; replaces the signal flags
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl Cli {
    fn signal_config(&self) -> Result<SignalConfig> {
        if let Some(path) = &self.config {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            let config: SignalConfig = serde_json::from_str(&text)
                .with_context(|| format!("invalid config {}", path.display()))?;
            config
                .validate()
                .with_context(|| format!("invalid config {}", path.display()))?;
            return Ok(config);
        }

        let duration = duration_from_secs(self.duration)?;
        let config = SignalConfig::builder(self.frequency, duration)
            .amplitude(self.amplitude)
            .sampling_rate(self.sampling_rate)
            .format(self.format)
            .build()?;
        Ok(config)
    }

    fn sink(&self) -> Result<Box<dyn Write>> {
        match &self.output {
            Some(path) if path.as_os_str() != "-" => {
                let file = File::create(path)
                    .with_context(|| format!("failed to create {}", path.display()))?;
                Ok(Box::new(BufWriter::new(file)))
            }
            _ => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
        }
    }
}

fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(LOG_LEVEL));

    fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_level(true)
        .compact()
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let config = cli.signal_config()?;
    let wave = SineWave::new(config)?;
    info!(
        frequency = config.frequency(),
        sampling_rate = config.sampling_rate(),
        format = %config.format(),
        samples = wave.sample_count(),
        "generating signal"
    );

    let mut sink = cli.sink()?;
    let written = wave
        .write_to(&mut sink)
        .context("failed to write samples")?;
    sink.flush().context("failed to flush output")?;

    info!(bytes_written = written, "done");
    Ok(())
}
