//! PCM decoding and the playback seam
//!
//! The briefing service returns base64-encoded raw PCM: 24 kHz, mono,
//! 16-bit little-endian. Decoding normalizes each frame to an `f32` in
//! [-1, 1]. Actual output goes through the [`AudioSink`] trait so the
//! core never talks to an audio device directly.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{ensure, Context, Result};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

/// Sample rate of synthesized briefings
pub const SAMPLE_RATE_HZ: u32 = 24_000;

/// Decode a base64 PCM payload into normalized f32 samples
pub fn decode_pcm16(data: &str) -> Result<Vec<f32>> {
    let bytes = BASE64
        .decode(data)
        .context("audio payload is not valid base64")?;
    ensure!(
        bytes.len() % 2 == 0,
        "PCM payload has odd byte length ({})",
        bytes.len()
    );
    Ok(bytes
        .chunks_exact(2)
        .map(|frame| i16::from_le_bytes([frame[0], frame[1]]) as f32 / 32768.0)
        .collect())
}

/// Output device boundary
pub trait AudioSink: Send + Sync {
    fn play(&self, samples: &[f32], sample_rate: u32) -> Result<()>;
}

/// Sink that hands the audio to an external player via a file
///
/// Frames are written back out as s16le, so the result plays with e.g.
/// `ffplay -f s16le -ar 24000 -i briefing.pcm`.
pub struct PcmFileSink {
    path: PathBuf,
}

impl PcmFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl AudioSink for PcmFileSink {
    fn play(&self, samples: &[f32], _sample_rate: u32) -> Result<()> {
        let mut file = std::fs::File::create(&self.path)
            .with_context(|| format!("could not create {}", self.path.display()))?;
        for sample in samples {
            let quantized = (sample.clamp(-1.0, 1.0) * 32767.0).round() as i16;
            file.write_all(&quantized.to_le_bytes())?;
        }
        file.flush()?;
        Ok(())
    }
}
