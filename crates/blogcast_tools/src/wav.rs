//! PCM to WAV framing.

use blogcast_error::{SpeechError, SpeechErrorKind};
use hound::{SampleFormat, WavSpec, WavWriter};
use std::io::Cursor;
use tracing::{debug, warn};

/// Sample rate encoded in a `pcm_<rate>` output format name.
///
/// ```
/// use blogcast_tools::pcm_sample_rate;
///
/// assert_eq!(pcm_sample_rate("pcm_44100"), Some(44100));
/// assert_eq!(pcm_sample_rate("mp3_44100_128"), None);
/// ```
pub fn pcm_sample_rate(output_format: &str) -> Option<u32> {
    output_format.strip_prefix("pcm_")?.parse().ok()
}

/// Wrap little-endian 16-bit mono PCM in a WAV container.
///
/// A trailing odd byte is dropped.
pub fn pcm_to_wav(pcm: &[u8], sample_rate: u32) -> Result<Vec<u8>, SpeechError> {
    if pcm.len() % 2 != 0 {
        warn!(len = pcm.len(), "PCM stream has odd length, dropping last byte");
    }

    let spec = WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };

    let mut buffer = Cursor::new(Vec::with_capacity(pcm.len() + 44));
    {
        let mut writer = WavWriter::new(&mut buffer, spec)
            .map_err(|e| SpeechError::new(SpeechErrorKind::Encoding(e.to_string())))?;
        for chunk in pcm.chunks_exact(2) {
            writer
                .write_sample(i16::from_le_bytes([chunk[0], chunk[1]]))
                .map_err(|e| SpeechError::new(SpeechErrorKind::Encoding(e.to_string())))?;
        }
        writer
            .finalize()
            .map_err(|e| SpeechError::new(SpeechErrorKind::Encoding(e.to_string())))?;
    }

    let wav = buffer.into_inner();
    debug!(pcm_bytes = pcm.len(), wav_bytes = wav.len(), sample_rate, "Framed PCM as WAV");
    Ok(wav)
}
