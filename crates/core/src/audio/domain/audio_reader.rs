use std::path::Path;

use crate::audio::domain::audio_segment::AudioSegment;

/// Domain interface for decoding an audio file to PCM.
pub trait AudioReader: Send {
    /// Decode the file's audio track to mono PCM at the given sample rate.
    /// A file with no decodable audio stream is an error.
    fn read_audio(
        &self,
        path: &Path,
        target_sample_rate: u32,
    ) -> Result<AudioSegment, Box<dyn std::error::Error>>;
}
