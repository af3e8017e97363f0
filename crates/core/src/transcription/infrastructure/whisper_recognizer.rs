use std::path::{Path, PathBuf};

use whisper_rs::{FullParams, SamplingStrategy, WhisperContext, WhisperContextParameters};

use crate::audio::domain::audio_segment::AudioSegment;
use crate::transcription::domain::segment::Segment;
use crate::transcription::domain::speech_recognizer::SpeechRecognizer;

/// Speech recognizer using whisper.cpp via whisper-rs.
///
/// Loads a quantized Whisper model and runs greedy CPU inference,
/// yielding segment-level text with timestamps.
#[derive(Debug)]
pub struct WhisperRecognizer {
    model_path: PathBuf,
}

impl WhisperRecognizer {
    pub fn new(model_path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        if !model_path.exists() {
            return Err(format!("Whisper model not found at: {}", model_path.display()).into());
        }
        Ok(Self {
            model_path: model_path.to_path_buf(),
        })
    }

    pub fn model_path(&self) -> &Path {
        &self.model_path
    }
}

impl SpeechRecognizer for WhisperRecognizer {
    fn transcribe(&self, audio: &AudioSegment) -> Result<Vec<Segment>, Box<dyn std::error::Error>> {
        let mut ctx_params = WhisperContextParameters::default();
        // Inference stays on the CPU; the quantized model keeps it viable.
        ctx_params.use_gpu(false);

        let ctx = WhisperContext::new_with_params(
            self.model_path.to_str().ok_or("Invalid model path")?,
            ctx_params,
        )
        .map_err(|e| format!("Failed to load Whisper model: {e}"))?;

        let mut state = ctx
            .create_state()
            .map_err(|e| format!("Failed to create Whisper state: {e}"))?;

        let mut params = FullParams::new(SamplingStrategy::Greedy { best_of: 0 });
        params.set_language(Some("auto"));
        params.set_translate(false);
        params.set_print_special(false);
        params.set_print_progress(false);
        params.set_print_realtime(false);
        params.set_print_timestamps(false);
        params.set_n_threads(num_cpus().min(4) as i32);

        state
            .full(params, audio.samples())
            .map_err(|e| format!("Whisper inference failed: {e}"))?;

        let mut segments = Vec::new();
        let num_segments = state.full_n_segments();

        for seg_idx in 0..num_segments {
            let segment = match state.get_segment(seg_idx) {
                Some(s) => s,
                None => continue,
            };

            let text = match segment.to_str() {
                Ok(t) => t,
                Err(_) => continue,
            };

            // Segment timestamps are in centiseconds (10ms units)
            segments.push(Segment {
                text: text.to_string(),
                start_time: segment.start_timestamp() as f64 / 100.0,
                end_time: segment.end_timestamp() as f64 / 100.0,
            });
        }

        Ok(segments)
    }
}

fn num_cpus() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}
