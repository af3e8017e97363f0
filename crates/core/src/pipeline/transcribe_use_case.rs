use std::path::Path;

use crate::audio::domain::audio_reader::AudioReader;
use crate::shared::constants::WHISPER_SAMPLE_RATE;
use crate::transcription::domain::speech_recognizer::SpeechRecognizer;
use crate::transcription::domain::transcript::TranscriptAssembler;

pub struct TranscribeUseCase {
    reader: Box<dyn AudioReader>,
    recognizer: Box<dyn SpeechRecognizer>,
}

impl TranscribeUseCase {
    pub fn new(reader: Box<dyn AudioReader>, recognizer: Box<dyn SpeechRecognizer>) -> Self {
        Self { reader, recognizer }
    }

    /// Transcribe one audio file to a single line of text.
    pub fn run(&self, audio_path: &Path) -> Result<String, Box<dyn std::error::Error>> {
        // 1. Decode to the rate the recognizer expects
        let audio = self.reader.read_audio(audio_path, WHISPER_SAMPLE_RATE)?;
        log::info!(
            "Decoded {:.1}s of audio from {}",
            audio.duration(),
            audio_path.display()
        );

        // 2. Run inference
        let segments = self.recognizer.transcribe(&audio)?;
        log::info!("Recognized {} segments", segments.len());

        // 3. Collapse segments into the final transcript
        Ok(TranscriptAssembler::assemble(&segments))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::domain::audio_segment::AudioSegment;
    use crate::transcription::domain::segment::Segment;
    use std::path::Path;

    // ─── Stubs ───

    struct StubAudioReader {
        segment: Option<AudioSegment>,
    }

    impl AudioReader for StubAudioReader {
        fn read_audio(
            &self,
            path: &Path,
            sample_rate: u32,
        ) -> Result<AudioSegment, Box<dyn std::error::Error>> {
            match &self.segment {
                Some(s) => {
                    assert_eq!(sample_rate, WHISPER_SAMPLE_RATE);
                    Ok(s.clone())
                }
                None => Err(format!("No audio stream in {}", path.display()).into()),
            }
        }
    }

    struct StubRecognizer {
        segments: Vec<Segment>,
    }

    impl SpeechRecognizer for StubRecognizer {
        fn transcribe(
            &self,
            _: &AudioSegment,
        ) -> Result<Vec<Segment>, Box<dyn std::error::Error>> {
            Ok(self.segments.clone())
        }
    }

    struct FailingRecognizer;

    impl SpeechRecognizer for FailingRecognizer {
        fn transcribe(
            &self,
            _: &AudioSegment,
        ) -> Result<Vec<Segment>, Box<dyn std::error::Error>> {
            Err("inference failed".into())
        }
    }

    fn silent_audio() -> AudioSegment {
        AudioSegment::new(vec![0.0; 16000], 16000)
    }

    fn segment(text: &str, start: f64, end: f64) -> Segment {
        Segment {
            text: text.to_string(),
            start_time: start,
            end_time: end,
        }
    }

    #[test]
    fn test_run_assembles_trimmed_transcript() {
        let uc = TranscribeUseCase::new(
            Box::new(StubAudioReader {
                segment: Some(silent_audio()),
            }),
            Box::new(StubRecognizer {
                segments: vec![segment("  hello ", 0.0, 1.0), segment(" world  ", 1.0, 2.0)],
            }),
        );
        let text = uc.run(Path::new("in.wav")).unwrap();
        assert_eq!(text, "hello world");
    }

    #[test]
    fn test_run_no_segments_yields_empty_transcript() {
        let uc = TranscribeUseCase::new(
            Box::new(StubAudioReader {
                segment: Some(silent_audio()),
            }),
            Box::new(StubRecognizer { segments: vec![] }),
        );
        let text = uc.run(Path::new("silence.wav")).unwrap();
        assert_eq!(text, "");
    }

    #[test]
    fn test_run_propagates_reader_error() {
        let uc = TranscribeUseCase::new(
            Box::new(StubAudioReader { segment: None }),
            Box::new(StubRecognizer { segments: vec![] }),
        );
        let result = uc.run(Path::new("missing.wav"));
        assert!(result.is_err());
    }

    #[test]
    fn test_run_propagates_recognizer_error() {
        let uc = TranscribeUseCase::new(
            Box::new(StubAudioReader {
                segment: Some(silent_audio()),
            }),
            Box::new(FailingRecognizer),
        );
        let result = uc.run(Path::new("in.wav"));
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().to_string(), "inference failed");
    }
}
