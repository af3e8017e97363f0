use std::env;
use std::path::{Path, PathBuf};
use std::process;

use murmur_core::audio::infrastructure::ffmpeg_audio_reader::FfmpegAudioReader;
use murmur_core::pipeline::transcribe_use_case::TranscribeUseCase;
use murmur_core::shared::constants::{WHISPER_MODEL_NAME, WHISPER_MODEL_URL};
use murmur_core::shared::model_resolver;
use murmur_core::transcription::infrastructure::whisper_recognizer::WhisperRecognizer;

fn main() {
    env_logger::init();

    let mut args = env::args().skip(1);
    let audio_path = match (args.next(), args.next()) {
        (Some(path), None) => PathBuf::from(path),
        _ => {
            eprintln!("Usage: murmur <audio_path>");
            process::exit(1);
        }
    };

    if let Err(e) = run(&audio_path) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(audio_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    log::info!("Resolving model: {WHISPER_MODEL_NAME}");
    let model_path = model_resolver::ensure_model(
        WHISPER_MODEL_NAME,
        WHISPER_MODEL_URL,
        Some(Box::new(download_progress)),
    )?;
    eprintln!();

    let recognizer = WhisperRecognizer::new(&model_path)?;
    let use_case = TranscribeUseCase::new(Box::new(FfmpegAudioReader), Box::new(recognizer));

    let transcript = use_case.run(audio_path)?;
    println!("{transcript}");
    Ok(())
}

fn download_progress(downloaded: u64, total: u64) {
    if total > 0 {
        let pct = (downloaded as f64 / total as f64 * 100.0) as u32;
        eprint!("\rDownloading speech model... {pct}%");
    } else {
        eprint!("\rDownloading speech model... {downloaded} bytes");
    }
}
