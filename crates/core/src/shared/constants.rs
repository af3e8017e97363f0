/// Whisper "small" model, int8-quantized, from the whisper.cpp collection.
pub const WHISPER_MODEL_NAME: &str = "ggml-small-q8_0.bin";
pub const WHISPER_MODEL_URL: &str =
    "https://huggingface.co/ggerganov/whisper.cpp/resolve/main/ggml-small-q8_0.bin";

/// Whisper operates on 16kHz mono PCM.
pub const WHISPER_SAMPLE_RATE: u32 = 16000;
