use std::path::Path;

use crate::audio::domain::audio_reader::AudioReader;
use crate::audio::domain::audio_segment::AudioSegment;

/// Decodes audio files using ffmpeg-next.
///
/// Accepts anything ffmpeg can demux and decode, resampling to the
/// requested rate and downmixing to mono.
pub struct FfmpegAudioReader;

impl AudioReader for FfmpegAudioReader {
    fn read_audio(
        &self,
        path: &Path,
        target_sample_rate: u32,
    ) -> Result<AudioSegment, Box<dyn std::error::Error>> {
        ffmpeg_next::init()?;

        let mut ictx = ffmpeg_next::format::input(path)?;

        let audio_stream = ictx
            .streams()
            .best(ffmpeg_next::media::Type::Audio)
            .ok_or_else(|| format!("No audio stream in {}", path.display()))?;

        let audio_stream_index = audio_stream.index();

        let codec_ctx =
            ffmpeg_next::codec::context::Context::from_parameters(audio_stream.parameters())?;
        let mut decoder = codec_ctx.decoder().audio()?;

        let mut resampler = ffmpeg_next::software::resampling::Context::get(
            decoder.format(),
            decoder.channel_layout(),
            decoder.rate(),
            ffmpeg_next::format::Sample::F32(ffmpeg_next::format::sample::Type::Planar),
            ffmpeg_next::ChannelLayout::MONO,
            target_sample_rate,
        )?;

        let mut samples: Vec<f32> = Vec::new();
        let mut decoded = ffmpeg_next::util::frame::audio::Audio::empty();
        let mut resampled = ffmpeg_next::util::frame::audio::Audio::empty();

        for (stream, packet) in ictx.packets() {
            if stream.index() != audio_stream_index {
                continue;
            }

            decoder.send_packet(&packet)?;

            while decoder.receive_frame(&mut decoded).is_ok() {
                resampler.run(&decoded, &mut resampled)?;
                collect_mono_f32(&resampled, &mut samples);
            }
        }

        // Drain whatever the decoder and resampler still hold
        decoder.send_eof()?;
        while decoder.receive_frame(&mut decoded).is_ok() {
            resampler.run(&decoded, &mut resampled)?;
            collect_mono_f32(&resampled, &mut samples);
        }

        if let Ok(Some(delay)) = resampler.flush(&mut resampled) {
            if delay.output > 0 {
                collect_mono_f32(&resampled, &mut samples);
            }
        }

        log::debug!(
            "Decoded {:.1}s of audio from {}",
            samples.len() as f64 / target_sample_rate as f64,
            path.display()
        );

        Ok(AudioSegment::new(samples, target_sample_rate))
    }
}

/// Append the f32 samples of a planar mono frame.
fn collect_mono_f32(frame: &ffmpeg_next::util::frame::audio::Audio, out: &mut Vec<f32>) {
    let num_samples = frame.samples();
    if num_samples == 0 {
        return;
    }
    let data = frame.data(0);
    let floats = unsafe { std::slice::from_raw_parts(data.as_ptr() as *const f32, num_samples) };
    out.extend_from_slice(floats);
}
