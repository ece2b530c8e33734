use std::fs::File;
use std::path::Path;

use rubato::{
    Resampler, SincFixedIn, SincInterpolationParameters, SincInterpolationType, WindowFunction,
};
use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::{Decoder, DecoderOptions};
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::{FormatOptions, FormatReader};
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use crate::application::ports::AudioConversionError;

pub const TARGET_SAMPLE_RATE: u32 = 16_000;

const RESAMPLE_CHUNK_FRAMES: usize = 1024;

/// Mono samples at the rate they were recorded.
struct MonoTrack {
    samples: Vec<f32>,
    sample_rate: u32,
}

/// Decodes any container symphonia understands into 16kHz mono PCM.
pub fn decode_file_to_pcm(path: &Path) -> Result<Vec<f32>, AudioConversionError> {
    let track = read_mono_track(path)?;
    let source_rate = track.sample_rate;

    let samples = if source_rate == TARGET_SAMPLE_RATE {
        track.samples
    } else {
        resample(&track.samples, source_rate, TARGET_SAMPLE_RATE)?
    };

    tracing::debug!(
        samples = samples.len(),
        source_rate,
        duration_secs = samples.len() as f32 / TARGET_SAMPLE_RATE as f32,
        "Audio decoded to 16kHz mono PCM"
    );

    Ok(samples)
}

fn open_reader(path: &Path) -> Result<Box<dyn FormatReader>, AudioConversionError> {
    let file = File::open(path)
        .map_err(|e| AudioConversionError::DecodingFailed(format!("open: {}", e)))?;
    let mss = MediaSourceStream::new(Box::new(file), Default::default());

    let mut hint = Hint::new();
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        hint.with_extension(ext);
    }

    symphonia::default::get_probe()
        .format(
            &hint,
            mss,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )
        .map(|probed| probed.format)
        .map_err(|e| AudioConversionError::UnsupportedFormat(format!("probe: {}", e)))
}

fn read_mono_track(path: &Path) -> Result<MonoTrack, AudioConversionError> {
    let mut reader = open_reader(path)?;

    let track = reader
        .default_track()
        .ok_or_else(|| AudioConversionError::DecodingFailed("no audio track found".into()))?;
    let track_id = track.id;
    let sample_rate = track
        .codec_params
        .sample_rate
        .ok_or_else(|| AudioConversionError::DecodingFailed("unknown sample rate".into()))?;
    let mut decoder: Box<dyn Decoder> = symphonia::default::get_codecs()
        .make(&track.codec_params, &DecoderOptions::default())
        .map_err(|e| AudioConversionError::UnsupportedFormat(format!("codec: {}", e)))?;

    let mut samples = Vec::new();
    let mut skipped_frames = 0usize;

    loop {
        let packet = match reader.next_packet() {
            Ok(packet) => packet,
            Err(SymphoniaError::IoError(ref e))
                if e.kind() == std::io::ErrorKind::UnexpectedEof =>
            {
                break;
            }
            Err(e) => return Err(AudioConversionError::DecodingFailed(format!("packet: {}", e))),
        };
        if packet.track_id() != track_id {
            continue;
        }

        let decoded = match decoder.decode(&packet) {
            Ok(decoded) => decoded,
            Err(SymphoniaError::DecodeError(e)) => {
                skipped_frames += 1;
                tracing::warn!(error = %e, "Skipping corrupt audio frame");
                continue;
            }
            Err(e) => return Err(AudioConversionError::DecodingFailed(format!("decode: {}", e))),
        };
        if decoded.frames() == 0 {
            continue;
        }

        let spec = *decoded.spec();
        let mut buffer = SampleBuffer::<f32>::new(decoded.capacity() as u64, spec);
        buffer.copy_interleaved_ref(decoded);
        downmix_into(&mut samples, buffer.samples(), spec.channels.count());
    }

    if samples.is_empty() {
        return Err(AudioConversionError::DecodingFailed(format!(
            "no audio samples decoded ({} corrupt frames skipped)",
            skipped_frames
        )));
    }

    Ok(MonoTrack {
        samples,
        sample_rate,
    })
}

/// Averages interleaved frames down to one channel.
fn downmix_into(out: &mut Vec<f32>, interleaved: &[f32], channels: usize) {
    match channels {
        0 | 1 => out.extend_from_slice(interleaved),
        n => out.extend(
            interleaved
                .chunks_exact(n)
                .map(|frame| frame.iter().sum::<f32>() / n as f32),
        ),
    }
}

fn resample(
    samples: &[f32],
    from_rate: u32,
    to_rate: u32,
) -> Result<Vec<f32>, AudioConversionError> {
    let params = SincInterpolationParameters {
        sinc_len: 256,
        f_cutoff: 0.95,
        interpolation: SincInterpolationType::Linear,
        oversampling_factor: 256,
        window: WindowFunction::BlackmanHarris2,
    };
    let ratio = to_rate as f64 / from_rate as f64;
    let resample_error = |e: &dyn std::fmt::Display| {
        AudioConversionError::DecodingFailed(format!("resample {}->{}: {}", from_rate, to_rate, e))
    };

    let mut resampler = SincFixedIn::<f32>::new(ratio, 2.0, params, RESAMPLE_CHUNK_FRAMES, 1)
        .map_err(|e| resample_error(&e))?;

    let expected_len = (samples.len() as f64 * ratio).round() as usize;
    let delay = resampler.output_delay();
    let mut output = Vec::with_capacity(expected_len + delay + RESAMPLE_CHUNK_FRAMES);

    let mut chunks = samples.chunks_exact(RESAMPLE_CHUNK_FRAMES);
    for chunk in chunks.by_ref() {
        let resampled = resampler
            .process(&[chunk], None)
            .map_err(|e| resample_error(&e))?;
        output.extend_from_slice(&resampled[0]);
    }

    let tail = chunks.remainder();
    if !tail.is_empty() {
        let resampled = resampler
            .process_partial(Some(&[tail][..]), None)
            .map_err(|e| resample_error(&e))?;
        output.extend_from_slice(&resampled[0]);
    }

    // Flush the filter until the delayed samples have come out.
    while output.len() < expected_len + delay {
        let resampled = resampler
            .process_partial(None::<&[&[f32]]>, None)
            .map_err(|e| resample_error(&e))?;
        if resampled[0].is_empty() {
            break;
        }
        output.extend_from_slice(&resampled[0]);
    }

    Ok(output.into_iter().skip(delay).take(expected_len).collect())
}
