//! CLI tool for rendering a song description to a WAV file
//!
//! Usage: render <song.json> [output.wav]
//!
//! If output is not specified, generates <song>.wav

use std::env;
use std::process;

use tonesmith::pipeline::{RenderConfig, Song, SongRenderer};
use tonesmith::wav::WavFileSink;

const USAGE: &str = "Usage: render <song.json> [output.wav]

Render all tracks of a song description and mix them into one WAV file.

Arguments:
  song.json     Path to the song description
  output.wav    Output WAV file path (optional, defaults to <song>.wav)

Environment:
  TONESMITH_LOG        Log level (error, warn, info, debug, trace)
  TONESMITH_MIX_GAIN   Gain applied to each track when mixing (default 1.0)

Examples:
  render song.json
  render song.json output.wav
";

fn output_path(input_path: &str, explicit: Option<&String>) -> String {
    match explicit {
        Some(path) => path.clone(),
        None => match input_path.strip_suffix(".json") {
            Some(stem) => format!("{}.wav", stem),
            None => format!("{}.wav", input_path),
        },
    }
}

fn render_config() -> RenderConfig {
    let mut config = RenderConfig::default();
    if let Ok(value) = env::var("TONESMITH_MIX_GAIN") {
        match value.parse::<f32>() {
            Ok(gain) if gain.is_finite() && gain >= 0.0 => config.mix_gain = gain,
            _ => log::warn!("ignoring invalid TONESMITH_MIX_GAIN `{}`", value),
        }
    }
    config
}

fn main() {
    tonesmith::logging::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("{}", USAGE);
        process::exit(1);
    }

    let input_path = &args[1];
    let output_path = output_path(input_path, args.get(2));

    let song = match Song::load(input_path) {
        Ok(song) => song,
        Err(e) => {
            log::error!("cannot load {}: {}", input_path, e);
            process::exit(1);
        }
    };

    log::info!(
        "loaded {} tracks from {} ({} bpm)",
        song.tracks.len(),
        input_path,
        song.tempo
    );

    let renderer = SongRenderer::new(render_config());
    let buffer = match renderer.render_mix(&song) {
        Ok(buffer) => buffer,
        Err(e) => {
            log::error!("synthesis failed: {}", e);
            process::exit(1);
        }
    };

    let mut sink = WavFileSink::new(&output_path);
    if let Err(e) = buffer.load_into(&mut sink) {
        log::error!("error writing {}: {}", output_path, e);
        process::exit(1);
    }

    log::info!(
        "wrote {} ({} samples, {:.2}s at {} Hz)",
        output_path,
        buffer.sample_count(),
        buffer.duration().as_secs_f64(),
        buffer.sample_rate()
    );
}
