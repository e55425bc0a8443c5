use tonesmith::generator::{synthesize, Oscillator, Waveform, SAMPLE_RATE};
use tonesmith::pipeline::{Song, SongRenderer, Track};
use tonesmith::SampleBuffer;

const MELODY: &str = "E5 150 DSHARP5 150 E5 150 DSHARP5 150 E5 150 B4 150 D5 150 C5 150 A4 450 pause 150";
const BASS: &str = "A2 600 E3 600 A3 450 pause 150";

fn describe(name: &str, buffer: &SampleBuffer) {
    let peak = buffer
        .samples()
        .iter()
        .map(|s| s.unsigned_abs())
        .max()
        .unwrap_or(0);
    let silent = buffer.samples().iter().filter(|&&s| s == 0).count();

    println!(
        "{:<8} {:>7} samples  {:>6.3}s  peak {:>5}  zeros {:>6}",
        name,
        buffer.sample_count(),
        buffer.duration().as_secs_f64(),
        peak,
        silent
    );
}

fn main() {
    tonesmith::logging::init();

    println!("Tonesmith Synthesizer");
    println!("=====================");
    println!("  Sample rate: {} Hz, mono, 16-bit", SAMPLE_RATE);
    println!();

    let song = Song {
        tempo: 100.0,
        tracks: vec![
            Track::new(Oscillator::new(Waveform::Square, 0.4, 30.0), MELODY),
            Track::new(Oscillator::new(Waveform::Sine, 0.2, 60.0), BASS),
        ],
    };

    for (i, track) in song.tracks.iter().enumerate() {
        match synthesize(track) {
            Ok(buffer) => describe(&format!("track {}", i), &buffer),
            Err(e) => {
                eprintln!("track {} failed: {}", i, e);
                std::process::exit(1);
            }
        }
    }

    match SongRenderer::default().render_mix(&song) {
        Ok(mix) => describe("mix", &mix),
        Err(e) => {
            eprintln!("mixdown failed: {}", e);
            std::process::exit(1);
        }
    }
}
