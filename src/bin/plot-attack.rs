use plotters::prelude::*;
use tonesmith::generator::{AttackEnvelope, GeneratorState, SignalGenerator, SAMPLE_RATE};

const FRAME_SIZE: usize = 64;
// Plot this much of the sustain after the attack window
const TAIL_FRACTION: f32 = 0.25;

struct Args {
    attack_factor: f32,
    attack_ms: f32,
    output_path: String,
}

fn print_usage() {
    eprintln!("Usage: plot-attack <attack_factor> <attack_ms> <output.svg>");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  plot-attack 0.5 40 attack.svg");
    eprintln!("  plot-attack 0.9 10 sharp.svg");
}

fn parse_args() -> Result<Args, Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() != 4 {
        print_usage();
        return Err("Invalid number of arguments".into());
    }

    let attack_factor: f32 = args[1].parse()?;
    let attack_ms: f32 = args[2].parse()?;
    let output_path = args[3].clone();

    if !(0.0..=1.0).contains(&attack_factor) {
        return Err("Attack factor must be between 0.0 and 1.0".into());
    }
    if !(attack_ms > 0.0 && attack_ms.is_finite()) {
        return Err("Attack duration must be positive".into());
    }

    Ok(Args {
        attack_factor,
        attack_ms,
        output_path,
    })
}

fn generate_curve(args: &Args) -> Result<Vec<f32>, Box<dyn std::error::Error>> {
    let mut envelope =
        AttackEnvelope::from_duration(args.attack_ms, args.attack_factor, SAMPLE_RATE);
    if envelope.attack_samples() < 2 {
        return Err("Attack duration is shorter than two samples".into());
    }
    let tail = (envelope.attack_samples() as f32 * TAIL_FRACTION) as usize;
    let total = envelope.attack_samples() + tail;

    let mut samples = Vec::with_capacity(total + FRAME_SIZE);
    let mut frame_buffer = vec![0.0f32; FRAME_SIZE];

    loop {
        let state = envelope.process(&mut frame_buffer);
        samples.extend_from_slice(&frame_buffer);
        if state == GeneratorState::Complete && samples.len() >= total {
            break;
        }
    }

    samples.truncate(total);
    Ok(samples)
}

fn create_plot(args: &Args, samples: &[f32]) -> Result<(), Box<dyn std::error::Error>> {
    let root = SVGBackend::new(&args.output_path, (800, 400)).into_drawing_area();
    root.fill(&WHITE)?;

    let samples_per_ms = SAMPLE_RATE as f32 / 1000.0;
    let max_time = samples.len() as f32 / samples_per_ms;

    let title = format!(
        "Attack: factor={:.2}, duration={}ms",
        args.attack_factor, args.attack_ms
    );

    let mut chart = ChartBuilder::on(&root)
        .caption(&title, ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(0f32..max_time, 0f32..1.1f32)?;

    chart
        .configure_mesh()
        .x_desc("Time (ms)")
        .y_desc("Gain")
        .x_labels(10)
        .y_labels(10)
        .draw()?;

    chart.draw_series(LineSeries::new(
        samples
            .iter()
            .enumerate()
            .map(|(i, &gain)| (i as f32 / samples_per_ms, gain)),
        BLUE.stroke_width(2),
    ))?;

    // Sustain level
    let sustain = 1.0 - args.attack_factor;
    chart.draw_series(LineSeries::new(
        [(0.0f32, sustain), (max_time, sustain)],
        RED.stroke_width(1),
    ))?;

    // End of the attack window
    chart.draw_series(std::iter::once(Circle::new(
        (args.attack_ms, sustain),
        5,
        RED.filled(),
    )))?;

    root.present()?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tonesmith::logging::init();
    let args = parse_args()?;

    log::info!(
        "plotting attack factor={:.2} duration={}ms",
        args.attack_factor,
        args.attack_ms
    );

    let samples = generate_curve(&args)?;
    let peak = samples.iter().cloned().fold(0.0f32, f32::max);
    log::info!("{} samples, peak gain {:.3}", samples.len(), peak);

    create_plot(&args, &samples)?;
    log::info!("wrote {}", args.output_path);

    Ok(())
}
