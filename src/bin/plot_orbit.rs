use clap::Parser;
use plotters::prelude::*;

use kerbtraj::angle::Angle;
use kerbtraj::{bodies, Orbit};

/// Renders a PNG plot of an orbit's polyline, sampled via `Orbit::sample`.
#[derive(Parser)]
struct Args {
    #[arg(long, default_value = "Kerbin")]
    body: String,

    #[arg(long, default_value_t = 700_000.0)]
    rpe: f64,

    #[arg(long, default_value_t = 0.2)]
    ecc: f64,

    /// Sampling step, in radians.
    #[arg(long, default_value_t = 0.05)]
    step: f64,

    #[arg(long, default_value = "plots/orbit.png")]
    out: String,
}

fn main() {
    let args = Args::parse();

    let Some(body) = bodies::by_name(&args.body) else {
        eprintln!("unknown body: {}", args.body);
        std::process::exit(1);
    };

    let orbit = Orbit::from_elements(body, args.rpe, args.ecc, 0.0, 0.0, 0.0, 0.0);
    let (points, _anomalies): (Vec<_>, Vec<Angle>) = orbit.sample(None, None, args.step);

    let scale = points
        .iter()
        .map(|p| p.x.abs().max(p.y.abs()))
        .fold(body.radius(), f64::max);

    let root = BitMapBackend::new(&args.out, (640, 640)).into_drawing_area();
    root.fill(&WHITE).unwrap();

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("{} orbit (rpe={:.0} m, ecc={:.2})", body.name(), args.rpe, args.ecc),
            ("sans-serif", 20).into_font(),
        )
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(30)
        .build_cartesian_2d(-scale..scale, -scale..scale)
        .unwrap();

    chart.configure_mesh().draw().unwrap();

    chart
        .draw_series(LineSeries::new(
            points.iter().map(|p| (p.x, p.y)),
            &RED,
        ))
        .unwrap();

    chart
        .draw_series(std::iter::once(Circle::new((0.0, 0.0), 4, BLUE.filled())))
        .unwrap();
}
