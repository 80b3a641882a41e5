use clap::Parser;
use kerbtraj::{bodies, Orbit};

/// Prints derived orbital quantities for a set of classical elements about a named
/// body from the static registry.
#[derive(Parser)]
struct Args {
    /// Name of the central body, e.g. "Kerbin".
    #[arg(long, default_value = "Kerbin")]
    body: String,

    /// Periapsis radius, in metres.
    #[arg(long, default_value_t = 700_000.0)]
    rpe: f64,

    /// Eccentricity.
    #[arg(long, default_value_t = 0.0)]
    ecc: f64,

    /// Inclination, in radians.
    #[arg(long, default_value_t = 0.0)]
    inc: f64,

    /// Argument of periapsis, in radians.
    #[arg(long, default_value_t = 0.0)]
    ape: f64,

    /// Longitude of ascending node, in radians.
    #[arg(long, default_value_t = 0.0)]
    lan: f64,

    /// Time of periapsis passage, in seconds.
    #[arg(long, default_value_t = 0.0)]
    tpp: f64,
}

fn main() {
    let args = Args::parse();

    let Some(body) = bodies::by_name(&args.body) else {
        eprintln!("unknown body: {}", args.body);
        std::process::exit(1);
    };

    let orbit = Orbit::from_elements(
        body, args.rpe, args.ecc, args.inc, args.ape, args.lan, args.tpp,
    );

    println!("body: {} (mu = {:e} m^3/s^2)", body.name(), body.mu());
    println!("conic: {:?}", orbit.conic());
    println!("semi-major axis: {:e} m", orbit.semi_major_axis());
    println!("semi-latus rectum: {:e} m", orbit.semi_latus_rectum());
    println!("energy: {:e} J/kg", orbit.energy());
    println!("periapsis radius: {:e} m", orbit.periapsis_radius());
    println!("apoapsis radius: {}", fmt_finite(orbit.apoapsis_radius()));
    println!("period: {}", fmt_finite(orbit.period()));
    println!(
        "hyperbolic excess velocity: {:e} m/s",
        orbit.hyperbolic_excess_velocity()
    );
    match orbit.theta_max() {
        Some(theta) => println!("max true anomaly: {:.6} rad", theta.rad()),
        None => println!("max true anomaly: —"),
    }
}

fn fmt_finite(value: f64) -> String {
    if value.is_finite() {
        format!("{:e}", value)
    } else {
        "—".to_string()
    }
}
