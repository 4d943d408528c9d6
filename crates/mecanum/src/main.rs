use clap::{Parser, Subcommand};
use mecanum::phase::{self, PhaseSample, Series};
use mecanum::rollers::{self, Footprint};
use mecanum::scene::{Frame, Layout, ReferencePlot, Theme};
use mecanum::selector::Angle;
use mecanum::surface::{DrawCommand, Recording};

#[derive(Parser, Debug)]
#[command(name = "mecanum", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Print the roller segments for a wheel footprint
    Rollers {
        #[arg(long, default_value_t = 36.0)]
        width: f64,
        #[arg(long, default_value_t = 96.0)]
        height: f64,
        #[arg(long, default_value_t = 27.0)]
        spacing: f64,
        /// Rotation offset; any sign or magnitude
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        offset: f64,
    },
    /// Print reference plot samples as `x y1 y2` in pixels
    Curve {
        #[arg(long, default_value_t = 640)]
        samples: usize,
        #[arg(long, default_value_t = 640.0)]
        width: f64,
        #[arg(long, default_value_t = 400.0)]
        height: f64,
    },
    /// Print the grid labels for one full turn
    Labels {
        /// Grid lines per π
        #[arg(long, default_value_t = 4)]
        divisions: u32,
        /// Use `pi` instead of `π`
        #[arg(long)]
        ascii: bool,
    },
    /// Dump the draw commands of one frame with the default layout
    Frame {
        /// Phase angle in radians, clamped to [0, 2π]
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        angle: f64,
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        spin: f64,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Rollers {
            width,
            height,
            spacing,
            offset,
        } => {
            let footprint = Footprint::new(width, height)?;
            for seg in rollers::generate(footprint, spacing, offset)? {
                println!("{:.3} {:.3} {:.3} {:.3}", seg.x0, seg.y0, seg.x1, seg.y1);
            }
        }
        Commands::Curve {
            samples,
            width,
            height,
        } => {
            println!("# x {} {}", Series::Lagging, Series::Leading);
            for s in phase::sample_curve(samples, width, height) {
                println!("{:.3} {:.3} {:.3}", s.x, s.y1, s.y2);
            }
        }
        Commands::Labels { divisions, ascii } => {
            for index in 0..2 * divisions {
                if let Some(label) = phase::grid_label(index, divisions)? {
                    let text = if ascii {
                        label.ascii()
                    } else {
                        label.to_string()
                    };
                    println!("{index} {text}");
                }
            }
        }
        Commands::Frame { angle, spin } => print_frame(Angle::clamped(angle), spin)?,
    }
    Ok(())
}

fn print_frame(angle: Angle, spin: f64) -> anyhow::Result<()> {
    let layout = Layout::default();
    let theme = Theme::default();

    let mut plot = Recording::new();
    ReferencePlot::new(&layout)?.draw(&mut plot, &theme)?;

    let frame = Frame::compute(&layout, angle, spin)?;
    let PhaseSample { y1, y2 } = frame.phase;
    println!(
        "# angle {:.4} marker {:.2} offset {:.2} y1 {y1:.4} y2 {y2:.4}",
        angle.radians(),
        frame.marker_x,
        frame.rotation_offset
    );

    let mut canvas = Recording::new();
    frame.draw(&mut canvas, &layout, &theme, &plot)?;
    for command in &canvas.commands {
        match command {
            DrawCommand::Image { at, commands } => {
                println!("image at ({:.1}, {:.1}) with {commands} commands", at.x, at.y)
            }
            other => println!("{other:?}"),
        }
    }
    Ok(())
}
