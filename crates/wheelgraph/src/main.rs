use clap::Parser;
use mecanum::Angle;
use relm4::prelude::*;
use std::path::PathBuf;
use wheelgraph::config;
use wheelgraph::export;
use wheelgraph::gui::app::AppModel;
use wheelgraph::gui::diagram::State;
use wheelgraph::sys::runtime;

#[derive(Parser, Debug)]
#[command(name = "wheelgraph", version, about, long_about = None)]
struct Args {
    /// Render one frame to this PNG file instead of opening a window
    #[arg(long)]
    export: Option<PathBuf>,

    /// Phase angle for --export, in radians (clamped to [0, 2π])
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    angle: f64,

    /// Extra rotation offset for --export
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    spin: f64,

    /// Write the default config file if none exists and print its path
    #[arg(long)]
    init_config: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.init_config {
        let path = config::write_default_config()?;
        println!("{}", path.display());
        return Ok(());
    }

    let config = config::load_or_default();

    if let Some(path) = args.export {
        return export::render_png(&path, &config.layout, Angle::clamped(args.angle), args.spin);
    }

    let state = State::new(&config);
    let (tx, rx) = async_channel::bounded(32);

    // Start Background Services
    runtime::start_background_services(tx);

    // GTK must not see our own flags
    let app = RelmApp::new("org.mecanum.wheelgraph").with_args(Vec::new());
    app.run::<AppModel>((state, rx));
    Ok(())
}
