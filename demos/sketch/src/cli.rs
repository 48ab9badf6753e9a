use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "sketch")]
#[command(about = "Headless frame driver casting a ray fan against text labels")]
pub struct Args {
    /// key=value settings file, flags given here take precedence
    #[arg(short, long)]
    pub settings: Option<String>,

    #[arg(long, help = "Number of frames to simulate")]
    pub frames: Option<usize>,

    #[arg(long, help = "Seed of the pointer wander noise")]
    pub seed: Option<u32>,

    #[arg(long, default_value = "1280", help = "Canvas width")]
    pub width: f64,

    #[arg(long, default_value = "720", help = "Canvas height")]
    pub height: f64,

    #[arg(long, help = "Write the last hovered frame as JSON to this path")]
    pub dump: Option<String>,

    #[arg(long, help = "Test all four label edges instead of the diagonal")]
    pub edges: bool,

    #[arg(short, long, help = "Enable debug logging")]
    pub verbose: bool,

    #[arg(long, help = "Enable trace logging (per frame output)")]
    pub trace: bool,
}
