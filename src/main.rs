use std::path::PathBuf;
use std::process::ExitCode;

use softraster::scenes::DEFAULT_STEPS;
use softraster::{Color, PixelBuffer, RasterConfig, RasterError, Scene, Texture};

const CHECKER_SIZE: u32 = 64;
const CHECKER_CELL: u32 = 8;

#[derive(clap::Parser, Debug)]
#[command(
    name = "softraster",
    version,
    about = "Render a rasterizer test scene to a PNG",
    long_about = None
)]
struct Arguments {
    /// Scene to draw
    #[arg(long, default_value_t = Scene::default())]
    scene: Scene,

    /// Where to write the PNG
    #[arg(short, long, default_value = "out.png", value_hint = clap::ValueHint::FilePath)]
    output: PathBuf,

    #[arg(long, default_value_t = 500)]
    width: u32,

    #[arg(long, default_value_t = 500)]
    height: u32,

    /// Number of subdivisions used by the scene
    #[arg(short = 'n', long, default_value_t = DEFAULT_STEPS)]
    steps: u32,

    /// Blend endpoint colors along the lines of the line scenes
    #[arg(long, action = clap::ArgAction::SetTrue)]
    smooth: bool,

    /// Supersample and average down
    #[arg(long, action = clap::ArgAction::SetTrue)]
    aa: bool,

    /// Subsamples per axis when anti-aliasing
    #[arg(long, default_value_t = 4)]
    aa_level: u32,

    /// Image used by the textured scene. Defaults to a checkerboard.
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    texture: Option<PathBuf>,
}

fn load_texture(path: Option<&PathBuf>) -> Result<Texture, RasterError> {
    match path {
        Some(path) => Texture::from_file(path),
        None => Ok(Texture::checkerboard(
            CHECKER_SIZE,
            CHECKER_SIZE,
            CHECKER_CELL,
            Color::WHITE,
            Color::new(0.2, 0.2, 0.6),
        )),
    }
}

fn run(arguments: &Arguments) -> Result<(), RasterError> {
    let texture = load_texture(arguments.texture.as_ref())?;
    let config = RasterConfig::default()
        .with_smooth(arguments.smooth)
        .with_antialias(arguments.aa, arguments.aa_level);

    let mut buffer = PixelBuffer::new(arguments.width, arguments.height);
    arguments
        .scene
        .render(&mut buffer, arguments.steps, &config, Some(&texture))?;
    buffer.save_png(&arguments.output)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let arguments = <Arguments as clap::Parser>::parse();

    match run(&arguments) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            log::error!("{error}");
            ExitCode::FAILURE
        }
    }
}
