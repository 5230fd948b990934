use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// OBJ files to load into the scene, in selection order.
    #[arg(required = true)]
    pub models: Vec<String>,

    /// Translation speed in units per second.
    #[arg(long, default_value_t = 2.0)]
    pub translation_speed: f32,

    /// Rotation speed in degrees per second.
    #[arg(long, default_value_t = 50.0)]
    pub rotation_speed: f32,

    /// Scale speed in units per second.
    #[arg(long, default_value_t = 1.0)]
    pub scale_speed: f32,

    /// Initial x distance between neighboring objects.
    #[arg(long, default_value_t = 3.0)]
    pub spacing: f32,
}
