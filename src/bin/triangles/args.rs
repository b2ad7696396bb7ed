use clap::Parser;

#[derive(Debug, Parser)]
#[command(about = "Click to place points, every three of them make a triangle")]
pub struct Args {
    /// Initial window width in pixels
    #[arg(long, default_value_t = 640)]
    pub width: u32,
    /// Initial window height in pixels
    #[arg(long, default_value_t = 480)]
    pub height: u32,
    /// Window title
    #[arg(short, long, default_value = "Triangles")]
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["triangles"]).unwrap();

        assert_eq!((args.width, args.height), (640, 480));
        assert_eq!(args.title, "Triangles");
    }

    #[test]
    fn size_override() {
        let args =
            Args::try_parse_from(["triangles", "--width", "1024", "--height", "768"]).unwrap();

        assert_eq!((args.width, args.height), (1024, 768));
    }
}
