use std::path::PathBuf;

use cellar::{SceneOptions, WindowSize};
use miette::miette;

const USAGE: &str = "\
Usage: cellar [options]

Options:
  --seed N            random seed (default 677)
  --size WxH          window size in pixels (default 1600x900)
  --padding F         fraction of the window left empty on each side (default 0.15)
  --thickness N       rack and shelf thickness in pixels (default 5)
  --no-screen-check   do not compare the window with the screen resolution
  --out FILE          PNG file to write (default cellar.png)
  -h, --help          show this message";

#[derive(Debug)]
struct Args {
    options: SceneOptions,
    out: PathBuf,
}

fn main() -> miette::Result<()> {
    #[cfg(feature = "tracing")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let Some(args) = parse_args(std::env::args().skip(1))? else {
        println!("{USAGE}");
        return Ok(());
    };

    let scene = cellar::generate(&args.options)?;
    cellar::rasterize(&scene)?.save_png(&args.out)?;
    eprintln!(
        "wrote {} (seed {}, {} racks, {} items)",
        args.out.display(),
        args.options.seed,
        scene.racks().len(),
        scene.items().count()
    );
    Ok(())
}

/// `Ok(None)` means help was requested.
fn parse_args(mut args: impl Iterator<Item = String>) -> miette::Result<Option<Args>> {
    let mut options = SceneOptions::default();
    let mut out = PathBuf::from("cellar.png");

    while let Some(arg) = args.next() {
        let mut value = || {
            args.next()
                .ok_or_else(|| miette!("{arg} expects a value\n\n{USAGE}"))
        };
        match arg.as_str() {
            "-h" | "--help" => return Ok(None),
            "--seed" => {
                let v = value()?;
                options.seed = v
                    .parse()
                    .map_err(|_| miette!("--seed expects a non-negative integer, got {v:?}"))?;
            }
            "--size" => options.window = value()?.parse::<WindowSize>()?,
            "--padding" => {
                let v = value()?;
                options.padding = v
                    .parse()
                    .map_err(|_| miette!("--padding expects a number, got {v:?}"))?;
            }
            "--thickness" => {
                let v = value()?;
                options.rack_thickness = v
                    .parse()
                    .map_err(|_| miette!("--thickness expects a pixel count, got {v:?}"))?;
            }
            "--no-screen-check" => options.check_screen = false,
            "--out" => out = PathBuf::from(value()?),
            other => return Err(miette!("unknown argument {other:?}\n\n{USAGE}")),
        }
    }

    Ok(Some(Args { options, out }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> miette::Result<Option<Args>> {
        parse_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn defaults_without_arguments() {
        let args = parse(&[]).unwrap().unwrap();
        assert_eq!(args.options, SceneOptions::default());
        assert_eq!(args.out, PathBuf::from("cellar.png"));
    }

    #[test]
    fn all_flags() {
        let args = parse(&[
            "--seed", "42", "--size", "800x600", "--padding", "0.1", "--thickness", "3",
            "--no-screen-check", "--out", "x.png",
        ])
        .unwrap()
        .unwrap();
        assert_eq!(args.options.seed, 42);
        assert_eq!(args.options.window, WindowSize { width: 800, height: 600 });
        assert_eq!(args.options.padding, 0.1);
        assert_eq!(args.options.rack_thickness, 3);
        assert!(!args.options.check_screen);
        assert_eq!(args.out, PathBuf::from("x.png"));
    }

    #[test]
    fn help_and_errors() {
        assert!(parse(&["--help"]).unwrap().is_none());
        assert!(parse(&["--seed"]).is_err());
        assert!(parse(&["--seed", "-1"]).is_err());
        assert!(parse(&["--size", "800"]).is_err());
        assert!(parse(&["--bogus"]).is_err());
    }
}
