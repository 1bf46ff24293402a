use camino::{Utf8Path, Utf8PathBuf};
use cellar::{SceneOptions, WindowSize};
use rayon::prelude::*;
use std::fs;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: cargo xtask <command>");
        eprintln!("Commands:");
        eprintln!("  gallery [--from N] [--count N] [--size WxH] [--out DIR]");
        eprintln!("                  Render a range of seeds to PNG with an HTML index");
        std::process::exit(1);
    }

    match args[1].as_str() {
        "gallery" => gallery(&args[2..]),
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            std::process::exit(1);
        }
    }
}

struct GalleryArgs {
    from: u64,
    count: u64,
    window: WindowSize,
    out: Utf8PathBuf,
}

fn parse_gallery_args(args: &[String]) -> GalleryArgs {
    let manifest_dir = Utf8Path::new(env!("CARGO_MANIFEST_DIR"));
    let mut parsed = GalleryArgs {
        from: 0,
        count: 16,
        window: WindowSize { width: 800, height: 450 },
        out: manifest_dir.join("../target/gallery"),
    };

    let mut iter = args.iter();
    while let Some(flag) = iter.next() {
        let value = iter
            .next()
            .unwrap_or_else(|| panic!("{flag} expects a value"));
        match flag.as_str() {
            "--from" => parsed.from = value.parse().expect("--from expects a seed"),
            "--count" => parsed.count = value.parse().expect("--count expects a number"),
            "--size" => {
                parsed.window = value
                    .parse()
                    .unwrap_or_else(|e| panic!("--size: {e}"))
            }
            "--out" => parsed.out = Utf8PathBuf::from(value),
            other => {
                eprintln!("Unknown gallery option: {other}");
                std::process::exit(1);
            }
        }
    }
    parsed
}

fn gallery(args: &[String]) {
    let args = parse_gallery_args(args);
    fs::create_dir_all(&args.out).expect("Failed to create gallery directory");

    let seeds: Vec<u64> = (args.from..args.from + args.count).collect();

    // Every seed owns its random source, so scenes render independently.
    // (seed, file name, summary or error)
    let results: Vec<(u64, String, Result<String, String>)> = seeds
        .par_iter()
        .map(|&seed| {
            let file = format!("seed-{seed}.png");
            let options = SceneOptions {
                window: args.window,
                seed,
                check_screen: false,
                ..SceneOptions::default()
            };
            let outcome = render_seed(&options, &args.out.join(&file));
            (seed, file, outcome)
        })
        .collect();

    let failed = results.iter().filter(|r| r.2.is_err()).count();
    for (seed, _, outcome) in &results {
        match outcome {
            Ok(summary) => eprintln!("seed {seed}: {summary}"),
            Err(e) => eprintln!("seed {seed}: FAILED {e}"),
        }
    }

    let mut html = String::new();
    html.push_str(&format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>Cellar gallery</title>
    <style>
        body {{
            font-family: system-ui, sans-serif;
            margin: 24px;
            background: #eee;
            color: #333;
        }}
        .grid {{
            display: grid;
            grid-template-columns: repeat(auto-fill, minmax({}px, 1fr));
            gap: 16px;
        }}
        figure {{
            margin: 0;
            background: white;
            border-radius: 8px;
            padding: 8px;
        }}
        img {{
            width: 100%;
        }}
        .error {{
            color: #b00;
        }}
    </style>
</head>
<body>
<h1>Seeds {}..{} ({}x{}, {} failed)</h1>
<div class="grid">
"#,
        args.window.width.min(420),
        args.from,
        args.from + args.count,
        args.window.width,
        args.window.height,
        failed,
    ));

    for (seed, file, outcome) in &results {
        match outcome {
            Ok(summary) => html.push_str(&format!(
                "<figure><img src=\"{file}\" alt=\"seed {seed}\"><figcaption>seed {seed}: {}</figcaption></figure>\n",
                html_escape(summary)
            )),
            Err(e) => html.push_str(&format!(
                "<figure><figcaption class=\"error\">seed {seed}: {}</figcaption></figure>\n",
                html_escape(e)
            )),
        }
    }
    html.push_str("</div>\n</body></html>");

    let index = args.out.join("index.html");
    fs::write(&index, html).expect("Failed to write HTML");
    println!("Generated gallery at: {index}");
}

fn render_seed(options: &SceneOptions, path: &Utf8Path) -> Result<String, String> {
    let scene = cellar::generate(options).map_err(|e| e.to_string())?;
    cellar::rasterize(&scene)
        .map_err(|e| e.to_string())?
        .save_png(path)
        .map_err(|e| e.to_string())?;
    Ok(format!(
        "{} racks, {} items",
        scene.racks().len(),
        scene.items().count()
    ))
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
