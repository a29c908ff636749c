mod demos;

use anyhow::{bail, Context};
use collage_engine::logging::{init_logging, LoggingConfig};
use collage_engine::render::{flatten, DrawCmd, DrawList};

fn main() -> anyhow::Result<()> {
    let mut verbose = false;
    let mut name = None;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "-v" | "--verbose" => verbose = true,
            "-h" | "--help" => {
                print_usage();
                return Ok(());
            }
            other if other.starts_with('-') => bail!("unknown flag `{other}`"),
            other => name = Some(other.to_owned()),
        }
    }

    init_logging(if verbose {
        LoggingConfig::with_filter("collage_engine=trace,collage_studio=debug")
    } else {
        LoggingConfig::default()
    });

    match name {
        Some(name) => run(&name),
        None => {
            for demo in demos::DEMOS {
                run(demo.name)?;
            }
            Ok(())
        }
    }
}

fn run(name: &str) -> anyhow::Result<()> {
    let demo = demos::find(name)
        .with_context(|| format!("no demo named `{name}` (try --help)"))?;

    log::info!("building demo `{}`", demo.name);
    let scene = (demo.build)();
    let list = flatten(&scene);

    println!();
    println!("  ── {} ── {}", demo.name, demo.about);
    print_list(&list);
    Ok(())
}

fn print_list(list: &DrawList<'_>) {
    for (i, (item, outline)) in list.items().iter().zip(list.outlines()).enumerate() {
        let detail = match item.cmd {
            DrawCmd::Text(t) => format!("{:?}", t.content),
            DrawCmd::Image(img) => img.src.clone(),
            DrawCmd::Path { .. } | DrawCmd::Shape { .. } => format!("{} pts", outline.len()),
        };
        let at = item.anchor();
        println!(
            "  {i:>3}  {:<7} at ({:>8.2}, {:>8.2})  alpha {:.2}  clip {:<4}  {detail}",
            item.cmd.kind(),
            at.x,
            at.y,
            item.alpha,
            item.clip.map_or("-".to_owned(), |c| c.0.to_string()),
        );
    }
    println!("  {} items, {} clips", list.len(), list.clips().len());
}

fn print_usage() {
    println!("usage: collage-studio [DEMO] [--verbose]");
    println!();
    for demo in demos::DEMOS {
        println!("  {:<8} {}", demo.name, demo.about);
    }
}
