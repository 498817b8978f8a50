use std::{
    fs::File,
    io::{BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use roier_promo::{Composition, FrameIndex};

#[derive(Parser, Debug)]
#[command(name = "promo", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate a single frame and write its visual tree as JSON.
    Frame(FrameArgs),
    /// Print the composition header and the scene span table.
    Timeline,
    /// Stream every frame as JSON Lines for the rendering host.
    Dump(DumpArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,

    /// Output path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,

    /// Pretty-print the JSON.
    #[arg(long)]
    pretty: bool,
}

#[derive(Parser, Debug)]
struct DumpArgs {
    /// Output path, one JSON object per frame per line.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Timeline => cmd_timeline(),
        Command::Dump(args) => cmd_dump(args),
    }
}

fn open_out(path: &Path) -> anyhow::Result<BufWriter<File>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output dir '{}'", parent.display()))?;
        }
    }
    let f = File::create(path).with_context(|| format!("create '{}'", path.display()))?;
    Ok(BufWriter::new(f))
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let comp = Composition::promo_video()?;

    let Some(frame) = comp.render_frame(FrameIndex(args.frame)) else {
        eprintln!(
            "frame {} is past the end of the timeline ({} frames); nothing to render",
            args.frame,
            comp.duration().0
        );
        return Ok(());
    };

    let json = if args.pretty {
        serde_json::to_string_pretty(&frame)?
    } else {
        serde_json::to_string(&frame)?
    };

    match args.out {
        Some(path) => {
            let mut w = open_out(&path)?;
            writeln!(w, "{json}")?;
            w.flush()?;
            eprintln!("wrote {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn cmd_timeline() -> anyhow::Result<()> {
    let comp = Composition::promo_video()?;

    println!(
        "{}: {} frames @ {:.3} fps, {}x{}",
        comp.id,
        comp.duration().0,
        comp.fps.as_f64(),
        comp.canvas.width,
        comp.canvas.height
    );
    for span in comp.timeline.spans() {
        println!(
            "  {:<10} [{:>3}, {:>3})  {} frames",
            span.scene.name(),
            span.range.start.0,
            span.range.end.0,
            span.range.len_frames()
        );
    }
    Ok(())
}

fn cmd_dump(args: DumpArgs) -> anyhow::Result<()> {
    let comp = Composition::promo_video()?;
    let mut w = open_out(&args.out)?;

    for f in 0..comp.duration().0 {
        let frame = comp
            .render_frame(FrameIndex(f))
            .context("frame inside the declared duration must render")?;
        serde_json::to_writer(&mut w, &frame)?;
        writeln!(w)?;
    }
    w.flush()?;

    eprintln!("wrote {} ({} frames)", args.out.display(), comp.duration().0);
    Ok(())
}
