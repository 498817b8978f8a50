use roier_promo::{Composition, FrameIndex};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let comp = Composition::promo_video()?;

    for f in [0u64, 45, 90, 180, 269, 270, 303, 360, 449] {
        let frame = comp.render_frame(FrameIndex(f)).expect("frame in range");
        println!("frame {f}: {} layers", frame.layers.len());
    }

    let frame = comp.render_frame(FrameIndex(300)).expect("frame in range");
    println!("{}", serde_json::to_string_pretty(&frame)?);

    Ok(())
}
