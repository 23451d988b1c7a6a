use std::time::Duration;

use anyhow::{bail, Context};

use kinetic_engine::logging::{init_logging, LoggingConfig};
use kinetic_engine::time::FrameClock;
use kinetic_fx::prelude::*;

/// Fixed step used to drive the animation, in milliseconds (60 Hz).
const FRAME_MS: u64 = 16;

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    println!();
    println!("  ╔════════════════════════════════════════╗");
    println!("  ║          KINETIC STUDIO v0.1           ║");
    println!("  ║   complex property animation preview   ║");
    println!("  ╚════════════════════════════════════════╝");
    println!();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match args.as_slice() {
        [] => showcase(),
        [name, start, end] => single(name, start, end, None)?,
        [name, start, end, duration] => single(name, start, end, Some(duration))?,
        _ => bail!("usage: kinetic-studio [<property> <start> <end> [duration_ms]]"),
    };

    let mut node = StyleMap::new()
        .with("width", "120px")
        .with("backgroundColor", "#1a1a2a");
    let mut anim = animate_property(options);
    anim.play();

    // KINETIC_REALTIME=1 paces frames by wall time instead of fixed steps.
    let realtime = std::env::var("KINETIC_REALTIME").is_ok_and(|v| v == "1");
    let mut clock = FrameClock::new();
    loop {
        let frame = if realtime {
            std::thread::sleep(Duration::from_millis(FRAME_MS));
            clock.tick()
        } else {
            clock.advance(Duration::from_millis(FRAME_MS))
        };
        let status = anim
            .tick(frame.dt, &mut node)
            .context("animation failed to start")?;

        print_frame(frame.frame_index, anim.percent(), &node);

        if status == AnimationStatus::Stopped {
            break;
        }
    }

    println!();
    println!("  done after {} ms", anim.options().duration.as_millis());
    Ok(())
}

/// Clip, transform, shadow and plain properties animated together.
fn showcase() -> AnimationOptions {
    AnimationOptions::new()
        .duration(Duration::from_millis(400))
        .property("clip", PropertyDescriptor::new("rect(0px 50px 50px 0px)", "rect(10px 30px 30px 10px)"))
        .property(
            "transform",
            PropertyDescriptor::new("rotate(10deg) translateX(0px)", "rotate(0deg) translateX(20px)"),
        )
        .property("boxShadow", PropertyDescriptor::new("shadow(0px 0px #ff0000)", "shadow(4px 8px #0000ff)"))
        .property("backgroundColor", PropertyDescriptor::to("#4c6ef5"))
        .property("width", PropertyDescriptor::to(240))
        .property("opacity", PropertyDescriptor::new(0.2, 1))
}

fn single(name: &str, start: &str, end: &str, duration: Option<&String>) -> anyhow::Result<AnimationOptions> {
    let mut options = AnimationOptions::new().property(name, PropertyDescriptor::new(start, end));
    if let Some(ms) = duration {
        let ms: u64 = ms
            .parse()
            .with_context(|| format!("duration {:?} is not a whole number of milliseconds", ms))?;
        options = options.duration(Duration::from_millis(ms));
    }
    Ok(options)
}

fn print_frame(index: u64, percent: f64, node: &StyleMap) {
    println!("  frame {:>3}  {:>5.1}%", index, percent * 100.0);
    for (name, value) in node.sorted() {
        println!("      {:<16} {}", name, value);
    }
}
