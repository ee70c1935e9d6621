mod context;
mod host;
mod report;
mod tables;

use std::io::Write;

use color_eyre::eyre::{eyre, Result};
use tracing::Level;

use crate::context::ProbeContext;
use crate::host::HostInfo;
use crate::report::GlowCaps;

pub fn run() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(if cfg!(debug_assertions) { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    let host = HostInfo::probe();

    let event_loop = winit::event_loop::EventLoop::new();
    let ctx = ProbeContext::create(&event_loop)?;

    let caps = GlowCaps::new(ctx.gl(), ctx.display_features());
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    report::render(&mut out, &host, &caps)?;
    out.flush()?;

    let errors = caps.into_errors();
    ctx.dissolve()?;
    if !errors.is_empty() {
        return Err(eyre!(
            "driver reported {} error(s) during the report: {}",
            errors.len(),
            errors.join("; ")
        ));
    }

    Ok(())
}
