//! Headless demo: drives a reorder controller over the simulated host and
//! logs every transform the FLIP engine writes.
//!
//! ```text
//! glidelist [options.toml]
//! glidelist --schema <out.json>
//! ```
//!
//! Run with `RUST_LOG=info` (or `debug` for per-cycle detail).

use std::path::Path;

use glam::Vec2;
use glidelist::host::{GridLayout, SimulatedHost};
use glidelist::input::InputEvent;
use glidelist::options::Options;
use glidelist::{GlideError, ItemId, ReorderController};

const COLUMNS: usize = 4;
const CELL: f32 = 120.0;
const GAP: f32 = 12.0;
const MAX_FRAMES: usize = 600;

fn write_schema(path: &Path) -> Result<(), GlideError> {
    let schema = serde_json::to_string_pretty(&Options::json_schema())
        .map_err(|e| GlideError::OptionsParse(e.to_string()))?;
    std::fs::write(path, schema)?;
    log::info!("Wrote options schema to '{}'", path.display());
    Ok(())
}

fn load_options(arg: Option<&str>) -> Result<Options, GlideError> {
    match arg {
        Some(path) => {
            let opts = Options::load(Path::new(path))?;
            log::info!("Loaded options from '{path}'");
            Ok(opts)
        }
        None => Ok(Options::default()),
    }
}

/// Log writes recorded since the last call, then forget them.
fn flush_writes(controller: &mut ReorderController<SimulatedHost>) {
    let host = controller.host();
    for write in host.writes() {
        let timing = write
            .transition
            .map_or_else(|| "instant".to_owned(), |t| t.css());
        log::info!(
            "[frame {:>3}] {:<14} translate({}px, {}px) {timing}",
            write.frame,
            write.item,
            write.offset.x,
            write.offset.y
        );
    }
    controller.host_mut().clear_writes();
}

fn settle(controller: &mut ReorderController<SimulatedHost>) {
    let frames = controller.run_until_idle(MAX_FRAMES);
    flush_writes(controller);
    log::info!(
        "settled after {frames} frames ({:?} virtual time)",
        controller.host().now()
    );
}

fn center_of(
    controller: &ReorderController<SimulatedHost>,
    item: &ItemId,
) -> Option<Vec2> {
    controller.host().layout_box(item).map(|bbox| bbox.center())
}

/// Drag the first item over the third, then drop it.
fn drag_first_over_third(
    controller: &mut ReorderController<SimulatedHost>,
) -> Result<(), GlideError> {
    let order = controller.order().as_slice();
    let (Some(dragged), Some(target)) = (order.first(), order.get(2)) else {
        log::warn!("need at least three items to demo a drag");
        return Ok(());
    };
    let (dragged, target) = (dragged.clone(), target.clone());
    let (Some(from), Some(to)) = (
        center_of(controller, &dragged),
        center_of(controller, &target),
    ) else {
        return Ok(());
    };

    controller.handle_event(InputEvent::DragStart {
        item: dragged,
        pointer: from,
    })?;
    for step in 1..=4 {
        let pointer = from.lerp(to, step as f32 / 4.0);
        controller.handle_event(InputEvent::DragMove { pointer })?;
        let _ = controller.step_frame();
    }
    controller.handle_event(InputEvent::DragEnter { target })?;
    let _ = controller.step_frame();
    controller.handle_event(InputEvent::DragMove {
        pointer: to + Vec2::new(8.0, 4.0),
    })?;
    let _ = controller.step_frame();
    controller.handle_event(InputEvent::DragEnd)?;
    flush_writes(controller);
    Ok(())
}

fn log_order(controller: &ReorderController<SimulatedHost>) {
    let keys: Vec<&str> =
        controller.order().iter().map(ItemId::as_str).collect();
    log::info!("order: {}", keys.join(", "));
}

fn run(options: Options) -> Result<(), GlideError> {
    let host = SimulatedHost::new(GridLayout::new(COLUMNS, CELL, CELL, GAP));
    let mut controller = ReorderController::from_options(host, options)?;
    log_order(&controller);

    drag_first_over_third(&mut controller)?;
    settle(&mut controller);
    log_order(&controller);

    controller.handle_event(InputEvent::Shuffle)?;
    settle(&mut controller);
    log_order(&controller);
    Ok(())
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let result = match args.first().map(String::as_str) {
        Some("--schema") => match args.get(1) {
            Some(path) => write_schema(Path::new(path)),
            None => {
                log::error!("Usage: glidelist --schema <out.json>");
                std::process::exit(1);
            }
        },
        other => load_options(other).and_then(run),
    };

    if let Err(e) = result {
        log::error!("{e}");
        std::process::exit(1);
    }
}
