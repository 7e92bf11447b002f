//! CellTable Smoke Harness
//!
//! Builds a form-like table, resizes it through a series of widths and
//! prints the resulting widget rectangles as JSON. A scripted stress run for
//! spotting layout regressions without a windowing toolkit.

use std::rc::Rc;
use std::time::Instant;

use celltable_core::{Alignment, FixedSizeWidget, FlowWidget, Margin, Orientation, SizeConstraint};
use celltable_layout::{Table, TableConfig, TableEvent};
use serde_json::json;
use tracing::{error, info, warn};

/// Parse command line arguments
struct Args {
    width: f64,
    height: f64,
    spacing: f64,
    steps: u32,
    dump_layout: Option<String>,
}

impl Args {
    fn parse() -> Self {
        let mut args = std::env::args().skip(1);
        let mut width = 480.0;
        let mut height = 320.0;
        let mut spacing = 6.0;
        let mut steps = 5u32;
        let mut dump_layout = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--width" => {
                    if let Some(val) = args.next() {
                        width = val.parse().unwrap_or(480.0);
                    }
                }
                "--height" => {
                    if let Some(val) = args.next() {
                        height = val.parse().unwrap_or(320.0);
                    }
                }
                "--spacing" => {
                    if let Some(val) = args.next() {
                        spacing = val.parse().unwrap_or(6.0);
                    }
                }
                "--steps" => {
                    if let Some(val) = args.next() {
                        steps = val.parse().unwrap_or(5);
                    }
                }
                "--dump-layout" => {
                    dump_layout = args.next();
                }
                _ => {}
            }
        }

        Self {
            width,
            height,
            spacing,
            steps: steps.max(1),
            dump_layout,
        }
    }
}

/// Two label/field rows, a wrapping notes area and a right-aligned button row.
fn build_form(spacing: f64) -> Table {
    let mut table = Table::with_config(TableConfig {
        default_row_spacing: spacing,
        default_column_spacing: spacing,
    });

    let label = |width| {
        Rc::new(FixedSizeWidget::new(width, 20.0).with_alignment(Orientation::Horizontal, Alignment::End))
    };
    let field = || Rc::new(FixedSizeWidget::new(160.0, 24.0).with_expand(Orientation::Horizontal, true));

    let rows = [
        table.add(label(60.0), 0, 0, 1, 1),
        table.add(field(), 1, 0, 1, 2),
        table.add(label(90.0), 0, 1, 1, 1),
        table.add(field(), 1, 1, 1, 2),
        table.add(
            Rc::new(
                FlowWidget::new(300.0, 40.0)
                    .with_expand(Orientation::Horizontal, true)
                    .with_expand(Orientation::Vertical, true)
                    .with_margin(Margin::uniform(4.0)),
            ),
            0,
            2,
            1,
            3,
        ),
        table.add(
            Rc::new(FixedSizeWidget::new(80.0, 28.0).with_alignment(Orientation::Horizontal, Alignment::End)),
            2,
            3,
            1,
            1,
        ),
    ];

    for result in rows {
        if let Err(e) = result {
            error!(?e, "Failed to place widget");
        }
    }

    table
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();
    info!(
        width = args.width,
        height = args.height,
        spacing = args.spacing,
        steps = args.steps,
        dump_layout = ?args.dump_layout,
        "Starting CellTable Smoke Harness"
    );

    let start = Instant::now();
    let mut table = build_form(args.spacing);
    table.subscribe(|event: &TableEvent| info!(?event, "Table changed"));

    let natural = table.preferred_size(SizeConstraint::Unconstrained, SizeConstraint::Unconstrained);
    info!(width = natural.width, height = natural.height, "Natural table size");

    // Sweep from half the requested width up to the full width
    let mut frames = Vec::new();
    for step in 0..args.steps {
        let fraction = 0.5 + 0.5 * f64::from(step + 1) / f64::from(args.steps);
        let width = (args.width * fraction).round();
        let preferred = table.preferred_size(SizeConstraint::fixed(width), SizeConstraint::Unconstrained);
        let height = args.height.max(preferred.height);

        let widgets: Vec<_> = table
            .reallocate(width, height)
            .into_iter()
            .map(|allocation| {
                if allocation.rect.width == 0.0 || allocation.rect.height == 0.0 {
                    warn!(placement = allocation.placement.raw(), "Widget collapsed");
                }
                json!({
                    "placement": allocation.placement.raw(),
                    "rect": allocation.rect,
                })
            })
            .collect();

        frames.push(json!({
            "width": width,
            "height": height,
            "preferred_height": preferred.height,
            "widgets": widgets,
        }));
    }

    // Exercise row insertion: the button row moves down, an empty row adds no height
    table.insert_row(3, 4);
    let after_insert = table.preferred_size(SizeConstraint::Unconstrained, SizeConstraint::Unconstrained);

    let result = json!({
        "status": "pass",
        "elapsed_ms": start.elapsed().as_millis(),
        "natural_size": natural,
        "after_insert_row": after_insert,
        "frames": frames,
    });

    if let Some(ref path) = args.dump_layout {
        info!(?path, "Dumping layout to file");
        match serde_json::to_string_pretty(&result) {
            Ok(text) => {
                if let Err(e) = std::fs::write(path, text) {
                    error!(?e, "Failed to write layout dump");
                }
            }
            Err(e) => error!(?e, "Failed to serialize layout"),
        }
    }

    println!("{}", result);
}
