//! Composition of the gate figure.

use tracing::{debug, info};
use crate::{
    gate::{self, Label, LabeledPoint, SeparatingLine},
    matplotlib::{self as plt, Axes, Error},
};

pub const TITLE: &str = "AND Gate Visualization";
pub const X_LABEL: &str = "Input 1";
pub const Y_LABEL: &str = "Input 2";
pub const LINE_LABEL: &str = "Separating Line";

/// Marker color of a class.
pub fn color(label: Label) -> &'static str {
    match label {
        Label::Zero => "blue",
        Label::One => "red",
    }
}

/// Legend entry of a class.
pub fn legend(label: Label) -> &'static str {
    match label {
        Label::Zero => "Class 0 (Blue Circle)",
        Label::One => "Class 1 (Red Circle)",
    }
}

/// Draw one scatter series per class, the boundary `line` and the
/// decorations onto `ax`.
pub fn draw(
    ax: &mut Axes,
    points: &[LabeledPoint],
    line: &SeparatingLine,
) -> Result<(), Error> {
    let classes = gate::partition(points);
    for label in [Label::Zero, Label::One] {
        let (x, y) = gate::coordinates(classes.get(label));
        debug!(class = label.value(), n = x.len(), "drawing scatter series");
        ax.scatter(&x, &y).color(color(label)).label(legend(label)).plot()?;
    }

    let (xs, ys) = (line.xs(), line.ys());
    debug!(start = ?line.start, end = ?line.end, "drawing separating line");
    ax.xy(&xs, &ys)
        .color("black").linestyle("-").linewidth(1.).label(LINE_LABEL)
        .plot()?;

    ax.set_xlabel(X_LABEL)?
        .set_ylabel(Y_LABEL)?
        .set_title(TITLE)?
        .legend()?
        .grid()?
        .axis_equal()?;
    Ok(())
}

/// Draw the gate points and the fixed boundary on a new pyplot figure
/// and display it.  Blocks until the viewer is closed.
pub fn render() -> Result<(), Error> {
    let (_fig, mut ax) = plt::subplots()?;
    draw(&mut ax, &gate::POINTS, &SeparatingLine::BOUNDARY)?;
    info!("figure ready, showing");
    plt::show()
}
