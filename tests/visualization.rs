//! Reads back the gate figure drawn on a standalone figure.  When
//! matplotlib is not installed every test here passes without checking
//! anything.

use gateplot::{
    gate::{self, SeparatingLine},
    matplotlib::{Axes, Figure},
    visualize, Error,
};

const BLUE: [f64; 4] = [0., 0., 1., 1.];
const RED: [f64; 4] = [1., 0., 0., 1.];

/// The gate figure drawn on a standalone figure, `None` when matplotlib
/// is not installed.
fn drawn() -> Result<Option<(Figure, Axes)>, Error> {
    let fig = match Figure::new() {
        Ok(fig) => fig,
        Err(Error::NoMatplotlib) => {
            eprintln!("matplotlib not available, skipping");
            return Ok(None)
        }
        Err(e) => return Err(e),
    };
    let mut ax = fig.subplots()?;
    visualize::draw(&mut ax, &gate::POINTS, &SeparatingLine::BOUNDARY)?;
    Ok(Some((fig, ax)))
}

#[test]
fn decorations() -> Result<(), Error> {
    let Some((_fig, ax)) = drawn()? else { return Ok(()) };
    assert_eq!(ax.title()?, "AND Gate Visualization");
    assert_eq!(ax.xlabel()?, "Input 1");
    assert_eq!(ax.ylabel()?, "Input 2");
    assert_eq!(ax.adjustable()?, "datalim");
    Ok(())
}

#[test]
fn legend_entries() -> Result<(), Error> {
    let Some((_fig, ax)) = drawn()? else { return Ok(()) };
    // Older matplotlib versions list lines before collections.
    let mut labels = ax.legend_labels()?;
    labels.sort();
    assert_eq!(labels, ["Class 0 (Blue Circle)", "Class 1 (Red Circle)",
                        "Separating Line"]);
    Ok(())
}

#[test]
fn one_scatter_series_per_class() -> Result<(), Error> {
    let Some((_fig, ax)) = drawn()? else { return Ok(()) };
    let colls = ax.collections()?;
    assert_eq!(colls.len(), 2);
    assert_eq!(colls[0].label()?, "Class 0 (Blue Circle)");
    assert_eq!(colls[0].offsets()?, vec![(0., 0.), (1., 1.)]);
    assert_eq!(colls[0].facecolors()?, vec![BLUE]);
    assert_eq!(colls[1].label()?, "Class 1 (Red Circle)");
    assert_eq!(colls[1].offsets()?, vec![(1., 0.), (0., 1.)]);
    assert_eq!(colls[1].facecolors()?, vec![RED]);
    Ok(())
}

#[test]
fn separating_line() -> Result<(), Error> {
    let Some((_fig, ax)) = drawn()? else { return Ok(()) };
    let lines = ax.lines()?;
    assert_eq!(lines.len(), 1);
    let line = &lines[0];
    assert_eq!(line.xdata()?, vec![0., 1.5]);
    assert_eq!(line.ydata()?, vec![1.5, 0.]);
    assert_eq!(line.color()?, "black");
    assert_eq!(line.linestyle()?, "-");
    assert_eq!(line.linewidth()?, 1.);
    assert_eq!(line.label()?, "Separating Line");
    Ok(())
}

#[test]
fn drawing_twice_adds_artists() -> Result<(), Error> {
    let Some((_fig, mut ax)) = drawn()? else { return Ok(()) };
    visualize::draw(&mut ax, &gate::POINTS, &SeparatingLine::BOUNDARY)?;
    assert_eq!(ax.collections()?.len(), 4);
    assert_eq!(ax.lines()?.len(), 2);
    Ok(())
}
