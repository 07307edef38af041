//! Bindings to the parts of [Matplotlib][] needed to draw labeled
//! points and straight boundaries.
//!
//! These bindings provide an interface close to [Matplotlib][]'s explicit
//! one while keeping a Rust flavor: plotting goes through builders that
//! borrow the [`Axes`] mutably, and every call into Python returns a
//! [`Result`].  Drawn artists can be read back ([`Line2D`],
//! [`PathCollection`]) which makes the figure content testable without
//! looking at pixels.
//!
//! [Matplotlib]: https://matplotlib.org/

use std::fmt::{Display, Formatter};
use lazy_static::lazy_static;
use ndarray::{ArrayBase, Ix1};
use numpy::{PyArray1, ToPyArray};
use pyo3::{
    prelude::*,
    intern,
    exceptions::PyModuleNotFoundError,
    types::PyDict,
};
use tracing::debug;

/// Call the method `$m` of the Python object `$obj`, discarding the
/// returned value.
macro_rules! meth {
    ($obj: expr, $m: ident, $args: expr) => {
        Python::with_gil(|py| -> Result<(), Error> {
            $obj.bind(py).call_method1(intern!(py, stringify!($m)), $args)?;
            Ok(())
        })
    };
}

/// Call the argument-less method `$m` of `$obj` and convert its result
/// to the expected Rust type.
macro_rules! get {
    ($obj: expr, $m: ident) => {
        Python::with_gil(|py| -> Result<_, Error> {
            let v = $obj.bind(py).call_method0(intern!(py, stringify!($m)))?;
            Ok(v.extract()?)
        })
    };
    // Same as above for methods returning a numpy array.
    ($obj: expr, $m: ident, tolist) => {
        Python::with_gil(|py| -> Result<_, Error> {
            let v = $obj.bind(py).call_method0(intern!(py, stringify!($m)))?;
            Ok(v.call_method0(intern!(py, "tolist"))?.extract()?)
        })
    };
}

/// Possible errors of matplotlib functions.
#[derive(Debug)]
pub enum Error {
    /// The Python library "matplotlib" was not found.
    NoMatplotlib,
    /// The Python library "numpy" was not found.
    NoNumpy,
    /// Other Python errors.
    Python(PyErr),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            Error::NoMatplotlib =>
                write!(f, "The matplotlib library has not been found.\n\
Please install it.  See https://matplotlib.org/\n\
If you use Anaconda, see https://github.com/PyO3/pyo3/issues/1554"),
            Error::NoNumpy =>
                write!(f, "The numpy library has not been found.\n\
Please install it.  See https://numpy.org/"),
            Error::Python(e) =>
                write!(f, "Python error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Python(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PyErr> for Error {
    fn from(e: PyErr) -> Self {
        Error::Python(e)
    }
}

/// Import and return a handle to the module `$m`.
macro_rules! pyimport { ($m: literal) => {
    Python::with_gil(|py| {
        debug!(module = $m, "importing Python module");
        PyModule::import_bound(py, $m).map(|m| m.unbind())
    })
}}

lazy_static! {
    // Import matplotlib modules.
    static ref FIGURE: Result<Py<PyModule>, PyErr> = {
        pyimport!("matplotlib.figure")
    };
    static ref PYPLOT: Result<Py<PyModule>, PyErr> = {
        pyimport!("matplotlib.pyplot")
    };
    static ref NUMPY: Result<Py<PyModule>, PyErr> = {
        pyimport!("numpy")
    };
}

/// Return a handle to the module `$m`.  A missing module gives the
/// error `$e`, any other import failure is kept as `Error::Python`.
/// ⚠ This may try to lock Python's GIL.  Make sure it is executed
/// outside a call to `Python::with_gil`.
macro_rules! pymod {
    ($m: ident) => { pymod!($m, NoMatplotlib) };
    ($m: ident, $e: ident) => {
        $m.as_ref().map_err(|e| import_error(e, Error::$e))
    };
}

fn import_error(e: &PyErr, missing: Error) -> Error {
    Python::with_gil(|py| {
        if e.is_instance_of::<PyModuleNotFoundError>(py) {
            missing
        } else {
            Error::Python(e.clone_ref(py))
        }
    })
}

/// Trait expressing that `Self` can be converted to a one dimensional
/// `numpy.ndarray` of floats.
pub trait Data {
    fn to_numpy<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f64>>;
}

impl Data for [f64] {
    fn to_numpy<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f64>> {
        PyArray1::from_slice_bound(py, self)
    }
}

impl<const N: usize> Data for [f64; N] {
    fn to_numpy<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f64>> {
        PyArray1::from_slice_bound(py, self)
    }
}

impl Data for Vec<f64> {
    fn to_numpy<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f64>> {
        PyArray1::from_slice_bound(py, self)
    }
}

impl<S> Data for ArrayBase<S, Ix1>
where S: ndarray::Data<Elem = f64> {
    fn to_numpy<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f64>> {
        self.to_pyarray_bound(py)
    }
}

/// The top level container for all the plot elements.
#[derive(Debug)]
pub struct Figure {
    fig: PyObject, // instance of matplotlib.figure.Figure
}

#[derive(Debug, Clone)]
pub struct Axes {
    ax: PyObject,
}

/// A line drawn by [`XY::plot`].
#[derive(Debug, Clone)]
pub struct Line2D {
    line: PyObject,
}

/// A set of markers drawn by [`Scatter::plot`].
#[derive(Debug, Clone)]
pub struct PathCollection {
    coll: PyObject,
}

impl Figure {
    /// Return a new `Figure` that is not managed by pyplot.  It needs
    /// no GUI backend and cannot be displayed with [`show`].
    pub fn new() -> Result<Figure, Error> {
        let figure = pymod!(FIGURE)?;
        Python::with_gil(|py| {
            let fig = figure.bind(py).getattr(intern!(py, "Figure"))?
                .call0()?;
            debug!("created a standalone figure");
            Ok(Self { fig: fig.unbind() })
        })
    }

    /// Add a single set of axes covering the whole figure.
    pub fn subplots(&self) -> Result<Axes, Error> {
        Python::with_gil(|py| {
            let ax = self.fig.bind(py)
                .call_method0(intern!(py, "subplots"))?;
            Ok(Axes { ax: ax.unbind() })
        })
    }
}

/// Create a new figure managed by pyplot, so that [`show`] displays it.
pub fn figure() -> Result<Figure, Error> {
    let pyplot = pymod!(PYPLOT)?;
    Python::with_gil(|py| {
        let fig = pyplot.bind(py).getattr(intern!(py, "figure"))?
            .call0()?;
        debug!("created a pyplot figure");
        Ok(Figure { fig: fig.unbind() })
    })
}

/// Create a pyplot figure with a single set of axes.
pub fn subplots() -> Result<(Figure, Axes), Error> {
    let fig = figure()?;
    let ax = fig.subplots()?;
    Ok((fig, ax))
}

/// The current axes of the current pyplot figure, created if needed.
pub fn gca() -> Result<Axes, Error> {
    let pyplot = pymod!(PYPLOT)?;
    Python::with_gil(|py| {
        let ax = pyplot.bind(py).getattr(intern!(py, "gca"))?.call0()?;
        Ok(Axes { ax: ax.unbind() })
    })
}

/// Display all open figures.  Depending on the backend, this blocks
/// until all figure windows are closed.
pub fn show() -> Result<(), Error> {
    let pyplot = pymod!(PYPLOT)?;
    Python::with_gil(|py| {
        debug!("showing pyplot figures");
        pyplot.bind(py).getattr(intern!(py, "show"))?.call0()?;
        Ok(())
    })
}

impl Axes {
    /// Plot `y` versus `x` as lines and/or markers.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use gateplot::matplotlib as plt;
    /// let fig = plt::Figure::new()?;
    /// let mut ax = fig.subplots()?;
    /// ax.xy(&[0., 1.5], &[1.5, 0.]).color("black").linewidth(1.).plot()?;
    /// # Ok::<(), plt::Error>(())
    /// ```
    #[must_use]
    pub fn xy<'a, D>(&'a mut self, x: &'a D, y: &'a D) -> XY<'a, D>
    where D: Data + ?Sized {
        // We mutably borrow `self` to reflect that the final `.plot()`
        // will mutate the underlying Python object.
        XY { axes: self,
             options: PlotOptions::new(),
             x, y }
    }

    /// Draw the points (`x[i]`, `y[i]`) as markers.
    #[must_use]
    pub fn scatter<'a, D>(&'a mut self, x: &'a D, y: &'a D) -> Scatter<'a, D>
    where D: Data + ?Sized {
        Scatter { axes: self, x, y, color: None, label: "" }
    }

    pub fn set_title(&mut self, v: &str) -> Result<&mut Self, Error> {
        meth!(self.ax, set_title, (v,))?;
        Ok(self)
    }

    pub fn grid(&mut self) -> Result<&mut Self, Error> {
        meth!(self.ax, grid, (true,))?;
        Ok(self)
    }

    pub fn set_xlabel(&mut self, label: &str) -> Result<&mut Self, Error> {
        meth!(self.ax, set_xlabel, (label,))?;
        Ok(self)
    }

    pub fn set_ylabel(&mut self, label: &str) -> Result<&mut Self, Error> {
        meth!(self.ax, set_ylabel, (label,))?;
        Ok(self)
    }

    /// Place a legend listing every labeled artist.
    pub fn legend(&mut self) -> Result<&mut Self, Error> {
        meth!(self.ax, legend, ())?;
        Ok(self)
    }

    /// Use the same scale on both axes by adapting the data limits.
    pub fn axis_equal(&mut self) -> Result<&mut Self, Error> {
        meth!(self.ax, axis, ("equal",))?;
        Ok(self)
    }

    pub fn title(&self) -> Result<String, Error> {
        get!(self.ax, get_title)
    }

    pub fn xlabel(&self) -> Result<String, Error> {
        get!(self.ax, get_xlabel)
    }

    pub fn ylabel(&self) -> Result<String, Error> {
        get!(self.ax, get_ylabel)
    }

    /// Either "box" or "datalim".  [`Axes::axis_equal`] sets the latter.
    pub fn adjustable(&self) -> Result<String, Error> {
        get!(self.ax, get_adjustable)
    }

    /// Texts of the legend entries, empty if there is no legend.
    pub fn legend_labels(&self) -> Result<Vec<String>, Error> {
        Python::with_gil(|py| {
            let legend = self.ax.bind(py)
                .call_method0(intern!(py, "get_legend"))?;
            if legend.is_none() {
                return Ok(vec![])
            }
            let mut labels = vec![];
            for t in legend.call_method0(intern!(py, "get_texts"))?.iter()? {
                labels.push(t?.call_method0(intern!(py, "get_text"))?
                            .extract()?);
            }
            Ok(labels)
        })
    }

    /// Lines drawn on these axes, in drawing order.
    pub fn lines(&self) -> Result<Vec<Line2D>, Error> {
        Python::with_gil(|py| {
            let lines = self.ax.bind(py).getattr(intern!(py, "lines"))?;
            let lines = lines.iter()?
                .map(|l| l.map(|l| Line2D { line: l.unbind() }))
                .collect::<PyResult<_>>()?;
            Ok(lines)
        })
    }

    /// Marker collections drawn on these axes, in drawing order.
    pub fn collections(&self) -> Result<Vec<PathCollection>, Error> {
        Python::with_gil(|py| {
            let colls = self.ax.bind(py)
                .getattr(intern!(py, "collections"))?;
            let colls = colls.iter()?
                .map(|c| c.map(|c| PathCollection { coll: c.unbind() }))
                .collect::<PyResult<_>>()?;
            Ok(colls)
        })
    }
}

#[derive(Clone)]
struct PlotOptions<'a> {
    label: &'a str,
    color: Option<&'a str>,
    linestyle: Option<&'a str>,
    linewidth: Option<f64>,
}

impl<'a> PlotOptions<'a> {
    fn new() -> PlotOptions<'static> {
        PlotOptions { label: "", color: None, linestyle: None,
                      linewidth: None }
    }

    fn kwargs<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        let kwargs = PyDict::new_bound(py);
        if !self.label.is_empty() {
            kwargs.set_item("label", self.label)?
        }
        if let Some(c) = self.color {
            kwargs.set_item("color", c)?
        }
        if let Some(s) = self.linestyle {
            kwargs.set_item("linestyle", s)?
        }
        if let Some(w) = self.linewidth {
            kwargs.set_item("linewidth", w)?
        }
        Ok(kwargs)
    }

    fn plot_xy<D>(&self, py: Python<'_>, axes: &Axes, x: &D, y: &D)
                  -> PyResult<Line2D>
    where D: Data + ?Sized {
        let xn = x.to_numpy(py);
        let yn = y.to_numpy(py);
        let kwargs = self.kwargs(py)?;
        let lines = axes.ax.bind(py)
            .call_method(intern!(py, "plot"), (xn, yn), Some(&kwargs))?;
        // A single data set gives a list of one line.
        let line = lines.get_item(0)?;
        Ok(Line2D { line: line.unbind() })
    }
}

/// Declare methods to set the options assuming `self.options` exists.
macro_rules! set_plotoptions { () => {
    #[must_use]
    pub fn label(mut self, label: &'a str) -> Self {
        self.options.label = label;
        self
    }

    #[must_use]
    pub fn color(mut self, color: &'a str) -> Self {
        self.options.color = Some(color);
        self
    }

    /// Matplotlib line style: "-", "--", "-.", ":",...
    #[must_use]
    pub fn linestyle(mut self, style: &'a str) -> Self {
        self.options.linestyle = Some(style);
        self
    }

    #[must_use]
    pub fn linewidth(mut self, w: f64) -> Self {
        self.options.linewidth = Some(w);
        self
    }
}}

pub struct XY<'a, D>
where D: ?Sized {
    axes: &'a Axes,
    options: PlotOptions<'a>,
    x: &'a D,
    y: &'a D,
}

impl<'a, D> XY<'a, D>
where D: Data + ?Sized {
    set_plotoptions!();

    /// Plot the data with the options specified in [`XY`].
    pub fn plot(self) -> Result<Line2D, Error> {
        pymod!(NUMPY, NoNumpy)?;
        Python::with_gil(|py| {
            Ok(self.options.plot_xy(py, self.axes, self.x, self.y)?)
        })
    }
}

pub struct Scatter<'a, D>
where D: ?Sized {
    axes: &'a Axes,
    x: &'a D,
    y: &'a D,
    color: Option<&'a str>,
    label: &'a str,
}

impl<'a, D> Scatter<'a, D>
where D: Data + ?Sized {
    #[must_use]
    pub fn color(mut self, color: &'a str) -> Self {
        self.color = Some(color);
        self
    }

    #[must_use]
    pub fn label(mut self, label: &'a str) -> Self {
        self.label = label;
        self
    }

    /// Draw the markers with the options specified in [`Scatter`].
    pub fn plot(self) -> Result<PathCollection, Error> {
        pymod!(NUMPY, NoNumpy)?;
        Python::with_gil(|py| {
            let kwargs = PyDict::new_bound(py);
            if let Some(c) = self.color {
                kwargs.set_item("color", c)?
            }
            if !self.label.is_empty() {
                kwargs.set_item("label", self.label)?
            }
            let xn = self.x.to_numpy(py);
            let yn = self.y.to_numpy(py);
            let coll = self.axes.ax.bind(py)
                .call_method(intern!(py, "scatter"), (xn, yn), Some(&kwargs))?;
            Ok(PathCollection { coll: coll.unbind() })
        })
    }
}

impl Line2D {
    pub fn label(&self) -> Result<String, Error> {
        get!(self.line, get_label)
    }

    pub fn xdata(&self) -> Result<Vec<f64>, Error> {
        get!(self.line, get_xdata, tolist)
    }

    pub fn ydata(&self) -> Result<Vec<f64>, Error> {
        get!(self.line, get_ydata, tolist)
    }

    /// The color as it was given (e.g. "black").
    pub fn color(&self) -> Result<String, Error> {
        get!(self.line, get_color)
    }

    pub fn linestyle(&self) -> Result<String, Error> {
        get!(self.line, get_linestyle)
    }

    pub fn linewidth(&self) -> Result<f64, Error> {
        get!(self.line, get_linewidth)
    }
}

impl PathCollection {
    pub fn label(&self) -> Result<String, Error> {
        get!(self.coll, get_label)
    }

    /// Marker positions.
    pub fn offsets(&self) -> Result<Vec<(f64, f64)>, Error> {
        let xy: Vec<[f64; 2]> = get!(self.coll, get_offsets, tolist)?;
        Ok(xy.into_iter().map(|[x, y]| (x, y)).collect())
    }

    /// RGBA face colors, one per marker or a single one shared by all.
    pub fn facecolors(&self) -> Result<Vec<[f64; 4]>, Error> {
        get!(self.coll, get_facecolor, tolist)
    }
}
