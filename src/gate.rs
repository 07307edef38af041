//! Labeled points of a two-input logic gate and the straight boundary
//! drawn over them.

use ndarray::Array1;

/// Binary class of a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    Zero,
    One,
}

impl Label {
    pub fn value(self) -> u8 {
        match self {
            Label::Zero => 0,
            Label::One => 1,
        }
    }

    /// Return `None` if `v` is neither 0 nor 1.
    pub fn from_value(v: u8) -> Option<Label> {
        match v {
            0 => Some(Label::Zero),
            1 => Some(Label::One),
            _ => None,
        }
    }
}

impl From<bool> for Label {
    fn from(b: bool) -> Self {
        if b { Label::One } else { Label::Zero }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabeledPoint {
    pub x: f64,
    pub y: f64,
    pub label: Label,
}

impl LabeledPoint {
    pub const fn new(x: f64, y: f64, label: Label) -> Self {
        LabeledPoint { x, y, label }
    }
}

/// The plotted points.  They are presented as the AND gate but the
/// labels are those of XOR; they are kept as they are.
pub const POINTS: [LabeledPoint; 4] = [
    LabeledPoint::new(0., 0., Label::Zero),
    LabeledPoint::new(1., 0., Label::One),
    LabeledPoint::new(0., 1., Label::One),
    LabeledPoint::new(1., 1., Label::Zero),
];

/// Points of `points` with the given label, in their original order.
pub fn class(points: &[LabeledPoint], label: Label) -> Vec<LabeledPoint> {
    points.iter().filter(|p| p.label == label).copied().collect()
}

/// Points split by label.
#[derive(Debug, Clone, PartialEq)]
pub struct Partition {
    pub class_0: Vec<LabeledPoint>,
    pub class_1: Vec<LabeledPoint>,
}

pub fn partition(points: &[LabeledPoint]) -> Partition {
    Partition {
        class_0: class(points, Label::Zero),
        class_1: class(points, Label::One),
    }
}

impl Partition {
    pub fn get(&self, label: Label) -> &[LabeledPoint] {
        match label {
            Label::Zero => &self.class_0,
            Label::One => &self.class_1,
        }
    }
}

/// The x-series and y-series of `points`, ready to be plotted.
pub fn coordinates(points: &[LabeledPoint]) -> (Array1<f64>, Array1<f64>) {
    let x = points.iter().map(|p| p.x).collect();
    let y = points.iter().map(|p| p.y).collect();
    (x, y)
}

/// Two-input logic gates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    And,
    Or,
    Nand,
    Xor,
}

impl Gate {
    pub fn output(self, a: bool, b: bool) -> bool {
        match self {
            Gate::And => a && b,
            Gate::Or => a || b,
            Gate::Nand => !(a && b),
            Gate::Xor => a != b,
        }
    }

    /// Inputs (0,0), (0,1), (1,0), (1,1) labeled with the gate output.
    pub fn truth_table(self) -> [LabeledPoint; 4] {
        [(false, false), (false, true), (true, false), (true, true)]
            .map(|(a, b)| {
                let label = Label::from(self.output(a, b));
                LabeledPoint::new(f64::from(u8::from(a)), f64::from(u8::from(b)), label)
            })
    }
}

/// A line `a x + b y + c = 0` together with the segment drawn for it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeparatingLine {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub start: (f64, f64),
    pub end: (f64, f64),
}

impl SeparatingLine {
    /// x + y - 1.5 = 0, from (0, 1.5) to (1.5, 0).
    pub const BOUNDARY: SeparatingLine = SeparatingLine {
        a: 1., b: 1., c: -1.5,
        start: (0., 1.5),
        end: (1.5, 0.),
    };

    pub fn eval(&self, x: f64, y: f64) -> f64 {
        self.a * x + self.b * y + self.c
    }

    /// Abscissas of the segment endpoints.
    pub fn xs(&self) -> [f64; 2] {
        [self.start.0, self.end.0]
    }

    /// Ordinates of the segment endpoints.
    pub fn ys(&self) -> [f64; 2] {
        [self.start.1, self.end.1]
    }

    /// `Label::One` on the positive side, `Label::Zero` on the negative
    /// one and `None` on the line.
    pub fn side(&self, p: &LabeledPoint) -> Option<Label> {
        let v = self.eval(p.x, p.y);
        if v > 0. {
            Some(Label::One)
        } else if v < 0. {
            Some(Label::Zero)
        } else {
            None
        }
    }

    /// Whether every point lies strictly off the line and the two
    /// classes lie on opposite sides (in either orientation).
    pub fn separates(&self, points: &[LabeledPoint]) -> bool {
        let mut same = true;
        let mut flipped = true;
        for p in points {
            match self.side(p) {
                None => return false,
                Some(s) => {
                    same &= s == p.label;
                    flipped &= s != p.label;
                }
            }
        }
        same || flipped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn xy(points: &[LabeledPoint]) -> Vec<(f64, f64)> {
        points.iter().map(|p| (p.x, p.y)).collect()
    }

    #[test]
    fn partition_by_label() {
        let p = partition(&POINTS);
        assert_eq!(xy(&p.class_0), vec![(0., 0.), (1., 1.)]);
        assert_eq!(xy(&p.class_1), vec![(1., 0.), (0., 1.)]);
        assert_eq!(p.class_0, vec![LabeledPoint::new(0., 0., Label::Zero),
                                   LabeledPoint::new(1., 1., Label::Zero)]);
        assert_eq!(p.class_1, vec![LabeledPoint::new(1., 0., Label::One),
                                   LabeledPoint::new(0., 1., Label::One)]);
        assert_eq!(p.get(Label::One), &p.class_1[..]);
    }

    #[test]
    fn partition_is_disjoint_and_complete() {
        let p = partition(&POINTS);
        assert!(p.class_0.iter().all(|q| !p.class_1.contains(q)));
        assert_eq!(p.class_0.len() + p.class_1.len(), POINTS.len());
        for q in &POINTS {
            assert!(p.class_0.contains(q) || p.class_1.contains(q));
        }
    }

    #[test]
    fn partition_is_idempotent() {
        let first = partition(&POINTS);
        for _ in 0..10 {
            assert_eq!(partition(&POINTS), first);
        }
        assert_eq!(class(&first.class_0, Label::Zero), first.class_0);
        assert!(class(&first.class_0, Label::One).is_empty());
    }

    #[test]
    fn coordinates_follow_point_order() {
        let (x, y) = coordinates(&class(&POINTS, Label::One));
        assert_eq!(x, ndarray::array![1., 0.]);
        assert_eq!(y, ndarray::array![0., 1.]);
        let (x, y) = coordinates(&[]);
        assert!(x.is_empty() && y.is_empty());
    }

    #[test]
    fn labels() {
        assert_eq!(Label::from_value(0), Some(Label::Zero));
        assert_eq!(Label::from_value(1), Some(Label::One));
        assert_eq!(Label::from_value(2), None);
        for l in [Label::Zero, Label::One] {
            assert_eq!(Label::from_value(l.value()), Some(l));
        }
    }

    #[test]
    fn boundary_endpoints_lie_on_the_line() {
        let line = SeparatingLine::BOUNDARY;
        assert_eq!(line.xs(), [0., 1.5]);
        assert_eq!(line.ys(), [1.5, 0.]);
        assert_eq!(line.eval(line.start.0, line.start.1), 0.);
        assert_eq!(line.eval(line.end.0, line.end.1), 0.);
        assert_eq!(line.side(&LabeledPoint::new(0.75, 0.75, Label::One)), None);
    }

    #[test]
    fn truth_tables() {
        let labels = |g: Gate| g.truth_table().map(|p| p.label.value());
        assert_eq!(labels(Gate::And), [0, 0, 0, 1]);
        assert_eq!(labels(Gate::Or), [0, 1, 1, 1]);
        assert_eq!(labels(Gate::Nand), [1, 1, 1, 0]);
        assert_eq!(labels(Gate::Xor), [0, 1, 1, 0]);
        assert_eq!(xy(&Gate::And.truth_table()),
                   vec![(0., 0.), (0., 1.), (1., 0.), (1., 1.)]);
    }

    #[test]
    fn plotted_labels_are_xor() {
        for p in &POINTS {
            let (a, b) = (p.x == 1., p.y == 1.);
            assert_eq!(p.label, Label::from(Gate::Xor.output(a, b)));
        }
        assert!(POINTS.iter().any(
            |p| p.label != Label::from(Gate::And.output(p.x == 1., p.y == 1.))));
    }

    #[test]
    fn boundary_separates_and_but_not_the_plotted_points() {
        let line = SeparatingLine::BOUNDARY;
        assert!(line.separates(&Gate::And.truth_table()));
        assert!(line.separates(&Gate::Nand.truth_table()));
        assert!(!line.separates(&Gate::Or.truth_table()));
        assert!(!line.separates(&POINTS));
        assert!(!line.separates(&Gate::Xor.truth_table()));
    }
}
