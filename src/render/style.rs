use palette::Srgb;
use plotters::coord::CoordTranslate;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;

use crate::data::model::Study;

// ---------------------------------------------------------------------------
// Study styles – fixed, index-matched to Study::ALL
// ---------------------------------------------------------------------------

/// Marker glyphs used to tell the studies apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerShape {
    Circle,
    Plus,
    Square,
    Triangle,
    Cross,
    Diamond,
}

const STUDY_MARKERS: [MarkerShape; 6] = [
    MarkerShape::Circle,
    MarkerShape::Plus,
    MarkerShape::Square,
    MarkerShape::Triangle,
    MarkerShape::Cross,
    MarkerShape::Diamond,
];

const STUDY_COLORS: [&str; 6] = [
    "#0072BD", "#D95319", "#EDB120", "#77AC30", "#7E2F8E", "#A2142F",
];

const FALLBACK_COLOR: RGBColor = RGBColor(128, 128, 128);

/// Parse a `#rrggbb` string; anything unparsable maps to grey.
pub fn hex_color(hex: &str) -> RGBColor {
    hex.parse::<Srgb<u8>>()
        .map(|c| RGBColor(c.red, c.green, c.blue))
        .unwrap_or(FALLBACK_COLOR)
}

/// How one study is drawn in every panel and in the legend.
#[derive(Debug, Clone, Copy)]
pub struct StudyStyle {
    pub marker: MarkerShape,
    pub color: RGBColor,
    pub label: &'static str,
}

pub fn study_style(study: Study) -> StudyStyle {
    let idx = study as usize;
    StudyStyle {
        marker: STUDY_MARKERS[idx],
        color: hex_color(STUDY_COLORS[idx]),
        label: study.citation(),
    }
}

// ---------------------------------------------------------------------------
// Marker drawing
// ---------------------------------------------------------------------------

/// Draw one marker centred on `at`, in whatever coordinates `area` uses.
/// Closed glyphs get a translucent fill and a black edge; `+` and `x` are
/// stroked in the study colour.
pub fn draw_marker<DB, CT>(
    area: &DrawingArea<DB, CT>,
    at: CT::From,
    style: &StudyStyle,
    size: i32,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>>
where
    DB: DrawingBackend,
    CT: CoordTranslate,
    CT::From: Clone,
{
    let fill = style.color.mix(0.8).filled();
    let edge = BLACK.stroke_width(1);
    let stroke = style.color.stroke_width(2);
    let s = size;

    match style.marker {
        MarkerShape::Circle => area.draw(
            &(EmptyElement::at(at)
                + Circle::new((0, 0), s, fill)
                + Circle::new((0, 0), s, edge)),
        ),
        MarkerShape::Square => area.draw(
            &(EmptyElement::at(at)
                + Rectangle::new([(-s, -s), (s, s)], fill)
                + Rectangle::new([(-s, -s), (s, s)], edge)),
        ),
        MarkerShape::Triangle => {
            let pts = vec![(0, -s - 1), (-s, s), (s, s)];
            let mut outline = pts.clone();
            outline.push(pts[0]);
            area.draw(
                &(EmptyElement::at(at) + Polygon::new(pts, fill) + PathElement::new(outline, edge)),
            )
        }
        MarkerShape::Diamond => {
            let pts = vec![(0, -s), (s, 0), (0, s), (-s, 0)];
            let mut outline = pts.clone();
            outline.push(pts[0]);
            area.draw(
                &(EmptyElement::at(at) + Polygon::new(pts, fill) + PathElement::new(outline, edge)),
            )
        }
        MarkerShape::Plus => area.draw(
            &(EmptyElement::at(at)
                + PathElement::new(vec![(-s, 0), (s, 0)], stroke)
                + PathElement::new(vec![(0, -s), (0, s)], stroke)),
        ),
        MarkerShape::Cross => area.draw(
            &(EmptyElement::at(at)
                + PathElement::new(vec![(-s, -s), (s, s)], stroke)
                + PathElement::new(vec![(-s, s), (s, -s)], stroke)),
        ),
    }
}
