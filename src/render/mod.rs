/// Figure rendering: study styles and the measured-vs-computed grid.
pub mod figure;
pub mod style;

pub use figure::render_comparison;
