mod layout_to_svg;
pub mod svg_util;

pub use layout_to_svg::layout_to_svg;
