use std::fmt::{Display, Formatter};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgDrawOptions {
    ///The theme to use for the svg
    #[serde(default)]
    pub theme: SvgLayoutTheme,
    ///Draw the zone in which the weighted centroid must lie
    #[serde(default)]
    pub draw_balance_zone: bool,
    ///Draw a marker at the weighted centroid of the layout
    #[serde(default)]
    pub draw_centroid: bool,
    ///Print the placement index of each cylinder at its center
    #[serde(default)]
    pub label_cylinders: bool,
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            theme: SvgLayoutTheme::default(),
            draw_balance_zone: true,
            draw_centroid: true,
            label_cylinders: true,
        }
    }
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgLayoutTheme {
    pub stroke_width_multiplier: f32,
    pub container_stroke: Color,
    pub cylinder_fill: Color,
    pub cylinder_stroke: Color,
    pub balance_zone_stroke: Color,
    pub centroid_fill: Color,
}

impl Default for SvgLayoutTheme {
    fn default() -> Self {
        SvgLayoutTheme::HARBOUR
    }
}

impl SvgLayoutTheme {
    pub const HARBOUR: SvgLayoutTheme = SvgLayoutTheme {
        stroke_width_multiplier: 2.0,
        container_stroke: Color(0xF4, 0xBA, 0x02),
        cylinder_fill: Color(0x99, 0xD9, 0xDD),
        cylinder_stroke: Color(0x01, 0x36, 0x4C),
        balance_zone_stroke: Color(0x63, 0x63, 0x63),
        centroid_fill: Color(0xD0, 0x00, 0x00),
    };

    pub const GRAY: SvgLayoutTheme = SvgLayoutTheme {
        stroke_width_multiplier: 2.5,
        container_stroke: Color(0x2D, 0x2D, 0x2D),
        cylinder_fill: Color(0xD3, 0xD3, 0xD3),
        cylinder_stroke: Color(0x63, 0x63, 0x63),
        balance_zone_stroke: Color(0x63, 0x63, 0x63),
        centroid_fill: Color(0x2D, 0x2D, 0x2D),
    };
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Color(pub u8, pub u8, pub u8);

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl From<String> for Color {
    fn from(mut s: String) -> Self {
        if s.starts_with('#') {
            s.remove(0);
        }
        let r = u8::from_str_radix(&s[0..2], 16).unwrap();
        let g = u8::from_str_radix(&s[2..4], 16).unwrap();
        let b = u8::from_str_radix(&s[4..6], 16).unwrap();
        Color(r, g, b)
    }
}

impl From<&str> for Color {
    fn from(s: &str) -> Self {
        Color::from(s.to_owned())
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<<S as Serializer>::Ok, <S as Serializer>::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("{self}"))
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, <D as Deserializer<'de>>::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Color::from(s))
    }
}
