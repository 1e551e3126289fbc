use std::fmt::{Display, Formatter};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgDrawOptions {
    ///The theme to use for the svg
    #[serde(default)]
    pub theme: SvgWalkTheme,
    ///Draw the lattice dots underneath the walk
    #[serde(default)]
    pub draw_grid: bool,
    ///Mark the first and last waypoint of each walk
    #[serde(default)]
    pub mark_endpoints: bool,
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            theme: SvgWalkTheme::default(),
            draw_grid: true,
            mark_endpoints: false,
        }
    }
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgWalkTheme {
    pub stroke_width_multiplier: f32,
    pub background_fill: Color,
    pub grid_dot_fill: Color,
    pub walk_stroke: Color,
    pub endpoint_fill: Color,
}

impl Default for SvgWalkTheme {
    fn default() -> Self {
        SvgWalkTheme::STONE
    }
}

impl SvgWalkTheme {
    /// Dark ink on a warm gray canvas, after the source material.
    pub const STONE: SvgWalkTheme = SvgWalkTheme {
        stroke_width_multiplier: 2.0,
        background_fill: Color(0xE7, 0xE5, 0xE4),
        grid_dot_fill: Color(0x09, 0x09, 0x09),
        walk_stroke: Color(0x09, 0x09, 0x09),
        endpoint_fill: Color(0xD0, 0x00, 0x00),
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
