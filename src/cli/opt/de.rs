use std::{fmt, path::PathBuf};

use booklet::layout::Alignment;
use image::Rgba;
use serde::{
    de::{Error, SeqAccess, Unexpected, Visitor},
    Deserializer,
};

pub(super) fn deserialize_opt_path<'de, D>(deserializer: D) -> Result<Option<PathBuf>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_string(OptPathVisitor)
}

struct OptPathVisitor;

impl<'de> Visitor<'de> for OptPathVisitor {
    type Value = Option<PathBuf>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a path")
    }

    fn visit_string<E>(self, v: String) -> Result<Self::Value, E>
    where
        E: Error,
    {
        Ok(Some(PathBuf::from(v)))
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: Error,
    {
        Ok(Some(PathBuf::from(v)))
    }
}

pub(super) fn deserialize_opt_u64<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_u64(OptU64Visitor)
}

struct OptU64Visitor;

impl<'de> Visitor<'de> for OptU64Visitor {
    type Value = Option<u64>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a positive number")
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: Error,
    {
        Ok(Some(v))
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: Error,
    {
        u64::try_from(v)
            .map(Some)
            .map_err(|_| E::invalid_value(Unexpected::Signed(v), &self))
    }
}

/// `"#rrggbb"`, `"#rrggbbaa"`, `(r, g, b)` or `(r, g, b, a)`
pub(super) fn deserialize_color<'de, D>(deserializer: D) -> Result<Rgba<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(ColorVisitor)
}

struct ColorVisitor;

fn parse_hex_color(v: &str) -> Option<Rgba<u8>> {
    let hex = v.strip_prefix('#')?;
    if !hex.is_ascii() || !(hex.len() == 6 || hex.len() == 8) {
        return None;
    }
    let mut rgba = [0xFF; 4];
    for (i, chunk) in hex.as_bytes().chunks(2).enumerate() {
        let digits = std::str::from_utf8(chunk).ok()?;
        rgba[i] = u8::from_str_radix(digits, 16).ok()?;
    }
    Some(Rgba(rgba))
}

impl<'de> Visitor<'de> for ColorVisitor {
    type Value = Rgba<u8>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a color like \"#f8dcbf\" or (248, 220, 191)")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: Error,
    {
        parse_hex_color(v).ok_or_else(|| E::invalid_value(Unexpected::Str(v), &self))
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut rgba = [0xFF; 4];
        for (i, channel) in rgba.iter_mut().enumerate() {
            match seq.next_element::<u8>()? {
                Some(value) => *channel = value,
                None if i == 3 => break,
                None => return Err(A::Error::invalid_length(i, &self)),
            }
        }
        if seq.next_element::<u8>()?.is_some() {
            return Err(A::Error::invalid_length(5, &self));
        }
        Ok(Rgba(rgba))
    }
}

/// `"left"`, `"center"`, `"right"` or the numbers `0`, `1`, `2`
pub(super) fn deserialize_alignment<'de, D>(deserializer: D) -> Result<Alignment, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(AlignmentVisitor)
}

struct AlignmentVisitor;

impl<'de> Visitor<'de> for AlignmentVisitor {
    type Value = Alignment;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "one of \"left\", \"center\" or \"right\"")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: Error,
    {
        v.parse()
            .map_err(|_| E::invalid_value(Unexpected::Str(v), &self))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: Error,
    {
        match v {
            0 => Ok(Alignment::Left),
            1 => Ok(Alignment::Center),
            2 => Ok(Alignment::Right),
            _ => Err(E::invalid_value(Unexpected::Unsigned(v), &self)),
        }
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: Error,
    {
        match u64::try_from(v) {
            Ok(v) => self.visit_u64(v),
            Err(_) => Err(E::invalid_value(Unexpected::Signed(v), &self)),
        }
    }
}
