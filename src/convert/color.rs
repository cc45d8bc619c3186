//! Color conversion between hex, RGB, and HSL.
//!
//! Any of the three written forms parses to an [`Rgb`] value; the formatters
//! render all three back out. HSL math uses the standard piecewise formulas
//! with hue in degrees and saturation/lightness as percentages.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ColorError {
    #[error("cannot parse '{0}' as hex, rgb, or hsl")]
    Unrecognized(String),
    #[error("rgb components must be 0-255, got {0}")]
    RgbRange(String),
    #[error("hsl must be h 0-360, s/l 0-100%, got {0}")]
    HslRange(String),
}

/// An 8-bit-per-channel RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// HSL with hue in degrees (0-360) and saturation/lightness in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Rgb {
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn to_rgb_string(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    pub fn to_hsl(self) -> Hsl {
        let r = self.r as f64 / 255.0;
        let g = self.g as f64 / 255.0;
        let b = self.b as f64 / 255.0;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;
        let delta = max - min;

        if delta == 0.0 {
            return Hsl { h: 0.0, s: 0.0, l: l * 100.0 };
        }

        let s = if l > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };
        let h = if max == r {
            ((g - b) / delta).rem_euclid(6.0)
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        } * 60.0;

        Hsl {
            h,
            s: s * 100.0,
            l: l * 100.0,
        }
    }
}

impl Hsl {
    pub fn to_hsl_string(self) -> String {
        format!(
            "hsl({}, {}%, {}%)",
            self.h.round(),
            self.s.round(),
            self.l.round()
        )
    }

    pub fn to_rgb(self) -> Rgb {
        let h = self.h.rem_euclid(360.0);
        let s = self.s / 100.0;
        let l = self.l / 100.0;

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = c * (1.0 - ((h / 60.0).rem_euclid(2.0) - 1.0).abs());
        let m = l - c / 2.0;

        let (r, g, b) = match h {
            h if h < 60.0 => (c, x, 0.0),
            h if h < 120.0 => (x, c, 0.0),
            h if h < 180.0 => (0.0, c, x),
            h if h < 240.0 => (0.0, x, c),
            h if h < 300.0 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        Rgb {
            r: ((r + m) * 255.0).round() as u8,
            g: ((g + m) * 255.0).round() as u8,
            b: ((b + m) * 255.0).round() as u8,
        }
    }
}

/// Parse a color in any supported written form:
/// `#rgb`, `#rrggbb`, `rgb(r, g, b)`, `r, g, b`, or `hsl(h, s%, l%)`.
pub fn parse(input: &str) -> Result<Rgb, ColorError> {
    let s = input.trim();
    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(|| ColorError::Unrecognized(s.to_string()));
    }
    if let Some(body) = strip_call(s, "hsl") {
        return parse_hsl_parts(&body, s);
    }
    if let Some(body) = strip_call(s, "rgb") {
        return parse_rgb_parts(&body, s);
    }
    // Bare comma triples: "12, 34, 56" is rgb; a % anywhere means hsl
    if s.contains(',') {
        if s.contains('%') {
            return parse_hsl_parts(s, s);
        }
        return parse_rgb_parts(s, s);
    }
    Err(ColorError::Unrecognized(s.to_string()))
}

fn strip_call(s: &str, name: &str) -> Option<String> {
    let rest = s.strip_prefix(name)?.trim_start();
    let inner = rest.strip_prefix('(')?.strip_suffix(')')?;
    Some(inner.to_string())
}

fn parse_hex(hex: &str) -> Option<Rgb> {
    match hex.len() {
        3 => {
            let mut chars = hex.chars();
            let (r, g, b) = (chars.next()?, chars.next()?, chars.next()?);
            let expand = |c: char| u8::from_str_radix(&format!("{c}{c}"), 16).ok();
            Some(Rgb {
                r: expand(r)?,
                g: expand(g)?,
                b: expand(b)?,
            })
        }
        6 => Some(Rgb {
            r: u8::from_str_radix(&hex[0..2], 16).ok()?,
            g: u8::from_str_radix(&hex[2..4], 16).ok()?,
            b: u8::from_str_radix(&hex[4..6], 16).ok()?,
        }),
        _ => None,
    }
}

fn parse_rgb_parts(body: &str, original: &str) -> Result<Rgb, ColorError> {
    let parts: Vec<i64> = body
        .split(',')
        .map(|p| p.trim().parse::<i64>())
        .collect::<Result<_, _>>()
        .map_err(|_| ColorError::Unrecognized(original.to_string()))?;
    if parts.len() != 3 {
        return Err(ColorError::Unrecognized(original.to_string()));
    }
    if parts.iter().any(|&v| !(0..=255).contains(&v)) {
        return Err(ColorError::RgbRange(original.to_string()));
    }
    Ok(Rgb {
        r: parts[0] as u8,
        g: parts[1] as u8,
        b: parts[2] as u8,
    })
}

fn parse_hsl_parts(body: &str, original: &str) -> Result<Rgb, ColorError> {
    let parts: Vec<f64> = body
        .split(',')
        .map(|p| p.trim().trim_end_matches('%').trim().parse::<f64>())
        .collect::<Result<_, _>>()
        .map_err(|_| ColorError::Unrecognized(original.to_string()))?;
    if parts.len() != 3 {
        return Err(ColorError::Unrecognized(original.to_string()));
    }
    let hsl = Hsl {
        h: parts[0],
        s: parts[1],
        l: parts[2],
    };
    if !(0.0..=360.0).contains(&hsl.h)
        || !(0.0..=100.0).contains(&hsl.s)
        || !(0.0..=100.0).contains(&hsl.l)
    {
        return Err(ColorError::HslRange(original.to_string()));
    }
    Ok(hsl.to_rgb())
}
