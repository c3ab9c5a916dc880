//! Theme token tables.
//!
//! A theme is a flat table of token name to HSL value. Palettes are built-in
//! and selected at build time through `[theme].name`; individual tokens can be
//! replaced through `[theme].overrides`. The resolved table renders as a
//! `:root` block of CSS custom properties for the stylesheet layer.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    config::ThemeConfig,
    error::{CoreError, Result},
};

/// An HSL color value, stored as the space-separated triplet CSS custom
/// properties expect ("222 47% 11%").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hsl {
    /// Hue in degrees, 0..360.
    pub h: u16,
    /// Saturation percentage, 0..=100.
    pub s: u8,
    /// Lightness percentage, 0..=100.
    pub l: u8,
}

impl Hsl {
    /// Parse a "H S% L%" triplet.
    pub fn parse(raw: &str) -> Option<Self> {
        let mut parts = raw.split_whitespace();
        let h: u16 = parts.next()?.parse().ok()?;
        let s: u8 = parts.next()?.strip_suffix('%')?.parse().ok()?;
        let l: u8 = parts.next()?.strip_suffix('%')?.parse().ok()?;

        if parts.next().is_some() || h >= 360 || s > 100 || l > 100 {
            return None;
        }

        Some(Self { h, s, l })
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}% {}%", self.h, self.s, self.l)
    }
}

/// One token in a built-in palette.
#[derive(Debug, Clone, Copy)]
pub struct ThemeToken {
    /// Token name, emitted as `--name`.
    pub name: &'static str,

    /// Token value.
    pub value: Hsl,
}

const fn token(name: &'static str, h: u16, s: u8, l: u8) -> ThemeToken {
    ThemeToken {
        name,
        value: Hsl { h, s, l },
    }
}

/// Dark palette. The default.
pub const MIDNIGHT: &[ThemeToken] = &[
    token("background", 222, 47, 11),
    token("foreground", 210, 25, 90),
    token("card", 222, 47, 10),
    token("card-foreground", 210, 25, 90),
    token("popover", 222, 47, 11),
    token("popover-foreground", 210, 25, 90),
    token("primary", 210, 80, 55),
    token("primary-foreground", 210, 25, 90),
    token("secondary", 217, 32, 17),
    token("secondary-foreground", 210, 25, 90),
    token("muted", 217, 32, 17),
    token("muted-foreground", 215, 15, 70),
    token("accent", 216, 30, 20),
    token("accent-foreground", 210, 25, 90),
    token("destructive", 0, 65, 30),
    token("destructive-foreground", 210, 25, 90),
    token("border", 217, 32, 18),
    token("input", 217, 32, 17),
    token("ring", 224, 65, 48),
    token("sidebar", 225, 40, 9),
    token("sidebar-foreground", 210, 25, 90),
    token("sidebar-border", 225, 25, 12),
    token("text-body", 210, 15, 70),
];

/// Light palette with the same token set and hues.
pub const DAYLIGHT: &[ThemeToken] = &[
    token("background", 210, 40, 98),
    token("foreground", 222, 47, 11),
    token("card", 0, 0, 100),
    token("card-foreground", 222, 47, 11),
    token("popover", 0, 0, 100),
    token("popover-foreground", 222, 47, 11),
    token("primary", 210, 80, 45),
    token("primary-foreground", 210, 40, 98),
    token("secondary", 210, 40, 94),
    token("secondary-foreground", 222, 47, 11),
    token("muted", 210, 40, 94),
    token("muted-foreground", 215, 16, 40),
    token("accent", 216, 30, 90),
    token("accent-foreground", 222, 47, 11),
    token("destructive", 0, 72, 45),
    token("destructive-foreground", 210, 40, 98),
    token("border", 214, 32, 88),
    token("input", 214, 32, 91),
    token("ring", 224, 65, 48),
    token("sidebar", 210, 40, 96),
    token("sidebar-foreground", 222, 47, 11),
    token("sidebar-border", 214, 25, 90),
    token("text-body", 215, 15, 35),
];

/// A resolved theme: palette tokens with overrides applied.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Palette name the theme was resolved from.
    pub name: String,

    /// Token table in palette order, overrides appended last.
    pub tokens: Vec<(String, Hsl)>,
}

impl Theme {
    /// Look up a built-in palette by name.
    pub fn builtin(name: &str) -> Option<&'static [ThemeToken]> {
        match name {
            "midnight" => Some(MIDNIGHT),
            "daylight" => Some(DAYLIGHT),
            _ => None,
        }
    }

    /// Resolve the theme selected by configuration.
    ///
    /// Overrides replace palette tokens by name; an override naming a token
    /// the palette does not carry is appended as a new token.
    pub fn resolve(config: &ThemeConfig) -> Result<Self> {
        let palette = Self::builtin(&config.name).ok_or_else(|| {
            CoreError::config(format!("unknown theme palette: {}", config.name))
        })?;

        let mut tokens: Vec<(String, Hsl)> = palette
            .iter()
            .map(|t| (t.name.to_string(), t.value))
            .collect();

        for (name, raw) in &config.overrides {
            let value = Hsl::parse(raw).ok_or_else(|| {
                CoreError::config(format!(
                    "malformed HSL value for theme token `{name}`: {raw:?}"
                ))
            })?;

            match tokens.iter_mut().find(|(n, _)| n == name) {
                Some(slot) => slot.1 = value,
                None => tokens.push((name.clone(), value)),
            }
        }

        Ok(Self {
            name: config.name.clone(),
            tokens,
        })
    }

    /// Look up a token value by name.
    pub fn token(&self, name: &str) -> Option<Hsl> {
        self.tokens
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, value)| *value)
    }

    /// Render the token table as a `:root` CSS custom-property block.
    pub fn css_variables(&self) -> String {
        let mut css = String::from(":root {\n");
        for (name, value) in &self.tokens {
            css.push_str(&format!("  --{name}: {value};\n"));
        }
        css.push_str("}\n");
        css
    }
}
