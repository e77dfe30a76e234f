//! # Palette
//!
//! Named colors for tinting preview shapes, plus the swatch descriptions
//! a color-picker UI lists.

/// A named color, as shown in the swatch collection.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorDescription {
    /// Display name, e.g. "Coral"
    pub name: String,
    /// Linear RGB components in 0.0..=1.0
    pub rgb: [f32; 3],
}

// Built-in color table. Lookup is case-insensitive.
const BUILTIN_COLORS: &[(&str, [f32; 3])] = &[
    ("Black", [0.0, 0.0, 0.0]),
    ("White", [1.0, 1.0, 1.0]),
    ("Gray", [0.5, 0.5, 0.5]),
    ("Red", [1.0, 0.0, 0.0]),
    ("Green", [0.0, 1.0, 0.0]),
    ("Blue", [0.0, 0.0, 1.0]),
    ("Cyan", [0.0, 1.0, 1.0]),
    ("Magenta", [1.0, 0.0, 1.0]),
    ("Yellow", [1.0, 1.0, 0.0]),
    ("Orange", [1.0, 0.5, 0.0]),
    ("Coral", [1.0, 0.5, 0.31]),
    ("Gold", [1.0, 0.84, 0.0]),
    ("Teal", [0.0, 0.5, 0.5]),
    ("Indigo", [0.29, 0.0, 0.51]),
    ("Violet", [0.93, 0.51, 0.93]),
    ("Brown", [0.55, 0.27, 0.07]),
];

/// Named-color table.
#[derive(Debug, Clone)]
pub struct Palette {
    colors: Vec<ColorDescription>,
}

impl Palette {
    /// The built-in palette
    pub fn builtin() -> Self {
        Self {
            colors: BUILTIN_COLORS
                .iter()
                .map(|(name, rgb)| ColorDescription {
                    name: (*name).to_string(),
                    rgb: *rgb,
                })
                .collect(),
        }
    }

    /// Look up a color by name, case-insensitively
    pub fn color(&self, name: &str) -> Option<[f32; 3]> {
        self.colors
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
            .map(|c| c.rgb)
    }

    /// All swatch descriptions, in display order
    pub fn descriptions(&self) -> &[ColorDescription] {
        &self.colors
    }

    /// Add or replace a named color
    pub fn add(&mut self, name: impl Into<String>, rgb: [f32; 3]) {
        let name = name.into();
        if let Some(existing) = self
            .colors
            .iter_mut()
            .find(|c| c.name.eq_ignore_ascii_case(&name))
        {
            existing.rgb = rgb;
        } else {
            self.colors.push(ColorDescription { name, rgb });
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        let palette = Palette::builtin();
        assert_eq!(palette.color("coral"), palette.color("Coral"));
        assert!(palette.color("Coral").is_some());
    }

    #[test]
    fn test_unknown_name_is_none() {
        let palette = Palette::builtin();
        assert_eq!(palette.color("NotAColor"), None);
    }

    #[test]
    fn test_add_replaces_existing() {
        let mut palette = Palette::builtin();
        let count = palette.descriptions().len();

        palette.add("red", [0.9, 0.1, 0.1]);
        assert_eq!(palette.descriptions().len(), count);
        assert_eq!(palette.color("Red"), Some([0.9, 0.1, 0.1]));

        palette.add("Salmon", [0.98, 0.5, 0.45]);
        assert_eq!(palette.descriptions().len(), count + 1);
    }
}
