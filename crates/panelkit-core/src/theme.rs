//! Typography for sidebar panels
//!
//! Widgets only carry a [`FontRole`]; the concrete point size and weight are
//! resolved against a [`Typography`] when the host paints them.

use serde::{Deserialize, Serialize};

/// Font role selected on a widget builder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FontRole {
    #[default]
    Normal,
    Bold,
    Small,
}

/// Font weight options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FontWeight {
    Normal,
    Bold,
}

impl FontWeight {
    pub fn to_numeric(&self) -> u16 {
        match self {
            FontWeight::Normal => 400,
            FontWeight::Bold => 700,
        }
    }
}

/// A resolved font
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontSpec {
    pub size: u32,
    pub weight: FontWeight,
}

/// Point sizes for each font role
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Typography {
    pub normal_size: u32,
    pub bold_size: u32,
    pub small_size: u32,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            normal_size: 16,
            bold_size: 16,
            small_size: 12,
        }
    }
}

impl Typography {
    /// Resolve a role to a concrete font
    pub fn resolve(&self, role: FontRole) -> FontSpec {
        match role {
            FontRole::Normal => FontSpec {
                size: self.normal_size,
                weight: FontWeight::Normal,
            },
            FontRole::Bold => FontSpec {
                size: self.bold_size,
                weight: FontWeight::Bold,
            },
            FontRole::Small => FontSpec {
                size: self.small_size,
                weight: FontWeight::Normal,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_role_is_normal() {
        assert_eq!(FontRole::default(), FontRole::Normal);
    }

    #[test]
    fn test_resolve() {
        let typography = Typography::default();
        assert_eq!(
            typography.resolve(FontRole::Bold),
            FontSpec {
                size: 16,
                weight: FontWeight::Bold
            }
        );
        assert_eq!(typography.resolve(FontRole::Small).size, 12);
        assert_eq!(typography.resolve(FontRole::Normal).weight.to_numeric(), 400);
    }
}
