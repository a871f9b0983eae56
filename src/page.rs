//! Page selection for the presentation layers.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// The three views of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Calculator,
    EnergyTips,
    About,
}

/// Unknown page name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown page \"{0}\" (expected one of: calculator, tips, about)")]
pub struct PageError(pub String);

impl Page {
    /// All pages in navigation order.
    pub const ALL: [Self; 3] = [Self::Calculator, Self::EnergyTips, Self::About];

    pub const fn title(self) -> &'static str {
        match self {
            Self::Calculator => "Calculator",
            Self::EnergyTips => "Energy Tips",
            Self::About => "About",
        }
    }

    /// Next page in navigation order, wrapping around.
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|p| *p == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous page in navigation order, wrapping around.
    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|p| *p == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for Page {
    type Err = PageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "calculator" | "calc" => Ok(Self::Calculator),
            "tips" | "energy-tips" | "energy_tips" | "energy tips" => Ok(Self::EnergyTips),
            "about" => Ok(Self::About),
            _ => Err(PageError(s.to_string())),
        }
    }
}
