// Editable team display names.

use saroo_core::draft::Side;

use crate::config::TeamsConfig;

/// Current display name per side, plus the defaults a blank rename falls
/// back to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamNames {
    blue: String,
    red: String,
    defaults: TeamsConfig,
}

impl Default for TeamNames {
    fn default() -> Self {
        TeamNames::new(TeamsConfig::default())
    }
}

impl TeamNames {
    pub fn new(defaults: TeamsConfig) -> Self {
        TeamNames {
            blue: defaults.blue.clone(),
            red: defaults.red.clone(),
            defaults,
        }
    }

    pub fn get(&self, side: Side) -> &str {
        match side {
            Side::Blue => &self.blue,
            Side::Red => &self.red,
        }
    }

    pub fn default_for(&self, side: Side) -> &str {
        match side {
            Side::Blue => &self.defaults.blue,
            Side::Red => &self.defaults.red,
        }
    }

    /// Commit a rename. The input is trimmed; a blank result restores the
    /// side's default. Returns the name now in effect.
    pub fn rename(&mut self, side: Side, input: &str) -> &str {
        let trimmed = input.trim();
        let name = if trimmed.is_empty() {
            self.default_for(side).to_string()
        } else {
            trimmed.to_string()
        };
        let slot = match side {
            Side::Blue => &mut self.blue,
            Side::Red => &mut self.red,
        };
        *slot = name;
        slot
    }
}
