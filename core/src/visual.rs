pub const TITLE_TEXT: &str = "GRENINJA STYLE";
pub const BUTTON_LABEL: &str = "WATER SHURIKEN!";
pub const DEFAULT_SPRITE_SRC: &str = "greninja.png";
pub const SPRITE_ALT: &str = "Ninja Frog";

pub const CHARACTER_CLASS: &str = "character-image";
pub const PROJECTILE_CLASS: &str = "shuriken";
pub const THROWING_CLASS: &str = "throwing";
pub const THROWN_CLASS: &str = "thrown";

/// What the stylesheet sees for a given flag value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThrowVisual {
    pub throwing: bool,
}

impl ThrowVisual {
    pub const fn from_flag(is_throwing: bool) -> Self {
        Self {
            throwing: is_throwing,
        }
    }

    pub fn button_disabled(&self) -> bool {
        self.throwing
    }

    pub fn character_modifier(&self) -> Option<&'static str> {
        self.throwing.then_some(THROWING_CLASS)
    }

    pub fn projectile_modifier(&self) -> Option<&'static str> {
        self.throwing.then_some(THROWN_CLASS)
    }

    pub fn character_classes(&self) -> String {
        join_classes(CHARACTER_CLASS, self.character_modifier())
    }

    pub fn projectile_classes(&self) -> String {
        join_classes(PROJECTILE_CLASS, self.projectile_modifier())
    }
}

fn join_classes(base: &str, modifier: Option<&str>) -> String {
    match modifier {
        Some(modifier) => format!("{base} {modifier}"),
        None => base.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_has_no_modifiers() {
        let visual = ThrowVisual::from_flag(false);
        assert!(!visual.button_disabled());
        assert_eq!(visual.character_classes(), "character-image");
        assert_eq!(visual.projectile_classes(), "shuriken");
    }

    #[test]
    fn busy_sets_both_modifiers() {
        let visual = ThrowVisual::from_flag(true);
        assert!(visual.button_disabled());
        assert_eq!(visual.character_classes(), "character-image throwing");
        assert_eq!(visual.projectile_classes(), "shuriken thrown");
    }
}
