pub const FILTER_ALL: &str = "all";
pub const SHOW_DELAY_MS: u32 = 100;
pub const HIDE_DELAY_MS: u32 = 400;

/// Inline style steps for one project card when a filter is applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardTransition {
    /// Immediately `display:block; opacity:0; translateY(30px)`, then after
    /// `SHOW_DELAY_MS` ease to `opacity:1; translateY(0)` over 0.6s.
    Show,
    /// Immediately fade to `opacity:0; translateY(-30px)` over 0.4s, then
    /// `display:none` after `HIDE_DELAY_MS`.
    Hide,
}

impl CardTransition {
    pub fn for_card(filter: &str, category: Option<&str>) -> Self {
        if filter == FILTER_ALL || category == Some(filter) {
            CardTransition::Show
        } else {
            CardTransition::Hide
        }
    }

    /// `(display, opacity, transform, transition)` applied right away.
    pub fn immediate(
        self,
    ) -> (Option<&'static str>, &'static str, &'static str, Option<&'static str>) {
        match self {
            CardTransition::Show => (Some("block"), "0", "translateY(30px)", None),
            CardTransition::Hide => (None, "0", "translateY(-30px)", Some("all 0.4s ease-in")),
        }
    }

    pub fn delay_ms(self) -> u32 {
        match self {
            CardTransition::Show => SHOW_DELAY_MS,
            CardTransition::Hide => HIDE_DELAY_MS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_shows_everything() {
        assert_eq!(CardTransition::for_card("all", Some("ai")), CardTransition::Show);
        assert_eq!(CardTransition::for_card("all", None), CardTransition::Show);
    }

    #[test]
    fn category_must_match_exactly() {
        assert_eq!(CardTransition::for_card("web", Some("web")), CardTransition::Show);
        assert_eq!(CardTransition::for_card("web", Some("Web")), CardTransition::Hide);
        assert_eq!(CardTransition::for_card("web", None), CardTransition::Hide);
        assert_eq!(CardTransition::Hide.delay_ms(), 400);
    }
}
