use crate::tokens::{Theme, table_stripe_base_value, table_stripe_tinted_value};

/// Tables opt into zebra striping with this class.
pub const STRIPED_TABLE_CLASS: &str = "alternate-color";

/// Zebra stripe assigned to a visible row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stripe {
    Base,
    Tinted,
}

impl Stripe {
    /// Inline background value for this stripe under the given theme.
    pub fn background(self, theme: Theme) -> &'static str {
        match self {
            Stripe::Base => table_stripe_base_value(theme),
            Stripe::Tinted => table_stripe_tinted_value(theme),
        }
    }
}

/// Alternate stripes over the visible rows only, starting with the base
/// color. Hidden rows get no stripe and do not advance the alternation.
pub fn stripe_rows(visible: &[bool]) -> Vec<Option<Stripe>> {
    let mut next_tinted = false;
    visible
        .iter()
        .map(|&is_visible| {
            if !is_visible {
                return None;
            }
            let stripe = if next_tinted {
                Stripe::Tinted
            } else {
                Stripe::Base
            };
            next_tinted = !next_tinted;
            Some(stripe)
        })
        .collect()
}
