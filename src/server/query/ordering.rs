//! Ordering resolution.
//!
//! An `ordering` expression is a comma separated list of field tokens, each optionally
//! prefixed with `-` for descending order, e.g. `-distance,source`. Each entity declares a
//! whitelist mapping client tokens to a typed sort field; the data layer knows which column
//! or joined column every field sorts by. Tokens outside the whitelist are dropped. When
//! nothing valid remains the entity's default key is used.
//!
//! Rows that compare equal on every resolved key keep the store's natural order, which is
//! stable but unspecified. No tie-breaking key is appended.

use sea_orm::Order;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    pub fn into_order(self) -> Order {
        match self {
            Self::Asc => Order::Asc,
            Self::Desc => Order::Desc,
        }
    }
}

/// One resolved sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey<F> {
    pub field: F,
    pub direction: Direction,
}

impl<F> SortKey<F> {
    pub const fn asc(field: F) -> Self {
        Self {
            field,
            direction: Direction::Asc,
        }
    }

    pub const fn desc(field: F) -> Self {
        Self {
            field,
            direction: Direction::Desc,
        }
    }
}

/// Sortable fields of one entity.
pub trait SortField: Copy + Eq + Sized + 'static {
    /// Client tokens accepted in `ordering` and the field each one resolves to.
    const WHITELIST: &'static [(&'static str, Self)];

    /// Key used when no valid token was requested.
    const DEFAULT: SortKey<Self>;

    /// Client-facing token for the field.
    fn token(self) -> &'static str;
}

/// Resolves a raw ordering expression against the entity's whitelist.
///
/// # Arguments
/// - `raw` - Value of the `ordering` query parameter, if any
///
/// # Returns
/// The requested keys in order, or `[F::DEFAULT]` when none survive.
pub fn resolve<F: SortField>(raw: Option<&str>) -> Vec<SortKey<F>> {
    let keys: Vec<SortKey<F>> = raw
        .unwrap_or_default()
        .split(',')
        .filter_map(|token| {
            let token = token.trim();
            let (name, direction) = match token.strip_prefix('-') {
                Some(name) => (name, Direction::Desc),
                None => (token, Direction::Asc),
            };

            F::WHITELIST
                .iter()
                .find(|(allowed, _)| *allowed == name)
                .map(|(_, field)| SortKey {
                    field: *field,
                    direction,
                })
        })
        .collect();

    if keys.is_empty() {
        vec![F::DEFAULT]
    } else {
        keys
    }
}

/// Renders resolved keys back into an ordering expression.
pub fn render<F: SortField>(keys: &[SortKey<F>]) -> String {
    keys.iter()
        .map(|key| match key.direction {
            Direction::Asc => key.field.token().to_string(),
            Direction::Desc => format!("-{}", key.field.token()),
        })
        .collect::<Vec<_>>()
        .join(",")
}
