//! Responsive button-grid planning.
//!
//! Given the available width and the size of one button, [`GridMetrics::plan`]
//! works out how many buttons fit on a row and how many trailing buttons
//! spill into a final, separately centered row. The plan is a pure function
//! of its inputs; callers recompute it whenever the width changes.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for invalid grid metrics.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("Item width must be positive, got {0}")]
    NonPositiveItemWidth(f64),
    #[error("Horizontal padding must not be negative, got {0}")]
    NegativePadding(f64),
    #[error("Item spacing must not be negative, got {0}")]
    NegativeSpacing(f64),
    #[error("{0} must be a finite number")]
    NonFinite(&'static str),
}

/// Fixed geometry of the button grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGridMetrics")]
pub struct GridMetrics {
    horizontal_padding: f64,
    item_width: f64,
    item_spacing: f64,
}

/// Unchecked serialized form of [`GridMetrics`].
#[derive(Deserialize)]
struct RawGridMetrics {
    horizontal_padding: f64,
    item_width: f64,
    item_spacing: f64,
}

impl TryFrom<RawGridMetrics> for GridMetrics {
    type Error = LayoutError;

    fn try_from(raw: RawGridMetrics) -> Result<Self, Self::Error> {
        GridMetrics::new(raw.horizontal_padding, raw.item_width, raw.item_spacing)
    }
}

impl Default for GridMetrics {
    /// Phone-sized metrics: 16pt side padding, 102pt buttons, no spacing.
    fn default() -> Self {
        Self {
            horizontal_padding: 16.0,
            item_width: 102.0,
            item_spacing: 0.0,
        }
    }
}

impl GridMetrics {
    pub fn new(
        horizontal_padding: f64,
        item_width: f64,
        item_spacing: f64,
    ) -> Result<Self, LayoutError> {
        if !horizontal_padding.is_finite() {
            return Err(LayoutError::NonFinite("horizontal padding"));
        }
        if !item_width.is_finite() {
            return Err(LayoutError::NonFinite("item width"));
        }
        if !item_spacing.is_finite() {
            return Err(LayoutError::NonFinite("item spacing"));
        }
        if horizontal_padding < 0.0 {
            return Err(LayoutError::NegativePadding(horizontal_padding));
        }
        if item_width <= 0.0 {
            return Err(LayoutError::NonPositiveItemWidth(item_width));
        }
        if item_spacing < 0.0 {
            return Err(LayoutError::NegativeSpacing(item_spacing));
        }

        Ok(Self {
            horizontal_padding,
            item_width,
            item_spacing,
        })
    }

    pub fn horizontal_padding(&self) -> f64 {
        self.horizontal_padding
    }

    pub fn item_width(&self) -> f64 {
        self.item_width
    }

    pub fn item_spacing(&self) -> f64 {
        self.item_spacing
    }

    /// Number of items that fit on one row of `available_width`.
    ///
    /// Padding is removed from both sides. With more than one item, one
    /// spacing unit is added back since the last item in a row carries no
    /// trailing gap. Returns 0 when not even one item fits.
    pub fn items_per_row(&self, available_width: f64, item_count: usize) -> usize {
        let mut usable = available_width - 2.0 * self.horizontal_padding;
        if item_count > 1 {
            usable += self.item_spacing;
        }

        let per_row = (usable / (self.item_width + self.item_spacing)).trunc();
        if per_row.is_finite() && per_row >= 1.0 {
            per_row as usize
        } else {
            0
        }
    }

    /// Plan the grid for `item_count` items across `available_width`.
    pub fn plan(&self, available_width: f64, item_count: usize) -> LayoutPlan {
        let items_per_row = self.items_per_row(available_width, item_count);
        let overflow_count = if items_per_row > 0 {
            item_count % items_per_row
        } else {
            tracing::warn!(
                available_width,
                item_width = self.item_width,
                "no item fits on a row; every item overflows"
            );
            item_count
        };

        tracing::debug!(
            available_width,
            items_per_row,
            overflow_count,
            "planned grid"
        );

        LayoutPlan {
            item_count,
            items_per_row,
            overflow_count,
        }
    }
}

/// Plan the grid with explicit metrics.
pub fn plan_layout(available_width: f64, metrics: &GridMetrics, item_count: usize) -> LayoutPlan {
    metrics.plan(available_width, item_count)
}

/// How an ordered run of items splits into full grid rows and a trailing row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LayoutPlan {
    pub item_count: usize,
    pub items_per_row: usize,
    pub overflow_count: usize,
}

impl LayoutPlan {
    /// True when not even one item fits on a row.
    pub fn is_degenerate(&self) -> bool {
        self.items_per_row == 0
    }

    /// Number of items rendered in the primary grid.
    pub fn grid_count(&self) -> usize {
        self.item_count - self.overflow_count.min(self.item_count)
    }

    /// Number of full rows in the primary grid.
    pub fn full_rows(&self) -> usize {
        if self.items_per_row == 0 {
            0
        } else {
            self.grid_count() / self.items_per_row
        }
    }

    /// Split `items` into the grid part and the trailing overflow part.
    ///
    /// The overflow part is the last `overflow_count` items (capped at the
    /// slice length); concatenating both halves yields `items` again.
    pub fn split<'a, T>(&self, items: &'a [T]) -> (&'a [T], &'a [T]) {
        let overflow = self.overflow_count.min(items.len());
        items.split_at(items.len() - overflow)
    }

    /// The grid part of `items` chunked into rows of `items_per_row`.
    pub fn grid_rows<'a, T>(&self, items: &'a [T]) -> Vec<&'a [T]> {
        let (grid, _) = self.split(items);
        if self.items_per_row == 0 {
            return Vec::new();
        }
        grid.chunks(self.items_per_row).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_serde_validates() {
        let json = serde_json::to_string(&GridMetrics::default()).unwrap();
        assert_eq!(
            json,
            r#"{"horizontal_padding":16.0,"item_width":102.0,"item_spacing":0.0}"#
        );
        assert_eq!(
            serde_json::from_str::<GridMetrics>(&json).unwrap(),
            GridMetrics::default()
        );

        let bad = [
            r#"{"horizontal_padding":-5.0,"item_width":-102.0,"item_spacing":-1.0}"#,
            r#"{"horizontal_padding":16.0,"item_width":0.0,"item_spacing":0.0}"#,
            r#"{"horizontal_padding":16.0,"item_width":102.0,"item_spacing":-1.0}"#,
        ];
        for json in bad {
            assert!(serde_json::from_str::<GridMetrics>(json).is_err(), "{json}");
        }
    }

    #[test]
    fn test_phone_width() {
        let metrics = GridMetrics::default();
        assert_eq!(metrics.items_per_row(430.0, 7), 3);

        let plan = metrics.plan(430.0, 7);
        assert_eq!(plan.items_per_row, 3);
        assert_eq!(plan.overflow_count, 1);
        assert_eq!(plan.full_rows(), 2);
        assert!(!plan.is_degenerate());
    }

    #[test]
    fn test_zero_width_overflows_everything() {
        let plan = GridMetrics::default().plan(0.0, 7);
        assert_eq!(plan.items_per_row, 0);
        assert_eq!(plan.overflow_count, 7);
        assert!(plan.is_degenerate());
        assert_eq!(plan.full_rows(), 0);
    }

    #[test]
    fn test_narrower_than_one_item() {
        // 32 of padding leaves 100, short of a 102 button.
        let plan = GridMetrics::default().plan(132.0, 7);
        assert_eq!(plan.overflow_count, 7);

        let plan = GridMetrics::default().plan(134.0, 7);
        assert_eq!(plan.items_per_row, 1);
        assert_eq!(plan.overflow_count, 0);
    }

    #[test]
    fn test_non_finite_width_is_degenerate() {
        let metrics = GridMetrics::default();
        assert_eq!(metrics.plan(f64::NAN, 7).overflow_count, 7);
        assert_eq!(metrics.plan(-50.0, 7).overflow_count, 7);
        assert_eq!(metrics.plan(f64::INFINITY, 7).overflow_count, 7);
    }

    #[test]
    fn test_spacing_added_back_for_multiple_items() {
        let metrics = GridMetrics::new(1.0, 12.0, 1.0).unwrap();
        // usable = 40 - 2 + 1 = 39, stride 13
        assert_eq!(metrics.items_per_row(40.0, 7), 3);
        // single item: usable = 38, stride 13
        assert_eq!(metrics.items_per_row(40.0, 1), 2);
    }

    #[test]
    fn test_everything_fits_on_one_row() {
        let metrics = GridMetrics::new(1.0, 12.0, 1.0).unwrap();
        let plan = metrics.plan(200.0, 7);
        assert_eq!(plan.items_per_row, 15);
        // Fewer items than a row holds: they all go to the centered row.
        assert_eq!(plan.overflow_count, 7);
        assert_eq!(plan.grid_count(), 0);
    }

    #[test]
    fn test_exact_rows_have_no_overflow() {
        let metrics = GridMetrics::new(0.0, 10.0, 0.0).unwrap();
        let plan = metrics.plan(35.0, 6);
        assert_eq!(plan.items_per_row, 3);
        assert_eq!(plan.overflow_count, 0);
        assert_eq!(plan.full_rows(), 2);
    }

    #[test]
    fn test_zero_items() {
        let plan = GridMetrics::default().plan(430.0, 0);
        assert_eq!(plan.overflow_count, 0);
        assert_eq!(plan.grid_count(), 0);
    }

    #[test]
    fn test_idempotent() {
        let metrics = GridMetrics::default();
        for width in [0.0, 133.5, 320.0, 430.0, 1024.0] {
            assert_eq!(metrics.plan(width, 7), metrics.plan(width, 7));
        }
        assert_eq!(plan_layout(430.0, &metrics, 7), metrics.plan(430.0, 7));
    }

    #[test]
    fn test_split_preserves_order() {
        let items = [1, 2, 3, 4, 5, 6, 7];
        let plan = GridMetrics::default().plan(430.0, items.len());
        let (grid, trailing) = plan.split(&items);
        assert_eq!(grid, &[1, 2, 3, 4, 5, 6]);
        assert_eq!(trailing, &[7]);

        let rows = plan.grid_rows(&items);
        assert_eq!(rows, vec![&[1, 2, 3][..], &[4, 5, 6][..]]);
    }

    #[test]
    fn test_split_caps_overflow() {
        let plan = LayoutPlan {
            item_count: 7,
            items_per_row: 0,
            overflow_count: 7,
        };
        let items = [1, 2, 3];
        let (grid, trailing) = plan.split(&items);
        assert!(grid.is_empty());
        assert_eq!(trailing, &[1, 2, 3]);
        assert!(plan.grid_rows(&items).is_empty());
    }

    #[test]
    fn test_invalid_metrics() {
        assert_eq!(
            GridMetrics::new(16.0, 0.0, 0.0),
            Err(LayoutError::NonPositiveItemWidth(0.0))
        );
        assert_eq!(
            GridMetrics::new(-1.0, 10.0, 0.0),
            Err(LayoutError::NegativePadding(-1.0))
        );
        assert_eq!(
            GridMetrics::new(0.0, 10.0, -2.0),
            Err(LayoutError::NegativeSpacing(-2.0))
        );
        assert!(matches!(
            GridMetrics::new(f64::NAN, 10.0, 0.0),
            Err(LayoutError::NonFinite(_))
        ));
    }
}
