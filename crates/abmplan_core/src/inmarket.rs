//! In-market rate derivation.
//!
//! Converts a point-in-time buying rate (e.g. "5% of accounts are in an
//! active evaluation right now") into the cumulative share of a target list
//! expected to enter at least one buying cycle during the programme's
//! influence window. The composition is a standard survival/hazard model: a
//! monthly hazard is derived from the point-in-time rate and the buying
//! window, and the cumulative share is the complement of "never entering the
//! market in any month of the window".

use crate::numeric::clamp_unit;

/// Policy ceiling applied to *displayed* auto-derived shares.
///
/// The raw derived share can legitimately exceed this for long programmes;
/// the boundary layer caps what it shows at 70% so the estimator stays on
/// the conservative side. The cap is presentation policy, not math — the
/// pipeline itself always consumes the rate the caller configured.
pub const AUTO_SHARE_CEILING: f64 = 0.70;

/// Ceiling on the monthly hazard rate. A hazard of 1.0 would mean every
/// account enters the market every month, which degenerates the survival
/// composition.
const MAX_MONTHLY_HAZARD: f64 = 0.99;

/// Derive the cumulative in-market share over the programme window.
///
/// * `duration_months` / `ramp_months` — programme length and ramp-up; only
///   the post-ramp window (`duration - ramp`) influences accounts.
/// * `buying_window_months` — typical length of one buying evaluation,
///   floored to one month.
/// * `point_in_time_share` — fraction of the list in-market at any instant,
///   as a decimal in `[0, 1]`.
///
/// Returns a share in `[0, 1]`. A window of zero months (ramp consumes the
/// whole programme) or a zero point-in-time share yields `0.0`.
#[inline]
#[must_use]
pub fn derive_in_market_share(
    duration_months: f64,
    ramp_months: f64,
    buying_window_months: f64,
    point_in_time_share: f64,
) -> f64 {
    let window_months = (duration_months - ramp_months).max(0.0);
    if window_months <= 0.0 {
        return 0.0;
    }

    let buying_window = buying_window_months.max(1.0);
    let monthly_hazard = (point_in_time_share / buying_window).min(MAX_MONTHLY_HAZARD);
    if monthly_hazard <= 0.0 {
        return 0.0;
    }

    clamp_unit(1.0 - (1.0 - monthly_hazard).powf(window_months))
}

/// Apply the display-policy ceiling to a derived share.
///
/// Kept separate from [`derive_in_market_share`] so callers that need the
/// raw figure (e.g. for sensitivity ranges) are not lossily capped.
#[inline]
#[must_use]
pub fn capped_share(derived_share: f64) -> f64 {
    clamp_unit(derived_share).min(AUTO_SHARE_CEILING)
}
