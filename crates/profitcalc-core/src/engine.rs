//! Calculation engine.
//!
//! A single pure function from [`Inputs`] to [`Outputs`]. There is no
//! validation here: callers constrain inputs at the boundary.

use crate::model::{Inputs, Outputs};

/// Compute standard and campaign-adjusted results for one listing.
///
/// Total over every `Inputs` value. Margins are `0` whenever the
/// corresponding gross revenue is not strictly positive.
///
/// The adjusted commission is charged on the price net of the whole
/// discount, while adjusted gross revenue only loses the seller-funded
/// share. Both are reproduced as the marketplace reports them.
#[must_use]
pub fn compute(inputs: &Inputs) -> Outputs {
    let Inputs {
        sale_price,
        quantity,
        commission_rate,
        shipping_cost_paid_by_seller,
        cogs,
        expenses,
        campaign_participation,
        campaign_discount_rate,
        platform_coverage_rate,
    } = *inputs;

    let list_revenue = sale_price * quantity;
    let operating_costs = shipping_cost_paid_by_seller + expenses;

    // Standard sale
    let gross_revenue = list_revenue;
    let commission_fee = list_revenue * commission_rate;
    let net_revenue_after_commission = gross_revenue - commission_fee;
    let net_revenue_after_costs = net_revenue_after_commission - operating_costs;
    let profit = net_revenue_after_costs - cogs;
    let profit_margin = margin(profit, gross_revenue);

    // Campaign-adjusted sale
    let discount_amount = if campaign_participation {
        list_revenue * campaign_discount_rate
    } else {
        0.0
    };
    let seller_funded_discount = discount_amount * (1.0 - platform_coverage_rate);
    let platform_funded_discount = discount_amount * platform_coverage_rate;
    let adjusted_gross_revenue = list_revenue - seller_funded_discount;
    let adjusted_commission_fee = (list_revenue - discount_amount) * commission_rate;
    let adjusted_net_revenue_after_commission = adjusted_gross_revenue - adjusted_commission_fee;
    let adjusted_net_revenue_after_costs = adjusted_net_revenue_after_commission - operating_costs;
    let adjusted_profit = adjusted_net_revenue_after_costs - cogs;
    let adjusted_profit_margin = margin(adjusted_profit, adjusted_gross_revenue);

    Outputs {
        gross_revenue,
        commission_fee,
        net_revenue_after_commission,
        net_revenue_after_costs,
        profit,
        profit_margin,
        discount_amount,
        seller_funded_discount,
        platform_funded_discount,
        adjusted_gross_revenue,
        adjusted_commission_fee,
        adjusted_net_revenue_after_commission,
        adjusted_net_revenue_after_costs,
        adjusted_profit,
        adjusted_profit_margin,
    }
}

#[inline]
fn margin(profit: f64, revenue: f64) -> f64 {
    if revenue > 0.0 {
        profit / revenue
    } else {
        0.0
    }
}
