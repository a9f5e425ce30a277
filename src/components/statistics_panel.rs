//! Preorder Statistics Panel

use leptos::prelude::*;

use crate::format::{format_amount, format_eta, text_cell};
use crate::models::{DeliveryStatus, Statistics};

/// Label and display value of each summary card
pub fn stat_cards(stats: &Statistics) -> Vec<(&'static str, String)> {
    let rupees = |value: f64| format!("₹{}", format_amount(value));
    vec![
        ("Total Preorders", stats.total_preorders.to_string()),
        ("Total Value", rupees(stats.total_value)),
        ("PO Amount", rupees(stats.total_po_amount)),
        ("On Arrival", rupees(stats.total_on_arrival)),
        ("Payment Done", rupees(stats.payment_done)),
        ("Payment Remaining", rupees(stats.payment_remaining)),
    ]
}

#[component]
pub fn StatisticsPanel(#[prop(into)] statistics: Signal<Statistics>) -> impl IntoView {
    view! {
        <div class="stats-grid">
            {move || statistics
                .with(stat_cards)
                .into_iter()
                .map(|(label, value)| view! {
                    <div class="stat-card">
                        <div class="stat-value">{value}</div>
                        <div class="stat-label">{label}</div>
                    </div>
                })
                .collect_view()}
        </div>

        {move || {
            let breakdown = statistics.with(|s| s.status_breakdown.clone());
            (!breakdown.is_empty()).then(|| view! {
                <div class="status-breakdown">
                    <h3>"By Status"</h3>
                    {breakdown
                        .into_iter()
                        .map(|(status, count)| {
                            let class = format!("status-badge {}", DeliveryStatus::from_label(&status).css_class());
                            view! { <span class=class>{status} ": " {count}</span> }
                        })
                        .collect_view()}
                </div>
            })
        }}

        {move || {
            let arrivals = statistics.with(|s| s.upcoming_arrivals.clone());
            (!arrivals.is_empty()).then(|| view! {
                <div class="upcoming-arrivals">
                    <h3>"Upcoming Arrivals"</h3>
                    <ul>
                        {arrivals
                            .into_iter()
                            .map(|arrival| {
                                let status = arrival.status.clone().unwrap_or_default();
                                let class = format!("status-badge {}", DeliveryStatus::from_label(&status).css_class());
                                view! {
                                    <li>
                                        <span class="arrival-serial">"#" {text_cell(arrival.serial.as_deref())}</span>
                                        <span class="arrival-models">{text_cell(arrival.models.as_deref())}</span>
                                        <span class="arrival-eta">{format_eta(arrival.eta.as_deref())}</span>
                                        <span class="arrival-seller">{text_cell(arrival.seller.as_deref())}</span>
                                        <span class=class>{text_cell(arrival.status.as_deref())}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
            })
        }}
    }
}
