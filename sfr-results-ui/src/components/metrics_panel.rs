//! Evaluation metrics and evaluation image.

use dioxus::prelude::*;
use sfr_results::view::MetricsView;

#[derive(Props, Clone, PartialEq)]
pub struct MetricsPanelProps {
    pub metrics: MetricsView,
    /// Actual vs. predicted image source
    #[props(default = String::new())]
    pub evaluation_image: String,
}

#[component]
pub fn MetricsPanel(props: MetricsPanelProps) -> Element {
    let metrics = props.metrics;

    rsx! {
        div {
            style: "display: flex; flex-wrap: wrap; gap: 16px; align-items: flex-start; margin: 8px 0;",
            div {
                style: "display: flex; gap: 12px;",
                MetricCard { label: "RMSE".to_string(), value: metrics.rmse.clone() }
                MetricCard { label: "MAPE".to_string(), value: metrics.mape.clone() }
                if let Some(horizon) = metrics.horizon.clone() {
                    MetricCard { label: "Horizon".to_string(), value: horizon }
                }
            }
            if !props.evaluation_image.is_empty() {
                img {
                    src: "{props.evaluation_image}",
                    alt: "Actual vs. predicted prices",
                    style: "max-width: 480px; width: 100%; border: 1px solid #E0E0E0; border-radius: 4px;",
                }
            }
        }
    }
}

#[component]
fn MetricCard(label: String, value: String) -> Element {
    rsx! {
        div {
            style: "padding: 12px 16px; min-width: 100px; background: #F5F5F5; border-radius: 6px;",
            div { style: "font-size: 12px; color: #666;", "{label}" }
            div { style: "font-size: 22px; font-weight: bold;", "{value}" }
        }
    }
}
