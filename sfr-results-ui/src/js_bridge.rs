//! Typed wrappers around Plotly interop via `js_sys::eval()`.
//!
//! Plotly is loaded from its CDN at runtime and exposed as `window.Plotly`.
//! Chart data arrives from the results service already in Plotly's
//! `{data, layout}` shape, so the wrappers only splice serialized JSON into
//! small polling snippets.

use sfr_results::CombinedPlotData;

/// Plotly build injected by [`init_plotting`].
pub const PLOTLY_CDN_URL: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('SFR JS call failed:', e); }}",
        code
    );
    if let Err(e) = js_sys::eval(&wrapped) {
        log::warn!("JS eval failed: {:?}", e);
    }
}

/// Inject the Plotly script tag once. Safe to call repeatedly.
pub fn init_plotting() {
    call_js(&format!(
        r#"
        if (typeof window.Plotly === 'undefined' && !document.getElementById('sfr-plotly')) {{
            var script = document.createElement('script');
            script.id = 'sfr-plotly';
            script.src = '{PLOTLY_CDN_URL}';
            document.head.appendChild(script);
        }}
        "#,
    ));
}

/// Render (or re-render) the combined forecast chart into `container_id`.
///
/// Polls until Plotly has loaded and the container exists. JSON is a valid JS
/// expression, so the serialized data is spliced in without string escaping.
pub fn render_plot(container_id: &str, chart: &CombinedPlotData) {
    let data_json = match serde_json::to_string(&chart.data) {
        Ok(json) => json,
        Err(e) => {
            log::error!("Failed to serialize chart data: {}", e);
            return;
        }
    };
    let layout_json = if chart.layout.is_null() {
        "{}".to_string()
    } else {
        serde_json::to_string(&chart.layout).unwrap_or_else(|_| "{}".to_string())
    };

    log::info!(
        "Rendering combined plot with {} series into #{}",
        chart.data.len(),
        container_id
    );
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (typeof window.Plotly !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.Plotly.react('{container_id}', {data_json}, {layout_json}, {{responsive: true}});
                    }} catch(e) {{ console.error('[SFR] Plotly.react error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Destroy/clean up a chart in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "var el = document.getElementById('{id}'); \
         if (el) {{ if (window.Plotly) {{ window.Plotly.purge(el); }} el.innerHTML = ''; }}",
        id = container_id
    ));
}
