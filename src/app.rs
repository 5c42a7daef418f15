use leptos::*;

use crate::{
    application::{AnalysisService, AnalysisSnapshot},
    domain::{
        chart::TableRow,
        errors::AppError,
        logging::LogComponent,
    },
    global_state::globals,
    infrastructure::rendering::LineChartRenderer,
};
use crate::{log_error, log_warn};

const CHART_WIDTH: u32 = 800;
const CHART_HEIGHT: u32 = 400;
const DEFAULT_SYMBOL: &str = "AAPL";

/// Draw all four charts for a finished snapshot
fn render_charts(snapshot: &AnalysisSnapshot) -> Result<(), wasm_bindgen::JsValue> {
    let renderer = LineChartRenderer::new(CHART_WIDTH, CHART_HEIGHT);
    for payload in snapshot.chart_payloads() {
        renderer.render(payload)?;
    }
    Ok(())
}

/// One submission: validate, generate, derive, render.
///
/// Submissions are serialized - a click while a run is in flight is ignored,
/// and the snapshot is complete before any signal or canvas changes.
fn run_prediction(
    raw_symbol: String,
    set_rows: WriteSignal<Vec<TableRow>>,
    set_has_data: WriteSignal<bool>,
) {
    let g = globals();
    if g.is_loading.get_untracked() {
        log_warn!(
            LogComponent::Presentation("App"),
            "Submission ignored: a run is already in flight"
        );
        return;
    }

    g.error_message.set(None);
    g.is_loading.set(true);

    match AnalysisService::new().analyze(&raw_symbol) {
        Ok(snapshot) => {
            g.current_symbol.set(snapshot.symbol.value().to_string());
            set_rows.set(snapshot.table_rows.clone());
            set_has_data.set(true);

            if let Err(e) = render_charts(&snapshot) {
                log_error!(LogComponent::Presentation("App"), "❌ Chart rendering failed: {:?}", e);
                set_has_data.set(false);
                g.error_message
                    .set(Some("Failed to process stock data. Please try again.".to_string()));
            }
        }
        Err(AppError::Validation(msg)) => {
            g.error_message.set(Some(msg));
        }
        Err(err) => {
            log_error!(LogComponent::Presentation("App"), "❌ Analysis failed: {}", err);
            g.error_message
                .set(Some("Failed to process stock data. Please try again.".to_string()));
        }
    }

    g.is_loading.set(false);
}

/// 📈 Stock Market Predictor main component
#[component]
pub fn App() -> impl IntoView {
    let (rows, set_rows) = create_signal(Vec::<TableRow>::new());
    let (has_data, set_has_data) = create_signal(false);
    let input_value = create_rw_signal(DEFAULT_SYMBOL.to_string());
    let g = globals();

    let submit = move || run_prediction(input_value.get_untracked(), set_rows, set_has_data);

    // The original page loads a default symbol on startup; defer one tick so
    // the canvases are mounted before the first render.
    spawn_local(async move {
        run_prediction(DEFAULT_SYMBOL.to_string(), set_rows, set_has_data);
    });

    view! {
        <style>
            {r#"
            .predictor-app {
                font-family: 'Segoe UI', -apple-system, sans-serif;
                max-width: 900px;
                margin: 0 auto;
                padding: 20px;
                color: #222;
            }

            .header {
                text-align: center;
                margin-bottom: 20px;
            }

            .search-box {
                display: flex;
                justify-content: center;
                gap: 10px;
                margin-bottom: 20px;
            }

            .search-box input {
                padding: 10px 14px;
                font-size: 15px;
                border: 1px solid #bbb;
                border-radius: 6px;
                width: 280px;
            }

            .search-box button {
                padding: 10px 22px;
                font-size: 15px;
                border: none;
                border-radius: 6px;
                background: #2196F3;
                color: white;
                cursor: pointer;
            }

            .banner {
                text-align: center;
                padding: 12px;
                border-radius: 6px;
                margin-bottom: 16px;
            }

            .banner.loading { background: #e3f2fd; color: #1565c0; }
            .banner.error { background: #ffebee; color: #c62828; }

            .data-table {
                width: 100%;
                border-collapse: collapse;
                margin-bottom: 24px;
            }

            .data-table th, .data-table td {
                border: 1px solid #ddd;
                padding: 8px 10px;
                text-align: right;
            }

            .data-table th { background: #f5f5f5; }
            .data-table td:first-child, .data-table th:first-child { text-align: left; }

            .chart-block { margin-bottom: 28px; }
            .chart-block canvas {
                width: 100%;
                border: 1px solid #e0e0e0;
                border-radius: 6px;
            }
            "#}
        </style>
        <div class="predictor-app">
            <div class="header">
                <h1>"📈 Stock Market Predictor"</h1>
                <p>"Synthetic price history, moving averages and a mock prediction - demo data only"</p>
            </div>

            <div class="search-box">
                <input
                    id="stockSymbol"
                    type="text"
                    placeholder="Enter stock symbol (e.g. AAPL, TCS)"
                    prop:value=input_value
                    on:input=move |ev| input_value.set(event_target_value(&ev))
                    on:keydown=move |ev: ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            submit();
                        }
                    }
                />
                <button on:click=move |_| submit()>"Predict"</button>
            </div>

            <div
                class="banner loading"
                style:display=move || if g.is_loading.get() { "block" } else { "none" }
            >
                "Loading stock data..."
            </div>
            <div
                class="banner error"
                style:display=move || {
                    if g.error_message.get().is_some() { "block" } else { "none" }
                }
            >
                {move || g.error_message.get().unwrap_or_default()}
            </div>

            <div style:display=move || if has_data.get() { "block" } else { "none" }>
                <h2>{move || format!("Recent Data - {}", g.current_symbol.get())}</h2>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Date"</th>
                            <th>"Open"</th>
                            <th>"High"</th>
                            <th>"Low"</th>
                            <th>"Close"</th>
                            <th>"Volume"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || rows.get()
                            key=|row| row.date.clone()
                            children=move |row| {
                                view! {
                                    <tr>
                                        <td>{row.date}</td>
                                        <td>{row.open}</td>
                                        <td>{row.high}</td>
                                        <td>{row.low}</td>
                                        <td>{row.close}</td>
                                        <td>{row.volume}</td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>

                <div class="chart-block">
                    <h3>"Price vs MA50"</h3>
                    <canvas id="ma50Chart" width="800" height="400"></canvas>
                </div>
                <div class="chart-block">
                    <h3>"Price vs MA50 vs MA100"</h3>
                    <canvas id="ma100Chart" width="800" height="400"></canvas>
                </div>
                <div class="chart-block">
                    <h3>"Price vs MA100 vs MA200"</h3>
                    <canvas id="ma200Chart" width="800" height="400"></canvas>
                </div>
                <div class="chart-block">
                    <h3>"Actual vs Predicted (last 300 days)"</h3>
                    <canvas id="predictionChart" width="800" height="400"></canvas>
                </div>
            </div>
        </div>
    }
}
