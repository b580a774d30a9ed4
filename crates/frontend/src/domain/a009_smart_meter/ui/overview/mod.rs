//! Smart meter overview: four metrics fetched in parallel, each card with
//! its own loading flag, plus the CSV import.

use std::collections::HashMap;

use contracts::domain::a009_smart_meter::{
    eigenverbrauchsquote, MeterLoadState, MeterMetric, MeterSeries,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::upload::SmartMeterUpload;
use crate::domain::a009_smart_meter::api;
use crate::shared::components::page_header::PageHeader;
use crate::shared::format::{format_datetime, format_number};
use crate::shared::icons::icon;
use crate::shared::submit::handle_auth_error;
use crate::system::auth::context::use_auth;

const SPARK_WIDTH: f64 = 240.0;
const SPARK_HEIGHT: f64 = 48.0;

/// SVG polyline points scaled into the sparkline box
fn sparkline_points(values: &[f64], width: f64, height: f64) -> String {
    if values.is_empty() {
        return String::new();
    }
    let max = values.iter().copied().fold(f64::MIN, f64::max);
    let min = values.iter().copied().fold(f64::MAX, f64::min);
    let range = if (max - min).abs() < f64::EPSILON { 1.0 } else { max - min };
    let step = if values.len() > 1 {
        width / (values.len() - 1) as f64
    } else {
        0.0
    };
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let x = i as f64 * step;
            let y = height - (v - min) / range * height;
            format!("{:.1},{:.1}", x, y)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_value(metric: MeterMetric, value: f64) -> String {
    format!("{} {}", format_number(value, 2), metric.unit())
}

#[component]
pub fn SmartMeterPage() -> impl IntoView {
    let auth = use_auth();
    let Some(user) = auth.user() else {
        return ().into_any();
    };
    let Some(haushalt_id) = user.haushalt_id else {
        return view! {
            <div class="page">
                <PageHeader title="Smart Meter">{()}</PageHeader>
                <div class="alert alert--error">"Ihrem Konto ist kein Haushalt zugeordnet."</div>
            </div>
        }
        .into_any();
    };

    let series: RwSignal<HashMap<MeterMetric, MeterSeries>> = RwSignal::new(HashMap::new());
    let errors: RwSignal<HashMap<MeterMetric, String>> = RwSignal::new(HashMap::new());
    let load_state = RwSignal::new(MeterLoadState::started());

    let load = move || {
        load_state.set(MeterLoadState::started());
        errors.set(HashMap::new());
        for metric in MeterMetric::all() {
            let client = auth.client();
            spawn_local(async move {
                match api::fetch_metric(&client, haushalt_id, metric).await {
                    Ok(s) => series.update(|m| {
                        m.insert(metric, s);
                    }),
                    Err(e) => {
                        if let Some(e) = handle_auth_error(auth, e) {
                            log::warn!("metric {} failed: {}", metric.slug(), e);
                            errors.update(|m| {
                                m.insert(metric, e.to_string());
                            });
                        }
                    }
                }
                load_state.update(|s| s.finish(metric));
            });
        }
    };
    load();

    let quote = Memo::new(move |_| {
        series.with(|m| {
            match (m.get(&MeterMetric::Erzeugung), m.get(&MeterMetric::Einspeisung)) {
                (Some(erzeugung), Some(einspeisung)) => eigenverbrauchsquote(erzeugung, einspeisung),
                _ => None,
            }
        })
    });

    view! {
        <div class="page">
            <PageHeader title="Smart Meter" subtitle="Verbrauch, Erzeugung und Kosten Ihres Haushalts">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| load()
                    disabled=Signal::derive(move || load_state.with(|s| s.any_loading()))
                >
                    {icon("refresh")}
                    " Aktualisieren"
                </Button>
            </PageHeader>
            <div class="page__content">
                <Show when=move || load_state.with(|s| s.any_loading())>
                    <div class="loading"><Spinner /></div>
                </Show>
                <div class="meter-grid">
                    {MeterMetric::all()
                        .into_iter()
                        .map(|metric| view! {
                            <MetricCard
                                metric=metric
                                series=Signal::derive(move || series.with(|m| m.get(&metric).cloned()))
                                loading=Signal::derive(move || load_state.with(|s| s.is_loading(metric)))
                                error=Signal::derive(move || errors.with(|m| m.get(&metric).cloned()))
                            />
                        })
                        .collect_view()}
                </div>
                {move || quote.get().map(|q| view! {
                    <div class="summary-bar">
                        "Eigenverbrauchsquote: "
                        <strong>{format!("{} %", format_number(q, 1))}</strong>
                    </div>
                })}
                <SmartMeterUpload user_id=user.id.clone() on_uploaded=Callback::new(move |_| load()) />
            </div>
        </div>
    }
    .into_any()
}

#[component]
fn MetricCard(
    metric: MeterMetric,
    series: Signal<Option<MeterSeries>>,
    loading: Signal<bool>,
    error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="card meter-card">
            <h3 class="card__title">{metric.label()}</h3>
            {move || {
                if loading.get() {
                    return view! { <Spinner /> }.into_any();
                }
                if let Some(e) = error.get() {
                    return view! { <div class="alert alert--error">{e}</div> }.into_any();
                }
                match series.get() {
                    Some(s) if !s.punkte.is_empty() => {
                        let values: Vec<f64> = s.punkte.iter().map(|p| p.wert).collect();
                        let peak = s
                            .peak()
                            .map(|p| format!("Spitze {} am {}", format_value(metric, p.wert), format_datetime(&p.zeitpunkt)))
                            .unwrap_or_default();
                        view! {
                            <div class="meter-card__total">{format_value(metric, s.total())}</div>
                            <svg
                                class="meter-card__spark"
                                width=SPARK_WIDTH.to_string()
                                height=SPARK_HEIGHT.to_string()
                                viewBox=format!("0 0 {} {}", SPARK_WIDTH, SPARK_HEIGHT)
                            >
                                <polyline
                                    fill="none"
                                    stroke="currentColor"
                                    stroke-width="1.5"
                                    points=sparkline_points(&values, SPARK_WIDTH, SPARK_HEIGHT)
                                />
                            </svg>
                            <div class="meter-card__peak">{peak}</div>
                        }
                        .into_any()
                    }
                    _ => view! { <p class="text-muted">"Keine Messwerte vorhanden."</p> }.into_any(),
                }
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sparkline_spans_the_box() {
        let points = sparkline_points(&[0.0, 5.0, 10.0], 100.0, 10.0);
        assert_eq!(points, "0.0,10.0 50.0,5.0 100.0,0.0");
    }

    #[test]
    fn test_sparkline_flat_and_empty() {
        assert_eq!(sparkline_points(&[], 100.0, 10.0), "");
        assert_eq!(sparkline_points(&[3.0, 3.0], 100.0, 10.0), "0.0,10.0 100.0,10.0");
    }

    #[test]
    fn test_format_value_uses_metric_unit() {
        assert!(format_value(MeterMetric::Kosten, 12.5).ends_with(" €"));
        assert!(format_value(MeterMetric::Verbrauch, 12.5).ends_with(" kWh"));
    }
}
