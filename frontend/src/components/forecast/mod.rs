//! Read-only table of the demo weather forecast.

use common::model::weather_forecast::WeatherForecast;
use yew::{html, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct ForecastTableProps {
    pub forecasts: Vec<WeatherForecast>,
}

pub struct ForecastTable;

impl Component for ForecastTable {
    type Message = ();
    type Properties = ForecastTableProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ForecastTable
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let forecasts = &ctx.props().forecasts;
        if forecasts.is_empty() {
            return html! { <p class="empty">{"No forecast available."}</p> };
        }

        html! {
            <table class="forecast">
                <thead>
                    <tr>
                        <th>{"Date"}</th>
                        <th>{"Temp. (C)"}</th>
                        <th>{"Temp. (F)"}</th>
                        <th>{"Summary"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for forecasts.iter().map(|f| html! {
                        <tr key={f.date().to_string()}>
                            <td>{ f.date().to_string() }</td>
                            <td>{ f.temperature_c() }</td>
                            <td>{ f.temperature_f() }</td>
                            <td>{ f.summary() }</td>
                        </tr>
                    }) }
                </tbody>
            </table>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use yew::ServerRenderer;

    #[tokio::test]
    async fn renders_one_row_per_forecast() {
        let html = ServerRenderer::<ForecastTable>::with_props(|| ForecastTableProps {
            forecasts: vec![
                WeatherForecast::new(NaiveDate::from_ymd_opt(2026, 10, 20).unwrap(), 10, "Cool"),
                WeatherForecast::new(
                    NaiveDate::from_ymd_opt(2026, 10, 21).unwrap(),
                    45,
                    "Scorching",
                ),
            ],
        })
        .hydratable(false)
        .render()
        .await;

        assert_eq!(html.matches("<tr").count(), 3);
        assert!(html.contains("2026-10-20"));
        assert!(html.contains("Scorching"));
        assert!(html.contains("113"));
    }

    #[tokio::test]
    async fn empty_forecast_shows_placeholder() {
        let html = ServerRenderer::<ForecastTable>::with_props(|| ForecastTableProps {
            forecasts: Vec::new(),
        })
        .hydratable(false)
        .render()
        .await;

        assert!(html.contains("No forecast available."));
    }
}
