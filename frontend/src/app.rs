use crate::components::forecast::ForecastTable;
use common::model::weather_forecast::WeatherForecast;
use gloo_net::http::Request;
use yew::platform::spawn_local;
use yew::{html, Component, Context, Html};

const FORECAST_URL: &str = "/weatherforecast";

pub enum Msg {
    ForecastLoaded(Vec<WeatherForecast>),
    ForecastFailed(String),
}

/// Application shell: the page header and the demo forecast.
pub struct App {
    forecasts: Vec<WeatherForecast>,
    error: Option<String>,
    loading: bool,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            forecasts: Vec::new(),
            error: None,
            loading: true,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        self.loading = false;
        match msg {
            Msg::ForecastLoaded(forecasts) => {
                self.forecasts = forecasts;
                self.error = None;
            }
            Msg::ForecastFailed(reason) => {
                gloo_console::error!(format!("Loading forecast failed: {reason}"));
                self.error = Some(reason);
            }
        }
        true
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let body = match (&self.error, self.loading) {
            (Some(reason), _) => html! {
                <p class="error">{ format!("Could not load the forecast: {reason}") }</p>
            },
            (None, true) => html! { <p class="loading">{"Loading forecast..."}</p> },
            (None, false) => html! { <ForecastTable forecasts={self.forecasts.clone()} /> },
        };

        html! {
            <main class="responsive">
                <header>
                    <h1>{"Ice Cream Recipes"}</h1>
                </header>
                { body }
            </main>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if !first_render {
            return;
        }

        let link = ctx.link().clone();
        spawn_local(async move {
            let msg = match Request::get(FORECAST_URL).send().await {
                Ok(resp) if resp.ok() => match resp.json::<Vec<WeatherForecast>>().await {
                    Ok(forecasts) => Msg::ForecastLoaded(forecasts),
                    Err(e) => Msg::ForecastFailed(e.to_string()),
                },
                Ok(resp) => Msg::ForecastFailed(format!("HTTP {}", resp.status())),
                Err(e) => Msg::ForecastFailed(e.to_string()),
            };
            link.send_message(msg);
        });
    }
}
