//! Application services - Use case implementations

mod forecast_formatter;
mod location_resolver;
mod response_selector;
mod weather_handler;

pub use forecast_formatter::format_forecast;
pub use location_resolver::LocationResolver;
pub use response_selector::select_lines;
pub use weather_handler::WeatherHandler;
