pub mod recipe;
pub mod source;
pub mod weather_forecast;

/// Longest `name` accepted for sources and recipes.
pub const MAX_NAME_LENGTH: usize = 255;
