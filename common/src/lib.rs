//! Types shared by the backend and the frontend: the recipe catalog model,
//! the weather forecast demo record and the validation engine applied to
//! catalog entities.

pub mod model;
pub mod validation;
