/*!
This crate contains the domain logic behind the exo dashboard: the simulated prediction, batch prediction and training runs, the static analytics series, and the copy shown on the landing pages.
*/

pub mod analytics;
pub mod batch;
pub mod content;
pub mod model;
pub mod predict;
pub mod simulation;
pub mod train;
