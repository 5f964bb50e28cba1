pub mod controls;
pub mod dashboard;
pub mod payload_scatter;
pub mod success_pie;
