pub mod chart;
pub mod compare;
pub mod forecast;
pub mod kpi;
pub mod preview;
pub mod util;
pub mod validate;
