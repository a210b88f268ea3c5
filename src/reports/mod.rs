//! Reports module for BudgeIt

pub mod forecast;

pub use forecast::{DebtForecast, ForecastReport, SavingsForecast, ScheduleRow};
