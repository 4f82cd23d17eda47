pub mod chart_service;
pub mod clock;
pub mod market_hours;
pub mod quote_service;
pub mod synthesizer;
