pub mod city;
pub mod hourly_variable;
pub mod season;
pub mod units;
pub mod weather_category;
