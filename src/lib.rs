//! Data core for a Gapminder-style animated bubble chart: loads the three
//! wide indicator tables (population, life expectancy, GNI per capita),
//! normalizes them, and produces one tidy dataset for the interactive shell.

pub mod dataset;
pub mod parse;
pub mod table;
