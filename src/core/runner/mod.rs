mod runner;


pub use runner::{CategoryOutcome, CategoryReport, RunReport, Runner, SkippedCard};
