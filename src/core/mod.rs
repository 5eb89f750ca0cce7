pub mod export;
pub mod generator;
pub mod normalize;
pub mod runner;
pub mod sections;
pub mod template;
