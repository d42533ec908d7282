// src/application/ports/mod.rs
pub mod mapper;
pub mod time;

// Type aliases to make port injection sites more descriptive and reduce `dyn` noise
pub type ArticleMapperPort = dyn mapper::ArticleMapper;
pub type ClockPort = dyn time::Clock;
