pub mod cli;
pub mod conf;
pub mod ir;
pub mod logging;
pub mod render;
