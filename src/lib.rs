pub mod cliopt;
pub mod error;
pub mod input;
pub mod output;
pub mod pipeline;
