/// Sequential generate / transform / report loop.
pub mod runner;
