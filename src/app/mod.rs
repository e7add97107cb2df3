// Application layer: the generate and validate commands, wired from ports to adapters.

pub mod commands;
