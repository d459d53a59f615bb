#[path = "helpers/mod.rs"]
mod helpers;

#[path = "ide/mod.rs"]
mod ide;

#[path = "parser/mod.rs"]
mod parser;

#[path = "prototype/mod.rs"]
mod prototype;
