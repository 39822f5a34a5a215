#[allow(non_snake_case)]
pub mod Examples;
#[allow(non_snake_case)]
pub mod Game;
#[allow(non_snake_case)]
pub mod Stoichiometry;
#[allow(non_snake_case)]
pub mod Utils;
pub mod cli;
pub mod settings;
