mod server;

pub use server::{check, serve};
