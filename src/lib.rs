//! Serverless function that breaks a youth-activity topic or game method
//! into its building blocks by proxying to the Gemini API.

pub mod config;
pub mod handler;
pub mod http;
pub mod models;
pub mod prompts;
pub mod tools;
pub mod utils;
